// Reveal-on-scroll wrapper

use leptos::html;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::Closure;
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// Share of the element that must be visible before it fades in.
const VISIBLE_THRESHOLD: f64 = 0.1;

/// Side the content slides in from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Direction {
    #[default]
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    fn class(self) -> &'static str {
        match self {
            Self::Up => "fade-from-below",
            Self::Down => "fade-from-above",
            Self::Left => "fade-from-right",
            Self::Right => "fade-from-left",
        }
    }
}

fn fade_class(direction: Direction, visible: bool, extra: &str) -> String {
    let state = if visible { "fade-in-visible" } else { direction.class() };
    if extra.is_empty() {
        format!("fade-in-element {state}")
    } else {
        format!("fade-in-element {state} {extra}")
    }
}

/// Fades its children in the first time they scroll into view.
///
/// Browsers without `IntersectionObserver` show the content immediately.
#[component]
pub fn FadeIn(
    children: Children,
    #[prop(optional)] direction: Direction,
    /// Transition delay in milliseconds
    #[prop(optional)]
    delay: u32,
    #[prop(into, optional)] class: String,
) -> impl IntoView {
    let node = NodeRef::<html::Div>::new();
    let visible = RwSignal::new(false);
    let observer = StoredValue::new_local(None::<VisibilityObserver>);

    Effect::new(move |_| {
        let Some(element) = node.get() else {
            return;
        };
        if visible.get_untracked() || observer.with_value(Option::is_some) {
            return;
        }
        match VisibilityObserver::observe(&element, move || visible.set(true)) {
            Some(watch) => observer.set_value(Some(watch)),
            None => visible.set(true),
        }
    });
    on_cleanup(move || {
        observer.try_update_value(|slot| *slot = None);
    });

    view! {
        <div
            node_ref=node
            class=move || fade_class(direction, visible.get(), &class)
            style=format!("transition-delay: {delay}ms;")
        >
            {children()}
        </div>
    }
}

/// One-shot intersection watch; disconnects when dropped.
struct VisibilityObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl VisibilityObserver {
    fn observe(element: &web_sys::Element, on_visible: impl Fn() + 'static) -> Option<Self> {
        let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                let intersecting = entries.iter().any(|entry| {
                    entry
                        .unchecked_into::<IntersectionObserverEntry>()
                        .is_intersecting()
                });
                if intersecting {
                    on_visible();
                    observer.disconnect();
                }
            },
        );

        let options = IntersectionObserverInit::new();
        options.set_threshold(&VISIBLE_THRESHOLD.into());

        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
                .map_err(|err| tracing::debug!(?err, "IntersectionObserver unavailable"))
                .ok()?;
        observer.observe(element);

        Some(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for VisibilityObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_state_depends_on_direction() {
        assert_eq!(
            fade_class(Direction::Up, false, ""),
            "fade-in-element fade-from-below"
        );
        assert_eq!(
            fade_class(Direction::Left, false, "card"),
            "fade-in-element fade-from-right card"
        );
    }

    #[test]
    fn visible_state_is_the_same_for_every_direction() {
        for direction in [Direction::Up, Direction::Down, Direction::Left, Direction::Right] {
            assert_eq!(
                fade_class(direction, true, ""),
                "fade-in-element fade-in-visible"
            );
        }
    }
}
