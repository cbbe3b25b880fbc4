use gloo::events::EventListener;
use leptos::prelude::*;
use web_sys::{ScrollBehavior, ScrollToOptions};

/// Scroll depth, in pixels, past which the button shows.
const SHOW_AFTER_PX: f64 = 300.0;

fn should_show(scroll_y: f64) -> bool {
    scroll_y > SHOW_AFTER_PX
}

#[component]
pub fn ScrollToTop() -> impl IntoView {
    let (visible, set_visible) = signal(false);

    let scroll = StoredValue::new_local(None::<EventListener>);
    if let Some(window) = web_sys::window() {
        let target = window.clone();
        let listener = EventListener::new(&window, "scroll", move |_| {
            let y = target.scroll_y().unwrap_or_default();
            set_visible.set(should_show(y));
        });
        scroll.set_value(Some(listener));
    }
    on_cleanup(move || {
        scroll.try_update_value(|slot| *slot = None);
    });

    let scroll_to_top = move |_| {
        if let Some(window) = web_sys::window() {
            let options = ScrollToOptions::new();
            options.set_top(0.0);
            options.set_behavior(ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        }
    };

    view! {
        <button
            type="button"
            class=move || if visible.get() { "scroll-top visible" } else { "scroll-top" }
            aria-label="Scroll to top"
            on:click=scroll_to_top
        >
            <svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="3" aria-hidden="true">
                <path stroke-linecap="round" stroke-linejoin="round" d="M5 15l7-7 7 7" />
            </svg>
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_until_past_threshold() {
        assert!(!should_show(0.0));
        assert!(!should_show(300.0));
        assert!(should_show(300.5));
        assert!(should_show(2400.0));
    }
}
