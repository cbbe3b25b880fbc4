//! Leptos components for the before/after comparison.
//!
//! [`BeforeAfterSlider`] owns a [`SliderState`] and keeps it keyed on the
//! image pair. [`SliderView`] renders any externally owned state, which is
//! also what the SSR tests drive directly.

use crate::config::{FetchPriority, LoadingHint, SliderConfig};
use crate::geometry::Bounds;
use crate::listeners::{DragListeners, Tracked};
use crate::reveal::{placeholder_caption, Frame, Region};
use crate::state::{ImageSide, SliderState, SourcePair};
use leptos::html;
use leptos::prelude::*;

const DEFAULT_BEFORE_ALT: &str = "Before restoration";
const DEFAULT_AFTER_ALT: &str = "After restoration";
const DEFAULT_LABEL: &str = "Before and after comparison";
const HANDLE_LABEL: &str = "Drag, or use the left and right arrow keys, to compare";

/// Before/after image comparison with a draggable, keyboard-operable handle.
///
/// ```rust,ignore
/// view! {
///     <BeforeAfterSlider
///         before="https://example.com/patio-before.jpg"
///         after="https://example.com/patio-after.jpg"
///         loading=LoadingHint::Eager
///     />
/// }
/// ```
#[component]
pub fn BeforeAfterSlider(
    /// Bottom layer image URL
    #[prop(into)]
    before: Signal<String>,
    /// Top layer image URL, revealed from the left
    #[prop(into)]
    after: Signal<String>,
    #[prop(into, default = DEFAULT_BEFORE_ALT.into())] before_alt: String,
    #[prop(into, default = DEFAULT_AFTER_ALT.into())] after_alt: String,
    /// Passed through to `<img loading>`
    #[prop(optional)]
    loading: LoadingHint,
    /// Passed through to `<img fetchpriority>`
    #[prop(optional)]
    fetch_priority: FetchPriority,
    #[prop(optional)] config: SliderConfig,
    /// Accessible name of the slider control
    #[prop(into, default = DEFAULT_LABEL.into())]
    label: String,
) -> impl IntoView {
    let state = RwSignal::new(SliderState::new(
        config,
        SourcePair::new(before.get_untracked(), after.get_untracked()),
    ));

    // A new pair means new load attempts: stale failure flags must go.
    Effect::new(move |_| {
        let sources = SourcePair::new(before.get(), after.get());
        state.maybe_update(|state| state.sync_sources(sources));
    });

    view! {
        <SliderView
            state=state
            before_alt=before_alt
            after_alt=after_alt
            loading=loading
            fetch_priority=fetch_priority
            label=label
        />
    }
}

/// Renders a slider for caller-owned state.
///
/// Image URLs are read from the state's source pair.
#[component]
pub fn SliderView(
    state: RwSignal<SliderState>,
    #[prop(into, default = DEFAULT_BEFORE_ALT.into())] before_alt: String,
    #[prop(into, default = DEFAULT_AFTER_ALT.into())] after_alt: String,
    #[prop(optional)] loading: LoadingHint,
    #[prop(optional)] fetch_priority: FetchPriority,
    #[prop(into, default = DEFAULT_LABEL.into())] label: String,
) -> impl IntoView {
    let container = NodeRef::<html::Div>::new();
    let alts = StoredValue::new((before_alt, after_alt));

    let frame = Memo::new(move |_| state.with(Frame::from_state));
    let has_handle = Memo::new(move |_| frame.with(Frame::has_handle));
    let dragging = Memo::new(move |_| state.with(SliderState::is_dragging));

    let bounds = move || {
        container
            .get_untracked()
            .map(|el| Bounds::from_rect(&el.get_bounding_client_rect()))
    };

    // Window listeners exist exactly while a drag is active. Dropping the
    // stored value detaches them, both here and on unmount.
    let listeners = StoredValue::new_local(None::<DragListeners>);
    Effect::new(move |_| {
        let active = dragging.get();
        listeners.update_value(|slot| {
            if !active {
                *slot = None;
            } else if slot.is_none() {
                let tracked = Tracked::from_touch(state.with_untracked(SliderState::active_touch));
                *slot = DragListeners::attach_to_window(
                    tracked,
                    move |client_x| {
                        let bounds = bounds();
                        state.maybe_update(|state| state.drag_to(client_x, bounds));
                    },
                    move || state.update(SliderState::end_drag),
                );
            }
        });
    });
    on_cleanup(move || {
        listeners.try_update_value(|slot| *slot = None);
    });

    let image = move |side: ImageSide| {
        let src = move || {
            state.with(|state| match side {
                ImageSide::Before => state.sources().before.clone(),
                ImageSide::After => state.sources().after.clone(),
            })
        };
        let alt = alts.with_value(|(before, after)| match side {
            ImageSide::Before => before.clone(),
            ImageSide::After => after.clone(),
        });
        view! {
            <img
                class="bas-image"
                src=src
                alt=alt
                loading=loading.as_attr()
                fetchpriority=fetch_priority.as_attr()
                decoding="async"
                draggable="false"
                on:error=move |_| state.update(|state| state.mark_failed(side))
            />
        }
    };

    let region = move |side: ImageSide| {
        let kind = Memo::new(move |_| frame.with(|frame| frame.region(side)));
        move || match kind.get() {
            Region::Image => image(side).into_any(),
            Region::Placeholder => placeholder(side).into_any(),
        }
    };

    let on_mousedown = move |ev: leptos::ev::MouseEvent| {
        if ev.button() != 0 {
            return;
        }
        state.update(|state| state.begin_drag(f64::from(ev.client_x())));
    };

    let on_touchstart = move |ev: leptos::ev::TouchEvent| {
        if let Some(touch) = ev.changed_touches().get(0) {
            let x = f64::from(touch.client_x());
            state.update(|state| state.begin_touch_drag(x, touch.identifier()));
        }
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        let key = ev.key();
        let mut consumed = false;
        state.maybe_update(|state| {
            consumed = state.handle_key(&key);
            consumed
        });
        if consumed {
            ev.prevent_default();
        }
    };

    let label_class = move |base: &'static str| {
        move || {
            if frame.with(Frame::labels_visible) {
                base.to_string()
            } else {
                format!("{base} bas-label-hidden")
            }
        }
    };

    let interactive = move || {
        view! {
            <div class="bas-layer bas-layer-before">{image(ImageSide::Before)}</div>
            <div
                class="bas-layer bas-layer-after"
                style=move || frame.with(|frame| format!("clip-path: {};", frame.clip_path().unwrap_or_default()))
            >
                {image(ImageSide::After)}
            </div>
            <div
                class="bas-handle"
                tabindex="0"
                aria-label=HANDLE_LABEL
                style=move || frame.with(|frame| format!("left: {};", frame.handle_left().unwrap_or_default()))
                on:mousedown=on_mousedown
                on:touchstart=on_touchstart
                on:keydown=on_keydown
            >
                <span class="bas-handle-line" aria-hidden="true"></span>
                <span class="bas-handle-grip" aria-hidden="true">
                    <svg viewBox="0 0 24 24" width="20" height="20" fill="none" stroke="currentColor" stroke-width="2">
                        <path stroke-linecap="round" stroke-linejoin="round" d="M9 8l-4 4 4 4M15 8l4 4-4 4" />
                    </svg>
                </span>
            </div>
            <span class=label_class("bas-label bas-label-after") aria-hidden="true">"AFTER"</span>
            <span class=label_class("bas-label bas-label-before") aria-hidden="true">"BEFORE"</span>
        }
    };

    let fallback = move || {
        view! {
            <div class="bas-split">
                <div class="bas-region bas-region-before">{region(ImageSide::Before)}</div>
                <div class="bas-region bas-region-after">{region(ImageSide::After)}</div>
            </div>
        }
    };

    view! {
        <div
            node_ref=container
            class=move || if dragging.get() { "bas bas-dragging" } else { "bas" }
            role=move || if has_handle.get() { "slider" } else { "group" }
            aria-label=label
            aria-valuemin=move || has_handle.get().then_some("0")
            aria-valuemax=move || has_handle.get().then_some("100")
            aria-valuenow=move || {
                has_handle
                    .get()
                    .then(|| state.with(SliderState::aria_value).to_string())
            }
        >
            {move || {
                if has_handle.get() {
                    interactive().into_any()
                } else {
                    fallback().into_any()
                }
            }}
        </div>
    }
}

fn placeholder(side: ImageSide) -> impl IntoView {
    let caption = placeholder_caption(side);
    view! {
        <div class="bas-placeholder" role="img" aria-label=caption.clone()>
            <svg class="bas-placeholder-icon" viewBox="0 0 24 24" width="40" height="40" fill="none" stroke="currentColor" stroke-width="1.5" aria-hidden="true">
                <path stroke-linecap="round" stroke-linejoin="round" d="M3 16l5-5 4 4 3-3 6 6M3 5h18v14H3zM15 9h.01M4 4l16 16" />
            </svg>
            <span class="bas-placeholder-caption">{caption.clone()}</span>
        </div>
    }
}
