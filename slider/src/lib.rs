//! # before-after-slider
//!
//! A before/after image comparison control for Leptos.
//!
//! Two images are stacked; the "after" image is revealed from the left edge
//! up to a handle the visitor drags with a mouse or finger, or moves with
//! the arrow keys. If either image fails to load, the control degrades to a
//! static side-by-side layout with a placeholder for the missing side.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use before_after_slider::{BeforeAfterSlider, LoadingHint, SLIDER_CSS};
//! use leptos::prelude::*;
//!
//! view! {
//!     <style>{SLIDER_CSS}</style>
//!     <BeforeAfterSlider
//!         before="/img/driveway-before.jpg"
//!         after="/img/driveway-after.jpg"
//!         loading=LoadingHint::Eager
//!     />
//! }
//! ```
//!
//! ## Architecture
//!
//! - [`geometry`] - pointer coordinate to percentage, with clamping
//! - [`state`] - `SliderState` and every transition on it
//! - [`reveal`] - the render model (`Frame`) derived from the state
//! - [`listeners`] - window listeners scoped to one drag
//! - [`component`] - the Leptos components
//! - [`config`] - tuning constants and image hints
//! - [`styles`] - structural CSS
//!
//! Everything except `component` and `listeners` is plain Rust and is
//! tested natively. The components are covered through SSR rendering and,
//! in `tests/web.rs`, by mounting them into a browser DOM.

pub mod component;
pub mod config;
pub mod geometry;
pub mod listeners;
pub mod reveal;
pub mod state;
pub mod styles;

pub use component::{BeforeAfterSlider, SliderView};
pub use config::{FetchPriority, LoadingHint, SliderConfig};
pub use state::{ImageSide, SliderState, SourcePair};
pub use styles::SLIDER_CSS;

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use leptos::prelude::*;
    use leptos::tachys::view::RenderHtml;

    fn render(view: impl FnOnce() -> AnyView) -> String {
        Owner::new().with(|| view().to_html())
    }

    /// The opening tag of the first element whose markup contains `needle`.
    fn opening_tag<'a>(html: &'a str, needle: &str) -> &'a str {
        let at = html.find(needle).expect("needle present");
        let start = html[..at].rfind('<').expect("tag start");
        let end = at + html[at..].find('>').expect("tag end");
        &html[start..=end]
    }

    fn failed_state(side: ImageSide) -> SliderState {
        let mut state = SliderState::new(
            SliderConfig::default(),
            SourcePair::new("patio-before.jpg", "patio-after.jpg"),
        );
        state.mark_failed(side);
        state
    }

    #[test]
    fn renders_interactive_slider() {
        let html = render(|| {
            view! { <BeforeAfterSlider before="patio-before.jpg" after="patio-after.jpg" /> }
                .into_any()
        });

        assert!(html.contains("role=\"slider\""));
        assert!(html.contains("aria-valuenow=\"50\""));
        assert!(html.contains("aria-valuemin=\"0\""));
        assert!(html.contains("aria-valuemax=\"100\""));
        assert!(html.contains("aria-label=\"Before and after comparison\""));
        assert!(html.contains("patio-before.jpg"));
        assert!(html.contains("patio-after.jpg"));
        assert!(html.contains("clip-path: inset(0 50% 0 0);"));
        assert!(html.contains("left: 50%;"));
        assert!(html.contains("bas-handle"));
        assert!(html.contains("tabindex=\"0\""));
        assert!(html.contains("AFTER"));
        assert!(html.contains("BEFORE"));
    }

    #[test]
    fn passes_loading_hints_through() {
        let html = render(|| {
            view! {
                <BeforeAfterSlider
                    before="a.jpg"
                    after="b.jpg"
                    loading=LoadingHint::Eager
                    fetch_priority=FetchPriority::High
                />
            }
            .into_any()
        });

        assert!(html.contains("loading=\"eager\""));
        assert!(html.contains("fetchpriority=\"high\""));
        assert!(!html.contains("loading=\"lazy\""));
    }

    #[test]
    fn default_hints_are_lazy_and_auto() {
        let html = render(|| {
            view! { <BeforeAfterSlider before="a.jpg" after="b.jpg" /> }.into_any()
        });

        assert!(html.contains("loading=\"lazy\""));
        assert!(html.contains("fetchpriority=\"auto\""));
        assert!(html.contains("alt=\"Before restoration\""));
        assert!(html.contains("alt=\"After restoration\""));
    }

    #[test]
    fn custom_alt_text_and_label() {
        let html = render(|| {
            view! {
                <BeforeAfterSlider
                    before="a.jpg"
                    after="b.jpg"
                    before_alt="Stained driveway"
                    after_alt="Sealed driveway"
                    label="Driveway comparison"
                />
            }
            .into_any()
        });

        assert!(html.contains("alt=\"Stained driveway\""));
        assert!(html.contains("alt=\"Sealed driveway\""));
        assert!(html.contains("aria-label=\"Driveway comparison\""));
    }

    #[test]
    fn labels_are_hidden_from_assistive_tech() {
        let html = render(|| {
            view! { <BeforeAfterSlider before="a.jpg" after="b.jpg" /> }.into_any()
        });

        for class in ["bas-label-after", "bas-label-before"] {
            let tag = opening_tag(&html, class);
            assert!(tag.contains("aria-hidden=\"true\""), "{tag}");
        }
    }

    #[test]
    fn before_failure_renders_placeholder_without_handle() {
        let html = render(|| {
            let state = RwSignal::new(failed_state(ImageSide::Before));
            view! { <SliderView state=state /> }.into_any()
        });

        assert!(html.contains("Before image unavailable"));
        assert!(!html.contains("After image unavailable"));
        assert!(html.contains("patio-after.jpg"));
        assert!(!html.contains("patio-before.jpg"));
        assert!(!html.contains("bas-handle"));
        assert!(!html.contains("AFTER"));
        assert!(!html.contains("role=\"slider\""));
        assert!(html.contains("role=\"group\""));
        assert!(!html.contains("aria-valuenow"));
    }

    #[test]
    fn after_failure_renders_placeholder_without_handle() {
        let html = render(|| {
            let state = RwSignal::new(failed_state(ImageSide::After));
            view! { <SliderView state=state /> }.into_any()
        });

        assert!(html.contains("After image unavailable"));
        assert!(html.contains("patio-before.jpg"));
        assert!(!html.contains("patio-after.jpg"));
        assert!(!html.contains("bas-handle"));
    }

    #[test]
    fn new_source_pair_renders_real_images_again() {
        let html = render(|| {
            let mut initial = failed_state(ImageSide::Before);
            initial.sync_sources(SourcePair::new("walk-before.jpg", "walk-after.jpg"));
            let state = RwSignal::new(initial);
            view! { <SliderView state=state /> }.into_any()
        });

        assert!(!html.contains("image unavailable"));
        assert!(html.contains("walk-before.jpg"));
        assert!(html.contains("walk-after.jpg"));
        assert!(html.contains("bas-handle"));
    }

    #[test]
    fn position_is_reflected_in_markup() {
        let html = render(|| {
            let state = RwSignal::new(SliderState::new(
                SliderConfig {
                    initial_position: 30.4,
                    ..SliderConfig::default()
                },
                SourcePair::new("a.jpg", "b.jpg"),
            ));
            view! { <SliderView state=state /> }.into_any()
        });

        assert!(html.contains("aria-valuenow=\"30\""));
        assert!(html.contains("clip-path: inset(0 69.6% 0 0);"));
        assert!(html.contains("left: 30.4%;"));
    }
}
