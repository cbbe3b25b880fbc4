use before_after_slider::{BeforeAfterSlider, FetchPriority, LoadingHint, SliderConfig};
use leptos::prelude::*;

use crate::components::{FadeIn, Modal};
use crate::content::{Gallery as GalleryContent, GalleryItem};

/// Next index when cycling through `len` items.
fn cycle(current: usize, len: usize, forward: bool) -> usize {
    if len == 0 {
        return 0;
    }
    if forward {
        (current + 1) % len
    } else {
        (current + len - 1) % len
    }
}

#[component]
pub fn Gallery(gallery: GalleryContent, slider: SliderConfig) -> impl IntoView {
    let count = gallery.items.len();
    let enlarged = RwSignal::new(None::<usize>);

    let cards = gallery
        .items
        .iter()
        .cloned()
        .enumerate()
        .map(|(index, item)| {
            let GalleryItem {
                title,
                before,
                after,
            } = item;
            view! {
                <FadeIn delay={index as u32 * 150}>
                    <figure class="gallery-item">
                        <BeforeAfterSlider
                            before=before
                            after=after
                            config=slider
                            label=format!("{title}: before and after")
                        />
                        <figcaption class="gallery-caption">
                            <h3 class="gallery-title">{title}</h3>
                            <button
                                type="button"
                                class="btn btn-link"
                                on:click=move |_| enlarged.set(Some(index))
                            >
                                "Enlarge"
                            </button>
                        </figcaption>
                    </figure>
                </FadeIn>
            }
        })
        .collect_view();
    let items = StoredValue::new(gallery.items);

    let current = move || {
        let index = enlarged.get().unwrap_or_default();
        items.with_value(|items| items.get(index).cloned().unwrap_or_default())
    };
    let current = Memo::new(move |_| current());
    let field = move |pick: fn(&GalleryItem) -> String| Signal::derive(move || current.with(pick));

    let step = move |forward: bool| {
        enlarged.update(|open| {
            if let Some(index) = open {
                *index = cycle(*index, count, forward);
            }
        });
    };
    let close = Callback::new(move |()| enlarged.set(None));

    view! {
        <section id="gallery" class="section section-muted">
            <div class="container">
                <FadeIn>
                    <div class="section-header">
                        <h2 class="section-title">{gallery.heading}</h2>
                        <p class="section-intro">{gallery.intro}</p>
                    </div>
                </FadeIn>
                <div class="gallery-grid">{cards}</div>
            </div>
            <Show when=move || enlarged.get().is_some()>
                <Modal title=Signal::derive(move || current.with(|item| item.title.clone())) on_close=close>
                    // One slider for the whole modal; prev/next swap its source pair.
                    <BeforeAfterSlider
                        before=field(|item| item.before.clone())
                        after=field(|item| item.after.clone())
                        loading=LoadingHint::Eager
                        fetch_priority=FetchPriority::High
                        config=slider
                    />
                    <div class="modal-footer">
                        <button
                            type="button"
                            class="modal-nav"
                            aria-label="Previous project"
                            disabled={count < 2}
                            on:click=move |_| step(false)
                        >
                            "‹"
                        </button>
                        <h3 class="modal-title">{move || current.with(|item| item.title.clone())}</h3>
                        <button
                            type="button"
                            class="modal-nav"
                            aria-label="Next project"
                            disabled={count < 2}
                            on:click=move |_| step(true)
                        >
                            "›"
                        </button>
                    </div>
                </Modal>
            </Show>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::cycle;

    #[test]
    fn cycles_forward_with_wraparound() {
        assert_eq!(cycle(0, 3, true), 1);
        assert_eq!(cycle(2, 3, true), 0);
    }

    #[test]
    fn cycles_backward_with_wraparound() {
        assert_eq!(cycle(1, 3, false), 0);
        assert_eq!(cycle(0, 3, false), 2);
    }

    #[test]
    fn single_and_empty_galleries_stay_put() {
        assert_eq!(cycle(0, 1, true), 0);
        assert_eq!(cycle(0, 1, false), 0);
        assert_eq!(cycle(0, 0, true), 0);
    }
}
