use leptos::prelude::*;

use crate::components::FadeIn;
use crate::content::Testimonials as TestimonialsContent;

#[component]
pub fn Testimonials(testimonials: TestimonialsContent) -> impl IntoView {
    let cards = testimonials
        .items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            view! {
                <FadeIn delay={index as u32 * 150}>
                    <figure class="card testimonial-card">
                        <blockquote class="testimonial-quote">"\u{201c}"{item.quote}"\u{201d}"</blockquote>
                        <figcaption class="testimonial-author">
                            <span class="testimonial-name">{item.name}</span>
                            <span class="testimonial-location">{item.location}</span>
                        </figcaption>
                    </figure>
                </FadeIn>
            }
        })
        .collect_view();

    view! {
        <section id="testimonials" class="section section-light">
            <div class="container">
                <FadeIn>
                    <div class="section-header">
                        <h2 class="section-title">{testimonials.heading}</h2>
                        <p class="section-intro">{testimonials.intro}</p>
                    </div>
                </FadeIn>
                <div class="card-grid">{cards}</div>
            </div>
        </section>
    }
}
