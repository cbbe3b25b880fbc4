use leptos::prelude::*;

use crate::components::FadeIn;
use crate::content::{ServiceIcon, Services as ServicesContent};

// Stroke paths for the 24x24 service icons
fn icon_path(icon: ServiceIcon) -> &'static str {
    match icon {
        ServiceIcon::Brush => {
            "M9.53 16.122a3 3 0 00-5.78 1.128 2.25 2.25 0 01-2.4 2.245 4.5 4.5 0 008.4-2.245c0-.399-.078-.78-.22-1.128zm0 0a15.998 15.998 0 003.388-1.62m-5.043-.025a15.994 15.994 0 011.622-3.395m3.42 3.42a15.995 15.995 0 004.764-4.648l3.876-5.814a1.151 1.151 0 00-1.597-1.597L14.146 6.32a15.996 15.996 0 00-4.649 4.763m3.42 3.42a6.776 6.776 0 00-3.42-3.42"
        }
        ServiceIcon::Shield => {
            "M9 12.75L11.25 15 15 9.75m-3-7.036A11.959 11.959 0 013.598 6 11.99 11.99 0 003 9.749c0 5.592 3.824 10.29 9 11.623 5.176-1.332 9-6.03 9-11.622 0-1.31-.21-2.571-.598-3.751h-.152c-3.196 0-6.1-1.248-8.25-3.285z"
        }
        ServiceIcon::Wrench => {
            "M11.42 15.17L17.25 21A2.652 2.652 0 0021 17.25l-5.877-5.877M11.42 15.17l2.496-3.03c.317-.384.74-.626 1.208-.766M11.42 15.17l-4.655 5.653a2.548 2.548 0 11-3.586-3.586l6.837-5.63m5.108-.233c.55-.164 1.163-.188 1.743-.14a4.5 4.5 0 004.486-6.336l-3.276 3.277a3.004 3.004 0 01-2.25-2.25l3.276-3.276a4.5 4.5 0 00-6.336 4.486c.091 1.076-.071 2.264-.904 2.95l-.102.085"
        }
    }
}

#[component]
pub fn Services(services: ServicesContent) -> impl IntoView {
    let cards = services
        .items
        .into_iter()
        .enumerate()
        .map(|(index, service)| {
            view! {
                <FadeIn delay={index as u32 * 150}>
                    <article class="card service-card">
                        <div class="service-icon">
                            <svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="1.5" aria-hidden="true">
                                <path stroke-linecap="round" stroke-linejoin="round" d=icon_path(service.icon) />
                            </svg>
                        </div>
                        <h3 class="card-title">{service.title}</h3>
                        <p class="card-text">{service.description}</p>
                    </article>
                </FadeIn>
            }
        })
        .collect_view();

    view! {
        <section id="services" class="section section-light">
            <div class="container">
                <FadeIn>
                    <div class="section-header">
                        <h2 class="section-title">{services.heading}</h2>
                        <p class="section-intro">{services.intro}</p>
                    </div>
                </FadeIn>
                <div class="card-grid">{cards}</div>
            </div>
        </section>
    }
}
