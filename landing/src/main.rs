// Golden Paver Restorations - single-page site, Leptos 0.8 CSR

mod components;
mod contact_form;
mod content;
mod sections;
mod styles;
mod telemetry;

use before_after_slider::SLIDER_CSS;
use leptos::prelude::*;

use components::ScrollToTop;
use content::SiteContent;
use sections::*;
use styles::SITE_CSS;

fn main() {
    console_error_panic_hook::set_once();

    let content = SiteContent::embedded();
    let level = content
        .as_ref()
        .map(SiteContent::log_level)
        .unwrap_or(tracing::Level::INFO);
    telemetry::init(level);

    let content = content.unwrap_or_else(|err| {
        tracing::error!(error = %err, "falling back to empty site content");
        SiteContent::default()
    });

    leptos::mount::mount_to_body(move || view! { <App content=content /> });
}

#[component]
fn App(content: SiteContent) -> impl IntoView {
    let SiteContent {
        business,
        nav,
        hero,
        services,
        gallery,
        testimonials,
        contact,
        footer,
        slider,
        ..
    } = content;
    let business_name = business.name.clone();

    view! {
        <style>{SLIDER_CSS}</style>
        <style>{SITE_CSS}</style>
        <Header business=business nav=nav />
        <main>
            <Hero hero=hero slider=slider />
            <Services services=services />
            <Gallery gallery=gallery slider=slider />
            <Testimonials testimonials=testimonials />
            <Contact settings=contact />
        </main>
        <Footer business_name=business_name credits=footer.credits />
        <ScrollToTop />
    }
}
