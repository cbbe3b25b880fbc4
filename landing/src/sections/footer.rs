use leptos::prelude::*;

use crate::content::NavLink;

#[component]
pub fn Footer(business_name: String, credits: Vec<NavLink>) -> impl IntoView {
    let year = js_sys::Date::new_0().get_full_year();

    let credits = credits
        .into_iter()
        .enumerate()
        .map(|(index, credit)| {
            view! {
                {(index > 0).then_some(view! { <span class="footer-sep">"|"</span> })}
                <a href=credit.href class="footer-link">{credit.label}</a>
            }
        })
        .collect_view();

    view! {
        <footer class="footer">
            <div class="container">
                <p class="footer-copyright">
                    {format!("© {year} {business_name}. All Rights Reserved.")}
                </p>
                <p class="footer-credits">
                    <span>"Made with"</span>
                    <span class="footer-heart" aria-label="love">"♥"</span>
                    <span>"by"</span>
                    {credits}
                </p>
            </div>
        </footer>
    }
}
