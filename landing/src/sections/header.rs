use leptos::prelude::*;

use crate::components::Logo;
use crate::content::{Business, NavLink};

const MENU_OPEN_PATH: &str = "M6 18L18 6M6 6l12 12";
const MENU_CLOSED_PATH: &str = "M4 6h16M4 12h16M4 18h16";

#[component]
pub fn Header(business: Business, nav: Vec<NavLink>) -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);
    let close_menu = move |_| set_menu_open.set(false);

    let desktop_links = nav
        .iter()
        .map(|link| {
            view! { <a href=link.href.clone() class="nav-link">{link.label.clone()}</a> }
        })
        .collect_view();

    let nav = StoredValue::new(nav);
    let mobile_links = move || {
        nav.with_value(|links| {
            links
                .iter()
                .map(|link| {
                    view! {
                        <a href=link.href.clone() class="nav-link nav-link-mobile" on:click=close_menu>
                            {link.label.clone()}
                        </a>
                    }
                })
                .collect_view()
        })
    };

    let quote_cta = business.quote_cta.clone();

    view! {
        <header class="site-header">
            <div class="container header-bar">
                <a href="#" class="brand">
                    <Logo class="brand-logo" />
                    <span>{business.name}</span>
                </a>
                <nav class="nav-desktop">
                    {desktop_links}
                    <a href="#contact" class="btn btn-primary">{business.quote_cta}</a>
                </nav>
                <button
                    type="button"
                    class="menu-toggle"
                    aria-label="Toggle navigation"
                    aria-expanded=move || menu_open.get().to_string()
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                >
                    <svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
                        <path
                            stroke-linecap="round"
                            stroke-linejoin="round"
                            d=move || if menu_open.get() { MENU_OPEN_PATH } else { MENU_CLOSED_PATH }
                        />
                    </svg>
                </button>
            </div>
            <Show when=move || menu_open.get()>
                <nav class="nav-mobile">
                    {mobile_links()}
                    <a href="#contact" class="btn btn-primary" on:click=close_menu>
                        {quote_cta.clone()}
                    </a>
                </nav>
            </Show>
        </header>
    }
}
