use leptos::prelude::*;

/// Paver-pattern mark, drawn in `currentColor`.
#[component]
pub fn Logo(#[prop(into, optional)] class: String) -> impl IntoView {
    view! {
        <svg
            class=class
            viewBox="0 0 100 100"
            xmlns="http://www.w3.org/2000/svg"
            role="img"
            aria-label="Golden Paver Restorations Logo"
        >
            <g fill="currentColor">
                <rect x="0" y="0" width="27" height="27" rx="4" />
                <rect x="30" y="0" width="70" height="27" rx="4" />
                <rect x="0" y="30" width="58" height="32" rx="4" />
                <rect x="61" y="30" width="39" height="70" rx="4" />
                <rect x="0" y="65" width="27" height="35" rx="4" />
                <rect x="30" y="65" width="28" height="35" rx="4" />
            </g>
        </svg>
    }
}
