//! Header Bar Component
//!
//! Title banner at the top of the page.

use leptos::prelude::*;

/// Banner showing a configurable label
#[component]
pub fn HeaderBar(
    #[prop(into)] title: String,
) -> impl IntoView {
    view! {
        <header class="header-bar">
            <h1 class="header-bar-title">{title}</h1>
        </header>
    }
}
