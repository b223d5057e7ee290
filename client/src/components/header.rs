//! Static page heading.

use leptos::prelude::*;

pub const HEADER_TITLE: &str = "Signup Form";

/// Page heading rendered above the form. Stateless.
#[component]
pub fn Header() -> impl IntoView {
    view! {
        <h1 class="app-header" title=HEADER_TITLE>
            {HEADER_TITLE}
        </h1>
    }
}
