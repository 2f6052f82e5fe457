//! Error Message Component

use leptos::prelude::*;

/// Inline validation message
#[component]
pub fn ErrorMessage(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <p class="error-message" role="alert">{message}</p>
    }
}
