//! Toaster Component
//!
//! Renders queued toasts; click to dismiss early.

use leptos::prelude::*;

use crate::context::use_app_context;

#[component]
pub fn Toaster() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div class="toaster">
            {move || ctx.toasts.get().into_iter().map(|toast| {
                let id = toast.id;
                view! {
                    <div class=toast.kind.class() role="status" on:click=move |_| ctx.dismiss(id)>
                        {toast.message}
                    </div>
                }
            }).collect_view()}
        </div>
    }
}
