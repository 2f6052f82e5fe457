//! Food Admin App
//!
//! Top-level component: nav bar, current view, toasts.

use leptos::prelude::*;

use food_form::{ApiConfig, LISTING_PATH};
use crate::components::{AdminForm, MenuList, Toaster};
use crate::context::{AppContext, Route, ADMIN_PATH};

#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new(Route::current());
    let config = ApiConfig::from_env();
    log::info!("[APP] foods endpoint {}", config.foods_url());

    // Provide context to all children
    provide_context(ctx);
    provide_context(config);

    // Back/forward buttons
    let popstate = window_event_listener(leptos::ev::popstate, move |_| ctx.sync_route());
    on_cleanup(move || popstate.remove());

    let nav_link = move |path: &'static str, label: &'static str| {
        let route = Route::from_path(path);
        view! {
            <a
                href=path
                class=move || if ctx.route.get() == route { "nav-link active" } else { "nav-link" }
                on:click=move |ev| {
                    ev.prevent_default();
                    ctx.go_to(path);
                }
            >
                {label}
            </a>
        }
    };

    view! {
        <div class="app-layout">
            <nav class="nav-bar">
                {nav_link(LISTING_PATH, "Menu")}
                {nav_link(ADMIN_PATH, "Admin")}
            </nav>

            <main class="main-content">
                {move || match ctx.route.get() {
                    Route::Menu => view! { <MenuList /> }.into_any(),
                    Route::Admin => view! { <AdminForm /> }.into_any(),
                    Route::NotFound => view! { <p class="not-found">"Page not found"</p> }.into_any(),
                }}
            </main>

            <Toaster />
        </div>
    }
}
