//! Menu List Component
//!
//! Listing view: every food the service knows about.

use leptos::prelude::*;
use leptos::task::spawn_local;

use food_form::{ApiConfig, FoodsApi, MenuItem};
use crate::api::BrowserFoodsApi;

#[component]
pub fn MenuList() -> impl IntoView {
    let config = use_context::<ApiConfig>().unwrap_or_default();
    let (foods, set_foods) = signal(Vec::<MenuItem>::new());
    let (load_error, set_load_error) = signal::<Option<String>>(None);

    // Load foods on mount
    Effect::new(move |_| {
        let api = BrowserFoodsApi::new(config.clone());
        spawn_local(async move {
            match api.list_foods().await {
                Ok(loaded) => {
                    log::info!("[APP] Loaded {} foods", loaded.len());
                    set_foods.set(loaded);
                }
                Err(e) => {
                    log::error!("[APP] Loading foods failed: {}", e);
                    set_load_error.set(Some(e.to_string()));
                }
            }
        });
    });

    view! {
        <h1 class="page-title">"Menu"</h1>
        {move || load_error.get().map(|e| view! { <p class="load-error">{e}</p> })}
        <ul class="food-list">
            {move || foods.get().into_iter().map(|food| {
                let tags = food.tags.iter().map(|tag| tag.as_str()).collect::<Vec<_>>().join(", ");
                let image = (!food.image.is_empty()).then(|| view! {
                    <img class="food-image" src=food.image.clone() alt=food.name.clone() />
                });
                view! {
                    <li class="food-card">
                        {image}
                        <h2 class="food-name">{food.name}</h2>
                        <p class="food-price">{format!("${}", food.price.display())}</p>
                        <p class="food-description">{food.description}</p>
                        <p class="food-tags">{tags}</p>
                    </li>
                }
            }).collect_view()}
        </ul>
    }
}
