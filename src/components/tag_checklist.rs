//! Tag Checklist Component
//!
//! One checkbox per food tag, in enumeration order.

use leptos::prelude::*;

use food_form::FoodTag;
use crate::components::ErrorMessage;

#[component]
pub fn TagChecklist(
    #[prop(into)] selected: Signal<Vec<FoodTag>>,
    on_toggle: Callback<(FoodTag, bool)>,
    #[prop(into)] error: Signal<Option<String>>,
) -> impl IntoView {
    view! {
        <fieldset class="tag-fieldset">
            <legend class="input-label">"Tags"</legend>
            {move || error.get().map(|message| view! { <ErrorMessage message /> })}
            <ul class="tag-list">
                {FoodTag::ALL.iter().map(|&tag| {
                    let id = tag.checkbox_id();
                    let label_for = id.clone();
                    view! {
                        <li>
                            <input
                                id=id
                                type="checkbox"
                                value=tag.as_str()
                                prop:checked=move || selected.with(|tags| tags.contains(&tag))
                                on:change=move |ev| on_toggle.run((tag, event_target_checked(&ev)))
                            />
                            " "
                            <label for=label_for>{tag.as_str()}</label>
                        </li>
                    }
                }).collect_view()}
            </ul>
        </fieldset>
    }
}
