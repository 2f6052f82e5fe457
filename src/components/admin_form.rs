//! Admin Form Component
//!
//! Form for adding a food to the menu. Draft, status and touched fields live
//! in a single `FoodForm` signal; submission runs through `FormSubmitter`
//! with the app context as navigator and notifier.

use leptos::prelude::*;
use leptos::task::spawn_local;

use food_form::{ApiConfig, Field, FoodForm, FoodTag, FormStore, FormSubmitter};
use crate::api::BrowserFoodsApi;
use crate::components::{InputType, LabeledInput, TagChecklist};
use crate::context::use_app_context;

/// Reactive handle to the form state
#[derive(Clone, Copy)]
pub struct FormSignal(pub RwSignal<FoodForm>);

impl FormStore for FormSignal {
    fn with_form<R>(&self, f: impl FnOnce(&mut FoodForm) -> R) -> Option<R> {
        self.0.try_update(f)
    }
}

#[component]
pub fn AdminForm() -> impl IntoView {
    let ctx = use_app_context();
    let config = use_context::<ApiConfig>().unwrap_or_default();
    let form = RwSignal::new(FoodForm::new());

    // One handler for every text input, keyed by input id
    let on_field_change = Callback::new(move |(id, value): (String, String)| {
        form.update(|f| {
            if let Err(e) = f.edit(&id, value) {
                log::warn!("[FORM] {}", e);
            }
        });
    });

    let on_toggle_tag = Callback::new(move |(tag, checked): (FoodTag, bool)| {
        form.update(|f| f.toggle_tag(tag, checked));
    });

    let on_blur = move |field: Field| Callback::new(move |_: ()| form.update(|f| f.blur(field)));

    let value_of = move |field: Field| {
        Signal::derive(move || {
            form.with(|f| {
                let draft = f.draft();
                match field {
                    Field::Name => draft.name.clone(),
                    Field::Image => draft.image.clone(),
                    Field::Price => draft.price.display(),
                    Field::Description => draft.description.clone(),
                    Field::Tags => String::new(),
                }
            })
        })
    };

    let error_of = move |field: Field| {
        Signal::derive(move || form.with(|f| f.visible_error(field).map(str::to_string)))
    };

    let selected_tags = Signal::derive(move || form.with(|f| f.draft().tags.clone()));
    let submitting = move || form.with(|f| f.status().is_submitting());

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let submitter = FormSubmitter::new(BrowserFoodsApi::new(config.clone()), ctx, ctx);
        spawn_local(async move {
            let outcome = submitter.submit(&FormSignal(form)).await;
            log::debug!("[FORM] submit finished: {:?}", outcome);
        });
    };

    view! {
        <h1 class="page-title">"Admin"</h1>
        <form class="admin-form" on:submit=submit>
            <LabeledInput
                id=Field::Name.id()
                label="Name"
                class="mb-4"
                value=value_of(Field::Name)
                on_change=on_field_change
                on_blur=on_blur(Field::Name)
                error=error_of(Field::Name)
            />

            <LabeledInput
                id=Field::Description.id()
                label="Description"
                class="mb-4"
                value=value_of(Field::Description)
                on_change=on_field_change
                on_blur=on_blur(Field::Description)
                error=error_of(Field::Description)
            />

            <LabeledInput
                id=Field::Image.id()
                label="Image URL"
                class="mb-4"
                value=value_of(Field::Image)
                on_change=on_field_change
                on_blur=on_blur(Field::Image)
            />

            <LabeledInput
                id=Field::Price.id()
                label="Price"
                class="mb-4"
                input_type=InputType::Number
                value=value_of(Field::Price)
                on_change=on_field_change
                on_blur=on_blur(Field::Price)
                error=error_of(Field::Price)
            />

            <TagChecklist
                selected=selected_tags
                on_toggle=on_toggle_tag
                error=error_of(Field::Tags)
            />

            <button class="submit-btn" type="submit" disabled=submitting>
                "Add Food"
            </button>
        </form>
    }
}
