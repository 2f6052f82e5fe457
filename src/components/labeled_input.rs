//! Labeled Input Component
//!
//! Reusable label + input pair. Holds no state of its own: the caller owns
//! the value and receives every change.

use leptos::prelude::*;

use crate::components::ErrorMessage;

/// HTML input types the widget supports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputType {
    #[default]
    Text,
    Number,
    Phone,
    Email,
    Password,
}

impl InputType {
    pub fn as_str(&self) -> &'static str {
        match self {
            InputType::Text => "text",
            InputType::Number => "number",
            InputType::Phone => "tel",
            InputType::Email => "email",
            InputType::Password => "password",
        }
    }
}

/// Label bound to a controlled input
///
/// # Arguments
/// * `id` - Input id; also passed back to `on_change` so one handler can serve many inputs
/// * `on_change` - Called with `(id, raw value)` on every input event
/// * `error` - Message rendered under the input when present and non-empty
#[component]
pub fn LabeledInput(
    #[prop(into)] id: String,
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<String>,
    on_change: Callback<(String, String)>,
    #[prop(optional)] input_type: InputType,
    /// CSS class applied to the wrapping div
    #[prop(optional, into)]
    class: String,
    #[prop(optional)] on_blur: Option<Callback<()>>,
    #[prop(optional)] error: Option<Signal<Option<String>>>,
) -> impl IntoView {
    let label_for = id.clone();
    let input_id = id.clone();

    view! {
        <div class=class>
            <label for=label_for class="input-label">{label}</label>
            <input
                id=id
                type=input_type.as_str()
                class="input-field"
                prop:value=move || value.get()
                on:input=move |ev| on_change.run((input_id.clone(), event_target_value(&ev)))
                on:blur=move |_| {
                    if let Some(on_blur) = on_blur {
                        on_blur.run(());
                    }
                }
            />
            {move || {
                error
                    .and_then(|error| error.get())
                    .filter(|message| !message.is_empty())
                    .map(|message| view! { <ErrorMessage message /> })
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_type_attribute() {
        assert_eq!(InputType::default().as_str(), "text");
        assert_eq!(InputType::Phone.as_str(), "tel");
        assert_eq!(InputType::Number.as_str(), "number");
    }
}
