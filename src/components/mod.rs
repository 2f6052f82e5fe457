//! UI Components
//!
//! Reusable Leptos components.

mod admin_form;
mod error_message;
mod labeled_input;
mod menu_list;
mod tag_checklist;
mod toaster;

pub use admin_form::AdminForm;
pub use error_message::ErrorMessage;
pub use labeled_input::{InputType, LabeledInput};
pub use menu_list::MenuList;
pub use tag_checklist::TagChecklist;
pub use toaster::Toaster;
