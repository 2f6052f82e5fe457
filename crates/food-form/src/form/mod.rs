//! Admin Form
//!
//! Draft state, validation rules and the submission driver.
//! Rendering lives in the UI crate; everything here is plain data.

mod field;
mod state;
mod submit;
mod validation;

pub use field::Field;
pub use state::{FoodForm, SubmitStatus, SubmitStep};
pub use submit::{FoodsApi, FormStore, FormSubmitter, Navigator, Notifier, SubmitOutcome, LISTING_PATH};
pub use validation::{validate, FormErrors};
