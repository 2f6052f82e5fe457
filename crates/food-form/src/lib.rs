//! Food Form Core
//!
//! Layered the same way as the UI consumes it:
//! - domain: menu item entities, tag enumeration, errors
//! - form: draft state, validation and submission driver
//! - config: endpoint configuration

pub mod config;
pub mod domain;
pub mod form;

pub use config::ApiConfig;
pub use domain::{ApiError, FoodTag, FormError, MenuItem, NewMenuItem, PriceField};
pub use form::{
    validate, Field, FoodForm, FoodsApi, FormErrors, FormStore, FormSubmitter, Navigator,
    Notifier, SubmitOutcome, SubmitStatus, SubmitStep, LISTING_PATH,
};
