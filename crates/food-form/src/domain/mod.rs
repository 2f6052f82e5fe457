//! Domain Layer
//!
//! Menu item entities and core error types.
//! This layer has NO external dependencies (except serde for serialization).

mod error;
mod food;
mod tag;

pub use error::{ApiError, FormError};
pub use food::{MenuItem, NewMenuItem, PriceField};
pub use tag::FoodTag;
