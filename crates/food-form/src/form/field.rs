//! Editable Fields

use serde::{Deserialize, Serialize};

use crate::domain::FormError;

/// A draft field the user can edit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Image,
    Price,
    Description,
    Tags,
}

impl Field {
    /// Input element id
    pub fn id(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Image => "image",
            Field::Price => "price",
            Field::Description => "description",
            Field::Tags => "tags",
        }
    }

    /// Map an input id back to its field
    pub fn from_id(id: &str) -> Result<Self, FormError> {
        match id {
            "name" => Ok(Field::Name),
            "image" => Ok(Field::Image),
            "price" => Ok(Field::Price),
            "description" => Ok(Field::Description),
            "tags" => Ok(Field::Tags),
            other => Err(FormError::UnknownField(other.to_string())),
        }
    }

    /// Whether blurring this field alone reveals its error
    ///
    /// Only the name field does; the rest wait for a submit attempt.
    pub fn shows_error_when_touched(&self) -> bool {
        matches!(self, Field::Name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_mapping() {
        for field in [Field::Name, Field::Image, Field::Price, Field::Description, Field::Tags] {
            assert_eq!(Field::from_id(field.id()), Ok(field));
        }
        assert_eq!(Field::from_id("id"), Err(FormError::UnknownField("id".into())));
    }
}
