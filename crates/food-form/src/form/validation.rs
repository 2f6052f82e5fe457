//! Draft Validation
//!
//! Presence checks only. Recomputed from the draft on every call.

use serde::Serialize;

use super::field::Field;
use crate::domain::NewMenuItem;

pub const NAME_REQUIRED: &str = "Name is required";
pub const DESCRIPTION_REQUIRED: &str = "Description is required";
pub const TAGS_REQUIRED: &str = "Select at least one tag";

/// Validation messages keyed by field
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FormErrors {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<&'static str>,
}

impl FormErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.description.is_none() && self.tags.is_none()
    }

    /// Message for a field; image and price never carry one
    pub fn get(&self, field: Field) -> Option<&'static str> {
        match field {
            Field::Name => self.name,
            Field::Description => self.description,
            Field::Tags => self.tags,
            Field::Image | Field::Price => None,
        }
    }

    pub fn len(&self) -> usize {
        [self.name, self.description, self.tags].iter().filter(|e| e.is_some()).count()
    }
}

/// Check a draft for missing required values
pub fn validate(draft: &NewMenuItem) -> FormErrors {
    FormErrors {
        name: draft.name.is_empty().then_some(NAME_REQUIRED),
        description: draft.description.is_empty().then_some(DESCRIPTION_REQUIRED),
        tags: draft.tags.is_empty().then_some(TAGS_REQUIRED),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{FoodTag, PriceField};

    fn complete_draft() -> NewMenuItem {
        NewMenuItem {
            name: "Taco".into(),
            description: "Spicy taco".into(),
            tags: vec![FoodTag::Spicy],
            ..NewMenuItem::new()
        }
    }

    #[test]
    fn test_empty_draft_has_three_errors() {
        let errors = validate(&NewMenuItem::new());
        assert_eq!(errors.len(), 3);
        assert_eq!(errors.get(Field::Name), Some(NAME_REQUIRED));
        assert_eq!(errors.get(Field::Description), Some(DESCRIPTION_REQUIRED));
        assert_eq!(errors.get(Field::Tags), Some(TAGS_REQUIRED));
    }

    #[test]
    fn test_complete_draft_is_valid() {
        assert!(validate(&complete_draft()).is_empty());
    }

    #[test]
    fn test_price_is_never_validated() {
        let mut draft = complete_draft();
        draft.price = PriceField::Raw("not a number".into());
        let errors = validate(&draft);
        assert!(errors.is_empty());
        assert_eq!(errors.get(Field::Price), None);
    }

    #[test]
    fn test_each_missing_field_is_reported() {
        let mut draft = complete_draft();
        draft.name.clear();
        assert_eq!(validate(&draft).get(Field::Name), Some(NAME_REQUIRED));

        let mut draft = complete_draft();
        draft.description.clear();
        assert_eq!(validate(&draft).len(), 1);

        let mut draft = complete_draft();
        draft.tags.clear();
        assert_eq!(validate(&draft).tags, Some(TAGS_REQUIRED));
    }
}
