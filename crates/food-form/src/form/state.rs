//! Form State
//!
//! The draft, its submission status and the touched-field set, with the
//! transitions the admin form drives from UI events.

use std::collections::HashSet;

use super::field::Field;
use super::validation::{validate, FormErrors};
use crate::domain::{FoodTag, FormError, NewMenuItem, PriceField};

/// Where the form is in its submit cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitStatus {
    /// Nothing submitted yet
    #[default]
    Idle,
    /// Submit pressed while the draft had errors
    Submitted,
    /// Create request in flight
    Submitting,
}

impl SubmitStatus {
    pub fn is_submitting(&self) -> bool {
        matches!(self, SubmitStatus::Submitting)
    }
}

/// Result of pressing submit
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitStep {
    /// Draft has errors; nothing is sent
    Rejected(FormErrors),
    /// Draft is valid; send this payload
    Send(NewMenuItem),
    /// A request is already pending
    InFlight,
}

/// In-progress new menu item plus UI status
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FoodForm {
    draft: NewMenuItem,
    status: SubmitStatus,
    touched: HashSet<Field>,
}

impl FoodForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &NewMenuItem {
        &self.draft
    }

    pub fn status(&self) -> SubmitStatus {
        self.status
    }

    pub fn is_touched(&self, field: Field) -> bool {
        self.touched.contains(&field)
    }

    /// Current validation errors, computed fresh from the draft
    pub fn errors(&self) -> FormErrors {
        validate(&self.draft)
    }

    /// Error to display next to a field, if any
    pub fn visible_error(&self, field: Field) -> Option<&'static str> {
        let revealed = self.status == SubmitStatus::Submitted
            || (field.shows_error_when_touched() && self.is_touched(field));
        if revealed {
            self.errors().get(field)
        } else {
            None
        }
    }

    /// Overwrite a field from an input event, keyed by the input's id
    pub fn edit(&mut self, id: &str, raw: String) -> Result<(), FormError> {
        let field = Field::from_id(id)?;
        self.set_field(field, raw)
    }

    /// Overwrite a text field with the raw input value
    ///
    /// Price keeps the raw text; tags are edited with [`FoodForm::toggle_tag`].
    pub fn set_field(&mut self, field: Field, raw: String) -> Result<(), FormError> {
        match field {
            Field::Name => self.draft.name = raw,
            Field::Image => self.draft.image = raw,
            Field::Description => self.draft.description = raw,
            Field::Price => self.draft.price = PriceField::Raw(raw),
            Field::Tags => return Err(FormError::UnknownField(field.id().to_string())),
        }
        Ok(())
    }

    /// Apply a tag checkbox change
    pub fn toggle_tag(&mut self, tag: FoodTag, checked: bool) {
        if checked {
            self.draft.insert_tag(tag);
        } else {
            self.draft.remove_tag(tag);
        }
    }

    /// Record that the user left a field
    pub fn blur(&mut self, field: Field) {
        self.touched.insert(field);
    }

    /// Handle a submit press
    pub fn begin_submit(&mut self) -> SubmitStep {
        if self.status.is_submitting() {
            log::debug!("[FORM] submit ignored, request already in flight");
            return SubmitStep::InFlight;
        }
        let errors = self.errors();
        if !errors.is_empty() {
            log::debug!("[FORM] submit rejected with {} error(s)", errors.len());
            self.status = SubmitStatus::Submitted;
            return SubmitStep::Rejected(errors);
        }
        self.status = SubmitStatus::Submitting;
        SubmitStep::Send(self.draft.clone())
    }

    /// Settle an in-flight submit
    ///
    /// Success leaves the status alone since the view is about to go away.
    /// Failure drops back to `Idle` so the user can retry with the same draft.
    pub fn finish_submit(&mut self, succeeded: bool) {
        if !succeeded && self.status.is_submitting() {
            self.status = SubmitStatus::Idle;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::validation::{DESCRIPTION_REQUIRED, NAME_REQUIRED, TAGS_REQUIRED};

    fn filled_form() -> FoodForm {
        let mut form = FoodForm::new();
        form.edit("name", "Taco".into()).unwrap();
        form.edit("description", "Spicy taco".into()).unwrap();
        form.edit("price", "5".into()).unwrap();
        form.toggle_tag(FoodTag::Spicy, true);
        form
    }

    #[test]
    fn test_initial_state() {
        let form = FoodForm::new();
        assert_eq!(form.status(), SubmitStatus::Idle);
        assert_eq!(form.draft(), &NewMenuItem::new());
        assert!(!form.is_touched(Field::Name));
    }

    #[test]
    fn test_edit_by_id() {
        let mut form = FoodForm::new();
        form.edit("image", "taco.png".into()).unwrap();
        form.edit("price", "12.5".into()).unwrap();
        assert_eq!(form.draft().image, "taco.png");
        assert_eq!(form.draft().price, PriceField::Raw("12.5".into()));
    }

    #[test]
    fn test_edit_unknown_id_is_rejected() {
        let mut form = FoodForm::new();
        assert_eq!(form.edit("calories", "200".into()), Err(FormError::UnknownField("calories".into())));
        assert_eq!(form.edit("tags", "Spicy".into()), Err(FormError::UnknownField("tags".into())));
        assert_eq!(form.draft(), &NewMenuItem::new());
    }

    #[test]
    fn test_toggle_pair_restores_tags() {
        let mut form = FoodForm::new();
        form.toggle_tag(FoodTag::Lunch, true);
        let before = form.draft().tags.clone();

        form.toggle_tag(FoodTag::Dessert, true);
        form.toggle_tag(FoodTag::Dessert, false);
        assert_eq!(form.draft().tags, before);
    }

    #[test]
    fn test_empty_submit_flags_errors() {
        let mut form = FoodForm::new();
        let step = form.begin_submit();

        assert_eq!(form.status(), SubmitStatus::Submitted);
        match step {
            SubmitStep::Rejected(errors) => {
                assert_eq!(errors.name, Some(NAME_REQUIRED));
                assert_eq!(errors.description, Some(DESCRIPTION_REQUIRED));
                assert_eq!(errors.tags, Some(TAGS_REQUIRED));
            }
            other => panic!("expected rejection, got {:?}", other),
        }
    }

    #[test]
    fn test_valid_submit_moves_to_submitting() {
        let mut form = filled_form();
        assert_eq!(form.begin_submit(), SubmitStep::Send(form.draft().clone()));
        assert_eq!(form.status(), SubmitStatus::Submitting);
        assert_eq!(form.begin_submit(), SubmitStep::InFlight);
    }

    #[test]
    fn test_failed_submit_returns_to_idle() {
        let mut form = filled_form();
        form.begin_submit();
        form.finish_submit(false);
        assert_eq!(form.status(), SubmitStatus::Idle);
        assert_eq!(form.draft().name, "Taco");
    }

    #[test]
    fn test_name_error_shows_on_blur() {
        let mut form = FoodForm::new();
        assert_eq!(form.visible_error(Field::Name), None);
        form.blur(Field::Name);
        assert_eq!(form.visible_error(Field::Name), Some(NAME_REQUIRED));
    }

    #[test]
    fn test_description_error_waits_for_submit() {
        let mut form = FoodForm::new();
        form.blur(Field::Description);
        form.blur(Field::Tags);
        assert_eq!(form.visible_error(Field::Description), None);
        assert_eq!(form.visible_error(Field::Tags), None);

        form.begin_submit();
        assert_eq!(form.visible_error(Field::Description), Some(DESCRIPTION_REQUIRED));
        assert_eq!(form.visible_error(Field::Tags), Some(TAGS_REQUIRED));
        assert_eq!(form.visible_error(Field::Price), None);
    }

    #[test]
    fn test_errors_clear_as_draft_is_fixed() {
        let mut form = FoodForm::new();
        form.begin_submit();
        form.edit("name", "Soup".into()).unwrap();
        assert_eq!(form.visible_error(Field::Name), None);
        assert_eq!(form.visible_error(Field::Description), Some(DESCRIPTION_REQUIRED));
    }
}
