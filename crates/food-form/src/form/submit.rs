//! Submission Driver
//!
//! Runs a submit press against injected collaborators: the foods endpoint,
//! a navigator and a toast notifier. The form itself is reached through
//! [`FormStore`] so the driver never holds a borrow across the request.

use async_trait::async_trait;
use std::cell::RefCell;

use super::state::{FoodForm, SubmitStep};
use super::validation::FormErrors;
use crate::domain::{ApiError, MenuItem, NewMenuItem};

/// Path of the menu listing view
pub const LISTING_PATH: &str = "/";

pub const CREATED_MESSAGE: &str = "Food added!";

/// Remote foods collection
#[async_trait(?Send)]
pub trait FoodsApi {
    /// POST a new item
    async fn create_food(&self, food: &NewMenuItem) -> Result<(), ApiError>;

    /// GET every item
    async fn list_foods(&self) -> Result<Vec<MenuItem>, ApiError>;
}

/// View navigation
pub trait Navigator {
    fn navigate(&self, path: &str);
}

/// User-facing notifications
pub trait Notifier {
    fn success(&self, message: &str);
    fn error(&self, message: &str);
}

/// Access to the form held by the UI
pub trait FormStore {
    /// Run `f` against the form. `None` if the form no longer exists.
    fn with_form<R>(&self, f: impl FnOnce(&mut FoodForm) -> R) -> Option<R>;
}

impl FormStore for RefCell<FoodForm> {
    fn with_form<R>(&self, f: impl FnOnce(&mut FoodForm) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}

/// How a submit press ended
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Validation failed; no request was made
    Rejected(FormErrors),
    /// Another request was already pending, or the form is gone
    Ignored,
    /// Item created and the listing view requested
    Created,
    /// Request failed; the draft is kept
    Failed(ApiError),
}

/// Drives submit presses for one form instance
pub struct FormSubmitter<A, N, T> {
    api: A,
    navigator: N,
    notifier: T,
    redirect_to: String,
}

impl<A, N, T> FormSubmitter<A, N, T>
where
    A: FoodsApi,
    N: Navigator,
    T: Notifier,
{
    pub fn new(api: A, navigator: N, notifier: T) -> Self {
        Self {
            api,
            navigator,
            notifier,
            redirect_to: LISTING_PATH.to_string(),
        }
    }

    /// Navigate somewhere other than the listing after a successful create
    pub fn with_redirect(mut self, path: impl Into<String>) -> Self {
        self.redirect_to = path.into();
        self
    }

    pub async fn submit<S: FormStore>(&self, store: &S) -> SubmitOutcome {
        let payload = match store.with_form(|form| form.begin_submit()) {
            Some(SubmitStep::Send(payload)) => payload,
            Some(SubmitStep::Rejected(errors)) => return SubmitOutcome::Rejected(errors),
            Some(SubmitStep::InFlight) | None => return SubmitOutcome::Ignored,
        };

        log::info!("[FORM] creating food {:?}", payload.name);
        let result = self.api.create_food(&payload).await;
        // Status is settled before navigating: the form is dropped with the view.
        store.with_form(|form| form.finish_submit(result.is_ok()));

        match result {
            Ok(()) => {
                self.notifier.success(CREATED_MESSAGE);
                self.navigator.navigate(&self.redirect_to);
                SubmitOutcome::Created
            }
            Err(e) => {
                log::warn!("[FORM] create failed: {}", e);
                self.notifier.error(&format!("Failed to add food: {}", e));
                SubmitOutcome::Failed(e)
            }
        }
    }
}
