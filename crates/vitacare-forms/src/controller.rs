//! The multi-variant registration form.
//!
//! One controller backs the Patient / Doctor / Hospital tab group. It owns
//! the active variant, the field values and the submission state, and
//! publishes every state change on a `watch` channel so a view can render
//! `Submitting` while the registration call is in flight.

use std::sync::Arc;

use serde::Serialize;
use tokio::sync::watch;
use tracing::{debug, info, warn};
use ts_rs::TS;
use vitacare_core::error::CoreError;
use vitacare_core::models::account_type::AccountType;
use vitacare_core::models::field::FieldName;
use vitacare_core::models::registration::{
    RegistrationReceipt, RegistrationRecord, RegistrationRequest,
};

use crate::layout::FormLayout;
use crate::registrar::Registrar;
use crate::rules;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, TS)]
#[serde(tag = "status", content = "detail", rename_all = "snake_case")]
#[ts(export)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Success(RegistrationReceipt),
    Error(String),
}

impl SubmissionState {
    pub fn is_submitting(&self) -> bool {
        matches!(self, SubmissionState::Submitting)
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            SubmissionState::Error(message) => Some(message),
            _ => None,
        }
    }
}

pub struct RegistrationFormController {
    registrar: Arc<dyn Registrar>,
    account_type: AccountType,
    record: RegistrationRecord,
    state: watch::Sender<SubmissionState>,
}

impl RegistrationFormController {
    /// A form on the default (Patient) tab with nothing filled in.
    pub fn new(registrar: Arc<dyn Registrar>) -> Self {
        let (state, _) = watch::channel(SubmissionState::Idle);
        Self {
            registrar,
            account_type: AccountType::default(),
            record: RegistrationRecord::new(),
            state,
        }
    }

    pub fn account_type(&self) -> AccountType {
        self.account_type
    }

    pub fn record(&self) -> &RegistrationRecord {
        &self.record
    }

    pub fn field(&self, name: FieldName) -> &str {
        self.record.get(name)
    }

    pub fn state(&self) -> SubmissionState {
        self.state.borrow().clone()
    }

    /// Observe state transitions, including `Submitting` while
    /// [`submit`](Self::submit) is awaiting the registrar.
    pub fn subscribe(&self) -> watch::Receiver<SubmissionState> {
        self.state.subscribe()
    }

    pub fn layout(&self) -> FormLayout {
        FormLayout::for_account_type(self.account_type)
    }

    /// Whether the submit button should be enabled.
    pub fn can_submit(&self) -> bool {
        !self.state.borrow().is_submitting()
    }

    pub fn submit_caption(&self) -> String {
        self.layout().submit_caption(!self.can_submit())
    }

    /// Switch tabs. Always starts the new tab from a blank form.
    pub fn select_variant(&mut self, account_type: AccountType) {
        debug!(from = %self.account_type, to = %account_type, "switching registration variant");
        self.account_type = account_type;
        self.record.clear();
        self.state.send_replace(SubmissionState::Idle);
    }

    /// Store a raw value. Nothing is validated until [`submit`](Self::submit);
    /// a visible error is dismissed by the edit.
    pub fn update_field(&mut self, name: FieldName, value: impl Into<String>) {
        self.record.set(name, value);
        self.state.send_if_modified(|state| {
            if matches!(state, SubmissionState::Error(_)) {
                *state = SubmissionState::Idle;
                true
            } else {
                false
            }
        });
    }

    /// [`update_field`](Self::update_field) keyed by the form input id.
    pub fn update_field_named(
        &mut self,
        name: &str,
        value: impl Into<String>,
    ) -> Result<(), CoreError> {
        let name = name.parse::<FieldName>()?;
        self.update_field(name, value);
        Ok(())
    }

    /// Validate and, if the form passes, register the account.
    ///
    /// Validation and service failures land in [`SubmissionState::Error`]
    /// with the form left as typed. Success clears the form. Dropping the
    /// returned future mid-flight puts the form back to `Idle`.
    pub async fn submit(&mut self) -> SubmissionState {
        if let Err(e) = rules::validate_registration(self.account_type, &self.record) {
            debug!(account_type = %self.account_type, error = %e, "registration failed validation");
            self.state.send_replace(SubmissionState::Error(e.to_string()));
            return self.state();
        }

        let request = RegistrationRequest::from_record(self.account_type, &self.record);
        self.state.send_replace(SubmissionState::Submitting);

        let in_flight = InFlight::new(&self.state);
        let outcome = self.registrar.register(request).await;
        in_flight.finish();

        match outcome {
            Ok(receipt) => {
                info!(
                    account_type = %receipt.account_type,
                    user_id = %receipt.user_id,
                    "registration complete"
                );
                self.record.clear();
                self.state.send_replace(SubmissionState::Success(receipt));
            }
            Err(e) => {
                warn!(account_type = %self.account_type, error = %e, "registration failed");
                self.state.send_replace(SubmissionState::Error(e.to_string()));
            }
        }
        self.state()
    }

    /// Dismiss the success panel ("Register Another Account").
    pub fn register_another(&mut self) {
        self.state.send_if_modified(|state| {
            if matches!(state, SubmissionState::Success(_)) {
                *state = SubmissionState::Idle;
                true
            } else {
                false
            }
        });
    }
}

/// Resets `Submitting` to `Idle` if the submit future is dropped before
/// the registrar answers.
struct InFlight<'a> {
    state: &'a watch::Sender<SubmissionState>,
    armed: bool,
}

impl<'a> InFlight<'a> {
    fn new(state: &'a watch::Sender<SubmissionState>) -> Self {
        Self { state, armed: true }
    }

    fn finish(mut self) {
        self.armed = false;
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if self.armed {
            debug!("registration cancelled while in flight");
            self.state.send_replace(SubmissionState::Idle);
        }
    }
}
