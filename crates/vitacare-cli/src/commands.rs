use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use vitacare_core::models::account_type::AccountType;
use vitacare_core::models::payment::{Payment, PendingPayment};
use vitacare_core::models::user::User;
use vitacare_forms::controller::{RegistrationFormController, SubmissionState};
use vitacare_forms::login::{self, FieldError, LoginForm};
use vitacare_forms::registrar::Registrar;
use vitacare_payments::dashboard::{DashboardTab, DashboardView, PaymentsDashboard};
use vitacare_session::store::SessionStore;

pub fn read_json<T: DeserializeOwned>(path: &Path) -> eyre::Result<T> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("failed to read {}: {e}", path.display()))?;
    serde_json::from_str(&contents)
        .map_err(|e| eyre::eyre!("failed to parse {}: {e}", path.display()))
}

/// A registration as typed into the web form: the selected tab plus raw
/// input values keyed by input id.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterInput {
    pub account_type: String,
    #[serde(default)]
    pub fields: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterOutcome {
    pub account_type: AccountType,
    pub state: SubmissionState,
    pub message: Option<String>,
}

/// Run `input` through the registration form exactly as a user would:
/// select the tab, type each field, press submit.
pub async fn register(
    input: RegisterInput,
    registrar: Arc<dyn Registrar>,
) -> eyre::Result<RegisterOutcome> {
    let account_type: AccountType = input.account_type.parse()?;

    let mut form = RegistrationFormController::new(registrar);
    form.select_variant(account_type);
    for (name, value) in input.fields {
        form.update_field_named(&name, value)?;
    }

    let state = form.submit().await;
    let message = match &state {
        SubmissionState::Success(_) => Some(form.layout().success_message()),
        SubmissionState::Error(message) => Some(message.clone()),
        SubmissionState::Idle | SubmissionState::Submitting => None,
    };

    Ok(RegisterOutcome {
        account_type,
        state,
        message,
    })
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum LoginOutcome {
    SignedIn { user: User },
    Rejected { errors: Vec<FieldError> },
}

pub async fn login(form: LoginForm, session: &SessionStore) -> LoginOutcome {
    match form.validate() {
        Ok(credentials) => LoginOutcome::SignedIn {
            user: login::sign_in(&credentials, session).await,
        },
        Err(errors) => {
            tracing::debug!(count = errors.len(), "sign-in form rejected");
            LoginOutcome::Rejected { errors }
        }
    }
}

/// Payments history as exported for the dashboard.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Ledger {
    #[serde(default)]
    pub completed: Vec<Payment>,
    #[serde(default)]
    pub pending: Vec<PendingPayment>,
}

pub fn payments(
    ledger: Ledger,
    tab: Option<&str>,
    search: Option<&str>,
) -> eyre::Result<DashboardView> {
    let mut dashboard = PaymentsDashboard::new(ledger.completed, ledger.pending);
    if let Some(tab) = tab {
        dashboard.select_tab(tab.parse::<DashboardTab>()?);
    }
    if let Some(search) = search {
        dashboard.set_search(search);
    }
    Ok(dashboard.view())
}
