//! Sign-in form schema.
//!
//! Unlike registration, every field is checked and all failures are
//! reported together, one message per field.

use serde::{Deserialize, Serialize};
use tracing::info;
use ts_rs::TS;
use uuid::Uuid;
use vitacare_core::models::account_type::AccountType;
use vitacare_core::models::user::{User, UserRole};
use vitacare_session::store::SessionStore;

use crate::rules;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub enum LoginField {
    Email,
    Password,
    AccountType,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FieldError {
    pub field: LoginField,
    pub message: String,
}

impl FieldError {
    fn new(field: LoginField, message: &str) -> Self {
        Self {
            field,
            message: message.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginForm {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub account_type: Option<AccountType>,
}

/// A sign-in form that passed validation.
#[derive(Clone, PartialEq, Eq)]
pub struct LoginCredentials {
    pub email: String,
    pub password: String,
    pub account_type: AccountType,
}

impl std::fmt::Debug for LoginCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginCredentials")
            .field("email", &self.email)
            .field("account_type", &self.account_type)
            .finish_non_exhaustive()
    }
}

impl LoginForm {
    pub fn validate(&self) -> Result<LoginCredentials, Vec<FieldError>> {
        let mut errors = Vec::new();

        if self.email.is_empty() {
            errors.push(FieldError::new(LoginField::Email, "Email is required"));
        } else if !rules::is_valid_email(&self.email) {
            errors.push(FieldError::new(LoginField::Email, "Invalid email format"));
        }

        if self.password.is_empty() {
            errors.push(FieldError::new(LoginField::Password, "Password is required"));
        } else if !rules::is_long_enough_password(&self.password) {
            errors.push(FieldError::new(
                LoginField::Password,
                "Password must be at least 8 characters long",
            ));
        }

        if self.account_type.is_none() {
            errors.push(FieldError::new(
                LoginField::AccountType,
                "Please select an account type",
            ));
        }

        match self.account_type {
            Some(account_type) if errors.is_empty() => Ok(LoginCredentials {
                email: self.email.clone(),
                password: self.password.clone(),
                account_type,
            }),
            _ => Err(errors),
        }
    }
}

/// Sign `credentials` into `session`.
///
/// There is no authentication back end yet: any validated credentials are
/// accepted, and the user id is derived from the email so the same account
/// always gets the same id.
pub async fn sign_in(credentials: &LoginCredentials, session: &SessionStore) -> User {
    let email = credentials.email.to_lowercase();
    let user = User {
        user_id: Uuid::new_v5(&Uuid::NAMESPACE_OID, email.as_bytes()),
        email,
        public_key: String::new(),
        role: UserRole::from(credentials.account_type),
    };
    info!(user_id = %user.user_id, account_type = %credentials.account_type, "signing in");
    session.sign_in(user.clone()).await;
    user
}
