use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::account_type::AccountType;
use super::field::FieldName;

const REDACTED: &str = "********";

/// In-progress form values, keyed by field. Absent and empty are the same
/// thing as far as validation is concerned.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationRecord {
    values: BTreeMap<FieldName, String>,
}

impl RegistrationRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Value of `field`, or `""` when it was never set.
    pub fn get(&self, field: FieldName) -> &str {
        self.values.get(&field).map(String::as_str).unwrap_or("")
    }

    pub fn set(&mut self, field: FieldName, value: impl Into<String>) {
        self.values.insert(field, value.into());
    }

    pub fn is_blank(&self, field: FieldName) -> bool {
        self.get(field).is_empty()
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }

    /// True when no field holds a non-empty value.
    pub fn is_empty(&self) -> bool {
        self.values.values().all(String::is_empty)
    }

    pub fn iter(&self) -> impl Iterator<Item = (FieldName, &str)> {
        self.values.iter().map(|(k, v)| (*k, v.as_str()))
    }
}

impl fmt::Debug for RegistrationRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(
                self.iter()
                    .map(|(k, v)| (k, if k.is_secret() { REDACTED } else { v })),
            )
            .finish()
    }
}

/// Payload handed to the registration service.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct RegistrationRequest {
    pub account_type: AccountType,
    pub fields: BTreeMap<FieldName, String>,
}

impl RegistrationRequest {
    /// Build a request from the fields `account_type`'s form collects,
    /// dropping empty values and anything entered under another tab.
    pub fn from_record(account_type: AccountType, record: &RegistrationRecord) -> Self {
        let fields = account_type
            .form_fields()
            .iter()
            .filter(|f| !record.is_blank(**f))
            .map(|f| (*f, record.get(*f).to_string()))
            .collect();
        Self {
            account_type,
            fields,
        }
    }

    pub fn field(&self, field: FieldName) -> &str {
        self.fields.get(&field).map(String::as_str).unwrap_or("")
    }

    pub fn email(&self) -> &str {
        self.field(FieldName::Email)
    }
}

impl fmt::Debug for RegistrationRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let redacted: BTreeMap<_, _> = self
            .fields
            .iter()
            .map(|(k, v)| (*k, if k.is_secret() { REDACTED } else { v.as_str() }))
            .collect();
        f.debug_struct("RegistrationRequest")
            .field("account_type", &self.account_type)
            .field("fields", &redacted)
            .finish()
    }
}

/// What the registration service hands back for a created account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct RegistrationReceipt {
    pub user_id: Uuid,
    pub account_type: AccountType,
    pub email: String,
    /// Doctor and hospital accounts start unverified until their license is
    /// checked; patient accounts need no verification.
    pub verified: bool,
    pub registered_at: jiff::Timestamp,
}
