use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// Canonical registration field names. The wire form is the camelCase
/// input id used by the web form (`firstName`, `dateOfBirth`, ...).
///
/// A hospital's license number is stored under `licenseNumber`, the same
/// key doctors use.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub enum FieldName {
    FirstName,
    LastName,
    Email,
    Password,
    DateOfBirth,
    LicenseNumber,
    Specialization,
    HospitalName,
    Address,
    PhoneNumber,
}

impl FieldName {
    pub const ALL: [FieldName; 10] = [
        FieldName::FirstName,
        FieldName::LastName,
        FieldName::Email,
        FieldName::Password,
        FieldName::DateOfBirth,
        FieldName::LicenseNumber,
        FieldName::Specialization,
        FieldName::HospitalName,
        FieldName::Address,
        FieldName::PhoneNumber,
    ];

    /// Required for every account type.
    pub const COMMON_REQUIRED: [FieldName; 5] = [
        FieldName::FirstName,
        FieldName::LastName,
        FieldName::Email,
        FieldName::Password,
        FieldName::DateOfBirth,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FieldName::FirstName => "firstName",
            FieldName::LastName => "lastName",
            FieldName::Email => "email",
            FieldName::Password => "password",
            FieldName::DateOfBirth => "dateOfBirth",
            FieldName::LicenseNumber => "licenseNumber",
            FieldName::Specialization => "specialization",
            FieldName::HospitalName => "hospitalName",
            FieldName::Address => "address",
            FieldName::PhoneNumber => "phoneNumber",
        }
    }

    pub fn is_secret(&self) -> bool {
        matches!(self, FieldName::Password)
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldName {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldName::ALL
            .into_iter()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| CoreError::UnknownField(s.to_string()))
    }
}
