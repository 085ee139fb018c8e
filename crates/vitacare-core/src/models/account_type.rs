use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::field::FieldName;
use crate::error::CoreError;

/// The kind of account being registered. Selects which form tab is shown
/// and which fields become required.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum AccountType {
    #[default]
    Patient,
    Doctor,
    Hospital,
}

impl AccountType {
    /// All variants in tab order.
    pub const ALL: [AccountType; 3] = [
        AccountType::Patient,
        AccountType::Doctor,
        AccountType::Hospital,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AccountType::Patient => "Patient",
            AccountType::Doctor => "Doctor",
            AccountType::Hospital => "Hospital",
        }
    }

    /// Fields that only this variant requires, on top of
    /// [`FieldName::COMMON_REQUIRED`].
    pub fn specific_required_fields(&self) -> &'static [FieldName] {
        match self {
            AccountType::Patient => &[],
            AccountType::Doctor => &[FieldName::LicenseNumber, FieldName::Specialization],
            AccountType::Hospital => &[FieldName::HospitalName, FieldName::Address],
        }
    }

    /// Every field this variant requires before it can be submitted.
    pub fn required_fields(&self) -> Vec<FieldName> {
        FieldName::COMMON_REQUIRED
            .iter()
            .chain(self.specific_required_fields())
            .copied()
            .collect()
    }

    /// Doctors and hospitals register against a license and start unverified.
    pub fn is_licensed(&self) -> bool {
        matches!(self, AccountType::Doctor | AccountType::Hospital)
    }

    /// Fields the variant's form collects, in display order. Anything else
    /// stored in a record is left out of the submitted request.
    pub fn form_fields(&self) -> &'static [FieldName] {
        match self {
            AccountType::Patient => &[
                FieldName::FirstName,
                FieldName::LastName,
                FieldName::Email,
                FieldName::Password,
                FieldName::DateOfBirth,
            ],
            AccountType::Doctor => &[
                FieldName::FirstName,
                FieldName::LastName,
                FieldName::LicenseNumber,
                FieldName::Specialization,
                FieldName::Email,
                FieldName::Password,
                FieldName::DateOfBirth,
            ],
            AccountType::Hospital => &[
                FieldName::HospitalName,
                FieldName::FirstName,
                FieldName::LastName,
                FieldName::Email,
                FieldName::Password,
                FieldName::LicenseNumber,
                FieldName::Address,
                FieldName::PhoneNumber,
                FieldName::DateOfBirth,
            ],
        }
    }
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AccountType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        AccountType::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| CoreError::InvalidAccountType(s.to_string()))
    }
}
