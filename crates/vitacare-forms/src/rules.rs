//! Ordered validation rules for the registration form.
//!
//! Rules run in a fixed order and stop at the first failure, so the form
//! only ever shows one message at a time.

use std::sync::LazyLock;

use regex::Regex;
use vitacare_core::models::account_type::AccountType;
use vitacare_core::models::field::FieldName;
use vitacare_core::models::registration::RegistrationRecord;

use crate::error::ValidationError;

pub const MIN_PASSWORD_LEN: usize = 8;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

// mm/dd/yyyy with ASCII digits only, years 1900-2099. Day-of-month is not
// checked against the month.
static DATE_OF_BIRTH_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(0[1-9]|1[0-2])/(0[1-9]|[12][0-9]|3[01])/(19|20)[0-9]{2}$")
        .expect("date pattern is valid")
});

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

pub fn is_valid_date_of_birth(date: &str) -> bool {
    DATE_OF_BIRTH_RE.is_match(date)
}

pub fn is_long_enough_password(password: &str) -> bool {
    password.chars().count() >= MIN_PASSWORD_LEN
}

/// Check `record` against the rules for `account_type`.
pub fn validate_registration(
    account_type: AccountType,
    record: &RegistrationRecord,
) -> Result<(), ValidationError> {
    if FieldName::COMMON_REQUIRED.iter().any(|f| record.is_blank(*f)) {
        return Err(ValidationError::MissingRequiredFields);
    }

    if !is_valid_email(record.get(FieldName::Email)) {
        return Err(ValidationError::InvalidEmail);
    }

    if !is_long_enough_password(record.get(FieldName::Password)) {
        return Err(ValidationError::PasswordTooShort);
    }

    if !is_valid_date_of_birth(record.get(FieldName::DateOfBirth)) {
        return Err(ValidationError::InvalidDateOfBirth);
    }

    let specific_missing = account_type
        .specific_required_fields()
        .iter()
        .any(|f| record.is_blank(*f));

    match account_type {
        AccountType::Doctor if specific_missing => Err(ValidationError::MissingDoctorFields),
        AccountType::Hospital if specific_missing => Err(ValidationError::MissingHospitalFields),
        _ => Ok(()),
    }
}
