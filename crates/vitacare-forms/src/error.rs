use thiserror::Error;

/// Why a registration form was refused before reaching the service. The
/// display text is what the form shows above its fields.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please fill in all required fields")]
    MissingRequiredFields,

    #[error("Please enter a valid email address")]
    InvalidEmail,

    #[error("Password must be at least 8 characters long")]
    PasswordTooShort,

    #[error("Please enter a valid date in mm/dd/yyyy format")]
    InvalidDateOfBirth,

    #[error("Please fill in all doctor-specific fields")]
    MissingDoctorFields,

    #[error("Please fill in all hospital-specific fields")]
    MissingHospitalFields,
}

/// Failures reported by the registration service.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RegistrarError {
    #[error("An account with email {email} already exists")]
    Conflict { email: String },

    #[error("An account with license number {license_number} already exists")]
    LicenseConflict { license_number: String },

    #[error("{0}")]
    Rejected(String),

    #[error("Registration service unavailable: {0}")]
    Unavailable(String),
}
