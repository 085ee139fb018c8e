use serde::Serialize;
use vitacare_core::models::account_type::AccountType;
use vitacare_core::models::field::FieldName;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InputKind {
    Text,
    Email,
    Password,
    /// Free text in mm/dd/yyyy, rendered with a calendar icon.
    Date,
}

/// One input on a registration form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldSpec {
    pub name: FieldName,
    pub label: &'static str,
    pub placeholder: Option<&'static str>,
    pub input: InputKind,
    pub required: bool,
}

/// Everything a view needs to render the form for one account type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormLayout {
    pub account_type: AccountType,
    pub title: &'static str,
    pub description: &'static str,
    pub fields: Vec<FieldSpec>,
}

impl FormLayout {
    pub fn for_account_type(account_type: AccountType) -> Self {
        let (title, description) = match account_type {
            AccountType::Patient => (
                "Patient Registration",
                "Create a patient account to manage your medical records and appointments.",
            ),
            AccountType::Doctor => (
                "Doctor Registration",
                "Create a doctor account to manage your practice and patient records.",
            ),
            AccountType::Hospital => (
                "Hospital Registration",
                "Create a hospital account to manage your facility and staff.",
            ),
        };

        let required = account_type.required_fields();
        let fields = account_type
            .form_fields()
            .iter()
            .map(|name| {
                let (label, placeholder, input) = presentation(account_type, *name);
                FieldSpec {
                    name: *name,
                    label,
                    placeholder,
                    input,
                    required: required.contains(name),
                }
            })
            .collect();

        Self {
            account_type,
            title,
            description,
            fields,
        }
    }

    pub fn field(&self, name: FieldName) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn submit_caption(&self, submitting: bool) -> String {
        if submitting {
            format!("Creating {} Account...", self.account_type)
        } else {
            format!("Create {} Account", self.account_type)
        }
    }

    pub fn success_message(&self) -> String {
        format!(
            "Your {} account has been created successfully.",
            self.account_type.as_str().to_lowercase()
        )
    }
}

fn presentation(
    account_type: AccountType,
    name: FieldName,
) -> (&'static str, Option<&'static str>, InputKind) {
    let hospital = account_type == AccountType::Hospital;
    match name {
        FieldName::FirstName if hospital => ("Admin first name", Some("John"), InputKind::Text),
        FieldName::LastName if hospital => ("Admin last name", Some("Doe"), InputKind::Text),
        FieldName::FirstName => ("First name", Some("John"), InputKind::Text),
        FieldName::LastName => ("Last name", Some("Doe"), InputKind::Text),
        FieldName::Email if hospital => {
            ("Admin Email", Some("admin@cityhospital.com"), InputKind::Email)
        }
        FieldName::Email => ("Email", Some("john.doe@example.com"), InputKind::Email),
        FieldName::Password if hospital => {
            ("Password", Some("admin Password"), InputKind::Password)
        }
        FieldName::Password => ("Password", None, InputKind::Password),
        FieldName::DateOfBirth => ("Date of Birth", Some("mm/dd/yyyy"), InputKind::Date),
        FieldName::LicenseNumber if hospital => {
            ("Hospital License Number", Some("HL98765432"), InputKind::Text)
        }
        FieldName::LicenseNumber => ("License Number", Some("MD12345678"), InputKind::Text),
        FieldName::Specialization => ("Specialization", Some("Cardiology"), InputKind::Text),
        FieldName::HospitalName => {
            ("Hospital Name", Some("City General Hospital"), InputKind::Text)
        }
        FieldName::Address => ("Address", Some("123 Medical Center Blvd"), InputKind::Text),
        FieldName::PhoneNumber => ("Phone Number", Some("(555) 123-4567"), InputKind::Text),
    }
}
