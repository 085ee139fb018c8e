use vitacare_core::error::CoreError;
use vitacare_core::models::account_type::AccountType;
use vitacare_core::models::field::FieldName;
use vitacare_core::models::registration::{RegistrationRecord, RegistrationRequest};
use vitacare_core::models::user::UserRole;

#[test]
fn account_type_parses_display_names_case_insensitively() {
    assert_eq!("Doctor".parse::<AccountType>(), Ok(AccountType::Doctor));
    assert_eq!(" hospital ".parse::<AccountType>(), Ok(AccountType::Hospital));
    assert_eq!("PATIENT".parse::<AccountType>(), Ok(AccountType::Patient));
}

#[test]
fn unknown_account_type_is_rejected() {
    assert_eq!(
        "Nurse".parse::<AccountType>(),
        Err(CoreError::InvalidAccountType("Nurse".to_string()))
    );
    assert!("".parse::<AccountType>().is_err());
}

#[test]
fn default_account_type_is_patient() {
    assert_eq!(AccountType::default(), AccountType::Patient);
}

#[test]
fn required_fields_extend_the_common_set() {
    assert_eq!(AccountType::Patient.required_fields(), FieldName::COMMON_REQUIRED.to_vec());

    let doctor = AccountType::Doctor.required_fields();
    assert!(doctor.contains(&FieldName::LicenseNumber));
    assert!(doctor.contains(&FieldName::Specialization));
    assert_eq!(doctor.len(), 7);

    let hospital = AccountType::Hospital.required_fields();
    assert!(hospital.contains(&FieldName::HospitalName));
    assert!(hospital.contains(&FieldName::Address));
    assert!(!hospital.contains(&FieldName::LicenseNumber));
}

#[test]
fn every_required_field_is_on_the_form() {
    for account_type in AccountType::ALL {
        for field in account_type.required_fields() {
            assert!(
                account_type.form_fields().contains(&field),
                "{account_type} form is missing {field}"
            );
        }
    }
}

#[test]
fn field_names_use_form_input_ids() {
    assert_eq!("dateOfBirth".parse::<FieldName>(), Ok(FieldName::DateOfBirth));
    assert_eq!("licenseNumber".parse::<FieldName>(), Ok(FieldName::LicenseNumber));
    assert_eq!(
        "HpNum".parse::<FieldName>(),
        Err(CoreError::UnknownField("HpNum".to_string()))
    );
    assert_eq!(
        serde_json::to_string(&FieldName::HospitalName).unwrap(),
        "\"hospitalName\""
    );
}

#[test]
fn record_treats_missing_as_blank() {
    let mut record = RegistrationRecord::new();
    assert!(record.is_blank(FieldName::Email));
    assert_eq!(record.get(FieldName::Email), "");

    record.set(FieldName::Email, "");
    assert!(record.is_empty());

    record.set(FieldName::Email, "jane@example.com");
    assert!(!record.is_empty());
    assert_eq!(record.get(FieldName::Email), "jane@example.com");

    record.clear();
    assert!(record.is_empty());
}

#[test]
fn record_debug_hides_password() {
    let mut record = RegistrationRecord::new();
    record.set(FieldName::Email, "jane@example.com");
    record.set(FieldName::Password, "hunter22hunter");

    let debug = format!("{record:?}");
    assert!(debug.contains("jane@example.com"));
    assert!(!debug.contains("hunter22hunter"));
}

#[test]
fn request_only_carries_fields_of_the_selected_form() {
    let mut record = RegistrationRecord::new();
    record.set(FieldName::FirstName, "John");
    record.set(FieldName::Email, "john@example.com");
    record.set(FieldName::Specialization, "Cardiology");
    record.set(FieldName::LastName, "");

    let request = RegistrationRequest::from_record(AccountType::Patient, &record);
    assert_eq!(request.email(), "john@example.com");
    assert_eq!(request.field(FieldName::FirstName), "John");
    assert!(!request.fields.contains_key(&FieldName::Specialization));
    assert!(!request.fields.contains_key(&FieldName::LastName));

    let json = serde_json::to_value(&request).unwrap();
    assert_eq!(json["accountType"], "Patient");
    assert_eq!(json["fields"]["firstName"], "John");
}

#[test]
fn account_types_map_to_user_roles() {
    assert_eq!(UserRole::from(AccountType::Doctor), UserRole::Doctor);
    assert_eq!(UserRole::from(AccountType::Hospital), UserRole::Hospital);
    assert_eq!(UserRole::from(AccountType::Patient), UserRole::Patient);
}

#[test]
fn only_doctors_and_hospitals_are_licensed() {
    assert!(!AccountType::Patient.is_licensed());
    assert!(AccountType::Doctor.is_licensed());
    assert!(AccountType::Hospital.is_licensed());
}
