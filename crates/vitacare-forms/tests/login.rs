use vitacare_core::models::account_type::AccountType;
use vitacare_core::models::user::UserRole;
use vitacare_forms::login::{sign_in, FieldError, LoginField, LoginForm};
use vitacare_session::store::SessionStore;

fn field_error(field: LoginField, message: &str) -> FieldError {
    FieldError {
        field,
        message: message.to_string(),
    }
}

#[test]
fn empty_form_reports_every_field() {
    let errors = LoginForm::default().validate().unwrap_err();
    assert_eq!(
        errors,
        vec![
            field_error(LoginField::Email, "Email is required"),
            field_error(LoginField::Password, "Password is required"),
            field_error(LoginField::AccountType, "Please select an account type"),
        ]
    );
}

#[test]
fn format_errors_replace_required_errors() {
    let form = LoginForm {
        email: "not-an-email".to_string(),
        password: "short".to_string(),
        account_type: Some(AccountType::Patient),
    };
    assert_eq!(
        form.validate().unwrap_err(),
        vec![
            field_error(LoginField::Email, "Invalid email format"),
            field_error(LoginField::Password, "Password must be at least 8 characters long"),
        ]
    );
}

#[test]
fn valid_form_yields_credentials() {
    let form = LoginForm {
        email: "jane@example.com".to_string(),
        password: "password123".to_string(),
        account_type: Some(AccountType::Doctor),
    };
    let credentials = form.validate().unwrap();
    assert_eq!(credentials.account_type, AccountType::Doctor);
    assert!(!format!("{credentials:?}").contains("password123"));
}

#[test]
fn login_form_reads_camel_case_json() {
    let form: LoginForm = serde_json::from_str(
        r#"{"email":"jane@example.com","password":"password123","accountType":"Hospital"}"#,
    )
    .unwrap();
    assert_eq!(form.account_type, Some(AccountType::Hospital));

    let partial: LoginForm = serde_json::from_str(r#"{"email":"jane@example.com"}"#).unwrap();
    assert_eq!(partial.account_type, None);
}

#[tokio::test]
async fn sign_in_populates_the_session() {
    let session = SessionStore::new();
    let credentials = LoginForm {
        email: "Jane@Example.com".to_string(),
        password: "password123".to_string(),
        account_type: Some(AccountType::Hospital),
    }
    .validate()
    .unwrap();

    let user = sign_in(&credentials, &session).await;
    assert_eq!(user.email, "jane@example.com");
    assert_eq!(user.role, UserRole::Hospital);
    assert_eq!(session.current().await, Some(user.clone()));

    let again = sign_in(&credentials, &SessionStore::new()).await;
    assert_eq!(again.user_id, user.user_id);
}
