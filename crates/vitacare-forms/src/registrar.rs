use std::collections::HashSet;
use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use tokio::sync::Mutex;
use tracing::{info, warn};
use uuid::Uuid;
use vitacare_core::models::field::FieldName;
use vitacare_core::models::registration::{RegistrationReceipt, RegistrationRequest};

use crate::error::RegistrarError;

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Default latency of [`StubRegistrar`], matching the web form's fake delay.
pub const DEFAULT_SUBMIT_DELAY: Duration = Duration::from_millis(1000);

/// The registration service the form submits to.
///
/// Creating an account is create-or-conflict: registering an email that
/// already has an account fails with [`RegistrarError::Conflict`], and a
/// doctor or hospital license number that is already registered fails with
/// [`RegistrarError::LicenseConflict`]. A conflicting request creates nothing.
pub trait Registrar: Send + Sync {
    fn register(
        &self,
        request: RegistrationRequest,
    ) -> BoxFuture<'_, Result<RegistrationReceipt, RegistrarError>>;
}

/// In-memory stand-in for the registration service. Waits `delay`, then
/// hands out a fresh user id.
#[derive(Debug)]
pub struct StubRegistrar {
    delay: Duration,
    registered: Mutex<Registry>,
}

#[derive(Debug, Default)]
struct Registry {
    emails: HashSet<String>,
    licenses: HashSet<String>,
}

impl StubRegistrar {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            registered: Mutex::new(Registry::default()),
        }
    }

    /// A stub that answers immediately.
    pub fn instant() -> Self {
        Self::new(Duration::ZERO)
    }

    pub async fn is_registered(&self, email: &str) -> bool {
        self.registered
            .lock()
            .await
            .emails
            .contains(&email.to_lowercase())
    }

    pub async fn is_license_registered(&self, license_number: &str) -> bool {
        self.registered
            .lock()
            .await
            .licenses
            .contains(&license_number.to_uppercase())
    }
}

impl Default for StubRegistrar {
    fn default() -> Self {
        Self::new(DEFAULT_SUBMIT_DELAY)
    }
}

impl Registrar for StubRegistrar {
    fn register(
        &self,
        request: RegistrationRequest,
    ) -> BoxFuture<'_, Result<RegistrationReceipt, RegistrarError>> {
        Box::pin(async move {
            info!(?request, "submitting registration");

            if !self.delay.is_zero() {
                tokio::time::sleep(self.delay).await;
            }

            let email = request.email().to_lowercase();
            let license = request
                .account_type
                .is_licensed()
                .then(|| request.field(FieldName::LicenseNumber).to_uppercase())
                .filter(|l| !l.is_empty());

            let mut registry = self.registered.lock().await;
            if registry.emails.contains(&email) {
                warn!(email = %email, "email already registered");
                return Err(RegistrarError::Conflict {
                    email: request.email().to_string(),
                });
            }
            if let Some(license) = &license
                && registry.licenses.contains(license)
            {
                warn!(license_number = %license, "license already registered");
                return Err(RegistrarError::LicenseConflict {
                    license_number: request.field(FieldName::LicenseNumber).to_string(),
                });
            }

            registry.emails.insert(email);
            if let Some(license) = license {
                registry.licenses.insert(license);
            }

            Ok(RegistrationReceipt {
                user_id: Uuid::new_v4(),
                account_type: request.account_type,
                email: request.email().to_string(),
                verified: !request.account_type.is_licensed(),
                registered_at: jiff::Timestamp::now(),
            })
        })
    }
}
