use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::info;
use vitacare_core::models::user::{User, UserRole};

use crate::error::SessionError;

/// Shared handle to the current session. Clones observe the same user.
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    user: Arc<RwLock<Option<User>>>,
}

impl SessionStore {
    /// A fresh, signed-out session. Create one per application and pass
    /// clones down rather than reaching for a global.
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn current(&self) -> Option<User> {
        self.user.read().await.clone()
    }

    pub async fn set_user(&self, user: Option<User>) {
        *self.user.write().await = user;
    }

    pub async fn sign_in(&self, user: User) {
        info!(user_id = %user.user_id, role = ?user.role, "user signed in");
        self.set_user(Some(user)).await;
    }

    /// Clears the session, returning the user that was signed in.
    pub async fn sign_out(&self) -> Option<User> {
        let previous = self.user.write().await.take();
        if let Some(user) = &previous {
            info!(user_id = %user.user_id, "user signed out");
        }
        previous
    }

    pub async fn require_user(&self) -> Result<User, SessionError> {
        self.current().await.ok_or(SessionError::NotSignedIn)
    }

    pub async fn role(&self) -> Option<UserRole> {
        self.user.read().await.as_ref().map(|u| u.role)
    }

    pub async fn is_signed_in(&self) -> bool {
        self.user.read().await.is_some()
    }
}
