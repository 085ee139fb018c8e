use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::account_type::AccountType;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum UserRole {
    Doctor,
    Patient,
    Hospital,
    Admin,
}

impl From<AccountType> for UserRole {
    fn from(account_type: AccountType) -> Self {
        match account_type {
            AccountType::Patient => UserRole::Patient,
            AccountType::Doctor => UserRole::Doctor,
            AccountType::Hospital => UserRole::Hospital,
        }
    }
}

/// The signed-in user held by the session store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct User {
    pub email: String,
    pub user_id: Uuid,
    /// Stellar account public key; empty until a wallet is linked.
    pub public_key: String,
    pub role: UserRole,
}
