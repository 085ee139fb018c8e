pub mod account_type;
pub mod field;
pub mod payment;
pub mod registration;
pub mod user;
