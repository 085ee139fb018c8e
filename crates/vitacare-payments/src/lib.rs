//! vitacare-payments
//!
//! View model behind the payments dashboard: completed payments grouped
//! by month, pending invoices, tab selection and search.

pub mod dashboard;
pub mod error;
pub mod ledger;
