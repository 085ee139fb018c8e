use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A settled payment shown in the completed-payments history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Payment {
    pub doctor: String,
    pub specialty: String,
    pub invoice_number: String,
    #[ts(type = "string")]
    pub date: jiff::civil::Date,
    /// USD.
    pub amount: f64,
}

/// An invoice still waiting to be paid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct PendingPayment {
    pub doctor: String,
    pub specialty: String,
    pub invoice: String,
    #[ts(type = "string")]
    pub due_date: jiff::civil::Date,
    pub amount: f64,
}
