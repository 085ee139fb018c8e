use serde::{Deserialize, Serialize};
use ts_rs::TS;
use vitacare_core::models::payment::{Payment, PendingPayment};

/// Completed payments sharing a month, e.g. "February 2025".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MonthGroup {
    pub label: String,
    pub payments: Vec<Payment>,
}

impl MonthGroup {
    pub fn total(&self) -> f64 {
        self.payments.iter().map(|p| p.amount).sum()
    }
}

pub fn month_label(date: jiff::civil::Date) -> String {
    date.strftime("%B %Y").to_string()
}

/// Group payments by calendar month. Groups appear in the order their
/// first payment appears; payments keep their input order.
pub fn group_by_month(payments: &[Payment]) -> Vec<MonthGroup> {
    let mut groups: Vec<MonthGroup> = Vec::new();
    for payment in payments {
        let label = month_label(payment.date);
        match groups.iter_mut().find(|g| g.label == label) {
            Some(group) => group.payments.push(payment.clone()),
            None => groups.push(MonthGroup {
                label,
                payments: vec![payment.clone()],
            }),
        }
    }
    groups
}

/// "$85.00"
pub fn format_amount(amount: f64) -> String {
    format!("${amount:.2}")
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

/// Case-insensitive match on doctor, specialty or invoice number. An empty
/// query matches everything.
pub fn payment_matches(payment: &Payment, query: &str) -> bool {
    let needle = query.trim().to_lowercase();
    needle.is_empty()
        || contains_ci(&payment.doctor, &needle)
        || contains_ci(&payment.specialty, &needle)
        || contains_ci(&payment.invoice_number, &needle)
}

pub fn pending_matches(payment: &PendingPayment, query: &str) -> bool {
    let needle = query.trim().to_lowercase();
    needle.is_empty()
        || contains_ci(&payment.doctor, &needle)
        || contains_ci(&payment.specialty, &needle)
        || contains_ci(&payment.invoice, &needle)
}
