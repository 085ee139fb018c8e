use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;
use ts_rs::TS;
use vitacare_core::models::payment::{Payment, PendingPayment};

use crate::error::PaymentsError;
use crate::ledger::{self, MonthGroup};

pub const NO_PENDING_MESSAGE: &str = "No pending payments at this time";
pub const WALLET_DISCONNECTED_MESSAGE: &str = "Please connect your Stellar wallet to view details";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum DashboardTab {
    Pending,
    #[default]
    Completed,
    Wallet,
}

impl DashboardTab {
    pub const ALL: [DashboardTab; 3] = [
        DashboardTab::Pending,
        DashboardTab::Completed,
        DashboardTab::Wallet,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DashboardTab::Pending => "pending",
            DashboardTab::Completed => "completed",
            DashboardTab::Wallet => "wallet",
        }
    }
}

impl fmt::Display for DashboardTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DashboardTab {
    type Err = PaymentsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DashboardTab::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| PaymentsError::UnknownTab(s.to_string()))
    }
}

/// What the dashboard body shows for the active tab.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[serde(tag = "tab", rename_all = "snake_case")]
#[ts(export)]
pub enum DashboardView {
    Completed { groups: Vec<MonthGroup> },
    Pending {
        payments: Vec<PendingPayment>,
        /// Shown instead of the list when nothing is pending.
        empty_message: Option<String>,
    },
    Wallet { message: String },
}

#[derive(Debug, Clone, Default)]
pub struct PaymentsDashboard {
    tab: DashboardTab,
    search: String,
    completed: Vec<Payment>,
    pending: Vec<PendingPayment>,
}

impl PaymentsDashboard {
    pub fn new(completed: Vec<Payment>, pending: Vec<PendingPayment>) -> Self {
        Self {
            completed,
            pending,
            ..Self::default()
        }
    }

    pub fn tab(&self) -> DashboardTab {
        self.tab
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn select_tab(&mut self, tab: DashboardTab) {
        debug!(from = %self.tab, to = %tab, "switching payments tab");
        self.tab = tab;
    }

    pub fn set_search(&mut self, query: impl Into<String>) {
        self.search = query.into();
    }

    pub fn view(&self) -> DashboardView {
        match self.tab {
            DashboardTab::Completed => {
                let matching: Vec<Payment> = self
                    .completed
                    .iter()
                    .filter(|p| ledger::payment_matches(p, &self.search))
                    .cloned()
                    .collect();
                DashboardView::Completed {
                    groups: ledger::group_by_month(&matching),
                }
            }
            DashboardTab::Pending => {
                let payments: Vec<PendingPayment> = self
                    .pending
                    .iter()
                    .filter(|p| ledger::pending_matches(p, &self.search))
                    .cloned()
                    .collect();
                let empty_message = payments
                    .is_empty()
                    .then(|| NO_PENDING_MESSAGE.to_string());
                DashboardView::Pending {
                    payments,
                    empty_message,
                }
            }
            DashboardTab::Wallet => DashboardView::Wallet {
                message: WALLET_DISCONNECTED_MESSAGE.to_string(),
            },
        }
    }

    /// Sum of all pending invoices, regardless of search.
    pub fn outstanding_total(&self) -> f64 {
        self.pending.iter().map(|p| p.amount).sum()
    }
}
