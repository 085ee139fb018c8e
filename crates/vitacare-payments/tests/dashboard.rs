use jiff::civil::date;
use vitacare_core::models::payment::{Payment, PendingPayment};
use vitacare_payments::dashboard::{
    DashboardTab, DashboardView, PaymentsDashboard, NO_PENDING_MESSAGE,
    WALLET_DISCONNECTED_MESSAGE,
};
use vitacare_payments::error::PaymentsError;
use vitacare_payments::ledger::{format_amount, group_by_month};

fn payment(doctor: &str, specialty: &str, invoice: &str, on: jiff::civil::Date, amount: f64) -> Payment {
    Payment {
        doctor: doctor.to_string(),
        specialty: specialty.to_string(),
        invoice_number: invoice.to_string(),
        date: on,
        amount,
    }
}

fn history() -> Vec<Payment> {
    vec![
        payment("Dr. Sarah Williams", "Dermatology Consultation", "INV-2025-0296", date(2025, 2, 15), 85.0),
        payment("Dr. Robert Lee", "Dental Cleaning", "INV-2025-0275", date(2025, 2, 1), 150.0),
        payment("Dr. Michael Chen", "Annual Physical", "INV-2025-0196", date(2025, 1, 15), 200.0),
    ]
}

fn pending() -> Vec<PendingPayment> {
    vec![PendingPayment {
        doctor: "Dr. Emily Carter".to_string(),
        specialty: "Cardiology Follow-up".to_string(),
        invoice: "INV-2025-0311".to_string(),
        due_date: date(2025, 3, 1),
        amount: 120.5,
    }]
}

#[test]
fn groups_keep_first_seen_month_order() {
    let groups = group_by_month(&history());
    let labels: Vec<_> = groups.iter().map(|g| g.label.as_str()).collect();
    assert_eq!(labels, ["February 2025", "January 2025"]);
    assert_eq!(groups[0].payments.len(), 2);
    assert_eq!(groups[0].payments[0].invoice_number, "INV-2025-0296");
    assert_eq!(groups[0].total(), 235.0);
}

#[test]
fn same_month_in_different_years_is_separate() {
    let payments = vec![
        payment("A", "X", "1", date(2024, 2, 3), 1.0),
        payment("B", "Y", "2", date(2025, 2, 3), 2.0),
        payment("C", "Z", "3", date(2024, 2, 9), 3.0),
    ];
    let groups = group_by_month(&payments);
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].label, "February 2024");
    assert_eq!(groups[0].payments.len(), 2);
}

#[test]
fn amounts_render_in_dollars() {
    assert_eq!(format_amount(85.0), "$85.00");
    assert_eq!(format_amount(120.5), "$120.50");
}

#[test]
fn completed_is_the_default_tab() {
    let dashboard = PaymentsDashboard::new(history(), pending());
    assert_eq!(dashboard.tab(), DashboardTab::Completed);
    match dashboard.view() {
        DashboardView::Completed { groups } => assert_eq!(groups.len(), 2),
        other => panic!("unexpected view {other:?}"),
    }
}

#[test]
fn search_filters_completed_payments() {
    let mut dashboard = PaymentsDashboard::new(history(), pending());
    dashboard.set_search("dental");
    match dashboard.view() {
        DashboardView::Completed { groups } => {
            assert_eq!(groups.len(), 1);
            assert_eq!(groups[0].payments[0].doctor, "Dr. Robert Lee");
        }
        other => panic!("unexpected view {other:?}"),
    }

    dashboard.set_search("inv-2025-0196");
    match dashboard.view() {
        DashboardView::Completed { groups } => assert_eq!(groups[0].label, "January 2025"),
        other => panic!("unexpected view {other:?}"),
    }
}

#[test]
fn pending_tab_lists_invoices_or_says_none() {
    let mut dashboard = PaymentsDashboard::new(history(), pending());
    dashboard.select_tab(DashboardTab::Pending);
    match dashboard.view() {
        DashboardView::Pending { payments, empty_message } => {
            assert_eq!(payments.len(), 1);
            assert_eq!(empty_message, None);
        }
        other => panic!("unexpected view {other:?}"),
    }
    assert_eq!(dashboard.outstanding_total(), 120.5);

    let mut empty = PaymentsDashboard::new(history(), Vec::new());
    empty.select_tab(DashboardTab::Pending);
    assert_eq!(
        empty.view(),
        DashboardView::Pending {
            payments: Vec::new(),
            empty_message: Some(NO_PENDING_MESSAGE.to_string()),
        }
    );
}

#[test]
fn wallet_tab_asks_to_connect() {
    let mut dashboard = PaymentsDashboard::default();
    dashboard.select_tab(DashboardTab::Wallet);
    assert_eq!(
        dashboard.view(),
        DashboardView::Wallet {
            message: WALLET_DISCONNECTED_MESSAGE.to_string()
        }
    );
}

#[test]
fn tabs_parse_from_their_names() {
    assert_eq!("pending".parse::<DashboardTab>(), Ok(DashboardTab::Pending));
    assert_eq!("Wallet".parse::<DashboardTab>(), Ok(DashboardTab::Wallet));
    assert_eq!(
        "refunds".parse::<DashboardTab>(),
        Err(PaymentsError::UnknownTab("refunds".to_string()))
    );
}

#[test]
fn view_serializes_with_tab_tag() {
    let mut dashboard = PaymentsDashboard::new(history(), pending());
    dashboard.select_tab(DashboardTab::Wallet);
    let json = serde_json::to_value(dashboard.view()).unwrap();
    assert_eq!(json["tab"], "wallet");

    dashboard.select_tab(DashboardTab::Completed);
    let json = serde_json::to_value(dashboard.view()).unwrap();
    assert_eq!(json["groups"][0]["payments"][0]["invoiceNumber"], "INV-2025-0296");
    assert_eq!(json["groups"][0]["payments"][0]["date"], "2025-02-15");
}
