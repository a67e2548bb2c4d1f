use chrono::{DateTime, Datelike, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::{Invoice, InvoiceStatus, is_overdue, round2};

/// Aggregate business figures for the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DashboardStats {
    /// Sum of totals of paid invoices.
    pub total_revenue: Decimal,
    /// Paid revenue from invoices issued in the current calendar month.
    pub monthly_revenue: Decimal,
    pub total_invoices: usize,
    pub paid_invoices: usize,
    /// Invoices in `draft` or `sent`.
    pub pending_invoices: usize,
    /// Invoices past due at the time of calculation, whatever their stored status.
    pub overdue_invoices: usize,
    pub overdue_amount: Decimal,
    /// `total_revenue / paid_invoices`, or 0 when nothing is paid.
    pub average_invoice_value: Decimal,
}

/// Reduce `invoices` into dashboard statistics as of `now`.
///
/// Overdue figures use [`is_overdue`] live rather than the stored status,
/// so they are correct even before reconciliation has run. Sums saturate
/// at the `Decimal` bounds.
pub fn calculate_dashboard_stats(invoices: &[Invoice], now: DateTime<Utc>) -> DashboardStats {
    let today = now.date_naive();

    let mut stats = DashboardStats {
        total_invoices: invoices.len(),
        ..DashboardStats::default()
    };
    let mut total_revenue = Decimal::ZERO;
    let mut monthly_revenue = Decimal::ZERO;
    let mut overdue_amount = Decimal::ZERO;

    for invoice in invoices {
        match invoice.status {
            InvoiceStatus::Paid => {
                stats.paid_invoices += 1;
                total_revenue = total_revenue.saturating_add(invoice.total);
                if invoice.issue_date.year() == today.year()
                    && invoice.issue_date.month() == today.month()
                {
                    monthly_revenue = monthly_revenue.saturating_add(invoice.total);
                }
            }
            InvoiceStatus::Draft | InvoiceStatus::Sent => stats.pending_invoices += 1,
            InvoiceStatus::Overdue | InvoiceStatus::Cancelled => {}
        }

        if is_overdue(invoice, now) {
            stats.overdue_invoices += 1;
            overdue_amount = overdue_amount.saturating_add(invoice.total);
        }
    }

    let average = if stats.paid_invoices == 0 {
        Decimal::ZERO
    } else {
        total_revenue / Decimal::from(stats.paid_invoices)
    };

    stats.total_revenue = round2(total_revenue);
    stats.monthly_revenue = round2(monthly_revenue);
    stats.overdue_amount = round2(overdue_amount);
    stats.average_invoice_value = round2(average);

    tracing::debug!(
        total = stats.total_invoices,
        paid = stats.paid_invoices,
        overdue = stats.overdue_invoices,
        "dashboard stats calculated"
    );

    stats
}
