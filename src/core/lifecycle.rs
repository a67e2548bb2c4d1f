//! Invoice status transitions.
//!
//! ```text
//! draft ──> sent ──> paid
//!   │        │  └──> overdue ──> paid
//!   │        │          │
//!   └────────┴──────────┴──> cancelled
//! ```
//!
//! Every change except `sent -> overdue` is user-triggered. The overdue
//! change is applied only by [`reconcile_overdue`].

use chrono::{DateTime, Utc};

use super::error::BillbookError;
use super::terms::is_overdue;
use super::types::*;

impl InvoiceStatus {
    /// Whether the lifecycle allows moving from `self` to `next`.
    /// Staying in the same status is always allowed.
    pub fn can_transition_to(&self, next: InvoiceStatus) -> bool {
        use InvoiceStatus::*;
        if *self == next {
            return true;
        }
        matches!(
            (self, next),
            (Draft, Sent)
                | (Draft, Cancelled)
                | (Sent, Paid)
                | (Sent, Overdue)
                | (Sent, Cancelled)
                | (Overdue, Paid)
                | (Overdue, Cancelled)
        )
    }
}

impl Invoice {
    /// Move to `next`, stamping `updated_at` (and `paid_at` when paid).
    pub fn transition_to(
        &mut self,
        next: InvoiceStatus,
        now: DateTime<Utc>,
    ) -> Result<(), BillbookError> {
        if self.status == next {
            return Ok(());
        }
        if !self.status.can_transition_to(next) {
            return Err(BillbookError::InvalidTransition {
                from: self.status,
                to: next,
            });
        }
        self.status = next;
        self.updated_at = now;
        if next == InvoiceStatus::Paid {
            self.paid_at = Some(now);
        }
        Ok(())
    }

    pub fn mark_sent(&mut self, now: DateTime<Utc>) -> Result<(), BillbookError> {
        self.transition_to(InvoiceStatus::Sent, now)
    }

    pub fn mark_paid(&mut self, now: DateTime<Utc>) -> Result<(), BillbookError> {
        self.transition_to(InvoiceStatus::Paid, now)
    }

    pub fn cancel(&mut self, now: DateTime<Utc>) -> Result<(), BillbookError> {
        self.transition_to(InvoiceStatus::Cancelled, now)
    }
}

/// Apply the `sent -> overdue` change to every sent invoice that is past due
/// at `now`. Returns how many invoices changed.
///
/// Drafts are left alone even though [`is_overdue`] holds for them.
pub fn reconcile_overdue(invoices: &mut [Invoice], now: DateTime<Utc>) -> usize {
    let mut changed = 0;
    for invoice in invoices
        .iter_mut()
        .filter(|inv| inv.status == InvoiceStatus::Sent)
    {
        if is_overdue(invoice, now) {
            invoice.status = InvoiceStatus::Overdue;
            invoice.updated_at = now;
            changed += 1;
            tracing::debug!(
                invoice = %invoice.invoice_number,
                due_date = %invoice.due_date,
                "invoice marked overdue"
            );
        }
    }
    changed
}
