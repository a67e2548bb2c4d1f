//! Due-date and overdue policy.
//!
//! A due date is a calendar date; its *due instant* is 00:00 UTC on that
//! date. An open invoice is overdue as soon as the current time passes the
//! due instant.

use chrono::{DateTime, Days, NaiveDate, NaiveTime, Utc};

use super::types::*;

const MILLIS_PER_DAY: i64 = 86_400_000;

/// Due date for `terms` counted in calendar days from `issue_date`.
pub fn compute_due_date(issue_date: NaiveDate, terms: PaymentTerms) -> NaiveDate {
    add_days(issue_date, terms.days())
}

/// Due date for a raw terms code. Unrecognized codes fall back to 30 days.
pub fn compute_due_date_from_code(issue_date: NaiveDate, code: &str) -> NaiveDate {
    let terms = PaymentTerms::from_code(code).unwrap_or_else(|| {
        tracing::warn!(code, "unrecognized payment terms, using Net 30");
        PaymentTerms::Net30
    });
    compute_due_date(issue_date, terms)
}

/// The instant after which an invoice due on `due_date` is overdue.
pub fn due_instant(due_date: NaiveDate) -> DateTime<Utc> {
    due_date.and_time(NaiveTime::MIN).and_utc()
}

/// Whether `invoice` is past due at `now`.
///
/// Paid and cancelled invoices are never overdue. This is a pure predicate;
/// applying the `sent -> overdue` status change is the job of
/// [`reconcile_overdue`](crate::core::reconcile_overdue).
pub fn is_overdue(invoice: &Invoice, now: DateTime<Utc>) -> bool {
    if invoice.status.is_closed() {
        return false;
    }
    now > due_instant(invoice.due_date)
}

/// Whole days past due, rounded up and never negative.
pub fn days_overdue(due_date: NaiveDate, now: DateTime<Utc>) -> i64 {
    let elapsed = (now - due_instant(due_date)).num_milliseconds();
    if elapsed <= 0 {
        return 0;
    }
    (elapsed + MILLIS_PER_DAY - 1) / MILLIS_PER_DAY
}

// Saturates at the calendar's upper bound instead of failing.
fn add_days(date: NaiveDate, days: i64) -> NaiveDate {
    date.checked_add_days(Days::new(days.unsigned_abs()))
        .unwrap_or(NaiveDate::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn net_terms_add_calendar_days() {
        assert_eq!(compute_due_date(date(2024, 1, 1), PaymentTerms::Net30), date(2024, 1, 31));
        assert_eq!(compute_due_date(date(2024, 2, 20), PaymentTerms::Net14), date(2024, 3, 5));
        assert_eq!(compute_due_date(date(2023, 12, 1), PaymentTerms::Net90), date(2024, 2, 29));
    }

    #[test]
    fn due_on_receipt_keeps_issue_date() {
        let d = date(2024, 6, 15);
        assert_eq!(compute_due_date(d, PaymentTerms::DueOnReceipt), d);
    }

    #[test]
    fn unknown_code_defaults_to_thirty_days() {
        assert_eq!(compute_due_date_from_code(date(2024, 1, 1), "45"), date(2024, 1, 31));
        assert_eq!(compute_due_date_from_code(date(2024, 1, 1), "7"), date(2024, 1, 8));
    }

    #[test]
    fn days_overdue_rounds_up() {
        let due = date(2024, 1, 10);
        let at = |d, h| Utc.with_ymd_and_hms(2024, 1, d, h, 0, 0).unwrap();
        assert_eq!(days_overdue(due, at(9, 12)), 0);
        assert_eq!(days_overdue(due, at(10, 0)), 0);
        assert_eq!(days_overdue(due, at(10, 1)), 1);
        assert_eq!(days_overdue(due, at(11, 0)), 1);
        assert_eq!(days_overdue(due, at(12, 6)), 3);
    }
}
