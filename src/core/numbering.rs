use chrono::{DateTime, Datelike, Utc};

use super::types::Invoice;

/// Default prefix, including the separator before the year.
pub const DEFAULT_PREFIX: &str = "INV-";

const PADDING: usize = 4;

/// Next invoice number for the year of `now`, in the form `INV-{year}-{seq:04}`.
///
/// The sequence is one above the highest number already used this year, so
/// it restarts at 1 every January. Numbers from other years are ignored.
/// This is advisory: two callers computing a number before either one saves
/// will get the same value.
pub fn next_invoice_number(existing: &[Invoice], now: DateTime<Utc>) -> String {
    InvoiceNumberSequence::from_existing(
        DEFAULT_PREFIX,
        now.year(),
        existing.iter().map(|inv| inv.invoice_number.as_str()),
    )
    .peek()
}

/// Year-scoped invoice number sequence.
///
/// Formats numbers as `{prefix}{year}-{sequential}`,
/// e.g. "INV-2024-0001", "INV-2024-0002".
#[derive(Debug, Clone)]
pub struct InvoiceNumberSequence {
    prefix: String,
    year: i32,
    next_number: u32,
}

impl InvoiceNumberSequence {
    /// Create a new sequence starting at 1.
    pub fn new(prefix: impl Into<String>, year: i32) -> Self {
        Self {
            prefix: prefix.into(),
            year,
            next_number: 1,
        }
    }

    /// Continue after the highest number among `existing` issued in `year`.
    pub fn from_existing<'a>(
        prefix: impl Into<String>,
        year: i32,
        existing: impl IntoIterator<Item = &'a str>,
    ) -> Self {
        let mut seq = Self::new(prefix, year);
        let highest = existing
            .into_iter()
            .filter_map(|number| seq.parse_sequence(number))
            .max();
        if let Some(highest) = highest {
            seq.next_number = highest.saturating_add(1);
        }
        seq
    }

    /// The next number, formatted.
    pub fn peek(&self) -> String {
        format!(
            "{}{}-{:0>width$}",
            self.prefix,
            self.year,
            self.next_number,
            width = PADDING
        )
    }

    /// Sequence component of `number` if it belongs to this prefix and year.
    ///
    /// Leading digits after `{prefix}{year}-` are read; a component with no
    /// leading digits counts as 0 and one too large for `u32` as `u32::MAX`.
    pub fn parse_sequence(&self, number: &str) -> Option<u32> {
        let rest = number.strip_prefix(&self.year_prefix())?;
        let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
        if digits.is_empty() {
            return Some(0);
        }
        Some(digits.parse().unwrap_or(u32::MAX))
    }

    fn year_prefix(&self) -> String {
        format!("{}{}-", self.prefix, self.year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_sequence_starts_at_one() {
        let seq = InvoiceNumberSequence::new("INV-", 2024);
        assert_eq!(seq.peek(), "INV-2024-0001");
        assert_eq!(seq.peek(), "INV-2024-0001");
    }

    #[test]
    fn continues_after_highest_of_year() {
        let existing = ["INV-2024-0003", "INV-2024-0010", "INV-2023-0099", "INV-2024-0007"];
        let seq = InvoiceNumberSequence::from_existing("INV-", 2024, existing);
        assert_eq!(seq.peek(), "INV-2024-0011");
    }

    #[test]
    fn parse_sequence_reads_leading_digits() {
        let seq = InvoiceNumberSequence::new("INV-", 2024);
        assert_eq!(seq.parse_sequence("INV-2024-0042"), Some(42));
        assert_eq!(seq.parse_sequence("INV-2024-0042-A"), Some(42));
        assert_eq!(seq.parse_sequence("INV-2024-draft"), Some(0));
        assert_eq!(seq.parse_sequence("INV-2023-0042"), None);
        assert_eq!(seq.parse_sequence("RE-2024-0042"), None);
    }

    #[test]
    fn oversized_sequence_saturates() {
        let seq = InvoiceNumberSequence::new("INV-", 2024);
        assert_eq!(seq.parse_sequence("INV-2024-99999999999"), Some(u32::MAX));
        assert_eq!(seq.parse_sequence("INV-2024-4294967295"), Some(u32::MAX));

        let seq = InvoiceNumberSequence::from_existing("INV-", 2024, ["INV-2024-99999999999"]);
        assert_eq!(seq.peek(), format!("INV-2024-{}", u32::MAX));
    }
}
