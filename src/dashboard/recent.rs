use crate::core::Invoice;

/// Number of invoices shown in the dashboard's recent list.
pub const RECENT_INVOICES_LIMIT: usize = 5;

/// The `limit` most recently updated invoices, newest first.
pub fn recent_invoices(invoices: &[Invoice], limit: usize) -> Vec<&Invoice> {
    let mut sorted: Vec<&Invoice> = invoices.iter().collect();
    sorted.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
    sorted.truncate(limit);
    sorted
}
