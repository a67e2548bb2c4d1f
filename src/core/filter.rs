//! Invoice list filtering and client search.

use std::collections::HashMap;

use chrono::NaiveDate;

use super::types::*;

/// Criteria for the invoice list. Empty criteria match everything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InvoiceFilter {
    /// Match any of these statuses; empty means all.
    pub statuses: Vec<InvoiceStatus>,
    pub client_id: Option<String>,
    /// Inclusive lower bound on the issue date.
    pub date_from: Option<NaiveDate>,
    /// Inclusive upper bound on the issue date.
    pub date_to: Option<NaiveDate>,
    /// Case-insensitive match on invoice number, client company or name, or total.
    pub search_term: Option<String>,
}

impl InvoiceFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(mut self, status: InvoiceStatus) -> Self {
        self.statuses.push(status);
        self
    }

    pub fn client(mut self, client_id: impl Into<String>) -> Self {
        self.client_id = Some(client_id.into());
        self
    }

    pub fn issued_between(mut self, from: Option<NaiveDate>, to: Option<NaiveDate>) -> Self {
        self.date_from = from;
        self.date_to = to;
        self
    }

    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search_term = Some(term.into());
        self
    }

    /// Whether `invoice` passes the filter. `client` is the invoice's client
    /// if it could be resolved.
    pub fn matches(&self, invoice: &Invoice, client: Option<&Client>) -> bool {
        if !self.statuses.is_empty() && !self.statuses.contains(&invoice.status) {
            return false;
        }
        if self
            .client_id
            .as_deref()
            .is_some_and(|id| id != invoice.client_id)
        {
            return false;
        }
        if self.date_from.is_some_and(|from| invoice.issue_date < from) {
            return false;
        }
        if self.date_to.is_some_and(|to| invoice.issue_date > to) {
            return false;
        }

        let term = match self.search_term.as_deref().map(str::trim) {
            Some(t) if !t.is_empty() => t.to_lowercase(),
            _ => return true,
        };
        invoice.invoice_number.to_lowercase().contains(&term)
            || client.is_some_and(|c| {
                c.company.to_lowercase().contains(&term) || c.name.to_lowercase().contains(&term)
            })
            || invoice.total.to_string().contains(&term)
    }
}

/// Invoices passing `filter`, most recently updated first.
pub fn filter_invoices<'a>(
    invoices: &'a [Invoice],
    clients: &[Client],
    filter: &InvoiceFilter,
) -> Vec<&'a Invoice> {
    let by_id: HashMap<&str, &Client> = clients.iter().map(|c| (c.id.as_str(), c)).collect();
    let mut matched: Vec<&Invoice> = invoices
        .iter()
        .filter(|inv| filter.matches(inv, by_id.get(inv.client_id.as_str()).copied()))
        .collect();
    matched.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
    matched
}

/// Clients whose name, company or email contains `term` (case-insensitive).
pub fn search_clients<'a>(clients: &'a [Client], term: &str) -> Vec<&'a Client> {
    let term = term.to_lowercase();
    clients
        .iter()
        .filter(|c| {
            c.name.to_lowercase().contains(&term)
                || c.company.to_lowercase().contains(&term)
                || c.email.to_lowercase().contains(&term)
        })
        .collect()
}
