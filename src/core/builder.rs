use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

use super::calculation::calculate_invoice_totals;
use super::error::{BillbookError, join_errors};
use super::terms::compute_due_date;
use super::types::*;
use super::validation;

/// Builder for new invoices.
///
/// Totals are always computed from the items and discount; the due date is
/// derived from the payment terms unless set explicitly.
///
/// ```
/// use billbook::core::*;
/// use rust_decimal_macros::dec;
/// use chrono::NaiveDate;
///
/// let invoice = InvoiceBuilder::new("INV-2024-0001", "client-1", NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())
///     .payment_terms(PaymentTerms::Net30)
///     .add_item(InvoiceItem::new("Web Development", dec!(40), dec!(125), dec!(8.25)))
///     .build()
///     .unwrap();
///
/// assert_eq!(invoice.due_date, NaiveDate::from_ymd_opt(2024, 1, 31).unwrap());
/// assert_eq!(invoice.total, dec!(5412.50));
/// ```
pub struct InvoiceBuilder {
    id: Option<String>,
    invoice_number: String,
    client_id: String,
    issue_date: NaiveDate,
    due_date: Option<NaiveDate>,
    payment_terms: PaymentTerms,
    items: Vec<InvoiceItem>,
    discount: DiscountPolicy,
    notes: Option<String>,
    terms: Option<String>,
    created_at: Option<DateTime<Utc>>,
}

impl InvoiceBuilder {
    pub fn new(
        invoice_number: impl Into<String>,
        client_id: impl Into<String>,
        issue_date: NaiveDate,
    ) -> Self {
        Self {
            id: None,
            invoice_number: invoice_number.into(),
            client_id: client_id.into(),
            issue_date,
            due_date: None,
            payment_terms: PaymentTerms::default(),
            items: Vec::new(),
            discount: DiscountPolicy::none(),
            notes: None,
            terms: None,
            created_at: None,
        }
    }

    /// Use a known record id instead of generating one.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn payment_terms(mut self, terms: PaymentTerms) -> Self {
        self.payment_terms = terms;
        self
    }

    /// Override the due date computed from the payment terms.
    pub fn due_date(mut self, date: NaiveDate) -> Self {
        self.due_date = Some(date);
        self
    }

    pub fn add_item(mut self, item: InvoiceItem) -> Self {
        self.items.push(item);
        self
    }

    pub fn items(mut self, items: impl IntoIterator<Item = InvoiceItem>) -> Self {
        self.items.extend(items);
        self
    }

    pub fn discount(mut self, policy: DiscountPolicy) -> Self {
        self.discount = policy;
        self
    }

    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    pub fn terms(mut self, terms: impl Into<String>) -> Self {
        self.terms = Some(terms.into());
        self
    }

    /// Creation timestamp (default: now). Also used as `updated_at`.
    pub fn created_at(mut self, at: DateTime<Utc>) -> Self {
        self.created_at = Some(at);
        self
    }

    /// Build a draft invoice, calculating totals and running form validation.
    /// Returns all validation errors (not just the first).
    pub fn build(self) -> Result<Invoice, BillbookError> {
        let invoice = self.build_unchecked();

        let errors = validation::validate_invoice(&invoice);
        if !errors.is_empty() {
            return Err(BillbookError::Validation(join_errors(&errors)));
        }

        Ok(invoice)
    }

    /// Build without validation, useful for testing or importing external data.
    pub fn build_unchecked(self) -> Invoice {
        let created_at = self.created_at.unwrap_or_else(Utc::now);
        let due_date = self
            .due_date
            .unwrap_or_else(|| compute_due_date(self.issue_date, self.payment_terms));

        let mut items = self.items;
        for item in &mut items {
            item.recompute();
        }
        let totals = calculate_invoice_totals(&items, self.discount);

        Invoice {
            id: self.id.unwrap_or_else(|| Uuid::new_v4().to_string()),
            invoice_number: self.invoice_number,
            client_id: self.client_id,
            issue_date: self.issue_date,
            due_date,
            status: InvoiceStatus::Draft,
            items,
            discount: self.discount,
            subtotal: totals.subtotal,
            tax_amount: totals.tax_amount,
            discount_amount: totals.discount_amount,
            total: totals.total,
            payment_terms: self.payment_terms,
            notes: self.notes,
            terms: self.terms,
            created_at,
            updated_at: created_at,
            paid_at: None,
        }
    }
}

/// Builder for Client.
pub struct ClientBuilder {
    id: Option<String>,
    name: String,
    company: String,
    email: String,
    phone: Option<String>,
    address: Address,
    created_at: Option<DateTime<Utc>>,
}

impl ClientBuilder {
    pub fn new(
        name: impl Into<String>,
        company: impl Into<String>,
        email: impl Into<String>,
        address: Address,
    ) -> Self {
        Self {
            id: None,
            name: name.into(),
            company: company.into(),
            email: email.into(),
            phone: None,
            address,
            created_at: None,
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    pub fn created_at(mut self, at: DateTime<Utc>) -> Self {
        self.created_at = Some(at);
        self
    }

    /// Build the client, rejecting it if any field is invalid.
    pub fn build(self) -> Result<Client, BillbookError> {
        let client = self.build_unchecked();
        let errors = validation::validate_client(&client);
        if !errors.is_empty() {
            return Err(BillbookError::Validation(join_errors(&errors)));
        }
        Ok(client)
    }

    pub fn build_unchecked(self) -> Client {
        let created_at = self.created_at.unwrap_or_else(Utc::now);
        Client {
            id: self.id.unwrap_or_else(|| Uuid::new_v4().to_string()),
            name: self.name,
            company: self.company,
            email: self.email,
            phone: self.phone,
            address: self.address,
            created_at,
            updated_at: created_at,
        }
    }
}

/// Builder for Address.
pub struct AddressBuilder {
    street: String,
    city: String,
    state: String,
    zip_code: String,
    country: String,
}

impl AddressBuilder {
    pub fn new(
        street: impl Into<String>,
        city: impl Into<String>,
        zip_code: impl Into<String>,
        country: impl Into<String>,
    ) -> Self {
        Self {
            street: street.into(),
            city: city.into(),
            state: String::new(),
            zip_code: zip_code.into(),
            country: country.into(),
        }
    }

    pub fn state(mut self, state: impl Into<String>) -> Self {
        self.state = state.into();
        self
    }

    pub fn build(self) -> Address {
        Address {
            street: self.street,
            city: self.city,
            state: self.state,
            zip_code: self.zip_code,
            country: self.country,
        }
    }
}
