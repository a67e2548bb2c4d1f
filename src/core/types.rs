use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An invoice as persisted by the store.
///
/// The four money fields are derived from `items` and `discount` by
/// [`Invoice::recalculate`](crate::core::Invoice::recalculate) and must not
/// be edited independently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    /// Stable record identifier.
    pub id: String,
    /// Human-readable number, e.g. "INV-2024-0001".
    pub invoice_number: String,
    /// Identifier of the billed [`Client`]. Never dereferenced by the calculators.
    pub client_id: String,
    pub issue_date: NaiveDate,
    pub due_date: NaiveDate,
    pub status: InvoiceStatus,
    /// Ordered line items.
    pub items: Vec<InvoiceItem>,
    pub discount: DiscountPolicy,
    /// Sum of item amounts, rounded to 2 dp.
    pub subtotal: Decimal,
    /// Sum of per-item tax, rounded to 2 dp.
    pub tax_amount: Decimal,
    /// Discount applied to the pre-tax subtotal, rounded to 2 dp.
    pub discount_amount: Decimal,
    /// `subtotal + tax_amount - discount_amount` on unrounded values, rounded to 2 dp.
    /// May be negative.
    pub total: Decimal,
    pub payment_terms: PaymentTerms,
    /// Free-text note shown to the client.
    pub notes: Option<String>,
    /// Terms and conditions text.
    pub terms: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Set when the invoice is marked paid.
    pub paid_at: Option<DateTime<Utc>>,
}

/// One billable row on an invoice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceItem {
    pub id: String,
    pub description: String,
    pub quantity: Decimal,
    /// Price per unit.
    pub rate: Decimal,
    /// Tax rate in percent (0-100).
    pub tax_rate: Decimal,
    /// `quantity * rate`, kept in sync by [`InvoiceItem::recompute`](crate::core::InvoiceItem::recompute).
    pub amount: Decimal,
}

impl InvoiceItem {
    /// Create an item with a fresh id and its amount already computed.
    pub fn new(
        description: impl Into<String>,
        quantity: Decimal,
        rate: Decimal,
        tax_rate: Decimal,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            description: description.into(),
            quantity,
            rate,
            tax_rate,
            amount: quantity.saturating_mul(rate),
        }
    }

    /// Replace the generated id (e.g. when importing existing data).
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }
}

/// Reduction applied to the pre-tax subtotal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum DiscountPolicy {
    /// Percentage of the subtotal (0-100 when validated; not clamped).
    Percentage(Decimal),
    /// Fixed currency amount.
    Fixed(Decimal),
}

impl DiscountPolicy {
    /// No discount: `Fixed(0)`.
    pub fn none() -> Self {
        Self::Fixed(Decimal::ZERO)
    }

    /// The raw policy value (percent or amount).
    pub fn value(&self) -> Decimal {
        match self {
            Self::Percentage(v) | Self::Fixed(v) => *v,
        }
    }

    pub fn is_percentage(&self) -> bool {
        matches!(self, Self::Percentage(_))
    }
}

impl Default for DiscountPolicy {
    fn default() -> Self {
        Self::none()
    }
}

/// Invoice lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    Draft,
    Sent,
    Paid,
    /// Past due and unpaid. Applied by reconciliation, never by the predicate.
    Overdue,
    Cancelled,
}

impl InvoiceStatus {
    /// Wire code ("draft", "sent", ...).
    pub fn code(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Sent => "sent",
            Self::Paid => "paid",
            Self::Overdue => "overdue",
            Self::Cancelled => "cancelled",
        }
    }

    /// Display label ("Draft", "Sent", ...).
    pub fn label(&self) -> &'static str {
        match self {
            Self::Draft => "Draft",
            Self::Sent => "Sent",
            Self::Paid => "Paid",
            Self::Overdue => "Overdue",
            Self::Cancelled => "Cancelled",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "draft" => Some(Self::Draft),
            "sent" => Some(Self::Sent),
            "paid" => Some(Self::Paid),
            "overdue" => Some(Self::Overdue),
            "cancelled" => Some(Self::Cancelled),
            _ => None,
        }
    }

    /// Paid and cancelled invoices can no longer change status or fall overdue.
    pub fn is_closed(&self) -> bool {
        matches!(self, Self::Paid | Self::Cancelled)
    }
}

impl std::fmt::Display for InvoiceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Payment terms code: offset of the due date from the issue date.
///
/// The wire form is the code string (`"due_on_receipt"`, `"7"`, `"30"`, ...).
/// Unknown codes deserialize to [`PaymentTerms::Net30`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PaymentTerms {
    DueOnReceipt,
    Net7,
    Net14,
    #[default]
    Net30,
    Net60,
    Net90,
}

impl PaymentTerms {
    pub const ALL: [PaymentTerms; 6] = [
        Self::DueOnReceipt,
        Self::Net7,
        Self::Net14,
        Self::Net30,
        Self::Net60,
        Self::Net90,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Self::DueOnReceipt => "due_on_receipt",
            Self::Net7 => "7",
            Self::Net14 => "14",
            Self::Net30 => "30",
            Self::Net60 => "60",
            Self::Net90 => "90",
        }
    }

    /// Parse a terms code. Returns `None` for unrecognized codes.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim() {
            "due_on_receipt" => Some(Self::DueOnReceipt),
            "7" => Some(Self::Net7),
            "14" => Some(Self::Net14),
            "30" => Some(Self::Net30),
            "60" => Some(Self::Net60),
            "90" => Some(Self::Net90),
            _ => None,
        }
    }

    /// Calendar days between issue date and due date.
    pub fn days(&self) -> i64 {
        match self {
            Self::DueOnReceipt => 0,
            Self::Net7 => 7,
            Self::Net14 => 14,
            Self::Net30 => 30,
            Self::Net60 => 60,
            Self::Net90 => 90,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::DueOnReceipt => "Due on Receipt",
            Self::Net7 => "Net 7",
            Self::Net14 => "Net 14",
            Self::Net30 => "Net 30",
            Self::Net60 => "Net 60",
            Self::Net90 => "Net 90",
        }
    }
}

impl From<String> for PaymentTerms {
    fn from(code: String) -> Self {
        Self::from_code(&code).unwrap_or_else(|| {
            tracing::warn!(code = %code, "unrecognized payment terms, using Net 30");
            Self::Net30
        })
    }
}

impl From<PaymentTerms> for String {
    fn from(terms: PaymentTerms) -> Self {
        terms.code().to_string()
    }
}

/// Postal address of a client or the business.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Address {
    pub street: String,
    pub city: String,
    /// State, province or region.
    pub state: String,
    pub zip_code: String,
    pub country: String,
}

/// A billed customer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Client {
    pub id: String,
    /// Contact person.
    pub name: String,
    pub company: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: Address,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Invoice money totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Totals {
    pub subtotal: Decimal,
    pub tax_amount: Decimal,
    pub discount_amount: Decimal,
    pub total: Decimal,
}

/// The business issuing invoices. Exactly one is stored; absence falls back
/// to [`BusinessProfile::default`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusinessProfile {
    pub id: String,
    pub company_name: String,
    pub owner_name: String,
    pub email: String,
    pub phone: String,
    pub website: Option<String>,
    pub logo: Option<String>,
    pub address: Address,
    pub tax_number: Option<String>,
    /// ISO 4217 code.
    pub currency: String,
    pub currency_symbol: String,
    /// Percent applied to new line items.
    pub default_tax_rate: Decimal,
    pub payment_terms: PaymentTerms,
    /// Terms text copied onto new invoices.
    pub invoice_terms: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

pub const DEFAULT_PROFILE_ID: &str = "default-business-profile";

pub const DEFAULT_INVOICE_TERMS: &str = "Payment is due within 30 days of invoice date. \
Late payments may incur a 1.5% monthly service charge.";

impl Default for BusinessProfile {
    fn default() -> Self {
        let now = Utc::now();
        Self {
            id: DEFAULT_PROFILE_ID.to_string(),
            company_name: "Your Company Name".into(),
            owner_name: "Your Name".into(),
            email: "contact@yourcompany.com".into(),
            phone: "+1 (555) 123-4567".into(),
            website: Some("https://yourcompany.com".into()),
            logo: None,
            address: Address {
                street: "123 Business Street".into(),
                city: "Business City".into(),
                state: "BC".into(),
                zip_code: "12345".into(),
                country: "United States".into(),
            },
            tax_number: None,
            currency: "USD".into(),
            currency_symbol: "$".into(),
            default_tax_rate: dec!(8.25),
            payment_terms: PaymentTerms::Net30,
            invoice_terms: DEFAULT_INVOICE_TERMS.into(),
            created_at: now,
            updated_at: now,
        }
    }
}

/// Date display preference. Rendering itself is left to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DateFormat {
    #[default]
    #[serde(rename = "MM/DD/YYYY")]
    MonthDayYear,
    #[serde(rename = "DD/MM/YYYY")]
    DayMonthYear,
    #[serde(rename = "YYYY-MM-DD")]
    Iso,
}

/// Application preferences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub default_tax_rate: Decimal,
    pub default_payment_terms: PaymentTerms,
    pub currency: String,
    pub date_format: DateFormat,
    /// Invoice number prefix without the trailing dash, e.g. "INV".
    pub invoice_prefix: String,
    pub auto_save: bool,
    pub show_tax_column: bool,
    pub compact_view: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_tax_rate: dec!(8.25),
            default_payment_terms: PaymentTerms::Net30,
            currency: "USD".into(),
            date_format: DateFormat::MonthDayYear,
            invoice_prefix: "INV".into(),
            auto_save: true,
            show_tax_column: true,
            compact_view: false,
        }
    }
}
