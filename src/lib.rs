//! # billbook
//!
//! Invoicing for a single small business: clients, invoices, payment
//! status and dashboard statistics.
//!
//! All monetary values use [`rust_decimal::Decimal`], never floating point.
//! The calculation engine is a set of pure functions; persistence goes
//! through an injected [`store::StorageBackend`].
//!
//! ## Quick Start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use billbook::core::*;
//! use rust_decimal_macros::dec;
//!
//! let invoice = InvoiceBuilder::new("INV-2024-0001", "client-1", NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())
//!     .payment_terms(PaymentTerms::Net30)
//!     .add_item(InvoiceItem::new("Web Development", dec!(40), dec!(125), dec!(8.25)))
//!     .add_item(InvoiceItem::new("Project Management", dec!(10), dec!(150), dec!(8.25)))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(invoice.subtotal, dec!(6500.00));
//! assert_eq!(invoice.tax_amount, dec!(536.25));
//! assert_eq!(invoice.total, dec!(7036.25));
//! assert_eq!(invoice.due_date, NaiveDate::from_ymd_opt(2024, 1, 31).unwrap());
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Types, totals, payment terms, overdue policy, numbering, validation |
//! | `dashboard` | Dashboard statistics and recent-invoice view |
//! | `store` | Storage port, memory and JSON file backends, `Workbook` |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "dashboard")]
pub mod dashboard;

#[cfg(feature = "store")]
pub mod store;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
