use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal_macros::dec;

use crate::core::*;

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or(NaiveDate::MIN)
}

fn midnight(y: i32, m: u32, d: u32) -> DateTime<Utc> {
    due_instant(day(y, m, d))
}

pub(super) fn sample_clients() -> Vec<Client> {
    vec![
        ClientBuilder::new(
            "John Smith",
            "Acme Corporation",
            "john.smith@acme.com",
            AddressBuilder::new("456 Corporate Blvd", "Business City", "90210", "United States")
                .state("CA")
                .build(),
        )
        .id("client-1")
        .phone("+1 (555) 234-5678")
        .created_at(midnight(2024, 1, 15))
        .build_unchecked(),
        ClientBuilder::new(
            "Sarah Johnson",
            "Tech Innovations LLC",
            "sarah@techinnovations.com",
            AddressBuilder::new("789 Innovation Drive", "Silicon Valley", "94025", "United States")
                .state("CA")
                .build(),
        )
        .id("client-2")
        .phone("+1 (555) 345-6789")
        .created_at(midnight(2024, 2, 10))
        .build_unchecked(),
    ]
}

pub(super) fn sample_invoices() -> Vec<Invoice> {
    let mut sent = InvoiceBuilder::new("INV-2024-0001", "client-1", day(2024, 12, 1))
        .id("invoice-1")
        .payment_terms(PaymentTerms::Net30)
        .add_item(
            InvoiceItem::new("Web Development Services", dec!(40), dec!(125), dec!(8.25))
                .with_id("item-1"),
        )
        .add_item(
            InvoiceItem::new("Project Management", dec!(10), dec!(150), dec!(8.25))
                .with_id("item-2"),
        )
        .notes("Thank you for your business!")
        .terms("Payment is due within 30 days of invoice date.")
        .created_at(midnight(2024, 12, 1))
        .build_unchecked();
    sent.status = InvoiceStatus::Sent;

    let mut paid = InvoiceBuilder::new("INV-2024-0002", "client-2", day(2024, 12, 10))
        .id("invoice-2")
        .payment_terms(PaymentTerms::Net7)
        .add_item(
            InvoiceItem::new("UI/UX Design Consultation", dec!(20), dec!(100), dec!(8.25))
                .with_id("item-3"),
        )
        .discount(DiscountPolicy::Fixed(dec!(100)))
        .notes("Early payment discount applied.")
        .terms("Payment is due within 7 days of invoice date.")
        .created_at(midnight(2024, 12, 10))
        .build_unchecked();
    paid.status = InvoiceStatus::Paid;
    paid.updated_at = midnight(2024, 12, 15);
    paid.paid_at = Some(midnight(2024, 12, 15));

    vec![sent, paid]
}
