//! Edge cases of the calculators and the payment-terms wire format.
//!
//! The calculators accept whatever values they are given; rejecting bad
//! input is the job of validation at the form boundary.

use billbook::core::*;
use chrono::{NaiveDate, TimeZone, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

// ── Calculation ─────────────────────────────────────────────────────────────

#[test]
fn empty_item_list_is_all_zero() {
    let totals = calculate_invoice_totals(&[], DiscountPolicy::none());
    assert_eq!(totals, Totals::default());
}

#[test]
fn discount_above_subtotal_goes_negative() {
    let items = vec![InvoiceItem::new("Consulting", dec!(1), dec!(50), dec!(0))];
    let totals = calculate_invoice_totals(&items, DiscountPolicy::Fixed(dec!(80)));
    assert_eq!(totals.total, dec!(-30));
}

#[test]
fn percentage_discount_of_150_on_100() {
    assert_eq!(
        discount_amount(dec!(100), DiscountPolicy::Percentage(dec!(150))),
        dec!(150)
    );
}

#[test]
fn percentage_over_one_hundred_is_not_clamped() {
    let items = vec![InvoiceItem::new("Consulting", dec!(2), dec!(100), dec!(10))];
    let totals = calculate_invoice_totals(&items, DiscountPolicy::Percentage(dec!(150)));
    assert_eq!(totals.discount_amount, dec!(300));
    // 200 + 20 - 300
    assert_eq!(totals.total, dec!(-80));
}

#[test]
fn negative_inputs_flow_through() {
    let items = vec![
        InvoiceItem::new("Credit", dec!(-1), dec!(40), dec!(10)),
        InvoiceItem::new("Refund", dec!(2), dec!(-5), dec!(0)),
    ];
    let totals = calculate_invoice_totals(&items, DiscountPolicy::none());
    assert_eq!(totals.subtotal, dec!(-50));
    assert_eq!(totals.tax_amount, dec!(-4));
    assert_eq!(totals.total, dec!(-54));
}

#[test]
fn zero_quantity_item_contributes_nothing() {
    let items = vec![
        InvoiceItem::new("Placeholder", dec!(0), dec!(500), dec!(19)),
        InvoiceItem::new("Support", dec!(1), dec!(10), dec!(19)),
    ];
    let totals = calculate_invoice_totals(&items, DiscountPolicy::none());
    assert_eq!(totals.subtotal, dec!(10));
    assert_eq!(totals.tax_amount, dec!(1.90));
}

#[test]
fn rounding_is_half_away_from_zero() {
    // 0.125 tax rounds up; -0.125 rounds down.
    let items = vec![InvoiceItem::new("Sticker", dec!(1), dec!(2.50), dec!(5))];
    let totals = calculate_invoice_totals(&items, DiscountPolicy::none());
    assert_eq!(totals.tax_amount, dec!(0.13));

    let items = vec![InvoiceItem::new("Sticker", dec!(-1), dec!(2.50), dec!(5))];
    let totals = calculate_invoice_totals(&items, DiscountPolicy::none());
    assert_eq!(totals.tax_amount, dec!(-0.13));
}

#[test]
fn total_is_rounded_from_unrounded_parts() {
    // tax = 0.005 + 0.005 = 0.01 exactly, so per-item rounding would give 0.02.
    let items = vec![
        InvoiceItem::new("Bolt", dec!(1), dec!(0.10), dec!(5)),
        InvoiceItem::new("Nut", dec!(1), dec!(0.10), dec!(5)),
    ];
    let totals = calculate_invoice_totals(&items, DiscountPolicy::none());
    assert_eq!(totals.tax_amount, dec!(0.01));
    assert_eq!(totals.total, dec!(0.21));
}

#[test]
fn fractional_quantities() {
    let item = InvoiceItem::new("Hours", dec!(1.5), dec!(33.33), dec!(0));
    assert_eq!(item.amount, dec!(49.995));
    let totals = calculate_invoice_totals(&[item], DiscountPolicy::none());
    assert_eq!(totals.subtotal, dec!(50.00));
}

#[test]
fn extreme_quantity_and_rate_saturate_instead_of_panicking() {
    let item = InvoiceItem::new("Everything", Decimal::MAX, dec!(2), dec!(8.25));
    assert_eq!(item.amount, Decimal::MAX);
    assert_eq!(item_amount(&item), Decimal::MAX);

    let items = vec![item.clone(), item];
    let totals = calculate_invoice_totals(&items, DiscountPolicy::none());
    assert_eq!(totals.subtotal, Decimal::MAX);
    assert_eq!(totals.total, Decimal::MAX);

    let discounted = calculate_invoice_totals(&items, DiscountPolicy::Percentage(dec!(10)));
    assert!(discounted.total < Decimal::MAX);
    assert!(totals.tax_amount > Decimal::ZERO);
}

#[test]
fn large_item_tax_is_exact_below_the_bound() {
    // 1e16 * 1e12 = 1e28 fits, but 1e28 * 8.25 does not.
    let quantity = Decimal::from(10u64.pow(16));
    let rate = Decimal::from(10u64.pow(12));
    let items = vec![InvoiceItem::new("Bulk", quantity, rate, dec!(8.25))];
    let totals = calculate_invoice_totals(&items, DiscountPolicy::none());
    let tax =
        Decimal::from(825u64) * Decimal::from(10u64.pow(12)) * Decimal::from(10u64.pow(12));
    assert_eq!(totals.tax_amount, tax);
    assert_eq!(totals.total, quantity * rate + tax);
}

#[test]
fn build_unchecked_accepts_invalid_values() {
    let inv = InvoiceBuilder::new("", "", date(2024, 1, 1))
        .add_item(InvoiceItem::new("", dec!(-2), dec!(10), dec!(-5)))
        .build_unchecked();
    assert_eq!(inv.subtotal, dec!(-20));
    assert_eq!(inv.tax_amount, dec!(1));
    assert_eq!(inv.total, dec!(-19));
}

#[test]
fn build_rejects_more_than_fifty_items_as_validation() {
    let items = (0..51).map(|_| InvoiceItem::new("Widget", dec!(1), dec!(1), dec!(0)));
    let err = InvoiceBuilder::new("INV-2024-0001", "client-1", date(2024, 1, 1))
        .items(items)
        .build()
        .unwrap_err();
    match err {
        BillbookError::Validation(msg) => assert!(msg.contains("items"), "{msg}"),
        other => panic!("expected validation error, got {other:?}"),
    }
}

// ── Payment terms ───────────────────────────────────────────────────────────

#[test]
fn unknown_terms_code_deserializes_as_net30() {
    let terms: PaymentTerms = serde_json::from_str("\"45\"").unwrap();
    assert_eq!(terms, PaymentTerms::Net30);
    let terms: PaymentTerms = serde_json::from_str("\"\"").unwrap();
    assert_eq!(terms, PaymentTerms::Net30);
}

#[test]
fn terms_codes_round_trip_through_strings() {
    for terms in PaymentTerms::ALL {
        let json = serde_json::to_string(&terms).unwrap();
        assert_eq!(json, format!("\"{}\"", terms.code()));
        assert_eq!(PaymentTerms::from_code(terms.code()), Some(terms));
    }
    assert_eq!(PaymentTerms::from_code(" 14 "), Some(PaymentTerms::Net14));
    assert_eq!(PaymentTerms::from_code("net30"), None);
}

#[test]
fn due_date_crosses_leap_day() {
    assert_eq!(
        compute_due_date(date(2024, 2, 15), PaymentTerms::Net14),
        date(2024, 2, 29)
    );
    assert_eq!(
        compute_due_date(date(2023, 2, 15), PaymentTerms::Net14),
        date(2023, 3, 1)
    );
}

#[test]
fn due_date_crosses_year_end() {
    assert_eq!(
        compute_due_date(date(2024, 12, 20), PaymentTerms::Net30),
        date(2025, 1, 19)
    );
}

#[test]
fn due_date_saturates_at_calendar_end() {
    assert_eq!(
        compute_due_date(NaiveDate::MAX, PaymentTerms::Net90),
        NaiveDate::MAX
    );
}

#[test]
fn exactly_at_due_instant_is_not_overdue() {
    let inv = InvoiceBuilder::new("INV-2024-0001", "client-1", date(2024, 1, 1))
        .due_date(date(2024, 1, 31))
        .build_unchecked();
    let midnight = Utc.with_ymd_and_hms(2024, 1, 31, 0, 0, 0).unwrap();
    assert!(!is_overdue(&inv, midnight));
    assert!(is_overdue(&inv, midnight + chrono::Duration::milliseconds(1)));
    assert_eq!(days_overdue(inv.due_date, midnight), 0);
}

// ── Money helpers ───────────────────────────────────────────────────────────

#[test]
fn percent_of_zero_base() {
    assert_eq!(percent_of(Decimal::ZERO, dec!(19)), Decimal::ZERO);
    assert_eq!(round2(dec!(2.675)), dec!(2.68));
    assert_eq!(round2(dec!(-2.675)), dec!(-2.68));
}
