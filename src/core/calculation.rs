use rust_decimal::Decimal;

use super::money::{percent_of, round2};
use super::types::*;

/// `quantity * rate`. Not rounded; rounding happens only on the aggregate.
/// Saturates at the `Decimal` bounds.
pub fn item_amount(item: &InvoiceItem) -> Decimal {
    item.quantity.saturating_mul(item.rate)
}

/// Tax on a single item: its own amount at its own rate. Not rounded.
pub fn item_tax(item: &InvoiceItem) -> Decimal {
    percent_of(item_amount(item), item.tax_rate)
}

/// Sum of item amounts, unrounded.
pub fn calculate_subtotal(items: &[InvoiceItem]) -> Decimal {
    items
        .iter()
        .map(item_amount)
        .fold(Decimal::ZERO, Decimal::saturating_add)
}

/// Sum of per-item tax, unrounded. Items are never pooled under one rate.
pub fn calculate_total_tax(items: &[InvoiceItem]) -> Decimal {
    items
        .iter()
        .map(item_tax)
        .fold(Decimal::ZERO, Decimal::saturating_add)
}

/// Discount on the pre-tax subtotal. Percentages above 100 are not clamped.
pub fn discount_amount(subtotal: Decimal, policy: DiscountPolicy) -> Decimal {
    match policy {
        DiscountPolicy::Percentage(percent) => percent_of(subtotal, percent),
        DiscountPolicy::Fixed(amount) => amount,
    }
}

/// Compute invoice totals from line items and a discount policy.
///
/// Each of the four figures is rounded independently from the unrounded
/// intermediates; `total` is not back-derived from the rounded siblings.
/// Sums saturate at the `Decimal` bounds instead of overflowing.
///
/// ```
/// use billbook::core::*;
/// use rust_decimal_macros::dec;
///
/// let items = vec![
///     InvoiceItem::new("Web Development", dec!(40), dec!(125), dec!(8.25)),
///     InvoiceItem::new("Project Management", dec!(10), dec!(150), dec!(8.25)),
/// ];
/// let totals = calculate_invoice_totals(&items, DiscountPolicy::none());
/// assert_eq!(totals.subtotal, dec!(6500.00));
/// assert_eq!(totals.tax_amount, dec!(536.25));
/// assert_eq!(totals.total, dec!(7036.25));
/// ```
pub fn calculate_invoice_totals(items: &[InvoiceItem], policy: DiscountPolicy) -> Totals {
    let subtotal = calculate_subtotal(items);
    let tax_amount = calculate_total_tax(items);
    let discount = discount_amount(subtotal, policy);
    let total = subtotal
        .saturating_add(tax_amount)
        .saturating_sub(discount);

    Totals {
        subtotal: round2(subtotal),
        tax_amount: round2(tax_amount),
        discount_amount: round2(discount),
        total: round2(total),
    }
}

impl InvoiceItem {
    /// Refresh `amount` from `quantity` and `rate`.
    pub fn recompute(&mut self) {
        self.amount = item_amount(self);
    }
}

impl Invoice {
    /// Recompute every item amount and the four invoice totals.
    pub fn recalculate(&mut self) {
        for item in &mut self.items {
            item.recompute();
        }
        self.apply_totals(calculate_invoice_totals(&self.items, self.discount));
    }

    /// The invoice's current totals as a value.
    pub fn totals(&self) -> Totals {
        Totals {
            subtotal: self.subtotal,
            tax_amount: self.tax_amount,
            discount_amount: self.discount_amount,
            total: self.total,
        }
    }

    pub(crate) fn apply_totals(&mut self, totals: Totals) {
        self.subtotal = totals.subtotal;
        self.tax_amount = totals.tax_amount;
        self.discount_amount = totals.discount_amount;
        self.total = totals.total;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn item(qty: Decimal, rate: Decimal, tax: Decimal) -> InvoiceItem {
        InvoiceItem::new("Item", qty, rate, tax)
    }

    #[test]
    fn item_amount_is_unrounded() {
        let i = item(dec!(3), dec!(0.333), dec!(0));
        assert_eq!(item_amount(&i), dec!(0.999));
    }

    #[test]
    fn tax_is_computed_per_item_rate() {
        let items = vec![
            item(dec!(1), dec!(100), dec!(7)),
            item(dec!(1), dec!(100), dec!(19)),
        ];
        assert_eq!(calculate_total_tax(&items), dec!(26));
    }

    #[test]
    fn percentage_discount_applies_to_subtotal_only() {
        let items = vec![item(dec!(1), dec!(200), dec!(10))];
        let totals = calculate_invoice_totals(&items, DiscountPolicy::Percentage(dec!(10)));
        assert_eq!(totals.subtotal, dec!(200));
        assert_eq!(totals.tax_amount, dec!(20));
        assert_eq!(totals.discount_amount, dec!(20));
        assert_eq!(totals.total, dec!(200));
    }

    #[test]
    fn total_rounds_from_unrounded_parts() {
        // subtotal 0.333 -> 0.33, tax 0.0333 -> 0.03, total 0.3663 -> 0.37
        let items = vec![item(dec!(1), dec!(0.333), dec!(10))];
        let totals = calculate_invoice_totals(&items, DiscountPolicy::none());
        assert_eq!(totals.subtotal, dec!(0.33));
        assert_eq!(totals.tax_amount, dec!(0.03));
        assert_eq!(totals.total, dec!(0.37));
        assert_ne!(totals.total, totals.subtotal + totals.tax_amount);
    }

    #[test]
    fn empty_items_give_zero_totals() {
        let totals = calculate_invoice_totals(&[], DiscountPolicy::none());
        assert_eq!(totals, Totals::default());
    }
}
