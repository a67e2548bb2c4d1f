//! ISO 4217 currency codes and display symbols.
//!
//! Covers the currencies a small business is likely to bill in. Used to
//! validate the business profile and settings, and to pick a default symbol
//! when the profile does not carry one.

/// Check whether `code` is a known ISO 4217 currency code.
pub fn is_known_currency_code(code: &str) -> bool {
    lookup(code).is_some()
}

/// Display symbol for a currency code, e.g. "$" for "USD".
pub fn currency_symbol(code: &str) -> Option<&'static str> {
    lookup(code).map(|(_, symbol)| symbol)
}

fn lookup(code: &str) -> Option<(&'static str, &'static str)> {
    CURRENCIES
        .binary_search_by(|(c, _)| (*c).cmp(code))
        .ok()
        .map(|i| CURRENCIES[i])
}

/// (code, symbol), sorted by code for binary search.
static CURRENCIES: &[(&str, &str)] = &[
    ("AED", "د.إ"),
    ("AUD", "A$"),
    ("BRL", "R$"),
    ("CAD", "CA$"),
    ("CHF", "CHF"),
    ("CNY", "¥"),
    ("CZK", "Kč"),
    ("DKK", "kr"),
    ("EUR", "€"),
    ("GBP", "£"),
    ("HKD", "HK$"),
    ("HUF", "Ft"),
    ("IDR", "Rp"),
    ("ILS", "₪"),
    ("INR", "₹"),
    ("JPY", "¥"),
    ("KRW", "₩"),
    ("MXN", "MX$"),
    ("MYR", "RM"),
    ("NGN", "₦"),
    ("NOK", "kr"),
    ("NZD", "NZ$"),
    ("PHP", "₱"),
    ("PLN", "zł"),
    ("SEK", "kr"),
    ("SGD", "S$"),
    ("THB", "฿"),
    ("TRY", "₺"),
    ("USD", "$"),
    ("ZAR", "R"),
];
