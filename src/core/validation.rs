//! Input validation for invoices, clients, the business profile and settings.
//!
//! These checks belong to the form boundary. The calculators never call them
//! and compute over whatever values they are given.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::currencies::is_known_currency_code;
use super::error::ValidationError;
use super::filter::InvoiceFilter;
use super::types::*;

const MAX_ITEMS: usize = 50;
const MAX_NOTES_CHARS: usize = 1000;
const MAX_TERMS_CHARS: usize = 2000;
const MIN_PHONE_CHARS: usize = 10;
const MAX_PREFIX_CHARS: usize = 10;

/// Validate a single line item. `field` is the path prefix, e.g. "items[2]".
pub fn validate_item(item: &InvoiceItem, field: &str) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if item.description.trim().is_empty() {
        errors.push(ValidationError::new(
            format!("{field}.description"),
            "description is required",
        ));
    }

    let min_amount = dec!(0.01);
    let max_amount = dec!(999999);

    if item.quantity < min_amount {
        errors.push(ValidationError::new(
            format!("{field}.quantity"),
            "quantity must be greater than 0",
        ));
    } else if item.quantity > max_amount {
        errors.push(ValidationError::new(
            format!("{field}.quantity"),
            "quantity is too large",
        ));
    }

    if item.rate < min_amount {
        errors.push(ValidationError::new(
            format!("{field}.rate"),
            "rate must be greater than 0",
        ));
    } else if item.rate > max_amount {
        errors.push(ValidationError::new(format!("{field}.rate"), "rate is too large"));
    }

    check_percent(item.tax_rate, &format!("{field}.tax_rate"), &mut errors);

    errors
}

/// Validate an invoice as submitted from the invoice form.
/// Returns all validation errors found (not just the first).
pub fn validate_invoice(invoice: &Invoice) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if invoice.invoice_number.trim().is_empty() {
        errors.push(ValidationError::new(
            "invoice_number",
            "invoice number must not be empty",
        ));
    }

    if invoice.client_id.trim().is_empty() {
        errors.push(ValidationError::new("client_id", "please select a client"));
    }

    if invoice.items.is_empty() {
        errors.push(ValidationError::new("items", "at least one item is required"));
    } else if invoice.items.len() > MAX_ITEMS {
        errors.push(ValidationError::new(
            "items",
            format!("maximum {MAX_ITEMS} items allowed"),
        ));
    }

    for (i, item) in invoice.items.iter().enumerate() {
        errors.extend(validate_item(item, &format!("items[{i}]")));
    }

    if invoice.due_date < invoice.issue_date {
        errors.push(ValidationError::new(
            "due_date",
            "due date cannot be before issue date",
        ));
    }

    let discount = invoice.discount.value();
    if discount < Decimal::ZERO {
        errors.push(ValidationError::new(
            "discount.value",
            "discount cannot be negative",
        ));
    } else if discount > dec!(999999) {
        errors.push(ValidationError::new("discount.value", "discount is too large"));
    } else if invoice.discount.is_percentage() && discount > dec!(100) {
        errors.push(ValidationError::new(
            "discount.value",
            "percentage discount cannot exceed 100%",
        ));
    }

    check_max_chars(invoice.notes.as_deref(), MAX_NOTES_CHARS, "notes", &mut errors);
    check_max_chars(invoice.terms.as_deref(), MAX_TERMS_CHARS, "terms", &mut errors);

    errors
}

/// Validate a client record.
pub fn validate_client(client: &Client) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    check_required(&client.name, 100, "name", &mut errors);
    check_required(&client.company, 200, "company", &mut errors);
    check_email(&client.email, "email", &mut errors);

    if let Some(phone) = client.phone.as_deref().filter(|p| !p.trim().is_empty()) {
        check_phone(phone, "phone", &mut errors);
    }

    validate_address(&client.address, "address", &mut errors);

    errors
}

/// Validate the business profile.
pub fn validate_business_profile(profile: &BusinessProfile) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    check_required(&profile.company_name, 200, "company_name", &mut errors);
    check_required(&profile.owner_name, 100, "owner_name", &mut errors);
    check_email(&profile.email, "email", &mut errors);
    check_phone(&profile.phone, "phone", &mut errors);

    if let Some(website) = profile.website.as_deref().filter(|w| !w.is_empty()) {
        if !is_valid_url(website) {
            errors.push(ValidationError::new(
                "website",
                "please enter a valid website URL",
            ));
        }
    }

    validate_address(&profile.address, "address", &mut errors);
    check_max_chars(profile.tax_number.as_deref(), 50, "tax_number", &mut errors);
    check_currency(&profile.currency, "currency", &mut errors);
    check_percent(profile.default_tax_rate, "default_tax_rate", &mut errors);
    check_max_chars(
        Some(&profile.invoice_terms),
        MAX_TERMS_CHARS,
        "invoice_terms",
        &mut errors,
    );

    errors
}

/// Validate application settings.
pub fn validate_settings(settings: &Settings) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    check_percent(settings.default_tax_rate, "default_tax_rate", &mut errors);
    check_currency(&settings.currency, "currency", &mut errors);

    let prefix = &settings.invoice_prefix;
    if prefix.is_empty() {
        errors.push(ValidationError::new(
            "invoice_prefix",
            "invoice prefix is required",
        ));
    } else if prefix.chars().count() > MAX_PREFIX_CHARS {
        errors.push(ValidationError::new(
            "invoice_prefix",
            format!("invoice prefix cannot exceed {MAX_PREFIX_CHARS} characters"),
        ));
    } else if !prefix
        .chars()
        .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '-')
    {
        errors.push(ValidationError::new(
            "invoice_prefix",
            "invoice prefix can only contain uppercase letters, numbers, and hyphens",
        ));
    }

    errors
}

/// Validate an invoice list filter.
pub fn validate_invoice_filter(filter: &InvoiceFilter) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    if let (Some(from), Some(to)) = (filter.date_from, filter.date_to) {
        if to < from {
            errors.push(ValidationError::new(
                "date_to",
                "end date cannot be before start date",
            ));
        }
    }
    errors
}

/// Loose email check: `local@domain.tld` without whitespace.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

/// Digits, spaces, dashes and parentheses with an optional leading `+`.
pub fn is_valid_phone(phone: &str) -> bool {
    let phone = phone.trim();
    let body = phone.strip_prefix('+').unwrap_or(phone);
    !body.is_empty()
        && body
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, ' ' | '-' | '(' | ')'))
}

fn is_valid_url(url: &str) -> bool {
    let rest = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"));
    matches!(rest, Some(host) if !host.is_empty() && !host.contains(char::is_whitespace))
}

fn validate_address(address: &Address, field: &str, errors: &mut Vec<ValidationError>) {
    let parts = [
        ("street", &address.street, "street address is required"),
        ("city", &address.city, "city is required"),
        ("state", &address.state, "state is required"),
        ("zip_code", &address.zip_code, "ZIP code is required"),
        ("country", &address.country, "country is required"),
    ];
    for (name, value, message) in parts {
        if value.trim().is_empty() {
            errors.push(ValidationError::new(format!("{field}.{name}"), message));
        }
    }
}

fn check_required(value: &str, max_chars: usize, field: &str, errors: &mut Vec<ValidationError>) {
    if value.trim().is_empty() {
        errors.push(ValidationError::new(field, format!("{field} is required")));
    } else if value.chars().count() > max_chars {
        errors.push(ValidationError::new(
            field,
            format!("{field} cannot exceed {max_chars} characters"),
        ));
    }
}

fn check_max_chars(
    value: Option<&str>,
    max_chars: usize,
    field: &str,
    errors: &mut Vec<ValidationError>,
) {
    if value.is_some_and(|v| v.chars().count() > max_chars) {
        errors.push(ValidationError::new(
            field,
            format!("{field} cannot exceed {max_chars} characters"),
        ));
    }
}

fn check_email(email: &str, field: &str, errors: &mut Vec<ValidationError>) {
    if email.trim().is_empty() {
        errors.push(ValidationError::new(field, "email is required"));
    } else if !is_valid_email(email) {
        errors.push(ValidationError::new(
            field,
            "please enter a valid email address",
        ));
    }
}

fn check_phone(phone: &str, field: &str, errors: &mut Vec<ValidationError>) {
    if phone.trim().chars().count() < MIN_PHONE_CHARS {
        errors.push(ValidationError::new(
            field,
            format!("phone number must be at least {MIN_PHONE_CHARS} digits"),
        ));
    } else if !is_valid_phone(phone) {
        errors.push(ValidationError::new(
            field,
            "please enter a valid phone number",
        ));
    }
}

fn check_currency(code: &str, field: &str, errors: &mut Vec<ValidationError>) {
    if code.trim().is_empty() {
        errors.push(ValidationError::new(field, "currency is required"));
    } else if !is_known_currency_code(code) {
        errors.push(ValidationError::new(
            field,
            format!("currency code '{code}' is not a known ISO 4217 code"),
        ));
    }
}

fn check_percent(value: Decimal, field: &str, errors: &mut Vec<ValidationError>) {
    if value < Decimal::ZERO {
        errors.push(ValidationError::new(field, "tax rate cannot be negative"));
    } else if value > dec!(100) {
        errors.push(ValidationError::new(field, "tax rate cannot exceed 100%"));
    }
}
