use billbook::core::*;
use billbook::store::{MemoryBackend, Workbook};
use chrono::{NaiveDate, TimeZone, Utc};
use rust_decimal_macros::dec;

fn main() -> Result<(), BillbookError> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let now = Utc.with_ymd_and_hms(2024, 6, 1, 9, 0, 0).unwrap();
    let mut book = Workbook::new(MemoryBackend::new());

    let client = ClientBuilder::new(
        "John Smith",
        "Acme Corporation",
        "john.smith@acme.com",
        AddressBuilder::new("456 Corporate Blvd", "Business City", "90210", "United States")
            .state("CA")
            .build(),
    )
    .phone("+1 (555) 234-5678")
    .created_at(now)
    .build()?;
    book.save_client(&client)?;

    let invoice = book
        .new_invoice(&client.id, NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(), now)?
        .add_item(InvoiceItem::new("Web Development Services", dec!(40), dec!(125), dec!(8.25)))
        .add_item(InvoiceItem::new("Project Management", dec!(10), dec!(150), dec!(8.25)))
        .notes("Thank you for your business!")
        .build()?;
    book.save_invoice(&invoice)?;

    let profile = book.business_profile()?;
    let symbol = profile.currency_symbol.as_str();
    println!("Invoice: {}", invoice.invoice_number);
    println!("Client:  {} ({})", client.company, client.name);
    println!("Issued:  {}", invoice.issue_date);
    println!("Due:     {} ({})", invoice.due_date, invoice.payment_terms.label());
    println!("---");
    for item in &invoice.items {
        println!(
            "  {} x {} @ {symbol}{} = {symbol}{}",
            item.quantity, item.description, item.rate, item.amount
        );
    }
    println!("---");
    println!("Subtotal: {symbol}{}", invoice.subtotal);
    println!("Tax:      {symbol}{}", invoice.tax_amount);
    println!("Discount: {symbol}{}", invoice.discount_amount);
    println!("Total:    {symbol}{}", invoice.total);

    book.update_status(&invoice.id, InvoiceStatus::Sent, now)?;
    let later = Utc.with_ymd_and_hms(2024, 7, 15, 9, 0, 0).unwrap();
    let changed = book.reconcile_overdue(later)?;
    println!("---");
    println!("Reconciled on {}: {changed} invoice(s) now overdue", later.date_naive());
    if let Some(inv) = book.invoice_by_id(&invoice.id)? {
        println!(
            "{} is {} ({} days past due)",
            inv.invoice_number,
            inv.status,
            days_overdue(inv.due_date, later)
        );
    }

    let stats = billbook::dashboard::calculate_dashboard_stats(&book.invoices()?, later);
    println!("Outstanding overdue: {symbol}{}", stats.overdue_amount);

    Ok(())
}
