#![no_main]

use billbook::core::{Invoice, reconcile_overdue};
use billbook::dashboard::calculate_dashboard_stats;
use chrono::Utc;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Arbitrary stored invoices (negative, huge or far-future values) must
    // not make the aggregates panic.
    if let Ok(mut invoices) = serde_json::from_slice::<Vec<Invoice>>(data) {
        let now = Utc::now();
        let _ = calculate_dashboard_stats(&invoices, now);
        let _ = reconcile_overdue(&mut invoices, now);
    }
});
