#![no_main]

use billbook::store::{MemoryBackend, Workbook};
use chrono::Utc;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Import → export → import must not panic at any step.
        let mut book = Workbook::new(MemoryBackend::new());
        if book.import_json(s).is_ok() {
            if let Ok(json) = book.export_json(Utc::now()) {
                let mut copy = Workbook::new(MemoryBackend::new());
                let _ = copy.import_json(&json);
            }
        }
    }
});
