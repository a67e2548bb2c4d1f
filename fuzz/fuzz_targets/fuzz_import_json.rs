#![no_main]

use billbook::store::{MemoryBackend, Workbook};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Must not panic. Errors are fine, panics are bugs.
        let mut book = Workbook::new(MemoryBackend::new());
        let _ = book.import_json(s);
    }
});
