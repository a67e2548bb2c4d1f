//! Persistence boundary.
//!
//! A [`StorageBackend`] is a plain keyed string store, much like browser
//! local storage: one serialized value per collection. [`Workbook`] layers
//! JSON (de)serialization and whole-collection read-modify-write on top of
//! any backend.
//!
//! Writes replace the whole collection and the last write wins. Within one
//! process `&mut self` on every write serializes read-modify-write cycles;
//! nothing coordinates separate processes sharing a backend.

mod file;
mod memory;
mod sample;
mod workbook;

pub use file::FileBackend;
pub use memory::MemoryBackend;
pub use workbook::{EXPORT_VERSION, ExportBundle, Workbook};

use crate::core::BillbookError;

/// Storage key of the invoice collection.
pub const INVOICES_KEY: &str = "invoices";
/// Storage key of the client collection.
pub const CLIENTS_KEY: &str = "clients";
/// Storage key of the business profile.
pub const BUSINESS_PROFILE_KEY: &str = "business-profile";
/// Storage key of the application settings.
pub const SETTINGS_KEY: &str = "settings";

/// All keys written by a [`Workbook`].
pub const ALL_KEYS: [&str; 4] = [INVOICES_KEY, CLIENTS_KEY, BUSINESS_PROFILE_KEY, SETTINGS_KEY];

/// Keyed storage of serialized collections.
///
/// `get` must return the value most recently passed to `set` for that key,
/// in full, or `None` if the key was never written or was removed.
pub trait StorageBackend {
    fn get(&self, key: &str) -> Result<Option<String>, BillbookError>;
    fn set(&mut self, key: &str, value: String) -> Result<(), BillbookError>;
    fn remove(&mut self, key: &str) -> Result<(), BillbookError>;
}

impl<B: StorageBackend + ?Sized> StorageBackend for &mut B {
    fn get(&self, key: &str) -> Result<Option<String>, BillbookError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: String) -> Result<(), BillbookError> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<(), BillbookError> {
        (**self).remove(key)
    }
}
