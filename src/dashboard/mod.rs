//! Dashboard statistics: a read model recomputed from the invoice collection.
//!
//! Nothing here is persisted and nothing mutates the input invoices.

mod recent;
mod stats;

pub use recent::*;
pub use stats::*;
