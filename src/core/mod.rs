//! Core invoice types and the calculation engine.
//!
//! Money arithmetic, line-item and totals calculation, payment terms and
//! overdue policy, numbering, lifecycle, plus builders and form validation.

mod builder;
mod calculation;
pub mod currencies;
mod error;
mod filter;
mod lifecycle;
mod money;
mod numbering;
mod terms;
mod types;
mod validation;

pub use builder::*;
pub use calculation::*;
pub use currencies::{currency_symbol, is_known_currency_code};
pub use error::*;
pub(crate) use error::join_errors;
pub use filter::*;
pub use lifecycle::*;
pub use money::*;
pub use numbering::*;
pub use terms::*;
pub use types::*;
pub use validation::*;
