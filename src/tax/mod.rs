pub mod calculator;
pub mod compare;
pub mod error;
pub mod regime;
pub mod slab;
pub mod year;

pub use calculator::{calculate, CalculationInput, CalculationResult};
pub use compare::{compare, Comparison};
pub use error::TaxError;
pub use regime::RegimeConfig;
pub use year::{FiscalYear, Regime};
