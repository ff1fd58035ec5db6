// ============================================================================
// Format Module
// Currency and percentage formatting engine
// ============================================================================
//
// This module provides:
// - format_currency / CurrencyFormatter: money values with symbol and separators
// - format_percent: fractions as percentages
// - CurrencyDefaults: process-wide or explicit style defaults
// - Data / Cell / Table: shape-preserving scalar, sequence and table inputs
//
// Design principles:
// - Output has the shape of the input; non-numeric entries pass through
// - Round half to even, decided on the exact binary value of each f64
// - Process-wide defaults are read once per call behind a RwLock

mod currency;
mod data;
mod defaults;
mod digits;
mod errors;
mod percent;
mod rounding;
mod symbols;

pub use currency::{format_currency, CurrencyFormatter};
pub use data::{Cell, Data, Table, TableError};
pub use defaults::{
    currency_defaults, reset_currency_defaults, set_currency_defaults, CurrencyDefaults,
};
pub use digits::{IntoDigits, MAX_FRACTION_DIGITS};
pub use errors::{FormatError, FormatResult};
pub use percent::{format_percent, DEFAULT_PERCENT_DIGITS};
pub use symbols::{get_supported_currency_symbols, lookup_symbol, resolve_symbol, CURRENCY_SYMBOLS};

#[cfg(test)]
pub(crate) use defaults::DEFAULTS_TEST_LOCK;
