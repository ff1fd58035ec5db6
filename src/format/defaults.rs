// ============================================================================
// Currency Defaults
// Process-wide style defaults for currency formatting
// ============================================================================

use parking_lot::RwLock;
use std::sync::LazyLock;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Style defaults applied when a call does not override the currency.
///
/// `currency_symbol` is stored as given (ISO code or glyph) and resolved
/// against the symbol table at format time.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CurrencyDefaults {
    /// ISO code (e.g. "EUR") or literal glyph (e.g. "€")
    pub currency_symbol: String,

    /// Use `.` for thousands and `,` for decimals
    pub use_euro_style: bool,
}

impl CurrencyDefaults {
    pub fn new(currency_symbol: impl Into<String>, use_euro_style: bool) -> Self {
        Self {
            currency_symbol: currency_symbol.into(),
            use_euro_style,
        }
    }

    /// Euro symbol with European separators
    pub fn euro() -> Self {
        Self::new("EUR", true)
    }

    pub fn with_symbol(mut self, currency_symbol: impl Into<String>) -> Self {
        self.currency_symbol = currency_symbol.into();
        self
    }

    pub fn with_euro_style(mut self, use_euro_style: bool) -> Self {
        self.use_euro_style = use_euro_style;
        self
    }

    /// Thousands separator for this style.
    #[inline]
    pub fn thousands_separator(&self) -> &'static str {
        if self.use_euro_style {
            "."
        } else {
            ","
        }
    }

    /// Decimal separator for this style.
    #[inline]
    pub fn decimal_separator(&self) -> &'static str {
        if self.use_euro_style {
            ","
        } else {
            "."
        }
    }
}

impl Default for CurrencyDefaults {
    fn default() -> Self {
        Self::new("$", false)
    }
}

// ============================================================================
// Process-wide Defaults
// ============================================================================
//
// Readers take the lock once per formatting call and copy the value out, so a
// concurrent set_currency_defaults never changes a call already in progress.

static DEFAULTS: LazyLock<RwLock<CurrencyDefaults>> =
    LazyLock::new(|| RwLock::new(CurrencyDefaults::default()));

/// Sets the process-wide currency symbol (code or glyph) and separator style.
pub fn set_currency_defaults(currency_symbol: &str, use_euro_style: bool) {
    let mut defaults = DEFAULTS.write();
    *defaults = CurrencyDefaults::new(currency_symbol, use_euro_style);
}

/// Restores `$` with `,` thousands and `.` decimal separators.
pub fn reset_currency_defaults() {
    *DEFAULTS.write() = CurrencyDefaults::default();
}

/// Returns a snapshot of the current process-wide defaults.
pub fn currency_defaults() -> CurrencyDefaults {
    DEFAULTS.read().clone()
}

/// Serializes tests that touch the process-wide defaults.
#[cfg(test)]
pub(crate) static DEFAULTS_TEST_LOCK: parking_lot::Mutex<()> = parking_lot::const_mutex(());
