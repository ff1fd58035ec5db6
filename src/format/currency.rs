// ============================================================================
// Currency Formatting
// Symbol resolution, separator style and banker's rounding for money values
// ============================================================================

use super::data::Data;
use super::defaults::{currency_defaults, CurrencyDefaults};
use super::digits::{checked_digits, IntoDigits};
use super::errors::{FormatError, FormatResult, CURRENCY_DIGITS_GUIDANCE};
use super::rounding::{fixed, group_thousands, round_to_tens, split_fixed};
use super::symbols::resolve_symbol;

/// Currency formatter bound to an explicit set of defaults.
///
/// The free function [`format_currency`] builds one from a snapshot of the
/// process-wide defaults; construct one directly to keep formatting
/// independent of global state.
///
/// # Example
/// ```
/// use clearutils::format::{CurrencyDefaults, CurrencyFormatter};
///
/// let euro = CurrencyFormatter::new(CurrencyDefaults::euro());
/// let out = euro.format(1234567.891, 2, None).unwrap();
/// assert_eq!(out.as_str(), Some("€1.234.567,89"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct CurrencyFormatter {
    defaults: CurrencyDefaults,
}

impl CurrencyFormatter {
    pub fn new(defaults: CurrencyDefaults) -> Self {
        Self { defaults }
    }

    #[inline]
    pub fn defaults(&self) -> &CurrencyDefaults {
        &self.defaults
    }

    /// Formats a scalar, sequence or table of amounts as currency.
    ///
    /// # Arguments
    /// * `amount` - value(s) to format; non-numeric entries of a collection
    ///   pass through unchanged
    /// * `digits` - decimal places, negative to round to tens, hundreds, ...
    /// * `currency_symbol` - ISO code or literal glyph overriding the default
    ///
    /// # Errors
    /// * `MissingInput` if `amount` is a missing scalar
    /// * `InvalidArgument` if `digits` is not an integer or exceeds
    ///   [`MAX_FRACTION_DIGITS`](super::MAX_FRACTION_DIGITS)
    pub fn format(
        &self,
        amount: impl Into<Data>,
        digits: impl IntoDigits,
        currency_symbol: Option<&str>,
    ) -> FormatResult<Data> {
        let amount = amount.into();
        if matches!(amount, Data::Scalar(ref cell) if cell.is_missing()) {
            return Err(FormatError::missing("amount to format as currency"));
        }

        let digits = checked_digits(digits, CURRENCY_DIGITS_GUIDANCE)?;

        // An empty override counts as absent
        let symbol = currency_symbol
            .filter(|s| !s.is_empty())
            .unwrap_or(self.defaults.currency_symbol.as_str());
        let prefix = resolve_symbol(symbol);

        Ok(amount.map_numbers(|v| self.format_value(v, digits, &prefix)))
    }

    /// Formats one finite value with an already resolved prefix.
    fn format_value(&self, value: f64, digits: i32, prefix: &str) -> String {
        let thousands = self.defaults.thousands_separator();
        let magnitude = value.abs();
        let places = digits.unsigned_abs();

        let body = if digits < 0 {
            group_thousands(&round_to_tens(magnitude, places), thousands)
        } else {
            let rounded = fixed(magnitude, places);
            let (_, int_part, frac_part) = split_fixed(&rounded);
            let mut body = group_thousands(int_part, thousands);
            if digits > 0 {
                body.push_str(self.defaults.decimal_separator());
                body.push_str(frac_part);
            }
            body
        };

        // Sign follows the unrounded input: -0.001 renders as "-$0"
        let sign = if value < 0.0 { "-" } else { "" };
        format!("{sign}{prefix}{body}")
    }
}

/// Formats a number or collection of numbers as currency using the
/// process-wide defaults.
///
/// The defaults are read once, before any value is formatted.
///
/// # Example
/// ```
/// use clearutils::format::format_currency;
///
/// let out = format_currency(-9876.543, 0, Some("EUR")).unwrap();
/// assert_eq!(out.as_str(), Some("-€9,877"));
///
/// let out = format_currency(12345.67, -2, None).unwrap();
/// assert_eq!(out.as_str(), Some("$12,300"));
/// ```
pub fn format_currency(
    amount: impl Into<Data>,
    digits: impl IntoDigits,
    currency_symbol: Option<&str>,
) -> FormatResult<Data> {
    CurrencyFormatter::new(currency_defaults()).format(amount, digits, currency_symbol)
}
