// ============================================================================
// Digits Argument
// Validation of the rounding-precision argument
// ============================================================================

use super::data::Cell;
use super::errors::{FormatError, FormatResult};

/// Largest accepted number of decimal places.
///
/// The smallest subnormal f64 is 2^-1074, so every double has an exact decimal
/// expansion within 1074 fractional digits.
pub const MAX_FRACTION_DIGITS: i32 = 1074;

/// Conversion into a rounding precision.
///
/// Only native integers convert. Floats, `Cell` values and text are rejected,
/// even `2.0` or `"2"`, so a currency code or a stray number passed in the
/// precision slot surfaces as an error instead of being silently coerced.
pub trait IntoDigits {
    /// Returns the precision, or `None` if the value is not an integer.
    fn into_digits(self) -> Option<i32>;
}

macro_rules! int_into_digits {
    ($($ty:ty),* $(,)?) => {
        $(
            impl IntoDigits for $ty {
                #[inline]
                fn into_digits(self) -> Option<i32> {
                    i32::try_from(self).ok()
                }
            }
        )*
    };
}

int_into_digits!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl IntoDigits for f64 {
    #[inline]
    fn into_digits(self) -> Option<i32> {
        None
    }
}

impl IntoDigits for &Cell {
    #[inline]
    fn into_digits(self) -> Option<i32> {
        None
    }
}

impl IntoDigits for Cell {
    #[inline]
    fn into_digits(self) -> Option<i32> {
        None
    }
}

impl IntoDigits for &str {
    #[inline]
    fn into_digits(self) -> Option<i32> {
        None
    }
}

impl IntoDigits for String {
    #[inline]
    fn into_digits(self) -> Option<i32> {
        None
    }
}

impl<T: IntoDigits> IntoDigits for Option<T> {
    fn into_digits(self) -> Option<i32> {
        self.and_then(IntoDigits::into_digits)
    }
}

/// Converts `digits` and enforces [`MAX_FRACTION_DIGITS`].
///
/// `not_integer` is the message attached when the value is not an integer.
pub(crate) fn checked_digits(digits: impl IntoDigits, not_integer: &str) -> FormatResult<i32> {
    let digits = digits
        .into_digits()
        .ok_or_else(|| FormatError::invalid(not_integer))?;
    if digits > MAX_FRACTION_DIGITS {
        return Err(FormatError::invalid(format!(
            "The 'digits' argument must not exceed {MAX_FRACTION_DIGITS}, got {digits}"
        )));
    }
    Ok(digits)
}
