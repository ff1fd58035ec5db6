// ============================================================================
// Percent Formatting
// Fractions rendered as grouped, banker's-rounded percentages
// ============================================================================

use super::data::Data;
use super::digits::{checked_digits, IntoDigits};
use super::errors::{FormatError, FormatResult};
use super::rounding::{fixed, group_thousands, round_to_tens, split_fixed};

/// Percent output always uses `,` grouping and `.` decimals.
const THOUSANDS: &str = ",";
const DECIMAL: &str = ".";

/// Default number of decimal places for [`format_percent`] callers.
pub const DEFAULT_PERCENT_DIGITS: i32 = 1;

/// Formats a fraction or collection of fractions as percentages.
///
/// The value is multiplied by 100 in f64 before rounding, so the usual binary
/// representation quirks apply (`0.29` becomes `28.999999999999996`).
///
/// # Errors
/// * `MissingInput` if `value` is a missing scalar
/// * `InvalidArgument` if `digits` is not an integer or exceeds
///   [`MAX_FRACTION_DIGITS`](super::MAX_FRACTION_DIGITS)
///
/// # Example
/// ```
/// use clearutils::format::format_percent;
///
/// assert_eq!(format_percent(0.1234, 2).unwrap().as_str(), Some("12.34%"));
/// assert_eq!(format_percent(0.9876, 1).unwrap().as_str(), Some("98.8%"));
/// assert_eq!(format_percent(0.6789, -2).unwrap().as_str(), Some("100%"));
/// ```
pub fn format_percent(value: impl Into<Data>, digits: impl IntoDigits) -> FormatResult<Data> {
    let value = value.into();
    if matches!(value, Data::Scalar(ref cell) if cell.is_missing()) {
        return Err(FormatError::missing("amount to format as percentage"));
    }

    let digits = checked_digits(digits, "The 'digits' argument must be an integer")?;

    Ok(value.map_numbers(|v| percent_value(v, digits)))
}

/// Formats one finite fraction.
fn percent_value(value: f64, digits: i32) -> String {
    let pct = value * 100.0;
    let places = digits.unsigned_abs();

    if digits < 0 {
        let rounded = round_to_tens(pct.abs(), places);
        // Rounded integers carry no negative zero
        let sign = if pct < 0.0 && rounded != "0" { "-" } else { "" };
        return format!("{sign}{}%", group_thousands(&rounded, THOUSANDS));
    }

    let rounded = fixed(pct, places);
    let (negative, int_part, frac_part) = split_fixed(&rounded);

    let mut out = String::with_capacity(rounded.len() + rounded.len() / 3 + 2);
    if negative {
        out.push('-');
    }
    out.push_str(&group_thousands(int_part, THOUSANDS));
    if places > 0 {
        out.push_str(DECIMAL);
        out.push_str(frac_part);
    }
    out.push('%');
    out
}
