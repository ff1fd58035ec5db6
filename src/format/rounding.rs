// ============================================================================
// Round-Half-to-Even Primitives
// Exact banker's rounding and digit grouping on IEEE-754 doubles
// ============================================================================
//
// Every f64 is an exact binary fraction, so "halfway" is decided against the
// exact stored value, not against its shortest decimal spelling:
//
//   2.5    -> "2"     exact tie, 2 is even
//   3.5    -> "4"     exact tie, 4 is even
//   2.675  -> "2.67"  stored as 2.67499999999999982236431605997495353221893310546875
//
// Non-negative precision is delegated to the core float formatter, which is
// correctly rounded with ties to even. Negative precision (tens, hundreds,
// ...) splits the magnitude into an exact integer and fraction and rounds the
// integer in u128 arithmetic.
// ============================================================================

use std::cmp::Ordering;

/// Largest power of ten representable in u128 (10^38).
const MAX_EXACT_PLACES: u32 = 38;

/// Magnitudes below 2^127 convert to u128 without loss.
const MAX_EXACT_MAGNITUDE: f64 = 170_141_183_460_469_231_731_687_303_715_884_105_728.0;

/// Formats a magnitude with exactly `places` fractional digits, ties to even.
#[inline]
pub fn fixed(magnitude: f64, places: u32) -> String {
    format!("{:.*}", places as usize, magnitude)
}

/// Rounds a non-negative magnitude to a multiple of `10^places`, ties to even,
/// and returns the ungrouped integer digits.
pub fn round_to_tens(magnitude: f64, places: u32) -> String {
    debug_assert!(magnitude >= 0.0, "round_to_tens expects a magnitude");

    if places == 0 {
        return fixed(magnitude, 0);
    }

    if places <= MAX_EXACT_PLACES && magnitude < MAX_EXACT_MAGNITUDE {
        // trunc() and the subtraction are both exact for finite doubles
        let whole = magnitude.trunc();
        let fraction = magnitude - whole;
        let n = whole as u128;

        let scale = 10u128.pow(places);
        let half = scale / 2;
        let (quotient, remainder) = (n / scale, n % scale);

        let round_up = match remainder.cmp(&half) {
            Ordering::Greater => true,
            Ordering::Less => false,
            Ordering::Equal => fraction > 0.0 || quotient % 2 == 1,
        };
        let quotient = if round_up { quotient + 1 } else { quotient };

        // quotient * scale <= n + scale < 2^128
        return (quotient * scale).to_string();
    }

    // Beyond u128 every double is already an integer; fall back to float steps.
    if places > f64::MAX_10_EXP as u32 {
        return "0".to_string();
    }
    let scale = 10f64.powi(places as i32);
    fixed((magnitude / scale).round_ties_even() * scale, 0)
}

/// Inserts `separator` every three digits from the right of an integer string.
pub fn group_thousands(digits: &str, separator: &str) -> String {
    let len = digits.len();
    if len <= 3 {
        return digits.to_string();
    }

    let mut grouped = String::with_capacity(len + (len / 3) * separator.len());
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push_str(separator);
        }
        grouped.push(ch);
    }
    grouped
}

/// Splits a fixed-point string (as produced by [`fixed`]) into its sign,
/// integer digits and fractional digits.
pub fn split_fixed(formatted: &str) -> (bool, &str, &str) {
    let (negative, unsigned) = match formatted.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, formatted),
    };
    match unsigned.split_once('.') {
        Some((int_part, frac_part)) => (negative, int_part, frac_part),
        None => (negative, unsigned, ""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_ties_to_even() {
        assert_eq!(fixed(0.5, 0), "0");
        assert_eq!(fixed(1.5, 0), "2");
        assert_eq!(fixed(2.5, 0), "2");
        assert_eq!(fixed(3.5, 0), "4");
        assert_eq!(fixed(0.125, 2), "0.12");
        assert_eq!(fixed(0.375, 2), "0.38");
    }

    #[test]
    fn test_fixed_uses_exact_binary_value() {
        // 2.675 is stored slightly below the tie
        assert_eq!(fixed(2.675, 2), "2.67");
        // 1.005 is stored slightly below the tie
        assert_eq!(fixed(1.005, 2), "1.00");
        assert_eq!(fixed(1234.567, 2), "1234.57");
    }

    #[test]
    fn test_round_to_tens_basic() {
        assert_eq!(round_to_tens(12345.67, 2), "12300");
        assert_eq!(round_to_tens(98765.4321, 3), "99000");
        assert_eq!(round_to_tens(12.345, 1), "10");
        assert_eq!(round_to_tens(67.89, 2), "100");
        assert_eq!(round_to_tens(0.0, 2), "0");
    }

    #[test]
    fn test_round_to_tens_ties_to_even() {
        assert_eq!(round_to_tens(250.0, 2), "200");
        assert_eq!(round_to_tens(350.0, 2), "400");
        assert_eq!(round_to_tens(25.0, 1), "20");
        assert_eq!(round_to_tens(35.0, 1), "40");
        assert_eq!(round_to_tens(5000.0, 4), "0");
        assert_eq!(round_to_tens(15000.0, 4), "20000");
    }

    #[test]
    fn test_round_to_tens_fraction_breaks_tie() {
        assert_eq!(round_to_tens(250.000_000_1, 2), "300");
        assert_eq!(round_to_tens(249.999_999_9, 2), "200");
        assert_eq!(round_to_tens(25.5, 1), "30");
    }

    #[test]
    fn test_round_to_tens_huge_values() {
        assert_eq!(round_to_tens(1e300, 400), "0");
        assert_eq!(round_to_tens(4e39, 40), "0");
        assert_eq!(round_to_tens(1e20, 3), "100000000000000000000");
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands("0", ","), "0");
        assert_eq!(group_thousands("123", ","), "123");
        assert_eq!(group_thousands("1234", ","), "1,234");
        assert_eq!(group_thousands("1234567", ","), "1,234,567");
        assert_eq!(group_thousands("123456", "."), "123.456");
        assert_eq!(group_thousands("12345678901", " "), "12 345 678 901");
    }

    #[test]
    fn test_split_fixed() {
        assert_eq!(split_fixed("1234.50"), (false, "1234", "50"));
        assert_eq!(split_fixed("-0.0"), (true, "0", "0"));
        assert_eq!(split_fixed("42"), (false, "42", ""));
    }
}
