// ============================================================================
// Currency Symbol Table
// Static ISO 4217 code -> display glyph mapping
// ============================================================================

use std::collections::BTreeMap;

/// Supported ISO currency codes and their display glyphs.
///
/// Several codes share a glyph (`$`, `¥`, `kr`); lookup is by code only.
pub const CURRENCY_SYMBOLS: &[(&str, &str)] = &[
    ("USD", "$"),
    ("EUR", "€"),
    ("GBP", "£"),
    ("JPY", "¥"),
    ("CNY", "¥"),
    ("INR", "₹"),
    ("RUB", "₽"),
    ("KRW", "₩"),
    ("BRL", "R$"),
    ("AUD", "A$"),
    ("CAD", "C$"),
    ("CHF", "CHF"),
    ("SEK", "kr"),
    ("NOK", "kr"),
    ("DKK", "kr"),
    ("ZAR", "R"),
    ("PLN", "zł"),
    ("MXN", "$"),
    ("IDR", "Rp"),
    ("THB", "฿"),
    ("MYR", "RM"),
    ("PHP", "₱"),
    ("VND", "₫"),
    ("ILS", "₪"),
    ("TRY", "₺"),
    ("HUF", "Ft"),
    ("CZK", "Kč"),
    ("AED", "د.إ"),
    ("SAR", "ر.س"),
    ("EGP", "ج.م"),
    ("NGN", "₦"),
    ("PKR", "₨"),
    ("BDT", "৳"),
    ("UAH", "₴"),
    ("KZT", "₸"),
    ("CLP", "$"),
    ("COP", "$"),
    ("PEN", "S/."),
];

/// Returns a copy of the supported ISO codes and their glyphs.
pub fn get_supported_currency_symbols() -> BTreeMap<&'static str, &'static str> {
    CURRENCY_SYMBOLS.iter().copied().collect()
}

/// Looks up the glyph for an ISO code, case-insensitively.
pub fn lookup_symbol(code: &str) -> Option<&'static str> {
    let code = code.to_uppercase();
    CURRENCY_SYMBOLS
        .iter()
        .find(|(iso, _)| *iso == code)
        .map(|(_, glyph)| *glyph)
}

/// Resolves a currency designation to the prefix to print.
///
/// Known ISO codes map to their glyph; anything else (a raw glyph such as
/// `"€"`, or an unknown code) is used literally.
pub fn resolve_symbol(code_or_glyph: &str) -> String {
    lookup_symbol(code_or_glyph)
        .map(str::to_string)
        .unwrap_or_else(|| code_or_glyph.to_string())
}
