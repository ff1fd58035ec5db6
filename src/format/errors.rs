// ============================================================================
// Formatting Errors
// Input validation failures raised by the formatting engine
// ============================================================================

use std::fmt;

/// Guidance attached to every rejected currency `digits` argument.
pub(crate) const CURRENCY_DIGITS_GUIDANCE: &str =
    "The 'digits' argument (for rounding) must be an integer (default is 0). \
     If you intended to specify a currency (e.g., 'EUR' or 'JPY'), pass it as the \
     currency symbol argument instead. The default symbol is $ for 'USD', unless \
     changed with set_currency_defaults.";

/// Errors that can occur while validating a formatting request.
///
/// Unknown currency codes are deliberately absent: they fall back to being
/// used as a literal glyph.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FormatError {
    /// The required value (amount, percentage) was not supplied
    MissingInput {
        /// What the caller was expected to provide
        what: &'static str,
    },
    /// The `digits` argument was not an integer
    InvalidArgument {
        /// Caller-facing explanation
        message: String,
    },
}

impl FormatError {
    pub(crate) fn missing(what: &'static str) -> Self {
        FormatError::MissingInput { what }
    }

    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        FormatError::InvalidArgument {
            message: message.into(),
        }
    }
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::MissingInput { what } => {
                write!(f, "missing required numeric input (e.g., {what})")
            },
            FormatError::InvalidArgument { message } => write!(f, "invalid argument: {message}"),
        }
    }
}

impl std::error::Error for FormatError {}

/// Result type alias for formatting operations
pub type FormatResult<T> = Result<T, FormatError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            FormatError::missing("amount to format as currency").to_string(),
            "missing required numeric input (e.g., amount to format as currency)"
        );
        assert_eq!(
            FormatError::invalid("digits must be an integer").to_string(),
            "invalid argument: digits must be an integer"
        );
    }

    #[test]
    fn test_currency_guidance_mentions_symbol_argument() {
        assert!(CURRENCY_DIGITS_GUIDANCE.contains("must be an integer"));
        assert!(CURRENCY_DIGITS_GUIDANCE.contains("currency symbol argument"));
    }
}
