// ============================================================================
// clearutils
// Clear, modular helpers for formatting, logging, backup and test scripts
// ============================================================================

//! # clearutils
//!
//! Small, independent helpers for scripts and reports.
//!
//! ## Features
//!
//! - **Currency and percent formatting** with banker's rounding, negative
//!   precision (tens, hundreds, ...) and shape-preserving collection input
//! - **Logging** to a buffered file through `tracing`
//! - **File backup** to timestamped copies
//! - **Logged assertions** that record failures instead of aborting a script
//!
//! ## Example
//!
//! ```rust
//! use clearutils::prelude::*;
//!
//! let price = currency(1234.567, 2, None).unwrap();
//! assert_eq!(price.as_str(), Some("$1,234.57"));
//!
//! let share = per(0.1234, 2).unwrap();
//! assert_eq!(share.as_str(), Some("12.34%"));
//!
//! let column = currency(vec![5.5, 2.5], 0, None).unwrap();
//! assert_eq!(
//!     column,
//!     Data::Sequence(vec![Cell::from("$6"), Cell::from("$2")])
//! );
//!
//! assert!(assert_log(2 + 2, 4, Some("Addition"), None));
//! ```

pub mod assertions;
pub mod backup;
pub mod error;
/// Currency and percent formatting.
///
/// Rounding primitives stay internal to the module:
///
/// ```compile_fail
/// let _ = clearutils::format::rounding::fixed(1.0, 2);
/// ```
pub mod format;
pub mod logging;

pub use error::{UtilError, UtilResult};

// Short aliases for script use
pub use format::format_currency as currency;
pub use format::format_currency as curr;
pub use format::format_currency as us;
pub use format::format_percent as per;
pub use format::format_percent as percentage;

// Re-exports for convenience
pub mod prelude {
    pub use crate::assertions::{
        assert_log, assert_log_exception, assert_log_label, run_all_tests_randomized,
        run_test_safely, TestLog, TestSummary,
    };
    pub use crate::backup::{backup_file, backup_file_with, BackupOptions};
    pub use crate::format::{
        format_currency, format_percent, get_supported_currency_symbols,
        reset_currency_defaults, set_currency_defaults, Cell, CurrencyDefaults,
        CurrencyFormatter, Data, FormatError, Table,
    };
    #[cfg(feature = "logging")]
    pub use crate::logging::setup_logging;
    pub use crate::logging::{flush_logs, logw, logw_traceback, LogConfig};
    pub use crate::{curr, currency, per, percentage, us};
}
