// ============================================================================
// Basic Usage Example
// ============================================================================

use clearutils::prelude::*;
use tracing::Level;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== clearutils Example ===\n");

    let log_dir = std::env::temp_dir().join("clearutils-demo");
    let sink = setup_logging(&LogConfig::default().with_path(log_dir.join("demo.log")))?;
    logw(Level::INFO, "demo started");

    // Currency
    println!("Currency:");
    for (amount, digits, symbol) in [
        (1234.567, 2, None),
        (-9876.543, 0, Some("EUR")),
        (12345.67, -2, None),
        (98765.4321, -3, Some("JPY")),
        (-0.001, 0, None),
    ] {
        let out = currency(amount, digits, symbol)?;
        println!("  {amount:>12} digits={digits:>2} -> {}", out.as_str().unwrap_or("?"));
    }

    // Collections keep their shape; non-numeric entries pass through
    let mixed = currency(vec![Cell::Number(5.5), Cell::from("n/a"), Cell::Missing], 0, None)?;
    println!("  mixed column -> {mixed:?}");

    // Euro style defaults
    set_currency_defaults("EUR", true);
    println!("  euro style -> {}", currency(1234567.891, 2, None)?.as_str().unwrap_or("?"));
    reset_currency_defaults();

    // Percentages
    println!("\nPercent:");
    for (value, digits) in [(0.1234, 2), (0.9876, 1), (0.12345, -1), (0.6789, -2)] {
        let out = per(value, digits)?;
        println!("  {value:>8} digits={digits:>2} -> {}", out.as_str().unwrap_or("?"));
    }

    // Table input
    let table = Table::from_columns([
        ("q1", vec![Cell::Number(1500.0), Cell::Number(-20.25)]),
        ("q2", vec![Cell::Number(99.5), Cell::Missing]),
    ])?;
    if let Data::Table(formatted) = currency(table, 1, Some("GBP"))? {
        println!("\nTable ({} x {}):", formatted.shape().0, formatted.shape().1);
        for row in formatted.rows() {
            let cells: Vec<String> = row.iter().map(ToString::to_string).collect();
            println!("  {}", cells.join(" | "));
        }
    }

    // Logged assertions
    println!("\nChecks:");
    assert_log_label("Formatting");
    assert_log(
        currency(2.5, 0, None)?.into_string(),
        Some("$2".to_string()),
        None,
        Some("banker's rounding"),
    );
    assert_log_exception(&currency(1, "2", None), "must be an integer", None);
    run_test_safely("panicking check", || panic!("caught, not fatal"));
    println!("  {}", clearutils::assertions::test_summary());

    // Backup the log file
    flush_logs()?;
    let backup = backup_file(sink.path())?;
    println!("\nLog backed up to {}", backup.display());

    Ok(())
}
