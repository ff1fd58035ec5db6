// ============================================================================
// Logged Assertions
// Lightweight pass/fail recording for ad-hoc test scripts
// ============================================================================
//
// Unlike assert!, a failed check is logged and counted instead of panicking,
// so a script can run every check and print one summary at the end. Tests run
// through run_test_safely may still panic; the panic is caught and recorded.
//
// Two entry points:
// - TestLog: an owned recorder
// - assert_log & co: the same operations on a process-wide recorder
// ============================================================================

use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::any::Any;
use std::fmt::{self, Debug, Display};
use std::panic::{self, AssertUnwindSafe};

// ============================================================================
// Summary
// ============================================================================

/// Counts of recorded outcomes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TestSummary {
    /// Checks that passed
    pub passed: usize,
    /// Checks that failed
    pub failed: usize,
    /// Test functions that panicked
    pub panicked: usize,
    /// One line per failed check or panicked test
    pub failures: Vec<String>,
}

impl TestSummary {
    #[inline]
    pub fn total_checks(&self) -> usize {
        self.passed + self.failed
    }

    #[inline]
    pub fn all_passed(&self) -> bool {
        self.failed == 0 && self.panicked == 0
    }
}

impl Display for TestSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} passed, {} failed, {} panicked",
            self.passed, self.failed, self.panicked
        )
    }
}

/// Execution order and outcome of a randomized run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RandomizedRun {
    /// Test names in the order they ran
    pub order: Vec<String>,
    /// Summary after the run
    pub summary: TestSummary,
}

/// A named test function.
pub type NamedTest = (&'static str, fn());

// ============================================================================
// TestLog
// ============================================================================

/// Recorder for logged checks, grouped under an optional section label.
#[derive(Debug, Clone, Default)]
pub struct TestLog {
    section: Option<String>,
    summary: TestSummary,
}

impl TestLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new section; later checks without a label use it.
    pub fn label(&mut self, label: &str) {
        tracing::info!("=== {label} ===");
        self.section = Some(label.to_string());
    }

    #[inline]
    pub fn section(&self) -> Option<&str> {
        self.section.as_deref()
    }

    /// Compares `actual` with `expected`, logs and records the outcome.
    pub fn check<T, U>(
        &mut self,
        actual: T,
        expected: U,
        label: Option<&str>,
        msg: Option<&str>,
    ) -> bool
    where
        T: PartialEq<U> + Debug,
        U: Debug,
    {
        let label = self.resolve_label(label);
        if actual == expected {
            tracing::info!("PASS {label}");
            self.summary.passed += 1;
            true
        } else {
            let detail = format!(
                "{label}{}: expected {expected:?}, got {actual:?}",
                msg.map(|m| format!(" - {m}")).unwrap_or_default()
            );
            tracing::error!("FAIL {detail}");
            self.summary.failed += 1;
            self.summary.failures.push(detail);
            false
        }
    }

    /// Passes when `result` is an error whose message contains `expected`.
    ///
    /// An empty `expected` accepts any error.
    pub fn check_err<T, E>(
        &mut self,
        result: &Result<T, E>,
        expected: &str,
        label: Option<&str>,
    ) -> bool
    where
        T: Debug,
        E: Display,
    {
        let label = self.resolve_label(label);
        let failure = match result {
            Err(err) if err.to_string().contains(expected) => None,
            Err(err) => Some(format!(
                "{label}: expected error containing {expected:?}, got {:?}",
                err.to_string()
            )),
            Ok(value) => Some(format!("{label}: expected an error, got Ok({value:?})")),
        };

        match failure {
            None => {
                tracing::info!("PASS {label} (raised as expected)");
                self.summary.passed += 1;
                true
            },
            Some(detail) => {
                tracing::error!("FAIL {detail}");
                self.summary.failed += 1;
                self.summary.failures.push(detail);
                false
            },
        }
    }

    /// Runs `test`, recording a panic as a failure instead of unwinding.
    pub fn run_safely<F: FnOnce()>(&mut self, name: &str, test: F) -> bool {
        let outcome = catch(test);
        self.record_run(name, outcome)
    }

    /// Runs `tests` in a shuffled order; a seed makes the order reproducible.
    pub fn run_randomized(&mut self, tests: &[NamedTest], seed: Option<u64>) -> RandomizedRun {
        let order = shuffled(tests, seed);
        for (name, test) in &order {
            let outcome = catch(*test);
            self.record_run(name, outcome);
        }
        self.finish_run(&order)
    }

    pub fn summary(&self) -> TestSummary {
        self.summary.clone()
    }

    /// Clears counts and the current section.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    fn resolve_label(&self, label: Option<&str>) -> String {
        label
            .or(self.section.as_deref())
            .unwrap_or("unlabeled")
            .to_string()
    }

    fn record_run(&mut self, name: &str, outcome: Result<(), String>) -> bool {
        match outcome {
            Ok(()) => {
                tracing::debug!("test {name} completed");
                true
            },
            Err(panic_msg) => {
                let detail = format!("{name} panicked: {panic_msg}");
                tracing::error!("{detail}");
                self.summary.panicked += 1;
                self.summary.failures.push(detail);
                false
            },
        }
    }

    fn finish_run(&self, order: &[NamedTest]) -> RandomizedRun {
        let summary = self.summary();
        tracing::info!("randomized run finished: {summary}");
        RandomizedRun {
            order: order.iter().map(|(name, _)| name.to_string()).collect(),
            summary,
        }
    }
}

fn shuffled(tests: &[NamedTest], seed: Option<u64>) -> Vec<NamedTest> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let mut order = tests.to_vec();
    order.shuffle(&mut rng);
    order
}

fn catch<F: FnOnce()>(test: F) -> Result<(), String> {
    panic::catch_unwind(AssertUnwindSafe(test)).map_err(|payload| panic_message(payload.as_ref()))
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        (*msg).to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "non-string panic payload".to_string()
    }
}

// ============================================================================
// Process-wide Recorder
// ============================================================================
//
// The lock is never held while a test body runs, so tests may call
// assert_log themselves.

static TEST_LOG: Mutex<TestLog> = parking_lot::const_mutex(TestLog {
    section: None,
    summary: TestSummary {
        passed: 0,
        failed: 0,
        panicked: 0,
        failures: Vec::new(),
    },
});

/// Compares `actual` with `expected` on the process-wide recorder.
///
/// ```
/// use clearutils::assertions::assert_log;
///
/// assert!(assert_log(2 + 2, 4, Some("Addition"), Some("2 + 2 should be 4")));
/// ```
pub fn assert_log<T, U>(actual: T, expected: U, label: Option<&str>, msg: Option<&str>) -> bool
where
    T: PartialEq<U> + Debug,
    U: Debug,
{
    TEST_LOG.lock().check(actual, expected, label, msg)
}

/// Starts a labelled section on the process-wide recorder.
pub fn assert_log_label(label: &str) {
    TEST_LOG.lock().label(label);
}

/// Expects `result` to be an error containing `expected`.
pub fn assert_log_exception<T, E>(
    result: &Result<T, E>,
    expected: &str,
    label: Option<&str>,
) -> bool
where
    T: Debug,
    E: Display,
{
    TEST_LOG.lock().check_err(result, expected, label)
}

/// Runs `test` and records a panic instead of propagating it.
pub fn run_test_safely<F: FnOnce()>(name: &str, test: F) -> bool {
    let outcome = catch(test);
    TEST_LOG.lock().record_run(name, outcome)
}

/// Runs `tests` in shuffled order on the process-wide recorder.
pub fn run_all_tests_randomized(tests: &[NamedTest], seed: Option<u64>) -> RandomizedRun {
    let order = shuffled(tests, seed);
    for (name, test) in &order {
        run_test_safely(name, *test);
    }
    TEST_LOG.lock().finish_run(&order)
}

/// Returns the process-wide summary.
pub fn test_summary() -> TestSummary {
    TEST_LOG.lock().summary()
}

/// Clears the process-wide recorder.
pub fn reset_test_log() {
    TEST_LOG.lock().reset();
}
