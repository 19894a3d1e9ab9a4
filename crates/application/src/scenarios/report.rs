//! Suite run results

use chrono::{DateTime, Utc};

use super::PetScenario;

/// Result of one scenario.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScenarioResult {
    /// Scenario that was run.
    pub scenario: PetScenario,
    /// Whether it passed.
    pub passed: bool,
    /// Failure message if it failed.
    pub error: Option<String>,
    /// Execution time in milliseconds.
    pub duration_ms: u64,
}

impl ScenarioResult {
    /// Create a passed result.
    #[must_use]
    pub const fn pass(scenario: PetScenario, duration_ms: u64) -> Self {
        Self {
            scenario,
            passed: true,
            error: None,
            duration_ms,
        }
    }

    /// Create a failed result.
    #[must_use]
    pub fn fail(scenario: PetScenario, error: impl Into<String>, duration_ms: u64) -> Self {
        Self {
            scenario,
            passed: false,
            error: Some(error.into()),
            duration_ms,
        }
    }
}

/// Aggregated results of a suite run.
#[derive(Debug, Clone)]
pub struct SuiteReport {
    /// When the run started.
    pub started_at: DateTime<Utc>,
    /// Individual results, in run order.
    pub results: Vec<ScenarioResult>,
    /// Number of scenarios that ran.
    pub total: usize,
    /// Number of passed scenarios.
    pub passed: usize,
    /// Number of failed scenarios.
    pub failed: usize,
    /// Scenarios not run because the suite stopped early.
    pub skipped: usize,
    /// Execution time in milliseconds.
    pub duration_ms: u64,
}

impl SuiteReport {
    /// Create a report; `planned` is the number of scenarios that were scheduled.
    #[must_use]
    pub fn new(
        started_at: DateTime<Utc>,
        results: Vec<ScenarioResult>,
        planned: usize,
        duration_ms: u64,
    ) -> Self {
        let total = results.len();
        let passed = results.iter().filter(|r| r.passed).count();

        Self {
            started_at,
            total,
            passed,
            failed: total - passed,
            skipped: planned.saturating_sub(total),
            results,
            duration_ms,
        }
    }

    /// Check if every scenario that ran passed.
    #[must_use]
    pub const fn all_passed(&self) -> bool {
        self.failed == 0
    }

    /// Get pass rate as percentage.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn pass_rate(&self) -> f64 {
        if self.total == 0 {
            100.0
        } else {
            (self.passed as f64 / self.total as f64) * 100.0
        }
    }

    /// Failed results only.
    pub fn failures(&self) -> impl Iterator<Item = &ScenarioResult> {
        self.results.iter().filter(|r| !r.passed)
    }

    /// Result for `scenario`, if it ran.
    #[must_use]
    pub fn result(&self, scenario: PetScenario) -> Option<&ScenarioResult> {
        self.results.iter().find(|r| r.scenario == scenario)
    }
}
