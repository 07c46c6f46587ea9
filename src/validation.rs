// SPDX-License-Identifier: AGPL-3.0-only

//! Validation harness for the check binaries.
//!
//! Every validation binary follows the same pattern:
//!   - Hardcoded expected values with provenance
//!   - Explicit pass/fail checks against documented tolerances
//!   - Exit code 0 (all checks pass) or 1 (any check fails)
//!   - Machine-readable summary on stdout

use std::fmt;

/// How a tolerance threshold is applied.
#[derive(Debug, Clone, Copy)]
pub enum ToleranceMode {
    /// |observed − expected| < tolerance
    Absolute,
    /// |observed − expected| / |expected| < tolerance
    Relative,
    /// observed < threshold (upper bound only)
    UpperBound,
    /// observed > threshold (lower bound only)
    LowerBound,
    /// observed == expected exactly (counts, statuses)
    Exact,
}

impl fmt::Display for ToleranceMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Absolute => write!(f, "abs"),
            Self::Relative => write!(f, "rel"),
            Self::UpperBound => write!(f, "<"),
            Self::LowerBound => write!(f, ">"),
            Self::Exact => write!(f, "=="),
        }
    }
}

/// A single validation check with result tracking.
#[derive(Debug, Clone)]
pub struct Check {
    /// Human-readable label
    pub label: String,
    /// Whether this check passed
    pub passed: bool,
    /// Observed value
    pub observed: f64,
    /// Expected value (or bound)
    pub expected: f64,
    /// Tolerance used (0 for exact/bound modes)
    pub tolerance: f64,
    /// How the tolerance was applied
    pub mode: ToleranceMode,
}

/// Accumulates validation checks and produces a summary with exit code.
#[derive(Debug, Default)]
pub struct ValidationSummary {
    checks: Vec<Check>,
}

impl ValidationSummary {
    /// Empty summary.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, check: Check) {
        let status = if check.passed { "PASS" } else { "FAIL" };
        println!(
            "  [{status}] {} — observed {:.6}, expected {} {:.6} (tol {:.2e})",
            check.label, check.observed, check.mode, check.expected, check.tolerance
        );
        self.checks.push(check);
    }

    /// |observed − expected| < tolerance.
    pub fn check_abs(&mut self, label: &str, observed: f64, expected: f64, tolerance: f64) {
        self.push(Check {
            label: label.to_string(),
            passed: (observed - expected).abs() < tolerance,
            observed,
            expected,
            tolerance,
            mode: ToleranceMode::Absolute,
        });
    }

    /// |observed − expected| / |expected| < tolerance.
    pub fn check_rel(&mut self, label: &str, observed: f64, expected: f64, tolerance: f64) {
        self.push(Check {
            label: label.to_string(),
            passed: ((observed - expected) / expected).abs() < tolerance,
            observed,
            expected,
            tolerance,
            mode: ToleranceMode::Relative,
        });
    }

    /// observed < bound.
    pub fn check_below(&mut self, label: &str, observed: f64, bound: f64) {
        self.push(Check {
            label: label.to_string(),
            passed: observed < bound,
            observed,
            expected: bound,
            tolerance: 0.0,
            mode: ToleranceMode::UpperBound,
        });
    }

    /// observed > bound.
    pub fn check_above(&mut self, label: &str, observed: f64, bound: f64) {
        self.push(Check {
            label: label.to_string(),
            passed: observed > bound,
            observed,
            expected: bound,
            tolerance: 0.0,
            mode: ToleranceMode::LowerBound,
        });
    }

    /// Exact integer equality (row counts, status tallies).
    pub fn check_count(&mut self, label: &str, observed: usize, expected: usize) {
        self.push(Check {
            label: label.to_string(),
            passed: observed == expected,
            observed: observed as f64,
            expected: expected as f64,
            tolerance: 0.0,
            mode: ToleranceMode::Exact,
        });
    }

    /// All checks so far.
    #[must_use]
    pub fn checks(&self) -> &[Check] {
        &self.checks
    }

    /// True when every check passed.
    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.checks.iter().all(|c| c.passed)
    }

    /// Print the summary line and return the process exit code (0/1).
    #[must_use]
    pub fn finish(&self) -> i32 {
        let passed = self.checks.iter().filter(|c| c.passed).count();
        let total = self.checks.len();
        println!();
        println!("  SUMMARY: {passed}/{total} checks passed");
        i32::from(!self.all_passed())
    }
}
