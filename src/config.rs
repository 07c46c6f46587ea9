// SPDX-License-Identifier: AGPL-3.0-only

//! Analysis configuration: iteration control, zone-table revision, units.

use crate::error::CptError;
use crate::tolerances;
use serde::Deserialize;

/// Which published revision of the SBTn zone-threshold table governs
/// classification.
///
/// Robertson (2010) is the reference publication for the Ic bands and the
/// Qtn–Fr chart boundaries used here; the 2012 restatement carries the same
/// band values. The revision is recorded in configuration (and echoed in
/// reporting) rather than hard-coded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum ClassificationScheme {
    /// Robertson & Cabal (2010), Guide to Cone Penetration Testing.
    #[default]
    Robertson2010,
    /// Robertson (2012) update; identical Ic band values.
    Robertson2012,
}

impl ClassificationScheme {
    /// Parse from a configuration string.
    #[must_use]
    pub fn from_arg(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "robertson2012" | "2012" => Self::Robertson2012,
            "robertson2010" | "2010" | "default" => Self::Robertson2010,
            _ => {
                eprintln!("  WARNING: Unknown classification scheme '{s}', using Robertson 2010");
                Self::Robertson2010
            }
        }
    }

    /// Human-readable citation for reports.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Robertson2010 => "Robertson & Cabal (2010) SBTn, 9 zones",
            Self::Robertson2012 => "Robertson (2012) SBTn, 9 zones",
        }
    }
}

/// Length/pressure unit conventions of the incoming record.
///
/// The core computes in SI (m, kPa); imperial input is converted once at
/// ingestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum UnitSystem {
    /// Depth in m, pressures in kPa.
    #[default]
    Si,
    /// Depth in ft, pressures in tsf (US practice).
    Imperial,
}

impl UnitSystem {
    /// Parse from a configuration string.
    #[must_use]
    pub fn from_arg(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "imperial" | "us" | "ft-tsf" => Self::Imperial,
            "si" | "metric" | "m-kpa" | "default" => Self::Si,
            _ => {
                eprintln!("  WARNING: Unknown unit system '{s}', using SI");
                Self::Si
            }
        }
    }
}

/// Knobs for one analysis run. Immutable once the run starts.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Stop the fixed-point iteration when |Δn| drops below this.
    pub convergence_tolerance: f64,
    /// Hard cap on fixed-point iterations per sample.
    pub max_iterations: usize,
    /// Zone-threshold table revision.
    pub scheme: ClassificationScheme,
    /// Units of the incoming record.
    pub unit_system: UnitSystem,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            convergence_tolerance: tolerances::N_TOLERANCE,
            max_iterations: tolerances::MAX_SBT_ITERATIONS,
            scheme: ClassificationScheme::default(),
            unit_system: UnitSystem::default(),
        }
    }
}

impl AnalysisConfig {
    /// Reject non-positive tolerances and a zero iteration budget.
    ///
    /// # Errors
    ///
    /// Returns `CptError::InvalidParameters` on out-of-range values.
    pub fn validate(&self) -> Result<(), CptError> {
        if !(self.convergence_tolerance > 0.0) || !self.convergence_tolerance.is_finite() {
            return Err(CptError::InvalidParameters(format!(
                "convergence_tolerance must be finite and > 0, got {}",
                self.convergence_tolerance
            )));
        }
        if self.max_iterations == 0 {
            return Err(CptError::InvalidParameters(
                "max_iterations must be >= 1".into(),
            ));
        }
        Ok(())
    }
}
