// SPDX-License-Identifier: AGPL-3.0-only

//! Result table: one row per input depth, flags instead of omissions.
//!
//! Flagged rows (invalid stress, indeterminate normalization,
//! non-convergent iteration) keep their raw readings and stress values so
//! the depth axis stays continuous for downstream plotting; only the
//! derived fields are absent. Row count always equals input row count.

use crate::geotech::zones::SbtZone;
use serde::Serialize;

/// Per-sample confidence/validity status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RowStatus {
    /// Converged classification.
    Ok,
    /// Effective stress ≤ 0; excluded from classification.
    InvalidStress,
    /// Normalization undefined (net resistance or friction ratio ≤ 0).
    Indeterminate,
    /// Iteration cap reached; `ic`/`n`/`zone` are the last iterate,
    /// low-confidence.
    NonConvergent,
}

/// One depth sample of the assembled output.
#[derive(Debug, Clone, Serialize)]
pub struct ResultRow {
    /// Depth, m.
    pub depth: f64,
    /// Measured tip resistance qc, kPa.
    pub qc: f64,
    /// Measured sleeve friction fs, kPa.
    pub fs: f64,
    /// Measured pore pressure u2, kPa (CPTu only).
    pub u2: Option<f64>,
    /// End-area corrected tip resistance qt, kPa.
    pub qt: f64,
    /// Total vertical stress σv0, kPa.
    pub sigma_v0: f64,
    /// Hydrostatic pore pressure u0, kPa.
    pub u0: f64,
    /// Effective vertical stress σv0', kPa.
    pub sigma_v0_eff: f64,
    /// Normalized cone resistance Qtn.
    pub qtn: Option<f64>,
    /// Normalized friction ratio Fr, percent.
    pub fr: Option<f64>,
    /// Pore-pressure ratio Bq (CPTu only).
    pub bq: Option<f64>,
    /// Converged stress exponent n.
    pub n: Option<f64>,
    /// Soil Behavior Type Index Ic.
    pub ic: Option<f64>,
    /// Fixed-point iterations consumed.
    pub iterations: Option<usize>,
    /// SBTn zone.
    pub zone: Option<SbtZone>,
    /// Validity/confidence flag.
    pub status: RowStatus,
}

/// Assembled analysis output, ordered by depth.
#[derive(Debug, Clone, Serialize)]
pub struct ResultTable {
    rows: Vec<ResultRow>,
}

impl ResultTable {
    /// Wrap assembled rows. The pipeline guarantees one row per input
    /// sample, in depth order.
    #[must_use]
    pub fn new(rows: Vec<ResultRow>) -> Self {
        Self { rows }
    }

    /// All rows, in depth order.
    #[must_use]
    pub fn rows(&self) -> &[ResultRow] {
        &self.rows
    }

    /// Number of rows (equals the input sample count).
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True for an empty table (does not occur for validated input).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Row at the greatest depth not exceeding `depth`, if any.
    #[must_use]
    pub fn row_at_depth(&self, depth: f64) -> Option<&ResultRow> {
        match self
            .rows
            .partition_point(|row| row.depth <= depth)
        {
            0 => None,
            i => Some(&self.rows[i - 1]),
        }
    }

    /// Count of rows carrying the given status.
    #[must_use]
    pub fn count_status(&self, status: RowStatus) -> usize {
        self.rows.iter().filter(|r| r.status == status).count()
    }

    /// Serialize the table to pretty JSON for the reporting collaborator.
    ///
    /// # Errors
    ///
    /// Returns the underlying `serde_json` error on serialization failure.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
