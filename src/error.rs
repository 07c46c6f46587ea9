// SPDX-License-Identifier: AGPL-3.0-only

//! Typed errors for CPT analysis setup.
//!
//! Only structural problems are errors: array-shape inconsistencies and
//! physically impossible site parameters abort the run before any
//! computation, since no partial result would be meaningful. Per-sample
//! numerical conditions (invalid stress, indeterminate normalization,
//! non-convergence) are row statuses on the output table, not errors —
//! see `table::RowStatus`.

use std::fmt;

/// Fatal errors raised before any per-depth computation starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CptError {
    /// Parallel arrays disagree in length (channel name, expected, found).
    ShapeMismatch {
        /// Name of the offending channel (e.g. "fs", "u2", "unit_weight").
        channel: &'static str,
        /// Length of the depth array.
        expected: usize,
        /// Length of the offending array.
        found: usize,
    },

    /// Site parameters or record values outside their physical range.
    InvalidParameters(String),
}

impl fmt::Display for CptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ShapeMismatch {
                channel,
                expected,
                found,
            } => {
                write!(
                    f,
                    "Shape mismatch: channel '{channel}' has {found} samples, expected {expected}"
                )
            }
            Self::InvalidParameters(msg) => write!(f, "Invalid parameters: {msg}"),
        }
    }
}

impl std::error::Error for CptError {}
