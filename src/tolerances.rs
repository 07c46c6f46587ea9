// SPDX-License-Identifier: AGPL-3.0-only

//! Centralized numeric thresholds with their origin and rationale.
//!
//! Every tolerance and bound used by the classifier and its tests is defined
//! here. No ad-hoc magic numbers in the algorithm code.

// ═══════════════════════════════════════════════════════════════════
// Fixed-point iteration (Robertson 2009/2010 stress exponent)
// ═══════════════════════════════════════════════════════════════════

/// Convergence tolerance on the stress exponent `n` between iterations.
///
/// Robertson (2009) recommends iterating until Δn < 0.01; the exponent only
/// enters `Qtn` through `(Pa/σv0')ⁿ`, so a 0.01 change in `n` moves `Ic` by
/// well under the 0.05 width that would matter at a zone boundary.
pub const N_TOLERANCE: f64 = 0.01;

/// Iteration cap for the `n`/`Ic` fixed-point solve.
///
/// The iteration is a damped oscillation for all physically plausible
/// inputs and settles in 3–6 steps; 20 bounds worst-case work
/// deterministically while leaving a wide margin.
pub const MAX_SBT_ITERATIONS: usize = 20;

/// Lower clamp on the stress exponent (clean coarse soils at depth).
///
/// Robertson (2009): `n` ranges from ~0.5 in sands to 1.0 in clays.
pub const N_EXPONENT_MIN: f64 = 0.5;

/// Upper clamp on the stress exponent (fine-grained soils).
pub const N_EXPONENT_MAX: f64 = 1.0;

// ═══════════════════════════════════════════════════════════════════
// Estimation guards
// ═══════════════════════════════════════════════════════════════════

/// Floor applied to ratios before `log10` in empirical correlations.
///
/// Keeps the unit-weight relations defined when a reading is zero or
/// slightly negative from sensor drift; corresponds to Rf = 0.1% and
/// qt/Pa = 0.1, both below the calibrated range of the correlations.
pub const LOG_ARG_FLOOR: f64 = 0.1;

/// Plausible band for estimated total unit weight, kN/m³.
///
/// Peat at the bottom, dense glacial till at the top; estimates outside
/// this band indicate readings outside the correlation's range.
pub const UNIT_WEIGHT_MIN: f64 = 10.0;

/// Upper end of the plausible unit-weight band, kN/m³.
pub const UNIT_WEIGHT_MAX: f64 = 26.0;

// ═══════════════════════════════════════════════════════════════════
// Test tolerances
// ═══════════════════════════════════════════════════════════════════

/// Tolerance for operations that should be exact in f64 arithmetic.
///
/// f64 has ~15.9 significant digits; 1e-10 allows a few digits of
/// accumulated rounding in short compositions of exact operations.
pub const EXACT_F64: f64 = 1e-10;
