// SPDX-License-Identifier: AGPL-3.0-only

//! Total unit weight estimated from CPT readings.
//!
//! When no measured unit-weight profile exists, the overburden integral
//! needs an estimate. Three published closed-form correlations:
//!
//! - Robertson, P. K., & Cabal, K. L. (2010). Estimating soil unit weight
//!   from CPT. 2nd International Symposium on Cone Penetration Testing.
//! - Mayne, P. W., Peuchen, J., & Bouwmeester, D. (2010). Soil unit weight
//!   estimation from CPTs. CPT'10.
//! - Mayne, P. W. (2014). Interpretation of geotechnical parameters from
//!   seismic piezocone tests. CPT'14.
//!
//! Robertson & Cabal (2010) is regularly cited as Robertson (2010), so that
//! name is accepted as an alias. Estimates are clamped to the plausible
//! [10, 26] kN/m³ band; readings at or below zero are floored before the
//! log terms.

use crate::geotech::constants::GAMMA_W;
use crate::tolerances::{LOG_ARG_FLOOR, UNIT_WEIGHT_MAX, UNIT_WEIGHT_MIN};

/// Which published correlation estimates unit weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnitWeightProcedure {
    /// Robertson & Cabal (2010), from friction ratio and qt/Pa. As
    /// published for a specific gravity of solids gs = 2.65; other gs
    /// values scale the result by gs/2.65, not applied here.
    #[default]
    RobertsonCabal2010,
    /// Mayne et al. (2010), from sleeve friction alone.
    Mayne2010,
    /// Mayne (2014), logarithmic sleeve-friction relation.
    Mayne2014,
}

impl UnitWeightProcedure {
    /// Parse a procedure name, honoring the common citation aliases.
    #[must_use]
    pub fn from_arg(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "mayne 2014" | "mayne2014" => Self::Mayne2014,
            "mayne et al. 2010" | "mayne 2010" | "mayne" => Self::Mayne2010,
            "robertson and cabal 2010" | "robertson 2010" | "robertson" | "default" => {
                Self::RobertsonCabal2010
            }
            _ => {
                eprintln!("  WARNING: Unknown unit-weight procedure '{s}', using Robertson and Cabal 2010");
                Self::RobertsonCabal2010
            }
        }
    }
}

/// Estimate total unit weight for one sample, kN/m³.
///
/// `qt` and `fs` in kPa, `pa` in kPa.
#[must_use]
pub fn estimate_unit_weight(procedure: UnitWeightProcedure, qt: f64, fs: f64, pa: f64) -> f64 {
    let gamma = match procedure {
        UnitWeightProcedure::RobertsonCabal2010 => {
            // γ/γw = 0.27·log10(Rf) + 0.36·log10(qt/Pa) + 1.236
            let rf = (fs / qt * 100.0).max(LOG_ARG_FLOOR);
            let qt_ratio = (qt / pa).max(LOG_ARG_FLOOR);
            GAMMA_W * (0.27 * rf.log10() + 0.36 * qt_ratio.log10() + 1.236)
        }
        UnitWeightProcedure::Mayne2010 => {
            // γ = 26 − 14/(1 + (0.5·log10(fs) + 1)²), fs in kPa
            let fs = fs.max(LOG_ARG_FLOOR);
            let t = 0.5 * fs.log10() + 1.0;
            26.0 - 14.0 / (1.0 + t * t)
        }
        UnitWeightProcedure::Mayne2014 => {
            // γ = 12 + 1.5·ln(fs + 1), fs in kPa
            12.0 + 1.5 * (fs.max(0.0) + 1.0).ln()
        }
    };
    gamma.clamp(UNIT_WEIGHT_MIN, UNIT_WEIGHT_MAX)
}
