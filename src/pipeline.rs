// SPDX-License-Identifier: AGPL-3.0-only

//! End-to-end analysis: record + site parameters + config → result table.
//!
//! Stages: fail-fast validation, unit conversion, stress profile, parallel
//! per-sample classification, table assembly. Classification is a pure
//! function per sample (no cross-depth state), so the depth series is
//! mapped with rayon; the indexed map keeps output rows in depth order and
//! the result bit-identical to a serial run.

use crate::config::AnalysisConfig;
use crate::error::CptError;
use crate::geotech::classify::{classify_sample, SampleClassification};
use crate::geotech::normalize::{corrected_tip, SampleState};
use crate::geotech::stress::stress_profile;
use crate::geotech::unit_weight::{estimate_unit_weight, UnitWeightProcedure};
use crate::record::{SiteParameters, Sounding, SoundingKind, UnitWeightProfile};
use crate::table::{ResultRow, ResultTable, RowStatus};
use rayon::prelude::*;

/// Run the full derived-parameter pipeline for one sounding.
///
/// Structural problems (shape mismatches, out-of-range parameters, a CPTu
/// record without a net area ratio) abort before any computation.
/// Per-sample numerical edge cases never abort: they become row statuses
/// and every input depth keeps its row.
///
/// # Errors
///
/// `ShapeMismatch` or `InvalidParameters` from the fail-fast checks.
pub fn run_analysis(
    sounding: &Sounding,
    site: &SiteParameters,
    cfg: &AnalysisConfig,
) -> Result<ResultTable, CptError> {
    cfg.validate()?;
    site.validate(sounding.len())?;
    if sounding.kind() == SoundingKind::Cptu && site.area_ratio.is_none() {
        return Err(CptError::InvalidParameters(
            "CPTu analysis requires a net area ratio".into(),
        ));
    }

    let sounding = sounding.to_si(cfg.unit_system);
    let profile = stress_profile(&sounding, site);

    let rows: Vec<ResultRow> = (0..sounding.len())
        .into_par_iter()
        .map(|i| {
            let qc = sounding.qc()[i];
            let fs = sounding.fs()[i];
            let u2 = sounding.u2().map(|u2| u2[i]);
            let qt = corrected_tip(qc, u2, site.area_ratio);

            let mut row = ResultRow {
                depth: sounding.depth()[i],
                qc,
                fs,
                u2,
                qt,
                sigma_v0: profile.sigma_v0[i],
                u0: profile.u0[i],
                sigma_v0_eff: profile.sigma_v0_eff[i],
                qtn: None,
                fr: None,
                bq: None,
                n: None,
                ic: None,
                iterations: None,
                zone: None,
                status: RowStatus::InvalidStress,
            };

            if !profile.is_valid(i) {
                return row;
            }

            let sample = SampleState {
                qt,
                fs,
                u2,
                u0: profile.u0[i],
                sigma_v0: profile.sigma_v0[i],
                sigma_v0_eff: profile.sigma_v0_eff[i],
                pa: site.pa,
            };
            match classify_sample(&sample, cfg) {
                SampleClassification::Classified(sol) => {
                    row.qtn = Some(sol.qtn);
                    row.fr = Some(sol.fr);
                    row.bq = sol.bq;
                    row.n = Some(sol.n);
                    row.ic = Some(sol.ic);
                    row.iterations = Some(sol.iterations);
                    row.zone = Some(sol.zone);
                    row.status = if sol.converged {
                        RowStatus::Ok
                    } else {
                        RowStatus::NonConvergent
                    };
                }
                SampleClassification::Indeterminate => {
                    row.status = RowStatus::Indeterminate;
                }
            }
            row
        })
        .collect();

    Ok(ResultTable::new(rows))
}

/// Estimate a per-sample unit-weight profile from the readings themselves.
///
/// For sites without measured unit weights: applies the chosen correlation
/// to every depth sample and wraps the result for `SiteParameters`. The
/// record must already be in SI units.
#[must_use]
pub fn estimate_unit_weight_profile(
    sounding: &Sounding,
    procedure: UnitWeightProcedure,
    pa: f64,
    area_ratio: Option<f64>,
) -> UnitWeightProfile {
    let gammas = sounding
        .qc()
        .iter()
        .zip(sounding.fs().iter())
        .enumerate()
        .map(|(i, (&qc, &fs))| {
            let u2 = sounding.u2().map(|u2| u2[i]);
            let qt = corrected_tip(qc, u2, area_ratio);
            estimate_unit_weight(procedure, qt, fs, pa)
        })
        .collect();
    UnitWeightProfile::PerSample(gammas)
}
