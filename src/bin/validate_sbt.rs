// SPDX-License-Identifier: AGPL-3.0-only

//! SBT classification validation: synthetic sand and clay profiles.
//!
//! Expected values are hand-derived from the Robertson (2009/2010)
//! equations:
//!   - uniform sand (qt growing 2 MPa per metre, Rf ≈ 0.5%, hydrostatic
//!     pore pressure) classifies as zone 6 at every depth with n near the
//!     0.5 clamp;
//!   - the documented convergence case (σv0' = 100 kPa, qt = 2000 kPa,
//!     fs = 40 kPa) converges to Ic ≈ 2.68, n ≈ 0.92, zone 4.
//!
//! Usage: `validate_sbt [--scheme=2010|2012]`

use cptcalc::config::{AnalysisConfig, ClassificationScheme};
use cptcalc::geotech::classify::{classify_sample, SampleClassification};
use cptcalc::geotech::constants::PA_KPA;
use cptcalc::geotech::normalize::SampleState;
use cptcalc::geotech::zones::SbtZone;
use cptcalc::pipeline::run_analysis;
use cptcalc::record::{SiteParameters, Sounding, UnitWeightProfile};
use cptcalc::table::RowStatus;
use cptcalc::validation::ValidationSummary;
use std::process;

fn parse_scheme_from_args() -> ClassificationScheme {
    std::env::args()
        .find(|a| a.starts_with("--scheme="))
        .map_or_else(ClassificationScheme::default, |a| {
            ClassificationScheme::from_arg(&a[9..])
        })
}

fn main() {
    let scheme = parse_scheme_from_args();
    let cfg = AnalysisConfig {
        scheme,
        ..AnalysisConfig::default()
    };

    println!("SBT classification validation");
    println!("  Scheme: {}", scheme.description());
    println!();

    let mut summary = ValidationSummary::new();

    // ── Reference convergence case ──────────────────────────────────
    println!("Reference sample (sigma_v0' = 100 kPa, qt = 2000 kPa, fs = 40 kPa):");
    let sample = SampleState {
        qt: 2000.0,
        fs: 40.0,
        u2: None,
        u0: 0.0,
        sigma_v0: 100.0,
        sigma_v0_eff: 100.0,
        pa: 101.3,
    };
    match classify_sample(&sample, &cfg) {
        SampleClassification::Classified(sol) => {
            summary.check_count("reference converged", usize::from(sol.converged), 1);
            summary.check_abs("reference Ic", sol.ic, 2.68, 0.05);
            summary.check_abs("reference n", sol.n, 0.92, 0.03);
            summary.check_below("reference iterations", sol.iterations as f64, 20.0);
            summary.check_count(
                "reference zone is 4 (silt mixtures)",
                usize::from(sol.zone.number()),
                4,
            );
        }
        SampleClassification::Indeterminate => {
            summary.check_count("reference sample classified", 0, 1);
        }
    }
    println!();

    // ── Uniform sand profile, end to end ────────────────────────────
    println!("Uniform sand profile (2 m to 20 m, qt = 2 MPa/m, Rf = 0.5%):");
    let depths: Vec<f64> = (2..=20).map(f64::from).collect();
    let qc: Vec<f64> = depths.iter().map(|z| 2000.0 * z).collect();
    let fs: Vec<f64> = qc.iter().map(|q| q * 0.005).collect();
    let n_samples = depths.len();

    let sounding = match Sounding::cpt(depths, qc, fs) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("  FATAL: sand profile construction failed: {e}");
            process::exit(1);
        }
    };
    let site = SiteParameters {
        unit_weight: UnitWeightProfile::Uniform(19.0),
        gwt: 2.0,
        pa: PA_KPA,
        area_ratio: None,
    };

    match run_analysis(&sounding, &site, &cfg) {
        Ok(table) => {
            summary.check_count("sand rows == input samples", table.len(), n_samples);
            summary.check_count(
                "sand all rows converged",
                table.count_status(RowStatus::Ok),
                n_samples,
            );
            let zone6 = table
                .rows()
                .iter()
                .filter(|r| r.zone == Some(SbtZone::Sand))
                .count();
            summary.check_count("sand all rows in zone 6", zone6, n_samples);
            let max_n = table
                .rows()
                .iter()
                .filter_map(|r| r.n)
                .fold(f64::NEG_INFINITY, f64::max);
            let min_n = table
                .rows()
                .iter()
                .filter_map(|r| r.n)
                .fold(f64::INFINITY, f64::min);
            summary.check_below("sand max n", max_n, 0.7);
            summary.check_above("sand min n", min_n, 0.5 - 1e-12);
        }
        Err(e) => {
            eprintln!("  FATAL: sand analysis failed: {e}");
            process::exit(1);
        }
    }

    process::exit(summary.finish());
}
