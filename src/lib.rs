// SPDX-License-Identifier: AGPL-3.0-only

//! CPT/CPTu sounding processing — stress profiles, normalization, and
//! Robertson Soil Behavior Type classification.
//!
//! Takes validated depth-series arrays (cone tip resistance, sleeve
//! friction, and for CPTu dynamic pore pressure) plus site parameters,
//! and produces a per-depth result table of corrected and normalized
//! parameters with an SBTn zone and a confidence flag on every row.
//! File parsing and plotting live with external collaborators; this crate
//! is the numerical core only.
//!
//! ## Modules
//!   - `record` — measurement records (`Sounding`) and `SiteParameters`
//!   - `geotech` — stress profile, normalization, the `n`/`Ic` fixed-point
//!     classifier, zone mapping, unit-weight correlations
//!   - `pipeline` — end-to-end analysis with parallel classification
//!   - `table` — assembled per-depth output with row statuses
//!   - `config` — tolerances, iteration cap, scheme revision, units
//!   - `tolerances` — every numeric threshold, with justification
//!   - `validation` — check harness for the validation binaries
//!
//! ## Validation binaries
//!   - `validate_sbt` — synthetic sand profile + documented convergence
//!     case against hand-derived expectations

pub mod config;
pub mod error;
pub mod geotech;
pub mod pipeline;
pub mod record;
pub mod table;
pub mod tolerances;
pub mod validation;

pub use config::{AnalysisConfig, ClassificationScheme, UnitSystem};
pub use error::CptError;
pub use geotech::{SampleClassification, SbtSolution, SbtZone};
pub use pipeline::{estimate_unit_weight_profile, run_analysis};
pub use record::{SiteParameters, Sounding, SoundingKind, UnitWeightProfile};
pub use table::{ResultRow, ResultTable, RowStatus};
