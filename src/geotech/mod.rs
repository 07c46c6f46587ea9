// SPDX-License-Identifier: AGPL-3.0-only

//! Geotechnical core: stress profile, normalization, SBT classification.
//!
//! Everything here is a pure function over value structs; the pipeline
//! module wires the depth series through these stages.

pub mod classify;
pub mod constants;
pub mod normalize;
pub mod stress;
pub mod unit_weight;
pub mod zones;

pub use classify::{classify_sample, sbt_index, stress_exponent, SampleClassification, SbtSolution};
pub use normalize::{corrected_tip, normalize, Normalized, SampleState};
pub use stress::{stress_profile, StressProfile};
pub use unit_weight::{estimate_unit_weight, UnitWeightProcedure};
pub use zones::{ic_bands, map_zone, SbtZone};
