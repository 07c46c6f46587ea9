// SPDX-License-Identifier: AGPL-3.0-only

//! Soil Behavior Type zones and the Ic / chart-boundary mapping.
//!
//! The nine-zone SBTn set of Robertson & Cabal (2010), Guide to Cone
//! Penetration Testing. Zones 2–7 are bands of the Soil Behavior Type
//! Index; zones 1, 8, and 9 are corners of the Qtn–Fr chart not separable
//! by Ic alone and use the published boundary curves.
//!
//! Band boundaries are compared with `≥` toward the lower-numbered zone,
//! so an Ic landing exactly on a boundary resolves deterministically to
//! the lower-numbered side.

use crate::config::ClassificationScheme;
use serde::Serialize;

/// Soil Behavior Type zone (Robertson SBTn numbering, 1–9).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SbtZone {
    /// Zone 1 — sensitive, fine-grained.
    SensitiveFineGrained,
    /// Zone 2 — organic soils: clay.
    OrganicSoil,
    /// Zone 3 — clays: silty clay to clay.
    Clay,
    /// Zone 4 — silt mixtures: clayey silt to silty clay.
    SiltMixture,
    /// Zone 5 — sand mixtures: silty sand to sandy silt.
    SandMixture,
    /// Zone 6 — sands: clean sand to silty sand.
    Sand,
    /// Zone 7 — gravelly sand to dense sand.
    GravellySand,
    /// Zone 8 — very stiff sand to clayey sand (overconsolidated/cemented).
    StiffSand,
    /// Zone 9 — very stiff, fine-grained (overconsolidated/cemented).
    StiffFineGrained,
}

impl SbtZone {
    /// Zone number in the published chart, 1–9.
    #[must_use]
    pub const fn number(&self) -> u8 {
        match self {
            Self::SensitiveFineGrained => 1,
            Self::OrganicSoil => 2,
            Self::Clay => 3,
            Self::SiltMixture => 4,
            Self::SandMixture => 5,
            Self::Sand => 6,
            Self::GravellySand => 7,
            Self::StiffSand => 8,
            Self::StiffFineGrained => 9,
        }
    }

    /// Published zone description.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::SensitiveFineGrained => "sensitive, fine-grained",
            Self::OrganicSoil => "organic soils: clay",
            Self::Clay => "clays: silty clay to clay",
            Self::SiltMixture => "silt mixtures: clayey silt to silty clay",
            Self::SandMixture => "sand mixtures: silty sand to sandy silt",
            Self::Sand => "sands: clean sand to silty sand",
            Self::GravellySand => "gravelly sand to dense sand",
            Self::StiffSand => "very stiff sand to clayey sand",
            Self::StiffFineGrained => "very stiff, fine-grained",
        }
    }
}

/// Ic band boundaries between zones 2|3, 3|4, 4|5, 5|6, 6|7.
///
/// Identical in the 2010 and 2012 publications; the scheme parameter keeps
/// the governing revision a configuration fact rather than an assumption.
#[must_use]
pub const fn ic_bands(scheme: ClassificationScheme) -> [f64; 5] {
    match scheme {
        ClassificationScheme::Robertson2010 | ClassificationScheme::Robertson2012 => {
            [3.60, 2.95, 2.60, 2.05, 1.31]
        }
    }
}

/// Map a converged sample onto the SBTn chart.
///
/// `fr` in percent. Check order: the zone 1 corner
/// (`Qtn < 12·exp(−1.4·Fr)`), then the overconsolidated zone 8/9 corner
/// (`Qtn > 1/[0.005(Fr−1) − 0.0003(Fr−1)² − 0.002]`, where that curve is
/// defined and Fr > 1.5), then the Ic bands.
#[must_use]
pub fn map_zone(qtn: f64, fr: f64, ic: f64, scheme: ClassificationScheme) -> SbtZone {
    if qtn < 12.0 * (-1.4 * fr).exp() {
        return SbtZone::SensitiveFineGrained;
    }

    // Strictly above the curve: a Qtn exactly on the boundary stays with
    // the lower-numbered Ic band, like every other boundary tie.
    if fr > 1.5 {
        let x = fr - 1.0;
        let denom = 0.005 * x - 0.0003 * x * x - 0.002;
        if denom > 0.0 && qtn > 1.0 / denom {
            return if fr <= 4.5 {
                SbtZone::StiffSand
            } else {
                SbtZone::StiffFineGrained
            };
        }
    }

    let [b23, b34, b45, b56, b67] = ic_bands(scheme);
    if ic >= b23 {
        SbtZone::OrganicSoil
    } else if ic >= b34 {
        SbtZone::Clay
    } else if ic >= b45 {
        SbtZone::SiltMixture
    } else if ic >= b56 {
        SbtZone::SandMixture
    } else if ic >= b67 {
        SbtZone::Sand
    } else {
        SbtZone::GravellySand
    }
}
