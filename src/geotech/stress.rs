// SPDX-License-Identifier: AGPL-3.0-only

//! Overburden stress profile.
//!
//! Total vertical stress is the depth integral of unit weight from the
//! surface; hydrostatic pore pressure is zero at and above the groundwater
//! table and `γw·(z − gwt)` below it; effective stress is their difference.
//!
//! Non-positive effective stress marks the sample invalid for
//! classification. It is excluded, never clamped: a clamped value would
//! silently fabricate a normalization denominator.

use crate::geotech::constants::GAMMA_W;
use crate::record::{SiteParameters, Sounding};

/// Per-depth stress state, kPa. Same length as the source record.
#[derive(Debug, Clone)]
pub struct StressProfile {
    /// Total vertical overburden stress σv0.
    pub sigma_v0: Vec<f64>,
    /// Hydrostatic pore pressure u0.
    pub u0: Vec<f64>,
    /// Effective vertical overburden stress σv0' = σv0 − u0.
    pub sigma_v0_eff: Vec<f64>,
}

impl StressProfile {
    /// Whether sample `i` has a usable (strictly positive) effective stress.
    #[must_use]
    pub fn is_valid(&self, i: usize) -> bool {
        self.sigma_v0_eff[i] > 0.0
    }
}

/// Compute the stress profile for a validated record.
///
/// σv0 accumulates layer by layer: the first sample carries the full column
/// above it at its own unit weight, each later sample adds
/// `(z[i] − z[i−1])·γ[i]`. With γ > 0 (enforced at construction) σv0 is
/// strictly increasing with depth.
#[must_use]
pub fn stress_profile(sounding: &Sounding, site: &SiteParameters) -> StressProfile {
    let depth = sounding.depth();
    let n = depth.len();

    let mut sigma_v0 = Vec::with_capacity(n);
    let mut total = 0.0;
    let mut prev_depth = 0.0;
    for (i, &z) in depth.iter().enumerate() {
        total += (z - prev_depth) * site.unit_weight.at(i);
        sigma_v0.push(total);
        prev_depth = z;
    }

    let u0: Vec<f64> = depth
        .iter()
        .map(|&z| {
            if z <= site.gwt {
                0.0
            } else {
                (z - site.gwt) * GAMMA_W
            }
        })
        .collect();

    let sigma_v0_eff: Vec<f64> = sigma_v0
        .iter()
        .zip(u0.iter())
        .map(|(&sv, &u)| sv - u)
        .collect();

    StressProfile {
        sigma_v0,
        u0,
        sigma_v0_eff,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geotech::constants::PA_KPA;
    use crate::record::UnitWeightProfile;

    fn site(gamma: f64, gwt: f64) -> SiteParameters {
        SiteParameters {
            unit_weight: UnitWeightProfile::Uniform(gamma),
            gwt,
            pa: PA_KPA,
            area_ratio: None,
        }
    }

    fn sounding(depths: Vec<f64>) -> Sounding {
        let n = depths.len();
        Sounding::cpt(depths, vec![1000.0; n], vec![10.0; n]).expect("valid record")
    }

    #[test]
    fn uniform_profile_matches_hand_calculation() {
        // γ = 20 kN/m³ at 1 m spacing: σv0 = 20, 40, 60 kPa.
        let s = sounding(vec![1.0, 2.0, 3.0]);
        let p = stress_profile(&s, &site(20.0, 10.0));
        for (i, expected) in [20.0, 40.0, 60.0].iter().enumerate() {
            assert!(
                (p.sigma_v0[i] - expected).abs() < 1e-12,
                "sigma_v0[{i}] = {}, expected {expected}",
                p.sigma_v0[i]
            );
        }
        // Water table below the profile: dry, σv0' == σv0.
        assert_eq!(p.u0, vec![0.0, 0.0, 0.0]);
        assert_eq!(p.sigma_v0, p.sigma_v0_eff);
    }

    #[test]
    fn total_stress_monotone_nondecreasing() {
        let s = sounding(vec![0.3, 0.9, 1.2, 4.0, 9.5]);
        let p = stress_profile(&s, &site(18.5, 1.0));
        for w in p.sigma_v0.windows(2) {
            assert!(w[1] >= w[0], "sigma_v0 must not decrease: {w:?}");
        }
    }

    #[test]
    fn hydrostatic_pressure_below_water_table() {
        let s = sounding(vec![1.0, 2.0, 3.0]);
        let p = stress_profile(&s, &site(19.0, 2.0));
        assert_eq!(p.u0[0], 0.0, "above gwt");
        assert_eq!(p.u0[1], 0.0, "at gwt exactly");
        assert!(
            (p.u0[2] - GAMMA_W).abs() < 1e-12,
            "1 m below gwt should carry one metre of water"
        );
        assert!((p.sigma_v0_eff[2] - (57.0 - GAMMA_W)).abs() < 1e-12);
    }

    #[test]
    fn per_sample_unit_weight_profile() {
        let s = sounding(vec![1.0, 2.0]);
        let site = SiteParameters {
            unit_weight: UnitWeightProfile::PerSample(vec![16.0, 20.0]),
            gwt: 10.0,
            pa: PA_KPA,
            area_ratio: None,
        };
        let p = stress_profile(&s, &site);
        assert!((p.sigma_v0[0] - 16.0).abs() < 1e-12);
        assert!((p.sigma_v0[1] - 36.0).abs() < 1e-12);
    }

    #[test]
    fn buoyant_sample_marked_invalid() {
        // Light soil fully submerged from the surface: γ' = 12 − 9.81 > 0 is
        // still valid, but an artesian-like condition (gwt = 0, γ < γw)
        // drives σv0' ≤ 0.
        let s = sounding(vec![1.0, 2.0]);
        let p = stress_profile(&s, &site(9.0, 0.0));
        assert!(!p.is_valid(0), "sigma_v0' = 9 - 9.81 < 0 must be invalid");
        assert!(!p.is_valid(1));
        // Values are reported as computed, not clamped.
        assert!(p.sigma_v0_eff[0] < 0.0);
    }
}
