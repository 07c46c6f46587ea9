// SPDX-License-Identifier: AGPL-3.0-only

//! Normalization of raw cone readings against the stress profile.
//!
//! Robertson (2009): the classification chart works on stress-normalized
//! quantities, not raw readings. For CPTu the tip resistance is first
//! corrected for the unequal end-area effect behind the cone shoulder,
//! `qt = qc + u2·(1 − a)`; a plain CPT has no `u2` and uses `qt = qc`.
//!
//! The net resistance `qt − σv0` is the denominator of both `Fr` and `Bq`
//! and the numerator of `Qtn`; where it is non-positive the sample carries
//! no usable normalization and is reported indeterminate instead of
//! producing NaN downstream in the `log10` terms.

/// Per-sample inputs to normalization, SI units. One value struct per
/// depth sample; the classifier owns one exclusively per iteration.
#[derive(Debug, Clone, Copy)]
pub struct SampleState {
    /// Corrected cone resistance qt, kPa.
    pub qt: f64,
    /// Sleeve friction fs, kPa.
    pub fs: f64,
    /// Measured dynamic pore pressure u2, kPa (CPTu only).
    pub u2: Option<f64>,
    /// Hydrostatic pore pressure u0, kPa.
    pub u0: f64,
    /// Total vertical stress σv0, kPa.
    pub sigma_v0: f64,
    /// Effective vertical stress σv0', kPa (> 0 for classified samples).
    pub sigma_v0_eff: f64,
    /// Atmospheric pressure reference Pa, kPa.
    pub pa: f64,
}

/// Normalized parameters for one sample at one stress exponent.
#[derive(Debug, Clone, Copy)]
pub struct Normalized {
    /// Normalized cone resistance Qtn (dimensionless).
    pub qtn: f64,
    /// Normalized friction ratio Fr, percent.
    pub fr: f64,
    /// Pore-pressure ratio Bq (CPTu only).
    pub bq: Option<f64>,
}

/// End-area corrected tip resistance.
///
/// `qt = qc + u2·(1 − a)` with net area ratio `a`; without a pore-pressure
/// measurement the correction cannot be applied and `qt = qc`.
#[must_use]
pub fn corrected_tip(qc: f64, u2: Option<f64>, area_ratio: Option<f64>) -> f64 {
    match (u2, area_ratio) {
        (Some(u2), Some(a)) => qc + u2 * (1.0 - a),
        _ => qc,
    }
}

/// Compute `Qtn`, `Fr`, `Bq` at stress exponent `n`.
///
/// Returns `None` when the sample is indeterminate: net resistance
/// `qt − σv0 ≤ 0`, or `Fr ≤ 0` (outside the `log10` domain of the Ic
/// formula).
#[must_use]
pub fn normalize(sample: &SampleState, n: f64) -> Option<Normalized> {
    let net = sample.qt - sample.sigma_v0;
    if net <= 0.0 {
        return None;
    }

    let qtn = (net / sample.pa) * (sample.pa / sample.sigma_v0_eff).powf(n);
    let fr = sample.fs / net * 100.0;
    if fr <= 0.0 {
        return None;
    }
    let bq = sample.u2.map(|u2| (u2 - sample.u0) / net);

    Some(Normalized { qtn, fr, bq })
}
