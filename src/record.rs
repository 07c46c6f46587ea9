// SPDX-License-Identifier: AGPL-3.0-only

//! Measurement records and site parameters.
//!
//! A `Sounding` holds the depth-aligned raw channels of one CPT or CPTu
//! push: depth, cone tip resistance `qc`, sleeve friction `fs`, and (CPTu
//! only) dynamic pore pressure `u2`. All invariants are enforced at
//! construction; the record is immutable afterwards and the pipeline never
//! revalidates mid-run.
//!
//! Working units are SI: depth in m, pressures in kPa. Imperial records
//! (ft, tsf) are converted once at ingestion via [`Sounding::to_si`].

use crate::config::UnitSystem;
use crate::error::CptError;
use crate::geotech::constants::{FT_TO_M, TSF_TO_KPA};
use serde::Deserialize;

/// CPT variant, distinguished by the pore-pressure channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundingKind {
    /// Mechanical/electrical cone without pore-pressure measurement.
    Cpt,
    /// Piezocone: `u2` channel present.
    Cptu,
}

/// One sounding: parallel depth-ordered channel arrays.
#[derive(Debug, Clone, Deserialize)]
#[serde(try_from = "RawSounding")]
pub struct Sounding {
    depth: Vec<f64>,
    qc: Vec<f64>,
    fs: Vec<f64>,
    u2: Option<Vec<f64>>,
}

/// Wire shape for deserialization; funneled through the validating
/// constructors so a JSON loader cannot bypass the invariants.
#[derive(Debug, Deserialize)]
struct RawSounding {
    depth: Vec<f64>,
    qc: Vec<f64>,
    fs: Vec<f64>,
    #[serde(default)]
    u2: Option<Vec<f64>>,
}

impl TryFrom<RawSounding> for Sounding {
    type Error = CptError;

    fn try_from(raw: RawSounding) -> Result<Self, CptError> {
        match raw.u2 {
            Some(u2) => Self::cptu(raw.depth, raw.qc, raw.fs, u2),
            None => Self::cpt(raw.depth, raw.qc, raw.fs),
        }
    }
}

impl Sounding {
    /// Build a CPT record (no pore-pressure channel).
    ///
    /// # Errors
    ///
    /// `ShapeMismatch` if channel lengths differ; `InvalidParameters` if the
    /// record is empty, depths are not strictly increasing and positive, or
    /// any value is non-finite.
    pub fn cpt(depth: Vec<f64>, qc: Vec<f64>, fs: Vec<f64>) -> Result<Self, CptError> {
        let record = Self {
            depth,
            qc,
            fs,
            u2: None,
        };
        record.validate()?;
        Ok(record)
    }

    /// Build a CPTu record (pore-pressure channel present).
    ///
    /// # Errors
    ///
    /// Same conditions as [`Sounding::cpt`], with `u2` held to the same
    /// length and finiteness checks.
    pub fn cptu(
        depth: Vec<f64>,
        qc: Vec<f64>,
        fs: Vec<f64>,
        u2: Vec<f64>,
    ) -> Result<Self, CptError> {
        let record = Self {
            depth,
            qc,
            fs,
            u2: Some(u2),
        };
        record.validate()?;
        Ok(record)
    }

    fn validate(&self) -> Result<(), CptError> {
        let n = self.depth.len();
        if n == 0 {
            return Err(CptError::InvalidParameters(
                "record must contain at least one sample".into(),
            ));
        }
        for (channel, values) in [("qc", &self.qc), ("fs", &self.fs)] {
            if values.len() != n {
                return Err(CptError::ShapeMismatch {
                    channel,
                    expected: n,
                    found: values.len(),
                });
            }
        }
        if let Some(u2) = &self.u2 {
            if u2.len() != n {
                return Err(CptError::ShapeMismatch {
                    channel: "u2",
                    expected: n,
                    found: u2.len(),
                });
            }
        }

        if self.depth[0] <= 0.0 {
            return Err(CptError::InvalidParameters(format!(
                "first depth must be > 0, got {}",
                self.depth[0]
            )));
        }
        for pair in self.depth.windows(2) {
            if pair[1] <= pair[0] {
                return Err(CptError::InvalidParameters(format!(
                    "depth must be strictly increasing, got {} after {}",
                    pair[1], pair[0]
                )));
            }
        }

        let channels: [(&str, &[f64]); 3] = [
            ("depth", &self.depth),
            ("qc", &self.qc),
            ("fs", &self.fs),
        ];
        for (channel, values) in channels {
            if let Some(v) = values.iter().find(|v| !v.is_finite()) {
                return Err(CptError::InvalidParameters(format!(
                    "channel '{channel}' contains non-finite value {v}"
                )));
            }
        }
        if let Some(u2) = &self.u2 {
            if let Some(v) = u2.iter().find(|v| !v.is_finite()) {
                return Err(CptError::InvalidParameters(format!(
                    "channel 'u2' contains non-finite value {v}"
                )));
            }
        }
        Ok(())
    }

    /// CPT or CPTu, by presence of the `u2` channel.
    #[must_use]
    pub fn kind(&self) -> SoundingKind {
        if self.u2.is_some() {
            SoundingKind::Cptu
        } else {
            SoundingKind::Cpt
        }
    }

    /// Number of depth samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.depth.len()
    }

    /// True when the record holds no samples (unreachable after
    /// construction; kept for the conventional pairing with `len`).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.depth.is_empty()
    }

    /// Depth array, m.
    #[must_use]
    pub fn depth(&self) -> &[f64] {
        &self.depth
    }

    /// Measured cone tip resistance, kPa.
    #[must_use]
    pub fn qc(&self) -> &[f64] {
        &self.qc
    }

    /// Measured sleeve friction, kPa.
    #[must_use]
    pub fn fs(&self) -> &[f64] {
        &self.fs
    }

    /// Measured dynamic pore pressure, kPa (CPTu only).
    #[must_use]
    pub fn u2(&self) -> Option<&[f64]> {
        self.u2.as_deref()
    }

    /// Convert a record to SI working units. SI input is returned unchanged.
    #[must_use]
    pub fn to_si(&self, units: UnitSystem) -> Self {
        match units {
            UnitSystem::Si => self.clone(),
            UnitSystem::Imperial => {
                let scale = |values: &[f64], factor: f64| -> Vec<f64> {
                    values.iter().map(|v| v * factor).collect()
                };
                Self {
                    depth: scale(&self.depth, FT_TO_M),
                    qc: scale(&self.qc, TSF_TO_KPA),
                    fs: scale(&self.fs, TSF_TO_KPA),
                    u2: self.u2.as_ref().map(|u2| scale(u2, TSF_TO_KPA)),
                }
            }
        }
    }
}

/// Soil unit weight along the profile, kN/m³.
#[derive(Debug, Clone, Deserialize)]
pub enum UnitWeightProfile {
    /// Single value for the whole profile.
    Uniform(f64),
    /// One value per depth sample.
    PerSample(Vec<f64>),
}

impl UnitWeightProfile {
    /// Unit weight at sample index `i`.
    #[must_use]
    pub fn at(&self, i: usize) -> f64 {
        match self {
            Self::Uniform(gamma) => *gamma,
            Self::PerSample(gammas) => gammas[i],
        }
    }
}

/// Site-wide analysis inputs, supplied once per run. Always SI: depths in
/// m, pressures in kPa, unit weights in kN/m³.
#[derive(Debug, Clone, Deserialize)]
pub struct SiteParameters {
    /// Soil unit weight profile.
    pub unit_weight: UnitWeightProfile,
    /// Depth to the groundwater table, m below ground surface.
    pub gwt: f64,
    /// Atmospheric pressure reference, kPa.
    pub pa: f64,
    /// Piezocone net area ratio (CPTu only), dimensionless in (0, 1].
    #[serde(default)]
    pub area_ratio: Option<f64>,
}

impl SiteParameters {
    /// Check physical ranges and the per-sample unit-weight length.
    ///
    /// # Errors
    ///
    /// `InvalidParameters` for out-of-range values, `ShapeMismatch` if a
    /// per-sample unit-weight profile disagrees with the record length.
    pub fn validate(&self, n_samples: usize) -> Result<(), CptError> {
        match &self.unit_weight {
            UnitWeightProfile::Uniform(gamma) => {
                if !(*gamma > 0.0) || !gamma.is_finite() {
                    return Err(CptError::InvalidParameters(format!(
                        "unit weight must be finite and > 0, got {gamma}"
                    )));
                }
            }
            UnitWeightProfile::PerSample(gammas) => {
                if gammas.len() != n_samples {
                    return Err(CptError::ShapeMismatch {
                        channel: "unit_weight",
                        expected: n_samples,
                        found: gammas.len(),
                    });
                }
                if let Some(g) = gammas.iter().find(|g| !(**g > 0.0) || !g.is_finite()) {
                    return Err(CptError::InvalidParameters(format!(
                        "unit weight must be finite and > 0, got {g}"
                    )));
                }
            }
        }
        if !(self.gwt >= 0.0) || !self.gwt.is_finite() {
            return Err(CptError::InvalidParameters(format!(
                "groundwater table depth must be finite and >= 0, got {}",
                self.gwt
            )));
        }
        if !(self.pa > 0.0) || !self.pa.is_finite() {
            return Err(CptError::InvalidParameters(format!(
                "atmospheric pressure must be finite and > 0, got {}",
                self.pa
            )));
        }
        if let Some(a) = self.area_ratio {
            if !(a > 0.0 && a <= 1.0) {
                return Err(CptError::InvalidParameters(format!(
                    "net area ratio must be in (0, 1], got {a}"
                )));
            }
        }
        Ok(())
    }
}
