// SPDX-License-Identifier: AGPL-3.0-only

//! Physical constants and unit-conversion factors.

/// Unit weight of water, kN/m³ (g = 9.80665 m/s², fresh water at 4 °C).
pub const GAMMA_W: f64 = 9.81;

/// Standard atmospheric pressure, kPa (ISO 2533).
pub const PA_KPA: f64 = 101.325;

/// Feet to metres.
pub const FT_TO_M: f64 = 0.3048;

/// Tons per square foot (short ton, US practice) to kPa.
pub const TSF_TO_KPA: f64 = 95.760_518;
