//! Reference constants of IAPWS-IF97, in the crate's base units.

/// Specific gas constant of water, kJ/(kg·K).
pub const SPECIFIC_GAS_CONSTANT: f64 = 0.461_526;

/// Critical temperature, K.
pub const CRITICAL_TEMPERATURE: f64 = 647.096;

/// Critical density, kg/m³.
pub const CRITICAL_DENSITY: f64 = 322.0;

/// Specific entropy at the critical point, kJ/(kg·K).
pub const CRITICAL_ENTROPY: f64 = 4.412_021_482_234_76;

/// Specific enthalpy at the critical point, kJ/kg.
pub const CRITICAL_ENTHALPY: f64 = 2_087.235_001_648_64;

/// Lowest temperature covered by the formulation, K.
pub const MIN_TEMPERATURE: f64 = 273.15;

/// Temperature where the saturation line meets regions 1, 3 and 2 (p ≈ 16.53 MPa), K.
pub const B23_MIN_TEMPERATURE: f64 = 623.15;

/// Upper temperature of regions 1 to 3, K.
pub const REGION_2_MAX_TEMPERATURE: f64 = 1_073.15;

/// Highest temperature accepted when classifying (p, T) inputs, K.
pub const MAX_TEMPERATURE: f64 = 2_073.15;

/// Upper pressure of regions 1 to 3, MPa.
pub const MAX_PRESSURE: f64 = 100.0;

/// Upper pressure of region 5, MPa.
pub const REGION_5_MAX_PRESSURE: f64 = 50.0;
