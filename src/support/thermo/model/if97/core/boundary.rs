//! Boundary equations between the IF97 regions.
//!
//! All functions take and return base units (MPa, K, kJ/kg, kJ/(kg·K)) and
//! are total over the part of the state space where they are used by the
//! classifiers.
//!
//! The five `specific_enthalpy_*` curves describe the boundaries of the
//! (h, s) plane. They share one series evaluator and differ only in their
//! coefficient table, input reduction and output transform.

mod tables;

use super::series::{self, Curve, Scaling};

pub use super::region::{saturation_pressure, saturation_temperature};

/// Coefficients of the B23 equation.
const B23: [f64; 5] = [
    0.348_051_856_289_69e3,
    -0.116_718_598_799_75e1,
    0.101_929_700_393_26e-2,
    0.572_544_598_627_46e3,
    0.139_188_397_788_70e2,
];

const CURVE_1: Curve = Curve {
    terms: &tables::ENTHALPY_1,
    reduce: reduce_liquid,
    scaling: Scaling::Linear(1_700.0),
};

const CURVE_3A: Curve = Curve {
    terms: &tables::ENTHALPY_3A,
    reduce: reduce_liquid,
    scaling: Scaling::Linear(1_700.0),
};

const CURVE_B13: Curve = Curve {
    terms: &tables::ENTHALPY_B13,
    reduce: reduce_b13,
    scaling: Scaling::Linear(1_700.0),
};

const CURVE_2C3B: Curve = Curve {
    terms: &tables::ENTHALPY_2C3B,
    reduce: reduce_2c3b,
    scaling: Scaling::FourthPower(2_800.0),
};

const CURVE_2AB: Curve = Curve {
    terms: &tables::ENTHALPY_2AB,
    reduce: reduce_2ab,
    scaling: Scaling::Exponential(2_800.0),
};

/// Pressure on the boundary between regions 2 and 3, from temperature.
///
/// ```
/// use twine_if97::support::thermo::model::if97::boundary::pressure_b23;
///
/// let p = pressure_b23(623.15);
/// assert!((p - 16.529_164_253).abs() < 1e-8);
/// ```
#[must_use]
pub fn pressure_b23(t: f64) -> f64 {
    B23[0] + B23[1] * t + B23[2] * t * t
}

/// Temperature on the boundary between regions 2 and 3, from pressure.
#[must_use]
pub fn temperature_b23(p: f64) -> f64 {
    B23[3] + ((p - B23[4]) / B23[2]).sqrt()
}

/// Temperature on the boundary between regions 2 and 3, from enthalpy and entropy.
#[must_use]
pub fn temperature_b23_hs(h: f64, s: f64) -> f64 {
    let eta = h / 3_000.0;
    let sigma = s / 5.3;
    900.0 * series::sum(&tables::TEMPERATURE_B23_HS, eta - 0.727, sigma - 0.864)
}

/// Saturation pressure on the boundary between regions 3 and 4, from enthalpy.
///
/// Valid for enthalpies between the saturated states at 623.15 K.
#[must_use]
pub fn saturation_pressure_h(h: f64) -> f64 {
    let eta = h / 2_600.0;
    22.0 * series::sum(&tables::SATURATION_PRESSURE_H, eta - 1.02, eta - 0.608)
}

/// Saturated liquid enthalpy h′(s) where the saturation line borders region 1.
#[must_use]
pub fn specific_enthalpy_1(s: f64) -> f64 {
    CURVE_1.evaluate(s)
}

/// Saturated liquid enthalpy h′(s) where the saturation line borders region 3a.
#[must_use]
pub fn specific_enthalpy_3a(s: f64) -> f64 {
    CURVE_3A.evaluate(s)
}

/// Enthalpy on the boundary between regions 1 and 3 (T = 623.15 K), from entropy.
#[must_use]
pub fn specific_enthalpy_b13(s: f64) -> f64 {
    CURVE_B13.evaluate(s)
}

/// Saturated vapour enthalpy h″(s) where the saturation line borders regions 2c and 3b.
#[must_use]
pub fn specific_enthalpy_2c3b(s: f64) -> f64 {
    CURVE_2C3B.evaluate(s)
}

/// Saturated vapour enthalpy h″(s) where the saturation line borders regions 2a and 2b.
#[must_use]
pub fn specific_enthalpy_2ab(s: f64) -> f64 {
    CURVE_2AB.evaluate(s)
}

fn reduce_liquid(s: f64) -> (f64, f64) {
    let sigma = s / 3.8;
    (sigma - 1.09, sigma + 0.366e-4)
}

fn reduce_b13(s: f64) -> (f64, f64) {
    let sigma = s / 3.8;
    (sigma - 0.884, sigma - 0.864)
}

fn reduce_2c3b(s: f64) -> (f64, f64) {
    let sigma = s / 5.9;
    (sigma - 1.02, sigma - 0.726)
}

fn reduce_2ab(s: f64) -> (f64, f64) {
    (5.21 / s - 0.513, s / 9.2 - 0.524)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn b23_round_trip() {
        let p = pressure_b23(623.15);
        assert_relative_eq!(p, 0.165_291_643e2, max_relative = 1e-8);
        assert_relative_eq!(temperature_b23(p), 623.15, max_relative = 1e-12);
    }

    #[test]
    fn b23_from_enthalpy_entropy() {
        assert_relative_eq!(
            temperature_b23_hs(2_600.0, 5.1),
            713.525_936_4,
            max_relative = 1e-9
        );
        assert_relative_eq!(
            temperature_b23_hs(2_700.0, 5.15),
            768.534_553_2,
            max_relative = 1e-9
        );
        assert_relative_eq!(
            temperature_b23_hs(2_800.0, 5.2),
            817.620_212_0,
            max_relative = 1e-9
        );
    }

    #[test]
    fn saturation_pressure_from_enthalpy() {
        assert_relative_eq!(saturation_pressure_h(1_700.0), 17.241_757_18, max_relative = 1e-9);
        assert_relative_eq!(saturation_pressure_h(2_000.0), 21.934_429_57, max_relative = 1e-9);
        assert_relative_eq!(saturation_pressure_h(2_400.0), 20.180_908_39, max_relative = 1e-9);
    }

    #[test]
    fn saturated_liquid_curves() {
        assert_relative_eq!(specific_enthalpy_1(1.0), 308.550_964_7, max_relative = 1e-9);
        assert_relative_eq!(specific_enthalpy_1(2.0), 700.630_447_2, max_relative = 1e-9);
        assert_relative_eq!(specific_enthalpy_1(3.0), 1_198.359_754, max_relative = 1e-9);

        assert_relative_eq!(specific_enthalpy_3a(3.8), 1_685.025_565, max_relative = 1e-9);
        assert_relative_eq!(specific_enthalpy_3a(4.0), 1_816.891_476, max_relative = 1e-9);
        assert_relative_eq!(specific_enthalpy_3a(4.2), 1_949.352_563, max_relative = 1e-9);
    }

    #[test]
    fn saturated_vapour_curves() {
        assert_relative_eq!(specific_enthalpy_2ab(7.0), 2_723.729_985, max_relative = 1e-9);
        assert_relative_eq!(specific_enthalpy_2ab(8.0), 2_599.047_210, max_relative = 1e-9);
        assert_relative_eq!(specific_enthalpy_2ab(9.0), 2_511.861_477, max_relative = 1e-9);

        assert_relative_eq!(specific_enthalpy_2c3b(5.5), 2_687.693_850, max_relative = 1e-9);
        assert_relative_eq!(specific_enthalpy_2c3b(5.0), 2_451.623_609, max_relative = 1e-9);
        assert_relative_eq!(specific_enthalpy_2c3b(4.5), 2_144.360_448, max_relative = 1e-9);
    }

    #[test]
    fn region_1_3_boundary() {
        assert_relative_eq!(specific_enthalpy_b13(3.7), 1_632.525_047, max_relative = 1e-9);
        assert_relative_eq!(specific_enthalpy_b13(3.6), 1_593.027_214, max_relative = 1e-9);
        assert_relative_eq!(specific_enthalpy_b13(3.5), 1_566.104_611, max_relative = 1e-9);
    }
}
