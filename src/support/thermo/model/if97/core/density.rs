//! Resolution of (T, ρ) states.
//!
//! Temperature and density fix a state everywhere in the formulation,
//! including inside the saturation dome. The regions built on a Gibbs
//! function are inverted for pressure by bisection in ln p. Region 3 is
//! explicit in density and needs no solve.

use super::{
    If97Error, Quantity, RangeViolation, Region,
    boundary::pressure_b23,
    constants::{
        B23_MIN_TEMPERATURE, CRITICAL_TEMPERATURE, MAX_PRESSURE, MAX_TEMPERATURE,
        MIN_TEMPERATURE, REGION_2_MAX_TEMPERATURE, REGION_5_MAX_PRESSURE,
    },
    region::{Region4, region1, region2, region3, region5, saturation_pressure},
    solve::find_root,
};

/// Lowest pressure searched when inverting a vapour density, MPa.
const MIN_PRESSURE: f64 = 1e-8;

/// Temperature above which region 2 extends to the full pressure range, K.
const B23_MAX_TEMPERATURE: f64 = 863.15;

/// Where a (T, ρ) state lies, with the pressure that goes with it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Resolved {
    SinglePhase { region: Region, p: f64 },
    TwoPhase { p: f64, x: f64 },
}

/// Places the state with temperature `t` (K) and density `rho` (kg/m³).
///
/// # Errors
///
/// Returns [`If97Error::OutOfRange`] if the state lies outside the
/// formulation, or a solver error if the pressure cannot be found.
pub(crate) fn resolve(t: f64, rho: f64) -> Result<Resolved, If97Error> {
    if rho <= 0.0 {
        return Err(RangeViolation::new(Quantity::Density, rho, 0.0).into());
    }
    if t < MIN_TEMPERATURE {
        return Err(RangeViolation::new(Quantity::Temperature, t, MIN_TEMPERATURE).into());
    }
    if t > MAX_TEMPERATURE {
        return Err(RangeViolation::new(Quantity::Temperature, t, MAX_TEMPERATURE).into());
    }

    let resolved = if t > REGION_2_MAX_TEMPERATURE {
        single_phase(Region::Five, region5::specific_volume, t, rho, REGION_5_MAX_PRESSURE)?
    } else if t > B23_MAX_TEMPERATURE {
        single_phase(Region::Two, region2::specific_volume, t, rho, MAX_PRESSURE)?
    } else if t > B23_MIN_TEMPERATURE {
        let p_b23 = pressure_b23(t);
        if rho <= 1.0 / region2::specific_volume(p_b23, t) {
            single_phase(Region::Two, region2::specific_volume, t, rho, p_b23)?
        } else {
            near_critical(t, rho)?
        }
    } else {
        let p_sat = saturation_pressure(t);
        let v_liquid = region1::specific_volume(p_sat, t);
        let v_vapour = region2::specific_volume(p_sat, t);
        if rho >= 1.0 / v_liquid {
            compressed_liquid(t, rho, p_sat)?
        } else if rho <= 1.0 / v_vapour {
            single_phase(Region::Two, region2::specific_volume, t, rho, p_sat)?
        } else {
            two_phase(p_sat, rho)?
        }
    };

    log::trace!("resolve(T = {t}, rho = {rho}) -> {resolved:?}");
    Ok(resolved)
}

/// Inverts a vapour-like region for pressure in `[MIN_PRESSURE, p_max]`.
fn single_phase(
    region: Region,
    specific_volume: fn(f64, f64) -> f64,
    t: f64,
    rho: f64,
    p_max: f64,
) -> Result<Resolved, If97Error> {
    let rho_max = 1.0 / specific_volume(p_max, t);
    if rho > rho_max {
        return Err(RangeViolation::new(Quantity::Density, rho, rho_max).into());
    }
    let rho_min = 1.0 / specific_volume(MIN_PRESSURE, t);
    if rho < rho_min {
        return Err(RangeViolation::new(Quantity::Density, rho, rho_min).into());
    }

    let p = pressure_from_density(specific_volume, t, rho, [MIN_PRESSURE, p_max])?;
    Ok(Resolved::SinglePhase { region, p })
}

/// Inverts region 1 for pressure between saturation and the upper limit.
fn compressed_liquid(t: f64, rho: f64, p_sat: f64) -> Result<Resolved, If97Error> {
    let rho_max = 1.0 / region1::specific_volume(MAX_PRESSURE, t);
    if rho > rho_max {
        return Err(RangeViolation::new(Quantity::Density, rho, rho_max).into());
    }

    let p = pressure_from_density(region1::specific_volume, t, rho, [p_sat, MAX_PRESSURE])?;
    Ok(Resolved::SinglePhase {
        region: Region::One,
        p,
    })
}

/// Region 3, or the part of the saturation dome it covers below T_c.
fn near_critical(t: f64, rho: f64) -> Result<Resolved, If97Error> {
    if t < CRITICAL_TEMPERATURE {
        let p_sat = saturation_pressure(t);
        let liquid = Region4.saturated_liquid(p_sat)?;
        let vapour = Region4.saturated_vapour(p_sat)?;
        if rho > 1.0 / vapour.specific_volume && rho < 1.0 / liquid.specific_volume {
            return two_phase(p_sat, rho);
        }
    }

    let p = region3::Helmholtz::new(rho, t).pressure();
    if p > MAX_PRESSURE {
        let rho_max = region3::density(MAX_PRESSURE, t)?;
        return Err(RangeViolation::new(Quantity::Density, rho, rho_max).into());
    }
    Ok(Resolved::SinglePhase {
        region: Region::Three,
        p,
    })
}

/// Vapour fraction from the saturated volumes at `p_sat`.
fn two_phase(p_sat: f64, rho: f64) -> Result<Resolved, If97Error> {
    let liquid = Region4.saturated_liquid(p_sat)?;
    let vapour = Region4.saturated_vapour(p_sat)?;
    let x = (1.0 / rho - liquid.specific_volume)
        / (vapour.specific_volume - liquid.specific_volume);
    Ok(Resolved::TwoPhase { p: p_sat, x })
}

/// Solves 1/v(p, T) = ρ for p by bisection in ln p.
fn pressure_from_density(
    specific_volume: fn(f64, f64) -> f64,
    t: f64,
    rho: f64,
    [p_min, p_max]: [f64; 2],
) -> Result<f64, If97Error> {
    let ln_p = find_root(
        Quantity::Pressure,
        [p_min.ln(), p_max.ln()],
        1e-13,
        |ln_p| Ok(1.0 / specific_volume(ln_p.exp(), t) - rho),
    )?;
    Ok(ln_p.exp())
}
