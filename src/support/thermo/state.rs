use uom::si::f64::{MassDensity, ThermodynamicTemperature};

/// The thermodynamic state of a fluid.
///
/// Temperature and density fix the state of a pure fluid everywhere,
/// including inside the saturation dome, so they are the only stored
/// properties. Models derive everything else from them.
///
/// # Example
///
/// ```
/// use twine_if97::support::thermo::{State, fluid::Water};
/// use uom::si::{
///     f64::{MassDensity, ThermodynamicTemperature},
///     mass_density::kilogram_per_cubic_meter,
///     thermodynamic_temperature::kelvin,
/// };
///
/// let state = State::new(
///     ThermodynamicTemperature::new::<kelvin>(300.0),
///     MassDensity::new::<kilogram_per_cubic_meter>(996.5),
///     Water,
/// );
/// assert_eq!(state.fluid, Water);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct State<Fluid> {
    pub temperature: ThermodynamicTemperature,
    pub density: MassDensity,
    pub fluid: Fluid,
}

impl<Fluid> State<Fluid> {
    /// Creates a new state with the given temperature, density, and fluid.
    #[must_use]
    pub fn new(temperature: ThermodynamicTemperature, density: MassDensity, fluid: Fluid) -> Self {
        Self {
            temperature,
            density,
            fluid,
        }
    }
}
