use crate::support::thermo::State;

use super::ThermoModel;

/// Capability for constructing a [`State`] from a typed input.
///
/// Each supported input combination is a separate implementation, so an
/// unsupported pair is a compile error rather than a runtime one. Inputs are
/// plain tuples that lead with the fluid:
/// - `(Fluid, ThermodynamicTemperature, Pressure)`
/// - `(Fluid, ThermodynamicTemperature, MassDensity)`
/// - `(Fluid, Pressure, SpecificEnthalpy)`
/// - `(Fluid, SpecificEnthalpy, SpecificEntropy)`
///
/// When `Fluid: Default`, the blanket implementation below also accepts the
/// same pair without the fluid, so `model.state_from((t, p))` works for
/// marker fluids such as [`Water`](crate::support::thermo::fluid::Water).
pub trait StateFrom<Input>: ThermoModel {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Create a thermodynamic state from the provided input.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the state cannot be created from `input`.
    fn state_from(&self, input: Input) -> Result<State<Self::Fluid>, Self::Error>;
}

/// Builds the state with `Fluid::default()` when the input omits the fluid.
impl<M, A, B> StateFrom<(A, B)> for M
where
    M: ThermoModel + StateFrom<(<M as ThermoModel>::Fluid, A, B)>,
    <M as ThermoModel>::Fluid: Default,
{
    type Error = <M as StateFrom<(<M as ThermoModel>::Fluid, A, B)>>::Error;

    fn state_from(&self, (a, b): (A, B)) -> Result<State<Self::Fluid>, Self::Error> {
        self.state_from((<M as ThermoModel>::Fluid::default(), a, b))
    }
}
