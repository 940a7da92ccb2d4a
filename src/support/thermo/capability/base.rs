/// A thermodynamic property model for one kind of fluid.
///
/// Every capability trait builds on this one, so a model names its fluid
/// once and the `Has*` traits take `State<Self::Fluid>`.
pub trait ThermoModel {
    type Fluid;
}
