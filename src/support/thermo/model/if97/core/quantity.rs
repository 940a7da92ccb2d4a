use std::fmt;

/// Physical quantities handled by the formulation.
///
/// Used to name the offending input of a [`RangeViolation`](super::RangeViolation)
/// and to request a single property from [`property`](super::property).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quantity {
    /// Pressure, MPa.
    Pressure,
    /// Temperature, K.
    Temperature,
    /// Specific enthalpy, kJ/kg.
    SpecificEnthalpy,
    /// Specific entropy, kJ/(kg·K).
    SpecificEntropy,
    /// Density, kg/m³.
    Density,
    /// Specific volume, m³/kg.
    SpecificVolume,
    /// Specific internal energy, kJ/kg.
    SpecificInternalEnergy,
    /// Specific isobaric heat capacity, kJ/(kg·K).
    IsobaricHeatCapacity,
    /// Specific isochoric heat capacity, kJ/(kg·K).
    IsochoricHeatCapacity,
    /// Speed of sound, m/s.
    SpeedOfSound,
    /// Isobaric cubic expansion coefficient, 1/K.
    IsobaricExpansionCoefficient,
    /// Isothermal compressibility, 1/MPa.
    IsothermalCompressibility,
    /// Vapour mass fraction, dimensionless.
    VapourFraction,
}

impl Quantity {
    /// Returns the symbol conventionally used for this quantity.
    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Pressure => "p",
            Self::Temperature => "T",
            Self::SpecificEnthalpy => "h",
            Self::SpecificEntropy => "s",
            Self::Density => "rho",
            Self::SpecificVolume => "v",
            Self::SpecificInternalEnergy => "u",
            Self::IsobaricHeatCapacity => "cp",
            Self::IsochoricHeatCapacity => "cv",
            Self::SpeedOfSound => "w",
            Self::IsobaricExpansionCoefficient => "alpha_v",
            Self::IsothermalCompressibility => "kappa_T",
            Self::VapourFraction => "x",
        }
    }

    /// Returns the base unit this crate uses for the quantity.
    #[must_use]
    pub fn unit(self) -> &'static str {
        match self {
            Self::Pressure => "MPa",
            Self::Temperature => "K",
            Self::SpecificEnthalpy | Self::SpecificInternalEnergy => "kJ/kg",
            Self::SpecificEntropy | Self::IsobaricHeatCapacity | Self::IsochoricHeatCapacity => {
                "kJ/(kg K)"
            }
            Self::Density => "kg/m3",
            Self::SpecificVolume => "m3/kg",
            Self::SpeedOfSound => "m/s",
            Self::IsobaricExpansionCoefficient => "1/K",
            Self::IsothermalCompressibility => "1/MPa",
            Self::VapourFraction => "-",
        }
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.symbol(), self.unit())
    }
}
