use uom::si::f64::{Pressure, ThermodynamicTemperature};

/// The thermodynamic state of a fluid, fixed by temperature and pressure.
///
/// The `fluid` field can be a zero-sized marker such as [`Air`], or a
/// data-carrying type such as [`GasMixture`] with its composition. Derived
/// quantities (density, enthalpy, sound speed, ...) come from a property
/// model evaluated against the state, not from the state itself.
///
/// [`Air`]: crate::fluid::Air
/// [`GasMixture`]: crate::fluid::GasMixture
#[derive(Debug, Clone, PartialEq)]
pub struct State<Fluid> {
    pub temperature: ThermodynamicTemperature,
    pub pressure: Pressure,
    pub fluid: Fluid,
}

impl<Fluid> State<Fluid> {
    /// Creates a state from a temperature, pressure, and fluid.
    #[must_use]
    pub fn new(temperature: ThermodynamicTemperature, pressure: Pressure, fluid: Fluid) -> Self {
        Self {
            temperature,
            pressure,
            fluid,
        }
    }

    /// Returns the state with a different temperature.
    #[must_use]
    pub fn with_temperature(self, temperature: ThermodynamicTemperature) -> Self {
        Self {
            temperature,
            ..self
        }
    }

    /// Returns the state with a different pressure.
    #[must_use]
    pub fn with_pressure(self, pressure: Pressure) -> Self {
        Self { pressure, ..self }
    }

    /// Returns the state with a different fluid.
    #[must_use]
    pub fn with_fluid(self, fluid: Fluid) -> Self {
        Self { fluid, ..self }
    }
}
