use uom::si::{
    f64::{MassDensity, Pressure, SpecificHeatCapacity, ThermodynamicTemperature, Velocity},
    ratio::ratio,
    temperature_interval, thermodynamic_temperature,
};

use crate::{
    PropertyError, State,
    units::{SpecificEnthalpy, SpecificGasConstant, TemperatureOps},
};

use super::ThermodynamicProperties;

/// Trait used to define thermodynamic constants for ideal gases.
///
/// Provides the fixed properties required to model a fluid with ideal gas
/// assumptions: the specific gas constant `R`, the constant-pressure heat
/// capacity `cp`, and a reference temperature for enthalpy.
///
/// Implemented for [`Air`] and [`GasMixture`]; implement it for any custom
/// fluid that behaves as an ideal gas with constant specific heat.
///
/// [`Air`]: crate::fluid::Air
/// [`GasMixture`]: crate::fluid::GasMixture
pub trait IdealGasFluid {
    /// Returns the specific gas constant `R`.
    fn gas_constant(&self) -> SpecificGasConstant;

    /// Returns the specific heat capacity at constant pressure `cp`.
    fn cp(&self) -> SpecificHeatCapacity;

    /// Returns the temperature where enthalpy is taken as zero.
    ///
    /// Defaults to 298.15 K.
    fn reference_temperature(&self) -> ThermodynamicTemperature {
        ThermodynamicTemperature::new::<thermodynamic_temperature::kelvin>(298.15)
    }
}

/// A fluid property model using ideal gas assumptions.
///
/// Assumes ideal gas behavior and constant specific heat, which holds well
/// away from real gas effects and steep `cp(T)` variation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IdealGas;

impl IdealGas {
    /// Computes density using the ideal gas law.
    #[must_use]
    pub fn density(
        temperature: ThermodynamicTemperature,
        pressure: Pressure,
        gas_constant: SpecificGasConstant,
    ) -> MassDensity {
        pressure / (gas_constant * temperature)
    }

    /// Computes pressure using the ideal gas law.
    #[must_use]
    pub fn pressure(
        temperature: ThermodynamicTemperature,
        density: MassDensity,
        gas_constant: SpecificGasConstant,
    ) -> Pressure {
        density * gas_constant * temperature
    }

    /// Computes temperature using the ideal gas law.
    ///
    /// Since `SpecificGasConstant` is associated with a `TemperatureInterval`,
    /// the result must be manually converted to an absolute temperature. The
    /// conversion is safe because the ideal gas law naturally produces
    /// absolute temperatures.
    #[must_use]
    pub fn temperature(
        pressure: Pressure,
        density: MassDensity,
        gas_constant: SpecificGasConstant,
    ) -> ThermodynamicTemperature {
        let temperature = pressure / (density * gas_constant);
        ThermodynamicTemperature::new::<thermodynamic_temperature::kelvin>(
            temperature.get::<temperature_interval::kelvin>(),
        )
    }
}

impl<F: IdealGasFluid> ThermodynamicProperties<F> for IdealGas {
    /// Computes density with `ρ = p / (R·T)`.
    fn density(&self, state: &State<F>) -> Result<MassDensity, PropertyError> {
        Ok(IdealGas::density(
            state.temperature,
            state.pressure,
            state.fluid.gas_constant(),
        ))
    }

    /// Computes enthalpy with `h = cp·(T − T₀)`.
    fn enthalpy(&self, state: &State<F>) -> Result<SpecificEnthalpy, PropertyError> {
        let cp = state.fluid.cp();
        let t_ref = state.fluid.reference_temperature();

        Ok(cp * state.temperature.minus(t_ref))
    }

    /// Returns the constant `cp` from the fluid.
    fn cp(&self, state: &State<F>) -> Result<SpecificHeatCapacity, PropertyError> {
        Ok(state.fluid.cp())
    }

    /// Computes the constant `cv = cp − R`.
    fn cv(&self, state: &State<F>) -> Result<SpecificHeatCapacity, PropertyError> {
        Ok(state.fluid.cp() - state.fluid.gas_constant())
    }

    /// Computes `γ = cp / cv`.
    fn gamma(&self, state: &State<F>) -> Result<f64, PropertyError> {
        let cp = self.cp(state)?;
        let cv = self.cv(state)?;

        if cv.value <= 0.0 {
            return Err(PropertyError::Calculation(
                "cv is not positive; cp must exceed the gas constant".into(),
            ));
        }

        Ok((cp / cv).get::<ratio>())
    }

    /// Computes the sound speed with `a = √(γ·R·T)`.
    fn sound_speed(&self, state: &State<F>) -> Result<Velocity, PropertyError> {
        let gamma = self.gamma(state)?;
        let rt: SpecificEnthalpy = state.fluid.gas_constant() * state.temperature;

        Ok((gamma * rt).sqrt())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        mass_density::kilogram_per_cubic_meter,
        pressure::{kilopascal, pascal},
        thermodynamic_temperature::kelvin,
        velocity::meter_per_second,
    };

    use crate::fluid::Air;

    fn air_at(temperature_k: f64, pressure_pa: f64) -> State<Air> {
        State::new(
            ThermodynamicTemperature::new::<kelvin>(temperature_k),
            Pressure::new::<pascal>(pressure_pa),
            Air,
        )
    }

    #[test]
    fn density_of_room_air() {
        let state = air_at(300.0, 101_325.0);
        let density = IdealGas.density(&state).unwrap();

        assert_relative_eq!(
            density.get::<kilogram_per_cubic_meter>(),
            1.1766,
            max_relative = 1e-3
        );
    }

    #[test]
    fn gas_law_round_trips() {
        let state = air_at(450.0, 250_000.0);
        let r = state.fluid.gas_constant();

        let density = IdealGas.density(&state).unwrap();
        let pressure = IdealGas::pressure(state.temperature, density, r);
        let temperature = IdealGas::temperature(pressure, density, r);

        assert_relative_eq!(pressure.get::<kilopascal>(), 250.0, max_relative = 1e-12);
        assert_relative_eq!(temperature.get::<kelvin>(), 450.0, max_relative = 1e-12);
    }

    #[test]
    fn gamma_of_air_is_near_1_4() {
        let state = air_at(300.0, 101_325.0);
        let gamma = IdealGas.gamma(&state).unwrap();

        assert_relative_eq!(gamma, 1.4, max_relative = 1e-3);
    }

    #[test]
    fn sound_speed_of_room_air() {
        let state = air_at(300.0, 101_325.0);
        let a = IdealGas.sound_speed(&state).unwrap();

        assert_relative_eq!(a.get::<meter_per_second>(), 347.2, max_relative = 1e-3);
    }

    #[test]
    fn enthalpy_increases_with_temperature() {
        let cold = air_at(300.0, 101_325.0);
        let hot = cold.clone().with_temperature(ThermodynamicTemperature::new::<kelvin>(400.0));

        let h_cold = IdealGas.enthalpy(&cold).unwrap();
        let h_hot = IdealGas.enthalpy(&hot).unwrap();

        assert!(h_hot > h_cold);
    }
}
