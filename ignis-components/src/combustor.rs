//! A premixed combustor fed at a fixed mass flow.
//!
//! The model answers the ignition-system sizing question: burning a
//! fuel/oxidizer blend at some equivalence ratio, how fast is chemical
//! energy released, and how long (and how much mixture) does it take to
//! deliver a required ignition energy?

use thiserror::Error;

use uom::si::{
    f64::{
        Energy, Mass, MassRate, Power, Pressure, TemperatureInterval, ThermodynamicTemperature,
        Time,
    },
    temperature_interval::kelvin as delta_kelvin,
    thermodynamic_temperature::kelvin,
};

use ignis_core::Model;
use ignis_thermo::{
    PropertyError, State,
    fluid::GasMixture,
    model::{IdealGas, ThermodynamicProperties},
};

/// Errors that can occur when evaluating the combustor model.
#[derive(Debug, Error)]
pub enum CombustorError {
    /// The blend carries no burnable energy at this equivalence ratio.
    #[error("mixture releases no heat at this equivalence ratio")]
    NoHeatRelease,

    /// Building the blend or evaluating its properties failed.
    #[error(transparent)]
    Property(#[from] PropertyError),
}

/// A steady-flow combustor burning a fuel/oxidizer blend.
///
/// The input is the equivalence ratio; the fuel and oxidizer compositions
/// and the operating point are fixed configuration. Combustion is treated
/// as complete and adiabatic at constant pressure with frozen `cp`.
#[derive(Debug, Clone, PartialEq)]
pub struct Combustor {
    /// Chamber pressure.
    pub pressure: Pressure,
    /// Temperature of the unburned blend entering the chamber.
    pub inlet_temperature: ThermodynamicTemperature,
    /// Fuel composition (scaled per the equivalence ratio).
    pub fuel: GasMixture,
    /// Oxidizer composition (kept as given).
    pub oxidizer: GasMixture,
    /// Mass flow through the chamber.
    pub mass_flow: MassRate,
    /// Energy the igniter must deliver.
    pub ignition_energy: Energy,
}

/// Derived quantities for one equivalence ratio.
#[derive(Debug, Clone, PartialEq)]
pub struct CombustorOutput {
    /// Adiabatic flame temperature at constant pressure.
    pub flame_temperature: ThermodynamicTemperature,
    /// Rate of chemical energy release at the configured mass flow.
    pub heat_release_rate: Power,
    /// Time to deliver the ignition energy.
    pub ignition_time: Time,
    /// Mixture mass flowed during that time.
    pub charge_mass: Mass,
}

impl Model for Combustor {
    type Input = f64;
    type Output = CombustorOutput;
    type Error = CombustorError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let blend = GasMixture::from_equivalence_ratio(*input, &self.fuel, &self.oxidizer)?;

        let q = blend.heat_of_combustion();
        if q.value <= 0.0 {
            return Err(CombustorError::NoHeatRelease);
        }

        let state = State::new(self.inlet_temperature, self.pressure, blend);
        let cp = IdealGas.cp(&state)?;

        let rise: TemperatureInterval = q / cp;
        let flame_temperature = ThermodynamicTemperature::new::<kelvin>(
            self.inlet_temperature.get::<kelvin>() + rise.get::<delta_kelvin>(),
        );

        let heat_release_rate: Power = self.mass_flow * q;
        let ignition_time: Time = self.ignition_energy / heat_release_rate;
        let charge_mass: Mass = self.mass_flow * ignition_time;

        Ok(CombustorOutput {
            flame_temperature,
            heat_release_rate,
            ignition_time,
            charge_mass,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        energy::kilojoule, mass_rate::kilogram_per_second, power::watt, pressure::atmosphere,
        time::second,
    };

    fn methane_combustor() -> Combustor {
        Combustor {
            pressure: Pressure::new::<atmosphere>(10.0),
            inlet_temperature: ThermodynamicTemperature::new::<kelvin>(300.0),
            fuel: "CH4:1".parse().unwrap(),
            oxidizer: "O2:1 N2:3.76".parse().unwrap(),
            mass_flow: MassRate::new::<kilogram_per_second>(0.025),
            ignition_energy: Energy::new::<kilojoule>(7_787.0),
        }
    }

    #[test]
    fn stoichiometric_flame_is_hot() {
        let output = methane_combustor().call(&1.0).unwrap();

        let flame = output.flame_temperature.get::<kelvin>();
        assert!(
            (2_000.0..3_500.0).contains(&flame),
            "flame temperature {flame} K is outside the plausible band"
        );
    }

    #[test]
    fn energy_budget_is_consistent() {
        let combustor = methane_combustor();
        let output = combustor.call(&0.8).unwrap();

        let delivered = output.heat_release_rate.get::<watt>()
            * output.ignition_time.get::<second>();
        assert_relative_eq!(
            delivered,
            combustor.ignition_energy.get::<uom::si::energy::joule>(),
            max_relative = 1e-12
        );

        assert_relative_eq!(
            output.charge_mass.get::<uom::si::mass::kilogram>(),
            combustor.mass_flow.get::<kilogram_per_second>()
                * output.ignition_time.get::<second>(),
            max_relative = 1e-12
        );
    }

    #[test]
    fn lean_blends_ignite_slower_than_stoichiometric() {
        let combustor = methane_combustor();

        let lean = combustor.call(&0.6).unwrap();
        let stoich = combustor.call(&1.0).unwrap();

        assert!(lean.heat_release_rate < stoich.heat_release_rate);
        assert!(lean.ignition_time > stoich.ignition_time);
    }

    #[test]
    fn rich_blends_are_oxygen_limited() {
        let combustor = methane_combustor();

        let stoich = combustor.call(&1.0).unwrap();
        let rich = combustor.call(&1.5).unwrap();

        // Excess fuel dilutes the charge without adding burnable energy.
        assert!(rich.heat_release_rate < stoich.heat_release_rate);
    }

    #[test]
    fn invalid_equivalence_ratio_propagates() {
        let result = methane_combustor().call(&-0.5);
        assert!(matches!(result, Err(CombustorError::Property(_))));
    }
}
