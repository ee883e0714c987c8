//! How reflected-shock conditions change with initial mixture temperature.
//!
//! Sweeps the initial temperature of a stoichiometric H2/O2/N2 mixture,
//! drives an incident shock at 1.2x the CJ speed per point, solves the
//! reflected shock, and plots the wall-gas temperature, pressure, density,
//! and the reflected wave speed.

use std::error::Error;

use uom::si::{
    f64::{Pressure, ThermodynamicTemperature},
    mass_density::kilogram_per_cubic_meter,
    pressure::{atmosphere, pascal},
    thermodynamic_temperature::kelvin,
    velocity::meter_per_second,
};

use ignis_components::shock::{CjSpeed, ReflectedShock, ReflectedState, ShockError, ShockInput};
use ignis_core::{Model, SweepRange, sweep};
use ignis_plot::PlotApp;
use ignis_thermo::{State, fluid::GasMixture};

/// One sweep point: CJ speed, overdriven incident wave, then reflection.
struct ShockStudy {
    pressure: Pressure,
    mixture: GasMixture,
    overdrive: f64,
}

impl Model for ShockStudy {
    type Input = ThermodynamicTemperature;
    type Output = ReflectedState;
    type Error = ShockError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let state = State::new(*input, self.pressure, self.mixture.clone());

        // The incident wave must run at or above CJ speed for the
        // post-shock state to make sense; overdrive it a little.
        let cj = CjSpeed.call(&state)?;

        ReflectedShock::default().call(&ShockInput {
            state,
            speed: self.overdrive * cj,
        })
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let study = ShockStudy {
        pressure: Pressure::new::<pascal>(100_000.0),
        mixture: "H2:2 O2:1 N2:3.56".parse()?,
        overdrive: 1.2,
    };

    let range = SweepRange::new(300.0, 1400.0, 10.0)?;
    let results = sweep::run(&range, &study, |t| {
        ThermodynamicTemperature::new::<kelvin>(t)
    })?;

    let temperature = results.series(|out| out.state.temperature.get::<kelvin>());
    let pressure = results.series(|out| out.state.pressure.get::<atmosphere>());
    let density = results.series(|out| out.density.get::<kilogram_per_cubic_meter>());
    let speed = results.series(|out| out.speed.get::<meter_per_second>());

    PlotApp::new()
        .with_axis_labels("T0 [K]", "Tr [K]")
        .add_series("reflected temperature", &temperature)
        .run("Temperature of reflected shockwave")?;

    PlotApp::new()
        .with_axis_labels("T0 [K]", "Pr [atm]")
        .add_series("reflected pressure", &pressure)
        .run("Pressure of reflected shockwave")?;

    PlotApp::new()
        .with_axis_labels("T0 [K]", "Dr [kg/m^3]")
        .add_series("reflected density", &density)
        .run("Density of reflected shockwave")?;

    PlotApp::new()
        .with_axis_labels("T0 [K]", "Vr [m/s]")
        .add_series("reflected wave speed", &speed)
        .run("Velocity of reflected shockwave")?;

    Ok(())
}
