//! Sizing an air/methane ignition system across equivalence ratios.
//!
//! Sweeps the equivalence ratio of a CH4/air blend feeding an outer
//! combustion chamber, and asks per point: how long must the chamber burn,
//! and how much mixture must flow, to deliver the ignition energy of the
//! rocket motor? Plots charge mass and burn time against equivalence ratio.

use std::error::Error;

use uom::si::{
    energy::kilocalorie,
    f64::{Energy, MassRate, Pressure, ThermodynamicTemperature},
    mass::kilogram,
    mass_rate::kilogram_per_second,
    power::megawatt,
    pressure::atmosphere,
    thermodynamic_temperature::kelvin,
    time::second,
};

use ignis_components::combustor::Combustor;
use ignis_core::{SweepRange, sweep};
use ignis_plot::PlotApp;

fn main() -> Result<(), Box<dyn Error>> {
    let combustor = Combustor {
        pressure: Pressure::new::<atmosphere>(10.0),
        inlet_temperature: ThermodynamicTemperature::new::<kelvin>(300.0),
        fuel: "CH4:1.0".parse()?,
        oxidizer: "O2:1.0 N2:3.76".parse()?,
        mass_flow: MassRate::new::<kilogram_per_second>(0.025),
        // 1550 kcal ignites the motor; carry a 20% margin.
        ignition_energy: Energy::new::<kilocalorie>(1.2 * 1550.0),
    };

    let range = SweepRange::new(0.6, 1.6, 0.01)?;
    let results = sweep::run(&range, &combustor, |phi| phi)?;

    for (phi, out) in results.values().iter().zip(results.outputs()) {
        println!(
            "phi = {phi:.2}: mass = {:.3} kg, t = {:.3} s, Qe = {:.2} MW",
            out.charge_mass.get::<kilogram>(),
            out.ignition_time.get::<second>(),
            out.heat_release_rate.get::<megawatt>(),
        );
    }

    let mass = results.series(|out| out.charge_mass.get::<kilogram>());
    let time = results.series(|out| out.ignition_time.get::<second>());

    PlotApp::new()
        .with_axis_labels("equivalence ratio [-]", "mixture mass [kg]")
        .add_series("charge mass", &mass)
        .run("Ignition charge mass")?;

    PlotApp::new()
        .with_axis_labels("equivalence ratio [-]", "t [s]")
        .add_series("burn time", &time)
        .run("Ignition burn time")?;

    Ok(())
}
