use uom::si::{f64::Velocity, ratio::ratio};

use ignis_core::Model;
use ignis_thermo::{
    State,
    fluid::GasMixture,
    model::{IdealGas, IdealGasFluid, ThermodynamicProperties},
    units::SpecificEnthalpy,
};

use super::ShockError;

/// Chapman–Jouguet detonation speed from the one-gamma model.
///
/// The mixture's oxygen-limited heat of combustion `q` sets the
/// nondimensional heat release `H = q (γ² − 1) / (2 γ R T)`, and the CJ
/// Mach number follows as `M = √(1 + H) + √H`. Equilibrium calculations
/// across an incident shock require the wave to run at or above this speed.
#[derive(Debug, Clone, Copy, Default)]
pub struct CjSpeed;

impl Model for CjSpeed {
    type Input = State<GasMixture>;
    type Output = Velocity;
    type Error = ShockError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let q = input.fluid.heat_of_combustion();
        if q.value <= 0.0 {
            return Err(ShockError::NoHeatRelease);
        }

        let gamma = IdealGas.gamma(input)?;
        let a1 = IdealGas.sound_speed(input)?;

        let rt: SpecificEnthalpy = input.fluid.gas_constant() * input.temperature;
        let heat_release = (q / rt).get::<ratio>() * (gamma * gamma - 1.0) / (2.0 * gamma);

        let mach = (1.0 + heat_release).sqrt() + heat_release.sqrt();

        Ok(mach * a1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        f64::{Pressure, ThermodynamicTemperature},
        pressure::pascal,
        thermodynamic_temperature::kelvin,
        velocity::meter_per_second,
    };

    fn state_of(composition: &str, temperature_k: f64) -> State<GasMixture> {
        State::new(
            ThermodynamicTemperature::new::<kelvin>(temperature_k),
            Pressure::new::<pascal>(100_000.0),
            composition.parse().unwrap(),
        )
    }

    #[test]
    fn detonable_mixture_is_strongly_supersonic() {
        let state = state_of("H2:2 O2:1 N2:3.56", 300.0);

        let cj = CjSpeed.call(&state).unwrap();
        let a1 = IdealGas.sound_speed(&state).unwrap();

        let mach = (cj / a1).get::<ratio>();
        assert!(mach > 4.0, "CJ Mach {mach} should be well above unity");
        assert!(cj.get::<meter_per_second>() > 2_000.0);
    }

    #[test]
    fn dilution_slows_the_detonation() {
        let undiluted = CjSpeed.call(&state_of("H2:2 O2:1", 300.0)).unwrap();
        let diluted = CjSpeed.call(&state_of("H2:2 O2:1 N2:7.0", 300.0)).unwrap();

        assert!(diluted < undiluted);
    }

    #[test]
    fn inert_mixture_has_no_cj_speed() {
        let result = CjSpeed.call(&state_of("N2:1", 300.0));
        assert!(matches!(result, Err(ShockError::NoHeatRelease)));
    }

    #[test]
    fn cj_speed_is_deterministic() {
        let state = state_of("H2:2 O2:1 N2:3.56", 400.0);

        let first = CjSpeed.call(&state).unwrap();
        let second = CjSpeed.call(&state).unwrap();

        assert_relative_eq!(
            first.get::<meter_per_second>(),
            second.get::<meter_per_second>()
        );
    }
}
