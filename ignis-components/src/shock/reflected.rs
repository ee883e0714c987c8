use uom::si::{
    f64::{MassDensity, Velocity},
    velocity::meter_per_second,
};

use ignis_core::Model;
use ignis_solve::bisection::{self, Status};
use ignis_thermo::{
    State,
    fluid::GasMixture,
    model::{IdealGas, ThermodynamicProperties},
};

use super::{NormalShock, ShockError, ShockInput, ShockState};

/// A shock reflecting off the end wall of a tube.
///
/// The incident wave leaves the gas behind it streaming toward the wall;
/// the reflected wave must run back through that stream fast enough to
/// bring the gas to rest. The model jumps across the incident wave, then
/// bisects on the reflected wave speed until the wall condition (zero
/// lab-frame velocity behind the reflected wave) is met.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReflectedShock {
    pub config: bisection::Config,
}

/// The reflected wave and the stagnant gas between it and the wall.
#[derive(Debug, Clone, PartialEq)]
pub struct ReflectedState {
    /// Gas between the reflected wave and the wall.
    pub state: State<GasMixture>,
    /// Density of that gas.
    pub density: MassDensity,
    /// Reflected wave speed relative to the wall.
    pub speed: Velocity,
}

impl Model for ReflectedShock {
    type Input = ShockInput<GasMixture>;
    type Output = ReflectedState;
    type Error = ShockError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let incident = NormalShock::new().call(input)?;

        let u2 = incident.velocity.get::<meter_per_second>();
        let a2 = IdealGas
            .sound_speed(&incident.state)?
            .get::<meter_per_second>();

        // The reflected wave must be supersonic relative to the oncoming
        // gas, which approaches it at u2 + ur.
        let lower = (a2 - u2).max(0.0) + 1e-3 * a2;
        let upper = u2 + 5.0 * a2;

        let shock = NormalShock::<GasMixture>::new();
        let upstream = incident.state;

        let solution = bisection::solve(
            &shock,
            |ur| ShockInput {
                state: upstream.clone(),
                speed: Velocity::new::<meter_per_second>(u2 + ur),
            },
            // Lab-frame velocity of the gas behind the reflected wave:
            // it streams toward the wall at u2 and is pushed back at the
            // post-shock particle velocity.
            |_input, output: &ShockState<GasMixture>| {
                u2 - output.velocity.get::<meter_per_second>()
            },
            [lower, upper],
            &self.config,
        )?;

        if solution.status != Status::Converged {
            return Err(ShockError::NotConverged);
        }

        let wall = solution.snapshot.output;

        Ok(ReflectedState {
            state: wall.state,
            density: wall.density,
            speed: Velocity::new::<meter_per_second>(solution.x),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        f64::{Pressure, ThermodynamicTemperature},
        pressure::pascal,
        ratio::ratio,
        thermodynamic_temperature::kelvin,
    };

    fn nitrogen_input(mach: f64) -> ShockInput<GasMixture> {
        let state = State::new(
            ThermodynamicTemperature::new::<kelvin>(300.0),
            Pressure::new::<pascal>(100_000.0),
            "N2:1".parse().unwrap(),
        );
        let a1 = IdealGas.sound_speed(&state).unwrap();

        ShockInput {
            state,
            speed: mach * a1,
        }
    }

    #[test]
    fn wall_gas_is_brought_to_rest() {
        let input = nitrogen_input(2.0);

        let incident = NormalShock::new().call(&input).unwrap();
        let reflected = ReflectedShock::default().call(&input).unwrap();

        // Re-run the jump across the reflected wave and check that the
        // post-shock particle velocity cancels the incoming stream.
        let check = NormalShock::new()
            .call(&ShockInput {
                state: incident.state.clone(),
                speed: incident.velocity + reflected.speed,
            })
            .unwrap();

        let residual = (incident.velocity - check.velocity).get::<meter_per_second>();
        assert_relative_eq!(residual, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn reflection_amplifies_pressure_and_temperature() {
        let input = nitrogen_input(2.0);

        let incident = NormalShock::new().call(&input).unwrap();
        let reflected = ReflectedShock::default().call(&input).unwrap();

        assert!(reflected.state.pressure > incident.state.pressure);
        assert!(incident.state.pressure > input.state.pressure);
        assert!(reflected.state.temperature > incident.state.temperature);
        assert!(reflected.speed.get::<meter_per_second>() > 0.0);
    }

    #[test]
    fn mach_2_reflection_matches_perfect_gas_relation() {
        let input = nitrogen_input(2.0);

        let incident = NormalShock::new().call(&input).unwrap();
        let reflected = ReflectedShock::default().call(&input).unwrap();

        // For a perfect gas, p3/p2 follows from p2/p1 and gamma alone.
        let gamma = IdealGas.gamma(&input.state).unwrap();
        let p21 = (incident.state.pressure / input.state.pressure).get::<ratio>();
        let expected =
            (p21 * (3.0 * gamma - 1.0) - (gamma - 1.0)) / (p21 * (gamma - 1.0) + (gamma + 1.0));

        let p32 = (reflected.state.pressure / incident.state.pressure).get::<ratio>();
        assert_relative_eq!(p32, expected, max_relative = 1e-6);
    }
}
