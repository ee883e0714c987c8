use std::marker::PhantomData;

use uom::si::{
    f64::{MassDensity, ThermodynamicTemperature, Velocity},
    ratio::ratio,
    thermodynamic_temperature::kelvin,
};

use ignis_core::Model;
use ignis_thermo::{
    State,
    model::{IdealGas, IdealGasFluid, ThermodynamicProperties},
};

use super::ShockError;

/// A normal shock propagating into quiescent gas.
///
/// Given the upstream state and the wave speed, the Rankine–Hugoniot jump
/// relations for a perfect gas give the post-shock state and the lab-frame
/// particle velocity of the gas set in motion behind the wave.
#[derive(Debug, Clone, Copy)]
pub struct NormalShock<F> {
    _fluid: PhantomData<F>,
}

impl<F> NormalShock<F> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            _fluid: PhantomData,
        }
    }
}

impl<F> Default for NormalShock<F> {
    fn default() -> Self {
        Self::new()
    }
}

/// Upstream conditions seen by a shock wave.
#[derive(Debug, Clone, PartialEq)]
pub struct ShockInput<F> {
    /// The quiescent gas ahead of the wave.
    pub state: State<F>,
    /// Wave speed relative to that gas.
    pub speed: Velocity,
}

/// The gas behind a shock wave.
#[derive(Debug, Clone, PartialEq)]
pub struct ShockState<F> {
    /// Post-shock thermodynamic state.
    pub state: State<F>,
    /// Post-shock density.
    pub density: MassDensity,
    /// Particle velocity in the frame where the upstream gas is at rest,
    /// positive in the direction of wave travel.
    pub velocity: Velocity,
}

impl<F> Model for NormalShock<F>
where
    F: IdealGasFluid + Clone,
{
    type Input = ShockInput<F>;
    type Output = ShockState<F>;
    type Error = ShockError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let ShockInput { state, speed } = input;

        let gamma = IdealGas.gamma(state)?;
        let a1 = IdealGas.sound_speed(state)?;

        let mach = (*speed / a1).get::<ratio>();
        if mach <= 1.0 {
            return Err(ShockError::Subsonic { mach });
        }

        let mach_sq = mach * mach;
        let pressure_ratio = 1.0 + 2.0 * gamma / (gamma + 1.0) * (mach_sq - 1.0);
        let density_ratio = (gamma + 1.0) * mach_sq / ((gamma - 1.0) * mach_sq + 2.0);
        let temperature_ratio = pressure_ratio / density_ratio;

        let post = State::new(
            ThermodynamicTemperature::new::<kelvin>(
                state.temperature.get::<kelvin>() * temperature_ratio,
            ),
            state.pressure * pressure_ratio,
            state.fluid.clone(),
        );

        let density = IdealGas.density(&post)?;
        let velocity = *speed * (1.0 - 1.0 / density_ratio);

        Ok(ShockState {
            state: post,
            density,
            velocity,
        })
    }
}
