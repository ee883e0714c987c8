//! Normal shock waves in perfect gases.
//!
//! The models here cover the states of a reflected-shock experiment:
//! [`CjSpeed`] bounds the incident wave speed from below, [`NormalShock`]
//! jumps across the incident wave, and [`ReflectedShock`] finds the wave
//! bounced off the end wall and the stagnant gas behind it.

mod cj;
mod error;
mod incident;
mod reflected;

pub use cj::CjSpeed;
pub use error::ShockError;
pub use incident::{NormalShock, ShockInput, ShockState};
pub use reflected::{ReflectedShock, ReflectedState};
