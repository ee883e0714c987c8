//! Thermodynamic states, gas mixtures, and property models for Ignis.

mod error;
mod state;

pub mod fluid;
pub mod model;
pub mod units;

pub use error::PropertyError;
pub use state::State;
