//! Shock-wave and combustor models for Ignis sweeps.
//!
//! Every model here implements [`Model`](ignis_core::Model), so a sweep can
//! drive it directly: build a state from the swept value, call the model,
//! and collect the derived quantities.

pub mod combustor;
pub mod shock;
