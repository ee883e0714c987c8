//! Core abstractions for Ignis.
//!
//! This crate defines the [`Model`] trait, the seam between a sweep and
//! whatever computes a derived state from an input, and the sweep driver
//! in [`sweep`], which iterates a scalar parameter over a fixed range and
//! collects index-aligned result series.

pub mod model;
pub mod sweep;

pub use model::{Model, Snapshot};
pub use sweep::{Sweep, SweepError, SweepRange};
