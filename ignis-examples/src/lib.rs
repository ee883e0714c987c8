//! Runnable sweep studies for Ignis.
//!
//! The interesting code lives in `examples/`:
//!
//! - `reflected_shock` sweeps initial mixture temperature through a
//!   reflected-shock calculation.
//! - `rocket_ignition` sweeps equivalence ratio through a combustor model.
