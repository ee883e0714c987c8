//! Numerical solvers for Ignis.
//!
//! Currently a single method: [`bisection`], which finds where a scalar
//! residual of a [`Model`](ignis_core::Model) call crosses zero.

pub mod bisection;
