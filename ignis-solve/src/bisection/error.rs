use std::error::Error as StdError;

use thiserror::Error;

/// Errors that can occur during a bisection solve.
#[derive(Debug, Error)]
pub enum Error {
    #[error("bracket has zero width: left and right are both {value}")]
    ZeroWidthBracket { value: f64 },

    #[error("bracket contains non-finite value: {value}")]
    NonFiniteBracket { value: f64 },

    #[error("no root in bracket: f({left})={left_residual}, f({right})={right_residual}")]
    NoBracket {
        left: f64,
        right: f64,
        left_residual: f64,
        right_residual: f64,
    },

    #[error("invalid config: {reason}")]
    InvalidConfig { reason: &'static str },

    #[error("non-finite residual {residual} at x = {x}")]
    NonFiniteResidual { x: f64, residual: f64 },

    #[error("model call failed")]
    Model(#[source] Box<dyn StdError + Send + Sync>),
}
