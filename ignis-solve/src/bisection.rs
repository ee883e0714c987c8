//! Bisection root finding over a [`Model`].
//!
//! The solver searches for an `x` where a caller-supplied residual of the
//! model call crosses zero: `x` is mapped to a model input, the model is
//! called, and the residual is computed from the input/output pair.

mod config;
mod error;
mod solution;

pub use config::Config;
pub use error::Error;
pub use solution::{Solution, Status};

use ignis_core::model::{Model, Snapshot};

/// Finds a root of the residual within the bracket using bisection.
///
/// `to_input` maps a candidate `x` to a model input and `residual` scores an
/// input/output pair; the solver looks for the `x` whose residual is zero.
/// The bracket endpoints may be given in either order, but their residuals
/// must differ in sign.
///
/// If the iteration limit is reached, the best evaluation seen so far is
/// returned with [`Status::MaxIters`].
///
/// # Errors
///
/// Returns an error if the config or bracket is invalid, a residual is
/// non-finite, or the model itself fails.
pub fn solve<M, X, R>(
    model: &M,
    to_input: X,
    residual: R,
    bracket: [f64; 2],
    config: &Config,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    X: Fn(f64) -> M::Input,
    R: Fn(&M::Input, &M::Output) -> f64,
{
    config
        .validate()
        .map_err(|reason| Error::InvalidConfig { reason })?;

    let (mut left, mut right) = validate_bracket(bracket)?;

    let left_eval = evaluate(model, &to_input, &residual, left)?;
    let mut left_residual = left_eval.residual;
    if left_residual.abs() <= config.residual_tol {
        return Ok(left_eval.into_solution(Status::Converged, 0));
    }

    let right_eval = evaluate(model, &to_input, &residual, right)?;
    let right_residual = right_eval.residual;
    if right_residual.abs() <= config.residual_tol {
        return Ok(right_eval.into_solution(Status::Converged, 0));
    }

    if left_residual.signum() == right_residual.signum() {
        return Err(Error::NoBracket {
            left,
            right,
            left_residual,
            right_residual,
        });
    }

    let mut best = if left_residual.abs() <= right_residual.abs() {
        left_eval
    } else {
        right_eval
    };

    for iter in 1..=config.max_iters {
        let mid = 0.5 * (left + right);
        let mid_eval = evaluate(model, &to_input, &residual, mid)?;
        let mid_residual = mid_eval.residual;

        let x_converged = (right - left).abs() <= config.x_abs_tol + config.x_rel_tol * mid.abs();
        if x_converged || mid_residual.abs() <= config.residual_tol {
            return Ok(mid_eval.into_solution(Status::Converged, iter));
        }

        let is_better = mid_residual.abs() < best.residual.abs();

        if left_residual.signum() == mid_residual.signum() {
            left = mid;
            left_residual = mid_residual;
        } else {
            right = mid;
        }

        if is_better {
            best = mid_eval;
        }
    }

    Ok(best.into_solution(Status::MaxIters, config.max_iters))
}

/// One evaluated candidate: the point, its residual, and the model call.
struct Evaluation<I, O> {
    x: f64,
    residual: f64,
    snapshot: Snapshot<I, O>,
}

impl<I, O> Evaluation<I, O> {
    fn into_solution(self, status: Status, iters: usize) -> Solution<I, O> {
        Solution {
            status,
            x: self.x,
            residual: self.residual,
            snapshot: self.snapshot,
            iters,
        }
    }
}

fn evaluate<M, X, R>(
    model: &M,
    to_input: &X,
    residual: &R,
    x: f64,
) -> Result<Evaluation<M::Input, M::Output>, Error>
where
    M: Model,
    X: Fn(f64) -> M::Input,
    R: Fn(&M::Input, &M::Output) -> f64,
{
    let input = to_input(x);
    let output = model
        .call(&input)
        .map_err(|err| Error::Model(Box::new(err)))?;

    let value = residual(&input, &output);
    if !value.is_finite() {
        return Err(Error::NonFiniteResidual { x, residual: value });
    }

    Ok(Evaluation {
        x,
        residual: value,
        snapshot: Snapshot::new(input, output),
    })
}

/// Validates bracket values and returns them in `left < right` order.
fn validate_bracket(bracket: [f64; 2]) -> Result<(f64, f64), Error> {
    let [left, right] = bracket;

    if !left.is_finite() {
        return Err(Error::NonFiniteBracket { value: left });
    }

    if !right.is_finite() {
        return Err(Error::NonFiniteBracket { value: right });
    }

    #[allow(clippy::float_cmp)]
    if left == right {
        return Err(Error::ZeroWidthBracket { value: left });
    }

    if left < right {
        Ok((left, right))
    } else {
        Ok((right, left))
    }
}
