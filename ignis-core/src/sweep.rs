//! Sweeping a scalar parameter through a model.
//!
//! A sweep iterates an independent variable over a [`SweepRange`], calls a
//! [`Model`] once per point, and collects the outputs into a [`Sweep`] whose
//! entries stay index-aligned with the swept values. Iteration is strictly
//! sequential, and the first model error aborts the sweep with no partial
//! result.

use thiserror::Error;

use crate::model::Model;

/// Errors that can occur when constructing a [`SweepRange`].
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum SweepError {
    /// One of the range bounds is NaN or infinite.
    #[error("range bound {value} is not finite")]
    NonFiniteBound { value: f64 },

    /// The step is not finite and strictly positive.
    #[error("step must be finite and positive, got {step}")]
    InvalidStep { step: f64 },

    /// The range runs backwards.
    #[error("start {start} must not exceed stop {stop}")]
    Descending { start: f64, stop: f64 },
}

/// A half-open range `[start, stop)` traversed with a fixed positive step.
///
/// The swept values are `start + i * step` for `i` in `0..len()`. A range
/// with `start == stop` is empty, which is valid: sweeping it produces no
/// entries rather than an error.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepRange {
    start: f64,
    stop: f64,
    step: f64,
}

impl SweepRange {
    /// Creates a range from `start` (inclusive) to `stop` (exclusive).
    ///
    /// # Errors
    ///
    /// Returns a [`SweepError`] if a bound is non-finite, the step is not
    /// finite and positive, or `start > stop`.
    pub fn new(start: f64, stop: f64, step: f64) -> Result<Self, SweepError> {
        for value in [start, stop] {
            if !value.is_finite() {
                return Err(SweepError::NonFiniteBound { value });
            }
        }

        if !step.is_finite() || step <= 0.0 {
            return Err(SweepError::InvalidStep { step });
        }

        if start > stop {
            return Err(SweepError::Descending { start, stop });
        }

        Ok(Self { start, stop, step })
    }

    #[must_use]
    pub fn start(&self) -> f64 {
        self.start
    }

    #[must_use]
    pub fn stop(&self) -> f64 {
        self.stop
    }

    #[must_use]
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Returns the number of points in the range.
    ///
    /// This is `(stop - start) / step` rounded up, except that a quotient
    /// within floating-point noise of a whole number counts as that whole
    /// number, so ranges like `(0.6, 1.6, 0.01)` contain exactly 100 points
    /// rather than picking up a spurious final point near `stop`.
    #[must_use]
    pub fn len(&self) -> usize {
        let span = self.stop - self.start;
        if span <= 0.0 {
            return 0;
        }

        let quotient = span / self.step;
        let nearest = quotient.round();
        let tolerance = 4.0 * f64::EPSILON * quotient.max(1.0);

        if (quotient - nearest).abs() <= tolerance {
            nearest as usize
        } else {
            quotient.ceil() as usize
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns an iterator over the swept values, in order.
    pub fn values(&self) -> impl Iterator<Item = f64> + use<> {
        let start = self.start;
        let step = self.step;
        (0..self.len()).map(move |i| start + i as f64 * step)
    }
}

/// The outcome of one sweep: swept values and their model outputs.
///
/// Entries are appended once per iteration while the sweep runs and never
/// mutated afterwards. Index `i` of every extracted series corresponds to
/// the `i`-th swept value.
#[derive(Debug, Clone, PartialEq)]
pub struct Sweep<O> {
    values: Vec<f64>,
    outputs: Vec<O>,
}

impl<O> Sweep<O> {
    /// The swept values, in iteration order.
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// The model outputs, index-aligned with [`values`](Self::values).
    #[must_use]
    pub fn outputs(&self) -> &[O] {
        &self.outputs
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Extracts one scalar per output as plot-ready `[x, y]` pairs.
    #[must_use]
    pub fn series(&self, mut extract: impl FnMut(&O) -> f64) -> Vec<[f64; 2]> {
        self.values
            .iter()
            .zip(&self.outputs)
            .map(|(&value, output)| [value, extract(output)])
            .collect()
    }
}

/// Runs a model once per point of the range and collects the outputs.
///
/// `to_input` builds the model input from each swept value; everything else
/// about the input is up to the caller (fixed pressure, composition, and so
/// on). Calls are sequential and blocking.
///
/// # Errors
///
/// The first model error aborts the sweep and is returned as-is. There is no
/// retry and no partial result.
pub fn run<M, F>(range: &SweepRange, model: &M, to_input: F) -> Result<Sweep<M::Output>, M::Error>
where
    M: Model,
    F: Fn(f64) -> M::Input,
{
    let mut values = Vec::with_capacity(range.len());
    let mut outputs = Vec::with_capacity(range.len());

    for value in range.values() {
        let input = to_input(value);
        let output = model.call(&input)?;

        values.push(value);
        outputs.push(output);
    }

    Ok(Sweep { values, outputs })
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::convert::Infallible;

    use approx::assert_relative_eq;
    use thiserror::Error;

    /// Stub that scales its input, standing in for a real solver.
    struct Scaler {
        factor: f64,
    }

    impl Model for Scaler {
        type Input = f64;
        type Output = f64;
        type Error = Infallible;

        fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
            Ok(input * self.factor)
        }
    }

    /// Stub that always reports the same energy-release rate.
    struct ConstantRate;

    impl Model for ConstantRate {
        type Input = f64;
        type Output = f64;
        type Error = Infallible;

        fn call(&self, _input: &Self::Input) -> Result<Self::Output, Self::Error> {
            Ok(1.0)
        }
    }

    #[derive(Debug, Error, PartialEq)]
    #[error("solver rejected input {0}")]
    struct Rejected(f64);

    /// Stub that fails for inputs at or above a threshold.
    struct FailsAbove {
        threshold: f64,
    }

    impl Model for FailsAbove {
        type Input = f64;
        type Output = f64;
        type Error = Rejected;

        fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
            if *input >= self.threshold {
                Err(Rejected(*input))
            } else {
                Ok(*input)
            }
        }
    }

    #[test]
    fn rejects_invalid_ranges() {
        assert!(matches!(
            SweepRange::new(f64::NAN, 1.0, 0.1),
            Err(SweepError::NonFiniteBound { .. })
        ));
        assert!(matches!(
            SweepRange::new(0.0, f64::INFINITY, 0.1),
            Err(SweepError::NonFiniteBound { .. })
        ));
        assert!(matches!(
            SweepRange::new(0.0, 1.0, 0.0),
            Err(SweepError::InvalidStep { .. })
        ));
        assert!(matches!(
            SweepRange::new(0.0, 1.0, -0.5),
            Err(SweepError::InvalidStep { .. })
        ));
        assert!(matches!(
            SweepRange::new(2.0, 1.0, 0.1),
            Err(SweepError::Descending { .. })
        ));
    }

    #[test]
    fn empty_range_is_valid_and_sweeps_to_nothing() {
        let range = SweepRange::new(300.0, 300.0, 10.0).unwrap();
        assert!(range.is_empty());

        let sweep = run(&range, &ConstantRate, |v| v).unwrap();
        assert!(sweep.is_empty());
        assert!(sweep.values().is_empty());
    }

    #[test]
    fn temperature_range_has_expected_points() {
        let range = SweepRange::new(300.0, 1400.0, 10.0).unwrap();
        assert_eq!(range.len(), 110);

        let values: Vec<f64> = range.values().collect();
        assert_relative_eq!(values[0], 300.0);
        assert_relative_eq!(values[109], 1390.0);
    }

    #[test]
    fn partial_final_step_still_yields_a_point() {
        let range = SweepRange::new(0.0, 1.0, 0.3).unwrap();
        assert_eq!(range.len(), 4);

        let values: Vec<f64> = range.values().collect();
        assert_relative_eq!(values[3], 0.9);
    }

    #[test]
    fn temperature_sweep_matches_stub_solver() {
        let range = SweepRange::new(300.0, 1400.0, 10.0).unwrap();
        let solver = Scaler { factor: 1.1 };

        let sweep = run(&range, &solver, |v| v).unwrap();
        assert_eq!(sweep.len(), 110);
        assert_relative_eq!(sweep.outputs()[0], 330.0);
        assert_relative_eq!(sweep.outputs()[109], 1529.0);
    }

    #[test]
    fn equivalence_ratio_sweep_has_exactly_100_points() {
        let range = SweepRange::new(0.6, 1.6, 0.01).unwrap();
        assert_eq!(range.len(), 100);

        let sweep = run(&range, &ConstantRate, |v| v).unwrap();
        assert_eq!(sweep.len(), 100);
        assert!(sweep.outputs().iter().all(|&rate| rate == 1.0));
    }

    #[test]
    fn series_stay_index_aligned() {
        let range = SweepRange::new(1.0, 5.0, 1.0).unwrap();
        let solver = Scaler { factor: 3.0 };

        let sweep = run(&range, &solver, |v| v).unwrap();
        let series = sweep.series(|&out| out);

        assert_eq!(series.len(), sweep.len());
        for (i, [x, y]) in series.iter().enumerate() {
            assert_relative_eq!(*x, sweep.values()[i]);
            assert_relative_eq!(*y, 3.0 * sweep.values()[i]);
        }
    }

    #[test]
    fn identical_inputs_give_identical_sweeps() {
        let range = SweepRange::new(0.6, 1.6, 0.01).unwrap();
        let solver = Scaler { factor: 2.5 };

        let first = run(&range, &solver, |v| v).unwrap();
        let second = run(&range, &solver, |v| v).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn model_failure_aborts_the_sweep() {
        let range = SweepRange::new(0.0, 10.0, 1.0).unwrap();
        let solver = FailsAbove { threshold: 4.0 };

        let result = run(&range, &solver, |v| v);
        assert_eq!(result.unwrap_err(), Rejected(4.0));
    }
}
