/// A callable model that maps an input to an output.
///
/// A `Model` is the seam between a sweep (or a solver) and the computation
/// it drives: a shock-wave calculation, a combustor balance, or a stub in a
/// test. Implementations should be deterministic, always producing the same
/// output for a given input.
pub trait Model {
    type Input;
    type Output;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Calls the model with the given input.
    ///
    /// # Errors
    ///
    /// Each model defines its own `Error` type, allowing it to decide what
    /// constitutes a failure within its domain.
    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error>;
}

/// A captured input/output pair from a model call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snapshot<I, O> {
    pub input: I,
    pub output: O,
}

impl<I, O> Snapshot<I, O> {
    /// Creates a new snapshot from an input and the output it produced.
    pub fn new(input: I, output: O) -> Self {
        Self { input, output }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::convert::Infallible;

    struct Doubler;

    impl Model for Doubler {
        type Input = i32;
        type Output = i32;
        type Error = Infallible;

        fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
            Ok(input * 2)
        }
    }

    #[test]
    fn calls_return_outputs() {
        assert_eq!(Doubler.call(&2), Ok(4));
        assert_eq!(Doubler.call(&-7), Ok(-14));
    }

    #[test]
    fn snapshot_keeps_the_pair_together() {
        let input = 5;
        let output = Doubler.call(&input).unwrap();
        let snapshot = Snapshot::new(input, output);

        assert_eq!(snapshot.input, 5);
        assert_eq!(snapshot.output, 10);
    }
}
