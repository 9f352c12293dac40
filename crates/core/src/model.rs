/// A callable model that maps an input to an output.
///
/// Models hold no solver state. A solver may call the same model many times
/// with different inputs, so `call` takes `&self`.
pub trait Model {
    type Input;
    type Output;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Calls the model with the given input.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the output cannot be computed.
    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error>;
}

/// A captured input/output pair from a model call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snapshot<I, O> {
    pub input: I,
    pub output: O,
}

impl<I, O> Snapshot<I, O> {
    /// Creates a new snapshot from input and output values.
    pub fn new(input: I, output: O) -> Self {
        Self { input, output }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::convert::Infallible;

    struct Area;

    impl Model for Area {
        type Input = (f64, f64);
        type Output = f64;
        type Error = Infallible;

        fn call(&self, &(length, width): &(f64, f64)) -> Result<f64, Self::Error> {
            Ok(length * width)
        }
    }

    #[test]
    fn snapshot_keeps_input_and_output() {
        let input = (2.0, 3.5);
        let output = Area.call(&input).unwrap();

        let snapshot = Snapshot::new(input, output);

        assert_eq!(snapshot.input, (2.0, 3.5));
        assert_eq!(snapshot.output, 7.0);
    }
}
