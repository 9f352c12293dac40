use thiserror::Error;

use girder_core::{Model, OptimizationProblem, Snapshot};

/// The result of evaluating an optimization problem at a given `x`.
#[derive(Debug, Clone)]
pub struct Evaluation<I, O, const N: usize> {
    pub x: [f64; N],

    pub objective: f64,

    /// Constraint margin; non-negative when the point is feasible.
    pub margin: f64,

    pub snapshot: Snapshot<I, O>,
}

/// Errors that can occur when evaluating an optimization problem.
#[derive(Debug, Error)]
pub enum EvalError<ME, PE> {
    /// The model call failed.
    #[error("model call failed")]
    Model(#[source] ME),

    /// Failed to construct input, or to compute the objective or margin.
    #[error("problem error")]
    Problem(#[source] PE),
}

/// Type alias for the result of [`evaluate`].
pub type EvaluateResult<M, P, const N: usize> = Result<
    Evaluation<<M as Model>::Input, <M as Model>::Output, N>,
    EvalError<<M as Model>::Error, <P as OptimizationProblem<N>>::Error>,
>;

/// Evaluates the model in the context of an optimization problem.
///
/// Maps `x` to a model input, calls the model, then computes the objective
/// and the constraint margin from the input and output.
///
/// # Errors
///
/// Returns an error if input mapping, the model call, or the objective or
/// margin computation fails.
pub fn evaluate<M, P, const N: usize>(
    model: &M,
    problem: &P,
    x: [f64; N],
) -> EvaluateResult<M, P, N>
where
    M: Model,
    P: OptimizationProblem<N, Input = M::Input, Output = M::Output>,
{
    let input = problem.input(&x).map_err(EvalError::Problem)?;
    let output = model.call(&input).map_err(EvalError::Model)?;
    let objective = problem
        .objective(&input, &output)
        .map_err(EvalError::Problem)?;
    let margin = problem.margin(&input, &output).map_err(EvalError::Problem)?;

    Ok(Evaluation {
        x,
        objective,
        margin,
        snapshot: Snapshot::new(input, output),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::convert::Infallible;

    use approx::assert_relative_eq;
    use thiserror::Error;

    /// Load-bearing plate: output is the stress for a given area.
    struct Plate {
        load: f64,
    }

    #[derive(Debug, Error)]
    #[error("area must be positive (received {0})")]
    struct AreaError(f64);

    impl Model for Plate {
        type Input = f64;
        type Output = f64;
        type Error = AreaError;

        fn call(&self, area: &f64) -> Result<f64, Self::Error> {
            if *area <= 0.0 {
                return Err(AreaError(*area));
            }
            Ok(self.load / area)
        }
    }

    /// Minimize area subject to `strength - stress >= 0`.
    struct SmallestSafeArea {
        strength: f64,
    }

    impl OptimizationProblem<1> for SmallestSafeArea {
        type Input = f64;
        type Output = f64;
        type Error = Infallible;

        fn input(&self, x: &[f64; 1]) -> Result<f64, Self::Error> {
            Ok(x[0])
        }

        fn objective(&self, area: &f64, _stress: &f64) -> Result<f64, Self::Error> {
            Ok(*area)
        }

        fn margin(&self, _area: &f64, stress: &f64) -> Result<f64, Self::Error> {
            Ok(self.strength - stress)
        }
    }

    #[test]
    fn evaluation_carries_objective_and_margin() {
        let model = Plate { load: 100.0 };
        let problem = SmallestSafeArea { strength: 20.0 };

        let eval = evaluate(&model, &problem, [4.0]).unwrap();

        assert_relative_eq!(eval.objective, 4.0);
        assert_relative_eq!(eval.margin, -5.0);
        assert_relative_eq!(eval.snapshot.output, 25.0);
    }

    #[test]
    fn model_failure_is_reported() {
        let model = Plate { load: 100.0 };
        let problem = SmallestSafeArea { strength: 20.0 };

        let result = evaluate(&model, &problem, [0.0]);

        assert!(matches!(result, Err(EvalError::Model(AreaError(_)))));
    }
}
