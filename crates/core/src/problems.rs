/// Defines a bounded, optionally constrained minimization problem.
///
/// An optimization problem maps solver variables to a model input, then
/// computes an objective value and a constraint margin from the model input
/// and output. Solvers search for the input that minimizes the objective while
/// keeping the margin non-negative.
///
/// The const generic `N` is the number of solver variables.
/// For example, `N = 1` represents a scalar search.
pub trait OptimizationProblem<const N: usize> {
    type Input;
    type Output;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Maps solver variables (`x`) into a model input.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the input cannot be constructed from `x`.
    fn input(&self, x: &[f64; N]) -> Result<Self::Input, Self::Error>;

    /// Computes the objective value to minimize from model input/output.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the objective cannot be computed.
    fn objective(&self, input: &Self::Input, output: &Self::Output) -> Result<f64, Self::Error>;

    /// Computes the inequality constraint margin from model input/output.
    ///
    /// The point is feasible when the margin is non-negative. Problems with
    /// several inequality constraints return the smallest of their values.
    /// The default is unconstrained and always returns `f64::INFINITY`.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the margin cannot be computed.
    fn margin(&self, _input: &Self::Input, _output: &Self::Output) -> Result<f64, Self::Error> {
        Ok(f64::INFINITY)
    }
}
