//! An observer that records every event it sees.

use girder_core::Observer;

use crate::traits::{HasMargin, HasObjective};

/// One recorded event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    /// Objective at the event, `NaN` for failed evaluations.
    pub objective: f64,

    /// Constraint margin at the event, `NaN` for failed evaluations.
    pub margin: f64,
}

impl Sample {
    /// Returns `true` if this sample came from a successful evaluation.
    #[must_use]
    pub fn is_evaluated(&self) -> bool {
        !self.objective.is_nan() && !self.margin.is_nan()
    }
}

/// Records the objective and margin of each observed event, in order.
///
/// `Trace` never steers the search. Pass `&mut trace` to keep ownership and
/// read the samples once the solver returns:
///
/// ```rust
/// use std::convert::Infallible;
///
/// use girder_core::{Model, OptimizationProblem};
/// use girder_observers::Trace;
/// use girder_solvers::optimization::golden_section::{Config, minimize};
///
/// struct Parabola;
///
/// impl Model for Parabola {
///     type Input = f64;
///     type Output = f64;
///     type Error = Infallible;
///
///     fn call(&self, x: &f64) -> Result<f64, Infallible> {
///         Ok((x - 1.0).powi(2))
///     }
/// }
///
/// struct Lowest;
///
/// impl OptimizationProblem<1> for Lowest {
///     type Input = f64;
///     type Output = f64;
///     type Error = Infallible;
///
///     fn input(&self, x: &[f64; 1]) -> Result<f64, Infallible> {
///         Ok(x[0])
///     }
///
///     fn objective(&self, _: &f64, y: &f64) -> Result<f64, Infallible> {
///         Ok(*y)
///     }
/// }
///
/// let mut trace = Trace::new();
/// minimize(&Parabola, &Lowest, [0.0, 3.0], &Config::default(), &mut trace).unwrap();
/// assert!(!trace.is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Trace {
    samples: Vec<Sample>,
}

impl Trace {
    /// Creates an empty trace.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one event.
    pub fn record<E: HasObjective + HasMargin>(&mut self, event: &E) {
        self.samples.push(Sample {
            objective: event.objective(),
            margin: event.margin(),
        });
    }

    /// Returns the recorded samples in observation order.
    #[must_use]
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    /// Returns the number of recorded samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Returns `true` if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Returns `[margin, objective]` pairs for successful evaluations.
    ///
    /// Margin on the x-axis and objective on the y-axis, ready to plot cost
    /// against safety margin.
    #[must_use]
    pub fn objective_vs_margin(&self) -> Vec<[f64; 2]> {
        self.samples
            .iter()
            .filter(|sample| sample.is_evaluated())
            .map(|sample| [sample.margin, sample.objective])
            .collect()
    }
}

impl<E, A> Observer<E, A> for Trace
where
    E: HasObjective + HasMargin,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self.record(event);
        None
    }
}

/// Allows `&mut Trace` to be passed to solvers that take an observer by value.
impl<E, A> Observer<E, A> for &mut Trace
where
    E: HasObjective + HasMargin,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        (**self).observe(event)
    }
}
