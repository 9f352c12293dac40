use std::cmp::Ordering;

use crate::optimization::Evaluation;

/// An evaluated point: position, objective and constraint margin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// The x value.
    pub x: f64,

    /// The objective value at x.
    pub objective: f64,

    /// The constraint margin at x; non-negative when feasible.
    pub margin: f64,
}

impl Point {
    /// Creates a new point.
    #[must_use]
    pub fn new(x: f64, objective: f64, margin: f64) -> Self {
        Self {
            x,
            objective,
            margin,
        }
    }

    /// Creates a point that ranks below every evaluated point.
    #[must_use]
    pub fn worst(x: f64) -> Self {
        Self::new(x, f64::INFINITY, f64::NEG_INFINITY)
    }

    /// Returns how far the margin falls short of zero beyond `margin_tol`.
    ///
    /// Feasible points have zero violation. A `NaN` margin is infinitely
    /// violated.
    #[must_use]
    pub fn violation(&self, margin_tol: f64) -> f64 {
        if self.margin.is_nan() {
            f64::INFINITY
        } else if self.margin >= -margin_tol {
            0.0
        } else {
            -self.margin
        }
    }

    /// Returns `true` if the point satisfies the constraint within `margin_tol`.
    #[must_use]
    pub fn is_feasible(&self, margin_tol: f64) -> bool {
        self.violation(margin_tol) == 0.0
    }

    /// Ranks two points: feasibility first, then objective.
    ///
    /// `Ordering::Less` means `self` is the better point.
    #[must_use]
    pub fn rank(&self, other: &Self, margin_tol: f64) -> Ordering {
        let objective = |p: &Self| {
            if p.objective.is_nan() {
                f64::INFINITY
            } else {
                p.objective
            }
        };

        self.violation(margin_tol)
            .total_cmp(&other.violation(margin_tol))
            .then_with(|| objective(self).total_cmp(&objective(other)))
    }
}

impl<I, O> From<&Evaluation<I, O, 1>> for Point {
    fn from(eval: &Evaluation<I, O, 1>) -> Self {
        Self::new(eval.x[0], eval.objective, eval.margin)
    }
}
