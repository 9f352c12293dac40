//! Material choice as a continuous search variable.
//!
//! The outer golden section search runs over `x ∈ [0, k − 1]`; every
//! evaluation rounds `x` to the nearest candidate index and sizes that
//! material with the inner search. The settled bucket is not necessarily the
//! cheapest material, since cost is not unimodal in the index.

use std::convert::Infallible;

use girder_core::{Model, Observer, OptimizationProblem};
use girder_solvers::optimization::golden_section::{self, Action, Config, Event, Status};

use crate::{
    Bounds, DesignAction, DesignEvent,
    request::Candidate,
    section::{Sizing, size},
};

/// A candidate index together with its sizing.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Choice {
    pub(crate) index: usize,
    pub(crate) sizing: Sizing,
}

/// Sizes the candidate at a given index.
pub(crate) struct MaterialChoice<'c> {
    candidates: &'c [Candidate<'c>],
    max_load: f64,
    bounds: Bounds,
    config: &'c Config,
}

impl<'c> MaterialChoice<'c> {
    pub(crate) fn new(
        candidates: &'c [Candidate<'c>],
        max_load: f64,
        bounds: Bounds,
        config: &'c Config,
    ) -> Self {
        Self {
            candidates,
            max_load,
            bounds,
            config,
        }
    }
}

impl Model for MaterialChoice<'_> {
    type Input = usize;
    type Output = Choice;
    type Error = golden_section::Error;

    fn call(&self, &index: &usize) -> Result<Choice, Self::Error> {
        let index = index.min(self.candidates.len().saturating_sub(1));
        let material = self.candidates[index].material;
        let sizing = size(material, self.max_load, self.bounds, self.config)?;
        Ok(Choice { index, sizing })
    }
}

/// Minimizes cost over a relaxed candidate index.
#[derive(Debug, Clone, Copy)]
pub(crate) struct RelaxedIndex {
    count: usize,
}

impl RelaxedIndex {
    pub(crate) fn new(count: usize) -> Self {
        Self { count }
    }

    /// The index range `[0, k − 1]` as a search bracket.
    #[allow(clippy::cast_precision_loss)]
    pub(crate) fn bracket(&self) -> [f64; 2] {
        [0.0, self.count.saturating_sub(1) as f64]
    }

    /// Rounds to the nearest index and clamps into range; `NaN` maps to 0.
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    pub(crate) fn index(&self, x: f64) -> usize {
        if x.is_nan() {
            return 0;
        }
        let last = self.count.saturating_sub(1) as f64;
        x.round().clamp(0.0, last) as usize
    }
}

impl OptimizationProblem<1> for RelaxedIndex {
    type Input = usize;
    type Output = Choice;
    type Error = Infallible;

    fn input(&self, x: &[f64; 1]) -> Result<usize, Self::Error> {
        Ok(self.index(x[0]))
    }

    fn objective(&self, _index: &usize, choice: &Choice) -> Result<f64, Self::Error> {
        Ok(choice.sizing.cost)
    }

    /// An unconverged sizing counts as infinitely violated.
    fn margin(&self, _index: &usize, choice: &Choice) -> Result<f64, Self::Error> {
        Ok(match choice.sizing.status {
            Status::Converged => choice.sizing.relative_margin,
            Status::MaxIters | Status::StoppedByObserver => f64::NEG_INFINITY,
        })
    }
}

/// Forwards outer search events to a design observer.
pub(crate) struct Relay<'o, 'c, Obs> {
    candidates: &'c [Candidate<'c>],
    observer: &'o mut Obs,
}

impl<'o, 'c, Obs> Relay<'o, 'c, Obs> {
    pub(crate) fn new(candidates: &'c [Candidate<'c>], observer: &'o mut Obs) -> Self {
        Self {
            candidates,
            observer,
        }
    }
}

impl<'a, 'm, Obs> Observer<Event<'a, MaterialChoice<'m>, RelaxedIndex>, Action>
    for Relay<'_, '_, Obs>
where
    Obs: for<'e> Observer<DesignEvent<'e>, DesignAction>,
{
    fn observe(&mut self, event: &Event<'a, MaterialChoice<'m>, RelaxedIndex>) -> Option<Action> {
        let Event::Evaluated { output, .. } = event else {
            return None;
        };
        let name = self.candidates[output.index].name;
        match self.observer.observe(&DesignEvent::from_sizing(name, &output.sizing))? {
            DesignAction::StopEarly => Some(Action::StopEarly),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::Material;

    #[test]
    fn index_rounds_and_clamps() {
        let problem = RelaxedIndex::new(3);

        assert_eq!(problem.index(0.49), 0);
        assert_eq!(problem.index(0.5), 1);
        assert_eq!(problem.index(1.7), 2);
        assert_eq!(problem.index(-4.0), 0);
        assert_eq!(problem.index(9.0), 2);
        assert_eq!(problem.index(f64::NAN), 0);
        assert_eq!(problem.bracket(), [0.0, 2.0]);
    }

    #[test]
    fn single_candidate_has_a_degenerate_bracket() {
        let problem = RelaxedIndex::new(1);

        assert_eq!(problem.bracket(), [0.0, 0.0]);
        assert_eq!(problem.index(0.3), 0);
    }

    #[test]
    fn model_sizes_the_indexed_candidate() {
        let candidates = [
            Candidate {
                name: "A",
                material: Material::new(1000.0, 50.0),
            },
            Candidate {
                name: "B",
                material: Material::new(500.0, 20.0),
            },
        ];
        let config = Config::default();
        let model = MaterialChoice::new(&candidates, 100.0, Bounds::for_footprint(10.0, 5.0), &config);

        let choice = model.call(&1).unwrap();
        let clamped = model.call(&7).unwrap();

        assert_eq!(clamped.index, 1);

        assert_eq!(choice.index, 1);
        assert!(choice.sizing.is_success());
        assert!((choice.sizing.cost - 2500.0).abs() < 1e-6);
    }
}
