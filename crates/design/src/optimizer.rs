use girder_core::Observer;
use girder_observers::traits::{CanStopEarly, HasMargin, HasObjective};
use girder_solvers::optimization::golden_section::{self, Config, Status};

use crate::{
    Bounds, DesignError, DesignRequest, DesignResult,
    relaxed::{Choice, MaterialChoice, RelaxedIndex, Relay},
    request::Candidate,
    section::{Footprint, SectionResponse, Sizing, size},
};

/// How the material choice is searched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    /// Size every usable material and keep the cheapest successful one.
    ///
    /// Ties go to the material listed first.
    #[default]
    Enumerate,

    /// Search a continuous candidate index with golden section search.
    ///
    /// The index is rounded to the nearest candidate and clamped into range
    /// whenever it is read. The material the search settles on is the
    /// answer, even when a cheaper one exists elsewhere in the list.
    RelaxedIndex,
}

/// Configuration for the [`Optimizer`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct OptimizerConfig {
    /// Settings for every golden section search the optimizer runs.
    pub search: Config,

    pub strategy: Strategy,
}

/// Why a sized material was not accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// No footprint within bounds carries the load.
    Infeasible,

    /// The search stopped before converging.
    NotConverged,
}

/// Events emitted once per material the optimizer sizes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DesignEvent<'a> {
    /// The material has a safe, converged footprint.
    Sized {
        material: &'a str,
        footprint: Footprint,
        response: SectionResponse,
    },

    /// The material's best footprint was not accepted.
    Rejected {
        material: &'a str,
        footprint: Footprint,
        response: SectionResponse,
        reason: Rejection,
    },
}

impl<'a> DesignEvent<'a> {
    pub(crate) fn from_sizing(material: &'a str, sizing: &Sizing) -> Self {
        let Sizing {
            footprint,
            response,
            status,
            ..
        } = *sizing;

        if sizing.is_success() {
            return Self::Sized {
                material,
                footprint,
                response,
            };
        }

        let reason = match status {
            Status::Converged => Rejection::Infeasible,
            Status::MaxIters | Status::StoppedByObserver => Rejection::NotConverged,
        };
        Self::Rejected {
            material,
            footprint,
            response,
            reason,
        }
    }

    /// Name of the material the event is about.
    #[must_use]
    pub fn material(&self) -> &'a str {
        match self {
            Self::Sized { material, .. } | Self::Rejected { material, .. } => *material,
        }
    }

    #[must_use]
    pub fn footprint(&self) -> Footprint {
        match self {
            Self::Sized { footprint, .. } | Self::Rejected { footprint, .. } => *footprint,
        }
    }

    #[must_use]
    pub fn response(&self) -> SectionResponse {
        match self {
            Self::Sized { response, .. } | Self::Rejected { response, .. } => *response,
        }
    }
}

/// Actions a design observer can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DesignAction {
    /// Stop considering further materials.
    ///
    /// The cheapest successful design so far is returned, or
    /// [`DesignError::Convergence`] if there is none.
    StopEarly,
}

impl HasObjective for DesignEvent<'_> {
    fn objective(&self) -> f64 {
        self.response().cost
    }
}

impl HasMargin for DesignEvent<'_> {
    fn margin(&self) -> f64 {
        self.response().safety_margin
    }
}

impl CanStopEarly for DesignAction {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

/// Chooses and sizes the least-cost safe material for a request.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Optimizer {
    config: OptimizerConfig,
}

impl Optimizer {
    #[must_use]
    pub fn new(config: OptimizerConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &OptimizerConfig {
        &self.config
    }

    /// Finds the optimal design for `request`.
    ///
    /// # Errors
    ///
    /// Returns [`DesignError::Input`] if the request is rejected before
    /// searching, and [`DesignError::Convergence`] if no safe converged
    /// design is found.
    pub fn optimize(&self, request: &DesignRequest) -> Result<DesignResult, DesignError> {
        self.optimize_observed(request, ())
    }

    /// Finds the optimal design, reporting each sized material to `observer`.
    ///
    /// With [`Strategy::RelaxedIndex`] the first material sized by the outer
    /// search is not reported, as it has nothing to be compared with yet.
    ///
    /// # Errors
    ///
    /// See [`Optimizer::optimize`].
    pub fn optimize_observed<Obs>(
        &self,
        request: &DesignRequest,
        mut observer: Obs,
    ) -> Result<DesignResult, DesignError>
    where
        Obs: for<'a> Observer<DesignEvent<'a>, DesignAction>,
    {
        let candidates = request.validate()?;
        let bounds = request.bounds();

        match self.config.strategy {
            Strategy::Enumerate => {
                self.enumerate(&candidates, request.max_load, bounds, &mut observer)
            }
            Strategy::RelaxedIndex => {
                self.relaxed(&candidates, request.max_load, bounds, &mut observer)
            }
        }
    }

    fn enumerate<Obs>(
        &self,
        candidates: &[Candidate<'_>],
        max_load: f64,
        bounds: Bounds,
        observer: &mut Obs,
    ) -> Result<DesignResult, DesignError>
    where
        Obs: for<'a> Observer<DesignEvent<'a>, DesignAction>,
    {
        let mut best: Option<(&str, Sizing)> = None;

        for candidate in candidates {
            let sizing = size(candidate.material, max_load, bounds, &self.config.search)
                .map_err(|_| DesignError::Convergence)?;

            let action = observer.observe(&DesignEvent::from_sizing(candidate.name, &sizing));

            if sizing.is_success() && best.is_none_or(|(_, cheapest)| sizing.cost < cheapest.cost)
            {
                best = Some((candidate.name, sizing));
            }

            if let Some(DesignAction::StopEarly) = action {
                break;
            }
        }

        best.map(|(name, sizing)| design_result(name, &sizing))
            .ok_or(DesignError::Convergence)
    }

    fn relaxed<Obs>(
        &self,
        candidates: &[Candidate<'_>],
        max_load: f64,
        bounds: Bounds,
        observer: &mut Obs,
    ) -> Result<DesignResult, DesignError>
    where
        Obs: for<'a> Observer<DesignEvent<'a>, DesignAction>,
    {
        let config = &self.config.search;
        let model = MaterialChoice::new(candidates, max_load, bounds, config);
        let problem = RelaxedIndex::new(candidates.len());

        let solution = golden_section::minimize(
            &model,
            &problem,
            problem.bracket(),
            config,
            Relay::new(candidates, observer),
        )
        .map_err(|_| DesignError::Convergence)?;

        let Choice { index, sizing } = solution.snapshot.output;
        let settled = match solution.status {
            Status::Converged => solution.feasible,
            Status::StoppedByObserver => true,
            Status::MaxIters => false,
        };

        if settled && sizing.is_success() {
            Ok(design_result(candidates[index].name, &sizing))
        } else {
            Err(DesignError::Convergence)
        }
    }
}

/// Finds the optimal design for `request` with the default configuration.
///
/// # Errors
///
/// See [`Optimizer::optimize`].
pub fn optimize(request: &DesignRequest) -> Result<DesignResult, DesignError> {
    Optimizer::default().optimize(request)
}

fn design_result(material: &str, sizing: &Sizing) -> DesignResult {
    DesignResult {
        material: material.to_owned(),
        length: sizing.footprint.length,
        width: sizing.footprint.width,
        cost: sizing.cost,
        cost_history: vec![sizing.cost],
        safety_margin_history: vec![sizing.response.safety_margin],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use girder_observers::Trace;

    use crate::{InputError, Material, MaterialIndex};

    fn index() -> MaterialIndex {
        MaterialIndex::from([
            ("A".to_owned(), Material::new(1000.0, 50.0)),
            ("B".to_owned(), Material::new(500.0, 20.0)),
        ])
    }

    fn request(candidates: &[&str]) -> DesignRequest {
        DesignRequest::new(10.0, 5.0, 100.0, candidates.iter().copied(), index())
    }

    fn relaxed() -> Optimizer {
        Optimizer::new(OptimizerConfig {
            strategy: Strategy::RelaxedIndex,
            ..OptimizerConfig::default()
        })
    }

    #[test]
    fn picks_the_cheapest_material() {
        let result = optimize(&request(&["A", "B"])).unwrap();

        assert_eq!(result.material, "A");
        assert_relative_eq!(result.cost, 2000.0, max_relative = 1e-9);
        assert_relative_eq!(result.area(), 2.0, max_relative = 1e-9);
        assert_eq!(result.cost_history, vec![result.cost]);
        assert_relative_eq!(result.safety_margin_history[0], 0.0, epsilon = 1e-6);
    }

    #[test]
    fn ties_go_to_the_first_candidate() {
        let materials = MaterialIndex::from([
            ("X".to_owned(), Material::new(300.0, 40.0)),
            ("Y".to_owned(), Material::new(300.0, 40.0)),
        ]);
        let request = DesignRequest::new(10.0, 5.0, 100.0, ["Y", "X"], materials);

        assert_eq!(optimize(&request).unwrap().material, "Y");
    }

    #[test]
    fn infeasible_materials_are_skipped() {
        let mut materials = index();
        materials.insert("paper".to_owned(), Material::new(1.0, 0.5));
        let request = DesignRequest::new(10.0, 5.0, 100.0, ["paper", "B"], materials);

        assert_eq!(optimize(&request).unwrap().material, "B");
    }

    #[test]
    fn no_feasible_material_is_a_convergence_error() {
        let request = DesignRequest::new(10.0, 5.0, 10_000.0, ["A", "B"], index());

        let error = optimize(&request).unwrap_err();

        assert_eq!(error, DesignError::Convergence);
        assert_eq!(error.reason(), "optimization failed");
    }

    #[test]
    fn iteration_limit_is_a_convergence_error() {
        let search = Config::new(3, 0.0, 0.0, 1e-9).unwrap();
        let optimizer = Optimizer::new(OptimizerConfig {
            search,
            ..OptimizerConfig::default()
        });

        assert_eq!(
            optimizer.optimize(&request(&["A", "B"])),
            Err(DesignError::Convergence)
        );
    }

    #[test]
    fn input_errors_come_first() {
        assert_eq!(
            optimize(&request(&["ghost"])),
            Err(DesignError::Input(InputError::NoUsableMaterials))
        );
    }

    #[test]
    fn observer_sees_every_material_in_order() {
        let mut seen = Vec::new();
        let observer = |event: &DesignEvent<'_>| -> Option<DesignAction> {
            seen.push((event.material().to_owned(), matches!(event, DesignEvent::Sized { .. })));
            None
        };

        Optimizer::default()
            .optimize_observed(&request(&["B", "A"]), observer)
            .unwrap();

        assert_eq!(seen, vec![("B".to_owned(), true), ("A".to_owned(), true)]);
    }

    #[test]
    fn rejected_events_carry_the_reason() {
        let request = DesignRequest::new(10.0, 5.0, 10_000.0, ["A"], index());
        let mut reasons = Vec::new();
        let observer = |event: &DesignEvent<'_>| -> Option<DesignAction> {
            if let DesignEvent::Rejected { reason, .. } = event {
                reasons.push(*reason);
            }
            None
        };

        let _ = Optimizer::default().optimize_observed(&request, observer);

        assert_eq!(reasons, vec![Rejection::Infeasible]);
    }

    #[test]
    fn stopping_early_keeps_the_best_so_far() {
        let observer = |_: &DesignEvent<'_>| Some(DesignAction::StopEarly);

        let result = Optimizer::default()
            .optimize_observed(&request(&["B", "A"]), observer)
            .unwrap();

        assert_eq!(result.material, "B");
        assert_relative_eq!(result.cost, 2500.0, max_relative = 1e-9);
    }

    #[test]
    fn trace_records_cost_and_margin_per_material() {
        let mut trace = Trace::new();

        Optimizer::default()
            .optimize_observed(&request(&["A", "B"]), &mut trace)
            .unwrap();

        let points = trace.objective_vs_margin();
        assert_eq!(points.len(), 2);
        assert_relative_eq!(points[0][1], 2000.0, max_relative = 1e-9);
        assert_relative_eq!(points[1][1], 2500.0, max_relative = 1e-9);
    }

    #[test]
    fn relaxed_index_settles_on_a_feasible_candidate() {
        let result = relaxed().optimize(&request(&["A", "B"])).unwrap();

        assert!(["A", "B"].contains(&result.material.as_str()));
        assert!(result.safety_margin().unwrap() >= -1e-6);
        assert_eq!(result.cost_history.len(), 1);
    }

    #[test]
    fn relaxed_index_with_one_candidate_sizes_it() {
        let result = relaxed().optimize(&request(&["B"])).unwrap();

        assert_eq!(result.material, "B");
        assert_relative_eq!(result.cost, 2500.0, max_relative = 1e-9);
    }

    #[test]
    fn relaxed_index_steers_away_from_infeasible_candidates() {
        let mut materials = index();
        materials.insert("paper".to_owned(), Material::new(1.0, 0.5));
        let request = DesignRequest::new(10.0, 5.0, 100.0, ["paper", "B"], materials);

        let result = relaxed().optimize(&request).unwrap();

        assert_eq!(result.material, "B");
    }
}
