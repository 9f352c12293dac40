//! Sizing a single material.
//!
//! For a fixed material the cost `unit_cost × length × width` grows with
//! width at any length, so the cheapest width for a given length is the
//! narrowest one that keeps the stress within strength, clamped to the width
//! bounds. That leaves length as the only search variable. [`size`] runs the
//! bounded golden section search over it; lengths too short for any allowed
//! width to carry the load show up as constraint violations, which the
//! solver ranks below every safe footprint.

use std::convert::Infallible;

use girder_core::{Model, OptimizationProblem};
use girder_solvers::optimization::golden_section::{self, Config, Status};

use crate::{Bounds, Material};

/// Length and width of a rectangular bearing footprint, in metres.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Footprint {
    pub length: f64,
    pub width: f64,
}

impl Footprint {
    /// Area in m².
    #[must_use]
    pub fn area(&self) -> f64 {
        self.length * self.width
    }
}

/// Cost and structural response of a footprint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionResponse {
    pub cost: f64,

    /// Load divided by area, in kN/m².
    pub stress: f64,

    /// Strength minus stress, in kN/m²; non-negative is safe.
    pub safety_margin: f64,
}

/// Evaluates cost and stress of a footprint in one material under a load.
#[derive(Debug, Clone, Copy)]
pub struct SectionModel {
    material: Material,
    max_load: f64,
}

impl SectionModel {
    #[must_use]
    pub fn new(material: Material, max_load: f64) -> Self {
        Self { material, max_load }
    }
}

impl Model for SectionModel {
    type Input = Footprint;
    type Output = SectionResponse;
    type Error = Infallible;

    fn call(&self, footprint: &Footprint) -> Result<SectionResponse, Self::Error> {
        let area = footprint.area();
        Ok(SectionResponse {
            cost: self.material.cost(area),
            stress: self.max_load / area,
            safety_margin: self.material.safety_margin(self.max_load, area),
        })
    }
}

/// Searches length, choosing the narrowest safe width at each length.
#[derive(Debug, Clone, Copy)]
pub struct NarrowestSafeWidth {
    bounds: Bounds,
    required_area: f64,
    strength: f64,
}

impl NarrowestSafeWidth {
    #[must_use]
    pub fn new(material: Material, max_load: f64, bounds: Bounds) -> Self {
        Self {
            bounds,
            required_area: material.required_area(max_load),
            strength: material.strength,
        }
    }

    /// The length range searched.
    #[must_use]
    pub fn bracket(&self) -> [f64; 2] {
        self.bounds.length
    }
}

impl OptimizationProblem<1> for NarrowestSafeWidth {
    type Input = Footprint;
    type Output = SectionResponse;
    type Error = Infallible;

    fn input(&self, x: &[f64; 1]) -> Result<Footprint, Self::Error> {
        let [min_length, max_length] = self.bounds.length;
        let [min_width, max_width] = self.bounds.width;

        let length = x[0].clamp(min_length, max_length);
        let width = (self.required_area / length).clamp(min_width, max_width);
        Ok(Footprint { length, width })
    }

    fn objective(&self, _input: &Footprint, output: &SectionResponse) -> Result<f64, Self::Error> {
        Ok(output.cost)
    }

    /// Safety margin relative to strength, so the feasibility tolerance does
    /// not depend on the strength's magnitude.
    fn margin(&self, _input: &Footprint, output: &SectionResponse) -> Result<f64, Self::Error> {
        if self.strength > 0.0 {
            Ok(output.safety_margin / self.strength)
        } else {
            Ok(output.safety_margin)
        }
    }
}

/// The outcome of sizing one material.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sizing {
    pub footprint: Footprint,
    pub response: SectionResponse,

    /// Final objective reported by the search.
    pub cost: f64,

    /// Safety margin relative to strength, as ranked by the search.
    pub relative_margin: f64,

    pub status: Status,
    pub feasible: bool,
}

impl Sizing {
    /// Returns `true` if the search converged on a safe footprint.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status == Status::Converged && self.feasible
    }
}

/// Finds the cheapest safe footprint for one material within `bounds`.
///
/// # Errors
///
/// Returns an error only if an evaluation fails, which the section model and
/// problem never do; it is kept so the signature follows the solver's.
pub fn size(
    material: Material,
    max_load: f64,
    bounds: Bounds,
    config: &Config,
) -> Result<Sizing, golden_section::Error> {
    let model = SectionModel::new(material, max_load);
    let problem = NarrowestSafeWidth::new(material, max_load, bounds);

    let solution = golden_section::minimize_unobserved(&model, &problem, problem.bracket(), config)?;

    Ok(Sizing {
        footprint: solution.snapshot.input,
        response: solution.snapshot.output,
        cost: solution.objective,
        relative_margin: solution.margin,
        status: solution.status,
        feasible: solution.feasible,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn bounds() -> Bounds {
        Bounds::for_footprint(10.0, 5.0)
    }

    #[test]
    fn model_reports_cost_stress_and_margin() {
        let model = SectionModel::new(Material::new(500.0, 20.0), 100.0);

        let response = model
            .call(&Footprint {
                length: 2.0,
                width: 2.0,
            })
            .unwrap();

        assert_relative_eq!(response.cost, 2000.0);
        assert_relative_eq!(response.stress, 25.0);
        assert_relative_eq!(response.safety_margin, -5.0);
    }

    #[test]
    fn width_follows_required_area_within_bounds() {
        let problem = NarrowestSafeWidth::new(Material::new(500.0, 20.0), 100.0, bounds());

        // 5 m² needed: 2 m long needs 2.5 m wide.
        let footprint = problem.input(&[2.0]).unwrap();
        assert_relative_eq!(footprint.width, 2.5);

        // Long enough that one metre of width suffices.
        let footprint = problem.input(&[8.0]).unwrap();
        assert_relative_eq!(footprint.width, 1.0);

        // Too short even at full width.
        let footprint = problem.input(&[0.5]).unwrap();
        assert_relative_eq!(footprint.length, 1.0);
        assert_relative_eq!(footprint.width, 5.0);
    }

    #[test]
    fn sizes_to_exactly_the_required_area() {
        let material = Material::new(500.0, 20.0);

        let sizing = size(material, 100.0, bounds(), &Config::default()).unwrap();

        assert!(sizing.is_success());
        assert_relative_eq!(sizing.footprint.area(), 5.0, max_relative = 1e-9);
        assert_relative_eq!(sizing.cost, 2500.0, max_relative = 1e-9);
        assert_relative_eq!(sizing.response.safety_margin, 0.0, epsilon = 1e-6);
        assert!(bounds().contains(sizing.footprint.length, sizing.footprint.width));
    }

    #[test]
    fn minimum_footprint_caps_how_small_a_strong_material_gets() {
        // Needs only 0.1 m², but the footprint cannot go below 1 m × 1 m.
        let material = Material::new(100.0, 1000.0);

        let sizing = size(material, 100.0, bounds(), &Config::default()).unwrap();

        assert!(sizing.is_success());
        assert_relative_eq!(sizing.footprint.length, 1.0, epsilon = 1e-9);
        assert_relative_eq!(sizing.footprint.width, 1.0);
        assert_relative_eq!(sizing.cost, 100.0, epsilon = 1e-6);
        assert!(sizing.response.safety_margin > 0.0);
    }

    #[test]
    fn load_beyond_the_largest_footprint_is_infeasible() {
        // Needs 100 m², but at most 50 m² fits.
        let material = Material::new(500.0, 1.0);

        let sizing = size(material, 100.0, bounds(), &Config::default()).unwrap();

        assert!(!sizing.feasible);
        assert!(!sizing.is_success());
        assert_relative_eq!(sizing.footprint.area(), 50.0, max_relative = 1e-9);
    }

    #[test]
    fn zero_strength_is_infeasible() {
        let sizing = size(Material::new(1.0, 0.0), 1.0, bounds(), &Config::default()).unwrap();

        assert!(!sizing.is_success());
        assert!(sizing.response.safety_margin < 0.0);
    }
}
