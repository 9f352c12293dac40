use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use uom::si::{f64::Pressure, pressure::kilopascal};

use crate::InputError;

/// Cost and strength of a construction material.
///
/// `unit_cost` is in currency per m² of footprint and `strength` is the
/// largest sustainable stress in kN/m². Both must be finite and non-negative.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Material {
    pub unit_cost: f64,
    pub strength: f64,
}

/// Snapshot of materials keyed by unique name.
pub type MaterialIndex = BTreeMap<String, Material>;

impl Material {
    /// Creates a material from a unit cost and a strength in kN/m².
    #[must_use]
    pub fn new(unit_cost: f64, strength: f64) -> Self {
        Self {
            unit_cost,
            strength,
        }
    }

    /// Creates a material from a unit cost and a dimensioned strength.
    #[must_use]
    pub fn from_quantities(unit_cost: f64, strength: Pressure) -> Self {
        Self::new(unit_cost, strength.get::<kilopascal>())
    }

    /// Smallest bearing area that keeps the stress from `load` within strength.
    ///
    /// Infinite when the strength is zero.
    #[must_use]
    pub fn required_area(&self, load: f64) -> f64 {
        load / self.strength
    }

    /// Cost of covering `area` with this material.
    #[must_use]
    pub fn cost(&self, area: f64) -> f64 {
        self.unit_cost * area
    }

    /// Strength minus the stress `load` induces over `area`.
    #[must_use]
    pub fn safety_margin(&self, load: f64, area: f64) -> f64 {
        self.strength - load / area
    }

    /// Returns the first property that is negative or not finite.
    pub(crate) fn invalid_property(&self) -> Option<(&'static str, f64)> {
        [("unit cost", self.unit_cost), ("strength", self.strength)]
            .into_iter()
            .find(|&(_, value)| !value.is_finite() || value < 0.0)
    }

    pub(crate) fn validate(&self, name: &str) -> Result<(), InputError> {
        match self.invalid_property() {
            Some((property, value)) => Err(InputError::InvalidMaterial {
                name: name.to_owned(),
                property,
                value,
            }),
            None => Ok(()),
        }
    }
}
