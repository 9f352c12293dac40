use serde::{Deserialize, Serialize};
use uom::si::{
    f64::{Force, Length},
    force::kilonewton,
    length::meter,
};

use crate::{InputError, Material, MaterialIndex};

/// A design problem: nominal footprint, load and candidate materials.
///
/// Lengths are in metres and `max_load` in kN. `candidates` lists material
/// names in the order they should be considered; names missing from
/// `materials` are ignored, as are repeats of a name already listed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignRequest {
    pub length: f64,
    pub width: f64,
    pub max_load: f64,
    pub candidates: Vec<String>,
    pub materials: MaterialIndex,
}

/// Box bounds on the footprint searched by the optimizer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    /// `[min, max]` length in metres.
    pub length: [f64; 2],

    /// `[min, max]` width in metres.
    pub width: [f64; 2],
}

/// A usable candidate: a name present in the index, with its properties.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Candidate<'a> {
    pub(crate) name: &'a str,
    pub(crate) material: Material,
}

impl DesignRequest {
    /// Creates a request from plain numbers (metres and kN).
    pub fn new<I, S>(
        length: f64,
        width: f64,
        max_load: f64,
        candidates: I,
        materials: MaterialIndex,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            length,
            width,
            max_load,
            candidates: candidates.into_iter().map(Into::into).collect(),
            materials,
        }
    }

    /// Creates a request from dimensioned quantities.
    pub fn from_quantities<I, S>(
        length: Length,
        width: Length,
        max_load: Force,
        candidates: I,
        materials: MaterialIndex,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(
            length.get::<meter>(),
            width.get::<meter>(),
            max_load.get::<kilonewton>(),
            candidates,
            materials,
        )
    }

    /// Returns the search bounds for this request.
    ///
    /// See [`Bounds::for_footprint`] for how requested sizes below the minimum
    /// dimension are handled.
    #[must_use]
    pub fn bounds(&self) -> Bounds {
        Bounds::for_footprint(self.length, self.width)
    }

    /// Returns the names of usable candidates, in request order.
    #[must_use]
    pub fn usable_names(&self) -> Vec<&str> {
        self.usable().map(|candidate| candidate.name).collect()
    }

    /// Checks the request and returns its usable candidates.
    pub(crate) fn validate(&self) -> Result<Vec<Candidate<'_>>, InputError> {
        for (quantity, value) in [
            ("length", self.length),
            ("width", self.width),
            ("max load", self.max_load),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(InputError::NonPositive { quantity, value });
            }
        }

        let candidates: Vec<_> = self.usable().collect();
        if candidates.is_empty() {
            return Err(InputError::NoUsableMaterials);
        }
        for candidate in &candidates {
            candidate.material.validate(candidate.name)?;
        }

        Ok(candidates)
    }

    fn usable(&self) -> impl Iterator<Item = Candidate<'_>> {
        self.candidates
            .iter()
            .enumerate()
            .filter(|&(i, name)| !self.candidates[..i].contains(name))
            .filter_map(|(_, name)| {
                self.materials
                    .get_key_value(name)
                    .map(|(name, &material)| Candidate { name, material })
            })
    }
}

impl Bounds {
    /// Smallest length or width the optimizer will consider, in metres.
    pub const MIN_DIMENSION: f64 = 1.0;

    /// Bounds for a requested footprint.
    ///
    /// Each dimension ranges over `[1, max(1, requested)]`, so a request
    /// smaller than one metre collapses to exactly one metre instead of
    /// producing an inverted range.
    #[must_use]
    pub fn for_footprint(length: f64, width: f64) -> Self {
        let span = |requested: f64| [Self::MIN_DIMENSION, requested.max(Self::MIN_DIMENSION)];
        Self {
            length: span(length),
            width: span(width),
        }
    }

    /// Returns `true` if the footprint lies within the bounds.
    #[must_use]
    pub fn contains(&self, length: f64, width: f64) -> bool {
        let within = |[lo, hi]: [f64; 2], value: f64| (lo..=hi).contains(&value);
        within(self.length, length) && within(self.width, width)
    }

    /// Largest footprint area within the bounds.
    #[must_use]
    pub fn max_area(&self) -> f64 {
        self.length[1] * self.width[1]
    }
}
