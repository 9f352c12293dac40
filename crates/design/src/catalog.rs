//! In-memory material catalog.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{DesignRequest, Material, MaterialIndex};

/// Identifier assigned by a [`Catalog`], starting at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MaterialId(pub u64);

impl fmt::Display for MaterialId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterialRecord {
    pub id: MaterialId,
    pub name: String,
    #[serde(flatten)]
    pub material: Material,
}

/// Errors returned by catalog operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CatalogError {
    #[error("a material named '{0}' already exists")]
    Duplicate(String),

    #[error("material name must not be empty")]
    EmptyName,

    #[error("no material with id {0}")]
    UnknownId(MaterialId),

    #[error("{property} must be finite and non-negative (received {value})")]
    InvalidValue {
        property: &'static str,
        value: f64,
    },
}

/// Materials keyed by id, with unique non-empty names.
///
/// Records are listed in insertion order. Ids are never reused, even after a
/// delete.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    records: Vec<MaterialRecord>,
    next_id: u64,
}

impl Catalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All records in insertion order.
    #[must_use]
    pub fn list(&self) -> &[MaterialRecord] {
        &self.records
    }

    #[must_use]
    pub fn get(&self, id: MaterialId) -> Option<&MaterialRecord> {
        self.records.iter().find(|record| record.id == id)
    }

    /// Looks a record up by name.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&MaterialRecord> {
        self.records.iter().find(|record| record.name == name)
    }

    /// Adds a material and returns its new id.
    ///
    /// Leading and trailing whitespace is trimmed from `name`.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is empty or already taken, or if a value
    /// is negative or not finite.
    pub fn add(
        &mut self,
        name: &str,
        unit_cost: f64,
        strength: f64,
    ) -> Result<MaterialId, CatalogError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(CatalogError::EmptyName);
        }
        if self.find(name).is_some() {
            return Err(CatalogError::Duplicate(name.to_owned()));
        }
        let material = checked(unit_cost, strength)?;

        self.next_id += 1;
        let id = MaterialId(self.next_id);
        self.records.push(MaterialRecord {
            id,
            name: name.to_owned(),
            material,
        });
        Ok(id)
    }

    /// Replaces the cost and strength of an existing material.
    ///
    /// # Errors
    ///
    /// Returns an error if `id` is unknown or a value is invalid.
    pub fn update(
        &mut self,
        id: MaterialId,
        unit_cost: f64,
        strength: f64,
    ) -> Result<(), CatalogError> {
        let material = checked(unit_cost, strength)?;
        let record = self
            .records
            .iter_mut()
            .find(|record| record.id == id)
            .ok_or(CatalogError::UnknownId(id))?;
        record.material = material;
        Ok(())
    }

    /// Removes a material and returns its record.
    ///
    /// # Errors
    ///
    /// Returns an error if `id` is unknown.
    pub fn delete(&mut self, id: MaterialId) -> Result<MaterialRecord, CatalogError> {
        let position = self
            .records
            .iter()
            .position(|record| record.id == id)
            .ok_or(CatalogError::UnknownId(id))?;
        Ok(self.records.remove(position))
    }

    /// Names in insertion order.
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        self.records.iter().map(|record| record.name.clone()).collect()
    }

    /// A name-keyed copy of the current materials.
    #[must_use]
    pub fn snapshot(&self) -> MaterialIndex {
        self.records
            .iter()
            .map(|record| (record.name.clone(), record.material))
            .collect()
    }

    /// Builds a request considering every material, in insertion order.
    #[must_use]
    pub fn request(&self, length: f64, width: f64, max_load: f64) -> DesignRequest {
        DesignRequest::new(length, width, max_load, self.names(), self.snapshot())
    }
}

fn checked(unit_cost: f64, strength: f64) -> Result<Material, CatalogError> {
    let material = Material::new(unit_cost, strength);
    match material.invalid_property() {
        Some((property, value)) => Err(CatalogError::InvalidValue { property, value }),
        None => Ok(material),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        let mut catalog = Catalog::new();
        catalog.add("A", 1000.0, 50.0).unwrap();
        catalog.add("B", 500.0, 20.0).unwrap();
        catalog
    }

    #[test]
    fn ids_start_at_one_and_are_not_reused() {
        let mut catalog = catalog();
        assert_eq!(catalog.names(), vec!["A", "B"]);
        assert_eq!(catalog.find("B").unwrap().id, MaterialId(2));

        catalog.delete(MaterialId(2)).unwrap();
        let id = catalog.add("C", 10.0, 1.0).unwrap();

        assert_eq!(id, MaterialId(3));
        assert_eq!(id.to_string(), "3");
    }

    #[test]
    fn names_must_be_unique_and_non_empty() {
        let mut catalog = catalog();

        assert_eq!(
            catalog.add(" A ", 1.0, 1.0),
            Err(CatalogError::Duplicate("A".to_owned()))
        );
        assert_eq!(catalog.add("  ", 1.0, 1.0), Err(CatalogError::EmptyName));
        assert_eq!(catalog.list().len(), 2);
    }

    #[test]
    fn invalid_values_are_rejected() {
        let mut catalog = catalog();

        assert_eq!(
            catalog.add("C", -1.0, 1.0),
            Err(CatalogError::InvalidValue {
                property: "unit cost",
                value: -1.0
            })
        );
        assert!(matches!(
            catalog.update(MaterialId(1), 1.0, f64::INFINITY),
            Err(CatalogError::InvalidValue {
                property: "strength",
                ..
            })
        ));
    }

    #[test]
    fn update_and_delete_need_a_known_id() {
        let mut catalog = catalog();

        catalog.update(MaterialId(1), 900.0, 55.0).unwrap();
        assert_eq!(
            catalog.get(MaterialId(1)).unwrap().material,
            Material::new(900.0, 55.0)
        );

        assert_eq!(
            catalog.update(MaterialId(9), 1.0, 1.0),
            Err(CatalogError::UnknownId(MaterialId(9)))
        );
        assert_eq!(
            catalog.delete(MaterialId(9)),
            Err(CatalogError::UnknownId(MaterialId(9)))
        );

        let removed = catalog.delete(MaterialId(1)).unwrap();
        assert_eq!(removed.name, "A");
        assert!(catalog.get(MaterialId(1)).is_none());
    }

    #[test]
    fn request_uses_every_material() {
        let request = catalog().request(10.0, 5.0, 100.0);

        assert_eq!(request.candidates, vec!["A", "B"]);
        assert_eq!(request.materials.len(), 2);
        assert_eq!(request.materials["B"], Material::new(500.0, 20.0));
    }
}
