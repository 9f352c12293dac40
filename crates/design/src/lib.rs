//! Least-cost material selection and sizing for a loaded structural element.
//!
//! Given a snapshot of candidate materials (unit cost per m² and strength in
//! kN/m²), a load in kN and a nominal length and width in metres, the
//! [`Optimizer`] picks the material and the footprint that minimize
//!
//! ```text
//! cost = unit_cost × length × width
//! ```
//!
//! subject to `strength − load / (length × width) ≥ 0`, with
//! `length ∈ [1, requested length]` and `width ∈ [1, requested width]`.
//!
//! # Example
//!
//! ```rust
//! use girder_design::{Catalog, optimize};
//!
//! let mut catalog = Catalog::new();
//! catalog.add("A", 1000.0, 50.0).unwrap();
//! catalog.add("B", 500.0, 20.0).unwrap();
//!
//! let request = catalog.request(10.0, 5.0, 100.0);
//! let result = optimize(&request).unwrap();
//!
//! assert_eq!(result.material, "A");
//! assert!((result.cost - 2000.0).abs() < 1e-6);
//! ```

mod catalog;
mod error;
mod material;
mod optimizer;
mod relaxed;
mod request;
mod result;

pub mod report;
pub mod section;

pub use catalog::{Catalog, CatalogError, MaterialId, MaterialRecord};
pub use error::{DesignError, InputError};
pub use material::{Material, MaterialIndex};
pub use optimizer::{
    DesignAction, DesignEvent, Optimizer, OptimizerConfig, Rejection, Strategy, optimize,
};
pub use request::{Bounds, DesignRequest};
pub use result::DesignResult;
