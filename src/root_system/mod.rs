//! Root Systems of Type E
//!
//! Exact realisation of the exceptional root systems E6, E7 and E8 in ℚ⁸,
//! following Bourbaki's planches V–VII.
//!
//! # Overview
//!
//! | Flavor | Rank | Roots | Positive roots |
//! |--------|------|-------|----------------|
//! | E6     | 6    | 72    | 36             |
//! | E7     | 7    | 126   | 63             |
//! | E8     | 8    | 240   | 120            |
//!
//! All coordinates are `BigRational`; equality is exact.
//!
//! # Modules
//!
//! - `vector`: the exact vector type `Vec8`
//! - `basis`: signed sums of basis vectors (internal generation primitive)
//! - `cartan_type`: `['E', n]` / `['E', n, 1]` descriptors
//! - `type_e`: closed-form simple roots, positive roots and fundamental weights
//! - `ambient_space`: the user-facing ambient space with its root cache
//! - `dynkin`: finite and affine Dynkin diagrams

pub mod ambient_space;
mod basis;
pub mod cartan_type;
pub mod dynkin;
pub mod error;
pub mod type_e;
pub mod vector;

pub use ambient_space::{AmbientSpace, BaseRing, RootSystem};
pub use cartan_type::CartanType;
pub use dynkin::{affine_dynkin_diagram, dynkin_diagram, DynkinDiagram};
pub use error::{RootSystemError, RootSystemResult};
pub use type_e::TypeE;
pub use vector::{rational, Rational, Vec8, DIM};
