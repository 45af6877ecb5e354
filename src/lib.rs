//! lie_engine: exact root system geometry for the exceptional Lie algebras
//!
//! The [`root_system`] module builds the simple roots, positive and negative
//! roots, fundamental weights and (affine) Dynkin diagrams of E6, E7 and E8,
//! all with exact rational coordinates in ℚ⁸.
//!
//! ```
//! use lie_engine::root_system::{AmbientSpace, TypeE};
//!
//! let e8 = AmbientSpace::for_flavor(TypeE::E8);
//! assert_eq!(e8.roots().len(), 240);
//! ```

pub mod root_system;
