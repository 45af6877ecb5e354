//! Configuration errors for type E root systems
//!
//! Everything in this crate is deterministic, so none of these are transient:
//! retrying with the same input fails the same way.

use thiserror::Error;

use super::ambient_space::BaseRing;
use super::cartan_type::CartanType;
use super::type_e::TypeE;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RootSystemError {
    /// Ambient space requested for a rank other than 6, 7, 8
    #[error("type 'E' root systems only come in flavors 6, 7, 8 (got rank {0})")]
    UnsupportedRank(usize),

    /// Descriptor rejected by a constructor or diagram builder
    #[error("invalid Cartan type {cartan_type}: {reason}")]
    InvalidCartanType {
        cartan_type: CartanType,
        reason: String,
    },

    #[error("Invalid Cartan Type for Type E affine (rank {0})")]
    InvalidAffineRank(usize),

    /// Base ring cannot represent the half-integer coordinates of the roots
    #[error("type E roots have half-integer coordinates, which {0} cannot hold")]
    InexactBaseRing(BaseRing),

    /// Deserialized simple roots differ from the canonical ones
    #[error("serialized simple roots do not match the {0} base")]
    CorruptBase(TypeE),

    /// Deserialized positive-root cache differs from the enumeration
    #[error("serialized positive roots do not match the {0} enumeration")]
    CorruptRootCache(TypeE),
}

pub type RootSystemResult<T> = Result<T, RootSystemError>;
