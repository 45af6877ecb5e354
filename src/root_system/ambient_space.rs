//! The Ambient Space of a Type E Root System
//!
//! An [`AmbientSpace`] realises E6, E7 or E8 concretely in ℚ⁸:
//! - the simple roots ("Base") are fixed at construction
//! - the positive roots are enumerated once, on first use, and cached
//! - fundamental weights, ρ and Weyl dimensions are derived on demand
//!
//! # Example
//!
//! ```
//! use lie_engine::root_system::{CartanType, RootSystem};
//!
//! let e6 = RootSystem::new(CartanType::finite('E', 6)).ambient_space()?;
//! assert_eq!(e6.dimension(), 8);
//! assert_eq!(e6.positive_roots().len(), 36);
//! # Ok::<(), lie_engine::root_system::RootSystemError>(())
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::ops::RangeInclusive;
use std::sync::OnceLock;

use num_traits::{One, Zero};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::cartan_type::CartanType;
use super::dynkin::{affine_dynkin_diagram, dynkin_diagram, DynkinDiagram};
use super::error::{RootSystemError, RootSystemResult};
use super::type_e::TypeE;
use super::vector::{rational, Rational, Vec8, DIM};

/// Coefficient ring an ambient space is requested over
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BaseRing {
    Integers,
    Rationals,
}

impl BaseRing {
    /// Whether ½ is an element of the ring
    pub fn contains_halves(self) -> bool {
        match self {
            BaseRing::Integers => false,
            BaseRing::Rationals => true,
        }
    }
}

impl fmt::Display for BaseRing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BaseRing::Integers => write!(f, "Integer Ring"),
            BaseRing::Rationals => write!(f, "Rational Field"),
        }
    }
}

/// A root system, known only through its Cartan type
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RootSystem {
    cartan_type: CartanType,
}

impl RootSystem {
    pub fn new(cartan_type: CartanType) -> Self {
        Self { cartan_type }
    }

    pub fn cartan_type(&self) -> CartanType {
        self.cartan_type
    }

    /// Ambient space over ℚ
    pub fn ambient_space(&self) -> RootSystemResult<AmbientSpace> {
        AmbientSpace::new(self, BaseRing::Rationals)
    }

    pub fn ambient_space_over(&self, base_ring: BaseRing) -> RootSystemResult<AmbientSpace> {
        AmbientSpace::new(self, base_ring)
    }

    /// Finite or affine Dynkin diagram, depending on the Cartan type
    pub fn dynkin_diagram(&self) -> RootSystemResult<DynkinDiagram> {
        if self.cartan_type.is_affine() {
            affine_dynkin_diagram(&self.cartan_type)
        } else {
            dynkin_diagram(&self.cartan_type)
        }
    }
}

/// ℚ⁸ with the simple roots and derived data of E6, E7 or E8
#[derive(Clone, Debug)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(into = "AmbientSpaceRepr", try_from = "AmbientSpaceRepr")
)]
pub struct AmbientSpace {
    flavor: TypeE,
    base_ring: BaseRing,
    /// Simple roots α₁ … α_rank (never modified after construction)
    base: Vec<Vec8>,
    /// Filled on the first call to `positive_roots`
    positive_roots: OnceLock<Vec<Vec8>>,
}

impl AmbientSpace {
    /// Create the ambient space of a finite type E root system
    ///
    /// # Errors
    ///
    /// - `InvalidCartanType` if the root system is not of finite type E
    /// - `UnsupportedRank` if its rank is not 6, 7 or 8
    /// - `InexactBaseRing` if `base_ring` cannot hold half-integers
    pub fn new(root_system: &RootSystem, base_ring: BaseRing) -> RootSystemResult<Self> {
        let cartan_type = root_system.cartan_type();
        if cartan_type.letter() != 'E' || cartan_type.is_affine() {
            debug!(%cartan_type, "rejected ambient space request");
            return Err(RootSystemError::InvalidCartanType {
                cartan_type,
                reason: "ambient spaces exist for finite type 'E' only".to_string(),
            });
        }
        let flavor = TypeE::from_rank(cartan_type.rank())?;
        if !base_ring.contains_halves() {
            debug!(%flavor, %base_ring, "rejected ambient space request");
            return Err(RootSystemError::InexactBaseRing(base_ring));
        }
        debug!(%flavor, %base_ring, "created ambient space");
        Ok(Self::for_flavor(flavor))
    }

    /// Ambient space over ℚ for a flavor known to be valid
    pub fn for_flavor(flavor: TypeE) -> Self {
        Self {
            flavor,
            base_ring: BaseRing::Rationals,
            base: flavor.simple_roots(),
            positive_roots: OnceLock::new(),
        }
    }

    pub fn flavor(&self) -> TypeE {
        self.flavor
    }

    pub fn rank(&self) -> usize {
        self.flavor.rank()
    }

    pub fn cartan_type(&self) -> CartanType {
        self.flavor.cartan_type()
    }

    pub fn base_ring(&self) -> BaseRing {
        self.base_ring
    }

    /// Always 8: all three flavors share ℚ⁸
    pub fn dimension(&self) -> usize {
        DIM
    }

    pub fn index_set(&self) -> RangeInclusive<usize> {
        1..=self.rank()
    }

    /// Simple root αᵢ
    ///
    /// # Panics
    ///
    /// If `i` is not in `1..=rank`.
    pub fn simple_root(&self, i: usize) -> &Vec8 {
        assert!(
            self.index_set().contains(&i),
            "{} is not a simple root index of {} (expected 1..={})",
            i,
            self.flavor,
            self.rank()
        );
        &self.base[i - 1]
    }

    pub fn simple_roots(&self) -> BTreeMap<usize, Vec8> {
        self.index_set().zip(self.base.iter().cloned()).collect()
    }

    /// Simple coroot αᵢ^∨ = 2αᵢ/⟨αᵢ,αᵢ⟩
    ///
    /// # Panics
    ///
    /// If `i` is not in `1..=rank`.
    pub fn simple_coroot(&self, i: usize) -> Vec8 {
        let alpha = self.simple_root(i);
        alpha.scale(&(rational(2, 1) / alpha.norm_squared()))
    }

    /// Positive roots, enumerated on the first call and borrowed afterwards
    pub fn positive_roots(&self) -> &[Vec8] {
        self.positive_roots.get_or_init(|| {
            let roots = self.flavor.positive_roots();
            debug!(flavor = %self.flavor, count = roots.len(), "enumerated positive roots");
            roots
        })
    }

    /// Whether `positive_roots` has been computed yet
    pub fn positive_roots_computed(&self) -> bool {
        self.positive_roots.get().is_some()
    }

    /// Negatives of the positive roots, in the same order
    pub fn negative_roots(&self) -> Vec<Vec8> {
        self.positive_roots().iter().map(|r| -r).collect()
    }

    /// Positive roots followed by negative roots
    pub fn roots(&self) -> Vec<Vec8> {
        let positive = self.positive_roots();
        positive
            .iter()
            .cloned()
            .chain(positive.iter().map(|r| -r))
            .collect()
    }

    /// Fundamental weights ω₁ … ω_rank, recomputed on every call
    pub fn fundamental_weights(&self) -> BTreeMap<usize, Vec8> {
        self.index_set().zip(self.flavor.fundamental_weights()).collect()
    }

    /// Standard inner product of ℚ⁸
    pub fn scalar(&self, a: &Vec8, b: &Vec8) -> Rational {
        a.dot(b)
    }

    /// Half the sum of the positive roots
    pub fn rho(&self) -> Vec8 {
        self.positive_roots()
            .iter()
            .fold(Vec8::zero(), |acc, r| &acc + r)
            .scale(&rational(1, 2))
    }

    /// Coordinates of `v` in the basis of simple roots
    ///
    /// Only meaningful for `v` in the span of the simple roots. All roots
    /// have norm 2, so αⱼ^∨ = αⱼ and ⟨v, ωᵢ⟩ is the coefficient of αᵢ.
    pub fn root_coefficients(&self, v: &Vec8) -> Vec<Rational> {
        self.flavor
            .fundamental_weights()
            .iter()
            .map(|w| v.dot(w))
            .collect()
    }

    /// Sum of the simple-root coefficients of `v`
    pub fn height(&self, v: &Vec8) -> Rational {
        self.root_coefficients(v)
            .into_iter()
            .fold(Rational::zero(), |acc, c| acc + c)
    }

    /// The positive root of maximal height
    pub fn highest_root(&self) -> &Vec8 {
        let roots = self.positive_roots();
        let heights: Vec<Rational> = roots.iter().map(|r| self.height(r)).collect();
        let mut best = 0;
        for (i, h) in heights.iter().enumerate().skip(1) {
            if *h > heights[best] {
                best = i;
            }
        }
        &roots[best]
    }

    /// Dimension of the irreducible representation of highest weight `weight`
    ///
    /// Weyl's formula ∏_{α>0} ⟨λ+ρ, α^∨⟩ / ⟨ρ, α^∨⟩. The coroot normalisation
    /// cancels in each factor, so roots are used directly. The result is an
    /// integer whenever `weight` is an integral weight.
    pub fn weyl_dimension(&self, weight: &Vec8) -> Rational {
        let rho = self.rho();
        let shifted = weight + &rho;
        self.positive_roots()
            .iter()
            .fold(Rational::one(), |acc, alpha| {
                acc * shifted.dot(alpha) / rho.dot(alpha)
            })
    }
}

/// Cache state is not part of the value: it is a function of the flavor
impl PartialEq for AmbientSpace {
    fn eq(&self, other: &Self) -> bool {
        self.flavor == other.flavor && self.base_ring == other.base_ring && self.base == other.base
    }
}

impl Eq for AmbientSpace {}

impl fmt::Display for AmbientSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Ambient space of the root system of type {}", self.cartan_type())?;
        writeln!(f, "  Base ring: {}", self.base_ring)?;
        writeln!(f, "  Dimension: {}", self.dimension())?;
        writeln!(f, "  Simple roots: {}", self.base.len())?;
        match self.positive_roots.get() {
            Some(roots) => writeln!(f, "  Positive roots: {}", roots.len())?,
            None => writeln!(f, "  Positive roots: {} (not yet enumerated)", self.flavor.positive_root_count())?,
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
#[derive(Serialize, Deserialize)]
struct AmbientSpaceRepr {
    flavor: TypeE,
    base_ring: BaseRing,
    base: Vec<Vec8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    positive_roots: Option<Vec<Vec8>>,
}

#[cfg(feature = "serde")]
impl From<AmbientSpace> for AmbientSpaceRepr {
    fn from(space: AmbientSpace) -> Self {
        Self {
            flavor: space.flavor,
            base_ring: space.base_ring,
            base: space.base,
            positive_roots: space.positive_roots.into_inner(),
        }
    }
}

#[cfg(feature = "serde")]
impl TryFrom<AmbientSpaceRepr> for AmbientSpace {
    type Error = RootSystemError;

    fn try_from(repr: AmbientSpaceRepr) -> Result<Self, Self::Error> {
        if !repr.base_ring.contains_halves() {
            return Err(RootSystemError::InexactBaseRing(repr.base_ring));
        }
        if repr.base != repr.flavor.simple_roots() {
            return Err(RootSystemError::CorruptBase(repr.flavor));
        }
        let positive_roots = match repr.positive_roots {
            Some(roots) if roots != repr.flavor.positive_roots() => {
                return Err(RootSystemError::CorruptRootCache(repr.flavor));
            }
            Some(roots) => OnceLock::from(roots),
            None => OnceLock::new(),
        };
        Ok(Self {
            flavor: repr.flavor,
            base_ring: repr.base_ring,
            base: repr.base,
            positive_roots,
        })
    }
}
