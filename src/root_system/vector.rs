//! Exact Vectors of the Ambient Space ℚ⁸
//!
//! Every coordinate is an arbitrary-precision rational, so root and weight
//! comparisons are exact: no tolerance, no hashing of rounded floats.
//!
//! Type E data only produces integers, halves, thirds and sixths, but nothing
//! in this module depends on that.

use std::fmt;
use std::ops::{Add, Index, Neg, Sub};

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Zero};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Exact rational scalar (numerator/denominator over `BigInt`, lowest terms)
pub type Rational = BigRational;

/// Dimension of the ambient space shared by E6, E7 and E8
pub const DIM: usize = 8;

/// The rational `numer / denom`
///
/// Panics if `denom` is zero.
pub fn rational(numer: i64, denom: i64) -> Rational {
    Rational::new(BigInt::from(numer), BigInt::from(denom))
}

/// A vector of ℚ⁸ with coordinates e₁ … e₈ (stored 0-based)
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Vec8 {
    coords: [Rational; DIM],
}

impl Vec8 {
    pub fn zero() -> Self {
        Self {
            coords: std::array::from_fn(|_| Rational::zero()),
        }
    }

    /// Standard basis vector e_{index+1}
    pub fn basis(index: usize) -> Self {
        assert!(index < DIM, "basis index {} out of range 0..{}", index, DIM);
        let mut v = Self::zero();
        v.coords[index] = Rational::one();
        v
    }

    pub fn from_coords(coords: [Rational; DIM]) -> Self {
        Self { coords }
    }

    pub fn from_integers(coords: [i64; DIM]) -> Self {
        Self {
            coords: coords.map(|c| Rational::from_integer(BigInt::from(c))),
        }
    }

    /// Build a vector from its doubled coordinates: `[1, -1, ...]` gives `(1/2, -1/2, ...)`
    pub fn from_halves(doubled: [i64; DIM]) -> Self {
        Self {
            coords: doubled.map(|c| rational(c, 2)),
        }
    }

    pub fn coords(&self) -> &[Rational; DIM] {
        &self.coords
    }

    pub(crate) fn coords_mut(&mut self) -> &mut [Rational; DIM] {
        &mut self.coords
    }

    /// Scalar multiple `c·self`
    pub fn scale(&self, c: &Rational) -> Self {
        Self {
            coords: std::array::from_fn(|i| &self.coords[i] * c),
        }
    }

    /// Standard inner product ⟨self, other⟩ = Σ xᵢyᵢ
    pub fn dot(&self, other: &Self) -> Rational {
        self.coords
            .iter()
            .zip(other.coords.iter())
            .fold(Rational::zero(), |acc, (x, y)| acc + x * y)
    }

    pub fn norm_squared(&self) -> Rational {
        self.dot(self)
    }

    pub fn is_zero(&self) -> bool {
        self.coords.iter().all(Zero::is_zero)
    }

    /// All coordinates are integers
    pub fn is_integral(&self) -> bool {
        self.coords.iter().all(|c| c.is_integer())
    }

    /// All coordinates are odd multiples of 1/2
    pub fn is_half_integral(&self) -> bool {
        let two = BigInt::from(2);
        self.coords.iter().all(|c| *c.denom() == two)
    }
}

impl Default for Vec8 {
    fn default() -> Self {
        Self::zero()
    }
}

impl Index<usize> for Vec8 {
    type Output = Rational;

    fn index(&self, index: usize) -> &Rational {
        &self.coords[index]
    }
}

impl<'a> Add<&'a Vec8> for &'a Vec8 {
    type Output = Vec8;

    fn add(self, rhs: &'a Vec8) -> Vec8 {
        Vec8 {
            coords: std::array::from_fn(|i| &self.coords[i] + &rhs.coords[i]),
        }
    }
}

impl Add for Vec8 {
    type Output = Vec8;

    fn add(self, rhs: Vec8) -> Vec8 {
        &self + &rhs
    }
}

impl<'a> Sub<&'a Vec8> for &'a Vec8 {
    type Output = Vec8;

    fn sub(self, rhs: &'a Vec8) -> Vec8 {
        Vec8 {
            coords: std::array::from_fn(|i| &self.coords[i] - &rhs.coords[i]),
        }
    }
}

impl Sub for Vec8 {
    type Output = Vec8;

    fn sub(self, rhs: Vec8) -> Vec8 {
        &self - &rhs
    }
}

impl Neg for &Vec8 {
    type Output = Vec8;

    fn neg(self) -> Vec8 {
        Vec8 {
            coords: std::array::from_fn(|i| -&self.coords[i]),
        }
    }
}

impl Neg for Vec8 {
    type Output = Vec8;

    fn neg(self) -> Vec8 {
        -&self
    }
}

/// Formats as `(1/2, -1/2, 0, ...)`
impl fmt::Display for Vec8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, c) in self.coords.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", c)?;
        }
        write!(f, ")")
    }
}
