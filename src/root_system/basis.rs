//! Signed sums of standard basis vectors
//!
//! The generators in `type_e` describe every root and weight as a short list
//! of `(index, Sign)` terms. Index `i` is the basis vector e_{i+1}.
//! Terms are not validated. Repeated indices add up. An index ≥ 8 panics
//! through `Vec8` indexing instead of being skipped: the only callers are the
//! fixed tables in `type_e`, so such an index is a bug in a table and must
//! not yield a silently wrong root.

use num_traits::One;

use super::vector::{Rational, Vec8};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) enum Sign {
    Plus,
    Minus,
}

impl Sign {
    /// Sign from a flip bit: 0 keeps the term, anything else negates it
    pub(crate) fn from_bit(bit: u32) -> Self {
        if bit & 1 == 0 {
            Sign::Plus
        } else {
            Sign::Minus
        }
    }

    fn unit(self) -> Rational {
        match self {
            Sign::Plus => Rational::one(),
            Sign::Minus => -Rational::one(),
        }
    }
}

/// ±e_{index+1}
pub(crate) fn single_term(index: usize, sign: Sign) -> Vec8 {
    compose(&[(index, sign)])
}

/// Σ ±e_{i+1} over the given terms, in order
pub(crate) fn compose(terms: &[(usize, Sign)]) -> Vec8 {
    let mut v = Vec8::zero();
    let coords = v.coords_mut();
    for &(index, sign) in terms {
        coords[index] += sign.unit();
    }
    v
}

/// Σ e_{i+1} over `indices`, all with a plus sign
pub(crate) fn sum_of<I: IntoIterator<Item = usize>>(indices: I) -> Vec8 {
    let terms: Vec<(usize, Sign)> = indices.into_iter().map(|i| (i, Sign::Plus)).collect();
    compose(&terms)
}
