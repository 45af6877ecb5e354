//! Closed-form Data for the Type E Flavors
//!
//! E6, E7 and E8 all live in the same ℚ⁸. Coordinates follow Bourbaki,
//! *Groupes et algèbres de Lie*, ch. VI, planches V–VII:
//!
//! - E8 roots: ±eᵢ ± eⱼ (i < j) and ½(±e₁ ± … ± e₈) with an even number of
//!   minus signs. 240 roots.
//! - E7 and E6 are the subsystems orthogonal to one or two extra vectors,
//!   which is why their roots only use some coordinates freely and carry fixed
//!   "tail" terms on e₆, e₇, e₈.
//!
//! Positivity is built into the formulas: each generator only produces roots
//! positive for the lexicographic order, so nothing is sorted or filtered
//! after the fact except the sign-parity rule of the half-integer family.
//!
//! Indices below are 0-based, `(i, sign)` meaning ±e_{i+1}.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::basis::Sign::{self, Minus, Plus};
use super::basis::{compose, single_term, sum_of};
use super::cartan_type::CartanType;
use super::error::{RootSystemError, RootSystemResult};
use super::vector::{rational, Vec8};

/// The three type E root systems
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TypeE {
    E6,
    E7,
    E8,
}

/// The ½(tail + Σ ±eᵢ) roots of one flavor
///
/// Sign patterns run over the first `free` coordinates; a pattern is kept
/// when its number of minus signs is ≡ `parity` (mod 2). Exactly half of the
/// 2^free patterns survive.
struct HalfIntegerFamily {
    tail: &'static [(usize, Sign)],
    free: usize,
    parity: u32,
}

impl HalfIntegerFamily {
    /// Patterns in increasing binary order, the sign of e₁ being the most significant bit
    fn roots(&self) -> impl Iterator<Item = Vec8> + '_ {
        let half = rational(1, 2);
        let tail = compose(self.tail);
        (0u32..1 << self.free)
            .filter(move |mask| mask.count_ones() % 2 == self.parity)
            .map(move |mask| {
                let terms: Vec<(usize, Sign)> = (0..self.free)
                    .map(|i| (i, Sign::from_bit(mask >> (self.free - 1 - i))))
                    .collect();
                (&tail + &compose(&terms)).scale(&half)
            })
    }
}

impl TypeE {
    pub const ALL: [TypeE; 3] = [TypeE::E6, TypeE::E7, TypeE::E8];

    pub fn from_rank(rank: usize) -> RootSystemResult<Self> {
        match rank {
            6 => Ok(TypeE::E6),
            7 => Ok(TypeE::E7),
            8 => Ok(TypeE::E8),
            other => Err(RootSystemError::UnsupportedRank(other)),
        }
    }

    pub fn rank(self) -> usize {
        match self {
            TypeE::E6 => 6,
            TypeE::E7 => 7,
            TypeE::E8 => 8,
        }
    }

    pub fn cartan_type(self) -> CartanType {
        CartanType::finite('E', self.rank())
    }

    pub fn positive_root_count(self) -> usize {
        match self {
            TypeE::E6 => 36,
            TypeE::E7 => 63,
            TypeE::E8 => 120,
        }
    }

    /// Node joined to the affine node 0 in the extended Dynkin diagram
    pub fn affine_neighbor(self) -> usize {
        match self {
            TypeE::E6 => 2,
            TypeE::E7 => 1,
            TypeE::E8 => 8,
        }
    }

    /// The ±eᵢ ± eⱼ roots use coordinates `0..n` only
    fn integral_span(self) -> usize {
        match self {
            TypeE::E6 => 5,
            TypeE::E7 => 6,
            TypeE::E8 => 8,
        }
    }

    /// Integer roots outside the ±eᵢ ± eⱼ (i < j < n) pattern
    fn extra_roots(self) -> &'static [&'static [(usize, Sign)]] {
        match self {
            TypeE::E6 | TypeE::E8 => &[],
            TypeE::E7 => &[&[(6, Minus), (7, Plus)]],
        }
    }

    fn half_integer_family(self) -> HalfIntegerFamily {
        match self {
            TypeE::E6 => HalfIntegerFamily {
                tail: &[(7, Plus), (6, Minus), (5, Minus)],
                free: 5,
                parity: 0,
            },
            TypeE::E7 => HalfIntegerFamily {
                tail: &[(7, Plus), (6, Minus)],
                free: 6,
                parity: 1,
            },
            TypeE::E8 => HalfIntegerFamily {
                tail: &[(7, Plus)],
                free: 7,
                parity: 0,
            },
        }
    }

    /// Simple roots α₁ … α_rank
    pub(crate) fn simple_roots(self) -> Vec<Vec8> {
        let mut alpha_1 = vec![(0, Plus), (7, Plus)];
        alpha_1.extend((1..7).map(|i| (i, Minus)));

        let mut base = Vec::with_capacity(self.rank());
        base.push(compose(&alpha_1).scale(&rational(1, 2)));
        base.push(compose(&[(0, Plus), (1, Plus)]));
        base.push(compose(&[(0, Minus), (1, Plus)]));
        // α₄ … α_rank walk down the chain: -e₂+e₃, -e₃+e₄, ...
        base.extend((1..self.rank() - 2).map(|i| compose(&[(i, Minus), (i + 1, Plus)])));
        base
    }

    /// All positive roots, in generation order
    pub(crate) fn positive_roots(self) -> Vec<Vec8> {
        let n = self.integral_span();
        let mut roots = Vec::with_capacity(self.positive_root_count());
        roots.extend(pair_roots(n, Plus));
        roots.extend(pair_roots(n, Minus));
        roots.extend(self.extra_roots().iter().map(|terms| compose(terms)));
        roots.extend(self.half_integer_family().roots());
        roots
    }

    /// Fundamental weights ω₁ … ω_rank, dual to the simple coroots
    pub(crate) fn fundamental_weights(self) -> Vec<Vec8> {
        let half = rational(1, 2);
        match self {
            TypeE::E6 => {
                let t = compose(&[(7, Plus), (6, Minus), (5, Minus)]);
                vec![
                    t.scale(&rational(2, 3)),
                    (&sum_of(0..5) + &t).scale(&half),
                    &t.scale(&rational(5, 6)) + &(&sum_of(1..5) - &single_term(0, Plus)).scale(&half),
                    &sum_of(2..5) + &t,
                    &t.scale(&rational(2, 3)) + &sum_of(3..5),
                    &t.scale(&rational(1, 3)) + &single_term(4, Plus),
                ]
            }
            TypeE::E7 => {
                let b = compose(&[(6, Minus), (7, Plus)]);
                vec![
                    b.clone(),
                    &sum_of(0..6).scale(&half) + &b,
                    (&(&sum_of(1..6) - &single_term(0, Plus)) + &b.scale(&rational(3, 1))).scale(&half),
                    &sum_of(2..6) + &b.scale(&rational(2, 1)),
                    &b.scale(&rational(3, 2)) + &sum_of(3..6),
                    &sum_of(4..6) + &b,
                    &single_term(5, Plus) + &b.scale(&half),
                ]
            }
            TypeE::E8 => {
                let e8 = single_term(7, Plus);
                let e8_times = |k: i64| e8.scale(&rational(k, 1));
                vec![
                    e8_times(2),
                    (&sum_of(0..7) + &e8_times(5)).scale(&half),
                    (&(&sum_of(1..7) - &single_term(0, Plus)) + &e8_times(7)).scale(&half),
                    &sum_of(2..7) + &e8_times(5),
                    &sum_of(3..7) + &e8_times(4),
                    &sum_of(4..7) + &e8_times(3),
                    &sum_of(5..7) + &e8_times(2),
                    sum_of(6..8),
                ]
            }
        }
    }
}

/// `first·eᵢ + eⱼ` for all i < j < n, row by row
fn pair_roots(n: usize, first: Sign) -> impl Iterator<Item = Vec8> {
    (0..n).flat_map(move |i| (i + 1..n).map(move |j| compose(&[(i, first), (j, Plus)])))
}

impl fmt::Display for TypeE {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E{}", self.rank())
    }
}
