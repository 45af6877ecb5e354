//! Cartan type descriptors
//!
//! A descriptor is a letter, a rank and, for affine types, a marker:
//! `['E', 6]` is finite E6, `['E', 6, 1]` its untwisted affine extension.
//! Descriptors are plain data; the builders decide which ones they accept.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CartanType {
    letter: char,
    rank: usize,
    affine: Option<usize>,
}

impl CartanType {
    pub fn finite(letter: char, rank: usize) -> Self {
        Self {
            letter,
            rank,
            affine: None,
        }
    }

    /// Affine type `[letter, rank, marker]`; the untwisted extension has marker 1
    pub fn affine(letter: char, rank: usize, marker: usize) -> Self {
        Self {
            letter,
            rank,
            affine: Some(marker),
        }
    }

    pub fn letter(&self) -> char {
        self.letter
    }

    pub fn rank(&self) -> usize {
        self.rank
    }

    pub fn affine_marker(&self) -> Option<usize> {
        self.affine
    }

    pub fn is_affine(&self) -> bool {
        self.affine.is_some()
    }

    pub fn is_finite(&self) -> bool {
        self.affine.is_none()
    }

    /// The finite type an affine type extends (identity on finite types)
    pub fn classical(&self) -> CartanType {
        CartanType::finite(self.letter, self.rank)
    }

    /// Compact name used under diagrams: `E6`, `E6^(1)`
    pub fn short_name(&self) -> String {
        match self.affine {
            None => format!("{}{}", self.letter, self.rank),
            Some(marker) => format!("{}{}^({})", self.letter, self.rank, marker),
        }
    }
}

/// Formats as `['E', 6]` or `['E', 6, 1]`
impl fmt::Display for CartanType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.affine {
            None => write!(f, "['{}', {}]", self.letter, self.rank),
            Some(marker) => write!(f, "['{}', {}, {}]", self.letter, self.rank, marker),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finite_descriptor() {
        let ct = CartanType::finite('E', 7);
        assert_eq!(ct.letter(), 'E');
        assert_eq!(ct.rank(), 7);
        assert!(ct.is_finite());
        assert_eq!(ct.affine_marker(), None);
        assert_eq!(ct.to_string(), "['E', 7]");
        assert_eq!(ct.short_name(), "E7");
    }

    #[test]
    fn test_affine_descriptor() {
        let ct = CartanType::affine('E', 8, 1);
        assert!(ct.is_affine());
        assert_eq!(ct.affine_marker(), Some(1));
        assert_eq!(ct.classical(), CartanType::finite('E', 8));
        assert_eq!(ct.to_string(), "['E', 8, 1]");
        assert_eq!(ct.short_name(), "E8^(1)");
    }
}
