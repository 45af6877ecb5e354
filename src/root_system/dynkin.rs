//! Dynkin Diagrams of Type E
//!
//! Nodes are simple-root indices; the affine extension adds node 0.
//! Every bond of a type E diagram is simple, so each edge is stored in both
//! directions with multiplicity 1.
//!
//! ```text
//!         O 2
//!         |
//!         |
//! O---O---O---O---O
//! 1   3   4   5   6
//! E6
//! ```
//!
//! The affine node hangs above node 2 (E6), left of node 1 (E7) or right of
//! node 8 (E8).

use std::collections::BTreeSet;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::cartan_type::CartanType;
use super::error::{RootSystemError, RootSystemResult};
use super::type_e::TypeE;

/// Smallest rank accepted for a finite type E diagram
const MIN_FINITE_RANK: usize = 3;

/// Largest finite type E rank; past E8 the diagram is no longer of finite type
const MAX_FINITE_RANK: usize = 8;

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DynkinDiagram {
    cartan_type: CartanType,
    /// Directed edges `(from, to, multiplicity)`
    edges: BTreeSet<(usize, usize, u32)>,
}

impl DynkinDiagram {
    fn empty(cartan_type: CartanType) -> Self {
        Self {
            cartan_type,
            edges: BTreeSet::new(),
        }
    }

    /// Simple bond between `i` and `j`, stored both ways
    fn add_edge(&mut self, i: usize, j: usize) {
        self.edges.insert((i, j, 1));
        self.edges.insert((j, i, 1));
    }

    /// (1,3), (2,4) and the chain 3-4-…-rank
    fn add_finite_edges(&mut self, rank: usize) {
        self.add_edge(1, 3);
        self.add_edge(2, 4);
        for i in 3..rank {
            self.add_edge(i, i + 1);
        }
    }

    pub fn cartan_type(&self) -> CartanType {
        self.cartan_type
    }

    /// Directed edges, sorted
    pub fn edges(&self) -> Vec<(usize, usize, u32)> {
        self.edges.iter().copied().collect()
    }

    /// Index set (with 0 for affine types) plus any node an edge touches
    pub fn nodes(&self) -> Vec<usize> {
        let first = if self.cartan_type.is_affine() { 0 } else { 1 };
        let mut nodes: BTreeSet<usize> = (first..=self.cartan_type.rank()).collect();
        for &(i, j, _) in &self.edges {
            nodes.insert(i);
            nodes.insert(j);
        }
        nodes.into_iter().collect()
    }

    pub fn has_edge(&self, i: usize, j: usize) -> bool {
        self.multiplicity(i, j) > 0
    }

    fn multiplicity(&self, i: usize, j: usize) -> u32 {
        self.edges
            .range((i, j, 0)..=(i, j, u32::MAX))
            .map(|&(_, _, m)| m)
            .sum()
    }

    pub fn neighbors(&self, i: usize) -> Vec<usize> {
        self.edges
            .range((i, 0, 0)..=(i, usize::MAX, u32::MAX))
            .map(|&(_, j, _)| j)
            .collect()
    }

    /// Generalised Cartan matrix, rows and columns in `nodes()` order
    pub fn cartan_matrix(&self) -> Vec<Vec<i64>> {
        let nodes = self.nodes();
        nodes
            .iter()
            .map(|&i| {
                nodes
                    .iter()
                    .map(|&j| if i == j { 2 } else { -i64::from(self.multiplicity(i, j)) })
                    .collect()
            })
            .collect()
    }

    /// Horizontal chain and the nodes stacked above node 4, bottom first
    fn layout(&self) -> (Vec<usize>, Vec<usize>) {
        let rank = self.cartan_type.rank();
        let mut chain = vec![1];
        chain.extend(3..=rank);
        let mut stack = vec![2];
        if self.cartan_type.is_affine() {
            match TypeE::from_rank(rank).map(TypeE::affine_neighbor) {
                Ok(1) => chain.insert(0, 0),
                Ok(2) => stack.push(0),
                _ => chain.push(0),
            }
        }
        (chain, stack)
    }
}

/// Nodes joined by `---`, labels underneath
fn write_chain(f: &mut fmt::Formatter<'_>, nodes: &[usize]) -> fmt::Result {
    writeln!(f, "{}", vec!["O"; nodes.len()].join("---"))?;
    let labels: String = nodes.iter().map(|n| format!("{:<4}", n)).collect();
    writeln!(f, "{}", labels.trim_end())
}

/// ASCII art followed by the short type name
impl fmt::Display for DynkinDiagram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (chain, stack) = self.layout();
        match chain.iter().position(|&n| n == 4) {
            Some(pos) => {
                let indent = " ".repeat(4 * pos);
                for node in stack.iter().rev() {
                    writeln!(f, "{}O {}", indent, node)?;
                    writeln!(f, "{}|", indent)?;
                    writeln!(f, "{}|", indent)?;
                }
            }
            // Rank 3: the 2-4 bond does not touch the chain
            None => write_chain(f, &[2, 4])?,
        }
        write_chain(f, &chain)?;
        write!(f, "{}", self.cartan_type.short_name())
    }
}

/// Common descriptor checks: letter 'E' and the expected affine marker
fn precheck(cartan_type: &CartanType, affine: Option<usize>) -> RootSystemResult<()> {
    let reason = if cartan_type.letter() != 'E' {
        Some(format!("expected letter 'E', got '{}'", cartan_type.letter()))
    } else if cartan_type.affine_marker() != affine {
        Some(match affine {
            None => "expected a finite Cartan type".to_string(),
            Some(marker) => format!("expected affine marker {}", marker),
        })
    } else {
        None
    };
    match reason {
        Some(reason) => {
            debug!(%cartan_type, %reason, "rejected Dynkin diagram request");
            Err(RootSystemError::InvalidCartanType {
                cartan_type: *cartan_type,
                reason,
            })
        }
        None => Ok(()),
    }
}

/// Dynkin diagram of finite type `['E', n]`, 3 ≤ n ≤ 8
pub fn dynkin_diagram(cartan_type: &CartanType) -> RootSystemResult<DynkinDiagram> {
    precheck(cartan_type, None)?;
    let rank = cartan_type.rank();
    if !(MIN_FINITE_RANK..=MAX_FINITE_RANK).contains(&rank) {
        let reason = format!(
            "rank must be between {} and {}",
            MIN_FINITE_RANK, MAX_FINITE_RANK
        );
        debug!(%cartan_type, %reason, "rejected Dynkin diagram request");
        return Err(RootSystemError::InvalidCartanType {
            cartan_type: *cartan_type,
            reason,
        });
    }
    let mut g = DynkinDiagram::empty(*cartan_type);
    g.add_finite_edges(rank);
    Ok(g)
}

/// Extended Dynkin diagram of affine type `['E', n, 1]`, n ∈ {6, 7, 8}
pub fn affine_dynkin_diagram(cartan_type: &CartanType) -> RootSystemResult<DynkinDiagram> {
    precheck(cartan_type, Some(1))?;
    let rank = cartan_type.rank();
    let flavor = TypeE::from_rank(rank).map_err(|_| RootSystemError::InvalidAffineRank(rank))?;
    let mut g = DynkinDiagram::empty(*cartan_type);
    g.add_finite_edges(rank);
    g.add_edge(0, flavor.affine_neighbor());
    Ok(g)
}
