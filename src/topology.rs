//! # Topology validation
//!
//! Decides, from endpoint degrees alone, whether an edge set can be walked as a
//! simple path or a simple cycle, and picks the vertex a walk starts from.
//!
//! All of this runs before any ordering is attempted. Forks, wrong end counts,
//! self-loops and bad starting vertices are rejected here; the chain builder only
//! has to deal with edge sets that pass.

use std::hash::Hash;

use tracing::debug;

use crate::{degree::VertexDegreeTable, edge::Edge, error::ChainError};

/// The shape of a valid edge set.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Topology<V> {
    /// Exactly two vertices of degree one, every other vertex of degree two.
    /// The ends are listed in order of first appearance.
    Path { ends: [V; 2] },
    /// Every vertex has degree two.
    Cycle,
}

impl<V> Topology<V> {
    pub fn is_cycle(&self) -> bool {
        matches!(self, Topology::Cycle)
    }

    pub fn ends(&self) -> Option<&[V; 2]> {
        match self {
            Topology::Path { ends } => Some(ends),
            Topology::Cycle => None,
        }
    }
}

impl<V: Clone + Eq + Hash> Topology<V> {
    /// Classifies a degree table.
    ///
    /// Fails with [`ChainError::ForkedTopology`] if any vertex has degree above two,
    /// and with [`ChainError::AmbiguousTopology`] if the table describes neither a
    /// path nor a cycle.
    pub fn from_degrees(table: &VertexDegreeTable<V>) -> Result<Self, ChainError<V>> {
        let forks = table.forks();
        if !forks.is_empty() {
            return Err(ChainError::ForkedTopology { forks });
        }

        let ends = table.ends();
        let interior = table.interior();

        if interior == table.len() {
            return Ok(Topology::Cycle);
        }

        match <[V; 2]>::try_from(ends) {
            Ok(ends) => Ok(Topology::Path { ends }),
            Err(ends) => Err(ChainError::AmbiguousTopology {
                ends,
                interior,
                vertices: table.len(),
            }),
        }
    }
}

/// Classifies an edge set as a path or a cycle.
///
/// ```
/// use edgechain::{edge::Edge, topology::{classify, Topology}};
///
/// let path: Vec<Edge<u8>> = vec![(1, 2).into(), (5, 2).into(), (1, 0).into(), (5, 4).into()];
/// assert_eq!(classify(&path).unwrap(), Topology::Path { ends: [0, 4] });
/// ```
pub fn classify<V: Clone + Eq + Hash>(edges: &[Edge<V>]) -> Result<Topology<V>, ChainError<V>> {
    Topology::from_degrees(&VertexDegreeTable::from_edges(edges)?)
}

/// Validates the edge set and returns the vertex an ordered walk should start at.
///
/// A given `starting_vertex` must occur in the edge set and, if the edges form a
/// path, must be one of its two ends; any vertex may start a cycle. Without one,
/// a path starts at the end that appears first, and a cycle at the first
/// endpoint of the first edge.
pub fn resolve_starting_vertex<V: Clone + Eq + Hash>(
    edges: &[Edge<V>],
    starting_vertex: Option<&V>,
) -> Result<V, ChainError<V>> {
    let table = VertexDegreeTable::from_edges(edges)?;

    if let Some(v) = starting_vertex {
        if !table.contains(v) {
            return Err(ChainError::VertexNotFound { vertex: v.clone() });
        }
    }

    let topology = Topology::from_degrees(&table)?;
    debug!(
        edges = edges.len(),
        vertices = table.len(),
        cycle = topology.is_cycle(),
        "classified edge set"
    );

    match (starting_vertex, topology) {
        (Some(v), Topology::Path { ends }) => {
            if ends.contains(v) {
                Ok(v.clone())
            } else {
                Err(ChainError::InvalidStartVertex {
                    vertex: v.clone(),
                    ends,
                })
            }
        }
        (Some(v), Topology::Cycle) => Ok(v.clone()),
        (None, Topology::Path { ends: [first, _] }) => Ok(first),
        (None, Topology::Cycle) => {
            let (first, _) = edges[0].endpoints();
            Ok(first.clone())
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn edges(pairs: &[(i32, i32)]) -> Vec<Edge<i32>> {
        pairs.iter().copied().map(Edge::from).collect()
    }

    const PATH: [(i32, i32); 4] = [(1, 2), (5, 2), (1, 0), (5, 4)];
    const CYCLE: [(i32, i32); 4] = [(1, 2), (5, 2), (1, 0), (5, 0)];
    const FORK: [(i32, i32); 4] = [(1, 2), (5, 2), (1, 0), (5, 1)];

    #[test]
    fn classify_shapes() {
        assert_eq!(
            classify(&edges(&PATH)).unwrap(),
            Topology::Path { ends: [0, 4] }
        );
        assert_eq!(classify(&edges(&CYCLE)).unwrap(), Topology::Cycle);
        assert_eq!(
            classify(&edges(&[(7, 8)])).unwrap(),
            Topology::Path { ends: [7, 8] }
        );
        // a doubled edge is a two-edge cycle
        assert_eq!(classify(&edges(&[(7, 8), (8, 7)])).unwrap(), Topology::Cycle);
    }

    #[test]
    fn default_starting_vertices() {
        assert_eq!(resolve_starting_vertex(&edges(&PATH), None), Ok(0));
        assert_eq!(resolve_starting_vertex(&edges(&CYCLE), None), Ok(1));
    }

    #[test]
    fn explicit_starting_vertices() {
        assert_eq!(resolve_starting_vertex(&edges(&PATH), Some(&4)), Ok(4));
        assert_eq!(resolve_starting_vertex(&edges(&CYCLE), Some(&5)), Ok(5));
        assert_eq!(
            resolve_starting_vertex(&edges(&PATH), Some(&2)),
            Err(ChainError::InvalidStartVertex {
                vertex: 2,
                ends: [0, 4]
            })
        );
        assert_eq!(
            resolve_starting_vertex(&edges(&PATH), Some(&9)),
            Err(ChainError::VertexNotFound { vertex: 9 })
        );
    }

    #[test]
    fn forks_rejected_for_every_start() {
        for start in [None, Some(0), Some(1), Some(2), Some(5)] {
            assert_eq!(
                resolve_starting_vertex(&edges(&FORK), start.as_ref()),
                Err(ChainError::ForkedTopology { forks: vec![1] })
            );
        }
    }

    #[test]
    fn missing_start_reported_before_fork() {
        assert_eq!(
            resolve_starting_vertex(&edges(&FORK), Some(&9)),
            Err(ChainError::VertexNotFound { vertex: 9 })
        );
    }

    #[test]
    fn ambiguous_end_count() {
        // a path plus a disjoint edge: four ends
        let err = classify(&edges(&[(1, 2), (2, 3), (7, 8)])).unwrap_err();
        assert_eq!(
            err,
            ChainError::AmbiguousTopology {
                ends: vec![1, 3, 7, 8],
                interior: 1,
                vertices: 5
            }
        );
        insta::assert_snapshot!(
            err.to_string(),
            @"Edge set is neither a path nor a cycle: end vertices [1, 3, 7, 8], 1 of 5 vertices appear exactly twice"
        );
    }

    #[test]
    fn self_loop_is_invalid() {
        assert_eq!(
            resolve_starting_vertex(&edges(&[(1, 2), (2, 2)]), None),
            Err(ChainError::InvalidEdge {
                edge: Edge::new(2, 2)
            })
        );
    }
}
