//! # Chain building
//!
//! Turns a validated edge set into a sequence of oriented edges in which every
//! edge starts where the previous one ended.
//!
//! The unplaced edges live in a [`RemainingEdges`] multiset keyed by the
//! undirected edge itself, so duplicates are consumed one at a time and an edge
//! is never mistaken for one already placed. Each step scans the remaining edges
//! in input order and takes the first one touching the tail of the chain.

use std::{
    fmt::{self, Display},
    hash::Hash,
    ops::Deref,
};

use ahash::RandomState;
use indexmap::IndexMap;
use itertools::Itertools;
use tracing::{debug, trace};

use crate::{
    edge::{Edge, OrientedEdge},
    error::ChainError,
    orient::first_oriented_edge,
    topology::resolve_starting_vertex,
};

/// A multiset of edges that still need a place in the chain.
///
/// Iteration order is the order in which each distinct edge first appeared.
#[derive(Debug, Clone)]
pub struct RemainingEdges<V> {
    counts: IndexMap<Edge<V>, usize, RandomState>,
    len: usize,
}

impl<V: Clone + Eq + Hash> RemainingEdges<V> {
    pub fn new(edges: &[Edge<V>]) -> Self {
        let mut counts: IndexMap<Edge<V>, usize, RandomState> = IndexMap::default();
        for e in edges {
            *counts.entry(e.clone()).or_insert(0) += 1;
        }
        RemainingEdges {
            counts,
            len: edges.len(),
        }
    }

    /// Removes one copy of `edge`, in either orientation. Returns whether a copy was present.
    pub fn remove(&mut self, edge: &Edge<V>) -> bool {
        let Some(count) = self.counts.get_mut(edge) else {
            return false;
        };
        *count -= 1;
        if *count == 0 {
            self.counts.shift_remove(edge);
        }
        self.len -= 1;
        true
    }

    /// Removes the first edge touching `v` and returns it oriented to leave `v`.
    pub fn take_from(&mut self, v: &V) -> Option<OrientedEdge<V>> {
        let next = self.counts.keys().find_map(|e| e.orient_from(v))?;
        self.remove(&next.clone().unoriented());
        Some(next)
    }

    /// The edges left, each repeated as often as it remains.
    pub fn into_edges(self) -> Vec<Edge<V>> {
        self.counts
            .into_iter()
            .flat_map(|(e, n)| std::iter::repeat(e).take(n))
            .collect()
    }
}

impl<V> RemainingEdges<V> {
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// An ordered walk over every input edge.
///
/// `chain[i].to == chain[i + 1].from` holds for every consecutive pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EdgeChain<V>(Vec<OrientedEdge<V>>);

impl<V> EdgeChain<V> {
    pub fn into_inner(self) -> Vec<OrientedEdge<V>> {
        self.0
    }

    pub fn first_vertex(&self) -> Option<&V> {
        self.0.first().map(|e| &e.from)
    }

    pub fn last_vertex(&self) -> Option<&V> {
        self.0.last().map(|e| &e.to)
    }

    /// The vertices in visiting order, starting vertex first.
    ///
    /// For a closed chain the starting vertex is repeated at the end.
    pub fn vertices(&self) -> impl Iterator<Item = &V> {
        self.first_vertex()
            .into_iter()
            .chain(self.0.iter().map(|e| &e.to))
    }
}

impl<V: PartialEq> EdgeChain<V> {
    /// Whether the walk ends where it started.
    pub fn is_closed(&self) -> bool {
        match (self.first_vertex(), self.last_vertex()) {
            (Some(first), Some(last)) => first == last,
            _ => false,
        }
    }
}

impl<V> Deref for EdgeChain<V> {
    type Target = [OrientedEdge<V>];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<V> From<EdgeChain<V>> for Vec<OrientedEdge<V>> {
    fn from(value: EdgeChain<V>) -> Self {
        value.0
    }
}

impl<V> IntoIterator for EdgeChain<V> {
    type Item = OrientedEdge<V>;
    type IntoIter = std::vec::IntoIter<OrientedEdge<V>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<V: Display> Display for EdgeChain<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.0.iter().join(", "))
    }
}

/// Orders `edges` into a chain.
///
/// Validates the edge set, resolves the starting vertex (see
/// [`resolve_starting_vertex`]), orients the first edge away from it and then
/// repeatedly appends the first remaining edge touching the tail of the chain.
///
/// ```
/// use edgechain::{chain::order_edges, edge::Edge};
///
/// let path: Vec<Edge<i32>> = vec![(1, 2).into(), (5, 2).into(), (1, 0).into(), (5, 4).into()];
/// let chain = order_edges(&path, Some(4)).unwrap();
/// assert_eq!(chain.to_string(), "[(4 -> 5), (5 -> 2), (2 -> 1), (1 -> 0)]");
/// ```
pub fn order_edges<V: Clone + Eq + Hash>(
    edges: &[Edge<V>],
    starting_vertex: Option<V>,
) -> Result<EdgeChain<V>, ChainError<V>> {
    let start = resolve_starting_vertex(edges, starting_vertex.as_ref())?;
    let first = first_oriented_edge(edges, &start)?;

    let mut remaining = RemainingEdges::new(edges);
    remaining.remove(&first.clone().unoriented());

    let mut chain = Vec::with_capacity(edges.len());
    let mut tail = first.to.clone();
    chain.push(first);

    while !remaining.is_empty() {
        let Some(next) = remaining.take_from(&tail) else {
            debug!(
                placed = chain.len(),
                unplaced = remaining.len(),
                "chain cannot be extended"
            );
            return Err(ChainError::DisconnectedChain {
                placed: chain,
                unplaced: remaining.into_edges(),
            });
        };
        trace!(step = chain.len(), "placed edge");
        tail = next.to.clone();
        chain.push(next);
    }

    debug!(edges = chain.len(), "ordered edges");
    Ok(EdgeChain(chain))
}

/// Method-call access to [`order_edges`] on slices of edges or vertex pairs.
///
/// ```
/// use edgechain::chain::OrderEdgesExt;
///
/// let chain = [(1, 2), (5, 2), (1, 0), (5, 0)].order_edges(Some(5)).unwrap();
/// assert!(chain.is_closed());
/// ```
pub trait OrderEdgesExt<V> {
    fn order_edges(&self, starting_vertex: Option<V>) -> Result<EdgeChain<V>, ChainError<V>>;
}

impl<V: Clone + Eq + Hash> OrderEdgesExt<V> for [Edge<V>] {
    fn order_edges(&self, starting_vertex: Option<V>) -> Result<EdgeChain<V>, ChainError<V>> {
        order_edges(self, starting_vertex)
    }
}

impl<V: Clone + Eq + Hash> OrderEdgesExt<V> for [(V, V)] {
    fn order_edges(&self, starting_vertex: Option<V>) -> Result<EdgeChain<V>, ChainError<V>> {
        let edges: Vec<Edge<V>> = self.iter().cloned().map(Edge::from).collect();
        order_edges(&edges, starting_vertex)
    }
}
