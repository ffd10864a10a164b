use std::hash::Hash;

use ahash::RandomState;
use indexmap::IndexMap;

use crate::{edge::Edge, error::ChainError};

/// How often each vertex occurs among the endpoints of an edge set.
///
/// Vertices are kept in the order of their first appearance when scanning the
/// edges front to back, endpoint `a` before endpoint `b`. Every query that
/// returns several vertices reports them in that order.
#[derive(Debug, Clone)]
pub struct VertexDegreeTable<V> {
    degrees: IndexMap<V, usize, RandomState>,
}

impl<V: Clone + Eq + Hash> VertexDegreeTable<V> {
    /// Counts endpoint occurrences, rejecting empty edge sets and self-loops.
    pub fn from_edges(edges: &[Edge<V>]) -> Result<Self, ChainError<V>> {
        if edges.is_empty() {
            return Err(ChainError::EmptyEdgeSet);
        }

        let mut degrees: IndexMap<V, usize, RandomState> = IndexMap::default();
        for edge in edges {
            if edge.is_loop() {
                return Err(ChainError::InvalidEdge { edge: edge.clone() });
            }
            let (a, b) = edge.endpoints();
            *degrees.entry(a.clone()).or_insert(0) += 1;
            *degrees.entry(b.clone()).or_insert(0) += 1;
        }

        Ok(VertexDegreeTable { degrees })
    }

    pub fn degree(&self, v: &V) -> Option<usize> {
        self.degrees.get(v).copied()
    }

    pub fn contains(&self, v: &V) -> bool {
        self.degrees.contains_key(v)
    }

    fn with_degree(&self, keep: impl Fn(usize) -> bool) -> impl Iterator<Item = &V> {
        self.degrees
            .iter()
            .filter(move |(_, &d)| keep(d))
            .map(|(v, _)| v)
    }

    /// Vertices of degree greater than two.
    pub fn forks(&self) -> Vec<V> {
        self.with_degree(|d| d > 2).cloned().collect()
    }

    /// Vertices of degree one.
    pub fn ends(&self) -> Vec<V> {
        self.with_degree(|d| d == 1).cloned().collect()
    }

    /// Number of vertices of degree exactly two.
    pub fn interior(&self) -> usize {
        self.with_degree(|d| d == 2).count()
    }
}

impl<V> VertexDegreeTable<V> {
    pub fn len(&self) -> usize {
        self.degrees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.degrees.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&V, usize)> {
        self.degrees.iter().map(|(v, &d)| (v, d))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn edges(pairs: &[(i32, i32)]) -> Vec<Edge<i32>> {
        pairs.iter().copied().map(Edge::from).collect()
    }

    #[test]
    fn counts_in_first_appearance_order() {
        let table = VertexDegreeTable::from_edges(&edges(&[(1, 2), (5, 2), (1, 0), (5, 4)])).unwrap();

        let seen: Vec<_> = table.iter().collect();
        assert_eq!(seen, vec![(&1, 2), (&2, 2), (&5, 2), (&0, 1), (&4, 1)]);
        assert_eq!(table.ends(), vec![0, 4]);
        assert_eq!(table.interior(), 3);
        assert!(table.forks().is_empty());
        assert_eq!(table.degree(&7), None);
    }

    #[test]
    fn reports_forks() {
        let table = VertexDegreeTable::from_edges(&edges(&[(1, 2), (5, 2), (1, 0), (5, 1)])).unwrap();
        assert_eq!(table.forks(), vec![1]);
        assert_eq!(table.degree(&1), Some(3));
    }

    #[test]
    fn rejects_empty_and_loops() {
        assert_eq!(
            VertexDegreeTable::<i32>::from_edges(&[]).unwrap_err(),
            ChainError::EmptyEdgeSet
        );
        assert_eq!(
            VertexDegreeTable::from_edges(&edges(&[(1, 2), (3, 3)])).unwrap_err(),
            ChainError::InvalidEdge {
                edge: Edge::new(3, 3)
            }
        );
    }
}
