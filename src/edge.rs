//! # Edges
//!
//! The two edge shapes the crate works with:
//!
//! - [`Edge`]: an undirected pair of vertices. Equality and hashing ignore the
//!   order the endpoints were given in, so `Edge::new(1, 2) == Edge::new(2, 1)`.
//! - [`OrientedEdge`]: an `(from, to)` pair obtained by picking a direction for an
//!   [`Edge`]. Ordered chains are built out of these.

use std::{
    fmt::{self, Display},
    hash::{Hash, Hasher},
};

use ahash::AHasher;

/// An undirected edge between two vertices.
///
/// The endpoints are stored in the order they were given, which is the order
/// [`Edge::endpoints`] reports them in, but two edges compare equal (and hash
/// equally) whenever they join the same pair of vertices.
///
/// # Examples
///
/// ```
/// use edgechain::edge::Edge;
///
/// assert_eq!(Edge::new(1, 2), Edge::new(2, 1));
/// assert_ne!(Edge::new(1, 2), Edge::new(1, 3));
/// ```
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Edge<V> {
    a: V,
    b: V,
}

impl<V> Edge<V> {
    pub fn new(a: V, b: V) -> Self {
        Edge { a, b }
    }

    /// The endpoints in the order the edge was constructed with.
    pub fn endpoints(&self) -> (&V, &V) {
        (&self.a, &self.b)
    }

    pub fn into_endpoints(self) -> (V, V) {
        (self.a, self.b)
    }
}

impl<V: PartialEq> Edge<V> {
    pub fn contains(&self, v: &V) -> bool {
        self.a == *v || self.b == *v
    }

    /// A self-loop joins a vertex to itself.
    pub fn is_loop(&self) -> bool {
        self.a == self.b
    }

    /// The endpoint opposite to `v`, if `v` is an endpoint at all.
    pub fn other(&self, v: &V) -> Option<&V> {
        if self.a == *v {
            Some(&self.b)
        } else if self.b == *v {
            Some(&self.a)
        } else {
            None
        }
    }
}

impl<V: PartialEq + Clone> Edge<V> {
    /// Orients the edge so that it leaves `v`.
    ///
    /// Returns `None` when `v` is not an endpoint.
    ///
    /// ```
    /// use edgechain::edge::{Edge, OrientedEdge};
    ///
    /// let e = Edge::new(5, 2);
    /// assert_eq!(e.orient_from(&2), Some(OrientedEdge::new(2, 5)));
    /// assert_eq!(e.orient_from(&7), None);
    /// ```
    pub fn orient_from(&self, v: &V) -> Option<OrientedEdge<V>> {
        if self.a == *v {
            Some(OrientedEdge::new(self.a.clone(), self.b.clone()))
        } else if self.b == *v {
            Some(OrientedEdge::new(self.b.clone(), self.a.clone()))
        } else {
            None
        }
    }
}

impl<V: PartialEq> PartialEq for Edge<V> {
    fn eq(&self, other: &Self) -> bool {
        (self.a == other.a && self.b == other.b) || (self.a == other.b && self.b == other.a)
    }
}

impl<V: Eq> Eq for Edge<V> {}

impl<V: Hash> Hash for Edge<V> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // commutative combination of the endpoint hashes
        let endpoint_hash = |v: &V| {
            let mut hasher = AHasher::default();
            v.hash(&mut hasher);
            hasher.finish()
        };
        state.write_u64(endpoint_hash(&self.a).wrapping_add(endpoint_hash(&self.b)));
    }
}

impl<V> From<(V, V)> for Edge<V> {
    fn from((a, b): (V, V)) -> Self {
        Edge::new(a, b)
    }
}

impl<V> From<OrientedEdge<V>> for Edge<V> {
    fn from(value: OrientedEdge<V>) -> Self {
        Edge::new(value.from, value.to)
    }
}

impl<V: Display> Display for Edge<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}, {}}}", self.a, self.b)
    }
}

/// An edge with a chosen direction, leaving `from` and entering `to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OrientedEdge<V> {
    pub from: V,
    pub to: V,
}

impl<V> OrientedEdge<V> {
    pub fn new(from: V, to: V) -> Self {
        OrientedEdge { from, to }
    }

    pub fn reversed(self) -> Self {
        OrientedEdge {
            from: self.to,
            to: self.from,
        }
    }

    /// Forgets the direction.
    pub fn unoriented(self) -> Edge<V> {
        Edge::from(self)
    }
}

impl<V> From<(V, V)> for OrientedEdge<V> {
    fn from((from, to): (V, V)) -> Self {
        OrientedEdge::new(from, to)
    }
}

impl<V> From<OrientedEdge<V>> for (V, V) {
    fn from(value: OrientedEdge<V>) -> Self {
        (value.from, value.to)
    }
}

impl<V: Display> Display for OrientedEdge<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({} -> {})", self.from, self.to)
    }
}
