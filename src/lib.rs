//! # Edgechain
//!
//! Edgechain recovers the traversal order of an unordered set of undirected
//! edges that together form a simple path or a simple cycle.
//!
//! Ordering runs as a fixed pipeline:
//!
//! 1. [`topology`]: count endpoint degrees, reject forks, self-loops and edge
//!    sets that are neither a path nor a cycle, and pick a starting vertex.
//! 2. [`orient`]: find the first edge touching the starting vertex and orient it
//!    away from that vertex.
//! 3. [`chain`]: keep appending the remaining edge that touches the tail of the
//!    chain until every edge is placed.
//!
//! ```
//! use edgechain::OrderEdgesExt;
//!
//! let chain = [(1, 2), (5, 2), (1, 0), (5, 4)].order_edges(None).unwrap();
//! assert_eq!(chain.to_string(), "[(0 -> 1), (1 -> 2), (2 -> 5), (5 -> 4)]");
//! ```
//!
//! Vertices can be any `Clone + Eq + Hash` type. Every failure is reported as a
//! [`ChainError`] carrying the offending vertices or edges.

pub mod chain;
pub mod degree;
pub mod edge;
pub mod error;
pub mod orient;
pub mod topology;

pub use chain::{order_edges, EdgeChain, OrderEdgesExt};
pub use edge::{Edge, OrientedEdge};
pub use error::ChainError;
pub use topology::{classify, resolve_starting_vertex, Topology};
