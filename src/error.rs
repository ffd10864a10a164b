use thiserror::Error;

use crate::edge::{Edge, OrientedEdge};

/// Everything that can go wrong while ordering a set of edges.
///
/// Each variant carries the vertices or edges that caused it, so callers can
/// build their own diagnostics.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChainError<V> {
    #[error("Cannot order an empty edge set")]
    EmptyEdgeSet,
    #[error("Edge {edge:?} is a self-loop")]
    InvalidEdge { edge: Edge<V> },
    #[error("Starting vertex {vertex:?} is not in the edge set")]
    VertexNotFound { vertex: V },
    #[error("Edge set has no unique order: vertices {forks:?} appear more than twice")]
    ForkedTopology { forks: Vec<V> },
    #[error("Edge set is neither a path nor a cycle: end vertices {ends:?}, {interior} of {vertices} vertices appear exactly twice")]
    AmbiguousTopology {
        ends: Vec<V>,
        interior: usize,
        vertices: usize,
    },
    #[error("Starting vertex {vertex:?} is not one of the path ends {ends:?}")]
    InvalidStartVertex { vertex: V, ends: [V; 2] },
    #[error("No edge touches the starting vertex {vertex:?}")]
    StartingVertexUnreachable { vertex: V },
    #[error("Chain broke after {} edges: {unplaced:?} do not connect to its tail", .placed.len())]
    DisconnectedChain {
        placed: Vec<OrientedEdge<V>>,
        unplaced: Vec<Edge<V>>,
    },
}

impl<V> ChainError<V> {
    /// A stable name for the failure kind, independent of the vertex type.
    pub fn kind(&self) -> &'static str {
        match self {
            ChainError::EmptyEdgeSet => "empty edge set",
            ChainError::InvalidEdge { .. } => "invalid edge",
            ChainError::VertexNotFound { .. } => "vertex not found",
            ChainError::ForkedTopology { .. } => "forked topology",
            ChainError::AmbiguousTopology { .. } => "ambiguous topology",
            ChainError::InvalidStartVertex { .. } => "invalid start vertex",
            ChainError::StartingVertexUnreachable { .. } => "starting vertex unreachable",
            ChainError::DisconnectedChain { .. } => "disconnected chain",
        }
    }
}
