use crate::{
    edge::{Edge, OrientedEdge},
    error::ChainError,
};

/// Finds the first edge touching `starting_vertex`, oriented to leave it.
///
/// Edges are scanned in input order. If no edge touches the vertex this is
/// reported as [`ChainError::StartingVertexUnreachable`]; a validated starting
/// vertex always has at least one incident edge.
pub fn first_oriented_edge<V: Clone + PartialEq>(
    edges: &[Edge<V>],
    starting_vertex: &V,
) -> Result<OrientedEdge<V>, ChainError<V>> {
    edges
        .iter()
        .find_map(|e| e.orient_from(starting_vertex))
        .ok_or_else(|| ChainError::StartingVertexUnreachable {
            vertex: starting_vertex.clone(),
        })
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn orients_away_from_start() {
        let edges: Vec<Edge<i32>> = vec![(1, 2).into(), (5, 2).into(), (1, 0).into()];
        assert_eq!(
            first_oriented_edge(&edges, &2),
            Ok(OrientedEdge::new(2, 1))
        );
        assert_eq!(
            first_oriented_edge(&edges, &0),
            Ok(OrientedEdge::new(0, 1))
        );
        assert_eq!(
            first_oriented_edge(&edges, &5),
            Ok(OrientedEdge::new(5, 2))
        );
    }

    #[test]
    fn unreachable_start_is_an_error() {
        let edges: Vec<Edge<i32>> = vec![(1, 2).into()];
        assert_eq!(
            first_oriented_edge(&edges, &3),
            Err(ChainError::StartingVertexUnreachable { vertex: 3 })
        );
    }
}
