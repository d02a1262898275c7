//! Mesh element identifiers and records

use maquette_core::Point3f;
use serde::{Deserialize, Serialize};

/// Identifier of a vertex within one mesh
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct VertexId(pub(crate) u32);

/// Identifier of an edge within one mesh
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct EdgeId(pub(crate) u32);

/// Identifier of a face within one mesh
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct FaceId(pub(crate) u32);

/// A mesh vertex with a unique id and a 3D position
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vertex {
    pub id: VertexId,
    pub position: Point3f,
}

/// An undirected edge connecting exactly two vertices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    pub id: EdgeId,
    pub endpoints: [VertexId; 2],
}

impl Edge {
    /// Normalized endpoint pair used to look up shared edges regardless of
    /// direction
    pub(crate) fn key(a: VertexId, b: VertexId) -> (VertexId, VertexId) {
        if a <= b {
            (a, b)
        } else {
            (b, a)
        }
    }

    /// Check whether this edge joins the two given vertices
    pub fn connects(&self, a: VertexId, b: VertexId) -> bool {
        Self::key(a, b) == Self::key(self.endpoints[0], self.endpoints[1])
    }

    /// The endpoint opposite `vertex`, if `vertex` is an endpoint
    pub fn other_endpoint(&self, vertex: VertexId) -> Option<VertexId> {
        if self.endpoints[0] == vertex {
            Some(self.endpoints[1])
        } else if self.endpoints[1] == vertex {
            Some(self.endpoints[0])
        } else {
            None
        }
    }
}

/// A face: an ordered loop of at least three vertices.
///
/// `edges[i]` joins `vertices[i]` to `vertices[(i + 1) % n]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Face {
    pub id: FaceId,
    pub vertices: Vec<VertexId>,
    pub edges: Vec<EdgeId>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_key_is_direction_independent() {
        let (a, b) = (VertexId(3), VertexId(1));
        assert_eq!(Edge::key(a, b), Edge::key(b, a));
        assert_eq!(Edge::key(a, b), (VertexId(1), VertexId(3)));
    }

    #[test]
    fn test_edge_connects_and_other_endpoint() {
        let edge = Edge {
            id: EdgeId(0),
            endpoints: [VertexId(2), VertexId(7)],
        };
        assert!(edge.connects(VertexId(7), VertexId(2)));
        assert!(!edge.connects(VertexId(2), VertexId(3)));
        assert_eq!(edge.other_endpoint(VertexId(2)), Some(VertexId(7)));
        assert_eq!(edge.other_endpoint(VertexId(5)), None);
    }
}
