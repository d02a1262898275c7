//! Element selection over an editable mesh
//!
//! Modifiers operate on a selection: a set of element ids of one kind,
//! gathered up front and then iterated while mutating the mesh through its
//! write accessors.

use serde::{Deserialize, Serialize};

use crate::mesh::EditableMesh;
use crate::topology::{EdgeId, FaceId, VertexId};

/// The kind of mesh element a selection holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MeshElementKind {
    Vertices,
    Edges,
    Faces,
}

/// A subset of one mesh's elements, all of the same kind
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MeshSelection {
    Vertices(Vec<VertexId>),
    Edges(Vec<EdgeId>),
    Faces(Vec<FaceId>),
}

impl MeshSelection {
    /// Select every element of the given kind, in id order
    pub fn all(mesh: &EditableMesh, kind: MeshElementKind) -> Self {
        match kind {
            MeshElementKind::Vertices => {
                let mut ids: Vec<_> = mesh.vertices().map(|v| v.id).collect();
                ids.sort_unstable();
                Self::Vertices(ids)
            }
            MeshElementKind::Edges => {
                let mut ids: Vec<_> = mesh.edges().map(|e| e.id).collect();
                ids.sort_unstable();
                Self::Edges(ids)
            }
            MeshElementKind::Faces => {
                let mut ids: Vec<_> = mesh.faces().map(|f| f.id).collect();
                ids.sort_unstable();
                Self::Faces(ids)
            }
        }
    }

    /// The element kind this selection holds
    pub fn kind(&self) -> MeshElementKind {
        match self {
            Self::Vertices(_) => MeshElementKind::Vertices,
            Self::Edges(_) => MeshElementKind::Edges,
            Self::Faces(_) => MeshElementKind::Faces,
        }
    }

    /// Number of selected elements
    pub fn len(&self) -> usize {
        match self {
            Self::Vertices(ids) => ids.len(),
            Self::Edges(ids) => ids.len(),
            Self::Faces(ids) => ids.len(),
        }
    }

    /// Check whether nothing is selected
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The selected vertex ids, if this is a vertex selection
    pub fn as_vertices(&self) -> Option<&[VertexId]> {
        match self {
            Self::Vertices(ids) => Some(ids),
            _ => None,
        }
    }

    /// The selected edge ids, if this is an edge selection
    pub fn as_edges(&self) -> Option<&[EdgeId]> {
        match self {
            Self::Edges(ids) => Some(ids),
            _ => None,
        }
    }

    /// The selected face ids, if this is a face selection
    pub fn as_faces(&self) -> Option<&[FaceId]> {
        match self {
            Self::Faces(ids) => Some(ids),
            _ => None,
        }
    }
}
