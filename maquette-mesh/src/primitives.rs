//! Primitive solid generation

use maquette_core::{Error, Result, Vector3f};
use serde::{Deserialize, Serialize};

use crate::mesh::EditableMesh;

/// The primitive solids the toolkit knows about.
///
/// Only the box currently generates geometry; the others are reserved and
/// fail with [`Error::Unsupported`] rather than producing wrong meshes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PrimitiveKind {
    Box,
    Sphere,
    Cylinder,
    Cone,
}

/// Build the mesh for a primitive solid with the given full dimensions,
/// centered on the origin.
pub fn build_primitive(kind: PrimitiveKind, size: Vector3f) -> Result<EditableMesh> {
    match kind {
        PrimitiveKind::Box => build_box(size),
        other => Err(Error::Unsupported(format!(
            "{other:?} primitive generation"
        ))),
    }
}

fn build_box(size: Vector3f) -> Result<EditableMesh> {
    let mut mesh = EditableMesh::new();
    let h = size / 2.0;

    let corners = [
        (-h.x, -h.y, -h.z),
        (h.x, -h.y, -h.z),
        (h.x, h.y, -h.z),
        (-h.x, h.y, -h.z),
        (-h.x, -h.y, h.z),
        (h.x, -h.y, h.z),
        (h.x, h.y, h.z),
        (-h.x, h.y, h.z),
    ];
    let vertices: Vec<_> = corners
        .iter()
        .map(|&(x, y, z)| mesh.create_vertex(x, y, z))
        .collect();

    // Quad loops wound outward; shared boundaries are de-duplicated by the
    // mesh's edge lookup, leaving the 12 edges of the solid.
    const LOOPS: [[usize; 4]; 6] = [
        [0, 3, 2, 1], // bottom
        [4, 5, 6, 7], // top
        [0, 1, 5, 4], // front
        [2, 3, 7, 6], // back
        [1, 2, 6, 5], // right
        [3, 0, 4, 7], // left
    ];
    for corner_loop in LOOPS {
        mesh.create_face(&[
            vertices[corner_loop[0]],
            vertices[corner_loop[1]],
            vertices[corner_loop[2]],
            vertices[corner_loop[3]],
        ])?;
    }
    Ok(mesh)
}

#[cfg(test)]
mod tests {
    use super::*;
    use maquette_core::Point3f;

    #[test]
    fn test_box_is_manifold() {
        let mesh = build_primitive(PrimitiveKind::Box, Vector3f::new(2.0, 2.0, 2.0)).unwrap();
        assert_eq!(mesh.vertex_count(), 8);
        assert_eq!(mesh.edge_count(), 12);
        assert_eq!(mesh.face_count(), 6);
    }

    #[test]
    fn test_box_extents_match_dimensions() {
        let mesh = build_primitive(PrimitiveKind::Box, Vector3f::new(10.0, 50.0, 12.0)).unwrap();
        let extents = mesh.local_extents();
        assert_eq!(extents.min, Point3f::new(-5.0, -25.0, -6.0));
        assert_eq!(extents.max, Point3f::new(5.0, 25.0, 6.0));
    }

    #[test]
    fn test_non_box_primitives_are_unsupported() {
        for kind in [
            PrimitiveKind::Sphere,
            PrimitiveKind::Cylinder,
            PrimitiveKind::Cone,
        ] {
            let result = build_primitive(kind, Vector3f::new(1.0, 1.0, 1.0));
            assert!(matches!(result, Err(Error::Unsupported(_))));
        }
    }
}
