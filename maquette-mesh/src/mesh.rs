//! Editable mesh structure and incremental edit operations

use std::collections::HashMap;

use itertools::Itertools;
use maquette_core::{
    Error, Extents3, Point3f, Renderable, Result, RigidTransform, Transformable, Vector3f,
};
use serde::{Deserialize, Serialize};

use crate::topology::{Edge, EdgeId, Face, FaceId, Vertex, VertexId};

/// A mutable vertex/edge/face topology supporting incremental edits.
///
/// Elements are id-addressable; an edge joining two vertices is represented
/// once no matter how many faces border it, so meshes built through
/// [`EditableMesh::create_face`] stay manifold along shared boundaries.
///
/// Every mutation either fully succeeds or leaves the mesh untouched: a
/// caller can never observe a face referencing a missing edge or an edge
/// referencing a missing vertex.
///
/// The mesh performs no internal locking and is meant to be mutated from a
/// single logical thread; hosts sharing one instance across threads must
/// serialize access externally.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EditableMesh {
    vertices: HashMap<VertexId, Vertex>,
    edges: HashMap<EdgeId, Edge>,
    faces: HashMap<FaceId, Face>,
    edge_lookup: HashMap<(VertexId, VertexId), EdgeId>,
    next_vertex: u32,
    next_edge: u32,
    next_face: u32,
}

impl EditableMesh {
    /// Create a new empty mesh
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the number of vertices
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Get the number of edges
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Get the number of faces
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Check if the mesh has no elements
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Allocate a new vertex at the given position and return its id
    pub fn create_vertex(&mut self, x: f32, y: f32, z: f32) -> VertexId {
        let id = VertexId(self.next_vertex);
        self.next_vertex += 1;
        self.vertices.insert(
            id,
            Vertex {
                id,
                position: Point3f::new(x, y, z),
            },
        );
        id
    }

    /// Create a face from an ordered loop of existing vertices.
    ///
    /// Edges between consecutive loop entries are created on demand; an edge
    /// already joining the same two vertices is reused, so adjacent faces
    /// share their boundary. Fails with [`Error::InvalidTopology`] when the
    /// loop has fewer than three vertices, names an unknown vertex, or
    /// repeats a vertex; on failure the mesh is unchanged.
    pub fn create_face(&mut self, loop_vertices: &[VertexId]) -> Result<FaceId> {
        if loop_vertices.len() < 3 {
            return Err(Error::InvalidTopology(format!(
                "face loop needs at least 3 vertices, got {}",
                loop_vertices.len()
            )));
        }
        for vertex in loop_vertices {
            if !self.vertices.contains_key(vertex) {
                return Err(Error::InvalidTopology(format!(
                    "face loop references unknown vertex {vertex:?}"
                )));
            }
        }
        if !loop_vertices.iter().all_unique() {
            return Err(Error::InvalidTopology(
                "face loop repeats a vertex".to_string(),
            ));
        }

        // Validated; from here on every step succeeds.
        let edges = loop_vertices
            .iter()
            .copied()
            .circular_tuple_windows()
            .map(|(a, b)| self.ensure_edge(a, b))
            .collect();
        let id = FaceId(self.next_face);
        self.next_face += 1;
        self.faces.insert(
            id,
            Face {
                id,
                vertices: loop_vertices.to_vec(),
                edges,
            },
        );
        Ok(id)
    }

    /// Insert a new vertex into an existing face, fanning the face into
    /// triangles.
    ///
    /// The new vertex sits at the face centroid. One spoke edge is created
    /// from it to each original loop vertex, and the face is replaced by one
    /// triangle per original boundary edge; boundary edges themselves are
    /// reused. For an n-gon this adds 1 vertex, n edges and (n - 1) faces
    /// net. Fails with [`Error::InvalidTopology`] when the face id is
    /// unknown, leaving the mesh unchanged.
    pub fn insert_vertex_in_face(&mut self, face: FaceId) -> Result<VertexId> {
        let centroid = self.face_centroid(face)?;
        let loop_vertices = self.faces[&face].vertices.clone();

        self.faces.remove(&face);
        let center = self.create_vertex(centroid.x, centroid.y, centroid.z);
        for (a, b) in loop_vertices.iter().copied().circular_tuple_windows() {
            // Boundary edge (a, b) already exists; only the spokes are new.
            let boundary = self.ensure_edge(a, b);
            let spoke_in = self.ensure_edge(b, center);
            let spoke_out = self.ensure_edge(center, a);
            let id = FaceId(self.next_face);
            self.next_face += 1;
            self.faces.insert(
                id,
                Face {
                    id,
                    vertices: vec![a, b, center],
                    edges: vec![boundary, spoke_in, spoke_out],
                },
            );
        }
        Ok(center)
    }

    /// Remove a face, dropping any of its edges no other face still uses.
    ///
    /// Vertices are kept; they may be referenced by other faces or by
    /// in-progress construction. Fails with [`Error::InvalidTopology`] when
    /// the face id is unknown.
    pub fn remove_face(&mut self, face: FaceId) -> Result<()> {
        let removed = self
            .faces
            .remove(&face)
            .ok_or_else(|| Error::InvalidTopology(format!("unknown face {face:?}")))?;
        for edge_id in removed.edges {
            let still_used = self.faces.values().any(|f| f.edges.contains(&edge_id));
            if !still_used {
                if let Some(edge) = self.edges.remove(&edge_id) {
                    self.edge_lookup
                        .remove(&Edge::key(edge.endpoints[0], edge.endpoints[1]));
                }
            }
        }
        Ok(())
    }

    /// Look up a vertex by id
    pub fn vertex(&self, id: VertexId) -> Option<&Vertex> {
        self.vertices.get(&id)
    }

    /// Look up an edge by id
    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.get(&id)
    }

    /// Look up a face by id
    pub fn face(&self, id: FaceId) -> Option<&Face> {
        self.faces.get(&id)
    }

    /// Iterate over all vertices
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex> {
        self.vertices.values()
    }

    /// Iterate over all edges
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.values()
    }

    /// Iterate over all faces
    pub fn faces(&self) -> impl Iterator<Item = &Face> {
        self.faces.values()
    }

    /// Ids of all vertices
    pub fn vertex_ids(&self) -> Vec<VertexId> {
        self.vertices.keys().copied().collect()
    }

    /// The edge joining two vertices, if one exists
    pub fn edge_between(&self, a: VertexId, b: VertexId) -> Option<EdgeId> {
        self.edge_lookup.get(&Edge::key(a, b)).copied()
    }

    /// The positions of a face's loop vertices, in loop order
    pub fn face_vertex_positions(&self, face: FaceId) -> Result<Vec<Point3f>> {
        let face = self
            .faces
            .get(&face)
            .ok_or_else(|| Error::InvalidTopology(format!("unknown face {face:?}")))?;
        Ok(face
            .vertices
            .iter()
            .map(|v| self.vertices[v].position)
            .collect())
    }

    /// The centroid of a face's loop vertices
    pub fn face_centroid(&self, face: FaceId) -> Result<Point3f> {
        let positions = self.face_vertex_positions(face)?;
        let mut sum = Vector3f::zeros();
        for position in &positions {
            sum += position.coords;
        }
        Ok(Point3f::from(sum / positions.len() as f32))
    }

    /// Move a vertex to a new position
    pub fn set_vertex_position(&mut self, id: VertexId, position: Point3f) -> Result<()> {
        let vertex = self
            .vertices
            .get_mut(&id)
            .ok_or_else(|| Error::InvalidTopology(format!("unknown vertex {id:?}")))?;
        vertex.position = position;
        Ok(())
    }

    /// Translate a set of vertices by a common offset.
    ///
    /// Validates every id before moving anything, so an unknown id leaves
    /// all positions unchanged.
    pub fn translate_vertices(&mut self, ids: &[VertexId], offset: Vector3f) -> Result<()> {
        for id in ids {
            if !self.vertices.contains_key(id) {
                return Err(Error::InvalidTopology(format!("unknown vertex {id:?}")));
            }
        }
        for id in ids {
            if let Some(vertex) = self.vertices.get_mut(id) {
                vertex.position += offset;
            }
        }
        Ok(())
    }

    /// The hull of all vertex positions; empty extents for an empty mesh
    pub fn local_extents(&self) -> Extents3 {
        let mut extents = Extents3::empty();
        for vertex in self.vertices.values() {
            extents.expand_to_contain(vertex.position);
        }
        extents
    }

    fn ensure_edge(&mut self, a: VertexId, b: VertexId) -> EdgeId {
        let key = Edge::key(a, b);
        if let Some(&id) = self.edge_lookup.get(&key) {
            return id;
        }
        let id = EdgeId(self.next_edge);
        self.next_edge += 1;
        self.edges.insert(
            id,
            Edge {
                id,
                endpoints: [a, b],
            },
        );
        self.edge_lookup.insert(key, id);
        id
    }
}

impl Renderable for EditableMesh {
    fn local_extents(&self) -> Extents3 {
        EditableMesh::local_extents(self)
    }
}

impl Transformable for EditableMesh {
    fn transform(&mut self, transform: &RigidTransform) {
        for vertex in self.vertices.values_mut() {
            vertex.position = transform.transform_point(&vertex.position);
        }
    }
}
