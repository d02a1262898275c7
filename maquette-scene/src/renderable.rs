//! Concrete renderables for scene nodes

use std::cell::RefCell;
use std::rc::Rc;

use maquette_core::{Extents3, Point3f, Renderable, Vector3f};
use maquette_mesh::EditableMesh;

/// A box solid: full dimensions centered on the local origin
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxRenderable {
    size: Vector3f,
}

impl BoxRenderable {
    /// Create a box with the given full width, height and depth
    pub fn new(width: f32, height: f32, depth: f32) -> Self {
        Self {
            size: Vector3f::new(width, height, depth),
        }
    }

    /// The box's full dimensions
    pub fn size(&self) -> Vector3f {
        self.size
    }
}

impl Renderable for BoxRenderable {
    fn local_extents(&self) -> Extents3 {
        Extents3::from_center_half_sizes(Point3f::origin(), self.size / 2.0)
    }
}

/// A renderable wrapping a shared editable mesh.
///
/// Extents are the mesh's current vertex hull at query time, so topology
/// and position edits show through without invalidation bookkeeping.
#[derive(Clone)]
pub struct MeshRenderable {
    mesh: Rc<RefCell<EditableMesh>>,
}

impl MeshRenderable {
    /// Wrap an already shared mesh
    pub fn new(mesh: Rc<RefCell<EditableMesh>>) -> Self {
        Self { mesh }
    }

    /// Take ownership of a mesh and share it
    pub fn from_mesh(mesh: EditableMesh) -> Self {
        Self::new(Rc::new(RefCell::new(mesh)))
    }

    /// The shared mesh, for editing alongside the scene
    pub fn mesh(&self) -> Rc<RefCell<EditableMesh>> {
        self.mesh.clone()
    }
}

impl Renderable for MeshRenderable {
    fn local_extents(&self) -> Extents3 {
        self.mesh.borrow().local_extents()
    }
}
