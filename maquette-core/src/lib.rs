//! Core data structures and traits for maquette
//!
//! This crate provides the foundational types for the maquette authoring
//! toolkit: points and rotations, rigid transforms, axis-aligned extents,
//! and the traits shared by the scene-graph and mesh crates.

pub mod point;
pub mod transform;
pub mod extents;
pub mod traits;
pub mod error;

pub use point::*;
pub use transform::*;
pub use extents::*;
pub use traits::*;
pub use error::*;

/// Re-export commonly used types from nalgebra
pub use nalgebra::{Isometry3, Point3, UnitQuaternion, Vector3};

/// Common result type for maquette operations
pub type Result<T> = std::result::Result<T, Error>;
