//! Editable mesh topology for maquette
//!
//! This crate provides the incremental-editing mesh used by the maquette
//! authoring toolkit: an id-addressable vertex/edge/face structure where
//! shared boundaries between adjacent faces are represented once, plus
//! primitive-solid generation and element selection for modifiers.

pub mod topology;
pub mod mesh;
pub mod primitives;
pub mod selection;

pub use topology::*;
pub use mesh::*;
pub use primitives::*;
pub use selection::*;
