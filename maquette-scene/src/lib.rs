//! Scene graph for maquette
//!
//! Nodes form a tree: each node carries a local transform (position and
//! orientation), an optional renderable contributing local bounds, and an
//! ordered collection of children. Bounds aggregate bottom-up over the tree
//! under the composed ancestor transforms.
//!
//! Node handles are reference-counted and single-threaded; hosts mutating a
//! tree from several threads must serialize access externally.

pub mod node;
pub mod renderable;
pub mod selection;

pub use node::*;
pub use renderable::*;
pub use selection::*;
