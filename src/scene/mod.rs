//! Compiled scene model: transforms, meshes, the node tree, and persistence.

mod io;
mod mesh;
mod node;
mod transform;

pub use io::*;
pub use mesh::*;
pub use node::*;
pub use transform::*;
