//! Scene tree produced by a build.
//!
//! Nodes own their children outright; the tree is plain data with no back
//! references, so it serializes directly and clones cheaply enough for tests.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::{Collider, Mesh, Transform};

/// One node in the compiled scene tree.
///
/// Category containers are nodes with no mesh; tiles, wall panels, and props
/// are leaf-ish nodes carrying geometry, a material resource path, and a
/// collision shape derived from the mesh.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SceneNode {
    pub name: String,
    #[serde(default)]
    pub transform: Transform,
    #[serde(default)]
    pub mesh: Option<Mesh>,
    /// Resource path of the material to render with, if the node is visible.
    #[serde(default)]
    pub material: Option<String>,
    #[serde(default)]
    pub collider: Option<Collider>,
    #[serde(default)]
    pub children: Vec<SceneNode>,
}

impl SceneNode {
    pub fn new(name: impl Into<String>) -> Self {
        SceneNode {
            name: name.into(),
            ..SceneNode::default()
        }
    }

    pub fn add_child(&mut self, child: SceneNode) {
        self.children.push(child);
    }

    /// Direct child lookup by name.
    pub fn child(&self, name: &str) -> Option<&SceneNode> {
        self.children.iter().find(|c| c.name == name)
    }

    /// Depth-first visit of this node and every descendant.
    pub fn walk<F: FnMut(&SceneNode)>(&self, f: &mut F) {
        f(self);
        for child in &self.children {
            child.walk(f);
        }
    }

    /// Total node count including this node.
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        self.walk(&mut |_| count += 1);
        count
    }
}

/// Final build artifact: the scene tree plus the advisory spawn point.
///
/// The spawn point is where a controllable avatar should be relocated when the
/// scene is loaded; the tree itself does not depend on it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompiledScene {
    pub root: SceneNode,
    pub spawn: Vec3,
}
