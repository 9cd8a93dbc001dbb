//! Prop instantiation: template normalization and placement.

use glam::Vec3;

use crate::catalog::{PropDescriptor, TemplateComponent};
use crate::map::PointEntity;
use crate::scene::{Collider, Mesh, SceneNode, Transform};

/// Exactly one renderable, one collision shape, and one material slot.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NormalizedBundle {
    pub mesh: Mesh,
    pub collider: Collider,
    /// Material resource path; empty when the template authors none.
    pub material: String,
}

/// Collapse a free-form component list down to one component of each kind.
///
/// The first of each kind wins and surplus components are dropped. A missing
/// kind is filled with an empty default, so mesh-less marker templates are
/// legal. The collision shape is always rebuilt from the renderable mesh,
/// superseding any authored collider, so physics and visuals cannot disagree.
pub fn normalize(components: &[TemplateComponent]) -> NormalizedBundle {
    let mut mesh: Option<&Mesh> = None;
    let mut material: Option<&str> = None;
    let mut collider_seen = false;
    let mut dropped = 0usize;

    for component in components {
        match component {
            TemplateComponent::Mesh(m) => {
                if mesh.is_none() {
                    mesh = Some(m);
                } else {
                    dropped += 1;
                }
            }
            TemplateComponent::Collider(_) => {
                if collider_seen {
                    dropped += 1;
                } else {
                    collider_seen = true;
                }
            }
            TemplateComponent::Material(m) => {
                if material.is_none() {
                    material = Some(m);
                } else {
                    dropped += 1;
                }
            }
        }
    }
    if dropped > 0 {
        log::debug!("dropped {} surplus template component(s)", dropped);
    }

    let mut mesh = mesh.cloned().unwrap_or_default();
    if mesh.normals.len() != mesh.vertices.len() {
        mesh.recalculate_normals();
    }
    let collider = Collider::from_mesh(&mesh);
    let material = material.unwrap_or_default().to_string();

    NormalizedBundle {
        mesh,
        collider,
        material,
    }
}

/// Place one prop entity using its resolved descriptor.
///
/// The document cell maps to world (x, 0, -y); the descriptor's horizontal
/// offset is added on top and its yaw is the only rotation applied.
pub fn place_prop(entity: &PointEntity, descriptor: &PropDescriptor) -> SceneNode {
    let bundle = normalize(&descriptor.template.components);
    let position = Vec3::new(
        entity.pos.x as f32 + descriptor.offset.x,
        0.0,
        -(entity.pos.y as f32) + descriptor.offset.y,
    );

    let mut node = SceneNode::new(descriptor.template.name.clone());
    node.transform = Transform {
        position,
        rotation: Vec3::new(0.0, descriptor.rotation_y_deg, 0.0),
        scale: Vec3::ONE,
    };
    node.mesh = Some(bundle.mesh);
    node.collider = Some(bundle.collider);
    node.material = Some(bundle.material);
    node
}
