//! Scene composition: fixed-order assembly of the compiled scene tree.

use glam::Vec3;
use rand::Rng;

use super::prop::place_prop;
use super::tile::{ceiling_tile, floor_tile, wall_tile};
use super::{BuildAssets, BuildConfig, BuildError, BuildReport};
use crate::catalog::PropCategory;
use crate::map::{MapDocument, PointEntity};
use crate::scene::{CompiledScene, SceneNode};

/// Compile a map document into a scene tree.
///
/// Category order is fixed: floors, walls, ceilings, then the five prop
/// layers. Every category gets its container node even when disabled or
/// empty, so consumers can navigate the tree by name unconditionally. The
/// ceiling layer is derived from the floor layer, one tile at wall height
/// above each floor entity.
///
/// Per-entity misses degrade that entity (default material, or skip for
/// props) and are tallied in the returned report; the only hard errors are a
/// document with no entities at all and one with no person to spawn from.
pub fn build_scene<R: Rng>(
    doc: &MapDocument,
    config: &BuildConfig,
    assets: &BuildAssets,
    rng: &mut R,
) -> Result<(CompiledScene, BuildReport), BuildError> {
    if doc.is_empty() {
        return Err(BuildError::EmptyDocument);
    }
    let person = doc.layers.persons.first().ok_or(BuildError::MissingSpawn)?;

    let mut report = BuildReport::default();

    let mut floor = SceneNode::new("Floor");
    if config.floors {
        for area in &doc.layers.floors {
            floor.add_child(floor_tile(area, config, assets, &mut report, rng));
        }
    }

    let mut walls = SceneNode::new("Walls");
    if config.walls {
        for area in &doc.layers.walls {
            walls.add_child(wall_tile(area, config, assets, &mut report));
        }
    }

    let mut ceiling = SceneNode::new("Ceiling");
    if config.ceilings {
        for area in &doc.layers.floors {
            ceiling.add_child(ceiling_tile(area, config, assets, &mut report));
        }
    }

    let mut root = SceneNode::new("Map");
    root.children = vec![floor, walls, ceiling];
    for category in PropCategory::ALL {
        let mut container = SceneNode::new(category.container_name());
        if config.category_enabled(category) {
            place_layer(
                prop_layer(doc, category),
                category,
                assets,
                &mut container,
                &mut report,
            );
        }
        root.add_child(container);
    }

    let spawn = Vec3::new(person.pos.x as f32, 0.0, -(person.pos.y as f32));
    Ok((CompiledScene { root, spawn }, report))
}

fn prop_layer<'a>(doc: &'a MapDocument, category: PropCategory) -> &'a [PointEntity] {
    match category {
        PropCategory::DoorWindow => &doc.layers.door_and_windows,
        PropCategory::Furniture => &doc.layers.furniture,
        PropCategory::Utensil => &doc.layers.utensils,
        PropCategory::Electronic => &doc.layers.electronics,
        PropCategory::Goal => &doc.layers.goals,
    }
}

fn place_layer(
    entities: &[PointEntity],
    category: PropCategory,
    assets: &BuildAssets,
    container: &mut SceneNode,
    report: &mut BuildReport,
) {
    let catalog = assets.props.category(category);
    for entity in entities {
        match catalog.resolve(&entity.code) {
            Ok(descriptor) if descriptor.template.name.is_empty() => {
                log::error!(
                    "{} prop {} has no template configured, skipping",
                    category,
                    entity.code
                );
                report.prop_misses.push((category, entity.code.clone()));
            }
            Ok(descriptor) => {
                container.add_child(place_prop(entity, descriptor));
                report.props += 1;
            }
            Err(_) => {
                log::error!(
                    "prop {} not found in the {} catalog, skipping",
                    entity.code,
                    category
                );
                report.prop_misses.push((category, entity.code.clone()));
            }
        }
    }
}
