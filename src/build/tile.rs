//! Tile mesh generation: floors, ceilings, and four-panel wall shells.
//!
//! Every tile is the unit template stretched by the node's scale rather than
//! re-meshed per size; only the UVs are baked per tile so textures keep their
//! world density. Document (x, y) maps to world (x, -y) on the ground plane,
//! and the inclusive end cell widens each span by one.

use glam::{Vec2, Vec3};
use rand::Rng;

use super::prop::normalize;
use super::{BuildAssets, BuildConfig, BuildReport};
use crate::catalog::{MaterialDescriptor, PropTemplate, Surface};
use crate::map::AreaEntity;
use crate::scene::{Collider, Mesh, SceneNode, Transform};

/// Unit floor quad: 1x1 in the XZ plane, centered on the origin, facing +Y.
pub fn floor_template() -> Mesh {
    Mesh {
        vertices: vec![
            Vec3::new(-0.5, 0.0, -0.5),
            Vec3::new(-0.5, 0.0, 0.5),
            Vec3::new(0.5, 0.0, 0.5),
            Vec3::new(0.5, 0.0, -0.5),
        ],
        triangles: vec![0, 1, 2, 0, 2, 3],
        uv: vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(0.0, 1.0),
            Vec2::new(1.0, 1.0),
            Vec2::new(1.0, 0.0),
        ],
        normals: Vec::new(),
    }
}

/// Unit wall panel: 1x1 vertical quad on the cell's -X side, facing -X.
pub fn wall_template() -> Mesh {
    Mesh {
        vertices: vec![
            Vec3::new(-0.5, 0.0, -0.5),
            Vec3::new(-0.5, 0.0, 0.5),
            Vec3::new(-0.5, 1.0, -0.5),
            Vec3::new(-0.5, 1.0, 0.5),
        ],
        triangles: vec![0, 1, 2, 3, 2, 1],
        uv: vec![
            Vec2::new(0.0, 1.0),
            Vec2::new(1.0, 1.0),
            Vec2::new(0.0, 0.0),
            Vec2::new(1.0, 0.0),
        ],
        normals: Vec::new(),
    }
}

/// World-space frame of an area entity: its transformed start and end corners.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Footprint {
    pub start: Vec3,
    pub end: Vec3,
}

impl Footprint {
    pub fn from_area(area: &AreaEntity, height: f32) -> Self {
        let start = Vec3::new(area.start.x as f32, height, -(area.start.y as f32));
        // The inclusive end widens in f32, so an extreme end cell cannot
        // overflow i32
        let end = Vec3::new(area.end.x as f32 + 1.0, height, -(area.end.y as f32 + 1.0));
        Footprint { start, end }
    }

    /// Node position: the start corner plus half the span.
    pub fn position(&self) -> Vec3 {
        self.start + (self.end - self.start) / 2.0
    }

    /// Node scale; `height` fills the vertical component.
    pub fn size(&self, height: f32) -> Vec3 {
        Vec3::new(
            (self.end.x - self.start.x).abs(),
            height,
            (self.end.z - self.start.z).abs(),
        )
    }

    pub fn min_x(&self) -> f32 {
        self.start.x.min(self.end.x)
    }

    pub fn min_z(&self) -> f32 {
        self.start.z.min(self.end.z)
    }

    pub fn max_z(&self) -> f32 {
        self.start.z.max(self.end.z)
    }
}

fn tile_name(prefix: &str, area: &AreaEntity) -> String {
    format!(
        "{}:{}_{}_{}_{}",
        prefix, area.start.x, area.start.y, area.end.x, area.end.y
    )
}

/// Resolve a surface material, falling back to the configured default (and
/// tallying the miss) when the code is not in the catalog.
pub(super) fn resolve_surface_material(
    surface: Surface,
    code: &str,
    config: &BuildConfig,
    assets: &BuildAssets,
    report: &mut BuildReport,
) -> MaterialDescriptor {
    match assets.materials.surface(surface).resolve(code) {
        Ok(descriptor) => descriptor.clone(),
        Err(_) => {
            log::error!(
                "material {} not found, using the default {} material",
                code,
                surface
            );
            report.material_misses.push((surface, code.to_string()));
            MaterialDescriptor::neutral(config.default_resource(surface))
        }
    }
}

/// Bake a horizontal tile's UVs.
///
/// UVs are first stretched to the footprint so texel density survives the
/// node's scale. Seamless materials then anchor them to world coordinates so
/// the texture continues across adjoining tiles; per-tile materials apply the
/// configured surface multiplier instead. The descriptor's own scale applies
/// last in both modes.
fn apply_tile_uv(
    mesh: &mut Mesh,
    size: Vec3,
    anchor: Vec2,
    descriptor: &MaterialDescriptor,
    per_tile_scale: f32,
) {
    mesh.scale_uv(Vec2::new(size.x, size.z));
    if descriptor.uses_global_uv {
        mesh.offset_uv(anchor);
    } else {
        mesh.scale_uv(Vec2::splat(per_tile_scale));
    }
    mesh.scale_uv(descriptor.uv_scale);
}

/// Generate one floor tile, scattering grass over it when its code matches
/// the configured grass code.
pub fn floor_tile<R: Rng>(
    area: &AreaEntity,
    config: &BuildConfig,
    assets: &BuildAssets,
    report: &mut BuildReport,
    rng: &mut R,
) -> SceneNode {
    let footprint = Footprint::from_area(area, 0.0);
    let size = footprint.size(1.0);
    let descriptor = resolve_surface_material(Surface::Floor, &area.code, config, assets, report);

    let mut mesh = floor_template();
    let anchor = Vec2::new(footprint.min_x(), footprint.min_z());
    apply_tile_uv(
        &mut mesh,
        size,
        anchor,
        &descriptor,
        config.surface_uv_scale(Surface::Floor),
    );
    mesh.recalculate_normals();

    let mut node = SceneNode::new(tile_name("Floor", area));
    node.transform = Transform {
        position: footprint.position(),
        rotation: Vec3::ZERO,
        scale: size,
    };
    node.collider = Some(Collider::from_mesh(&mesh));
    node.material = Some(descriptor.resource.clone());
    node.mesh = Some(mesh);
    report.tiles += 1;

    if config.use_grass && area.code == config.grass_code {
        if let Some(template) = &assets.grass {
            scatter_grass(&mut node, &footprint, size, template, report, rng);
        }
    }

    node
}

/// Generate one ceiling tile over a floor entity, at wall height, facing down.
pub fn ceiling_tile(
    area: &AreaEntity,
    config: &BuildConfig,
    assets: &BuildAssets,
    report: &mut BuildReport,
) -> SceneNode {
    let footprint = Footprint::from_area(area, config.wall_height);
    let size = footprint.size(1.0);
    let descriptor =
        resolve_surface_material(Surface::Ceiling, &area.code, config, assets, report);

    let mut mesh = floor_template();
    // The 180 degree pitch below mirrors z, so the seamless anchor runs along
    // -z to stay one world-space mapping across tiles
    let anchor = Vec2::new(footprint.min_x(), -footprint.max_z());
    apply_tile_uv(
        &mut mesh,
        size,
        anchor,
        &descriptor,
        config.surface_uv_scale(Surface::Ceiling),
    );
    mesh.recalculate_normals();

    let mut node = SceneNode::new(tile_name("Ceiling", area));
    // The template faces up; pitch it over so it faces down into the room
    node.transform = Transform {
        position: footprint.position(),
        rotation: Vec3::new(180.0, 0.0, 0.0),
        scale: size,
    };
    node.collider = Some(Collider::from_mesh(&mesh));
    node.material = Some(descriptor.resource.clone());
    node.mesh = Some(mesh);
    report.tiles += 1;

    node
}

/// Generate one wall entity as a shell of four panels.
///
/// The shell node carries the footprint position and scale; each panel is the
/// unit template plus a yaw, so the four faces close the scaled box. Front and
/// back run the z extent, left and right the x extent, which is also how their
/// UVs are stretched.
pub fn wall_tile(
    area: &AreaEntity,
    config: &BuildConfig,
    assets: &BuildAssets,
    report: &mut BuildReport,
) -> SceneNode {
    let footprint = Footprint::from_area(area, 0.0);
    let size = footprint.size(config.wall_height);
    let descriptor = resolve_surface_material(Surface::Wall, &area.code, config, assets, report);

    let mut shell = SceneNode::new(tile_name("Wall", area));
    shell.transform = Transform {
        position: footprint.position(),
        rotation: Vec3::ZERO,
        scale: size,
    };

    let panels = [
        ("WallFront", 0.0, size.z),
        ("WallBack", 180.0, size.z),
        ("WallLeft", 90.0, size.x),
        ("WallRight", -90.0, size.x),
    ];
    for (prefix, yaw, u_span) in panels {
        let mut mesh = wall_template();
        mesh.scale_uv(Vec2::new(u_span, size.y));
        mesh.scale_uv(Vec2::splat(config.surface_uv_scale(Surface::Wall)));
        mesh.recalculate_normals();

        let mut panel = SceneNode::new(tile_name(prefix, area));
        panel.transform = Transform {
            position: Vec3::ZERO,
            rotation: Vec3::new(0.0, yaw, 0.0),
            scale: Vec3::ONE,
        };
        panel.collider = Some(Collider::from_mesh(&mesh));
        panel.material = Some(descriptor.resource.clone());
        panel.mesh = Some(mesh);
        shell.add_child(panel);
    }
    report.panels += 4;

    shell
}

/// Uniform sample over [a, b] regardless of argument order.
fn sample_span<R: Rng>(rng: &mut R, a: f32, b: f32) -> f32 {
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    if hi > lo {
        rng.gen_range(lo..hi)
    } else {
        lo
    }
}

/// Scatter grass instances over a floor tile, one per square unit.
///
/// Instances parent under the tile, so their local transforms divide out the
/// tile's non-uniform scale to land at exact world positions with unit size.
/// Blades are decorative only: mesh and material, never a collider.
fn scatter_grass<R: Rng>(
    tile: &mut SceneNode,
    footprint: &Footprint,
    size: Vec3,
    template: &PropTemplate,
    report: &mut BuildReport,
    rng: &mut R,
) {
    let count = (size.x * size.z) as usize;
    if count == 0 {
        return;
    }

    let bundle = normalize(&template.components);
    let parent_position = tile.transform.position;
    let inverse_scale = Vec3::new(1.0 / size.x, 1.0, 1.0 / size.z);

    for _ in 0..count {
        let world = Vec3::new(
            sample_span(rng, footprint.start.x, footprint.end.x),
            // Slightly above the floor surface to avoid z-fighting
            0.01,
            sample_span(rng, footprint.start.z, footprint.end.z),
        );
        let mut blade = SceneNode::new(template.name.clone());
        blade.transform = Transform {
            position: (world - parent_position) * inverse_scale,
            rotation: Vec3::ZERO,
            scale: inverse_scale,
        };
        blade.mesh = Some(bundle.mesh.clone());
        blade.material = Some(bundle.material.clone());
        tile.add_child(blade);
    }
    report.grass += count;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{MaterialCatalog, TemplateComponent};
    use glam::IVec2;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn area(code: &str, start: (i32, i32), end: (i32, i32)) -> AreaEntity {
        AreaEntity {
            code: code.to_string(),
            start: IVec2::new(start.0, start.1),
            end: IVec2::new(end.0, end.1),
        }
    }

    fn assets_with_floor(code: &str, descriptor: MaterialDescriptor) -> BuildAssets {
        let mut assets = BuildAssets::default();
        let mut catalog = MaterialCatalog::new();
        catalog.register(code, descriptor).unwrap();
        assets.materials.floor = catalog;
        assets
    }

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(7)
    }

    #[test]
    fn test_floor_tile_placement() {
        let assets = assets_with_floor("1.1", MaterialDescriptor::neutral("materials/wood"));
        let config = BuildConfig::default();
        let mut report = BuildReport::default();
        let tile = floor_tile(
            &area("1.1", (0, 0), (1, 1)),
            &config,
            &assets,
            &mut report,
            &mut rng(),
        );

        assert_eq!(tile.name, "Floor:0_0_1_1");
        assert!((tile.transform.position - Vec3::new(1.0, 0.0, -1.0)).length() < 0.001);
        assert!((tile.transform.scale - Vec3::new(2.0, 1.0, 2.0)).length() < 0.001);
        assert_eq!(tile.material.as_deref(), Some("materials/wood"));
        assert_eq!(report.tiles, 1);
        assert!(report.clean());

        // Per-tile UVs: footprint times the floor multiplier
        let mesh = tile.mesh.as_ref().unwrap();
        assert!((mesh.uv[2] - Vec2::new(2.0 * 0.75, 2.0 * 0.75)).length() < 0.001);
        // Collider mirrors the render mesh
        let collider = tile.collider.as_ref().unwrap();
        assert_eq!(collider.vertices, mesh.vertices);
        assert_eq!(collider.triangles, mesh.triangles);
    }

    #[test]
    fn test_single_cell_floor_is_unit_sized() {
        let assets = assets_with_floor("1.1", MaterialDescriptor::neutral("m"));
        let config = BuildConfig::default();
        let mut report = BuildReport::default();
        let tile = floor_tile(
            &area("1.1", (2, 3), (2, 3)),
            &config,
            &assets,
            &mut report,
            &mut rng(),
        );
        assert!((tile.transform.position - Vec3::new(2.5, 0.0, -3.5)).length() < 0.001);
        assert!((tile.transform.scale - Vec3::ONE).length() < 0.001);
    }

    #[test]
    fn test_inverted_range_keeps_positive_scale() {
        let assets = assets_with_floor("1.1", MaterialDescriptor::neutral("m"));
        let config = BuildConfig::default();
        let mut report = BuildReport::default();
        // end west/north of start: the abs-based size stays positive and the
        // tile sits between the two transformed corners
        let tile = floor_tile(
            &area("1.1", (2, 3), (0, 1)),
            &config,
            &assets,
            &mut report,
            &mut rng(),
        );
        assert!((tile.transform.scale - Vec3::ONE).length() < 0.001);
        assert!((tile.transform.position - Vec3::new(1.5, 0.0, -2.5)).length() < 0.001);
    }

    #[test]
    fn test_extreme_footprint_math_stays_finite() {
        // The widening to the inclusive end runs in f32, so even i32::MAX
        // cells produce a finite footprint instead of overflowing
        let footprint = Footprint::from_area(&area("1.1", (0, 0), (i32::MAX, i32::MAX)), 0.0);
        assert!(footprint.end.x.is_finite() && footprint.end.x > 2.0e9);
        assert!(footprint.end.z.is_finite() && footprint.end.z < -2.0e9);
    }

    #[test]
    fn test_floor_material_miss_uses_default() {
        let assets = BuildAssets::default();
        let config = BuildConfig::default();
        let mut report = BuildReport::default();
        let tile = floor_tile(
            &area("9.9", (0, 0), (0, 0)),
            &config,
            &assets,
            &mut report,
            &mut rng(),
        );
        assert_eq!(tile.material.as_deref(), Some("materials/floor_default"));
        assert_eq!(report.material_misses.len(), 1);
        assert_eq!(report.material_misses[0], (Surface::Floor, "9.9".to_string()));
        // The tile itself is still fully formed
        assert!(tile.mesh.is_some() && tile.collider.is_some());
    }

    #[test]
    fn test_global_uv_is_continuous_across_floor_tiles() {
        let descriptor = MaterialDescriptor {
            resource: "materials/seamless".to_string(),
            uses_global_uv: true,
            uv_scale: Vec2::ONE,
        };
        let assets = assets_with_floor("1.1", descriptor);
        let config = BuildConfig::default();
        let mut report = BuildReport::default();

        let west = floor_tile(
            &area("1.1", (0, 0), (0, 0)),
            &config,
            &assets,
            &mut report,
            &mut rng(),
        );
        let east = floor_tile(
            &area("1.1", (1, 0), (2, 0)),
            &config,
            &assets,
            &mut report,
            &mut rng(),
        );

        // The shared edge at world x = 1: west's vertex 2 and east's vertex 1
        // sit at the same world point (1, 0, 0) and must carry the same UV.
        let west_uv = west.mesh.as_ref().unwrap().uv[2];
        let east_uv = east.mesh.as_ref().unwrap().uv[1];
        assert!((west_uv - east_uv).length() < 0.001);
        assert!((west_uv - Vec2::new(1.0, 0.0)).length() < 0.001);
    }

    #[test]
    fn test_ceiling_tile_is_flipped_at_wall_height() {
        let assets = assets_with_floor("1.1", MaterialDescriptor::neutral("m"));
        let config = BuildConfig::default();
        let mut report = BuildReport::default();
        let tile = ceiling_tile(&area("1.1", (0, 0), (1, 1)), &config, &assets, &mut report);

        assert_eq!(tile.name, "Ceiling:0_0_1_1");
        assert!((tile.transform.position - Vec3::new(1.0, 3.0, -1.0)).length() < 0.001);
        assert!((tile.transform.rotation - Vec3::new(180.0, 0.0, 0.0)).length() < 0.001);
        assert!((tile.transform.scale - Vec3::new(2.0, 1.0, 2.0)).length() < 0.001);
        assert_eq!(report.tiles, 1);
    }

    #[test]
    fn test_ceiling_miss_uses_ceiling_default_not_floor() {
        // Ceiling codes resolve through the floor catalog when no ceiling
        // catalog exists, but a miss falls back to the ceiling default.
        let assets = BuildAssets::default();
        let config = BuildConfig::default();
        let mut report = BuildReport::default();
        let tile = ceiling_tile(&area("9.9", (0, 0), (0, 0)), &config, &assets, &mut report);
        assert_eq!(tile.material.as_deref(), Some("materials/ceiling_default"));
        assert_eq!(report.material_misses[0].0, Surface::Ceiling);
    }

    #[test]
    fn test_global_uv_is_continuous_across_ceiling_tiles() {
        let descriptor = MaterialDescriptor {
            resource: "materials/seamless".to_string(),
            uses_global_uv: true,
            uv_scale: Vec2::ONE,
        };
        let assets = assets_with_floor("1.1", descriptor);
        let config = BuildConfig::default();
        let mut report = BuildReport::default();

        let north = ceiling_tile(&area("1.1", (0, 0), (0, 0)), &config, &assets, &mut report);
        let south = ceiling_tile(&area("1.1", (0, 1), (0, 1)), &config, &assets, &mut report);

        // Shared edge at world z = -1. After the 180 degree pitch, north's
        // vertices 1/2 and south's vertices 0/3 land there.
        let north_uv = north.mesh.as_ref().unwrap().uv[2];
        let south_uv = south.mesh.as_ref().unwrap().uv[3];
        assert!((north_uv - south_uv).length() < 0.001);
    }

    #[test]
    fn test_wall_shell_has_four_rotated_panels() {
        let mut assets = BuildAssets::default();
        let mut catalog = MaterialCatalog::new();
        catalog
            .register("2.1", MaterialDescriptor::neutral("materials/plaster"))
            .unwrap();
        assets.materials.wall = catalog;
        let config = BuildConfig::default();
        let mut report = BuildReport::default();

        let shell = wall_tile(&area("2.1", (0, 0), (0, 2)), &config, &assets, &mut report);

        assert_eq!(shell.name, "Wall:0_0_0_2");
        assert!((shell.transform.position - Vec3::new(0.5, 0.0, -1.5)).length() < 0.001);
        assert!((shell.transform.scale - Vec3::new(1.0, 3.0, 3.0)).length() < 0.001);
        assert_eq!(shell.children.len(), 4);
        assert_eq!(report.panels, 4);

        let yaws: Vec<f32> = shell
            .children
            .iter()
            .map(|p| p.transform.rotation.y)
            .collect();
        assert_eq!(yaws, vec![0.0, 180.0, 90.0, -90.0]);

        for panel in &shell.children {
            // Panels carry only their yaw; placement comes from the shell
            assert!((panel.transform.position - Vec3::ZERO).length() < 0.001);
            assert!((panel.transform.scale - Vec3::ONE).length() < 0.001);
            assert_eq!(panel.material.as_deref(), Some("materials/plaster"));
            assert!(panel.mesh.is_some() && panel.collider.is_some());
        }

        // Front/back UVs span the z extent, left/right the x extent, all
        // times the wall multiplier (2.0) and the height (3.0).
        let front = &shell.children[0].mesh.as_ref().unwrap().uv;
        assert!((front[1] - Vec2::new(3.0 * 2.0, 3.0 * 2.0)).length() < 0.001);
        let left = &shell.children[2].mesh.as_ref().unwrap().uv;
        assert!((left[1] - Vec2::new(1.0 * 2.0, 3.0 * 2.0)).length() < 0.001);
    }

    fn grass_template() -> PropTemplate {
        PropTemplate {
            name: "grass_tuft".to_string(),
            components: vec![TemplateComponent::Mesh(floor_template())],
        }
    }

    #[test]
    fn test_grass_scatter_covers_footprint() {
        let assets = {
            let mut a = assets_with_floor("3.1", MaterialDescriptor::neutral("materials/grass"));
            a.grass = Some(grass_template());
            a
        };
        let config = BuildConfig::default();
        let mut report = BuildReport::default();
        let tile = floor_tile(
            &area("3.1", (0, 0), (1, 1)),
            &config,
            &assets,
            &mut report,
            &mut rng(),
        );

        // One instance per square unit of the 2x2 tile
        assert_eq!(tile.children.len(), 4);
        assert_eq!(report.grass, 4);

        for blade in &tile.children {
            assert_eq!(blade.name, "grass_tuft");
            // Decorative only: rendered but never collided with
            assert!(blade.mesh.is_some());
            assert!(blade.collider.is_none());
            // Undo the parent transform to get world placement
            let world = tile.transform.position + blade.transform.position * tile.transform.scale;
            assert!(world.x >= 0.0 && world.x <= 2.0);
            assert!(world.z >= -2.0 && world.z <= 0.0);
            assert!((world.y - 0.01).abs() < 0.001);
            // Local scale divides out the tile's stretch
            assert!((blade.transform.scale - Vec3::new(0.5, 1.0, 0.5)).length() < 0.001);
        }
    }

    #[test]
    fn test_grass_on_inverted_range_scatters() {
        let assets = {
            let mut a = assets_with_floor("3.1", MaterialDescriptor::neutral("materials/grass"));
            a.grass = Some(grass_template());
            a
        };
        let config = BuildConfig::default();
        let mut report = BuildReport::default();
        let tile = floor_tile(
            &area("3.1", (2, 3), (0, 1)),
            &config,
            &assets,
            &mut report,
            &mut rng(),
        );

        // A 1x1 span scatters one blade, placed inside the world footprint
        // even though the sampled span runs end-to-start
        assert_eq!(tile.children.len(), 1);
        let blade = &tile.children[0];
        let world = tile.transform.position + blade.transform.position * tile.transform.scale;
        assert!(world.x >= 1.0 && world.x <= 2.0);
        assert!(world.z >= -3.0 && world.z <= -2.0);
    }

    #[test]
    fn test_grass_scatter_is_deterministic() {
        let assets = {
            let mut a = assets_with_floor("3.1", MaterialDescriptor::neutral("materials/grass"));
            a.grass = Some(grass_template());
            a
        };
        let config = BuildConfig::default();
        let entity = area("3.1", (0, 0), (2, 2));

        let mut report_a = BuildReport::default();
        let a = floor_tile(&entity, &config, &assets, &mut report_a, &mut rng());
        let mut report_b = BuildReport::default();
        let b = floor_tile(&entity, &config, &assets, &mut report_b, &mut rng());

        assert_eq!(a, b);
    }

    #[test]
    fn test_grass_skipped_without_template() {
        let assets = assets_with_floor("3.1", MaterialDescriptor::neutral("materials/grass"));
        let config = BuildConfig::default();
        let mut report = BuildReport::default();
        let tile = floor_tile(
            &area("3.1", (0, 0), (3, 3)),
            &config,
            &assets,
            &mut report,
            &mut rng(),
        );
        assert!(tile.children.is_empty());
        assert_eq!(report.grass, 0);
    }

    #[test]
    fn test_grass_disabled_by_config() {
        let assets = {
            let mut a = assets_with_floor("3.1", MaterialDescriptor::neutral("materials/grass"));
            a.grass = Some(grass_template());
            a
        };
        let config = BuildConfig {
            use_grass: false,
            ..BuildConfig::default()
        };
        let mut report = BuildReport::default();
        let tile = floor_tile(
            &area("3.1", (0, 0), (1, 1)),
            &config,
            &assets,
            &mut report,
            &mut rng(),
        );
        assert!(tile.children.is_empty());
    }
}
