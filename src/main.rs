//! Command-line front end: compile one map document into a scene artifact.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use roomsmith::build::{build_scene, BuildAssets, BuildConfig};
use roomsmith::catalog::{MaterialCatalogSet, PropCatalogSet, PropTemplate};
use roomsmith::map::load_map;
use roomsmith::scene::save_scene;

#[derive(Parser)]
#[command(
    name = "roomsmith",
    about = "Compile a grid map document into a 3D scene artifact",
    version
)]
struct Cli {
    /// Map document to compile (JSON or RON)
    map: PathBuf,

    /// Output path for the compiled scene (default: <map>.scene.ron)
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// Directory holding materials.ron, props.ron, and grass.ron
    #[arg(long, default_value = "assets")]
    assets: PathBuf,

    /// Build configuration file (RON); built-in defaults apply when omitted
    #[arg(long)]
    config: Option<PathBuf>,

    /// Scatter RNG seed; overrides the config's seed
    #[arg(long)]
    seed: Option<u64>,
}

/// Load the catalog files from the assets directory.
///
/// Missing files are not errors: each one just leaves its catalog empty, so
/// every lookup falls back (default materials, skipped props, no grass).
fn load_assets(dir: &Path) -> Result<BuildAssets> {
    let mut assets = BuildAssets::default();

    let materials = dir.join("materials.ron");
    if materials.is_file() {
        assets.materials = MaterialCatalogSet::load(&materials)
            .with_context(|| format!("failed to load {}", materials.display()))?;
    } else {
        log::warn!(
            "{} not found, all material lookups will fall back",
            materials.display()
        );
    }

    let props = dir.join("props.ron");
    if props.is_file() {
        assets.props = PropCatalogSet::load(&props)
            .with_context(|| format!("failed to load {}", props.display()))?;
    } else {
        log::warn!("{} not found, prop entities will be skipped", props.display());
    }

    let grass = dir.join("grass.ron");
    if grass.is_file() {
        assets.grass = Some(
            PropTemplate::load(&grass)
                .with_context(|| format!("failed to load {}", grass.display()))?,
        );
    } else {
        log::debug!("{} not found, grass scatter disabled", grass.display());
    }

    Ok(assets)
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let doc = load_map(&cli.map)
        .with_context(|| format!("failed to load map {}", cli.map.display()))?;
    log::info!("loaded {} ({} entities)", cli.map.display(), doc.entity_count());

    let config = match &cli.config {
        Some(path) => BuildConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => BuildConfig::default(),
    };

    let assets = load_assets(&cli.assets)?;
    let seed = cli.seed.unwrap_or(config.seed);
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let (scene, report) = build_scene(&doc, &config, &assets, &mut rng)?;
    log::info!(
        "built {} tiles, {} wall panels, {} props, {} grass instances (seed {})",
        report.tiles,
        report.panels,
        report.props,
        report.grass,
        seed
    );
    if !report.clean() {
        log::warn!(
            "{} material fallback(s), {} skipped prop(s)",
            report.material_misses.len(),
            report.prop_misses.len()
        );
    }

    let out = cli
        .out
        .unwrap_or_else(|| cli.map.with_extension("scene.ron"));
    save_scene(&scene, &out)
        .with_context(|| format!("failed to write scene {}", out.display()))?;
    log::info!("wrote {} ({} nodes)", out.display(), scene.root.node_count());

    Ok(())
}
