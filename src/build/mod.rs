//! Map-to-scene build pipeline.
//!
//! One pass, batch only: a parsed map document plus catalogs and a config go
//! in, a compiled scene tree and a build report come out. Per-entity failures
//! (material or prop misses) degrade that entity and are tallied in the
//! report; only structural problems abort the build.

mod composer;
mod config;
mod prop;
mod tile;

pub use composer::*;
pub use config::*;
pub use prop::*;
pub use tile::*;

use crate::catalog::{MaterialCatalogSet, PropCatalogSet, PropCategory, PropTemplate, Surface};

/// Error type for whole-build failures.
#[derive(Debug)]
pub enum BuildError {
    /// Every layer of the document is empty.
    EmptyDocument,
    /// No person entity to derive the spawn point from.
    MissingSpawn,
}

impl std::fmt::Display for BuildError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BuildError::EmptyDocument => write!(f, "map document has no entities"),
            BuildError::MissingSpawn => {
                write!(f, "map document has no person entity to spawn from")
            }
        }
    }
}

impl std::error::Error for BuildError {}

/// Catalogs and shared templates a build resolves against.
#[derive(Debug, Clone, Default)]
pub struct BuildAssets {
    pub materials: MaterialCatalogSet,
    pub props: PropCatalogSet,
    /// Template scattered over grass floor tiles. When absent, scatter is
    /// skipped entirely.
    pub grass: Option<PropTemplate>,
}

/// Tally of one build: what was produced and what fell back.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BuildReport {
    /// Floor and ceiling tiles generated.
    pub tiles: usize,
    /// Wall panels generated (four per wall entity).
    pub panels: usize,
    /// Props placed.
    pub props: usize,
    /// Grass instances scattered.
    pub grass: usize,
    /// Material codes that missed their catalog, per surface. Each got the
    /// configured default material instead.
    pub material_misses: Vec<(Surface, String)>,
    /// Prop codes that missed their catalog. Those entities were skipped.
    pub prop_misses: Vec<(PropCategory, String)>,
}

impl BuildReport {
    /// True when nothing fell back or was skipped.
    pub fn clean(&self) -> bool {
        self.material_misses.is_empty() && self.prop_misses.is_empty()
    }
}
