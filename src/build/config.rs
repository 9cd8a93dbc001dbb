//! Build configuration.
//!
//! Everything here has a sensible default so a build can run with no config
//! file at all; a RON config overrides only the fields it names.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::catalog::{PropCategory, Surface};

/// Error type for config loading.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(ron::error::SpannedError),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<ron::error::SpannedError> for ConfigError {
    fn from(e: ron::error::SpannedError) -> Self {
        ConfigError::Parse(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

fn default_true() -> bool {
    true
}

fn default_wall_height() -> f32 {
    3.0
}

fn default_floor_uv_scale() -> f32 {
    0.75
}

fn default_wall_uv_scale() -> f32 {
    2.0
}

fn default_ceiling_uv_scale() -> f32 {
    1.0
}

fn default_grass_code() -> String {
    "3.1".to_string()
}

fn default_floor_material() -> String {
    "materials/floor_default".to_string()
}

fn default_wall_material() -> String {
    "materials/wall_default".to_string()
}

fn default_ceiling_material() -> String {
    "materials/ceiling_default".to_string()
}

/// Knobs controlling one build.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    // Per-category switches. Disabled categories still get their (empty)
    // container node so consumers can rely on the scene shape.
    pub floors: bool,
    pub walls: bool,
    pub ceilings: bool,
    pub door_windows: bool,
    pub furniture: bool,
    pub utensils: bool,
    pub electronics: bool,
    pub goals: bool,

    /// Wall height in world units; also the ceiling elevation.
    pub wall_height: f32,
    /// Per-tile UV multiplier for floors (ignored by seamless materials).
    pub floor_uv_scale: f32,
    /// UV multiplier for wall panels.
    pub wall_uv_scale: f32,
    /// Per-tile UV multiplier for ceilings (ignored by seamless materials).
    pub ceiling_uv_scale: f32,

    /// Scatter grass instances over floor tiles with `grass_code`.
    pub use_grass: bool,
    pub grass_code: String,
    /// Seed for the scatter RNG. The CLI --seed flag overrides it.
    pub seed: u64,

    // Fallback material resources used when a type code misses its catalog.
    pub default_floor_material: String,
    pub default_wall_material: String,
    pub default_ceiling_material: String,
}

impl Default for BuildConfig {
    fn default() -> Self {
        BuildConfig {
            floors: default_true(),
            walls: default_true(),
            ceilings: default_true(),
            door_windows: default_true(),
            furniture: default_true(),
            utensils: default_true(),
            electronics: default_true(),
            goals: default_true(),
            wall_height: default_wall_height(),
            floor_uv_scale: default_floor_uv_scale(),
            wall_uv_scale: default_wall_uv_scale(),
            ceiling_uv_scale: default_ceiling_uv_scale(),
            use_grass: default_true(),
            grass_code: default_grass_code(),
            seed: 0,
            default_floor_material: default_floor_material(),
            default_wall_material: default_wall_material(),
            default_ceiling_material: default_ceiling_material(),
        }
    }
}

impl BuildConfig {
    pub fn category_enabled(&self, category: PropCategory) -> bool {
        match category {
            PropCategory::DoorWindow => self.door_windows,
            PropCategory::Furniture => self.furniture,
            PropCategory::Utensil => self.utensils,
            PropCategory::Electronic => self.electronics,
            PropCategory::Goal => self.goals,
        }
    }

    /// Fallback material resource for a surface miss.
    pub fn default_resource(&self, surface: Surface) -> &str {
        match surface {
            Surface::Floor => &self.default_floor_material,
            Surface::Wall => &self.default_wall_material,
            Surface::Ceiling => &self.default_ceiling_material,
        }
    }

    /// Per-tile UV multiplier for a surface.
    pub fn surface_uv_scale(&self, surface: Surface) -> f32 {
        match surface {
            Surface::Floor => self.floor_uv_scale,
            Surface::Wall => self.wall_uv_scale,
            Surface::Ceiling => self.ceiling_uv_scale,
        }
    }

    pub fn from_ron_str(text: &str) -> Result<Self, ConfigError> {
        Ok(ron::from_str(text)?)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        BuildConfig::from_ron_str(&text)
    }
}
