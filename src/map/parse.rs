//! Map document loading with format sniffing.
//!
//! The first non-whitespace byte decides the format: '{' is JSON, '(' is RON.
//! '<' is recognized as XML and rejected explicitly since old tooling produced
//! XML maps we no longer read. Parsed documents are checked against `limits`
//! before they reach the build.

use std::fs;
use std::path::Path;

use glam::IVec2;

use super::{AreaEntity, MapDocument, PointEntity};

/// Validation limits applied to parsed documents
pub mod limits {
    /// Maximum absolute grid coordinate (keeps footprint math exact in f32)
    pub const MAX_COORD: i32 = 1_000_000;
}

/// Error type for map loading.
#[derive(Debug)]
pub enum MapError {
    Io(std::io::Error),
    Json(serde_json::Error),
    Ron(ron::error::SpannedError),
    /// Recognized but unsupported format (XML).
    Unsupported(String),
    /// First byte matched no known format.
    UnknownFormat(char),
    Empty,
    /// Parsed fine but violates `limits`.
    Validation(String),
}

impl From<std::io::Error> for MapError {
    fn from(e: std::io::Error) -> Self {
        MapError::Io(e)
    }
}

impl From<serde_json::Error> for MapError {
    fn from(e: serde_json::Error) -> Self {
        MapError::Json(e)
    }
}

impl From<ron::error::SpannedError> for MapError {
    fn from(e: ron::error::SpannedError) -> Self {
        MapError::Ron(e)
    }
}

impl std::fmt::Display for MapError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MapError::Io(e) => write!(f, "IO error: {}", e),
            MapError::Json(e) => write!(f, "JSON parse error: {}", e),
            MapError::Ron(e) => write!(f, "RON parse error: {}", e),
            MapError::Unsupported(what) => write!(f, "unsupported map format: {}", what),
            MapError::UnknownFormat(c) => {
                write!(f, "unrecognized map format (starts with {:?})", c)
            }
            MapError::Empty => write!(f, "map document is empty"),
            MapError::Validation(e) => write!(f, "validation error: {}", e),
        }
    }
}

impl std::error::Error for MapError {}

fn coord_in_bounds(v: IVec2) -> bool {
    v.x >= -limits::MAX_COORD
        && v.x <= limits::MAX_COORD
        && v.y >= -limits::MAX_COORD
        && v.y <= limits::MAX_COORD
}

fn validate_areas(entities: &[AreaEntity], layer: &str) -> Result<(), String> {
    for (i, area) in entities.iter().enumerate() {
        if !coord_in_bounds(area.start) || !coord_in_bounds(area.end) {
            return Err(format!(
                "{}[{}]: coordinates ({}, {})..({}, {}) exceed the ±{} limit",
                layer,
                i,
                area.start.x,
                area.start.y,
                area.end.x,
                area.end.y,
                limits::MAX_COORD
            ));
        }
    }
    Ok(())
}

fn validate_points(entities: &[PointEntity], layer: &str) -> Result<(), String> {
    for (i, point) in entities.iter().enumerate() {
        if !coord_in_bounds(point.pos) {
            return Err(format!(
                "{}[{}]: position ({}, {}) exceeds the ±{} limit",
                layer,
                i,
                point.pos.x,
                point.pos.y,
                limits::MAX_COORD
            ));
        }
    }
    Ok(())
}

/// Validate a parsed document against `limits`.
pub fn validate_document(doc: &MapDocument) -> Result<(), MapError> {
    let l = &doc.layers;
    validate_areas(&l.walls, "walls").map_err(MapError::Validation)?;
    validate_areas(&l.floors, "floors").map_err(MapError::Validation)?;
    validate_points(&l.door_and_windows, "door_and_windows").map_err(MapError::Validation)?;
    validate_points(&l.furniture, "furniture").map_err(MapError::Validation)?;
    validate_points(&l.utensils, "utensils").map_err(MapError::Validation)?;
    validate_points(&l.electronics, "electronics").map_err(MapError::Validation)?;
    validate_points(&l.goals, "goals").map_err(MapError::Validation)?;
    validate_points(&l.persons, "persons").map_err(MapError::Validation)?;
    Ok(())
}

/// Parse a map document from text, sniffing JSON vs RON.
pub fn parse_map(text: &str) -> Result<MapDocument, MapError> {
    let trimmed = text.trim_start();
    let doc: MapDocument = match trimmed.chars().next() {
        Some('{') => serde_json::from_str(trimmed)?,
        Some('(') => ron::from_str(trimmed)?,
        Some('<') => return Err(MapError::Unsupported("XML".to_string())),
        Some(c) => return Err(MapError::UnknownFormat(c)),
        None => return Err(MapError::Empty),
    };
    validate_document(&doc)?;
    Ok(doc)
}

/// Read and parse a map document from disk.
pub fn load_map<P: AsRef<Path>>(path: P) -> Result<MapDocument, MapError> {
    let text = fs::read_to_string(path)?;
    parse_map(&text)
}
