//! Parsed map document: grid-aligned layers of area and point entities.
//!
//! Coordinates are integer grid cells in document space, x growing east and y
//! growing south. The build stage maps them into world space (x, -y on the
//! ground plane); nothing in here knows about world units.

use glam::IVec2;
use serde::{Deserialize, Serialize};

/// Rectangular entity spanning an inclusive cell range (floors, walls).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AreaEntity {
    /// Type code, e.g. "1.1". Resolved against a material catalog.
    #[serde(rename = "type")]
    pub code: String,
    pub start: IVec2,
    /// Inclusive end cell: an entity with start == end covers one cell.
    pub end: IVec2,
}

/// Single-cell entity (props, goals, persons).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointEntity {
    /// Type code, e.g. "4.2". Resolved against a prop catalog.
    #[serde(rename = "type")]
    pub code: String,
    pub pos: IVec2,
}

/// Entity layers of a map document.
///
/// Every layer is optional in the wire format; absent layers parse as empty.
/// `eletronics` is accepted as an alias because existing map files carry the
/// misspelling.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MapLayers {
    #[serde(default)]
    pub walls: Vec<AreaEntity>,
    #[serde(default)]
    pub floors: Vec<AreaEntity>,
    #[serde(default)]
    pub door_and_windows: Vec<PointEntity>,
    #[serde(default)]
    pub furniture: Vec<PointEntity>,
    #[serde(default)]
    pub utensils: Vec<PointEntity>,
    #[serde(default, alias = "eletronics")]
    pub electronics: Vec<PointEntity>,
    #[serde(default)]
    pub goals: Vec<PointEntity>,
    #[serde(default)]
    pub persons: Vec<PointEntity>,
}

/// A whole map document as parsed from JSON or RON.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MapDocument {
    #[serde(default)]
    pub layers: MapLayers,
}

impl MapDocument {
    /// True when every layer is empty. An empty document cannot be built.
    pub fn is_empty(&self) -> bool {
        let l = &self.layers;
        l.walls.is_empty()
            && l.floors.is_empty()
            && l.door_and_windows.is_empty()
            && l.furniture.is_empty()
            && l.utensils.is_empty()
            && l.electronics.is_empty()
            && l.goals.is_empty()
            && l.persons.is_empty()
    }

    /// Total entity count across all layers.
    pub fn entity_count(&self) -> usize {
        let l = &self.layers;
        l.walls.len()
            + l.floors.len()
            + l.door_and_windows.len()
            + l.furniture.len()
            + l.utensils.len()
            + l.electronics.len()
            + l.goals.len()
            + l.persons.len()
    }
}
