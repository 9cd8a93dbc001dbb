//! Material catalogs: type code to material descriptor, per surface kind.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::CatalogError;

fn default_uv_scale() -> Vec2 {
    Vec2::ONE
}

/// Surface a material catalog serves. Walls and floors have independent
/// catalogs; ceilings may share the floor catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Surface {
    Floor,
    Wall,
    Ceiling,
}

impl std::fmt::Display for Surface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Surface::Floor => write!(f, "floor"),
            Surface::Wall => write!(f, "wall"),
            Surface::Ceiling => write!(f, "ceiling"),
        }
    }
}

/// Resolved material: a renderer resource path plus the UV policy tiles apply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialDescriptor {
    /// Resource path understood by the renderer, e.g. "materials/wood_floor".
    pub resource: String,
    /// When set, tile UVs follow world-space coordinates so the texture runs
    /// seamlessly across adjoining tiles instead of restarting per tile.
    #[serde(default)]
    pub uses_global_uv: bool,
    #[serde(default = "default_uv_scale")]
    pub uv_scale: Vec2,
}

impl MaterialDescriptor {
    /// Descriptor with no UV policy, used for fallback defaults.
    pub fn neutral(resource: impl Into<String>) -> Self {
        MaterialDescriptor {
            resource: resource.into(),
            uses_global_uv: false,
            uv_scale: Vec2::ONE,
        }
    }
}

/// One line of a material catalog file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialEntry {
    pub id: String,
    /// Display name for authoring tools; the build never reads it.
    #[serde(default)]
    pub name: String,
    pub resource: String,
    #[serde(default)]
    pub uses_global_uv: bool,
    #[serde(default = "default_uv_scale")]
    pub uv_scale: Vec2,
}

impl MaterialEntry {
    pub fn descriptor(&self) -> MaterialDescriptor {
        MaterialDescriptor {
            resource: self.resource.clone(),
            uses_global_uv: self.uses_global_uv,
            uv_scale: self.uv_scale,
        }
    }
}

/// Registry of material descriptors keyed by type code.
///
/// Registration order is preserved; the first registered entry doubles as the
/// catalog's own default.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MaterialCatalog {
    descriptors: HashMap<String, MaterialDescriptor>,
    order: Vec<String>,
}

impl MaterialCatalog {
    pub fn new() -> Self {
        MaterialCatalog::default()
    }

    pub fn register(
        &mut self,
        id: impl Into<String>,
        descriptor: MaterialDescriptor,
    ) -> Result<(), CatalogError> {
        let id = id.into();
        if self.descriptors.contains_key(&id) {
            return Err(CatalogError::AlreadyRegistered(id));
        }
        self.order.push(id.clone());
        self.descriptors.insert(id, descriptor);
        Ok(())
    }

    pub fn unregister(&mut self, id: &str) -> Result<MaterialDescriptor, CatalogError> {
        match self.descriptors.remove(id) {
            Some(descriptor) => {
                self.order.retain(|entry| entry != id);
                Ok(descriptor)
            }
            None => Err(CatalogError::NotRegistered(id.to_string())),
        }
    }

    pub fn resolve(&self, code: &str) -> Result<&MaterialDescriptor, CatalogError> {
        self.descriptors
            .get(code)
            .ok_or_else(|| CatalogError::MaterialNotFound(code.to_string()))
    }

    /// First registered descriptor, if any.
    pub fn default_descriptor(&self) -> Option<&MaterialDescriptor> {
        self.order.first().and_then(|id| self.descriptors.get(id))
    }

    /// Registered ids in registration order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn from_entries(
        entries: impl IntoIterator<Item = MaterialEntry>,
    ) -> Result<Self, CatalogError> {
        let mut catalog = MaterialCatalog::new();
        for entry in entries {
            let descriptor = entry.descriptor();
            catalog.register(entry.id, descriptor)?;
        }
        Ok(catalog)
    }
}

/// On-disk form of `MaterialCatalogSet`: one RON file with a section per
/// surface. Any section may be omitted.
#[derive(Debug, Default, Deserialize)]
struct MaterialFile {
    #[serde(default)]
    floor: Vec<MaterialEntry>,
    #[serde(default)]
    wall: Vec<MaterialEntry>,
    #[serde(default)]
    ceiling: Option<Vec<MaterialEntry>>,
}

/// The three surface catalogs a build consults.
///
/// A map pack may omit the ceiling catalog entirely, in which case ceiling
/// tiles resolve against the floor catalog (ceilings usually reuse floor
/// codes); the ceiling keeps its own default for misses either way.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MaterialCatalogSet {
    pub floor: MaterialCatalog,
    pub wall: MaterialCatalog,
    pub ceiling: Option<MaterialCatalog>,
}

impl MaterialCatalogSet {
    /// Catalog to resolve against for the given surface.
    pub fn surface(&self, surface: Surface) -> &MaterialCatalog {
        match surface {
            Surface::Floor => &self.floor,
            Surface::Wall => &self.wall,
            Surface::Ceiling => self.ceiling.as_ref().unwrap_or(&self.floor),
        }
    }

    pub fn from_ron_str(text: &str) -> Result<Self, CatalogError> {
        let file: MaterialFile = ron::from_str(text)?;
        Ok(MaterialCatalogSet {
            floor: MaterialCatalog::from_entries(file.floor)?,
            wall: MaterialCatalog::from_entries(file.wall)?,
            ceiling: match file.ceiling {
                Some(entries) => Some(MaterialCatalog::from_entries(entries)?),
                None => None,
            },
        })
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let text = fs::read_to_string(path)?;
        MaterialCatalogSet::from_ron_str(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_and_resolve() {
        let mut catalog = MaterialCatalog::new();
        catalog
            .register("1.1", MaterialDescriptor::neutral("materials/wood"))
            .unwrap();
        assert_eq!(catalog.resolve("1.1").unwrap().resource, "materials/wood");
        assert!(matches!(
            catalog.resolve("1.9"),
            Err(CatalogError::MaterialNotFound(_))
        ));
    }

    #[test]
    fn test_duplicate_register_fails() {
        let mut catalog = MaterialCatalog::new();
        catalog
            .register("1.1", MaterialDescriptor::neutral("a"))
            .unwrap();
        assert!(matches!(
            catalog.register("1.1", MaterialDescriptor::neutral("b")),
            Err(CatalogError::AlreadyRegistered(_))
        ));
        // The first registration survives
        assert_eq!(catalog.resolve("1.1").unwrap().resource, "a");
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_unregister() {
        let mut catalog = MaterialCatalog::new();
        catalog
            .register("1.1", MaterialDescriptor::neutral("a"))
            .unwrap();
        let removed = catalog.unregister("1.1").unwrap();
        assert_eq!(removed.resource, "a");
        assert!(catalog.is_empty());
        assert!(matches!(
            catalog.unregister("1.1"),
            Err(CatalogError::NotRegistered(_))
        ));
    }

    #[test]
    fn test_default_is_first_registered() {
        let mut catalog = MaterialCatalog::new();
        assert!(catalog.default_descriptor().is_none());
        catalog
            .register("2.2", MaterialDescriptor::neutral("b"))
            .unwrap();
        catalog
            .register("1.1", MaterialDescriptor::neutral("a"))
            .unwrap();
        let ids: Vec<&str> = catalog.ids().collect();
        assert_eq!(ids, vec!["2.2", "1.1"]);
        assert_eq!(catalog.default_descriptor().unwrap().resource, "b");
        // Removing the first entry promotes the next one
        catalog.unregister("2.2").unwrap();
        assert_eq!(catalog.default_descriptor().unwrap().resource, "a");
    }

    #[test]
    fn test_set_from_ron() {
        let set = MaterialCatalogSet::from_ron_str(
            r#"(
                floor: [
                    (id: "1.1", name: "wood", resource: "materials/wood_floor"),
                    (id: "3.1", resource: "materials/grass", uses_global_uv: true, uv_scale: (0.5, 0.5)),
                ],
                wall: [
                    (id: "2.1", resource: "materials/plaster"),
                ],
            )"#,
        )
        .unwrap();
        assert_eq!(set.floor.len(), 2);
        assert!(set.floor.resolve("3.1").unwrap().uses_global_uv);
        assert_eq!(set.floor.resolve("1.1").unwrap().uv_scale, Vec2::ONE);
        assert_eq!(set.wall.len(), 1);
        // No ceiling section: ceiling lookups go through the floor catalog
        assert!(set.ceiling.is_none());
        assert!(set.surface(Surface::Ceiling).resolve("1.1").is_ok());
    }

    #[test]
    fn test_set_with_ceiling_section() {
        let set = MaterialCatalogSet::from_ron_str(
            r#"(
                floor: [(id: "1.1", resource: "materials/wood_floor")],
                ceiling: Some([(id: "5.1", resource: "materials/plaster_ceiling")]),
            )"#,
        )
        .unwrap();
        let ceiling = set.surface(Surface::Ceiling);
        assert!(ceiling.resolve("5.1").is_ok());
        assert!(ceiling.resolve("1.1").is_err());
    }

    #[test]
    fn test_entry_list_round_trip() {
        let entries = vec![
            MaterialEntry {
                id: "1.1".to_string(),
                name: "wood planks".to_string(),
                resource: "materials/wood_floor".to_string(),
                uses_global_uv: false,
                uv_scale: Vec2::ONE,
            },
            MaterialEntry {
                id: "3.1".to_string(),
                name: "grass".to_string(),
                resource: "materials/grass".to_string(),
                uses_global_uv: true,
                uv_scale: Vec2::new(0.5, 0.5),
            },
        ];
        // Serialized entries are valid section content for the file form
        let serialized = ron::ser::to_string(&entries).unwrap();
        let set = MaterialCatalogSet::from_ron_str(&format!("(floor: {}, wall: [])", serialized))
            .unwrap();
        assert_eq!(set.floor.len(), 2);
        for entry in &entries {
            assert_eq!(set.floor.resolve(&entry.id).unwrap(), &entry.descriptor());
        }
    }
}
