//! Prop catalogs: type code to placeable prop template.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::CatalogError;
use crate::scene::{Collider, Mesh};

/// Prop layer category. Each category has its own catalog and its own
/// container node in the compiled scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PropCategory {
    DoorWindow,
    Furniture,
    Utensil,
    Electronic,
    Goal,
}

impl PropCategory {
    pub const ALL: [PropCategory; 5] = [
        PropCategory::DoorWindow,
        PropCategory::Furniture,
        PropCategory::Utensil,
        PropCategory::Electronic,
        PropCategory::Goal,
    ];

    /// Name of the category's container node in the compiled scene.
    pub fn container_name(&self) -> &'static str {
        match self {
            PropCategory::DoorWindow => "DoorWindow",
            PropCategory::Furniture => "Furniture",
            PropCategory::Utensil => "Utensils",
            PropCategory::Electronic => "Electronics",
            PropCategory::Goal => "Goals",
        }
    }
}

impl std::fmt::Display for PropCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PropCategory::DoorWindow => write!(f, "door/window"),
            PropCategory::Furniture => write!(f, "furniture"),
            PropCategory::Utensil => write!(f, "utensil"),
            PropCategory::Electronic => write!(f, "electronic"),
            PropCategory::Goal => write!(f, "goal"),
        }
    }
}

/// One building block of a prop template.
///
/// Templates are authored as free-form component lists; the build normalizes
/// them down to exactly one renderable, one collider, and one material.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TemplateComponent {
    /// Renderable geometry, embedded directly in the catalog file.
    Mesh(Mesh),
    /// Authored collision shape. Superseded at build time by a shape rebuilt
    /// from the renderable mesh.
    Collider(Collider),
    /// Material resource path for the renderable.
    Material(String),
}

impl TemplateComponent {
    pub fn kind_name(&self) -> &'static str {
        match self {
            TemplateComponent::Mesh(_) => "mesh",
            TemplateComponent::Collider(_) => "collider",
            TemplateComponent::Material(_) => "material",
        }
    }
}

/// Named bundle of components describing one placeable prop.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PropTemplate {
    pub name: String,
    #[serde(default)]
    pub components: Vec<TemplateComponent>,
}

impl PropTemplate {
    /// Load a standalone template from a RON file (used for the grass
    /// scatter template, which lives outside any catalog).
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let text = fs::read_to_string(path)?;
        let template: PropTemplate = ron::from_str(&text)?;
        Ok(template)
    }
}

/// Resolved prop: the template plus its placement adjustments.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PropDescriptor {
    pub template: PropTemplate,
    /// Horizontal offset in world units, added after the document position is
    /// mapped into world space.
    #[serde(default)]
    pub offset: Vec2,
    /// Yaw in degrees applied to the placed instance.
    #[serde(default)]
    pub rotation_y_deg: f32,
}

/// One line of a prop catalog file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropEntry {
    pub id: String,
    /// Display name for authoring tools; the build never reads it.
    #[serde(default)]
    pub name: String,
    pub template: PropTemplate,
    #[serde(default)]
    pub offset: Vec2,
    #[serde(default)]
    pub rotation_y_deg: f32,
}

impl PropEntry {
    pub fn descriptor(&self) -> PropDescriptor {
        PropDescriptor {
            template: self.template.clone(),
            offset: self.offset,
            rotation_y_deg: self.rotation_y_deg,
        }
    }
}

/// Registry of prop descriptors keyed by type code.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropCatalog {
    descriptors: HashMap<String, PropDescriptor>,
    order: Vec<String>,
}

impl PropCatalog {
    pub fn new() -> Self {
        PropCatalog::default()
    }

    pub fn register(
        &mut self,
        id: impl Into<String>,
        descriptor: PropDescriptor,
    ) -> Result<(), CatalogError> {
        let id = id.into();
        if self.descriptors.contains_key(&id) {
            return Err(CatalogError::AlreadyRegistered(id));
        }
        self.order.push(id.clone());
        self.descriptors.insert(id, descriptor);
        Ok(())
    }

    pub fn unregister(&mut self, id: &str) -> Result<PropDescriptor, CatalogError> {
        match self.descriptors.remove(id) {
            Some(descriptor) => {
                self.order.retain(|entry| entry != id);
                Ok(descriptor)
            }
            None => Err(CatalogError::NotRegistered(id.to_string())),
        }
    }

    pub fn resolve(&self, code: &str) -> Result<&PropDescriptor, CatalogError> {
        self.descriptors
            .get(code)
            .ok_or_else(|| CatalogError::PropNotFound(code.to_string()))
    }

    /// First registered descriptor, if any.
    pub fn default_descriptor(&self) -> Option<&PropDescriptor> {
        self.order.first().and_then(|id| self.descriptors.get(id))
    }

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
        entries: impl IntoIterator<Item = PropEntry>,
    ) -> Result<Self, CatalogError> {
        let mut catalog = PropCatalog::new();
        for entry in entries {
            let descriptor = entry.descriptor();
            catalog.register(entry.id, descriptor)?;
        }
        Ok(catalog)
    }
}

/// On-disk form of `PropCatalogSet`: one RON file with a section per category.
#[derive(Debug, Default, Deserialize)]
struct PropFile {
    #[serde(default)]
    door_window: Vec<PropEntry>,
    #[serde(default)]
    furniture: Vec<PropEntry>,
    #[serde(default)]
    utensil: Vec<PropEntry>,
    #[serde(default)]
    electronic: Vec<PropEntry>,
    #[serde(default)]
    goal: Vec<PropEntry>,
}

/// The five per-category prop catalogs a build consults.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropCatalogSet {
    pub door_window: PropCatalog,
    pub furniture: PropCatalog,
    pub utensil: PropCatalog,
    pub electronic: PropCatalog,
    pub goal: PropCatalog,
}

impl PropCatalogSet {
    pub fn category(&self, category: PropCategory) -> &PropCatalog {
        match category {
            PropCategory::DoorWindow => &self.door_window,
            PropCategory::Furniture => &self.furniture,
            PropCategory::Utensil => &self.utensil,
            PropCategory::Electronic => &self.electronic,
            PropCategory::Goal => &self.goal,
        }
    }

    pub fn from_ron_str(text: &str) -> Result<Self, CatalogError> {
        let file: PropFile = ron::from_str(text)?;
        Ok(PropCatalogSet {
            door_window: PropCatalog::from_entries(file.door_window)?,
            furniture: PropCatalog::from_entries(file.furniture)?,
            utensil: PropCatalog::from_entries(file.utensil)?,
            electronic: PropCatalog::from_entries(file.electronic)?,
            goal: PropCatalog::from_entries(file.goal)?,
        })
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let text = fs::read_to_string(path)?;
        PropCatalogSet::from_ron_str(&text)
    }
}
