//! Material and prop catalogs: type-code registries driving the build.
//!
//! Catalogs map the short type codes found in map documents ("1.1", "4.2") to
//! material descriptors and prop templates. They are loaded from RON files and
//! never mutated during a build; registration errors are authoring errors.

mod material;
mod prop;

pub use material::*;
pub use prop::*;

/// Error type shared by both catalog kinds.
#[derive(Debug)]
pub enum CatalogError {
    MaterialNotFound(String),
    PropNotFound(String),
    AlreadyRegistered(String),
    NotRegistered(String),
    Io(std::io::Error),
    Parse(ron::error::SpannedError),
}

impl From<std::io::Error> for CatalogError {
    fn from(e: std::io::Error) -> Self {
        CatalogError::Io(e)
    }
}

impl From<ron::error::SpannedError> for CatalogError {
    fn from(e: ron::error::SpannedError) -> Self {
        CatalogError::Parse(e)
    }
}

impl std::fmt::Display for CatalogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogError::MaterialNotFound(code) => {
                write!(f, "material {} not registered", code)
            }
            CatalogError::PropNotFound(code) => write!(f, "prop {} not registered", code),
            CatalogError::AlreadyRegistered(id) => write!(f, "{} is already registered", id),
            CatalogError::NotRegistered(id) => write!(f, "{} is not registered", id),
            CatalogError::Io(e) => write!(f, "IO error: {}", e),
            CatalogError::Parse(e) => write!(f, "Parse error: {}", e),
        }
    }
}

impl std::error::Error for CatalogError {}
