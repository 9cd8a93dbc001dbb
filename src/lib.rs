//! roomsmith: a batch compiler turning grid-based map documents into 3D
//! scene trees.
//!
//! The pipeline is one shot. A map document is parsed (`map`), its type codes
//! are resolved against material and prop catalogs (`catalog`), tile and prop
//! geometry is generated and composed into a single-rooted tree (`build`),
//! and the result is persisted as a compressed RON artifact (`scene`). The
//! `feedback` module is the runtime-side collision feedback queue for hosts
//! that load compiled scenes.

pub mod build;
pub mod catalog;
pub mod feedback;
pub mod map;
pub mod scene;

pub use build::{build_scene, BuildAssets, BuildConfig, BuildError, BuildReport};
pub use map::{load_map, parse_map, MapDocument};
pub use scene::{load_scene, save_scene, CompiledScene};
