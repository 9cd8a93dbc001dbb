//! Compiled-scene persistence.
//!
//! Scenes are stored as RON, brotli-compressed on write. Reads auto-detect the
//! format: plain RON starts with '(' or whitespace, anything else is treated
//! as a brotli stream.

use std::fs;
use std::io::Cursor;
use std::path::Path;

use super::CompiledScene;

/// Error type for scene persistence.
#[derive(Debug)]
pub enum SceneError {
    Io(std::io::Error),
    Parse(ron::error::SpannedError),
    Serialize(ron::Error),
}

impl From<std::io::Error> for SceneError {
    fn from(e: std::io::Error) -> Self {
        SceneError::Io(e)
    }
}

impl From<ron::error::SpannedError> for SceneError {
    fn from(e: ron::error::SpannedError) -> Self {
        SceneError::Parse(e)
    }
}

impl From<ron::Error> for SceneError {
    fn from(e: ron::Error) -> Self {
        SceneError::Serialize(e)
    }
}

impl std::fmt::Display for SceneError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SceneError::Io(e) => write!(f, "IO error: {}", e),
            SceneError::Parse(e) => write!(f, "Parse error: {}", e),
            SceneError::Serialize(e) => write!(f, "Serialize error: {}", e),
        }
    }
}

impl std::error::Error for SceneError {}

/// Serialize a scene to compressed bytes without touching the filesystem.
pub fn scene_to_bytes(scene: &CompiledScene) -> Result<Vec<u8>, SceneError> {
    let config = ron::ser::PrettyConfig::new()
        .depth_limit(4)
        .indentor("  ".to_string());

    let ron_string = ron::ser::to_string_pretty(scene, config)?;

    // Quality 6 / window 22: good ratio without slowing batch runs down
    let mut compressed = Vec::new();
    brotli::BrotliCompress(
        &mut Cursor::new(ron_string.as_bytes()),
        &mut compressed,
        &brotli::enc::BrotliEncoderParams {
            quality: 6,
            lgwin: 22,
            ..Default::default()
        },
    )
    .map_err(|e| {
        SceneError::Io(std::io::Error::new(
            std::io::ErrorKind::Other,
            format!("brotli compression failed: {}", e),
        ))
    })?;

    Ok(compressed)
}

/// Parse a scene from bytes, accepting both plain RON and brotli-compressed RON.
pub fn scene_from_bytes(bytes: &[u8]) -> Result<CompiledScene, SceneError> {
    let is_plain_ron = bytes
        .first()
        .map(|&b| b == b'(' || b == b' ' || b == b'\n' || b == b'\r' || b == b'\t')
        .unwrap_or(false);

    let contents = if is_plain_ron {
        String::from_utf8(bytes.to_vec()).map_err(|e| {
            SceneError::Io(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!("invalid UTF-8: {}", e),
            ))
        })?
    } else {
        let mut decompressed = Vec::new();
        brotli::BrotliDecompress(&mut Cursor::new(bytes), &mut decompressed).map_err(|e| {
            SceneError::Io(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!("brotli decompression failed: {}", e),
            ))
        })?;
        String::from_utf8(decompressed).map_err(|e| {
            SceneError::Io(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!("invalid UTF-8 after decompression: {}", e),
            ))
        })?
    };

    let scene: CompiledScene = ron::from_str(&contents)?;
    Ok(scene)
}

/// Save a scene as compressed RON.
pub fn save_scene<P: AsRef<Path>>(scene: &CompiledScene, path: P) -> Result<(), SceneError> {
    let bytes = scene_to_bytes(scene)?;
    fs::write(path, bytes)?;
    Ok(())
}

/// Load a scene saved by `save_scene`, or a hand-written plain RON file.
pub fn load_scene<P: AsRef<Path>>(path: P) -> Result<CompiledScene, SceneError> {
    let bytes = fs::read(path)?;
    scene_from_bytes(&bytes)
}
