//! JSON map files.
//!
//! The wire format is the serde form of [`Map`]: `width`, `height`, `seed`
//! and a `tiles` array of rows. Files are written to a `.tmp` sibling first
//! and renamed into place, so readers never see a half-written map.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{GenesisError, Result};
use crate::types::Map;

/// Serialize a map, optionally indented.
pub fn map_to_json(map: &Map, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(map)
    } else {
        serde_json::to_string(map)
    };
    json.map_err(|e| GenesisError::Build {
        message: format!("Failed to encode map JSON: {}", e),
        help: None,
    })
}

/// Parse a map without checking its structure.
pub fn parse_map_json(source: &str) -> Result<Map> {
    serde_json::from_str(source).map_err(|e| GenesisError::Parse {
        message: format!("Invalid map JSON: {}", e),
        help: Some(
            "Expected {\"width\", \"height\", \"seed\", \"tiles\"} with catalog tile names"
                .to_string(),
        ),
    })
}

/// Read and validate a map file.
pub fn read_map_json(path: &Path) -> Result<Map> {
    let source = fs::read_to_string(path).map_err(|e| GenesisError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to read map: {}", e),
    })?;
    let map = parse_map_json(&source)?;
    map.validate()?;
    Ok(map)
}

/// Write a map to `path` atomically, creating parent directories.
pub fn write_map_json(map: &Map, path: &Path, pretty: bool) -> Result<()> {
    let mut json = map_to_json(map, pretty)?;
    json.push('\n');
    write_atomic(path, json.as_bytes())
}

/// Path of the temporary sibling used while writing `path`.
pub(crate) fn tmp_path_for(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(".tmp");
    PathBuf::from(name)
}

/// Ensure the parent directory of `path` exists.
pub(crate) fn ensure_parent(path: &Path) -> Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            fs::create_dir_all(parent).map_err(|e| GenesisError::Io {
                path: parent.to_path_buf(),
                message: format!("Failed to create output directory: {}", e),
            })
        }
        _ => Ok(()),
    }
}

/// Move a finished temporary file into place.
pub(crate) fn commit_tmp(tmp: &Path, path: &Path) -> Result<()> {
    fs::rename(tmp, path).map_err(|e| {
        let _ = fs::remove_file(tmp);
        GenesisError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to move temporary file into place: {}", e),
        }
    })
}

fn write_atomic(path: &Path, contents: &[u8]) -> Result<()> {
    ensure_parent(path)?;
    let tmp = tmp_path_for(path);
    fs::write(&tmp, contents).map_err(|e| GenesisError::Io {
        path: tmp.clone(),
        message: format!("Failed to write file: {}", e),
    })?;
    commit_tmp(&tmp, path)
}
