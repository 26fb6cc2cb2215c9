//! Project manifest (genesis.yaml) parsing.
//!
//! The manifest holds defaults for the CLI: where maps go, how previews are
//! drawn, and how JSON is formatted. Command-line flags override it.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{GenesisError, Result};
use crate::render::TileArt;

/// The name of the manifest file.
pub const MANIFEST_FILENAME: &str = "genesis.yaml";

/// Project manifest loaded from genesis.yaml.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Manifest {
    /// Output directory for generated maps.
    #[serde(default = "default_output")]
    pub output: PathBuf,

    /// Pixel size of one tile in preview images.
    #[serde(default = "default_tile_size")]
    pub tile_size: u32,

    /// Directory of `<tile-id>.png` sprites for previews.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sprites: Option<PathBuf>,

    /// Write a `.visual.png` preview next to each generated map.
    #[serde(default = "default_true")]
    pub preview: bool,

    /// Indent JSON output.
    #[serde(default = "default_true")]
    pub pretty: bool,
}

fn default_output() -> PathBuf {
    PathBuf::from("dist")
}

fn default_tile_size() -> u32 {
    16
}

fn default_true() -> bool {
    true
}

impl Default for Manifest {
    fn default() -> Self {
        Self {
            output: default_output(),
            tile_size: default_tile_size(),
            sprites: None,
            preview: true,
            pretty: true,
        }
    }
}

impl Manifest {
    /// Load manifest from a genesis.yaml file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| GenesisError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read manifest: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Load an explicit manifest, or `./genesis.yaml` if present, or defaults.
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load(path),
            None => {
                let path = Path::new(MANIFEST_FILENAME);
                if path.exists() {
                    Self::load(path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Parse manifest from YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        let manifest: Self = serde_yaml::from_str(content).map_err(|e| GenesisError::Parse {
            message: format!("Invalid manifest: {}", e),
            help: Some("Check genesis.yaml syntax".to_string()),
        })?;

        if manifest.tile_size == 0 {
            return Err(GenesisError::Parse {
                message: "Invalid manifest: tile_size must be at least 1".to_string(),
                help: Some("Use the pixel size of your tile sprites, e.g. 16".to_string()),
            });
        }

        Ok(manifest)
    }

    /// Tile artwork for previews.
    pub fn tile_art(&self) -> TileArt {
        match &self.sprites {
            Some(dir) => TileArt::Sprites(dir.clone()),
            None => TileArt::Swatches,
        }
    }

    /// Render the manifest as YAML.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| GenesisError::Build {
            message: format!("Failed to encode manifest: {}", e),
            help: None,
        })
    }
}
