//! Writing generated maps: JSON plus an optional preview image.

use std::path::{Path, PathBuf};

use clap::Args;

use crate::error::Result;
use crate::manifest::Manifest;
use crate::output::{display_path, plural, Printer};
use crate::render::{render_preview, visual_path_for, write_map_json, write_preview, TileArt};
use crate::types::Map;

/// Output options shared by the generating commands
#[derive(Args, Debug, Clone, Default)]
pub struct OutputArgs {
    /// Skip the .visual.png preview
    #[arg(long)]
    pub no_preview: bool,

    /// Preview tile size in pixels (overrides genesis.yaml)
    #[arg(long)]
    pub tile_size: Option<u32>,

    /// Directory of <tile-id>.png sprites for the preview
    #[arg(long)]
    pub sprites: Option<PathBuf>,

    /// Write single-line JSON
    #[arg(long)]
    pub compact: bool,
}

/// Effective output settings after merging flags over the manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmitSettings {
    pub preview: bool,
    pub tile_size: u32,
    pub art: TileArt,
    pub pretty: bool,
}

impl EmitSettings {
    pub fn resolve(args: &OutputArgs, manifest: &Manifest) -> Self {
        let art = match &args.sprites {
            Some(dir) => TileArt::Sprites(dir.clone()),
            None => manifest.tile_art(),
        };
        Self {
            preview: manifest.preview && !args.no_preview,
            tile_size: args.tile_size.unwrap_or(manifest.tile_size),
            art,
            pretty: manifest.pretty && !args.compact,
        }
    }
}

/// Write `map` to `json_path`, then its preview next to it.
///
/// The JSON is written first; a failing preview leaves the map in place.
pub fn emit_map(map: &Map, json_path: &Path, settings: &EmitSettings, printer: &Printer) -> Result<()> {
    write_map_json(map, json_path, settings.pretty)?;
    printer.status("Writing", &printer.cyan(&display_path(json_path)));

    if settings.preview {
        let image = render_preview(map, settings.tile_size, &settings.art)?;
        let preview_path = visual_path_for(json_path);
        write_preview(&image, &preview_path)?;
        printer.status("Previewing", &printer.cyan(&display_path(&preview_path)));
    }

    let (width, height) = map.size();
    let counts = map.tile_counts();
    printer.info(
        "Summary",
        &format!(
            "{}x{} using {}",
            width,
            height,
            plural(counts.len(), "tile kind", "tile kinds")
        ),
    );
    for (tile, count) in counts {
        printer.info("", &printer.dim(&format!("{:>6}  {}", count, tile)));
    }

    Ok(())
}
