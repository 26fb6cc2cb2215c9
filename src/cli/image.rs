//! Image command implementation.
//!
//! Decodes a PNG source image and writes the autotiled map.

use std::path::{Path, PathBuf};

use clap::Args;
use image::{DynamicImage, ImageFormat, ImageReader, Rgba, RgbaImage};

use crate::error::{GenesisError, Result};
use crate::generate::generate_from_image;
use crate::manifest::Manifest;
use crate::output::{display_path, Printer};

use super::emit::{emit_map, EmitSettings, OutputArgs};

/// Generate an autotiled map from a PNG source image
#[derive(Args, Debug)]
pub struct ImageArgs {
    /// PNG source image (grass #00FF00, sand #FFFF00, road #000000)
    #[arg(required = true)]
    pub input: PathBuf,

    /// Output JSON path (default: <output dir>/<input stem>.json)
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub emit: OutputArgs,
}

pub fn run(args: ImageArgs, manifest: &Manifest, printer: &Printer) -> Result<()> {
    let output = args
        .output
        .clone()
        .unwrap_or_else(|| default_output_path(&args.input, manifest));

    printer.status("Decoding", &display_path(&args.input));
    let image = load_png(&args.input)?;

    printer.status(
        "Generating",
        &format!("map from {}x{} image", image.width(), image.height()),
    );
    let map = generate_from_image(&image)?;

    emit_map(&map, &output, &EmitSettings::resolve(&args.emit, manifest), printer)
}

/// `<manifest output>/<input stem>.json`
fn default_output_path(input: &Path, manifest: &Manifest) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .filter(|s| !s.is_empty())
        .unwrap_or("map");
    manifest.output.join(format!("{}.json", stem))
}

/// Decode a PNG file to RGBA pixels, rejecting other formats.
///
/// 16-bit channels keep their high byte, so 0x0081 reads as 0.
pub fn load_png(path: &Path) -> Result<RgbaImage> {
    let reader = ImageReader::open(path)
        .map_err(|e| GenesisError::Io {
            path: path.to_path_buf(),
            message: format!("Cannot open input image: {}", e),
        })?
        .with_guessed_format()
        .map_err(|e| GenesisError::Io {
            path: path.to_path_buf(),
            message: format!("Cannot read input image: {}", e),
        })?;

    match reader.format() {
        Some(ImageFormat::Png) => {}
        other => {
            return Err(GenesisError::InvalidImage {
                message: format!(
                    "unsupported input format {}: expected png",
                    other.map_or("unknown".to_string(), |f| format!("{:?}", f).to_lowercase())
                ),
            })
        }
    }

    let decoded = reader.decode().map_err(|e| GenesisError::InvalidImage {
        message: format!("failed to decode {}: {}", path.display(), e),
    })?;
    Ok(match &decoded {
        DynamicImage::ImageLuma16(_)
        | DynamicImage::ImageLumaA16(_)
        | DynamicImage::ImageRgb16(_)
        | DynamicImage::ImageRgba16(_) => high_bytes(&decoded),
        _ => decoded.to_rgba8(),
    })
}

fn high_bytes(decoded: &DynamicImage) -> RgbaImage {
    let wide = decoded.to_rgba16();
    RgbaImage::from_fn(wide.width(), wide.height(), |x, y| {
        Rgba(wide.get_pixel(x, y).0.map(|c| (c >> 8) as u8))
    })
}
