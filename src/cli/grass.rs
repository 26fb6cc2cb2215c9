//! Grass command implementation.
//!
//! Generates a seeded grass map and writes it, or prints it to stdout.

use std::io::Write;
use std::path::PathBuf;

use clap::Args;

use crate::error::Result;
use crate::generate::generate_grass_map;
use crate::manifest::Manifest;
use crate::output::Printer;
use crate::render::map_to_json;

use super::emit::{emit_map, EmitSettings, OutputArgs};

/// Generate a seeded grass map
#[derive(Args, Debug)]
pub struct GrassArgs {
    /// Map seed (0 to 9999999999)
    #[arg(long)]
    pub seed: u64,

    /// Width in tiles
    #[arg(long)]
    pub width: usize,

    /// Height in tiles
    #[arg(long)]
    pub height: usize,

    /// Output JSON path (default: <output dir>/grass-<seed>.json)
    pub output: Option<PathBuf>,

    /// Print the map JSON to stdout instead of writing files
    #[arg(long, conflicts_with = "output")]
    pub stdout: bool,

    #[command(flatten)]
    pub emit: OutputArgs,
}

pub fn run(args: GrassArgs, manifest: &Manifest, printer: &Printer) -> Result<()> {
    printer.status(
        "Generating",
        &format!(
            "grass map {}x{} (seed {})",
            args.width, args.height, args.seed
        ),
    );
    let map = generate_grass_map(args.seed, args.width, args.height)?;
    let settings = EmitSettings::resolve(&args.emit, manifest);

    if args.stdout {
        let json = map_to_json(&map, settings.pretty)?;
        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{}", json)?;
        return Ok(());
    }

    let output = args
        .output
        .unwrap_or_else(|| manifest.output.join(format!("grass-{}.json", args.seed)));
    emit_map(&map, &output, &settings, printer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GenesisError;
    use crate::render::read_map_json;
    use tempfile::tempdir;

    fn args(seed: u64, width: usize, height: usize, output: Option<PathBuf>) -> GrassArgs {
        GrassArgs {
            seed,
            width,
            height,
            output,
            stdout: false,
            emit: OutputArgs {
                no_preview: true,
                ..OutputArgs::default()
            },
        }
    }

    #[test]
    fn test_run_writes_reproducible_map() {
        let dir = tempdir().unwrap();
        let a = dir.path().join("a.json");
        let b = dir.path().join("b.json");

        run(args(99, 5, 4, Some(a.clone())), &Manifest::default(), &Printer::plain()).unwrap();
        run(args(99, 5, 4, Some(b.clone())), &Manifest::default(), &Printer::plain()).unwrap();

        assert_eq!(std::fs::read(&a).unwrap(), std::fs::read(&b).unwrap());
        assert_eq!(read_map_json(&a).unwrap().seed(), 99);
        assert!(!dir.path().join("a.visual.png").exists());
    }

    #[test]
    fn test_default_output_uses_manifest_dir() {
        let dir = tempdir().unwrap();
        let manifest = Manifest {
            output: dir.path().join("maps"),
            ..Manifest::default()
        };

        run(args(7, 2, 2, None), &manifest, &Printer::plain()).unwrap();

        assert!(dir.path().join("maps").join("grass-7.json").exists());
    }

    #[test]
    fn test_run_rejects_bad_seed() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("x.json");
        let err = run(
            args(10_000_000_000, 2, 2, Some(out.clone())),
            &Manifest::default(),
            &Printer::plain(),
        )
        .unwrap_err();

        assert!(matches!(err, GenesisError::InvalidSeed { .. }));
        assert!(!out.exists());
    }
}
