//! Init command implementation.
//!
//! Writes a commented `genesis.yaml` with the default settings.

use std::fs;
use std::path::PathBuf;

use clap::Args;

use crate::error::{GenesisError, Result};
use crate::manifest::{Manifest, MANIFEST_FILENAME};
use crate::output::{display_path, Printer};

/// Initialize a genesis project by generating a genesis.yaml manifest
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Project directory (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Overwrite existing genesis.yaml
    #[arg(long)]
    pub force: bool,

    /// Directory of <tile-id>.png sprites to record in the manifest
    #[arg(long)]
    pub sprites: Option<PathBuf>,
}

const HEADER: &str = "\
# genesis project manifest
#
#   output     where generated maps go when no output path is given
#   tile_size  pixel size of one tile in .visual.png previews
#   sprites    directory of <tile-id>.png sprites for previews
#   preview    write a .visual.png preview next to every generated map
#   pretty     indent map JSON

";

pub fn run(args: InitArgs, printer: &Printer) -> Result<()> {
    let manifest_path = args.path.join(MANIFEST_FILENAME);

    if manifest_path.exists() && !args.force {
        return Err(GenesisError::Build {
            message: format!("{} already exists", MANIFEST_FILENAME),
            help: Some("Use --force to overwrite".to_string()),
        });
    }

    let manifest = Manifest {
        sprites: args.sprites.clone(),
        ..Manifest::default()
    };
    let yaml = format!("{}{}", HEADER, manifest.to_yaml()?);

    fs::create_dir_all(&args.path).map_err(|e| GenesisError::Io {
        path: args.path.clone(),
        message: format!("Failed to create project directory: {}", e),
    })?;
    fs::write(&manifest_path, &yaml).map_err(|e| GenesisError::Io {
        path: manifest_path.clone(),
        message: format!("Failed to write manifest: {}", e),
    })?;

    printer.status("Created", &display_path(&manifest_path));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn init_args(path: PathBuf, force: bool) -> InitArgs {
        InitArgs {
            path,
            force,
            sprites: None,
        }
    }

    #[test]
    fn test_init_creates_default_manifest() {
        let dir = tempdir().unwrap();

        run(init_args(dir.path().to_path_buf(), false), &Printer::plain()).unwrap();

        let manifest = Manifest::load(&dir.path().join(MANIFEST_FILENAME)).unwrap();
        assert_eq!(manifest, Manifest::default());
    }

    #[test]
    fn test_init_records_sprites() {
        let dir = tempdir().unwrap();
        let args = InitArgs {
            sprites: Some(PathBuf::from("assets/tiles")),
            ..init_args(dir.path().to_path_buf(), false)
        };

        run(args, &Printer::plain()).unwrap();

        let manifest = Manifest::load(&dir.path().join(MANIFEST_FILENAME)).unwrap();
        assert_eq!(manifest.sprites, Some(PathBuf::from("assets/tiles")));
    }

    #[test]
    fn test_init_keeps_backslashes_in_sprites() {
        let dir = tempdir().unwrap();
        let sprites = PathBuf::from(r"assets\tiles\new");
        let args = InitArgs {
            sprites: Some(sprites.clone()),
            ..init_args(dir.path().to_path_buf(), false)
        };

        run(args, &Printer::plain()).unwrap();

        let manifest = Manifest::load(&dir.path().join(MANIFEST_FILENAME)).unwrap();
        assert_eq!(manifest.sprites, Some(sprites));
    }

    #[test]
    fn test_init_quotes_awkward_sprites_path() {
        let dir = tempdir().unwrap();
        let sprites = PathBuf::from(r#"art/"tiles": #1"#);
        let args = InitArgs {
            sprites: Some(sprites.clone()),
            ..init_args(dir.path().to_path_buf(), false)
        };

        run(args, &Printer::plain()).unwrap();

        let manifest = Manifest::load(&dir.path().join(MANIFEST_FILENAME)).unwrap();
        assert_eq!(manifest.sprites, Some(sprites));
    }

    #[test]
    fn test_init_errors_if_manifest_exists() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(MANIFEST_FILENAME), "output: build").unwrap();

        let result = run(init_args(dir.path().to_path_buf(), false), &Printer::plain());
        assert!(result.is_err());
    }

    #[test]
    fn test_init_force_overwrites() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(MANIFEST_FILENAME), "output: build").unwrap();

        run(init_args(dir.path().to_path_buf(), true), &Printer::plain()).unwrap();

        let content = fs::read_to_string(dir.path().join(MANIFEST_FILENAME)).unwrap();
        assert!(content.contains("output: dist"));
    }
}
