//! Validate command implementation.
//!
//! Reads map JSON files and checks their structure without regenerating them.

use std::path::PathBuf;

use clap::Args;

use crate::error::{GenesisError, Result};
use crate::output::{display_path, plural, Printer};
use crate::render::read_map_json;

/// Check map JSON files for structural errors
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Map files to validate
    #[arg(required = true)]
    pub files: Vec<PathBuf>,
}

pub fn run(args: ValidateArgs, printer: &Printer) -> Result<()> {
    let mut invalid = 0;

    for file in &args.files {
        match read_map_json(file) {
            Ok(map) => {
                let (width, height) = map.size();
                printer.status(
                    "Valid",
                    &format!(
                        "{} {}",
                        display_path(file),
                        printer.dim(&format!("({}x{}, seed {})", width, height, map.seed()))
                    ),
                );
            }
            Err(e) => {
                invalid += 1;
                printer.error("Invalid", &format!("{}: {}", display_path(file), e));
            }
        }
    }

    if invalid > 0 {
        return Err(GenesisError::Build {
            message: format!(
                "{} of {} failed validation",
                plural(invalid, "map", "maps"),
                args.files.len()
            ),
            help: None,
        });
    }

    printer.status("Finished", &plural(args.files.len(), "map", "maps"));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate::generate_grass_map;
    use crate::render::write_map_json;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_validate_accepts_generated_maps() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("grass.json");
        write_map_json(&generate_grass_map(3, 4, 4).unwrap(), &path, true).unwrap();

        let args = ValidateArgs { files: vec![path] };
        assert!(run(args, &Printer::plain()).is_ok());
    }

    #[test]
    fn test_validate_reports_bad_maps() {
        let dir = tempdir().unwrap();
        let good = dir.path().join("good.json");
        let bad = dir.path().join("bad.json");
        write_map_json(&generate_grass_map(3, 2, 2).unwrap(), &good, false).unwrap();
        fs::write(
            &bad,
            r#"{"width":2,"height":2,"seed":99999999999,"tiles":[["tileGrass1","tileGrass1"],["tileGrass1","tileGrass1"]]}"#,
        )
        .unwrap();

        let args = ValidateArgs {
            files: vec![good, bad],
        };
        let err = run(args, &Printer::plain()).unwrap_err();
        assert!(err.to_string().contains("1 map of 2"));
    }
}
