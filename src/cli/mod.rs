pub mod completions;
pub mod emit;
pub mod grass;
pub mod image;
pub mod init;
pub mod validate;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// genesis - Tile map generator for pixel-art and seeded maps
#[derive(Parser, Debug)]
#[command(name = "genesis")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Manifest to use instead of ./genesis.yaml
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate an autotiled map from a PNG source image
    Image(image::ImageArgs),

    /// Generate a seeded grass map
    Grass(grass::GrassArgs),

    /// Check map JSON files for structural errors
    Validate(validate::ValidateArgs),

    /// Initialize a genesis project (generates genesis.yaml)
    Init(init::InitArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}
