use miette::Diagnostic;
use thiserror::Error;

use crate::types::Colour;

/// Main error type for genesis operations
#[derive(Error, Diagnostic, Debug)]
pub enum GenesisError {
    #[error("Unsupported colour {colour} at pixel ({x}, {y})")]
    #[diagnostic(
        code(genesis::colour),
        help("Only grass #00FF00, sand #FFFF00 and road #000000 (fully opaque) are allowed")
    )]
    UnsupportedColor { colour: Colour, x: usize, y: usize },

    #[error("Invalid image: {message}")]
    #[diagnostic(code(genesis::image))]
    InvalidImage { message: String },

    #[error("Map dimensions must be positive, got {width}x{height}")]
    #[diagnostic(code(genesis::map::dimensions))]
    InvalidDimensions { width: usize, height: usize },

    #[error("Seed {seed} is out of range")]
    #[diagnostic(
        code(genesis::map::seed),
        help("Seeds must be between 0 and 9999999999")
    )]
    InvalidSeed { seed: u64 },

    #[error("Tile grid has {actual} row(s), map height is {expected}")]
    #[diagnostic(code(genesis::map::tiles_height))]
    InvalidTilesHeight { expected: usize, actual: usize },

    #[error("Tile row {row} has {actual} tile(s), map width is {expected}")]
    #[diagnostic(code(genesis::map::tiles_width))]
    InvalidTilesWidth {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("IO error: {0}")]
    #[diagnostic(code(genesis::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(genesis::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(genesis::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Build error: {message}")]
    #[diagnostic(code(genesis::build))]
    Build {
        message: String,
        #[help]
        help: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, GenesisError>;
