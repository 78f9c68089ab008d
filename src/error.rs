// src/error.rs

use thiserror::Error;

/// Errors surfaced by the cave crate.
///
/// The generation pipeline itself is total; these only come from grid
/// coordinate access and from loading a configuration.
#[derive(Debug, Error)]
pub enum CaveError {
    #[error("cell ({x}, {y}) is outside the {width}x{height} grid")]
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("unknown cell tag {0}")]
    InvalidCell(u8),

    #[error("malformed grid text: {0}")]
    MalformedGrid(String),

    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse configuration: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CaveError>;
