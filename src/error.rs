use std::path::PathBuf;
use thiserror::Error;

/// The main error type for mosaicprep operations.
#[derive(Debug, Error)]
pub enum MosaicPrepError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to decode mosaic image {path}: {source}")]
    MosaicDecode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Invalid dimensions: {message}")]
    InvalidDimension { message: String },

    #[error("Failed to parse legend {path}: {source}")]
    LegendParse {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Legend {path} has no '{column}' column")]
    MissingColumn { path: PathBuf, column: String },

    #[error("Failed to write tile {path}: {source}")]
    TileWrite {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Failed to write manifest {path}: {source}")]
    ManifestWrite {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Image path {path} has no file stem to name outputs after")]
    InvalidImagePath { path: PathBuf },
}
