//! Graph-crate error type.

use thiserror::Error;

/// Errors produced by `rr-graph` loaders and builders.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "osm")]
    #[error("OSM parse error: {0}")]
    Osm(String),

    #[error("map extract contains no drivable road nodes")]
    EmptyExtract,
}

pub type ModelResult<T> = Result<T, ModelError>;
