//! Error types for field construction and rendering.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while building a triangle or preparing a render.
#[derive(Debug, Error)]
pub enum SdfError {
    /// The two points defining a half-plane are the same point.
    #[error("Degenerate input: half-plane endpoints coincide at ({x}, {y})")]
    CoincidentPoints {
        x: f32,
        y: f32,
    },

    /// The triangle has no area.
    #[error("Degenerate input: triangle vertices are collinear")]
    CollinearVertices,

    /// The triangle is wound so that its edge normals point inward.
    #[error("Degenerate input: triangle vertices are wound clockwise (signed area {0})")]
    ClockwiseWinding(f32),

    /// A vertex coordinate is NaN or infinite.
    #[error("Degenerate input: vertex {0} has a non-finite coordinate")]
    NonFiniteCoordinate(usize),

    /// Raster dimensions must both be non-zero.
    #[error("Invalid image dimensions: {width}x{height}")]
    InvalidDimensions {
        width: u32,
        height: u32,
    },

    /// Worker thread count must be non-zero.
    #[error("Invalid thread count: 0")]
    InvalidThreadCount,

    /// IO error while reading a config file.
    #[error("Failed to read config {path}: {source}")]
    ConfigRead {
        /// The path that failed.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid JSON for a render config.
    #[error("Failed to parse config {path}: {source}")]
    ConfigParse {
        /// The path that failed.
        path: PathBuf,
        /// The underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// The worker pool could not be started.
    #[error("Failed to build thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

/// Result type for field and render operations.
pub type SdfResult<T> = std::result::Result<T, SdfError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SdfError::CollinearVertices;
        assert_eq!(format!("{err}"), "Degenerate input: triangle vertices are collinear");

        let err = SdfError::InvalidDimensions { width: 0, height: 256 };
        assert!(format!("{err}").contains("0x256"));

        let err = SdfError::CoincidentPoints { x: 0.5, y: 0.25 };
        assert!(format!("{err}").contains("(0.5, 0.25)"));
    }
}
