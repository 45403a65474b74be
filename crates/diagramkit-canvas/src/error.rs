//! Error types for canvas configuration.
//!
//! The controllers themselves are pure numeric functions and never return
//! errors; only configuration construction is validated, once, host-side.
//! Uses `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Configuration validation error.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Zoom bounds must satisfy `0 < min_zoom <= max_zoom`.
    #[error("Invalid zoom range: min_zoom {min_zoom} must be > 0 and <= max_zoom {max_zoom}")]
    InvalidZoomRange {
        /// The rejected lower bound.
        min_zoom: f64,
        /// The rejected upper bound.
        max_zoom: f64,
    },

    /// Zoom step must be a positive amount.
    #[error("Invalid zoom step: {zoom_step} (must be > 0)")]
    InvalidZoomStep {
        /// The rejected step.
        zoom_step: f64,
    },

    /// Configuration values must be finite numbers.
    #[error("Non-finite value for {field}")]
    NonFinite {
        /// The offending field name.
        field: &'static str,
    },
}
