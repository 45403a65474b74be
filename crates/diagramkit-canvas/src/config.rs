//! Zoom policy configuration.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Immutable zoom policy: bounds, step size, and wheel sensitivity.
///
/// Invariant: `0 < min_zoom <= max_zoom`. The engine does not re-validate
/// the configuration on every call; construct it through
/// [`ZoomConfig::new`] (or use [`ZoomConfig::default`]) and keep it around.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoomConfig {
    /// Lower zoom bound (e.g. `0.1` = 10%).
    pub min_zoom: f64,
    /// Upper zoom bound (e.g. `5.0` = 500%).
    pub max_zoom: f64,
    /// Zoom delta applied per discrete zoom step (toolbar buttons, keyboard).
    pub zoom_step: f64,
    /// Sensitivity factor applied to raw wheel deltas.
    pub wheel_zoom_factor: f64,
}

impl ZoomConfig {
    /// Creates a validated zoom configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when any value is non-finite, when
    /// `min_zoom <= 0` or `min_zoom > max_zoom`, or when `zoom_step <= 0`.
    ///
    /// # Examples
    ///
    /// ```
    /// use diagramkit_canvas::ZoomConfig;
    ///
    /// let config = ZoomConfig::new(0.1, 5.0, 0.1, 0.001).unwrap();
    /// assert_eq!(config, ZoomConfig::default());
    ///
    /// assert!(ZoomConfig::new(0.0, 5.0, 0.1, 0.001).is_err());
    /// ```
    pub fn new(
        min_zoom: f64,
        max_zoom: f64,
        zoom_step: f64,
        wheel_zoom_factor: f64,
    ) -> Result<Self, ConfigError> {
        for (field, value) in [
            ("min_zoom", min_zoom),
            ("max_zoom", max_zoom),
            ("zoom_step", zoom_step),
            ("wheel_zoom_factor", wheel_zoom_factor),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { field });
            }
        }
        if min_zoom <= 0.0 || min_zoom > max_zoom {
            return Err(ConfigError::InvalidZoomRange { min_zoom, max_zoom });
        }
        if zoom_step <= 0.0 {
            return Err(ConfigError::InvalidZoomStep { zoom_step });
        }
        Ok(Self {
            min_zoom,
            max_zoom,
            zoom_step,
            wheel_zoom_factor,
        })
    }
}

impl Default for ZoomConfig {
    /// The stock policy: 10%–500% zoom, 0.1 step, 0.001 wheel sensitivity.
    fn default() -> Self {
        Self {
            min_zoom: 0.1,
            max_zoom: 5.0,
            zoom_step: 0.1,
            wheel_zoom_factor: 0.001,
        }
    }
}
