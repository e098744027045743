//! Slider configuration
//!
//! Construction-time settings for a [`SliderEngine`](crate::SliderEngine).
//! Can be built in code or loaded from TOML:
//!
//! ```toml
//! orientation = "vertical"
//! use_emulated_offset = true
//! duration_ms = 250
//! easing = { cubic-bezier = [0.42, 0.0, 0.58, 1.0] }
//! ```

use std::time::Duration;

use glide_animation::Easing;
use glide_core::Orientation;
use glide_scroll::SurfaceKind;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// TOML could not be parsed into a config
    #[error("Failed to parse slider config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Transition duration must be positive, got {0}ms")]
    InvalidDuration(u32),

    #[error("Tolerance `{name}` must be finite and non-negative, got {value}")]
    InvalidTolerance { name: &'static str, value: f32 },
}

/// Slider configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SliderConfig {
    /// Scroll axis (default: horizontal)
    #[serde(default)]
    pub orientation: Orientation,
    /// Emulate scrolling with a content transform instead of a native offset
    #[serde(default)]
    pub use_emulated_offset: bool,
    /// Curve applied to animated transitions (default: CSS `ease`)
    #[serde(default = "default_easing")]
    pub easing: Easing,
    /// Length of an animated transition in milliseconds
    #[serde(default = "default_duration_ms")]
    pub duration_ms: u32,
    /// Slack used by begin/end reached checks
    #[serde(default = "default_edge_tolerance")]
    pub edge_tolerance: f32,
    /// Slack used when classifying items as visible
    #[serde(default = "default_visibility_tolerance")]
    pub visibility_tolerance: f32,
}

fn default_easing() -> Easing {
    Easing::ease()
}

fn default_duration_ms() -> u32 {
    400
}

fn default_edge_tolerance() -> f32 {
    5.0
}

fn default_visibility_tolerance() -> f32 {
    3.0
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            orientation: Orientation::Horizontal,
            use_emulated_offset: false,
            easing: default_easing(),
            duration_ms: default_duration_ms(),
            edge_tolerance: default_edge_tolerance(),
            visibility_tolerance: default_visibility_tolerance(),
        }
    }
}

impl SliderConfig {
    /// Default config scrolling top to bottom
    pub fn vertical() -> Self {
        Self {
            orientation: Orientation::Vertical,
            ..Default::default()
        }
    }

    /// Parse and validate a TOML document. Missing keys take their defaults.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: SliderConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Check value ranges
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.duration_ms == 0 {
            return Err(ConfigError::InvalidDuration(self.duration_ms));
        }
        for (name, value) in [
            ("edge_tolerance", self.edge_tolerance),
            ("visibility_tolerance", self.visibility_tolerance),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidTolerance { name, value });
            }
        }
        Ok(())
    }

    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    pub fn with_emulated_offset(mut self, enabled: bool) -> Self {
        self.use_emulated_offset = enabled;
        self
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn with_duration_ms(mut self, duration_ms: u32) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    pub fn with_edge_tolerance(mut self, tolerance: f32) -> Self {
        self.edge_tolerance = tolerance;
        self
    }

    pub fn with_visibility_tolerance(mut self, tolerance: f32) -> Self {
        self.visibility_tolerance = tolerance;
        self
    }

    /// Transition length as a [`Duration`]
    pub fn duration(&self) -> Duration {
        Duration::from_millis(u64::from(self.duration_ms))
    }

    /// Surface backend selected by `use_emulated_offset`
    pub fn surface_kind(&self) -> SurfaceKind {
        SurfaceKind::from_emulated(self.use_emulated_offset)
    }
}
