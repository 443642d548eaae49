//! Engine configuration.

use std::time::Duration;

use thiserror::Error;

use crate::axis::TextDirection;

/// What a click on empty track space does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrackClickBehavior {
    /// Jump straight to the clicked position
    #[default]
    Jump,
    /// Advance by exactly one viewport length toward the clicked position
    Step,
}

/// Which content dimensions get mirrored onto the outer host container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HostSizeMirroring {
    #[default]
    Off,
    /// Mirror content height only
    Vertical,
    /// Mirror content width only
    Horizontal,
    Both,
}

impl HostSizeMirroring {
    pub fn mirrors_height(self) -> bool {
        matches!(self, HostSizeMirroring::Vertical | HostSizeMirroring::Both)
    }

    pub fn mirrors_width(self) -> bool {
        matches!(self, HostSizeMirroring::Horizontal | HostSizeMirroring::Both)
    }
}

/// Configuration for one scrollbar instance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollbarConfig {
    /// Minimum thumb length in pixels
    pub minimal_thumb_size: f32,
    /// Track click behavior
    pub track_click_behavior: TrackClickBehavior,
    /// Explicit direction override; `None` auto-detects from the viewport
    pub direction: Option<TextDirection>,
    /// Debounce window for scroll start/stop detection
    pub scroll_detection_threshold: Duration,
    /// Block horizontal scrolling regardless of geometry
    pub no_scroll_x: bool,
    /// Block vertical scrolling regardless of geometry
    pub no_scroll_y: bool,
    /// Keep the horizontal track visible even when scrolling is impossible
    pub permanent_track_x: bool,
    /// Keep the vertical track visible even when scrolling is impossible
    pub permanent_track_y: bool,
    /// Mirror content dimensions onto the outer host container
    pub host_size_mirroring: HostSizeMirroring,
}

impl Default for ScrollbarConfig {
    fn default() -> Self {
        Self {
            minimal_thumb_size: 30.0,
            track_click_behavior: TrackClickBehavior::Jump,
            direction: None,
            scroll_detection_threshold: Duration::from_millis(100),
            no_scroll_x: false,
            no_scroll_y: false,
            permanent_track_x: false,
            permanent_track_y: false,
            host_size_mirroring: HostSizeMirroring::Off,
        }
    }
}

impl ScrollbarConfig {
    /// Create config with both axes blocked.
    pub fn no_scroll() -> Self {
        Self {
            no_scroll_x: true,
            no_scroll_y: true,
            ..Default::default()
        }
    }

    /// Create config with both tracks forced visible.
    pub fn permanent_tracks() -> Self {
        Self {
            permanent_track_x: true,
            permanent_track_y: true,
            ..Default::default()
        }
    }

    /// Check the configuration for values the engine cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.minimal_thumb_size.is_finite() || self.minimal_thumb_size < 0.0 {
            return Err(ConfigError::InvalidMinimalThumbSize(self.minimal_thumb_size));
        }
        if self.scroll_detection_threshold.is_zero() {
            return Err(ConfigError::ZeroDetectionThreshold);
        }
        Ok(())
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("minimal thumb size must be a finite, non-negative pixel value (got {0})")]
    InvalidMinimalThumbSize(f32),

    #[error("scroll detection threshold must be non-zero")]
    ZeroDetectionThreshold,
}
