//! Overbar Core
//!
//! Primitives for the Overbar overlay-scrollbar engine.
//!
//! # Features
//!
//! - **Snapshots**: one consistent sampling of all scroll metrics per pass
//! - **Change Masks**: field-level diffing that gates visual recomputation
//! - **Thumb Geometry**: pure offset <-> scroll conversions, RTL aware
//! - **Host Capabilities**: the traits a rendering host implements to back
//!   a viewport, its tracks, and its thumbs

pub mod axis;
pub mod config;
pub mod geometry;
pub mod gesture;
pub mod host;
pub mod snapshot;

pub use axis::{Axis, PerAxis, TextDirection};
pub use config::{ConfigError, HostSizeMirroring, ScrollbarConfig, TrackClickBehavior};
pub use gesture::{DragPhase, GestureEvent, GestureKind};
pub use host::{
    ActivityObserver, FramePump, GestureSink, ScrollObserver, ThumbHost, TrackHost, ViewportHost,
};
pub use snapshot::{ChangeMask, ScrollSnapshot, SnapshotField};
