//! Host capability traits.
//!
//! The engine never creates visual elements or touches platform input; it
//! talks to the rendering host exclusively through these capabilities. A host
//! wires one [`ViewportHost`] plus a [`TrackHost`]/[`ThumbHost`] pair per
//! axis into an engine, and optionally observes it back through
//! [`ScrollObserver`] and [`ActivityObserver`].

use crate::axis::{Axis, TextDirection};
use crate::snapshot::ScrollSnapshot;

/// The scrollable viewport being mirrored.
///
/// Writes must be observable by an immediately following read; the engine
/// relies on write-then-read within one gesture seeing the just-written
/// value (the host may clamp it to its valid range first).
pub trait ViewportHost {
    /// Whether the underlying element exists and can be measured yet.
    /// Synchronization passes against a detached viewport are no-ops.
    fn is_attached(&self) -> bool;

    fn scroll_top(&self) -> f32;
    fn scroll_left(&self) -> f32;
    fn set_scroll_top(&mut self, px: f32);
    fn set_scroll_left(&mut self, px: f32);

    fn client_height(&self) -> f32;
    fn client_width(&self) -> f32;
    fn scroll_height(&self) -> f32;
    fn scroll_width(&self) -> f32;

    /// Resolved layout direction. Read once, on the first pass after
    /// attachment.
    fn text_direction(&self) -> TextDirection;

    /// Resize the outer container to mirror content dimensions. `None`
    /// leaves that dimension untouched. Only called when host-size
    /// mirroring is configured.
    fn set_host_size(&mut self, width: Option<f32>, height: Option<f32>);
}

/// The fixed lane a thumb travels within, one per axis.
pub trait TrackHost {
    /// Rendered inner length in pixels, padding excluded.
    fn inner_length(&self) -> f32;

    fn set_visible(&mut self, visible: bool);
}

/// The draggable indicator inside a track, one per axis.
pub trait ThumbHost {
    /// Rendered length in pixels.
    fn rendered_length(&self) -> f32;

    fn set_length(&mut self, px: f32);
    fn set_offset(&mut self, px: f32);
    fn set_visible(&mut self, visible: bool);
}

/// Observer for scroll state changes and drag lifecycle pass-throughs.
pub trait ScrollObserver {
    /// A synchronization pass committed a new snapshot. `previous` is the
    /// snapshot it replaced.
    fn on_scroll(&mut self, current: &ScrollSnapshot, previous: &ScrollSnapshot) {
        let _ = (current, previous);
    }

    /// A thumb drag began. Forwarded as-is; no scroll was computed.
    fn on_drag_start(&mut self, axis: Axis) {
        let _ = axis;
    }

    /// A thumb drag ended. Forwarded as-is; no scroll was computed.
    fn on_drag_end(&mut self, axis: Axis) {
        let _ = axis;
    }
}

/// Observer for debounced scroll activity edges.
///
/// Kept separate from [`ScrollObserver`]: when no activity observer is
/// configured the detector does no work at all, not even the edge check.
pub trait ActivityObserver {
    /// Scrolling started (edge-triggered, once per burst).
    fn on_scroll_start(&mut self);

    /// The debounce window elapsed with no further signals.
    fn on_scroll_stop(&mut self);
}

/// The gesture capability a host's drag primitive drives.
///
/// Offsets are pixels from the track's visual left/top edge. Under RTL the
/// engine mirrors outgoing thumb placement only; input offsets arrive in
/// this same frame regardless of direction.
pub trait GestureSink {
    fn on_click(&mut self, axis: Axis, offset_px: f32);
    fn on_drag_start(&mut self, axis: Axis);
    fn on_drag(&mut self, axis: Axis, offset_px: f32);
    fn on_drag_end(&mut self, axis: Axis);
}

/// Frame-loop faucet the polling scheduler drives.
///
/// `start` fires on the first registration, `stop` when the registry
/// empties; the embedder schedules per-frame `tick` calls in between.
pub trait FramePump {
    fn start(&mut self);
    fn stop(&mut self);
}
