//! Gesture-to-scroll translation.
//!
//! The host's drag primitive feeds normalized click/drag events into the
//! engine's [`GestureSink`] implementation. Clicks and drag moves map a
//! pointer offset back to a scroll position through the same geometry the
//! synchronization pass uses in the forward direction; drag start/end are
//! pure pass-throughs to the scroll observer.

use overbar_core::geometry;
use overbar_core::{Axis, DragPhase, GestureEvent, GestureKind, GestureSink, TrackClickBehavior};

use crate::engine::ScrollbarEngine;

impl ScrollbarEngine {
    /// Dispatch one normalized gesture event.
    pub fn handle_gesture(&mut self, event: GestureEvent) {
        match event.kind {
            GestureKind::Click => self.on_click(event.axis, event.offset_px),
            GestureKind::Drag(DragPhase::Start) => self.on_drag_start(event.axis),
            GestureKind::Drag(DragPhase::Move) => self.on_drag(event.axis, event.offset_px),
            GestureKind::Drag(DragPhase::End) => self.on_drag_end(event.axis),
        }
    }

    /// Map a pointer offset inside the track to a target scroll position,
    /// centering the pointer on the thumb.
    fn gesture_target(&self, axis: Axis, offset_px: f32) -> f32 {
        geometry::scroll_for_offset(
            self.tracks[axis].inner_length(),
            self.thumbs[axis].rendered_length(),
            offset_px,
            self.snapshot.content_size(axis),
            self.snapshot.client_size(axis),
        )
    }

    /// Write a scroll position; the host clamps to its valid range.
    fn write_scroll(&mut self, axis: Axis, px: f32) {
        match axis {
            Axis::X => self.viewport.set_scroll_left(px),
            Axis::Y => self.viewport.set_scroll_top(px),
        }
    }
}

impl GestureSink for ScrollbarEngine {
    fn on_click(&mut self, axis: Axis, offset_px: f32) {
        if !self.viewport.is_attached() {
            return;
        }

        let target = self.gesture_target(axis, offset_px);
        let value = match self.config.track_click_behavior {
            TrackClickBehavior::Jump => target,
            TrackClickBehavior::Step => {
                // One discrete page toward the target, never a jump, even
                // when the target is many pages away
                let current = self.snapshot.scroll_value(axis);
                let page = self.snapshot.client_size(axis);
                if target < current {
                    current - page
                } else {
                    current + page
                }
            }
        };

        self.write_scroll(axis, value);
        self.synchronize(false);
    }

    fn on_drag_start(&mut self, axis: Axis) {
        if let Some(observer) = self.scroll_observer.as_deref_mut() {
            observer.on_drag_start(axis);
        }
    }

    fn on_drag(&mut self, axis: Axis, offset_px: f32) {
        if !self.viewport.is_attached() {
            return;
        }

        self.signal_activity();
        let value = self.gesture_target(axis, offset_px);
        self.write_scroll(axis, value);
        self.synchronize(false);
    }

    fn on_drag_end(&mut self, axis: Axis) {
        if let Some(observer) = self.scroll_observer.as_deref_mut() {
            observer.on_drag_end(axis);
        }
    }
}
