//! The scroll-state synchronization engine.
//!
//! One [`ScrollbarEngine`] mirrors one scrollable viewport. Each pass samples
//! the viewport's metrics, diffs them against the canonical snapshot, and
//! pushes the minimal set of visual updates to the track and thumb hosts.
//! Gestures flow back in through the
//! [`GestureSink`](overbar_core::GestureSink) implementation in the
//! interaction module.

use std::time::Duration;

use thiserror::Error;

use overbar_core::geometry;
use overbar_core::{
    ActivityObserver, Axis, ChangeMask, ConfigError, PerAxis, ScrollObserver, ScrollSnapshot,
    ScrollbarConfig, SnapshotField, ThumbHost, TrackHost, ViewportHost,
};

use crate::activity::ActivityDetector;

/// Scroll-state store and synchronization pass for one scrollbar instance.
pub struct ScrollbarEngine {
    pub(crate) config: ScrollbarConfig,
    pub(crate) viewport: Box<dyn ViewportHost>,
    pub(crate) tracks: PerAxis<Box<dyn TrackHost>>,
    pub(crate) thumbs: PerAxis<Box<dyn ThumbHost>>,
    pub(crate) snapshot: ScrollSnapshot,
    pub(crate) scroll_observer: Option<Box<dyn ScrollObserver>>,
    pub(crate) activity_observer: Option<Box<dyn ActivityObserver>>,
    pub(crate) activity: ActivityDetector,
}

impl ScrollbarEngine {
    pub fn builder() -> ScrollbarEngineBuilder {
        ScrollbarEngineBuilder::new()
    }

    /// The canonical snapshot as of the last committed pass.
    pub fn snapshot(&self) -> ScrollSnapshot {
        self.snapshot
    }

    pub fn config(&self) -> &ScrollbarConfig {
        &self.config
    }

    /// One frame of work: a non-forced synchronization pass plus the
    /// activity detector's idle clock.
    pub fn tick(&mut self, dt: Duration) {
        self.synchronize(false);
        if let Some(observer) = self.activity_observer.as_deref_mut() {
            self.activity.tick(dt, observer);
        }
    }

    /// Run one synchronization pass and return the canonical snapshot.
    ///
    /// A pass against a detached viewport is a no-op. The first pass after
    /// attachment only resolves the layout direction; metrics are never
    /// sampled into a snapshot whose coordinate frame is unknown. After
    /// that, a pass samples fresh metrics, diffs, and applies exactly the
    /// visual updates the changed fields require. `forced` skips the
    /// empty-diff fast path and recomputes both thumbs unconditionally.
    pub fn synchronize(&mut self, forced: bool) -> ScrollSnapshot {
        if !self.viewport.is_attached() {
            return self.snapshot;
        }

        if self.snapshot.direction.is_none() {
            let resolved = self
                .config
                .direction
                .unwrap_or_else(|| self.viewport.text_direction());
            self.snapshot.direction = Some(resolved);
            return self.snapshot;
        }

        self.sync_metrics(forced)
    }

    fn sync_metrics(&mut self, forced: bool) -> ScrollSnapshot {
        let previous = self.snapshot;
        let next = self.sample(&previous);
        let mask = next.diff(&previous);

        if mask.is_empty() && !forced {
            return self.snapshot;
        }

        // Visibility first: toggling a track changes the effective track
        // geometry, so sizes and offsets must be recomputed against the new
        // visibility in a forced re-run before anything is committed.
        if mask.intersects(ChangeMask::TRACK_VISIBILITY) {
            if mask.contains(SnapshotField::TrackXVisible) {
                self.snapshot.track_x_visible = next.track_x_visible;
                self.tracks[Axis::X].set_visible(next.track_x_visible);
            }
            if mask.contains(SnapshotField::TrackYVisible) {
                self.snapshot.track_y_visible = next.track_y_visible;
                self.tracks[Axis::Y].set_visible(next.track_y_visible);
            }
            return self.sync_metrics(true);
        }

        self.snapshot = next;

        for axis in Axis::ALL {
            if forced || mask.intersects(ChangeMask::axis_geometry(axis)) {
                self.update_thumb(axis);
            }
        }

        let mirroring = self.config.host_size_mirroring;
        if mask.intersects(ChangeMask::CONTENT_SIZE) {
            let width = (mirroring.mirrors_width() && mask.contains(SnapshotField::ScrollWidth))
                .then_some(next.scroll_width);
            let height = (mirroring.mirrors_height() && mask.contains(SnapshotField::ScrollHeight))
                .then_some(next.scroll_height);
            if width.is_some() || height.is_some() {
                self.viewport.set_host_size(width, height);
            }
        }

        if previous.sampled {
            if let Some(observer) = self.scroll_observer.as_deref_mut() {
                observer.on_scroll(&self.snapshot, &previous);
            }
        }

        tracing::trace!(
            "committed pass: changed={:?} scroll=({:.1}, {:.1})",
            mask,
            next.scroll_left,
            next.scroll_top
        );

        self.snapshot
    }

    /// Sample fresh metrics and derive the policy/geometry flags.
    fn sample(&self, previous: &ScrollSnapshot) -> ScrollSnapshot {
        let client_height = self.viewport.client_height();
        let client_width = self.viewport.client_width();
        let scroll_height = self.viewport.scroll_height();
        let scroll_width = self.viewport.scroll_width();

        let scroll_x_blocked = self.config.no_scroll_x;
        let scroll_y_blocked = self.config.no_scroll_y;
        let scroll_x_possible = !scroll_x_blocked && scroll_width > client_width;
        let scroll_y_possible = !scroll_y_blocked && scroll_height > client_height;

        ScrollSnapshot {
            client_height,
            client_width,
            scroll_height,
            scroll_width,
            scroll_top: self.viewport.scroll_top(),
            scroll_left: self.viewport.scroll_left(),
            scroll_x_blocked,
            scroll_y_blocked,
            scroll_x_possible,
            scroll_y_possible,
            track_x_visible: scroll_x_possible || self.config.permanent_track_x,
            track_y_visible: scroll_y_possible || self.config.permanent_track_y,
            direction: previous.direction,
            sampled: true,
        }
    }

    /// Push the freshly computed thumb geometry for one axis, or collapse
    /// the thumb when the axis cannot scroll.
    fn update_thumb(&mut self, axis: Axis) {
        let snapshot = self.snapshot;

        if !snapshot.scroll_possible(axis) {
            let thumb = &mut self.thumbs[axis];
            thumb.set_length(0.0);
            thumb.set_visible(false);
            return;
        }

        let track_length = self.tracks[axis].inner_length();
        let length = geometry::thumb_size(
            track_length,
            snapshot.content_size(axis),
            snapshot.client_size(axis),
            self.config.minimal_thumb_size,
        );
        let mut offset = geometry::thumb_offset(
            track_length,
            length,
            snapshot.content_size(axis),
            snapshot.client_size(axis),
            snapshot.scroll_value(axis),
        );
        if axis == Axis::X && snapshot.is_rtl() {
            offset = geometry::rtl_thumb_offset(track_length, length, offset);
        }

        let thumb = &mut self.thumbs[axis];
        thumb.set_length(length);
        thumb.set_offset(offset);
        thumb.set_visible(true);
    }

    pub(crate) fn signal_activity(&mut self) {
        if let Some(observer) = self.activity_observer.as_deref_mut() {
            self.activity.signal(observer);
        }
    }

    /// The host saw a native scroll event. Triggers an activity signal and
    /// a prompt extra pass; polling remains the primary update path.
    pub fn notify_native_scroll(&mut self) {
        self.signal_activity();
        self.synchronize(false);
    }

    // =========================================================================
    // Scroll position surface
    // =========================================================================

    pub fn scroll_top(&self) -> f32 {
        if self.viewport.is_attached() {
            self.viewport.scroll_top()
        } else {
            self.snapshot.scroll_top
        }
    }

    pub fn scroll_left(&self) -> f32 {
        if self.viewport.is_attached() {
            self.viewport.scroll_left()
        } else {
            self.snapshot.scroll_left
        }
    }

    pub fn scroll_height(&self) -> f32 {
        if self.viewport.is_attached() {
            self.viewport.scroll_height()
        } else {
            self.snapshot.scroll_height
        }
    }

    pub fn scroll_width(&self) -> f32 {
        if self.viewport.is_attached() {
            self.viewport.scroll_width()
        } else {
            self.snapshot.scroll_width
        }
    }

    pub fn client_height(&self) -> f32 {
        if self.viewport.is_attached() {
            self.viewport.client_height()
        } else {
            self.snapshot.client_height
        }
    }

    pub fn client_width(&self) -> f32 {
        if self.viewport.is_attached() {
            self.viewport.client_width()
        } else {
            self.snapshot.client_width
        }
    }

    /// Set the vertical scroll position. The write is observable
    /// immediately; a pass follows so visuals catch up in the same call.
    pub fn set_scroll_top(&mut self, px: f32) {
        self.scroll_to(None, Some(px));
    }

    /// Set the horizontal scroll position. See [`Self::set_scroll_top`].
    pub fn set_scroll_left(&mut self, px: f32) {
        self.scroll_to(Some(px), None);
    }

    /// Set either scroll position in one pass. `None` leaves an axis alone.
    pub fn scroll_to(&mut self, x: Option<f32>, y: Option<f32>) {
        if !self.viewport.is_attached() {
            return;
        }
        if let Some(x) = x {
            self.viewport.set_scroll_left(x);
        }
        if let Some(y) = y {
            self.viewport.set_scroll_top(y);
        }
        if x.is_some() || y.is_some() {
            self.synchronize(false);
        }
    }

    /// Center the viewport on a content position.
    pub fn center_at(&mut self, x: Option<f32>, y: Option<f32>) {
        if !self.viewport.is_attached() {
            return;
        }
        let x = x.map(|x| x - self.viewport.client_width() / 2.0);
        let y = y.map(|y| y - self.viewport.client_height() / 2.0);
        self.scroll_to(x, y);
    }

    pub fn scroll_to_top(&mut self) {
        self.set_scroll_top(0.0);
    }

    pub fn scroll_to_bottom(&mut self) {
        if !self.viewport.is_attached() {
            return;
        }
        let max = (self.viewport.scroll_height() - self.viewport.client_height()).max(0.0);
        self.set_scroll_top(max);
    }

    pub fn scroll_to_left(&mut self) {
        self.set_scroll_left(0.0);
    }

    pub fn scroll_to_right(&mut self) {
        if !self.viewport.is_attached() {
            return;
        }
        let max = (self.viewport.scroll_width() - self.viewport.client_width()).max(0.0);
        self.set_scroll_left(max);
    }
}

/// Builder wiring hosts, observers, and configuration into an engine.
pub struct ScrollbarEngineBuilder {
    config: ScrollbarConfig,
    viewport: Option<Box<dyn ViewportHost>>,
    tracks: PerAxis<Option<Box<dyn TrackHost>>>,
    thumbs: PerAxis<Option<Box<dyn ThumbHost>>>,
    scroll_observer: Option<Box<dyn ScrollObserver>>,
    activity_observer: Option<Box<dyn ActivityObserver>>,
}

impl ScrollbarEngineBuilder {
    pub fn new() -> Self {
        Self {
            config: ScrollbarConfig::default(),
            viewport: None,
            tracks: PerAxis::new(None, None),
            thumbs: PerAxis::new(None, None),
            scroll_observer: None,
            activity_observer: None,
        }
    }

    pub fn config(mut self, config: ScrollbarConfig) -> Self {
        self.config = config;
        self
    }

    pub fn viewport(mut self, host: impl ViewportHost + 'static) -> Self {
        self.viewport = Some(Box::new(host));
        self
    }

    pub fn track(mut self, axis: Axis, host: impl TrackHost + 'static) -> Self {
        self.tracks[axis] = Some(Box::new(host));
        self
    }

    pub fn thumb(mut self, axis: Axis, host: impl ThumbHost + 'static) -> Self {
        self.thumbs[axis] = Some(Box::new(host));
        self
    }

    pub fn on_scroll(mut self, observer: impl ScrollObserver + 'static) -> Self {
        self.scroll_observer = Some(Box::new(observer));
        self
    }

    pub fn on_activity(mut self, observer: impl ActivityObserver + 'static) -> Self {
        self.activity_observer = Some(Box::new(observer));
        self
    }

    pub fn build(self) -> Result<ScrollbarEngine, BuildError> {
        self.config.validate()?;

        let viewport = self.viewport.ok_or(BuildError::MissingViewport)?;
        let tracks = PerAxis::new(
            self.tracks.x.ok_or(BuildError::MissingTrack(Axis::X))?,
            self.tracks.y.ok_or(BuildError::MissingTrack(Axis::Y))?,
        );
        let thumbs = PerAxis::new(
            self.thumbs.x.ok_or(BuildError::MissingThumb(Axis::X))?,
            self.thumbs.y.ok_or(BuildError::MissingThumb(Axis::Y))?,
        );

        Ok(ScrollbarEngine {
            activity: ActivityDetector::new(self.config.scroll_detection_threshold),
            config: self.config,
            viewport,
            tracks,
            thumbs,
            snapshot: ScrollSnapshot::default(),
            scroll_observer: self.scroll_observer,
            activity_observer: self.activity_observer,
        })
    }
}

impl Default for ScrollbarEngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Error)]
pub enum BuildError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("a viewport host is required")]
    MissingViewport,

    #[error("a track host is required for axis {0:?}")]
    MissingTrack(Axis),

    #[error("a thumb host is required for axis {0:?}")]
    MissingThumb(Axis),
}
