//! Spy collaborators for driving the engine without a rendering host.
//!
//! Every host capability writes into one shared journal so tests can assert
//! both call counts and cross-host ordering (visibility before thumb
//! geometry, for instance).

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use overbar_core::{
    ActivityObserver, Axis, ScrollObserver, ScrollSnapshot, TextDirection, ThumbHost, TrackHost,
    ViewportHost,
};
use overbar_engine::{ScrollbarEngine, ScrollbarEngineBuilder};

/// One visual-update request observed by a spy host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HostCall {
    TrackVisible(Axis, bool),
    ThumbLength(Axis, f32),
    ThumbOffset(Axis, f32),
    ThumbVisible(Axis, bool),
    HostSize(Option<f32>, Option<f32>),
}

#[derive(Debug)]
pub struct ViewportState {
    pub attached: bool,
    pub scroll_top: f32,
    pub scroll_left: f32,
    pub client_height: f32,
    pub client_width: f32,
    pub scroll_height: f32,
    pub scroll_width: f32,
    pub direction: TextDirection,
    pub direction_reads: usize,
}

impl Default for ViewportState {
    fn default() -> Self {
        Self {
            attached: true,
            scroll_top: 0.0,
            scroll_left: 0.0,
            client_height: 100.0,
            client_width: 100.0,
            scroll_height: 100.0,
            scroll_width: 100.0,
            direction: TextDirection::Ltr,
            direction_reads: 0,
        }
    }
}

pub struct SpyViewport {
    pub state: Arc<Mutex<ViewportState>>,
    pub journal: Arc<Mutex<Vec<HostCall>>>,
}

impl ViewportHost for SpyViewport {
    fn is_attached(&self) -> bool {
        self.state.lock().unwrap().attached
    }

    fn scroll_top(&self) -> f32 {
        self.state.lock().unwrap().scroll_top
    }

    fn scroll_left(&self) -> f32 {
        self.state.lock().unwrap().scroll_left
    }

    fn set_scroll_top(&mut self, px: f32) {
        self.state.lock().unwrap().scroll_top = px;
    }

    fn set_scroll_left(&mut self, px: f32) {
        self.state.lock().unwrap().scroll_left = px;
    }

    fn client_height(&self) -> f32 {
        self.state.lock().unwrap().client_height
    }

    fn client_width(&self) -> f32 {
        self.state.lock().unwrap().client_width
    }

    fn scroll_height(&self) -> f32 {
        self.state.lock().unwrap().scroll_height
    }

    fn scroll_width(&self) -> f32 {
        self.state.lock().unwrap().scroll_width
    }

    fn text_direction(&self) -> TextDirection {
        let mut state = self.state.lock().unwrap();
        state.direction_reads += 1;
        state.direction
    }

    fn set_host_size(&mut self, width: Option<f32>, height: Option<f32>) {
        self.journal.lock().unwrap().push(HostCall::HostSize(width, height));
    }
}

#[derive(Debug)]
pub struct TrackState {
    pub inner_length: f32,
}

impl Default for TrackState {
    fn default() -> Self {
        Self { inner_length: 100.0 }
    }
}

pub struct SpyTrack {
    pub axis: Axis,
    pub state: Arc<Mutex<TrackState>>,
    pub journal: Arc<Mutex<Vec<HostCall>>>,
}

impl TrackHost for SpyTrack {
    fn inner_length(&self) -> f32 {
        self.state.lock().unwrap().inner_length
    }

    fn set_visible(&mut self, visible: bool) {
        self.journal
            .lock()
            .unwrap()
            .push(HostCall::TrackVisible(self.axis, visible));
    }
}

#[derive(Debug, Default)]
pub struct ThumbState {
    /// Mirrors the last `set_length`, the way a real host's rendered length
    /// follows the style write.
    pub rendered_length: f32,
}

pub struct SpyThumb {
    pub axis: Axis,
    pub state: Arc<Mutex<ThumbState>>,
    pub journal: Arc<Mutex<Vec<HostCall>>>,
}

impl ThumbHost for SpyThumb {
    fn rendered_length(&self) -> f32 {
        self.state.lock().unwrap().rendered_length
    }

    fn set_length(&mut self, px: f32) {
        self.state.lock().unwrap().rendered_length = px;
        self.journal
            .lock()
            .unwrap()
            .push(HostCall::ThumbLength(self.axis, px));
    }

    fn set_offset(&mut self, px: f32) {
        self.journal
            .lock()
            .unwrap()
            .push(HostCall::ThumbOffset(self.axis, px));
    }

    fn set_visible(&mut self, visible: bool) {
        self.journal
            .lock()
            .unwrap()
            .push(HostCall::ThumbVisible(self.axis, visible));
    }
}

#[derive(Debug, Default)]
pub struct ScrollLog {
    pub scrolls: Vec<(ScrollSnapshot, ScrollSnapshot)>,
    pub drag_starts: Vec<Axis>,
    pub drag_ends: Vec<Axis>,
}

pub struct RecordingScrollObserver(pub Arc<Mutex<ScrollLog>>);

impl ScrollObserver for RecordingScrollObserver {
    fn on_scroll(&mut self, current: &ScrollSnapshot, previous: &ScrollSnapshot) {
        self.0.lock().unwrap().scrolls.push((*current, *previous));
    }

    fn on_drag_start(&mut self, axis: Axis) {
        self.0.lock().unwrap().drag_starts.push(axis);
    }

    fn on_drag_end(&mut self, axis: Axis) {
        self.0.lock().unwrap().drag_ends.push(axis);
    }
}

#[derive(Debug, Default)]
pub struct ActivityLog {
    pub starts: usize,
    pub stops: usize,
}

pub struct RecordingActivityObserver(pub Arc<Mutex<ActivityLog>>);

impl ActivityObserver for RecordingActivityObserver {
    fn on_scroll_start(&mut self) {
        self.0.lock().unwrap().starts += 1;
    }

    fn on_scroll_stop(&mut self) {
        self.0.lock().unwrap().stops += 1;
    }
}

/// Shared spy state plus a builder pre-wired with the spies.
pub struct Rig {
    pub viewport: Arc<Mutex<ViewportState>>,
    pub track_x: Arc<Mutex<TrackState>>,
    pub track_y: Arc<Mutex<TrackState>>,
    pub thumb_x: Arc<Mutex<ThumbState>>,
    pub thumb_y: Arc<Mutex<ThumbState>>,
    pub journal: Arc<Mutex<Vec<HostCall>>>,
}

impl Rig {
    pub fn new() -> Self {
        Self {
            viewport: Arc::new(Mutex::new(ViewportState::default())),
            track_x: Arc::new(Mutex::new(TrackState::default())),
            track_y: Arc::new(Mutex::new(TrackState::default())),
            thumb_x: Arc::new(Mutex::new(ThumbState::default())),
            thumb_y: Arc::new(Mutex::new(ThumbState::default())),
            journal: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn builder(&self) -> ScrollbarEngineBuilder {
        ScrollbarEngine::builder()
            .viewport(SpyViewport {
                state: self.viewport.clone(),
                journal: self.journal.clone(),
            })
            .track(
                Axis::X,
                SpyTrack {
                    axis: Axis::X,
                    state: self.track_x.clone(),
                    journal: self.journal.clone(),
                },
            )
            .track(
                Axis::Y,
                SpyTrack {
                    axis: Axis::Y,
                    state: self.track_y.clone(),
                    journal: self.journal.clone(),
                },
            )
            .thumb(
                Axis::X,
                SpyThumb {
                    axis: Axis::X,
                    state: self.thumb_x.clone(),
                    journal: self.journal.clone(),
                },
            )
            .thumb(
                Axis::Y,
                SpyThumb {
                    axis: Axis::Y,
                    state: self.thumb_y.clone(),
                    journal: self.journal.clone(),
                },
            )
    }

    pub fn calls(&self) -> Vec<HostCall> {
        self.journal.lock().unwrap().clone()
    }

    pub fn clear_calls(&self) {
        self.journal.lock().unwrap().clear();
    }
}
