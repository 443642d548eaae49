//! Debounced scroll-activity detection.

use std::time::Duration;

use overbar_core::ActivityObserver;

/// Turns a stream of scroll signals into edge-triggered start/stop
/// notifications.
///
/// The first signal of a burst fires `on_scroll_start` immediately; every
/// signal resets the idle accumulator. Once the accumulated idle time
/// crosses the threshold without a reset, `on_scroll_stop` fires exactly
/// once and the detector returns to rest. The engine skips the detector
/// entirely when no observer is configured.
#[derive(Debug)]
pub struct ActivityDetector {
    threshold: Duration,
    idle: Duration,
    pending: bool,
}

impl ActivityDetector {
    pub fn new(threshold: Duration) -> Self {
        Self {
            threshold,
            idle: Duration::ZERO,
            pending: false,
        }
    }

    /// Record one scroll signal.
    pub fn signal(&mut self, observer: &mut dyn ActivityObserver) {
        if !self.pending {
            self.pending = true;
            observer.on_scroll_start();
        }
        self.idle = Duration::ZERO;
    }

    /// Advance the idle clock by one frame's delta.
    pub fn tick(&mut self, dt: Duration, observer: &mut dyn ActivityObserver) {
        if !self.pending {
            return;
        }

        self.idle += dt;
        if self.idle >= self.threshold {
            self.pending = false;
            self.idle = Duration::ZERO;
            observer.on_scroll_stop();
        }
    }

    /// Whether a stop notification is still owed.
    pub fn is_pending(&self) -> bool {
        self.pending
    }
}
