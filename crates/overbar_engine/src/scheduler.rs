//! Shared polling scheduler.
//!
//! One registry drives every active scrollbar instance from a single frame
//! loop instead of one timer/listener set per instance. The registry is an
//! explicit, constructible object the embedder owns; its lifetime is
//! refcount-shaped: the first registration starts the injected
//! [`FramePump`], the last unregistration stops it.

use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use slotmap::{new_key_type, SlotMap};
use smallvec::SmallVec;

use overbar_core::FramePump;

use crate::engine::ScrollbarEngine;

new_key_type! {
    /// Handle to one registered scrollbar instance.
    pub struct ScrollbarId;
}

/// What a synchronization entry point reports back after being ticked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Keep the instance registered.
    Continue,
    /// Remove the instance; its engine is gone.
    Detach,
}

type SyncFn = Box<dyn FnMut(Duration) -> TickOutcome>;

/// Registry of active scrollbar instances, ticked once per frame.
pub struct PollingScheduler {
    entries: SlotMap<ScrollbarId, SyncFn>,
    /// Registration order; ticks visit instances in this order.
    order: Vec<ScrollbarId>,
    last_frame: Instant,
    pump: Option<Box<dyn FramePump>>,
}

impl PollingScheduler {
    pub fn new() -> Self {
        Self {
            entries: SlotMap::with_key(),
            order: Vec::new(),
            last_frame: Instant::now(),
            pump: None,
        }
    }

    /// Create a scheduler that drives `pump` on first/last registration.
    pub fn with_pump(pump: impl FramePump + 'static) -> Self {
        Self {
            pump: Some(Box::new(pump)),
            ..Self::new()
        }
    }

    /// Add a synchronization entry point. Starts the frame loop when this
    /// is the first registration.
    pub fn register(&mut self, sync: impl FnMut(Duration) -> TickOutcome + 'static) -> ScrollbarId {
        let first = self.entries.is_empty();
        let id = self.entries.insert(Box::new(sync));
        self.order.push(id);

        if first {
            self.last_frame = Instant::now();
            tracing::debug!("first scrollbar registered; polling loop starting");
            if let Some(pump) = self.pump.as_mut() {
                pump.start();
            }
        }
        id
    }

    /// Register an engine behind a shared handle. The entry point holds a
    /// `Weak`; once every strong handle is dropped the instance detaches
    /// itself on its next tick.
    pub fn register_engine(&mut self, engine: &Arc<Mutex<ScrollbarEngine>>) -> ScrollbarId {
        let weak = Arc::downgrade(engine);
        self.register(move |dt| {
            let Some(engine) = weak.upgrade() else {
                return TickOutcome::Detach;
            };
            let outcome = match engine.lock() {
                Ok(mut engine) => {
                    engine.tick(dt);
                    TickOutcome::Continue
                }
                Err(_) => {
                    tracing::error!("scrollbar engine mutex poisoned; detaching from polling loop");
                    TickOutcome::Detach
                }
            };
            outcome
        })
    }

    /// Remove an entry. Unknown or already-removed ids are a no-op. Stops
    /// the frame loop when the registry empties.
    pub fn unregister(&mut self, id: ScrollbarId) {
        if self.entries.remove(id).is_none() {
            return;
        }
        self.order.retain(|&entry| entry != id);

        if self.entries.is_empty() {
            tracing::debug!("last scrollbar unregistered; polling loop stopping");
            if let Some(pump) = self.pump.as_mut() {
                pump.stop();
            }
        }
    }

    /// Whether the frame loop should keep being scheduled.
    pub fn is_active(&self) -> bool {
        !self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Run one frame: every registered entry point, in registration order.
    ///
    /// The id list is snapshotted first, so an entry disappearing
    /// mid-flight (detach or unregistration from a previous entry's work)
    /// is skipped rather than faulted on. A panicking instance is isolated
    /// and logged; the remaining instances still run.
    pub fn tick(&mut self) {
        let now = Instant::now();
        let dt = now.duration_since(self.last_frame);
        self.last_frame = now;

        let ids: SmallVec<[ScrollbarId; 8]> = SmallVec::from_slice(&self.order);
        for id in ids {
            let outcome = {
                let Some(sync) = self.entries.get_mut(id) else {
                    continue;
                };
                catch_unwind(AssertUnwindSafe(|| sync(dt)))
            };
            match outcome {
                Ok(TickOutcome::Continue) => {}
                Ok(TickOutcome::Detach) => self.unregister(id),
                Err(_) => {
                    tracing::error!(
                        "scrollbar instance panicked during its synchronization pass; \
                         other instances continue"
                    );
                }
            }
        }
    }
}

impl Default for PollingScheduler {
    fn default() -> Self {
        Self::new()
    }
}
