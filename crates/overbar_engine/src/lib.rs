//! Overbar Engine
//!
//! Frame-driven machinery for the Overbar overlay scrollbar.
//!
//! # Features
//!
//! - **Synchronization Engine**: samples viewport metrics, diffs with a
//!   change mask, applies the minimal visual updates
//! - **Interaction**: track clicks and thumb drags translated back into
//!   scroll commands through the same geometry
//! - **Activity Detection**: debounced, edge-triggered scroll start/stop
//! - **Shared Polling**: one registry ticking every active instance per
//!   frame, with per-instance failure isolation

pub mod activity;
pub mod engine;
pub mod scheduler;

mod interaction;

pub use activity::ActivityDetector;
pub use engine::{BuildError, ScrollbarEngine, ScrollbarEngineBuilder};
pub use scheduler::{PollingScheduler, ScrollbarId, TickOutcome};
