//! # Host Execution Context
//!
//! The host lifecycle framework associates every scene with a shared,
//! reference-counted execution context (one loop, one thread of control).
//! The core treats the handle as an opaque constructor dependency: it is
//! stored, exposed, and never scheduled on from here.

use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_LOOP_ID: AtomicU64 = AtomicU64::new(0);

/// Opaque execution-context handle a scene is associated with.
///
/// Shared via `Arc`; the id disambiguates loops in diagnostics.
#[derive(Debug)]
pub struct EventLoop {
    id: u64,
}

impl EventLoop {
    /// Creates a context handle with a process-unique id.
    #[must_use]
    pub fn new() -> Self {
        Self {
            id: NEXT_LOOP_ID.fetch_add(1, Ordering::Relaxed),
        }
    }

    /// The process-unique id of this loop.
    #[inline]
    #[must_use]
    pub fn id(&self) -> u64 {
        self.id
    }
}

impl Default for EventLoop {
    fn default() -> Self {
        Self::new()
    }
}
