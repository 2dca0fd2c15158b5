//! One thread per unit of work.
//!
//! Stands in for hosts whose threads are managed elsewhere: the caller does not
//! size or own a pool, every submission simply gets a fresh thread.

use crate::{Executor, Work};

use std::sync::Arc;
use std::thread;

use parking_lot::Mutex;

/// Spawns a detached thread for every submitted unit of work.
#[derive(Clone, Debug, Default)]
pub struct ThreadPerTask {
    name: Option<String>,
}

impl ThreadPerTask {
    /// Creates a context whose threads carry `name`.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
        }
    }
}

impl Executor for ThreadPerTask {
    fn submit(&self, work: Work) {
        let mut builder = thread::Builder::new();
        if let Some(name) = &self.name {
            builder = builder.name(name.clone());
        }

        // The closure only runs if the spawn succeeded, so keep the work
        // reachable from here to fall back on running it inline.
        let slot = Arc::new(Mutex::new(Some(work)));
        let worker_slot = slot.clone();

        let spawned = builder.spawn(move || {
            if let Some(work) = worker_slot.lock().take() {
                work();
            }
        });

        if let Err(error) = spawned {
            tracing::warn!(%error, "failed to spawn thread, running work inline");
            if let Some(work) = slot.lock().take() {
                work();
            }
        }
    }
}
