//! Fluent builder for [`ThreadPool`] construction.

use crate::ThreadPool;

use std::io;
use std::num::NonZeroUsize;
use std::thread;

use thiserror::Error;

/// Reasons a [`ThreadPool`] could not be built.
#[derive(Debug, Error)]
pub enum BuildError {
    /// A pool needs at least one worker to make progress.
    #[error("worker_threads must be greater than 0")]
    ZeroWorkers,

    /// The operating system refused to start a worker thread.
    #[error("failed to spawn worker thread: {0}")]
    Spawn(#[from] io::Error),
}

/// Builder for [`ThreadPool`] instances.
///
/// # Example
/// ```ignore
/// let pool = Builder::default()
///     .worker_threads(2)
///     .thread_name("io-worker")
///     .build()?;
/// ```
pub struct Builder {
    worker_threads: usize,
    thread_name: String,
}

impl Builder {
    /// Sets the number of worker threads.
    pub fn worker_threads(mut self, n: usize) -> Self {
        self.worker_threads = n;
        self
    }

    /// Sets the prefix used to name worker threads (`<prefix>-<index>`).
    pub fn thread_name(mut self, name: impl Into<String>) -> Self {
        self.thread_name = name.into();
        self
    }

    /// Spawns the workers and returns the running pool.
    ///
    /// # Errors
    /// Returns [`BuildError::ZeroWorkers`] when no workers were requested and
    /// [`BuildError::Spawn`] when a worker thread could not be started. Workers
    /// spawned before the failure are shut down again.
    pub fn build(self) -> Result<ThreadPool, BuildError> {
        if self.worker_threads == 0 {
            return Err(BuildError::ZeroWorkers);
        }

        ThreadPool::spawn(self.worker_threads, &self.thread_name)
    }
}

impl Default for Builder {
    /// One worker per available core, named `executor-worker-<n>`.
    fn default() -> Self {
        let worker_threads = thread::available_parallelism()
            .map(NonZeroUsize::get)
            .unwrap_or(1);

        Builder {
            worker_threads,
            thread_name: "executor-worker".to_string(),
        }
    }
}
