//! Fixed-size pool of worker threads.

use crate::queue::WorkQueue;
use crate::{BuildError, Executor, Work};

use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use parking_lot::Mutex;

/// A fixed set of worker threads draining a shared FIFO queue.
///
/// Built through [`Builder`](crate::Builder). Work that panics is contained on
/// its worker, which logs the panic and keeps serving the queue. Dropping the
/// pool (or calling [`ThreadPool::shutdown`]) refuses new work, lets the workers
/// finish what is already queued, and joins them.
pub struct ThreadPool {
    queue: Arc<WorkQueue>,
    workers: Mutex<Vec<JoinHandle<()>>>,
}

impl ThreadPool {
    pub(crate) fn spawn(worker_threads: usize, name: &str) -> Result<Self, BuildError> {
        let pool = ThreadPool {
            queue: Arc::new(WorkQueue::new()),
            workers: Mutex::new(Vec::with_capacity(worker_threads)),
        };

        for index in 0..worker_threads {
            let queue = pool.queue.clone();
            let handle = thread::Builder::new()
                .name(format!("{name}-{index}"))
                .spawn(move || run_worker(&queue))?;

            pool.workers.lock().push(handle);
        }

        tracing::debug!(worker_threads, name, "thread pool started");

        Ok(pool)
    }

    /// Number of units of work waiting for a free worker.
    pub fn queued(&self) -> usize {
        self.queue.len()
    }

    /// Refuses new work, drains the queue, and joins every worker.
    ///
    /// Safe to call more than once and from a worker thread; a worker never
    /// joins itself.
    pub fn shutdown(&self) {
        self.queue.shutdown();

        let current = thread::current().id();
        let workers: Vec<_> = self.workers.lock().drain(..).collect();
        for worker in workers {
            if worker.thread().id() == current {
                continue;
            }
            let _ = worker.join();
        }
    }
}

impl Executor for ThreadPool {
    fn submit(&self, work: Work) {
        if !self.queue.push(work) {
            tracing::warn!("work submitted to a thread pool that is shutting down was dropped");
        }
    }
}

impl Drop for ThreadPool {
    fn drop(&mut self) {
        self.shutdown();
    }
}

fn run_worker(queue: &WorkQueue) {
    while let Some(work) = queue.pop_blocking() {
        if catch_unwind(AssertUnwindSafe(work)).is_err() {
            tracing::warn!(
                worker = thread::current().name().unwrap_or("unnamed"),
                "unit of work panicked"
            );
        }
    }
}
