//! Thread-safe work queue shared by pool workers.
//!
//! Provides a FIFO queue that submitters push work into and workers block on.

use crate::Work;

use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::{Condvar, Mutex};

/// A thread-safe, FIFO queue of pending work.
///
/// Workers park on the condition variable while the queue is empty. Once
/// shutdown is requested, already-queued work is still handed out, new work is
/// refused, and idle workers are released.
pub(crate) struct WorkQueue {
    queue: Mutex<VecDeque<Work>>,
    available: Condvar,
    shutdown: AtomicBool,
}

impl WorkQueue {
    /// Creates a new empty work queue.
    pub(crate) fn new() -> Self {
        Self {
            queue: Mutex::new(VecDeque::new()),
            available: Condvar::new(),
            shutdown: AtomicBool::new(false),
        }
    }

    /// Enqueues work at the back of the queue and wakes one idle worker.
    ///
    /// # Arguments
    /// * `work` - The unit of work to enqueue
    ///
    /// # Returns
    /// false, dropping the work, if shutdown has already been requested
    pub(crate) fn push(&self, work: Work) -> bool {
        let mut queue = self.queue.lock();
        if self.is_shutdown() {
            return false;
        }

        queue.push_back(work);
        drop(queue);

        self.available.notify_one();
        true
    }

    /// Dequeues the next unit of work, blocking while the queue is empty.
    ///
    /// # Returns
    /// Some(work) when work is available, None once shutdown has been
    /// requested and the queue is drained
    pub(crate) fn pop_blocking(&self) -> Option<Work> {
        let mut queue = self.queue.lock();

        loop {
            if let Some(work) = queue.pop_front() {
                return Some(work);
            }

            if self.is_shutdown() {
                return None;
            }

            self.available.wait(&mut queue);
        }
    }

    /// Number of queued, not yet started, units of work.
    pub(crate) fn len(&self) -> usize {
        self.queue.lock().len()
    }

    /// Signals the workers to exit once the queue is drained.
    pub(crate) fn shutdown(&self) {
        // Taking the lock orders the flag with any worker about to park.
        let _queue = self.queue.lock();
        self.shutdown.store(true, Ordering::SeqCst);
        self.available.notify_all();
    }

    /// Checks if shutdown has been requested.
    pub(crate) fn is_shutdown(&self) -> bool {
        self.shutdown.load(Ordering::SeqCst)
    }
}
