//! Execution contexts: abstractions over "run this unit of work somewhere".
//!
//! The rest of the workspace only ever needs to hand a closure to something that
//! will eventually run it, possibly on another thread. This crate provides that
//! submission contract plus the stock contexts:
//!
//! - **ThreadPool**: a fixed set of named worker threads draining a shared queue
//! - **ThreadPerTask**: one fresh thread per unit of work, for hosts that manage
//!   their own threads and just want a place to start one
//! - **Inline**: runs the work immediately on the submitting thread
//! - **Builder**: fluent construction of a [`ThreadPool`]
//!
//! # Example
//! ```ignore
//! use executor::{Builder, ExecutorExt};
//!
//! let pool = Builder::default().worker_threads(4).build()?;
//! pool.execute(|| println!("running on a worker"));
//! ```

mod block_on;
mod builder;
mod inline;
mod pool;
mod queue;
mod thread_per_task;

pub use block_on::block_on;
pub use builder::{BuildError, Builder};
pub use inline::Inline;
pub use pool::ThreadPool;
pub use thread_per_task::ThreadPerTask;

use std::sync::Arc;

/// A deferred unit of work.
pub type Work = Box<dyn FnOnce() + Send + 'static>;

/// Something that accepts units of work and runs them, now or later.
///
/// Submission is fire-and-forget: the context decides which thread runs the
/// work and when. Implementations must not drop submitted work silently while
/// they are still accepting submissions.
pub trait Executor: Send + Sync {
    /// Submits a unit of work.
    fn submit(&self, work: Work);
}

/// Closure-friendly submission for every [`Executor`], trait objects included.
pub trait ExecutorExt: Executor {
    /// Boxes `f` and submits it.
    fn execute<F>(&self, f: F)
    where
        F: FnOnce() + Send + 'static,
    {
        self.submit(Box::new(f));
    }
}

impl<E: Executor + ?Sized> ExecutorExt for E {}

impl<E: Executor + ?Sized> Executor for Arc<E> {
    fn submit(&self, work: Work) {
        (**self).submit(work);
    }
}
