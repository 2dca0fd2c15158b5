use crate::{Executor, Work};

/// Runs submitted work immediately on the submitting thread.
#[derive(Clone, Copy, Debug, Default)]
pub struct Inline;

impl Executor for Inline {
    fn submit(&self, work: Work) {
        work();
    }
}
