use std::time::Instant;

use crate::solver::stats::Stats;

/// Lets the caller stop a run and watch its progress.
///
/// `cancelled` is polled once for every node the solver is about to expand
/// (or once per sequence for the naive method), never in the middle of probing directions.
pub trait Control {
    fn cancelled(&mut self) -> bool;

    /// Called when the solver expands a node at a depth it hasn't reached before.
    fn on_new_depth(&mut self, _depth: usize, _stats: &Stats) {}
}

/// Runs until solved or exhausted.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unbounded;

impl Control for Unbounded {
    fn cancelled(&mut self) -> bool {
        false
    }
}

/// Cancels the run once the instant has passed.
#[derive(Debug, Clone, Copy)]
pub struct Deadline(pub Instant);

impl Control for Deadline {
    fn cancelled(&mut self) -> bool {
        Instant::now() >= self.0
    }
}

/// Cancels the run after a fixed number of polls.
#[derive(Debug, Clone, Copy)]
pub struct IterationLimit {
    limit: u64,
    polls: u64,
}

impl IterationLimit {
    pub fn new(limit: u64) -> Self {
        IterationLimit { limit, polls: 0 }
    }

    pub fn polls(&self) -> u64 {
        self.polls
    }
}

impl Control for IterationLimit {
    fn cancelled(&mut self) -> bool {
        if self.polls >= self.limit {
            return true;
        }
        self.polls += 1;
        false
    }
}

impl<F> Control for F
where
    F: FnMut() -> bool,
{
    fn cancelled(&mut self) -> bool {
        self()
    }
}
