use std::collections::VecDeque;

use crate::data::DIRECTIONS;
use crate::solver::{Outcome, Probe, Search, ROOT};

/// Level-order expansion, the first solution found has the least moves.
pub(super) fn run(search: &mut Search<'_>) -> Outcome {
    let mut to_visit = VecDeque::new();
    to_visit.push_back(ROOT);

    while let Some(cur) = to_visit.pop_front() {
        if search.cancelled() {
            return Outcome::Cancelled;
        }
        let depth = search.explored.depth(cur);
        search.expand(depth);

        for &dir in &DIRECTIONS {
            match search.probe(cur, dir) {
                Probe::Won(last) => return search.solved(last),
                Probe::New(child) => to_visit.push_back(child),
                Probe::Blocked | Probe::Deadlocked | Probe::Duplicate => {}
            }
        }
    }

    Outcome::Exhausted
}
