use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::data::DIRECTIONS;
use crate::solver::{Outcome, Probe, Search, ROOT};

/// Shared by best-first and weighted search, they only differ in how `Search::probe` weighs nodes.
///
/// Nodes with equal weight are expanded in the order they were created,
/// explored indices grow monotonically so they double as the tie-breaker.
pub(super) fn run(search: &mut Search<'_>) -> Outcome {
    let mut to_visit = BinaryHeap::new();
    to_visit.push(Reverse((search.explored[ROOT].weight, ROOT)));

    while let Some(Reverse((_, cur))) = to_visit.pop() {
        if search.cancelled() {
            return Outcome::Cancelled;
        }
        let depth = search.explored.depth(cur);
        search.expand(depth);

        for &dir in &DIRECTIONS {
            match search.probe(cur, dir) {
                Probe::Won(last) => return search.solved(last),
                Probe::New(child) => to_visit.push(Reverse((search.explored[child].weight, child))),
                Probe::Blocked | Probe::Deadlocked | Probe::Duplicate => {}
            }
        }
    }

    Outcome::Exhausted
}

#[cfg(test)]
mod tests {
    use crate::config::Method;
    use crate::level::Level;
    use crate::solver::{self, Unbounded};

    const CORRIDOR: &str = r"
##########
#@ $    .#
#        #
##########
";

    #[test]
    fn greedy_heads_for_the_goal() {
        let level: Level = CORRIDOR.parse().unwrap();
        let mut board = level.board();
        board.analyze_deadlocks();

        let bfs = solver::search(&mut board, Method::BreadthFirst, &mut Unbounded);
        let best = solver::search(&mut board, Method::BestFirst, &mut Unbounded);
        let weighted = solver::search(&mut board, Method::Weighted, &mut Unbounded);

        assert_eq!(bfs.moves().unwrap().to_string(), "rRRRRR");
        assert!(best.explored.len() < bfs.explored.len());
        assert!(weighted.explored.len() <= bfs.explored.len());
        assert!(board.play(best.moves().unwrap()));
        board.reset();
        assert!(board.play(weighted.moves().unwrap()));
    }

    #[test]
    fn deterministic() {
        let level: Level = CORRIDOR.parse().unwrap();
        for &method in &[Method::BestFirst, Method::Weighted] {
            let mut board = level.board();
            let first = solver::search(&mut board, method, &mut Unbounded);
            let second = solver::search(&mut board, method, &mut Unbounded);
            assert_eq!(first.outcome, second.outcome);
            assert_eq!(first.explored, second.explored);
        }
    }
}
