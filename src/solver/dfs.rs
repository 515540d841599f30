use crate::data::DIRECTIONS;
use crate::solver::{Outcome, Probe, Search, ROOT};

/// Always continues from the newest node, backtracks when it has no new children left.
pub(super) fn run(search: &mut Search<'_>) -> Outcome {
    let mut stack = vec![ROOT];

    while let Some(&cur) = stack.last() {
        if search.cancelled() {
            return Outcome::Cancelled;
        }
        let depth = search.explored.depth(cur);
        search.expand(depth);

        let mut child = None;
        for &dir in &DIRECTIONS {
            match search.probe(cur, dir) {
                Probe::Won(last) => return search.solved(last),
                Probe::New(new) => {
                    child = Some(new);
                    break;
                }
                Probe::Blocked | Probe::Deadlocked | Probe::Duplicate => {}
            }
        }

        match child {
            Some(child) => stack.push(child),
            None => {
                stack.pop();
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

    #[test]
    fn goes_deep_first() {
        // bfs finds "rD", dfs commits to going down first
        let level: Level = "#####\n#@  #\n# $ #\n# . #\n#####".parse().unwrap();
        let mut board = level.board();
        let result = solver::search(&mut board, Method::DepthFirst, &mut Unbounded);
        let moves = result.moves().unwrap();
        assert!(moves.move_cnt() > 2);
        assert!(moves.to_string().starts_with('d'));
        assert!(board.play(moves));

        let result = solver::search(&mut board, Method::BreadthFirst, &mut Unbounded);
        assert_eq!(result.moves().unwrap().to_string(), "rD");
    }
}
