use crate::moves::{Move, Moves};
use crate::state::Snapshot;

// Terminology:
// move = changing player position by one cell
// push = a move that changes a box position
// step = a move that doesn't change a box position

/// Follows the predecessor links from `last` to the root and turns them into moves.
pub(crate) fn reconstruct(explored: &[Snapshot], last: usize) -> Moves {
    let path = backtrack_prevs(explored, last);

    let mut moves = Moves::default();
    for pair in path.windows(2) {
        let prev = &explored[pair[0]];
        let cur = &explored[pair[1]];
        if let Some(dir) = cur.dir {
            moves.add(Move::new(dir, prev.boxes != cur.boxes));
        }
    }
    moves
}

/// Indices of the nodes from the root to `last`, both included.
pub(crate) fn backtrack_prevs(explored: &[Snapshot], last: usize) -> Vec<usize> {
    let mut ret = vec![last];
    let mut cur = last;
    while let Some(prev) = explored[cur].prev {
        ret.push(prev);
        cur = prev;
    }
    ret.reverse();
    ret
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::data::Dir;
    use crate::level::Level;

    #[test]
    fn steps_and_pushes() {
        let level: Level = "######\n#@ $.#\n#    #\n######".parse().unwrap();
        let mut board = level.board();
        let mut explored = vec![board.seed().clone()];

        // a branch that's not on the path
        board.attempt_move(Dir::Down);
        explored.push(board.snapshot(Some(0), Some(Dir::Down), 0));

        board.reset();
        board.attempt_move(Dir::Right);
        explored.push(board.snapshot(Some(0), Some(Dir::Right), 0));
        board.attempt_move(Dir::Right);
        explored.push(board.snapshot(Some(2), Some(Dir::Right), 0));
        assert!(board.is_complete());

        assert_eq!(backtrack_prevs(&explored, 3), vec![0, 2, 3]);
        let moves = reconstruct(&explored, 3);
        assert_eq!(moves.to_string(), "rR");
        assert_eq!(moves.push_cnt(), 1);

        assert_eq!(reconstruct(&explored, 1).to_string(), "d");
        assert!(reconstruct(&explored, 0).is_empty());
    }
}
