use crate::data::{Dir, DIRECTIONS};
use crate::moves::{Move, Moves};
use crate::solver::{Outcome, Search, ROOT};

/// Tries every direction sequence, shortest first, replaying each from the seed.
///
/// Doesn't remember anything between attempts so there is no way to tell
/// the level is unsolvable, the caller has to cancel it.
pub(super) fn run(search: &mut Search<'_>) -> Outcome {
    let mut odometer = Odometer::new();

    loop {
        if search.cancelled() {
            return Outcome::Cancelled;
        }
        let depth = odometer.len();
        search.expand(depth);
        search.stats.add_created(depth);

        search.board.reset_to(&search.explored[ROOT]);
        let mut moves = Moves::default();
        for dir in odometer.dirs() {
            let outcome = search.board.attempt_move(dir);
            moves.add(Move::new(dir, outcome.pushed_box));
        }
        if search.board.is_complete() {
            return Outcome::Solved(moves);
        }

        odometer.advance();
    }
}

/// Base 4 counter, one digit per direction.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Odometer {
    digits: Vec<u8>,
}

impl Odometer {
    fn new() -> Self {
        Odometer { digits: vec![0] }
    }

    fn len(&self) -> usize {
        self.digits.len()
    }

    fn dirs<'a>(&'a self) -> impl Iterator<Item = Dir> + 'a {
        self.digits.iter().map(|&digit| DIRECTIONS[usize::from(digit)])
    }

    /// Increments the last digit with carry, when the first one overflows
    /// the sequence gets one longer and starts again from all zeros.
    fn advance(&mut self) {
        for digit in self.digits.iter_mut().rev() {
            *digit += 1;
            if usize::from(*digit) < DIRECTIONS.len() {
                return;
            }
            *digit = 0;
        }
        self.digits.push(0);
    }
}
