// Opt in to warnings about new 2018 idioms
#![warn(rust_2018_idioms)]
// Additional warnings that are allow by default (`rustc -W help`)
#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unreachable_pub)]
#![warn(unused)]
// Clippy
#![warn(clippy::all)]

pub mod board;
pub mod config;
pub mod data;
pub mod deadlocks;
pub mod formatter;
pub mod heuristic;
pub mod level;
pub mod moves;
pub mod parser;
pub mod solver;
pub mod state;
pub mod vec2d;

mod fs;

use std::error::Error;

use crate::config::{Format, Method};
use crate::level::Level;
use crate::solver::{Control, SearchResult};

pub trait LoadLevel {
    /// Guesses the format from the contents.
    fn load_level(&self) -> Result<Level, Box<dyn Error>>;

    fn load_level_as(&self, format: Format) -> Result<Level, Box<dyn Error>>;
}

pub trait Solve {
    /// Runs `method` on a fresh board with dead squares computed.
    fn solve(&self, method: Method, control: &mut dyn Control) -> SearchResult;
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::solver::{IterationLimit, Outcome, Unbounded};

    const SEARCHING: [Method; 4] = [
        Method::BreadthFirst,
        Method::DepthFirst,
        Method::BestFirst,
        Method::Weighted,
    ];

    #[test]
    fn test_levels() {
        // (path, bfs solution length if solvable)
        let levels = [
            ("levels/01-one-push.txt", Some(1)),
            ("levels/02-one-way.txt", Some(3)),
            ("levels/03-corridor.txt", Some(6)),
            ("levels/04-two-boxes.txt", Some(15)),
            ("levels/05-digits.txt", Some(2)),
            ("levels/no-solution.txt", None),
        ];

        for &(path, bfs_len) in &levels {
            let level = path.load_level().unwrap();
            let solvable = path != "levels/no-solution.txt";

            for &method in &SEARCHING {
                let result = level.solve(method, &mut Unbounded);
                match result.outcome {
                    Outcome::Solved(ref moves) => {
                        assert!(solvable, "{} solved {}", method, path);
                        let mut board = level.board();
                        assert!(board.play(moves), "{} {}: {}", method, path, moves);
                        if method == Method::BreadthFirst {
                            if let Some(len) = bfs_len {
                                assert_eq!(moves.move_cnt(), len, "{}", path);
                            }
                        }
                    }
                    Outcome::Exhausted => assert!(!solvable, "{} gave up on {}", method, path),
                    Outcome::Cancelled => unreachable!(),
                }
            }
        }
    }

    #[test]
    fn naive_on_short_levels() {
        for &path in &["levels/01-one-push.txt", "levels/02-one-way.txt"] {
            let level = path.load_level().unwrap();
            let naive = level.solve(Method::Naive, &mut IterationLimit::new(100_000));
            let bfs = level.solve(Method::BreadthFirst, &mut Unbounded);
            let naive_len = naive.moves().unwrap().move_cnt();
            assert!(bfs.moves().unwrap().move_cnt() <= naive_len);
        }

        let level = "levels/no-solution.txt".load_level().unwrap();
        let naive = level.solve(Method::Naive, &mut IterationLimit::new(1000));
        assert_eq!(naive.outcome, Outcome::Cancelled);
    }

    #[test]
    fn loading_errors() {
        assert!("levels/does-not-exist.txt".load_level().is_err());

        let err = "levels/05-digits.txt"
            .load_level_as(Format::Xsb)
            .unwrap_err();
        assert_eq!(err.to_string(), "Invalid cell at pos: [0, 0]");
    }
}
