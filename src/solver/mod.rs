//! The search engine.
//!
//! Every method except naive enumeration works the same way: the board is reset to an explored
//! node, each direction is probed through the move engine and the resulting layouts that are
//! new and don't push a box onto a dead square are appended to the explored list.
//! The methods only differ in which node they pick to expand next.

mod backtracking;
mod best_first;
mod bfs;
mod control;
mod dfs;
#[cfg(feature = "graph")]
pub mod graph;
mod naive;
mod stats;

use std::fmt::{self, Debug, Formatter};
use std::ops::Index;

use fnv::FnvHashMap;
use log::{debug, info};

use crate::board::Board;
use crate::config::Method;
use crate::data::Dir;
use crate::heuristic;
use crate::level::Level;
use crate::moves::Moves;
use crate::state::Snapshot;
use crate::Solve;

pub use self::control::{Control, Deadline, IterationLimit, Unbounded};
pub use self::stats::Stats;

/// Index of the seed in the explored list.
const ROOT: usize = 0;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Solved(Moves),
    Cancelled,
    /// Every reachable layout was explored without finding a solution.
    Exhausted,
}

pub struct SearchResult {
    pub outcome: Outcome,
    pub method: Method,
    pub stats: Stats,
    /// All nodes of the run in the order they were created, the seed first.
    /// When solved, the last one is the winning node.
    pub explored: Vec<Snapshot>,
}

impl SearchResult {
    pub fn moves(&self) -> Option<&Moves> {
        match self.outcome {
            Outcome::Solved(ref moves) => Some(moves),
            _ => None,
        }
    }

    pub fn is_solved(&self) -> bool {
        self.moves().is_some()
    }
}

impl Debug for SearchResult {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.outcome {
            Outcome::Solved(ref moves) => {
                writeln!(f, "{}: {}", self.method, moves)?;
                writeln!(f, "Moves: {}", moves.move_cnt())?;
                writeln!(f, "Pushes: {}", moves.push_cnt())?;
            }
            Outcome::Cancelled => writeln!(f, "{}: cancelled", self.method)?,
            Outcome::Exhausted => writeln!(f, "{}: no solution", self.method)?,
        }
        writeln!(f, "Explored: {}", self.explored.len())?;
        write!(f, "{:?}", self.stats)
    }
}

impl Solve for Level {
    fn solve(&self, method: Method, control: &mut dyn Control) -> SearchResult {
        let mut board = self.board();
        board.analyze_deadlocks();
        search(&mut board, method, control)
    }
}

/// Runs `method` from the board's seed.
///
/// The board is used as scratch space during the run and reset to the seed afterwards.
/// Dead squares are pruned only if they've been computed beforehand
/// (see `Board::analyze_deadlocks`) and never by the naive method.
pub fn search(board: &mut Board, method: Method, control: &mut dyn Control) -> SearchResult {
    info!("Searching using {}", method);

    let seed = board.seed().clone();
    let mut search = Search {
        board,
        control,
        method,
        explored: Explored::new(seed),
        stats: Stats::new(),
    };
    search.stats.add_created(0);

    let outcome = if search.explored[ROOT].is_complete() {
        debug!("Seed is already complete");
        Outcome::Solved(Moves::default())
    } else {
        match method {
            Method::Naive => naive::run(&mut search),
            Method::BreadthFirst => bfs::run(&mut search),
            Method::DepthFirst => dfs::run(&mut search),
            Method::BestFirst | Method::Weighted => best_first::run(&mut search),
        }
    };

    let Search {
        board,
        explored,
        stats,
        ..
    } = search;
    board.reset();

    match outcome {
        Outcome::Solved(ref moves) => info!("{}: solved in {} moves", method, moves.move_cnt()),
        ref outcome => info!("{}: {:?}", method, outcome),
    }
    debug!("{}", stats.summary());

    SearchResult {
        outcome,
        method,
        stats,
        explored: explored.into_nodes(),
    }
}

/// What probing one direction from an explored node produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Probe {
    /// Wall or unpushable box.
    Blocked,
    Deadlocked,
    Duplicate,
    New(usize),
    Won(usize),
}

/// Append-only list of explored nodes with a hash index over their layouts.
struct Explored {
    nodes: Vec<Snapshot>,
    depths: Vec<usize>,
    layouts: FnvHashMap<u64, Vec<usize>>,
}

impl Explored {
    fn new(root: Snapshot) -> Self {
        let mut explored = Explored {
            nodes: Vec::new(),
            depths: Vec::new(),
            layouts: FnvHashMap::default(),
        };
        explored.push(root, 0);
        explored
    }

    fn contains(&self, snapshot: &Snapshot) -> bool {
        self.layouts
            .get(&snapshot.layout_hash())
            .map_or(false, |bucket| {
                bucket.iter().any(|&i| self.nodes[i].same_layout(snapshot))
            })
    }

    fn push(&mut self, snapshot: Snapshot, depth: usize) -> usize {
        let index = self.nodes.len();
        self.layouts
            .entry(snapshot.layout_hash())
            .or_insert_with(Vec::new)
            .push(index);
        self.nodes.push(snapshot);
        self.depths.push(depth);
        index
    }

    /// Length of the predecessor chain from the root.
    fn depth(&self, index: usize) -> usize {
        self.depths[index]
    }

    fn into_nodes(self) -> Vec<Snapshot> {
        self.nodes
    }
}

impl Index<usize> for Explored {
    type Output = Snapshot;

    fn index(&self, index: usize) -> &Snapshot {
        &self.nodes[index]
    }
}

/// State of one run shared by all the methods.
struct Search<'a> {
    board: &'a mut Board,
    control: &'a mut dyn Control,
    method: Method,
    explored: Explored,
    stats: Stats,
}

impl<'a> Search<'a> {
    fn cancelled(&mut self) -> bool {
        let cancelled = self.control.cancelled();
        if cancelled {
            debug!("{}: cancelled after {} nodes", self.method, self.explored.nodes.len());
        }
        cancelled
    }

    fn expand(&mut self, depth: usize) {
        if self.stats.add_expanded(depth) {
            debug!("{}: reached depth {}", self.method, depth);
            self.control.on_new_depth(depth, &self.stats);
        }
    }

    fn probe(&mut self, parent: usize, dir: Dir) -> Probe {
        self.board.reset_to(&self.explored[parent]);
        let outcome = self.board.attempt_move(dir);
        if !outcome.moved {
            return Probe::Blocked;
        }

        let depth = self.explored.depth(parent) + 1;
        self.stats.add_created(depth);

        if outcome.won {
            let terminal = self.board.snapshot(Some(parent), Some(dir), 0);
            return Probe::Won(self.explored.push(terminal, depth));
        }
        if outcome.hit_deadlock && self.method.prunes_deadlocks() {
            self.stats.add_deadlocked(depth);
            return Probe::Deadlocked;
        }

        let child = self.board.snapshot(Some(parent), Some(dir), 0);
        if self.explored.contains(&child) {
            self.stats.add_duplicate(depth);
            return Probe::Duplicate;
        }

        let weight = self.weigh(&child, depth);
        let child = Snapshot { weight, ..child };
        Probe::New(self.explored.push(child, depth))
    }

    /// Less is better, only the informed methods use it.
    fn weigh(&self, child: &Snapshot, depth: usize) -> i32 {
        match self.method {
            Method::BestFirst => heuristic::evaluate(child, self.board.dead_squares()),
            Method::Weighted => {
                heuristic::evaluate(child, self.board.dead_squares()) + depth as i32
            }
            Method::Naive | Method::BreadthFirst | Method::DepthFirst => 0,
        }
    }

    fn solved(&self, last: usize) -> Outcome {
        Outcome::Solved(backtracking::reconstruct(&self.explored.nodes, last))
    }
}
