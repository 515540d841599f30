use log::{trace, warn};

use crate::config::Format;
use crate::data::{Cell, Dir};
use crate::deadlocks::{self, DeadSquares};
use crate::formatter::MapFormatter;
use crate::level::Level;
use crate::moves::Moves;
use crate::state::Snapshot;
use crate::vec2d::Vec2d;

/// What a single `attempt_move` did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MoveOutcome {
    pub moved: bool,
    pub pushed_box: bool,
    pub won: bool,
    pub hit_deadlock: bool,
}

/// The mutable working copy of a level that the solvers drive move by move.
#[derive(Debug, Clone)]
pub struct Board {
    field: Vec2d<Cell>,
    player_pos: usize,
    player_dir: Dir,
    goals: Vec<usize>,
    boxes: Vec<usize>,
    dead: DeadSquares,
    seed: Snapshot,
}

impl Board {
    pub fn new(level: &Level) -> Self {
        let seed = level.seed();
        Board {
            field: seed.field.clone(),
            player_pos: seed.player_pos,
            player_dir: Dir::Up,
            goals: level.goals().to_vec(),
            boxes: seed.boxes.clone(),
            dead: DeadSquares::empty(&seed.field),
            seed,
        }
    }

    pub fn field(&self) -> &Vec2d<Cell> {
        &self.field
    }

    pub fn player_pos(&self) -> usize {
        self.player_pos
    }

    /// The direction of the last attempted move, for sprite orientation.
    pub fn player_dir(&self) -> Dir {
        self.player_dir
    }

    pub fn goals(&self) -> &[usize] {
        &self.goals
    }

    pub fn boxes(&self) -> &[usize] {
        &self.boxes
    }

    pub fn seed(&self) -> &Snapshot {
        &self.seed
    }

    pub fn dead_squares(&self) -> &DeadSquares {
        &self.dead
    }

    pub fn is_dead(&self, pos: usize) -> bool {
        self.dead.contains(pos)
    }

    /// Computes the dead squares of the initial layout.
    /// The current position of boxes doesn't matter, only the seed is used.
    pub fn analyze_deadlocks(&mut self) -> &DeadSquares {
        self.dead = deadlocks::analyze(&self.seed.field);
        &self.dead
    }

    pub fn clear_deadlocks(&mut self) {
        self.dead = DeadSquares::empty(&self.seed.field);
    }

    pub fn is_complete(&self) -> bool {
        self.boxes.iter().all(|&b| self.field[b] == Cell::BoxOnGoal)
    }

    pub fn snapshot(&self, prev: Option<usize>, dir: Option<Dir>, weight: i32) -> Snapshot {
        Snapshot::new(
            self.player_pos,
            self.field.clone(),
            self.boxes.clone(),
            prev,
            dir,
            weight,
        )
    }

    pub fn reset_to(&mut self, snapshot: &Snapshot) {
        self.player_pos = snapshot.player_pos;
        self.field.clone_from(&snapshot.field);
        self.boxes.clone_from(&snapshot.boxes);
    }

    pub fn reset(&mut self) {
        self.player_pos = self.seed.player_pos;
        self.field.clone_from(&self.seed.field);
        self.boxes.clone_from(&self.seed.boxes);
        self.player_dir = Dir::Up;
    }

    /// Like `attempt_move` but takes the raw direction index used by input layers.
    /// Anything outside `0..4` is ignored.
    pub fn attempt_move_raw(&mut self, dir: u8) -> MoveOutcome {
        match Dir::from_index(dir) {
            Some(dir) => self.attempt_move(dir),
            None => {
                warn!("Invalid direction: {}", dir);
                MoveOutcome::default()
            }
        }
    }

    pub fn attempt_move(&mut self, dir: Dir) -> MoveOutcome {
        let mut outcome = MoveOutcome::default();
        self.player_dir = dir;

        let target = match self.field.step(self.player_pos, dir) {
            Some(target) => target,
            None => return outcome,
        };

        if self.field[target].has_box() {
            if let Some(dest) = self.field.step(target, dir) {
                if self.field[dest].is_walkable() {
                    outcome.hit_deadlock = self.push_box(target, dest);
                    outcome.pushed_box = true;
                }
            }
        }

        if self.field[target].is_walkable() {
            self.player_pos = target;
            outcome.moved = true;
        }

        outcome.won = self.is_complete();
        trace!("{} -> {:?}", dir, outcome);
        outcome
    }

    /// Returns whether the box ended up on a dead square.
    fn push_box(&mut self, src: usize, dest: usize) -> bool {
        let index = self
            .boxes
            .iter()
            .position(|&b| b == src)
            .expect("Box cell must be tracked");
        self.boxes[index] = dest;

        self.field[src] = if self.field[src] == Cell::BoxOnGoal {
            Cell::Goal
        } else {
            Cell::Ground
        };
        if self.field[dest] == Cell::Goal {
            self.field[dest] = Cell::BoxOnGoal;
            false
        } else {
            self.field[dest] = Cell::Box;
            self.dead.contains(dest)
        }
    }

    /// Replays `moves` from the current position, returns whether the board ends up complete.
    pub fn play(&mut self, moves: &Moves) -> bool {
        for mov in moves {
            self.attempt_move(mov.dir);
        }
        self.is_complete()
    }

    pub fn xsb(&self) -> MapFormatter<'_> {
        MapFormatter::new(&self.field, self.player_pos, None, Format::Xsb)
    }

    pub fn xsb_with_deadlocks(&self) -> MapFormatter<'_> {
        MapFormatter::new(&self.field, self.player_pos, Some(&self.dead), Format::Xsb)
    }

    pub fn format(&self, format: Format) -> MapFormatter<'_> {
        MapFormatter::new(&self.field, self.player_pos, Some(&self.dead), format)
    }
}
