//! Ranking of candidate states for the informed search methods.
//!
//! Each box that's not placed yet gets its own BFS which pushes only that box
//! (ignoring the player and other boxes) towards the nearest goal no earlier box claimed.
//! Placed boxes get a flat bonus instead of 0 so the value is not an admissible distance,
//! it can even be negative. It's only meant for ordering the frontier.

use std::collections::VecDeque;

use log::trace;

use crate::data::{Cell, DIRECTIONS};
use crate::deadlocks::DeadSquares;
use crate::state::Snapshot;
use crate::vec2d::Vec2d;

/// Added for every box already on a goal.
pub const PLACED_BOX: i32 = -10;
/// Added for a box that can't be pushed anywhere.
pub const STUCK_BOX: i32 = 20;

/// Less is better.
pub fn evaluate(snapshot: &Snapshot, dead: &DeadSquares) -> i32 {
    let field = &snapshot.field;
    let mut claimed = field.scratchpad(false);
    let mut total = 0;

    for &box_pos in &snapshot.boxes {
        if field[box_pos] == Cell::BoxOnGoal {
            total += PLACED_BOX;
            claimed[box_pos] = true;
            continue;
        }

        let cost = match push_distance(field, dead, &claimed, box_pos) {
            Reach::Goal(goal, dist) => {
                claimed[goal] = true;
                dist
            }
            Reach::Farthest(dist) => dist,
            Reach::Stuck => STUCK_BOX,
        };
        trace!("box {} costs {}", box_pos, cost);
        total += cost;
    }

    total
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Reach {
    /// Position of the first free goal and number of pushes to get there.
    Goal(usize, i32),
    /// No free goal reachable, depth of the last position discovered.
    Farthest(i32),
    Stuck,
}

fn push_distance(
    field: &Vec2d<Cell>,
    dead: &DeadSquares,
    claimed: &Vec2d<bool>,
    start: usize,
) -> Reach {
    let mut visited = field.scratchpad(false);
    visited[start] = true;
    let mut to_visit = VecDeque::new();
    to_visit.push_back((start, 0));
    let mut farthest = None;

    while let Some((box_pos, dist)) = to_visit.pop_front() {
        for &dir in &DIRECTIONS {
            // the player has to stand on the opposite side
            let next = field.step(box_pos, dir);
            let player = field.step(box_pos, dir.inverse());
            let (next, player) = match (next, player) {
                (Some(next), Some(player)) => (next, player),
                _ => continue,
            };
            if field[next] == Cell::Wall || field[player] == Cell::Wall || dead.contains(next) {
                continue;
            }

            // other boxes are ignored so goals under them don't count either
            if field[next] == Cell::Goal && !claimed[next] {
                return Reach::Goal(next, dist + 1);
            }
            if !visited[next] {
                visited[next] = true;
                farthest = Some(dist + 1);
                to_visit.push_back((next, dist + 1));
            }
        }
    }

    match farthest {
        Some(dist) => Reach::Farthest(dist),
        None => Reach::Stuck,
    }
}
