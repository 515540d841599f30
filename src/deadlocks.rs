//! Static dead squares - cells a box can never be pushed out of towards a goal.
//!
//! Only two simple patterns are detected: corners and straight runs along a wall
//! between two corners. Anything smarter (frozen boxes, corrals, ...) is not attempted.

use log::debug;

use crate::data::{Cell, Dir};
use crate::vec2d::Vec2d;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeadSquares {
    grid: Vec2d<bool>,
    positions: Vec<usize>,
}

impl DeadSquares {
    pub fn empty(field: &Vec2d<Cell>) -> Self {
        DeadSquares {
            grid: field.scratchpad(false),
            positions: Vec::new(),
        }
    }

    pub fn contains(&self, pos: usize) -> bool {
        self.grid[pos]
    }

    /// Corners in row-major order followed by the cells between them.
    pub fn positions(&self) -> &[usize] {
        &self.positions
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    fn mark(&mut self, pos: usize) {
        if !self.grid[pos] {
            self.grid[pos] = true;
            self.positions.push(pos);
        }
    }
}

pub fn analyze(field: &Vec2d<Cell>) -> DeadSquares {
    let mut dead = DeadSquares::empty(field);

    let corners: Vec<_> = field
        .positions()
        .filter(|&pos| is_corner(field, pos))
        .collect();
    for &pos in &corners {
        dead.mark(pos);
    }

    for (i, &first) in corners.iter().enumerate() {
        for &second in &corners[i + 1..] {
            let (r1, c1) = field.row_col(first);
            let (r2, c2) = field.row_col(second);
            // corners are sorted so `first` is always left of / above `second`
            if r1 == r2 {
                let sides = [Dir::Up, Dir::Down];
                mark_rail(field, &mut dead, first, second, Dir::Left, Dir::Right, &sides);
            } else if c1 == c2 {
                let sides = [Dir::Left, Dir::Right];
                mark_rail(field, &mut dead, first, second, Dir::Up, Dir::Down, &sides);
            }
        }
    }

    debug!("Found {} dead squares ({} corners)", dead.len(), corners.len());
    dead
}

fn is_wall(field: &Vec2d<Cell>, pos: usize, dir: Dir) -> bool {
    // off the grid counts as wall
    field.step(pos, dir).map_or(true, |next| field[next] == Cell::Wall)
}

fn is_corner(field: &Vec2d<Cell>, pos: usize) -> bool {
    match field[pos] {
        Cell::Goal | Cell::BoxOnGoal | Cell::Wall => return false,
        Cell::Ground | Cell::Box => {}
    }
    if field.is_border(pos) {
        return false;
    }
    let vertical = is_wall(field, pos, Dir::Up) || is_wall(field, pos, Dir::Down);
    let horizontal = is_wall(field, pos, Dir::Left) || is_wall(field, pos, Dir::Right);
    vertical && horizontal
}

/// Marks the cells strictly between two corners if the whole run, corners included,
/// is plain ground hugging a wall on one side and closed off by walls at both ends.
fn mark_rail(
    field: &Vec2d<Cell>,
    dead: &mut DeadSquares,
    start: usize,
    end: usize,
    before: Dir,
    after: Dir,
    sides: &[Dir],
) {
    if !is_wall(field, start, before) || !is_wall(field, end, after) {
        return;
    }

    let mut run = vec![start];
    let mut cur = start;
    while cur != end {
        match field.step(cur, after) {
            Some(next) => cur = next,
            None => return,
        }
        run.push(cur);
    }

    for &side in sides {
        let hugs_wall = run
            .iter()
            .all(|&pos| field[pos] == Cell::Ground && is_wall(field, pos, side));
        if hugs_wall {
            for &pos in &run[1..run.len() - 1] {
                dead.mark(pos);
            }
        }
    }
}
