use std::fmt::{self, Debug, Display, Formatter};

use crate::config::Format;
use crate::data::Cell;
use crate::deadlocks::DeadSquares;
use crate::vec2d::Vec2d;

/// Text rendering of a field - used by the binary, tests and debug logging.
pub struct MapFormatter<'a> {
    field: &'a Vec2d<Cell>,
    player_pos: usize,
    dead: Option<&'a DeadSquares>,
    format: Format,
}

impl<'a> MapFormatter<'a> {
    pub(crate) fn new(
        field: &'a Vec2d<Cell>,
        player_pos: usize,
        dead: Option<&'a DeadSquares>,
        format: Format,
    ) -> Self {
        Self {
            field,
            player_pos,
            dead,
            format,
        }
    }

    fn is_dead(&self, pos: usize) -> bool {
        self.dead.map_or(false, |dead| dead.contains(pos))
    }

    fn write_to_formatter(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for r in 0..self.field.rows() {
            // don't print trailing empty cells to match the input level strings
            let last_non_empty = (0..self.field.cols()).rev().find(|&c| {
                let pos = self.field.pos(r, c);
                self.field[pos] != Cell::Ground || pos == self.player_pos || self.is_dead(pos)
            });

            if let Some(last) = last_non_empty {
                for c in 0..=last {
                    let pos = self.field.pos(r, c);
                    let cell = self.field[pos];
                    let player = pos == self.player_pos;
                    let dead = self.is_dead(pos);
                    match self.format {
                        Format::Xsb => Self::write_cell_xsb(cell, player, dead, f)?,
                        Format::Digits => Self::write_cell_digits(cell, player, dead, f)?,
                    }
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }

    fn write_cell_xsb(cell: Cell, player: bool, dead: bool, f: &mut Formatter<'_>) -> fmt::Result {
        match (cell, player) {
            (Cell::Ground, true) => write!(f, "@"),
            (Cell::Ground, false) if dead => write!(f, "x"),
            (Cell::Ground, false) => write!(f, " "),
            (Cell::Goal, true) => write!(f, "+"),
            (Cell::Goal, false) => write!(f, "."),
            (Cell::Wall, _) => write!(f, "#"),
            (Cell::Box, _) => write!(f, "$"),
            (Cell::BoxOnGoal, _) => write!(f, "*"),
        }
    }

    fn write_cell_digits(
        cell: Cell,
        player: bool,
        dead: bool,
        f: &mut Formatter<'_>,
    ) -> fmt::Result {
        if player {
            write!(f, "5")
        } else if dead && cell == Cell::Ground {
            write!(f, "9")
        } else {
            write!(f, "{}", cell.digit())
        }
    }
}

impl<'a> Display for MapFormatter<'a> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.write_to_formatter(f)
    }
}

impl<'a> Debug for MapFormatter<'a> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

#[cfg(test)]
mod tests {
    use crate::level::Level;

    #[test]
    fn dead_squares_overlay() {
        let level: Level = r"
#####
#@  #
# $ #
#  .#
#####
"
        .parse()
        .unwrap();
        let mut board = level.board();
        board.analyze_deadlocks();

        let expected = r"
#####
#@xx#
#x$ #
#x .#
#####
"
        .trim_start_matches('\n');
        assert_eq!(board.xsb_with_deadlocks().to_string(), expected);
    }
}
