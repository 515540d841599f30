use std::fmt::{self, Debug, Display, Formatter};

use crate::board::Board;
use crate::config::Format;
use crate::data::Cell;
use crate::formatter::MapFormatter;
use crate::state::Snapshot;
use crate::vec2d::Vec2d;

/// A successfully loaded level. The box and goal counts are guaranteed to match.
#[derive(Clone, PartialEq, Eq)]
pub struct Level {
    field: Vec2d<Cell>,
    player_pos: usize,
    goals: Vec<usize>,
    boxes: Vec<usize>,
}

impl Level {
    pub(crate) fn new(
        field: Vec2d<Cell>,
        player_pos: usize,
        goals: Vec<usize>,
        boxes: Vec<usize>,
    ) -> Self {
        debug_assert_eq!(goals.len(), boxes.len());
        Level {
            field,
            player_pos,
            goals,
            boxes,
        }
    }

    pub fn field(&self) -> &Vec2d<Cell> {
        &self.field
    }

    pub fn player_pos(&self) -> usize {
        self.player_pos
    }

    pub fn goals(&self) -> &[usize] {
        &self.goals
    }

    pub fn boxes(&self) -> &[usize] {
        &self.boxes
    }

    /// The initial state every search starts from.
    pub fn seed(&self) -> Snapshot {
        Snapshot::new(
            self.player_pos,
            self.field.clone(),
            self.boxes.clone(),
            None,
            None,
            0,
        )
    }

    pub fn board(&self) -> Board {
        Board::new(self)
    }

    pub fn xsb(&self) -> MapFormatter<'_> {
        self.format(Format::Xsb)
    }

    pub fn format(&self, format: Format) -> MapFormatter<'_> {
        MapFormatter::new(&self.field, self.player_pos, None, format)
    }
}

impl Display for Level {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.xsb())
    }
}

impl Debug for Level {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.xsb())
    }
}
