use std::hash::{Hash, Hasher};

use fnv::FnvHasher;

use crate::data::{Cell, Dir};
use crate::vec2d::Vec2d;

/// One search node: everything needed to restore a board plus the link to the node it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub player_pos: usize,
    pub field: Vec2d<Cell>,
    pub boxes: Vec<usize>,
    /// Index of the parent in the explored list of the same run.
    pub prev: Option<usize>,
    pub dir: Option<Dir>,
    pub weight: i32,
}

impl Snapshot {
    pub(crate) fn new(
        player_pos: usize,
        field: Vec2d<Cell>,
        boxes: Vec<usize>,
        prev: Option<usize>,
        dir: Option<Dir>,
        weight: i32,
    ) -> Self {
        Snapshot {
            player_pos,
            field,
            boxes,
            prev,
            dir,
            weight,
        }
    }

    /// Dedup equality - the field already encodes box occupancy.
    pub fn same_layout(&self, other: &Snapshot) -> bool {
        self.player_pos == other.player_pos && self.field == other.field
    }

    pub(crate) fn layout_hash(&self) -> u64 {
        let mut hasher = FnvHasher::default();
        self.player_pos.hash(&mut hasher);
        self.field.hash(&mut hasher);
        hasher.finish()
    }

    pub fn is_complete(&self) -> bool {
        self.boxes.iter().all(|&b| self.field[b] == Cell::BoxOnGoal)
    }
}
