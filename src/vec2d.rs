use std::fmt::{self, Debug, Display, Formatter};
use std::ops::{Index, IndexMut, Range};

use crate::data::Dir;

/// Row-major grid addressed by flat cell indices.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Vec2d<T> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T> Vec2d<T> {
    pub(crate) fn from_rows(grid: Vec<Vec<T>>, padding: T) -> Self
    where
        T: Clone,
    {
        let rows = grid.len();
        let cols = grid.iter().map(|row| row.len()).max().unwrap_or(0);
        let mut data = Vec::with_capacity(rows * cols);
        for row in grid {
            let len = row.len();
            data.extend(row);
            data.extend((len..cols).map(|_| padding.clone()));
        }
        Vec2d { data, rows, cols }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn positions(&self) -> Range<usize> {
        0..self.data.len()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn row_col(&self, pos: usize) -> (usize, usize) {
        (pos / self.cols, pos % self.cols)
    }

    pub fn pos(&self, r: usize, c: usize) -> usize {
        r * self.cols + c
    }

    /// The neighbor of `pos` in `dir` or `None` if that would leave the grid.
    pub fn step(&self, pos: usize, dir: Dir) -> Option<usize> {
        let (r, c) = self.row_col(pos);
        let (dr, dc) = dir.offset();
        let nr = r as i32 + dr;
        let nc = c as i32 + dc;
        if nr < 0 || nc < 0 || nr >= self.rows as i32 || nc >= self.cols as i32 {
            None
        } else {
            Some(self.pos(nr as usize, nc as usize))
        }
    }

    pub fn is_border(&self, pos: usize) -> bool {
        let (r, c) = self.row_col(pos);
        r == 0 || c == 0 || r + 1 == self.rows || c + 1 == self.cols
    }

    pub(crate) fn scratchpad<U: Clone>(&self, default: U) -> Vec2d<U> {
        Vec2d {
            data: vec![default; self.data.len()],
            rows: self.rows,
            cols: self.cols,
        }
    }
}

impl Display for Vec2d<bool> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for row in self.data.chunks(self.cols.max(1)) {
            for &cell in row {
                write!(f, "{}", if cell { 1 } else { 0 })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl<T: Debug> Debug for Vec2d<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for row in self.data.chunks(self.cols.max(1)) {
            for cell in row {
                write!(f, "{:?} ", cell)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl<T> Index<usize> for Vec2d<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        &self.data[index]
    }
}

impl<T> IndexMut<usize> for Vec2d<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.data[index]
    }
}
