use std::fmt::{self, Debug, Display, Formatter};
use std::str::FromStr;

use crate::data::Dir;

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub dir: Dir,
    pub is_push: bool,
}

impl Move {
    pub fn new(dir: Dir, is_push: bool) -> Self {
        Move { dir, is_push }
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.is_push {
            write!(f, "{}", self.dir.to_string().to_uppercase())?;
        } else {
            write!(f, "{}", self.dir)?;
        }
        Ok(())
    }
}

impl Debug for Move {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

/// An ordered solution - playing it back from the seed solves the level.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct Moves(Vec<Move>);

impl Moves {
    pub fn new(moves: Vec<Move>) -> Self {
        Moves(moves)
    }

    pub fn move_cnt(&self) -> usize {
        self.0.len()
    }

    pub fn push_cnt(&self) -> usize {
        self.0.iter().filter(|m| m.is_push).count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub(crate) fn add(&mut self, mov: Move) {
        self.0.push(mov);
    }

    pub fn iter(&self) -> ::std::slice::Iter<'_, Move> {
        self.0.iter()
    }

    /// Just the directions, for stepwise playback.
    pub fn dirs(&self) -> Vec<Dir> {
        self.0.iter().map(|m| m.dir).collect()
    }
}

impl IntoIterator for Moves {
    type Item = Move;
    type IntoIter = ::std::vec::IntoIter<Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Moves {
    type Item = &'a Move;
    type IntoIter = ::std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Display for Moves {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for mov in self {
            write!(f, "{}", mov)?;
        }
        Ok(())
    }
}

/// Parses the LURD notation printed by `Display`, uppercase letters are pushes.
impl FromStr for Moves {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.chars()
            .map(|c| {
                let dir = match c.to_ascii_lowercase() {
                    'u' => Dir::Up,
                    'd' => Dir::Down,
                    'l' => Dir::Left,
                    'r' => Dir::Right,
                    _ => return Err(format!("Invalid move: {}", c)),
                };
                Ok(Move::new(dir, c.is_ascii_uppercase()))
            })
            .collect::<Result<_, _>>()
            .map(Moves)
    }
}

impl Debug for Moves {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formatting_moves() {
        let moves = Moves::new(vec![
            Move::new(Dir::Up, false),
            Move::new(Dir::Right, false),
            Move::new(Dir::Down, false),
            Move::new(Dir::Left, false),
            Move::new(Dir::Up, true),
            Move::new(Dir::Right, true),
            Move::new(Dir::Down, true),
            Move::new(Dir::Left, true),
        ]);
        assert_eq!(moves.to_string(), "urdlURDL");
        assert_eq!("urdlURDL".parse::<Moves>(), Ok(moves));
    }

    #[test]
    fn parsing_moves() {
        let moves: Moves = "rRuL".parse().unwrap();
        assert_eq!(moves.push_cnt(), 2);
        assert_eq!(
            moves.dirs(),
            vec![Dir::Right, Dir::Right, Dir::Up, Dir::Left]
        );
        assert_eq!("".parse::<Moves>(), Ok(Moves::default()));
        assert_eq!("rx".parse::<Moves>(), Err("Invalid move: x".to_owned()));
    }

    #[test]
    fn counting() {
        let mut moves = Moves::default();
        assert!(moves.is_empty());
        moves.add(Move::new(Dir::Up, true));
        moves.add(Move::new(Dir::Left, false));
        moves.add(Move::new(Dir::Left, true));

        assert_eq!(moves.move_cnt(), 3);
        assert_eq!(moves.push_cnt(), 2);
        assert_eq!(moves.dirs(), vec![Dir::Up, Dir::Left, Dir::Left]);
    }
}
