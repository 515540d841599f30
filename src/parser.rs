use std::error::Error;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use crate::config::Format;
use crate::data::{Cell, MAX_SIZE};
use crate::level::Level;
use crate::vec2d::Vec2d;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParserErr {
    Pos(usize, usize),
    TooLarge,
    Empty,
    NoPlayer,
    MultiplePlayers,
    BoxesGoals { boxes: usize, goals: usize },
}

impl Display for ParserErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            ParserErr::Pos(r, c) => write!(f, "Invalid cell at pos: [{}, {}]", r, c),
            ParserErr::TooLarge => write!(f, "Map larger than {} rows/columns", MAX_SIZE),
            ParserErr::Empty => write!(f, "Empty level"),
            ParserErr::NoPlayer => write!(f, "No player"),
            ParserErr::MultiplePlayers => write!(f, "More than one player"),
            ParserErr::BoxesGoals { boxes, goals } => write!(
                f,
                "Different number of boxes ({}) and goals ({})",
                boxes, goals
            ),
        }
    }
}

impl Error for ParserErr {}

impl FromStr for Level {
    type Err = ParserErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

/// Parses a level, guessing the format - digits mean the `.dat` format, anything else is XSB.
pub fn parse(level: &str) -> Result<Level, ParserErr> {
    if level.chars().any(|c| c.is_ascii_digit()) {
        parse_format(level, Format::Digits)
    } else {
        parse_format(level, Format::Xsb)
    }
}

pub fn parse_format(level: &str, format: Format) -> Result<Level, ParserErr> {
    // trim so we can specify levels using raw strings more easily
    let level = level.trim_matches('\n').trim_end();
    if level.is_empty() {
        return Err(ParserErr::Empty);
    }

    let lines: Vec<_> = level.lines().map(|line| line.trim_end_matches('\r')).collect();
    let widest = lines.iter().map(|line| line.chars().count()).max().unwrap_or(0);
    if lines.len() > MAX_SIZE || widest > MAX_SIZE {
        return Err(ParserErr::TooLarge);
    }

    let mut grid = Vec::new();
    let mut goals = Vec::new();
    let mut boxes = Vec::new();
    let mut player = None;

    for (r, line) in lines.iter().enumerate() {
        let mut row = Vec::new();
        for (c, cur_char) in line.chars().enumerate() {
            let parsed = match format {
                Format::Digits => parse_digit(cur_char),
                Format::Xsb => parse_xsb(cur_char),
            };
            let (cell, has_player) = parsed.ok_or(ParserErr::Pos(r, c))?;
            if has_player {
                if player.is_some() {
                    return Err(ParserErr::MultiplePlayers);
                }
                player = Some((r, c));
            }
            if cell == Cell::Goal || cell == Cell::BoxOnGoal {
                goals.push((r, c));
            }
            if cell.has_box() {
                boxes.push((r, c));
            }
            row.push(cell);
        }
        grid.push(row);
    }

    let (player_r, player_c) = player.ok_or(ParserErr::NoPlayer)?;
    if boxes.len() != goals.len() {
        return Err(ParserErr::BoxesGoals {
            boxes: boxes.len(),
            goals: goals.len(),
        });
    }

    let field = Vec2d::from_rows(grid, Cell::Ground);
    let to_pos = |&(r, c): &(usize, usize)| field.pos(r, c);
    let goals = goals.iter().map(to_pos).collect();
    let boxes = boxes.iter().map(to_pos).collect();
    let player_pos = field.pos(player_r, player_c);
    Ok(Level::new(field, player_pos, goals, boxes))
}

/// Returns the cell and whether the player stands on it.
fn parse_digit(c: char) -> Option<(Cell, bool)> {
    let cell = match c {
        '0' => (Cell::Ground, false),
        '1' => (Cell::Wall, false),
        '2' => (Cell::Box, false),
        '3' => (Cell::BoxOnGoal, false),
        '4' => (Cell::Goal, false),
        '5' => (Cell::Ground, true),
        _ => return None,
    };
    Some(cell)
}

/// Parses (a subset of) the format described [here](http://www.sokobano.de/wiki/index.php?title=Level_format)
fn parse_xsb(c: char) -> Option<(Cell, bool)> {
    let cell = match c {
        '#' => (Cell::Wall, false),
        ' ' | '-' | '_' => (Cell::Ground, false),
        '$' | 'b' => (Cell::Box, false),
        '*' | 'B' => (Cell::BoxOnGoal, false),
        '.' => (Cell::Goal, false),
        '@' | 'p' => (Cell::Ground, true),
        '+' | 'P' => (Cell::Goal, true),
        _ => return None,
    };
    Some(cell)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn xsb_simplest() {
        let level = r"
#####
#@$.#
#####
";
        assert_success(level, Format::Xsb);
    }

    #[test]
    fn xsb_original_1() {
        let level = r"
    #####
    #   #
    #$  #
  ###  $##
  #  $ $ #
### # ## #   ######
#   # ## #####  ..#
# $  $          ..#
##### ### #@##  ..#
    #     #########
    #######
";
        assert_success(level, Format::Xsb);
        let level = parse(level).unwrap();
        assert_eq!(level.boxes().len(), 6);
        assert_eq!(level.goals().len(), 6);
        assert_eq!(level.field().cols(), 19);
    }

    #[test]
    fn digits_simplest() {
        let level = r"
11111
15204
11111
";
        let parsed = parse(level).unwrap();
        assert_eq!(parsed.player_pos(), 6);
        assert_eq!(parsed.boxes(), &[7]);
        assert_eq!(parsed.goals(), &[9]);
        assert_eq!(parsed.field()[6], Cell::Ground);
        assert_success(level, Format::Digits);
    }

    #[test]
    fn digits_short_lines_are_padded() {
        let level = "1111\n1524\n11";
        let parsed = parse(level).unwrap();
        assert_eq!(parsed.field().cols(), 4);
        assert_eq!(parsed.field()[parsed.field().pos(2, 3)], Cell::Ground);
    }

    #[test]
    fn box_goal_mismatch() {
        let level = r"
######
#@$$.#
######
";
        assert_failure(level, ParserErr::BoxesGoals { boxes: 2, goals: 1 });
        assert_failure("1111\n1524\n1401", ParserErr::BoxesGoals { boxes: 1, goals: 2 });
    }

    #[test]
    fn too_large() {
        let wide = "#".repeat(MAX_SIZE + 1);
        assert_failure(&format!("{}\n#@#", wide), ParserErr::TooLarge);
        let tall = vec!["#@#"; MAX_SIZE + 1].join("\n");
        assert_failure(&tall, ParserErr::TooLarge);

        // size is checked before any cell
        let mut bad_cells = vec!["###"; MAX_SIZE + 5];
        bad_cells[0] = "#X#";
        assert_failure(&bad_cells.join("\n"), ParserErr::TooLarge);
        assert_failure(&format!("{}\n11", "1".repeat(MAX_SIZE + 1)), ParserErr::TooLarge);

        // the limit itself is fine
        let mut ok = vec!["#".repeat(MAX_SIZE); MAX_SIZE];
        ok[1] = format!("#@{}", "#".repeat(MAX_SIZE - 2));
        assert!(parse(&ok.join("\n")).is_ok());
    }

    #[test]
    fn players() {
        assert_failure("#####\n# $.#\n#####", ParserErr::NoPlayer);
        assert_failure("#####\n#@@ #\n#####", ParserErr::MultiplePlayers);
        assert_failure("11111\n15501\n11111", ParserErr::MultiplePlayers);
    }

    #[test]
    fn invalid_chars() {
        assert_failure("#####\n#@$.#\n##X##", ParserErr::Pos(2, 2));
        assert_failure("11111\n15271\n11111", ParserErr::Pos(1, 3));
        assert_failure("\n\n", ParserErr::Empty);
    }

    fn assert_failure(input_level: &str, expected_err: ParserErr) {
        assert_eq!(input_level.parse::<Level>().unwrap_err(), expected_err);
    }

    fn assert_success(input_level: &str, format: Format) {
        let level = parse_format(input_level, format).unwrap();
        assert_eq!(
            level.format(format).to_string(),
            input_level.trim_start_matches('\n')
        );
    }
}
