//! Graphviz dump of the nodes explored by one run.

use std::borrow::Cow;
use std::io::{self, Write};

use dot::{self, Edges, GraphWalk, Id, LabelText, Labeller, Nodes, Style};

use crate::config::Format;
use crate::formatter::MapFormatter;
use crate::solver::backtracking;
use crate::solver::SearchResult;

type Nd = usize;
type Ed = (usize, usize);

#[derive(Debug)]
pub struct Graph<'a> {
    result: &'a SearchResult,
    edges: Vec<Ed>,
    on_path: Vec<bool>,
}

impl<'a> Graph<'a> {
    pub fn new(result: &'a SearchResult) -> Self {
        let explored = &result.explored;
        let edges = explored
            .iter()
            .enumerate()
            .filter_map(|(index, node)| node.prev.map(|prev| (prev, index)))
            .collect();

        let mut on_path = vec![false; explored.len()];
        if result.is_solved() && !explored.is_empty() {
            for index in backtracking::backtrack_prevs(explored, explored.len() - 1) {
                on_path[index] = true;
            }
        }

        Self {
            result,
            edges,
            on_path,
        }
    }

    pub fn render<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        dot::render(self, writer)
    }
}

impl<'a> GraphWalk<'a, Nd, Ed> for Graph<'a> {
    fn nodes(&'a self) -> Nodes<'a, Nd> {
        (0..self.result.explored.len()).collect()
    }

    fn edges(&'a self) -> Edges<'a, Ed> {
        Cow::from(&self.edges)
    }

    fn source(&'a self, e: &Ed) -> Nd {
        e.0
    }

    fn target(&'a self, e: &Ed) -> Nd {
        e.1
    }
}

impl<'a> Labeller<'a, Nd, Ed> for Graph<'a> {
    fn graph_id(&'a self) -> Id<'a> {
        Id::new("G").expect("valid dot id")
    }

    fn node_id(&'a self, n: &Nd) -> Id<'a> {
        Id::new(format!("N{}", n)).expect("valid dot id")
    }

    fn node_label(&'a self, n: &Nd) -> LabelText<'a> {
        let node = &self.result.explored[*n];
        let dir = node.dir.map_or(String::from("-"), |dir| dir.to_string());
        LabelText::EscStr(
            format!(
                "{}: {}, w: {}\n{}",
                n,
                dir,
                node.weight,
                MapFormatter::new(&node.field, node.player_pos, None, Format::Xsb)
            )
            .into(),
        )
    }

    fn node_style(&'a self, n: &Nd) -> Style {
        if self.on_path[*n] {
            Style::Filled
        } else {
            Style::Solid
        }
    }

    fn node_color(&'a self, n: &Nd) -> Option<LabelText<'a>> {
        if self.on_path[*n] {
            Some(LabelText::LabelStr("red".into()))
        } else {
            None
        }
    }
}
