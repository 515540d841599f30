use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    /// One digit per cell, as in the original `.dat` files.
    Digits,
    Xsb,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Method {
    Naive,
    BreadthFirst,
    DepthFirst,
    BestFirst,
    Weighted,
}

impl Method {
    pub const ALL: [Method; 5] = [
        Method::Naive,
        Method::BreadthFirst,
        Method::DepthFirst,
        Method::BestFirst,
        Method::Weighted,
    ];

    /// Whether the method consults the deadlock set when it's been computed.
    pub fn prunes_deadlocks(self) -> bool {
        self != Method::Naive
    }
}

impl Display for Method {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Method::Naive => write!(f, "naive"),
            Method::BreadthFirst => write!(f, "bfs"),
            Method::DepthFirst => write!(f, "dfs"),
            Method::BestFirst => write!(f, "best-first"),
            Method::Weighted => write!(f, "weighted"),
        }
    }
}

impl FromStr for Method {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Method::ALL
            .iter()
            .copied()
            .find(|method| method.to_string() == s)
            .ok_or_else(|| format!("Unknown method: {}", s))
    }
}
