use std::fmt::{self, Debug, Display, Formatter};

use separator::Separatable;

/// Counters of a single run, indexed by depth (number of moves from the seed).
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Stats {
    created: Vec<usize>,
    duplicates: Vec<usize>,
    deadlocked: Vec<usize>,
    expanded: Vec<usize>,
}

impl Stats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every state produced by a successful move, including the ones thrown away later.
    pub fn total_created(&self) -> usize {
        self.created.iter().sum()
    }

    pub fn total_duplicates(&self) -> usize {
        self.duplicates.iter().sum()
    }

    pub fn total_deadlocked(&self) -> usize {
        self.deadlocked.iter().sum()
    }

    pub fn total_expanded(&self) -> usize {
        self.expanded.iter().sum()
    }

    /// Deepest depth anything was created at, plus one.
    pub fn depths(&self) -> usize {
        self.created.len().max(self.expanded.len())
    }

    pub(crate) fn add_created(&mut self, depth: usize) -> bool {
        Self::add(&mut self.created, depth)
    }

    pub(crate) fn add_duplicate(&mut self, depth: usize) -> bool {
        Self::add(&mut self.duplicates, depth)
    }

    pub(crate) fn add_deadlocked(&mut self, depth: usize) -> bool {
        Self::add(&mut self.deadlocked, depth)
    }

    /// Returns true when this is the first node expanded at `depth`.
    pub(crate) fn add_expanded(&mut self, depth: usize) -> bool {
        Self::add(&mut self.expanded, depth)
    }

    fn add(counts: &mut Vec<usize>, depth: usize) -> bool {
        let mut ret = false;

        // while because some depths might be skipped (dfs backtracking, naive sequences)
        while depth >= counts.len() {
            counts.push(0);
            ret = true;
        }
        counts[depth] += 1;
        ret
    }

    /// One line with the totals, for progress reports.
    pub fn summary(&self) -> String {
        format!(
            "created: {}, expanded: {}, duplicates: {}, deadlocked: {}",
            self.total_created().separated_string(),
            self.total_expanded().separated_string(),
            self.total_duplicates().separated_string(),
            self.total_deadlocked().separated_string(),
        )
    }
}

fn at(counts: &[usize], depth: usize) -> usize {
    counts.get(depth).cloned().unwrap_or(0)
}

impl Debug for Stats {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "created by depth: {:?}", self.created)?;
        writeln!(f, "duplicates by depth: {:?}", self.duplicates)?;
        writeln!(f, "deadlocked by depth: {:?}", self.deadlocked)?;
        writeln!(f, "expanded by depth: {:?}", self.expanded)?;
        writeln!(f, "{}", self.summary())
    }
}

impl Display for Stats {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "States created total: {}", self.total_created().separated_string())?;
        writeln!(f, "Expanded total: {}", self.total_expanded().separated_string())?;
        writeln!(f, "Duplicates total: {}", self.total_duplicates().separated_string())?;
        writeln!(f, "Deadlocked total: {}", self.total_deadlocked().separated_string())?;
        writeln!(f)?;

        writeln!(
            f,
            "{:<15}{:<15}{:<15}{:<15}{}",
            "Depth", "Created", "Expanded", "Duplicates", "Deadlocked"
        )?;
        for depth in 0..self.depths() {
            writeln!(
                f,
                "{:<15}{:<15}{:<15}{:<15}{}",
                format!("{}:", depth),
                at(&self.created, depth).separated_string(),
                at(&self.expanded, depth).separated_string(),
                at(&self.duplicates, depth).separated_string(),
                at(&self.deadlocked, depth).separated_string(),
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_depths() {
        let mut stats = Stats::new();
        assert!(stats.add_expanded(0));
        assert!(!stats.add_expanded(0));
        assert!(stats.add_expanded(3));
        assert!(!stats.add_expanded(1));
        assert_eq!(stats.total_expanded(), 4);
        assert_eq!(stats.depths(), 4);
    }

    #[test]
    fn formatting_stats() {
        let mut stats = Stats::new();
        stats.add_created(0);
        stats.add_expanded(0);
        for _ in 0..1500 {
            stats.add_created(1);
        }
        stats.add_duplicate(1);
        stats.add_deadlocked(1);

        let expected = r"
States created total: 1,501
Expanded total: 1
Duplicates total: 1
Deadlocked total: 1

Depth          Created        Expanded       Duplicates     Deadlocked
0:             1              1              0              0
1:             1,500          0              1              1
"
        .trim_start_matches('\n');
        assert_eq!(stats.to_string(), expected);
        assert_eq!(
            stats.summary(),
            "created: 1,501, expanded: 1, duplicates: 1, deadlocked: 1"
        );
    }
}
