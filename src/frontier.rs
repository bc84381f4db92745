use std::collections::VecDeque;
use std::fmt;
use std::str::FromStr;

use crate::grid::Position;
use crate::search::NodeId;

/// Removal order of the frontier.
///
/// `DepthFirst` is the historical default of this solver, but it carries no
/// guarantee on path length. Only `BreadthFirst` expands nodes in
/// non-decreasing depth, so only it returns a path with the minimum number
/// of steps. Callers who care about shortest paths must ask for it
/// explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Discipline {
    DepthFirst,
    BreadthFirst,
}

impl fmt::Display for Discipline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Discipline::DepthFirst => "dfs",
                Discipline::BreadthFirst => "bfs",
            }
        )
    }
}

impl FromStr for Discipline {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dfs" | "depth-first" => Ok(Discipline::DepthFirst),
            "bfs" | "breadth-first" => Ok(Discipline::BreadthFirst),
            _ => Err(anyhow::anyhow!("unknown search order: {}", s)),
        }
    }
}

/// The discovered-but-unexpanded nodes of one search, in insertion order.
///
/// One deque serves both disciplines: depth-first pops from the back,
/// breadth-first from the front. Entries carry the cell next to the arena
/// index so membership checks do not need the arena.
#[derive(Debug)]
pub struct Frontier {
    discipline: Discipline,
    entries: VecDeque<(NodeId, Position)>,
}

impl Frontier {
    pub fn new(discipline: Discipline) -> Self {
        Self {
            discipline,
            entries: VecDeque::new(),
        }
    }

    pub fn push(&mut self, node: NodeId, cell: Position) {
        self.entries.push_back((node, cell));
    }

    /// Removes and returns the next node according to the discipline.
    ///
    /// Panics if the frontier is empty. That is a contract violation, not a
    /// reachable runtime condition: the search loop checks [`is_empty`]
    /// before every pop.
    ///
    /// [`is_empty`]: Frontier::is_empty
    pub fn pop(&mut self) -> (NodeId, Position) {
        let entry = match self.discipline {
            Discipline::DepthFirst => self.entries.pop_back(),
            Discipline::BreadthFirst => self.entries.pop_front(),
        };
        match entry {
            Some(entry) => entry,
            None => panic!("pop on an empty frontier"),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether any queued node sits on `cell`. A linear scan; the frontier
    /// contract is about membership semantics, not lookup speed.
    pub fn contains_cell(&self, cell: Position) -> bool {
        self.entries.iter().any(|&(_, c)| c == cell)
    }
}
