use std::fmt;

use log::{debug, info};
use rustc_hash::FxHashSet;

use crate::frontier::{Discipline, Frontier};
use crate::grid::{Action, Grid, Position};

/// Index of a [`Node`] in the arena owned by one `search` call.
pub type NodeId = usize;

/// One element of the search tree: a cell plus the link back to how it was
/// reached. Parents are arena indices, so the whole tree drops with the
/// arena when `search` returns. The root has neither parent nor action.
#[derive(Debug, Clone, Copy)]
struct Node {
    cell: Position,
    parent: Option<NodeId>,
    action: Option<Action>,
}

/// Everything a successful search produces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// Cells from start to goal, both inclusive.
    pub path: Vec<Position>,
    /// The moves along `path`; always one shorter than `path`.
    pub actions: Vec<Action>,
    /// Every cell removed from the frontier for expansion, in pop order.
    pub explored: Vec<Position>,
    /// Number of frontier pops, including the final goal pop.
    pub expansions: usize,
}

/// The frontier drained before the goal was reached.
///
/// An expected, recoverable outcome: the maze simply has no route between
/// its endpoints. Callers can retry with another discipline or report the
/// maze as unsolvable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoSolutionError {
    /// Cells expanded before the frontier ran dry.
    pub expansions: usize,
}

impl fmt::Display for NoSolutionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "no solution: frontier exhausted after {} expansions",
            self.expansions
        )
    }
}

impl std::error::Error for NoSolutionError {}

/// Runs an uninformed search over `grid` from its start to its goal.
///
/// The loop pops a node, records it in the exploration trace, tests it
/// against the goal and otherwise expands it: each passable neighbor that is
/// neither already expanded nor already queued gets a child node. The
/// visited set caps every cell at one expansion, so the loop is bounded by
/// the number of passable cells and always terminates, cycles included.
pub fn search(grid: &Grid, discipline: Discipline) -> Result<SearchResult, NoSolutionError> {
    let mut nodes: Vec<Node> = Vec::new();
    let mut frontier = Frontier::new(discipline);
    let mut visited: FxHashSet<Position> = FxHashSet::default();
    let mut explored: Vec<Position> = Vec::new();

    nodes.push(Node {
        cell: grid.start(),
        parent: None,
        action: None,
    });
    frontier.push(0, grid.start());

    loop {
        if frontier.is_empty() {
            debug!("frontier drained after {} expansions", explored.len());
            return Err(NoSolutionError {
                expansions: explored.len(),
            });
        }

        let (id, cell) = frontier.pop();
        explored.push(cell);

        if cell == grid.goal() {
            let (path, actions) = reconstruct(&nodes, id);
            let expansions = explored.len();
            info!(
                "{} search found a {}-step path after {} expansions",
                discipline,
                path.len() - 1,
                expansions
            );
            return Ok(SearchResult {
                path,
                actions,
                explored,
                expansions,
            });
        }

        visited.insert(cell);
        for (action, neighbor) in grid.neighbors(cell) {
            // dedup on both sides: already expanded, or already queued
            if !visited.contains(&neighbor) && !frontier.contains_cell(neighbor) {
                let child = nodes.len();
                nodes.push(Node {
                    cell: neighbor,
                    parent: Some(id),
                    action: Some(action),
                });
                frontier.push(child, neighbor);
            }
        }
    }
}

/// Walks parent links from the goal node back to the root, then reverses
/// the collected cells and actions into start-to-goal order.
fn reconstruct(nodes: &[Node], goal: NodeId) -> (Vec<Position>, Vec<Action>) {
    let mut path = Vec::new();
    let mut actions = Vec::new();
    let mut current = goal;
    loop {
        let node = nodes[current];
        path.push(node.cell);
        match (node.parent, node.action) {
            (Some(parent), Some(action)) => {
                actions.push(action);
                current = parent;
            }
            _ => break,
        }
    }
    path.reverse();
    actions.reverse();
    (path, actions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::parse;

    fn pos(row: usize, col: usize) -> Position {
        Position { row, col }
    }

    /// Every consecutive pair in the path must be a real neighbor step.
    fn assert_valid_path(grid: &Grid, result: &SearchResult) {
        assert_eq!(result.path.first(), Some(&grid.start()));
        assert_eq!(result.path.last(), Some(&grid.goal()));
        assert_eq!(result.actions.len(), result.path.len() - 1);
        for (pair, action) in result.path.windows(2).zip(&result.actions) {
            let step = grid
                .neighbors(pair[0])
                .into_iter()
                .find(|&(_, cell)| cell == pair[1]);
            assert_eq!(step, Some((*action, pair[1])), "invalid step {:?}", pair);
        }
    }

    #[test]
    fn bfs_routes_around_the_middle_wall() {
        // wall down the middle column, open only along the bottom row
        let grid = parse("A#B\n # \n   \n").unwrap();
        let result = search(&grid, Discipline::BreadthFirst).unwrap();
        assert_eq!(
            result.path,
            vec![
                pos(0, 0),
                pos(1, 0),
                pos(2, 0),
                pos(2, 1),
                pos(2, 2),
                pos(1, 2),
                pos(0, 2),
            ]
        );
        assert_valid_path(&grid, &result);
    }

    #[test]
    fn single_row_corridor_is_found_by_both_disciplines() {
        let grid = parse("A  B\n").unwrap();
        let expected = vec![pos(0, 0), pos(0, 1), pos(0, 2), pos(0, 3)];
        for discipline in [Discipline::DepthFirst, Discipline::BreadthFirst] {
            let result = search(&grid, discipline).unwrap();
            assert_eq!(result.path, expected);
            assert_eq!(
                result.actions,
                vec![Action::Right, Action::Right, Action::Right]
            );
            assert_valid_path(&grid, &result);
        }
    }

    #[test]
    fn start_equal_to_goal_terminates_on_the_first_pop() {
        let grid = Grid::new(vec![vec![false]], pos(0, 0), pos(0, 0)).unwrap();
        let result = search(&grid, Discipline::DepthFirst).unwrap();
        assert_eq!(result.path, vec![pos(0, 0)]);
        assert!(result.actions.is_empty());
        assert_eq!(result.explored, vec![pos(0, 0)]);
        assert_eq!(result.expansions, 1);
    }

    #[test]
    fn enclosed_start_yields_no_solution() {
        let grid = parse(" # B\n#A# \n # \n").unwrap();
        let err = search(&grid, Discipline::BreadthFirst).unwrap_err();
        // only the start itself could be expanded
        assert_eq!(err.expansions, 1);
    }

    #[test]
    fn disconnected_goal_terminates_after_a_finite_frontier() {
        let grid = parse("A #\n  #\n##B\n").unwrap();
        for discipline in [Discipline::DepthFirst, Discipline::BreadthFirst] {
            let err = search(&grid, discipline).unwrap_err();
            assert!(err.expansions <= grid.passable_count());
        }
    }

    #[test]
    fn expansions_never_exceed_passable_cells() {
        let grid = parse("A   \n ## \n ## \n   B\n").unwrap();
        for discipline in [Discipline::DepthFirst, Discipline::BreadthFirst] {
            let result = search(&grid, discipline).unwrap();
            assert!(result.expansions <= grid.passable_count());
            assert_eq!(result.expansions, result.explored.len());
            assert_valid_path(&grid, &result);
        }
    }

    #[test]
    fn bfs_is_never_longer_than_dfs() {
        // two routes of different lengths around the block
        let grid = parse("A  \n## \n   \nB  \n").unwrap();
        let bfs = search(&grid, Discipline::BreadthFirst).unwrap();
        let dfs = search(&grid, Discipline::DepthFirst).unwrap();
        assert!(bfs.path.len() <= dfs.path.len());
        assert_valid_path(&grid, &bfs);
        assert_valid_path(&grid, &dfs);
    }

    #[test]
    fn exploration_trace_starts_at_start_and_ends_at_goal() {
        let grid = parse("A  \n   \n  B\n").unwrap();
        let result = search(&grid, Discipline::BreadthFirst).unwrap();
        assert_eq!(result.explored.first(), Some(&grid.start()));
        assert_eq!(result.explored.last(), Some(&grid.goal()));
        // a cell is expanded at most once
        let mut seen = std::collections::HashSet::new();
        assert!(result.explored.iter().all(|cell| seen.insert(cell)));
    }
}
