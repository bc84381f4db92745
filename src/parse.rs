use log::debug;

use crate::grid::{Grid, MalformedGridError, Position};

/// Builds a [`Grid`] from a textual maze description.
///
/// `A` marks the start, `B` the goal, a space is open floor and any other
/// character is a wall. Marker counts are validated before a grid is
/// constructed; a description with zero or duplicate markers is rejected
/// outright rather than silently picking one. Lines of different lengths
/// are accepted; cells past the end of a short line read as impassable.
pub fn parse(text: &str) -> Result<Grid, MalformedGridError> {
    let mut walls = Vec::new();
    let mut starts = Vec::new();
    let mut goals = Vec::new();

    for (row, line) in text.lines().enumerate() {
        let mut row_walls = Vec::with_capacity(line.len());
        for (col, ch) in line.chars().enumerate() {
            let cell = Position { row, col };
            let wall = match ch {
                'A' => {
                    starts.push(cell);
                    false
                }
                'B' => {
                    goals.push(cell);
                    false
                }
                ' ' => false,
                _ => true,
            };
            row_walls.push(wall);
        }
        walls.push(row_walls);
    }

    if starts.len() != 1 {
        return Err(MalformedGridError::StartCount(starts.len()));
    }
    if goals.len() != 1 {
        return Err(MalformedGridError::GoalCount(goals.len()));
    }

    debug!(
        "parsed {}x{} maze, start {} goal {}",
        walls.len(),
        walls.iter().map(Vec::len).max().unwrap_or(0),
        starts[0],
        goals[0]
    );
    Grid::new(walls, starts[0], goals[0])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_markers_walls_and_floor() {
        let grid = parse("A# B\n#   \n").unwrap();
        assert_eq!(grid.start(), Position { row: 0, col: 0 });
        assert_eq!(grid.goal(), Position { row: 0, col: 3 });
        assert!(grid.is_passable(grid.start()));
        assert!(grid.is_passable(grid.goal()));
        assert!(!grid.is_passable(Position { row: 0, col: 1 }));
        assert!(!grid.is_passable(Position { row: 1, col: 0 }));
        assert!(grid.is_passable(Position { row: 1, col: 1 }));
    }

    #[test]
    fn any_non_marker_non_space_character_is_a_wall() {
        let grid = parse("A*B\n# x\n").unwrap();
        assert!(!grid.is_passable(Position { row: 0, col: 1 }));
        assert!(!grid.is_passable(Position { row: 1, col: 0 }));
        assert!(!grid.is_passable(Position { row: 1, col: 2 }));
        assert!(grid.is_passable(Position { row: 1, col: 1 }));
    }

    #[test]
    fn rejects_missing_or_duplicate_start() {
        assert_eq!(parse("  B\n"), Err(MalformedGridError::StartCount(0)));
        assert_eq!(parse("AAB\n"), Err(MalformedGridError::StartCount(2)));
    }

    #[test]
    fn rejects_missing_or_duplicate_goal() {
        assert_eq!(parse("A  \n"), Err(MalformedGridError::GoalCount(0)));
        assert_eq!(parse("ABB\n"), Err(MalformedGridError::GoalCount(2)));
    }

    #[test]
    fn rejects_empty_input() {
        assert_eq!(parse(""), Err(MalformedGridError::StartCount(0)));
    }

    #[test]
    fn jagged_lines_widen_to_the_longest_row() {
        let grid = parse("A\n   B\n").unwrap();
        assert_eq!(grid.height(), 2);
        assert_eq!(grid.width(), 4);
        // row 0 only declares one cell; the rest are impassable
        assert!(!grid.is_passable(Position { row: 0, col: 1 }));
        assert!(grid.is_passable(Position { row: 1, col: 1 }));
    }
}
