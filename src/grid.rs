use std::fmt;

/// A cell coordinate in the maze, row-major from the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// The move that takes a node from its parent cell to its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Up,
    Down,
    Left,
    Right,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Action::Up => "up",
                Action::Down => "down",
                Action::Left => "left",
                Action::Right => "right",
            }
        )
    }
}

/// A maze description that could not be turned into a [`Grid`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MalformedGridError {
    /// No passability data at all (zero rows, or every row empty).
    Empty,
    /// The description did not contain exactly one start marker.
    StartCount(usize),
    /// The description did not contain exactly one goal marker.
    GoalCount(usize),
    /// A start/goal cell lies outside the grid.
    EndpointOutOfBounds(Position),
    /// A start/goal cell sits on a wall.
    EndpointBlocked(Position),
}

impl fmt::Display for MalformedGridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "maze has no passability data"),
            Self::StartCount(n) => {
                write!(f, "maze must have exactly one start point, found {}", n)
            }
            Self::GoalCount(n) => write!(f, "maze must have exactly one goal, found {}", n),
            Self::EndpointOutOfBounds(cell) => {
                write!(f, "endpoint {} lies outside the grid", cell)
            }
            Self::EndpointBlocked(cell) => write!(f, "endpoint {} sits on a wall", cell),
        }
    }
}

impl std::error::Error for MalformedGridError {}

/// An immutable rectangular maze: a wall table plus the two endpoints.
///
/// The grid only answers passability and adjacency questions; it never
/// changes once constructed, so it can back any number of searches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    height: usize,
    width: usize,
    /// true = wall. Rows may be shorter than `width`; cells past the end of
    /// a short row read as impassable.
    walls: Vec<Vec<bool>>,
    start: Position,
    goal: Position,
}

impl Grid {
    pub fn new(
        walls: Vec<Vec<bool>>,
        start: Position,
        goal: Position,
    ) -> Result<Self, MalformedGridError> {
        let height = walls.len();
        let width = walls.iter().map(Vec::len).max().unwrap_or(0);
        if height == 0 || width == 0 {
            return Err(MalformedGridError::Empty);
        }

        let grid = Grid {
            height,
            width,
            walls,
            start,
            goal,
        };
        for endpoint in [start, goal] {
            if endpoint.row >= grid.height || endpoint.col >= grid.width {
                return Err(MalformedGridError::EndpointOutOfBounds(endpoint));
            }
            if !grid.is_passable(endpoint) {
                return Err(MalformedGridError::EndpointBlocked(endpoint));
            }
        }
        Ok(grid)
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn start(&self) -> Position {
        self.start
    }

    pub fn goal(&self) -> Position {
        self.goal
    }

    /// Whether `cell` can be stepped on. Out-of-bounds cells are impassable,
    /// never an error; bounds are the half-open `0 <= coord < dim`.
    pub fn is_passable(&self, cell: Position) -> bool {
        if cell.row >= self.height || cell.col >= self.width {
            return false;
        }
        match self.walls[cell.row].get(cell.col) {
            Some(&wall) => !wall,
            None => false,
        }
    }

    /// The passable 4-connected neighbors of `cell` with the action that
    /// reaches them. The order is fixed (up, down, left, right) and is the
    /// tie-break contract for the search: it decides which branch a
    /// depth-first run dives into first.
    pub fn neighbors(&self, cell: Position) -> Vec<(Action, Position)> {
        let (row, col) = (cell.row as i64, cell.col as i64);
        let candidates = [
            (Action::Up, row - 1, col),
            (Action::Down, row + 1, col),
            (Action::Left, row, col - 1),
            (Action::Right, row, col + 1),
        ];

        let mut result = Vec::with_capacity(4);
        for (action, r, c) in candidates {
            if r < 0 || c < 0 {
                continue;
            }
            let next = Position {
                row: r as usize,
                col: c as usize,
            };
            if self.is_passable(next) {
                result.push((action, next));
            }
        }
        result
    }

    /// Number of passable cells, an upper bound on search expansions.
    pub fn passable_count(&self) -> usize {
        (0..self.height)
            .flat_map(|row| (0..self.width).map(move |col| Position { row, col }))
            .filter(|&cell| self.is_passable(cell))
            .count()
    }

    /// ASCII rendering: `#` wall, `A` start, `B` goal, `*` solution cell.
    pub fn to_text(&self, solution: Option<&[Position]>) -> String {
        let mut out = String::with_capacity((self.width + 1) * self.height);
        for row in 0..self.height {
            for col in 0..self.width {
                let cell = Position { row, col };
                let ch = if !self.is_passable(cell) {
                    '#'
                } else if cell == self.start {
                    'A'
                } else if cell == self.goal {
                    'B'
                } else if solution.is_some_and(|path| path.contains(&cell)) {
                    '*'
                } else {
                    ' '
                };
                out.push(ch);
            }
            out.push('\n');
        }
        out
    }
}
