use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::grid::{Grid, MalformedGridError, Position};

/// Generates a random square maze of `size` x `size` cells.
///
/// The start lands in the top-left quadrant and the goal in the
/// bottom-right, so generated mazes always have some ground to cover. Wall
/// placement avoids the endpoints and gives up after a bounded number of
/// attempts, which makes `num_walls` an upper bound on dense grids. Passing
/// a seed makes the maze reproducible.
///
/// Nothing guarantees the result is solvable; an unsolvable maze is a
/// legitimate `NoSolutionError` exercise for the caller.
pub fn random_grid(
    size: usize,
    num_walls: usize,
    seed: Option<u64>,
) -> Result<Grid, MalformedGridError> {
    if size == 0 {
        return Err(MalformedGridError::Empty);
    }

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    // for a 1x1 grid the quadrants collapse onto the single cell
    let half = (size / 2).max(1);
    let start = Position {
        row: rng.gen_range(0..half),
        col: rng.gen_range(0..half),
    };
    let goal = Position {
        row: rng.gen_range(size - half..size),
        col: rng.gen_range(size - half..size),
    };

    let mut walls = vec![vec![false; size]; size];
    let mut placed = 0;
    let mut attempts = 0;
    while placed < num_walls && attempts < num_walls * 3 {
        let cell = Position {
            row: rng.gen_range(0..size),
            col: rng.gen_range(0..size),
        };
        if cell != start && cell != goal && !walls[cell.row][cell.col] {
            walls[cell.row][cell.col] = true;
            placed += 1;
        }
        attempts += 1;
    }

    debug!(
        "generated {size}x{size} maze with {placed} walls, start {start} goal {goal}"
    );
    Grid::new(walls, start, goal)
}
