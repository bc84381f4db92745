use image::{DynamicImage, GenericImageView};
use log::debug;

use crate::grid::{Grid, MalformedGridError, Position};

/// Pixels with a red channel below this value count as walls. Mazes are
/// assumed two-colored: dark walls on a light floor.
const WALL_THRESHOLD: u8 = 128;

/// Builds a [`Grid`] from a two-color maze image.
///
/// Passability comes from thresholding each pixel. Endpoints are either
/// injected by the caller (e.g. from CLI coordinates) or detected with the
/// corner heuristic of [`detect_endpoints`]. The grid constructor still
/// validates both, so an endpoint on a wall is rejected, not patched up.
pub fn grid_from_image(
    img: &DynamicImage,
    endpoints: Option<(Position, Position)>,
) -> Result<Grid, MalformedGridError> {
    let walls = threshold_walls(img);
    let (start, goal) = match endpoints {
        Some(pair) => pair,
        None => detect_endpoints(&walls)?,
    };
    debug!(
        "image maze {}x{}, start {} goal {}",
        walls.len(),
        walls.first().map_or(0, Vec::len),
        start,
        goal
    );
    Grid::new(walls, start, goal)
}

fn threshold_walls(img: &DynamicImage) -> Vec<Vec<bool>> {
    let width = img.width() as usize;
    let height = img.height() as usize;

    let mut walls = vec![vec![true; width]; height];
    for row in 0..height {
        for col in 0..width {
            let p = img.get_pixel(col as u32, row as u32);
            walls[row][col] = p.0[0] < WALL_THRESHOLD;
        }
    }
    walls
}

/// Finds the endpoints of a maze whose entrances hug opposite corners:
/// scan inward along the main diagonal from the top-left corner until the
/// first passable cell (start), and from the bottom-right corner likewise
/// (goal). A diagonal made entirely of walls means the corresponding
/// endpoint count is zero.
fn detect_endpoints(walls: &[Vec<bool>]) -> Result<(Position, Position), MalformedGridError> {
    let height = walls.len();
    let width = walls.first().map_or(0, Vec::len);
    let limit = height.min(width);

    let start = (0..limit)
        .map(|i| Position { row: i, col: i })
        .find(|p| !walls[p.row][p.col])
        .ok_or(MalformedGridError::StartCount(0))?;
    let goal = (0..limit)
        .map(|i| Position {
            row: height - 1 - i,
            col: width - 1 - i,
        })
        .find(|p| !walls[p.row][p.col])
        .ok_or(MalformedGridError::GoalCount(0))?;
    Ok((start, goal))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    const DARK: Rgba<u8> = Rgba([0, 0, 0, 255]);
    const LIGHT: Rgba<u8> = Rgba([255, 255, 255, 255]);

    /// 4x4 image with a dark border and a light 2x2 interior.
    fn bordered_maze() -> DynamicImage {
        let mut img = RgbaImage::from_pixel(4, 4, DARK);
        for y in 1..3 {
            for x in 1..3 {
                img.put_pixel(x, y, LIGHT);
            }
        }
        DynamicImage::ImageRgba8(img)
    }

    #[test]
    fn threshold_separates_walls_from_floor() {
        let walls = threshold_walls(&bordered_maze());
        assert!(walls[0][0]);
        assert!(!walls[1][1]);
        assert!(!walls[2][2]);
        assert!(walls[3][3]);
    }

    #[test]
    fn corner_scan_finds_the_first_open_diagonal_cells() {
        let grid = grid_from_image(&bordered_maze(), None).unwrap();
        assert_eq!(grid.start(), Position { row: 1, col: 1 });
        assert_eq!(grid.goal(), Position { row: 2, col: 2 });
    }

    #[test]
    fn detected_endpoints_are_solvable() {
        let grid = grid_from_image(&bordered_maze(), None).unwrap();
        let result =
            crate::search::search(&grid, crate::frontier::Discipline::BreadthFirst).unwrap();
        // 2x2 open block: diagonal corners are two steps apart
        assert_eq!(result.path.len(), 3);
    }

    #[test]
    fn all_wall_image_reports_missing_endpoints() {
        let img = DynamicImage::ImageRgba8(RgbaImage::from_pixel(3, 3, DARK));
        assert_eq!(
            grid_from_image(&img, None),
            Err(MalformedGridError::StartCount(0))
        );
    }

    #[test]
    fn explicit_endpoints_bypass_detection_but_not_validation() {
        let start = Position { row: 1, col: 2 };
        let goal = Position { row: 2, col: 1 };
        let grid = grid_from_image(&bordered_maze(), Some((start, goal))).unwrap();
        assert_eq!(grid.start(), start);
        assert_eq!(grid.goal(), goal);

        let on_wall = Position { row: 0, col: 0 };
        assert_eq!(
            grid_from_image(&bordered_maze(), Some((start, on_wall))),
            Err(MalformedGridError::EndpointBlocked(on_wall))
        );
    }
}
