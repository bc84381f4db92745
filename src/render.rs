use std::fs::File;
use std::path::Path;

use anyhow::Context;
use image::codecs::gif::{GifEncoder, Repeat};
use image::{Delay, Frame, Rgba, RgbaImage};
use log::info;

use crate::grid::{Grid, Position};
use crate::search::SearchResult;

const CELL_SIZE: u32 = 50;
const CELL_BORDER: u32 = 2;

const BACKGROUND: Rgba<u8> = Rgba([0, 0, 0, 255]);
const WALL: Rgba<u8> = Rgba([40, 40, 40, 255]);
const START: Rgba<u8> = Rgba([250, 0, 0, 255]);
const GOAL: Rgba<u8> = Rgba([0, 171, 28, 255]);
const PATH: Rgba<u8> = Rgba([220, 235, 113, 255]);
const EXPLORED: Rgba<u8> = Rgba([212, 97, 85, 255]);
const OPEN: Rgba<u8> = Rgba([237, 240, 252, 255]);

/// Rasterizes the maze, optionally annotated with a search outcome.
///
/// Each cell is a filled square with a thin background-colored border, so
/// the cell boundaries stay visible. The result and its contents are read
/// only; rendering never feeds back into the search.
pub fn render(grid: &Grid, result: Option<&SearchResult>, show_explored: bool) -> RgbaImage {
    let mut img = blank_canvas(grid);
    for row in 0..grid.height() {
        for col in 0..grid.width() {
            let cell = Position { row, col };
            fill_cell(&mut img, cell, cell_color(grid, result, show_explored, cell));
        }
    }
    img
}

fn cell_color(
    grid: &Grid,
    result: Option<&SearchResult>,
    show_explored: bool,
    cell: Position,
) -> Rgba<u8> {
    if !grid.is_passable(cell) {
        WALL
    } else if cell == grid.start() {
        START
    } else if cell == grid.goal() {
        GOAL
    } else if result.is_some_and(|r| r.path.contains(&cell)) {
        PATH
    } else if show_explored && result.is_some_and(|r| r.explored.contains(&cell)) {
        EXPLORED
    } else {
        OPEN
    }
}

fn blank_canvas(grid: &Grid) -> RgbaImage {
    RgbaImage::from_pixel(
        grid.width() as u32 * CELL_SIZE,
        grid.height() as u32 * CELL_SIZE,
        BACKGROUND,
    )
}

fn fill_cell(img: &mut RgbaImage, cell: Position, fill: Rgba<u8>) {
    let (row, col) = (cell.row as u32, cell.col as u32);
    for y in row * CELL_SIZE + CELL_BORDER..(row + 1) * CELL_SIZE - CELL_BORDER {
        for x in col * CELL_SIZE + CELL_BORDER..(col + 1) * CELL_SIZE - CELL_BORDER {
            img.put_pixel(x, y, fill);
        }
    }
}

/// Frame sequence of the solve: first the exploration trace one cell per
/// frame, then a clean canvas, then the path revealed from the goal back to
/// the start. Endpoint cells keep their own colors throughout.
fn animation_frames(grid: &Grid, result: &SearchResult) -> Vec<RgbaImage> {
    let mut frames = Vec::with_capacity(result.explored.len() + result.path.len() + 1);

    let mut canvas = render(grid, None, false);
    for &cell in &result.explored {
        if cell != grid.start() && cell != grid.goal() {
            fill_cell(&mut canvas, cell, EXPLORED);
        }
        frames.push(canvas.clone());
    }

    let mut canvas = render(grid, None, false);
    frames.push(canvas.clone());
    for &cell in result.path.iter().rev() {
        if cell != grid.start() && cell != grid.goal() {
            fill_cell(&mut canvas, cell, PATH);
        }
        frames.push(canvas.clone());
    }

    frames
}

/// Writes the animation as numbered PNG frames into `dir` (created if
/// missing) and returns the frame count.
pub fn write_frames(dir: &Path, grid: &Grid, result: &SearchResult) -> anyhow::Result<usize> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("creating frame directory {}", dir.display()))?;

    let frames = animation_frames(grid, result);
    for (index, frame) in frames.iter().enumerate() {
        let path = dir.join(format!("{:05}.png", index + 1));
        frame
            .save(&path)
            .with_context(|| format!("writing frame {}", path.display()))?;
    }
    info!("wrote {} frames to {}", frames.len(), dir.display());
    Ok(frames.len())
}

/// Assembles the animation frames into a looping GIF at `path`.
pub fn write_gif(
    path: &Path,
    grid: &Grid,
    result: &SearchResult,
    delay_ms: u64,
) -> anyhow::Result<()> {
    let file =
        File::create(path).with_context(|| format!("creating gif {}", path.display()))?;
    let mut encoder = GifEncoder::new(file);
    encoder.set_repeat(Repeat::Infinite)?;

    let delay = Delay::from_numer_denom_ms(delay_ms as u32, 1);
    for frame in animation_frames(grid, result) {
        encoder.encode_frame(Frame::from_parts(frame, 0, 0, delay))?;
    }
    info!("wrote gif {}", path.display());
    Ok(())
}
