use std::path::Path;
use std::process;

use anyhow::{anyhow, bail, Context};
use clap::Parser;

use maze_solver::config::Config;
use maze_solver::frontier::Discipline;
use maze_solver::grid::{Grid, Position};
use maze_solver::{generate, image_maze, parse, render};

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let config = Config::parse();

    let order: Discipline = config.order.parse()?;
    let grid = load_grid(&config)?;

    if !config.quiet {
        println!(
            "Maze: {}x{}, order: {}",
            grid.height(),
            grid.width(),
            order
        );
        print!("{}", grid.to_text(None));
        println!("Solving...");
    }

    let result = match maze_solver::search(&grid, order) {
        Ok(result) => result,
        Err(err) => {
            eprintln!("{}", err);
            process::exit(1);
        }
    };

    if !config.quiet {
        print!("{}", grid.to_text(Some(&result.path)));
    }
    println!("States explored: {}", result.expansions);
    println!("Path length: {} steps", result.path.len() - 1);

    if let Some(path) = &config.solution {
        render::render(&grid, Some(&result), config.show_explored)
            .save(path)
            .with_context(|| format!("writing solution image {}", path.display()))?;
    }
    if let Some(dir) = &config.frames {
        render::write_frames(dir, &grid, &result)?;
    }
    if let Some(path) = &config.gif {
        render::write_gif(path, &grid, &result, config.delay_ms)?;
    }

    Ok(())
}

fn load_grid(config: &Config) -> anyhow::Result<Grid> {
    if let Some(size) = config.random {
        return Ok(generate::random_grid(size, config.num_walls, config.seed)?);
    }

    let Some(path) = config.maze.as_deref() else {
        bail!("either a maze file or --random is required");
    };

    if is_image(path) {
        let img =
            image::open(path).with_context(|| format!("opening maze image {}", path.display()))?;
        let endpoints = match (&config.start, &config.goal) {
            (Some(start), Some(goal)) => Some((parse_cell(start)?, parse_cell(goal)?)),
            (None, None) => None,
            _ => bail!("--start and --goal must be given together"),
        };
        Ok(image_maze::grid_from_image(&img, endpoints)?)
    } else {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading maze file {}", path.display()))?;
        Ok(parse::parse(&text)?)
    }
}

fn is_image(path: &Path) -> bool {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    matches!(
        ext.as_deref(),
        Some("png" | "jpg" | "jpeg" | "bmp" | "gif")
    )
}

fn parse_cell(text: &str) -> anyhow::Result<Position> {
    let (row, col) = text
        .split_once(',')
        .ok_or_else(|| anyhow!("expected ROW,COL, got {:?}", text))?;
    Ok(Position {
        row: row.trim().parse()?,
        col: col.trim().parse()?,
    })
}
