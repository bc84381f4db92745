use clap::{ArgGroup, Parser};
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
#[command(group(ArgGroup::new("source").required(true).args(["maze", "random"])))]
pub struct Config {
    /// Maze description: a text file (A/B markers, spaces open, anything
    /// else walls) or a two-color image (dark walls, light floor)
    pub maze: Option<PathBuf>,

    /// Generate a random square maze of this size instead of reading a file
    #[arg(long)]
    pub random: Option<usize>,

    /// Frontier order: "dfs" (fast to find *a* path, no shortest-path
    /// guarantee) or "bfs" (guaranteed shortest path)
    #[arg(long, default_value = "dfs")]
    pub order: String,

    /// Number of walls for --random
    #[arg(long, default_value_t = 50)]
    pub num_walls: usize,

    /// RNG seed for --random, for reproducible mazes
    #[arg(long)]
    pub seed: Option<u64>,

    /// Start cell as ROW,COL (image mazes; overrides corner detection)
    #[arg(long)]
    pub start: Option<String>,

    /// Goal cell as ROW,COL (image mazes; overrides corner detection)
    #[arg(long)]
    pub goal: Option<String>,

    /// Write an annotated solution image to this path
    #[arg(long)]
    pub solution: Option<PathBuf>,

    /// Write numbered animation frames into this directory
    #[arg(long)]
    pub frames: Option<PathBuf>,

    /// Write the solve animation as a looping GIF to this path
    #[arg(long)]
    pub gif: Option<PathBuf>,

    /// GIF frame delay in milliseconds
    #[arg(long, default_value_t = 120)]
    pub delay_ms: u64,

    /// Also color explored cells in the solution image
    #[arg(long, default_value_t = false)]
    pub show_explored: bool,

    /// Skip the ASCII maze printouts
    #[arg(long, default_value_t = false)]
    pub quiet: bool,
}
