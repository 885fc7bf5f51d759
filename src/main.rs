use std::fs::File;
use std::io::prelude::*;

use docopt::Docopt;
use log::{debug, info, LevelFilter};
use serde_derive::Deserialize;
use simple_logger::SimpleLogger;
use smallvec::smallvec;

use maze_walls::cells::CellCoordinate;
use maze_walls::generators;
use maze_walls::grid_displays::{GridDisplay, PathDisplay, StartEndPointsDisplay};
use maze_walls::layout::{LayoutConfig, MazeLayout};
use maze_walls::maze::Maze;
use maze_walls::pathing;
use maze_walls::random;
use maze_walls::units::{ColumnsCount, Height, RowsCount, Width};

const USAGE: &str = "Maze walls

Usage:
    maze_walls_driver -h | --help
    maze_walls_driver [--rows=<r>] [--columns=<c>] [--seed=<n>] [--width=<w>] [--height=<h>] [--wall-thickness=<t>] [--show-path | --show-distances] [--text-out=<path>] [--layout-out=<path>] [--save-edges=<path>] [--verbose]

Options:
    -h --help               Show this screen.
    --rows=<r>              Number of cell rows in the maze [default: 3].
    --columns=<c>           Number of cell columns in the maze [default: 4].
    --seed=<n>              Seed for the random generator. A fresh seed is chosen and logged if not given.
    --width=<w>             Width of the area the maze layout fills [default: 1000].
    --height=<h>            Height of the area the maze layout fills [default: 750].
    --wall-thickness=<t>    Thickness of the inner walls in the layout [default: 10].
    --show-path             Mark the route from the top left cell to the bottom right cell in the text rendering.
    --show-distances        Show the distance from the top left cell to every cell in the text rendering, in hex.
    --text-out=<path>       Output file path for a textual rendering of the maze. Printed to stdout if not given.
    --layout-out=<path>     Output file path for the wall layout as JSON.
    --save-edges=<path>     Serialize the maze to a text file: each line is a pair of numbers. Line 1: n(#vertices) m(#edges). Line 2+ edge between vertices. Uses 1-based vertex indices.
    --verbose               Log generation details.
";

#[derive(Debug, Deserialize)]
struct MazeArgs {
    flag_rows: usize,
    flag_columns: usize,
    flag_seed: Option<u64>,
    flag_width: f64,
    flag_height: f64,
    flag_wall_thickness: f64,
    flag_show_path: bool,
    flag_show_distances: bool,
    flag_text_out: String,
    flag_layout_out: String,
    flag_save_edges: String,
    flag_verbose: bool,
}

mod errors {
    use error_chain::*;
    error_chain! {

        foreign_links {
            DocOptFailure(::docopt::Error);
            Io(::std::io::Error);
            Json(::serde_json::Error);
            Logger(::log::SetLoggerError);
            Dimensions(::maze_walls::grid_dimensions::DimensionsError);
            Layout(::maze_walls::layout::LayoutError);
        }
    }
}
use crate::errors::*;

fn main() -> Result<()> {

    let args: MazeArgs = Docopt::new(USAGE).and_then(|d| d.deserialize())?;

    SimpleLogger::new()
        .without_timestamps()
        .with_level(if args.flag_verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        })
        .env()
        .init()?;

    let seed = args.flag_seed.unwrap_or_else(random::random_seed);
    info!("Generating a {}x{} maze with seed {}", args.flag_rows, args.flag_columns, seed);

    let maze = generators::generate(RowsCount(args.flag_rows),
                                    ColumnsCount(args.flag_columns),
                                    &mut random::seeded_rng(seed))?;
    debug!("{} open and {} closed edges", maze.open_edges_count(), maze.closed_edges_count());

    let config = LayoutConfig::new(Width(args.flag_width), Height(args.flag_height))?
        .with_wall_thickness(args.flag_wall_thickness)?;
    let layout = MazeLayout::new(&maze, &config);
    info!("Derived {} walls inside a {}x{} frame",
          layout.walls.len(),
          args.flag_width,
          args.flag_height);

    if !args.flag_save_edges.is_empty() {
        save_maze_graph(&maze, &args.flag_save_edges)?;
    }

    if !args.flag_layout_out.is_empty() {
        let json = serde_json::to_string_pretty(&layout)?;
        write_text_to_file(&json, &args.flag_layout_out)
            .chain_err(|| format!("Failed to write layout to file {}", args.flag_layout_out))?;
    }

    let text = render_maze_text(&maze, &args)?;
    if args.flag_text_out.is_empty() {
        print!("{}", text);
    } else {
        write_text_to_file(&text, &args.flag_text_out)
            .chain_err(|| format!("Failed to write maze to text file {}", args.flag_text_out))?;
    }

    Ok(())
}

/// The text rendering with the requested overlay. The gameplay start and goal cells are marked
/// when no path or distances are asked for.
fn render_maze_text(maze: &Maze, maze_args: &MazeArgs) -> Result<String> {
    let start = CellCoordinate::new(0, 0);
    let goal = CellCoordinate::new(maze.rows().0 - 1, maze.columns().0 - 1);

    let display: Box<dyn GridDisplay> = if maze_args.flag_show_distances {
        Box::new(pathing::Distances::new(maze, start)
            .ok_or("The start cell is not on the maze.")?)
    } else if maze_args.flag_show_path {
        let path = pathing::solution_path(maze).ok_or("No route from the start to the goal.")?;
        debug!("Route to the goal is {} cells long", path.len());
        Box::new(PathDisplay::new(&path))
    } else {
        Box::new(StartEndPointsDisplay::new(smallvec![start], smallvec![goal]))
    };

    Ok(maze.render_text(Some(display.as_ref())))
}

fn write_text_to_file(data: &str, file_name: &str) -> std::io::Result<()> {
    let mut f = File::create(file_name)?;
    f.write_all(data.as_bytes())?;
    Ok(())
}

fn save_maze_graph(maze: &Maze, file_path: &str) -> Result<()> {

    let mut graph_data = format!("{} {}\n", maze.size(), maze.open_edges_count());

    for (src, dst) in maze.iter_links() {
        let index_a = maze.dimensions()
            .coordinate_to_index(src)
            .ok_or("Links iter gave an invalid coordinate")?;
        let index_b = maze.dimensions()
            .coordinate_to_index(dst)
            .ok_or("Links iter gave an invalid coordinate")?;
        graph_data.push_str(&format!("{} {}\n", index_a + 1, index_b + 1));
    }

    write_text_to_file(&graph_data, file_path)
        .chain_err(|| format!("Failed to write maze graph to text file {}", file_path))?;
    debug!("Saved {} edges to {}", maze.open_edges_count(), file_path);

    Ok(())
}
