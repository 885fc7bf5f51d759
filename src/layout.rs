//! Placement data for an external physics or drawing layer.
//!
//! Everything here is a pure function of a `Maze` and some lengths. The consumer decides how
//! walls, the goal region and the ball become bodies; this module only says where they go.

use std::error::Error;
use std::fmt;

use serde_derive::Serialize;

use crate::cells::CellCoordinate;
use crate::maze::Maze;
use crate::units::{CellHeight, CellWidth, Height, Width};

/// Thickness of the walls between cells.
pub const WALL_THICKNESS: f64 = 10.0;
/// Thickness of the frame around the whole maze area.
pub const BORDER_THICKNESS: f64 = 2.0;
/// Side of the goal region relative to the side of a cell.
pub const GOAL_SCALE: f64 = 0.7;

#[derive(Eq, PartialEq, Copy, Clone, Debug, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Runs left to right, separating a cell from the one below it.
    Horizontal,
    /// Runs top to bottom, separating a cell from the one to its right.
    Vertical,
}

/// An axis aligned rectangle given by its center and size.
#[derive(PartialEq, Copy, Clone, Debug, Serialize)]
pub struct WallSegment {
    pub center_x: f64,
    pub center_y: f64,
    pub width: f64,
    pub height: f64,
    pub orientation: Orientation,
}

/// One wall segment per closed edge, using the default `WALL_THICKNESS`.
pub fn derive_walls(maze: &Maze, cell_width: CellWidth, cell_height: CellHeight) -> Vec<WallSegment> {
    derive_walls_with_thickness(maze, cell_width, cell_height, WALL_THICKNESS)
}

/// One wall segment per closed edge.
///
/// A closed horizontal edge (r, c) becomes a `w x thickness` segment centered at
/// `(c * w + w / 2, r * h + h)`, on the boundary between rows r and r + 1. A closed vertical
/// edge (r, c) becomes a `thickness x h` segment centered at `(c * w + w, r * h + h / 2)`.
/// All horizontal walls come first, each table in row-major order.
pub fn derive_walls_with_thickness(maze: &Maze,
                                   cell_width: CellWidth,
                                   cell_height: CellHeight,
                                   thickness: f64)
                                   -> Vec<WallSegment> {
    let (CellWidth(w), CellHeight(h)) = (cell_width, cell_height);
    let mut walls = Vec::with_capacity(maze.closed_edges_count());

    for (row, column) in maze.horizontal_edges().iter_closed() {
        walls.push(WallSegment {
            center_x: column as f64 * w + w / 2.0,
            center_y: row as f64 * h + h,
            width: w,
            height: thickness,
            orientation: Orientation::Horizontal,
        });
    }

    for (row, column) in maze.vertical_edges().iter_closed() {
        walls.push(WallSegment {
            center_x: column as f64 * w + w,
            center_y: row as f64 * h + h / 2.0,
            width: thickness,
            height: h,
            orientation: Orientation::Vertical,
        });
    }

    walls
}

/// The four walls framing a `width x height` area.
pub fn boundary_walls(width: Width, height: Height, thickness: f64) -> [WallSegment; 4] {
    let (Width(w), Height(h)) = (width, height);
    let horizontal = |center_y| {
        WallSegment {
            center_x: w / 2.0,
            center_y,
            width: w,
            height: thickness,
            orientation: Orientation::Horizontal,
        }
    };
    let vertical = |center_x| {
        WallSegment {
            center_x,
            center_y: h / 2.0,
            width: thickness,
            height: h,
            orientation: Orientation::Vertical,
        }
    };
    [horizontal(0.0), horizontal(h), vertical(0.0), vertical(w)]
}

#[derive(PartialEq, Copy, Clone, Debug)]
pub enum LayoutError {
    InvalidWidth(f64),
    InvalidHeight(f64),
    InvalidThickness(f64),
    InvalidGoalScale(f64),
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            LayoutError::InvalidWidth(v) => write!(f, "layout width must be positive, got {}", v),
            LayoutError::InvalidHeight(v) => write!(f, "layout height must be positive, got {}", v),
            LayoutError::InvalidThickness(v) => {
                write!(f, "wall thickness must be positive, got {}", v)
            }
            LayoutError::InvalidGoalScale(v) => {
                write!(f, "goal scale must be in (0, 1], got {}", v)
            }
        }
    }
}

impl Error for LayoutError {}

/// Physical sizes used to lay a maze out.
#[derive(PartialEq, Copy, Clone, Debug)]
pub struct LayoutConfig {
    width: Width,
    height: Height,
    wall_thickness: f64,
    border_thickness: f64,
    goal_scale: f64,
}

impl Default for LayoutConfig {
    fn default() -> LayoutConfig {
        LayoutConfig {
            width: Width(1000.0),
            height: Height(750.0),
            wall_thickness: WALL_THICKNESS,
            border_thickness: BORDER_THICKNESS,
            goal_scale: GOAL_SCALE,
        }
    }
}

fn is_positive(v: f64) -> bool {
    v.is_finite() && v > 0.0
}

impl LayoutConfig {
    pub fn new(width: Width, height: Height) -> Result<LayoutConfig, LayoutError> {
        if !is_positive(width.0) {
            return Err(LayoutError::InvalidWidth(width.0));
        }
        if !is_positive(height.0) {
            return Err(LayoutError::InvalidHeight(height.0));
        }
        Ok(LayoutConfig {
            width,
            height,
            ..LayoutConfig::default()
        })
    }

    pub fn with_wall_thickness(self, thickness: f64) -> Result<LayoutConfig, LayoutError> {
        if !is_positive(thickness) {
            return Err(LayoutError::InvalidThickness(thickness));
        }
        Ok(LayoutConfig { wall_thickness: thickness, ..self })
    }

    pub fn with_border_thickness(self, thickness: f64) -> Result<LayoutConfig, LayoutError> {
        if !is_positive(thickness) {
            return Err(LayoutError::InvalidThickness(thickness));
        }
        Ok(LayoutConfig { border_thickness: thickness, ..self })
    }

    pub fn with_goal_scale(self, scale: f64) -> Result<LayoutConfig, LayoutError> {
        if !is_positive(scale) || scale > 1.0 {
            return Err(LayoutError::InvalidGoalScale(scale));
        }
        Ok(LayoutConfig { goal_scale: scale, ..self })
    }

    #[inline]
    pub fn width(&self) -> Width {
        self.width
    }

    #[inline]
    pub fn height(&self) -> Height {
        self.height
    }

    #[inline]
    pub fn wall_thickness(&self) -> f64 {
        self.wall_thickness
    }

    #[inline]
    pub fn border_thickness(&self) -> f64 {
        self.border_thickness
    }

    #[inline]
    pub fn goal_scale(&self) -> f64 {
        self.goal_scale
    }

    /// The size of one cell when `maze` fills the whole area.
    pub fn cell_size(&self, maze: &Maze) -> (CellWidth, CellHeight) {
        (CellWidth(self.width.0 / maze.columns().0 as f64),
         CellHeight(self.height.0 / maze.rows().0 as f64))
    }
}

/// A square-ish region centered in a cell.
#[derive(PartialEq, Copy, Clone, Debug, Serialize)]
pub struct CellMarker {
    pub row: usize,
    pub column: usize,
    pub center_x: f64,
    pub center_y: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(PartialEq, Copy, Clone, Debug, Serialize)]
pub struct Ball {
    pub center_x: f64,
    pub center_y: f64,
    pub radius: f64,
}

/// Everything the layout consumer places: frame, inner walls, the gameplay start and goal cells
/// and the movable ball.
///
/// The gameplay start is always the top left cell and the goal the bottom right cell, wherever
/// the generator happened to start its traversal; a perfect maze connects any two cells.
#[derive(PartialEq, Clone, Debug, Serialize)]
pub struct MazeLayout {
    pub rows: usize,
    pub columns: usize,
    pub cell_width: f64,
    pub cell_height: f64,
    pub boundary: Vec<WallSegment>,
    pub walls: Vec<WallSegment>,
    pub start: CellMarker,
    pub goal: CellMarker,
    pub ball: Ball,
}

impl MazeLayout {
    pub fn new(maze: &Maze, config: &LayoutConfig) -> MazeLayout {
        let (cell_width, cell_height) = config.cell_size(maze);
        let (CellWidth(w), CellHeight(h)) = (cell_width, cell_height);

        let marker = |coord: CellCoordinate, scale: f64| {
            CellMarker {
                row: coord.row,
                column: coord.column,
                center_x: coord.column as f64 * w + w / 2.0,
                center_y: coord.row as f64 * h + h / 2.0,
                width: w * scale,
                height: h * scale,
            }
        };
        let start = marker(CellCoordinate::new(0, 0), 1.0);
        let goal = marker(CellCoordinate::new(maze.rows().0 - 1, maze.columns().0 - 1),
                          config.goal_scale());
        let ball = Ball {
            center_x: start.center_x,
            center_y: start.center_y,
            radius: w.min(h) / 4.0,
        };

        MazeLayout {
            rows: maze.rows().0,
            columns: maze.columns().0,
            cell_width: w,
            cell_height: h,
            boundary: boundary_walls(config.width(), config.height(), config.border_thickness())
                .to_vec(),
            walls: derive_walls_with_thickness(maze,
                                               cell_width,
                                               cell_height,
                                               config.wall_thickness()),
            start,
            goal,
            ball,
        }
    }
}

#[cfg(test)]
mod tests {
    use quickcheck::quickcheck;

    use super::*;
    use crate::generators;
    use crate::grid_dimensions::MazeDimensions;
    use crate::random::{seeded_rng, ScriptedRandom};

    fn random_maze(rows: usize, columns: usize, seed: u64) -> Maze {
        let dims = MazeDimensions::from_sizes(rows, columns).unwrap();
        generators::recursive_backtracker(&dims, &mut seeded_rng(seed))
    }

    // 2 x 2, open: (0,0)-(0,1), (0,1)-(1,1), (1,0)-(1,1)
    // closed: horizontal (0,0), vertical none
    fn two_by_two() -> Maze {
        let dims = MazeDimensions::from_sizes(2, 2).unwrap();
        generators::recursive_backtracker(&dims, &mut ScriptedRandom::zeros())
    }

    #[test]
    fn single_cell_has_no_walls() {
        let m = random_maze(1, 1, 0);
        assert!(derive_walls(&m, CellWidth(10.0), CellHeight(10.0)).is_empty());
    }

    #[test]
    fn walls_at_closed_edge_midpoints() {
        let m = two_by_two();
        let walls = derive_walls(&m, CellWidth(100.0), CellHeight(50.0));
        assert_eq!(walls,
                   vec![WallSegment {
                            center_x: 50.0,
                            center_y: 50.0,
                            width: 100.0,
                            height: WALL_THICKNESS,
                            orientation: Orientation::Horizontal,
                        }]);
    }

    #[test]
    fn vertical_wall_midpoint() {
        let dims = MazeDimensions::from_sizes(1, 3).unwrap();
        let m = Maze::from_open_flags(dims, &[vec![true, false]], &[]).unwrap();
        let walls = derive_walls_with_thickness(&m, CellWidth(20.0), CellHeight(30.0), 4.0);
        assert_eq!(walls,
                   vec![WallSegment {
                            center_x: 40.0,
                            center_y: 15.0,
                            width: 4.0,
                            height: 30.0,
                            orientation: Orientation::Vertical,
                        }]);
    }

    #[test]
    fn one_wall_per_closed_edge() {
        fn p(rows: u8, columns: u8, seed: u64) -> bool {
            let (rows, columns) = (rows as usize % 16 + 1, columns as usize % 16 + 1);
            let m = random_maze(rows, columns, seed);
            let (w, h) = (12.0, 8.0);
            let walls = derive_walls(&m, CellWidth(w), CellHeight(h));

            let expected_horizontal = m.horizontal_edges()
                .iter_closed()
                .map(|(r, c)| (c as f64 * w + w / 2.0, r as f64 * h + h));
            let expected_vertical = m.vertical_edges()
                .iter_closed()
                .map(|(r, c)| (c as f64 * w + w, r as f64 * h + h / 2.0));
            let expected = expected_horizontal.chain(expected_vertical).collect::<Vec<_>>();

            walls.len() == m.closed_edges_count() &&
            walls.iter().map(|s| (s.center_x, s.center_y)).collect::<Vec<_>>() == expected
        }
        quickcheck(p as fn(u8, u8, u64) -> bool)
    }

    #[test]
    fn wall_count_for_perfect_maze() {
        // every possible edge minus the spanning tree edges
        let m = random_maze(7, 9, 5);
        let walls = derive_walls(&m, CellWidth(1.0), CellHeight(1.0));
        let all_edges = 7 * 8 + 6 * 9;
        assert_eq!(walls.len(), all_edges - (7 * 9 - 1));
    }

    #[test]
    fn boundary_frame() {
        let walls = boundary_walls(Width(400.0), Height(300.0), 2.0);
        assert_eq!(walls[0].center_x, 200.0);
        assert_eq!(walls[0].center_y, 0.0);
        assert_eq!(walls[1].center_y, 300.0);
        assert_eq!(walls[1].width, 400.0);
        assert_eq!(walls[2].center_x, 0.0);
        assert_eq!(walls[2].center_y, 150.0);
        assert_eq!(walls[3].center_x, 400.0);
        assert_eq!(walls[3].height, 300.0);
        assert_eq!(walls[3].orientation, Orientation::Vertical);
    }

    #[test]
    fn layout_config_validation() {
        assert_eq!(LayoutConfig::new(Width(0.0), Height(10.0)),
                   Err(LayoutError::InvalidWidth(0.0)));
        assert_eq!(LayoutConfig::new(Width(10.0), Height(-1.0)),
                   Err(LayoutError::InvalidHeight(-1.0)));
        assert!(LayoutConfig::new(Width(std::f64::INFINITY), Height(10.0)).is_err());
        let config = LayoutConfig::new(Width(10.0), Height(10.0)).unwrap();
        assert!(config.with_wall_thickness(0.0).is_err());
        assert!(config.with_border_thickness(-2.0).is_err());
        assert!(config.with_goal_scale(1.5).is_err());
        assert_eq!(config.with_goal_scale(0.5).map(|c| c.goal_scale()), Ok(0.5));
    }

    #[test]
    fn full_layout() {
        let m = random_maze(3, 4, 9);
        let config = LayoutConfig::new(Width(800.0), Height(600.0)).unwrap();
        let layout = MazeLayout::new(&m, &config);

        assert_eq!(layout.cell_width, 200.0);
        assert_eq!(layout.cell_height, 200.0);
        assert_eq!(layout.boundary.len(), 4);
        assert_eq!(layout.walls.len(), m.closed_edges_count());
        assert!(layout.walls.iter().all(|w| w.width == 200.0 || w.width == WALL_THICKNESS));

        assert_eq!((layout.start.row, layout.start.column), (0, 0));
        assert_eq!((layout.start.center_x, layout.start.center_y), (100.0, 100.0));

        assert_eq!((layout.goal.row, layout.goal.column), (2, 3));
        assert_eq!((layout.goal.center_x, layout.goal.center_y), (700.0, 500.0));
        assert!((layout.goal.width - 140.0).abs() < 1e-9);

        assert_eq!((layout.ball.center_x, layout.ball.center_y), (100.0, 100.0));
        assert_eq!(layout.ball.radius, 50.0);
    }
}
