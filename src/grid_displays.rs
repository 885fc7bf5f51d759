use std::fmt;

use crate::cells::{CellCoordinate, CompassPrimary, CoordinateSmallVec};
use crate::maze::Maze;
use crate::pathing::Distances;
use crate::utils::{self, FnvHashSet};

const EMPTY_CELL_BODY: &str = "   ";

/// Text to draw inside a cell, always three characters wide.
pub trait GridDisplay {
    fn render_cell_body(&self, coord: CellCoordinate) -> String;
}

impl GridDisplay for Distances {
    fn render_cell_body(&self, coord: CellCoordinate) -> String {
        // The distances may come from a different maze, unknown cells stay blank.
        if let Some(d) = self.distance_from_start_to(coord) {
            // centre align, padding 3, lowercase hexadecimal
            format!("{:^3x}", d)
        } else {
            String::from(EMPTY_CELL_BODY)
        }
    }
}

#[derive(Debug)]
pub struct PathDisplay {
    on_path_coordinates: FnvHashSet<CellCoordinate>,
}

impl PathDisplay {
    pub fn new(path: &[CellCoordinate]) -> Self {
        let mut on_path_coordinates = utils::fnv_hashset(path.len());
        on_path_coordinates.extend(path.iter().cloned());
        PathDisplay { on_path_coordinates }
    }
}

impl GridDisplay for PathDisplay {
    fn render_cell_body(&self, coord: CellCoordinate) -> String {
        if self.on_path_coordinates.contains(&coord) {
            String::from(" . ")
        } else {
            String::from(EMPTY_CELL_BODY)
        }
    }
}

#[derive(Debug)]
pub struct StartEndPointsDisplay {
    start_coordinates: CoordinateSmallVec,
    end_coordinates: CoordinateSmallVec,
}

impl StartEndPointsDisplay {
    pub fn new(starts: CoordinateSmallVec, ends: CoordinateSmallVec) -> StartEndPointsDisplay {
        StartEndPointsDisplay {
            start_coordinates: starts,
            end_coordinates: ends,
        }
    }
}

impl GridDisplay for StartEndPointsDisplay {
    fn render_cell_body(&self, coord: CellCoordinate) -> String {
        if self.start_coordinates.contains(&coord) {
            String::from(" S ")
        } else if self.end_coordinates.contains(&coord) {
            String::from(" E ")
        } else {
            String::from(EMPTY_CELL_BODY)
        }
    }
}

const WALL_LR_3: &str = "───";
const WALL_UD: &str = "│";

/// The box drawing character joining whichever of the four arms are walls.
fn junction(left: bool, right: bool, up: bool, down: bool) -> &'static str {
    match (left, right, up, down) {
        (true, true, true, true) => "┼",
        (true, true, true, false) => "┴",
        (true, true, false, true) => "┬",
        (true, false, true, true) => "┤",
        (false, true, true, true) => "├",
        (true, true, false, false) => "─",
        (false, false, true, true) => "│",
        (false, true, true, false) => "└",
        (true, false, false, true) => "┐",
        (true, false, true, false) => "┘",
        (false, true, false, true) => "┌",
        (true, false, false, false) => "╴",
        (false, true, false, false) => "╶",
        (false, false, true, false) => "╵",
        (false, false, false, true) => "╷",
        (false, false, false, false) => " ",
    }
}

impl Maze {
    /// Box drawing text of the maze, one text row for the cell bodies and one for the walls below
    /// them per maze row. `display` picks what goes inside each cell.
    pub fn render_text(&self, display: Option<&dyn GridDisplay>) -> String {
        let columns_count = self.columns().0;
        let rows_count = self.rows().0;

        // Boundary cells report a wall on the outer side.
        let east_wall = |coord| !self.is_open(coord, CompassPrimary::East);
        let south_wall = |coord| !self.is_open(coord, CompassPrimary::South);

        // The north boundary. Every later corner is the south east corner of some cell.
        let mut output = String::from("┌");
        for column in 0..columns_count {
            let coord = CellCoordinate::new(0, column);
            let is_last_column = column == columns_count - 1;
            output.push_str(WALL_LR_3);
            output.push_str(junction(true, !is_last_column, false, east_wall(coord)));
        }
        output.push('\n');

        for (index_row, row) in self.iter_row().enumerate() {
            let is_last_row = index_row == rows_count - 1;

            let mut middle_section = String::from(WALL_UD);
            let mut bottom_section = String::new();

            for (index_column, cell_coord) in row.into_iter().enumerate() {
                let is_last_column = index_column == columns_count - 1;

                if index_column == 0 {
                    bottom_section.push_str(junction(false,
                                                     south_wall(cell_coord),
                                                     true,
                                                     !is_last_row));
                }

                match display {
                    Some(displayer) => {
                        middle_section.push_str(&displayer.render_cell_body(cell_coord))
                    }
                    None => middle_section.push_str(EMPTY_CELL_BODY),
                }
                middle_section.push_str(if east_wall(cell_coord) { WALL_UD } else { " " });

                bottom_section.push_str(if south_wall(cell_coord) {
                    WALL_LR_3
                } else {
                    EMPTY_CELL_BODY
                });

                let right_arm = !is_last_column &&
                                self.neighbour_at_direction(cell_coord, CompassPrimary::East)
                    .map_or(true, |c| south_wall(c));
                let down_arm = !is_last_row &&
                               self.neighbour_at_direction(cell_coord, CompassPrimary::South)
                    .map_or(true, |c| east_wall(c));
                bottom_section.push_str(junction(south_wall(cell_coord),
                                                 right_arm,
                                                 east_wall(cell_coord),
                                                 down_arm));
            }

            output.push_str(&middle_section);
            output.push('\n');
            output.push_str(&bottom_section);
            output.push('\n');
        }

        output
    }
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.render_text(None))
    }
}
