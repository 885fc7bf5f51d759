use std::convert::From;
use std::fmt;

use smallvec::SmallVec;

use crate::grid_dimensions::MazeDimensions;
use crate::units::{ColumnIndex, RowIndex};

pub type CoordinateSmallVec = SmallVec<[CellCoordinate; 4]>;
pub type CoordinateOptionSmallVec = SmallVec<[Option<CellCoordinate>; 4]>;

/// A cell on the maze grid, addressed by row then column.
/// Row 0 is the top row and column 0 the left-most column.
#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug, Ord, PartialOrd)]
pub struct CellCoordinate {
    pub row: usize,
    pub column: usize,
}

impl CellCoordinate {
    pub fn new(row: usize, column: usize) -> CellCoordinate {
        CellCoordinate { row, column }
    }

    #[inline]
    pub fn from_row_column_indices(row_index: RowIndex, col_index: ColumnIndex) -> Self {
        let (RowIndex(row), ColumnIndex(col)) = (row_index, col_index);
        CellCoordinate::new(row, col)
    }

    #[inline]
    pub fn from_row_major_index(index: usize, dimensions: &MazeDimensions) -> CellCoordinate {
        let width = dimensions.columns().0;
        CellCoordinate::new(index / width, index % width)
    }

    /// The coordinate one step away in `dir`.
    ///
    /// Returns None only when the step would go below row or column zero. Steps beyond the far
    /// edges are representable; whether they are on the grid is up to `MazeDimensions`.
    pub fn offset(self, dir: CompassPrimary) -> Option<CellCoordinate> {
        let (row, column) = (self.row, self.column);
        match dir {
            CompassPrimary::North => {
                if row > 0 {
                    Some(CellCoordinate::new(row - 1, column))
                } else {
                    None
                }
            }
            CompassPrimary::East => Some(CellCoordinate::new(row, column + 1)),
            CompassPrimary::South => Some(CellCoordinate::new(row + 1, column)),
            CompassPrimary::West => {
                if column > 0 {
                    Some(CellCoordinate::new(row, column - 1))
                } else {
                    None
                }
            }
        }
    }
}

impl From<(usize, usize)> for CellCoordinate {
    fn from(row_column_pair: (usize, usize)) -> CellCoordinate {
        CellCoordinate::new(row_column_pair.0, row_column_pair.1)
    }
}

impl fmt::Display for CellCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

/// Directions between orthogonally adjacent cells: up, right, down and left.
#[derive(Eq, PartialEq, Hash, Copy, Clone, Debug)]
pub enum CompassPrimary {
    North,
    East,
    South,
    West,
}

/// The candidate order before any shuffling: up, right, down, left.
pub const ALL_DIRECTIONS: [CompassPrimary; 4] = [CompassPrimary::North,
                                                 CompassPrimary::East,
                                                 CompassPrimary::South,
                                                 CompassPrimary::West];

impl CompassPrimary {
    pub fn opposite(self) -> CompassPrimary {
        match self {
            CompassPrimary::North => CompassPrimary::South,
            CompassPrimary::East => CompassPrimary::West,
            CompassPrimary::South => CompassPrimary::North,
            CompassPrimary::West => CompassPrimary::East,
        }
    }

    /// Up/down moves cross horizontal edges, left/right moves cross vertical edges.
    #[inline]
    pub fn is_vertical_move(self) -> bool {
        match self {
            CompassPrimary::North | CompassPrimary::South => true,
            CompassPrimary::East | CompassPrimary::West => false,
        }
    }
}
