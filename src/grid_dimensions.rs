use std::error::Error;
use std::fmt;

use crate::cells::CellCoordinate;
use crate::units::{ColumnsCount, EdgesCount, NodesCount, RowsCount};

/// Rows and columns of a maze grid. Both are at least 1.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct MazeDimensions {
    rows: RowsCount,
    columns: ColumnsCount,
}

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum DimensionsError {
    NoRows,
    NoColumns,
    TooManyCells,
}

impl fmt::Display for DimensionsError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            DimensionsError::NoRows => write!(f, "a maze needs at least one row"),
            DimensionsError::NoColumns => write!(f, "a maze needs at least one column"),
            DimensionsError::TooManyCells => write!(f, "rows * columns overflows the cell count"),
        }
    }
}

impl Error for DimensionsError {}

impl MazeDimensions {
    pub fn new(rows: RowsCount, columns: ColumnsCount) -> Result<MazeDimensions, DimensionsError> {
        if rows.0 == 0 {
            return Err(DimensionsError::NoRows);
        }
        if columns.0 == 0 {
            return Err(DimensionsError::NoColumns);
        }
        if rows.0.checked_mul(columns.0).is_none() {
            return Err(DimensionsError::TooManyCells);
        }
        Ok(MazeDimensions { rows, columns })
    }

    pub fn from_sizes(rows: usize, columns: usize) -> Result<MazeDimensions, DimensionsError> {
        MazeDimensions::new(RowsCount(rows), ColumnsCount(columns))
    }

    #[inline(always)]
    pub fn size(&self) -> NodesCount {
        NodesCount(self.rows.0 * self.columns.0)
    }

    #[inline(always)]
    pub fn rows(&self) -> RowsCount {
        self.rows
    }

    #[inline(always)]
    pub fn columns(&self) -> ColumnsCount {
        self.columns
    }

    /// Shape (rows, columns) of the table of edges between horizontally adjacent cells.
    #[inline]
    pub fn vertical_edges_shape(&self) -> (usize, usize) {
        (self.rows.0, self.columns.0 - 1)
    }

    /// Shape (rows, columns) of the table of edges between vertically adjacent cells.
    #[inline]
    pub fn horizontal_edges_shape(&self) -> (usize, usize) {
        (self.rows.0 - 1, self.columns.0)
    }

    /// Node count and the count of every edge between adjacent cells, open or closed.
    pub fn graph_size(&self) -> (NodesCount, EdgesCount) {
        let (v_rows, v_cols) = self.vertical_edges_shape();
        let (h_rows, h_cols) = self.horizontal_edges_shape();
        (self.size(), EdgesCount(v_rows * v_cols + h_rows * h_cols))
    }

    /// Edge count of any spanning tree over the grid's cells.
    #[inline]
    pub fn spanning_tree_edges(&self) -> EdgesCount {
        EdgesCount(self.size().0 - 1)
    }

    #[inline]
    pub fn is_valid_coordinate(&self, coord: CellCoordinate) -> bool {
        coord.row < self.rows.0 && coord.column < self.columns.0
    }

    /// Convert a coordinate to a one dimensional row-major index in the range 0..size.
    /// Returns None if the coordinate is off the grid.
    #[inline]
    pub fn coordinate_to_index(&self, coord: CellCoordinate) -> Option<usize> {
        if self.is_valid_coordinate(coord) {
            Some(coord.row * self.columns.0 + coord.column)
        } else {
            None
        }
    }
}
