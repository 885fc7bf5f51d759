use std::fmt;

use crate::cells::CellCoordinate;
use crate::grid_dimensions::MazeDimensions;
use crate::units::{ColumnIndex, RowIndex};

/// Row-major iteration over every cell coordinate of a grid.
#[derive(Clone)]
pub struct CellIter {
    dimensions: MazeDimensions,
    current_cell_number: usize,
    cells_count: usize,
}

impl CellIter {
    pub fn new(dimensions: MazeDimensions) -> CellIter {
        CellIter {
            dimensions,
            current_cell_number: 0,
            cells_count: dimensions.size().0,
        }
    }
}

impl fmt::Debug for CellIter {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f,
               "CellIter :: current_cell_number: {:?}, cells_count: {:?}",
               self.current_cell_number,
               self.cells_count)
    }
}

impl ExactSizeIterator for CellIter {} // default impl using size_hint()
impl Iterator for CellIter {
    type Item = CellCoordinate;
    fn next(&mut self) -> Option<Self::Item> {
        if self.current_cell_number < self.cells_count {
            let coord = CellCoordinate::from_row_major_index(self.current_cell_number,
                                                             &self.dimensions);
            self.current_cell_number += 1;
            Some(coord)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.cells_count - self.current_cell_number;
        (remaining, Some(remaining))
    }
}

/// Iteration over the grid one whole row at a time, top row first.
#[derive(Debug, Clone)]
pub struct RowIter {
    dimensions: MazeDimensions,
    current_row: usize,
}

impl RowIter {
    pub fn new(dimensions: MazeDimensions) -> RowIter {
        RowIter {
            dimensions,
            current_row: 0,
        }
    }
}

impl ExactSizeIterator for RowIter {}
impl Iterator for RowIter {
    type Item = Vec<CellCoordinate>;
    fn next(&mut self) -> Option<Self::Item> {
        if self.current_row < self.dimensions.rows().0 {
            let row = self.current_row;
            let coords = (0..self.dimensions.columns().0)
                .map(|col| CellCoordinate::from_row_column_indices(RowIndex(row), ColumnIndex(col)))
                .collect();
            self.current_row += 1;
            Some(coords)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.dimensions.rows().0 - self.current_row;
        (remaining, Some(remaining))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_iter() {
        let dims = MazeDimensions::from_sizes(2, 2).unwrap();
        assert_eq!(CellIter::new(dims).collect::<Vec<_>>(),
                   &[CellCoordinate::new(0, 0),
                     CellCoordinate::new(0, 1),
                     CellCoordinate::new(1, 0),
                     CellCoordinate::new(1, 1)]);
    }

    #[test]
    fn cell_iter_len() {
        let dims = MazeDimensions::from_sizes(3, 5).unwrap();
        let mut iter = CellIter::new(dims);
        assert_eq!(iter.len(), 15);
        let _ = iter.next();
        assert_eq!(iter.len(), 14);
    }

    #[test]
    fn row_iter() {
        let dims = MazeDimensions::from_sizes(2, 3).unwrap();
        let rows = RowIter::new(dims).collect::<Vec<_>>();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1],
                   vec![CellCoordinate::new(1, 0),
                        CellCoordinate::new(1, 1),
                        CellCoordinate::new(1, 2)]);
    }
}
