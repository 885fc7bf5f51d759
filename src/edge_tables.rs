use std::fmt;

use bit_set::BitSet;

/// A fixed shape 2D table of edge states, `true` meaning the edge is open (passable).
///
/// Every entry starts closed. The shape never changes after construction so there is no way
/// to open an edge that refers to a cell outside the grid.
#[derive(Clone)]
pub struct EdgeTable {
    rows: usize,
    columns: usize,
    open: BitSet,
}

impl EdgeTable {
    pub fn new(rows: usize, columns: usize) -> EdgeTable {
        EdgeTable {
            rows,
            columns,
            open: BitSet::with_capacity(rows * columns),
        }
    }

    /// Build a `rows` x `columns` table from nested rows of open flags.
    /// Returns None if the flags do not have exactly that shape.
    pub(crate) fn from_rows(rows: usize, columns: usize, flags: &[Vec<bool>]) -> Option<EdgeTable> {
        if flags.len() != rows || flags.iter().any(|r| r.len() != columns) {
            return None;
        }
        let mut table = EdgeTable::new(rows, columns);
        for (row, row_flags) in flags.iter().enumerate() {
            for (column, is_open) in row_flags.iter().enumerate() {
                if *is_open {
                    table.open(row, column);
                }
            }
        }
        Some(table)
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn columns(&self) -> usize {
        self.columns
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.rows * self.columns
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Is the edge at (row, column) open? None if the entry is outside the table.
    #[inline]
    pub fn get(&self, row: usize, column: usize) -> Option<bool> {
        self.index(row, column).map(|i| self.open.contains(i))
    }

    /// Is the edge at (row, column) open? Entries outside the table count as closed.
    #[inline]
    pub fn is_open(&self, row: usize, column: usize) -> bool {
        self.get(row, column).unwrap_or(false)
    }

    /// Open the edge at (row, column). Returns false if it was already open or is outside the table.
    pub(crate) fn open(&mut self, row: usize, column: usize) -> bool {
        match self.index(row, column) {
            Some(i) => self.open.insert(i),
            None => false,
        }
    }

    #[inline]
    pub fn open_count(&self) -> usize {
        self.open.len()
    }

    #[inline]
    pub fn closed_count(&self) -> usize {
        self.len() - self.open_count()
    }

    /// (row, column) of each open entry in row-major order.
    pub fn iter_open(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let columns = self.columns;
        self.open.iter().map(move |i| (i / columns, i % columns))
    }

    /// (row, column) of each closed entry in row-major order.
    pub fn iter_closed(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.len())
            .filter(move |i| !self.open.contains(*i))
            .map(move |i| (i / self.columns, i % self.columns))
    }

    pub fn to_rows(&self) -> Vec<Vec<bool>> {
        (0..self.rows)
            .map(|row| (0..self.columns).map(|column| self.is_open(row, column)).collect())
            .collect()
    }

    #[inline]
    fn index(&self, row: usize, column: usize) -> Option<usize> {
        if row < self.rows && column < self.columns {
            Some(row * self.columns + column)
        } else {
            None
        }
    }
}

impl PartialEq for EdgeTable {
    fn eq(&self, other: &EdgeTable) -> bool {
        self.rows == other.rows && self.columns == other.columns &&
        self.open.iter().eq(other.open.iter())
    }
}
impl Eq for EdgeTable {}

impl fmt::Debug for EdgeTable {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f,
               "EdgeTable :: rows: {:?}, columns: {:?}, open: {:?}",
               self.rows,
               self.columns,
               self.to_rows())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_all_closed() {
        let t = EdgeTable::new(2, 3);
        assert_eq!(t.len(), 6);
        assert_eq!(t.open_count(), 0);
        assert_eq!(t.closed_count(), 6);
        assert_eq!(t.to_rows(), vec![vec![false; 3]; 2]);
    }

    #[test]
    fn opening_edges() {
        let mut t = EdgeTable::new(2, 3);
        assert!(t.open(1, 2));
        assert!(!t.open(1, 2));
        assert_eq!(t.get(1, 2), Some(true));
        assert_eq!(t.get(0, 0), Some(false));
        assert_eq!(t.open_count(), 1);
        assert_eq!(t.iter_open().collect::<Vec<_>>(), vec![(1, 2)]);
        assert_eq!(t.iter_closed().count(), 5);
    }

    #[test]
    fn out_of_table_entries() {
        let mut t = EdgeTable::new(2, 3);
        assert!(!t.open(2, 0));
        assert!(!t.open(0, 3));
        assert_eq!(t.get(2, 0), None);
        assert!(!t.is_open(0, 3));
        assert_eq!(t.open_count(), 0);
    }

    #[test]
    fn empty_table() {
        let t = EdgeTable::new(0, 4);
        assert!(t.is_empty());
        assert_eq!(t.iter_closed().count(), 0);
        assert_eq!(t.to_rows(), Vec::<Vec<bool>>::new());
    }

    #[test]
    fn from_rows_round_trip() {
        let rows = vec![vec![true, false], vec![false, true]];
        let t = EdgeTable::from_rows(2, 2, &rows).unwrap();
        assert_eq!(t.to_rows(), rows);
        assert!(EdgeTable::from_rows(2, 2, &[vec![true], vec![true, false]]).is_none());
        assert!(EdgeTable::from_rows(3, 2, &rows).is_none());
        assert_eq!(EdgeTable::from_rows(0, 4, &[]).map(|t| t.columns()), Some(4));
    }
}
