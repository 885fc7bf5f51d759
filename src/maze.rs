use std::fmt;

use petgraph::algo;
use petgraph::graph::{NodeIndex, UnGraph};

use crate::cells::{ALL_DIRECTIONS, CellCoordinate, CompassPrimary, CoordinateOptionSmallVec,
                   CoordinateSmallVec};
use crate::edge_tables::EdgeTable;
use crate::grid_dimensions::MazeDimensions;
use crate::grid_iterators::{CellIter, RowIter};
use crate::units::{ColumnsCount, NodesCount, RowsCount};

/// A generated maze: which edges between adjacent cells are open.
///
/// `vertical_edges` is `rows x (columns - 1)`, entry (r, c) being the edge between cell (r, c)
/// and cell (r, c + 1). `horizontal_edges` is `(rows - 1) x columns`, entry (r, c) being the edge
/// between cell (r, c) and cell (r + 1, c).
///
/// There are no public mutators, a `Maze` is only handed out once it is fully built.
#[derive(Clone, PartialEq, Eq)]
pub struct Maze {
    dimensions: MazeDimensions,
    vertical_edges: EdgeTable,
    horizontal_edges: EdgeTable,
}

impl fmt::Debug for Maze {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f,
               "Maze :: rows: {:?}, columns: {:?}, vertical: {:?}, horizontal: {:?}",
               self.rows().0,
               self.columns().0,
               self.vertical_edges.to_rows(),
               self.horizontal_edges.to_rows())
    }
}

impl Maze {
    pub(crate) fn from_tables(dimensions: MazeDimensions,
                              vertical_edges: EdgeTable,
                              horizontal_edges: EdgeTable)
                              -> Maze {
        debug_assert_eq!((vertical_edges.rows(), vertical_edges.columns()),
                         dimensions.vertical_edges_shape());
        debug_assert_eq!((horizontal_edges.rows(), horizontal_edges.columns()),
                         dimensions.horizontal_edges_shape());
        Maze {
            dimensions,
            vertical_edges,
            horizontal_edges,
        }
    }

    /// Build a maze from explicit open flags, e.g. a hand drawn fixture.
    /// Returns None if either table does not have the shape the dimensions require.
    pub(crate) fn from_open_flags(dimensions: MazeDimensions,
                                  vertical: &[Vec<bool>],
                                  horizontal: &[Vec<bool>])
                                  -> Option<Maze> {
        let (v_rows, v_cols) = dimensions.vertical_edges_shape();
        let (h_rows, h_cols) = dimensions.horizontal_edges_shape();
        let vertical_edges = EdgeTable::from_rows(v_rows, v_cols, vertical)?;
        let horizontal_edges = EdgeTable::from_rows(h_rows, h_cols, horizontal)?;
        Some(Maze::from_tables(dimensions, vertical_edges, horizontal_edges))
    }

    #[inline]
    pub fn dimensions(&self) -> &MazeDimensions {
        &self.dimensions
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.dimensions.size().0
    }

    #[inline]
    pub fn rows(&self) -> RowsCount {
        self.dimensions.rows()
    }

    #[inline]
    pub fn columns(&self) -> ColumnsCount {
        self.dimensions.columns()
    }

    #[inline]
    pub fn vertical_edges(&self) -> &EdgeTable {
        &self.vertical_edges
    }

    #[inline]
    pub fn horizontal_edges(&self) -> &EdgeTable {
        &self.horizontal_edges
    }

    #[inline]
    pub fn open_edges_count(&self) -> usize {
        self.vertical_edges.open_count() + self.horizontal_edges.open_count()
    }

    #[inline]
    pub fn closed_edges_count(&self) -> usize {
        self.vertical_edges.closed_count() + self.horizontal_edges.closed_count()
    }

    #[inline]
    pub fn iter(&self) -> CellIter {
        CellIter::new(self.dimensions)
    }

    #[inline]
    pub fn iter_row(&self) -> RowIter {
        RowIter::new(self.dimensions)
    }

    #[inline]
    pub fn is_valid_coordinate(&self, coord: CellCoordinate) -> bool {
        self.dimensions.is_valid_coordinate(coord)
    }

    /// Is there a passage from `coord` to its neighbour in `direction`?
    /// False for coordinates off the grid and for the outer boundary.
    pub fn is_open(&self, coord: CellCoordinate, direction: CompassPrimary) -> bool {
        if !self.is_valid_coordinate(coord) {
            return false;
        }
        let (row, column) = (coord.row, coord.column);
        match direction {
            CompassPrimary::North => row > 0 && self.horizontal_edges.is_open(row - 1, column),
            CompassPrimary::South => self.horizontal_edges.is_open(row, column),
            CompassPrimary::East => self.vertical_edges.is_open(row, column),
            CompassPrimary::West => column > 0 && self.vertical_edges.is_open(row, column - 1),
        }
    }

    /// The on-grid cell adjacent to `coord` in `direction`, linked or not.
    pub fn neighbour_at_direction(&self,
                                  coord: CellCoordinate,
                                  direction: CompassPrimary)
                                  -> Option<CellCoordinate> {
        if !self.is_valid_coordinate(coord) {
            return None;
        }
        coord.offset(direction).filter(|c| self.is_valid_coordinate(*c))
    }

    pub fn neighbours_at_directions(&self,
                                    coord: CellCoordinate,
                                    dirs: &[CompassPrimary])
                                    -> CoordinateOptionSmallVec {
        dirs.iter()
            .map(|direction| self.neighbour_at_direction(coord, *direction))
            .collect()
    }

    /// Cells to the North, East, South or West of a cell, but not necessarily linked by a passage.
    pub fn neighbours(&self, coord: CellCoordinate) -> CoordinateSmallVec {
        ALL_DIRECTIONS.iter()
            .filter_map(|dir| self.neighbour_at_direction(coord, *dir))
            .collect()
    }

    /// Cells that are linked to a particular cell by a passage.
    /// None if the coordinate is off the grid.
    pub fn links(&self, coord: CellCoordinate) -> Option<CoordinateSmallVec> {
        if !self.is_valid_coordinate(coord) {
            return None;
        }
        let linked = ALL_DIRECTIONS.iter()
            .filter(|dir| self.is_open(coord, **dir))
            .filter_map(|dir| coord.offset(*dir))
            .collect();
        Some(linked)
    }

    /// Are two cells linked by an open edge? The order of the arguments does not matter.
    pub fn is_linked(&self, a: CellCoordinate, b: CellCoordinate) -> bool {
        ALL_DIRECTIONS.iter()
            .any(|dir| a.offset(*dir) == Some(b) && self.is_open(a, *dir))
    }

    /// Every open edge as a pair of cells, horizontal edges (row-major) first.
    pub fn iter_links(&self) -> impl Iterator<Item = (CellCoordinate, CellCoordinate)> + '_ {
        let downwards = self.horizontal_edges
            .iter_open()
            .map(|(row, column)| (CellCoordinate::new(row, column), CellCoordinate::new(row + 1, column)));
        let rightwards = self.vertical_edges
            .iter_open()
            .map(|(row, column)| (CellCoordinate::new(row, column), CellCoordinate::new(row, column + 1)));
        downwards.chain(rightwards)
    }

    /// The open edge graph, one node per cell in row-major order weighted by its coordinate.
    pub fn to_graph(&self) -> UnGraph<CellCoordinate, ()> {
        let (NodesCount(nodes), _) = self.dimensions.graph_size();
        let mut graph = UnGraph::with_capacity(nodes, self.open_edges_count());
        for coord in self.iter() {
            let _ = graph.add_node(coord);
        }
        for (a, b) in self.iter_links() {
            if let (Some(ia), Some(ib)) = (self.dimensions.coordinate_to_index(a),
                                           self.dimensions.coordinate_to_index(b)) {
                let _ = graph.add_edge(NodeIndex::new(ia), NodeIndex::new(ib), ());
            }
        }
        graph
    }

    /// A perfect maze is a spanning tree: connected with exactly `size - 1` passages.
    pub fn is_perfect(&self) -> bool {
        let graph = self.to_graph();
        graph.edge_count() == self.dimensions.spanning_tree_edges().0 &&
        algo::connected_components(&graph) == 1
    }
}
