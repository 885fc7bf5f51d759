use bit_set::BitSet;
use log::{debug, trace};
use smallvec::SmallVec;

use crate::cells::{ALL_DIRECTIONS, CellCoordinate, CompassPrimary};
use crate::edge_tables::EdgeTable;
use crate::grid_dimensions::{DimensionsError, MazeDimensions};
use crate::maze::Maze;
use crate::random::{self, RandomSource};
use crate::units::{ColumnsCount, RowsCount};

/// Generate a perfect maze on a `rows x columns` grid with the recursive backtracker.
///
/// Fails only if either dimension is zero (or the cell count overflows).
pub fn generate<S>(rows: RowsCount,
                   columns: ColumnsCount,
                   rng: &mut S)
                   -> Result<Maze, DimensionsError>
    where S: RandomSource + ?Sized
{
    let dimensions = MazeDimensions::new(rows, columns)?;
    Ok(recursive_backtracker(&dimensions, rng))
}

/// Apply the recursive backtracker (randomised depth first search) maze generation algorithm.
///
/// Starting from a random cell, visit cells depth first. On arriving at a cell its four
/// neighbour candidates (up, right, down, left) are shuffled; each candidate in turn is skipped if
/// it is off the grid or already visited, otherwise the edge to it is opened and it is visited
/// before moving on to the next candidate. A cell with no candidates left backtracks.
///
/// Every carved passage leads to a cell that was unvisited, so the passages form a spanning tree:
/// exactly `size - 1` of them, with a unique path between any two cells.
///
/// The traversal keeps an explicit stack of frames instead of recursing so it is bounded by the
/// heap rather than the call stack. The random draws are made in the same order as the recursive
/// formulation: the start row, the start column, then three shuffle draws each time a cell is
/// first entered.
pub fn recursive_backtracker<S>(dimensions: &MazeDimensions, rng: &mut S) -> Maze
    where S: RandomSource + ?Sized
{
    let mut state = GenerationState::new(*dimensions);

    let start_row = rng.uniform_below(dimensions.rows().0);
    let start_column = rng.uniform_below(dimensions.columns().0);
    let start = CellCoordinate::new(start_row, start_column);

    let mut stack: Vec<Frame> = Vec::with_capacity(dimensions.size().0);
    stack.push(state.enter(start, rng));
    let mut max_depth = 1;

    while let Some(frame) = stack.last_mut() {
        let current = frame.cell;
        match frame.next_direction() {
            Some(direction) => {
                if let Some(next) = state.unvisited_neighbour(current, direction) {
                    state.carve(current, direction);
                    trace!("Carved {:?} from {} to {}", direction, current, next);
                    stack.push(state.enter(next, rng));
                    max_depth = max_depth.max(stack.len());
                }
            }
            None => {
                let _ = stack.pop();
            }
        }
    }

    debug!("Recursive backtracker carved {} passages over {}x{} cells from start {}, max depth {}",
           state.carved,
           dimensions.rows().0,
           dimensions.columns().0,
           start,
           max_depth);

    state.into_maze()
}

/// A cell on the traversal stack with its shuffled candidate moves.
#[derive(Debug)]
struct Frame {
    cell: CellCoordinate,
    directions: SmallVec<[CompassPrimary; 4]>,
    next: usize,
}

impl Frame {
    fn next_direction(&mut self) -> Option<CompassPrimary> {
        let direction = self.directions.get(self.next).cloned();
        self.next += 1;
        direction
    }
}

/// Mutable state of a single generation run. Never outlives the call that created it.
struct GenerationState {
    dimensions: MazeDimensions,
    visited: BitSet,
    vertical_edges: EdgeTable,
    horizontal_edges: EdgeTable,
    carved: usize,
}

impl GenerationState {
    fn new(dimensions: MazeDimensions) -> GenerationState {
        let (v_rows, v_cols) = dimensions.vertical_edges_shape();
        let (h_rows, h_cols) = dimensions.horizontal_edges_shape();
        GenerationState {
            dimensions,
            visited: BitSet::with_capacity(dimensions.size().0),
            vertical_edges: EdgeTable::new(v_rows, v_cols),
            horizontal_edges: EdgeTable::new(h_rows, h_cols),
            carved: 0,
        }
    }

    /// Mark a cell visited and shuffle its candidate moves.
    fn enter<S>(&mut self, cell: CellCoordinate, rng: &mut S) -> Frame
        where S: RandomSource + ?Sized
    {
        if let Some(index) = self.dimensions.coordinate_to_index(cell) {
            let _ = self.visited.insert(index);
        }
        let mut directions: SmallVec<[CompassPrimary; 4]> = ALL_DIRECTIONS.iter().cloned().collect();
        random::shuffle(&mut directions, rng);
        Frame {
            cell,
            directions,
            next: 0,
        }
    }

    fn is_visited(&self, cell: CellCoordinate) -> bool {
        self.dimensions
            .coordinate_to_index(cell)
            .map_or(false, |index| self.visited.contains(index))
    }

    fn unvisited_neighbour(&self,
                           cell: CellCoordinate,
                           direction: CompassPrimary)
                           -> Option<CellCoordinate> {
        cell.offset(direction)
            .filter(|next| self.dimensions.is_valid_coordinate(*next) && !self.is_visited(*next))
    }

    fn carve(&mut self, from: CellCoordinate, direction: CompassPrimary) {
        let (row, column) = (from.row, from.column);
        let opened = match direction {
            CompassPrimary::North => self.horizontal_edges.open(row - 1, column),
            CompassPrimary::South => self.horizontal_edges.open(row, column),
            CompassPrimary::East => self.vertical_edges.open(row, column),
            CompassPrimary::West => self.vertical_edges.open(row, column - 1),
        };
        debug_assert!(opened, "edge carved twice");
        self.carved += 1;
    }

    fn into_maze(self) -> Maze {
        debug_assert_eq!(self.visited.len(), self.dimensions.size().0);
        Maze::from_tables(self.dimensions, self.vertical_edges, self.horizontal_edges)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use quickcheck::{quickcheck, TestResult};

    use super::*;
    use crate::random::{seeded_rng, ScriptedRandom};

    fn gen_sized(rows: usize, columns: usize, rng: &mut dyn RandomSource) -> Maze {
        generate(RowsCount(rows), ColumnsCount(columns), rng).expect("valid dimensions")
    }

    // Cells reachable from (0, 0) moving only through open edges.
    fn reachable_count(maze: &Maze) -> usize {
        let mut seen = vec![false; maze.size()];
        let mut queue = VecDeque::new();
        seen[0] = true;
        queue.push_back(CellCoordinate::new(0, 0));
        let mut count = 0;
        while let Some(c) = queue.pop_front() {
            count += 1;
            for link in maze.links(c).expect("valid coordinate").iter() {
                let i = maze.dimensions().coordinate_to_index(*link).expect("valid link");
                if !seen[i] {
                    seen[i] = true;
                    queue.push_back(*link);
                }
            }
        }
        count
    }

    // Straightforward recursive formulation, only used to check the stack based traversal.
    fn recursive_reference(rows: usize, columns: usize, rng: &mut dyn RandomSource) -> Maze {
        fn visit(state: &mut GenerationState, cell: CellCoordinate, rng: &mut dyn RandomSource) {
            if state.is_visited(cell) {
                return;
            }
            let frame = state.enter(cell, rng);
            for direction in frame.directions.iter() {
                if let Some(next) = state.unvisited_neighbour(cell, *direction) {
                    state.carve(cell, *direction);
                    visit(state, next, rng);
                }
            }
        }
        let dims = MazeDimensions::from_sizes(rows, columns).unwrap();
        let mut state = GenerationState::new(dims);
        let start = CellCoordinate::new(rng.uniform_below(rows), rng.uniform_below(columns));
        visit(&mut state, start, rng);
        state.into_maze()
    }

    #[test]
    fn zero_sized_grids_are_rejected() {
        let mut rng = ScriptedRandom::zeros();
        assert_eq!(generate(RowsCount(0), ColumnsCount(3), &mut rng),
                   Err(DimensionsError::NoRows));
        assert_eq!(generate(RowsCount(3), ColumnsCount(0), &mut rng),
                   Err(DimensionsError::NoColumns));
        assert_eq!(rng.draws(), 0);
    }

    #[test]
    fn single_cell_maze() {
        let mut rng = ScriptedRandom::zeros();
        let m = gen_sized(1, 1, &mut rng);
        assert_eq!(m.open_edges_count(), 0);
        assert_eq!(m.closed_edges_count(), 0);
        assert!(m.vertical_edges().is_empty());
        assert!(m.horizontal_edges().is_empty());
        assert!(m.is_perfect());
        // start row, start column, one shuffle
        assert_eq!(rng.draws(), 5);
    }

    #[test]
    fn two_by_two_with_lowest_draws() {
        // Every shuffle of [up, right, down, left] with zero draws gives [right, down, left, up].
        // Starting at (0, 0): right to (0, 1), down to (1, 1), left to (1, 0).
        let m = gen_sized(2, 2, &mut ScriptedRandom::zeros());
        assert_eq!(m.vertical_edges().to_rows(), vec![vec![true], vec![true]]);
        assert_eq!(m.horizontal_edges().to_rows(), vec![vec![false, true]]);
    }

    #[test]
    fn pinned_three_by_four() {
        let mut rng = ScriptedRandom::new(vec![1, 2, 0, 3, 1, 2, 0, 1, 1]).unwrap();
        let m = gen_sized(3, 4, &mut rng);

        assert_eq!(m.vertical_edges().to_rows(),
                   vec![vec![true, true, true], vec![true, false, false], vec![false, true, false]]);
        assert_eq!(m.horizontal_edges().to_rows(),
                   vec![vec![true, false, false, true], vec![true, true, true, true]]);
        assert_eq!(m.open_edges_count(), 11);
        assert_eq!(reachable_count(&m), 12);
        // 2 start draws + 12 cells * 3 shuffle draws
        assert_eq!(rng.draws(), 38);
    }

    #[test]
    fn single_row_is_a_straight_passage() {
        fn p(columns: u8, seed: u64) -> bool {
            let columns = columns as usize % 64 + 1;
            let m = gen_sized(1, columns, &mut seeded_rng(seed));
            m.horizontal_edges().rows() == 0 &&
            m.vertical_edges().open_count() == columns - 1 &&
            m.vertical_edges().closed_count() == 0
        }
        quickcheck(p as fn(u8, u64) -> bool)
    }

    #[test]
    fn single_column_is_a_straight_passage() {
        let m = gen_sized(17, 1, &mut seeded_rng(3));
        assert_eq!(m.vertical_edges().columns(), 0);
        assert_eq!(m.horizontal_edges().open_count(), 16);
        assert_eq!(m.horizontal_edges().closed_count(), 0);
    }

    #[test]
    fn generated_mazes_are_spanning_trees() {
        fn p(rows: u8, columns: u8, seed: u64) -> TestResult {
            let (rows, columns) = (rows as usize % 24 + 1, columns as usize % 24 + 1);
            let m = gen_sized(rows, columns, &mut seeded_rng(seed));
            TestResult::from_bool(m.open_edges_count() == rows * columns - 1 &&
                                  reachable_count(&m) == rows * columns &&
                                  m.is_perfect())
        }
        quickcheck(p as fn(u8, u8, u64) -> TestResult)
    }

    #[test]
    fn scripted_mazes_are_spanning_trees() {
        fn p(rows: u8, columns: u8, script: Vec<usize>) -> TestResult {
            let rng = ScriptedRandom::new(script);
            if rng.is_none() {
                return TestResult::discard();
            }
            let (rows, columns) = (rows as usize % 12 + 1, columns as usize % 12 + 1);
            let m = gen_sized(rows, columns, &mut rng.unwrap());
            TestResult::from_bool(m.open_edges_count() == rows * columns - 1 &&
                                  reachable_count(&m) == rows * columns)
        }
        quickcheck(p as fn(u8, u8, Vec<usize>) -> TestResult)
    }

    #[test]
    fn same_seed_same_maze() {
        fn p(rows: u8, columns: u8, seed: u64) -> bool {
            let (rows, columns) = (rows as usize % 20 + 1, columns as usize % 20 + 1);
            let a = gen_sized(rows, columns, &mut seeded_rng(seed));
            let b = gen_sized(rows, columns, &mut seeded_rng(seed));
            a == b && a.vertical_edges().to_rows() == b.vertical_edges().to_rows() &&
            a.horizontal_edges().to_rows() == b.horizontal_edges().to_rows()
        }
        quickcheck(p as fn(u8, u8, u64) -> bool)
    }

    #[test]
    fn matches_recursive_formulation() {
        fn p(rows: u8, columns: u8, seed: u64) -> bool {
            let (rows, columns) = (rows as usize % 16 + 1, columns as usize % 16 + 1);
            let iterative = gen_sized(rows, columns, &mut seeded_rng(seed));
            let recursive = recursive_reference(rows, columns, &mut seeded_rng(seed));
            iterative == recursive
        }
        quickcheck(p as fn(u8, u8, u64) -> bool)
    }

    #[test]
    fn large_grid_does_not_exhaust_the_stack() {
        // A snake shaped traversal can be rows * columns deep.
        let m = gen_sized(300, 300, &mut seeded_rng(7));
        assert_eq!(m.open_edges_count(), 300 * 300 - 1);
        assert_eq!(reachable_count(&m), 300 * 300);
    }

    #[test]
    fn generating_on_prebuilt_dimensions() {
        let dims = MazeDimensions::from_sizes(5, 8).unwrap();
        let m = recursive_backtracker(&dims, &mut seeded_rng(11));
        assert_eq!(m.dimensions(), &dims);
        assert!(m.is_perfect());
    }
}
