use itertools::Itertools;
use smallvec::SmallVec;

use crate::cells::{CellCoordinate, CoordinateSmallVec};
use crate::maze::Maze;
use crate::utils;
use crate::utils::FnvHashMap;

/// Step counts from a start cell to every cell reachable from it through open edges.
#[derive(Debug, Clone)]
pub struct Distances {
    start_coordinate: CellCoordinate,
    distances: FnvHashMap<CellCoordinate, u32>,
    max_distance: u32,
}

impl Distances {
    /// Flood fill outwards from `start_coordinate`. None if the start is off the grid.
    pub fn new(maze: &Maze, start_coordinate: CellCoordinate) -> Option<Distances> {

        if !maze.is_valid_coordinate(start_coordinate) {
            return None;
        }

        let mut max = 0;
        let mut distances = utils::fnv_hashmap(maze.size());
        distances.insert(start_coordinate, 0);

        // Every step is just one from the previous cell, so the first distance recorded for a
        // cell is already its shortest; the map doubles as the visited set.
        let mut frontier = vec![start_coordinate];
        while !frontier.is_empty() {

            let mut new_frontier = vec![];
            for cell_coord in &frontier {

                let distance_to_cell = distances[cell_coord];
                if distance_to_cell > max {
                    max = distance_to_cell;
                }

                // Frontier cells come from links, so they are always on the grid.
                let links: CoordinateSmallVec = maze.links(*cell_coord).unwrap_or_default();
                for link_coordinate in &*links {
                    if !distances.contains_key(link_coordinate) {
                        distances.insert(*link_coordinate, distance_to_cell + 1);
                        new_frontier.push(*link_coordinate);
                    }
                }
            }
            frontier = new_frontier;
        }

        Some(Distances {
            start_coordinate,
            distances,
            max_distance: max,
        })
    }

    #[inline(always)]
    pub fn start(&self) -> CellCoordinate {
        self.start_coordinate
    }

    #[inline(always)]
    pub fn max(&self) -> u32 {
        self.max_distance
    }

    #[inline(always)]
    pub fn distance_from_start_to(&self, coord: CellCoordinate) -> Option<u32> {
        self.distances.get(&coord).cloned()
    }

    /// Count of cells reachable from the start, the start included.
    #[inline]
    pub fn reachable_count(&self) -> usize {
        self.distances.len()
    }

    /// Cells at the maximum distance from the start, in row-major order.
    pub fn furthest_points_on_grid(&self) -> SmallVec<[CellCoordinate; 8]> {
        let furthest_distance = self.max();
        self.distances
            .iter()
            .filter(|&(_, distance)| *distance == furthest_distance)
            .map(|(coord, _)| *coord)
            .sorted()
            .collect()
    }
}

/// Walk back from `end_point` to the start of `distances_from_start`, always stepping to a linked
/// neighbour one closer to the start. The path runs start to end, both included.
pub fn shortest_path(maze: &Maze,
                     distances_from_start: &Distances,
                     end_point: CellCoordinate)
                     -> Option<Vec<CellCoordinate>> {

    // The end point is not reachable from start (or is off the grid).
    let mut current_distance = distances_from_start.distance_from_start_to(end_point)?;

    let mut path = vec![end_point];
    let start = distances_from_start.start();
    let mut current_coord = end_point;

    while current_coord != start {
        let links = maze.links(current_coord)?;
        let closest_to_start = links.iter()
            .filter_map(|coord| {
                distances_from_start.distance_from_start_to(*coord).map(|d| (*coord, d))
            })
            .min_by_key(|&(_, d)| d);

        match closest_to_start {
            Some((closer_coord, closer_distance)) if closer_distance < current_distance => {
                current_coord = closer_coord;
                current_distance = closer_distance;
                path.push(current_coord);
            }
            // Not getting any closer, the distances do not belong to this maze.
            _ => return None,
        }
    }

    path.reverse();
    Some(path)
}

/// The longest path in a perfect maze: the furthest cell from an arbitrary cell is one end of it.
pub fn longest_path(maze: &Maze) -> Vec<CellCoordinate> {
    let origin = CellCoordinate::new(0, 0);
    let first_distances = match Distances::new(maze, origin) {
        Some(d) => d,
        None => return vec![],
    };

    let long_path_start = first_distances.furthest_points_on_grid()[0];
    match Distances::new(maze, long_path_start) {
        Some(distances_from_start) => {
            let end_point = distances_from_start.furthest_points_on_grid()[0];
            shortest_path(maze, &distances_from_start, end_point).unwrap_or_else(Vec::new)
        }
        None => vec![],
    }
}

/// The route between the gameplay start, the top left cell, and the goal, the bottom right cell.
pub fn solution_path(maze: &Maze) -> Option<Vec<CellCoordinate>> {
    let start = CellCoordinate::new(0, 0);
    let goal = CellCoordinate::new(maze.rows().0 - 1, maze.columns().0 - 1);
    let distances = Distances::new(maze, start)?;
    shortest_path(maze, &distances, goal)
}
