//! **maze-walls** generates perfect rectangular mazes and turns them into wall placements.
//!
//! A maze is two tables of open/closed flags, one for the edges between horizontally adjacent
//! cells and one for the edges between vertically adjacent cells. `generators` carves a spanning
//! tree into a fully walled grid, `layout` turns the remaining closed edges into positioned
//! rectangles for whatever draws or simulates the maze.

pub mod cells;
pub mod edge_tables;
pub mod generators;
pub mod grid_dimensions;
pub mod grid_displays;
pub mod grid_iterators;
pub mod layout;
pub mod maze;
pub mod pathing;
pub mod random;
pub mod units;
mod utils;
