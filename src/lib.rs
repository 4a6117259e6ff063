//! An exact solver for the orienteering problem on 2d grids: find the
//! shortest route that starts at `S`, visits every checkpoint `@` in any
//! order and ends at `G`, moving one open cell at a time in the four
//! cardinal directions.
//!
//! The problem splits in two. Pairwise distances between the points of
//! interest come from [A* search](https://www.redblobgames.com/pathfinding/a-star/introduction.html#astar),
//! run once per pair over the immutable [Grid]. The visiting order is a
//! small travelling-salesman instance, solved exactly with dynamic
//! programming over checkpoint subsets — exponential in the checkpoint
//! count, which the problem bounds to around 18.
//!
//! # Example
//!
//! ```rust
//! use orienteering::*;
//!
//! let rows = [
//!     "S.##.",
//!     "...@.",
//!     ".@...",
//!     "###.G",
//! ];
//! let grid = Grid::from_rows(&rows, 5, 4).unwrap();
//!
//! // `None` would mean a checkpoint, the start or the goal is walled off.
//! let total = solve(&grid).unwrap();
//! assert_eq!(9, total);
//! ```
pub mod grid;
pub mod matrix;
pub mod min_heap;
pub mod pathfinder;
pub mod route;

pub use grid::{Grid, GridError, PointsOfInterest, Terrain};
pub use matrix::DistanceMatrix;
pub use min_heap::MinHeap;
pub use pathfinder::{shortest_distance, Pathfinder};
pub use route::{solve, solve_route};
