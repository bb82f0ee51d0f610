//! # tile_pathfinding
//!
//! Pathfinding between two cells of a 2D tile grid with static obstacles. Two searchers share one
//! contract ([GridSearch]):
//!
//! - [AstarSearch], classic [A*](https://en.wikipedia.org/wiki/A*_search_algorithm) over the
//!   8-neighbourhood, returning a path that moves one cell at a time.
//! - [LazyThetaSearch], [Lazy Theta*](https://arxiv.org/abs/1401.3843), which uses
//!   [line of sight](line_of_sight) to shortcut the parent chain and returns far fewer, straighter
//!   segments.
//!
//! The caller supplies the grid size, an obstacle predicate and a heuristic. The heuristic is
//! used both as the estimate of the remaining distance and as the cost of every edge, so it
//! should be exact for neighbouring cells; [heuristic] contains ready-made ones. Every query
//! allocates its own node arena, so searchers can be shared freely between threads.
//!
//! ```
//! use tile_pathfinding::{heuristic::chebyshev, AstarSearch, GridSearch, GridSize, Point};
//!
//! let wall = Point::new(2, 2);
//! let path = AstarSearch::new()
//!     .find_path(
//!         Point::new(0, 0),
//!         Point::new(4, 4),
//!         GridSize::new(5, 5),
//!         |p: &Point| *p == wall,
//!         chebyshev,
//!     )
//!     .unwrap();
//! assert!(!path.is_empty() && !path.contains(&wall));
//! ```
mod config;
mod error;
mod frontier;
pub mod heuristic;
mod los;
mod search_grid;
pub mod solver;

use core::fmt::Debug;
use core::ops::Add;

use num_traits::{Bounded, Zero};

pub use config::SearchConfig;
pub use error::{Result, SearchError};
pub use grid_util::point::Point;
pub use los::{line_cells, line_of_sight, BresenhamLine};
pub use search_grid::{reachable, DiagonalRule, GridSize};
pub use solver::astar::AstarSearch;
pub use solver::lazy_theta::LazyThetaSearch;
pub use solver::{path_cost, GridSearch};

/// Numeric type of G-, H- and F-costs. `max_value()` stands for an infinite cost.
///
/// Costs are compared with `partial_cmp`, so a heuristic must never return NaN.
pub trait Cost: Copy + PartialOrd + Add<Output = Self> + Zero + Bounded + Debug {}

impl<T> Cost for T where T: Copy + PartialOrd + Add<Output = T> + Zero + Bounded + Debug {}

/// Turns waypoints into a path on the grid which can be followed step by step. Consecutive
/// waypoints are joined by the same line [line_of_sight] checks, so expanding a path with clear
/// sight between its waypoints never enters a blocked cell.
pub fn waypoints_to_path(waypoints: Vec<Point>) -> Vec<Point> {
    let mut waypoints = waypoints.into_iter();
    let Some(mut current) = waypoints.next() else {
        return Vec::new();
    };
    let mut path = vec![current];
    for next in waypoints {
        path.extend(line_cells(current, next).into_iter().skip(1));
        current = next;
    }
    path
}
