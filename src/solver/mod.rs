use grid_util::point::Point;
use itertools::Itertools;
use log::{debug, info, trace};

use crate::config::SearchConfig;
use crate::error::Result;
use crate::search_grid::{DiagonalRule, GridSize, SearchGrid};
use crate::{waypoints_to_path, Cost};

pub mod astar;
pub mod lazy_theta;

/// Sums `heuristic` over consecutive cells of `path`, i.e. the cost of following it when the
/// heuristic doubles as the edge cost.
pub fn path_cost<C, FH>(path: &[Point], mut heuristic: FH) -> C
where
    C: Cost,
    FH: FnMut(&Point, &Point) -> C,
{
    path.iter()
        .tuple_windows()
        .fold(C::zero(), |total, (a, b)| total + heuristic(a, b))
}

/// The contract shared by the searchers. `is_obstacle` is evaluated once per cell when the query
/// starts; `heuristic` estimates the remaining cost to the goal and also prices every edge.
pub trait GridSearch {
    /// Runs one query, returning the path from `from` to `to` together with the cost the search
    /// accepted for the goal, or [None] if the goal cannot be reached.
    fn search<C, FO, FH>(
        &self,
        from: Point,
        to: Point,
        size: GridSize,
        is_obstacle: FO,
        heuristic: FH,
    ) -> Result<Option<(Vec<Point>, C)>>
    where
        C: Cost,
        FO: FnMut(&Point) -> bool,
        FH: FnMut(&Point, &Point) -> C;

    /// Computes the path from `from` to `to`. An empty path means the goal is unreachable; a query
    /// with `from == to` yields the single cell `[from]`.
    fn find_path<C, FO, FH>(
        &self,
        from: Point,
        to: Point,
        size: GridSize,
        is_obstacle: FO,
        heuristic: FH,
    ) -> Result<Vec<Point>>
    where
        C: Cost,
        FO: FnMut(&Point) -> bool,
        FH: FnMut(&Point, &Point) -> C,
    {
        Ok(self
            .search(from, to, size, is_obstacle, heuristic)?
            .map(|(path, _)| path)
            .unwrap_or_default())
    }

    /// Like [find_path](Self::find_path), but with the result expanded by [waypoints_to_path] into
    /// single steps between 8-neighbours.
    fn find_expanded_path<C, FO, FH>(
        &self,
        from: Point,
        to: Point,
        size: GridSize,
        is_obstacle: FO,
        heuristic: FH,
    ) -> Result<Vec<Point>>
    where
        C: Cost,
        FO: FnMut(&Point) -> bool,
        FH: FnMut(&Point, &Point) -> C,
    {
        self.find_path(from, to, size, is_obstacle, heuristic)
            .map(waypoints_to_path)
    }
}

/// Builds the node arena for a query and, if configured, runs the reachability pre-check.
/// Returns [None] when the pre-check proves the goal unreachable.
pub(crate) fn prepare<C, FO, FH>(
    config: &SearchConfig,
    rule: DiagonalRule,
    from: Point,
    to: Point,
    size: GridSize,
    is_obstacle: FO,
    heuristic: &mut FH,
) -> Result<Option<SearchGrid<C>>>
where
    C: Cost,
    FO: FnMut(&Point) -> bool,
    FH: FnMut(&Point, &Point) -> C,
{
    let grid = SearchGrid::new(size, from, to, is_obstacle, heuristic)?;
    debug!(
        "Searching {}x{} grid from ({}, {}) to ({}, {})",
        size.width, size.height, from.x, from.y, to.x, to.y
    );
    if config.reachability_precheck && grid.unreachable(rule) {
        info!(
            "({}, {}) and ({}, {}) are not in the same component",
            from.x, from.y, to.x, to.y
        );
        return Ok(None);
    }
    Ok(Some(grid))
}

/// Turns the state of a finished search into its result.
pub(crate) fn finish<C: Cost>(
    grid: &SearchGrid<C>,
    found: bool,
    expansions: usize,
) -> Option<(Vec<Point>, C)> {
    let goal = grid.goal();
    let result = if found {
        grid.reconstruct(goal).map(|path| (path, grid.node(goal).g))
    } else {
        None
    };
    match &result {
        Some((path, cost)) => debug!(
            "Path of {} cells with cost {:?} found after {} expansions",
            path.len(),
            cost,
            expansions
        ),
        None => {
            debug!("Goal unreachable, {} expansions", expansions);
            trace!("{}", grid);
        }
    }
    result
}
