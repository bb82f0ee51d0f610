use grid_util::point::Point;
use log::warn;

use crate::config::SearchConfig;
use crate::error::Result;
use crate::frontier::Frontier;
use crate::los::line_of_sight;
use crate::search_grid::{DiagonalRule, GridSize, NodeState, SearchGrid};
use crate::solver::{finish, prepare, GridSearch};
use crate::Cost;

/// [Lazy Theta*](https://arxiv.org/abs/1401.3843): A* in which a newly discovered node is
/// attached to the parent of the node that discovered it, skipping the intermediate cell. Whether
/// that parent is actually visible is only checked once the node is popped, and if it is not the
/// node falls back to its best expanded neighbour.
///
/// The result is a list of waypoints with a clear line of sight between consecutive ones. Use
/// [crate::waypoints_to_path] or [GridSearch::find_expanded_path] to turn it into single steps.
///
/// Diagonal moves need at least one of the two flanking orthogonal cells to be free.
#[derive(Clone, Debug, Default)]
pub struct LazyThetaSearch {
    pub config: SearchConfig,
}

impl LazyThetaSearch {
    pub fn new() -> LazyThetaSearch {
        LazyThetaSearch::default()
    }
    pub fn with_config(config: SearchConfig) -> LazyThetaSearch {
        LazyThetaSearch { config }
    }
}

const RULE: DiagonalRule = DiagonalRule::NoSqueeze;

/// Confirms the line of sight between a popped node and its parent. If it is obstructed, the node
/// is re-attached to whichever closed neighbour gives it the lowest cost.
fn set_vertex<C, FH>(grid: &mut SearchGrid<C>, ix: usize, heuristic: &mut FH)
where
    C: Cost,
    FH: FnMut(&Point, &Point) -> C,
{
    let Some(parent) = grid.node(ix).parent else {
        return;
    };
    let point = grid.point(ix);
    if line_of_sight(grid.point(parent), point, |p| grid.is_blocked(p)) {
        return;
    }
    let node = grid.node_mut(ix);
    node.g = C::max_value();
    node.parent = None;
    for neighbour in grid.neighbours(ix, RULE) {
        let n = grid.node(neighbour);
        if n.state != NodeState::Closed {
            continue;
        }
        let g = n.g + heuristic(&grid.point(neighbour), &point);
        let node = grid.node_mut(ix);
        if g < node.g {
            node.g = g;
            node.parent = Some(neighbour);
        }
    }
}

impl GridSearch for LazyThetaSearch {
    fn search<C, FO, FH>(
        &self,
        from: Point,
        to: Point,
        size: GridSize,
        is_obstacle: FO,
        mut heuristic: FH,
    ) -> Result<Option<(Vec<Point>, C)>>
    where
        C: Cost,
        FO: FnMut(&Point) -> bool,
        FH: FnMut(&Point, &Point) -> C,
    {
        let Some(mut grid) = prepare(
            &self.config,
            RULE,
            from,
            to,
            size,
            is_obstacle,
            &mut heuristic,
        )?
        else {
            return Ok(None);
        };
        let mut budget = self.config.budget();
        let start = grid.start();
        let goal = grid.goal();

        let mut open = Frontier::new();
        let start_node = grid.node_mut(start);
        start_node.state = NodeState::Open;
        open.push(start, start_node.g, start_node.f());

        let mut found = false;
        while let Some((current, cost)) = open.pop() {
            let node = grid.node(current);
            // Skip entries left behind by a later improvement of the same node.
            if node.state == NodeState::Closed || cost > node.g {
                continue;
            }
            if current != start {
                set_vertex(&mut grid, current, &mut heuristic);
            }
            if current == goal {
                found = true;
                break;
            }
            budget.tick()?;
            grid.node_mut(current).state = NodeState::Closed;

            let basis = if current == start {
                start
            } else {
                match grid.node(current).parent {
                    Some(parent) => parent,
                    None => {
                        warn!(
                            "{:?} has no expanded neighbour to attach to, not expanding it",
                            grid.point(current)
                        );
                        continue;
                    }
                }
            };
            let basis_point = grid.point(basis);
            let basis_g = grid.node(basis).g;
            for neighbour in grid.neighbours(current, RULE) {
                if grid.node(neighbour).state == NodeState::Closed {
                    continue;
                }
                let candidate_g = basis_g + heuristic(&basis_point, &grid.point(neighbour));
                let n = grid.node_mut(neighbour);
                if candidate_g < n.g {
                    n.parent = Some(basis);
                    n.g = candidate_g;
                    n.state = NodeState::Open;
                    open.push(neighbour, n.g, n.f());
                }
            }
        }
        Ok(finish(&grid, found, budget.expansions()))
    }
}
