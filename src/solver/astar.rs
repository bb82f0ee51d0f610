use grid_util::point::Point;

use crate::config::SearchConfig;
use crate::error::Result;
use crate::frontier::Frontier;
use crate::search_grid::{DiagonalRule, GridSize, NodeState};
use crate::solver::{finish, prepare, GridSearch};
use crate::Cost;

/// Classic A* over the 8-neighbourhood. Every path it returns moves one cell at a time.
///
/// Diagonal moves only require the destination cell to be free. The cost of a move from `a` to
/// `b` is `heuristic(a, b)`.
#[derive(Clone, Debug, Default)]
pub struct AstarSearch {
    pub config: SearchConfig,
}

impl AstarSearch {
    pub fn new() -> AstarSearch {
        AstarSearch::default()
    }
    pub fn with_config(config: SearchConfig) -> AstarSearch {
        AstarSearch { config }
    }
}

impl GridSearch for AstarSearch {
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
        let rule = DiagonalRule::AllowSqueeze;
        let Some(mut grid) = prepare(
            &self.config,
            rule,
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
            if current == goal {
                found = true;
                break;
            }
            budget.tick()?;
            grid.node_mut(current).state = NodeState::Closed;

            let current_point = grid.point(current);
            for neighbour in grid.neighbours(current, rule) {
                if grid.node(neighbour).state == NodeState::Closed {
                    continue;
                }
                let tentative_g = cost + heuristic(&current_point, &grid.point(neighbour));
                let n = grid.node_mut(neighbour);
                if tentative_g < n.g {
                    n.parent = Some(current);
                    n.g = tentative_g;
                    n.state = NodeState::Open;
                    open.push(neighbour, n.g, n.f());
                }
            }
        }
        Ok(finish(&grid, found, budget.expansions()))
    }
}
