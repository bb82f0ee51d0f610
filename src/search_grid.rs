use core::fmt;

use grid_util::point::Point;
use itertools::Itertools;
use petgraph::unionfind::UnionFind;
use smallvec::SmallVec;

use crate::error::{Result, SearchError};
use crate::Cost;

/// Offsets of the 8 neighbours, orthogonal first.
const NEIGHBOUR_OFFSETS: [(i32, i32); 8] = [
    (1, 0),
    (0, 1),
    (-1, 0),
    (0, -1),
    (1, 1),
    (-1, 1),
    (-1, -1),
    (1, -1),
];

/// Dimensions of the grid a query runs on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GridSize {
    pub width: usize,
    pub height: usize,
}

impl GridSize {
    pub fn new(width: usize, height: usize) -> GridSize {
        GridSize { width, height }
    }
    pub fn contains(&self, point: &Point) -> bool {
        point.x >= 0
            && point.y >= 0
            && (point.x as usize) < self.width
            && (point.y as usize) < self.height
    }
    /// Rejects grids without cells and grids whose coordinates do not fit in a [Point]. Grids that
    /// pass but are too large to allocate are rejected when the arena is built.
    pub(crate) fn validate(&self) -> Result<usize> {
        let degenerate = SearchError::DegenerateGrid {
            width: self.width,
            height: self.height,
        };
        if self.width == 0 || self.height == 0 {
            return Err(degenerate);
        }
        if self.width > i32::MAX as usize || self.height > i32::MAX as usize {
            return Err(degenerate);
        }
        self.width.checked_mul(self.height).ok_or(degenerate)
    }
    pub(crate) fn check_point(&self, point: Point) -> Result<()> {
        if self.contains(&point) {
            Ok(())
        } else {
            Err(SearchError::OutOfBounds {
                point,
                width: self.width,
                height: self.height,
            })
        }
    }
}

/// Which diagonal moves count as adjacent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DiagonalRule {
    /// Any diagonal move onto a free cell, even between two blocked orthogonal cells.
    AllowSqueeze,
    /// A diagonal move needs at least one of its two flanking orthogonal cells to be free.
    NoSqueeze,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum NodeState {
    New,
    Open,
    Closed,
}

#[derive(Clone, Debug)]
pub(crate) struct SearchNode<C> {
    pub g: C,
    pub h: C,
    pub parent: Option<usize>,
    pub blocked: bool,
    pub state: NodeState,
}

impl<C: Cost> SearchNode<C> {
    pub fn f(&self) -> C {
        self.g + self.h
    }
}

/// The dense per-query arena of search nodes, one per cell, addressed by `x + y * width`.
/// Parent links are indices into the same arena.
#[derive(Clone, Debug)]
pub(crate) struct SearchGrid<C> {
    size: GridSize,
    nodes: Vec<SearchNode<C>>,
    start: usize,
    goal: usize,
}

impl<C: Cost> SearchGrid<C> {
    /// Validates the query and initialises every node. The obstacle predicate and the heuristic
    /// are each called exactly once per cell. The start is always walkable.
    pub fn new<FO, FH>(
        size: GridSize,
        start: Point,
        goal: Point,
        mut is_obstacle: FO,
        heuristic: &mut FH,
    ) -> Result<SearchGrid<C>>
    where
        FO: FnMut(&Point) -> bool,
        FH: FnMut(&Point, &Point) -> C,
    {
        let n = size.validate()?;
        size.check_point(start)?;
        size.check_point(goal)?;
        let mut nodes = Vec::new();
        nodes
            .try_reserve_exact(n)
            .map_err(|_| SearchError::DegenerateGrid {
                width: size.width,
                height: size.height,
            })?;
        for y in 0..size.height as i32 {
            for x in 0..size.width as i32 {
                let point = Point::new(x, y);
                nodes.push(SearchNode {
                    g: C::max_value(),
                    h: heuristic(&point, &goal),
                    parent: None,
                    blocked: is_obstacle(&point),
                    state: NodeState::New,
                });
            }
        }
        let mut grid = SearchGrid {
            size,
            nodes,
            start: 0,
            goal: 0,
        };
        grid.start = grid.ix_unchecked(&start);
        grid.goal = grid.ix_unchecked(&goal);
        let start_node = &mut grid.nodes[grid.start];
        start_node.blocked = false;
        start_node.g = C::zero();
        Ok(grid)
    }

    fn ix_unchecked(&self, point: &Point) -> usize {
        point.x as usize + point.y as usize * self.size.width
    }
    pub fn ix(&self, point: &Point) -> Option<usize> {
        self.size.contains(point).then(|| self.ix_unchecked(point))
    }
    pub fn point(&self, ix: usize) -> Point {
        Point::new(
            (ix % self.size.width) as i32,
            (ix / self.size.width) as i32,
        )
    }
    pub fn start(&self) -> usize {
        self.start
    }
    pub fn goal(&self) -> usize {
        self.goal
    }
    pub fn node(&self, ix: usize) -> &SearchNode<C> {
        &self.nodes[ix]
    }
    pub fn node_mut(&mut self, ix: usize) -> &mut SearchNode<C> {
        &mut self.nodes[ix]
    }
    /// Cells outside the grid count as blocked.
    pub fn is_blocked(&self, point: &Point) -> bool {
        self.ix(point).map_or(true, |ix| self.nodes[ix].blocked)
    }

    /// In-bounds, free neighbours of `ix` under the given diagonal rule.
    pub fn neighbours(&self, ix: usize, rule: DiagonalRule) -> SmallVec<[usize; 8]> {
        let p = self.point(ix);
        NEIGHBOUR_OFFSETS
            .iter()
            .filter(|(dx, dy)| {
                if rule == DiagonalRule::NoSqueeze && *dx != 0 && *dy != 0 {
                    !self.is_blocked(&Point::new(p.x + dx, p.y))
                        || !self.is_blocked(&Point::new(p.x, p.y + dy))
                } else {
                    true
                }
            })
            .filter_map(|(dx, dy)| self.ix(&Point::new(p.x + dx, p.y + dy)))
            .filter(|&n| !self.nodes[n].blocked)
            .collect()
    }

    /// Walks parent links back from `ix` to the start. Returns [None] if `ix` was never reached.
    pub fn reconstruct(&self, ix: usize) -> Option<Vec<Point>> {
        if ix != self.start && self.nodes[ix].parent.is_none() {
            return None;
        }
        let mut path: Vec<Point> = std::iter::successors(Some(ix), |&i| self.nodes[i].parent)
            .take(self.nodes.len())
            .map(|i| self.point(i))
            .collect();
        path.reverse();
        debug_assert_eq!(path.first().copied(), Some(self.point(self.start)));
        Some(path)
    }

    /// Builds a [UnionFind] over the free cells, joining cells that are adjacent under `rule`.
    pub fn generate_components(&self, rule: DiagonalRule) -> UnionFind<usize> {
        let mut components = UnionFind::new(self.nodes.len());
        for ix in 0..self.nodes.len() {
            if !self.nodes[ix].blocked {
                for n in self.neighbours(ix, rule) {
                    if n > ix {
                        components.union(ix, n);
                    }
                }
            }
        }
        components
    }

    /// Checks if start and goal end up in different components.
    pub fn unreachable(&self, rule: DiagonalRule) -> bool {
        !self.generate_components(rule).equiv(self.start, self.goal)
    }
}

/// Checks whether `to` can be reached from `from` by moves that are legal under `rule`, using
/// connected components rather than a search. `from` counts as free, as it does for the searchers.
pub fn reachable<FO>(
    size: GridSize,
    from: Point,
    to: Point,
    is_obstacle: FO,
    rule: DiagonalRule,
) -> Result<bool>
where
    FO: FnMut(&Point) -> bool,
{
    let mut zero = |_: &Point, _: &Point| 0;
    let grid: SearchGrid<i32> = SearchGrid::new(size, from, to, is_obstacle, &mut zero)?;
    Ok(!grid.unreachable(rule))
}

impl<C> fmt::Display for SearchGrid<C> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Grid:")?;
        for row in &self.nodes.iter().chunks(self.size.width) {
            let line: String = row.map(|n| if n.blocked { '#' } else { '.' }).collect();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
