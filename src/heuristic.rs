//! Distance functions that can be handed to a searcher as its heuristic. Because the same function
//! also prices every edge, it should equal the true move cost between adjacent cells.
use grid_util::point::Point;

/// Integer cost of a cardinal (straight) move.
pub const C: i32 = 99;
/// Integer cost of a diagonal move, approximately `C * sqrt(2)`.
pub const D: i32 = 140;
/// Helper constant for [octile].
pub const E: i32 = 2 * C - D;

/// Octile distance scaled by [C]: the cost of taking as many diagonal steps as possible before
/// going straight.
pub fn octile(p1: &Point, p2: &Point) -> i32 {
    let delta_x = (p1.x - p2.x).abs();
    let delta_y = (p1.y - p2.y).abs();
    // Formula from https://github.com/riscy/a_star_on_grids
    (E * (delta_x - delta_y).abs() + D * (delta_x + delta_y)) / 2
}

/// Octile distance in unit cells, with diagonal moves costing `sqrt(2)`.
pub fn octile_f32(p1: &Point, p2: &Point) -> f32 {
    let delta_x = (p1.x - p2.x).abs() as f32;
    let delta_y = (p1.y - p2.y).abs() as f32;
    delta_x.max(delta_y) + (std::f32::consts::SQRT_2 - 1.0) * delta_x.min(delta_y)
}

/// Every move, straight or diagonal, costs one.
pub fn chebyshev(p1: &Point, p2: &Point) -> i32 {
    (p1.x - p2.x).abs().max((p1.y - p2.y).abs())
}

pub fn manhattan(p1: &Point, p2: &Point) -> i32 {
    (p1.x - p2.x).abs() + (p1.y - p2.y).abs()
}

pub fn euclidean(p1: &Point, p2: &Point) -> f32 {
    let delta_x = (p1.x - p2.x) as f32;
    let delta_y = (p1.y - p2.y) as f32;
    delta_x.hypot(delta_y)
}
