//! Discrete visibility between grid cells.
use grid_util::point::Point;
use smallvec::SmallVec;

/// Walks the cells of a
/// [Bresenham line](https://en.wikipedia.org/wiki/Bresenham%27s_line_algorithm) from `start` to
/// `end`, both included. Consecutive cells are always 8-neighbours.
///
/// The cells visited from `a` to `b` are not always the same as those from `b` to `a`; use
/// [line_cells] when the direction must not matter.
#[derive(Clone, Debug)]
pub struct BresenhamLine {
    x: i32,
    y: i32,
    end: Point,
    dx: i32,
    dy: i32,
    sx: i32,
    sy: i32,
    err: i32,
    done: bool,
}

impl BresenhamLine {
    pub fn new(start: Point, end: Point) -> BresenhamLine {
        let dx = (end.x - start.x).abs();
        let dy = -(end.y - start.y).abs();
        BresenhamLine {
            x: start.x,
            y: start.y,
            end,
            dx,
            dy,
            sx: if start.x < end.x { 1 } else { -1 },
            sy: if start.y < end.y { 1 } else { -1 },
            err: dx + dy,
            done: false,
        }
    }
}

impl Iterator for BresenhamLine {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.done {
            return None;
        }
        let current = Point::new(self.x, self.y);
        if self.x == self.end.x && self.y == self.end.y {
            self.done = true;
            return Some(current);
        }
        let e2 = 2 * self.err;
        if e2 >= self.dy {
            self.err += self.dy;
            self.x += self.sx;
        }
        if e2 <= self.dx {
            self.err += self.dx;
            self.y += self.sy;
        }
        Some(current)
    }
}

/// The cells of the line between `a` and `b`, ordered from `a` to `b`. The line is always
/// rasterised from the lexicographically smaller endpoint, so swapping `a` and `b` yields the same
/// cells in reverse order.
pub fn line_cells(a: Point, b: Point) -> SmallVec<[Point; 16]> {
    if (a.x, a.y) <= (b.x, b.y) {
        BresenhamLine::new(a, b).collect()
    } else {
        let mut cells: SmallVec<[Point; 16]> = BresenhamLine::new(b, a).collect();
        cells.reverse();
        cells
    }
}

/// Checks whether every cell on the line between `a` and `b`, endpoints included, is free.
/// Symmetric in `a` and `b`.
pub fn line_of_sight<F>(a: Point, b: Point, blocked: F) -> bool
where
    F: Fn(&Point) -> bool,
{
    let (from, to) = if (a.x, a.y) <= (b.x, b.y) { (a, b) } else { (b, a) };
    !BresenhamLine::new(from, to).any(|p| blocked(&p))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chebyshev_step(a: &Point, b: &Point) -> i32 {
        (a.x - b.x).abs().max((a.y - b.y).abs())
    }

    #[test]
    fn diagonal_line() {
        let cells: Vec<Point> = BresenhamLine::new(Point::new(0, 0), Point::new(4, 4)).collect();
        let expected: Vec<Point> = (0..5).map(|i| Point::new(i, i)).collect();
        assert_eq!(cells, expected);
    }

    #[test]
    fn single_cell_line() {
        let p = Point::new(2, 3);
        let cells: Vec<Point> = BresenhamLine::new(p, p).collect();
        assert_eq!(cells, vec![p]);
    }

    #[test]
    fn lines_are_connected_and_hit_both_ends() {
        let origin = Point::new(0, 0);
        for x in -6..=6 {
            for y in -6..=6 {
                let end = Point::new(x, y);
                let cells = line_cells(origin, end);
                assert_eq!(cells[0], origin);
                assert_eq!(*cells.last().unwrap(), end);
                assert_eq!(cells.len() as i32, chebyshev_step(&origin, &end) + 1);
                for w in cells.windows(2) {
                    assert_eq!(chebyshev_step(&w[0], &w[1]), 1);
                }
            }
        }
    }

    #[test]
    fn line_cells_are_direction_independent() {
        let a = Point::new(1, 0);
        for x in -5..=5 {
            for y in -5..=5 {
                let b = Point::new(x, y);
                let mut forward = line_cells(a, b);
                forward.reverse();
                assert_eq!(forward, line_cells(b, a));
            }
        }
    }

    #[test]
    fn blocked_cell_breaks_sight() {
        let wall = Point::new(2, 2);
        let blocked = |p: &Point| *p == wall;
        assert!(!line_of_sight(Point::new(0, 0), Point::new(4, 4), blocked));
        assert!(!line_of_sight(Point::new(4, 4), Point::new(0, 0), blocked));
        assert!(line_of_sight(Point::new(0, 1), Point::new(3, 4), blocked));
        assert!(line_of_sight(Point::new(0, 0), Point::new(4, 0), blocked));
    }

    #[test]
    fn endpoints_are_checked() {
        let blocked = |p: &Point| p.x == 3;
        assert!(!line_of_sight(Point::new(0, 0), Point::new(3, 0), blocked));
        assert!(!line_of_sight(Point::new(3, 0), Point::new(0, 0), blocked));
    }
}
