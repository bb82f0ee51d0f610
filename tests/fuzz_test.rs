/// Fuzzes both searchers on many random grids, checking that a path is found exactly when the goal
/// is in the same connected component as the start, and that every path found is well formed.
use grid_util::grid::ValueGrid;
use grid_util::BoolGrid;
use rand::prelude::*;
use tile_pathfinding::heuristic::{chebyshev, octile};
use tile_pathfinding::{
    line_of_sight, path_cost, reachable, waypoints_to_path, AstarSearch, DiagonalRule,
    GridSearch, GridSize, LazyThetaSearch, Point,
};

fn random_grid(w: usize, h: usize, rng: &mut StdRng) -> BoolGrid {
    let mut grid = BoolGrid::new(w, h, false);
    for x in 0..w as i32 {
        for y in 0..h as i32 {
            grid.set(x, y, rng.gen_bool(0.35))
        }
    }
    grid
}

fn visualize_grid(grid: &BoolGrid, path: &[Point]) {
    for y in (0..grid.height() as i32).rev() {
        for x in 0..grid.width() as i32 {
            let p = Point::new(x, y);
            if path.first() == Some(&p) {
                print!("S");
            } else if path.last() == Some(&p) {
                print!("G");
            } else if grid.get(x, y) {
                print!("#");
            } else if path.contains(&p) {
                print!("*");
            } else {
                print!(".");
            }
        }
        println!();
    }
}

#[test]
fn fuzz() {
    const N: usize = 12;
    const N_GRIDS: usize = 2000;
    let mut rng = StdRng::seed_from_u64(0);
    let size = GridSize::new(N, N);
    let astar = AstarSearch::new();
    let theta = LazyThetaSearch::new();
    for _ in 0..N_GRIDS {
        let mut grid = random_grid(N, N, &mut rng);
        let start = Point::new(0, 0);
        let end = Point::new(rng.gen_range(0..N as i32), rng.gen_range(0..N as i32));
        grid.set_point(start, false);
        grid.set_point(end, false);
        let blocked = |p: &Point| grid.get_point(*p);

        let astar_reachable =
            reachable(size, start, end, blocked, DiagonalRule::AllowSqueeze).unwrap();
        let astar_result = astar.search(start, end, size, blocked, octile).unwrap();
        if astar_result.is_some() != astar_reachable {
            visualize_grid(&grid, &[start, end]);
        }
        assert_eq!(astar_result.is_some(), astar_reachable);
        if let Some((path, cost)) = &astar_result {
            assert_eq!(path.first(), Some(&start));
            assert_eq!(path.last(), Some(&end));
            assert!(path.iter().skip(1).all(|p| !blocked(p)));
            for w in path.windows(2) {
                assert_eq!(chebyshev(&w[0], &w[1]), 1);
            }
            assert_eq!(path_cost(path, octile), *cost);
        }

        let theta_reachable =
            reachable(size, start, end, blocked, DiagonalRule::NoSqueeze).unwrap();
        let theta_result = theta.search(start, end, size, blocked, octile).unwrap();
        if theta_result.is_some() != theta_reachable {
            visualize_grid(&grid, &[start, end]);
        }
        assert_eq!(theta_result.is_some(), theta_reachable);
        if let Some((path, cost)) = &theta_result {
            assert_eq!(path.first(), Some(&start));
            assert_eq!(path.last(), Some(&end));
            assert!(path.iter().skip(1).all(|p| !blocked(p)));
            let clear = |p: &Point| *p != start && blocked(p);
            for w in path.windows(2) {
                if !line_of_sight(w[0], w[1], clear) {
                    visualize_grid(&grid, path);
                }
                assert!(line_of_sight(w[0], w[1], clear));
            }
            assert_eq!(path_cost(path, octile), *cost);
            let expanded = waypoints_to_path(path.clone());
            assert!(expanded.iter().skip(1).all(|p| !blocked(p)));
        }
    }
}

#[test]
fn fuzz_determinism() {
    const N: usize = 16;
    const N_GRIDS: usize = 200;
    let mut rng = StdRng::seed_from_u64(1);
    let size = GridSize::new(N, N);
    for _ in 0..N_GRIDS {
        let grid = random_grid(N, N, &mut rng);
        let blocked = |p: &Point| grid.get_point(*p);
        let start = Point::new(rng.gen_range(0..N as i32), rng.gen_range(0..N as i32));
        let end = Point::new(rng.gen_range(0..N as i32), rng.gen_range(0..N as i32));
        let astar = AstarSearch::new();
        let theta = LazyThetaSearch::new();
        assert_eq!(
            astar.find_path(start, end, size, blocked, octile).unwrap(),
            astar.find_path(start, end, size, blocked, octile).unwrap()
        );
        assert_eq!(
            theta.find_path(start, end, size, blocked, octile).unwrap(),
            theta.find_path(start, end, size, blocked, octile).unwrap()
        );
    }
}

/// On a grid without obstacles every Lazy Theta* query is a single straight segment, and
/// A* finds a path of optimal octile length.
#[test]
fn fuzz_open_grid() {
    const N: usize = 20;
    let mut rng = StdRng::seed_from_u64(2);
    let size = GridSize::new(N, N);
    let free = |_: &Point| false;
    for _ in 0..200 {
        let start = Point::new(rng.gen_range(0..N as i32), rng.gen_range(0..N as i32));
        let end = Point::new(rng.gen_range(0..N as i32), rng.gen_range(0..N as i32));
        let (_, astar_cost) = AstarSearch::new()
            .search(start, end, size, free, octile)
            .unwrap()
            .unwrap();
        assert_eq!(astar_cost, octile(&start, &end));
        let theta = LazyThetaSearch::new()
            .find_path(start, end, size, free, octile)
            .unwrap();
        if start == end {
            assert_eq!(theta, vec![start]);
        } else {
            assert_eq!(theta, vec![start, end]);
        }
    }
}
