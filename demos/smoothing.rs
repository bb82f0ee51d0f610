use tile_pathfinding::heuristic::octile_f32;
use tile_pathfinding::{
    path_cost, waypoints_to_path, AstarSearch, GridSearch, GridSize, LazyThetaSearch, Point,
};

// Compares the grid-aligned A* path with the Lazy Theta* waypoints on a 30x30 grid with a few
// rectangular obstacles, then expands the waypoints back into single steps.
fn main() {
    const N: i32 = 30;
    let rects = [(8, 8, 8, 8), (0, 3, 6, 6), (10, 0, 6, 6), (20, 18, 4, 10)];
    let blocked = |p: &Point| {
        rects
            .iter()
            .any(|&(x, y, w, h)| p.x >= x && p.x < x + w && p.y >= y && p.y < y + h)
    };
    let size = GridSize::new(N as usize, N as usize);
    let start = Point::new(1, 1);
    let end = Point::new(N - 3, N - 3);

    for y in 0..N {
        let row: String = (0..N)
            .map(|x| {
                let p = Point::new(x, y);
                if p == start {
                    'S'
                } else if p == end {
                    'E'
                } else if blocked(&p) {
                    '#'
                } else {
                    '.'
                }
            })
            .collect();
        println!("{}", row);
    }

    let astar = AstarSearch::new()
        .find_path(start, end, size, blocked, octile_f32)
        .unwrap();
    println!(
        "A*: {} cells, cost {:.2}",
        astar.len(),
        path_cost(&astar, octile_f32)
    );

    let waypoints = LazyThetaSearch::new()
        .find_path(start, end, size, blocked, octile_f32)
        .unwrap();
    println!(
        "Lazy Theta*: {} waypoints, cost {:.2}",
        waypoints.len(),
        path_cost(&waypoints, octile_f32)
    );
    for p in &waypoints {
        println!("{:?}", p);
    }
    let expanded = waypoints_to_path(waypoints);
    println!("Expanded into {} single steps", expanded.len().saturating_sub(1));
}
