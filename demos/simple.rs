use tile_pathfinding::heuristic::octile;
use tile_pathfinding::{AstarSearch, GridSearch, GridSize, Point};

// A path is found on a grid with shape
// #####
// #S  #
// # # #
// #  E#
// #####
// S marks the start
// E marks the end
fn main() {
    let blocked = |p: &Point| {
        p.x == 0 || p.y == 0 || p.x == 4 || p.y == 4 || (p.x == 2 && p.y == 2)
    };
    let start = Point::new(1, 1);
    let end = Point::new(3, 3);
    match AstarSearch::new().find_path(start, end, GridSize::new(5, 5), blocked, octile) {
        Ok(path) if path.is_empty() => println!("No path exists"),
        Ok(path) => {
            println!("A path has been found:");
            for p in path {
                println!("{:?}", p);
            }
        }
        Err(e) => println!("Query rejected: {e}"),
    }
}
