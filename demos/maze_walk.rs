//! Carve a seeded maze, solve it, and print the result.
//!
//! Usage: `maze-walk [WIDTH] [HEIGHT] [SEED]` (see `--help`)

use std::collections::HashSet;
use std::error::Error;

use clap::Parser;
use gridwalk_core::Point;
use gridwalk_maze::{Maze, MazeCarver};
use gridwalk_paths::{Connectivity, UnweightedSearch, WeightedSearch};
use rand::SeedableRng;
use rand::rngs::StdRng;

#[derive(Parser)]
#[command(name = "maze-walk", version, about = "Carve a seeded maze and solve it")]
struct Args {
    /// Maze width in cells.
    #[arg(default_value_t = 31, value_parser = clap::value_parser!(i32).range(1..))]
    width: i32,
    /// Maze height in cells.
    #[arg(default_value_t = 15, value_parser = clap::value_parser!(i32).range(1..))]
    height: i32,
    /// Seed for the carving RNG.
    #[arg(default_value_t = 42)]
    seed: u64,
}

fn is_dead_end(maze: &Maze, p: Point) -> bool {
    maze.is_path(p)
        && Connectivity::Cardinal
            .neighbors(p, maze.bounds())
            .filter(|&n| maze.is_path(n))
            .count()
            == 1
}

fn render(maze: &Maze, route: &HashSet<Point>, start: Point, goal: Point) -> String {
    let mut out = String::new();
    for y in 0..maze.height() {
        for x in 0..maze.width() {
            let p = Point::new(x, y);
            let ch = if p == start {
                'S'
            } else if p == goal {
                'G'
            } else if route.contains(&p) {
                'o'
            } else if maze.is_path(p) {
                ' '
            } else {
                '#'
            };
            out.push(ch);
        }
        out.push('\n');
    }
    out
}

fn main() -> Result<(), Box<dyn Error>> {
    let Args {
        width,
        height,
        seed,
    } = Args::parse();

    let mut carver = MazeCarver::new(StdRng::seed_from_u64(seed));
    let maze = carver.carve(width, height)?;
    let grid = maze.to_grid()?;

    // Far corner of the carved lattice.
    let start = Point::ZERO;
    let goal = Point::new((width - 1) / 2 * 2, (height - 1) / 2 * 2);

    let mut astar = WeightedSearch::new().with_connectivity(Connectivity::Cardinal);
    let route: HashSet<Point> = match astar.find_path(&grid, start, goal)? {
        Some(path) => {
            println!(
                "route {start} -> {goal}: {} steps, cost {:.1}, {} cells expanded",
                path.len(),
                path.cost(),
                astar.last_expanded()
            );
            path.into_iter().collect()
        }
        None => {
            println!("route {start} -> {goal}: unreachable");
            HashSet::new()
        }
    };

    let mut bfs = UnweightedSearch::new().with_connectivity(Connectivity::Cardinal);
    let dead_end = bfs.find_path(&grid, goal, |p, cell| {
        cell.walkable && p != goal && is_dead_end(&maze, p)
    })?;
    match dead_end.last() {
        Some(p) => println!(
            "nearest dead end to {goal} by grid distance: {p}, {} hops",
            dead_end.cost()
        ),
        None => println!("no dead end near {goal}"),
    }

    print!("{}", render(&maze, &route, start, goal));
    Ok(())
}
