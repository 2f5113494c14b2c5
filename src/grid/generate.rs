use rand::Rng;
use tracing::debug;

use crate::grid::{Cell, Grid};
use crate::search::{Strategy, search};
use crate::statistics::SearchStats;

/// Generates a solvable grid by rejection sampling: lay out random walls,
/// probe solvability with one breadth-first search, resample until the
/// probe succeeds.
///
/// `wall_probability` is the chance that any given cell (other than the
/// endpoints, which are forced open) becomes a wall. Start and goal are
/// drawn uniformly among distinct cells. Denser settings reject more
/// layouts per accepted grid, so expect generation time to climb as the
/// probability approaches 1.
///
/// Passing a seeded rng reproduces the same grid:
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use wayfind::grid::generate;
///
/// let a = generate(6, 9, 0.25, &mut StdRng::seed_from_u64(7));
/// let b = generate(6, 9, 0.25, &mut StdRng::seed_from_u64(7));
/// assert_eq!(a, b);
/// ```
///
/// # Panics
/// Panics if the grid has fewer than two cells or `wall_probability` lies
/// outside `[0, 1)`.
pub fn generate(height: usize, width: usize, wall_probability: f64, rng: &mut impl Rng) -> Grid {
    assert!(
        height * width >= 2,
        "need room for distinct start and goal cells"
    );
    assert!(
        (0.0..1.0).contains(&wall_probability),
        "wall probability must lie in [0, 1)"
    );

    let mut attempts = 0usize;
    loop {
        attempts += 1;
        let grid = sample_layout(height, width, wall_probability, rng);
        if solvable(&grid) {
            debug!(attempts, height, width, "generated solvable grid");
            return grid;
        }
    }
}

fn sample_layout(height: usize, width: usize, wall_probability: f64, rng: &mut impl Rng) -> Grid {
    let start = random_cell(height, width, rng);
    let mut goal = random_cell(height, width, rng);
    while goal == start {
        goal = random_cell(height, width, rng);
    }

    let mut walls = Vec::with_capacity(height * width);
    for row in 0..height {
        for col in 0..width {
            let cell = Cell::new(row, col);
            let blocked = cell != start && cell != goal && rng.random_bool(wall_probability);
            walls.push(blocked);
        }
    }
    Grid::from_parts(height, width, walls, start, goal)
}

fn random_cell(height: usize, width: usize, rng: &mut impl Rng) -> Cell {
    Cell::new(rng.random_range(0..height), rng.random_range(0..width))
}

/// One breadth-first probe; the path itself is discarded.
fn solvable(grid: &Grid) -> bool {
    let mut stats = SearchStats::new();
    search(
        Strategy::BreadthFirst,
        grid.start(),
        |cell| grid.is_goal(*cell),
        |cell| grid.neighbors(*cell),
        &mut stats,
    )
    .map(|outcome| outcome.found)
    .unwrap_or(false)
}
