use hashbrown::HashSet;
use serde::{Deserialize, Serialize};

use crate::error::GridError;
use crate::grid::Cell;

/// A rectangular wall map with one start and one goal cell.
///
/// The text format matches the original maze files: `#` is a wall, a space
/// is open, `A` marks the start and `B` the goal. Rows shorter than the
/// widest row are padded with walls, and any unrecognized character also
/// acts as a wall, so non-rectangular or decorated inputs still parse.
///
/// # Examples
/// ```
/// use wayfind::grid::{Cell, Grid};
///
/// let grid = Grid::parse("A #\n  B").unwrap();
/// assert_eq!(grid.start(), Cell::new(0, 0));
/// assert_eq!(grid.goal(), Cell::new(1, 2));
/// assert!(grid.is_wall(Cell::new(0, 2)));
/// assert_eq!(grid.neighbors(Cell::new(0, 0)), vec![Cell::new(1, 0), Cell::new(0, 1)]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    height: usize,
    width: usize,
    walls: Vec<bool>,
    start: Cell,
    goal: Cell,
}

impl Grid {
    /// Parses the plain-text wall format.
    ///
    /// # Errors
    /// Fails unless the input holds exactly one `A` and exactly one `B`.
    pub fn parse(text: &str) -> Result<Grid, GridError> {
        let lines: Vec<&str> = text.lines().collect();
        let height = lines.len();
        let width = lines
            .iter()
            .map(|line| line.chars().count())
            .max()
            .unwrap_or(0);

        // short rows keep their padding cells walled
        let mut walls = vec![true; height * width];
        let mut starts: Vec<Cell> = Vec::new();
        let mut goals: Vec<Cell> = Vec::new();

        for (row, line) in lines.iter().enumerate() {
            for (col, ch) in line.chars().enumerate() {
                let cell = Cell::new(row, col);
                let blocked = match ch {
                    ' ' => false,
                    'A' => {
                        starts.push(cell);
                        false
                    }
                    'B' => {
                        goals.push(cell);
                        false
                    }
                    // '#' and anything unrecognized
                    _ => true,
                };
                walls[row * width + col] = blocked;
            }
        }

        let start = match starts.as_slice() {
            [] => return Err(GridError::MissingStart),
            [only] => *only,
            many => {
                return Err(GridError::MultipleStarts { count: many.len() });
            }
        };
        let goal = match goals.as_slice() {
            [] => return Err(GridError::MissingGoal),
            [only] => *only,
            many => {
                return Err(GridError::MultipleGoals { count: many.len() });
            }
        };

        Ok(Grid {
            height,
            width,
            walls,
            start,
            goal,
        })
    }

    pub(crate) fn from_parts(
        height: usize,
        width: usize,
        walls: Vec<bool>,
        start: Cell,
        goal: Cell,
    ) -> Grid {
        debug_assert_eq!(walls.len(), height * width);
        Grid {
            height,
            width,
            walls,
            start,
            goal,
        }
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn start(&self) -> Cell {
        self.start
    }

    pub fn goal(&self) -> Cell {
        self.goal
    }

    /// # Panics
    /// Panics if `cell` lies outside the grid.
    pub fn is_wall(&self, cell: Cell) -> bool {
        assert!(cell.row < self.height && cell.col < self.width);
        self.walls[cell.row * self.width + cell.col]
    }

    pub fn is_goal(&self, cell: Cell) -> bool {
        cell == self.goal
    }

    /// Open cells one step from `cell`, in the fixed candidate order
    /// up, down, left, right — the order breadth- and depth-first searches
    /// break ties in.
    pub fn neighbors(&self, cell: Cell) -> Vec<Cell> {
        let Cell { row, col } = cell;
        let mut candidates = Vec::with_capacity(4);
        if row > 0 {
            candidates.push(Cell::new(row - 1, col));
        }
        if row + 1 < self.height {
            candidates.push(Cell::new(row + 1, col));
        }
        if col > 0 {
            candidates.push(Cell::new(row, col - 1));
        }
        if col + 1 < self.width {
            candidates.push(Cell::new(row, col + 1));
        }
        candidates.retain(|candidate| !self.is_wall(*candidate));
        candidates
    }

    /// Renders the grid back to its text format, overlaying `*` on the path
    /// cells (start and goal keep their letters). `render(None)` round-trips
    /// through [`Grid::parse`].
    pub fn render(&self, path: Option<&[Cell]>) -> String {
        let on_path: HashSet<Cell> = path.unwrap_or(&[]).iter().copied().collect();
        let mut out = String::with_capacity((self.width + 1) * self.height);
        for row in 0..self.height {
            for col in 0..self.width {
                let cell = Cell::new(row, col);
                let ch = if cell == self.start {
                    'A'
                } else if cell == self.goal {
                    'B'
                } else if self.is_wall(cell) {
                    '#'
                } else if on_path.contains(&cell) {
                    '*'
                } else {
                    ' '
                };
                out.push(ch);
            }
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_dimensions_and_endpoints() {
        let grid = Grid::parse("A# \n  B").unwrap();
        assert_eq!(grid.height(), 2);
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.start(), Cell::new(0, 0));
        assert_eq!(grid.goal(), Cell::new(1, 2));
        assert!(grid.is_wall(Cell::new(0, 1)));
        assert!(!grid.is_wall(Cell::new(1, 1)));
    }

    #[test]
    fn endpoint_cells_are_open() {
        let grid = Grid::parse("AB").unwrap();
        assert!(!grid.is_wall(grid.start()));
        assert!(!grid.is_wall(grid.goal()));
    }

    #[test]
    fn missing_endpoints_are_rejected() {
        assert!(matches!(Grid::parse("  B"), Err(GridError::MissingStart)));
        assert!(matches!(Grid::parse("A  "), Err(GridError::MissingGoal)));
        assert!(matches!(Grid::parse(""), Err(GridError::MissingStart)));
    }

    #[test]
    fn duplicated_endpoints_are_rejected() {
        assert!(matches!(
            Grid::parse("AAB"),
            Err(GridError::MultipleStarts { count: 2 })
        ));
        assert!(matches!(
            Grid::parse("ABBB"),
            Err(GridError::MultipleGoals { count: 3 })
        ));
    }

    #[test]
    fn ragged_rows_are_padded_with_walls() {
        let grid = Grid::parse("A\n  B").unwrap();
        assert_eq!(grid.width(), 3);
        assert!(grid.is_wall(Cell::new(0, 1)));
        assert!(grid.is_wall(Cell::new(0, 2)));
    }

    #[test]
    fn unrecognized_characters_act_as_walls() {
        let grid = Grid::parse("AxB").unwrap();
        assert!(grid.is_wall(Cell::new(0, 1)));
    }

    #[test]
    fn neighbors_follow_candidate_order_and_skip_walls() {
        let grid = Grid::parse("   \n A \n##B").unwrap();
        // center cell: all four, in up/down/left/right order
        assert_eq!(
            grid.neighbors(Cell::new(1, 1)),
            vec![
                Cell::new(0, 1),
                Cell::new(2, 1),
                Cell::new(1, 0),
                Cell::new(1, 2),
            ]
        );
        // corner cell next to a wall
        assert_eq!(grid.neighbors(Cell::new(2, 2)), vec![Cell::new(1, 2)]);
    }

    #[test]
    fn neighbors_never_leave_the_grid() {
        let grid = Grid::parse("AB").unwrap();
        assert_eq!(grid.neighbors(Cell::new(0, 0)), vec![Cell::new(0, 1)]);
    }

    #[test]
    fn render_round_trips_through_parse() {
        let text = "A# \n  B\n";
        let grid = Grid::parse(text).unwrap();
        assert_eq!(grid.render(None), text);
        assert_eq!(Grid::parse(&grid.render(None)).unwrap(), grid);
    }

    #[test]
    fn render_overlays_the_path_but_keeps_endpoints() {
        let grid = Grid::parse("A  \n  B").unwrap();
        let path = [
            Cell::new(0, 0),
            Cell::new(0, 1),
            Cell::new(1, 1),
            Cell::new(1, 2),
        ];
        assert_eq!(grid.render(Some(&path)), "A* \n *B\n");
    }

    #[test]
    fn goal_test_matches_only_the_goal() {
        let grid = Grid::parse("A B").unwrap();
        assert!(grid.is_goal(Cell::new(0, 2)));
        assert!(!grid.is_goal(Cell::new(0, 1)));
    }
}
