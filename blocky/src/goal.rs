use std::fmt::Display;

use ndarray::{Array2, ArrayView1};
use rand::Rng;
use tracing::{debug, trace_span};

use crate::color::distinct_colors;
use crate::{Block, BlockError, Color, Grid};

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum GoalKind {
    /// unit cells of the target color along the outer edge
    Perimeter,
    /// the largest connected region of the target color
    Blob,
}

/// A target color and how a board is scored against it
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Goal {
    kind: GoalKind,
    color: Color,
}

impl Goal {
    pub fn new(kind: GoalKind, color: Color) -> Self {
        Self { kind, color }
    }
    pub fn perimeter(color: Color) -> Self {
        Self::new(GoalKind::Perimeter, color)
    }
    pub fn blob(color: Color) -> Self {
        Self::new(GoalKind::Blob, color)
    }
    pub fn kind(&self) -> GoalKind {
        self.kind
    }
    pub fn color(&self) -> Color {
        self.color
    }

    /// scores the flattened `board`, never mutates it
    pub fn score(&self, board: &Block) -> u32 {
        self.score_grid(&board.flatten())
    }

    pub fn score_grid(&self, grid: &Grid) -> u32 {
        let _span = trace_span!("score", kind = ?self.kind, side = grid.side()).entered();
        let score = match self.kind {
            GoalKind::Perimeter => perimeter(grid.cells(), self.color),
            GoalKind::Blob => largest_blob(grid.cells(), self.color),
        };
        u32::try_from(score).unwrap_or(u32::MAX)
    }

    pub fn description(&self) -> String {
        self.to_string()
    }
}

impl Display for Goal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            GoalKind::Perimeter => write!(
                f,
                "Perimeter: one point per {} unit cell on the edge of the board, corners count twice",
                self.color
            ),
            GoalKind::Blob => write!(
                f,
                "Blob: one point per unit cell in the largest connected {} region",
                self.color
            ),
        }
    }
}

/// Goals of a single random kind, each with a different palette color.
pub fn generate_goals<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Result<Vec<Goal>, BlockError> {
    let kind = if rng.random_bool(0.5) {
        GoalKind::Perimeter
    } else {
        GoalKind::Blob
    };
    let colors = distinct_colors(rng, count)
        .ok_or_else(|| BlockError::too_many_goals(count, Color::PALETTE.len()))?;
    debug!(?kind, count, "generated goals");
    Ok(colors.into_iter().map(|color| Goal::new(kind, color)).collect())
}

fn perimeter(cells: &Array2<Color>, color: Color) -> usize {
    let Some(last) = cells.nrows().checked_sub(1) else {
        return 0;
    };
    let matching = |lane: ArrayView1<'_, Color>| lane.iter().filter(|&&cell| cell == color).count();
    matching(cells.row(0)) + matching(cells.row(last)) + matching(cells.column(0)) + matching(cells.column(last))
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Visit {
    Unvisited,
    /// visited, some other color
    Miss,
    /// visited, the target color
    Hit,
}

/// 4-connected flood fill, each cell is pushed at most once
fn largest_blob(cells: &Array2<Color>, color: Color) -> usize {
    let mut visited = Array2::from_elem(cells.raw_dim(), Visit::Unvisited);
    let mut stack = Vec::new();
    let mut largest = 0;
    for (seed, &cell) in cells.indexed_iter() {
        if visited[seed] != Visit::Unvisited {
            continue;
        }
        if cell != color {
            visited[seed] = Visit::Miss;
            continue;
        }
        visited[seed] = Visit::Hit;
        stack.push(seed);
        let mut size = 0;
        while let Some((row, col)) = stack.pop() {
            size += 1;
            let neighbors = [
                (row.wrapping_sub(1), col),
                (row + 1, col),
                (row, col.wrapping_sub(1)),
                (row, col + 1),
            ];
            for neighbor in neighbors {
                let Some(&other) = cells.get(neighbor) else {
                    continue;
                };
                if visited[neighbor] != Visit::Unvisited {
                    continue;
                }
                if other == color {
                    visited[neighbor] = Visit::Hit;
                    stack.push(neighbor);
                } else {
                    visited[neighbor] = Visit::Miss;
                }
            }
        }
        largest = largest.max(size);
    }
    largest
}

#[cfg(test)]
mod test {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::{generate_goals, Goal, GoalKind};
    use crate::error::BlockErrorKind;
    use crate::{test_block, test_grid, Block, Color, Pos, Quadrant};

    #[test]
    fn perimeter_small() {
        let grid = test_grid! {"
            BR
            GY
        "};
        assert_eq!(Goal::perimeter(Color::PACIFIC_POINT).score_grid(&grid), 2);
        assert_eq!(Goal::perimeter(Color::DAFFODIL_DELIGHT).score_grid(&grid), 2);
        assert_eq!(Goal::perimeter(Color::BLACK).score_grid(&grid), 0);
    }

    #[test]
    fn perimeter_corners_and_center() {
        let grid = test_grid! {"
            RRRR
            RBBR
            RBBR
            RRRR
        "};
        assert_eq!(Goal::perimeter(Color::REAL_RED).score_grid(&grid), 16);
        assert_eq!(Goal::perimeter(Color::PACIFIC_POINT).score_grid(&grid), 0);
        assert_eq!(Goal::perimeter(Color::OLD_OLIVE).score_grid(&test_grid! {"G"}), 4);
    }

    #[test]
    fn perimeter_unsubdivided_board() {
        let board = Block::new(Pos::ORIGIN, 750, Color::OLD_OLIVE, 0, 2).unwrap();
        assert_eq!(Goal::perimeter(Color::OLD_OLIVE).score(&board), 16);
    }

    #[test]
    fn blob_small() {
        let grid = test_grid! {"
            BB
            RB
        "};
        assert_eq!(Goal::blob(Color::PACIFIC_POINT).score_grid(&grid), 3);
        assert_eq!(Goal::blob(Color::REAL_RED).score_grid(&grid), 1);
        assert_eq!(Goal::blob(Color::OLD_OLIVE).score_grid(&grid), 0);
    }

    #[test]
    fn blob_diagonal_is_not_connected() {
        let grid = test_grid! {"
            YBYB
            BYBY
            YBYY
            BYYY
        "};
        assert_eq!(Goal::blob(Color::DAFFODIL_DELIGHT).score_grid(&grid), 6);
        assert_eq!(Goal::blob(Color::PACIFIC_POINT).score_grid(&grid), 1);
    }

    #[test]
    fn blob_largest_of_several() {
        let grid = test_grid! {"
            RRGR
            RGGR
            GGRR
            RGRR
        "};
        assert_eq!(Goal::blob(Color::REAL_RED).score_grid(&grid), 6);
        assert_eq!(Goal::blob(Color::OLD_OLIVE).score_grid(&grid), 6);
    }

    #[test]
    fn score_leaves_board_untouched() {
        let mut board = test_block! {"
            BRGY
            RRGG
            YYBB
            GBRY
        "};
        assert!(board.child_mut(Quadrant::NE).unwrap().merge());
        let before = board.clone();
        assert_eq!(Goal::blob(Color::OLD_OLIVE).score(&board), 4);
        assert_eq!(Goal::perimeter(Color::OLD_OLIVE).score(&board), 6);
        assert_eq!(board, before);
    }

    #[test]
    fn descriptions() {
        let goal = Goal::blob(Color::REAL_RED);
        assert!(goal.description().contains("Real Red"));
        assert!(goal.description().starts_with("Blob"));
        assert!(Goal::perimeter(Color::OLD_OLIVE).to_string().contains("Old Olive"));
    }

    #[test]
    fn generate() {
        let mut rng = StdRng::seed_from_u64(148);
        let goals = generate_goals(4, &mut rng).unwrap();
        assert_eq!(goals.len(), 4);
        let kind = goals[0].kind();
        assert!(goals.iter().all(|goal| goal.kind() == kind));
        for color in Color::PALETTE {
            assert_eq!(goals.iter().filter(|goal| goal.color() == color).count(), 1);
        }
        assert!(matches!(kind, GoalKind::Perimeter | GoalKind::Blob));

        assert!(generate_goals(0, &mut rng).unwrap().is_empty());
        let err = generate_goals(5, &mut rng).unwrap_err();
        assert_eq!(err.kind(), BlockErrorKind::TooManyGoals);
    }
}
