use ndarray::{s, Array2, ArrayView2};

use crate::{Block, BlockError, Color, Content, Grid, Pos};

// macros make formatting nicer

/// this has very little error handling, must be a square of color symbols
#[macro_export]
macro_rules! test_grid {
    {$s:literal} => {
        $crate::Grid::from_test_format($s)
    };
}
/// this has very little error handling, must be a square of color symbols with side length a power of 2
#[macro_export]
macro_rules! test_block {
    {$s:literal} => {
        $crate::Block::from_test_format($s)
    };
}
pub use {test_block, test_grid};

impl Grid {
    /// expects one line of [`Color::symbol`]s per row
    /// first line may be empty, leading/trailing spaces are ignored
    pub fn from_test_format(s: &str) -> Grid {
        let rows: Vec<Vec<Color>> = s.split_ascii_whitespace().map(parse_row).collect();
        let side = rows.len();
        assert!(
            rows.iter().all(|row| row.len() == side),
            "expected a square of {side} rows"
        );
        let cells = Array2::from_shape_fn((side, side), |(row, col)| rows[row][col]);
        Grid::from_cells(cells).expect("square")
    }
}
impl Block {
    /// a full depth block of size `side` at the origin
    pub fn from_test_format(s: &str) -> Block {
        let grid = Grid::from_test_format(s);
        let size = u32::try_from(grid.side()).expect("small grid");
        Block::from_grid(&grid, Pos::ORIGIN, size).expect("side length a power of 2")
    }

    /// The inverse of [`Block::flatten`].
    ///
    /// Every unit cell of `grid` becomes a leaf at `max_depth`, so `max_depth`
    /// is `log2(grid.side())`.
    pub fn from_grid(grid: &Grid, position: Pos, size: u32) -> Result<Block, BlockError> {
        let side = grid.side();
        if !side.is_power_of_two() {
            return Err(BlockError::uneven_grid(side));
        }
        let max_depth = u8::try_from(side.trailing_zeros()).map_err(|_| BlockError::uneven_grid(side))?;
        let mut block = Block::new(position, size, grid[(0, 0)], 0, max_depth)?;
        block.paint(grid.cells().view());
        Ok(block)
    }

    fn paint(&mut self, cells: ArrayView2<'_, Color>) {
        let half = cells.nrows() / 2;
        if half == 0 {
            self.content = Content::Leaf(cells[(0, 0)]);
            return;
        }
        let child_size = self.child_size();
        let depth = self.depth + 1;
        let max_depth = self.max_depth;
        let children = self.child_positions().index_map(|q, position| {
            let rows = if q.is_north() { 0..half } else { half..2 * half };
            let cols = if q.is_west() { 0..half } else { half..2 * half };
            let mut child = Block::new_leaf(position, child_size, Color::WHITE, depth, max_depth);
            child.paint(cells.slice(s![rows, cols]));
            child
        });
        self.content = Content::Inner(Box::new(children));
    }
}

fn parse_row(row: &str) -> Vec<Color> {
    row.chars()
        .map(|c| Color::from_symbol(c).unwrap_or_else(|| panic!("unknown color symbol {c:?}")))
        .collect()
}
