use std::fmt::Display;
use std::ops::Index;

use ndarray::{s, Array2, ArrayView1, ArrayViewMut2};
use tracing::trace_span;

use crate::{Block, Color, Content, Quadrant};

/// A square snapshot of a block at unit cell resolution.
///
/// `[(row, col)]` with `[(0, 0)]` the upper left cell.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Grid {
    cells: Array2<Color>,
}

impl Grid {
    /// each leaf's color is repeated over every unit cell it covers
    pub fn from_block(block: &Block) -> Self {
        let _span = trace_span!("flatten", depth = block.depth, max_depth = block.max_depth).entered();
        let side = 1usize << (block.max_depth - block.depth);
        let mut cells = Array2::from_elem((side, side), Color::WHITE);
        fill(block, cells.view_mut());
        Self { cells }
    }

    /// `None` if `cells` isn't square
    pub fn from_cells(cells: Array2<Color>) -> Option<Self> {
        (cells.nrows() == cells.ncols()).then_some(Self { cells })
    }

    pub fn side(&self) -> usize {
        self.cells.nrows()
    }
    pub fn cells(&self) -> &Array2<Color> {
        &self.cells
    }
    pub fn get(&self, row: usize, col: usize) -> Option<Color> {
        self.cells.get((row, col)).copied()
    }
    pub fn rows(&self) -> impl Iterator<Item = ArrayView1<'_, Color>> {
        self.cells.rows().into_iter()
    }
    pub fn count(&self, color: Color) -> usize {
        self.cells.iter().filter(|&&cell| cell == color).count()
    }
}

fn fill(block: &Block, mut cells: ArrayViewMut2<'_, Color>) {
    match &block.content {
        Content::Leaf(color) => cells.fill(*color),
        Content::Inner(children) => {
            let half = cells.nrows() / 2;
            let (nw, ne, sw, se) = cells.multi_slice_mut((
                s![..half, ..half],
                s![..half, half..],
                s![half.., ..half],
                s![half.., half..],
            ));
            fill(&children[Quadrant::NE], ne);
            fill(&children[Quadrant::NW], nw);
            fill(&children[Quadrant::SW], sw);
            fill(&children[Quadrant::SE], se);
        }
    }
}

impl Block {
    /// see [`Grid::from_block`]
    pub fn flatten(&self) -> Grid {
        Grid::from_block(self)
    }
}

impl Index<(usize, usize)> for Grid {
    type Output = Color;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        &self.cells[index]
    }
}

/// one line of color symbols per row
impl Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.rows() {
            let line: String = row.iter().map(|color| color.symbol()).collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
