use rand::Rng;
use tracing::trace;

use crate::{Block, Color, Content, Quad, Quadrant};

impl Block {
    /// a block can be subdivided if it is a leaf above `max_depth`
    pub fn can_subdivide(&self) -> bool {
        self.is_leaf() && self.depth < self.max_depth
    }

    /// Replaces this leaf with four leaves of random palette colors.
    ///
    /// Returns false without changing anything if the block already has
    /// children or is at `max_depth`.
    #[must_use]
    pub fn subdivide<R: Rng + ?Sized>(&mut self, rng: &mut R) -> bool {
        self.subdivide_with(|_| rng.random())
    }

    /// same as [`Block::subdivide`] but with each child's color picked by `color`
    #[must_use]
    pub fn subdivide_with(&mut self, color: impl FnMut(Quadrant) -> Color) -> bool {
        if !self.can_subdivide() {
            trace!(
                depth = self.depth,
                max_depth = self.max_depth,
                leaf = self.is_leaf(),
                "subdivide rejected"
            );
            return false;
        }
        let children = self.new_children(color);
        self.content = Content::Inner(Box::new(children));
        true
    }

    fn new_children(&self, mut color: impl FnMut(Quadrant) -> Color) -> Quad<Block> {
        let child_size = self.child_size();
        let depth = self.depth + 1;
        self.child_positions().index_map(|q, position| {
            Block::new_leaf(position, child_size, color(q), depth, self.max_depth)
        })
    }
}
