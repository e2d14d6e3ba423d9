use tracing::trace;

use crate::{Block, Color, Content};

impl Block {
    /// Paints a leaf at `max_depth`.
    ///
    /// Returns true if the leaf now has `color`, including when it already had it.
    #[must_use]
    pub fn recolor(&mut self, color: Color) -> bool {
        if self.depth != self.max_depth {
            trace!(depth = self.depth, max_depth = self.max_depth, "recolor rejected");
            return false;
        }
        match &mut self.content {
            Content::Leaf(current) => {
                *current = color;
                true
            }
            Content::Inner(_) => false,
        }
    }
}
