use tracing::trace;

use crate::{Block, Content, Pos, Quadrant};

impl Block {
    /// Moves this block's upper left corner to `position`, carrying every descendant along.
    ///
    /// Returns false without moving anything if `position` has a negative coordinate.
    #[must_use]
    pub fn reposition(&mut self, position: Pos) -> bool {
        if !position.is_non_negative() {
            trace!(%position, "reposition rejected");
            return false;
        }
        self.translate(position - self.position);
        true
    }

    /// shifts the whole subtree by `delta`, visiting each block once
    pub(crate) fn translate(&mut self, delta: Pos) {
        self.position = self.position + delta;
        if let Content::Inner(children) = &mut self.content {
            for child in children.iter_mut() {
                child.translate(delta);
            }
        }
    }

    /// moves each child to the slot its quadrant now names, used after the children were rearranged
    pub(crate) fn settle_children(&mut self) {
        let positions = self.child_positions();
        if let Content::Inner(children) = &mut self.content {
            for q in Quadrant::iter_all() {
                let child = &mut children[q];
                child.translate(positions[q] - child.position);
            }
        }
    }
}
