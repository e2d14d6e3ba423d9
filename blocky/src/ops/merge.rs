use itertools::Itertools;
use tracing::trace;

use crate::{Block, Color, Content, Quad};

impl Block {
    /// Turns this block back into a leaf painted with its children's majority color.
    ///
    /// Only applies one level above `max_depth` when all four children are leaves.
    /// The majority is the single most common color, a tie (2-2, or four different colors)
    /// has no majority and leaves the block untouched.
    #[must_use]
    pub fn merge(&mut self) -> bool {
        if self.depth.checked_add(1) != Some(self.max_depth) {
            trace!(depth = self.depth, max_depth = self.max_depth, "merge rejected at depth");
            return false;
        }
        let Content::Inner(children) = &self.content else {
            trace!(depth = self.depth, "merge rejected on leaf");
            return false;
        };
        match majority_color(children) {
            Some(color) => {
                self.content = Content::Leaf(color);
                true
            }
            None => {
                trace!(depth = self.depth, "merge rejected without majority");
                false
            }
        }
    }
}

/// `None` if any child is subdivided or the most common color is tied
fn majority_color(children: &Quad<Block>) -> Option<Color> {
    let colors: Option<Vec<Color>> = children.iter().map(Block::color).collect();
    let winners = colors?
        .into_iter()
        .counts()
        .into_iter()
        .max_set_by_key(|&(_, count)| count);
    match winners.as_slice() {
        [(color, count)] if *count > 1 => Some(*color),
        _ => None,
    }
}
