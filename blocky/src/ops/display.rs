use std::fmt::Display;

use crate::{Block, Content};

/// one line per block, indented by one tab per level
impl Display for Block {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let indent = "\t".repeat(usize::from(self.depth));
        let Block {
            position,
            size,
            depth,
            ..
        } = self;
        match &self.content {
            Content::Leaf(color) => {
                writeln!(
                    f,
                    "{indent}Leaf: color={color}, pos={position}, size={size}, level={depth}"
                )
            }
            Content::Inner(children) => {
                writeln!(f, "{indent}Parent: pos={position}, size={size}, level={depth}")?;
                children.iter().try_for_each(|child| Display::fmt(child, f))
            }
        }
    }
}
