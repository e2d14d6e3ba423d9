use crate::color::Color;
use crate::error::BlockError;
use crate::pos::Pos;
use crate::quad::{Quad, Quadrant};

/// Either the color of a leaf or the four children of a subdivided block
///
/// The children are boxed so a leaf stays small, there is never any sharing
/// between two parents.
#[derive(Clone, Debug)]
pub enum Content {
    Leaf(Color),
    Inner(Box<Quad<Block>>),
}

/// A square region of the board, recursively subdivided into quadrants
///
/// # invariants
/// - `depth <= max_depth`
/// - a subdivided block's children all have the same `max_depth`, a depth one greater,
///   size `round(size / 2)` and the position given by [`Block::child_positions`]
/// - `size` is large enough to be halved down to `max_depth`
///
/// Cloning copies the whole tree.
#[derive(Clone, Debug)]
pub struct Block {
    pub(crate) position: Pos,
    pub(crate) size: u32,
    pub(crate) depth: u8,
    pub(crate) max_depth: u8,
    pub(crate) content: Content,
}

impl Block {
    /// creates a leaf block
    pub fn new(
        position: Pos,
        size: u32,
        color: Color,
        depth: u8,
        max_depth: u8,
    ) -> Result<Self, BlockError> {
        validate_geometry(position, size, depth, max_depth)?;
        Ok(Self::new_leaf(position, size, color, depth, max_depth))
    }
    /// creates a leaf block without checking that the arguments are consistent
    pub(crate) fn new_leaf(position: Pos, size: u32, color: Color, depth: u8, max_depth: u8) -> Self {
        Self {
            position,
            size,
            depth,
            max_depth,
            content: Content::Leaf(color),
        }
    }

    pub fn position(&self) -> Pos {
        self.position
    }
    pub fn size(&self) -> u32 {
        self.size
    }
    pub fn depth(&self) -> u8 {
        self.depth
    }
    pub fn max_depth(&self) -> u8 {
        self.max_depth
    }
    pub fn content(&self) -> &Content {
        &self.content
    }
    /// `Some` exactly when this block is a leaf
    pub fn color(&self) -> Option<Color> {
        match self.content {
            Content::Leaf(color) => Some(color),
            Content::Inner(_) => None,
        }
    }
    pub fn is_leaf(&self) -> bool {
        matches!(self.content, Content::Leaf(_))
    }
    pub fn children(&self) -> Option<&Quad<Block>> {
        match &self.content {
            Content::Leaf(_) => None,
            Content::Inner(children) => Some(children),
        }
    }
    pub fn child(&self, quadrant: Quadrant) -> Option<&Block> {
        self.children().map(|children| &children[quadrant])
    }
    pub fn child_mut(&mut self, quadrant: Quadrant) -> Option<&mut Block> {
        match &mut self.content {
            Content::Leaf(_) => None,
            Content::Inner(children) => Some(&mut children[quadrant]),
        }
    }

    /// `round(size / 2)`, rounding halves to even
    pub fn child_size(&self) -> u32 {
        let half = self.size / 2;
        if self.size % 2 == 1 && half % 2 == 1 {
            half + 1
        } else {
            half
        }
    }
    pub fn child_positions(&self) -> Quad<Pos> {
        let child_size = self.child_size();
        Quad::from_fn(|q| self.position + q.offset(child_size))
    }

    /// checks every structural invariant over the whole subtree
    pub fn is_consistent(&self) -> bool {
        if validate_geometry(self.position, self.size, self.depth, self.max_depth).is_err() {
            return false;
        }
        match &self.content {
            Content::Leaf(_) => true,
            Content::Inner(children) => {
                let child_size = self.child_size();
                let positions = self.child_positions();
                Quadrant::iter_all().all(|q| {
                    let child = &children[q];
                    child.max_depth == self.max_depth
                        && Some(child.depth) == self.depth.checked_add(1)
                        && child.size == child_size
                        && child.position == positions[q]
                        && child.is_consistent()
                })
            }
        }
    }
}

fn validate_geometry(position: Pos, size: u32, depth: u8, max_depth: u8) -> Result<(), BlockError> {
    if size == 0 {
        return Err(BlockError::zero_size());
    }
    if !position.is_non_negative() {
        return Err(BlockError::negative_position(position));
    }
    if depth > max_depth {
        return Err(BlockError::depth_exceeds_max(depth, max_depth));
    }
    let levels = max_depth - depth;
    match 1u32.checked_shl(u32::from(levels)) {
        Some(min_size) if size >= min_size => Ok(()),
        _ => Err(BlockError::size_too_small(size, levels)),
    }
}

/// structural equality, leaves compare all their attributes and subdivided blocks compare their children
impl PartialEq for Block {
    fn eq(&self, other: &Self) -> bool {
        match (&self.content, &other.content) {
            (Content::Leaf(color), Content::Leaf(other_color)) => {
                self.position == other.position
                    && self.size == other.size
                    && color == other_color
                    && self.depth == other.depth
                    && self.max_depth == other.max_depth
            }
            (Content::Inner(children), Content::Inner(other_children)) => {
                children == other_children
            }
            _ => false,
        }
    }
}
impl Eq for Block {}

#[cfg(test)]
mod test {
    use crate::error::BlockErrorKind;
    use crate::{test_block, Block, Color, Pos, Quadrant};

    #[test]
    fn construction() {
        let block = Block::new(Pos::new(0, 0), 750, Color::BLACK, 0, 1).unwrap();
        assert_eq!(block.position(), Pos::new(0, 0));
        assert_eq!(block.size(), 750);
        assert_eq!(block.color(), Some(Color::BLACK));
        assert_eq!(block.depth(), 0);
        assert_eq!(block.max_depth(), 1);
        assert!(block.is_leaf());
        assert!(block.children().is_none());
        assert!(block.is_consistent());
    }

    #[test]
    fn construction_errors() {
        let kind = |position, size, depth, max_depth| {
            Block::new(position, size, Color::REAL_RED, depth, max_depth)
                .unwrap_err()
                .kind()
        };
        assert_eq!(kind(Pos::ORIGIN, 0, 0, 0), BlockErrorKind::ZeroSize);
        assert_eq!(kind(Pos::new(0, -1), 8, 0, 2), BlockErrorKind::NegativePosition);
        assert_eq!(kind(Pos::ORIGIN, 8, 3, 2), BlockErrorKind::DepthExceedsMax);
        assert_eq!(kind(Pos::ORIGIN, 3, 0, 2), BlockErrorKind::SizeTooSmall);
        assert_eq!(kind(Pos::ORIGIN, u32::MAX, 0, 40), BlockErrorKind::SizeTooSmall);
        assert!(Block::new(Pos::ORIGIN, 4, Color::REAL_RED, 0, 2).is_ok());
        assert!(Block::new(Pos::ORIGIN, 1, Color::REAL_RED, 3, 3).is_ok());
    }

    #[test]
    fn child_size_rounds_half_to_even() {
        let size = |size| {
            Block::new(Pos::ORIGIN, size, Color::BLACK, 0, 1)
                .unwrap()
                .child_size()
        };
        assert_eq!(size(750), 375);
        assert_eq!(size(375), 188);
        assert_eq!(size(5), 2);
        assert_eq!(size(3), 2);
        assert_eq!(size(2), 1);
    }

    #[test]
    fn child_positions() {
        let block = Block::new(Pos::new(2, 2), 4, Color::BLACK, 0, 2).unwrap();
        let positions = block.child_positions();
        assert_eq!(positions.ne, Pos::new(4, 2));
        assert_eq!(positions.nw, Pos::new(2, 2));
        assert_eq!(positions.sw, Pos::new(2, 4));
        assert_eq!(positions.se, Pos::new(4, 4));
    }

    #[test]
    fn equality() {
        let a = test_block! {"
            BR
            GY
        "};
        let b = test_block! {"
            BR
            GY
        "};
        let c = test_block! {"
            BR
            GB
        "};
        assert_eq!(a, b);
        assert_ne!(a, c);

        let leaf = Block::new(Pos::ORIGIN, 2, Color::PACIFIC_POINT, 0, 1).unwrap();
        assert_ne!(a, leaf);
        assert_ne!(leaf, a);
        assert_eq!(a.child(Quadrant::NW), b.child(Quadrant::NW));
        assert_ne!(a.child(Quadrant::NW), a.child(Quadrant::NE));
    }

    #[test]
    fn leaf_equality_checks_every_attribute() {
        let leaf = |position, size, color, depth, max_depth| {
            Block::new(position, size, color, depth, max_depth).unwrap()
        };
        let base = leaf(Pos::ORIGIN, 8, Color::REAL_RED, 0, 2);
        assert_eq!(base, leaf(Pos::ORIGIN, 8, Color::REAL_RED, 0, 2));
        assert_ne!(base, leaf(Pos::new(1, 0), 8, Color::REAL_RED, 0, 2));
        assert_ne!(base, leaf(Pos::ORIGIN, 9, Color::REAL_RED, 0, 2));
        assert_ne!(base, leaf(Pos::ORIGIN, 8, Color::OLD_OLIVE, 0, 2));
        assert_ne!(base, leaf(Pos::ORIGIN, 8, Color::REAL_RED, 1, 2));
        assert_ne!(base, leaf(Pos::ORIGIN, 8, Color::REAL_RED, 0, 3));
    }

    #[test]
    fn clone_is_deep() {
        let original = test_block! {"
            BRGY
            RRGG
            YYBB
            GBRY
        "};
        let mut copy = original.clone();
        assert_eq!(copy, original);

        let leaf = copy
            .child_mut(Quadrant::SE)
            .and_then(|child| child.child_mut(Quadrant::NW))
            .unwrap();
        assert!(leaf.recolor(Color::WHITE));
        assert_ne!(copy, original);
        assert_eq!(
            original
                .child(Quadrant::SE)
                .and_then(|child| child.child(Quadrant::NW))
                .and_then(Block::color),
            Some(Color::PACIFIC_POINT)
        );
    }

    #[test]
    fn inconsistent_trees_are_detected() {
        let mut block = test_block! {"
            BR
            GY
        "};
        assert!(block.is_consistent());
        block.child_mut(Quadrant::NE).unwrap().position = Pos::new(0, 0);
        assert!(!block.is_consistent());
    }
}
