use tracing::trace;

use crate::{Block, Content};

/// Direction of a quarter turn.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Rotation {
    /// upper-right moves to lower-right, lower-right to lower-left and so on
    Clockwise,
    CounterClockwise,
}
impl Rotation {
    pub fn inverse(self) -> Self {
        match self {
            Self::Clockwise => Self::CounterClockwise,
            Self::CounterClockwise => Self::Clockwise,
        }
    }
}

/// Which halves of a block [`Block::swap`] exchanges.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Axis {
    /// the left and right halves trade places (mirrored across the vertical center line)
    Horizontal,
    /// the upper and lower halves trade places (mirrored across the horizontal center line)
    Vertical,
}

impl Block {
    /// Turns this block and every descendant a quarter turn.
    ///
    /// Returns false for a leaf, which has nothing to turn.
    #[must_use]
    pub fn rotate(&mut self, rotation: Rotation) -> bool {
        if self.is_leaf() {
            trace!(depth = self.depth, ?rotation, "rotate rejected on leaf");
            return false;
        }
        self.rotate_subtree(rotation);
        true
    }
    fn rotate_subtree(&mut self, rotation: Rotation) {
        let Content::Inner(children) = &mut self.content else {
            return;
        };
        match rotation {
            Rotation::Clockwise => children.rotate_cw(),
            Rotation::CounterClockwise => children.rotate_ccw(),
        }
        self.settle_children();
        if let Content::Inner(children) = &mut self.content {
            for child in children.iter_mut() {
                child.rotate_subtree(rotation);
            }
        }
    }

    /// Exchanges the halves of this block given by `axis`.
    ///
    /// Only the four children move, their own arrangement is kept.
    /// Returns false for a leaf.
    #[must_use]
    pub fn swap(&mut self, axis: Axis) -> bool {
        let Content::Inner(children) = &mut self.content else {
            trace!(depth = self.depth, ?axis, "swap rejected on leaf");
            return false;
        };
        match axis {
            Axis::Horizontal => children.flip_h(),
            Axis::Vertical => children.flip_v(),
        }
        self.settle_children();
        true
    }
}

#[cfg(test)]
mod test {
    use super::{Axis, Rotation};
    use crate::{test_block, test_grid, Block, Color, Pos, Quadrant};

    #[test]
    fn rotate_leaf() {
        let mut block = Block::new(Pos::ORIGIN, 4, Color::REAL_RED, 0, 2).unwrap();
        assert!(!block.rotate(Rotation::Clockwise));
        assert!(!block.rotate(Rotation::CounterClockwise));
        assert_eq!(block.color(), Some(Color::REAL_RED));
    }

    #[test]
    fn rotate_one_level() {
        let mut block = test_block! {"
            BR
            GY
        "};
        assert!(block.rotate(Rotation::Clockwise));
        assert!(block.is_consistent());
        assert_eq!(
            block.flatten(),
            test_grid! {"
                GB
                YR
            "}
        );
        assert!(block.rotate(Rotation::CounterClockwise));
        assert!(block.rotate(Rotation::CounterClockwise));
        assert_eq!(
            block.flatten(),
            test_grid! {"
                RY
                BG
            "}
        );
    }

    #[test]
    fn rotate_recurses_into_children() {
        let mut block = test_block! {"
            BRGY
            RRGG
            YYBB
            GBRY
        "};
        assert!(block.rotate(Rotation::Clockwise));
        assert!(block.is_consistent());
        assert_eq!(
            block.flatten(),
            test_grid! {"
                GYRB
                BYRR
                RBGG
                YBGY
            "}
        );
    }

    #[test]
    fn rotate_keeps_shallow_children() {
        let mut block = Block::new(Pos::new(10, 20), 8, Color::BLACK, 0, 2).unwrap();
        assert!(block.subdivide_with(|q| match q {
            Quadrant::NE => Color::REAL_RED,
            Quadrant::NW => Color::PACIFIC_POINT,
            Quadrant::SW => Color::OLD_OLIVE,
            Quadrant::SE => Color::DAFFODIL_DELIGHT,
        }));
        assert!(block
            .child_mut(Quadrant::NE)
            .unwrap()
            .subdivide_with(|_| Color::WHITE));
        assert!(block.rotate(Rotation::CounterClockwise));
        assert!(block.is_consistent());
        let nw = block.child(Quadrant::NW).unwrap();
        assert!(!nw.is_leaf());
        assert_eq!(nw.position(), Pos::new(10, 20));
        assert_eq!(
            block.child(Quadrant::SE).and_then(Block::color),
            Some(Color::OLD_OLIVE)
        );
    }

    #[test]
    fn swap_leaf() {
        let mut block = Block::new(Pos::ORIGIN, 4, Color::REAL_RED, 0, 2).unwrap();
        assert!(!block.swap(Axis::Horizontal));
        assert!(!block.swap(Axis::Vertical));
    }

    #[test]
    fn swap_does_not_recurse() {
        let original = test_block! {"
            BRGY
            RRGG
            YYBB
            GBRY
        "};
        let mut block = original.clone();
        assert!(block.swap(Axis::Horizontal));
        assert!(block.is_consistent());
        assert_eq!(
            block.flatten(),
            test_grid! {"
                GYBR
                GGRR
                BBYY
                RYGB
            "}
        );

        let mut block = original;
        assert!(block.swap(Axis::Vertical));
        assert!(block.is_consistent());
        assert_eq!(
            block.flatten(),
            test_grid! {"
                YYBB
                GBRY
                BRGY
                RRGG
            "}
        );
    }

    #[test]
    fn swap_twice_is_identity() {
        let original = test_block! {"
            BRGY
            RRGG
            YYBB
            GBRY
        "};
        for axis in [Axis::Horizontal, Axis::Vertical] {
            let mut block = original.clone();
            assert!(block.swap(axis));
            assert_ne!(block, original);
            assert!(block.swap(axis));
            assert_eq!(block, original);
        }
    }

    #[test]
    fn two_swaps_are_half_turn() {
        let original = test_block! {"
            BR
            GY
        "};
        let mut swapped = original.clone();
        assert!(swapped.swap(Axis::Horizontal));
        assert!(swapped.swap(Axis::Vertical));
        let mut rotated = original;
        assert!(rotated.rotate(Rotation::Clockwise));
        assert!(rotated.rotate(Rotation::Clockwise));
        assert_eq!(swapped, rotated);
    }
}
