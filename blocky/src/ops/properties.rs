use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::EnvFilter;

use crate::{Axis, Block, BoardConfig, Color, Content, Goal, Pos, Rotation};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init();
}

fn board(seed: u64, max_depth: u8, size: u32) -> Block {
    init_tracing();
    let mut rng = StdRng::seed_from_u64(seed);
    Block::generate(&BoardConfig::new(max_depth, size), &mut rng).unwrap()
}

fn leaves(block: &Block, out: &mut Vec<(Pos, u32, Color)>) {
    match block.content() {
        Content::Leaf(color) => out.push((block.position(), block.size(), *color)),
        Content::Inner(children) => children.iter().for_each(|child| leaves(child, out)),
    }
}

fn rotation() -> impl Strategy<Value = Rotation> {
    prop_oneof![Just(Rotation::Clockwise), Just(Rotation::CounterClockwise)]
}
fn axis() -> impl Strategy<Value = Axis> {
    prop_oneof![Just(Axis::Horizontal), Just(Axis::Vertical)]
}

proptest! {
    #[test]
    fn four_turns_are_identity(seed in any::<u64>(), max_depth in 1u8..5, size in 16u32..2000, rotation in rotation()) {
        let original = board(seed, max_depth, size);
        let mut block = original.clone();
        for _ in 0..4 {
            prop_assert!(block.rotate(rotation));
            prop_assert!(block.is_consistent());
        }
        prop_assert_eq!(block, original);
    }

    #[test]
    fn turn_then_inverse_is_identity(seed in any::<u64>(), max_depth in 1u8..5, size in 16u32..2000, rotation in rotation()) {
        let original = board(seed, max_depth, size);
        let mut block = original.clone();
        prop_assert!(block.rotate(rotation));
        prop_assert!(block.rotate(rotation.inverse()));
        prop_assert_eq!(block, original);
    }

    #[test]
    fn swap_twice_is_identity(seed in any::<u64>(), max_depth in 1u8..5, size in 16u32..2000, axis in axis()) {
        let original = board(seed, max_depth, size);
        let mut block = original.clone();
        prop_assert!(block.swap(axis));
        prop_assert!(block.is_consistent());
        prop_assert!(block.swap(axis));
        prop_assert_eq!(block, original);
    }

    #[test]
    fn clone_is_independent(seed in any::<u64>(), max_depth in 1u8..5, size in 16u32..2000) {
        let original = board(seed, max_depth, size);
        let before = original.flatten();
        let mut copy = original.clone();
        prop_assert_eq!(&copy, &original);
        prop_assert!(copy.rotate(Rotation::Clockwise));
        prop_assert!(copy.reposition(Pos::new(1, 1)));
        prop_assert_eq!(original.flatten(), before);
        prop_assert_eq!(original.position(), Pos::ORIGIN);
    }

    #[test]
    fn reposition_moves_every_leaf(seed in any::<u64>(), max_depth in 0u8..5, size in 16u32..2000, x in 0i64..5000, y in 0i64..5000) {
        let mut block = board(seed, max_depth, size);
        let mut before = Vec::new();
        leaves(&block, &mut before);
        prop_assert!(block.reposition(Pos::new(x, y)));
        prop_assert!(block.is_consistent());
        let mut after = Vec::new();
        leaves(&block, &mut after);
        let delta = Pos::new(x, y);
        let moved: Vec<_> = before.into_iter().map(|(pos, size, color)| (pos + delta, size, color)).collect();
        prop_assert_eq!(after, moved);
    }

    #[test]
    fn subdivide_keeps_invariants(seed in any::<u64>(), max_depth in 1u8..5, size in 16u32..2000, x in 0u32..2000, y in 0u32..2000, levels in 0u8..5) {
        let mut block = board(seed, max_depth, size);
        let location = Pos::new(i64::from(x % size), i64::from(y % size));
        let target = block.block_at_mut(location, levels).unwrap();
        let could = target.can_subdivide();
        let mut rng = StdRng::seed_from_u64(seed);
        prop_assert_eq!(target.subdivide(&mut rng), could);
        prop_assert!(block.is_consistent());
    }

    #[test]
    fn flatten_covers_board(seed in any::<u64>(), max_depth in 0u8..5, size in 16u32..2000) {
        let block = board(seed, max_depth, size);
        let grid = block.flatten();
        let side = 1usize << max_depth;
        prop_assert_eq!(grid.side(), side);
        let counted: usize = Color::PALETTE.into_iter().map(|color| grid.count(color)).sum();
        prop_assert_eq!(counted, side * side);
        for color in Color::PALETTE {
            let perimeter = Goal::perimeter(color).score(&block) as usize;
            let blob = Goal::blob(color).score(&block) as usize;
            prop_assert!(perimeter <= 4 * side);
            prop_assert!(blob <= grid.count(color));
            prop_assert_eq!(blob == 0, grid.count(color) == 0);
        }
    }
}
