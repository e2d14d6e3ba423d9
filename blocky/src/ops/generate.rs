use rand::Rng;
use tracing::{debug, trace_span};

use crate::{Block, BlockError, BoardConfig, Content, Pos};

impl Block {
    /// A random board at the origin.
    ///
    /// The root is always subdivided if `max_depth` allows it. After that each new block
    /// at depth `d` is subdivided again with probability [`BoardConfig::subdivide_decay`]
    /// scaled as `exp(-decay * d)`.
    pub fn generate<R: Rng + ?Sized>(config: &BoardConfig, rng: &mut R) -> Result<Block, BlockError> {
        config.validate()?;
        let _span = trace_span!("generate", max_depth = config.max_depth, size = config.size).entered();

        let mut board = Block::new(Pos::ORIGIN, config.size, rng.random(), 0, config.max_depth)?;
        if board.subdivide(rng) {
            if let Content::Inner(children) = &mut board.content {
                for child in children.iter_mut() {
                    child.subdivide_randomly(config, rng);
                }
            }
        }
        debug!(leaves = board.leaf_count(), "generated board");
        Ok(board)
    }

    fn subdivide_randomly<R: Rng + ?Sized>(&mut self, config: &BoardConfig, rng: &mut R) {
        if !self.can_subdivide() || !rng.random_bool(config.subdivide_chance(self.depth)) {
            return;
        }
        if self.subdivide(rng) {
            if let Content::Inner(children) = &mut self.content {
                for child in children.iter_mut() {
                    child.subdivide_randomly(config, rng);
                }
            }
        }
    }

    pub fn leaf_count(&self) -> usize {
        match &self.content {
            Content::Leaf(_) => 1,
            Content::Inner(children) => children.iter().map(Block::leaf_count).sum(),
        }
    }
}
