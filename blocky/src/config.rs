use crate::error::BlockError;

/// Shape of a randomly generated board
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct BoardConfig {
    /// deepest level blocks can be subdivided to
    pub max_depth: u8,
    /// side length of the root block
    pub size: u32,
    /// a block at depth `d` is subdivided with probability `exp(-subdivide_decay * d)`
    pub subdivide_decay: f64,
}
impl BoardConfig {
    pub const DEFAULT_MAX_DEPTH: u8 = 3;
    pub const DEFAULT_SIZE: u32 = 750;
    pub const DEFAULT_SUBDIVIDE_DECAY: f64 = 0.25;

    pub fn new(max_depth: u8, size: u32) -> Self {
        Self {
            max_depth,
            size,
            ..Self::default()
        }
    }
    pub fn with_max_depth(self, max_depth: u8) -> Self {
        Self { max_depth, ..self }
    }
    pub fn with_size(self, size: u32) -> Self {
        Self { size, ..self }
    }
    pub fn with_subdivide_decay(self, subdivide_decay: f64) -> Self {
        Self {
            subdivide_decay,
            ..self
        }
    }

    pub fn validate(&self) -> Result<(), BlockError> {
        if !self.subdivide_decay.is_finite() || self.subdivide_decay < 0.0 {
            return Err(BlockError::invalid_decay(self.subdivide_decay));
        }
        if self.size == 0 {
            return Err(BlockError::zero_size());
        }
        match 1u32.checked_shl(u32::from(self.max_depth)) {
            Some(min_size) if self.size >= min_size => Ok(()),
            _ => Err(BlockError::size_too_small(self.size, self.max_depth)),
        }
    }

    /// probability that a new block at `depth` is subdivided again
    pub(crate) fn subdivide_chance(&self, depth: u8) -> f64 {
        (-self.subdivide_decay * f64::from(depth)).exp()
    }
}
impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            max_depth: Self::DEFAULT_MAX_DEPTH,
            size: Self::DEFAULT_SIZE,
            subdivide_decay: Self::DEFAULT_SUBDIVIDE_DECAY,
        }
    }
}
