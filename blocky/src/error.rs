use std::error::Error;
use std::fmt::{Debug, Display};

use crate::pos::Pos;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BlockErrorKind {
    ZeroSize,
    NegativePosition,
    DepthExceedsMax,
    SizeTooSmall,
    TooManyGoals,
    InvalidDecay,
    UnevenGrid,
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum BlockErrorData {
    ZeroSize,
    NegativePosition { position: Pos },
    DepthExceedsMax { depth: u8, max_depth: u8 },
    SizeTooSmall { size: u32, levels: u8 },
    TooManyGoals { requested: usize, available: usize },
    InvalidDecay { decay: f64 },
    UnevenGrid { side: usize },
}

/// A block, board or set of goals was requested with arguments that can't hold the invariants
#[derive(Clone, PartialEq)]
pub struct BlockError(Box<BlockErrorData>);
impl BlockError {
    fn new(data: BlockErrorData) -> Self {
        Self(Box::new(data))
    }
    pub(crate) fn zero_size() -> Self {
        Self::new(BlockErrorData::ZeroSize)
    }
    pub(crate) fn negative_position(position: Pos) -> Self {
        Self::new(BlockErrorData::NegativePosition { position })
    }
    pub(crate) fn depth_exceeds_max(depth: u8, max_depth: u8) -> Self {
        Self::new(BlockErrorData::DepthExceedsMax { depth, max_depth })
    }
    pub(crate) fn size_too_small(size: u32, levels: u8) -> Self {
        Self::new(BlockErrorData::SizeTooSmall { size, levels })
    }
    pub(crate) fn too_many_goals(requested: usize, available: usize) -> Self {
        Self::new(BlockErrorData::TooManyGoals {
            requested,
            available,
        })
    }
    pub(crate) fn invalid_decay(decay: f64) -> Self {
        Self::new(BlockErrorData::InvalidDecay { decay })
    }
    pub(crate) fn uneven_grid(side: usize) -> Self {
        Self::new(BlockErrorData::UnevenGrid { side })
    }

    pub fn kind(&self) -> BlockErrorKind {
        match *self.0 {
            BlockErrorData::ZeroSize => BlockErrorKind::ZeroSize,
            BlockErrorData::NegativePosition { .. } => BlockErrorKind::NegativePosition,
            BlockErrorData::DepthExceedsMax { .. } => BlockErrorKind::DepthExceedsMax,
            BlockErrorData::SizeTooSmall { .. } => BlockErrorKind::SizeTooSmall,
            BlockErrorData::TooManyGoals { .. } => BlockErrorKind::TooManyGoals,
            BlockErrorData::InvalidDecay { .. } => BlockErrorKind::InvalidDecay,
            BlockErrorData::UnevenGrid { .. } => BlockErrorKind::UnevenGrid,
        }
    }
}
impl Debug for BlockError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("BlockError").field(&self.0).finish()
    }
}
impl Display for BlockError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self.0 {
            BlockErrorData::ZeroSize => write!(f, "Blocks must have a positive size"),
            BlockErrorData::NegativePosition { position } => {
                write!(f, "Block position {position} has a negative coordinate")
            }
            BlockErrorData::DepthExceedsMax { depth, max_depth } => {
                write!(f, "Block depth {depth} is deeper than max depth {max_depth}")
            }
            BlockErrorData::SizeTooSmall { size, levels } => write!(
                f,
                "Block size {size} can't be subdivided {levels} more times, needs at least 2^{levels}"
            ),
            BlockErrorData::TooManyGoals {
                requested,
                available,
            } => write!(
                f,
                "Requested {requested} goals but only {available} distinct colors are available"
            ),
            BlockErrorData::InvalidDecay { decay } => {
                write!(f, "Subdivide decay must be finite and non-negative, got {decay}")
            }
            BlockErrorData::UnevenGrid { side } => {
                write!(f, "Grid side {side} is not a power of two")
            }
        }
    }
}
impl Error for BlockError {}
