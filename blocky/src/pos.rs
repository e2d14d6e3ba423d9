//! Raw coordinate type shared by blocks and their children

use std::fmt::Display;
use std::ops::{Add, Neg, Sub};

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
/// upper left corner of a block, or a translation between two corners
///
/// x increases to the east
/// y increases to the south
pub struct Pos {
    pub x: i64,
    pub y: i64,
}
impl Pos {
    pub const ORIGIN: Self = Self::new(0, 0);

    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
    pub fn is_non_negative(self) -> bool {
        self.x >= 0 && self.y >= 0
    }
    pub fn map(self, mut f: impl FnMut(i64) -> i64) -> Self {
        Self {
            x: f(self.x),
            y: f(self.y),
        }
    }
}
impl From<(i64, i64)> for Pos {
    fn from((x, y): (i64, i64)) -> Self {
        Self::new(x, y)
    }
}
impl Display for Pos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
impl Add for Pos {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}
impl Sub for Pos {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}
impl Neg for Pos {
    type Output = Self;
    fn neg(self) -> Self::Output {
        Self {
            x: -self.x,
            y: -self.y,
        }
    }
}
