//! Raw types to name indicies to what would otherwise be fixed length arrays

use std::ops::{Index, IndexMut};

use crate::pos::Pos;

/// One of the four children of a subdivided block.
///
/// The declaration order is the canonical child order:
/// upper-right, upper-left, lower-left, lower-right.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Quadrant {
    NE,
    NW,
    SW,
    SE,
}
impl Quadrant {
    pub const ALL: [Quadrant; 4] = [Self::NE, Self::NW, Self::SW, Self::SE];

    pub fn index(self) -> usize {
        match self {
            Self::NE => 0,
            Self::NW => 1,
            Self::SW => 2,
            Self::SE => 3,
        }
    }
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
    pub fn is_north(self) -> bool {
        matches!(self, Self::NE | Self::NW)
    }
    pub fn is_west(self) -> bool {
        matches!(self, Self::NW | Self::SW)
    }
    /// offset of this quadrant's upper left corner from the parent's
    pub fn offset(self, child_size: u32) -> Pos {
        let d = i64::from(child_size);
        Pos::new(
            if self.is_west() { 0 } else { d },
            if self.is_north() { 0 } else { d },
        )
    }
    /// the quadrant containing `pos`, given relative to the parent's upper left corner
    pub fn from_offset(pos: Pos, child_size: u32) -> Self {
        let d = i64::from(child_size);
        match (pos.x < d, pos.y < d) {
            (false, true) => Self::NE,
            (true, true) => Self::NW,
            (true, false) => Self::SW,
            (false, false) => Self::SE,
        }
    }
    /// where this quadrant ends up after a quarter turn clockwise
    pub fn clockwise(self) -> Self {
        match self {
            Self::NE => Self::SE,
            Self::SE => Self::SW,
            Self::SW => Self::NW,
            Self::NW => Self::NE,
        }
    }
    pub fn counter_clockwise(self) -> Self {
        match self {
            Self::NE => Self::NW,
            Self::NW => Self::SW,
            Self::SW => Self::SE,
            Self::SE => Self::NE,
        }
    }
    /// exchanges east with west
    pub fn mirror_h(self) -> Self {
        match self {
            Self::NE => Self::NW,
            Self::NW => Self::NE,
            Self::SW => Self::SE,
            Self::SE => Self::SW,
        }
    }
    /// exchanges north with south
    pub fn mirror_v(self) -> Self {
        match self {
            Self::NE => Self::SE,
            Self::NW => Self::SW,
            Self::SW => Self::NW,
            Self::SE => Self::NE,
        }
    }

    pub fn iter_all() -> impl ExactSizeIterator<Item = Quadrant> {
        Self::ALL.into_iter()
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Quad<T> {
    pub ne: T,
    pub nw: T,
    pub sw: T,
    pub se: T,
}
impl<T> Quad<T> {
    pub fn from_fn(mut f: impl FnMut(Quadrant) -> T) -> Self {
        Quad {
            ne: f(Quadrant::NE),
            nw: f(Quadrant::NW),
            sw: f(Quadrant::SW),
            se: f(Quadrant::SE),
        }
    }
    pub fn as_ref(&self) -> Quad<&T> {
        Quad {
            ne: &self.ne,
            nw: &self.nw,
            sw: &self.sw,
            se: &self.se,
        }
    }
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        Quadrant::iter_all().map(|q| &self[q])
    }
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut T> {
        [&mut self.ne, &mut self.nw, &mut self.sw, &mut self.se].into_iter()
    }
    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> Quad<U> {
        Quad {
            ne: f(self.ne),
            nw: f(self.nw),
            sw: f(self.sw),
            se: f(self.se),
        }
    }
    pub fn index_map<U>(self, mut f: impl FnMut(Quadrant, T) -> U) -> Quad<U> {
        Quad {
            ne: f(Quadrant::NE, self.ne),
            nw: f(Quadrant::NW, self.nw),
            sw: f(Quadrant::SW, self.sw),
            se: f(Quadrant::SE, self.se),
        }
    }
    /// moves each value to the quadrant given by [`Quadrant::clockwise`]
    pub fn rotate_cw(&mut self) {
        std::mem::swap(&mut self.ne, &mut self.nw);
        std::mem::swap(&mut self.nw, &mut self.sw);
        std::mem::swap(&mut self.sw, &mut self.se);
    }
    /// moves each value to the quadrant given by [`Quadrant::counter_clockwise`]
    pub fn rotate_ccw(&mut self) {
        std::mem::swap(&mut self.ne, &mut self.se);
        std::mem::swap(&mut self.se, &mut self.sw);
        std::mem::swap(&mut self.sw, &mut self.nw);
    }
    /// moves each value to the quadrant given by [`Quadrant::mirror_h`]
    pub fn flip_h(&mut self) {
        std::mem::swap(&mut self.ne, &mut self.nw);
        std::mem::swap(&mut self.sw, &mut self.se);
    }
    /// moves each value to the quadrant given by [`Quadrant::mirror_v`]
    pub fn flip_v(&mut self) {
        std::mem::swap(&mut self.ne, &mut self.se);
        std::mem::swap(&mut self.nw, &mut self.sw);
    }
}
impl<T> IntoIterator for Quad<T> {
    type Item = T;
    type IntoIter = std::array::IntoIter<T, 4>;
    fn into_iter(self) -> Self::IntoIter {
        [self.ne, self.nw, self.sw, self.se].into_iter()
    }
}
impl<T> Index<Quadrant> for Quad<T> {
    type Output = T;
    fn index(&self, index: Quadrant) -> &Self::Output {
        match index {
            Quadrant::NE => &self.ne,
            Quadrant::NW => &self.nw,
            Quadrant::SW => &self.sw,
            Quadrant::SE => &self.se,
        }
    }
}
impl<T> IndexMut<Quadrant> for Quad<T> {
    fn index_mut(&mut self, index: Quadrant) -> &mut Self::Output {
        match index {
            Quadrant::NE => &mut self.ne,
            Quadrant::NW => &mut self.nw,
            Quadrant::SW => &mut self.sw,
            Quadrant::SE => &mut self.se,
        }
    }
}
