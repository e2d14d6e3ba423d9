use std::fmt::Display;

use rand::distr::{Distribution, StandardUniform};
use rand::seq::IndexedRandom;
use rand::Rng;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
/// An rgb triple
///
/// Only the colors in [`Color::PALETTE`] are handed out by random subdivision
/// and goal generation, but any triple can be stored in a block.
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}
impl Color {
    pub const PACIFIC_POINT: Self = Self::rgb(1, 128, 181);
    pub const REAL_RED: Self = Self::rgb(199, 44, 58);
    pub const OLD_OLIVE: Self = Self::rgb(138, 151, 71);
    pub const DAFFODIL_DELIGHT: Self = Self::rgb(255, 211, 92);
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// the colors blocks are painted with
    pub const PALETTE: [Self; 4] = [
        Self::PACIFIC_POINT,
        Self::REAL_RED,
        Self::OLD_OLIVE,
        Self::DAFFODIL_DELIGHT,
    ];

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn is_in_palette(self) -> bool {
        Self::PALETTE.contains(&self)
    }

    /// `None` for colors that don't have a name, only meant for diagnostics
    pub fn name(self) -> Option<&'static str> {
        match self {
            Self::PACIFIC_POINT => Some("Pacific Point"),
            Self::REAL_RED => Some("Real Red"),
            Self::OLD_OLIVE => Some("Old Olive"),
            Self::DAFFODIL_DELIGHT => Some("Daffodil Delight"),
            Self::WHITE => Some("White"),
            Self::BLACK => Some("Black"),
            _ => None,
        }
    }

    /// single character used by the test format and grid printing
    pub fn symbol(self) -> char {
        match self {
            Self::PACIFIC_POINT => 'B',
            Self::REAL_RED => 'R',
            Self::OLD_OLIVE => 'G',
            Self::DAFFODIL_DELIGHT => 'Y',
            Self::WHITE => 'W',
            Self::BLACK => 'K',
            _ => '?',
        }
    }
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'B' => Some(Self::PACIFIC_POINT),
            'R' => Some(Self::REAL_RED),
            'G' => Some(Self::OLD_OLIVE),
            'Y' => Some(Self::DAFFODIL_DELIGHT),
            'W' => Some(Self::WHITE),
            'K' => Some(Self::BLACK),
            _ => None,
        }
    }
}
impl Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => write!(f, "rgb({}, {}, {})", self.r, self.g, self.b),
        }
    }
}

/// uniform over [`Color::PALETTE`]
impl Distribution<Color> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Color {
        let index = rng.random_range(0..Color::PALETTE.len());
        Color::PALETTE[index]
    }
}

/// `count` distinct palette colors in random order, or `None` if the palette is too small
pub(crate) fn distinct_colors<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Option<Vec<Color>> {
    if count > Color::PALETTE.len() {
        return None;
    }
    Some(Color::PALETTE.choose_multiple(rng, count).copied().collect())
}
