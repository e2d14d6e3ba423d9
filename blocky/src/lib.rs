// lints
#![warn(clippy::pedantic)]
#![allow(
    clippy::must_use_candidate,
    clippy::return_self_not_must_use,
    clippy::items_after_statements,
    clippy::module_name_repetitions,
    clippy::manual_range_contains,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

mod block;
mod color;
mod config;
mod error;
mod goal;
mod grid;
mod pos;
mod quad;
mod ops {
    mod display;
    mod generate;
    mod locate;
    mod merge;
    mod position;
    mod recolor;
    mod rotate;
    mod subdivide;
    mod test_format;

    #[cfg(test)]
    mod properties;

    pub use rotate::*;
    pub use test_format::*;
}

pub use block::*;
pub use color::Color;
pub use config::BoardConfig;
pub use error::{BlockError, BlockErrorKind};
pub use goal::*;
pub use grid::Grid;
pub use ops::*;
pub use pos::Pos;
pub use quad::*;
