//! Randomized bingo card image generation
//!
//! Images sampled from an input directory are tiled into 5x5 cards with a
//! fixed free-space image in the center, and several cards are laid out side
//! by side on each output canvas.

#![forbid(unsafe_code)]

/// Random sampling and per-iteration generation
pub mod generation;
/// Input/output operations, configuration, and error handling
pub mod io;
/// Card and canvas pixel layout
pub mod layout;

pub use io::error::{BingoError, Result};
