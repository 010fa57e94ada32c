//! Pixel layout of cards and canvases
//!
//! This module contains:
//! - Cell traversal and per-card composition
//! - Canvas sizing and side-by-side card placement

/// Card grid traversal and composition
pub mod card;
/// Canvas sizing and multi-card composition
pub mod canvas;

pub use canvas::build_canvas;
pub use card::{CellPosition, compose_card};
