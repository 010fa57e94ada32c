//! Card grid traversal, cell geometry, and card composition

use crate::io::configuration::{CARD_SIZE, GeneratorConfig};
use crate::io::error::{BingoError, Result};
use crate::io::image::load_cell_image;
use image::RgbImage;
use image::imageops;
use std::path::Path;

/// Column and row of the free-space cell
pub const FREE_SPACE_INDEX: u32 = CARD_SIZE / 2;

/// Zero-based grid coordinates of one cell on a card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellPosition {
    /// Horizontal index, 0 is leftmost
    pub column: u32,
    /// Vertical index, 0 is topmost
    pub row: u32,
}

impl CellPosition {
    /// Whether this cell holds the free-space image
    pub const fn is_free_space(self) -> bool {
        self.column == FREE_SPACE_INDEX && self.row == FREE_SPACE_INDEX
    }

    /// Top-left pixel of this cell for a card whose top-left corner is `card_origin`
    pub const fn origin(self, config: &GeneratorConfig, card_origin: (u32, u32)) -> (u32, u32) {
        (
            card_origin.0 + self.column * config.cell_width,
            card_origin.1 + self.row * config.cell_height,
        )
    }
}

/// All cells of a card in fill order
///
/// Columns are walked left to right and each column top to bottom, so
/// sampled images fill the first column before moving on.
pub fn cell_positions() -> impl Iterator<Item = CellPosition> {
    (0..CARD_SIZE).flat_map(|column| (0..CARD_SIZE).map(move |row| CellPosition { column, row }))
}

/// Paste one card into `canvas` with its top-left corner at `card_origin`
///
/// The center cell receives `free_space`, which must already be sized to one
/// cell. Every other cell consumes the next path from `images`; each image is
/// decoded, resized, pasted, and dropped before the next one is opened.
/// Cells abut without gaps.
///
/// # Errors
///
/// Returns an error if:
/// - `images` runs out before every non-center cell is filled
/// - An image cannot be decoded
pub fn compose_card<I, P>(
    canvas: &mut RgbImage,
    config: &GeneratorConfig,
    card_origin: (u32, u32),
    free_space: &RgbImage,
    images: &mut I,
) -> Result<()>
where
    I: Iterator<Item = P>,
    P: AsRef<Path>,
{
    for position in cell_positions() {
        let (x, y) = position.origin(config, card_origin);

        if position.is_free_space() {
            imageops::replace(canvas, free_space, i64::from(x), i64::from(y));
            continue;
        }

        let path = images.next().ok_or_else(|| BingoError::SampleExhausted {
            needed: GeneratorConfig::cells_per_card(),
        })?;
        let cell = load_cell_image(path.as_ref(), config.cell_width, config.cell_height)?;
        imageops::replace(canvas, &cell, i64::from(x), i64::from(y));
    }

    Ok(())
}
