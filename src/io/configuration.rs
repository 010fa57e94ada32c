//! Generator constants and the runtime configuration built from them

use crate::io::error::{Result, invalid_parameter};

// Cell geometry: every image is resized to exactly this size
/// Width of each grid cell in pixels
pub const CELL_WIDTH: u32 = 190;
/// Height of each grid cell in pixels
pub const CELL_HEIGHT: u32 = 165;

/// Cells along each side of a card
pub const CARD_SIZE: u32 = 5;

/// Number of bingo cards laid out on each output image
pub const CARDS_PER_OUTPUT: u32 = 2;
/// Horizontal space between adjacent cards in pixels
pub const CARD_GAP: u32 = 20;

/// Fill color for the canvas behind and between cards
pub const BACKGROUND_COLOR: [u8; 3] = [255, 255, 255];

// Directories are relative to the working directory
/// Directory holding the source images
pub const INPUT_DIR: &str = "input";
/// Directory receiving generated cards
pub const OUTPUT_DIR: &str = "output";

/// Prefix of generated file names (`<prefix>-<index>.png`)
pub const OUTPUT_PREFIX: &str = "bingo-card";
/// Extension of generated files; canvases are always PNG encoded
pub const OUTPUT_EXTENSION: &str = "png";

/// Reserved file name of the center-cell image
pub const FREE_SPACE_IMAGE_NAME: &str = "freespace.png";

/// Extensions (lowercase) accepted as input images
pub const IMAGE_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];

/// Number of output images produced when no count is given
pub const DEFAULT_ITERATIONS: usize = 5;

// Progress bar display settings
/// Width of the progress bar in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;

/// Tunable layout of generated canvases
///
/// `Default` reproduces the compile-time constants above; tests and benches
/// shrink the cell size to keep fixtures small.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Width of each grid cell in pixels
    pub cell_width: u32,
    /// Height of each grid cell in pixels
    pub cell_height: u32,
    /// Number of cards per canvas
    pub cards_per_output: u32,
    /// Space between adjacent cards in pixels
    pub card_gap: u32,
    /// Canvas fill color
    pub background: [u8; 3],
    /// File name of the center-cell image inside the input directory
    pub free_space_name: String,
    /// Prefix of generated file names
    pub output_prefix: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            cell_width: CELL_WIDTH,
            cell_height: CELL_HEIGHT,
            cards_per_output: CARDS_PER_OUTPUT,
            card_gap: CARD_GAP,
            background: BACKGROUND_COLOR,
            free_space_name: FREE_SPACE_IMAGE_NAME.to_string(),
            output_prefix: OUTPUT_PREFIX.to_string(),
        }
    }
}

impl GeneratorConfig {
    /// Width of one card in pixels
    pub const fn card_width(&self) -> u32 {
        self.cell_width * CARD_SIZE
    }

    /// Height of one card in pixels
    pub const fn card_height(&self) -> u32 {
        self.cell_height * CARD_SIZE
    }

    /// Non-center cells on a single card
    pub const fn cells_per_card() -> usize {
        (CARD_SIZE * CARD_SIZE - 1) as usize
    }

    /// Distinct images needed to fill every card on one canvas
    pub const fn cells_per_output(&self) -> usize {
        self.cards_per_output as usize * Self::cells_per_card()
    }

    /// Check that the layout describes a non-empty canvas
    ///
    /// # Errors
    ///
    /// Returns an error if a cell dimension or the card count is zero, or if
    /// the free-space name or output prefix is empty
    pub fn validate(&self) -> Result<()> {
        if self.cell_width == 0 {
            return Err(invalid_parameter(
                "cell_width",
                &self.cell_width,
                &"must be positive",
            ));
        }
        if self.cell_height == 0 {
            return Err(invalid_parameter(
                "cell_height",
                &self.cell_height,
                &"must be positive",
            ));
        }
        if self.cards_per_output == 0 {
            return Err(invalid_parameter(
                "cards_per_output",
                &self.cards_per_output,
                &"at least one card is required",
            ));
        }
        if self.free_space_name.is_empty() {
            return Err(invalid_parameter(
                "free_space_name",
                &self.free_space_name,
                &"must not be empty",
            ));
        }
        if self.output_prefix.is_empty() {
            return Err(invalid_parameter(
                "output_prefix",
                &self.output_prefix,
                &"must not be empty",
            ));
        }
        Ok(())
    }
}
