//! Canvas geometry and side-by-side card composition

use crate::io::configuration::GeneratorConfig;
use crate::io::error::Result;
use crate::layout::card::compose_card;
use image::{Rgb, RgbImage};
use std::path::Path;

/// Pixel size of a canvas holding every card plus the gaps between them
pub const fn canvas_dimensions(config: &GeneratorConfig) -> (u32, u32) {
    let cards = config.cards_per_output;
    (
        cards * config.card_width() + cards.saturating_sub(1) * config.card_gap,
        config.card_height(),
    )
}

/// Top-left pixel of the card at `card_index` (0 is leftmost)
pub const fn card_origin(config: &GeneratorConfig, card_index: u32) -> (u32, u32) {
    (card_index * (config.card_width() + config.card_gap), 0)
}

/// Canvas of the configured size filled with the background color
pub fn blank_canvas(config: &GeneratorConfig) -> RgbImage {
    let (width, height) = canvas_dimensions(config);
    RgbImage::from_pixel(width, height, Rgb(config.background))
}

/// Compose every card of one canvas from a shared sample
///
/// Cards are filled left to right and all draw from the same iterator over
/// `sample`, so no image appears twice on the canvas as long as the sample
/// itself is distinct.
///
/// # Errors
///
/// Returns an error if `sample` holds fewer images than the canvas needs or
/// an image cannot be decoded
pub fn build_canvas<P: AsRef<Path>>(
    config: &GeneratorConfig,
    free_space: &RgbImage,
    sample: &[P],
) -> Result<RgbImage> {
    let mut canvas = blank_canvas(config);
    let mut images = sample.iter();

    for card_index in 0..config.cards_per_output {
        compose_card(
            &mut canvas,
            config,
            card_origin(config, card_index),
            free_space,
            &mut images,
        )?;
    }

    Ok(canvas)
}
