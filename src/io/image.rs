//! Cell image loading and PNG export

use crate::io::error::{BingoError, Result, file_system};
use image::imageops::{self, FilterType};
use image::{ImageFormat, RgbImage};
use std::path::Path;

/// Resampling filter used when fitting source images to a cell
pub const CELL_FILTER: FilterType = FilterType::Triangle;

/// Decode an image and resize it to exactly `width` x `height`
///
/// Any alpha channel is dropped. The decoded source only lives for the
/// duration of this call; the caller receives the resized cell alone.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or decoded
pub fn load_cell_image(path: &Path, width: u32, height: u32) -> Result<RgbImage> {
    let source = image::open(path)
        .map_err(|e| BingoError::ImageLoad {
            path: path.to_path_buf(),
            source: e,
        })?
        .into_rgb8();

    if source.dimensions() == (width, height) {
        return Ok(source);
    }

    Ok(imageops::resize(&source, width, height, CELL_FILTER))
}

/// Encode a canvas as PNG at `output_path`
///
/// The PNG encoder is used regardless of the path's extension.
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be encoded or written
pub fn save_canvas(canvas: &RgbImage, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(file_system(parent, "create directory"))?;
    }

    canvas
        .save_with_format(output_path, ImageFormat::Png)
        .map_err(|e| BingoError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })
}
