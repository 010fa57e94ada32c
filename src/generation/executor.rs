//! Per-iteration generation: sample, compose, name, save

use crate::generation::selection::ImageSampler;
use crate::io::configuration::GeneratorConfig;
use crate::io::discovery::{InputImages, discover_input_images};
use crate::io::error::Result;
use crate::io::image::{load_cell_image, save_canvas};
use crate::io::naming::OutputNamer;
use crate::layout::build_canvas;
use image::RgbImage;
use std::path::{Path, PathBuf};

/// Produces one canvas per call from a fixed pool of input images
///
/// The free-space image is decoded and resized once at construction and
/// reused for every card of the run.
pub struct CardGenerator {
    config: GeneratorConfig,
    inputs: InputImages,
    free_space_cell: RgbImage,
    sampler: ImageSampler,
    namer: OutputNamer,
}

impl CardGenerator {
    /// Validate the configuration, discover inputs, and load the free-space image
    ///
    /// Passing a seed makes the sequence of generated canvases reproducible.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The configuration is invalid
    /// - The input directory lacks the free-space image or enough images
    /// - The free-space image cannot be decoded
    pub fn new(
        config: GeneratorConfig,
        input_dir: &Path,
        output_dir: &Path,
        seed: Option<u64>,
    ) -> Result<Self> {
        config.validate()?;
        let inputs = discover_input_images(input_dir, &config)?;
        let free_space_cell =
            load_cell_image(&inputs.free_space, config.cell_width, config.cell_height)?;
        let namer = OutputNamer::new(output_dir, config.output_prefix.clone());

        Ok(Self {
            config,
            inputs,
            free_space_cell,
            sampler: ImageSampler::from_seed_option(seed),
            namer,
        })
    }

    /// Layout this generator was built with
    pub const fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Input images discovered at construction
    pub const fn inputs(&self) -> &InputImages {
        &self.inputs
    }

    /// Compose one canvas from a fresh sample of the input images
    ///
    /// # Errors
    ///
    /// Returns an error if a sampled image cannot be decoded
    pub fn generate_canvas(&mut self) -> Result<RgbImage> {
        let sample = self
            .sampler
            .sample(&self.inputs.images, self.config.cells_per_output())?;
        build_canvas(&self.config, &self.free_space_cell, &sample)
    }

    /// Compose one canvas and save it under the next free output name
    ///
    /// Returns the path that was written.
    ///
    /// # Errors
    ///
    /// Returns an error if composition fails, the output directory cannot be
    /// scanned, or the canvas cannot be written
    pub fn generate_next(&mut self) -> Result<PathBuf> {
        let canvas = self.generate_canvas()?;
        let output_path = self.namer.next_path()?;
        save_canvas(&canvas, &output_path)?;
        Ok(output_path)
    }
}
