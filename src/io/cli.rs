//! Command-line interface and the batch driver for card generation

use crate::generation::CardGenerator;
use crate::io::configuration::{DEFAULT_ITERATIONS, GeneratorConfig, INPUT_DIR, OUTPUT_DIR};
use crate::io::discovery::prepare_directories;
use crate::io::error::{Result, file_system, invalid_parameter};
use crate::io::progress::ProgressManager;
use clap::Parser;
use std::fs;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "bingocard")]
#[command(author, version, about = "Generate randomized bingo card images")]
/// Command-line arguments for the bingo card generator
pub struct Cli {
    /// Number of output images to generate
    #[arg(value_name = "ITERATIONS", default_value_t = DEFAULT_ITERATIONS)]
    pub iterations: usize,

    /// Random seed for reproducible cards
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Directory holding the source images and the free-space image
    #[arg(long, value_name = "DIR", default_value = INPUT_DIR)]
    pub input_dir: PathBuf,

    /// Directory receiving generated cards
    #[arg(long, value_name = "DIR", default_value = OUTPUT_DIR)]
    pub output_dir: PathBuf,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Runs a full generation batch with progress tracking
pub struct BatchProcessor {
    cli: Cli,
    config: GeneratorConfig,
    progress_manager: Option<ProgressManager>,
}

impl BatchProcessor {
    /// Create a processor using the compile-time layout
    pub fn new(cli: Cli) -> Self {
        Self::with_config(cli, GeneratorConfig::default())
    }

    /// Create a processor with a custom layout
    pub fn with_config(cli: Cli, config: GeneratorConfig) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            config,
            progress_manager,
        }
    }

    /// Prepare directories, then generate and save `iterations` canvases
    ///
    /// Returns the written paths in order. Files saved before a failure are
    /// left on disk.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The input directory had to be created
    /// - The input and output directories are the same directory
    /// - The input directory lacks the free-space image or enough images
    /// - Any image cannot be decoded or any canvas cannot be saved
    // Allow print for user feedback before the progress bar exists
    #[allow(clippy::print_stderr)]
    pub fn process(&mut self) -> Result<Vec<PathBuf>> {
        let quiet = self.cli.quiet;

        prepare_directories(&self.cli.input_dir, &self.cli.output_dir, |directory| {
            if !quiet {
                eprintln!("No folder {}. Creating...", directory.display());
            }
        })?;

        self.reject_shared_directory()?;

        if !quiet {
            eprintln!("Getting files from {}...", self.cli.input_dir.display());
        }

        let mut generator = CardGenerator::new(
            self.config.clone(),
            &self.cli.input_dir,
            &self.cli.output_dir,
            self.cli.seed,
        )?;

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(self.cli.iterations);
        }

        let mut written = Vec::with_capacity(self.cli.iterations);
        for index in 0..self.cli.iterations {
            if let Some(ref pm) = self.progress_manager {
                pm.start_canvas(index);
            }

            let output_path = generator.generate_next()?;

            if let Some(ref mut pm) = self.progress_manager {
                pm.complete_canvas(&output_path);
            }
            written.push(output_path);
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Ok(written)
    }

    /// Previous outputs in a shared directory would be sampled as inputs
    fn reject_shared_directory(&self) -> Result<()> {
        let input = fs::canonicalize(&self.cli.input_dir)
            .map_err(file_system(&self.cli.input_dir, "resolve directory"))?;
        let output = fs::canonicalize(&self.cli.output_dir)
            .map_err(file_system(&self.cli.output_dir, "resolve directory"))?;

        if input == output {
            return Err(invalid_parameter(
                "output_dir",
                &self.cli.output_dir.display(),
                &"must differ from the input directory",
            ));
        }

        Ok(())
    }
}
