//! Output filename allocation continuing from previously generated files

use crate::io::configuration::OUTPUT_EXTENSION;
use crate::io::error::{BingoError, Result, file_system};
use std::path::{Path, PathBuf};

/// Hands out `<prefix>-<index>.png` paths with strictly increasing indices
///
/// The starting index is resolved lazily on the first allocation by scanning
/// the output directory, so files written earlier in the same run are never
/// rescanned. Assumes no other process writes to the directory concurrently.
#[derive(Debug, Clone)]
pub struct OutputNamer {
    directory: PathBuf,
    prefix: String,
    /// `None` until the directory has been scanned, then the last index handed out
    current_index: Option<u64>,
}

impl OutputNamer {
    /// Create an allocator for files named `<prefix>-<index>.png` in `directory`
    pub fn new(directory: impl Into<PathBuf>, prefix: impl Into<String>) -> Self {
        Self {
            directory: directory.into(),
            prefix: prefix.into(),
            current_index: None,
        }
    }

    /// Last index handed out, if any
    pub const fn current_index(&self) -> Option<u64> {
        self.current_index
    }

    /// Allocate the next output path
    ///
    /// # Errors
    ///
    /// Returns an error if the output directory cannot be listed on first use,
    /// or if the next index would not fit in a `u64`
    pub fn next_path(&mut self) -> Result<PathBuf> {
        let index = match self.current_index {
            Some(index) => index.checked_add(1),
            None => self
                .highest_existing_index()?
                .map_or(Some(1), |max| max.checked_add(1)),
        }
        .ok_or_else(|| BingoError::OutputIndexExhausted {
            directory: self.directory.clone(),
        })?;
        self.current_index = Some(index);

        Ok(self.directory.join(format!(
            "{}-{index}.{OUTPUT_EXTENSION}",
            self.prefix
        )))
    }

    fn highest_existing_index(&self) -> Result<Option<u64>> {
        let entries = std::fs::read_dir(&self.directory)
            .map_err(file_system(&self.directory, "list directory"))?;

        let mut highest = None;
        for entry in entries {
            let path = entry
                .map_err(file_system(&self.directory, "read directory entry"))?
                .path();
            if !path.is_file() {
                continue;
            }

            let index = path
                .file_name()
                .and_then(|name| name.to_str())
                .and_then(|name| parse_output_index(name, &self.prefix));
            highest = highest.max(index);
        }

        Ok(highest)
    }
}

/// Extract the numeric suffix from a generated file name
///
/// The name must start with `prefix`; the suffix is the text after the last
/// hyphen once the final extension is removed. Non-numeric suffixes yield
/// `None`.
pub fn parse_output_index(file_name: &str, prefix: &str) -> Option<u64> {
    if !file_name.starts_with(prefix) {
        return None;
    }

    let stem = Path::new(file_name).file_stem()?.to_str()?;
    let (_, suffix) = stem.rsplit_once('-')?;
    suffix.parse().ok()
}
