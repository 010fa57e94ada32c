//! Input image discovery and working directory preparation

use crate::io::configuration::{GeneratorConfig, IMAGE_EXTENSIONS};
use crate::io::error::{BingoError, Result, file_system};
use std::path::{Path, PathBuf};

/// Images available to a generation run
#[derive(Debug, Clone)]
pub struct InputImages {
    /// Center-cell image
    pub free_space: PathBuf,
    /// Eligible cell images, sorted by path
    pub images: Vec<PathBuf>,
}

/// Check whether a path carries one of the accepted image extensions
///
/// Matching is case-insensitive and only looks at the final extension.
pub fn has_image_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            IMAGE_EXTENSIONS
                .iter()
                .any(|allowed| ext.eq_ignore_ascii_case(allowed))
        })
}

/// Collect the free-space image and eligible cell images from a directory
///
/// Only regular files directly inside `directory` are considered.
///
/// # Errors
///
/// Returns an error if:
/// - The directory cannot be listed
/// - No regular file is named like the configured free-space image
/// - Fewer images than one canvas needs remain after filtering
pub fn discover_input_images(directory: &Path, config: &GeneratorConfig) -> Result<InputImages> {
    let entries = std::fs::read_dir(directory).map_err(file_system(directory, "list directory"))?;

    let mut free_space = None;
    let mut images = Vec::new();

    for entry in entries {
        let path = entry.map_err(file_system(directory, "read directory entry"))?.path();
        if !path.is_file() {
            continue;
        }

        let is_free_space = path
            .file_name()
            .is_some_and(|name| *name == *config.free_space_name);
        if is_free_space {
            free_space = Some(path);
        } else if has_image_extension(&path) {
            images.push(path);
        }
    }

    let free_space = free_space.ok_or_else(|| BingoError::MissingFreeSpace {
        directory: directory.to_path_buf(),
        file_name: config.free_space_name.clone(),
    })?;

    let required = config.cells_per_output();
    if images.len() < required {
        return Err(BingoError::InsufficientImages {
            found: images.len(),
            required,
        });
    }

    images.sort();
    Ok(InputImages { free_space, images })
}

/// Outcome of preparing one working directory
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectoryStatus {
    /// The directory was already present
    Existing,
    /// The directory was missing and has been created
    Created,
}

/// Create `path` (and its parents) if it does not exist yet
///
/// # Errors
///
/// Returns an error if the directory cannot be created
pub fn ensure_directory(path: &Path) -> Result<DirectoryStatus> {
    if path.is_dir() {
        return Ok(DirectoryStatus::Existing);
    }

    std::fs::create_dir_all(path).map_err(file_system(path, "create directory"))?;
    Ok(DirectoryStatus::Created)
}

/// Make sure both working directories exist before a run
///
/// The output directory is created first so a first run leaves the full
/// layout behind. `on_create` is called for every directory that had to be
/// created. A freshly created input directory is necessarily empty.
///
/// # Errors
///
/// Returns an error if either directory cannot be created, or
/// [`BingoError::EmptyInputDirectory`] if the input directory had to be created
pub fn prepare_directories(
    input_dir: &Path,
    output_dir: &Path,
    mut on_create: impl FnMut(&Path),
) -> Result<()> {
    if ensure_directory(output_dir)? == DirectoryStatus::Created {
        on_create(output_dir);
    }

    if ensure_directory(input_dir)? == DirectoryStatus::Created {
        on_create(input_dir);
        return Err(BingoError::EmptyInputDirectory {
            path: input_dir.to_path_buf(),
        });
    }

    Ok(())
}
