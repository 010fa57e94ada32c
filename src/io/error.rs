//! Error types for card generation

use std::fmt;
use std::path::PathBuf;

/// Main error type for all generation operations
#[derive(Debug)]
pub enum BingoError {
    /// The input directory has no free-space image
    MissingFreeSpace {
        /// Directory that was searched
        directory: PathBuf,
        /// File name that was expected
        file_name: String,
    },

    /// Not enough eligible images to fill one canvas
    InsufficientImages {
        /// Number of eligible images found
        found: usize,
        /// Number of images one canvas needs
        required: usize,
    },

    /// The input directory did not exist and had to be created
    EmptyInputDirectory {
        /// Path of the freshly created directory
        path: PathBuf,
    },

    /// A card ran out of images before every cell was filled
    SampleExhausted {
        /// Number of non-center cells a card needs
        needed: usize,
    },

    /// Every output index after the highest existing one is taken
    OutputIndexExhausted {
        /// Output directory that was scanned
        directory: PathBuf,
    },

    /// Generator parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Failed to decode a source image
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// Failed to encode or write a canvas
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for BingoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingFreeSpace {
                directory,
                file_name,
            } => {
                write!(
                    f,
                    "No file named {file_name} in '{}'",
                    directory.display()
                )
            }
            Self::InsufficientImages { found, required } => {
                write!(f, "Too few input images ({found}/{required})")
            }
            Self::EmptyInputDirectory { path } => {
                write!(f, "No files in input directory '{}'", path.display())
            }
            Self::SampleExhausted { needed } => {
                write!(f, "Ran out of images while filling a card ({needed} needed)")
            }
            Self::OutputIndexExhausted { directory } => {
                write!(
                    f,
                    "No output index left after the highest one in '{}'",
                    directory.display()
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for BingoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for generation results
pub type Result<T> = std::result::Result<T, BingoError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> BingoError {
    BingoError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a file system error bound to the path it occurred on
pub fn file_system(
    path: impl Into<PathBuf>,
    operation: &'static str,
) -> impl FnOnce(std::io::Error) -> BingoError {
    let path = path.into();
    move |source| BingoError::FileSystem {
        path,
        operation,
        source,
    }
}

