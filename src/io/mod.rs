/// Command-line interface and batch driver
pub mod cli;
/// Generator constants and layout configuration
pub mod configuration;
/// Input image discovery and directory preparation
pub mod discovery;
/// Error types
pub mod error;
/// Cell image loading and PNG export
pub mod image;
/// Output filename allocation
pub mod naming;
/// Progress display
pub mod progress;
