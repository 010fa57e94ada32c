/// Generation run state and per-iteration orchestration
pub mod executor;
/// Random sampling of images for each canvas
pub mod selection;

pub use executor::CardGenerator;
