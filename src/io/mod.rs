/// Command-line interface for the packing sweep
pub mod cli;
/// Sweep constants and runtime configuration defaults
pub mod configuration;
/// Error types for packing and export operations
pub mod error;
/// PNG rendering and export of witness tilings
pub mod image;
/// Progress display for the board sweep
pub mod progress;
/// LaTeX summary table of solvable board sizes
pub mod report;
