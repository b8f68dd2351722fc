//! Command Line Interface for porter-stem.

pub mod args;
pub mod commands;
pub mod output;

// Re-export commonly used types
pub use args::*;
pub use commands::*;
pub use output::*;
