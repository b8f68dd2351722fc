//! # porter-stem
//!
//! A Porter stemmer for English words.
//!
//! ## Features
//!
//! - Pure Rust implementation of the Porter suffix-stripping algorithm
//! - Reentrant: one stemmer can be shared by any number of threads
//! - Per-stage tracing of the rule pipeline
//! - Parallel batch stemming
//! - Verification against a reference vocabulary
//!
//! ```
//! use porter_stem::prelude::*;
//!
//! assert_eq!(stem("ponies"), "poni");
//! assert_eq!(measure("troubles"), 2);
//! ```

pub mod batch;
pub mod cli;
pub mod config;
pub mod error;
pub mod stem;
pub mod vocabulary;

pub mod prelude {
    pub use crate::batch::BatchStemmer;
    pub use crate::config::{InputPolicy, ParallelConfig, StemConfig};
    pub use crate::error::{Result, StemError};
    pub use crate::stem::{PorterStemmer, Stage, StemTrace, Stemmer, measure, stem};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
