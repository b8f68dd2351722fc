//! Configuration for stemming and batch processing.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, StemError};

/// How out-of-contract input (anything but `a..=z`) is handled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputPolicy {
    /// Return the word unchanged.
    #[default]
    PassThrough,

    /// Report the word as an error from the fallible entry points.
    Reject,
}

/// Configuration for parallel batch stemming.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ParallelConfig {
    /// Whether batches may be spread over a thread pool at all.
    pub enabled: bool,

    /// Batches smaller than this are stemmed on the calling thread.
    pub min_batch_size: usize,

    /// Thread pool size for parallel execution.
    /// If None, uses the number of CPU cores.
    pub num_threads: Option<usize>,
}

impl Default for ParallelConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            min_batch_size: 1024,
            num_threads: None,
        }
    }
}

impl ParallelConfig {
    /// Number of worker threads the pool will be built with.
    pub fn effective_threads(&self) -> usize {
        self.num_threads.unwrap_or_else(num_cpus::get)
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StemConfig {
    /// Handling of words outside the lowercase ASCII contract.
    pub input_policy: InputPolicy,

    /// Batch parallelism settings.
    pub parallel: ParallelConfig,
}

impl StemConfig {
    /// Parse a configuration from JSON. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: StemConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration from a JSON file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&content)
    }

    /// Check that the settings are usable.
    pub fn validate(&self) -> Result<()> {
        if self.parallel.num_threads == Some(0) {
            return Err(StemError::config("parallel.num_threads must be at least 1"));
        }
        if self.parallel.min_batch_size == 0 {
            return Err(StemError::config(
                "parallel.min_batch_size must be at least 1",
            ));
        }
        Ok(())
    }
}
