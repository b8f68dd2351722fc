//! Batch stemming over a rayon thread pool.
//!
//! Every worker shares the same [`PorterStemmer`]; the stemmer keeps all of
//! its working state local to each call, so results never depend on how a
//! batch was split.

use rayon::ThreadPool;
use rayon::prelude::*;

use crate::config::StemConfig;
use crate::error::{Result, StemError};
use crate::stem::{PorterStemmer, Stemmer};

/// Stems lists of words, in parallel when the batch is large enough.
pub struct BatchStemmer {
    stemmer: PorterStemmer,
    config: StemConfig,
    pool: Option<ThreadPool>,
}

impl std::fmt::Debug for BatchStemmer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BatchStemmer")
            .field("stemmer", &self.stemmer)
            .field("config", &self.config)
            .field("pool", &self.pool.as_ref().map(|p| p.current_num_threads()))
            .finish()
    }
}

impl BatchStemmer {
    /// Create a batch stemmer, building its thread pool if parallelism is on.
    pub fn new(config: StemConfig) -> Result<Self> {
        config.validate()?;

        let pool = if config.parallel.enabled {
            let threads = config.parallel.effective_threads();
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .thread_name(|i| format!("porter-stem-{i}"))
                .build()
                .map_err(|e| StemError::other(format!("Failed to build thread pool: {e}")))?;
            tracing::debug!(threads, "built stemming thread pool");
            Some(pool)
        } else {
            None
        };

        Ok(BatchStemmer {
            stemmer: PorterStemmer::with_policy(config.input_policy),
            config,
            pool,
        })
    }

    pub fn stemmer(&self) -> &PorterStemmer {
        &self.stemmer
    }

    fn pool_for(&self, len: usize) -> Option<&ThreadPool> {
        self.pool
            .as_ref()
            .filter(|_| len >= self.config.parallel.min_batch_size)
    }

    /// Stem every word, preserving order.
    pub fn stem_all<S: AsRef<str> + Sync>(&self, words: &[S]) -> Vec<String> {
        match self.pool_for(words.len()) {
            Some(pool) => {
                tracing::debug!(words = words.len(), "stemming batch in parallel");
                pool.install(|| {
                    words
                        .par_iter()
                        .map(|w| self.stemmer.stem(w.as_ref()))
                        .collect()
                })
            }
            None => words.iter().map(|w| self.stemmer.stem(w.as_ref())).collect(),
        }
    }

    /// Like [`BatchStemmer::stem_all`], but fails on the first word the input
    /// policy rejects.
    pub fn try_stem_all<S: AsRef<str> + Sync>(&self, words: &[S]) -> Result<Vec<String>> {
        match self.pool_for(words.len()) {
            Some(pool) => pool.install(|| {
                words
                    .par_iter()
                    .map(|w| self.stemmer.try_stem(w.as_ref()))
                    .collect()
            }),
            None => words
                .iter()
                .map(|w| self.stemmer.try_stem(w.as_ref()))
                .collect(),
        }
    }
}
