//! Stemming: the VC measure, the suffix rule tables and the Porter pipeline.

/// Trait for stemming algorithms.
pub trait Stemmer: Send + Sync {
    /// Stem a word to its root form.
    fn stem(&self, word: &str) -> String;

    /// Get the name of this stemmer.
    fn name(&self) -> &'static str;
}

pub mod measure;
pub mod porter;
pub mod suffix;

pub use porter::{PorterStemmer, Stage, StageResult, StemTrace};

/// Stem a single lowercase word with the default Porter stemmer.
///
/// ```
/// assert_eq!(porter_stem::stem::stem("meetings"), "meet");
/// assert_eq!(porter_stem::stem::stem("is"), "is");
/// ```
pub fn stem(word: &str) -> String {
    PorterStemmer::new().stem(word)
}

/// VC measure of `word`.
pub fn measure(word: &str) -> usize {
    measure::measure(word)
}
