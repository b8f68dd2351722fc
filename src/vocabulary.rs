//! Verification against a reference vocabulary.
//!
//! A vocabulary file lists one word per line; the expected file lists the
//! corresponding stem on the same line. This is the format of the published
//! Porter `voc.txt` / `output.txt` pair.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::Context;
use serde::Serialize;

use crate::error::{Result, StemError};
use crate::stem::Stemmer;

/// A word whose stem differs from the expected one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Mismatch {
    /// 1-based line number.
    pub line: usize,
    pub word: String,
    pub expected: String,
    pub actual: String,
}

/// Outcome of a vocabulary run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct VerificationReport {
    pub total: usize,
    pub matched: usize,
    pub mismatches: Vec<Mismatch>,
}

impl VerificationReport {
    pub fn is_success(&self) -> bool {
        self.mismatches.is_empty()
    }
}

/// Stem every vocabulary line and compare it with the expected line.
pub fn verify<V, E, S>(vocabulary: V, expected: E, stemmer: &S) -> Result<VerificationReport>
where
    V: BufRead,
    E: BufRead,
    S: Stemmer + ?Sized,
{
    let mut report = VerificationReport::default();
    let mut expected_lines = expected.lines();

    for (index, word) in vocabulary.lines().enumerate() {
        let word = word?;
        let line = index + 1;
        let expected_stem = match expected_lines.next() {
            Some(stem) => stem?,
            None => {
                return Err(StemError::vocabulary(format!(
                    "expected output ends before vocabulary line {line}"
                )));
            }
        };

        let word = word.trim();
        let expected_stem = expected_stem.trim();
        let actual = stemmer.stem(word);

        report.total += 1;
        if actual == expected_stem {
            report.matched += 1;
        } else {
            tracing::warn!(line, word, expected = expected_stem, actual = %actual, "stem mismatch");
            report.mismatches.push(Mismatch {
                line,
                word: word.to_string(),
                expected: expected_stem.to_string(),
                actual,
            });
        }
    }

    if expected_lines.next().is_some() {
        return Err(StemError::vocabulary(format!(
            "expected output has more lines than the {} vocabulary words",
            report.total
        )));
    }

    tracing::info!(
        total = report.total,
        matched = report.matched,
        "vocabulary verification finished"
    );
    Ok(report)
}

/// [`verify`] over two files on disk.
pub fn verify_files<S: Stemmer + ?Sized>(
    vocabulary: &Path,
    expected: &Path,
    stemmer: &S,
) -> Result<VerificationReport> {
    let vocabulary_file = File::open(vocabulary)
        .with_context(|| format!("failed to open vocabulary file {}", vocabulary.display()))?;
    let expected_file = File::open(expected)
        .with_context(|| format!("failed to open expected file {}", expected.display()))?;
    verify(
        BufReader::new(vocabulary_file),
        BufReader::new(expected_file),
        stemmer,
    )
}
