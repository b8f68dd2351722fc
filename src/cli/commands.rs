//! Command implementations for the porter-stem CLI.

use std::fs;
use std::io::{self, Read, Write};
use std::time::Instant;

use crate::batch::BatchStemmer;
use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::{InputPolicy, StemConfig};
use crate::error::{Result, StemError};
use crate::stem::measure::measure;
use crate::vocabulary::verify_files;

/// Execute a CLI command against the process's stdin and stdout.
pub fn execute_command(args: StemArgs) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_command(&args, &mut stdin.lock(), &mut stdout.lock())
}

/// Execute a CLI command with explicit input and output streams.
pub fn run_command(args: &StemArgs, input: &mut dyn Read, out: &mut dyn Write) -> Result<()> {
    let config = load_config(args)?;
    match &args.command {
        Command::Stem(stem_args) => stem_words(stem_args, config, args, input, out),
        Command::Measure(measure_args) => measure_words(measure_args, args, out),
        Command::Verify(verify_args) => verify_vocabulary(verify_args, config, args, out),
    }
}

/// Load the configuration file if one was given.
fn load_config(args: &StemArgs) -> Result<StemConfig> {
    match &args.config {
        Some(path) => {
            tracing::info!(path = %path.display(), "loading configuration");
            StemConfig::from_json_file(path)
        }
        None => Ok(StemConfig::default()),
    }
}

/// Stem words from the arguments and input files, or from `input` when
/// neither is given.
fn stem_words(
    args: &StemWordsArgs,
    mut config: StemConfig,
    cli_args: &StemArgs,
    input: &mut dyn Read,
    out: &mut dyn Write,
) -> Result<()> {
    if args.strict {
        config.input_policy = InputPolicy::Reject;
    }

    let mut words = args.words.clone();
    for path in &args.inputs {
        tracing::debug!(path = %path.display(), "reading words");
        let text = fs::read_to_string(path)?;
        words.extend(text.split_whitespace().map(str::to_string));
    }
    if args.words.is_empty() && args.inputs.is_empty() {
        let mut text = String::new();
        input.read_to_string(&mut text)?;
        words.extend(text.split_whitespace().map(str::to_string));
    }

    let start_time = Instant::now();
    let batch = BatchStemmer::new(config)?;
    let results = if args.trace {
        let stemmer = batch.stemmer();
        let traces = words
            .iter()
            .map(|w| stemmer.try_trace(w))
            .collect::<Result<Vec<_>>>()?;
        StemResults {
            stems: traces
                .iter()
                .map(|t| WordStem {
                    word: t.word.clone(),
                    stem: t.stem.clone(),
                })
                .collect(),
            traces: Some(traces),
        }
    } else {
        let stems = if batch.stemmer().policy() == InputPolicy::Reject {
            batch.try_stem_all(&words)?
        } else {
            batch.stem_all(&words)
        };
        StemResults {
            stems: words
                .into_iter()
                .zip(stems)
                .map(|(word, stem)| WordStem { word, stem })
                .collect(),
            traces: None,
        }
    };

    tracing::info!(
        words = results.stems.len(),
        elapsed_ms = start_time.elapsed().as_millis() as u64,
        "stemmed words"
    );

    output_result(&results, cli_args, out)
}

/// Print the VC measure of each word.
fn measure_words(args: &MeasureArgs, cli_args: &StemArgs, out: &mut dyn Write) -> Result<()> {
    let results = MeasureResults {
        measures: args
            .words
            .iter()
            .map(|w| WordMeasure {
                word: w.clone(),
                measure: measure(w),
            })
            .collect(),
    };

    output_result(&results, cli_args, out)
}

/// Compare stems against a reference vocabulary.
fn verify_vocabulary(
    args: &VerifyArgs,
    config: StemConfig,
    cli_args: &StemArgs,
    out: &mut dyn Write,
) -> Result<()> {
    tracing::info!(
        vocabulary = %args.vocabulary.display(),
        expected = %args.expected.display(),
        "verifying vocabulary"
    );

    let batch = BatchStemmer::new(config)?;
    let report = verify_files(&args.vocabulary, &args.expected, batch.stemmer())?;
    let summary = VerificationSummary::from_report(report, args.max_mismatches);

    output_result(&summary, cli_args, out)?;

    if summary.mismatched > 0 {
        return Err(StemError::other(format!(
            "{} of {} words did not match the expected stems",
            summary.mismatched, summary.total
        )));
    }
    Ok(())
}
