//! Command line argument parsing for the porter-stem CLI using clap.

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// porter-stem - reduce English words to their Porter stems
#[derive(Parser, Debug, Clone)]
#[command(name = "porter-stem")]
#[command(about = "Reduce English words to their Porter stems")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct StemArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE", env = "PORTER_STEM_CONFIG")]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl StemArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }

    /// Default log filter for the effective verbosity, used when `RUST_LOG`
    /// is not set.
    pub fn default_log_filter(&self) -> &'static str {
        match self.verbosity() {
            0 => "error",
            1 => "warn",
            2 => "info",
            _ => "debug",
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Stem words from arguments, files or standard input
    Stem(StemWordsArgs),

    /// Print the VC measure of words
    Measure(MeasureArgs),

    /// Compare stems against a reference vocabulary
    Verify(VerifyArgs),
}

/// Arguments for stemming
#[derive(Parser, Debug, Clone)]
pub struct StemWordsArgs {
    /// Words to stem
    #[arg(value_name = "WORDS")]
    pub words: Vec<String>,

    /// Text files whose whitespace-separated words are stemmed
    #[arg(short, long = "input", value_name = "FILE")]
    pub inputs: Vec<PathBuf>,

    /// Fail on words outside the lowercase ASCII alphabet
    #[arg(long)]
    pub strict: bool,

    /// Show the stem after every stage of the pipeline
    #[arg(long)]
    pub trace: bool,
}

/// Arguments for measuring
#[derive(Parser, Debug, Clone)]
pub struct MeasureArgs {
    /// Words to measure
    #[arg(value_name = "WORDS", required = true)]
    pub words: Vec<String>,
}

/// Arguments for vocabulary verification
#[derive(Parser, Debug, Clone)]
pub struct VerifyArgs {
    /// Vocabulary file, one word per line
    #[arg(value_name = "VOCABULARY")]
    pub vocabulary: PathBuf,

    /// Expected stems, one per line
    #[arg(value_name = "EXPECTED")]
    pub expected: PathBuf,

    /// Maximum number of mismatches to list
    #[arg(long, default_value = "20")]
    pub max_mismatches: usize,
}

/// Output formats
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
    /// CSV output
    Csv,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_stem_command() {
        let args = StemArgs::parse_from([
            "porter-stem",
            "-vv",
            "stem",
            "caresses",
            "ponies",
            "--input",
            "words.txt",
            "--trace",
        ]);

        assert_eq!(args.verbosity(), 2);
        assert_eq!(args.default_log_filter(), "info");
        assert_eq!(args.output_format, OutputFormat::Human);
        match args.command {
            Command::Stem(stem) => {
                assert_eq!(stem.words, vec!["caresses", "ponies"]);
                assert_eq!(stem.inputs, vec![PathBuf::from("words.txt")]);
                assert!(stem.trace);
                assert!(!stem.strict);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_quiet_overrides_verbose() {
        let args = StemArgs::parse_from(["porter-stem", "-q", "-vvv", "measure", "tree"]);
        assert_eq!(args.verbosity(), 0);
        assert_eq!(args.default_log_filter(), "error");
    }

    #[test]
    fn test_parse_verify_command() {
        let args = StemArgs::parse_from([
            "porter-stem",
            "--format",
            "json",
            "verify",
            "voc.txt",
            "output.txt",
            "--max-mismatches",
            "5",
        ]);

        assert_eq!(args.output_format, OutputFormat::Json);
        match args.command {
            Command::Verify(verify) => {
                assert_eq!(verify.vocabulary, PathBuf::from("voc.txt"));
                assert_eq!(verify.expected, PathBuf::from("output.txt"));
                assert_eq!(verify.max_mismatches, 5);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_measure_requires_words() {
        assert!(StemArgs::try_parse_from(["porter-stem", "measure"]).is_err());
    }
}
