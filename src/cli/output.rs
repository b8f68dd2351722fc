//! Output formatting for CLI commands.

use std::io::Write;

use serde::Serialize;
use serde_json::Value;

use crate::cli::args::{OutputFormat, StemArgs};
use crate::error::Result;
use crate::stem::StemTrace;
use crate::vocabulary::{Mismatch, VerificationReport};

/// A word and its stem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordStem {
    pub word: String,
    pub stem: String,
}

/// Result structure for the stem command.
#[derive(Debug, Serialize)]
pub struct StemResults {
    pub stems: Vec<WordStem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub traces: Option<Vec<StemTrace>>,
}

/// A word and its VC measure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordMeasure {
    pub word: String,
    pub measure: usize,
}

/// Result structure for the measure command.
#[derive(Debug, Serialize)]
pub struct MeasureResults {
    pub measures: Vec<WordMeasure>,
}

/// Result structure for the verify command.
#[derive(Debug, Serialize)]
pub struct VerificationSummary {
    pub total: usize,
    pub matched: usize,
    pub mismatched: usize,
    /// The first mismatches, capped by `--max-mismatches`.
    pub mismatches: Vec<Mismatch>,
}

impl VerificationSummary {
    pub fn from_report(report: VerificationReport, max_mismatches: usize) -> Self {
        let mismatched = report.mismatches.len();
        let mut mismatches = report.mismatches;
        mismatches.truncate(max_mismatches);
        VerificationSummary {
            total: report.total,
            matched: report.matched,
            mismatched,
            mismatches,
        }
    }
}

/// A command result that can be rendered in every output format.
pub trait Report: Serialize {
    /// Render for a terminal.
    fn write_human(&self, out: &mut dyn Write) -> Result<()>;

    /// The records written as CSV rows.
    fn csv_rows(&self) -> Result<Value>;
}

impl Report for StemResults {
    fn write_human(&self, out: &mut dyn Write) -> Result<()> {
        match &self.traces {
            Some(traces) => {
                for trace in traces {
                    writeln!(out, "{} -> {}", trace.word, trace.stem)?;
                    for stage in &trace.stages {
                        writeln!(out, "  {:>8}: {}", stage.stage.label(), stage.stem)?;
                    }
                }
            }
            None => {
                for entry in &self.stems {
                    writeln!(out, "{}", entry.stem)?;
                }
            }
        }
        Ok(())
    }

    fn csv_rows(&self) -> Result<Value> {
        Ok(serde_json::to_value(&self.stems)?)
    }
}

impl Report for MeasureResults {
    fn write_human(&self, out: &mut dyn Write) -> Result<()> {
        for entry in &self.measures {
            writeln!(out, "{}\t{}", entry.word, entry.measure)?;
        }
        Ok(())
    }

    fn csv_rows(&self) -> Result<Value> {
        Ok(serde_json::to_value(&self.measures)?)
    }
}

impl Report for VerificationSummary {
    fn write_human(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Vocabulary Verification:")?;
        writeln!(out, "════════════════════════")?;
        writeln!(out, "Total words: {}", self.total)?;
        writeln!(out, "Matched: {}", self.matched)?;
        writeln!(out, "Mismatched: {}", self.mismatched)?;

        if !self.mismatches.is_empty() {
            writeln!(out)?;
            writeln!(out, "Mismatches:")?;
            writeln!(out, "───────────")?;
            for m in &self.mismatches {
                writeln!(
                    out,
                    "line {}: {} -> {} (expected {})",
                    m.line, m.word, m.actual, m.expected
                )?;
            }
            if self.mismatched > self.mismatches.len() {
                writeln!(out, "... {} more", self.mismatched - self.mismatches.len())?;
            }
        }
        Ok(())
    }

    fn csv_rows(&self) -> Result<Value> {
        Ok(serde_json::to_value(&self.mismatches)?)
    }
}

/// Output a result in the specified format.
pub fn output_result<T: Report>(result: &T, args: &StemArgs, out: &mut dyn Write) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => result.write_human(out),
        OutputFormat::Json => output_json(result, args.pretty, out),
        OutputFormat::Csv => output_csv(&result.csv_rows()?, out),
    }
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, pretty: bool, out: &mut dyn Write) -> Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    writeln!(out, "{json}")?;
    Ok(())
}

/// Output an array of flat objects as CSV, header first.
fn output_csv(rows: &Value, out: &mut dyn Write) -> Result<()> {
    let Some(rows) = rows.as_array() else {
        writeln!(out, "{}", format_csv_value(rows))?;
        return Ok(());
    };

    let mut headers: Vec<&str> = Vec::new();
    for row in rows {
        let Some(obj) = row.as_object() else {
            continue;
        };
        if headers.is_empty() {
            headers = obj.keys().map(String::as_str).collect();
            headers.sort_unstable();
            writeln!(out, "{}", headers.join(","))?;
        }
        let values: Vec<String> = headers
            .iter()
            .map(|h| obj.get(*h).map(format_csv_value).unwrap_or_default())
            .collect();
        writeln!(out, "{}", values.join(","))?;
    }
    Ok(())
}

/// Format a JSON value as a CSV field, quoting when needed.
fn format_csv_value(value: &Value) -> String {
    let raw = match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    };

    if raw.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", raw.replace('"', "\"\""))
    } else {
        raw
    }
}
