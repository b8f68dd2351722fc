//! Integration tests for vocabulary verification, through the library and
//! through the CLI.

use std::fs;
use std::io::Cursor;
use std::path::Path;

use clap::Parser;
use porter_stem::cli::{StemArgs, run_command};
use porter_stem::prelude::*;
use porter_stem::vocabulary::{verify_files, Mismatch};
use tempfile::TempDir;

const VOC: &str = "\
caresses
ponies
agreed
disabled
matting
mating
meetings
relational
generalizations
adoption
";

const OUTPUT: &str = "\
caress
poni
agre
disabl
mat
mate
meet
relat
gener
adopt
";

fn write_pair(dir: &Path, voc: &str, output: &str) -> (std::path::PathBuf, std::path::PathBuf) {
    let voc_path = dir.join("voc.txt");
    let output_path = dir.join("output.txt");
    fs::write(&voc_path, voc).unwrap();
    fs::write(&output_path, output).unwrap();
    (voc_path, output_path)
}

fn run_cli(argv: &[&str]) -> (Result<()>, String) {
    let mut full = vec!["porter-stem"];
    full.extend_from_slice(argv);
    let args = StemArgs::parse_from(full);

    let mut out = Vec::new();
    let result = run_command(&args, &mut Cursor::new(Vec::new()), &mut out);
    (result, String::from_utf8(out).unwrap())
}

#[test]
fn test_verify_files_success() -> Result<()> {
    let dir = TempDir::new().unwrap();
    let (voc, output) = write_pair(dir.path(), VOC, OUTPUT);

    let report = verify_files(&voc, &output, &PorterStemmer::new())?;
    assert_eq!(report.total, 10);
    assert_eq!(report.matched, 10);
    assert!(report.is_success());
    Ok(())
}

#[test]
fn test_verify_files_reports_mismatches() -> Result<()> {
    let dir = TempDir::new().unwrap();
    let expected = OUTPUT.replace("agre\n", "agree\n");
    let (voc, output) = write_pair(dir.path(), VOC, &expected);

    let report = verify_files(&voc, &output, &PorterStemmer::new())?;
    assert_eq!(report.matched, 9);
    assert_eq!(
        report.mismatches,
        vec![Mismatch {
            line: 3,
            word: "agreed".to_string(),
            expected: "agree".to_string(),
            actual: "agre".to_string(),
        }]
    );
    Ok(())
}

#[test]
fn test_verify_missing_file() {
    let dir = TempDir::new().unwrap();
    let result = verify_files(
        &dir.path().join("missing.txt"),
        &dir.path().join("also-missing.txt"),
        &PorterStemmer::new(),
    );
    let err = result.unwrap_err();
    assert!(matches!(err, StemError::Anyhow(_)));
    assert!(err.to_string().contains("missing.txt"), "{err}");
}

#[test]
fn test_cli_verify_success() {
    let dir = TempDir::new().unwrap();
    let (voc, output) = write_pair(dir.path(), VOC, OUTPUT);

    let (result, text) = run_cli(&["verify", voc.to_str().unwrap(), output.to_str().unwrap()]);
    assert!(result.is_ok());
    assert!(text.contains("Total words: 10"));
    assert!(text.contains("Mismatched: 0"));
}

#[test]
fn test_cli_verify_failure_json() {
    let dir = TempDir::new().unwrap();
    let expected = OUTPUT.replace("mat\n", "matt\n");
    let (voc, output) = write_pair(dir.path(), VOC, &expected);

    let (result, text) = run_cli(&[
        "--format",
        "json",
        "verify",
        voc.to_str().unwrap(),
        output.to_str().unwrap(),
    ]);
    assert!(matches!(result, Err(StemError::Other(_))));

    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(value["total"], 10);
    assert_eq!(value["mismatched"], 1);
    assert_eq!(value["mismatches"][0]["word"], "matting");
    assert_eq!(value["mismatches"][0]["actual"], "mat");
}

#[test]
fn test_cli_verify_uneven_files() {
    let dir = TempDir::new().unwrap();
    let (voc, output) = write_pair(dir.path(), VOC, "caress\nponi\n");

    let (result, _) = run_cli(&["verify", voc.to_str().unwrap(), output.to_str().unwrap()]);
    assert!(matches!(result, Err(StemError::Vocabulary(_))));
}
