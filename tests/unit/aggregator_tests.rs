/*!
 * Tests for response aggregation across survey export files
 */

use std::path::PathBuf;
use anyhow::Result;
use surveytex::aggregator::{aggregate, find_csv_files};
use crate::common;

const MARKER: &str = "[BILD]";

fn columns(names: &[&str]) -> Vec<String> {
    names.iter().map(|n| n.to_string()).collect()
}

/// Test that only the file containing the target column contributes to its bucket
#[test]
fn test_aggregate_withColumnInOneFileOnly_shouldBucketOnlyThatFile() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let dir = temp_dir.path().to_path_buf();

    let a = common::create_survey_csv(&dir, "a.csv", "Das war gut:", &["Gut!"])?;
    let b = common::create_survey_csv(&dir, "b.csv", "Etwas anderes:", &["egal"])?;

    let target = columns(&["Das war gut:"]);
    let aggregation = aggregate(&[a, b], &target, b';', MARKER);

    let bucket = aggregation.bucket("Das war gut:");
    assert_eq!(bucket.len(), 1);
    assert_eq!(bucket[0].comment, "Gut!");
    assert_eq!(bucket[0].source, "a");

    Ok(())
}

/// Test that processed count equals parsed files regardless of matched columns
#[test]
fn test_aggregate_withUnmatchedColumns_shouldStillCountParsedFiles() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let dir = temp_dir.path().to_path_buf();

    let a = common::create_survey_csv(&dir, "a.csv", "Das war gut:", &["Gut!"])?;
    let b = common::create_survey_csv(&dir, "b.csv", "Etwas anderes:", &["egal"])?;

    let target = columns(&["Das war gut:"]);
    let aggregation = aggregate(&[a, b], &target, b';', MARKER);

    assert_eq!(aggregation.processed_files, 2);
    assert_eq!(aggregation.total_responses(), 1);

    Ok(())
}

/// Test that an unreadable file is skipped and not counted
#[test]
fn test_aggregate_withUnreadableFile_shouldSkipAndContinue() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let dir = temp_dir.path().to_path_buf();

    let good = common::create_survey_csv(&dir, "good.csv", "Das war gut:", &["Gut!"])?;
    let missing = PathBuf::from(temp_dir.path().join("vanished.csv"));

    let target = columns(&["Das war gut:"]);
    let aggregation = aggregate(&[missing, good], &target, b';', MARKER);

    assert_eq!(aggregation.processed_files, 1);
    assert_eq!(aggregation.bucket("Das war gut:").len(), 1);

    Ok(())
}

/// Test that empty, whitespace and marker-tagged values are filtered out
#[test]
fn test_aggregate_withSentinelAndEmptyValues_shouldFilterThem() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let dir = temp_dir.path().to_path_buf();

    let file = common::create_survey_csv(
        &dir,
        "a.csv",
        "Das war gut:",
        &["Gut!", "", "[BILD]", "   "],
    )?;

    let target = columns(&["Das war gut:"]);
    let aggregation = aggregate(&[file], &target, b';', MARKER);

    let bucket = aggregation.bucket("Das war gut:");
    assert_eq!(bucket.len(), 1);
    assert_eq!(bucket[0].comment, "Gut!");

    Ok(())
}

/// Test that bucket insertion order follows file order then row order
#[test]
fn test_aggregate_withMultipleFiles_shouldKeepFileThenRowOrder() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let dir = temp_dir.path().to_path_buf();

    let a = common::create_survey_csv(&dir, "a.csv", "Das war gut:", &["eins", "zwei"])?;
    let b = common::create_survey_csv(&dir, "b.csv", "Das war gut:", &["drei"])?;

    let target = columns(&["Das war gut:"]);
    let aggregation = aggregate(&[a, b], &target, b';', MARKER);

    let comments: Vec<&str> = aggregation
        .bucket("Das war gut:")
        .iter()
        .map(|r| r.comment.as_str())
        .collect();
    assert_eq!(comments, vec!["eins", "zwei", "drei"]);

    Ok(())
}

/// Test that discovery finds only csv files, non-recursively, sorted
#[test]
fn test_find_csv_files_withMixedDirectory_shouldReturnSortedCsvOnly() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let dir = temp_dir.path().to_path_buf();

    common::create_test_file(&dir, "b.csv", "x\n")?;
    common::create_test_file(&dir, "a.CSV", "x\n")?;
    common::create_test_file(&dir, "notes.txt", "x\n")?;
    std::fs::create_dir(dir.join("nested"))?;
    common::create_test_file(&dir.join("nested"), "c.csv", "x\n")?;

    let files = find_csv_files(&dir)?;
    let names: Vec<String> = files
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
        .collect();

    assert_eq!(names, vec!["a.CSV", "b.csv"]);

    Ok(())
}

/// Test that an empty directory yields no files
#[test]
fn test_find_csv_files_withEmptyDirectory_shouldReturnEmpty() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;

    let files = find_csv_files(temp_dir.path())?;

    assert!(files.is_empty());

    Ok(())
}
