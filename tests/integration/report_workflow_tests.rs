/*!
 * Integration tests for the full report generation workflow
 */

use anyhow::Result;
use surveytex::app_config::Config;
use surveytex::app_controller::Controller;
use surveytex::file_utils::FileManager;
use crate::common;

const GOOD_COLUMN: &str = "Das war gut:";

fn config_for(temp_dir: &tempfile::TempDir, output_name: &str) -> Config {
    Config {
        input_dir: temp_dir.path().to_string_lossy().to_string(),
        output_file: temp_dir
            .path()
            .join(output_name)
            .to_string_lossy()
            .to_string(),
        compile_pdf: false,
        ..Default::default()
    }
}

/// Test the documented two-file scenario end to end
#[test]
fn test_report_workflow_withTwoFiles_shouldBundleTwoResponses() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let dir = temp_dir.path().to_path_buf();

    // Empty and marker-tagged values must not survive sanitization
    common::create_survey_csv(&dir, "a.csv", GOOD_COLUMN, &["Gut!", "", "[BILD]"])?;
    common::create_survey_csv(&dir, "b.csv", GOOD_COLUMN, &["Toll_gemacht"])?;

    let config = config_for(&temp_dir, "report.tex");
    let output_file = config.output_file.clone();
    Controller::with_config(config)?.run()?;

    let document = FileManager::read_to_string(&output_file)?;

    assert!(document.contains("\\textbf{Anzahl verarbeiteter Dateien:} 2"));
    assert!(document.contains("\\textbf{Anzahl Antworten:} 2"));
    assert!(document.contains("\\item Gut! \\textcolor{gray}{\\small(a)}"));
    assert!(document.contains("\\item Toll\\_gemacht \\textcolor{gray}{\\small(b)}"));

    Ok(())
}

/// Test that reserved characters in responses arrive escaped in the document
#[test]
fn test_report_workflow_withReservedCharacters_shouldEscapeThem() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let dir = temp_dir.path().to_path_buf();

    common::create_survey_csv(&dir, "a.csv", GOOD_COLUMN, &["100% super", "AT&T war da"])?;

    let config = config_for(&temp_dir, "report.tex");
    let output_file = config.output_file.clone();
    Controller::with_config(config)?.run()?;

    let document = FileManager::read_to_string(&output_file)?;

    assert!(document.contains("100\\% super"));
    assert!(document.contains("AT\\&T war da"));

    Ok(())
}

/// Test that an empty input directory produces no document
#[test]
fn test_report_workflow_withNoCsvFiles_shouldProduceNoDocument() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;

    let config = config_for(&temp_dir, "report.tex");
    let output_file = config.output_file.clone();
    Controller::with_config(config)?.run()?;

    assert!(!FileManager::file_exists(&output_file));

    Ok(())
}

/// Test that categories without responses get the notice section
#[test]
fn test_report_workflow_withOneMatchedColumn_shouldEmitNoticeForOthers() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let dir = temp_dir.path().to_path_buf();

    common::create_survey_csv(&dir, "a.csv", GOOD_COLUMN, &["Gut!"])?;

    let config = config_for(&temp_dir, "report.tex");
    let output_file = config.output_file.clone();
    Controller::with_config(config)?.run()?;

    let document = FileManager::read_to_string(&output_file)?;

    // Two of the three default categories stay empty
    assert_eq!(
        document
            .matches("Keine Antworten in dieser Kategorie gefunden.")
            .count(),
        2
    );

    Ok(())
}

/// Test that a windows-1252 encoded export flows through to the document
#[test]
fn test_report_workflow_withLegacyEncoding_shouldDecodeAndEscape() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let dir = temp_dir.path().to_path_buf();

    // "Das war gut:\nSch\xF6n" - invalid as UTF-8, valid windows-1252
    common::create_test_file_bytes(&dir, "legacy.csv", b"Das war gut:\nSch\xF6n\n")?;

    let config = config_for(&temp_dir, "report.tex");
    let output_file = config.output_file.clone();
    Controller::with_config(config)?.run()?;

    let document = FileManager::read_to_string(&output_file)?;

    assert!(document.contains("Sch{\\\"o}n"));

    Ok(())
}
