//! Tests for report persistence

use super::common::*;
use std::fs::File;
use std::path::Path;
use std::process::Command;
use std::time::{Duration, SystemTime};
use startup_validator::report::store::{
    archive_reports, archive_reports_at, find_report_files, list_reports, load_report,
    save_report, write_report, Report, ARCHIVE_DIR,
};
use startup_validator::report::summary::TIMELINE_CSV_HEADER;

const DAY: u64 = 24 * 60 * 60;

fn touch(path: &Path, age_days: u64) {
    std::fs::write(path, "{}").unwrap();
    let mtime = SystemTime::now() - Duration::from_secs(age_days * DAY);
    File::options()
        .write(true)
        .open(path)
        .unwrap()
        .set_modified(mtime)
        .unwrap();
}

#[test]
fn test_save_then_load_roundtrip() {
    let dir = create_temp_dir();
    let idea = "A task management app for remote teams, with \"quotes\" and {braces}";
    let results = sample_results();

    let path = save_report(dir.path(), idea, &results).unwrap();
    let report = load_report(&path).unwrap().unwrap();

    assert_eq!(report.idea, idea);
    assert_eq!(report.analysis, results);
    let name = path.file_name().unwrap().to_str().unwrap();
    assert!(matches_report_pattern(name), "unexpected file name {}", name);
    assert_eq!(report.file_name(), name);
}

#[test]
fn test_saved_json_layout() {
    let dir = create_temp_dir();
    let path = save_report(dir.path(), "Idea", &sample_results()).unwrap();

    let raw = std::fs::read_to_string(&path).unwrap();
    assert!(raw.contains("\n  \"idea\": \"Idea\""), "report is not indented JSON");

    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let keys: Vec<&str> = json["analysis"]
        .as_object()
        .unwrap()
        .keys()
        .map(String::as_str)
        .collect();
    for key in ["feasibility", "market", "risks", "features", "mvp", "timeline"] {
        assert!(keys.contains(&key), "missing analysis key {}", key);
    }
    assert_eq!(keys.len(), 6);
    assert!(json["timestamp"].as_str().unwrap().contains('T'));
}

#[test]
fn test_load_missing_returns_none() {
    let dir = create_temp_dir();
    let result = load_report(&dir.path().join("analysis_20200101_000000.json")).unwrap();
    assert!(result.is_none());
}

#[test]
fn test_load_malformed_is_error() {
    let dir = create_temp_dir();
    let path = dir.path().join("analysis_20200101_000000.json");
    std::fs::write(&path, "not json").unwrap();
    assert!(load_report(&path).is_err());
}

#[test]
fn test_list_only_matching_files_sorted() {
    let dir = create_temp_dir();
    for name in [
        "analysis_20250102_000000.json",
        "analysis_20250101_000000.json",
        "analysis_20250101_000000.yaml",
        "notes.json",
    ] {
        std::fs::write(dir.path().join(name), "{}").unwrap();
    }
    std::fs::create_dir(dir.path().join("analysis_dir.json")).unwrap();

    let reports = list_reports(dir.path()).unwrap();
    assert_eq!(
        reports,
        vec![
            "analysis_20250101_000000.json".to_string(),
            "analysis_20250102_000000.json".to_string(),
        ]
    );
}

#[test]
fn test_list_empty_directory() {
    let dir = create_temp_dir();
    assert!(list_reports(dir.path()).unwrap().is_empty());
}

#[test]
fn test_archive_moves_only_old_matching_files() {
    let dir = create_temp_dir();
    let old_report = dir.path().join("analysis_20240101_000000.json");
    let new_report = dir.path().join("analysis_20250101_000000.json");
    let old_other = dir.path().join("notes.json");
    touch(&old_report, 45);
    touch(&new_report, 2);
    touch(&old_other, 45);

    let moved = archive_reports(dir.path(), 30).unwrap();

    assert_eq!(moved, 1);
    assert!(!old_report.exists());
    assert!(dir
        .path()
        .join(ARCHIVE_DIR)
        .join("analysis_20240101_000000.json")
        .exists());
    assert!(new_report.exists());
    assert!(old_other.exists());
}

#[test]
fn test_archive_is_idempotent() {
    let dir = create_temp_dir();
    touch(&dir.path().join("analysis_20240101_000000.json"), 45);
    touch(&dir.path().join("analysis_20240201_000000.json"), 40);

    assert_eq!(archive_reports(dir.path(), 30).unwrap(), 2);
    assert_eq!(archive_reports(dir.path(), 30).unwrap(), 0);
    assert!(find_report_files(dir.path()).unwrap().is_empty());
    assert_eq!(
        find_report_files(&dir.path().join(ARCHIVE_DIR)).unwrap().len(),
        2
    );
}

#[test]
fn test_archive_threshold_is_strict() {
    let dir = create_temp_dir();
    let path = dir.path().join("analysis_20240101_000000.json");
    std::fs::write(&path, "{}").unwrap();
    let modified = std::fs::metadata(&path).unwrap().modified().unwrap();

    // Exactly 30 whole days old is not older than 30
    let now = modified + Duration::from_secs(30 * DAY + 60);
    assert_eq!(archive_reports_at(dir.path(), 30, now).unwrap(), 0);

    let now = modified + Duration::from_secs(31 * DAY);
    assert_eq!(archive_reports_at(dir.path(), 30, now).unwrap(), 1);
}

#[test]
fn test_archive_creates_folder_when_nothing_moves() {
    let dir = create_temp_dir();
    assert_eq!(archive_reports(dir.path(), 30).unwrap(), 0);
    assert!(dir.path().join(ARCHIVE_DIR).is_dir());
}

#[test]
fn test_write_report_overwrites_same_timestamp() {
    let dir = create_temp_dir();
    let ts = chrono::NaiveDate::from_ymd_opt(2025, 6, 1)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap();

    let first = Report::new("first", sample_results(), ts);
    let second = Report::new("second", sample_results(), ts);
    let p1 = write_report(dir.path(), &first).unwrap();
    let p2 = write_report(dir.path(), &second).unwrap();

    assert_eq!(p1, p2);
    assert_eq!(load_report(&p1).unwrap().unwrap().idea, "second");
}

#[test]
fn test_timeline_csv_command_writes_only_csv_to_stdout() {
    let dir = create_temp_dir();
    let path = save_report(dir.path(), "Idea", &sample_results()).unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_startup-validator"))
        .args(["reports", "timeline-csv"])
        .arg(&path)
        .current_dir(dir.path())
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), TIMELINE_CSV_HEADER);
    // The header-only notice goes to stderr
    assert!(String::from_utf8_lossy(&output.stderr).contains("header row only"));
}
