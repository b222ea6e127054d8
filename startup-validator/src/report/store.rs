//! Report persistence: save, load, list and archive timestamped JSON files.

use anyhow::{Context, Result};
use chrono::{Local, NaiveDateTime, SubsecRound};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

use startup_validator_sdk::{log_error, log_file_saved, log_report_saved, log_reports_archived};

use crate::analysis::types::AnalysisResults;

/// Prefix shared by every report file name
pub const REPORT_PREFIX: &str = "analysis_";

/// Extension shared by every report file name
pub const REPORT_EXTENSION: &str = ".json";

/// Timestamp layout embedded in report file names
pub const FILENAME_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Sub-folder archived reports are moved into
pub const ARCHIVE_DIR: &str = "archived";

/// Default age threshold for [`archive_reports`]
pub const DEFAULT_ARCHIVE_DAYS: u64 = 30;

const SECS_PER_DAY: u64 = 24 * 60 * 60;

/// A persisted analysis run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// Local creation time, ISO-8601 without offset
    pub timestamp: NaiveDateTime,
    pub idea: String,
    pub analysis: AnalysisResults,
}

impl Report {
    pub fn new(idea: impl Into<String>, analysis: AnalysisResults, timestamp: NaiveDateTime) -> Self {
        Self {
            timestamp,
            idea: idea.into(),
            analysis,
        }
    }

    /// File name this report is saved under
    pub fn file_name(&self) -> String {
        format!(
            "{}{}{}",
            REPORT_PREFIX,
            self.timestamp.format(FILENAME_TIMESTAMP_FORMAT),
            REPORT_EXTENSION
        )
    }
}

/// Whether `name` follows the `analysis_*.json` convention
pub fn is_report_file_name(name: &str) -> bool {
    name.starts_with(REPORT_PREFIX) && name.ends_with(REPORT_EXTENSION)
}

/// Write `idea` and its six results to `dir/analysis_<timestamp>.json`.
///
/// An existing file with the same name is overwritten.
pub fn save_report(dir: &Path, idea: &str, analysis: &AnalysisResults) -> Result<PathBuf> {
    let now = Local::now().naive_local().trunc_subsecs(6);
    let report = Report::new(idea, analysis.clone(), now);
    write_report(dir, &report)
}

/// Write an already-built report into `dir`
pub fn write_report(dir: &Path, report: &Report) -> Result<PathBuf> {
    let path = dir.join(report.file_name());
    let content = serde_json::to_string_pretty(report)?;
    std::fs::write(&path, content)
        .with_context(|| format!("Failed to write report file: {}", path.display()))?;

    log_file_saved!(path.display());
    log_report_saved!(path.display());
    Ok(path)
}

/// Load a report; a missing file is reported and yields `Ok(None)`
pub fn load_report(path: &Path) -> Result<Option<Report>> {
    if !path.exists() {
        log_error!("File not found: {}", path.display());
        return Ok(None);
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read report file: {}", path.display()))?;
    let report = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse report JSON from: {}", path.display()))?;
    Ok(Some(report))
}

/// Report file names directly inside `dir`, sorted (oldest timestamp first)
pub fn find_report_files(dir: &Path) -> Result<Vec<String>> {
    let entries = std::fs::read_dir(dir)
        .with_context(|| format!("Failed to read directory: {}", dir.display()))?;

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        if let Some(name) = entry.file_name().to_str() {
            if is_report_file_name(name) {
                names.push(name.to_string());
            }
        }
    }
    names.sort();
    Ok(names)
}

/// List saved reports in `dir`, printing a numbered listing
pub fn list_reports(dir: &Path) -> Result<Vec<String>> {
    let reports = find_report_files(dir)?;

    if reports.is_empty() {
        println!("No saved reports found.");
        return Ok(reports);
    }

    println!("\nSaved Analysis Reports:");
    println!("{}", "-".repeat(60));
    for (i, report) in reports.iter().enumerate() {
        println!("{}. {}", i + 1, report);
    }

    Ok(reports)
}

/// Move reports older than `days` whole days into `dir/archived/`
pub fn archive_reports(dir: &Path, days: u64) -> Result<usize> {
    archive_reports_at(dir, days, SystemTime::now())
}

/// [`archive_reports`] with an explicit "now", for deterministic ageing
pub fn archive_reports_at(dir: &Path, days: u64, now: SystemTime) -> Result<usize> {
    let archive_dir = dir.join(ARCHIVE_DIR);
    std::fs::create_dir_all(&archive_dir)
        .with_context(|| format!("Failed to create archive directory: {}", archive_dir.display()))?;

    let mut moved = 0;
    for name in find_report_files(dir)? {
        let path = dir.join(&name);
        let modified = std::fs::metadata(&path)
            .and_then(|m| m.modified())
            .with_context(|| format!("Failed to read modification time: {}", path.display()))?;

        if age_in_days(now, modified) > days {
            let target = archive_dir.join(&name);
            std::fs::rename(&path, &target).with_context(|| {
                format!("Failed to move {} to {}", path.display(), target.display())
            })?;
            moved += 1;
        }
    }

    println!("✅ Archived {} reports older than {} days", moved, days);
    log_reports_archived!(moved, days);
    Ok(moved)
}

/// Whole days elapsed between `modified` and `now`; future times count as zero
fn age_in_days(now: SystemTime, modified: SystemTime) -> u64 {
    now.duration_since(modified)
        .unwrap_or(Duration::ZERO)
        .as_secs()
        / SECS_PER_DAY
}
