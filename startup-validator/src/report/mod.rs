//! Saved analysis reports.
//!
//! - `store` - save/load/list/archive of `analysis_<timestamp>.json` files
//! - `summary` - comparison, executive summary and CSV export helpers

pub mod store;
pub mod summary;

pub use store::{
    archive_reports, list_reports, load_report, save_report, Report, DEFAULT_ARCHIVE_DAYS,
};
pub use summary::{compare_reports, executive_summary, export_timeline_csv, IdeaComparison};
