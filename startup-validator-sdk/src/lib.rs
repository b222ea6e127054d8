//! Logging vocabulary shared by the startup validator binaries.
//!
//! Two layers live here:
//! - [`WorkflowLog`] structured events, emitted as `__WF_EVENT__:<json>` lines on
//!   stderr so a supervising process can follow a run step by step.
//! - Console macros (`log_info!`, `log_error!`, ...) for the
//!   human-readable output on stdout.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicBool, Ordering};

static EVENTS_ENABLED: AtomicBool = AtomicBool::new(false);

/// Turn structured event emission on or off for the whole process.
pub fn set_events_enabled(enabled: bool) {
    EVENTS_ENABLED.store(enabled, Ordering::Relaxed);
}

/// Whether [`WorkflowLog::emit`] currently writes anything.
pub fn events_enabled() -> bool {
    EVENTS_ENABLED.load(Ordering::Relaxed)
}

/// Prefix marking a structured event line on stderr
pub const EVENT_PREFIX: &str = "__WF_EVENT__:";

/// Structured logging events emitted by the analysis workflow
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum WorkflowLog {
    /// Analysis run started for an idea
    RunStarted { idea: String, total_steps: usize },
    /// Analysis step started
    StepStarted {
        step: usize,
        name: String,
        total_steps: usize,
    },
    /// Analysis step completed
    StepCompleted {
        step: usize,
        name: String,
        response_chars: usize,
    },
    /// Analysis step failed; the run stops here
    StepFailed {
        step: usize,
        name: String,
        error: String,
    },
    /// All steps completed
    RunCompleted { total_steps: usize },
    /// Report written to disk
    ReportSaved { file_path: String },
    /// Reports moved into the archive folder
    ReportsArchived { moved: usize, older_than_days: u64 },
}

impl WorkflowLog {
    /// Serialize this event into its stderr line form
    pub fn to_line(&self) -> Option<String> {
        serde_json::to_string(self)
            .ok()
            .map(|json| format!("{}{}", EVENT_PREFIX, json))
    }

    /// Parse a stderr line back into an event, if it is one
    pub fn from_line(line: &str) -> Option<Self> {
        let json = line.trim_end().strip_prefix(EVENT_PREFIX)?;
        serde_json::from_str(json).ok()
    }

    /// Emit this log event to stderr (no-op unless events are enabled)
    pub fn emit(&self) {
        if !events_enabled() {
            return;
        }
        if let Some(line) = self.to_line() {
            use std::io::Write;
            eprintln!("{}", line);
            let _ = std::io::stderr().flush();
        }
    }
}

#[macro_export]
macro_rules! log_run_start {
    ($idea:expr, $total:expr) => {
        $crate::WorkflowLog::RunStarted {
            idea: $idea.to_string(),
            total_steps: $total,
        }
        .emit();
    };
}

#[macro_export]
macro_rules! log_run_complete {
    ($total:expr) => {
        $crate::WorkflowLog::RunCompleted { total_steps: $total }.emit();
    };
}

#[macro_export]
macro_rules! log_step_start {
    ($step:expr, $name:expr, $total:expr) => {
        $crate::WorkflowLog::StepStarted {
            step: $step,
            name: $name.to_string(),
            total_steps: $total,
        }
        .emit();
    };
}

#[macro_export]
macro_rules! log_step_complete {
    ($step:expr, $name:expr, $chars:expr) => {
        $crate::WorkflowLog::StepCompleted {
            step: $step,
            name: $name.to_string(),
            response_chars: $chars,
        }
        .emit();
    };
}

#[macro_export]
macro_rules! log_step_failed {
    ($step:expr, $name:expr, $error:expr) => {
        $crate::WorkflowLog::StepFailed {
            step: $step,
            name: $name.to_string(),
            error: $error.to_string(),
        }
        .emit();
    };
}

#[macro_export]
macro_rules! log_report_saved {
    ($path:expr) => {
        $crate::WorkflowLog::ReportSaved {
            file_path: $path.to_string(),
        }
        .emit();
    };
}

#[macro_export]
macro_rules! log_reports_archived {
    ($moved:expr, $days:expr) => {
        $crate::WorkflowLog::ReportsArchived {
            moved: $moved,
            older_than_days: $days,
        }
        .emit();
    };
}

// ============================================================================
// Console Logging Macros
// ============================================================================
// Human-readable coloured output, complementing the structured WorkflowLog
// events above.
// ============================================================================

/// Logs an informational message.
///
/// # Example
/// ```
/// use startup_validator_sdk::log_info;
/// log_info!("Loading configuration...");
/// let n = 3;
/// log_info!("Running {} examples", n);
/// ```
#[macro_export]
macro_rules! log_info {
    ($message:expr) => {
        println!("\x1b[36mℹ {}\x1b[0m", $message);
    };
    ($fmt:expr, $($arg:tt)*) => {
        println!("\x1b[36mℹ {}\x1b[0m", format!($fmt, $($arg)*));
    };
}

/// Logs a warning message on stderr, keeping stdout free for command output.
///
/// ```text
/// ⚠ Warning: Timeline CSV export emits the header row only
/// ```
#[macro_export]
macro_rules! log_warning {
    ($message:expr) => {
        eprintln!("\x1b[33m⚠ Warning: {}\x1b[0m", $message);
    };
    ($fmt:expr, $($arg:tt)*) => {
        eprintln!("\x1b[33m⚠ Warning: {}\x1b[0m", format!($fmt, $($arg)*));
    };
}

/// Logs an error line on stdout, next to the step output it interrupts.
///
/// ```text
/// ❌ Error in market analysis: connection refused
/// ```
#[macro_export]
macro_rules! log_error {
    ($message:expr) => {
        println!("❌ {}", $message);
    };
    ($fmt:expr, $($arg:tt)*) => {
        println!("❌ {}", format!($fmt, $($arg)*));
    };
}

/// Logs that a file has been saved.
///
/// ```text
/// ✅ Analysis saved to: ./analysis_20250101_120000.json
/// ```
#[macro_export]
macro_rules! log_file_saved {
    ($path:expr) => {
        println!("\n✅ Analysis saved to: {}", $path);
    };
}
