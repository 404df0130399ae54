//! Progress reporting infrastructure

use indicatif::{MultiProgress, ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::borrow::Cow;

/// CLI progress report of ongoing operations
///
/// To avoid corrupted terminal output, you should not write anything to stdout
/// or stderr yourself as long as a report is being displayed. Please use logs
/// for debug messages.
#[derive(Clone, Debug, Default)]
pub struct ProgressReport(MultiProgress);
//
impl ProgressReport {
    /// Prepare to report progress on the cli
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepare a report that is never displayed
    pub fn hidden() -> Self {
        Self(MultiProgress::with_draw_target(ProgressDrawTarget::hidden()))
    }

    /// Prepare to report on a new operation
    pub fn add(&self, what: impl Into<Cow<'static, str>>, work: Work) -> ProgressTracker {
        let (bar, template) = match work {
            Work::Bytes(len) => (
                ProgressBar::new(len),
                "{prefix} {wide_bar} {decimal_bytes}/{decimal_total_bytes} ({decimal_bytes_per_sec})",
            ),
            Work::UnknownBytes => (
                ProgressBar::new_spinner(),
                "{prefix} {spinner} {decimal_bytes} ({decimal_bytes_per_sec})",
            ),
            Work::Records => (
                ProgressBar::new_spinner(),
                "{prefix} {spinner} {human_pos} records ({per_sec})",
            ),
        };
        let bar = bar.with_prefix(what).with_style(
            ProgressStyle::with_template(template)
                .expect("all styles above should be valid indicatif styles"),
        );
        ProgressTracker(self.0.add(bar))
    }
}

/// Work whose progression can be tracked
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq)]
pub enum Work {
    /// Known amount of bytes to be processed
    Bytes(u64),

    /// Bytes to be processed, total not known in advance
    UnknownBytes,

    /// Records to be parsed, total not known in advance
    Records,
}

/// Mechanism to track progress
#[derive(Clone, Debug)]
pub struct ProgressTracker(ProgressBar);
//
impl ProgressTracker {
    /// Show that a certain amount of progress has been made
    pub fn make_progress(&self, progress: u64) {
        self.0.inc(progress);
    }

    /// Amount of progress made so far
    pub fn position(&self) -> u64 {
        self.0.position()
    }

    /// Hide the progress bar once the work is done
    pub fn finish(&self) {
        self.0.finish_and_clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_report_still_counts() {
        let report = ProgressReport::hidden();
        let records = report.add("Parsing", Work::Records);
        records.make_progress(2);
        records.make_progress(3);
        assert_eq!(records.position(), 5);
        records.finish();

        let bytes = report.add("Reading", Work::Bytes(10));
        bytes.make_progress(10);
        assert_eq!(bytes.position(), 10);
    }
}
