// Core result types for the conversion pipeline.

/// Result of converting a single file.
///
/// One explicit value per case; in particular "the destination already
/// exists" is its own state rather than being inferred from exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The destination file was produced.
    Success,
    /// The destination already existed; nothing was overwritten.
    Skipped,
    /// The decoder or the re-encode step failed.
    Failed,
}

/// Counters for one batch run.
///
/// A fresh report is built and returned by every run, so no state can leak
/// from one invocation into the next. After a run,
/// `eligible_files == succeeded + skipped + failed` always holds.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionReport {
    /// Immediate entries seen in the input directory, folders included.
    pub total_items: usize,
    /// Sub-directories, which are never descended into.
    pub total_folders: usize,
    /// Files carrying the source extension.
    pub eligible_files: usize,
    pub skipped: usize,
    pub succeeded: usize,
    pub failed: usize,
}

impl SessionReport {
    /// Fold one per-file outcome into the counters.
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Success => self.succeeded += 1,
            Outcome::Skipped => self.skipped += 1,
            Outcome::Failed => self.failed += 1,
        }
    }

    /// Overall verdict: a single failed file fails the whole batch.
    pub fn all_converted(&self) -> bool {
        self.failed == 0
    }
}
