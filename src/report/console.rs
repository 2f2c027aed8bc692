use super::ConversionReporter;
use crate::convert::SessionReport;

/// Terminal reporter. Warnings and errors go to stderr, the rest to stdout.
#[derive(Debug, Clone, Default)]
pub struct ConsoleReporter {
    debug_enabled: bool,
}

impl ConsoleReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_debug(debug_enabled: bool) -> Self {
        Self { debug_enabled }
    }
}

impl ConversionReporter for ConsoleReporter {
    fn info(&self, message: &str) {
        println!("(mdi2img) {message}");
    }

    fn warning(&self, message: &str) {
        eprintln!("(mdi2img) ⚠️  {message}");
    }

    fn error(&self, message: &str) {
        eprintln!("(mdi2img) ❌ {message}");
    }

    fn success(&self, message: &str) {
        println!("(mdi2img) ✅ {message}");
    }

    fn debug(&self, message: &str) {
        if self.debug_enabled {
            println!("(mdi2img) [debug] {message}");
        }
    }

    fn summary(&self, report: &SessionReport) {
        println!("(mdi2img) Total items: {}", report.total_items);
        println!("(mdi2img) Total folders: {}", report.total_folders);
        println!("(mdi2img) Total number of files: {}", report.eligible_files);
        println!("(mdi2img) Total files skipped: {}", report.skipped);
        println!("(mdi2img) Total files success: {}", report.succeeded);
        println!("(mdi2img) Total files fails: {}", report.failed);
        if report.all_converted() {
            self.success("All files have been converted successfully.");
        } else {
            self.error("Some files could not be converted.");
        }
    }
}

/// Reporter that swallows everything. Used by tests and by internal
/// re-resolution steps that must not repeat warnings.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentReporter;

impl ConversionReporter for SilentReporter {
    fn info(&self, _message: &str) {}

    fn warning(&self, _message: &str) {}

    fn error(&self, _message: &str) {}

    fn success(&self, _message: &str) {}

    fn debug(&self, _message: &str) {}

    fn summary(&self, _report: &SessionReport) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_console_reporter_debug_flag() {
        let quiet = ConsoleReporter::new();
        assert!(!quiet.debug_enabled);

        let verbose = ConsoleReporter::with_debug(true);
        assert!(verbose.debug_enabled);
    }

    #[test]
    fn test_silent_reporter_accepts_everything() {
        let reporter = SilentReporter;
        reporter.info("info");
        reporter.warning("warning");
        reporter.error("error");
        reporter.success("success");
        reporter.debug("debug");
        reporter.summary(&SessionReport::default());
    }
}
