// Reporting seam between the conversion pipeline and the terminal.

use mockall::automock;

use crate::convert::SessionReport;

pub mod console;

pub use console::{ConsoleReporter, SilentReporter};

/// Abstraction over progress and result output.
///
/// The pipeline never prints directly; everything goes through this trait so
/// tests can run silent or assert on interactions.
#[automock]
pub trait ConversionReporter: Send + Sync {
    /// Neutral progress message.
    fn info(&self, message: &str);

    /// Something unexpected that does not stop the run.
    fn warning(&self, message: &str);

    /// A failure, per-file or fatal.
    fn error(&self, message: &str);

    /// A completed conversion.
    fn success(&self, message: &str);

    /// Extra detail, only shown when debug output is enabled.
    fn debug(&self, message: &str);

    /// Aggregate counters at the end of a batch run.
    fn summary(&self, report: &SessionReport);
}

impl ConversionReporter for Box<dyn ConversionReporter> {
    fn info(&self, message: &str) {
        self.as_ref().info(message);
    }

    fn warning(&self, message: &str) {
        self.as_ref().warning(message);
    }

    fn error(&self, message: &str) {
        self.as_ref().error(message);
    }

    fn success(&self, message: &str) {
        self.as_ref().success(message);
    }

    fn debug(&self, message: &str) {
        self.as_ref().debug(message);
    }

    fn summary(&self, report: &SessionReport) {
        self.as_ref().summary(report);
    }
}
