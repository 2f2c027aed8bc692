// Seam around the external MDI decoder.

use std::path::Path;

use mockall::automock;

use crate::error::ConvertResult;

pub mod mdi2tiff;

pub use mdi2tiff::Mdi2TiffDecoder;

/// Outcome of one external decode invocation.
///
/// The process exit code is the only signal the external tool gives, so it is
/// wrapped here instead of leaking raw integers through the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeStatus {
    /// The tool exited with code zero.
    Completed,
    /// The tool exited with a nonzero code, or was killed by a signal.
    Failed { code: Option<i32> },
}

/// Abstraction over the MDI-to-TIFF decode step.
#[automock]
pub trait MdiDecoder: Send + Sync {
    /// Decode `source` into a TIFF at `dest`, writing diagnostics to `log`.
    ///
    /// Blocks until the external process returns; there is no timeout.
    fn decode(&self, source: &Path, dest: &Path, log: &Path) -> ConvertResult<DecodeStatus>;
}

impl MdiDecoder for Box<dyn MdiDecoder> {
    fn decode(&self, source: &Path, dest: &Path, log: &Path) -> ConvertResult<DecodeStatus> {
        self.as_ref().decode(source, dest, log)
    }
}
