// Conversion of a single source file.

use std::path::Path;

use super::reencode::{FormatConverter, OutputPlan};
use super::types::Outcome;
use crate::decoder::{DecodeStatus, MdiDecoder};
use crate::error::{ConvertError, ConvertResult};
use crate::report::ConversionReporter;

/// Converts one source file: external decode, then an optional re-encode
/// pass when the requested format is not TIFF.
pub struct ConversionUnit<'a, D: MdiDecoder> {
    decoder: &'a D,
    converter: &'a FormatConverter,
    log_path: &'a Path,
}

impl<'a, D: MdiDecoder> ConversionUnit<'a, D> {
    pub fn new(decoder: &'a D, converter: &'a FormatConverter, log_path: &'a Path) -> Self {
        Self {
            decoder,
            converter,
            log_path,
        }
    }

    /// Convert `source` into `output` in the requested format.
    ///
    /// Per-file problems are reported and folded into the returned outcome;
    /// the caller decides whether a failed outcome ends the run. Repeated
    /// runs are idempotent: an existing destination is skipped, never
    /// overwritten.
    pub fn convert(
        &self,
        source: &Path,
        output: &Path,
        format: &str,
        reporter: &dyn ConversionReporter,
    ) -> Outcome {
        match self.try_convert(source, output, format, reporter) {
            Ok(outcome) => outcome,
            Err(error) => {
                reporter.error(&error.to_string());
                Outcome::Failed
            }
        }
    }

    fn try_convert(
        &self,
        source: &Path,
        output: &Path,
        format: &str,
        reporter: &dyn ConversionReporter,
    ) -> ConvertResult<Outcome> {
        if !source.exists() {
            return Err(ConvertError::missing_file(source));
        }

        let (plan, format) = self.converter.resolve_output(output, format, reporter)?;
        if plan.final_path().exists() {
            reporter.warning(&format!(
                "'{}' already exists, skipping.",
                plan.final_path().display()
            ));
            return Ok(Outcome::Skipped);
        }

        reporter.debug(&format!(
            "Decoding '{}' to '{}'",
            source.display(),
            plan.decoder_target().display()
        ));
        let status = self
            .decoder
            .decode(source, plan.decoder_target(), self.log_path)?;
        if let DecodeStatus::Failed { code } = status {
            return Err(ConvertError::DecoderFailed {
                path: source.to_path_buf(),
                code,
            });
        }

        if let OutputPlan::Staged {
            intermediate,
            final_path,
        } = &plan
        {
            reporter.debug(&format!(
                "Re-encoding '{}' as '{}'",
                intermediate.display(),
                final_path.display()
            ));
            self.converter.reencode(intermediate, final_path, &format)?;
        }

        reporter.success(&format!(
            "{} -> {}: ok",
            source.display(),
            plan.final_path().display()
        ));
        Ok(Outcome::Success)
    }
}
