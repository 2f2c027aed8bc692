// Directory (batch) conversion command.

use std::path::{Path, PathBuf};

use crate::config::RuntimeConfig;
use crate::convert::{BatchSession, ConversionUnit, FormatConverter, SessionReport};
use crate::decoder::Mdi2TiffDecoder;
use crate::error::ConvertResult;
use crate::report::ConversionReporter;

/// Convert every `.mdi` file in `input_dir`.
///
/// Without an explicit output directory the configured default (`./out`) is
/// used. Returns the session counters; the caller turns them into an exit
/// code.
pub fn execute_convert_directory(
    config: &RuntimeConfig,
    input_dir: &Path,
    output_dir: Option<PathBuf>,
    format: &str,
    reporter: &dyn ConversionReporter,
) -> ConvertResult<SessionReport> {
    let binary = config.require_binary()?;
    config.ensure_scratch_dir(reporter)?;

    let output_dir = output_dir.unwrap_or_else(|| {
        reporter.warning(&format!(
            "No output directory was given, defaulting to: '{}'",
            config.default_output_dir.display()
        ));
        config.default_output_dir.clone()
    });

    let decoder = Mdi2TiffDecoder::new(binary);
    let converter = FormatConverter::new(&config.scratch_dir);
    let unit = ConversionUnit::new(&decoder, &converter, &config.log_path);
    let session = BatchSession::new(unit);
    session.convert_all(input_dir, &output_dir, format, reporter)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConvertError;
    use crate::formats;
    use crate::report::SilentReporter;
    use tempfile::tempdir;

    #[test]
    fn test_missing_binary_is_fatal_before_any_scanning() {
        let dir = tempdir().unwrap();
        let config = RuntimeConfig {
            binary_path: None,
            scratch_dir: dir.path().join("scratch"),
            log_path: dir.path().join("mdi2tiff.log"),
            default_input_dir: dir.path().join("in"),
            default_output_dir: dir.path().join("out"),
            default_format: formats::DEFAULT_FORMAT.to_string(),
            debug: false,
        };

        let result =
            execute_convert_directory(&config, dir.path(), None, "tiff", &SilentReporter);
        assert!(matches!(result, Err(ConvertError::MissingBinary { .. })));
    }
}
