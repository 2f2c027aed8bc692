// Runtime configuration: where the decoder lives, where intermediate files
// go, and the defaults used when the command line leaves something out.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ConvertError, ConvertResult};
use crate::formats;
use crate::report::ConversionReporter;

/// Name of the bundled decoder executable.
pub const DECODER_BINARY_NAME: &str = "MDI2TIF.EXE";

/// Environment variable that overrides the decoder location.
pub const DECODER_ENV_OVERRIDE: &str = "MDI2IMG_DECODER";

const SCRATCH_DIR_NAME: &str = "mdi_to_img_temp";
const DECODER_LOG_NAME: &str = "mdi2tiff.log";

/// Resolved runtime settings shared by every command.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// Discovered decoder location; `None` until [`Self::require_binary`]
    /// turns that into a fatal error.
    pub binary_path: Option<PathBuf>,
    /// Scratch location for intermediate TIFF files.
    pub scratch_dir: PathBuf,
    /// Log file handed to the external decoder.
    pub log_path: PathBuf,
    pub default_input_dir: PathBuf,
    pub default_output_dir: PathBuf,
    pub default_format: String,
    pub debug: bool,
}

impl RuntimeConfig {
    /// Build the configuration from the process environment.
    pub fn discover(debug: bool) -> Self {
        let temp = env::temp_dir();
        let cwd = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        Self {
            binary_path: find_decoder_binary(),
            scratch_dir: temp.join(SCRATCH_DIR_NAME),
            log_path: temp.join(DECODER_LOG_NAME),
            default_input_dir: cwd.join("in"),
            default_output_dir: cwd.join("out"),
            default_format: formats::DEFAULT_FORMAT.to_string(),
            debug,
        }
    }

    /// The decoder location is the one fatal prerequisite of every run.
    pub fn require_binary(&self) -> ConvertResult<&Path> {
        self.binary_path
            .as_deref()
            .ok_or_else(|| ConvertError::MissingBinary {
                name: DECODER_BINARY_NAME.to_string(),
            })
    }

    /// Create the scratch directory on first use.
    pub fn ensure_scratch_dir(&self, reporter: &dyn ConversionReporter) -> ConvertResult<()> {
        if self.scratch_dir.exists() {
            return Ok(());
        }
        reporter.info("Temporary export location does not exist. Creating.");
        fs::create_dir_all(&self.scratch_dir).map_err(|source| ConvertError::DirectoryCreation {
            path: self.scratch_dir.clone(),
            source,
        })?;
        reporter.success(&format!(
            "Temporary export folder created in: '{}'.",
            self.scratch_dir.display()
        ));
        Ok(())
    }
}

/// Locate the decoder: environment override first, then the `bin/` directory
/// next to the running executable.
fn find_decoder_binary() -> Option<PathBuf> {
    if let Ok(overridden) = env::var(DECODER_ENV_OVERRIDE) {
        let path = PathBuf::from(overridden);
        if path.exists() {
            return Some(path);
        }
    }
    let exe = env::current_exe().ok()?;
    let candidate = exe.parent()?.join("bin").join(DECODER_BINARY_NAME);
    candidate.exists().then_some(candidate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::SilentReporter;
    use tempfile::tempdir;

    fn config_with(scratch_dir: PathBuf) -> RuntimeConfig {
        RuntimeConfig {
            binary_path: None,
            scratch_dir,
            log_path: PathBuf::from("mdi2tiff.log"),
            default_input_dir: PathBuf::from("in"),
            default_output_dir: PathBuf::from("out"),
            default_format: formats::DEFAULT_FORMAT.to_string(),
            debug: false,
        }
    }

    #[test]
    fn test_discover_fills_in_the_defaults() {
        let config = RuntimeConfig::discover(false);
        assert!(config.scratch_dir.ends_with(SCRATCH_DIR_NAME));
        assert!(config.log_path.ends_with(DECODER_LOG_NAME));
        assert!(config.default_input_dir.ends_with("in"));
        assert!(config.default_output_dir.ends_with("out"));
        assert_eq!(config.default_format, "tiff");
    }

    #[test]
    fn test_require_binary_fails_when_nothing_was_found() {
        let config = config_with(PathBuf::from("scratch"));
        let result = config.require_binary();
        assert!(matches!(result, Err(ConvertError::MissingBinary { .. })));
        assert!(result
            .unwrap_err()
            .to_string()
            .contains(DECODER_BINARY_NAME));
    }

    #[test]
    fn test_require_binary_returns_the_discovered_path() {
        let mut config = config_with(PathBuf::from("scratch"));
        config.binary_path = Some(PathBuf::from("/opt/mdi/MDI2TIF.EXE"));
        assert_eq!(
            config.require_binary().unwrap(),
            Path::new("/opt/mdi/MDI2TIF.EXE")
        );
    }

    #[test]
    fn test_ensure_scratch_dir_creates_it_once() {
        let dir = tempdir().unwrap();
        let config = config_with(dir.path().join("scratch"));

        config.ensure_scratch_dir(&SilentReporter).unwrap();
        assert!(config.scratch_dir.is_dir());

        // Second call is a no-op.
        config.ensure_scratch_dir(&SilentReporter).unwrap();
    }
}
