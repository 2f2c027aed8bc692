// Format converter: decides where the decoder output lands and re-encodes
// intermediate TIFFs into the finally requested format.

use std::path::{Path, PathBuf};

use image::ImageFormat;

use crate::error::{ConvertError, ConvertResult};
use crate::formats;
use crate::report::ConversionReporter;

/// Where the decoder output should land, and whether a second encode pass is
/// needed to reach the requested format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputPlan {
    /// The decoder writes the final file directly (TIFF target).
    Direct(PathBuf),
    /// The decoder writes an intermediate TIFF in the scratch directory,
    /// which is then re-encoded into `final_path`.
    Staged {
        intermediate: PathBuf,
        final_path: PathBuf,
    },
}

impl OutputPlan {
    /// Path handed to the external decoder.
    pub fn decoder_target(&self) -> &Path {
        match self {
            Self::Direct(path) => path,
            Self::Staged { intermediate, .. } => intermediate,
        }
    }

    /// Path the caller ends up with.
    pub fn final_path(&self) -> &Path {
        match self {
            Self::Direct(path) => path,
            Self::Staged { final_path, .. } => final_path,
        }
    }
}

/// Wraps the image backend for the optional second conversion stage.
pub struct FormatConverter {
    scratch_dir: PathBuf,
}

impl FormatConverter {
    pub fn new(scratch_dir: impl Into<PathBuf>) -> Self {
        Self {
            scratch_dir: scratch_dir.into(),
        }
    }

    /// Reconcile the requested format with the output file name and decide
    /// whether an intermediate TIFF stage is needed.
    ///
    /// When the extension and the declared format disagree, the extension
    /// wins if it is a recognized format, otherwise the declared format wins;
    /// a warning is emitted either way. When neither side is recognized the
    /// call is rejected rather than guessing. Returns the plan together with
    /// the format identifier that ended up being chosen.
    pub fn resolve_output(
        &self,
        output: &Path,
        format: &str,
        reporter: &dyn ConversionReporter,
    ) -> ConvertResult<(OutputPlan, String)> {
        let mut format = format.to_ascii_lowercase();
        let extension = output
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_ascii_lowercase();

        if extension != format {
            reporter.warning(
                "The output format and the format in the file name do not match! \
                 The program will default to the first recognized format of the two.",
            );
            if formats::is_supported(&extension) {
                format = extension;
            } else if !formats::is_supported(&format) {
                return Err(ConvertError::UnknownFormat {
                    requested: format,
                    extension,
                });
            }
            reporter.info(&format!("The format is now '{format}'"));
        } else if !formats::is_supported(&format) {
            return Err(ConvertError::UnknownFormat {
                requested: format.clone(),
                extension,
            });
        }

        if format == "tiff" || format == "tif" {
            return Ok((OutputPlan::Direct(output.to_path_buf()), format));
        }

        let stem = output
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("output");
        let plan = OutputPlan::Staged {
            intermediate: self.scratch_dir.join(format!("{stem}.tiff")),
            final_path: output.with_extension(&format),
        };
        Ok((plan, format))
    }

    /// Re-encode an already-produced image into the requested format.
    ///
    /// Identifiers from the allow-list that the image backend cannot encode
    /// are reported as an error, never as a panic.
    pub fn reencode(&self, source: &Path, dest: &Path, format: &str) -> ConvertResult<()> {
        let target = ImageFormat::from_extension(format).ok_or_else(|| {
            ConvertError::UnsupportedByBackend {
                format: format.to_string(),
            }
        })?;
        let img = image::open(source).map_err(|error| ConvertError::Reencode {
            path: source.to_path_buf(),
            source: error,
        })?;
        img.save_with_format(dest, target)
            .map_err(|error| ConvertError::Reencode {
                path: dest.to_path_buf(),
                source: error,
            })
    }
}
