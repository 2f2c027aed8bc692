use std::path::{Path, PathBuf};
use std::process::Command;

use super::{DecodeStatus, MdiDecoder};
use crate::error::{ConvertError, ConvertResult};

/// Wrapper around the bundled `MDI2TIF.EXE` command-line tool.
///
/// The tool is invoked once per file as
/// `<binary> -source <input> -dest <output> -log <logfile>` and its exit code
/// is the sole success signal.
pub struct Mdi2TiffDecoder {
    binary: PathBuf,
}

impl Mdi2TiffDecoder {
    pub fn new(binary: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
        }
    }

    pub fn binary(&self) -> &Path {
        &self.binary
    }
}

impl MdiDecoder for Mdi2TiffDecoder {
    fn decode(&self, source: &Path, dest: &Path, log: &Path) -> ConvertResult<DecodeStatus> {
        let status = Command::new(&self.binary)
            .arg("-source")
            .arg(source)
            .arg("-dest")
            .arg(dest)
            .arg("-log")
            .arg(log)
            .status()
            .map_err(|source| ConvertError::DecoderLaunch { source })?;

        if status.success() {
            Ok(DecodeStatus::Completed)
        } else {
            Ok(DecodeStatus::Failed {
                code: status.code(),
            })
        }
    }
}
