// Error types for the conversion pipeline.

use std::fmt;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Everything that can go wrong while orchestrating a conversion.
///
/// Setup problems (missing decoder binary, unusable directories) abort a whole
/// run; everything else is recorded against the file it happened to and the
/// run continues.
#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("decoder binary '{name}' was not found, aborting operations")]
    MissingBinary { name: String },

    #[error("the input {kind} ('{path}') was not found")]
    MissingInput { kind: ItemKind, path: PathBuf },

    #[error("could not create directory '{path}': {source}")]
    DirectoryCreation {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not read directory '{path}': {source}")]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not launch the decoder: {source}")]
    DecoderLaunch {
        #[source]
        source: io::Error,
    },

    #[error("decoder exited with status {code:?} while converting '{path}'")]
    DecoderFailed { path: PathBuf, code: Option<i32> },

    #[error("failed to re-encode '{path}': {source}")]
    Reencode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("the format '{format}' cannot be encoded by the image backend")]
    UnsupportedByBackend { format: String },

    #[error(
        "neither the requested format '{requested}' nor the file extension \
         '{extension}' is a recognized format"
    )]
    UnknownFormat { requested: String, extension: String },

    #[error("could not open the image viewer: {source}")]
    ViewerLaunch {
        #[source]
        source: io::Error,
    },
}

impl ConvertError {
    pub fn missing_file(path: impl Into<PathBuf>) -> Self {
        Self::MissingInput {
            kind: ItemKind::File,
            path: path.into(),
        }
    }

    pub fn missing_directory(path: impl Into<PathBuf>) -> Self {
        Self::MissingInput {
            kind: ItemKind::Directory,
            path: path.into(),
        }
    }
}

/// Whether a missing input was expected to be a file or a directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    File,
    Directory,
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File => write!(f, "file"),
            Self::Directory => write!(f, "directory"),
        }
    }
}

pub type ConvertResult<T> = std::result::Result<T, ConvertError>;
