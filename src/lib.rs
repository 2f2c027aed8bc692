//! Orchestration layer for converting legacy MDI scanned documents.
//!
//! The MDI decode itself is delegated to an external executable; this crate
//! locates it, invokes it once per file, optionally re-encodes the produced
//! TIFF into another raster format, and aggregates per-folder counters.

pub mod cli;
pub mod config;
pub mod convert;
pub mod decoder;
pub mod error;
pub mod formats;
pub mod report;
pub mod viewer;

pub use config::RuntimeConfig;
pub use convert::{BatchSession, ConversionUnit, FormatConverter, Outcome, OutputPlan, SessionReport};
pub use decoder::{DecodeStatus, Mdi2TiffDecoder, MdiDecoder};
pub use error::{ConvertError, ConvertResult};
pub use report::{ConsoleReporter, ConversionReporter, SilentReporter};
