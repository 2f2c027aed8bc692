// Batch conversion over a directory.

use std::fs;
use std::path::{Path, PathBuf};

use super::types::{Outcome, SessionReport};
use super::unit::ConversionUnit;
use crate::decoder::MdiDecoder;
use crate::error::{ConvertError, ConvertResult};
use crate::report::ConversionReporter;

/// Extension the batch loop picks up, matched case-insensitively.
pub const SOURCE_EXTENSION: &str = "mdi";

/// Drives the conversion of every `.mdi` file in a directory and aggregates
/// the per-file outcomes.
///
/// Each run is a single pass: validate directories, scan the immediate
/// entries, convert eligible files one by one, report a summary, and return a
/// fresh [`SessionReport`]. A failed file is recorded and the loop continues;
/// only setup problems abort the run.
pub struct BatchSession<'a, D: MdiDecoder> {
    unit: ConversionUnit<'a, D>,
}

impl<'a, D: MdiDecoder> BatchSession<'a, D> {
    pub fn new(unit: ConversionUnit<'a, D>) -> Self {
        Self { unit }
    }

    pub fn convert_all(
        &self,
        input_dir: &Path,
        output_dir: &Path,
        format: &str,
        reporter: &dyn ConversionReporter,
    ) -> ConvertResult<SessionReport> {
        if !input_dir.exists() {
            return Err(ConvertError::missing_directory(input_dir));
        }
        if !output_dir.exists() {
            fs::create_dir_all(output_dir).map_err(|source| ConvertError::DirectoryCreation {
                path: output_dir.to_path_buf(),
                source,
            })?;
        }

        let entries = fs::read_dir(input_dir).map_err(|source| ConvertError::DirectoryRead {
            path: input_dir.to_path_buf(),
            source,
        })?;

        let mut report = SessionReport::default();
        // Iteration order is whatever the file system enumeration returns.
        for entry in entries {
            let entry = entry.map_err(|source| ConvertError::DirectoryRead {
                path: input_dir.to_path_buf(),
                source,
            })?;
            let path = entry.path();
            report.total_items += 1;

            if path.is_dir() {
                report.total_folders += 1;
                continue;
            }
            if !has_source_extension(&path) {
                continue;
            }
            report.eligible_files += 1;

            let output = output_dir.join(output_name(&path, format));
            reporter.info(&format!(
                "Converting '{}' to '{}'",
                path.display(),
                output.display()
            ));
            let outcome = self.unit.convert(&path, &output, format, reporter);
            match outcome {
                // The unit already reported the successful conversion.
                Outcome::Success => {}
                Outcome::Skipped => {
                    reporter.info(&format!("File '{}' was skipped.", path.display()));
                }
                Outcome::Failed => {
                    reporter.error(&format!(
                        "File '{}' could not be converted.",
                        path.display()
                    ));
                }
            }
            report.record(outcome);
        }

        reporter.summary(&report);
        Ok(report)
    }
}

fn has_source_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case(SOURCE_EXTENSION))
}

/// Output file name derived by extension substitution.
fn output_name(source: &Path, format: &str) -> PathBuf {
    let stem = source
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("output");
    PathBuf::from(format!("{stem}.{format}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert::reencode::FormatConverter;
    use crate::decoder::{DecodeStatus, MockMdiDecoder};
    use crate::report::SilentReporter;
    use image::ImageFormat;
    use std::fs;
    use tempfile::tempdir;

    fn write_tiff(path: &Path) {
        image::RgbImage::from_pixel(2, 2, image::Rgb([0, 0, 0]))
            .save_with_format(path, ImageFormat::Tiff)
            .unwrap();
    }

    fn completing_decoder() -> MockMdiDecoder {
        let mut decoder = MockMdiDecoder::new();
        decoder.expect_decode().returning(|_, dest, _| {
            write_tiff(dest);
            Ok(DecodeStatus::Completed)
        });
        decoder
    }

    #[test]
    fn test_missing_input_directory_is_fatal() {
        let decoder = MockMdiDecoder::new();
        let converter = FormatConverter::new("/scratch");
        let unit = ConversionUnit::new(&decoder, &converter, Path::new("log"));
        let session = BatchSession::new(unit);

        let result = session.convert_all(
            Path::new("/nope/in"),
            Path::new("/nope/out"),
            "tiff",
            &SilentReporter,
        );
        assert!(matches!(result, Err(ConvertError::MissingInput { .. })));
    }

    #[test]
    fn test_output_directory_is_created_when_missing() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("in");
        let output = dir.path().join("out");
        fs::create_dir(&input).unwrap();

        let decoder = completing_decoder();
        let converter = FormatConverter::new(dir.path().join("scratch"));
        let log = dir.path().join("decode.log");
        let unit = ConversionUnit::new(&decoder, &converter, &log);
        let session = BatchSession::new(unit);

        session
            .convert_all(&input, &output, "tiff", &SilentReporter)
            .unwrap();
        assert!(output.is_dir());
    }

    #[test]
    fn test_entry_classification_and_counter_invariant() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("in");
        let output = dir.path().join("out");
        fs::create_dir(&input).unwrap();
        fs::create_dir(input.join("nested")).unwrap();
        fs::write(input.join("a.mdi"), b"mdi").unwrap();
        fs::write(input.join("b.mdi"), b"mdi").unwrap();
        fs::write(input.join("c.mdi"), b"mdi").unwrap();

        let decoder = completing_decoder();
        let converter = FormatConverter::new(dir.path().join("scratch"));
        let log = dir.path().join("decode.log");
        let unit = ConversionUnit::new(&decoder, &converter, &log);
        let session = BatchSession::new(unit);

        let report = session
            .convert_all(&input, &output, "tiff", &SilentReporter)
            .unwrap();

        assert_eq!(report.total_items, 4);
        assert_eq!(report.total_folders, 1);
        assert_eq!(report.eligible_files, 3);
        assert_eq!(report.succeeded, 3);
        assert_eq!(
            report.eligible_files,
            report.succeeded + report.skipped + report.failed
        );
        assert!(report.all_converted());
    }

    #[test]
    fn test_non_mdi_files_are_counted_but_not_converted() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("in");
        let output = dir.path().join("out");
        fs::create_dir(&input).unwrap();
        fs::write(input.join("a.mdi"), b"mdi").unwrap();
        fs::write(input.join("readme.txt"), b"text").unwrap();

        let decoder = completing_decoder();
        let converter = FormatConverter::new(dir.path().join("scratch"));
        let log = dir.path().join("decode.log");
        let unit = ConversionUnit::new(&decoder, &converter, &log);
        let session = BatchSession::new(unit);

        let report = session
            .convert_all(&input, &output, "tiff", &SilentReporter)
            .unwrap();

        assert_eq!(report.total_items, 2);
        assert_eq!(report.eligible_files, 1);
        assert_eq!(report.succeeded, 1);
        assert!(!output.join("readme.tiff").exists());
    }

    #[test]
    fn test_existing_destination_counts_as_skipped() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("in");
        let output = dir.path().join("out");
        fs::create_dir(&input).unwrap();
        fs::create_dir(&output).unwrap();
        fs::write(input.join("a.mdi"), b"mdi").unwrap();
        fs::write(input.join("b.mdi"), b"mdi").unwrap();
        fs::write(output.join("a.tiff"), b"already there").unwrap();

        let decoder = completing_decoder();
        let converter = FormatConverter::new(dir.path().join("scratch"));
        let log = dir.path().join("decode.log");
        let unit = ConversionUnit::new(&decoder, &converter, &log);
        let session = BatchSession::new(unit);

        let report = session
            .convert_all(&input, &output, "tiff", &SilentReporter)
            .unwrap();

        assert_eq!(report.eligible_files, 2);
        assert_eq!(report.skipped, 1);
        assert_eq!(report.succeeded, 1);
        assert!(report.all_converted());
        assert_eq!(fs::read(output.join("a.tiff")).unwrap(), b"already there");
    }

    #[test]
    fn test_one_failure_does_not_abort_the_batch() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("in");
        let output = dir.path().join("out");
        fs::create_dir(&input).unwrap();
        fs::write(input.join("good.mdi"), b"mdi").unwrap();
        fs::write(input.join("broken.mdi"), b"mdi").unwrap();

        let mut decoder = MockMdiDecoder::new();
        decoder.expect_decode().returning(|source, dest, _| {
            if source.to_string_lossy().contains("broken") {
                Ok(DecodeStatus::Failed { code: Some(1) })
            } else {
                write_tiff(dest);
                Ok(DecodeStatus::Completed)
            }
        });
        let converter = FormatConverter::new(dir.path().join("scratch"));
        let log = dir.path().join("decode.log");
        let unit = ConversionUnit::new(&decoder, &converter, &log);
        let session = BatchSession::new(unit);

        let report = session
            .convert_all(&input, &output, "tiff", &SilentReporter)
            .unwrap();

        assert_eq!(report.eligible_files, 2);
        assert_eq!(report.succeeded, 1);
        assert_eq!(report.failed, 1);
        assert!(!report.all_converted());
    }

    #[test]
    fn test_extension_matching_is_case_insensitive() {
        assert!(has_source_extension(Path::new("scan.MDI")));
        assert!(has_source_extension(Path::new("scan.mdi")));
        assert!(!has_source_extension(Path::new("scan.tiff")));
        assert!(!has_source_extension(Path::new("mdi")));
    }

    #[test]
    fn test_output_name_substitutes_the_extension() {
        assert_eq!(
            output_name(Path::new("/in/scan.mdi"), "png"),
            PathBuf::from("scan.png")
        );
        assert_eq!(
            output_name(Path::new("/in/scan.mdi"), "tiff"),
            PathBuf::from("scan.tiff")
        );
    }
}
