// Single-file conversion command.

use std::path::{Path, PathBuf};

use crate::config::RuntimeConfig;
use crate::convert::{ConversionUnit, FormatConverter, Outcome};
use crate::decoder::Mdi2TiffDecoder;
use crate::error::ConvertResult;
use crate::report::{ConversionReporter, SilentReporter};
use crate::viewer;

/// Convert one `.mdi` file.
///
/// Without an explicit destination the result lands in the scratch folder,
/// named after the source. A missing decoder binary or unusable scratch
/// directory is fatal; everything else is reflected in the returned outcome.
pub fn execute_convert_file(
    config: &RuntimeConfig,
    source: &Path,
    dest: Option<PathBuf>,
    format: &str,
    show: bool,
    reporter: &dyn ConversionReporter,
) -> ConvertResult<Outcome> {
    let binary = config.require_binary()?;
    config.ensure_scratch_dir(reporter)?;

    let dest = dest.unwrap_or_else(|| {
        let fallback = default_destination(config, source, format);
        reporter.warning(&format!(
            "No destination was given, defaulting to: '{}'",
            fallback.display()
        ));
        fallback
    });

    let decoder = Mdi2TiffDecoder::new(binary);
    let converter = FormatConverter::new(&config.scratch_dir);
    let unit = ConversionUnit::new(&decoder, &converter, &config.log_path);
    let outcome = unit.convert(source, &dest, format, reporter);

    if outcome == Outcome::Success && show {
        // Resolve again (silently, the warnings already went out) to learn
        // where the final file actually landed.
        let viewed = converter
            .resolve_output(&dest, format, &SilentReporter)
            .map(|(plan, _)| plan.final_path().to_path_buf())
            .unwrap_or(dest);
        if let Err(error) = viewer::show(&viewed) {
            reporter.warning(&format!("Could not display the converted image: {error}"));
        }
    }

    Ok(outcome)
}

fn default_destination(config: &RuntimeConfig, source: &Path, format: &str) -> PathBuf {
    let stem = source
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("output");
    config.scratch_dir.join(format!("{stem}.{format}"))
}
