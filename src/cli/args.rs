use clap::Parser;
use std::path::PathBuf;

use crate::formats;

/// Command-line surface.
#[derive(Parser, Debug)]
#[command(name = "mdi2img", version)]
#[command(about = "Convert MDI scanned-document files to TIFF or other raster formats")]
#[command(long_about = "Convert MDI scanned-document files to TIFF or other raster formats.\n\n\
    When exporting/viewing/saving images, the default output format is tiff; \
    use --format to change it. When no destination is specified, a single \
    conversion lands in the temporary image folder and a batch conversion in \
    './out'.")]
pub struct Cli {
    /// Path to an .mdi file, or to a directory containing .mdi files
    pub source: Option<PathBuf>,

    /// Output file (single conversion) or output directory (batch)
    pub dest: Option<PathBuf>,

    /// Display additional information about what the program is doing
    #[arg(short, long)]
    pub debug: bool,

    /// Do not display images once they have been converted
    #[arg(long = "no-show")]
    pub no_show: bool,

    /// Output format to export to (see --list-formats)
    #[arg(short, long, default_value = formats::DEFAULT_FORMAT)]
    pub format: String,

    /// List the recognized output formats and exit
    #[arg(long)]
    pub list_formats: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_and_dest_are_positional() {
        let cli = Cli::parse_from(["mdi2img", "scan.mdi", "out.png"]);
        assert_eq!(cli.source, Some(PathBuf::from("scan.mdi")));
        assert_eq!(cli.dest, Some(PathBuf::from("out.png")));
    }

    #[test]
    fn test_format_defaults_to_tiff() {
        let cli = Cli::parse_from(["mdi2img", "scan.mdi"]);
        assert_eq!(cli.format, "tiff");
        assert!(!cli.debug);
        assert!(!cli.no_show);
    }

    #[test]
    fn test_flags_parse() {
        let cli = Cli::parse_from([
            "mdi2img",
            "in_dir",
            "--debug",
            "--no-show",
            "--format",
            "png",
        ]);
        assert!(cli.debug);
        assert!(cli.no_show);
        assert_eq!(cli.format, "png");
    }

    #[test]
    fn test_list_formats_needs_no_source() {
        let cli = Cli::parse_from(["mdi2img", "--list-formats"]);
        assert!(cli.list_formats);
        assert_eq!(cli.source, None);
    }
}
