use std::path::Path;
use std::process;

use clap::Parser;

use mdi2img::cli::{commands, Cli};
use mdi2img::convert::Outcome;
use mdi2img::formats;
use mdi2img::report::{ConsoleReporter, ConversionReporter};
use mdi2img::RuntimeConfig;

fn main() {
    let cli = Cli::parse();

    if cli.list_formats {
        commands::execute_list_formats();
        return;
    }

    let reporter = ConsoleReporter::with_debug(cli.debug);
    let config = RuntimeConfig::discover(cli.debug);

    let source = match cli.source.clone() {
        Some(source) => source,
        // Fall back to the conventional './in' directory when it exists.
        None if config.default_input_dir.is_dir() => {
            reporter.warning(&format!(
                "No source path provided, defaulting to: '{}'",
                config.default_input_dir.display()
            ));
            config.default_input_dir.clone()
        }
        None => {
            reporter.error("No source path provided, aborting!");
            eprintln!("Run with --help for usage.");
            process::exit(1);
        }
    };

    let format = formats::resolve_requested(&cli.format, &reporter);

    process::exit(run(&config, &source, &cli, &format, &reporter));
}

fn run(
    config: &RuntimeConfig,
    source: &Path,
    cli: &Cli,
    format: &str,
    reporter: &ConsoleReporter,
) -> i32 {
    if source.is_dir() {
        match commands::execute_convert_directory(
            config,
            source,
            cli.dest.clone(),
            format,
            reporter,
        ) {
            Ok(report) if report.all_converted() => 0,
            Ok(_) => 1,
            Err(error) => {
                reporter.error(&error.to_string());
                1
            }
        }
    } else {
        match commands::execute_convert_file(
            config,
            source,
            cli.dest.clone(),
            format,
            !cli.no_show,
            reporter,
        ) {
            Ok(Outcome::Failed) => 1,
            Ok(_) => 0,
            Err(error) => {
                reporter.error(&error.to_string());
                1
            }
        }
    }
}
