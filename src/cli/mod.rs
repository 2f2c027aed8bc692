// CLI layer: argument definitions and the command entry points.

pub mod args;
pub mod commands;

pub use args::Cli;
