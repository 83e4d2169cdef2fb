//! Command-line boundary: argument parsing, path resolution and logging setup.

use std::path::PathBuf;

use clap::Parser;
use tracing::Level;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use crate::pipeline::convert_file_with_default_reader;
use crate::report::ReportConvert;
use crate::spec::{ConvertError, SpecConvertPaths};

/// Convert a spreadsheet into a JSON document and verify the written file.
#[derive(Debug, Clone, Parser)]
#[command(name = "xlsjson", version)]
pub struct CliArgs {
    /// Project root holding the `public` directory.
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// Spreadsheet to convert, instead of `<root>/public/BUG统计数据.xls`.
    #[arg(long)]
    pub input: Option<PathBuf>,

    /// Output document, instead of the input path with a `.json` extension.
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Log debug details.
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Log errors only.
    #[arg(short, long)]
    pub quiet: bool,
}

impl CliArgs {
    /// Resolve input/output paths once, at the boundary.
    pub fn resolve_paths(&self) -> SpecConvertPaths {
        let mut paths = match &self.input {
            Some(path_file_in) => SpecConvertPaths::from_input(path_file_in),
            None => SpecConvertPaths::from_root(&self.root),
        };
        if let Some(path_file_out) = &self.output {
            paths.path_file_out = path_file_out.clone();
        }
        paths
    }

    /// Maximum log level selected by `--verbose` / `--quiet`.
    pub fn log_level(&self) -> Level {
        if self.quiet {
            Level::ERROR
        } else if self.verbose {
            Level::DEBUG
        } else {
            Level::INFO
        }
    }
}

/// Log filter for a run: `--verbose`/`--quiet` win, then `RUST_LOG`, then INFO.
pub fn derive_env_filter(args: &CliArgs) -> EnvFilter {
    if args.verbose || args.quiet {
        let level = LevelFilter::from_level(args.log_level());
        return EnvFilter::default().add_directive(level.into());
    }
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::default().add_directive(LevelFilter::INFO.into()))
}

/// Install the global fmt subscriber.
pub fn init_logging(args: &CliArgs) {
    tracing_subscriber::fmt()
        .with_env_filter(derive_env_filter(args))
        .with_target(false)
        .init();
}

/// Run one conversion for parsed arguments.
pub fn execute(args: &CliArgs) -> Result<ReportConvert, ConvertError> {
    convert_file_with_default_reader(&args.resolve_paths())
}
