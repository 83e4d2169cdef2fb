//! `xlsjson` command-line interface.

use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};
use xlsjson::cli::{CliArgs, execute, init_logging};

fn main() -> ExitCode {
    let args = CliArgs::parse();
    init_logging(&args);

    match execute(&args) {
        Ok(report) => {
            info!("Output file: {}", report.path_file_out.display());
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("Conversion failed: {err}");
            ExitCode::FAILURE
        }
    }
}
