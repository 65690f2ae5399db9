use clap::Parser;
use std::io::{self, Write};
use std::process::ExitCode;
use wvoov_cli::args::Args;
use wvoov_cli::config::Config;
use wvoov_cli::error::Result;
use wvoov_cli::{logging, presentation};
use wvoov_engine::diagnostics::LogDiagnostics;

fn main() -> ExitCode {
    let args = Args::parse();
    logging::initialize(args.log_level());

    match run(args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Returns `false` if any text file could not be analysed.
fn run(args: Args) -> Result<bool> {
    let config = Config::try_from(args)?;

    let mut out = io::stdout().lock();
    let mut err = io::stderr();
    let result = wvoov_engine::run_with(&config, &mut LogDiagnostics, |event| {
        presentation::write_event(&mut out, &mut err, &event)
    })?;
    out.flush()?;

    Ok(result.is_success())
}
