//! Biquad coefficient generator
//!
//! Command line front end: validates arguments, runs the pipeline and
//! writes the document to stdout or a file. Exits with status 1 on any
//! validation or I/O error.

use std::io;
use std::process::ExitCode;

use clap::Parser;
use tracing::debug;

use biquad_coeffs::cli::Args;
use biquad_coeffs::config::Config;
use biquad_coeffs::{logging, output, pipeline, Result};

fn main() -> ExitCode {
    let args = Args::parse();
    logging::init(args.log_level());

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            debug!(error = ?err, "generation failed");
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let config = Config::try_from(args)?;
    let doc = pipeline::generate(&config)?;
    output::emit(&doc, config.file(), &mut io::stdout().lock())
}
