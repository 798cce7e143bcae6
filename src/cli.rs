//! Command line arguments
//!
//! Flag names and defaults follow the legacy generator script so existing
//! build scripts keep working.

use std::path::PathBuf;

use clap::{ArgAction, Parser};
use tracing::level_filters::LevelFilter;

use crate::config::{
    Config, DEFAULT_FILTER_TYPE, DEFAULT_FRAC_BITS, DEFAULT_GAIN_DB, DEFAULT_OUTPUT_FORMAT, DEFAULT_Q,
    DEFAULT_SAMPLE_RATE, DEFAULT_WIDTH,
};
use crate::dsp::quantize::{QFormat, RoundingMode};
use crate::encode::OutputFormat;
use crate::error::{Error, Result};
use crate::types::{FilterSpec, FilterType};

/// Generate biquad filter coefficients for FPGA implementation
#[derive(Parser, Clone, Debug, PartialEq)]
#[command(name = "gen-biquad-coeffs", version, about)]
pub struct Args {
    /// Filter type
    #[arg(long, value_enum, default_value_t = DEFAULT_FILTER_TYPE)]
    pub filter_type: FilterType,

    /// Filter frequency in Hz
    #[arg(long, allow_negative_numbers = true)]
    pub freq: f64,

    /// Sample rate in Hz
    #[arg(long, default_value_t = DEFAULT_SAMPLE_RATE, allow_negative_numbers = true)]
    pub sample_rate: f64,

    /// Quality factor
    #[arg(long, default_value_t = DEFAULT_Q, allow_negative_numbers = true)]
    pub q: f64,

    /// Gain in dB (for peaking filters)
    #[arg(long, default_value_t = DEFAULT_GAIN_DB, allow_negative_numbers = true)]
    pub gain: f64,

    /// Output format
    #[arg(long, value_enum, default_value_t = DEFAULT_OUTPUT_FORMAT)]
    pub output: OutputFormat,

    /// Output file name (stdout if omitted)
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Coefficient width in bits (for Verilog)
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    pub width: u32,

    /// Fractional bits (for Verilog)
    #[arg(long, default_value_t = DEFAULT_FRAC_BITS)]
    pub frac_bits: u32,

    /// Rounding applied before fixed-point wraparound
    #[arg(long, value_enum, default_value_t = RoundingMode::Floor)]
    pub rounding: RoundingMode,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Log level selected by the `-v` count
    #[must_use]
    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::WARN,
            1 => LevelFilter::INFO,
            2 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    }
}

impl TryFrom<&Args> for Config {
    type Error = Error;

    fn try_from(args: &Args) -> Result<Self> {
        let spec = FilterSpec::new(args.filter_type, args.freq, args.sample_rate, args.q, args.gain)?;
        // Register flags only shape the hardware block
        let q_format = if args.output.needs_fixed_point() {
            QFormat::new(args.width, args.frac_bits)?
        } else {
            QFormat::new(args.width, args.frac_bits).unwrap_or_default()
        };

        let config = Config::new(spec, args.output)
            .with_q_format(q_format)
            .with_rounding(args.rounding);

        Ok(match &args.file {
            Some(path) => config.with_file(path),
            None => config,
        })
    }
}
