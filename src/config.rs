//! Default parameters and the validated run configuration
//!
//! Defaults match the hardware filter block: 48 kHz audio, Butterworth Q and
//! 18-bit coefficient registers with 16 fractional bits.

use std::path::{Path, PathBuf};

use crate::dsp::quantize::{QFormat, RoundingMode};
use crate::encode::OutputFormat;
use crate::types::{FilterSpec, FilterType};

/// Default sample rate in Hz
pub const DEFAULT_SAMPLE_RATE: f64 = 48_000.0;

/// Default quality factor (Butterworth)
pub const DEFAULT_Q: f64 = 0.707;

/// Default peaking gain in dB
pub const DEFAULT_GAIN_DB: f64 = 0.0;

/// Default coefficient register width in bits
pub const DEFAULT_WIDTH: u32 = 18;

/// Default fractional bits
pub const DEFAULT_FRAC_BITS: u32 = 16;

/// Default filter type
pub const DEFAULT_FILTER_TYPE: FilterType = FilterType::Lowpass;

/// Default output format
pub const DEFAULT_OUTPUT_FORMAT: OutputFormat = OutputFormat::Verilog;

/// Validated configuration for one generator run
///
/// Built once from the command line and passed explicitly through every
/// pipeline stage.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    spec: FilterSpec,
    format: OutputFormat,
    q_format: QFormat,
    rounding: RoundingMode,
    file: Option<PathBuf>,
}

impl Config {
    /// Create a configuration writing to stdout with default quantization
    #[must_use]
    pub fn new(spec: FilterSpec, format: OutputFormat) -> Self {
        Self {
            spec,
            format,
            q_format: QFormat::default(),
            rounding: RoundingMode::default(),
            file: None,
        }
    }

    /// Use a different register format
    #[must_use]
    pub fn with_q_format(mut self, q_format: QFormat) -> Self {
        self.q_format = q_format;
        self
    }

    /// Use a different rounding mode
    #[must_use]
    pub fn with_rounding(mut self, rounding: RoundingMode) -> Self {
        self.rounding = rounding;
        self
    }

    /// Write the document to a file instead of stdout
    #[must_use]
    pub fn with_file(mut self, file: impl Into<PathBuf>) -> Self {
        self.file = Some(file.into());
        self
    }

    /// Filter specification
    #[must_use]
    pub const fn spec(&self) -> &FilterSpec {
        &self.spec
    }

    /// Output format
    #[must_use]
    pub const fn format(&self) -> OutputFormat {
        self.format
    }

    /// Register format for hardware output
    #[must_use]
    pub const fn q_format(&self) -> QFormat {
        self.q_format
    }

    /// Quantizer rounding mode
    #[must_use]
    pub const fn rounding(&self) -> RoundingMode {
        self.rounding
    }

    /// Output file, `None` for stdout
    #[must_use]
    pub fn file(&self) -> Option<&Path> {
        self.file.as_deref()
    }
}
