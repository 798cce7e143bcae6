//! Output Encoders
//!
//! Renders a coefficient set in one of the supported text grammars.
//! Every encoder implements [`CoeffEncoder`]; [`OutputFormat`] picks one.
//!
//! Documents never end with a newline. Number formatting uses fixed digit
//! counts and is locale independent, so identical input always gives
//! byte-identical text.

pub mod c;
pub mod json;
pub mod matlab;
pub mod verilog;

use clap::ValueEnum;
use serde::Serialize;

use crate::dsp::filter_design::CoeffSet;
use crate::dsp::quantize::FixedPointCoeffSet;
use crate::error::Result;
use crate::types::{FilterSpec, FilterType};

/// Description of the filter a document was generated for
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Metadata {
    /// Response shape
    pub filter_type: FilterType,
    /// Cutoff or center frequency in Hz
    pub frequency: f64,
    /// Sample rate in Hz
    pub sample_rate: f64,
    /// Quality factor
    pub q_factor: f64,
    /// Gain in dB, present only for peaking filters
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gain_db: Option<f64>,
}

impl Metadata {
    /// Build metadata for a specification
    #[must_use]
    pub fn from_spec(spec: &FilterSpec) -> Self {
        let filter_type = spec.filter_type();
        Self {
            filter_type,
            frequency: spec.frequency(),
            sample_rate: spec.sample_rate(),
            q_factor: spec.q(),
            gain_db: filter_type.uses_gain().then(|| spec.gain_db()),
        }
    }
}

/// Rendered coefficient document
#[derive(Clone, Debug, PartialEq)]
pub struct OutputDocument {
    text: String,
    metadata: Metadata,
}

impl OutputDocument {
    /// Wrap encoded text with the metadata it was generated from
    #[must_use]
    pub fn new(text: String, metadata: Metadata) -> Self {
        Self { text, metadata }
    }

    /// Formatted document text (no trailing newline)
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Filter description
    #[must_use]
    pub const fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    /// Take ownership of the text
    #[must_use]
    pub fn into_text(self) -> String {
        self.text
    }
}

/// Common contract for all coefficient encoders
pub trait CoeffEncoder {
    /// Render coefficients as text
    ///
    /// `fixed` is required by encoders that emit register values; `metadata`
    /// is only used by structured encoders.
    ///
    /// # Errors
    ///
    /// Fails if a required input is missing or serialization fails.
    fn encode(
        &self,
        coeffs: &CoeffSet,
        fixed: Option<&FixedPointCoeffSet>,
        metadata: Option<&Metadata>,
    ) -> Result<String>;
}

/// Output grammar selection
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, ValueEnum)]
pub enum OutputFormat {
    /// Verilog `parameter` block with fixed-point hex values
    #[default]
    Verilog,
    /// C `const float` arrays
    C,
    /// MATLAB / Octave row vectors
    Matlab,
    /// JSON document with optional metadata
    Json,
}

impl OutputFormat {
    /// Encoder implementing this format
    #[must_use]
    pub fn encoder(self) -> &'static dyn CoeffEncoder {
        match self {
            Self::Verilog => &verilog::Verilog,
            Self::C => &c::CArrays,
            Self::Matlab => &matlab::Matlab,
            Self::Json => &json::Json,
        }
    }

    /// Whether the encoder consumes quantized coefficients
    #[must_use]
    pub const fn needs_fixed_point(self) -> bool {
        matches!(self, Self::Verilog)
    }
}
