//! Biquad Coefficient Generator Library
//!
//! Produces reference second-order IIR ("biquad") filter coefficients for
//! an FPGA audio filtering pipeline. Coefficients are derived from the
//! standard closed-form analog prototypes, normalized so the leading
//! denominator term is one, quantized to a two's-complement fixed-point
//! register format and rendered in several text grammars.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐   ┌──────────┐   ┌────────────────────┐   ┌────────────────┐
//! │  FilterSpec  │──▶│ CoeffSet │──▶│ FixedPointCoeffSet │──▶│ OutputDocument │
//! └──────────────┘   └──────────┘   └────────────────────┘   └────────────────┘
//!     types          dsp::filter_design   dsp::quantize            encode
//! ```
//!
//! Every stage is a pure function of its inputs. The only side effect is the
//! final write to stdout or to a file (see [`output`]).
//!
//! # Design Principles
//!
//! - **Immutable-by-default**: every pipeline value is built once and read-only
//! - **Type-driven design**: validated constructors reject invalid specs
//! - **Functional core, imperative shell**: pure pipeline, I/O in [`output`]
//! - **Explicit error handling**: all fallible operations return [`Result`]

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Digital Signal Processing
///
/// Filter design, normalization and fixed-point quantization.
pub mod dsp;

/// Output Encoders
///
/// Hardware parameter block, C arrays, MATLAB vectors and JSON.
pub mod encode;

/// Shared types used across modules
pub mod types;

/// Defaults and the validated run configuration
pub mod config;

/// Error type shared by every stage
pub mod error;

/// Command line arguments
pub mod cli;

/// Design → quantize → encode driver
pub mod pipeline;

/// Document output (stdout or atomic file write)
pub mod output;

/// Tracing subscriber setup
pub mod logging;

pub use error::{Error, Result};

/// Prelude module for common imports
pub mod prelude {
    //! Convenient re-exports for common types and traits.

    pub use crate::config::*;
    pub use crate::dsp::filter_design::{design, normalize, CoeffSet, RawCoeffs};
    pub use crate::dsp::quantize::{quantize, quantize_with, FixedPointCoeffSet, QFormat, RoundingMode};
    pub use crate::encode::{CoeffEncoder, Metadata, OutputDocument, OutputFormat};
    pub use crate::error::{Error, Result};
    pub use crate::types::*;
}
