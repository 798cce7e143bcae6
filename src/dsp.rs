//! Digital Signal Processing
//!
//! Provides the numeric stages of the coefficient pipeline:
//! - Closed-form biquad design and a0 normalization
//! - Fixed-point quantization with two's-complement wraparound

pub mod filter_design;
pub mod quantize;
