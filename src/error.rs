//! Error types for coefficient generation

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type for coefficient generation
pub type Result<T> = core::result::Result<T, Error>;

/// Errors that can occur while designing, encoding or writing coefficients
#[derive(Error, Debug)]
pub enum Error {
    /// Frequency outside the open interval (0, Nyquist)
    #[error("Frequency must be between 0 and {nyquist:?} Hz")]
    InvalidFrequency {
        /// Requested frequency in Hz
        frequency: f64,
        /// Half the sample rate in Hz
        nyquist: f64,
    },

    /// Sample rate is not a positive finite number
    #[error("Sample rate must be positive, got {0:?} Hz")]
    InvalidSampleRate(f64),

    /// Quality factor is not strictly positive
    #[error("Q factor must be positive")]
    InvalidQ(f64),

    /// Gain is not a finite number
    #[error("Gain must be a finite number of dB, got {0:?}")]
    InvalidGain(f64),

    /// Register width / fractional bit combination cannot be represented
    #[error("Invalid fixed-point format: width {width}, frac bits {frac_bits} (need 2 <= width <= 128 and frac bits < width)")]
    InvalidQFormat {
        /// Register width in bits
        width: u32,
        /// Fractional bits
        frac_bits: u32,
    },

    /// Hardware encoding requested without quantized coefficients
    #[error("Hardware parameter encoding requires quantized coefficients")]
    MissingFixedPoint,

    /// Fixed-point type does not match the quantized format
    #[error("Fractional bit mismatch: coefficients use {actual}, target type has {expected}")]
    FracBitsMismatch {
        /// Fractional bits of the requested type
        expected: u32,
        /// Fractional bits of the quantized set
        actual: u32,
    },

    /// Structured document serialization failed
    #[error("Failed to serialize document: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Writing the output file failed
    #[error("Failed to write {}: {source}", path.display())]
    Io {
        /// Destination path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },
}

impl Error {
    /// Check if this error comes from an invalid filter specification
    #[must_use]
    pub fn is_invalid_spec(&self) -> bool {
        matches!(
            self,
            Error::InvalidFrequency { .. }
                | Error::InvalidSampleRate(_)
                | Error::InvalidQ(_)
                | Error::InvalidGain(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frequency_message_matches_cli_diagnostic() {
        let err = Error::InvalidFrequency {
            frequency: 24000.0,
            nyquist: 24000.0,
        };
        assert_eq!(err.to_string(), "Frequency must be between 0 and 24000.0 Hz");
        assert!(err.is_invalid_spec());
    }

    #[test]
    fn q_message() {
        assert_eq!(Error::InvalidQ(0.0).to_string(), "Q factor must be positive");
    }

    #[test]
    fn qformat_error_is_not_spec_error() {
        let err = Error::InvalidQFormat {
            width: 1,
            frac_bits: 0,
        };
        assert!(!err.is_invalid_spec());
    }
}
