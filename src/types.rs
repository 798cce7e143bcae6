//! Shared types used across the coefficient generator
//!
//! This module defines domain-specific types that enforce invariants
//! at construction time so later pipeline stages never see invalid input.

use core::fmt;

use clap::ValueEnum;
use serde::Serialize;

use crate::error::{Error, Result};

/// Biquad response shape
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterType {
    /// Second-order low-pass
    #[default]
    Lowpass,
    /// Second-order high-pass
    Highpass,
    /// Band-pass (constant 0 dB peak gain)
    Bandpass,
    /// Band-stop (notch)
    Bandstop,
    /// Peaking EQ, boost or cut set by `gain_db`
    Peaking,
}

impl FilterType {
    /// All filter types in CLI order
    pub const ALL: [Self; 5] = [
        Self::Lowpass,
        Self::Highpass,
        Self::Bandpass,
        Self::Bandstop,
        Self::Peaking,
    ];

    /// Name used on the command line and in metadata
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Lowpass => "lowpass",
            Self::Highpass => "highpass",
            Self::Bandpass => "bandpass",
            Self::Bandstop => "bandstop",
            Self::Peaking => "peaking",
        }
    }

    /// Whether the gain parameter affects the design
    #[must_use]
    pub const fn uses_gain(self) -> bool {
        matches!(self, Self::Peaking)
    }
}

impl fmt::Display for FilterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Named coefficient of a normalized biquad, in register order
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Coefficient {
    /// Numerator b0
    B0,
    /// Numerator b1
    B1,
    /// Numerator b2
    B2,
    /// Denominator a1
    A1,
    /// Denominator a2
    A2,
}

impl Coefficient {
    /// All coefficients in register order
    pub const ALL: [Self; 5] = [Self::B0, Self::B1, Self::B2, Self::A1, Self::A2];

    /// Parameter name in the hardware block
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::B0 => "B0",
            Self::B1 => "B1",
            Self::B2 => "B2",
            Self::A1 => "A1",
            Self::A2 => "A2",
        }
    }

    /// Position in `[b0, b1, b2, a1, a2]`
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Coefficient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Validated filter specification
///
/// Guarantees `0 < frequency < sample_rate / 2`, `q > 0` and finite inputs,
/// which keeps `sin(ω)` and `q` away from the designer's singularities.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FilterSpec {
    filter_type: FilterType,
    frequency: f64,
    sample_rate: f64,
    q: f64,
    gain_db: f64,
}

impl FilterSpec {
    /// Create a new specification, rejecting anything outside the valid range
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidFrequency`] unless `0 < frequency < sample_rate / 2`,
    /// [`Error::InvalidQ`] unless `q > 0`, and [`Error::InvalidSampleRate`] /
    /// [`Error::InvalidGain`] for non-finite values.
    pub fn new(
        filter_type: FilterType,
        frequency: f64,
        sample_rate: f64,
        q: f64,
        gain_db: f64,
    ) -> Result<Self> {
        if !sample_rate.is_finite() || sample_rate <= 0.0 {
            return Err(Error::InvalidSampleRate(sample_rate));
        }

        let nyquist = sample_rate / 2.0;
        if !(frequency > 0.0 && frequency < nyquist) {
            return Err(Error::InvalidFrequency { frequency, nyquist });
        }

        if !(q > 0.0 && q.is_finite()) {
            return Err(Error::InvalidQ(q));
        }

        if !gain_db.is_finite() {
            return Err(Error::InvalidGain(gain_db));
        }

        Ok(Self {
            filter_type,
            frequency,
            sample_rate,
            q,
            gain_db,
        })
    }

    /// Response shape
    #[must_use]
    pub const fn filter_type(&self) -> FilterType {
        self.filter_type
    }

    /// Cutoff or center frequency in Hz
    #[must_use]
    pub const fn frequency(&self) -> f64 {
        self.frequency
    }

    /// Sample rate in Hz
    #[must_use]
    pub const fn sample_rate(&self) -> f64 {
        self.sample_rate
    }

    /// Quality factor
    #[must_use]
    pub const fn q(&self) -> f64 {
        self.q
    }

    /// Gain in dB (only meaningful for [`FilterType::Peaking`])
    #[must_use]
    pub const fn gain_db(&self) -> f64 {
        self.gain_db
    }

    /// Half the sample rate in Hz
    #[must_use]
    pub fn nyquist(&self) -> f64 {
        self.sample_rate / 2.0
    }

    /// Normalized angular frequency ω = 2π·f/fs in radians per sample
    #[must_use]
    pub fn omega(&self) -> f64 {
        2.0 * core::f64::consts::PI * self.frequency / self.sample_rate
    }
}
