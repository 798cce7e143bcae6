//! Filter Design Module
//!
//! Provides coefficient calculation for the biquad response shapes the
//! hardware filter supports. All arithmetic is done in `f64` and nothing is
//! rounded before the final division by a0.
//!
//! # Supported Filter Types
//!
//! - Low-pass, high-pass
//! - Band-pass (constant 0 dB peak gain)
//! - Band-stop (notch)
//! - Peaking EQ

use core::f64::consts::PI;

use crate::types::{FilterSpec, FilterType};

/// Normalized biquad coefficients
///
/// Transfer function: H(z) = (b0 + b1*z^-1 + b2*z^-2) / (1 + a1*z^-1 + a2*z^-2)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CoeffSet {
    /// Numerator coefficient b0
    pub b0: f64,
    /// Numerator coefficient b1
    pub b1: f64,
    /// Numerator coefficient b2
    pub b2: f64,
    /// Denominator coefficient a1 (note: a0 is normalized to 1)
    pub a1: f64,
    /// Denominator coefficient a2
    pub a2: f64,
}

/// Coefficients straight from the design equations, before normalization
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RawCoeffs {
    /// Numerator coefficient b0
    pub b0: f64,
    /// Numerator coefficient b1
    pub b1: f64,
    /// Numerator coefficient b2
    pub b2: f64,
    /// Leading denominator coefficient
    pub a0: f64,
    /// Denominator coefficient a1
    pub a1: f64,
    /// Denominator coefficient a2
    pub a2: f64,
}

/// Intermediate terms shared by every design equation
struct Warp {
    sin_omega: f64,
    cos_omega: f64,
    alpha: f64,
}

impl Warp {
    fn new(freq: f64, fs: f64, q: f64) -> Self {
        let omega = 2.0 * PI * freq / fs;
        let sin_omega = omega.sin();
        Self {
            sin_omega,
            cos_omega: omega.cos(),
            alpha: sin_omega / (2.0 * q),
        }
    }
}

impl RawCoeffs {
    /// Design a low-pass filter
    ///
    /// # Arguments
    /// * `fc` - Cutoff frequency in Hz
    /// * `fs` - Sample rate in Hz
    /// * `q` - Quality factor (0.707 for Butterworth)
    #[must_use]
    pub fn lowpass(fc: f64, fs: f64, q: f64) -> Self {
        let Warp { cos_omega, alpha, .. } = Warp::new(fc, fs, q);

        Self {
            b0: (1.0 - cos_omega) / 2.0,
            b1: 1.0 - cos_omega,
            b2: (1.0 - cos_omega) / 2.0,
            a0: 1.0 + alpha,
            a1: -2.0 * cos_omega,
            a2: 1.0 - alpha,
        }
    }

    /// Design a high-pass filter
    ///
    /// # Arguments
    /// * `fc` - Cutoff frequency in Hz
    /// * `fs` - Sample rate in Hz
    /// * `q` - Quality factor (0.707 for Butterworth)
    #[must_use]
    pub fn highpass(fc: f64, fs: f64, q: f64) -> Self {
        let Warp { cos_omega, alpha, .. } = Warp::new(fc, fs, q);

        Self {
            b0: (1.0 + cos_omega) / 2.0,
            b1: -(1.0 + cos_omega),
            b2: (1.0 + cos_omega) / 2.0,
            a0: 1.0 + alpha,
            a1: -2.0 * cos_omega,
            a2: 1.0 - alpha,
        }
    }

    /// Design a band-pass filter
    ///
    /// Uses the sin(ω)/2 numerator, so the peak gain scales with Q.
    ///
    /// # Arguments
    /// * `fc` - Center frequency in Hz
    /// * `fs` - Sample rate in Hz
    /// * `q` - Quality factor (bandwidth = fc/Q)
    #[must_use]
    pub fn bandpass(fc: f64, fs: f64, q: f64) -> Self {
        let Warp {
            sin_omega,
            cos_omega,
            alpha,
        } = Warp::new(fc, fs, q);

        Self {
            b0: sin_omega / 2.0,
            b1: 0.0,
            b2: -sin_omega / 2.0,
            a0: 1.0 + alpha,
            a1: -2.0 * cos_omega,
            a2: 1.0 - alpha,
        }
    }

    /// Design a band-stop (notch) filter
    ///
    /// # Arguments
    /// * `fc` - Center frequency in Hz
    /// * `fs` - Sample rate in Hz
    /// * `q` - Quality factor (higher = narrower notch)
    #[must_use]
    pub fn bandstop(fc: f64, fs: f64, q: f64) -> Self {
        let Warp { cos_omega, alpha, .. } = Warp::new(fc, fs, q);

        Self {
            b0: 1.0,
            b1: -2.0 * cos_omega,
            b2: 1.0,
            a0: 1.0 + alpha,
            a1: -2.0 * cos_omega,
            a2: 1.0 - alpha,
        }
    }

    /// Design a peaking EQ filter
    ///
    /// # Arguments
    /// * `fc` - Center frequency in Hz
    /// * `fs` - Sample rate in Hz
    /// * `q` - Quality factor
    /// * `gain_db` - Gain at center frequency in dB
    #[must_use]
    pub fn peaking(fc: f64, fs: f64, q: f64, gain_db: f64) -> Self {
        let Warp { cos_omega, alpha, .. } = Warp::new(fc, fs, q);
        let a = 10.0_f64.powf(gain_db / 40.0);

        Self {
            b0: 1.0 + alpha * a,
            b1: -2.0 * cos_omega,
            b2: 1.0 - alpha * a,
            a0: 1.0 + alpha / a,
            a1: -2.0 * cos_omega,
            a2: 1.0 - alpha / a,
        }
    }

    /// Evaluate the design equations for a validated specification
    #[must_use]
    pub fn from_spec(spec: &FilterSpec) -> Self {
        let (fc, fs, q) = (spec.frequency(), spec.sample_rate(), spec.q());
        match spec.filter_type() {
            FilterType::Lowpass => Self::lowpass(fc, fs, q),
            FilterType::Highpass => Self::highpass(fc, fs, q),
            FilterType::Bandpass => Self::bandpass(fc, fs, q),
            FilterType::Bandstop => Self::bandstop(fc, fs, q),
            FilterType::Peaking => Self::peaking(fc, fs, q, spec.gain_db()),
        }
    }

    /// Fold a0 into the other five coefficients
    #[must_use]
    pub fn normalize(self) -> CoeffSet {
        normalize(self.b0, self.b1, self.b2, self.a0, self.a1, self.a2)
    }
}

/// Normalize coefficients by a0
#[must_use]
pub fn normalize(b0: f64, b1: f64, b2: f64, a0: f64, a1: f64, a2: f64) -> CoeffSet {
    CoeffSet {
        b0: b0 / a0,
        b1: b1 / a0,
        b2: b2 / a0,
        a1: a1 / a0,
        a2: a2 / a0,
    }
}

/// Design normalized coefficients for a validated specification
#[must_use]
pub fn design(spec: &FilterSpec) -> CoeffSet {
    RawCoeffs::from_spec(spec).normalize()
}

impl CoeffSet {
    /// Unity (pass-through) coefficients
    pub const UNITY: Self = Self {
        b0: 1.0,
        b1: 0.0,
        b2: 0.0,
        a1: 0.0,
        a2: 0.0,
    };

    /// Create a coefficient set from already normalized values
    #[must_use]
    pub const fn new(b0: f64, b1: f64, b2: f64, a1: f64, a2: f64) -> Self {
        Self { b0, b1, b2, a1, a2 }
    }

    /// Coefficients in encoder order: b0, b1, b2, a1, a2
    #[must_use]
    pub const fn to_array(&self) -> [f64; 5] {
        [self.b0, self.b1, self.b2, self.a1, self.a2]
    }

    /// Numerator vector
    #[must_use]
    pub const fn b(&self) -> [f64; 3] {
        [self.b0, self.b1, self.b2]
    }

    /// Denominator vector including the implicit leading 1.0
    #[must_use]
    pub const fn a(&self) -> [f64; 3] {
        [1.0, self.a1, self.a2]
    }

    /// H(z) at z = 1
    #[must_use]
    pub fn gain_at_dc(&self) -> f64 {
        (self.b0 + self.b1 + self.b2) / (1.0 + self.a1 + self.a2)
    }

    /// H(z) at z = -1
    #[must_use]
    pub fn gain_at_nyquist(&self) -> f64 {
        (self.b0 - self.b1 + self.b2) / (1.0 - self.a1 + self.a2)
    }

    /// Calculate magnitude response at a given frequency
    #[must_use]
    pub fn magnitude_at(&self, freq: f64, fs: f64) -> f64 {
        let omega = 2.0 * PI * freq / fs;
        let cos_omega = omega.cos();
        let cos_2omega = (2.0 * omega).cos();

        // |H(e^jw)|^2 = |B(e^jw)|^2 / |A(e^jw)|^2
        let num = self.b0 * self.b0 + self.b1 * self.b1 + self.b2 * self.b2
            + 2.0 * (self.b0 * self.b1 + self.b1 * self.b2) * cos_omega
            + 2.0 * self.b0 * self.b2 * cos_2omega;

        let den = 1.0 + self.a1 * self.a1 + self.a2 * self.a2
            + 2.0 * (self.a1 + self.a1 * self.a2) * cos_omega
            + 2.0 * self.a2 * cos_2omega;

        if den > 0.0 {
            (num.max(0.0) / den).sqrt()
        } else {
            0.0
        }
    }

    /// Calculate magnitude response in dB at a given frequency
    #[must_use]
    pub fn magnitude_db_at(&self, freq: f64, fs: f64) -> f64 {
        let mag = self.magnitude_at(freq, fs);
        if mag > 0.0 {
            20.0 * mag.log10()
        } else {
            -120.0
        }
    }

    /// Poles lie strictly inside the unit circle
    #[must_use]
    pub fn is_stable(&self) -> bool {
        // Stability triangle for z^2 + a1 z + a2
        self.a2.abs() < 1.0 && self.a1.abs() < 1.0 + self.a2
    }
}

impl Default for CoeffSet {
    fn default() -> Self {
        Self::UNITY
    }
}
