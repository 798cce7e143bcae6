//! Fixed-Point Quantization
//!
//! Converts normalized coefficients into width-bit two's-complement register
//! patterns with `frac_bits` fractional bits.
//!
//! Out-of-range values are never clamped: the scaled integer is reduced
//! modulo 2^width exactly like the hardware register would truncate it. Use
//! [`FixedPointCoeffSet::wrapped`] to find coefficients that did not fit.

use clap::ValueEnum;
use fixed::types::extra::LeEqU128;
use fixed::FixedI128;
use heapless::Vec;

use crate::config::{DEFAULT_FRAC_BITS, DEFAULT_WIDTH};
use crate::dsp::filter_design::CoeffSet;
use crate::error::{Error, Result};
use crate::types::Coefficient;

/// 2^127, the first magnitude that no longer fits an `i128`
const TWO_POW_127: f64 = 170_141_183_460_469_231_731_687_303_715_884_105_728.0;

/// How `v * 2^frac_bits` is turned into an integer
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, ValueEnum)]
pub enum RoundingMode {
    /// Toward negative infinity
    #[default]
    Floor,
    /// Toward zero (C-style integer conversion)
    TowardZero,
    /// To nearest, ties away from zero
    Nearest,
}

impl RoundingMode {
    /// Round a scaled coefficient to an integer-valued float
    #[must_use]
    pub fn apply(self, scaled: f64) -> f64 {
        match self {
            Self::Floor => scaled.floor(),
            Self::TowardZero => scaled.trunc(),
            Self::Nearest => scaled.round(),
        }
    }
}

/// Register format: total width and fractional bits
///
/// Valid formats satisfy `2 <= width <= 128` and `frac_bits < width`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct QFormat {
    width: u32,
    frac_bits: u32,
}

impl QFormat {
    /// Narrowest register (sign bit plus one)
    pub const MIN_WIDTH: u32 = 2;

    /// Widest register that fits a `u128` pattern
    pub const MAX_WIDTH: u32 = 128;

    /// Create a new register format
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidQFormat`] if the width is outside
    /// `2..=128` or `frac_bits >= width`.
    pub fn new(width: u32, frac_bits: u32) -> Result<Self> {
        if (Self::MIN_WIDTH..=Self::MAX_WIDTH).contains(&width) && frac_bits < width {
            Ok(Self { width, frac_bits })
        } else {
            Err(Error::InvalidQFormat { width, frac_bits })
        }
    }

    /// Total register width in bits
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Number of fractional bits
    #[must_use]
    pub const fn frac_bits(&self) -> u32 {
        self.frac_bits
    }

    /// Integer bits excluding the sign bit
    #[must_use]
    pub const fn int_bits(&self) -> u32 {
        self.width - self.frac_bits - 1
    }

    /// Header label, written `Q{frac_bits}.{int_bits}`
    #[must_use]
    pub fn label(&self) -> String {
        format!("Q{}.{}", self.frac_bits, self.int_bits())
    }

    /// 2^frac_bits
    #[must_use]
    pub fn scale(&self) -> f64 {
        pow2(self.frac_bits)
    }

    /// Smallest magnitude that no longer fits: 2^(width - frac_bits - 1)
    #[must_use]
    pub fn max_magnitude(&self) -> f64 {
        pow2(self.int_bits())
    }

    /// Mask selecting the low `width` bits
    #[must_use]
    pub const fn mask(&self) -> u128 {
        u128::MAX >> (128 - self.width)
    }

    /// Smallest signed register value
    #[must_use]
    pub const fn min_signed(&self) -> i128 {
        i128::MIN >> (128 - self.width)
    }

    /// Largest signed register value
    #[must_use]
    pub const fn max_signed(&self) -> i128 {
        i128::MAX >> (128 - self.width)
    }

    /// Minimum hex digit count for this width (`width / 4`)
    #[must_use]
    pub const fn hex_digits(&self) -> usize {
        (self.width / 4) as usize
    }

    /// Reduce a signed integer to its width-bit two's-complement pattern
    #[must_use]
    #[allow(clippy::cast_sign_loss)]
    pub const fn encode_signed(&self, value: i128) -> u128 {
        (value as u128) & self.mask()
    }

    /// Sign-extend a width-bit pattern
    #[must_use]
    #[allow(clippy::cast_possible_wrap)]
    pub const fn decode_signed(&self, pattern: u128) -> i128 {
        let shift = 128 - self.width;
        ((pattern << shift) as i128) >> shift
    }

    /// Whether an integer-valued float lies inside the signed register range
    fn fits(&self, raw: f64) -> bool {
        let bound = pow2(self.width - 1);
        raw >= -bound && raw < bound
    }

    /// Reduce an integer-valued float modulo 2^width
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn wrap(&self, raw: f64) -> u128 {
        if raw.abs() < TWO_POW_127 {
            self.encode_signed(raw as i128)
        } else {
            // Beyond i128 the float is an exact multiple of a large power of
            // two, so the euclidean remainder is exact.
            raw.rem_euclid(pow2(self.width)) as u128
        }
    }
}

impl Default for QFormat {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            frac_bits: DEFAULT_FRAC_BITS,
        }
    }
}

/// Quantized coefficient set
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedPointCoeffSet {
    patterns: [u128; 5],
    wrapped: [bool; 5],
    format: QFormat,
    rounding: RoundingMode,
}

impl FixedPointCoeffSet {
    /// Register format the set was quantized to
    #[must_use]
    pub const fn format(&self) -> QFormat {
        self.format
    }

    /// Rounding mode the set was quantized with
    #[must_use]
    pub const fn rounding(&self) -> RoundingMode {
        self.rounding
    }

    /// Register width in bits
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.format.width
    }

    /// Number of fractional bits
    #[must_use]
    pub const fn frac_bits(&self) -> u32 {
        self.format.frac_bits
    }

    /// Unsigned width-bit pattern of one coefficient
    #[must_use]
    pub const fn pattern(&self, coeff: Coefficient) -> u128 {
        self.patterns[coeff.index()]
    }

    /// All patterns in register order
    #[must_use]
    pub const fn patterns(&self) -> [u128; 5] {
        self.patterns
    }

    /// Two's-complement value of one coefficient
    #[must_use]
    pub const fn signed(&self, coeff: Coefficient) -> i128 {
        self.format.decode_signed(self.pattern(coeff))
    }

    /// Uppercase hex of one pattern, zero-padded to `width / 4` digits
    #[must_use]
    pub fn to_hex(&self, coeff: Coefficient) -> String {
        format!(
            "{:0digits$X}",
            self.pattern(coeff),
            digits = self.format.hex_digits()
        )
    }

    /// Coefficients whose scaled value did not fit the register and wrapped
    #[must_use]
    pub fn wrapped(&self) -> Vec<Coefficient, 5> {
        Coefficient::ALL
            .into_iter()
            .filter(|c| self.wrapped[c.index()])
            .collect()
    }

    /// Real values the register patterns represent
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn dequantize(&self) -> CoeffSet {
        let scale = self.format.scale();
        let value = |c: Coefficient| self.signed(c) as f64 / scale;
        CoeffSet::new(
            value(Coefficient::B0),
            value(Coefficient::B1),
            value(Coefficient::B2),
            value(Coefficient::A1),
            value(Coefficient::A2),
        )
    }

    /// Reinterpret the registers as `fixed` numbers for bit-accurate modelling
    ///
    /// # Errors
    ///
    /// Returns [`Error::FracBitsMismatch`] if `Frac` differs from the
    /// quantized format's fractional bits.
    pub fn to_fixed<Frac: LeEqU128>(&self) -> Result<[FixedI128<Frac>; 5]> {
        let expected = FixedI128::<Frac>::FRAC_NBITS;
        if expected != self.format.frac_bits {
            return Err(Error::FracBitsMismatch {
                expected,
                actual: self.format.frac_bits,
            });
        }
        Ok(Coefficient::ALL.map(|c| FixedI128::<Frac>::from_bits(self.signed(c))))
    }
}

/// Quantize with the default [`RoundingMode::Floor`]
#[must_use]
pub fn quantize(coeffs: &CoeffSet, format: QFormat) -> FixedPointCoeffSet {
    quantize_with(coeffs, format, RoundingMode::Floor)
}

/// Quantize each coefficient as `round(v * 2^frac_bits) mod 2^width`
#[must_use]
pub fn quantize_with(coeffs: &CoeffSet, format: QFormat, rounding: RoundingMode) -> FixedPointCoeffSet {
    let scale = format.scale();
    let raw = coeffs.to_array().map(|v| rounding.apply(v * scale));

    FixedPointCoeffSet {
        patterns: raw.map(|r| format.wrap(r)),
        wrapped: raw.map(|r| !format.fits(r)),
        format,
        rounding,
    }
}

fn pow2(exp: u32) -> f64 {
    2.0_f64.powi(i32::try_from(exp).unwrap_or(i32::MAX))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn q(width: u32, frac_bits: u32) -> QFormat {
        QFormat::new(width, frac_bits).unwrap()
    }

    #[test]
    fn qformat_bounds() {
        assert!(QFormat::new(1, 0).is_err());
        assert!(QFormat::new(2, 0).is_ok());
        assert!(QFormat::new(8, 8).is_err());
        assert!(QFormat::new(64, 63).is_ok());
        assert!(QFormat::new(128, 127).is_ok());
        assert!(QFormat::new(129, 16).is_err());
    }

    #[test]
    fn default_is_hardware_register() {
        assert_eq!(QFormat::default(), q(18, 16));
    }

    #[test]
    fn qformat_label_matches_header() {
        assert_eq!(q(18, 16).label(), "Q16.1");
        assert_eq!(q(8, 4).label(), "Q4.3");
    }

    #[test]
    fn mask_and_signed_range() {
        let f = q(8, 4);
        assert_eq!(f.mask(), 0xFF);
        assert_eq!(f.min_signed(), -128);
        assert_eq!(f.max_signed(), 127);

        let wide = q(64, 32);
        assert_eq!(wide.mask(), u128::from(u64::MAX));
        assert_eq!(wide.min_signed(), i128::from(i64::MIN));
        assert_eq!(wide.max_signed(), i128::from(i64::MAX));

        let widest = q(128, 64);
        assert_eq!(widest.mask(), u128::MAX);
        assert_eq!(widest.min_signed(), i128::MIN);
    }

    #[test]
    fn decode_sign_extends() {
        let f = q(8, 4);
        assert_eq!(f.decode_signed(0xF0), -16);
        assert_eq!(f.decode_signed(0x7F), 127);
        assert_eq!(f.decode_signed(0x80), -128);
    }

    #[test]
    fn rounding_modes_differ_on_negative_fractions() {
        assert_eq!(RoundingMode::Floor.apply(-2.5), -3.0);
        assert_eq!(RoundingMode::TowardZero.apply(-2.5), -2.0);
        assert_eq!(RoundingMode::Nearest.apply(-2.5), -3.0);
        assert_eq!(RoundingMode::Nearest.apply(2.4), 2.0);
    }

    #[test]
    fn huge_values_wrap_exactly() {
        // 2^70 + 2^20 is exactly representable; low 24 bits are 0x100000
        let f = q(24, 0);
        let v = pow2(70) + pow2(20);
        let fixed = quantize(&CoeffSet::new(v, -v, 0.0, 0.0, 0.0), f);
        assert_eq!(fixed.pattern(Coefficient::B0), 0x10_0000);
        assert_eq!(fixed.pattern(Coefficient::B1), 0xF0_0000);
        assert_eq!(fixed.wrapped().as_slice(), &[Coefficient::B0, Coefficient::B1]);
    }

    #[test]
    fn non_finite_maps_to_zero_pattern() {
        let fixed = quantize(&CoeffSet::new(f64::NAN, f64::INFINITY, 0.0, 0.0, 0.0), q(18, 16));
        assert_eq!(fixed.pattern(Coefficient::B0), 0);
        assert_eq!(fixed.pattern(Coefficient::B1), 0);
        assert_eq!(fixed.wrapped().as_slice(), &[Coefficient::B0, Coefficient::B1]);
    }
}
