//! Filter Design Tests
//!
//! Closed-form coefficient values, normalization and response properties.
//! Run with: cargo test --test design_tests

use biquad_coeffs::dsp::filter_design::{design, normalize, CoeffSet, RawCoeffs};
use biquad_coeffs::types::{FilterSpec, FilterType};

const SAMPLE_RATE: f64 = 48000.0;

fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
    (a - b).abs() < tol
}

fn spec(filter_type: FilterType, freq: f64, q: f64, gain_db: f64) -> FilterSpec {
    FilterSpec::new(filter_type, freq, SAMPLE_RATE, q, gain_db).unwrap()
}

// =============================================================================
// Reference Values
// =============================================================================

#[test]
fn test_lowpass_1khz_reference_values() {
    let s = spec(FilterType::Lowpass, 1000.0, 0.707, 0.0);
    assert!(approx_eq(s.omega(), 0.130_900, 1e-6), "omega: {}", s.omega());

    let c = design(&s);
    assert!(approx_eq(c.b0, 0.003_918, 1e-4), "b0: {}", c.b0);
    assert!(approx_eq(c.b1, 0.007_837, 1e-4), "b1: {}", c.b1);
    assert!(approx_eq(c.b2, 0.003_918, 1e-4), "b2: {}", c.b2);
    assert!(approx_eq(c.a1, -1.815_318, 1e-4), "a1: {}", c.a1);
    assert!(approx_eq(c.a2, 0.830_982, 1e-4), "a2: {}", c.a2);
}

#[test]
fn test_lowpass_1khz_matches_legacy_generator() {
    // Values printed by the legacy coefficient script for the same arguments
    let c = design(&spec(FilterType::Lowpass, 1000.0, 0.707, 0.0));
    assert!(approx_eq(c.b0, 0.003_916_076_683_699, 1e-12), "b0: {}", c.b0);
    assert!(approx_eq(c.b1, 0.007_832_153_367_399, 1e-12), "b1: {}", c.b1);
    assert!(approx_eq(c.a1, -1.815_317_915_674_215, 1e-12), "a1: {}", c.a1);
    assert!(approx_eq(c.a2, 0.830_982_222_409_013, 1e-12), "a2: {}", c.a2);
}

#[test]
fn test_lowpass_numerator_symmetry() {
    let c = design(&spec(FilterType::Lowpass, 1000.0, 0.707, 0.0));
    assert_eq!(c.b0, c.b2);
    assert_eq!(c.b1, 2.0 * c.b0);
}

#[test]
fn test_highpass_1khz_dc_null() {
    let c = design(&spec(FilterType::Highpass, 1000.0, 0.707, 0.0));
    assert!((c.b0 + c.b1 + c.b2).abs() < 1e-6);
}

#[test]
fn test_peaking_boost_raises_b0_above_a0() {
    let s = spec(FilterType::Peaking, 1000.0, 1.0, 6.0);
    let a = 10.0_f64.powf(6.0 / 40.0);
    assert!(approx_eq(a, 1.412_54, 1e-5), "A: {a}");

    let raw = RawCoeffs::from_spec(&s);
    assert!(raw.b0 > raw.a0, "b0 {} a0 {}", raw.b0, raw.a0);
    assert!(design(&s).b0 > 1.0);
}

#[test]
fn test_peaking_cut_lowers_b0_below_a0() {
    let raw = RawCoeffs::from_spec(&spec(FilterType::Peaking, 1000.0, 1.0, -6.0));
    assert!(raw.b0 < raw.a0);
}

#[test]
fn test_bandstop_shares_a1_with_b1() {
    let c = design(&spec(FilterType::Bandstop, 3000.0, 2.0, 0.0));
    assert_eq!(c.b1, c.a1);
    assert_eq!(c.b0, c.b2);
}

#[test]
fn test_bandpass_numerator_antisymmetric() {
    let c = design(&spec(FilterType::Bandpass, 3000.0, 2.0, 0.0));
    assert_eq!(c.b0, -c.b2);
    assert_eq!(c.b1, 0.0);
}

#[test]
fn test_gain_ignored_for_non_peaking() {
    for t in [FilterType::Lowpass, FilterType::Highpass, FilterType::Bandpass, FilterType::Bandstop] {
        assert_eq!(design(&spec(t, 1000.0, 0.707, 0.0)), design(&spec(t, 1000.0, 0.707, 12.0)));
    }
}

// =============================================================================
// Normalization
// =============================================================================

#[test]
fn test_design_equals_normalized_raw() {
    for t in FilterType::ALL {
        let s = spec(t, 2500.0, 1.3, 4.5);
        let raw = RawCoeffs::from_spec(&s);
        let expected = normalize(raw.b0, raw.b1, raw.b2, raw.a0, raw.a1, raw.a2);
        assert_eq!(design(&s), expected, "{t}");
    }
}

#[test]
fn test_normalized_leading_term_is_one() {
    for t in FilterType::ALL {
        let c = design(&spec(t, 700.0, 0.9, -3.0));
        assert_eq!(c.a()[0], 1.0);
        assert_eq!(&c.a()[1..], &[c.a1, c.a2]);
    }
}

#[test]
fn test_normalize_is_pure() {
    let a = normalize(1.0, 2.0, 3.0, 4.0, 5.0, 6.0);
    let b = normalize(1.0, 2.0, 3.0, 4.0, 5.0, 6.0);
    assert_eq!(a, b);
    assert_eq!(a, CoeffSet::new(0.25, 0.5, 0.75, 1.25, 1.5));
}

// =============================================================================
// Response Properties
// =============================================================================

#[test]
fn test_lowpass_dc_gain_is_unity() {
    for freq in [50.0, 1000.0, 8000.0, 23000.0] {
        for q in [0.5, 0.707, 4.0] {
            let c = design(&spec(FilterType::Lowpass, freq, q, 0.0));
            let dc = (c.b0 + c.b1 + c.b2) / (1.0 + c.a1 + c.a2);
            assert!(approx_eq(dc, 1.0, 1e-9), "{freq} Hz Q{q}: {dc}");
            assert!(approx_eq(c.gain_at_dc(), dc, 1e-15));
        }
    }
}

#[test]
fn test_highpass_dc_null() {
    for freq in [50.0, 1000.0, 8000.0, 23000.0] {
        let c = design(&spec(FilterType::Highpass, freq, 0.707, 0.0));
        assert!((c.b0 + c.b1 + c.b2).abs() < 1e-9, "{freq} Hz");
    }
}

#[test]
fn test_nyquist_gain() {
    let lp = design(&spec(FilterType::Lowpass, 1000.0, 0.707, 0.0));
    assert!(lp.gain_at_nyquist().abs() < 1e-9, "lowpass: {}", lp.gain_at_nyquist());

    let hp = design(&spec(FilterType::Highpass, 1000.0, 0.707, 0.0));
    assert!(approx_eq(hp.gain_at_nyquist(), 1.0, 1e-9), "highpass: {}", hp.gain_at_nyquist());
}

#[test]
fn test_bandstop_unity_at_extremes() {
    let c = design(&spec(FilterType::Bandstop, 5000.0, 3.0, 0.0));
    assert!(approx_eq(c.gain_at_dc(), 1.0, 1e-9));
    assert!(approx_eq(c.gain_at_nyquist(), 1.0, 1e-9));
}

#[test]
fn test_bandpass_null_at_extremes() {
    let c = design(&spec(FilterType::Bandpass, 5000.0, 3.0, 0.0));
    assert!(c.gain_at_dc().abs() < 1e-9);
    assert!(c.gain_at_nyquist().abs() < 1e-9);
}

#[test]
fn test_all_designs_finite_near_band_edges() {
    let low = f64::MIN_POSITIVE * 1e10;
    let high = SAMPLE_RATE / 2.0 * (1.0 - 1e-12);
    for t in FilterType::ALL {
        for freq in [low, 1.0, high] {
            for q in [1e-3, 0.707, 1e3] {
                let c = design(&spec(t, freq, q, 24.0));
                assert!(c.to_array().iter().all(|v| v.is_finite()), "{t} {freq} Hz Q{q}: {c:?}");
            }
        }
    }
}

// =============================================================================
// Determinism
// =============================================================================

#[test]
fn test_design_is_deterministic() {
    for t in FilterType::ALL {
        let s = spec(t, 1234.5, 0.8, 3.0);
        assert_eq!(design(&s).to_array().map(f64::to_bits), design(&s).to_array().map(f64::to_bits));
    }
}
