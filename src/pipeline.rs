//! Design → quantize → encode driver
//!
//! Each stage consumes the previous stage's value read-only; nothing is
//! shared between runs, so independent configurations can be generated in
//! parallel.

use tracing::{debug, warn};

use crate::config::Config;
use crate::dsp::filter_design::{design, CoeffSet};
use crate::dsp::quantize::{quantize_with, FixedPointCoeffSet};
use crate::encode::{Metadata, OutputDocument};
use crate::error::Result;

/// Run the full pipeline for one configuration
///
/// # Errors
///
/// Propagates encoder failures. Only formats that carry register values are
/// quantized; overflow there is logged at `warn` level, never returned.
pub fn generate(config: &Config) -> Result<OutputDocument> {
    let spec = config.spec();
    let coeffs = design(spec);
    debug!(
        filter_type = %spec.filter_type(),
        b0 = coeffs.b0,
        b1 = coeffs.b1,
        b2 = coeffs.b2,
        a1 = coeffs.a1,
        a2 = coeffs.a2,
        "designed coefficients"
    );
    debug!(
        dc_gain = coeffs.gain_at_dc(),
        nyquist_gain = coeffs.gain_at_nyquist(),
        stable = coeffs.is_stable(),
        "response check"
    );

    let fixed = config.format().needs_fixed_point().then(|| {
        let fixed = quantize_with(&coeffs, config.q_format(), config.rounding());
        debug!(
            format = %fixed.format().label(),
            width = fixed.width(),
            rounding = ?fixed.rounding(),
            "quantized coefficients"
        );
        report_overflow(&coeffs, &fixed);
        fixed
    });

    let metadata = Metadata::from_spec(spec);
    let text = config
        .format()
        .encoder()
        .encode(&coeffs, fixed.as_ref(), Some(&metadata))?;

    Ok(OutputDocument::new(text, metadata))
}

fn report_overflow(coeffs: &CoeffSet, fixed: &FixedPointCoeffSet) {
    let values = coeffs.to_array();
    let format = fixed.format();
    for coeff in fixed.wrapped() {
        warn!(
            coefficient = %coeff,
            value = values[coeff.index()],
            limit = format.max_magnitude(),
            "coefficient does not fit {} register, value wraps",
            format.label()
        );
    }
}
