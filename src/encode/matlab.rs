//! MATLAB / Octave snippet

use crate::dsp::filter_design::CoeffSet;
use crate::dsp::quantize::FixedPointCoeffSet;
use crate::encode::{CoeffEncoder, Metadata};
use crate::error::Result;

/// `b = [...]; a = [1.0, ...];` encoder, usable directly with `filter(b, a, x)`
#[derive(Clone, Copy, Debug, Default)]
pub struct Matlab;

impl CoeffEncoder for Matlab {
    fn encode(
        &self,
        coeffs: &CoeffSet,
        _fixed: Option<&FixedPointCoeffSet>,
        _metadata: Option<&Metadata>,
    ) -> Result<String> {
        let CoeffSet { b0, b1, b2, a1, a2 } = *coeffs;
        Ok(format!(
            "% Biquad Filter Coefficients\n\
             b = [{b0:12.9}, {b1:12.9}, {b2:12.9}];\n\
             a = [1.0, {a1:12.9}, {a2:12.9}];"
        ))
    }
}
