//! C array snippet

use crate::dsp::filter_design::CoeffSet;
use crate::dsp::quantize::FixedPointCoeffSet;
use crate::encode::{CoeffEncoder, Metadata};
use crate::error::Result;

/// `b_coeffs[3]` / `a_coeffs[2]` encoder, floating point, 9 decimals
#[derive(Clone, Copy, Debug, Default)]
pub struct CArrays;

impl CoeffEncoder for CArrays {
    fn encode(
        &self,
        coeffs: &CoeffSet,
        _fixed: Option<&FixedPointCoeffSet>,
        _metadata: Option<&Metadata>,
    ) -> Result<String> {
        let CoeffSet { b0, b1, b2, a1, a2 } = *coeffs;
        Ok(format!(
            "// Biquad Filter Coefficients\n\
             const float b_coeffs[3] = {{{b0:12.9}, {b1:12.9}, {b2:12.9}}};\n\
             const float a_coeffs[2] = {{{a1:12.9}, {a2:12.9}}};"
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pads_to_twelve_columns() {
        let coeffs = CoeffSet::new(0.5, -0.25, 0.125, -1.0, 0.5);
        let text = CArrays.encode(&coeffs, None, None).unwrap();
        assert_eq!(
            text,
            "// Biquad Filter Coefficients\n\
             const float b_coeffs[3] = { 0.500000000, -0.250000000,  0.125000000};\n\
             const float a_coeffs[2] = {-1.000000000,  0.500000000};"
        );
    }
}
