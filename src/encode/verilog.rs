//! Verilog parameter block
//!
//! ```text
//! // Biquad Filter Coefficients (Q16.1)
//! parameter B0 = 18'h0100; // 0.003916
//! ```

use core::fmt::Write;

use crate::dsp::filter_design::CoeffSet;
use crate::dsp::quantize::FixedPointCoeffSet;
use crate::encode::{CoeffEncoder, Metadata};
use crate::error::{Error, Result};
use crate::types::Coefficient;

/// Hardware parameter block encoder
#[derive(Clone, Copy, Debug, Default)]
pub struct Verilog;

impl CoeffEncoder for Verilog {
    fn encode(
        &self,
        coeffs: &CoeffSet,
        fixed: Option<&FixedPointCoeffSet>,
        _metadata: Option<&Metadata>,
    ) -> Result<String> {
        let fixed = fixed.ok_or(Error::MissingFixedPoint)?;
        let values = coeffs.to_array();
        let width = fixed.width();

        let mut out = format!("// Biquad Filter Coefficients ({})", fixed.format().label());
        for coeff in Coefficient::ALL {
            write!(
                out,
                "\nparameter {} = {width}'h{}; // {:8.6}",
                coeff.name(),
                fixed.to_hex(coeff),
                values[coeff.index()],
            )
            .ok();
        }
        Ok(out)
    }
}
