//! JSON document
//!
//! Values keep full `f64` precision (shortest round-trip representation).

use serde::Serialize;

use crate::dsp::filter_design::CoeffSet;
use crate::dsp::quantize::FixedPointCoeffSet;
use crate::encode::{CoeffEncoder, Metadata};
use crate::error::Result;

/// Structured document encoder
#[derive(Clone, Copy, Debug, Default)]
pub struct Json;

#[derive(Serialize)]
struct Document<'a> {
    coefficients: Vectors,
    #[serde(skip_serializing_if = "Option::is_none")]
    metadata: Option<&'a Metadata>,
}

#[derive(Serialize)]
struct Vectors {
    b: [f64; 3],
    a: [f64; 3],
}

impl CoeffEncoder for Json {
    fn encode(
        &self,
        coeffs: &CoeffSet,
        _fixed: Option<&FixedPointCoeffSet>,
        metadata: Option<&Metadata>,
    ) -> Result<String> {
        let doc = Document {
            coefficients: Vectors {
                b: coeffs.b(),
                a: coeffs.a(),
            },
            metadata,
        };
        Ok(serde_json::to_string_pretty(&doc)?)
    }
}
