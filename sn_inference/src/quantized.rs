use crate::error::{Error, Result};
use crate::utils::d_type::ComputeType;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// 4-bit value encoding. `Nf4` (Normal Float 4) is tuned to normally
/// distributed weights.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum QuantType {
    #[default]
    Fp4,
    Nf4,
}

impl QuantType {
    pub const ALL: [QuantType; 2] = [QuantType::Fp4, QuantType::Nf4];

    pub fn as_str(&self) -> &'static str {
        match self {
            QuantType::Fp4 => "fp4",
            QuantType::Nf4 => "nf4",
        }
    }
}

impl FromStr for QuantType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "fp4" => Ok(QuantType::Fp4),
            "nf4" => Ok(QuantType::Nf4),
            _ => Err(Error::invalid_option(
                "quant_type",
                format!("unknown quantization type {:?}, expected one of fp4, nf4", s),
            )),
        }
    }
}

impl fmt::Display for QuantType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a loader has to apply while materializing weights. Only exists for
/// configs with quantization enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FourBitScheme {
    pub quant_type: QuantType,
    pub compute_type: ComputeType,
    pub use_double_quant: bool,
}
