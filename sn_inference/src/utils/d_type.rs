use crate::error::{Error, Result};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Numeric precision used for arithmetic on dequantized weights.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ComputeType {
    #[default]
    Float32,
    Bfloat16,
    Float16,
}

impl ComputeType {
    pub const ALL: [ComputeType; 3] = [
        ComputeType::Float32,
        ComputeType::Bfloat16,
        ComputeType::Float16,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ComputeType::Float32 => "float32",
            ComputeType::Bfloat16 => "bfloat16",
            ComputeType::Float16 => "float16",
        }
    }
}

impl FromStr for ComputeType {
    type Err = Error;

    fn from_str(type_in_str: &str) -> Result<Self> {
        match type_in_str.to_lowercase().as_str() {
            "float32" | "fp32" | "f32" => Ok(ComputeType::Float32),
            "bfloat16" | "bf16" => Ok(ComputeType::Bfloat16),
            "float16" | "fp16" | "f16" | "half" => Ok(ComputeType::Float16),
            _ => Err(Error::invalid_option(
                "compute_type",
                format!(
                    "unknown compute type {:?}, expected one of float32, bfloat16, float16",
                    type_in_str
                ),
            )),
        }
    }
}

impl fmt::Display for ComputeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
