use crate::config::config_resolver::describe;
use crate::config::quantization_option::QuantizationOptions;
use crate::quantized::{FourBitScheme, QuantType};
use crate::utils::d_type::ComputeType;
use serde::Serialize;
use serde_json::{Value, json};
use std::fmt;

/// Fully resolved quantization settings. Only produced by the resolver, so a
/// disabled config always carries the defaults for the other fields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct ResolvedConfig {
    enabled: bool,
    compute_type: ComputeType,
    quant_type: QuantType,
    use_double_quant: bool,
}

impl ResolvedConfig {
    pub(crate) fn new(
        enabled: bool,
        compute_type: ComputeType,
        quant_type: QuantType,
        use_double_quant: bool,
    ) -> Self {
        ResolvedConfig {
            enabled,
            compute_type,
            quant_type,
            use_double_quant,
        }
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    pub fn compute_type(&self) -> ComputeType {
        self.compute_type
    }

    pub fn quant_type(&self) -> QuantType {
        self.quant_type
    }

    pub fn use_double_quant(&self) -> bool {
        self.use_double_quant
    }

    pub fn is_quantized(&self) -> bool {
        self.enabled
    }

    /// The scheme a loader applies, `None` when weights must load unquantized.
    pub fn scheme(&self) -> Option<FourBitScheme> {
        self.enabled.then_some(FourBitScheme {
            quant_type: self.quant_type,
            compute_type: self.compute_type,
            use_double_quant: self.use_double_quant,
        })
    }

    pub fn to_options(&self) -> QuantizationOptions {
        QuantizationOptions {
            enabled: Some(self.enabled),
            compute_type: Some(self.compute_type),
            quant_type: Some(self.quant_type),
            use_double_quant: Some(self.use_double_quant),
        }
    }

    pub fn to_value(&self) -> Value {
        json!({
            "enabled": self.enabled,
            "compute_type": self.compute_type.as_str(),
            "quant_type": self.quant_type.as_str(),
            "use_double_quant": self.use_double_quant,
        })
    }

    /// Keyword arguments for the bitsandbytes `BitsAndBytesConfig`.
    pub fn to_library_kwargs(&self) -> Value {
        json!({
            "load_in_4bit": self.enabled,
            "bnb_4bit_compute_dtype": self.compute_type.as_str(),
            "bnb_4bit_quant_type": self.quant_type.as_str(),
            "bnb_4bit_use_double_quant": self.use_double_quant,
        })
    }
}

impl fmt::Display for ResolvedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&describe(self))
    }
}
