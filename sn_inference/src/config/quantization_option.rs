use crate::error::{Error, Result};
use crate::quantized::QuantType;
use crate::utils::d_type::ComputeType;
use serde_json::{Map, Value};
use sn_core::error::ErrorCore;

/// The recognized quantization fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptionField {
    Enabled,
    ComputeType,
    QuantType,
    UseDoubleQuant,
}

impl OptionField {
    pub const ALL: [OptionField; 4] = [
        OptionField::Enabled,
        OptionField::ComputeType,
        OptionField::QuantType,
        OptionField::UseDoubleQuant,
    ];

    /// Canonical key, as written by `ResolvedConfig::to_value`.
    pub fn name(self) -> &'static str {
        match self {
            OptionField::Enabled => "enabled",
            OptionField::ComputeType => "compute_type",
            OptionField::QuantType => "quant_type",
            OptionField::UseDoubleQuant => "use_double_quant",
        }
    }

    /// Every spelling accepted for this field. The `bnb_4bit_*` and
    /// `load_in_4bit` keys are the keyword names of the bitsandbytes config.
    pub fn keys(self) -> &'static [&'static str] {
        match self {
            OptionField::Enabled => &["enabled", "load_in_4bit"],
            OptionField::ComputeType => &["compute_type", "computeType", "bnb_4bit_compute_dtype"],
            OptionField::QuantType => &["quant_type", "quantType", "bnb_4bit_quant_type"],
            OptionField::UseDoubleQuant => &[
                "use_double_quant",
                "useDoubleQuant",
                "bnb_4bit_use_double_quant",
            ],
        }
    }

    pub fn from_key(key: &str) -> Option<OptionField> {
        OptionField::ALL
            .into_iter()
            .find(|field| field.keys().contains(&key))
    }
}

/// Partially specified quantization options. `None` means "not supplied".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QuantizationOptions {
    pub enabled: Option<bool>,
    pub compute_type: Option<ComputeType>,
    pub quant_type: Option<QuantType>,
    pub use_double_quant: Option<bool>,
}

impl QuantizationOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = Some(enabled);
        self
    }

    pub fn with_compute_type(mut self, compute_type: ComputeType) -> Self {
        self.compute_type = Some(compute_type);
        self
    }

    pub fn with_quant_type(mut self, quant_type: QuantType) -> Self {
        self.quant_type = Some(quant_type);
        self
    }

    pub fn with_double_quant(mut self, use_double_quant: bool) -> Self {
        self.use_double_quant = Some(use_double_quant);
        self
    }

    pub fn is_supplied(&self, field: OptionField) -> bool {
        match field {
            OptionField::Enabled => self.enabled.is_some(),
            OptionField::ComputeType => self.compute_type.is_some(),
            OptionField::QuantType => self.quant_type.is_some(),
            OptionField::UseDoubleQuant => self.use_double_quant.is_some(),
        }
    }

    /// Parses a dynamic option object. Unknown keys, duplicated fields and
    /// values of the wrong type or outside their enumeration are rejected.
    /// `null` counts as not supplied.
    pub fn from_map(map: &Map<String, Value>) -> Result<Self> {
        let mut options = QuantizationOptions::default();

        for (key, value) in map {
            let field = OptionField::from_key(key)
                .ok_or_else(|| Error::invalid_option(key.as_str(), "unrecognized option name"))?;

            if value.is_null() {
                continue;
            }
            if options.is_supplied(field) {
                return Err(Error::invalid_option(
                    key.as_str(),
                    format!("`{}` is supplied more than once", field.name()),
                ));
            }

            match field {
                OptionField::Enabled => options.enabled = Some(expect_bool(key, value)?),
                OptionField::ComputeType => {
                    let compute_type = expect_str(key, value)?
                        .parse::<ComputeType>()
                        .map_err(|err| reported_as(key, err))?;
                    options.compute_type = Some(compute_type)
                }
                OptionField::QuantType => {
                    let quant_type = expect_str(key, value)?
                        .parse::<QuantType>()
                        .map_err(|err| reported_as(key, err))?;
                    options.quant_type = Some(quant_type)
                }
                OptionField::UseDoubleQuant => {
                    options.use_double_quant = Some(expect_bool(key, value)?)
                }
            }
        }

        Ok(options)
    }

    pub fn from_value(value: &Value) -> Result<Self> {
        match value {
            Value::Object(map) => Self::from_map(map),
            other => Err(Error::invalid_option(
                "<root>",
                format!("expected an object of options, got {}", other),
            )),
        }
    }

    pub fn from_json_str(data: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(data).map_err(ErrorCore::from)?;
        Self::from_value(&value)
    }
}

/// Names the key as the caller wrote it rather than the canonical field.
fn reported_as(key: &str, err: Error) -> Error {
    match err {
        Error::InvalidOption { reason, .. } => Error::invalid_option(key, reason),
        other => other,
    }
}

fn expect_bool(key: &str, value: &Value) -> Result<bool> {
    value
        .as_bool()
        .ok_or_else(|| Error::invalid_option(key, format!("expected a boolean, got {}", value)))
}

fn expect_str<'a>(key: &str, value: &'a Value) -> Result<&'a str> {
    value
        .as_str()
        .ok_or_else(|| Error::invalid_option(key, format!("expected a string, got {}", value)))
}
