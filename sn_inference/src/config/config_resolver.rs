use crate::config::quantization_option::{OptionField, QuantizationOptions};
use crate::config::resolved_config::ResolvedConfig;
use crate::error::{Error, Result};
use serde_json::{Map, Value};
use tracing::debug;

/// Applies defaults and the cross-field rules to a set of options.
///
/// With quantization disabled (explicitly or by default) every other field has
/// to be absent or equal to its default, otherwise the call fails with
/// [`Error::InconsistentOption`].
pub fn resolve(options: &QuantizationOptions) -> Result<ResolvedConfig> {
    let enabled = options.enabled.unwrap_or(false);
    let compute_type = options.compute_type.unwrap_or_default();
    let quant_type = options.quant_type.unwrap_or_default();
    let use_double_quant = options.use_double_quant.unwrap_or(false);

    if !enabled {
        let defaults = ResolvedConfig::default();
        let conflicting = [
            (OptionField::ComputeType, compute_type != defaults.compute_type()),
            (OptionField::QuantType, quant_type != defaults.quant_type()),
            (OptionField::UseDoubleQuant, use_double_quant != defaults.use_double_quant()),
        ]
        .into_iter()
        .find_map(|(field, differs)| differs.then_some(field));

        if let Some(field) = conflicting {
            return Err(Error::InconsistentOption {
                field: field.name().to_string(),
                reason: "set to a non-default value while 4-bit loading is disabled".to_string(),
            });
        }
    }

    let config = ResolvedConfig::new(enabled, compute_type, quant_type, use_double_quant);
    debug!("Resolved quantization config: {}", describe(&config));
    Ok(config)
}

pub fn resolve_map(map: &Map<String, Value>) -> Result<ResolvedConfig> {
    resolve(&QuantizationOptions::from_map(map)?)
}

pub fn resolve_value(value: &Value) -> Result<ResolvedConfig> {
    resolve(&QuantizationOptions::from_value(value)?)
}

/// One line, fields in a fixed order.
pub fn describe(config: &ResolvedConfig) -> String {
    format!(
        "enabled={} compute_type={} quant_type={} use_double_quant={}",
        config.enabled(),
        config.compute_type(),
        config.quant_type(),
        config.use_double_quant()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quantized::QuantType;
    use crate::utils::d_type::ComputeType;
    use serde_json::json;

    #[test]
    fn test_empty_resolves_to_defaults() {
        let config = resolve_value(&json!({})).unwrap();
        assert!(!config.enabled());
        assert_eq!(config.compute_type(), ComputeType::Float32);
        assert_eq!(config.quant_type(), QuantType::Fp4);
        assert!(!config.use_double_quant());
        assert_eq!(config, ResolvedConfig::default());
    }

    #[test]
    fn test_enabled_only() {
        let config = resolve_value(&json!({"enabled": true})).unwrap();
        assert!(config.enabled());
        assert_eq!(config.compute_type(), ComputeType::Float32);
        assert_eq!(config.quant_type(), QuantType::Fp4);
        assert!(!config.use_double_quant());
    }

    #[test]
    fn test_unknown_quant_type() {
        let err = resolve_value(&json!({"quantType": "nf5"})).unwrap_err();
        assert!(matches!(err, Error::InvalidOption { .. }));
    }

    #[test]
    fn test_double_quant_while_disabled() {
        let err = resolve_value(&json!({"enabled": false, "useDoubleQuant": true})).unwrap_err();
        assert!(matches!(err, Error::InconsistentOption { ref field, .. } if field == "use_double_quant"));
    }

    #[test]
    fn test_non_default_fields_without_enabled() {
        let err = resolve(&QuantizationOptions::new().with_quant_type(QuantType::Nf4)).unwrap_err();
        assert!(matches!(err, Error::InconsistentOption { ref field, .. } if field == "quant_type"));

        let err = resolve(&QuantizationOptions::new().with_compute_type(ComputeType::Float16)).unwrap_err();
        assert!(matches!(err, Error::InconsistentOption { ref field, .. } if field == "compute_type"));
    }

    #[test]
    fn test_defaults_while_disabled_are_accepted() {
        let config = resolve_value(&json!({
            "enabled": false,
            "compute_type": "float32",
            "quant_type": "fp4",
            "use_double_quant": false
        }))
        .unwrap();
        assert_eq!(config, ResolvedConfig::default());
    }

    #[test]
    fn test_invalid_wins_over_inconsistent() {
        let err = resolve_value(&json!({"enabled": false, "quant_type": "int4"})).unwrap_err();
        assert!(matches!(err, Error::InvalidOption { .. }));
    }

    #[test]
    fn test_all_fields_kept_unchanged() {
        let config = resolve_value(&json!({
            "enabled": true,
            "computeType": "bfloat16",
            "quantType": "nf4",
            "useDoubleQuant": true
        }))
        .unwrap();
        assert!(config.enabled());
        assert_eq!(config.compute_type(), ComputeType::Bfloat16);
        assert_eq!(config.quant_type(), QuantType::Nf4);
        assert!(config.use_double_quant());
    }

    #[test]
    fn test_every_enabled_combination_resolves_deterministically() {
        for compute_type in ComputeType::ALL {
            for quant_type in QuantType::ALL {
                for use_double_quant in [false, true] {
                    let options = QuantizationOptions::new()
                        .with_enabled(true)
                        .with_compute_type(compute_type)
                        .with_quant_type(quant_type)
                        .with_double_quant(use_double_quant);
                    let first = describe(&resolve(&options).unwrap());
                    let second = describe(&resolve(&options).unwrap());
                    assert_eq!(first, second);
                }
            }
        }
    }

    #[test]
    fn test_resolve_is_idempotent() {
        let inputs = [
            json!({}),
            json!({"enabled": true}),
            json!({"load_in_4bit": true, "bnb_4bit_quant_type": "nf4"}),
            json!({"enabled": true, "compute_type": "bf16", "use_double_quant": true}),
        ];
        for input in inputs {
            let config = resolve_value(&input).unwrap();
            assert_eq!(resolve(&config.to_options()).unwrap(), config);
            assert_eq!(resolve_value(&config.to_value()).unwrap(), config);
            assert_eq!(resolve_value(&config.to_library_kwargs()).unwrap(), config);
        }
    }

    #[test]
    fn test_describe_format() {
        let config = resolve_value(&json!({"enabled": true, "quant_type": "nf4", "compute_type": "bfloat16"})).unwrap();
        assert_eq!(
            describe(&config),
            "enabled=true compute_type=bfloat16 quant_type=nf4 use_double_quant=false"
        );
        assert_eq!(
            describe(&ResolvedConfig::default()),
            "enabled=false compute_type=float32 quant_type=fp4 use_double_quant=false"
        );
    }

    #[test]
    fn test_resolve_from_threads() {
        let handles: Vec<_> = (0..4)
            .map(|_| std::thread::spawn(|| resolve_value(&json!({"enabled": true, "quant_type": "nf4"})).unwrap()))
            .collect();
        let configs: Vec<ResolvedConfig> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert!(configs.windows(2).all(|pair| pair[0] == pair[1]));
    }
}
