use crate::config::resolved_config::ResolvedConfig;

const HALF_PRECISION_BITS: f64 = 16.0;
const QUANT_BITS: f64 = 4.0;
const BLOCK_SIZE: f64 = 64.0;
const CONSTANT_BLOCK_SIZE: f64 = 256.0;
const GIB: f64 = (1u64 << 30) as f64;

/// Storage spent on absmax constants, per weight. One fp32 constant per block
/// of 64 weights, or with double quantization an 8-bit constant per block plus
/// one fp32 constant per 256 of those.
pub fn constant_bits_per_param(use_double_quant: bool) -> f64 {
    if use_double_quant {
        8.0 / BLOCK_SIZE + 32.0 / (BLOCK_SIZE * CONSTANT_BLOCK_SIZE)
    } else {
        32.0 / BLOCK_SIZE
    }
}

pub fn bits_per_param(config: &ResolvedConfig) -> f64 {
    match config.scheme() {
        Some(scheme) => QUANT_BITS + constant_bits_per_param(scheme.use_double_quant),
        None => HALF_PRECISION_BITS,
    }
}

pub fn estimate_weight_bytes(config: &ResolvedConfig, num_params: u64) -> u64 {
    (num_params as f64 * bits_per_param(config) / 8.0).ceil() as u64
}

pub fn format_bytes(bytes: u64) -> String {
    format!("{:.2} GiB", bytes as f64 / GIB)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::config_resolver::resolve_value;
    use serde_json::json;

    const NEOX_20B: u64 = 20_000_000_000;

    #[test]
    fn test_unquantized_is_half_precision() {
        let config = ResolvedConfig::default();
        assert_eq!(estimate_weight_bytes(&config, NEOX_20B), 40_000_000_000);
        assert_eq!(format_bytes(40_000_000_000), "37.25 GiB");
    }

    #[test]
    fn test_single_quantization() {
        let config = resolve_value(&json!({"enabled": true})).unwrap();
        assert_eq!(bits_per_param(&config), 4.5);
        assert_eq!(estimate_weight_bytes(&config, NEOX_20B), 11_250_000_000);
    }

    #[test]
    fn test_double_quantization_saves_memory() {
        let single = resolve_value(&json!({"enabled": true, "quant_type": "nf4"})).unwrap();
        let double = resolve_value(&json!({"enabled": true, "quant_type": "nf4", "use_double_quant": true})).unwrap();
        assert_eq!(constant_bits_per_param(true), 0.126953125);
        assert_eq!(estimate_weight_bytes(&double, NEOX_20B), 10_317_382_813);
        assert!(estimate_weight_bytes(&double, NEOX_20B) < estimate_weight_bytes(&single, NEOX_20B));
    }

    #[test]
    fn test_zero_params() {
        assert_eq!(estimate_weight_bytes(&ResolvedConfig::default(), 0), 0);
        assert_eq!(format_bytes(0), "0.00 GiB");
    }
}
