pub mod config {
    pub mod config;
    pub mod config_resolver;
    pub mod quantization_option;
    pub mod resolved_config;
}
pub mod error;
pub mod model {
    pub mod model_loader;
}
pub mod quantized;
pub mod token {
    pub mod generation;
}
pub mod utils {
    pub mod d_type;
    pub mod footprint;
}

pub use config::config_resolver::{describe, resolve, resolve_map, resolve_value};
pub use config::quantization_option::{OptionField, QuantizationOptions};
pub use config::resolved_config::ResolvedConfig;
pub use quantized::{FourBitScheme, QuantType};
pub use utils::d_type::ComputeType;
