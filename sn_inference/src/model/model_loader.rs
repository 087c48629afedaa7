use crate::config::resolved_config::ResolvedConfig;
use crate::error::{Error, Result};
use std::fmt;
use std::path::{Path, PathBuf};

/// Where the loader places weights. Always passed in, never picked up from
/// the process environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DeviceMap {
    /// The loader plans placement across every visible accelerator.
    #[default]
    Auto,
    Device(String),
}

impl fmt::Display for DeviceMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeviceMap::Auto => f.write_str("auto"),
            DeviceMap::Device(device) => f.write_str(device),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LoadRequest {
    model_id: String,
    quantization: ResolvedConfig,
    device_map: DeviceMap,
    cache_dir: Option<PathBuf>,
}

impl LoadRequest {
    pub fn new(model_id: impl Into<String>, quantization: ResolvedConfig) -> Result<Self> {
        let model_id = model_id.into();
        if model_id.trim().is_empty() {
            return Err(Error::InvalidRequest("model id is empty".to_string()));
        }
        Ok(LoadRequest {
            model_id,
            quantization,
            device_map: DeviceMap::default(),
            cache_dir: None,
        })
    }

    pub fn with_device_map(mut self, device_map: DeviceMap) -> Self {
        self.device_map = device_map;
        self
    }

    pub fn with_cache_dir(mut self, cache_dir: impl Into<PathBuf>) -> Self {
        self.cache_dir = Some(cache_dir.into());
        self
    }

    pub fn model_id(&self) -> &str {
        &self.model_id
    }

    pub fn quantization(&self) -> &ResolvedConfig {
        &self.quantization
    }

    pub fn device_map(&self) -> &DeviceMap {
        &self.device_map
    }

    pub fn cache_dir(&self) -> Option<&Path> {
        self.cache_dir.as_deref()
    }
}

/// Opens pretrained weights and materializes them, quantized when
/// `request.quantization().scheme()` is `Some`.
pub trait ModelLoader {
    type Model;

    fn load(&self, request: &LoadRequest) -> Result<Self::Model>;
}
