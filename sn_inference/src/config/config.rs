use crate::error::Result;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use sn_core::error::ErrorCore;
use std::fs;
use std::path::Path;
use tracing::debug;

pub fn from_file<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let data = fs::read_to_string(path).map_err(|source| ErrorCore::ReadFile {
        path: path.display().to_string(),
        source,
    })?;
    let config: T = serde_json::from_str(&data).map_err(ErrorCore::from)?;
    Ok(config)
}

/// Reads a JSON object of quantization options. Keys are left untouched;
/// validation happens when the map is resolved.
pub fn load_options(path: &Path) -> Result<Map<String, Value>> {
    match from_file::<Value>(path)? {
        Value::Object(map) => {
            debug!("Read {} quantization option(s) from {}", map.len(), path.display());
            Ok(map)
        }
        _ => Err(ErrorCore::NotAnObject(path.display().to_string()).into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::config_resolver::resolve_map;
    use crate::error::Error;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_temp(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_and_resolve() {
        let file = write_temp(r#"{"load_in_4bit": true, "bnb_4bit_quant_type": "nf4"}"#);
        let map = load_options(file.path()).unwrap();
        let config = resolve_map(&map).unwrap();
        assert!(config.enabled());
        assert_eq!(config.quant_type().as_str(), "nf4");
    }

    #[test]
    fn test_missing_file() {
        let err = load_options(Path::new("/nonexistent/sanaga/options.json")).unwrap_err();
        assert!(matches!(err, Error::Core(ErrorCore::ReadFile { .. })));
    }

    #[test]
    fn test_not_an_object() {
        let file = write_temp("[true]");
        let err = load_options(file.path()).unwrap_err();
        assert!(matches!(err, Error::Core(ErrorCore::NotAnObject(_))));
    }
}
