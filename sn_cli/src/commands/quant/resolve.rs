use crate::cli::OptionArgs;
use crate::error::Result;
use sn_inference::{describe, resolve_map};
use tracing::info;

pub fn handle(options: &OptionArgs, json: bool, kwargs: bool) -> Result<()> {
    let map = options.to_map()?;
    let config = resolve_map(&map)?;
    info!("Quantization config resolved from {} option(s)", map.len());

    if json {
        println!("{}", serde_json::to_string_pretty(&config.to_value())?);
    } else if kwargs {
        println!("{}", serde_json::to_string_pretty(&config.to_library_kwargs())?);
    } else {
        println!("{}", describe(&config));
    }
    Ok(())
}
