use crate::cli::OptionArgs;
use crate::error::Result;
use sn_inference::resolve_map;
use sn_inference::utils::footprint::{bits_per_param, estimate_weight_bytes, format_bytes};

pub fn handle(options: &OptionArgs, params: u64) -> Result<()> {
    let config = resolve_map(&options.to_map()?)?;
    let bytes = estimate_weight_bytes(&config, params);
    println!("{}", config);
    println!(
        "{} parameters at {} bits each: {} ({} bytes)",
        params,
        bits_per_param(&config),
        format_bytes(bytes),
        bytes
    );
    Ok(())
}
