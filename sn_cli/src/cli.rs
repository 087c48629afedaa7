use clap::{Args, Parser, Subcommand};
use serde_json::{Map, Value};
use sn_inference::OptionField;
use sn_inference::config::config::load_options;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "sanaga", version, about = "Resolve 4-bit quantization options", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(subcommand)]
    Quant(QuantCommands),
}

#[derive(Subcommand, Debug)]
pub enum QuantCommands {
    /// Validate options and print the resolved config
    Resolve {
        #[command(flatten)]
        options: OptionArgs,
        /// Print the canonical JSON object
        #[arg(long, conflicts_with = "kwargs")]
        json: bool,
        /// Print the bitsandbytes keyword arguments
        #[arg(long)]
        kwargs: bool,
    },
    /// Estimate weight memory for a model of the given size
    Footprint {
        #[arg(long)]
        params: u64,
        #[command(flatten)]
        options: OptionArgs,
    },
}

#[derive(Args, Debug, Default)]
pub struct OptionArgs {
    /// JSON file holding an object of options
    #[arg(short, long)]
    pub file: Option<PathBuf>,
    #[arg(long)]
    pub enabled: Option<bool>,
    #[arg(long)]
    pub compute_type: Option<String>,
    #[arg(long)]
    pub quant_type: Option<String>,
    #[arg(long)]
    pub double_quant: Option<bool>,
}

impl OptionArgs {
    /// File keys first, then flags. A flag replaces every spelling of its
    /// field found in the file.
    pub fn to_map(&self) -> sn_inference::error::Result<Map<String, Value>> {
        let mut map = match &self.file {
            Some(path) => load_options(path)?,
            None => Map::new(),
        };

        if let Some(enabled) = self.enabled {
            set(&mut map, OptionField::Enabled, Value::Bool(enabled));
        }
        if let Some(compute_type) = &self.compute_type {
            set(&mut map, OptionField::ComputeType, Value::String(compute_type.clone()));
        }
        if let Some(quant_type) = &self.quant_type {
            set(&mut map, OptionField::QuantType, Value::String(quant_type.clone()));
        }
        if let Some(double_quant) = self.double_quant {
            set(&mut map, OptionField::UseDoubleQuant, Value::Bool(double_quant));
        }

        Ok(map)
    }
}

fn set(map: &mut Map<String, Value>, field: OptionField, value: Value) {
    map.retain(|key, _| OptionField::from_key(key) != Some(field));
    map.insert(field.name().to_string(), value);
}
