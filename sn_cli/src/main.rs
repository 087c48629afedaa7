use crate::cli::{Cli, Commands, QuantCommands};
use crate::error::Result;
use clap::Parser;
use sn_core::logger::init_logger;
mod cli;
mod commands;
mod error;

fn main() {
    init_logger();
    if let Err(err) = try_main() {
        eprintln!("❌ Error: {}", err);
        std::process::exit(1);
    }
}

fn try_main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Quant(quant_commands) => match quant_commands {
            QuantCommands::Resolve {
                options,
                json,
                kwargs,
            } => commands::quant::resolve::handle(&options, json, kwargs)?,
            QuantCommands::Footprint { params, options } => {
                commands::quant::footprint::handle(&options, params)?
            }
        },
    }

    Ok(())
}
