//! Logopack - turn uploaded vector logos into a branded asset package.

#![allow(dead_code)]

mod cli;
mod config;
mod embed;
mod error;
mod image;
mod logger;
mod package;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::AppConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    let mut config = AppConfig::load(&cli.config)?;

    match &cli.command {
        Commands::Serve { interface, port } => {
            if let Some(interface) = interface {
                config.serve.interface = *interface;
            }
            if let Some(port) = port {
                config.serve.port = *port;
            }
            cli::serve::run(&config)
        }
        Commands::Pack { args } => cli::pack::run(args, &config),
    }
}
