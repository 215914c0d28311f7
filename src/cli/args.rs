//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::net::IpAddr;
use std::path::PathBuf;

/// Logopack CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: logopack.toml)
    #[arg(short = 'C', long, default_value = "logopack.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Enable verbose output for debugging
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Start the package-generation server
    #[command(visible_alias = "s")]
    Serve {
        /// Network interface to bind (e.g., 127.0.0.1, 0.0.0.0)
        #[arg(short, long)]
        interface: Option<IpAddr>,

        /// Port number to listen on
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Build a logo package from local files
    #[command(visible_alias = "p")]
    Pack {
        #[command(flatten)]
        args: PackArgs,
    },
}

/// Pack command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct PackArgs {
    /// Vertical lockup SVG
    #[arg(long, value_hint = clap::ValueHint::FilePath)]
    pub vertical: Option<PathBuf>,

    /// Horizontal lockup SVG
    #[arg(long, value_hint = clap::ValueHint::FilePath)]
    pub horizontal: Option<PathBuf>,

    /// Logomark SVG (source of the favicon family)
    #[arg(long, value_hint = clap::ValueHint::FilePath)]
    pub logomark: Option<PathBuf>,

    /// Wordmark SVG
    #[arg(long, value_hint = clap::ValueHint::FilePath)]
    pub wordmark: Option<PathBuf>,

    /// Package name used in filenames
    #[arg(short, long, default_value = "logo")]
    pub name: String,

    /// Comma-separated output tokens (formats, color modes, extras)
    #[arg(short, long, default_value = "svg,png,jpg,color,black,white")]
    pub extensions: String,

    /// Background color for flattened formats (hex)
    #[arg(short, long)]
    pub background: Option<String>,

    /// Output zip path (default: <name>-logo-package.zip)
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,
}
