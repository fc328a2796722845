//! # CLI Argument Definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Inspects how the Swagger UI bundle reads a configuration document.
#[derive(Debug, Parser)]
#[command(name = "swb")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(arg_required_else_help = true)]
#[command(about = "Diagnostics for the Swagger UI bundle configuration")]
pub struct Cli {
    /// Log bundle events (to stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: AppCommands,
}

#[derive(Debug, Subcommand)]
pub enum AppCommands {
    /// Print the view model handed to the page template
    View {
        /// Configuration file (defaults to 'swagger.*' in the working directory)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Pattern the UI page is registered under
        #[arg(short, long, default_value = "/")]
        url_pattern: String,

        /// Application root, overriding the configured one
        #[arg(long)]
        context_root: Option<String>,

        /// Path the API document is served at, relative to the application root
        #[arg(long, default_value = "/openapi.json")]
        openapi_path: String,
    },
    /// Print the descriptor the OpenAPI engine is configured with
    Descriptor {
        /// Configuration file (defaults to 'swagger.*' in the working directory)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}
