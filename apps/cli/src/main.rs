#![allow(clippy::print_stdout)]

pub mod handlers;
pub mod models;

use crate::handlers::{descriptor, view};
use crate::models::args::{AppCommands, Cli};

use anyhow::Result;
use clap::Parser;
use swb_logger::{LevelFilter, Logger};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let _logger = Logger::builder()
        .name(env!("CARGO_PKG_NAME"))
        .stderr(true)
        .ansi(false)
        .level(if cli.verbose { LevelFilter::DEBUG } else { LevelFilter::WARN })
        .init()?;

    let output = match cli.command {
        AppCommands::View { config, url_pattern, context_root, openapi_path } => {
            view::print_view(
                config.as_deref(),
                &url_pattern,
                context_root.as_deref(),
                &openapi_path,
            )?
        },
        AppCommands::Descriptor { config } => descriptor::print_descriptor(config.as_deref())?,
    };

    println!("{output}");

    Ok(())
}
