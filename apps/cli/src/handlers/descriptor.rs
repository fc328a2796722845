use super::{read_config, to_json};
use anyhow::{Context, Result};
use std::path::Path;
use swb::prelude::SpecDescriptorExt;

/// Builds the OpenAPI engine descriptor from the configuration.
///
/// # Errors
/// Returns an error if the configuration cannot be loaded or names no resource package.
pub fn print_descriptor(config: Option<&Path>) -> Result<String> {
    let descriptor = read_config(config)?
        .spec_descriptor()
        .context("Invalid bundle configuration")?;

    to_json(&descriptor)
}
