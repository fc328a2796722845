pub mod descriptor;
pub mod view;

use anyhow::{Context, Result};
use serde::Serialize;
use std::path::Path;
use swb::kernel::config::load_config;
use swb::prelude::BundleConfig;

fn read_config(path: Option<&Path>) -> Result<BundleConfig> {
    load_config(path).context("Failed to load the bundle configuration")
}

fn to_json<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).context("Failed to serialize output")
}
