use super::{read_config, to_json};
use anyhow::Result;
use std::path::Path;
use swb::prelude::{MountContext, SwaggerView};

/// Resolves the view model for a UI page registered under `url_pattern`.
///
/// `context_root` replaces the configured root (and `uri_prefix`) when given; the document URL
/// is `openapi_path` under the effective root.
///
/// # Errors
/// Returns an error if the configuration cannot be loaded.
pub fn print_view(
    config: Option<&Path>,
    url_pattern: &str,
    context_root: Option<&str>,
    openapi_path: &str,
) -> Result<String> {
    let cfg = read_config(config)?;
    let mount = context_root.map_or_else(
        || MountContext::from_config(&cfg, url_pattern),
        |root| MountContext::new(root, url_pattern),
    );

    let view = SwaggerView::for_mount(&mount, &cfg.view_config)
        .with_openapi_url(mount.document_url(openapi_path));

    to_json(&view)
}
