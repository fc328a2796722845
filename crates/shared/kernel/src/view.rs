//! Where the Swagger UI page and its static assets are reachable.
//!
//! The page template receives two paths: the directory its JS/CSS is served from and the path
//! the page itself lives at. Both depend on the application root and on the pattern the UI is
//! registered under:
//!
//! | context root | url pattern | assets path                | page path   |
//! |--------------|-------------|----------------------------|-------------|
//! | `/`          | `/`         | `/swagger-static`          | (empty)     |
//! | `/`          | `/docs`     | `/docs/swagger-static`     | `/docs`     |
//! | `/app`       | `/`         | `/app/swagger-static`      | `/app`      |
//! | `/app`       | `/docs`     | `/app/swagger-static`      | `/app/docs` |
//!
//! The API document does not follow the pattern: it is served from the context root, and the
//! view model carries its URL as `openapiUrl`.

use serde::Serialize;
use swb_domain::config::{BundleConfig, ViewConfig};
use swb_domain::constants::{DEFAULT_OPENAPI_PATH, SWAGGER_URI_PATH};
use tracing::debug;

const ROOT: &str = "/";

/// Resolved locations of the UI page and its assets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewPaths {
    pub assets_path: String,
    pub page_path: String,
}

/// Computes the asset and page paths for a mount.
///
/// `context_root` is taken verbatim unless it is exactly `/`, which counts as no prefix.
/// No trailing-slash cleanup happens here; callers supply clean roots.
#[must_use]
pub fn resolve_paths(context_root: &str, url_pattern: &str) -> ViewPaths {
    let prefix = root_prefix(context_root);
    let at_root = url_pattern == ROOT;

    // Assets sit on the application root and only follow the UI when there is no root prefix.
    let assets_path = match (prefix.is_empty(), at_root) {
        (false, _) => format!("{prefix}{SWAGGER_URI_PATH}"),
        (true, true) => SWAGGER_URI_PATH.to_owned(),
        (true, false) => format!("{url_pattern}{SWAGGER_URI_PATH}"),
    };
    let page_path = if at_root { prefix.to_owned() } else { format!("{prefix}{url_pattern}") };

    ViewPaths { assets_path, page_path }
}

fn root_prefix(context_root: &str) -> &str {
    if context_root == ROOT { "" } else { context_root }
}

/// Application root plus the pattern the UI resource is registered under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MountContext {
    pub context_root: String,
    pub url_pattern: String,
}

impl MountContext {
    pub fn new(context_root: impl Into<String>, url_pattern: impl Into<String>) -> Self {
        Self { context_root: context_root.into(), url_pattern: url_pattern.into() }
    }

    /// Mount for `url_pattern` under the configuration's effective root (`uri_prefix` wins).
    pub fn from_config(config: &BundleConfig, url_pattern: impl Into<String>) -> Self {
        Self::new(config.effective_context_root(), url_pattern)
    }

    /// Whether the root contributes a prefix to resolved paths.
    #[must_use]
    pub fn has_prefix(&self) -> bool {
        self.context_root != ROOT
    }

    #[must_use]
    pub fn resolve(&self) -> ViewPaths {
        resolve_paths(&self.context_root, &self.url_pattern)
    }

    /// Absolute URL of the API document served at `openapi_path` under the context root.
    #[must_use]
    pub fn document_url(&self, openapi_path: &str) -> String {
        format!("{}{openapi_path}", root_prefix(&self.context_root))
    }
}

/// View model handed to the template renderer for one UI page request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SwaggerView {
    #[serde(flatten)]
    paths: ViewPaths,
    title: Option<String>,
    validator_url: Option<String>,
    template_url: String,
    openapi_url: String,
}

impl SwaggerView {
    /// The document URL defaults to `/openapi.json` under `context_root`.
    #[must_use]
    pub fn new(context_root: &str, url_pattern: &str, view: &ViewConfig) -> Self {
        let paths = resolve_paths(context_root, url_pattern);
        debug!(
            context_root,
            url_pattern,
            assets_path = %paths.assets_path,
            page_path = %paths.page_path,
            "Resolved Swagger UI paths"
        );

        Self {
            paths,
            title: view.page_title.clone(),
            validator_url: view.validator_url.clone(),
            template_url: view.template_url.clone(),
            openapi_url: format!("{}{DEFAULT_OPENAPI_PATH}", root_prefix(context_root)),
        }
    }

    /// Points the page at an API document served somewhere else.
    #[must_use]
    pub fn with_openapi_url(mut self, url: impl Into<String>) -> Self {
        self.openapi_url = url.into();
        self
    }

    #[must_use]
    pub fn for_mount(mount: &MountContext, view: &ViewConfig) -> Self {
        Self::new(&mount.context_root, &mount.url_pattern, view)
    }

    /// Base URL of the UI's JS/CSS files.
    #[must_use]
    pub fn assets_path(&self) -> &str {
        &self.paths.assets_path
    }

    /// Path of the page itself; may be empty when the UI sits on the bare root.
    #[must_use]
    pub fn page_path(&self) -> &str {
        &self.paths.page_path
    }

    /// Browser title.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Validator location, `None` to disable validation.
    #[must_use]
    pub fn validator_url(&self) -> Option<&str> {
        self.validator_url.as_deref()
    }

    #[must_use]
    pub fn template_url(&self) -> &str {
        &self.template_url
    }

    /// URL the UI loads the API document from.
    #[must_use]
    pub fn openapi_url(&self) -> &str {
        &self.openapi_url
    }

    #[must_use]
    pub const fn paths(&self) -> &ViewPaths {
        &self.paths
    }
}
