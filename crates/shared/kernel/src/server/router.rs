use super::error::{BundleError, BundleErrorExt};
use super::render::ViewRenderer;
use crate::descriptor::SpecDescriptor;
use crate::view::{MountContext, SwaggerView};
use axum::Router;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use std::path::PathBuf;
use std::sync::Arc;
use swb_domain::config::{BundleConfig, ViewConfig};
use swb_domain::constants::{DEFAULT_OPENAPI_PATH, SWAGGER_URI_PATH};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{error, info};
use utoipa::openapi::OpenApi;

const DEFAULT_ASSETS_DIR: &str = "swagger-static";

/// Where the bundle registers itself inside the host router.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteOptions {
    url_pattern: String,
    openapi_path: String,
    assets_dir: PathBuf,
}

impl Default for RouteOptions {
    fn default() -> Self {
        Self {
            url_pattern: "/".to_owned(),
            openapi_path: DEFAULT_OPENAPI_PATH.to_owned(),
            assets_dir: PathBuf::from(DEFAULT_ASSETS_DIR),
        }
    }
}

impl RouteOptions {
    /// Pattern the UI page is registered under, relative to the context root.
    #[must_use]
    pub fn url_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.url_pattern = pattern.into();
        self
    }

    /// Path serving the API document, relative to the context root.
    #[must_use]
    pub fn openapi_path(mut self, path: impl Into<String>) -> Self {
        self.openapi_path = path.into();
        self
    }

    /// Directory holding the Swagger UI distribution (JS, CSS, images).
    #[must_use]
    pub fn assets_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.assets_dir = dir.into();
        self
    }
}

struct UiState<R> {
    mount: MountContext,
    view_config: ViewConfig,
    openapi_url: String,
    renderer: R,
}

/// Builds the bundle's routes for the host to nest under its context root.
///
/// * Nothing is registered when the bundle is disabled.
/// * The API document is the engine's `api` with the configured metadata applied.
/// * The UI page is registered only when `include_ui_resource` is set; its view model is
///   resolved on every request and rendered by `renderer`. The model's `openapi_url` points at
///   the document route under the context root.
/// * Static assets are served from `assets_dir` at the resolved assets path.
///
/// # Errors
/// * [`BundleError::Configuration`] when no resource package is configured. Abort startup.
/// * [`BundleError::Serialize`] when the API document cannot be written as JSON.
pub fn swagger_routes<R: ViewRenderer>(
    config: &BundleConfig,
    api: OpenApi,
    options: RouteOptions,
    renderer: R,
) -> Result<Router, BundleError> {
    if !config.enabled {
        info!("Swagger bundle disabled, no routes registered");
        return Ok(Router::new());
    }

    let descriptor = SpecDescriptor::from_config(config).context("Swagger bundle startup")?;
    let document = descriptor
        .render(&descriptor.apply_to(api))
        .context("Failed to serialize the API document")?;
    let document = Bytes::from(document);

    let mount = MountContext::from_config(config, options.url_pattern.clone());
    let paths = mount.resolve();
    // The host nests this router under the context root, so the prefix is not repeated here.
    let assets_route =
        if mount.has_prefix() { SWAGGER_URI_PATH.to_owned() } else { paths.assets_path.clone() };

    let mut router = Router::new().route(
        &options.openapi_path,
        get(move || {
            let document = document.clone();
            async move { ([(header::CONTENT_TYPE, "application/json")], document) }
        }),
    );

    if config.include_ui_resource {
        let openapi_url = mount.document_url(&options.openapi_path);
        let state = Arc::new(UiState {
            mount,
            view_config: config.view_config.clone(),
            openapi_url,
            renderer,
        });
        router = router
            .merge(Router::new().route(&options.url_pattern, get(page::<R>)).with_state(state));
    }

    router = router.nest_service(&assets_route, ServeDir::new(&options.assets_dir));

    info!(
        page_path = %paths.page_path,
        assets_path = %paths.assets_path,
        openapi_path = %options.openapi_path,
        ui = config.include_ui_resource,
        "Swagger UI routes registered"
    );

    Ok(router.layer(TraceLayer::new_for_http()))
}

async fn page<R: ViewRenderer>(State(state): State<Arc<UiState<R>>>) -> Response {
    let view = SwaggerView::for_mount(&state.mount, &state.view_config)
        .with_openapi_url(state.openapi_url.clone());

    match state.renderer.render(view.template_url(), &view) {
        Ok(html) => Html(html).into_response(),
        Err(err) => {
            error!(error = %err, template = view.template_url(), "Failed to render Swagger UI page");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        },
    }
}
