//! Kernel of the Swagger UI bundle.
//!
//! * [`view`]: where the UI page and its static assets live for a given mount.
//! * [`descriptor`]: the OpenAPI engine descriptor derived from the bundle configuration.
//! * [`config`]: layered loading of the configuration document (file + `SWB__` environment).
//! * `openapi` feature: applies a descriptor to a `utoipa` document.
//! * `server` feature: registers the bundle's routes on an `axum` router.
//!
//! ```rust
//! use swb_domain::config::{BundleConfig, ViewConfig};
//! use swb_kernel::descriptor::SpecDescriptor;
//! use swb_kernel::view::SwaggerView;
//!
//! let cfg = BundleConfig::builder().resource_package("com.example.api").context_root("/app").build();
//! let descriptor = SpecDescriptor::from_config(&cfg).unwrap();
//! assert!(descriptor.resource_packages.contains("com.example.api"));
//!
//! let view = SwaggerView::new(cfg.effective_context_root(), "/docs", &cfg.view_config);
//! assert_eq!(view.assets_path(), "/app/swagger-static");
//! assert_eq!(view.page_path(), "/app/docs");
//! ```

pub mod config;
pub mod descriptor;
#[cfg(feature = "openapi")]
mod openapi;
pub mod prelude;
#[cfg(feature = "server")]
pub mod server;
pub mod view;

pub use swb_domain as domain;
