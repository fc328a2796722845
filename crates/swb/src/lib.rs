//! Facade crate for the Swagger UI bundle.
//! Re-exports the domain model and the kernel; holds no logic of its own.
//!
//! ## Usage
//! - Add `swb` with the adapters you need (`openapi`, `server`).
//! - Load a [`domain::config::BundleConfig`], then either build a descriptor or, with `server`,
//!   register the routes on the host's `axum` router.
//!
//! ```rust
//! use swb::prelude::*;
//!
//! let config = BundleConfig::builder().resource_package("com.example.api").build();
//! let view = SwaggerView::for_mount(&MountContext::from_config(&config, "/"), &config.view_config);
//! assert_eq!(view.assets_path(), "/swagger-static");
//! assert!(config.spec_descriptor().is_ok());
//! ```

pub use swb_domain as domain;
pub use swb_kernel as kernel;
pub use swb_kernel::prelude;

#[cfg(feature = "server")]
pub mod server {
    pub use swb_kernel::server::{RouteOptions, ViewRenderer, swagger_routes};
}

/// Adapters compiled into this build.
pub mod features {
    /// Build-time enabled features (by Cargo feature).
    pub const ENABLED: &[&str] = &[
        #[cfg(feature = "openapi")]
        "openapi",
        #[cfg(feature = "server")]
        "server",
    ];

    #[must_use]
    pub fn is_enabled(name: &str) -> bool {
        ENABLED.contains(&name)
    }
}
