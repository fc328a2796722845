//! `axum` integration: registers the UI page, the API document and the static assets on a
//! router owned by the host application.

mod error;
mod render;
mod router;

pub use error::{BundleError, BundleErrorExt};
pub use render::{RenderError, RenderErrorExt, ViewRenderer};
pub use router::{RouteOptions, swagger_routes};
