pub use crate::descriptor::{ConfigurationError, SpecDescriptor, SpecDescriptorExt, SpecInfo};
#[cfg(feature = "server")]
pub use crate::server::{BundleError, RenderError, RouteOptions, ViewRenderer, swagger_routes};
pub use crate::view::{MountContext, SwaggerView, ViewPaths, resolve_paths};
pub use swb_domain::config::{BundleConfig, ContactInfo, LicenseInfo, ViewConfig};
