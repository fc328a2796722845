/// Path segment under which the Swagger UI static assets are served.
pub const SWAGGER_URI_PATH: &str = "/swagger-static";

pub const DEFAULT_PAGE_TITLE: &str = "Swagger UI";
pub const DEFAULT_TEMPLATE: &str = "index.ftl";
pub const DEFAULT_CONTEXT_ROOT: &str = "/";
pub const DEFAULT_SCHEME: &str = "http";

/// Where the API document is served, relative to the context root.
pub const DEFAULT_OPENAPI_PATH: &str = "/openapi.json";

/// Separator used in `resourcePackage` to list several packages.
pub const RESOURCE_PACKAGE_SEPARATOR: char = ',';
