use crate::constants::{DEFAULT_CONTEXT_ROOT, DEFAULT_PAGE_TITLE, DEFAULT_SCHEME, DEFAULT_TEMPLATE};
use serde::{Deserialize, Serialize, Serializer};
use std::marker::PhantomData;
use std::ops::Deref;
use std::sync::Arc;

/// Settings of the Swagger UI bundle as they appear in the configuration document.
///
/// Every absent field takes its documented default. Unknown keys are ignored.
/// Nothing is validated here: `resource_package` is checked by the component that consumes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BundleConfigInner {
    /// Comma separated list of the packages holding the annotated resources.
    #[serde(alias = "resource_package")]
    pub resource_package: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(alias = "terms_of_service", skip_serializing_if = "Option::is_none")]
    pub terms_of_service: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<ContactInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license: Option<LicenseInfo>,
    /// Mount path override for applications that set their root path programmatically,
    /// after the bundle had a chance to read it.
    #[serde(alias = "uri_prefix", skip_serializing_if = "Option::is_none")]
    pub uri_prefix: Option<String>,
    #[serde(alias = "view_config", alias = "swaggerViewConfiguration")]
    pub view_config: ViewConfig,
    #[serde(alias = "pretty_print")]
    pub pretty_print: bool,
    #[serde(alias = "context_root")]
    pub context_root: String,
    pub schemes: Vec<String>,
    pub enabled: bool,
    #[serde(alias = "include_ui_resource", alias = "includeSwaggerResource")]
    pub include_ui_resource: bool,
}

/// Immutable, cheaply clonable bundle configuration.
///
/// Built once at startup and shared read-only afterwards.
#[derive(Default, Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "BundleConfigInner")]
pub struct BundleConfig {
    inner: Arc<BundleConfigInner>,
}

impl BundleConfig {
    /// Starts a builder. `build()` becomes available once a resource package is set.
    #[must_use]
    pub fn builder() -> BundleConfigBuilder {
        BundleConfigBuilder { config: BundleConfigInner::default(), package: PhantomData }
    }

    /// Root path used for view resolution: `uri_prefix` when set, `context_root` otherwise.
    #[must_use]
    pub fn effective_context_root(&self) -> &str {
        self.inner.uri_prefix.as_deref().unwrap_or(&self.inner.context_root)
    }
}

impl Deref for BundleConfig {
    type Target = BundleConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl From<BundleConfigInner> for BundleConfig {
    fn from(inner: BundleConfigInner) -> Self {
        Self { inner: Arc::new(inner) }
    }
}

impl Serialize for BundleConfig {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.inner.serialize(serializer)
    }
}

/// Parameters needed to render the Swagger UI page from its template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ViewConfig {
    /// Browser title. An explicit `null` in the document clears it.
    #[serde(alias = "page_title")]
    pub page_title: Option<String>,
    #[serde(alias = "template_url")]
    pub template_url: String,
    /// Location of the OpenAPI validator; `None` disables validation in the UI.
    #[serde(alias = "validator_url", skip_serializing_if = "Option::is_none")]
    pub validator_url: Option<String>,
}

/// Contact metadata, passed through to the OpenAPI engine untouched.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// License metadata, passed through to the OpenAPI engine untouched.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LicenseInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,
}

// --- Default ---

impl Default for BundleConfigInner {
    fn default() -> Self {
        Self {
            resource_package: String::new(),
            title: None,
            version: None,
            description: None,
            terms_of_service: None,
            contact: None,
            license: None,
            uri_prefix: None,
            view_config: ViewConfig::default(),
            pretty_print: true,
            context_root: DEFAULT_CONTEXT_ROOT.to_owned(),
            schemes: vec![DEFAULT_SCHEME.to_owned()],
            enabled: true,
            include_ui_resource: true,
        }
    }
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            page_title: Some(DEFAULT_PAGE_TITLE.to_owned()),
            template_url: DEFAULT_TEMPLATE.to_owned(),
            validator_url: None,
        }
    }
}

// --- Builder ---

#[derive(Debug)]
pub struct NoPackage;
#[derive(Debug)]
pub struct WithPackage;

mod private {
    pub trait Sealed {}
}
impl private::Sealed for NoPackage {}
impl private::Sealed for WithPackage {}

/// Builder for [`BundleConfig`]; unset fields keep their documented defaults.
#[derive(Debug)]
#[must_use = "builders do nothing unless you call .build()"]
pub struct BundleConfigBuilder<P: private::Sealed = NoPackage> {
    config: BundleConfigInner,
    package: PhantomData<P>,
}

impl BundleConfigBuilder<NoPackage> {
    /// Sets the comma separated resource package list.
    pub fn resource_package(
        mut self,
        package: impl Into<String>,
    ) -> BundleConfigBuilder<WithPackage> {
        self.config.resource_package = package.into();
        BundleConfigBuilder { config: self.config, package: PhantomData }
    }
}

impl BundleConfigBuilder<WithPackage> {
    pub fn build(self) -> BundleConfig {
        BundleConfig::from(self.config)
    }
}

impl<P: private::Sealed> BundleConfigBuilder<P> {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.config.title = Some(title.into());
        self
    }

    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.config.version = Some(version.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.config.description = Some(description.into());
        self
    }

    pub fn terms_of_service(mut self, terms: impl Into<String>) -> Self {
        self.config.terms_of_service = Some(terms.into());
        self
    }

    pub fn contact(mut self, contact: ContactInfo) -> Self {
        self.config.contact = Some(contact);
        self
    }

    pub fn license(mut self, license: LicenseInfo) -> Self {
        self.config.license = Some(license);
        self
    }

    pub fn uri_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.config.uri_prefix = Some(prefix.into());
        self
    }

    pub fn view_config(mut self, view: ViewConfig) -> Self {
        self.config.view_config = view;
        self
    }

    pub const fn pretty_print(mut self, enabled: bool) -> Self {
        self.config.pretty_print = enabled;
        self
    }

    pub fn context_root(mut self, root: impl Into<String>) -> Self {
        self.config.context_root = root.into();
        self
    }

    pub fn schemes<I, S>(mut self, schemes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.schemes = schemes.into_iter().map(Into::into).collect();
        self
    }

    pub const fn enabled(mut self, enabled: bool) -> Self {
        self.config.enabled = enabled;
        self
    }

    pub const fn include_ui_resource(mut self, include: bool) -> Self {
        self.config.include_ui_resource = include;
        self
    }
}
