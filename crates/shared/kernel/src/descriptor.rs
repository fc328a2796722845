//! Translation of the flat bundle settings into the descriptor the OpenAPI engine is configured with.

use serde::Serialize;
use std::borrow::Cow;
use std::collections::BTreeSet;
use swb_domain::config::{BundleConfig, ContactInfo, LicenseInfo};
use swb_domain::constants::RESOURCE_PACKAGE_SEPARATOR;
use tracing::info;

/// Fatal startup error: the bundle cannot know which resources to document.
#[swb_derive::swb_error]
pub enum ConfigurationError {
    #[error(
        "Resource package must be specified for the OpenAPI engine to detect annotated resources{}",
        format_context(.context)
    )]
    MissingResourcePackage { context: Option<Cow<'static, str>> },
}

/// Document metadata, copied as-is from the configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpecInfo {
    pub title: Option<String>,
    pub version: Option<String>,
    pub description: Option<String>,
    pub contact: Option<ContactInfo>,
    pub license: Option<LicenseInfo>,
    pub terms_of_service: Option<String>,
}

/// Everything the OpenAPI engine needs to produce the API document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpecDescriptor {
    pub info: SpecInfo,
    pub pretty_print: bool,
    /// Resources are scanned on demand, never all eagerly.
    pub read_all_resources: bool,
    pub resource_packages: BTreeSet<String>,
}

impl SpecDescriptor {
    /// Builds the descriptor for `config`.
    ///
    /// `resource_package` is split on commas; each name is trimmed and empty names are dropped,
    /// so `"a.b, c.d,,a.b"` yields `{"a.b", "c.d"}`. See [`parse_resource_packages`].
    ///
    /// # Errors
    /// [`ConfigurationError::MissingResourcePackage`] when `resource_package` names no package
    /// (empty, blank, or only separators). Startup must abort on this error.
    pub fn from_config(config: &BundleConfig) -> Result<Self, ConfigurationError> {
        let resource_packages = parse_resource_packages(&config.resource_package);
        if resource_packages.is_empty() {
            return Err(ConfigurationError::MissingResourcePackage { context: None });
        }

        info!(
            packages = resource_packages.len(),
            pretty_print = config.pretty_print,
            "Spec descriptor built"
        );

        Ok(Self {
            info: SpecInfo {
                title: config.title.clone(),
                version: config.version.clone(),
                description: config.description.clone(),
                contact: config.contact.clone(),
                license: config.license.clone(),
                terms_of_service: config.terms_of_service.clone(),
            },
            pretty_print: config.pretty_print,
            read_all_resources: false,
            resource_packages,
        })
    }
}

/// Splits a comma separated package list into a set of trimmed, non-empty names.
#[must_use]
pub fn parse_resource_packages(raw: &str) -> BTreeSet<String> {
    raw.split(RESOURCE_PACKAGE_SEPARATOR)
        .map(str::trim)
        .filter(|package| !package.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Descriptor shortcut on the configuration itself.
pub trait SpecDescriptorExt {
    /// # Errors
    /// See [`SpecDescriptor::from_config`].
    fn spec_descriptor(&self) -> Result<SpecDescriptor, ConfigurationError>;
}

impl SpecDescriptorExt for BundleConfig {
    fn spec_descriptor(&self) -> Result<SpecDescriptor, ConfigurationError> {
        SpecDescriptor::from_config(self)
    }
}
