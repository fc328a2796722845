//! Bridge from [`SpecDescriptor`] to the `utoipa` document model.

use crate::descriptor::{SpecDescriptor, SpecInfo};
use utoipa::openapi::{ContactBuilder, Info, InfoBuilder, LicenseBuilder, OpenApi};

impl SpecDescriptor {
    /// Replaces the document's `info` block with the configured metadata.
    ///
    /// `title` and `version` are mandatory in the document, so the engine's own values are kept
    /// when the configuration leaves them out. Optional fields are copied as they are, absent
    /// values clearing whatever the engine had.
    #[must_use]
    pub fn apply_to(&self, mut api: OpenApi) -> OpenApi {
        api.info = self.info.merge_into(api.info);
        api
    }

    /// Serializes the document, pretty-printed when the configuration asks for it.
    ///
    /// # Errors
    /// Returns the serializer error if the document cannot be written as JSON.
    pub fn render(&self, api: &OpenApi) -> Result<String, serde_json::Error> {
        if self.pretty_print { api.to_pretty_json() } else { api.to_json() }
    }
}

impl SpecInfo {
    fn merge_into(&self, current: Info) -> Info {
        let contact = self.contact.as_ref().map(|c| {
            ContactBuilder::new()
                .name(c.name.clone())
                .url(c.url.clone())
                .email(c.email.clone())
                .build()
        });
        let license = self.license.as_ref().map(|l| {
            LicenseBuilder::new()
                .name(l.name.clone().unwrap_or_default())
                .url(l.url.clone())
                .identifier(l.identifier.clone())
                .build()
        });

        InfoBuilder::new()
            .title(self.title.clone().unwrap_or(current.title))
            .version(self.version.clone().unwrap_or(current.version))
            .description(self.description.clone())
            .terms_of_service(self.terms_of_service.clone())
            .contact(contact)
            .license(license)
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use swb_domain::config::{BundleConfig, ContactInfo, LicenseInfo};
    use utoipa::openapi::OpenApiBuilder;

    fn engine_document() -> OpenApi {
        OpenApiBuilder::new()
            .info(InfoBuilder::new().title("engine-title").version("0.0.1").description(Some("x")))
            .build()
    }

    #[test]
    fn overlays_configured_metadata() {
        let config = BundleConfig::builder()
            .resource_package("com.example")
            .title("Pet Store")
            .version("1.2.0")
            .contact(ContactInfo {
                name: Some("API team".to_owned()),
                url: None,
                email: Some("api@example.com".to_owned()),
            })
            .license(LicenseInfo { name: Some("MIT".to_owned()), url: None, identifier: None })
            .build();
        let descriptor = SpecDescriptor::from_config(&config).expect("descriptor");

        let api = descriptor.apply_to(engine_document());

        assert_eq!(api.info.title, "Pet Store");
        assert_eq!(api.info.version, "1.2.0");
        assert_eq!(api.info.description, None);
        let contact = api.info.contact.expect("contact");
        assert_eq!(contact.email.as_deref(), Some("api@example.com"));
        assert_eq!(api.info.license.expect("license").name, "MIT");
    }

    #[test]
    fn keeps_engine_title_and_version_when_unset() {
        let config = BundleConfig::builder().resource_package("com.example").build();
        let descriptor = SpecDescriptor::from_config(&config).expect("descriptor");

        let api = descriptor.apply_to(engine_document());

        assert_eq!(api.info.title, "engine-title");
        assert_eq!(api.info.version, "0.0.1");
    }

    #[test]
    fn renders_per_pretty_print_flag() {
        let pretty = BundleConfig::builder().resource_package("p").build();
        let compact = BundleConfig::builder().resource_package("p").pretty_print(false).build();
        let api = engine_document();

        let pretty = SpecDescriptor::from_config(&pretty).expect("descriptor");
        let compact = SpecDescriptor::from_config(&compact).expect("descriptor");

        assert!(pretty.render(&api).expect("json").contains('\n'));
        assert!(!compact.render(&api).expect("json").contains('\n'));
    }
}
