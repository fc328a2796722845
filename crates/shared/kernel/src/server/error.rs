use crate::descriptor::ConfigurationError;
use std::borrow::Cow;

/// Errors raised while wiring the bundle into the host router.
#[swb_derive::swb_error]
pub enum BundleError {
    #[error("Bundle configuration error{}: {source}", format_context(.context))]
    Configuration { source: ConfigurationError, context: Option<Cow<'static, str>> },

    #[error("API document serialization error{}: {source}", format_context(.context))]
    Serialize { source: serde_json::Error, context: Option<Cow<'static, str>> },
}
