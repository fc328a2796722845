use crate::view::SwaggerView;
use std::borrow::Cow;

/// Failure reported by a [`ViewRenderer`].
#[swb_derive::swb_error]
pub enum RenderError {
    #[error("Template error{}: {message}", format_context(.context))]
    Template { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Internal render error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

/// Template engine turning a [`SwaggerView`] into the UI page's HTML.
///
/// `template` is the configured `template_url` (`index.ftl` unless overridden).
pub trait ViewRenderer: Send + Sync + 'static {
    /// # Errors
    /// Any failure to locate or evaluate the template.
    fn render(&self, template: &str, view: &SwaggerView) -> Result<String, RenderError>;
}
