use std::borrow::Cow;
use swb_derive::swb_error;

#[swb_error]
pub enum StartupError {
    #[error("Nothing to document{}", format_context(.context))]
    Missing { context: Option<Cow<'static, str>> },
}

fn main() {
    let err = Err::<(), _>(StartupError::Missing { context: None })
        .context("bundle init")
        .unwrap_err();
    assert_eq!(err.to_string(), "Nothing to document (bundle init)");
}
