use config::{Config, ConfigError, Environment, File, Map, Source, Value, ValueKind};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::info;

/// Prefix of the environment variables overriding file settings.
pub const ENV_PREFIX: &str = "SWB";
/// File looked up (with any supported extension) when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "swagger";

/// Error raised while loading a configuration document.
#[swb_derive::swb_error]
pub enum LoadConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Loads a configuration document and overlays environment overrides.
///
/// Layers, lowest priority first:
/// 1. **File**: `path`, or `swagger.{toml,yaml,json,...}` in the working directory. Required.
/// 2. **Environment**: variables prefixed with `SWB__`, nested keys separated by `__`
///    (e.g. `SWB__VIEW_CONFIG__PAGE_TITLE` maps to `viewConfig.pageTitle`).
///
/// Keys from both layers are folded to camelCase before merging, so a `snake_case` file and
/// a camelCase one override the same settings.
///
/// Keys absent from both layers take the defaults of `T`; unknown keys are ignored as long as
/// `T` does not deny them.
///
/// # Errors
/// Returns [`LoadConfigError::Config`] when the file is missing or unreadable, or when the merged
/// document does not match `T`.
///
/// # Example
/// ```rust,no_run
/// use swb_domain::config::BundleConfig;
/// use swb_kernel::config::load_config;
///
/// let cfg: BundleConfig = load_config(Some("config/swagger.toml")).unwrap();
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, LoadConfigError>
where
    T: DeserializeOwned,
{
    load_with_environment(path, environment())
}

fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX).separator("__")
}

/// Source adapter rewriting every key (nested tables included) to camelCase.
#[derive(Debug, Clone)]
struct CamelKeys<S>(S);

impl<S> Source for CamelKeys<S>
where
    S: Source + Clone + Send + Sync + 'static,
{
    fn clone_into_box(&self) -> Box<dyn Source + Send + Sync> {
        Box::new(self.clone())
    }

    fn collect(&self) -> Result<Map<String, Value>, ConfigError> {
        Ok(camel_table(self.0.collect()?))
    }
}

fn camel_table(table: Map<String, Value>) -> Map<String, Value> {
    table.into_iter().map(|(key, value)| (camel_key(&key), camel_value(value))).collect()
}

fn camel_value(mut value: Value) -> Value {
    match &mut value.kind {
        ValueKind::Table(table) => *table = camel_table(std::mem::take(table)),
        ValueKind::Array(items) => {
            *items = std::mem::take(items).into_iter().map(camel_value).collect();
        },
        _ => {},
    }
    value
}

/// `view_config.page_title` becomes `viewConfig.pageTitle`; camelCase keys pass unchanged.
fn camel_key(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    let mut upper = false;
    for c in key.chars() {
        match c {
            '_' if !out.is_empty() && !out.ends_with('.') => upper = true,
            '.' => {
                upper = false;
                out.push(c);
            },
            _ if upper => {
                out.extend(c.to_uppercase());
                upper = false;
            },
            _ => out.push(c),
        }
    }
    out
}

fn load_with_environment<T>(
    path: Option<impl AsRef<Path>>,
    environment: Environment,
) -> Result<T, LoadConfigError>
where
    T: DeserializeOwned,
{
    let effective_path =
        path.map_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE), |p| p.as_ref().to_path_buf());

    info!("Loading config from {}", effective_path.display());

    let config = Config::builder()
        .add_source(CamelKeys(File::from(effective_path.as_path()).required(true)))
        .add_source(CamelKeys(environment))
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use swb_domain::config::BundleConfig;
    use tempfile::NamedTempFile;

    fn toml_file(contents: &str) -> NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().expect("temp file");
        file.write_all(contents.as_bytes()).expect("write config");
        file
    }

    fn overrides(vars: &[(&str, &str)]) -> Environment {
        let map = vars.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
        environment().source(Some(map))
    }

    #[test]
    fn loads_file_and_defaults_the_rest() {
        let file = toml_file(
            r#"
            resource_package = "com.example.api"
            title = "Pets"
            context_root = "/app"

            [view_config]
            validator_url = "https://validator.example.com"
            "#,
        );

        let cfg: BundleConfig = load_with_environment(Some(file.path()), overrides(&[]))
            .expect("config should load");

        assert_eq!(cfg.resource_package, "com.example.api");
        assert_eq!(cfg.title.as_deref(), Some("Pets"));
        assert_eq!(cfg.context_root, "/app");
        assert_eq!(cfg.view_config.page_title.as_deref(), Some("Swagger UI"));
        assert_eq!(
            cfg.view_config.validator_url.as_deref(),
            Some("https://validator.example.com")
        );
        assert!(cfg.pretty_print);
        assert_eq!(cfg.schemes, vec!["http".to_owned()]);
    }

    #[test]
    fn environment_overrides_file_values() {
        let file = toml_file(
            r#"
            resource_package = "com.example.api"
            context_root = "/app"
            "#,
        );

        let cfg: BundleConfig = load_with_environment(
            Some(file.path()),
            overrides(&[
                ("SWB__CONTEXT_ROOT", "/override"),
                ("SWB__ENABLED", "false"),
                ("OTHER__CONTEXT_ROOT", "/ignored"),
            ]),
        )
        .expect("config should load");

        assert_eq!(cfg.context_root, "/override");
        assert!(!cfg.enabled);
    }

    #[test]
    fn camel_case_file_accepts_environment_overrides() {
        let file = toml_file(
            r#"
            resourcePackage = "com.example.api"
            contextRoot = "/app"
            prettyPrint = false

            [viewConfig]
            pageTitle = "Pets"
            "#,
        );

        let cfg: BundleConfig = load_with_environment(
            Some(file.path()),
            overrides(&[
                ("SWB__CONTEXT_ROOT", "/override"),
                ("SWB__VIEW_CONFIG__VALIDATOR_URL", "https://validator.example.com"),
            ]),
        )
        .expect("config should load");

        assert_eq!(cfg.resource_package, "com.example.api");
        assert_eq!(cfg.context_root, "/override");
        assert!(!cfg.pretty_print);
        assert_eq!(cfg.view_config.page_title.as_deref(), Some("Pets"));
        assert_eq!(
            cfg.view_config.validator_url.as_deref(),
            Some("https://validator.example.com")
        );
    }

    #[test]
    fn keys_fold_to_camel_case() {
        assert_eq!(camel_key("context_root"), "contextRoot");
        assert_eq!(camel_key("view_config.page_title"), "viewConfig.pageTitle");
        assert_eq!(camel_key("includeUiResource"), "includeUiResource");
        assert_eq!(camel_key("_private"), "_private");
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = load_with_environment::<BundleConfig>(
            Some("/definitely/not/here/swagger.toml"),
            overrides(&[]),
        )
        .expect_err("missing file must fail");

        assert!(err.to_string().contains("Failed to build config"));
    }
}
