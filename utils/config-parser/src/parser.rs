use {
    crate::Error,
    config::{Config, Environment, File},
    serde::de::DeserializeOwned,
    std::path::Path,
};

/// Load a config from an optional file, with overrides from environment
/// variables starting with `{prefix}__`. Nested keys are separated by `__`,
/// e.g. `HYPERLANE_VA__DOMAIN` sets `domain`.
///
/// A missing file is not an error: values not set by the file or the
/// environment fall back to the `serde` defaults of `D`.
pub fn parse_config_with_prefix<D, P>(path: P, prefix: &str) -> Result<D, Error>
where
    D: DeserializeOwned,
    P: AsRef<Path>,
{
    load(path.as_ref(), Environment::with_prefix(prefix).separator("__"))
}

fn load<D>(path: &Path, env: Environment) -> Result<D, Error>
where
    D: DeserializeOwned,
{
    let config = Config::builder()
        .add_source(File::from(path).required(false))
        .add_source(env.try_parsing(true))
        .build()?;

    Ok(config.try_deserialize()?)
}

// ----------------------------------- tests -----------------------------------
