use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context};
use config::{builder::DefaultState, ConfigBuilder, File, FileFormat};
use serde::Deserialize;
use url::Url;

pub const DEFAULT_CONFIG_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../config.toml");

/// Colon separated list of additional config files.
pub const CONFIG_PATH_ENV: &str = "GAPALLET_CONFIG";

/// Overrides `backend.url`.
pub const BACKEND_URL_ENV: &str = "BACKEND_URL";

/// Load the config from the default file, the files listed in
/// `GAPALLET_CONFIG` and the `BACKEND_URL` environment variable.
pub fn load() -> anyhow::Result<Config> {
    let mut paths = vec![PathBuf::from(DEFAULT_CONFIG_PATH)];
    if let Some(extra) = std::env::var_os(CONFIG_PATH_ENV) {
        paths.extend(std::env::split_paths(&extra).filter(|p| !p.as_os_str().is_empty()));
    }

    let backend_url = std::env::var(BACKEND_URL_ENV)
        .ok()
        .filter(|url| !url.trim().is_empty());

    builder(&paths, &[])?
        .set_override_option("backend.url", backend_url)?
        .build()?
        .try_deserialize::<RawConfig>()
        .context("Failed to load config")?
        .try_into()
}

/// Load the config from `paths`, followed by the given TOML snippets. The
/// process environment is ignored.
pub fn load_with_override(paths: &[impl AsRef<Path>], overrides: &[&str]) -> anyhow::Result<Config> {
    builder(paths, overrides)?
        .build()?
        .try_deserialize::<RawConfig>()
        .context("Failed to load config")?
        .try_into()
}

fn builder(
    paths: &[impl AsRef<Path>],
    overrides: &[&str],
) -> anyhow::Result<ConfigBuilder<DefaultState>> {
    let builder = paths
        .iter()
        .try_fold(config::Config::builder(), |builder, path| {
            let path = path.as_ref();
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file at {}", path.display()))?;
            let source = File::from_str(&content, FileFormat::Toml);
            anyhow::Ok(builder.add_source(source))
        })?;

    Ok(overrides.iter().fold(builder, |builder, &source| {
        builder.add_source(File::from_str(source, FileFormat::Toml))
    }))
}

#[derive(Debug, Clone)]
pub struct Config {
    pub backend: BackendConfig,
}

#[derive(Debug, Clone)]
pub struct BackendConfig {
    pub url: Url,
}

#[derive(Deserialize)]
struct RawConfig {
    #[serde(default)]
    backend: RawBackendConfig,
}

#[derive(Default, Deserialize)]
struct RawBackendConfig {
    url: Option<String>,
}

impl TryFrom<RawConfig> for Config {
    type Error = anyhow::Error;

    fn try_from(value: RawConfig) -> Result<Self, Self::Error> {
        let url = value.backend.url.filter(|url| !url.trim().is_empty()).ok_or_else(|| {
            anyhow!(
                "No backend URL configured, set the {BACKEND_URL_ENV} environment variable or \
                 backend.url in the config file"
            )
        })?;
        let url = url
            .trim()
            .parse()
            .with_context(|| format!("Invalid backend URL {url:?} (from {BACKEND_URL_ENV} or backend.url)"))?;

        Ok(Self {
            backend: BackendConfig { url },
        })
    }
}
