use anyhow::{Context, anyhow};
use std::{
    env, fs,
    path::{Path, PathBuf},
};
use tracing::debug;

use crate::models::TesseraConfig;

/// Path to a TOML or JSON config file.
pub const CONFIG_PATH_ENV: &str = "TESSERA_CONFIG_PATH";
/// Inline JSON config.
pub const CONFIG_JSON_ENV: &str = "TESSERA_CONFIG_JSON";

/// Source that produced the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ConfigSource {
    #[default]
    Default,
    EnvPath(PathBuf),
    EnvInline,
}

impl TesseraConfig {
    /// Load configuration using environment variables.
    /// Evaluation order:
    /// 1) `$TESSERA_CONFIG_PATH` (TOML or JSON file),
    /// 2) `$TESSERA_CONFIG_JSON` (inline JSON),
    /// 3) defaults if neither is set.
    ///
    /// The result is validated before it is returned.
    pub fn load_from_env() -> anyhow::Result<(Self, ConfigSource)> {
        let (config, source) = Self::resolve_from_env()?;
        config
            .validate()
            .with_context(|| format!("invalid configuration from {source:?}"))?;
        debug!(?source, "loaded configuration");
        Ok((config, source))
    }

    fn resolve_from_env() -> anyhow::Result<(Self, ConfigSource)> {
        if let Ok(path_str) = env::var(CONFIG_PATH_ENV)
            && !path_str.trim().is_empty()
        {
            let path = PathBuf::from(path_str);
            let config = Self::load_from_file(&path)?;
            return Ok((config, ConfigSource::EnvPath(path)));
        }

        if let Ok(raw) = env::var(CONFIG_JSON_ENV)
            && !raw.trim().is_empty()
        {
            let parsed = Self::parse_json(&raw)
                .with_context(|| format!("failed to parse {CONFIG_JSON_ENV}"))?;
            return Ok((parsed, ConfigSource::EnvInline));
        }

        Ok((Self::default(), ConfigSource::Default))
    }

    pub fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        let contents = fs::read_to_string(path).with_context(|| {
            format!("failed to read config from {}", path.display())
        })?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::parse_json(&contents).with_context(|| {
                format!("invalid config {}", path.display())
            }),
            Some("toml") | Some("tml") => {
                toml::from_str(&contents).map_err(|err| {
                    anyhow!("invalid config {}: {}", path.display(), err)
                })
            }
            _ => Self::parse_from_str(&contents, &path.display().to_string()),
        }
    }

    pub fn parse_from_str(
        contents: &str,
        origin: &str,
    ) -> anyhow::Result<Self> {
        // Try TOML first, then JSON.
        toml::from_str(contents).or_else(|toml_err| {
            serde_json::from_str(contents).map_err(|json_err| {
                anyhow!(
                    "failed to parse config {}: toml error: {}; json error: {}",
                    origin,
                    toml_err,
                    json_err
                )
            })
        })
    }

    pub fn parse_json(contents: &str) -> anyhow::Result<Self> {
        serde_json::from_str(contents).map_err(|err| anyhow!(err))
    }
}
