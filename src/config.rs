//! Where the state file lives.
//!
//! The path is resolved through a chain, first hit wins:
//!
//! 1. `--file <path>`: explicit per-command override
//! 2. `YAP_FILE` env var: process/session level
//! 3. `file = "..."` in `<config dir>/yap/config.toml`
//! 4. `~/.yap`

use std::{
    env, fs, io,
    path::{Path, PathBuf},
};

use serde::Deserialize;

/// Environment variable consulted when `--file` is not given.
pub const FILE_ENV: &str = "YAP_FILE";

/// Errors resolving the state file location.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("invalid config at {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("could not determine home directory; pass --file <path> or set YAP_FILE")]
    NoHome,
}

/// yap configuration, loaded from `config.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    /// State file to use when neither `--file` nor `YAP_FILE` is set.
    pub file: Option<PathBuf>,
}

impl Config {
    /// Load config from `path`. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = match fs::read_to_string(path) {
            Ok(s) => s,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// The config file path: `<config dir>/yap/config.toml`.
    pub fn path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("yap").join("config.toml"))
    }
}

/// The default state file: `~/.yap`.
pub fn default_state_file() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".yap"))
}

/// Resolve the state file path from the chain described at the top of this module.
pub fn resolve_state_file(explicit: Option<&Path>) -> Result<PathBuf, ConfigError> {
    let env_value = env::var_os(FILE_ENV).map(PathBuf::from);
    let config_path = Config::path();
    resolve_with(explicit, env_value, config_path.as_deref(), default_state_file())
}

fn resolve_with(
    explicit: Option<&Path>,
    env_value: Option<PathBuf>,
    config_path: Option<&Path>,
    fallback: Option<PathBuf>,
) -> Result<PathBuf, ConfigError> {
    // 1. Explicit --file flag.
    if let Some(path) = explicit {
        return Ok(path.to_path_buf());
    }

    // 2. YAP_FILE environment variable.
    if let Some(path) = env_value
        && !path.as_os_str().is_empty()
    {
        return Ok(path);
    }

    // 3. config.toml.
    if let Some(config_path) = config_path
        && let Some(path) = Config::load_from(config_path)?.file
        && !path.as_os_str().is_empty()
    {
        return Ok(path);
    }

    // 4. ~/.yap.
    fallback.ok_or(ConfigError::NoHome)
}
