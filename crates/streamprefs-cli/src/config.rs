//! File locations used by the CLI.

use std::path::PathBuf;

use crate::error::CliError;

const APP_DIR_NAME: &str = "streamprefs";
const STORE_FILE_NAME: &str = "profiles.json";
const HOSTS_FILE_NAME: &str = "hosts.json";

pub const STORE_ENV_VAR: &str = "STREAMPREFS_STORE";
pub const HOSTS_ENV_VAR: &str = "STREAMPREFS_HOSTS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliPaths {
    pub store: PathBuf,
    pub hosts: PathBuf,
}

impl CliPaths {
    /// Resolve paths from flags, then environment, then the config directory.
    pub fn resolve(store: Option<PathBuf>, hosts: Option<PathBuf>) -> Result<Self, CliError> {
        let store = resolve_path(store, env_path(STORE_ENV_VAR), STORE_FILE_NAME)?;
        let hosts = resolve_path(hosts, env_path(HOSTS_ENV_VAR), HOSTS_FILE_NAME)?;
        Ok(Self { store, hosts })
    }
}

pub fn resolve_path(
    explicit: Option<PathBuf>,
    from_env: Option<PathBuf>,
    file_name: &str,
) -> Result<PathBuf, CliError> {
    if let Some(path) = explicit.or(from_env) {
        return Ok(path);
    }
    Ok(default_config_dir()?.join(file_name))
}

fn env_path(name: &str) -> Option<PathBuf> {
    let value = std::env::var(name).ok()?;
    let value = value.trim();
    if value.is_empty() {
        None
    } else {
        Some(PathBuf::from(value))
    }
}

fn default_config_dir() -> Result<PathBuf, CliError> {
    dirs::config_dir()
        .map(|dir| dir.join(APP_DIR_NAME))
        .ok_or_else(|| CliError::Config("Failed to resolve config directory".to_string()))
}
