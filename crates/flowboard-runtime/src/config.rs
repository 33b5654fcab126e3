use crate::{Error, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

pub const ENV_API_KEY: &str = "AIROPS_API_KEY";
pub const ENV_USER_ID: &str = "AIROPS_USER_ID";
pub const ENV_WORKSPACE_ID: &str = "AIROPS_WORKSPACE_ID";
pub const ENV_HASHED_USER_ID: &str = "AIROPS_HASHED_USER_ID";
pub const ENV_APP_ID: &str = "AIROPS_APP_ID";
pub const ENV_APP_VERSION: &str = "AIROPS_APP_VERSION";
pub const ENV_API_BASE: &str = "AIROPS_API_BASE";

pub const DEFAULT_API_BASE: &str = "https://app.airops.com";

/// Resolve the data directory path based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. FLOWBOARD_PATH environment variable (with tilde expansion)
/// 3. XDG data directory
/// 4. ~/.flowboard
pub fn resolve_workspace_path(explicit_path: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var("FLOWBOARD_PATH") {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(data_dir) = dirs::data_dir() {
        return Ok(data_dir.join("flowboard"));
    }

    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".flowboard"));
    }

    Err(Error::Config(
        "Could not determine data directory: no HOME directory or XDG data directory found"
            .to_string(),
    ))
}

/// Expand tilde (~) in paths to the user's home directory
fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

/// Key/value source consulted before the config file.
///
/// Process environment first, then the `.env` file in the working directory.
#[derive(Debug, Clone, Default)]
pub struct EnvLookup {
    dotenv: HashMap<String, String>,
    process: bool,
}

impl EnvLookup {
    /// Process environment plus `./.env` when present
    pub fn from_environment() -> Result<Self> {
        Self::with_dotenv(Path::new(".env"))
    }

    pub fn with_dotenv(path: &Path) -> Result<Self> {
        let mut dotenv = HashMap::new();
        if path.exists() {
            for entry in dotenvy::from_path_iter(path)? {
                let (key, value) = entry?;
                dotenv.insert(key, value);
            }
            tracing::debug!(path = %path.display(), keys = dotenv.len(), "loaded .env file");
        }
        Ok(Self {
            dotenv,
            process: true,
        })
    }

    /// Fixed values only, no process environment
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            dotenv: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
            process: false,
        }
    }

    pub fn get(&self, key: &str) -> Option<String> {
        let from_process = if self.process {
            std::env::var(key).ok()
        } else {
            None
        };

        from_process
            .or_else(|| self.dotenv.get(key).cloned())
            .filter(|value| !value.trim().is_empty())
    }
}

/// `[api]` table of `config.toml`; every field can be overridden from the environment
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ApiConfig {
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub workspace_id: Option<String>,
    #[serde(default)]
    pub hashed_user_id: Option<String>,
    #[serde(default)]
    pub app_id: Option<String>,
    #[serde(default)]
    pub app_version: Option<String>,
    #[serde(default)]
    pub base_url: Option<String>,
}

impl ApiConfig {
    /// Environment values win over whatever the file provided
    pub fn overlay(mut self, env: &EnvLookup) -> Self {
        let fields: [(&mut Option<String>, &str); 7] = [
            (&mut self.api_key, ENV_API_KEY),
            (&mut self.user_id, ENV_USER_ID),
            (&mut self.workspace_id, ENV_WORKSPACE_ID),
            (&mut self.hashed_user_id, ENV_HASHED_USER_ID),
            (&mut self.app_id, ENV_APP_ID),
            (&mut self.app_version, ENV_APP_VERSION),
            (&mut self.base_url, ENV_API_BASE),
        ];
        for (slot, key) in fields {
            if let Some(value) = env.get(key) {
                *slot = Some(value);
            }
        }
        self
    }

    /// Validate into the identity used for the fetch.
    ///
    /// All missing names are reported together. The app version is optional
    /// and an unparsable one means "latest".
    pub fn credentials(&self) -> Result<Credentials> {
        let mut missing = Vec::new();
        let mut require = |value: &Option<String>, name: &'static str| -> Option<String> {
            let value = value.as_ref().map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
            if value.is_none() {
                missing.push(name);
            }
            value
        };

        let user_id = require(&self.user_id, ENV_USER_ID);
        let workspace_id = require(&self.workspace_id, ENV_WORKSPACE_ID);
        let hashed_user_id = require(&self.hashed_user_id, ENV_HASHED_USER_ID);
        let app_id = require(&self.app_id, ENV_APP_ID);

        let (Some(user_id), Some(workspace_id), Some(hashed_user_id), Some(app_id)) =
            (user_id, workspace_id, hashed_user_id, app_id)
        else {
            return Err(Error::MissingConfig(missing));
        };

        let workspace_id = parse_id(&workspace_id, ENV_WORKSPACE_ID)?;
        let app_id = parse_id(&app_id, ENV_APP_ID)?;
        let app_version = self
            .app_version
            .as_deref()
            .and_then(|v| v.trim().parse::<u64>().ok());

        Ok(Credentials {
            user_id,
            workspace_id,
            hashed_user_id,
            app_id,
            app_version,
            base_url: self
                .base_url
                .clone()
                .unwrap_or_else(|| DEFAULT_API_BASE.to_string())
                .trim_end_matches('/')
                .to_string(),
        })
    }

    /// API key and user id, the inputs of the hashed user id
    pub fn signing_inputs(&self) -> Result<(String, String)> {
        let api_key = self.api_key.clone().filter(|v| !v.trim().is_empty());
        let user_id = self.user_id.clone().filter(|v| !v.trim().is_empty());

        match (api_key, user_id) {
            (Some(api_key), Some(user_id)) => Ok((api_key, user_id)),
            (api_key, user_id) => {
                let mut missing = Vec::new();
                if api_key.is_none() {
                    missing.push(ENV_API_KEY);
                }
                if user_id.is_none() {
                    missing.push(ENV_USER_ID);
                }
                Err(Error::MissingConfig(missing))
            }
        }
    }
}

fn parse_id(value: &str, name: &str) -> Result<u64> {
    value
        .parse::<u64>()
        .map_err(|_| Error::Config(format!("{} must be numeric, got '{}'", name, value)))
}

/// Validated identity and app coordinates for one fetch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub user_id: String,
    pub workspace_id: u64,
    pub hashed_user_id: String,
    pub app_id: u64,
    /// `None` runs the app's latest version
    pub app_version: Option<u64>,
    pub base_url: String,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
}

impl Config {
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn default_path(data_dir: &Path) -> PathBuf {
        data_dir.join("config.toml")
    }

    /// File settings with the environment layered on top
    pub fn resolve(data_dir: &Path, env: &EnvLookup) -> Result<ApiConfig> {
        let path = Self::default_path(data_dir);
        let config = Self::load_from(&path)?;
        tracing::debug!(path = %path.display(), exists = path.exists(), "resolved config file");
        Ok(config.api.overlay(env))
    }
}
