use crate::error::{PhotoShareError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "photo-share.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PhotoShareConfig {
    #[serde(default)]
    pub server: ServerSettings,

    #[serde(default)]
    pub data: DataSettings,

    #[serde(default)]
    pub log: LogSettings,

    /// File the configuration was read from, `None` for built-in defaults
    #[serde(skip)]
    pub source: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_graphql_path")]
    pub graphql_path: String,

    #[serde(default = "default_playground_path")]
    pub playground_path: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    4000
}

fn default_graphql_path() -> String {
    "/graphql".to_string()
}

fn default_playground_path() -> String {
    "/playground".to_string()
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            graphql_path: default_graphql_path(),
            playground_path: default_playground_path(),
        }
    }
}

impl ServerSettings {
    /// Apply `--host` / `--port` (or their env vars) on top of the file.
    pub fn with_overrides(mut self, host: Option<String>, port: Option<u16>) -> Self {
        if let Some(host) = host {
            self.host = host;
        }
        if let Some(port) = port {
            self.port = port;
        }
        self
    }

    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    fn validate(&self) -> Result<()> {
        for (key, path) in [
            ("graphql_path", &self.graphql_path),
            ("playground_path", &self.playground_path),
        ] {
            if !path.starts_with('/') {
                return Err(PhotoShareError::Config(format!(
                    "server.{} must start with '/', got '{}'",
                    key, path
                )));
            }
            if path == "/" {
                return Err(PhotoShareError::Config(format!(
                    "server.{} cannot be '/', the root route serves the greeting",
                    key
                )));
            }
        }
        if self.graphql_path == self.playground_path {
            return Err(PhotoShareError::Config(
                "server.graphql_path and server.playground_path must differ".to_string(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DataSettings {
    /// Seed file loaded into the store at startup
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LogSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

impl PhotoShareConfig {
    /// Load the configuration.
    ///
    /// An explicit path must exist. Without one, `photo-share.toml` in
    /// `start_dir` is used when present, otherwise the built-in defaults.
    /// Relative paths inside the file are resolved against its directory.
    pub fn load(explicit: Option<&Path>, start_dir: &Path) -> Result<Self> {
        let config_path = match explicit {
            Some(path) => {
                if !path.exists() {
                    return Err(PhotoShareError::Config(format!(
                        "Config file not found: {}",
                        path.display()
                    )));
                }
                path.to_path_buf()
            }
            None => {
                let candidate = start_dir.join(CONFIG_FILE_NAME);
                if !candidate.exists() {
                    return Ok(Self::default());
                }
                candidate
            }
        };

        let content = std::fs::read_to_string(&config_path)?;
        let mut config = Self::parse(&content)?;

        let base_dir = config_path.parent().unwrap_or_else(|| Path::new("."));
        config.resolve_paths(base_dir);
        config.source = Some(config_path);
        Ok(config)
    }

    pub fn parse(content: &str) -> Result<Self> {
        let config: PhotoShareConfig = toml::from_str(content)?;
        config.server.validate()?;
        Ok(config)
    }

    fn resolve_paths(&mut self, base_dir: &Path) {
        if let Some(seed) = self.data.seed.as_mut() {
            if seed.is_relative() {
                *seed = base_dir.join(&*seed);
            }
        }
        if let Some(file) = self.log.file.as_mut() {
            if file.is_relative() {
                *file = base_dir.join(&*file);
            }
        }
    }
}
