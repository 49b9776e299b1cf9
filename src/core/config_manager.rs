// src/core/config_manager.rs
//! Configuration loading: `config.yaml` when present, environment defaults otherwise

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::core::FsOps;

pub const CONFIG_FILE: &str = "config.yaml";
pub const DEFAULT_PORT: u16 = 8000;

#[derive(Debug, Clone)]
pub struct ConfigManager {
    pub environment_name: String,
    pub environment: EnvironmentConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EnvironmentConfig {
    pub database_path: PathBuf,
    pub log_path: PathBuf,
    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Deserialize)]
struct ConfigFile {
    local: EnvironmentConfig,
    production: EnvironmentConfig,
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

impl ConfigManager {
    /// Load configuration for the environment named by `ENVIRONMENT` (default `local`)
    pub fn load() -> Result<Self> {
        let environment_name =
            std::env::var("ENVIRONMENT").unwrap_or_else(|_| "local".to_string());
        info!("Loading configuration for environment: {}", environment_name);

        let base_dir = Self::base_dir(&environment_name)?;
        let config_path = PathBuf::from(CONFIG_FILE);

        let environment = if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)
                .with_context(|| format!("Failed to read {}", CONFIG_FILE))?;
            Self::from_yaml(&content, &environment_name, &base_dir)?
        } else {
            warn!("{} not found, using built-in defaults", CONFIG_FILE);
            Self::defaults(&base_dir)
        };

        let environment = Self::apply_port_override(
            environment,
            std::env::var("ROCKET_PORT").ok().as_deref(),
        )?;

        Ok(Self {
            environment_name,
            environment,
        })
    }

    fn base_dir(environment_name: &str) -> Result<PathBuf> {
        if environment_name == "production" {
            Ok(PathBuf::from("/app"))
        } else {
            std::env::current_dir().context("Failed to get current directory")
        }
    }

    /// Pick the section matching `environment_name` out of a `config.yaml` document
    pub fn from_yaml(
        content: &str,
        environment_name: &str,
        base_dir: &Path,
    ) -> Result<EnvironmentConfig> {
        let config_file: ConfigFile =
            serde_yaml::from_str(content).with_context(|| format!("Failed to parse {}", CONFIG_FILE))?;

        let env_config = match environment_name {
            "production" => config_file.production,
            _ => config_file.local,
        };

        Ok(EnvironmentConfig {
            database_path: FsOps::normalize_path(base_dir, &env_config.database_path),
            log_path: FsOps::normalize_path(base_dir, &env_config.log_path),
            port: env_config.port,
        })
    }

    pub fn defaults(base_dir: &Path) -> EnvironmentConfig {
        EnvironmentConfig {
            database_path: base_dir.join("data").join("orientation.db"),
            log_path: base_dir.join("logs").join("orientation-api.log"),
            port: DEFAULT_PORT,
        }
    }

    fn apply_port_override(
        mut environment: EnvironmentConfig,
        port: Option<&str>,
    ) -> Result<EnvironmentConfig> {
        if let Some(port) = port {
            environment.port = port
                .parse::<u16>()
                .map_err(|_| anyhow::anyhow!("ROCKET_PORT must be a valid port number"))?;
        }
        Ok(environment)
    }

    /// Ensure the database and log directories exist
    pub async fn ensure_directories(&self) -> Result<()> {
        FsOps::ensure_parent_exists(&self.environment.database_path).await?;
        FsOps::ensure_parent_exists(&self.environment.log_path).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
local:
  database_path: data/local.db
  log_path: /tmp/orientation-api.log
production:
  database_path: /var/lib/orientation/orientation.db
  log_path: logs/api.log
  port: 9100
"#;

    #[test]
    fn test_from_yaml_local_section() {
        let config = ConfigManager::from_yaml(SAMPLE, "local", Path::new("/work")).unwrap();
        assert_eq!(config.database_path, PathBuf::from("/work/data/local.db"));
        assert_eq!(config.log_path, PathBuf::from("/tmp/orientation-api.log"));
        assert_eq!(config.port, DEFAULT_PORT);
    }

    #[test]
    fn test_from_yaml_production_section() {
        let config = ConfigManager::from_yaml(SAMPLE, "production", Path::new("/app")).unwrap();
        assert_eq!(
            config.database_path,
            PathBuf::from("/var/lib/orientation/orientation.db")
        );
        assert_eq!(config.log_path, PathBuf::from("/app/logs/api.log"));
        assert_eq!(config.port, 9100);
    }

    #[test]
    fn test_unknown_environment_uses_local() {
        let config = ConfigManager::from_yaml(SAMPLE, "staging", Path::new("/work")).unwrap();
        assert_eq!(config.database_path, PathBuf::from("/work/data/local.db"));
    }

    #[test]
    fn test_from_yaml_rejects_incomplete_file() {
        let err = ConfigManager::from_yaml("local:\n  database_path: x.db\n", "local", Path::new("/"))
            .unwrap_err();
        assert!(err.to_string().contains("Failed to parse"));
    }

    #[test]
    fn test_port_override() {
        let base = ConfigManager::defaults(Path::new("/work"));
        let config = ConfigManager::apply_port_override(base.clone(), Some("8123")).unwrap();
        assert_eq!(config.port, 8123);

        let unchanged = ConfigManager::apply_port_override(base.clone(), None).unwrap();
        assert_eq!(unchanged.port, DEFAULT_PORT);

        assert!(ConfigManager::apply_port_override(base, Some("not-a-port")).is_err());
    }
}
