use contracts::dashboards::d400_sales_prediction::DEFAULT_GOOD_THRESHOLD;
use anyhow::{anyhow, bail};
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub model: ModelConfig,
    #[serde(default)]
    pub assets: AssetsConfig,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub session: SessionConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ModelConfig {
    /// Path to the JSON model artifact
    pub path: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AssetsConfig {
    /// Directory with static assets (the sales image)
    pub dir: String,
    /// Directory with the built frontend
    pub dist_dir: String,
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            dir: "assets".to_string(),
            dist_dir: "dist".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct DisplayConfig {
    /// Predictions strictly above this value are shown in green
    pub good_threshold: f64,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            good_threshold: DEFAULT_GOOD_THRESHOLD,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct SessionConfig {
    /// Sessions idle for longer than this are dropped
    pub max_idle_minutes: i64,
}

impl SessionConfig {
    /// Idle timeout as a duration; must be positive and fit `chrono::Duration`
    pub fn max_idle(&self) -> anyhow::Result<chrono::Duration> {
        if self.max_idle_minutes <= 0 {
            bail!(
                "session.max_idle_minutes must be positive, got {}",
                self.max_idle_minutes
            );
        }
        chrono::Duration::try_minutes(self.max_idle_minutes).ok_or_else(|| {
            anyhow!(
                "session.max_idle_minutes is out of range: {}",
                self.max_idle_minutes
            )
        })
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            max_idle_minutes: 24 * 60,
        }
    }
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
host = "0.0.0.0"
port = 3000

[model]
path = "model/sales_forest.json"

[assets]
dir = "assets"
dist_dir = "dist"

[display]
good_threshold = 10.0

[session]
max_idle_minutes = 1440
"#;

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    if let Some(exe_dir) = exe_dir() {
        let config_path = exe_dir.join("config.toml");

        if config_path.exists() {
            tracing::info!("Loading config from: {}", config_path.display());
            let contents = std::fs::read_to_string(&config_path)?;
            return parse_config(&contents);
        } else {
            tracing::warn!("config.toml not found at: {}", config_path.display());
        }
    }

    tracing::info!("Using default embedded configuration");
    parse_config(DEFAULT_CONFIG)
}

/// Разбор и проверка значений, которые serde проверить не может
fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let config: Config = toml::from_str(contents)?;
    config.session.max_idle()?;
    Ok(config)
}

/// Resolve a configured path.
/// Absolute paths are used as is, relative ones are resolved against the
/// executable directory.
pub fn resolve_path(configured: &str) -> PathBuf {
    let path = Path::new(configured);

    if path.is_absolute() {
        return path.to_path_buf();
    }

    match exe_dir() {
        Some(dir) => dir.join(path),
        // Fallback: relative to current directory
        None => PathBuf::from(configured),
    }
}

fn exe_dir() -> Option<PathBuf> {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config: Result<Config, _> = toml::from_str(DEFAULT_CONFIG);
        assert!(config.is_ok());
        let config = config.unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.model.path, "model/sales_forest.json");
        assert_eq!(config.display.good_threshold, 10.0);
    }

    #[test]
    fn test_optional_sections_fall_back_to_defaults() {
        let config: Config = toml::from_str(
            r#"
            [server]
            host = "127.0.0.1"
            port = 8080

            [model]
            path = "/opt/models/forest.json"
            "#,
        )
        .unwrap();

        assert_eq!(config.assets.dir, "assets");
        assert_eq!(config.display.good_threshold, DEFAULT_GOOD_THRESHOLD);
        assert_eq!(config.session.max_idle_minutes, 1440);
    }

    #[test]
    fn test_session_idle_time_is_validated() {
        let with_idle = |minutes: i64| {
            format!(
                "[server]\nhost = \"x\"\nport = 1\n[model]\npath = \"m.json\"\n[session]\nmax_idle_minutes = {}\n",
                minutes
            )
        };

        let config = parse_config(&with_idle(30)).unwrap();
        assert_eq!(config.session.max_idle().unwrap(), chrono::Duration::minutes(30));

        assert!(parse_config(&with_idle(0)).is_err());
        assert!(parse_config(&with_idle(-5)).is_err());
        assert!(parse_config(&with_idle(i64::MAX)).is_err());
    }

    #[test]
    fn test_missing_model_section_is_an_error() {
        let config: Result<Config, _> = toml::from_str("[server]\nhost = \"x\"\nport = 1\n");
        assert!(config.is_err());
    }

    #[test]
    fn test_resolve_absolute_path_unchanged() {
        let absolute = std::env::temp_dir().join("forest.json");
        let resolved = resolve_path(absolute.to_str().unwrap());
        assert_eq!(resolved, absolute);
    }

    #[test]
    fn test_resolve_relative_path_against_exe_dir() {
        let resolved = resolve_path("model/forest.json");
        assert!(resolved.is_absolute() || resolved == PathBuf::from("model/forest.json"));
        assert!(resolved.ends_with("model/forest.json"));
    }
}
