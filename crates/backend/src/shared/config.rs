use anyhow::Context;
use serde::Deserialize;
use std::fmt;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Имена политик расчёта. Отсутствие секции это ошибка опций при запуске анализа
    pub policies: Option<PoliciesConfig>,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct PoliciesConfig {
    pub revenue: String,
    pub bonus: String,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Json,
    Table,
}

#[derive(Debug, Deserialize, Clone)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
    #[serde(default = "default_true")]
    pub pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Json,
            pretty: true,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_level")]
    pub level: String,
    #[serde(default = "default_log_dir")]
    pub dir: String,
    /// Дублировать лог в файл `<dir>/backend.log`
    #[serde(default)]
    pub file: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            dir: default_log_dir(),
            file: false,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_level() -> String {
    "info".to_string()
}

fn default_log_dir() -> String {
    "target/logs".to_string()
}

/// Откуда была загружена конфигурация
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigSource {
    File(PathBuf),
    Embedded,
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigSource::File(path) => write!(f, "{}", path.display()),
            ConfigSource::Embedded => write!(f, "embedded default"),
        }
    }
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[policies]
revenue = "simple"
bonus = "by_profit"

[output]
format = "json"
pretty = true

[logging]
level = "info"
dir = "target/logs"
file = false
"#;

pub fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let config: Config = toml::from_str(contents)?;
    Ok(config)
}

/// Load configuration
///
/// Search order:
/// 1. Explicit path (must exist)
/// 2. config.toml next to the executable
/// 3. Embedded default config
pub fn load_config(explicit: Option<&Path>) -> anyhow::Result<(Config, ConfigSource)> {
    if let Some(path) = explicit {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let config = parse_config(&contents)
            .with_context(|| format!("failed to parse config {}", path.display()))?;
        return Ok((config, ConfigSource::File(path.to_path_buf())));
    }

    if let Some(exe_dir) = executable_dir() {
        let config_path = exe_dir.join("config.toml");
        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path)
                .with_context(|| format!("failed to read config {}", config_path.display()))?;
            let config = parse_config(&contents)
                .with_context(|| format!("failed to parse config {}", config_path.display()))?;
            return Ok((config, ConfigSource::File(config_path)));
        }
    }

    Ok((parse_config(DEFAULT_CONFIG)?, ConfigSource::Embedded))
}

/// Resolve the log directory: relative paths are taken from the executable directory
pub fn get_log_dir(config: &LoggingConfig) -> PathBuf {
    let dir = Path::new(&config.dir);
    if dir.is_absolute() {
        return dir.to_path_buf();
    }
    match executable_dir() {
        Some(exe_dir) => exe_dir.join(dir),
        None => dir.to_path_buf(),
    }
}

fn executable_dir() -> Option<PathBuf> {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
}
