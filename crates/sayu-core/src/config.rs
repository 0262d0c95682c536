use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Config file not found: {0}")]
    NotFound(String),

    #[error("Failed to read config: {0}")]
    ReadError(String),

    #[error("Failed to parse config: {0}")]
    ParseError(String),

    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

/// Main configuration for the SAYU service
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SayuConfig {
    #[serde(default)]
    pub server: ServerConfig,

    /// Credentials, tokens and usage quota
    #[serde(default)]
    pub auth: AuthSettings,

    #[serde(default)]
    pub rate_limit: RateLimitSettings,

    /// Recommendation cache and warmup cadence
    #[serde(default)]
    pub cache: CacheSettings,

    #[serde(default)]
    pub catalog: CatalogSettings,

    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthSettings {
    /// HS256 signing secret for bearer tokens
    #[serde(default = "default_jwt_secret")]
    pub jwt_secret: String,

    /// Token lifetime in seconds
    #[serde(default = "default_token_ttl_secs")]
    pub token_ttl_secs: u64,

    /// Required prefix for `x-api-key` credentials
    #[serde(default = "default_api_key_prefix")]
    pub api_key_prefix: String,

    /// Accepted API keys. Empty means any well-formed key is accepted.
    #[serde(default)]
    pub api_keys: Vec<String>,

    /// Full-analysis requests allowed per key per calendar month
    #[serde(default = "default_monthly_quota")]
    pub monthly_quota: u64,
}

impl Default for AuthSettings {
    fn default() -> Self {
        Self {
            jwt_secret: default_jwt_secret(),
            token_ttl_secs: default_token_ttl_secs(),
            api_key_prefix: default_api_key_prefix(),
            api_keys: Vec::new(),
            monthly_quota: default_monthly_quota(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateLimitSettings {
    /// Unauthenticated requests per window per client
    #[serde(default = "default_public_per_window")]
    pub public_per_window: u32,

    /// Requests per window per API key
    #[serde(default = "default_api_key_per_window")]
    pub api_key_per_window: u32,

    #[serde(default = "default_window_secs")]
    pub window_secs: u64,

    /// Key public limits on `x-forwarded-for` / `x-real-ip`. Only enable behind
    /// a proxy that overwrites those headers.
    #[serde(default)]
    pub trusted_proxy: bool,
}

impl Default for RateLimitSettings {
    fn default() -> Self {
        Self {
            public_per_window: default_public_per_window(),
            api_key_per_window: default_api_key_per_window(),
            window_secs: default_window_secs(),
            trusted_proxy: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheSettings {
    /// Warm every archetype in the background at startup
    #[serde(default = "default_true")]
    pub warmup_on_start: bool,

    /// Seconds between background re-warms (0 = disabled)
    #[serde(default = "default_warmup_interval_secs")]
    pub warmup_interval_secs: u64,

    #[serde(default = "default_artwork_limit")]
    pub artwork_limit: usize,

    #[serde(default = "default_exhibition_limit")]
    pub exhibition_limit: usize,
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            warmup_on_start: true,
            warmup_interval_secs: default_warmup_interval_secs(),
            artwork_limit: default_artwork_limit(),
            exhibition_limit: default_exhibition_limit(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CatalogSettings {
    /// JSON catalog to load instead of the bundled seed
    #[serde(default)]
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter directive used when RUST_LOG is not set
    #[serde(default = "default_log_level")]
    pub level: String,

    /// "pretty" or "json"
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}
fn default_port() -> u16 {
    3000
}
fn default_jwt_secret() -> String {
    "change-me-in-production".to_string()
}
fn default_token_ttl_secs() -> u64 {
    60 * 60 * 24
}
fn default_api_key_prefix() -> String {
    "sayu_".to_string()
}
fn default_monthly_quota() -> u64 {
    10_000
}
fn default_public_per_window() -> u32 {
    100
}
fn default_api_key_per_window() -> u32 {
    1_000
}
fn default_window_secs() -> u64 {
    15 * 60
}
fn default_true() -> bool {
    true
}
fn default_warmup_interval_secs() -> u64 {
    3600
}
fn default_artwork_limit() -> usize {
    50
}
fn default_exhibition_limit() -> usize {
    10
}
fn default_log_level() -> String {
    "sayu_api=debug,sayu_cache=info,sayu_core=info,tower_http=debug".to_string()
}
fn default_log_format() -> String {
    "pretty".to_string()
}

#[derive(Debug)]
enum Notice {
    Info(String),
    Warn(String),
}

/// A parsed but not yet validated configuration.
#[derive(Debug)]
pub struct DiscoveredConfig {
    config: SayuConfig,
    path: Option<PathBuf>,
    notices: Vec<Notice>,
}

impl DiscoveredConfig {
    /// Logging settings with `SAYU_LOG_LEVEL` and `SAYU_LOG_FORMAT` applied.
    pub fn logging(&self) -> LoggingConfig {
        ConfigManager::logging_overrides(self.config.logging.clone(), |key| std::env::var(key).ok())
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Replays what discovery found, then applies environment overrides and validates.
    pub fn finish(self) -> Result<ConfigManager, ConfigError> {
        info!("Loading SAYU configuration");
        for notice in &self.notices {
            match notice {
                Notice::Info(msg) => info!("{}", msg),
                Notice::Warn(msg) => warn!("{}", msg),
            }
        }
        if self.path.is_none() {
            info!("No config file found, using defaults");
        }
        ConfigManager::finish(self.config, self.path)
    }
}

/// Configuration manager with layered sources
#[derive(Debug, Clone)]
pub struct ConfigManager {
    config: SayuConfig,
    config_path: Option<PathBuf>,
}

impl ConfigManager {
    /// Load configuration with the following precedence:
    /// 1. Environment variables (.env file)
    /// 2. Config file (.sayu.toml)
    /// 3. Defaults
    pub fn load() -> Result<Self, ConfigError> {
        Self::discover(None)?.finish()
    }

    /// Load from an explicit file, still applying environment overrides.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        Self::discover(Some(path))?.finish()
    }

    /// Locate and parse configuration without emitting any log events, so the
    /// caller can install a subscriber from [`DiscoveredConfig::logging`] first.
    pub fn discover(explicit: Option<&Path>) -> Result<DiscoveredConfig, ConfigError> {
        let mut notices = Vec::new();
        Self::load_dotenv(&mut notices);

        let (config, path) = match explicit {
            Some(path) => {
                if !path.exists() {
                    return Err(ConfigError::NotFound(path.display().to_string()));
                }
                (Self::read_toml_file(path)?, Some(path.to_path_buf()))
            }
            None => Self::load_config_file()?,
        };

        Ok(DiscoveredConfig {
            config,
            path,
            notices,
        })
    }

    /// Wrap an in-memory configuration. Used by tests and embedders.
    pub fn from_config(config: SayuConfig) -> Result<Self, ConfigError> {
        Self::validate_config(&config)?;
        Ok(Self {
            config,
            config_path: None,
        })
    }

    fn finish(config: SayuConfig, config_path: Option<PathBuf>) -> Result<Self, ConfigError> {
        let config = Self::apply_env_overrides(config, |key| std::env::var(key).ok());
        Self::validate_config(&config)?;

        info!("Configuration loaded successfully");
        match config_path {
            Some(ref path) => info!("   Config file: {}", path.display()),
            None => info!("   Config file: NONE (using defaults)"),
        }
        info!("   Listen address: {}:{}", config.server.host, config.server.port);
        info!(
            "   Rate limits: {} public / {} per key every {}s",
            config.rate_limit.public_per_window,
            config.rate_limit.api_key_per_window,
            config.rate_limit.window_secs
        );
        if config.rate_limit.trusted_proxy {
            info!("   Client addresses taken from forwarding headers");
        }
        if config.auth.jwt_secret == default_jwt_secret() {
            warn!("Using the default JWT secret; set SAYU_JWT_SECRET in production");
        }

        Ok(Self {
            config,
            config_path,
        })
    }

    pub fn config(&self) -> &SayuConfig {
        &self.config
    }

    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    fn load_dotenv(notices: &mut Vec<Notice>) {
        if Path::new(".env").exists() {
            match dotenv::from_filename(".env") {
                Ok(_) => notices.push(Notice::Info(
                    "Loaded .env file from current directory".to_string(),
                )),
                Err(e) => notices.push(Notice::Warn(format!("Failed to load .env file: {e}"))),
            }
            return;
        }

        if let Some(home) = dirs::home_dir() {
            let home_env = home.join(".sayu.env");
            if home_env.exists() {
                match dotenv::from_path(&home_env) {
                    Ok(_) => notices.push(Notice::Info(
                        "Loaded .sayu.env from home directory".to_string(),
                    )),
                    Err(e) => notices.push(Notice::Warn(format!("Failed to load .sayu.env: {e}"))),
                }
            }
        }
    }

    /// Find and load config file
    /// Search order:
    /// 1. ./.sayu.toml (current directory)
    /// 2. ~/.sayu/config.toml (user config)
    fn load_config_file() -> Result<(SayuConfig, Option<PathBuf>), ConfigError> {
        let local_config = Path::new(".sayu.toml");
        if local_config.exists() {
            let config = Self::read_toml_file(local_config)?;
            return Ok((config, Some(local_config.to_path_buf())));
        }

        if let Some(home) = dirs::home_dir() {
            let user_config = home.join(".sayu").join("config.toml");
            if user_config.exists() {
                let config = Self::read_toml_file(&user_config)?;
                return Ok((config, Some(user_config)));
            }
        }

        Ok((SayuConfig::default(), None))
    }

    fn read_toml_file(path: &Path) -> Result<SayuConfig, ConfigError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError(e.to_string()))?;

        toml::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// Apply `SAYU_*` overrides read through `lookup`. Unparseable numbers are
    /// reported and ignored.
    pub fn apply_env_overrides<F>(mut config: SayuConfig, lookup: F) -> SayuConfig
    where
        F: Fn(&str) -> Option<String>,
    {
        fn parsed<T: std::str::FromStr>(key: &str, raw: String) -> Option<T> {
            match raw.trim().parse() {
                Ok(v) => Some(v),
                Err(_) => {
                    warn!("Ignoring invalid value for {}: {}", key, raw);
                    None
                }
            }
        }

        if let Some(host) = lookup("SAYU_HOST") {
            config.server.host = host;
        }
        if let Some(port) = lookup("SAYU_PORT").and_then(|v| parsed("SAYU_PORT", v)) {
            config.server.port = port;
        }
        if let Some(secret) = lookup("SAYU_JWT_SECRET") {
            config.auth.jwt_secret = secret;
        }
        if let Some(keys) = lookup("SAYU_API_KEYS") {
            config.auth.api_keys = keys
                .split(',')
                .map(|k| k.trim().to_string())
                .filter(|k| !k.is_empty())
                .collect();
        }
        if let Some(quota) =
            lookup("SAYU_MONTHLY_QUOTA").and_then(|v| parsed("SAYU_MONTHLY_QUOTA", v))
        {
            config.auth.monthly_quota = quota;
        }
        if let Some(limit) =
            lookup("SAYU_PUBLIC_RATE_LIMIT").and_then(|v| parsed("SAYU_PUBLIC_RATE_LIMIT", v))
        {
            config.rate_limit.public_per_window = limit;
        }
        if let Some(limit) =
            lookup("SAYU_API_KEY_RATE_LIMIT").and_then(|v| parsed("SAYU_API_KEY_RATE_LIMIT", v))
        {
            config.rate_limit.api_key_per_window = limit;
        }
        if let Some(window) =
            lookup("SAYU_RATE_WINDOW_SECS").and_then(|v| parsed("SAYU_RATE_WINDOW_SECS", v))
        {
            config.rate_limit.window_secs = window;
        }
        if let Some(flag) =
            lookup("SAYU_WARMUP_ON_START").and_then(|v| parsed("SAYU_WARMUP_ON_START", v))
        {
            config.cache.warmup_on_start = flag;
        }
        if let Some(interval) = lookup("SAYU_WARMUP_INTERVAL_SECS")
            .and_then(|v| parsed("SAYU_WARMUP_INTERVAL_SECS", v))
        {
            config.cache.warmup_interval_secs = interval;
        }
        if let Some(path) = lookup("SAYU_CATALOG_PATH") {
            config.catalog.path = Some(PathBuf::from(path));
        }
        if let Some(flag) =
            lookup("SAYU_TRUSTED_PROXY").and_then(|v| parsed("SAYU_TRUSTED_PROXY", v))
        {
            config.rate_limit.trusted_proxy = flag;
        }
        config.logging = Self::logging_overrides(config.logging, lookup);

        config
    }

    fn logging_overrides<F>(mut logging: LoggingConfig, lookup: F) -> LoggingConfig
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(level) = lookup("SAYU_LOG_LEVEL") {
            logging.level = level;
        }
        if let Some(format) = lookup("SAYU_LOG_FORMAT") {
            logging.format = format;
        }
        logging
    }

    pub fn validate_config(config: &SayuConfig) -> Result<(), ConfigError> {
        if config.server.port == 0 {
            return Err(ConfigError::ValidationError(
                "server.port must be non-zero".to_string(),
            ));
        }
        if config.auth.jwt_secret.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "auth.jwt_secret must not be empty".to_string(),
            ));
        }
        if config.auth.api_key_prefix.is_empty() {
            return Err(ConfigError::ValidationError(
                "auth.api_key_prefix must not be empty".to_string(),
            ));
        }
        if let Some(bad) = config
            .auth
            .api_keys
            .iter()
            .find(|k| !k.starts_with(&config.auth.api_key_prefix))
        {
            return Err(ConfigError::ValidationError(format!(
                "API key {}... does not start with {}",
                bad.chars().take(6).collect::<String>(),
                config.auth.api_key_prefix
            )));
        }
        if config.auth.monthly_quota == 0 {
            return Err(ConfigError::ValidationError(
                "auth.monthly_quota must be at least 1".to_string(),
            ));
        }
        if config.rate_limit.public_per_window == 0 || config.rate_limit.api_key_per_window == 0 {
            return Err(ConfigError::ValidationError(
                "rate limits must allow at least one request per window".to_string(),
            ));
        }
        if config.rate_limit.window_secs == 0 {
            return Err(ConfigError::ValidationError(
                "rate_limit.window_secs must be non-zero".to_string(),
            ));
        }
        if config.cache.artwork_limit == 0 || config.cache.exhibition_limit == 0 {
            return Err(ConfigError::ValidationError(
                "cache limits must be at least 1".to_string(),
            ));
        }
        match config.logging.format.as_str() {
            "pretty" | "json" => {}
            other => {
                return Err(ConfigError::ValidationError(format!(
                    "Invalid log format: {}. Must be one of: pretty, json",
                    other
                )))
            }
        }
        Ok(())
    }

    /// Write the default configuration as TOML
    pub fn create_default_config(path: &Path) -> Result<(), ConfigError> {
        let toml_str = Self::default_config_toml()?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| ConfigError::ReadError(e.to_string()))?;
        }

        std::fs::write(path, toml_str).map_err(|e| ConfigError::ReadError(e.to_string()))?;

        Ok(())
    }

    pub fn default_config_toml() -> Result<String, ConfigError> {
        toml::to_string_pretty(&SayuConfig::default())
            .map_err(|e| ConfigError::ParseError(e.to_string()))
    }
}
