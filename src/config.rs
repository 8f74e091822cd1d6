use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::models::ScoringWeights;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub github: GithubSettings,
    #[serde(default)]
    pub cache: CacheSettings,
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 8080 }

#[derive(Debug, Clone, Deserialize)]
pub struct GithubSettings {
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Personal access token; raises the rate limit when set
    pub token: Option<String>,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for GithubSettings {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            token: None,
            user_agent: default_user_agent(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_api_url() -> String { "https://api.github.com".to_string() }
fn default_user_agent() -> String { format!("devscope/{}", env!("CARGO_PKG_VERSION")) }
fn default_timeout_secs() -> u64 { 10 }

#[derive(Debug, Clone, Deserialize)]
pub struct CacheSettings {
    #[serde(default = "default_cache_capacity")]
    pub capacity: u64,
    #[serde(default = "default_cache_ttl")]
    pub ttl_secs: u64,
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            capacity: default_cache_capacity(),
            ttl_secs: default_cache_ttl(),
        }
    }
}

fn default_cache_capacity() -> u64 { 500 }
fn default_cache_ttl() -> u64 { 120 }

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub weights: WeightsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_repo_weight")]
    pub repo: u32,
    #[serde(default = "default_follower_weight")]
    pub follower: u32,
    #[serde(default = "default_age_weight")]
    pub age: u32,
    #[serde(default = "default_max_score")]
    pub max_score: u32,
    #[serde(default = "default_saturation_keywords")]
    pub saturation_keywords: u32,
    #[serde(default = "default_min_keyword_len")]
    pub min_keyword_len: usize,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            repo: default_repo_weight(),
            follower: default_follower_weight(),
            age: default_age_weight(),
            max_score: default_max_score(),
            saturation_keywords: default_saturation_keywords(),
            min_keyword_len: default_min_keyword_len(),
        }
    }
}

impl From<&WeightsConfig> for ScoringWeights {
    fn from(w: &WeightsConfig) -> Self {
        Self {
            repo: w.repo,
            follower: w.follower,
            age: w.age,
            max_score: w.max_score,
            saturation_keywords: w.saturation_keywords,
            min_keyword_len: w.min_keyword_len,
        }
    }
}

fn default_repo_weight() -> u32 { 2 }
fn default_follower_weight() -> u32 { 1 }
fn default_age_weight() -> u32 { 5 }
fn default_max_score() -> u32 { 100 }
fn default_saturation_keywords() -> u32 { 4 }
fn default_min_keyword_len() -> usize { 4 }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with DEVSCOPE_)
    /// 5. GITHUB_TOKEN, when set, for the API token
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., DEVSCOPE__SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("DEVSCOPE")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let settings = apply_token_override(settings)?;

        settings.try_deserialize()
    }

    pub fn scoring_weights(&self) -> ScoringWeights {
        ScoringWeights::from(&self.scoring.weights)
    }
}

/// The conventional GITHUB_TOKEN variable wins over file settings
fn apply_token_override(settings: Config) -> Result<Config, ConfigError> {
    match std::env::var("GITHUB_TOKEN").ok().filter(|t| !t.is_empty()) {
        Some(token) => Config::builder()
            .add_source(settings)
            .set_override("github.token", token)?
            .build(),
        None => Ok(settings),
    }
}
