use crate::constants::{
    DEFAULT_API_ENDPOINT, DEFAULT_HTTP_TIMEOUT_SECONDS, DEFAULT_SITE_DOMAIN, LOG_FILE_NAME,
    env_vars,
};
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;
use tokio::io::AsyncWriteExt;

pub mod paths;
pub mod user_prompts;
pub mod validation;

use paths::{get_config_path, get_log_dir_path};
use user_prompts::prompt_for_api_token;
use validation::validate_config;

/// Configuration structure for the application.
/// Constructed once at startup and passed to the resolver and the GraphQL transport.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// smash.gg GraphQL endpoint the queries are POSTed to.
    #[serde(default = "default_api_endpoint")]
    pub api_endpoint: String,
    /// Bearer token sent with every GraphQL request.
    pub api_token: String,
    /// Site used to expand bare slugs and to build canonical links.
    #[serde(default = "default_site_domain")]
    pub site_domain: String,
    /// Path to the log file. If not specified, logs will be written to a default location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file_path: Option<String>,
    /// HTTP timeout in seconds for API requests. Defaults to 30 seconds if not specified.
    #[serde(default = "default_http_timeout")]
    pub http_timeout_seconds: u64,
}

fn default_api_endpoint() -> String {
    DEFAULT_API_ENDPOINT.to_string()
}

fn default_site_domain() -> String {
    DEFAULT_SITE_DOMAIN.to_string()
}

fn default_http_timeout() -> u64 {
    DEFAULT_HTTP_TIMEOUT_SECONDS
}

/// Ensures a site domain carries the https:// prefix and no trailing slash.
fn normalize_domain(domain: &str) -> String {
    let domain = domain.trim().trim_end_matches('/');
    if domain.starts_with("https://") {
        domain.to_string()
    } else {
        format!("https://{}", domain.trim_start_matches("http://"))
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_endpoint: default_api_endpoint(),
            api_token: String::new(),
            site_domain: default_site_domain(),
            log_file_path: None,
            http_timeout_seconds: default_http_timeout(),
        }
    }
}

impl Config {
    /// Loads configuration from the default config file location.
    /// If no config file exists and no token is provided through the environment,
    /// prompts the user for an API token and creates the file.
    ///
    /// # Environment Variables
    /// - `SMASHGG_GRAPHQL_ENDPOINT` - Override the GraphQL endpoint
    /// - `SMASHGG_GRAPHQL_TOKEN` - Override the API token
    /// - `SMASHGG_SITE_DOMAIN` - Override the site domain
    /// - `SMASHGG_LOG_FILE` - Override log file path
    /// - `SMASHGG_HTTP_TIMEOUT` - Override HTTP timeout in seconds (default: 30)
    pub async fn load() -> Result<Self, AppError> {
        let config_path = get_config_path();

        let mut config = if Path::new(&config_path).exists() {
            let content = fs::read_to_string(&config_path).await?;
            toml::from_str(&content)?
        } else if std::env::var(env_vars::API_TOKEN).is_ok() {
            Config::default()
        } else {
            let config = Config {
                api_token: prompt_for_api_token().await?,
                ..Config::default()
            };
            config.save().await?;
            config
        };

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Applies the `SMASHGG_*` environment variables on top of the current values.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(api_endpoint) = std::env::var(env_vars::API_ENDPOINT) {
            self.api_endpoint = api_endpoint;
        }

        if let Ok(api_token) = std::env::var(env_vars::API_TOKEN) {
            self.api_token = api_token;
        }

        if let Ok(site_domain) = std::env::var(env_vars::SITE_DOMAIN) {
            self.site_domain = site_domain;
        }

        if let Ok(log_file_path) = std::env::var(env_vars::LOG_FILE) {
            self.log_file_path = Some(log_file_path);
        }

        if let Some(timeout) = std::env::var(env_vars::HTTP_TIMEOUT)
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
        {
            self.http_timeout_seconds = timeout;
        }
    }

    /// Validates the configuration settings
    pub fn validate(&self) -> Result<(), AppError> {
        validate_config(
            &self.api_endpoint,
            &self.api_token,
            &self.site_domain,
            &self.log_file_path,
        )
    }

    /// Saves current configuration to the default config file location.
    pub async fn save(&self) -> Result<(), AppError> {
        let config_path = get_config_path();
        self.save_to_path(&config_path).await
    }

    /// Returns the platform-specific path for the config file.
    pub fn get_config_path() -> String {
        paths::get_config_path()
    }

    /// Returns the platform-specific path for the log directory.
    pub fn get_log_dir_path() -> String {
        paths::get_log_dir_path()
    }

    /// Displays current configuration settings to stdout.
    /// The API token is masked.
    pub async fn display() -> Result<(), AppError> {
        let config_path = get_config_path();
        let log_dir = get_log_dir_path();

        if Path::new(&config_path).exists() {
            let config = Config::load().await?;
            println!("\nCurrent Configuration");
            println!("────────────────────────────────────");
            println!("Config Location:");
            println!("{config_path}");
            println!("────────────────────────────────────");
            println!("GraphQL Endpoint:");
            println!("{}", config.api_endpoint);
            println!("────────────────────────────────────");
            println!("API Token:");
            println!("{}", config.masked_token());
            println!("────────────────────────────────────");
            println!("Site Domain:");
            println!("{}", config.site_domain);
            println!("────────────────────────────────────");
            println!("HTTP Timeout:");
            println!("{} seconds", config.http_timeout_seconds);
            println!("────────────────────────────────────");
            println!("Log File Location:");
            if let Some(custom_path) = &config.log_file_path {
                println!("{custom_path}");
            } else {
                println!("{log_dir}/{LOG_FILE_NAME}");
                println!("(Default location)");
            }
        } else {
            println!("\nNo configuration file found at:");
            println!("{config_path}");
        }

        Ok(())
    }

    /// Returns the token with everything but its last four characters hidden.
    pub fn masked_token(&self) -> String {
        let chars: Vec<char> = self.api_token.chars().collect();
        if chars.len() <= 4 {
            return "*".repeat(chars.len());
        }
        let visible: String = chars[chars.len() - 4..].iter().collect();
        format!("{}{visible}", "*".repeat(chars.len() - 4))
    }

    /// Saves configuration to a custom file path.
    ///
    /// Creates the parent directory if it doesn't exist and normalizes the
    /// site domain to https:// without a trailing slash. The GraphQL endpoint is
    /// stored as given so local plain-http endpoints keep working.
    ///
    /// # Errors
    /// * `AppError::Config` - If the provided path has no parent directory
    /// * `AppError::Io` - If there's an I/O error creating directories or writing the file
    /// * `AppError::TomlSerialize` - If there's an error serializing the configuration
    pub async fn save_to_path(&self, path: &str) -> Result<(), AppError> {
        let config_dir = Path::new(path).parent().ok_or_else(|| {
            AppError::config_error(format!("Path '{path}' has no parent directory"))
        })?;

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).await?;
        }
        let content = toml::to_string_pretty(&Config {
            api_endpoint: self.api_endpoint.trim().to_string(),
            api_token: self.api_token.clone(),
            site_domain: normalize_domain(&self.site_domain),
            log_file_path: self.log_file_path.clone(),
            http_timeout_seconds: self.http_timeout_seconds,
        })?;
        let mut file = fs::File::create(path).await?;
        file.write_all(content.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }

    /// Loads configuration from a custom file path without applying env overrides.
    pub async fn load_from_path(path: &str) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).await?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}
