use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

/// Public demonstration key accepted by the APOD API at a low rate limit.
pub const DEMO_API_KEY: &str = "DEMO_KEY";

/// Default APOD endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.nasa.gov/planetary/apod";

/// Image shown for videos that come without a provider thumbnail.
pub const DEFAULT_VIDEO_PLACEHOLDER: &str =
    "https://via.placeholder.com/400x200?text=Video+Content";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {name}: {message}")]
    InvalidValue { name: String, message: String },
    #[error("failed to parse {name} as integer: {source}")]
    ParseInt {
        name: String,
        #[source]
        source: std::num::ParseIntError,
    },
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    // APOD provider
    pub api_key: String,
    pub base_url: String,
    /// `None` means requests may wait forever.
    pub request_timeout: Option<Duration>,
    /// Upper bound on the inclusive number of days a query may span.
    pub max_range_days: Option<u32>,

    // Gallery
    pub video_placeholder_url: String,

    // Web Server
    pub web_host: String,
    pub web_port: u16,
    pub static_dir: Option<PathBuf>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Every variable is optional. Without `NASA_API_KEY` the public demo key
    /// is used so the gallery works out of the box.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set to an unparseable value.
    pub fn from_env() -> Result<Self, ConfigError> {
        let timeout_secs = parse_env_u64("APOD_TIMEOUT_SECS", 30)?;

        Ok(Self {
            // APOD provider
            api_key: env_or_default("NASA_API_KEY", DEMO_API_KEY),
            base_url: env_or_default("APOD_BASE_URL", DEFAULT_BASE_URL),
            request_timeout: (timeout_secs > 0).then(|| Duration::from_secs(timeout_secs)),
            max_range_days: parse_env_opt_u32("APOD_MAX_RANGE_DAYS")?,

            // Gallery
            video_placeholder_url: env_or_default(
                "VIDEO_PLACEHOLDER_URL",
                DEFAULT_VIDEO_PLACEHOLDER,
            ),

            // Web Server
            web_host: env_or_default("WEB_HOST", "0.0.0.0"),
            web_port: parse_env_u16("WEB_PORT", 8080)?,
            static_dir: optional_env("STATIC_DIR").map(PathBuf::from),
        })
    }

    /// Deterministic configuration for tests. Points at an unroutable provider
    /// so a test that forgets to override `base_url` fails fast.
    #[must_use]
    pub fn for_testing() -> Self {
        Self {
            api_key: "TEST_KEY".to_string(),
            base_url: "http://127.0.0.1:9/planetary/apod".to_string(),
            request_timeout: Some(Duration::from_secs(5)),
            max_range_days: None,
            video_placeholder_url: DEFAULT_VIDEO_PLACEHOLDER.to_string(),
            web_host: "127.0.0.1".to_string(),
            web_port: 0,
            static_dir: None,
        }
    }

    /// Whether the public demo key is in use.
    #[must_use]
    pub fn uses_demo_key(&self) -> bool {
        self.api_key == DEMO_API_KEY
    }

    /// Validate that the configuration is usable.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.base_url.is_empty() {
            return Err(ConfigError::InvalidValue {
                name: "APOD_BASE_URL".to_string(),
                message: "cannot be empty".to_string(),
            });
        }
        match url::Url::parse(&self.base_url) {
            Ok(parsed) if matches!(parsed.scheme(), "http" | "https") => {}
            Ok(parsed) => {
                return Err(ConfigError::InvalidValue {
                    name: "APOD_BASE_URL".to_string(),
                    message: format!("unsupported scheme '{}'", parsed.scheme()),
                });
            }
            Err(e) => {
                return Err(ConfigError::InvalidValue {
                    name: "APOD_BASE_URL".to_string(),
                    message: e.to_string(),
                });
            }
        }
        if self.api_key.is_empty() {
            return Err(ConfigError::InvalidValue {
                name: "NASA_API_KEY".to_string(),
                message: "cannot be empty".to_string(),
            });
        }
        if self.max_range_days == Some(0) {
            return Err(ConfigError::InvalidValue {
                name: "APOD_MAX_RANGE_DAYS".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

fn optional_env(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|s| !s.is_empty())
}

fn env_or_default(name: &str, default: &str) -> String {
    std::env::var(name)
        .ok()
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn parse_env_u64(name: &str, default: u64) -> Result<u64, ConfigError> {
    match std::env::var(name) {
        Ok(val) if !val.is_empty() => val.parse().map_err(|e| ConfigError::ParseInt {
            name: name.to_string(),
            source: e,
        }),
        _ => Ok(default),
    }
}

fn parse_env_u16(name: &str, default: u16) -> Result<u16, ConfigError> {
    match std::env::var(name) {
        Ok(val) if !val.is_empty() => val.parse().map_err(|e| ConfigError::ParseInt {
            name: name.to_string(),
            source: e,
        }),
        _ => Ok(default),
    }
}

fn parse_env_opt_u32(name: &str) -> Result<Option<u32>, ConfigError> {
    optional_env(name)
        .map(|val| {
            val.parse().map_err(|e| ConfigError::ParseInt {
                name: name.to_string(),
                source: e,
            })
        })
        .transpose()
}
