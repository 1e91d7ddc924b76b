use std::env;

use crate::submission::ClientConfig;

/// Distinguishes runtime behavior for different stages of the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }

    /// Log level used when `LOAN_LOG_LEVEL` is not set: verbose while
    /// developing, quiet in CI, operational in production.
    pub const fn default_log_level(self) -> &'static str {
        match self {
            Self::Development => "debug",
            Self::Test => "warn",
            Self::Production => "info",
        }
    }
}

/// Top-level configuration for the intake client.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub api: ApiConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("LOAN_APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let base_url =
            env::var("LOAN_API_BASE_URL").unwrap_or_else(|_| "http://localhost:8080".to_string());
        let endpoint = env::var("LOAN_API_ENDPOINT")
            .unwrap_or_else(|_| "api/loan-applications/apply".to_string());
        let timeout_secs = env::var("LOAN_API_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".to_string())
            .parse::<u64>()
            .map_err(|_| ConfigError::InvalidTimeout)?;

        let log_level = env::var("LOAN_LOG_LEVEL")
            .unwrap_or_else(|_| environment.default_log_level().to_string());

        Ok(Self {
            environment,
            api: ApiConfig {
                base_url,
                endpoint,
                timeout_secs,
            },
            telemetry: TelemetryConfig { log_level },
        })
    }
}

/// Settings locating the external decision service.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: String,
    pub endpoint: String,
    pub timeout_secs: u64,
}

impl ApiConfig {
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            base_url: self.base_url.clone(),
            endpoint: self.endpoint.clone(),
            timeout_secs: self.timeout_secs,
        }
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("LOAN_API_TIMEOUT_SECS must be a whole number of seconds")]
    InvalidTimeout,
}
