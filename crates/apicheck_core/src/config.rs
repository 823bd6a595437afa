//! Configuration for a harness run.
//!
//! Every section falls back to the built-in defaults, so an empty or missing
//! file yields the standard run against `http://localhost:8080/api`.

use crate::error::{CheckError, Result};
use crate::types::{Credentials, QuestionSpec};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Comprehensive configuration for one harness run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Target API configuration.
    #[serde(default)]
    pub api: ApiConfig,

    /// Run pacing configuration.
    #[serde(default)]
    pub run: RunConfig,

    /// Accounts registered and logged in by the harness.
    #[serde(default)]
    pub accounts: AccountsConfig,

    /// Replacement profile sent by the profile update check.
    #[serde(default)]
    pub profile: ProfileConfig,

    /// Questions created by the admin and answered by the user.
    #[serde(default = "default_questions")]
    pub questions: Vec<QuestionSpec>,
}

impl Config {
    /// Load configuration from a file, or the defaults if it does not exist.
    pub fn load(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = fs::read_to_string(path)
                .map_err(|e| CheckError::ConfigError(format!("failed to read config: {}", e)))?;
            let config: Config = toml::from_str(&content)
                .map_err(|e| CheckError::ConfigError(format!("failed to parse config: {}", e)))?;
            config.validate()?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    /// Save configuration to a file.
    pub fn save(&self, path: &Path) -> Result<()> {
        fs::write(path, self.to_toml()?)
            .map_err(|e| CheckError::ConfigError(format!("failed to write config: {}", e)))?;
        Ok(())
    }

    /// Render the configuration as pretty TOML.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| CheckError::ConfigError(format!("failed to serialize config: {}", e)))
    }

    /// Reject values the harness cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.api.base_url.trim().is_empty() {
            return Err(CheckError::ConfigError("api.base_url is empty".to_string()));
        }
        if self.api.request_timeout_secs == 0 {
            return Err(CheckError::ConfigError(
                "api.request_timeout_secs must be at least 1".to_string(),
            ));
        }
        for spec in &self.questions {
            if spec.min > spec.max {
                return Err(CheckError::ConfigError(format!(
                    "question {:?} has min {} greater than max {}",
                    spec.question, spec.min, spec.max
                )));
            }
            if let Some(answer) = &spec.answer {
                let in_range = answer
                    .trim()
                    .parse::<i64>()
                    .is_ok_and(|value| (spec.min..=spec.max).contains(&value));
                if !in_range {
                    return Err(CheckError::ConfigError(format!(
                        "question {:?} has answer {:?} outside {}..={}",
                        spec.question, answer, spec.min, spec.max
                    )));
                }
            }
        }
        Ok(())
    }
}

/// Target API configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL every endpoint path is appended to.
    pub base_url: String,

    /// Per-request timeout in seconds (default: 30).
    pub request_timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080/api".to_string(),
            request_timeout_secs: 30,
        }
    }
}

impl ApiConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

/// Run pacing configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Pause between stages in milliseconds, to stay under the API's rate
    /// limit (default: 500).
    pub stage_delay_ms: u64,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self { stage_delay_ms: 500 }
    }
}

impl RunConfig {
    pub fn stage_delay(&self) -> Duration {
        Duration::from_millis(self.stage_delay_ms)
    }
}

/// The admin and regular-user accounts.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AccountsConfig {
    pub admin: Credentials,
    pub user: Credentials,
}

impl Default for AccountsConfig {
    fn default() -> Self {
        Self {
            admin: Credentials::new("admin@example.com", "admin123!@#", "Admin User"),
            user: Credentials::new("user@example.com", "user123!@#", "Normal User"),
        }
    }
}

/// Profile replacement sent by `PUT /profile`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileConfig {
    pub name: String,
    pub picture: String,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            name: "Updated Admin Name".to_string(),
            picture: "https://example.com/admin.jpg".to_string(),
        }
    }
}

fn default_questions() -> Vec<QuestionSpec> {
    vec![
        QuestionSpec::scale("How satisfied are you with our service?", 1, 5, "4"),
        QuestionSpec::scale("Do you feel burned out?", 1, 10, "2"),
    ]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            run: RunConfig::default(),
            accounts: AccountsConfig::default(),
            profile: ProfileConfig::default(),
            questions: default_questions(),
        }
    }
}
