// src/config.rs
use serde::{Deserialize, Serialize};
use std::{env, path::PathBuf};
use thiserror::Error;

/// Switches read by the publish authorization gate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublishingSettings {
    /// When false every item may be published.
    pub check_security: bool,
    /// When false deletions are published without checking the target item.
    pub require_target_delete_right: bool,
}

impl Default for PublishingSettings {
    fn default() -> Self {
        Self {
            check_security: false,
            require_target_delete_right: true,
        }
    }
}

impl PublishingSettings {
    pub fn enforced() -> Self {
        Self {
            check_security: true,
            ..Self::default()
        }
    }

    pub fn with_require_target_delete_right(mut self, enabled: bool) -> Self {
        self.require_target_delete_right = enabled;
        self
    }
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    publishing: PublishingSettings,
    plan_path: PathBuf,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_plan_path() -> PathBuf {
    PathBuf::from("demos/plan.json")
}

pub fn parse_flag(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(ConfigError::Invalid(format!(
            "{key} must be a boolean, got '{other}'"
        ))),
    }
}

fn flag_from_env(key: &'static str, default: bool) -> Result<bool, ConfigError> {
    match env::var(key) {
        Ok(value) => parse_flag(key, &value),
        Err(env::VarError::NotPresent) => Ok(default),
        Err(env::VarError::NotUnicode(_)) => {
            Err(ConfigError::Invalid(format!("{key} is not valid unicode")))
        }
    }
}

impl AppConfig {
    /// Build configuration from environment variables, falling back to the
    /// publishing defaults for anything unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Allow dotenv files to populate env vars when present.
        dotenvy::dotenv().ok();
        Self::from_process_env()
    }

    /// Same as [`AppConfig::from_env`] without reading a `.env` file.
    pub fn from_process_env() -> Result<Self, ConfigError> {
        let defaults = PublishingSettings::default();
        let publishing = PublishingSettings {
            check_security: flag_from_env("PUBLISHING_CHECK_SECURITY", defaults.check_security)?,
            require_target_delete_right: flag_from_env(
                "PUBLISHING_REQUIRE_TARGET_DELETE_RIGHT",
                defaults.require_target_delete_right,
            )?,
        };

        let plan_path = env::var("PUBLISH_PLAN_PATH")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .map_or_else(default_plan_path, PathBuf::from);

        Ok(Self {
            publishing,
            plan_path,
        })
    }

    pub fn publishing(&self) -> PublishingSettings {
        self.publishing
    }

    pub fn plan_path(&self) -> &PathBuf {
        &self.plan_path
    }

    /// Override the plan path, e.g. from the first command-line argument.
    pub fn with_plan_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.plan_path = path.into();
        self
    }
}
