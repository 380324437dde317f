use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Load .env file (silently ignores if missing).
pub fn load_dotenv() {
    dotenvy::dotenv().ok();
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

// ── Top-level config ──────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub organization: OrganizationConfig,
    pub rules: RulesConfig,
}

impl Config {
    /// Build config from environment variables (call `load_dotenv()` first).
    pub fn from_env() -> Self {
        Self {
            organization: OrganizationConfig::from_env(),
            rules: RulesConfig::from_env(),
        }
    }

    /// Print a summary for startup logs.
    pub fn log_summary(&self) {
        tracing::info!("Config loaded:");
        tracing::info!("  organization: timezone={}", self.organization.timezone);
        tracing::info!("  rules:        rules_dir={}", self.rules.rules_dir.display());
    }

    /// Return a view safe for API responses.
    pub fn summary(&self) -> serde_json::Value {
        serde_json::json!({
            "organization": { "timezone": self.organization.timezone },
            "rules": { "rules_dir": self.rules.rules_dir },
        })
    }
}

// ── Organization ──────────────────────────────────────────────

/// Organization-level defaults applied when evaluating schedules.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrganizationConfig {
    /// IANA timezone identifier; invalid values fall back to UTC at
    /// evaluation time.
    pub timezone: String,
}

impl OrganizationConfig {
    fn from_env() -> Self {
        Self {
            timezone: env_or("AUTOREPLY_TIMEZONE", "UTC"),
        }
    }
}

// ── Rules ─────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RulesConfig {
    /// Directory the snapshot loader scans for rule YAML files.
    pub rules_dir: PathBuf,
}

impl RulesConfig {
    fn from_env() -> Self {
        Self {
            rules_dir: PathBuf::from(env_or("AUTOREPLY_RULES_DIR", "data/rules")),
        }
    }
}
