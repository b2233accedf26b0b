use std::env;
use thiserror::Error;

use crate::analysis::SecondaryCredit;
use crate::scoring::ScoringConfig;

pub const DATABASE_URL_VAR: &str = "PLAN_BUILDER_DATABASE_URL";
pub const SECONDARY_CREDIT_VAR: &str = "PLAN_BUILDER_SECONDARY_CREDIT";
pub const LOG_VAR: &str = "PLAN_BUILDER_LOG";

pub const DEFAULT_DATABASE_URL: &str = "sqlite://plan-builder.db?mode=rwc";
pub const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Error)]
pub enum ConfigError {
  #[error("Invalid value for {var}: {message}")]
  InvalidValue { var: String, message: String },
}

/// Runtime configuration, read once at startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
  pub database_url: String,
  pub scoring: ScoringConfig,
  pub log_filter: String,
}

impl Default for AppConfig {
  fn default() -> Self {
    Self {
      database_url: DEFAULT_DATABASE_URL.to_string(),
      scoring: ScoringConfig::default(),
      log_filter: DEFAULT_LOG_FILTER.to_string(),
    }
  }
}

impl AppConfig {
  /// Read from the process environment. Unset or blank values fall back to defaults.
  pub fn from_env() -> Result<Self, ConfigError> {
    let defaults = Self::default();

    let secondary_credit = match non_blank(SECONDARY_CREDIT_VAR) {
      Some(raw) => raw
        .parse::<SecondaryCredit>()
        .map_err(|message| ConfigError::InvalidValue {
          var: SECONDARY_CREDIT_VAR.into(),
          message,
        })?,
      None => defaults.scoring.secondary_credit,
    };

    Ok(Self {
      database_url: non_blank(DATABASE_URL_VAR).unwrap_or(defaults.database_url),
      scoring: ScoringConfig { secondary_credit },
      log_filter: non_blank(LOG_VAR).unwrap_or(defaults.log_filter),
    })
  }
}

fn non_blank(var: &str) -> Option<String> {
  env::var(var)
    .ok()
    .map(|v| v.trim().to_string())
    .filter(|v| !v.is_empty())
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------
