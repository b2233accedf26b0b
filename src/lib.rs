pub mod analysis;
pub mod catalog;
pub mod commands;
pub mod config;
pub mod db;
pub mod logging;
pub mod models;
pub mod plan;
pub mod samples;
pub mod scoring;
pub mod store;

#[cfg(test)]
pub(crate) mod test_utils;

pub use analysis::{analyze_volume, SecondaryCredit, VolumeAnalysis};
pub use catalog::{Catalog, Exercise};
pub use plan::{Day, Experience, Plan, PlannedExercise};
pub use scoring::{score_training_plan, Grade, PlanReport, ScoreResult, ScoringConfig};

use config::AppConfig;
use db::AppState;
use tracing::{error, info};

/// Load configuration, start logging, open the plan database
pub async fn init() -> Result<AppState, Box<dyn std::error::Error>> {
  // Load environment variables from .env file
  dotenvy::dotenv().ok();

  let config = AppConfig::from_env()?;
  logging::init(&config.log_filter);
  info!(
    secondary_credit = %config.scoring.secondary_credit,
    "Starting plan builder"
  );

  let pool = match db::initialize_db(&config.database_url).await {
    Ok(pool) => pool,
    Err(e) => {
      error!("Failed to initialize database: {}", e);
      return Err(e.into());
    }
  };
  info!("Database ready");

  Ok(AppState { db: pool, config })
}
