//! Test utilities and helpers for unit testing
//!
//! This module provides common test infrastructure including:
//! - Database setup/teardown
//! - Plan seeding
//! - Mock data factories

use sqlx::SqlitePool;

use crate::config::AppConfig;
use crate::db::AppState;
use crate::plan::{Day, Experience, Plan, PlannedExercise};
use crate::store::create_plan;

/// ---------------------------------------------------------------------------
/// Database Test Utilities
/// ---------------------------------------------------------------------------

/// Create an in-memory SQLite database for testing
/// Runs all migrations and returns a ready-to-use pool
///
/// Uses max_connections(1) to prevent multiple pool connections from creating
/// isolated in-memory databases, which would cause intermittent test failures
pub async fn setup_test_db() -> SqlitePool {
  let pool = sqlx::sqlite::SqlitePoolOptions::new()
    .max_connections(1)
    .connect("sqlite::memory:")
    .await
    .expect("Failed to create in-memory database");

  sqlx::migrate!("./migrations")
    .run(&pool)
    .await
    .expect("Failed to run migrations");

  pool
}

/// Close a test database pool
pub async fn teardown_test_db(pool: SqlitePool) {
  pool.close().await;
}

/// App state over a fresh test database with default config
pub async fn test_state() -> AppState {
  AppState {
    db: setup_test_db().await,
    config: AppConfig::default(),
  }
}

/// Seed `count` plans named "Plan 1".."Plan n" for one owner
/// Returns the ids in insertion order
pub async fn seed_test_plans(pool: &SqlitePool, owner_id: &str, count: usize) -> Vec<i64> {
  let mut ids = Vec::with_capacity(count);
  for i in 0..count {
    let plan = Plan {
      name: format!("Plan {}", i + 1),
      ..mock_plan()
    };
    let stored = create_plan(pool, owner_id, &plan)
      .await
      .expect("Failed to seed plan");
    ids.push(stored.id);
  }
  ids
}

/// ---------------------------------------------------------------------------
/// Mock Data Factories
/// ---------------------------------------------------------------------------

/// Planned exercise whose category matches its primary muscle
pub fn mock_planned(name: &str, primary: &str, secondary: Option<&str>, sets: u32) -> PlannedExercise {
  PlannedExercise {
    name: name.to_string(),
    primary_muscle: primary.to_string(),
    secondary_muscle: secondary.map(str::to_string),
    category: primary.to_string(),
    sets,
  }
}

pub fn mock_day(name: &str, exercises: Vec<PlannedExercise>) -> Day {
  Day {
    name: name.to_string(),
    exercises,
  }
}

/// Small two-day upper/lower plan
pub fn mock_plan() -> Plan {
  Plan {
    name: "Upper Lower".to_string(),
    days: vec![
      mock_day(
        "Day 1",
        vec![
          mock_planned("Barbell Bench Press", "Chest", Some("Triceps"), 4),
          mock_planned("Dumbbell Row", "Back", Some("Biceps"), 4),
        ],
      ),
      mock_day(
        "Day 2",
        vec![
          mock_planned("Back Squat", "Quads", Some("Glutes"), 4),
          mock_planned("Romanian Deadlift", "Hamstrings", Some("Glutes"), 3),
        ],
      ),
    ],
    experience: Experience::Beginner,
    focus_areas: vec!["Back".to_string(), "Quads".to_string()],
    training_days: 2,
  }
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
  use super::*;
  use crate::analysis::total_sets;

  #[tokio::test]
  async fn test_setup_db_creates_schema() {
    let pool = setup_test_db().await;

    let tables: Vec<String> =
      sqlx::query_scalar("SELECT name FROM sqlite_master WHERE type='table' AND name='plans'")
        .fetch_all(&pool)
        .await
        .unwrap();
    assert_eq!(tables, vec!["plans".to_string()]);

    teardown_test_db(pool).await;
  }

  #[tokio::test]
  async fn test_seed_plans_returns_correct_count() {
    let pool = setup_test_db().await;

    let ids = seed_test_plans(&pool, "athlete-1", 4).await;
    assert_eq!(ids.len(), 4);

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM plans WHERE owner_id = 'athlete-1'")
      .fetch_one(&pool)
      .await
      .unwrap();
    assert_eq!(count, 4);

    teardown_test_db(pool).await;
  }

  #[test]
  fn test_mock_factories_create_valid_data() {
    let exercise = mock_planned("Plank", "Abs", None, 3);
    assert_eq!(exercise.category, "Abs");
    assert!(exercise.secondary_muscle.is_none());

    let plan = mock_plan();
    assert_eq!(plan.days.len(), plan.training_days as usize);
    assert_eq!(total_sets(&plan.days), 15);
  }
}
