//! Plan document storage
//!
//! One row per saved plan. Days and focus areas are stored as JSON text, the
//! experience level as its label, timestamps as RFC 3339 strings.

use chrono::{DateTime, SecondsFormat, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use thiserror::Error;
use tracing::{debug, info};

use crate::models::{PlanDocument, PlanListing, StoredPlan};
use crate::plan::{Day, Experience, Plan, DEFAULT_PLAN_NAME};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Failed to encode plan: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Plan not found: {0}")]
    NotFound(i64),
}

fn timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Micros, true)
}

fn parse_timestamp(raw: Option<String>) -> DateTime<Utc> {
    raw.and_then(|s| DateTime::parse_from_rfc3339(&s).ok())
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(Utc::now)
}

fn row_to_stored(row: &SqliteRow) -> Result<StoredPlan, StoreError> {
    let days_json: String = row.try_get("days_json")?;
    let focus_areas_json: String = row.try_get("focus_areas_json")?;
    let experience: String = row.try_get("experience")?;
    let training_days: i64 = row.try_get("training_days")?;

    let days: Vec<Day> = serde_json::from_str(&days_json)?;
    let focus_areas: Vec<String> = serde_json::from_str(&focus_areas_json)?;

    Ok(StoredPlan {
        id: row.try_get("id")?,
        document: PlanDocument {
            name: row.try_get("name")?,
            days,
            experience: Experience::from_label(&experience),
            focus_areas,
            training_days: training_days.clamp(0, u8::MAX as i64) as u8,
            owner_id: row.try_get("owner_id")?,
            created_at: parse_timestamp(row.try_get("created_at")?),
        },
        updated_at: parse_timestamp(row.try_get("updated_at")?),
    })
}

// ---------------------------------------------------------------------------
// Database Operations
// ---------------------------------------------------------------------------

/// Save a new plan for `owner_id` and return it with its assigned id
pub async fn create_plan(
    pool: &SqlitePool,
    owner_id: &str,
    plan: &Plan,
) -> Result<StoredPlan, StoreError> {
    let document = PlanDocument::from_plan(plan, owner_id);
    let days_json = serde_json::to_string(&document.days)?;
    let focus_areas_json = serde_json::to_string(&document.focus_areas)?;
    let now = timestamp(document.created_at);

    let result = sqlx::query(
        r#"
        INSERT INTO plans (
            owner_id, name, days_json, experience, focus_areas_json,
            training_days, created_at, updated_at
        )
        VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?7)
        "#,
    )
    .bind(&document.owner_id)
    .bind(&document.name)
    .bind(&days_json)
    .bind(document.experience.as_str())
    .bind(&focus_areas_json)
    .bind(document.training_days as i64)
    .bind(&now)
    .execute(pool)
    .await?;

    let id = result.last_insert_rowid();
    info!(plan_id = id, owner = %owner_id, "Created plan '{}'", document.name);

    Ok(StoredPlan {
        id,
        updated_at: document.created_at,
        document,
    })
}

pub async fn load_plan(pool: &SqlitePool, id: i64) -> Result<StoredPlan, StoreError> {
    let row = sqlx::query(
        r#"
        SELECT
            id, owner_id, name, days_json, experience, focus_areas_json,
            training_days, created_at, updated_at
        FROM plans
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?
    .ok_or(StoreError::NotFound(id))?;

    row_to_stored(&row)
}

/// Saved plans for one owner, newest first. Blank names list as "Untitled Plan".
pub async fn list_plans(pool: &SqlitePool, owner_id: &str) -> Result<Vec<PlanListing>, StoreError> {
    let rows = sqlx::query_as::<_, PlanListing>(
        r#"
        SELECT id, name
        FROM plans
        WHERE owner_id = ?
        ORDER BY created_at DESC, id DESC
        "#,
    )
    .bind(owner_id)
    .fetch_all(pool)
    .await?;

    debug!(owner = %owner_id, count = rows.len(), "Listed plans");

    Ok(rows
        .into_iter()
        .map(|mut listing| {
            if listing.name.trim().is_empty() {
                listing.name = DEFAULT_PLAN_NAME.to_string();
            }
            listing
        })
        .collect())
}

/// Overwrite the editable fields of a saved plan. Owner and creation time are kept.
pub async fn update_plan(pool: &SqlitePool, id: i64, plan: &Plan) -> Result<StoredPlan, StoreError> {
    let days_json = serde_json::to_string(&plan.days)?;
    let focus_areas_json = serde_json::to_string(&plan.focus_areas)?;
    let updated_at = timestamp(Utc::now());

    let result = sqlx::query(
        r#"
        UPDATE plans
        SET name = ?,
            days_json = ?,
            experience = ?,
            focus_areas_json = ?,
            training_days = ?,
            updated_at = ?
        WHERE id = ?
        "#,
    )
    .bind(&plan.name)
    .bind(&days_json)
    .bind(plan.experience.as_str())
    .bind(&focus_areas_json)
    .bind(plan.training_days as i64)
    .bind(&updated_at)
    .bind(id)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(StoreError::NotFound(id));
    }

    info!(plan_id = id, "Updated plan '{}'", plan.name);
    load_plan(pool, id).await
}

/// Rename a saved plan. Blank or unchanged names leave the row untouched and return false.
pub async fn rename_plan(pool: &SqlitePool, id: i64, new_name: &str) -> Result<bool, StoreError> {
    let new_name = new_name.trim();
    if new_name.is_empty() {
        return Ok(false);
    }

    let current = load_plan(pool, id).await?;
    if current.document.name == new_name {
        return Ok(false);
    }

    sqlx::query("UPDATE plans SET name = ?, updated_at = ? WHERE id = ?")
        .bind(new_name)
        .bind(timestamp(Utc::now()))
        .bind(id)
        .execute(pool)
        .await?;

    info!(plan_id = id, "Renamed plan '{}' -> '{}'", current.document.name, new_name);
    Ok(true)
}

pub async fn delete_plan(pool: &SqlitePool, id: i64) -> Result<(), StoreError> {
    let result = sqlx::query("DELETE FROM plans WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(StoreError::NotFound(id));
    }

    info!(plan_id = id, "Deleted plan");
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
