//! Saved plan commands

use tracing::warn;

use crate::db::AppState;
use crate::models::{PlanListing, StoredPlan};
use crate::plan::Plan;
use crate::store;

pub async fn list_plans(state: &AppState, owner_id: String) -> Result<Vec<PlanListing>, String> {
  store::list_plans(&state.db, &owner_id)
    .await
    .map_err(|e| format!("Failed to list plans: {}", e))
}

pub async fn get_plan(state: &AppState, id: i64) -> Result<StoredPlan, String> {
  store::load_plan(&state.db, id)
    .await
    .map_err(|e| format!("Failed to load plan: {}", e))
}

/// Save the editor's plan as a new document owned by `owner_id`
pub async fn save_new_plan(
  state: &AppState,
  owner_id: String,
  plan: Plan,
) -> Result<StoredPlan, String> {
  if owner_id.trim().is_empty() {
    warn!("Refusing to save plan without an owner");
    return Err("Not signed in".to_string());
  }
  store::create_plan(&state.db, &owner_id, &plan)
    .await
    .map_err(|e| format!("Failed to save plan: {}", e))
}

pub async fn save_plan(state: &AppState, id: i64, plan: Plan) -> Result<StoredPlan, String> {
  store::update_plan(&state.db, id, &plan)
    .await
    .map_err(|e| format!("Failed to save plan: {}", e))
}

/// Returns false when the name was blank or unchanged
pub async fn rename_plan(state: &AppState, id: i64, name: String) -> Result<bool, String> {
  store::rename_plan(&state.db, id, &name)
    .await
    .map_err(|e| format!("Failed to rename plan: {}", e))
}

pub async fn delete_plan(state: &AppState, id: i64) -> Result<(), String> {
  store::delete_plan(&state.db, id)
    .await
    .map_err(|e| format!("Failed to delete plan: {}", e))
}
