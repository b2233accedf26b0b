use crate::analysis::{analyze_volume, VolumeAnalysis};
use crate::db::AppState;
use crate::plan::Plan;
use crate::scoring::{score_training_plan, PlanReport, ScoreResult};
use crate::store;

/// ---------------------------------------------------------------------------
/// Plan Analysis Commands
/// ---------------------------------------------------------------------------

/// Score the plan currently in the editor
pub async fn score_plan(state: &AppState, plan: Plan) -> Result<ScoreResult, String> {
  Ok(score_training_plan(
    &plan.days,
    plan.experience,
    &plan.focus_areas,
    &state.config.scoring,
  ))
}

/// Everything the builder view shows: score, volume table, summary, feedback
pub async fn analyze_plan(state: &AppState, plan: Plan) -> Result<PlanReport, String> {
  Ok(PlanReport::build(&plan, &state.config.scoring))
}

pub async fn get_plan_volume(state: &AppState, plan: Plan) -> Result<VolumeAnalysis, String> {
  Ok(analyze_volume(&plan.days, state.config.scoring.secondary_credit))
}

/// Report for a saved plan
pub async fn analyze_saved_plan(state: &AppState, id: i64) -> Result<PlanReport, String> {
  let stored = store::load_plan(&state.db, id)
    .await
    .map_err(|e| format!("Failed to load plan: {}", e))?;
  Ok(PlanReport::build(&stored.document.to_plan(), &state.config.scoring))
}
