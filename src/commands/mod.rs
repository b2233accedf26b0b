pub mod analysis;
pub mod plans;

use crate::catalog::{Catalog, CategoryGroup};
use crate::plan::Plan;
use crate::samples::{find_sample, sample_plans};

/// Built-in sample plans, hydrated and ready to edit
pub async fn get_sample_plans() -> Result<Vec<Plan>, String> {
  Ok(sample_plans())
}

pub async fn load_sample_plan(name: String) -> Result<Plan, String> {
  find_sample(&name).ok_or_else(|| format!("Sample plan not found: {}", name))
}

/// Exercise picker search, grouped by category
pub async fn search_exercises(term: String) -> Result<Vec<CategoryGroup>, String> {
  Ok(Catalog::builtin().grouped_search(&term))
}

#[cfg(test)]
mod tests {
  use super::*;

  #[tokio::test]
  async fn test_get_sample_plans() {
    let plans = get_sample_plans().await.unwrap();
    let names: Vec<&str> = plans.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(
      names,
      vec!["3-Day Sample Plan", "4-Day Sample Plan", "5-Day Sample Plan"]
    );
  }

  #[tokio::test]
  async fn test_load_sample_plan_unknown() {
    let err = load_sample_plan("Full Body".to_string()).await.unwrap_err();
    assert_eq!(err, "Sample plan not found: Full Body");
  }

  #[tokio::test]
  async fn test_search_exercises_empty_term_returns_everything() {
    let groups = search_exercises(String::new()).await.unwrap();
    let count: usize = groups.iter().map(|g| g.exercises.len()).sum();
    assert_eq!(count, Catalog::builtin().len());
  }
}
