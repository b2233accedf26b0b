use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::plan::{Day, Experience, Plan};

/// Saved plan as the UI reads and writes it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanDocument {
  pub name: String,
  pub days: Vec<Day>,
  pub experience: Experience,
  pub focus_areas: Vec<String>,
  pub training_days: u8,
  pub owner_id: String,
  pub created_at: DateTime<Utc>,
}

impl PlanDocument {
  pub fn from_plan(plan: &Plan, owner_id: &str) -> Self {
    Self {
      name: plan.name.clone(),
      days: plan.days.clone(),
      experience: plan.experience,
      focus_areas: plan.focus_areas.clone(),
      training_days: plan.training_days,
      owner_id: owner_id.to_string(),
      created_at: Utc::now(),
    }
  }

  pub fn to_plan(&self) -> Plan {
    Plan {
      name: self.name.clone(),
      days: self.days.clone(),
      experience: self.experience,
      focus_areas: self.focus_areas.clone(),
      training_days: self.training_days,
    }
  }
}

/// A document together with its store-assigned id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredPlan {
  pub id: i64,
  #[serde(flatten)]
  pub document: PlanDocument,
  pub updated_at: DateTime<Utc>,
}

/// Row in the saved-plans list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct PlanListing {
  pub id: i64,
  pub name: String,
}
