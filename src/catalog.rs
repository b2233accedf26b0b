//! Exercise catalog
//!
//! Read-only reference data keyed by exercise name. Plans only store the name
//! and the muscle metadata copied at selection time, so the catalog is also
//! used to hydrate compact `{name, sets}` plans into full planned exercises.

use once_cell::sync::Lazy;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;
use thiserror::Error;
use tracing::debug;

use crate::plan::{Day, PlannedExercise};

/// ---------------------------------------------------------------------------
/// Types
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
  pub name: String,
  pub primary_muscle: String,
  #[serde(default, deserialize_with = "empty_as_none")]
  pub secondary_muscle: Option<String>,
  #[serde(default)]
  pub category: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub equipment: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub movement_type: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub mechanics: Option<String>,
}

#[derive(Debug, Error)]
pub enum CatalogError {
  #[error("Exercise not found: {0}")]
  NotFound(String),

  #[error("Duplicate exercise name: {0}")]
  DuplicateName(String),

  #[error("Failed to parse catalog: {0}")]
  Parse(#[from] serde_json::Error),
}

/// Exercises sharing a category, in catalog order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryGroup {
  pub category: String,
  pub exercises: Vec<Exercise>,
}

/// Compact plan entry: just the catalog name and a set count
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompactEntry {
  pub name: String,
  pub sets: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompactDay {
  pub name: String,
  #[serde(default)]
  pub exercises: Vec<CompactEntry>,
}

/// Treat `""` the same as a missing value
pub(crate) fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
  D: Deserializer<'de>,
{
  let value = Option::<String>::deserialize(deserializer)?;
  Ok(value.filter(|s| !s.trim().is_empty()))
}

/// ---------------------------------------------------------------------------
/// Catalog
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default)]
pub struct Catalog {
  exercises: Vec<Exercise>,
  by_name: HashMap<String, usize>,
}

static BUILTIN_CATALOG: Lazy<Catalog> = Lazy::new(|| {
  Catalog::from_entries(BUILTIN_EXERCISES.iter().map(
    |&(name, primary, secondary, category, equipment, mechanics)| Exercise {
      name: name.to_string(),
      primary_muscle: primary.to_string(),
      secondary_muscle: (!secondary.is_empty()).then(|| secondary.to_string()),
      category: category.to_string(),
      equipment: Some(equipment.to_string()),
      movement_type: None,
      mechanics: Some(mechanics.to_string()),
    },
  ))
});

impl Catalog {
  /// Build a catalog, rejecting duplicate names
  pub fn new(exercises: Vec<Exercise>) -> Result<Self, CatalogError> {
    let mut by_name = HashMap::with_capacity(exercises.len());
    for (idx, exercise) in exercises.iter().enumerate() {
      if by_name.insert(exercise.name.clone(), idx).is_some() {
        return Err(CatalogError::DuplicateName(exercise.name.clone()));
      }
    }
    Ok(Self { exercises, by_name })
  }

  /// Load a catalog table from a JSON array of exercises
  pub fn from_json(json: &str) -> Result<Self, CatalogError> {
    let exercises: Vec<Exercise> = serde_json::from_str(json)?;
    Self::new(exercises)
  }

  /// The built-in table shipped with the app
  pub fn builtin() -> &'static Catalog {
    &BUILTIN_CATALOG
  }

  fn from_entries(entries: impl Iterator<Item = Exercise>) -> Self {
    let mut catalog = Self::default();
    for exercise in entries {
      if !catalog.by_name.contains_key(&exercise.name) {
        catalog
          .by_name
          .insert(exercise.name.clone(), catalog.exercises.len());
        catalog.exercises.push(exercise);
      }
    }
    catalog
  }

  pub fn len(&self) -> usize {
    self.exercises.len()
  }

  pub fn is_empty(&self) -> bool {
    self.exercises.is_empty()
  }

  pub fn all(&self) -> &[Exercise] {
    &self.exercises
  }

  /// Exact, case-sensitive lookup by name
  pub fn find_by_name(&self, name: &str) -> Result<&Exercise, CatalogError> {
    self
      .by_name
      .get(name)
      .map(|&idx| &self.exercises[idx])
      .ok_or_else(|| CatalogError::NotFound(name.to_string()))
  }

  /// Case-insensitive substring match on name, category or primary muscle
  pub fn search(&self, term: &str) -> Vec<&Exercise> {
    let needle = term.trim().to_lowercase();
    self
      .exercises
      .iter()
      .filter(|ex| {
        needle.is_empty()
          || ex.name.to_lowercase().contains(&needle)
          || ex.category.to_lowercase().contains(&needle)
          || ex.primary_muscle.to_lowercase().contains(&needle)
      })
      .collect()
  }

  /// Search results grouped by category, categories in first-seen order
  pub fn grouped_search(&self, term: &str) -> Vec<CategoryGroup> {
    let mut groups: Vec<CategoryGroup> = Vec::new();
    for exercise in self.search(term) {
      match groups.iter_mut().find(|g| g.category == exercise.category) {
        Some(group) => group.exercises.push(exercise.clone()),
        None => groups.push(CategoryGroup {
          category: exercise.category.clone(),
          exercises: vec![exercise.clone()],
        }),
      }
    }
    groups
  }

  /// Hydrate one compact day. Names missing from the catalog are dropped.
  pub fn hydrate_day(&self, day: &CompactDay) -> Day {
    let exercises = day
      .exercises
      .iter()
      .filter_map(|entry| match self.find_by_name(&entry.name) {
        Ok(exercise) => Some(PlannedExercise::from_exercise(exercise, entry.sets)),
        Err(e) => {
          debug!(day = %day.name, "Dropping exercise during hydration: {}", e);
          None
        }
      })
      .collect();

    Day {
      name: day.name.clone(),
      exercises,
    }
  }

  pub fn hydrate(&self, days: &[CompactDay]) -> Vec<Day> {
    days.iter().map(|day| self.hydrate_day(day)).collect()
  }
}

/// ---------------------------------------------------------------------------
/// Built-in table: (name, primary, secondary, category, equipment, mechanics)
/// ---------------------------------------------------------------------------

type BuiltinRow = (
  &'static str,
  &'static str,
  &'static str,
  &'static str,
  &'static str,
  &'static str,
);

const BUILTIN_EXERCISES: &[BuiltinRow] = &[
  // Chest
  ("Barbell Bench Press", "Chest", "Triceps", "Chest", "barbell", "compound"),
  ("Dumbbell Bench Press", "Chest", "Triceps", "Chest", "dumbbell", "compound"),
  ("Incline Dumbbell Press", "Chest", "Shoulders", "Chest", "dumbbell", "compound"),
  ("Decline Bench Press", "Chest", "Triceps", "Chest", "barbell", "compound"),
  ("Machine Chest Press", "Chest", "Triceps", "Chest", "machine", "compound"),
  ("Push-Up", "Chest", "Triceps", "Chest", "bodyweight", "compound"),
  ("Wide Push-Up", "Chest", "Shoulders", "Chest", "bodyweight", "compound"),
  ("Pec Deck / Chest Fly", "Chest", "", "Chest", "machine", "isolation"),
  ("Cable Chest Fly", "Chest", "", "Chest", "cable", "isolation"),
  // Back
  ("Pull-Up", "Back", "Biceps", "Back", "bodyweight", "compound"),
  ("Chin-Up", "Back", "Biceps", "Back", "bodyweight", "compound"),
  ("Lat Pulldown", "Back", "Biceps", "Back", "cable", "compound"),
  ("Barbell Row", "Back", "Biceps", "Back", "barbell", "compound"),
  ("Dumbbell Row", "Back", "Biceps", "Back", "dumbbell", "compound"),
  ("Seated Cable Row", "Back", "Biceps", "Back", "cable", "compound"),
  ("T-Bar Row", "Back", "Shoulders", "Back", "barbell", "compound"),
  ("Machine Row", "Back", "", "Back", "machine", "compound"),
  ("Face Pull", "Shoulders", "Back", "Back", "cable", "isolation"),
  // Shoulders
  ("Overhead Barbell Press", "Shoulders", "Triceps", "Shoulders", "barbell", "compound"),
  ("Dumbbell Shoulder Press", "Shoulders", "Triceps", "Shoulders", "dumbbell", "compound"),
  ("Arnold Press", "Shoulders", "Triceps", "Shoulders", "dumbbell", "compound"),
  ("Lateral Raise", "Shoulders", "", "Shoulders", "dumbbell", "isolation"),
  ("Front Raise", "Shoulders", "", "Shoulders", "dumbbell", "isolation"),
  ("Rear Delt Fly", "Shoulders", "", "Shoulders", "dumbbell", "isolation"),
  ("Upright Row", "Shoulders", "Back", "Shoulders", "barbell", "compound"),
  ("Cable Lateral Raise", "Shoulders", "", "Shoulders", "cable", "isolation"),
  // Biceps
  ("Barbell Curl", "Biceps", "", "Biceps", "barbell", "isolation"),
  ("Dumbbell Curl", "Biceps", "", "Biceps", "dumbbell", "isolation"),
  ("Hammer Curl", "Biceps", "", "Biceps", "dumbbell", "isolation"),
  ("Preacher Curl", "Biceps", "", "Biceps", "barbell", "isolation"),
  ("Cable Curl", "Biceps", "", "Biceps", "cable", "isolation"),
  ("Concentration Curl", "Biceps", "", "Biceps", "dumbbell", "isolation"),
  ("Incline Dumbbell Curl", "Biceps", "", "Biceps", "dumbbell", "isolation"),
  // Triceps
  ("Tricep Pushdown", "Triceps", "", "Triceps", "cable", "isolation"),
  ("Overhead Tricep Extension", "Triceps", "", "Triceps", "dumbbell", "isolation"),
  ("Skullcrusher", "Triceps", "", "Triceps", "barbell", "isolation"),
  ("Dips", "Triceps", "Chest", "Triceps", "bodyweight", "compound"),
  ("Close-Grip Bench Press", "Triceps", "Chest", "Triceps", "barbell", "compound"),
  ("Dumbbell Kickback", "Triceps", "", "Triceps", "dumbbell", "isolation"),
  ("Cable Overhead Extension", "Triceps", "", "Triceps", "cable", "isolation"),
  // Quads
  ("Back Squat", "Quads", "Glutes", "Quads", "barbell", "compound"),
  ("Front Squat", "Quads", "Abs", "Quads", "barbell", "compound"),
  ("Bulgarian Split Squat", "Quads", "Glutes", "Quads", "dumbbell", "compound"),
  ("Walking Lunge", "Quads", "Glutes", "Quads", "dumbbell", "compound"),
  ("Step-Up", "Quads", "Glutes", "Quads", "dumbbell", "compound"),
  ("Leg Press", "Quads", "Glutes", "Quads", "machine", "compound"),
  ("Leg Extension", "Quads", "", "Quads", "machine", "isolation"),
  // Hamstrings
  ("Romanian Deadlift", "Hamstrings", "Glutes", "Hamstrings", "barbell", "compound"),
  ("Stiff-Leg Deadlift", "Hamstrings", "Glutes", "Hamstrings", "barbell", "compound"),
  ("Seated Leg Curl", "Hamstrings", "", "Hamstrings", "machine", "isolation"),
  ("Lying Leg Curl", "Hamstrings", "", "Hamstrings", "machine", "isolation"),
  ("Nordic Curl", "Hamstrings", "", "Hamstrings", "bodyweight", "isolation"),
  ("Glute-Ham Raise", "Hamstrings", "Glutes", "Hamstrings", "bodyweight", "compound"),
  // Glutes
  ("Hip Thrust", "Glutes", "Hamstrings", "Glutes", "barbell", "compound"),
  ("Barbell Glute Bridge", "Glutes", "Hamstrings", "Glutes", "barbell", "compound"),
  ("Cable Kickback", "Glutes", "", "Glutes", "cable", "isolation"),
  ("Frog Pump", "Glutes", "", "Glutes", "bodyweight", "isolation"),
  ("Banded Glute Bridge", "Glutes", "", "Glutes", "band", "isolation"),
  // Calves
  ("Standing Calf Raise", "Calves", "", "Calves", "machine", "isolation"),
  ("Seated Calf Raise", "Calves", "", "Calves", "machine", "isolation"),
  ("Donkey Calf Raise", "Calves", "", "Calves", "machine", "isolation"),
  ("Leg Press Calf Raise", "Calves", "", "Calves", "machine", "isolation"),
  // Abs
  ("Plank", "Abs", "", "Abs", "bodyweight", "isolation"),
  ("Hanging Leg Raise", "Abs", "", "Abs", "bodyweight", "isolation"),
  ("Cable Crunch", "Abs", "", "Abs", "cable", "isolation"),
  ("Sit-Up", "Abs", "", "Abs", "bodyweight", "isolation"),
  ("Russian Twist", "Abs", "", "Abs", "bodyweight", "isolation"),
  ("Side Plank", "Abs", "", "Abs", "bodyweight", "isolation"),
  ("Ab Wheel Rollout", "Abs", "", "Abs", "bodyweight", "isolation"),
];

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
  use super::*;
  use crate::analysis::{analyze_volume, SecondaryCredit};
  use crate::test_utils::{mock_day, mock_planned};

  #[test]
  fn test_builtin_names_are_unique() {
    let catalog = Catalog::builtin();
    assert_eq!(catalog.len(), BUILTIN_EXERCISES.len());
    assert!(Catalog::new(catalog.all().to_vec()).is_ok());
  }

  #[test]
  fn test_find_by_name_is_exact() {
    let catalog = Catalog::builtin();
    let bench = catalog.find_by_name("Barbell Bench Press").unwrap();
    assert_eq!(bench.primary_muscle, "Chest");
    assert_eq!(bench.secondary_muscle.as_deref(), Some("Triceps"));

    let fly = catalog.find_by_name("Cable Chest Fly").unwrap();
    assert_eq!(fly.secondary_muscle, None);

    let miss = catalog.find_by_name("barbell bench press");
    assert!(matches!(miss, Err(CatalogError::NotFound(name)) if name == "barbell bench press"));
  }

  #[test]
  fn test_new_rejects_duplicates() {
    let bench = Catalog::builtin().find_by_name("Push-Up").unwrap().clone();
    let result = Catalog::new(vec![bench.clone(), bench]);
    assert!(matches!(result, Err(CatalogError::DuplicateName(_))));
  }

  #[test]
  fn test_from_json() {
    let json = r#"[
      {"name": "Wrist Curl", "primaryMuscle": "Forearms", "secondaryMuscle": "", "category": "Arms", "equipment": "dumbbell"},
      {"name": "Shrug", "primaryMuscle": "Traps", "category": "Back"}
    ]"#;
    let catalog = Catalog::from_json(json).unwrap();
    assert_eq!(catalog.len(), 2);
    let curl = catalog.find_by_name("Wrist Curl").unwrap();
    assert_eq!(curl.secondary_muscle, None);
    assert_eq!(curl.equipment.as_deref(), Some("dumbbell"));

    assert!(matches!(
      Catalog::from_json("{not json"),
      Err(CatalogError::Parse(_))
    ));
  }

  #[test]
  fn test_search_matches_name_category_and_muscle() {
    let catalog = Catalog::builtin();

    let curls = catalog.search("CURL");
    assert!(curls.iter().any(|e| e.name == "Hammer Curl"));
    assert!(curls.iter().any(|e| e.name == "Nordic Curl"));

    let glutes = catalog.search("glutes");
    assert!(glutes.iter().all(|e| e.category == "Glutes" || e.primary_muscle == "Glutes"));
    assert!(!glutes.is_empty());

    assert_eq!(catalog.search("").len(), catalog.len());
    assert!(catalog.search("zercher").is_empty());
  }

  #[test]
  fn test_grouped_search_keeps_category_order() {
    let groups = Catalog::builtin().grouped_search("press");
    let categories: Vec<&str> = groups.iter().map(|g| g.category.as_str()).collect();
    assert_eq!(categories, vec!["Chest", "Shoulders", "Triceps", "Quads", "Calves"]);
    assert_eq!(groups[3].exercises[0].name, "Leg Press");
  }

  #[test]
  fn test_hydrate_drops_unknown_names() {
    let compact = vec![CompactDay {
      name: "Day 1".to_string(),
      exercises: vec![
        CompactEntry { name: "Back Squat".to_string(), sets: 4 },
        CompactEntry { name: "Zercher Squat".to_string(), sets: 3 },
        CompactEntry { name: "Hip Thrust".to_string(), sets: 3 },
      ],
    }];

    let days = Catalog::builtin().hydrate(&compact);
    assert_eq!(days.len(), 1);
    let names: Vec<&str> = days[0].exercises.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["Back Squat", "Hip Thrust"]);
  }

  #[test]
  fn test_hydrated_volume_matches_direct_construction() {
    let compact = vec![
      CompactDay {
        name: "Day 1".to_string(),
        exercises: vec![
          CompactEntry { name: "Barbell Bench Press".to_string(), sets: 4 },
          CompactEntry { name: "Pull-Up".to_string(), sets: 3 },
        ],
      },
      CompactDay {
        name: "Day 2".to_string(),
        exercises: vec![CompactEntry { name: "Romanian Deadlift".to_string(), sets: 5 }],
      },
    ];
    let direct = vec![
      mock_day(
        "Day 1",
        vec![
          mock_planned("Barbell Bench Press", "Chest", Some("Triceps"), 4),
          mock_planned("Pull-Up", "Back", Some("Biceps"), 3),
        ],
      ),
      mock_day(
        "Day 2",
        vec![mock_planned("Romanian Deadlift", "Hamstrings", Some("Glutes"), 5)],
      ),
    ];

    let hydrated = Catalog::builtin().hydrate(&compact);
    for credit in [SecondaryCredit::Full, SecondaryCredit::PrimaryOnly] {
      assert_eq!(analyze_volume(&hydrated, credit), analyze_volume(&direct, credit));
    }
  }
}
