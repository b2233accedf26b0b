//! Built-in sample plans
//!
//! Stored compactly as exercise name + sets and hydrated through the catalog,
//! so muscle metadata always matches the catalog entry.

use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, CompactDay, CompactEntry};
use crate::plan::{Experience, Plan};

/// A sample plan before hydration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SampleTemplate {
  pub name: String,
  pub experience: Experience,
  pub focus_areas: Vec<String>,
  pub days: Vec<CompactDay>,
}

impl SampleTemplate {
  /// Hydrate into an editable plan. Training days follow the day count.
  pub fn to_plan(&self, catalog: &Catalog) -> Plan {
    let days = catalog.hydrate(&self.days);
    Plan {
      name: self.name.clone(),
      training_days: days.len() as u8,
      days,
      experience: self.experience,
      focus_areas: self.focus_areas.clone(),
    }
  }
}

type SampleDay = &'static [(&'static str, u32)];

struct SampleSource {
  name: &'static str,
  experience: Experience,
  focus_areas: &'static [&'static str],
  days: &'static [SampleDay],
}

const SAMPLES: &[SampleSource] = &[
  SampleSource {
    name: "3-Day Sample Plan",
    experience: Experience::Intermediate,
    focus_areas: &["Back", "Chest", "Shoulders"],
    days: &[
      &[
        ("Barbell Bench Press", 4),
        ("Incline Dumbbell Press", 3),
        ("Dumbbell Row", 4),
        ("Lat Pulldown", 3),
        ("Overhead Barbell Press", 3),
        ("Barbell Curl", 3),
      ],
      &[
        ("Back Squat", 4),
        ("Romanian Deadlift", 4),
        ("Bulgarian Split Squat", 3),
        ("Hip Thrust", 3),
        ("Standing Calf Raise", 4),
        ("Plank", 3),
      ],
      &[
        ("Pull-Up", 4),
        ("Dumbbell Bench Press", 3),
        ("Dumbbell Shoulder Press", 3),
        ("Lateral Raise", 3),
        ("Tricep Pushdown", 3),
        ("Hammer Curl", 3),
        ("Russian Twist", 3),
      ],
    ],
  },
  SampleSource {
    name: "4-Day Sample Plan",
    experience: Experience::Intermediate,
    focus_areas: &["Quads", "Back", "Shoulders"],
    days: &[
      &[
        ("Barbell Bench Press", 4),
        ("Incline Dumbbell Press", 3),
        ("Barbell Curl", 3),
      ],
      &[("Back Squat", 4), ("Leg Press", 3), ("Standing Calf Raise", 4)],
      &[("Pull-Up", 4), ("Dumbbell Row", 3), ("Lat Pulldown", 3)],
      &[
        ("Overhead Barbell Press", 4),
        ("Lateral Raise", 3),
        ("Plank", 3),
      ],
    ],
  },
  SampleSource {
    name: "5-Day Sample Plan",
    experience: Experience::Advanced,
    focus_areas: &["Chest", "Back", "Quads", "Shoulders"],
    days: &[
      &[("Barbell Bench Press", 4), ("Incline Dumbbell Press", 3)],
      &[("Back Squat", 4), ("Leg Press", 3)],
      &[("Pull-Up", 4), ("Dumbbell Row", 3)],
      &[("Overhead Barbell Press", 4), ("Lateral Raise", 3)],
      &[("Romanian Deadlift", 4), ("Standing Calf Raise", 3)],
    ],
  },
];

impl SampleSource {
  fn template(&self) -> SampleTemplate {
    let days = self
      .days
      .iter()
      .enumerate()
      .map(|(i, entries)| CompactDay {
        name: format!("Day {}", i + 1),
        exercises: entries
          .iter()
          .map(|&(name, sets)| CompactEntry {
            name: name.to_string(),
            sets,
          })
          .collect(),
      })
      .collect();

    SampleTemplate {
      name: self.name.to_string(),
      experience: self.experience,
      focus_areas: self.focus_areas.iter().map(|m| m.to_string()).collect(),
      days,
    }
  }
}

pub fn sample_templates() -> Vec<SampleTemplate> {
  SAMPLES.iter().map(SampleSource::template).collect()
}

/// All sample plans hydrated against the built-in catalog
pub fn sample_plans() -> Vec<Plan> {
  let catalog = Catalog::builtin();
  SAMPLES
    .iter()
    .map(|source| source.template().to_plan(catalog))
    .collect()
}

pub fn find_sample(name: &str) -> Option<Plan> {
  SAMPLES
    .iter()
    .find(|source| source.name == name)
    .map(|source| source.template().to_plan(Catalog::builtin()))
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::analysis::{analyze_volume, total_sets, SecondaryCredit};
  use crate::scoring::{plan_feedback, score_training_plan, Grade, ScoringConfig};

  #[test]
  fn test_samples_hydrate_without_drops() {
    for (template, plan) in sample_templates().iter().zip(sample_plans()) {
      assert_eq!(plan.days.len(), template.days.len());
      for (compact, day) in template.days.iter().zip(&plan.days) {
        assert_eq!(
          compact.exercises.len(),
          day.exercises.len(),
          "{} / {} lost exercises",
          plan.name,
          day.name
        );
      }
    }
  }

  #[test]
  fn test_sample_training_days_match_day_count() {
    let plans = sample_plans();
    let counts: Vec<(u8, usize)> = plans
      .iter()
      .map(|p| (p.training_days, p.days.len()))
      .collect();
    assert_eq!(counts, vec![(3, 3), (4, 4), (5, 5)]);
  }

  #[test]
  fn test_sample_totals() {
    let totals: Vec<u32> = sample_plans().iter().map(|p| total_sets(&p.days)).collect();
    assert_eq!(totals, vec![63, 41, 35]);
  }

  #[test]
  fn test_find_sample() {
    let plan = find_sample("5-Day Sample Plan").unwrap();
    assert_eq!(plan.experience, Experience::Advanced);
    assert_eq!(plan.focus_areas, vec!["Chest", "Back", "Quads", "Shoulders"]);
    assert_eq!(plan.days[4].exercises[0].primary_muscle, "Hamstrings");

    assert!(find_sample("6-Day Sample Plan").is_none());
  }

  #[test]
  fn test_three_day_sample_score() {
    let plan = find_sample("3-Day Sample Plan").unwrap();
    let result = score_training_plan(
      &plan.days,
      plan.experience,
      &plan.focus_areas,
      &ScoringConfig::default(),
    );

    // 63 sets < 70, Back 11, Chest 10, Shoulders 9
    assert_eq!(result.score, 50);
    assert_eq!(result.grade, Grade::F);
    assert_eq!(result.details[1], "Back: Volume low (11 sets, <12)");
    assert_eq!(result.details[2], "Back: Frequency good (2x/week)");

    let analysis = analyze_volume(&plan.days, SecondaryCredit::PrimaryOnly);
    let feedback = plan_feedback(&plan.days, &plan.focus_areas, &analysis);
    let day_notes: Vec<&str> = feedback
      .iter()
      .filter(|f| f.subject.starts_with("Day"))
      .map(|f| f.subject.as_str())
      .collect();
    assert_eq!(day_notes, vec!["Day 2", "Day 3"]);
  }
}
