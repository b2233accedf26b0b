//! Deterministic volume analysis for a weekly plan
//!
//! Aggregates per-muscle set volume and weekly frequency from the plan's days.
//! Everything here is pure: no I/O, no logging, same input gives same output.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use crate::plan::{canonical_muscle, Day, PlannedExercise, MUSCLE_GROUPS};

/// Estimated working time per set, rest included
pub const MINUTES_PER_SET: u32 = 3;

/// ---------------------------------------------------------------------------
/// Secondary Muscle Credit
/// ---------------------------------------------------------------------------

/// How sets are credited to an exercise's secondary muscle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SecondaryCredit {
  /// Secondary muscle gets the full set count and counts as trained that day
  #[serde(rename = "full")]
  Full,
  /// Only the primary muscle is credited
  #[default]
  #[serde(rename = "none", alias = "primary_only")]
  PrimaryOnly,
}

impl SecondaryCredit {
  pub fn as_str(&self) -> &'static str {
    match self {
      Self::Full => "full",
      Self::PrimaryOnly => "none",
    }
  }
}

impl std::fmt::Display for SecondaryCredit {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.as_str())
  }
}

impl std::str::FromStr for SecondaryCredit {
  type Err = String;
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.trim().to_lowercase().as_str() {
      "full" => Ok(Self::Full),
      "none" | "primary_only" => Ok(Self::PrimaryOnly),
      other => Err(format!("Unknown secondary credit policy: {}", other)),
    }
  }
}

/// ---------------------------------------------------------------------------
/// Volume & Frequency
/// ---------------------------------------------------------------------------

/// Per-muscle weekly sets and distinct training days.
///
/// Every base muscle group is always present. Labels outside the base set are
/// bucketed under their literal label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VolumeAnalysis {
  pub volume: BTreeMap<String, u32>,
  pub frequency: BTreeMap<String, u32>,
}

impl VolumeAnalysis {
  pub fn volume_of(&self, muscle: &str) -> u32 {
    self.volume.get(muscle).copied().unwrap_or(0)
  }

  pub fn frequency_of(&self, muscle: &str) -> u32 {
    self.frequency.get(muscle).copied().unwrap_or(0)
  }

  /// Rows for trained base muscles, in display order
  pub fn muscle_rows(&self) -> Vec<MuscleRow> {
    MUSCLE_GROUPS
      .iter()
      .filter_map(|&muscle| {
        let volume = self.volume_of(muscle);
        let frequency = self.frequency_of(muscle);
        if volume == 0 && frequency == 0 {
          return None;
        }
        Some(MuscleRow {
          muscle: muscle.to_string(),
          volume,
          frequency,
          band: VolumeBand::for_sets(volume),
        })
      })
      .collect()
  }
}

fn credited_muscles(
  exercise: &PlannedExercise,
  credit: SecondaryCredit,
) -> impl Iterator<Item = &str> {
  let secondary = match credit {
    SecondaryCredit::Full => exercise.secondary_muscle.as_deref(),
    SecondaryCredit::PrimaryOnly => None,
  };
  std::iter::once(exercise.primary_muscle.as_str())
    .chain(secondary)
    .map(str::trim)
    .filter(|m| !m.is_empty())
}

/// Aggregate volume and frequency for every muscle touched by the plan
pub fn analyze_volume(days: &[Day], credit: SecondaryCredit) -> VolumeAnalysis {
  let mut volume: BTreeMap<String, u32> = MUSCLE_GROUPS
    .iter()
    .map(|m| (m.to_string(), 0))
    .collect();
  let mut frequency = volume.clone();

  for day in days {
    // A muscle counts once per day no matter how many exercises hit it
    let mut touched: BTreeSet<&str> = BTreeSet::new();

    for exercise in &day.exercises {
      for muscle in credited_muscles(exercise, credit) {
        let entry = volume.entry(muscle.to_string()).or_insert(0);
        *entry = entry.saturating_add(exercise.sets);
        touched.insert(muscle);
      }
    }

    for muscle in touched {
      *frequency.entry(muscle.to_string()).or_insert(0) += 1;
    }
  }

  VolumeAnalysis { volume, frequency }
}

/// ---------------------------------------------------------------------------
/// Totals
/// ---------------------------------------------------------------------------

/// Raw set count across the whole plan, not split by muscle
pub fn total_sets(days: &[Day]) -> u32 {
  days
    .iter()
    .fold(0u32, |total, day| total.saturating_add(day.total_sets()))
}

pub fn total_exercises(days: &[Day]) -> usize {
  days.iter().map(|d| d.exercises.len()).sum()
}

pub fn day_set_totals(days: &[Day]) -> Vec<u32> {
  days.iter().map(Day::total_sets).collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanSummary {
  pub total_sets: u32,
  pub total_exercises: usize,
  pub estimated_minutes: u32,
  pub day_sets: Vec<u32>,
}

impl PlanSummary {
  pub fn compute(days: &[Day]) -> Self {
    let total_sets = total_sets(days);
    Self {
      total_sets,
      total_exercises: total_exercises(days),
      estimated_minutes: total_sets.saturating_mul(MINUTES_PER_SET),
      day_sets: day_set_totals(days),
    }
  }
}

/// ---------------------------------------------------------------------------
/// Per-Muscle Breakdown
/// ---------------------------------------------------------------------------

/// Weekly set volume band for a single muscle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VolumeBand {
  Maintenance, // < 5 sets
  Productive,  // 5-11 sets
  Optimal,     // 12-20 sets
  High,        // > 20 sets
}

impl VolumeBand {
  pub fn for_sets(sets: u32) -> Self {
    match sets {
      s if s < 5 => Self::Maintenance,
      s if s < 12 => Self::Productive,
      s if s <= 20 => Self::Optimal,
      _ => Self::High,
    }
  }

  pub fn description(&self) -> &'static str {
    match self {
      Self::Maintenance => "Low for hypertrophy — may support maintenance",
      Self::Productive => "Good for hypertrophy",
      Self::Optimal => "Optimal range for hypertrophy",
      Self::High => "High — ensure recovery is managed",
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MuscleRow {
  pub muscle: String,
  pub volume: u32,
  pub frequency: u32,
  pub band: VolumeBand,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MuscleExerciseRef {
  pub exercise: String,
  pub day: String,
}

/// Which exercises (and on which day) hit each base muscle, primary or secondary.
///
/// Labels are matched to base muscles case-insensitively; anything else is skipped.
pub fn muscle_exercise_map(days: &[Day]) -> BTreeMap<String, Vec<MuscleExerciseRef>> {
  let mut map: BTreeMap<String, Vec<MuscleExerciseRef>> = MUSCLE_GROUPS
    .iter()
    .map(|m| (m.to_string(), Vec::new()))
    .collect();

  for day in days {
    for exercise in &day.exercises {
      let labels = std::iter::once(exercise.primary_muscle.as_str())
        .chain(exercise.secondary_muscle.as_deref());
      for muscle in labels.filter_map(canonical_muscle) {
        if let Some(refs) = map.get_mut(muscle) {
          refs.push(MuscleExerciseRef {
            exercise: exercise.name.clone(),
            day: day.name.clone(),
          });
        }
      }
    }
  }

  map
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------
