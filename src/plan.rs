//! Weekly Plan Model
//!
//! A plan is an ordered list of days, each holding an ordered list of planned
//! exercises with a working-set count. Edits are validated here, so analysis
//! and scoring only ever see well-formed plans:
//! - set counts are whole numbers in 1..=10
//! - training day count is 1..=7
//! - every index an edit touches must exist
//!
//! Drag-and-drop reordering is modelled as a pure move from one slot to another
//! that returns a new day sequence.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::catalog::{empty_as_none, Exercise};

// ---------------------------------------------------------------------------
// Muscle Groups
// ---------------------------------------------------------------------------

/// Base muscle groups the scoring thresholds are defined over, in display order
pub const MUSCLE_GROUPS: [&str; 10] = [
    "Chest",
    "Back",
    "Quads",
    "Hamstrings",
    "Glutes",
    "Shoulders",
    "Biceps",
    "Triceps",
    "Calves",
    "Abs",
];

/// Map a label onto a base muscle group, ignoring case and surrounding whitespace
pub fn canonical_muscle(label: &str) -> Option<&'static str> {
    let label = label.trim();
    MUSCLE_GROUPS
        .iter()
        .copied()
        .find(|muscle| muscle.eq_ignore_ascii_case(label))
}

pub const MIN_SETS: u32 = 1;
pub const MAX_SETS: u32 = 10;
pub const MIN_TRAINING_DAYS: u32 = 1;
pub const MAX_TRAINING_DAYS: u32 = 7;

pub const DEFAULT_PLAN_NAME: &str = "Untitled Plan";
const DEFAULT_TRAINING_DAYS: u8 = 3;
const DEFAULT_FOCUS_AREAS: [&str; 2] = ["Back", "Glutes"];

// ---------------------------------------------------------------------------
// Edit Errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanError {
    #[error("Sets must be a whole number, got '{0}'")]
    NonNumericSets(String),

    #[error("Sets must be between 1 and 10, got {0}")]
    SetsOutOfRange(i64),

    #[error("Training days must be between 1 and 7, got {0}")]
    TrainingDaysOutOfRange(u32),

    #[error("Day {index} does not exist (plan has {len} days)")]
    DayOutOfRange { index: usize, len: usize },

    #[error("Exercise {index} does not exist on day {day} ({len} exercises)")]
    ExerciseOutOfRange { day: usize, index: usize, len: usize },
}

// ---------------------------------------------------------------------------
// Experience Level
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "Option<String>")]
pub enum Experience {
    Beginner,
    #[default]
    Intermediate,
    Advanced,
}

impl Experience {
    pub const ALL: [Experience; 3] = [Self::Beginner, Self::Intermediate, Self::Advanced];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
        }
    }

    /// Lenient parse: anything unrecognised is treated as Intermediate
    pub fn from_label(label: &str) -> Self {
        label.parse().unwrap_or(Self::Intermediate)
    }
}

impl std::fmt::Display for Experience {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Experience {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Beginner" => Ok(Self::Beginner),
            "Intermediate" => Ok(Self::Intermediate),
            "Advanced" => Ok(Self::Advanced),
            other => Err(format!("Unknown experience level: {}", other)),
        }
    }
}

impl From<Option<String>> for Experience {
    fn from(label: Option<String>) -> Self {
        label.as_deref().map(Self::from_label).unwrap_or_default()
    }
}

// ---------------------------------------------------------------------------
// Planned Exercise
// ---------------------------------------------------------------------------

/// A catalog exercise placed into a day with a set count
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlannedExercise {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub primary_muscle: String,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub secondary_muscle: Option<String>,
    #[serde(default)]
    pub category: String,
    #[serde(default, deserialize_with = "lenient_sets")]
    pub sets: u32,
}

impl PlannedExercise {
    pub fn from_exercise(exercise: &Exercise, sets: u32) -> Self {
        Self {
            name: exercise.name.clone(),
            primary_muscle: exercise.primary_muscle.clone(),
            secondary_muscle: exercise.secondary_muscle.clone(),
            category: exercise.category.clone(),
            sets,
        }
    }
}

/// Stored documents may carry anything in `sets`; bad values contribute nothing
fn lenient_sets<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(raw.as_ref().map_or(0, sets_from_value))
}

fn sets_from_value(value: &Value) -> u32 {
    match value {
        Value::Number(n) => n
            .as_u64()
            .map(|v| v.min(u64::from(u32::MAX)) as u32)
            .or_else(|| {
                n.as_f64()
                    .filter(|f| f.is_finite() && *f > 0.0)
                    .map(|f| f.floor().min(f64::from(u32::MAX)) as u32)
            })
            .unwrap_or(0),
        Value::String(s) => s.trim().parse().unwrap_or(0),
        _ => 0,
    }
}

/// Validate a raw set-count edit
pub fn parse_sets(raw: &str) -> Result<u32, PlanError> {
    let value: i64 = raw
        .trim()
        .parse()
        .map_err(|_| PlanError::NonNumericSets(raw.to_string()))?;

    if value < i64::from(MIN_SETS) || value > i64::from(MAX_SETS) {
        return Err(PlanError::SetsOutOfRange(value));
    }
    Ok(value as u32)
}

// ---------------------------------------------------------------------------
// Day
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Day {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub exercises: Vec<PlannedExercise>,
}

impl Day {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            exercises: Vec::new(),
        }
    }

    /// "Day 1", "Day 2", ... for a zero-based position
    pub fn numbered(position: usize) -> Self {
        Self::new(day_label(position))
    }

    pub fn total_sets(&self) -> u32 {
        self.exercises
            .iter()
            .fold(0u32, |total, ex| total.saturating_add(ex.sets))
    }
}

fn day_label(position: usize) -> String {
    format!("Day {}", position + 1)
}

/// Resize a day sequence, keeping exercise lists by position and relabelling
pub fn resize_days(days: &[Day], count: usize) -> Vec<Day> {
    (0..count)
        .map(|i| Day {
            name: day_label(i),
            exercises: days.get(i).map(|d| d.exercises.clone()).unwrap_or_default(),
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Reordering
// ---------------------------------------------------------------------------

/// Position of an exercise inside a plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    pub day: usize,
    pub index: usize,
}

impl Slot {
    pub fn new(day: usize, index: usize) -> Self {
        Self { day, index }
    }
}

/// Move one exercise between slots, returning the reordered days.
///
/// The exercise is taken out first, so `to.index` is read against the
/// destination list after removal and may equal its length (append).
pub fn move_exercise(days: &[Day], from: Slot, to: Slot) -> Result<Vec<Day>, PlanError> {
    let source = days.get(from.day).ok_or(PlanError::DayOutOfRange {
        index: from.day,
        len: days.len(),
    })?;
    if from.index >= source.exercises.len() {
        return Err(PlanError::ExerciseOutOfRange {
            day: from.day,
            index: from.index,
            len: source.exercises.len(),
        });
    }

    let target = days.get(to.day).ok_or(PlanError::DayOutOfRange {
        index: to.day,
        len: days.len(),
    })?;
    let target_len = if to.day == from.day {
        target.exercises.len() - 1
    } else {
        target.exercises.len()
    };
    if to.index > target_len {
        return Err(PlanError::ExerciseOutOfRange {
            day: to.day,
            index: to.index,
            len: target_len,
        });
    }

    let mut moved = days.to_vec();
    let exercise = moved[from.day].exercises.remove(from.index);
    moved[to.day].exercises.insert(to.index, exercise);
    Ok(moved)
}

// ---------------------------------------------------------------------------
// Plan
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Plan {
    #[serde(default = "default_plan_name")]
    pub name: String,
    #[serde(default)]
    pub days: Vec<Day>,
    #[serde(default)]
    pub experience: Experience,
    #[serde(default)]
    pub focus_areas: Vec<String>,
    #[serde(default = "default_training_days")]
    pub training_days: u8,
}

fn default_plan_name() -> String {
    DEFAULT_PLAN_NAME.to_string()
}

fn default_training_days() -> u8 {
    DEFAULT_TRAINING_DAYS
}

impl Default for Plan {
    fn default() -> Self {
        Self {
            name: default_plan_name(),
            days: resize_days(&[], DEFAULT_TRAINING_DAYS as usize),
            experience: Experience::default(),
            focus_areas: DEFAULT_FOCUS_AREAS.iter().map(|m| m.to_string()).collect(),
            training_days: DEFAULT_TRAINING_DAYS,
        }
    }
}

impl Plan {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    fn day_mut(&mut self, day: usize) -> Result<&mut Day, PlanError> {
        let len = self.days.len();
        self.days
            .get_mut(day)
            .ok_or(PlanError::DayOutOfRange { index: day, len })
    }

    fn exercise_mut(&mut self, day: usize, index: usize) -> Result<&mut PlannedExercise, PlanError> {
        let target = self.day_mut(day)?;
        let len = target.exercises.len();
        target
            .exercises
            .get_mut(index)
            .ok_or(PlanError::ExerciseOutOfRange { day, index, len })
    }

    /// Change the number of training days (1-7)
    pub fn set_training_days(&mut self, count: u32) -> Result<(), PlanError> {
        if !(MIN_TRAINING_DAYS..=MAX_TRAINING_DAYS).contains(&count) {
            return Err(PlanError::TrainingDaysOutOfRange(count));
        }
        self.days = resize_days(&self.days, count as usize);
        self.training_days = count as u8;
        Ok(())
    }

    /// Append to a day. The planned set count must already be in 1..=10.
    pub fn add_exercise(&mut self, day: usize, exercise: PlannedExercise) -> Result<(), PlanError> {
        if !(MIN_SETS..=MAX_SETS).contains(&exercise.sets) {
            return Err(PlanError::SetsOutOfRange(i64::from(exercise.sets)));
        }
        self.day_mut(day)?.exercises.push(exercise);
        Ok(())
    }

    pub fn remove_exercise(&mut self, day: usize, index: usize) -> Result<PlannedExercise, PlanError> {
        let target = self.day_mut(day)?;
        if index >= target.exercises.len() {
            return Err(PlanError::ExerciseOutOfRange {
                day,
                index,
                len: target.exercises.len(),
            });
        }
        Ok(target.exercises.remove(index))
    }

    /// Swap in a different catalog exercise, keeping the programmed sets
    pub fn replace_exercise(
        &mut self,
        day: usize,
        index: usize,
        exercise: &Exercise,
    ) -> Result<(), PlanError> {
        let slot = self.exercise_mut(day, index)?;
        let sets = slot.sets;
        *slot = PlannedExercise::from_exercise(exercise, sets);
        Ok(())
    }

    /// Apply a raw set-count edit. On error the previous value is kept.
    pub fn set_sets(&mut self, day: usize, index: usize, raw: &str) -> Result<u32, PlanError> {
        let sets = parse_sets(raw)?;
        self.exercise_mut(day, index)?.sets = sets;
        Ok(sets)
    }

    pub fn move_exercise(&mut self, from: Slot, to: Slot) -> Result<(), PlanError> {
        self.days = move_exercise(&self.days, from, to)?;
        Ok(())
    }

    /// Clear every day's exercises, keeping the day structure
    pub fn reset(&mut self) {
        for day in &mut self.days {
            day.exercises.clear();
        }
    }

    pub fn toggle_focus_area(&mut self, muscle: &str) {
        if let Some(pos) = self.focus_areas.iter().position(|m| m == muscle) {
            self.focus_areas.remove(pos);
        } else {
            self.focus_areas.push(muscle.to_string());
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
