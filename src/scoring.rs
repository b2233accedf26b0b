//! Plan Scoring
//!
//! Grades a weekly plan against experience-indexed and focus-area heuristics.
//! Rules are independent and additive, starting from 100:
//! - total weekly sets vs the experience band (under -20, over -10)
//! - each focus muscle: volume < 12 (-10), frequency < 2 (-10)
//! - any base muscle above 20 weekly sets (-5 each)
//!
//! Rule order only fixes the order of `details`, never the number.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

use crate::analysis::{
    analyze_volume, muscle_exercise_map, total_sets, MuscleExerciseRef, MuscleRow, PlanSummary,
    SecondaryCredit, VolumeAnalysis,
};
use crate::plan::{Day, Experience, Plan, MUSCLE_GROUPS};

pub const FOCUS_MIN_VOLUME: u32 = 12;
pub const FOCUS_MIN_FREQUENCY: u32 = 2;
pub const MUSCLE_MAX_VOLUME: u32 = 20;
pub const DAY_MAX_SETS: u32 = 20;

const MAX_SCORE: i32 = 100;
const BELOW_BAND_PENALTY: i32 = 20;
const ABOVE_BAND_PENALTY: i32 = 10;
const FOCUS_VOLUME_PENALTY: i32 = 10;
const FOCUS_FREQUENCY_PENALTY: i32 = 10;
const HIGH_VOLUME_PENALTY: i32 = 5;

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Caller-supplied scoring knobs; the scorer holds no defaults of its own
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub secondary_credit: SecondaryCredit,
}

// ---------------------------------------------------------------------------
// Experience Bands
// ---------------------------------------------------------------------------

/// Recommended weekly total sets, inclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetBand {
    pub min: u32,
    pub max: u32,
}

pub fn experience_band(experience: Experience) -> SetBand {
    let (min, max) = match experience {
        Experience::Beginner => (50, 70),
        Experience::Intermediate => (70, 110),
        Experience::Advanced => (100, 140),
    };
    SetBand { min, max }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeeklySetStatus {
    Low,
    Optimal,
    High,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklySetRecommendation {
    pub status: WeeklySetStatus,
    pub band: SetBand,
    pub message: String,
}

impl WeeklySetRecommendation {
    pub fn evaluate(total: u32, experience: Experience) -> Self {
        let band = experience_band(experience);
        let (status, message) = if total < band.min {
            (
                WeeklySetStatus::Low,
                format!(
                    "Low number of sets for your experience level ({}-{} sets recommended)",
                    band.min, band.max
                ),
            )
        } else if total > band.max {
            (
                WeeklySetStatus::High,
                format!(
                    "High number of sets — ensure recovery is managed ({}-{} sets recommended)",
                    band.min, band.max
                ),
            )
        } else {
            (
                WeeklySetStatus::Optimal,
                format!(
                    "Optimal set range for your experience level ({}-{} sets)",
                    band.min, band.max
                ),
            )
        };
        Self {
            status,
            band,
            message,
        }
    }
}

// ---------------------------------------------------------------------------
// Grade
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Grade {
    A,
    B,
    C,
    D,
    F,
}

impl Grade {
    pub fn from_score(score: u8) -> Self {
        match score {
            90..=u8::MAX => Self::A,
            80..=89 => Self::B,
            70..=79 => Self::C,
            60..=69 => Self::D,
            _ => Self::F,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
            Self::F => "F",
        }
    }
}

impl std::fmt::Display for Grade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Score Result
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub score: u8,
    pub grade: Grade,
    pub details: Vec<String>,
}

/// Score a plan. Total for every input; never mutates the days.
pub fn score_training_plan<S: AsRef<str>>(
    days: &[Day],
    experience: Experience,
    focus_areas: &[S],
    config: &ScoringConfig,
) -> ScoreResult {
    let analysis = analyze_volume(days, config.secondary_credit);
    score_with_analysis(days, experience, focus_areas, &analysis)
}

/// Score using an analysis the caller already computed for the same days
pub fn score_with_analysis<S: AsRef<str>>(
    days: &[Day],
    experience: Experience,
    focus_areas: &[S],
    analysis: &VolumeAnalysis,
) -> ScoreResult {
    let mut score = MAX_SCORE;
    let mut details = Vec::new();

    // 1. Weekly total vs experience band
    let total = total_sets(days);
    let band = experience_band(experience);
    if total < band.min {
        score -= BELOW_BAND_PENALTY;
        details.push(format!(
            "Total sets ({}) is below recommended for {} ({}-{})",
            total, experience, band.min, band.max
        ));
    } else if total > band.max {
        score -= ABOVE_BAND_PENALTY;
        details.push(format!(
            "Total sets ({}) is above recommended for {} ({}-{})",
            total, experience, band.min, band.max
        ));
    } else {
        details.push(format!(
            "Total sets ({}) is within recommended range for {}",
            total, experience
        ));
    }

    // 2. Focus areas: volume and frequency are checked independently
    for muscle in unique_focus_areas(focus_areas) {
        let volume = analysis.volume_of(muscle);
        let frequency = analysis.frequency_of(muscle);

        if volume < FOCUS_MIN_VOLUME {
            score -= FOCUS_VOLUME_PENALTY;
            details.push(format!(
                "{}: Volume low ({} sets, <{})",
                muscle, volume, FOCUS_MIN_VOLUME
            ));
        } else {
            details.push(format!("{}: Volume good ({} sets)", muscle, volume));
        }

        if frequency < FOCUS_MIN_FREQUENCY {
            score -= FOCUS_FREQUENCY_PENALTY;
            details.push(format!(
                "{}: Frequency low ({}x, <{}x/week)",
                muscle, frequency, FOCUS_MIN_FREQUENCY
            ));
        } else {
            details.push(format!("{}: Frequency good ({}x/week)", muscle, frequency));
        }
    }

    // 3. Overtraining, base muscles only
    for muscle in MUSCLE_GROUPS {
        let volume = analysis.volume_of(muscle);
        if volume > MUSCLE_MAX_VOLUME {
            score -= HIGH_VOLUME_PENALTY;
            details.push(format!(
                "{}: High volume ({} sets, >{})",
                muscle, volume, MUSCLE_MAX_VOLUME
            ));
        }
    }

    let score = score.clamp(0, MAX_SCORE) as u8;
    ScoreResult {
        score,
        grade: Grade::from_score(score),
        details,
    }
}

/// Focus areas are a set: keep first occurrence, drop repeats
fn unique_focus_areas<S: AsRef<str>>(focus_areas: &[S]) -> Vec<&str> {
    let mut seen = HashSet::new();
    focus_areas
        .iter()
        .map(AsRef::as_ref)
        .filter(|m| seen.insert(*m))
        .collect()
}

// ---------------------------------------------------------------------------
// Feedback (informational, never changes the score)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedbackKind {
    Warning,
    Info,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feedback {
    /// Muscle group or day name the note is about
    pub subject: String,
    pub message: String,
    pub kind: FeedbackKind,
}

/// Focus-area warnings first, then one note per overloaded day
pub fn plan_feedback<S: AsRef<str>>(
    days: &[Day],
    focus_areas: &[S],
    analysis: &VolumeAnalysis,
) -> Vec<Feedback> {
    let mut feedback: Vec<Feedback> = unique_focus_areas(focus_areas)
        .into_iter()
        .filter(|m| {
            analysis.volume_of(m) < FOCUS_MIN_VOLUME
                || analysis.frequency_of(m) < FOCUS_MIN_FREQUENCY
        })
        .map(|m| Feedback {
            subject: m.to_string(),
            message: format!("Consider increasing {} volume or frequency", m),
            kind: FeedbackKind::Warning,
        })
        .collect();

    feedback.extend(day_advisories(days));
    feedback
}

/// Days whose total sets exceed the single-session ceiling
pub fn day_advisories(days: &[Day]) -> Vec<Feedback> {
    days.iter()
        .filter(|day| day.total_sets() > DAY_MAX_SETS)
        .map(|day| Feedback {
            subject: day.name.clone(),
            message: "High volume day — consider splitting across the week".to_string(),
            kind: FeedbackKind::Info,
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Plan Report: everything the builder view renders after an edit
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanReport {
    pub score: ScoreResult,
    pub analysis: VolumeAnalysis,
    pub summary: PlanSummary,
    pub weekly_sets: WeeklySetRecommendation,
    pub muscles: Vec<MuscleRow>,
    pub muscle_exercises: BTreeMap<String, Vec<MuscleExerciseRef>>,
    pub feedback: Vec<Feedback>,
}

impl PlanReport {
    pub fn build(plan: &Plan, config: &ScoringConfig) -> Self {
        let analysis = analyze_volume(&plan.days, config.secondary_credit);
        let score = score_with_analysis(&plan.days, plan.experience, &plan.focus_areas, &analysis);
        let summary = PlanSummary::compute(&plan.days);
        let weekly_sets = WeeklySetRecommendation::evaluate(summary.total_sets, plan.experience);
        let feedback = plan_feedback(&plan.days, &plan.focus_areas, &analysis);

        Self {
            score,
            muscles: analysis.muscle_rows(),
            muscle_exercises: muscle_exercise_map(&plan.days),
            analysis,
            summary,
            weekly_sets,
            feedback,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
