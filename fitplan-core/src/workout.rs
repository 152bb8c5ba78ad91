//! Weekly workout composition from per-level templates.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

use crate::plan::{WorkoutDayPlan, WorkoutPlan};
use crate::profile::{FitnessLevel, Location};

/// Level whose template is used when the requested one is not defined.
pub const DEFAULT_LEVEL: FitnessLevel = FitnessLevel::Beginner;

pub const DAYS_PER_WEEK: usize = 7;

/// Rest between sets, in seconds.
pub const REST_SECONDS: u32 = 60;

#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("templates must define the default level `{0:?}`")]
    MissingDefaultLevel(FitnessLevel),

    #[error("template for `{level:?}` has {days} days, expected 7")]
    WrongLength { level: FitnessLevel, days: usize },

    #[error("parse templates json: {0}")]
    Parse(#[from] serde_json::Error),
}

/// One day of a static template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayTemplate {
    pub day: String,
    pub activity: String,
    /// Empty means rest day.
    #[serde(default)]
    pub exercises: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tips: Option<String>,
}

impl DayTemplate {
    fn new(day: &str, activity: &str, exercises: &[&str], tips: &str) -> Self {
        Self {
            day: day.to_string(),
            activity: activity.to_string(),
            exercises: exercises.iter().map(|e| e.to_string()).collect(),
            tips: (!tips.is_empty()).then(|| tips.to_string()),
        }
    }

    fn rest(day: &str) -> Self {
        Self::new(day, "Rest", &[], "")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct WorkoutTemplates {
    levels: BTreeMap<FitnessLevel, Vec<DayTemplate>>,
}

impl WorkoutTemplates {
    pub fn new(levels: BTreeMap<FitnessLevel, Vec<DayTemplate>>) -> Result<Self, TemplateError> {
        if !levels.contains_key(&DEFAULT_LEVEL) {
            return Err(TemplateError::MissingDefaultLevel(DEFAULT_LEVEL));
        }
        for (level, days) in &levels {
            if days.len() != DAYS_PER_WEEK {
                return Err(TemplateError::WrongLength {
                    level: *level,
                    days: days.len(),
                });
            }
        }
        Ok(Self { levels })
    }

    pub fn from_json(json: &str) -> Result<Self, TemplateError> {
        let levels: BTreeMap<FitnessLevel, Vec<DayTemplate>> = serde_json::from_str(json)?;
        Self::new(levels)
    }

    pub fn to_json_pretty(&self) -> Result<String, TemplateError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Level whose template will be used for `level`.
    ///
    /// The built-in set defines beginner and intermediate only, so advanced
    /// resolves to beginner unless a loaded template set provides it.
    pub fn resolve(&self, level: FitnessLevel) -> FitnessLevel {
        if self.levels.contains_key(&level) {
            level
        } else {
            DEFAULT_LEVEL
        }
    }

    pub fn days(&self, level: FitnessLevel) -> &[DayTemplate] {
        self.levels
            .get(&self.resolve(level))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

impl Default for WorkoutTemplates {
    fn default() -> Self {
        let beginner = vec![
            DayTemplate::new("Monday", "Full Body Bodyweight", &["Pushups", "Squats", "Plank"], "Focus on form."),
            DayTemplate::new("Tuesday", "Rest & Active Recovery", &["Light walking: 30 mins"], "Stay active."),
            DayTemplate::new("Wednesday", "Cardio & Core", &["Jumping Jacks", "Crunches"], "Keep breathing."),
            DayTemplate::rest("Thursday"),
            DayTemplate::new("Friday", "Strength Focus", &["Lunges", "Glute Bridges"], "Steady pace."),
            DayTemplate::new("Saturday", "Mobility & Stretching", &["Yoga flow: 20 mins"], "Relax your muscles."),
            DayTemplate::rest("Sunday"),
        ];
        let intermediate = vec![
            DayTemplate::new(
                "Monday",
                "Upper Body Focus",
                &["Diamond Pushups", "Pullups/Rows"],
                "Increase resistance if possible.",
            ),
            DayTemplate::new(
                "Tuesday",
                "Lower Body Focus",
                &["Bulgarian Split Squats", "Calf Raises"],
                "Drive with power.",
            ),
            DayTemplate::new("Wednesday", "HIIT Session", &["Burpees", "Mountain Climbers"], "High intensity."),
            DayTemplate::rest("Thursday"),
            DayTemplate::new("Friday", "Compound Moves", &["Pike Pushups", "Archer Squats"], "Control the movement."),
            DayTemplate::new("Saturday", "Skill Practice", &["Handstand work"], "Practice balance."),
            DayTemplate::rest("Sunday"),
        ];

        Self {
            levels: BTreeMap::from([
                (FitnessLevel::Beginner, beginner),
                (FitnessLevel::Intermediate, intermediate),
            ]),
        }
    }
}

/// Suffix appended to every activity label for the training location.
pub fn activity_suffix(location: Location) -> &'static str {
    match location {
        Location::Home => "",
        Location::Hostel => " (Compact)",
        Location::Gym => " (Weights)",
    }
}

pub fn rep_range(level: FitnessLevel) -> &'static str {
    match level {
        FitnessLevel::Beginner => "10-12",
        FitnessLevel::Intermediate | FitnessLevel::Advanced => "12-15",
    }
}

pub fn progression_tip(level: FitnessLevel) -> &'static str {
    match level {
        FitnessLevel::Beginner => "Progression: Add 1 rep to every set each week.",
        FitnessLevel::Intermediate | FitnessLevel::Advanced => {
            "Progression: Reduce rest time by 5s every week."
        }
    }
}

/// Render one exercise as "<name>: <sets>x<reps> (60s rest)" with 3-5 sets.
pub fn prescribe<R: Rng + ?Sized>(exercise: &str, level: FitnessLevel, rng: &mut R) -> String {
    let sets: u32 = rng.random_range(3..=5);
    format!("{exercise}: {sets}x{} ({REST_SECONDS}s rest)", rep_range(level))
}

/// Seven-day schedule for a level, adapted to the training location.
///
/// Rep ranges and progression follow the requested level even when its
/// template falls back to beginner.
pub fn compose_workout<R: Rng + ?Sized>(
    templates: &WorkoutTemplates,
    level: FitnessLevel,
    location: Location,
    rng: &mut R,
) -> WorkoutPlan {
    let suffix = activity_suffix(location);

    let schedule = templates
        .days(level)
        .iter()
        .map(|d| WorkoutDayPlan {
            day: d.day.clone(),
            activity: format!("{}{suffix}", d.activity),
            exercises: d.exercises.iter().map(|ex| prescribe(ex, level, rng)).collect(),
            tips: d.tips.clone(),
        })
        .collect();

    WorkoutPlan {
        schedule,
        progression: progression_tip(level).to_string(),
    }
}
