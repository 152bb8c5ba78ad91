//! Plan output types and the fallback plan assembler.
//!
//! The serialized shape matches what the AI path is asked to return, so both
//! sources can be stored and rendered the same way.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::catalog::FoodCatalog;
use crate::diet::compose_diet;
use crate::profile::UserProfile;
use crate::workout::{WorkoutTemplates, compose_workout};

/// Same four tips for every profile.
pub const GENERAL_TIPS: [&str; 4] = [
    "Maintain a consistent sleep cycle (7-8 hours).",
    "Hydrate well: at least 3-4 liters of water daily.",
    "Focus on form over weight to avoid injuries.",
    "Stay active on rest days with light walking.",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutDayPlan {
    pub day: String,
    pub activity: String,
    /// Empty on rest days.
    #[serde(default)]
    pub exercises: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tips: Option<String>,
}

impl WorkoutDayPlan {
    pub fn is_rest_day(&self) -> bool {
        self.exercises.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutPlan {
    pub schedule: Vec<WorkoutDayPlan>,
    pub progression: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyMeals {
    pub breakfast: String,
    pub lunch: String,
    pub snack: String,
    pub dinner: String,
}

impl DailyMeals {
    /// (slot, description) pairs in serving order.
    pub fn slots(&self) -> [(&'static str, &str); 4] {
        [
            ("Breakfast", self.breakfast.as_str()),
            ("Lunch", self.lunch.as_str()),
            ("Snack", self.snack.as_str()),
            ("Dinner", self.dinner.as_str()),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DietPlan {
    pub daily_meals: DailyMeals,
    pub budget_tips: Vec<String>,
    pub reasoning: String,
}

/// A complete weekly plan. Value object; the caller owns storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Plan {
    pub summary: String,
    pub workout: WorkoutPlan,
    pub diet: DietPlan,
    pub tips: Vec<String>,
}

/// Deterministic rule engine with its static configuration.
#[derive(Debug, Clone, Default)]
pub struct RuleEngine {
    pub catalog: FoodCatalog,
    pub templates: WorkoutTemplates,
}

impl RuleEngine {
    pub fn new(catalog: FoodCatalog, templates: WorkoutTemplates) -> Self {
        Self { catalog, templates }
    }

    /// Build a plan for `profile`. Never fails; all randomness comes from `rng`.
    ///
    /// Workout draws happen before diet draws, so a seeded generator
    /// reproduces the same plan byte for byte.
    pub fn generate<R: Rng + ?Sized>(&self, profile: &UserProfile, rng: &mut R) -> Plan {
        let workout = compose_workout(&self.templates, profile.fitness_level, profile.location, rng);
        let diet = compose_diet(&self.catalog, profile, rng);

        Plan {
            summary: format!(
                "{}, looking for {} as a {} at {}.",
                profile.name, profile.goal, profile.fitness_level, profile.location
            ),
            workout,
            diet,
            tips: GENERAL_TIPS.iter().map(|t| t.to_string()).collect(),
        }
    }
}

/// Fallback plan using the built-in catalog and templates.
pub fn generate_fallback_plan<R: Rng + ?Sized>(profile: &UserProfile, rng: &mut R) -> Plan {
    RuleEngine::default().generate(profile, rng)
}
