//! fitplan-core: deterministic rule engine for weekly fitness and nutrition plans

pub mod calories;
pub mod catalog;
pub mod diet;
pub mod plan;
pub mod profile;
pub mod progress;
pub mod workout;

pub use calories::estimate;
pub use catalog::{CatalogError, FoodCatalog, FoodChoices, RegionalFoods, select};
pub use diet::compose_diet;
pub use plan::{
    DailyMeals, DietPlan, Plan, RuleEngine, WorkoutDayPlan, WorkoutPlan, generate_fallback_plan,
};
pub use profile::{Budget, DietType, FitnessLevel, Gender, Goal, Location, Region, UserProfile};
pub use progress::{ProgressEntry, ProgressLog, ProgressSummary};
pub use workout::{DayTemplate, TemplateError, WorkoutTemplates, compose_workout};
