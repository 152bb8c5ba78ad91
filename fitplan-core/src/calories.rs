//! Caloric estimation: Mifflin-St Jeor BMR, a fixed activity multiplier, and a
//! goal-adjusted daily target.

use crate::profile::{Gender, Goal};

/// Sedentary-to-light activity factor. There is no activity-level input.
pub const ACTIVITY_MULTIPLIER: f64 = 1.4;

/// Daily deficit applied for fat loss (kcal).
pub const FAT_LOSS_DEFICIT: f64 = 500.0;

/// Daily surplus applied for muscle gain (kcal).
pub const MUSCLE_GAIN_SURPLUS: f64 = 400.0;

/// Sex term of the formula. The formula only knows two offsets; `Other`
/// takes the female offset.
pub fn sex_offset(gender: Gender) -> f64 {
    match gender {
        Gender::Male => 5.0,
        Gender::Female | Gender::Other => -161.0,
    }
}

/// Basal metabolic rate (kcal/day).
pub fn bmr(weight_kg: f64, height_cm: f64, age_years: u32, gender: Gender) -> f64 {
    10.0 * weight_kg + 6.25 * height_cm - 5.0 * f64::from(age_years) + sex_offset(gender)
}

/// Total daily energy expenditure (kcal/day).
pub fn tdee(weight_kg: f64, height_cm: f64, age_years: u32, gender: Gender) -> f64 {
    bmr(weight_kg, height_cm, age_years, gender) * ACTIVITY_MULTIPLIER
}

/// Goal-adjusted calorie target. Not rounded; callers format as they need.
pub fn estimate(weight_kg: f64, height_cm: f64, age_years: u32, gender: Gender, goal: Goal) -> f64 {
    let tdee = tdee(weight_kg, height_cm, age_years, gender);
    match goal {
        Goal::FatLoss => tdee - FAT_LOSS_DEFICIT,
        Goal::MuscleGain => tdee + MUSCLE_GAIN_SURPLUS,
        Goal::Maintenance | Goal::GeneralFitness | Goal::Endurance => tdee,
    }
}
