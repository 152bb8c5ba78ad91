//! Daily meal composition, budget tips, and calorie reasoning.

use rand::Rng;

use crate::calories;
use crate::catalog::{FoodCatalog, select};
use crate::plan::{DailyMeals, DietPlan};
use crate::profile::{Budget, DietType, Goal, UserProfile};

pub const LOW_BUDGET_TIPS: [&str; 3] = [
    "Buy grains in bulk.",
    "Soya chunks are the cheapest protein - use them 3x/week.",
    "Use seasonal veggies.",
];

pub const STANDARD_BUDGET_TIPS: [&str; 3] = [
    "Invest in high-quality Whey protein.",
    "Include Avocado or Seeds for healthy fats.",
    "Meal prep to save time.",
];

/// Fixed breakfast companion; not catalog driven and never allergy filtered.
pub fn breakfast_protein(diet: DietType) -> &'static str {
    match diet {
        DietType::NonVegetarian => "Boiled Eggs",
        DietType::Vegetarian | DietType::Vegan | DietType::Eggetarian => "Nuts",
    }
}

pub fn portion_size(goal: Goal) -> &'static str {
    match goal {
        Goal::MuscleGain => "Large portion",
        _ => "Moderate portion",
    }
}

pub fn snack(budget: Budget) -> &'static str {
    match budget {
        Budget::High => "Greek Yogurt / Whey",
        Budget::Low | Budget::Medium => "Roasted Chana / Sprouts",
    }
}

pub fn macro_focus(goal: Goal) -> &'static str {
    match goal {
        Goal::MuscleGain => "protein",
        _ => "fiber",
    }
}

pub fn budget_tips(budget: Budget) -> &'static [&'static str; 3] {
    match budget {
        Budget::Low => &LOW_BUDGET_TIPS,
        Budget::Medium | Budget::High => &STANDARD_BUDGET_TIPS,
    }
}

/// Four meals plus tips for a profile.
///
/// Each food slot is an independent draw; the same item may appear twice in
/// a day.
pub fn compose_diet<R: Rng + ?Sized>(catalog: &FoodCatalog, profile: &UserProfile, rng: &mut R) -> DietPlan {
    let foods = catalog.lookup(profile.region, profile.diet_type);
    let allergy = profile.allergy_filter();

    let breakfast = format!(
        "{} with {} - {}.",
        select(foods.carbs, allergy, rng),
        breakfast_protein(profile.diet_type),
        portion_size(profile.goal)
    );

    let lunch_protein = select(foods.proteins, allergy, rng);
    let lunch_carb = select(foods.carbs, allergy, rng);
    let lunch_side = select(foods.sides, allergy, rng);
    let lunch = format!("{lunch_protein}, {lunch_carb}, and {lunch_side}.");

    let snack = format!("{} with tea/coffee.", snack(profile.budget));

    let dinner_protein = select(foods.proteins, allergy, rng);
    let dinner_side = select(foods.sides, allergy, rng);
    let dinner = format!("Light {dinner_protein} with steamed veggies and {dinner_side}.");

    let target = calories::estimate(
        profile.weight,
        profile.height,
        profile.age,
        profile.gender,
        profile.goal,
    );
    let reasoning = format!(
        "Optimized for {:.0} kcal. High {} focus to support your {} journey.",
        target.round(),
        macro_focus(profile.goal),
        profile.goal
    );

    DietPlan {
        daily_meals: DailyMeals {
            breakfast,
            lunch,
            snack,
            dinner,
        },
        budget_tips: budget_tips(profile.budget).iter().map(|t| t.to_string()).collect(),
        reasoning,
    }
}
