use fitplan_core::{Plan, ProgressLog};

pub const REST_DAY_MESSAGE: &str = "Rest day: recover and stretch.";

pub fn render_plan(plan: &Plan) -> String {
    let mut s = String::new();
    s.push_str("# Your weekly plan\n\n");
    s.push_str(&format!("{}\n\n", plan.summary));

    s.push_str("## Workout\n\n");
    for day in &plan.workout.schedule {
        s.push_str(&format!("### {}: {}\n", day.day, day.activity));
        if day.is_rest_day() {
            s.push_str(&format!("{REST_DAY_MESSAGE}\n"));
        } else {
            for ex in &day.exercises {
                s.push_str(&format!("- {ex}\n"));
            }
        }
        if let Some(tip) = day.tips.as_deref().filter(|t| !t.is_empty()) {
            s.push_str(&format!("  Tip: {tip}\n"));
        }
        s.push('\n');
    }
    s.push_str(&format!("{}\n\n", plan.workout.progression));

    s.push_str("## Diet\n\n");
    for (slot, meal) in plan.diet.daily_meals.slots() {
        s.push_str(&format!("- {slot}: {meal}\n"));
    }
    s.push_str(&format!("\n{}\n\n", plan.diet.reasoning));
    s.push_str("Budget tips:\n");
    for tip in &plan.diet.budget_tips {
        s.push_str(&format!("- {tip}\n"));
    }

    s.push_str("\n## General tips\n\n");
    for tip in &plan.tips {
        s.push_str(&format!("- {tip}\n"));
    }
    s
}

pub fn render_progress(log: &ProgressLog) -> String {
    let Some(summary) = log.summary() else {
        return "No logs yet. Start tracking today!\n".to_string();
    };

    let mut s = String::new();
    for e in log.entries() {
        let status = if e.completed { "completed" } else { "missed" };
        s.push_str(&format!("{}  {:>6.1} kg  {}\n", e.date, e.weight, status));
    }
    s.push_str(&format!(
        "\n{} days logged, {} workouts completed, weight {:+.1} kg ({:.1} -> {:.1})\n",
        summary.days_logged,
        summary.workouts_completed,
        summary.change,
        summary.first_weight,
        summary.latest_weight
    ));
    s
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use fitplan_core::{
        Budget, DietType, FitnessLevel, Gender, Goal, Location, ProgressEntry, Region, UserProfile,
        generate_fallback_plan,
    };
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_render_plan_marks_rest_days() {
        let profile = UserProfile {
            name: "Lee".into(),
            age: 30,
            gender: Gender::Female,
            height: 165.0,
            weight: 60.0,
            fitness_level: FitnessLevel::Beginner,
            goal: Goal::FatLoss,
            location: Location::Gym,
            budget: Budget::Low,
            diet_type: DietType::Vegan,
            region: Region::NorthIndian,
            allergies: None,
        };
        let plan = generate_fallback_plan(&profile, &mut StdRng::seed_from_u64(10));
        let text = render_plan(&plan);

        assert!(text.contains("### Thursday: Rest (Weights)\nRest day: recover and stretch."));
        assert!(text.contains("### Monday: Full Body Bodyweight (Weights)\n- Pushups: "));
        assert!(text.contains("  Tip: Focus on form."));
        assert!(text.contains("- Breakfast: "));
        assert!(text.contains("Budget tips:\n- Buy grains in bulk."));
    }

    #[test]
    fn test_render_progress() {
        assert!(render_progress(&ProgressLog::default()).starts_with("No logs yet"));

        let log = ProgressLog::from_entries(vec![
            ProgressEntry {
                date: NaiveDate::from_ymd_opt(2026, 4, 1).unwrap(),
                weight: 70.0,
                completed: true,
            },
            ProgressEntry {
                date: NaiveDate::from_ymd_opt(2026, 4, 2).unwrap(),
                weight: 69.5,
                completed: false,
            },
        ]);
        let text = render_progress(&log);
        assert!(text.contains("2026-04-01    70.0 kg  completed"));
        assert!(text.contains("2026-04-02    69.5 kg  missed"));
        assert!(text.contains("weight -0.5 kg (70.0 -> 69.5)"));
    }
}
