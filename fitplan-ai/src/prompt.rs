//! Coaching prompt sent to the model.

use fitplan_core::UserProfile;

/// Render the plan-generation prompt for `profile`.
///
/// The JSON skeleton in the prompt is the same shape `Plan` serializes to.
pub fn build_prompt(profile: &UserProfile) -> String {
    let allergies = profile.allergy_filter().unwrap_or("None");

    format!(
        r#"You are an expert AI fitness coach specializing in student-friendly, affordable workout and diet plans.
User Profile:
- Name: {name}
- Age: {age}
- Gender: {gender}
- Height: {height}cm
- Weight: {weight}kg
- Fitness Level: {level}
- Goal: {goal}
- Location: {location} (e.g. home, hostel, gym)
- Budget: {budget} (low/medium/high)
- Diet Type: {diet}
- Region: {region}
- Allergies: {allergies}

Generate a personalized plan strictly in the following JSON format:
{{
    "summary": "String",
    "workout": {{
        "schedule": [
            {{ "day": "Monday", "activity": "String", "exercises": ["String", "String"], "tips": "String" }},
            ...7 days
        ],
        "progression": "String"
    }},
    "diet": {{
        "dailyMeals": {{
            "breakfast": "String",
            "lunch": "String",
            "snack": "String",
            "dinner": "String"
        }},
        "budgetTips": ["String", "String"],
        "reasoning": "String"
    }},
    "tips": ["String", "String"]
}}

Rules:
1. Response must be valid JSON only.
2. For 'hostel' location, suggest compact or bodyweight exercises.
3. For 'low' budget, suggest affordable protein sources like soya, eggs, or lentils.
4. Include regional food preferences ({region}).
"#,
        name = profile.name,
        age = profile.age,
        gender = profile.gender,
        height = profile.height,
        weight = profile.weight,
        level = profile.fitness_level,
        goal = profile.goal,
        location = profile.location,
        budget = profile.budget,
        diet = profile.diet_type,
        region = profile.region,
    )
}
