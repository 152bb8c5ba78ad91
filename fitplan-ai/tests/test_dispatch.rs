use anyhow::{Result, bail};
use fitplan_ai::{CompletionClient, FallbackReason, GeminiClient, PlanOrigin, generate_plan};
use fitplan_core::{
    Budget, DietType, FitnessLevel, Gender, Goal, Location, Region, RuleEngine, UserProfile,
    generate_fallback_plan,
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::sync::atomic::{AtomicUsize, Ordering};

struct Canned {
    reply: Option<String>,
    calls: AtomicUsize,
}

impl Canned {
    fn ok(text: &str) -> Self {
        Self {
            reply: Some(text.to_string()),
            calls: AtomicUsize::new(0),
        }
    }

    fn failing() -> Self {
        Self {
            reply: None,
            calls: AtomicUsize::new(0),
        }
    }
}

impl CompletionClient for Canned {
    async fn complete(&self, prompt: &str) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        assert!(prompt.contains("- Name: Priya"));
        match &self.reply {
            Some(text) => Ok(text.clone()),
            None => bail!("connection refused"),
        }
    }
}

fn profile() -> UserProfile {
    UserProfile {
        name: "Priya".into(),
        age: 23,
        gender: Gender::Female,
        height: 158.0,
        weight: 52.0,
        fitness_level: FitnessLevel::Beginner,
        goal: Goal::Endurance,
        location: Location::Gym,
        budget: Budget::High,
        diet_type: DietType::Vegan,
        region: Region::SouthIndian,
        allergies: Some("peanut".into()),
    }
}

#[tokio::test]
async fn test_ai_plan_is_used_when_valid() {
    let ai_plan = generate_fallback_plan(&profile(), &mut StdRng::seed_from_u64(1));
    let reply = format!(
        "```json\n{}\n```",
        serde_json::to_string_pretty(&ai_plan).unwrap()
    );
    let client = Canned::ok(&reply);

    let out = generate_plan(
        Some(&client),
        &RuleEngine::default(),
        &profile(),
        &mut StdRng::seed_from_u64(2),
    )
    .await;

    assert_eq!(out.origin, PlanOrigin::Ai);
    assert_eq!(out.plan, ai_plan);
    assert_eq!(client.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_missing_client_falls_back() {
    let out = generate_plan(
        None::<&GeminiClient>,
        &RuleEngine::default(),
        &profile(),
        &mut StdRng::seed_from_u64(5),
    )
    .await;

    assert_eq!(out.origin, PlanOrigin::Fallback(FallbackReason::MissingCredentials));
    assert_eq!(out.plan, generate_fallback_plan(&profile(), &mut StdRng::seed_from_u64(5)));
}

#[tokio::test]
async fn test_request_error_falls_back() {
    let client = Canned::failing();
    let out = generate_plan(
        Some(&client),
        &RuleEngine::default(),
        &profile(),
        &mut StdRng::seed_from_u64(5),
    )
    .await;

    match out.origin {
        PlanOrigin::Fallback(FallbackReason::Request(msg)) => assert!(msg.contains("connection refused")),
        other => panic!("unexpected origin {other:?}"),
    }
    assert_eq!(out.plan.workout.schedule.len(), 7);
}

#[tokio::test]
async fn test_unparseable_reply_falls_back() {
    for reply in ["I cannot help with that.", "{\"summary\": \"half a plan\"}"] {
        let client = Canned::ok(reply);
        let out = generate_plan(
            Some(&client),
            &RuleEngine::default(),
            &profile(),
            &mut StdRng::seed_from_u64(5),
        )
        .await;
        assert!(matches!(out.origin, PlanOrigin::Fallback(FallbackReason::Response(_))));
        assert!(out.plan.summary.starts_with("Priya, looking for Endurance"));
    }
}
