//! AI-first plan generation with the rule engine as fallback.
//!
//! Failures on the AI path never reach the caller: they are logged and the
//! deterministic plan is returned instead.

use fitplan_core::{Plan, RuleEngine, UserProfile};
use rand::Rng;
use std::fmt;

use crate::client::CompletionClient;
use crate::prompt::build_prompt;
use crate::response::parse_plan;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FallbackReason {
    MissingCredentials,
    Request(String),
    Response(String),
}

impl fmt::Display for FallbackReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FallbackReason::MissingCredentials => f.write_str("no API key configured"),
            FallbackReason::Request(e) => write!(f, "request failed: {e}"),
            FallbackReason::Response(e) => write!(f, "unusable response: {e}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanOrigin {
    Ai,
    Fallback(FallbackReason),
}

#[derive(Debug, Clone)]
pub struct GeneratedPlan {
    pub plan: Plan,
    pub origin: PlanOrigin,
}

/// Ask `client` for a plan; on any failure build one with `engine`.
pub async fn generate_plan<C, R>(
    client: Option<&C>,
    engine: &RuleEngine,
    profile: &UserProfile,
    rng: &mut R,
) -> GeneratedPlan
where
    C: CompletionClient,
    R: Rng + ?Sized,
{
    let reason = match client {
        None => {
            tracing::warn!("AI API key missing; falling back to rule engine");
            FallbackReason::MissingCredentials
        }
        Some(client) => match client.complete(&build_prompt(profile)).await {
            Err(e) => {
                let msg = format!("{e:#}");
                tracing::warn!(error = %msg, "AI generation failed; falling back to rule engine");
                FallbackReason::Request(msg)
            }
            Ok(text) => match parse_plan(&text) {
                Ok(plan) => {
                    tracing::info!("plan generated by AI");
                    return GeneratedPlan {
                        plan,
                        origin: PlanOrigin::Ai,
                    };
                }
                Err(e) => {
                    tracing::warn!(error = %e, "AI response unusable; falling back to rule engine");
                    FallbackReason::Response(e.to_string())
                }
            },
        },
    };

    GeneratedPlan {
        plan: engine.generate(profile, rng),
        origin: PlanOrigin::Fallback(reason),
    }
}
