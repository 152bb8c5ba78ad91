//! fitplan-ai: prompt templating, model client, response decoding, and the
//! AI-or-rule-engine dispatcher

pub mod client;
pub mod dispatch;
pub mod prompt;
pub mod response;

pub use client::{CompletionClient, GeminiClient};
pub use dispatch::{FallbackReason, GeneratedPlan, PlanOrigin, generate_plan};
pub use prompt::build_prompt;
pub use response::{ResponseError, extract_json_object, parse_plan};
