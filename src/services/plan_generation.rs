use serde::Serialize;
use tracing::{debug, warn};

use crate::clients::gemini::{GeminiClient, GeminiError};
use crate::models::plan::WorkoutPlan;
use crate::models::profile::{Goal, UserProfile};
use crate::services::{fallback, metrics, parser, prompt};

/// Everything the presentation layer needs to render one generation:
/// derived metrics, the raw model output for the debug panel, the plan, and
/// a warning when the plan is the static fallback.
#[derive(Debug, Clone, Serialize)]
pub struct GeneratedPlan {
    pub bmi: f64,
    pub goal: Goal,
    pub raw_output: String,
    pub plan: WorkoutPlan,
    pub fallback_used: bool,
    pub warning: Option<String>,
}

#[derive(Clone)]
pub struct PlanGenerationService {
    gemini_client: GeminiClient,
}

impl PlanGenerationService {
    pub fn new(gemini_client: GeminiClient) -> Self {
        Self { gemini_client }
    }

    /// Full pipeline for one submission: metrics, prompt, model call, parse.
    /// A parse failure substitutes the fallback plan; a model failure
    /// propagates so the caller can show an error instead of a plan.
    pub async fn generate(&self, profile: &UserProfile) -> Result<GeneratedPlan, GeminiError> {
        let derived = metrics::derive_metrics(profile);
        let prompt = prompt::build_prompt(profile, &derived);

        debug!(prompt = %prompt, "gemini.prompt");

        let raw_output = self.gemini_client.generate_text(&prompt).await?;

        debug!(response = %raw_output, "gemini.response");

        Ok(assemble_plan(profile, derived, raw_output))
    }
}

fn assemble_plan(
    profile: &UserProfile,
    derived: metrics::DerivedMetrics,
    raw_output: String,
) -> GeneratedPlan {
    let (plan, warning) = match parser::parse_plan(&raw_output) {
        Ok(plan) => (plan, None),
        Err(e) => {
            warn!(error = %e, "plan.parse_failed");
            (
                fallback::fallback_plan(derived.resolved_goal, profile.target_muscle),
                Some(format!("Invalid AI response ({}). Using fallback plan.", e)),
            )
        }
    };

    GeneratedPlan {
        bmi: derived.bmi,
        goal: derived.resolved_goal,
        fallback_used: warning.is_some(),
        warning,
        raw_output,
        plan,
    }
}
