use std::collections::HashMap;
use std::hash::{DefaultHasher, Hash, Hasher};
use std::sync::{Arc, Mutex};

use axum::Json;
use axum::{extract::State, http::StatusCode, response::IntoResponse};
use serde_json::json;

use crate::clients::gemini::GeminiError;
use crate::models::profile::UserProfile;
use crate::services::plan_generation::{GeneratedPlan, PlanGenerationService};

#[derive(Clone)]
pub struct AppState {
    pub plan_service: PlanGenerationService,
    // Memoizes successful generations per profile so a repeated identical
    // submission does not trigger another billable model call.
    pub plan_cache: Arc<Mutex<HashMap<u64, GeneratedPlan>>>,
}

fn profile_cache_key(profile: &UserProfile) -> u64 {
    let mut hasher = DefaultHasher::new();
    profile.hash(&mut hasher);
    hasher.finish()
}

/// Only real model plans are memoized. A fallback result means the model
/// output was unusable this time; the next identical submission should try
/// the model again instead of being pinned to the static plan.
fn cache_plan(cache: &Mutex<HashMap<u64, GeneratedPlan>>, key: u64, generated: &GeneratedPlan) {
    if generated.fallback_used {
        return;
    }
    cache.lock().unwrap().insert(key, generated.clone());
}

fn error_response(status: StatusCode, message: String) -> axum::response::Response {
    (status, Json(json!({ "error": message }))).into_response()
}

fn map_gemini_error(error: &GeminiError) -> StatusCode {
    match error {
        GeminiError::RateLimited(_) => StatusCode::SERVICE_UNAVAILABLE,
        _ => StatusCode::BAD_GATEWAY,
    }
}

pub async fn generate_plan_handler(
    State(state): State<AppState>,
    Json(profile): Json<UserProfile>,
) -> impl IntoResponse {
    if let Err(e) = profile.validate() {
        return error_response(StatusCode::UNPROCESSABLE_ENTITY, e.to_string());
    }

    let cache_key = profile_cache_key(&profile);

    {
        let cache = state.plan_cache.lock().unwrap();
        if let Some(cached) = cache.get(&cache_key) {
            tracing::debug!(cache_key, "plan.cache_hit");
            return Json(cached.clone()).into_response();
        }
    }

    tracing::info!(
        age = profile.age,
        goal = ?profile.goal_preference,
        muscle = %profile.target_muscle,
        "plan.generating"
    );

    let generated = match state.plan_service.generate(&profile).await {
        Ok(generated) => generated,
        Err(e) => {
            tracing::error!(error = %e, "plan.generation_failed");
            return error_response(map_gemini_error(&e), e.to_string());
        }
    };

    tracing::info!(
        bmi = %format!("{:.2}", generated.bmi),
        goal = %generated.goal,
        fallback = generated.fallback_used,
        "plan.generated"
    );

    cache_plan(&state.plan_cache, cache_key, &generated);

    Json(generated).into_response()
}
