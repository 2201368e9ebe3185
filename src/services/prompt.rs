use crate::models::profile::UserProfile;
use crate::services::metrics::DerivedMetrics;

const MAX_INJURIES_LEN: usize = 200;

/// Free text goes into the prompt inside a quoted slot. Strip characters that
/// could open a code fence or fake the JSON example, collapse whitespace, and
/// cap the length.
fn sanitize_free_text(input: &str) -> String {
    let cleaned: String = input
        .chars()
        .filter(|c| !matches!(c, '`' | '{' | '}' | '"'))
        .collect();

    let collapsed = cleaned.split_whitespace().collect::<Vec<_>>().join(" ");

    if collapsed.is_empty() {
        return "None".to_string();
    }
    collapsed.chars().take(MAX_INJURIES_LEN).collect()
}

pub fn build_prompt(profile: &UserProfile, metrics: &DerivedMetrics) -> String {
    format!(
        r#"You are a certified fitness trainer.

STRICT RULES:
- Return ONLY valid JSON
- No markdown
- No explanation
- Output must start with {{ and end with }}

Output format:
{{
  "goal": "",
  "target_muscle": "",
  "workout_plan": [
    {{
      "exercise": "",
      "sets": "",
      "reps": "",
      "rest": ""
    }}
  ],
  "notes": ""
}}

User Details:
Age: {}
Height: {}
Weight: {}
BMI: {:.2}
Goal: {}
Muscle: {}
Experience: {}
Diet: {}
Injuries: "{}"
Equipment: {}
Duration: {}"#,
        profile.age,
        profile.height_cm,
        profile.weight_kg,
        metrics.bmi,
        metrics.resolved_goal,
        profile.target_muscle,
        profile.experience,
        profile.diet,
        sanitize_free_text(&profile.injuries),
        profile.equipment,
        profile.duration_minutes,
    )
}
