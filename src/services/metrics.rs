use crate::models::profile::{Goal, GoalPreference, UserProfile};

#[derive(Debug, Clone, Copy)]
pub struct DerivedMetrics {
    pub bmi: f64,
    pub resolved_goal: Goal,
}

pub fn derive_metrics(profile: &UserProfile) -> DerivedMetrics {
    let bmi = compute_bmi(profile.weight_kg as f64, profile.height_cm as f64);
    DerivedMetrics {
        bmi,
        resolved_goal: classify_goal(profile.goal_preference, bmi),
    }
}

/// BMI = weight_kg / (height_m)^2. Exact formula; rounding happens only at
/// display time. Callers keep height > 0 via the input bounds.
pub fn compute_bmi(weight_kg: f64, height_cm: f64) -> f64 {
    let height_m = height_cm / 100.0;
    weight_kg / (height_m * height_m)
}

/// An explicit preference always wins. For `Auto`, the comparisons are strict:
/// a BMI of exactly 18.5 or 25.0 classifies as Maintenance.
pub fn classify_goal(preference: GoalPreference, bmi: f64) -> Goal {
    match preference {
        GoalPreference::FatLoss => Goal::FatLoss,
        GoalPreference::MuscleGain => Goal::MuscleGain,
        GoalPreference::Maintenance => Goal::Maintenance,
        GoalPreference::Auto => {
            if bmi < 18.5 {
                Goal::MuscleGain
            } else if bmi > 25.0 {
                Goal::FatLoss
            } else {
                Goal::Maintenance
            }
        }
    }
}
