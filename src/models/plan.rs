use std::fmt;

use serde::{Deserialize, Serialize};

/// Workout plan as decoded from the model output (or built by the fallback
/// provider). Never mutated after creation; consumed only for rendering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutPlan {
    pub goal: String,
    pub target_muscle: String,
    pub workout_plan: Vec<ExerciseEntry>,
    pub notes: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExerciseEntry {
    pub exercise: String,
    pub sets: SetCount,
    pub reps: String,
    pub rest: String,
}

/// Models return `sets` inconsistently as either a bare number or a string
/// ("3" or "3-4"). Accept both.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SetCount {
    Count(u32),
    Text(String),
}

impl fmt::Display for SetCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SetCount::Count(n) => write!(f, "{}", n),
            SetCount::Text(s) => write!(f, "{}", s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_count_accepts_number_and_string() {
        let numeric: ExerciseEntry = serde_json::from_str(
            r#"{"exercise":"Jump Rope","sets":3,"reps":"1 min","rest":"30 sec"}"#,
        )
        .unwrap();
        assert_eq!(numeric.sets.to_string(), "3");

        let text: ExerciseEntry = serde_json::from_str(
            r#"{"exercise":"Bench Press","sets":"3-4","reps":"8","rest":"90 sec"}"#,
        )
        .unwrap();
        assert_eq!(text.sets.to_string(), "3-4");
    }
}
