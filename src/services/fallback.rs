use crate::models::plan::{ExerciseEntry, SetCount, WorkoutPlan};
use crate::models::profile::{Goal, TargetMuscle};

/// Static plan used when the model output cannot be parsed. The arguments
/// only populate the header fields; the exercises never change.
pub fn fallback_plan(goal: Goal, muscle: TargetMuscle) -> WorkoutPlan {
    WorkoutPlan {
        goal: goal.to_string(),
        target_muscle: muscle.to_string(),
        workout_plan: vec![
            ExerciseEntry {
                exercise: "Jump Rope".to_string(),
                sets: SetCount::Count(3),
                reps: "1 min".to_string(),
                rest: "30 sec".to_string(),
            },
            ExerciseEntry {
                exercise: "Bodyweight Squats".to_string(),
                sets: SetCount::Count(3),
                reps: "15".to_string(),
                rest: "45 sec".to_string(),
            },
        ],
        notes: "Fallback plan (AI unavailable)".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_plan_is_fixed_regardless_of_arguments() {
        let a = fallback_plan(Goal::FatLoss, TargetMuscle::Legs);
        let b = fallback_plan(Goal::MuscleGain, TargetMuscle::Chest);

        for plan in [&a, &b] {
            assert_eq!(plan.workout_plan.len(), 2);
            assert_eq!(plan.workout_plan[0].exercise, "Jump Rope");
            assert_eq!(plan.workout_plan[0].reps, "1 min");
            assert_eq!(plan.workout_plan[0].rest, "30 sec");
            assert_eq!(plan.workout_plan[1].exercise, "Bodyweight Squats");
            assert_eq!(plan.workout_plan[1].reps, "15");
            assert_eq!(plan.workout_plan[1].rest, "45 sec");
            assert_eq!(plan.notes, "Fallback plan (AI unavailable)");
        }

        assert_eq!(a.goal, "Fat Loss");
        assert_eq!(a.target_muscle, "Legs");
        assert_eq!(b.goal, "Muscle Gain");
        assert_eq!(b.target_muscle, "Chest");
    }
}
