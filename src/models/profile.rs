use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Goal selection as submitted by the form. `Auto` defers to the BMI-based
/// classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GoalPreference {
    Auto,
    FatLoss,
    MuscleGain,
    Maintenance,
}

/// Resolved training goal after classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Goal {
    FatLoss,
    MuscleGain,
    Maintenance,
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Goal::FatLoss => "Fat Loss",
            Goal::MuscleGain => "Muscle Gain",
            Goal::Maintenance => "Maintenance",
        };
        write!(f, "{}", label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TargetMuscle {
    Chest,
    Back,
    Legs,
    Shoulders,
    Arms,
    FullBody,
}

impl fmt::Display for TargetMuscle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TargetMuscle::Chest => "Chest",
            TargetMuscle::Back => "Back",
            TargetMuscle::Legs => "Legs",
            TargetMuscle::Shoulders => "Shoulders",
            TargetMuscle::Arms => "Arms",
            TargetMuscle::FullBody => "Full Body",
        };
        write!(f, "{}", label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Experience {
    Beginner,
    Intermediate,
    Advanced,
}

impl fmt::Display for Experience {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Experience::Beginner => "Beginner",
            Experience::Intermediate => "Intermediate",
            Experience::Advanced => "Advanced",
        };
        write!(f, "{}", label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Diet {
    Vegetarian,
    NonVegetarian,
    Vegan,
}

impl fmt::Display for Diet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Diet::Vegetarian => "Vegetarian",
            Diet::NonVegetarian => "Non-Vegetarian",
            Diet::Vegan => "Vegan",
        };
        write!(f, "{}", label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Equipment {
    FullGym,
    DumbbellsOnly,
    BodyweightOnly,
}

impl fmt::Display for Equipment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Equipment::FullGym => "Full Gym",
            Equipment::DumbbellsOnly => "Dumbbells Only",
            Equipment::BodyweightOnly => "Bodyweight Only",
        };
        write!(f, "{}", label)
    }
}

/// One generation request as submitted by the form. Built fresh per request;
/// nothing is persisted across submissions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserProfile {
    pub age: u32,
    pub height_cm: u32,
    pub weight_kg: u32,
    pub goal_preference: GoalPreference,
    pub target_muscle: TargetMuscle,
    pub experience: Experience,
    pub diet: Diet,
    pub injuries: String,
    pub equipment: Equipment,
    pub duration_minutes: u32,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProfileError {
    #[error("age must be between 10 and 80, got {0}")]
    AgeOutOfRange(u32),
    #[error("height must be between 100 and 220 cm, got {0}")]
    HeightOutOfRange(u32),
    #[error("weight must be between 30 and 150 kg, got {0}")]
    WeightOutOfRange(u32),
    #[error("duration must be between 20 and 120 minutes, got {0}")]
    DurationOutOfRange(u32),
}

impl UserProfile {
    /// Server-side mirror of the form input bounds. The HTML inputs enforce
    /// the same ranges, but the API is callable without the form.
    pub fn validate(&self) -> Result<(), ProfileError> {
        if !(10..=80).contains(&self.age) {
            return Err(ProfileError::AgeOutOfRange(self.age));
        }
        if !(100..=220).contains(&self.height_cm) {
            return Err(ProfileError::HeightOutOfRange(self.height_cm));
        }
        if !(30..=150).contains(&self.weight_kg) {
            return Err(ProfileError::WeightOutOfRange(self.weight_kg));
        }
        if !(20..=120).contains(&self.duration_minutes) {
            return Err(ProfileError::DurationOutOfRange(self.duration_minutes));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_profile() -> UserProfile {
        UserProfile {
            age: 30,
            height_cm: 180,
            weight_kg: 75,
            goal_preference: GoalPreference::Auto,
            target_muscle: TargetMuscle::FullBody,
            experience: Experience::Beginner,
            diet: Diet::NonVegetarian,
            injuries: "None".to_string(),
            equipment: Equipment::FullGym,
            duration_minutes: 60,
        }
    }

    #[test]
    fn test_validate_accepts_bounds() {
        let mut profile = base_profile();
        assert_eq!(profile.validate(), Ok(()));

        profile.age = 10;
        profile.height_cm = 220;
        profile.weight_kg = 30;
        profile.duration_minutes = 120;
        assert_eq!(profile.validate(), Ok(()));
    }

    #[test]
    fn test_validate_rejects_out_of_range() {
        let mut profile = base_profile();
        profile.age = 9;
        assert_eq!(profile.validate(), Err(ProfileError::AgeOutOfRange(9)));

        let mut profile = base_profile();
        profile.height_cm = 221;
        assert_eq!(
            profile.validate(),
            Err(ProfileError::HeightOutOfRange(221))
        );

        let mut profile = base_profile();
        profile.weight_kg = 151;
        assert_eq!(profile.validate(), Err(ProfileError::WeightOutOfRange(151)));

        let mut profile = base_profile();
        profile.duration_minutes = 19;
        assert_eq!(
            profile.validate(),
            Err(ProfileError::DurationOutOfRange(19))
        );
    }

    #[test]
    fn test_display_labels_match_form_options() {
        assert_eq!(Goal::FatLoss.to_string(), "Fat Loss");
        assert_eq!(TargetMuscle::FullBody.to_string(), "Full Body");
        assert_eq!(Diet::NonVegetarian.to_string(), "Non-Vegetarian");
        assert_eq!(Equipment::DumbbellsOnly.to_string(), "Dumbbells Only");
    }
}
