//! User profile: the structured input that drives plan generation.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Gender {
    Male,
    Female,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FitnessLevel {
    Beginner,
    Intermediate,
    Advanced,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Goal {
    FatLoss,
    MuscleGain,
    Maintenance,
    GeneralFitness,
    Endurance,
}

/// Where the user trains. Drives the activity-label suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Location {
    Home,
    Hostel,
    Gym,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Budget {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DietType {
    Vegetarian,
    NonVegetarian,
    Vegan,
    Eggetarian,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Region {
    NorthIndian,
    SouthIndian,
    RegionalOther,
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
        })
    }
}

impl fmt::Display for FitnessLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            FitnessLevel::Beginner => "Beginner",
            FitnessLevel::Intermediate => "Intermediate",
            FitnessLevel::Advanced => "Advanced",
        })
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Goal::FatLoss => "Fat loss",
            Goal::MuscleGain => "Muscle gain",
            Goal::Maintenance => "Maintenance",
            Goal::GeneralFitness => "General fitness",
            Goal::Endurance => "Endurance",
        })
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Location::Home => "home",
            Location::Hostel => "hostel",
            Location::Gym => "gym",
        })
    }
}

impl fmt::Display for Budget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Budget::Low => "low",
            Budget::Medium => "medium",
            Budget::High => "high",
        })
    }
}

impl fmt::Display for DietType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DietType::Vegetarian => "Vegetarian",
            DietType::NonVegetarian => "Non-Vegetarian",
            DietType::Vegan => "Vegan",
            DietType::Eggetarian => "Eggetarian",
        })
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Region::NorthIndian => "North Indian",
            Region::SouthIndian => "South Indian",
            Region::RegionalOther => "Other",
        })
    }
}

/// Physiological and lifestyle attributes collected during onboarding.
///
/// Values are assumed range-checked by whoever builds the profile; the rule
/// engine never validates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub name: String,
    /// Years.
    pub age: u32,
    pub gender: Gender,
    /// Centimetres.
    pub height: f64,
    /// Kilograms.
    pub weight: f64,
    pub fitness_level: FitnessLevel,
    pub goal: Goal,
    pub location: Location,
    pub budget: Budget,
    pub diet_type: DietType,
    pub region: Region,
    /// Case-insensitive substring; matching foods are avoided where possible.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allergies: Option<String>,
}

impl UserProfile {
    /// Allergy filter with blank input treated as "none". Non-blank text is
    /// passed through as entered.
    pub fn allergy_filter(&self) -> Option<&str> {
        self.allergies.as_deref().filter(|s| !s.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_deserializes_kebab_case_enums() {
        let json = r#"{
            "name": "Asha",
            "age": 21,
            "gender": "female",
            "height": 162.0,
            "weight": 55.5,
            "fitnessLevel": "intermediate",
            "goal": "general-fitness",
            "location": "hostel",
            "budget": "low",
            "dietType": "non-vegetarian",
            "region": "south-indian"
        }"#;
        let p: UserProfile = serde_json::from_str(json).unwrap();
        assert_eq!(p.fitness_level, FitnessLevel::Intermediate);
        assert_eq!(p.goal, Goal::GeneralFitness);
        assert_eq!(p.diet_type, DietType::NonVegetarian);
        assert_eq!(p.region, Region::SouthIndian);
        assert!(p.allergies.is_none());
    }

    #[test]
    fn test_blank_allergies_are_ignored() {
        let json = r#"{"name":"A","age":30,"gender":"male","height":170,"weight":70,
            "fitnessLevel":"beginner","goal":"maintenance","location":"home",
            "budget":"medium","dietType":"vegan","region":"north-indian","allergies":"   "}"#;
        let p: UserProfile = serde_json::from_str(json).unwrap();
        assert_eq!(p.allergy_filter(), None);
    }

    #[test]
    fn test_allergy_text_is_not_trimmed() {
        let json = r#"{"name":"A","age":30,"gender":"male","height":170,"weight":70,
            "fitnessLevel":"beginner","goal":"maintenance","location":"home",
            "budget":"medium","dietType":"vegan","region":"north-indian","allergies":" dal"}"#;
        let p: UserProfile = serde_json::from_str(json).unwrap();
        assert_eq!(p.allergy_filter(), Some(" dal"));
    }

    #[test]
    fn test_labels() {
        assert_eq!(Goal::FatLoss.to_string(), "Fat loss");
        assert_eq!(FitnessLevel::Beginner.to_string(), "Beginner");
        assert_eq!(Location::Gym.to_string(), "gym");
    }
}
