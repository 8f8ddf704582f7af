use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::error::{CompassError, Result};

/// Why the user is relocating. Drives the tone of the generated strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TripPurpose {
    /// Explore a new life / wander
    #[default]
    Explore,
    /// Rest and recovery
    Healing,
    /// Build a career or a business
    Career,
    /// Expand social circles
    Social,
    /// Hunt for creative inspiration
    Inspiration,
}

impl TripPurpose {
    pub const ALL: [TripPurpose; 5] = [
        TripPurpose::Explore,
        TripPurpose::Healing,
        TripPurpose::Career,
        TripPurpose::Social,
        TripPurpose::Inspiration,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TripPurpose::Explore => "explore",
            TripPurpose::Healing => "healing",
            TripPurpose::Career => "career",
            TripPurpose::Social => "social",
            TripPurpose::Inspiration => "inspiration",
        }
    }

    /// Short mode label used in the report header.
    pub fn label(&self) -> &'static str {
        match self {
            TripPurpose::Explore => "Exploration",
            TripPurpose::Healing => "Healing",
            TripPurpose::Career => "Career",
            TripPurpose::Social => "Social",
            TripPurpose::Inspiration => "Inspiration",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "explore" => Some(TripPurpose::Explore),
            "healing" => Some(TripPurpose::Healing),
            "career" => Some(TripPurpose::Career),
            "social" => Some(TripPurpose::Social),
            "inspiration" => Some(TripPurpose::Inspiration),
            _ => None,
        }
    }
}

/// Everything the form collects. Free text except the purpose.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserInputs {
    pub target_city: String,
    pub trip_purpose: TripPurpose,
    pub birth_date: Option<NaiveDate>,
    pub birth_time: Option<NaiveTime>,
    pub birth_place: String,
    pub mbti: Option<String>,
}

impl UserInputs {
    /// Names of required fields that are still empty. The purpose carries a
    /// default, so only the other three can actually gate submission.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.target_city.trim().is_empty() {
            missing.push("target city");
        }
        if self.birth_date.is_none() {
            missing.push("birth date");
        }
        if self.birth_place.trim().is_empty() {
            missing.push("birth place");
        }
        missing
    }

    pub fn validate(&self) -> Result<()> {
        let missing = self.missing_fields();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(CompassError::Validation(format!(
                "required fields missing: {}",
                missing.join(", ")
            )))
        }
    }

    /// MBTI uppercased for display, `None` when blank.
    pub fn mbti_display(&self) -> Option<String> {
        self.mbti
            .as_deref()
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .map(str::to_uppercase)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> UserInputs {
        UserInputs {
            target_city: "Dali".to_string(),
            trip_purpose: TripPurpose::Healing,
            birth_date: NaiveDate::from_ymd_opt(1995, 4, 12),
            birth_time: None,
            birth_place: "Chengdu".to_string(),
            mbti: Some("infj".to_string()),
        }
    }

    #[test]
    fn default_purpose_is_explore() {
        assert_eq!(UserInputs::default().trip_purpose, TripPurpose::Explore);
    }

    #[test]
    fn missing_fields_reports_each_gap() {
        let empty = UserInputs::default();
        assert_eq!(
            empty.missing_fields(),
            vec!["target city", "birth date", "birth place"]
        );

        let mut partial = filled();
        partial.birth_place = "   ".to_string();
        assert_eq!(partial.missing_fields(), vec!["birth place"]);
        assert!(partial.validate().is_err());
        assert!(filled().validate().is_ok());
    }

    #[test]
    fn mbti_is_normalized_for_display() {
        assert_eq!(filled().mbti_display().as_deref(), Some("INFJ"));
        let mut blank = filled();
        blank.mbti = Some("  ".to_string());
        assert_eq!(blank.mbti_display(), None);
    }

    #[test]
    fn purpose_parses_case_insensitively() {
        assert_eq!(TripPurpose::parse(" Career "), Some(TripPurpose::Career));
        assert_eq!(TripPurpose::parse("retire"), None);
    }
}
