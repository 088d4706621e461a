//! Learner input: the free-text goal plus three categorical preferences.
//!
//! Enum labels are parsed leniently. An unrecognized label never fails
//! deserialization; it resolves to the variant's default and is logged.

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Lower-cases a label and drops everything but letters, digits and `+`,
/// so "Some Experience", "some_experience" and "SOME-EXPERIENCE" compare equal.
fn normalize_label(label: &str) -> String {
    label
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '+')
        .flat_map(char::to_lowercase)
        .collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Background
// ────────────────────────────────────────────────────────────────────────────

/// Self-reported prior knowledge of the subject.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String")]
pub enum Background {
    #[default]
    Beginner,
    #[serde(rename = "Some Experience")]
    SomeExperience,
    Intermediate,
    Advanced,
}

impl Background {
    pub const ALL: [Background; 4] = [
        Background::Beginner,
        Background::SomeExperience,
        Background::Intermediate,
        Background::Advanced,
    ];

    /// Parses a form label, including the earlier form's "Complete Beginner"
    /// and "Some Knowledge" wording.
    pub fn from_label(label: &str) -> Option<Self> {
        match normalize_label(label).as_str() {
            "beginner" | "completebeginner" => Some(Background::Beginner),
            "someexperience" | "someknowledge" => Some(Background::SomeExperience),
            "intermediate" => Some(Background::Intermediate),
            "advanced" => Some(Background::Advanced),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Background::Beginner => "Beginner",
            Background::SomeExperience => "Some Experience",
            Background::Intermediate => "Intermediate",
            Background::Advanced => "Advanced",
        }
    }
}

impl From<String> for Background {
    fn from(label: String) -> Self {
        Background::from_label(&label).unwrap_or_else(|| {
            warn!(label = %label, "Unrecognized background, defaulting to Beginner");
            Background::default()
        })
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Weekly time budget
// ────────────────────────────────────────────────────────────────────────────

/// Weekly study hours, in the four bands offered by the form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String")]
pub enum TimeBudget {
    #[serde(rename = "1-2h/week")]
    OneToTwoHours,
    #[default]
    #[serde(rename = "3-5h/week")]
    ThreeToFiveHours,
    #[serde(rename = "6-10h/week")]
    SixToTenHours,
    #[serde(rename = "10+h/week")]
    TenPlusHours,
}

impl TimeBudget {
    pub const ALL: [TimeBudget; 4] = [
        TimeBudget::OneToTwoHours,
        TimeBudget::ThreeToFiveHours,
        TimeBudget::SixToTenHours,
        TimeBudget::TenPlusHours,
    ];

    /// Accepts "3-5h/week" as well as "3-5 hours/week" and "3-5 hours per week".
    pub fn from_label(label: &str) -> Option<Self> {
        let normalized = normalize_label(label);
        let band = normalized
            .strip_suffix("hweek")
            .or_else(|| normalized.strip_suffix("hoursweek"))
            .or_else(|| normalized.strip_suffix("hoursperweek"))
            .unwrap_or(&normalized);

        match band {
            "12" => Some(TimeBudget::OneToTwoHours),
            "35" => Some(TimeBudget::ThreeToFiveHours),
            "610" => Some(TimeBudget::SixToTenHours),
            "10+" => Some(TimeBudget::TenPlusHours),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TimeBudget::OneToTwoHours => "1-2h/week",
            TimeBudget::ThreeToFiveHours => "3-5h/week",
            TimeBudget::SixToTenHours => "6-10h/week",
            TimeBudget::TenPlusHours => "10+h/week",
        }
    }

    /// Human phrasing used in the personalized message.
    pub fn pace_phrase(&self) -> &'static str {
        match self {
            TimeBudget::OneToTwoHours => "1-2 hours a week",
            TimeBudget::ThreeToFiveHours => "3-5 hours a week",
            TimeBudget::SixToTenHours => "6-10 hours a week",
            TimeBudget::TenPlusHours => "10+ hours a week",
        }
    }
}

impl From<String> for TimeBudget {
    fn from(label: String) -> Self {
        TimeBudget::from_label(&label).unwrap_or_else(|| {
            warn!(label = %label, "Unrecognized time budget, defaulting to 3-5h/week");
            TimeBudget::default()
        })
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Learning style
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String")]
pub enum LearningStyle {
    Visual,
    Reading,
    Practical,
    #[default]
    Mixed,
}

impl LearningStyle {
    pub const ALL: [LearningStyle; 4] = [
        LearningStyle::Visual,
        LearningStyle::Reading,
        LearningStyle::Practical,
        LearningStyle::Mixed,
    ];

    pub fn from_label(label: &str) -> Option<Self> {
        match normalize_label(label).as_str() {
            "visual" => Some(LearningStyle::Visual),
            "reading" | "readingwriting" => Some(LearningStyle::Reading),
            "practical" | "handson" => Some(LearningStyle::Practical),
            "mixed" => Some(LearningStyle::Mixed),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            LearningStyle::Visual => "Visual",
            LearningStyle::Reading => "Reading",
            LearningStyle::Practical => "Practical",
            LearningStyle::Mixed => "Mixed",
        }
    }
}

impl From<String> for LearningStyle {
    fn from(label: String) -> Self {
        LearningStyle::from_label(&label).unwrap_or_else(|| {
            warn!(label = %label, "Unrecognized learning style, defaulting to Mixed");
            LearningStyle::default()
        })
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Learner profile
// ────────────────────────────────────────────────────────────────────────────

/// Everything the synthesis engine knows about a learner. Immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearnerProfile {
    pub goal: String,
    pub background: Background,
    pub time_available: TimeBudget,
    pub learning_style: LearningStyle,
}

impl LearnerProfile {
    pub fn new(
        goal: impl Into<String>,
        background: Background,
        time_available: TimeBudget,
        learning_style: LearningStyle,
    ) -> Self {
        Self {
            goal: goal.into(),
            background,
            time_available,
            learning_style,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_background_accepts_form_and_legacy_labels() {
        assert_eq!(Background::from_label("Beginner"), Some(Background::Beginner));
        assert_eq!(
            Background::from_label("Complete Beginner"),
            Some(Background::Beginner)
        );
        assert_eq!(
            Background::from_label("some_experience"),
            Some(Background::SomeExperience)
        );
        assert_eq!(
            Background::from_label("Some Knowledge"),
            Some(Background::SomeExperience)
        );
        assert_eq!(Background::from_label("guru"), None);
    }

    #[test]
    fn test_time_budget_accepts_both_label_formats() {
        assert_eq!(
            TimeBudget::from_label("1-2h/week"),
            Some(TimeBudget::OneToTwoHours)
        );
        assert_eq!(
            TimeBudget::from_label("6-10 hours/week"),
            Some(TimeBudget::SixToTenHours)
        );
        assert_eq!(
            TimeBudget::from_label("10+ hours per week"),
            Some(TimeBudget::TenPlusHours)
        );
        assert_eq!(TimeBudget::from_label("whenever"), None);
    }

    #[test]
    fn test_learning_style_accepts_legacy_labels() {
        assert_eq!(
            LearningStyle::from_label("Reading/Writing"),
            Some(LearningStyle::Reading)
        );
        assert_eq!(
            LearningStyle::from_label("Hands-on"),
            Some(LearningStyle::Practical)
        );
    }

    #[test]
    fn test_labels_roundtrip_through_from_label() {
        for b in Background::ALL {
            assert_eq!(Background::from_label(b.label()), Some(b));
        }
        for t in TimeBudget::ALL {
            assert_eq!(TimeBudget::from_label(t.label()), Some(t));
        }
        for s in LearningStyle::ALL {
            assert_eq!(LearningStyle::from_label(s.label()), Some(s));
        }
    }

    #[test]
    fn test_profile_deserializes_with_unknown_enums_falling_back() {
        let json = r#"{
            "goal": "learn rust",
            "background": "Wizard",
            "timeAvailable": "all day",
            "learningStyle": "osmosis"
        }"#;
        let profile: LearnerProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.background, Background::Beginner);
        assert_eq!(profile.time_available, TimeBudget::ThreeToFiveHours);
        assert_eq!(profile.learning_style, LearningStyle::Mixed);
    }

    #[test]
    fn test_profile_serializes_form_labels() {
        let profile = LearnerProfile::new(
            "guitar",
            Background::SomeExperience,
            TimeBudget::TenPlusHours,
            LearningStyle::Visual,
        );
        let value = serde_json::to_value(&profile).unwrap();
        assert_eq!(value["background"], "Some Experience");
        assert_eq!(value["timeAvailable"], "10+h/week");
        assert_eq!(value["learningStyle"], "Visual");
    }
}
