//! Boundary checks: the incoming request before the pipeline runs, and an
//! AI-drafted roadmap before it is trusted.

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use crate::errors::AppError;
use crate::models::{Background, LearnerProfile, LearningStyle, Roadmap, TimeBudget};

pub const MIN_GOAL_CHARS: usize = 5;
pub const MAX_GOAL_CHARS: usize = 100;

// ────────────────────────────────────────────────────────────────────────────
// Request validation
// ────────────────────────────────────────────────────────────────────────────

/// Raw request body. Fields default to empty so a missing field gets the same
/// message as a blank one.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoadmapRequest {
    #[serde(default)]
    pub goal: String,
    #[serde(default)]
    pub background: String,
    #[serde(default)]
    pub time_available: String,
    #[serde(default)]
    pub learning_style: String,
}

impl RoadmapRequest {
    /// Checks required fields and goal length, then builds the profile.
    /// Unknown enum labels are not errors; they fall back to defaults.
    pub fn into_profile(self) -> Result<LearnerProfile, AppError> {
        for (field, value) in [
            ("goal", &self.goal),
            ("background", &self.background),
            ("timeAvailable", &self.time_available),
            ("learningStyle", &self.learning_style),
        ] {
            if value.trim().is_empty() {
                return Err(AppError::Validation(format!("{field} is required")));
            }
        }

        let goal = self.goal.trim();
        let len = goal.chars().count();
        if len < MIN_GOAL_CHARS {
            return Err(AppError::Validation(
                "Please be more specific about your goal".to_string(),
            ));
        }
        if len > MAX_GOAL_CHARS {
            return Err(AppError::Validation(
                "Goal is too long, please be more concise".to_string(),
            ));
        }

        Ok(LearnerProfile::new(
            goal,
            Background::from(self.background),
            TimeBudget::from(self.time_available),
            LearningStyle::from(self.learning_style),
        ))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// AI roadmap schema validation
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Error, PartialEq)]
pub enum SchemaError {
    #[error("roadmap JSON has the wrong shape: {0}")]
    Shape(String),

    #[error("field '{0}' is blank")]
    Blank(String),

    #[error("roadmap has no modules")]
    NoModules,

    #[error("module at position {position} has id {id}")]
    ModuleId { position: usize, id: u32 },

    #[error("module {0} has no topics")]
    NoTopics(u32),

    #[error("roadmap has no resources")]
    NoResources,
}

/// Accepts an AI-drafted roadmap only if it is a complete, well-formed `Roadmap`.
pub fn validate_ai_roadmap(value: Value) -> Result<Roadmap, SchemaError> {
    let roadmap: Roadmap =
        serde_json::from_value(value).map_err(|e| SchemaError::Shape(e.to_string()))?;

    require_text("title", &roadmap.title)?;
    require_text("estimatedDuration", &roadmap.estimated_duration)?;

    if roadmap.modules.is_empty() {
        return Err(SchemaError::NoModules);
    }
    for (position, module) in roadmap.modules.iter().enumerate() {
        let position = position + 1;
        if module.id as usize != position {
            return Err(SchemaError::ModuleId {
                position,
                id: module.id,
            });
        }
        require_text(&format!("modules[{position}].title"), &module.title)?;
        if module.topics.iter().all(|t| t.trim().is_empty()) {
            return Err(SchemaError::NoTopics(module.id));
        }
    }

    if roadmap.resources.is_empty() {
        return Err(SchemaError::NoResources);
    }
    for (i, resource) in roadmap.resources.iter().enumerate() {
        require_text(&format!("resources[{i}].title"), &resource.title)?;
        require_text(&format!("resources[{i}].url"), &resource.url)?;
    }

    Ok(roadmap)
}

fn require_text(field: &str, value: &str) -> Result<(), SchemaError> {
    if value.trim().is_empty() {
        Err(SchemaError::Blank(field.to_string()))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request(goal: &str) -> RoadmapRequest {
        RoadmapRequest {
            goal: goal.to_string(),
            background: "Beginner".to_string(),
            time_available: "3-5h/week".to_string(),
            learning_style: "Visual".to_string(),
        }
    }

    fn validation_message(result: Result<LearnerProfile, AppError>) -> String {
        match result {
            Err(AppError::Validation(msg)) => msg,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_valid_request_builds_trimmed_profile() {
        let profile = request("  learn machine learning  ").into_profile().unwrap();
        assert_eq!(profile.goal, "learn machine learning");
        assert_eq!(profile.background, Background::Beginner);
        assert_eq!(profile.time_available, TimeBudget::ThreeToFiveHours);
        assert_eq!(profile.learning_style, LearningStyle::Visual);
    }

    #[test]
    fn test_blank_field_is_rejected() {
        let mut req = request("learn rust");
        req.learning_style = "   ".to_string();
        assert_eq!(
            validation_message(req.into_profile()),
            "learningStyle is required"
        );
    }

    #[test]
    fn test_missing_fields_deserialize_as_blank() {
        let req: RoadmapRequest = serde_json::from_value(json!({ "goal": "learn rust" })).unwrap();
        assert_eq!(
            validation_message(req.into_profile()),
            "background is required"
        );
    }

    #[test]
    fn test_goal_length_bounds() {
        assert_eq!(
            validation_message(request("asdf").into_profile()),
            "Please be more specific about your goal"
        );
        assert!(request("chess").into_profile().is_ok());
        assert!(request(&"a".repeat(MAX_GOAL_CHARS)).into_profile().is_ok());
        assert_eq!(
            validation_message(request(&"a".repeat(MAX_GOAL_CHARS + 1)).into_profile()),
            "Goal is too long, please be more concise"
        );
    }

    #[test]
    fn test_unknown_labels_fall_back() {
        let mut req = request("learn pottery");
        req.background = "Grandmaster".to_string();
        req.time_available = "whenever".to_string();
        req.learning_style = "Hands-on".to_string();
        let profile = req.into_profile().unwrap();
        assert_eq!(profile.background, Background::Beginner);
        assert_eq!(profile.time_available, TimeBudget::ThreeToFiveHours);
        assert_eq!(profile.learning_style, LearningStyle::Practical, "legacy label");
    }

    fn valid_roadmap() -> Value {
        json!({
            "title": "Master Rust",
            "estimatedDuration": "8-12 weeks",
            "personalizedMessage": "Let's go.",
            "modules": [
                {
                    "id": 1,
                    "title": "Rust Fundamentals",
                    "description": "Ownership and borrowing",
                    "difficulty": "Beginner",
                    "duration": "3 weeks",
                    "topics": ["Ownership"]
                },
                {
                    "id": 2,
                    "title": "Async Rust",
                    "description": "Tokio",
                    "difficulty": "Intermediate",
                    "duration": "4 weeks",
                    "topics": ["Futures"],
                    "projects": ["Chat server"],
                    "resources": ["Tokio tutorial"]
                }
            ],
            "resources": [
                {
                    "type": "book",
                    "title": "The Rust Programming Language",
                    "provider": "Rust Project",
                    "url": "https://doc.rust-lang.org/book/",
                    "duration": "Self-paced",
                    "free": true
                }
            ]
        })
    }

    #[test]
    fn test_valid_ai_roadmap_is_accepted() {
        let roadmap = validate_ai_roadmap(valid_roadmap()).unwrap();
        assert_eq!(roadmap.modules.len(), 2);
        assert!(roadmap.modules[0].projects.is_empty(), "projects default to empty");
    }

    #[test]
    fn test_missing_field_is_shape_error() {
        let mut value = valid_roadmap();
        value.as_object_mut().unwrap().remove("personalizedMessage");
        assert!(matches!(
            validate_ai_roadmap(value),
            Err(SchemaError::Shape(_))
        ));
    }

    #[test]
    fn test_unknown_difficulty_is_shape_error() {
        let mut value = valid_roadmap();
        value["modules"][0]["difficulty"] = json!("Easy");
        assert!(matches!(
            validate_ai_roadmap(value),
            Err(SchemaError::Shape(_))
        ));
    }

    #[test]
    fn test_module_ids_must_be_sequential() {
        let mut value = valid_roadmap();
        value["modules"][1]["id"] = json!(3);
        assert_eq!(
            validate_ai_roadmap(value),
            Err(SchemaError::ModuleId { position: 2, id: 3 })
        );
    }

    #[test]
    fn test_empty_modules_rejected() {
        let mut value = valid_roadmap();
        value["modules"] = json!([]);
        assert_eq!(validate_ai_roadmap(value), Err(SchemaError::NoModules));
    }

    #[test]
    fn test_module_without_topics_rejected() {
        let mut value = valid_roadmap();
        value["modules"][0]["topics"] = json!([" "]);
        assert_eq!(validate_ai_roadmap(value), Err(SchemaError::NoTopics(1)));
    }

    #[test]
    fn test_blank_title_rejected() {
        let mut value = valid_roadmap();
        value["title"] = json!("  ");
        assert_eq!(
            validate_ai_roadmap(value),
            Err(SchemaError::Blank("title".to_string()))
        );
    }

    #[test]
    fn test_resources_required() {
        let mut value = valid_roadmap();
        value["resources"] = json!([]);
        assert_eq!(validate_ai_roadmap(value), Err(SchemaError::NoResources));

        let mut value = valid_roadmap();
        value["resources"][0]["url"] = json!("");
        assert_eq!(
            validate_ai_roadmap(value),
            Err(SchemaError::Blank("resources[0].url".to_string()))
        );
    }
}
