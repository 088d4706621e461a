use crate::llm_client::prompts::JSON_ONLY_SYSTEM;
pub use crate::llm_client::prompts::REAL_RESOURCES_INSTRUCTION;

pub const ROADMAP_SYSTEM: &str = JSON_ONLY_SYSTEM;

/// Roadmap drafting prompt.
///
/// Placeholders: {goal}, {background}, {time_available}, {learning_style},
/// {topic}, {domain}, {intents}, {estimated_duration}, {resources_instruction}.
pub const ROADMAP_PROMPT_TEMPLATE: &str = r#"You are an expert curriculum designer. Build a personalized learning roadmap for this learner.

LEARNER PROFILE:
- Goal: {goal}
- Background: {background}
- Time available: {time_available}
- Learning style: {learning_style}

ANALYSIS HINTS (from keyword matching, may be imprecise):
- Subject: {topic}
- Domain: {domain}
- Motivations: {intents}
- Suggested overall length: {estimated_duration}

RULES:
- 3 to 6 modules, ordered from foundations to mastery.
- Module ids start at 1 and increase by 1 in list order.
- Skip material the learner's background already covers.
- Favor resources that fit the learning style.
- {resources_instruction}

Respond with a JSON object of exactly this shape:
{
  "title": "string",
  "estimatedDuration": "string, e.g. \"8-12 weeks\"",
  "personalizedMessage": "string, one or two sentences addressed to the learner",
  "modules": [
    {
      "id": 1,
      "title": "string",
      "description": "string",
      "difficulty": "Beginner" | "Intermediate" | "Advanced" | "Expert",
      "duration": "string, e.g. \"2-3 weeks\"",
      "topics": ["string"],
      "projects": ["string"],
      "resources": ["string"]
    }
  ],
  "resources": [
    {
      "type": "course" | "video" | "documentation" | "book" | "exercises",
      "title": "string",
      "provider": "string",
      "url": "https://...",
      "duration": "string",
      "free": true
    }
  ]
}"#;
