use serde::{Deserialize, Serialize};

/// Module difficulty label shown on the roadmap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl Difficulty {
    /// The next level up, saturating at `Expert`.
    pub fn raised(self) -> Self {
        match self {
            Difficulty::Beginner => Difficulty::Intermediate,
            Difficulty::Intermediate => Difficulty::Advanced,
            Difficulty::Advanced | Difficulty::Expert => Difficulty::Expert,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Course,
    Video,
    Documentation,
    Book,
    Exercises,
}

/// One step of the curriculum. `id` is 1-based and equals the module's position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Module {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub difficulty: Difficulty,
    pub duration: String,
    pub topics: Vec<String>,
    #[serde(default)]
    pub projects: Vec<String>,
    #[serde(default)]
    pub resources: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    #[serde(rename = "type")]
    pub kind: ResourceKind,
    pub title: String,
    pub provider: String,
    pub url: String,
    pub duration: String,
    pub free: bool,
}

/// The generated curriculum returned to the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Roadmap {
    pub title: String,
    pub estimated_duration: String,
    pub personalized_message: String,
    pub modules: Vec<Module>,
    pub resources: Vec<Resource>,
}
