pub mod profile;
pub mod roadmap;

pub use profile::{Background, LearnerProfile, LearningStyle, TimeBudget};
pub use roadmap::{Difficulty, Module, Resource, ResourceKind, Roadmap};
