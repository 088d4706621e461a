//! Roadmap synthesis: goal analysis, template personalization, resource
//! resolution, and the optional AI roundtrip in front of them.

pub mod ai;
pub mod assembler;
pub mod classifier;
pub mod handlers;
pub mod intent;
pub mod personalizer;
pub mod prompts;
pub mod resources;
pub mod templates;
pub mod text;
pub mod topic;
pub mod validation;
