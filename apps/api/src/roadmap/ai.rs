//! AI roundtrip with deterministic fallback.
//!
//! A drafter proposes a whole roadmap as JSON. It is adopted only if it
//! arrives within the timeout and passes schema validation; otherwise the
//! template pipeline produces the roadmap. The two are never mixed.

use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;
use tracing::{info, warn};

use crate::llm_client::{LlmClient, LlmError};
use crate::models::{LearnerProfile, Roadmap};
use crate::roadmap::assembler::{analyze, assemble, estimated_duration, GoalAnalysis};
use crate::roadmap::prompts::{
    REAL_RESOURCES_INSTRUCTION, ROADMAP_PROMPT_TEMPLATE, ROADMAP_SYSTEM,
};
use crate::roadmap::validation::{validate_ai_roadmap, SchemaError};

/// Drafts a roadmap as untrusted JSON.
#[async_trait]
pub trait RoadmapDrafter: Send + Sync {
    async fn draft(
        &self,
        profile: &LearnerProfile,
        analysis: &GoalAnalysis,
    ) -> Result<Value, LlmError>;
}

/// Claude-backed drafter.
pub struct LlmRoadmapDrafter {
    llm: LlmClient,
}

impl LlmRoadmapDrafter {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl RoadmapDrafter for LlmRoadmapDrafter {
    async fn draft(
        &self,
        profile: &LearnerProfile,
        analysis: &GoalAnalysis,
    ) -> Result<Value, LlmError> {
        let prompt = build_roadmap_prompt(profile, analysis);
        self.llm.call_json::<Value>(&prompt, ROADMAP_SYSTEM).await
    }
}

pub fn build_roadmap_prompt(profile: &LearnerProfile, analysis: &GoalAnalysis) -> String {
    let intents = analysis
        .intents
        .iter()
        .filter_map(|i| serde_json::to_value(i).ok())
        .filter_map(|v| v.as_str().map(str::to_string))
        .collect::<Vec<_>>()
        .join(", ");

    // The goal is user text and goes in last so its braces are never re-filled.
    ROADMAP_PROMPT_TEMPLATE
        .replace("{background}", profile.background.label())
        .replace("{time_available}", profile.time_available.label())
        .replace("{learning_style}", profile.learning_style.label())
        .replace("{topic}", &analysis.topic)
        .replace("{domain}", analysis.domain.as_str())
        .replace("{intents}", &intents)
        .replace(
            "{estimated_duration}",
            estimated_duration(profile.time_available),
        )
        .replace("{resources_instruction}", REAL_RESOURCES_INSTRUCTION)
        .replace("{goal}", &profile.goal)
}

// ────────────────────────────────────────────────────────────────────────────
// Generation with fallback
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoadmapSource {
    Ai,
    Template,
}

impl RoadmapSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            RoadmapSource::Ai => "ai",
            RoadmapSource::Template => "template",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedRoadmap {
    pub roadmap: Roadmap,
    pub source: RoadmapSource,
}

/// Why an AI draft was not used.
#[derive(Debug, Error)]
pub enum FallbackReason {
    #[error("no drafter configured")]
    Disabled,

    #[error("draft timed out after {0:?}")]
    Timeout(Duration),

    #[error("draft failed: {0}")]
    Llm(#[from] LlmError),

    #[error("draft rejected: {0}")]
    Schema(#[from] SchemaError),
}

/// Produces a roadmap, preferring the drafter when present. Never fails.
pub async fn generate_roadmap(
    profile: &LearnerProfile,
    drafter: Option<&dyn RoadmapDrafter>,
    timeout: Duration,
) -> GeneratedRoadmap {
    match draft_roadmap(profile, drafter, timeout).await {
        Ok(roadmap) => {
            info!(modules = roadmap.modules.len(), "Using AI-drafted roadmap");
            GeneratedRoadmap {
                roadmap,
                source: RoadmapSource::Ai,
            }
        }
        Err(reason) => {
            if !matches!(reason, FallbackReason::Disabled) {
                warn!(reason = %reason, "AI roadmap unavailable, using templates");
            }
            GeneratedRoadmap {
                roadmap: assemble(profile),
                source: RoadmapSource::Template,
            }
        }
    }
}

async fn draft_roadmap(
    profile: &LearnerProfile,
    drafter: Option<&dyn RoadmapDrafter>,
    timeout: Duration,
) -> Result<Roadmap, FallbackReason> {
    let drafter = drafter.ok_or(FallbackReason::Disabled)?;
    let analysis = analyze(profile);

    let value = tokio::time::timeout(timeout, drafter.draft(profile, &analysis))
        .await
        .map_err(|_| FallbackReason::Timeout(timeout))??;

    Ok(validate_ai_roadmap(value)?)
}
