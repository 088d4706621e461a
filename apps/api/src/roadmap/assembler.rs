//! Roadmap Assembler: the deterministic pipeline end to end.
//!
//! `assemble` is total over every `LearnerProfile`: topic, domain and intents
//! are derived from the goal, modules and resources are built from them, and
//! the headline fields come from fixed lookup tables.

use serde::Serialize;
use tracing::debug;

use crate::models::{Background, LearnerProfile, LearningStyle, Roadmap, TimeBudget};
use crate::roadmap::classifier::{classify, DomainCategory};
use crate::roadmap::intent::{detect_intents, IntentSet};
use crate::roadmap::personalizer::build_modules;
use crate::roadmap::resources::resolve_resources;
use crate::roadmap::topic::extract;

/// Everything derived from the goal text before any module is built.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GoalAnalysis {
    pub topic: String,
    pub domain: DomainCategory,
    pub intents: IntentSet,
    pub professional: bool,
}

/// Runs the extractor, classifier and intent detector over the goal.
pub fn analyze(profile: &LearnerProfile) -> GoalAnalysis {
    let topic = extract(&profile.goal);
    let domain = classify(&topic);
    let intents = detect_intents(&profile.goal, domain);
    GoalAnalysis {
        topic,
        domain,
        intents,
        professional: domain.is_professional(),
    }
}

/// Builds the full roadmap for `profile` without any AI involvement.
pub fn assemble(profile: &LearnerProfile) -> Roadmap {
    let analysis = analyze(profile);
    debug!(
        topic = %analysis.topic,
        domain = %analysis.domain,
        intents = ?analysis.intents,
        "Assembling template roadmap"
    );

    let modules = build_modules(
        analysis.domain,
        profile.background,
        profile.learning_style,
        &analysis.topic,
        &analysis.intents,
    );
    let resources = resolve_resources(
        analysis.domain,
        profile.learning_style,
        &analysis.topic,
        profile.background,
    );

    Roadmap {
        title: format!("Master {}", analysis.topic),
        estimated_duration: estimated_duration(profile.time_available).to_string(),
        personalized_message: personalized_message(profile),
        modules,
        resources,
    }
}

/// Overall length keyed by weekly time budget. Independent of module durations.
pub fn estimated_duration(time: TimeBudget) -> &'static str {
    match time {
        TimeBudget::OneToTwoHours => "12-16 weeks",
        TimeBudget::ThreeToFiveHours => "8-12 weeks",
        TimeBudget::SixToTenHours => "6-8 weeks",
        TimeBudget::TenPlusHours => "4-6 weeks",
    }
}

fn background_message(background: Background) -> &'static str {
    match background {
        Background::Beginner => "Perfect starting point for beginners",
        Background::SomeExperience => "Building on your existing knowledge",
        Background::Intermediate => "Taking your skills to the next level",
        Background::Advanced => "Master-level deep dive",
    }
}

fn style_message(style: LearningStyle) -> &'static str {
    match style {
        LearningStyle::Visual => "with visual learning optimization",
        LearningStyle::Reading => "with reading-focused materials",
        LearningStyle::Practical => "with hands-on project focus",
        LearningStyle::Mixed => "with balanced learning approach",
    }
}

pub fn personalized_message(profile: &LearnerProfile) -> String {
    format!(
        "{} {}, paced for {}.",
        background_message(profile.background),
        style_message(profile.learning_style),
        profile.time_available.pace_phrase()
    )
}
