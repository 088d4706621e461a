//! Personalizer: turns domain skeletons into the learner's module list.
//!
//! Steps, in order:
//! 1. Drop the most basic skeletons the learner's background already covers
//! 2. Scale each module's duration by a per-background multiplier
//! 3. Raise difficulty labels for advanced learners
//! 4. Append intent-specific topics/projects/resources to every module
//! 5. Append a study-format resource for the learning style

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::{Background, LearningStyle, Module};
use crate::roadmap::classifier::DomainCategory;
use crate::roadmap::intent::{Intent, IntentSet};
use crate::roadmap::templates::{skeletons_for, ModuleSkeleton};

/// "3 weeks", "2-3 weeks", "2 - 3 weeks". Captures the lower and optional upper bound.
static WEEK_RANGE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d+)(?:\s*-\s*(\d+))?").expect("week range regex is valid"));

/// Builds the ordered, personalized module list. Never empty, never fails.
pub fn build_modules(
    domain: DomainCategory,
    background: Background,
    learning_style: LearningStyle,
    topic: &str,
    intents: &IntentSet,
) -> Vec<Module> {
    let professional = domain.is_professional();
    let multiplier = duration_multiplier(background);

    select_skeletons(skeletons_for(domain), background)
        .iter()
        .zip(1u32..)
        .map(|(skeleton, id)| {
            let mut module = instantiate(skeleton, id, topic);
            module.duration = scale_duration(&module.duration, multiplier);
            if background == Background::Advanced {
                module.difficulty = module.difficulty.raised();
            }
            for intent in intents {
                let extra = augmentation(*intent, professional);
                module.topics.push(extra.topic.to_string());
                module.projects.push(extra.project.to_string());
                module.resources.push(extra.resource.to_string());
            }
            if let Some(resource) = style_resource(learning_style) {
                module.resources.push(resource.to_string());
            }
            module
        })
        .collect()
}

fn instantiate(skeleton: &ModuleSkeleton, id: u32, topic: &str) -> Module {
    Module {
        id,
        title: skeleton.title_for(topic),
        description: skeleton.description_for(topic),
        difficulty: skeleton.difficulty,
        duration: skeleton.duration.to_string(),
        topics: skeleton.topics_for(topic),
        projects: skeleton.projects_for(topic),
        resources: skeleton.resources_for(topic),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Background adjustments
// ────────────────────────────────────────────────────────────────────────────

/// How many leading (most basic) skeletons a background skips.
pub fn skipped_skeletons(background: Background) -> usize {
    match background {
        Background::Beginner | Background::SomeExperience => 0,
        Background::Intermediate => 1,
        Background::Advanced => 2,
    }
}

/// Suffix of `skeletons` for this background. Always keeps at least the last one.
pub fn select_skeletons(
    skeletons: &[ModuleSkeleton],
    background: Background,
) -> &[ModuleSkeleton] {
    let start = skipped_skeletons(background).min(skeletons.len().saturating_sub(1));
    &skeletons[start..]
}

pub fn duration_multiplier(background: Background) -> f64 {
    match background {
        Background::Beginner => 1.2,
        Background::SomeExperience => 1.1,
        Background::Intermediate => 1.0,
        Background::Advanced => 0.8,
    }
}

/// Rescales a "N-M weeks" / "N weeks" duration to a rounded "K weeks".
///
/// A range scales from its upper bound. Strings without a number are returned as-is.
pub fn scale_duration(duration: &str, multiplier: f64) -> String {
    let Some(base) = weeks_of(duration) else {
        return duration.to_string();
    };

    let weeks = (f64::from(base) * multiplier).round().max(1.0) as u32;
    if weeks == 1 {
        "1 week".to_string()
    } else {
        format!("{weeks} weeks")
    }
}

/// Week count of a duration string; the upper bound for a range.
pub fn weeks_of(duration: &str) -> Option<u32> {
    WEEK_RANGE
        .captures(duration)
        .and_then(|caps| caps.get(2).or_else(|| caps.get(1)))
        .and_then(|m| m.as_str().parse().ok())
}

// ────────────────────────────────────────────────────────────────────────────
// Intent and style augmentation
// ────────────────────────────────────────────────────────────────────────────

/// Extra content appended to every module for one detected intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Augmentation {
    pub topic: &'static str,
    pub project: &'static str,
    pub resource: &'static str,
}

/// Lookup keyed by (intent, domain is professional).
pub fn augmentation(intent: Intent, professional: bool) -> Augmentation {
    let (topic, project, resource) = match (intent, professional) {
        (Intent::Career, true) => (
            "Industry job requirements",
            "Resume-worthy project",
            "Career guidance resources",
        ),
        (Intent::Career, false) => (
            "Community events and meetups",
            "Share your work with a local community",
            "Community groups and clubs",
        ),
        (Intent::Portfolio, true) => (
            "Presenting work in a portfolio",
            "Showcase-ready portfolio piece",
            "Portfolio hosting platforms",
        ),
        (Intent::Portfolio, false) => (
            "Documenting your progress",
            "Progress journal or photo log",
            "Journaling and photo-sharing tools",
        ),
        (Intent::Freelance, true) => (
            "Client communication and pricing",
            "Client-style paid project brief",
            "Freelance marketplaces",
        ),
        (Intent::Freelance, false) => (
            "Sharing skills with others",
            "Teach a friend a session",
            "Skill-sharing communities",
        ),
        (Intent::Entrepreneurship, true) => (
            "Market validation basics",
            "Minimum viable product",
            "Startup founder resources",
        ),
        (Intent::Entrepreneurship, false) => (
            "Turning a passion into a side project",
            "Small side-project launch",
            "Maker communities",
        ),
        (Intent::Hobby, _) => (
            "Enjoyment techniques",
            "Fun personal project",
            "Hobbyist communities and forums",
        ),
        (Intent::SkillDevelopment, _) => (
            "Deliberate practice habits",
            "Skill benchmark project",
            "Practice platforms",
        ),
    };
    Augmentation {
        topic,
        project,
        resource,
    }
}

/// Study-format resource added to each module. Mixed learners get none.
pub fn style_resource(style: LearningStyle) -> Option<&'static str> {
    match style {
        LearningStyle::Visual => Some("Video walkthroughs and diagrams"),
        LearningStyle::Reading => Some("Reading list and written guides"),
        LearningStyle::Practical => Some("Hands-on exercises"),
        LearningStyle::Mixed => None,
    }
}
