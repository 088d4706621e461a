//! Goal Intent Detector: secondary motivations read off the raw goal text.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::roadmap::classifier::DomainCategory;
use crate::roadmap::text::{contains_any, match_tokens};

/// Why the learner wants the skill. Ordering is the augmentation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Intent {
    Career,
    Portfolio,
    Freelance,
    Entrepreneurship,
    Hobby,
    SkillDevelopment,
}

impl Intent {
    /// Professional intents only count in professional domains.
    pub fn is_professional(&self) -> bool {
        matches!(
            self,
            Intent::Career | Intent::Portfolio | Intent::Freelance | Intent::Entrepreneurship
        )
    }
}

pub type IntentSet = BTreeSet<Intent>;

/// Marker stems per intent, matched against the raw goal's tokens by
/// prefix ("entrepreneurial" hits "entrepreneur", "employability" hits "employ").
const INTENT_MARKERS: &[(Intent, &[&str])] = &[
    (Intent::Career, &["job", "career", "employ", "hired"]),
    (Intent::Portfolio, &["portfolio", "project", "showcase"]),
    (
        Intent::Freelance,
        &["freelance", "freelancing", "client", "consult"],
    ),
    (
        Intent::Entrepreneurship,
        &["startup", "business", "entrepreneur"],
    ),
    (
        Intent::Hobby,
        &[
            "hobby",
            "hobbies",
            "fun",
            "personal",
            "enjoy",
            "recreation",
            "leisure",
        ],
    ),
];

/// Detects intents in `raw_goal` for a goal already classified as `domain`.
///
/// Never empty: with no marker present, non-professional domains default to
/// `{Hobby}` and professional ones to `{SkillDevelopment}`.
pub fn detect_intents(raw_goal: &str, domain: DomainCategory) -> IntentSet {
    let tokens = match_tokens(raw_goal);
    let professional_domain = domain.is_professional();

    let mut intents: IntentSet = INTENT_MARKERS
        .iter()
        .filter(|(intent, _)| professional_domain || !intent.is_professional())
        .filter(|(_, markers)| contains_any(&tokens, markers))
        .map(|(intent, _)| *intent)
        .collect();

    if intents.is_empty() {
        intents.insert(if professional_domain {
            Intent::SkillDevelopment
        } else {
            Intent::Hobby
        });
    }

    intents
}
