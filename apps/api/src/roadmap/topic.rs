//! Topic Extractor: reduces a free-text goal to its subject noun phrase.
//!
//! "I want to learn machine learning" → "Machine Learning".

use crate::roadmap::text::{sanitize, title_case, words};

/// Filler phrases removed from goals, matched as whole words, in this order.
/// Longer phrases come before their sub-phrases so "i want to learn" goes in one cut.
pub const FILLER_PHRASES: &[&str] = &[
    "i would like to learn to",
    "i would like to learn",
    "i'd like to learn to",
    "i'd like to learn",
    "i want to learn to",
    "i want to learn",
    "i wanna learn",
    "i need to learn to",
    "i need to learn",
    "help me learn",
    "teach me",
    "how to learn",
    "learn how to",
    "learn to",
    "i would like to",
    "i'd like to",
    "i want to",
    "i need to",
    "how do i",
    "how to",
    "roadmap for",
    "roadmap to",
    "guide to",
    "introduction to",
    "intro to",
    "the basics of",
    "basics of",
    "getting started with",
    "get started with",
    "become good at",
    "get better at",
    "become an expert in",
    "for fun",
    "as a hobby",
    "for my career",
    "for a career",
    "for a job",
    "for work",
    "learn",
    "study",
    "master",
    "understand",
];

/// Topics are front-loaded; anything past this many words is dropped.
const MAX_TOPIC_WORDS: usize = 5;

/// A cleaned topic shorter than this falls back to the punctuation-stripped goal.
const MIN_TOPIC_CHARS: usize = 2;

/// Returned only when the goal holds no word characters at all.
const DEFAULT_TOPIC: &str = "Your Goal";

/// Extracts the title-cased subject of a learning goal. Pure and total.
pub fn extract(goal: &str) -> String {
    let mut topic_words = words(goal);
    strip_fillers(&mut topic_words);

    if topic_words.join(" ").chars().count() < MIN_TOPIC_CHARS {
        topic_words = sanitize(goal)
            .split_whitespace()
            .map(str::to_string)
            .collect();
    }

    if topic_words.is_empty() {
        return DEFAULT_TOPIC.to_string();
    }

    topic_words.truncate(MAX_TOPIC_WORDS);
    topic_words
        .iter()
        .map(|w| title_case(w))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Removes every filler phrase until none is left. Removing one phrase can
/// join the words around it into another, so this runs to a fixed point.
fn strip_fillers(words: &mut Vec<String>) {
    loop {
        let mut changed = false;
        for phrase in FILLER_PHRASES {
            let phrase: Vec<&str> = phrase.split_whitespace().collect();
            changed |= strip_phrase(words, &phrase);
        }
        if !changed {
            break;
        }
    }
}

fn strip_phrase(words: &mut Vec<String>, phrase: &[&str]) -> bool {
    let mut removed = false;
    let mut i = 0;
    while i + phrase.len() <= words.len() {
        let hit = words[i..i + phrase.len()]
            .iter()
            .zip(phrase)
            .all(|(w, p)| w == p);
        if hit {
            words.drain(i..i + phrase.len());
            removed = true;
        } else {
            i += 1;
        }
    }
    removed
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_strips_leading_filler() {
        assert_eq!(extract("I want to learn machine learning"), "Machine Learning");
        assert_eq!(extract("How to learn Python?"), "Python");
    }

    #[test]
    fn test_strips_learn_to() {
        assert_eq!(extract("I want to learn to code"), "Code");
        assert_eq!(extract("learn to bake bread"), "Bake Bread");
        assert_eq!(extract("I'd like to learn to draw"), "Draw");
    }

    #[test]
    fn test_no_filler_is_title_cased() {
        assert_eq!(extract("asdf"), "Asdf");
        assert_eq!(extract("web DEVELOPMENT"), "Web Development");
    }

    #[test]
    fn test_strips_purpose_phrases() {
        assert_eq!(extract("learn guitar for fun as a hobby"), "Guitar");
        assert_eq!(
            extract("become good at cybersecurity for my career"),
            "Cybersecurity"
        );
    }

    #[test]
    fn test_filler_inside_words_is_kept() {
        // "learning" and "mastery" are not the filler words "learn" / "master"
        assert_eq!(extract("deep learning mastery"), "Deep Learning Mastery");
    }

    #[test]
    fn test_truncates_to_five_words() {
        assert_eq!(
            extract("learn one two three four five six seven"),
            "One Two Three Four Five"
        );
    }

    #[test]
    fn test_all_filler_falls_back_to_goal_words() {
        assert_eq!(extract("learn"), "Learn");
        assert_eq!(extract("Study!"), "Study");
    }

    #[test]
    fn test_single_letter_topic_falls_back() {
        // "r" alone is below the minimum, so the whole goal is kept
        assert_eq!(extract("learn R"), "Learn R");
    }

    #[test]
    fn test_keeps_language_punctuation() {
        assert_eq!(extract("I want to learn C++"), "C++");
        assert_eq!(extract("master node.js"), "Node.js");
    }

    #[test]
    fn test_expanding_first_letter_is_stable() {
        let once = extract("ßa");
        assert_eq!(once, "ßa");
        assert_eq!(extract(&once), once);
    }

    #[test]
    fn test_punctuation_only_goal_never_empty() {
        assert_eq!(extract("!!!"), DEFAULT_TOPIC);
        assert_eq!(extract("   "), DEFAULT_TOPIC);
    }

    #[test]
    fn test_filler_phrases_are_lowercase_and_sanitized() {
        for phrase in FILLER_PHRASES {
            assert_eq!(*phrase, phrase.to_lowercase(), "{phrase} must be lower-case");
            assert_eq!(sanitize(phrase), *phrase, "{phrase} must survive sanitizing");
        }
    }

    const PREFIXES: &[&str] = &[
        "",
        "I want to learn",
        "I want to learn to",
        "learn to",
        "how to",
        "Roadmap for",
        "become good at",
        "Master",
        "study",
        "teach me",
    ];

    const SUBJECTS: &[&str] = &[
        "guitar",
        "Python",
        "machine",
        "learning",
        "spanish",
        "baking",
        "calculus",
        "photography",
        "marketing",
        "c++",
        "yoga",
        "history",
    ];

    const SUFFIXES: &[&str] = &["", "for fun", "for my career", "as a hobby", "!"];

    fn goal_strategy() -> impl Strategy<Value = String> {
        (
            prop::sample::select(PREFIXES),
            prop::collection::vec(prop::sample::select(SUBJECTS), 1..7),
            prop::sample::select(SUFFIXES),
        )
            .prop_map(|(prefix, subjects, suffix)| {
                format!("{prefix} {} {suffix}", subjects.join(" "))
            })
    }

    proptest! {
        #[test]
        fn prop_extract_is_idempotent(goal in goal_strategy()) {
            let once = extract(&goal);
            prop_assert_eq!(extract(&once), once.clone());
        }

        #[test]
        fn prop_extract_never_empty(goal in goal_strategy()) {
            let topic = extract(&goal);
            prop_assert!(!topic.is_empty());
            prop_assert!(topic.split_whitespace().count() <= MAX_TOPIC_WORDS);
        }

        #[test]
        fn prop_extract_leaves_no_filler(goal in goal_strategy()) {
            let mut remaining = words(&extract(&goal));
            let before = remaining.clone();
            strip_fillers(&mut remaining);
            prop_assert_eq!(remaining, before);
        }
    }
}
