//! Goal Classifier: maps a cleaned topic to a coarse subject domain.
//!
//! Deterministic keyword matching against `DOMAIN_KEYWORDS`; a token matches
//! a keyword it starts with, so plurals and derived forms count.
//! First matching domain in table order wins; no match → `General`.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::roadmap::text::{contains_any, match_tokens};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DomainCategory {
    Technology,
    Data,
    Business,
    Creative,
    Language,
    Arts,
    Culinary,
    Fitness,
    Academic,
    Cybersecurity,
    General,
}

impl DomainCategory {
    pub const ALL: [DomainCategory; 11] = [
        DomainCategory::Technology,
        DomainCategory::Data,
        DomainCategory::Business,
        DomainCategory::Creative,
        DomainCategory::Language,
        DomainCategory::Arts,
        DomainCategory::Culinary,
        DomainCategory::Fitness,
        DomainCategory::Academic,
        DomainCategory::Cybersecurity,
        DomainCategory::General,
    ];

    /// Domains whose learners plausibly study for work. Professional intents
    /// (career, portfolio, freelance, entrepreneurship) only count here.
    pub fn is_professional(&self) -> bool {
        matches!(
            self,
            DomainCategory::Technology
                | DomainCategory::Data
                | DomainCategory::Business
                | DomainCategory::Creative
                | DomainCategory::Cybersecurity
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DomainCategory::Technology => "technology",
            DomainCategory::Data => "data",
            DomainCategory::Business => "business",
            DomainCategory::Creative => "creative",
            DomainCategory::Language => "language",
            DomainCategory::Arts => "arts",
            DomainCategory::Culinary => "culinary",
            DomainCategory::Fitness => "fitness",
            DomainCategory::Academic => "academic",
            DomainCategory::Cybersecurity => "cybersecurity",
            DomainCategory::General => "general",
        }
    }
}

impl fmt::Display for DomainCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Keyword table in priority order. Every keyword belongs to exactly one
/// domain; `test_keywords_are_unique_across_domains` guards this.
///
/// Cybersecurity and data sit before technology so "network security" and
/// "data science" don't fall into the broader bucket.
pub const DOMAIN_KEYWORDS: &[(DomainCategory, &[&str])] = &[
    (
        DomainCategory::Cybersecurity,
        &[
            "cybersecurity",
            "cyber security",
            "security",
            "ethical hacking",
            "hack",
            "penetration testing",
            "pentesting",
            "infosec",
            "malware",
            "cryptography",
            "ctf",
        ],
    ),
    (
        DomainCategory::Data,
        &[
            "data science",
            "data analysis",
            "data analytics",
            "data engineering",
            "data visualization",
            "big data",
            "statistics",
            "analytics",
            "sql",
            "excel",
            "tableau",
            "power bi",
        ],
    ),
    (
        DomainCategory::Technology,
        &[
            "machine learning",
            "deep learning",
            "artificial intelligence",
            "ai",
            "programming",
            "coding",
            "code",
            "web",
            "software",
            "tech",
            "technology",
            "technologies",
            "computer",
            "computers",
            "algorithm",
            "algorithms",
            "data structures",
            "python",
            "javascript",
            "typescript",
            "rust",
            "java",
            "react",
            "html",
            "css",
            "c++",
            "c#",
            "devops",
            "cloud",
            "blockchain",
            "app development",
        ],
    ),
    (
        DomainCategory::Business,
        &[
            "business",
            "marketing",
            "sales",
            "management",
            "leadership",
            "finance",
            "accounting",
            "entrepreneurship",
            "startup",
            "economics",
            "investing",
        ],
    ),
    (
        DomainCategory::Creative,
        &[
            "design",
            "graphic design",
            "ui",
            "ux",
            "photography",
            "video editing",
            "writing",
            "content creation",
            "animation",
            "illustration",
            "filmmaking",
            "3d modeling",
        ],
    ),
    (
        DomainCategory::Language,
        &[
            "language",
            "languages",
            "spanish",
            "french",
            "german",
            "italian",
            "portuguese",
            "japanese",
            "chinese",
            "mandarin",
            "korean",
            "arabic",
            "russian",
            "hindi",
            "english",
        ],
    ),
    (
        DomainCategory::Arts,
        &[
            "music",
            "guitar",
            "piano",
            "drums",
            "violin",
            "ukulele",
            "singing",
            "painting",
            "drawing",
            "sketching",
            "dance",
            "dancing",
            "art",
            "arts",
            "acting",
            "theater",
            "pottery",
            "sculpture",
        ],
    ),
    (
        DomainCategory::Culinary,
        &[
            "cook",
            "cooking",
            "culinary",
            "baking",
            "bake",
            "food",
            "chef",
            "cuisine",
            "pastry",
            "bread",
            "recipes",
        ],
    ),
    (
        DomainCategory::Fitness,
        &[
            "fitness",
            "workout",
            "exercise",
            "gym",
            "running",
            "yoga",
            "strength training",
            "weightlifting",
            "calisthenics",
            "nutrition",
            "marathon",
            "swimming",
            "cycling",
        ],
    ),
    (
        DomainCategory::Academic,
        &[
            "math",
            "mathematics",
            "calculus",
            "algebra",
            "geometry",
            "physics",
            "chemistry",
            "biology",
            "history",
            "philosophy",
            "psychology",
            "literature",
            "research",
            "exam",
        ],
    ),
];

/// Classifies a cleaned topic. Never fails; unknown subjects are `General`.
pub fn classify(topic: &str) -> DomainCategory {
    let tokens = match_tokens(topic);
    DOMAIN_KEYWORDS
        .iter()
        .find(|(_, keywords)| contains_any(&tokens, keywords))
        .map(|(domain, _)| *domain)
        .unwrap_or(DomainCategory::General)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_machine_learning_is_technology() {
        assert_eq!(classify("Machine Learning"), DomainCategory::Technology);
    }

    #[test]
    fn test_unknown_topic_is_general() {
        assert_eq!(classify("xyzzyqux"), DomainCategory::General);
        assert_eq!(classify(""), DomainCategory::General);
    }

    #[test]
    fn test_cybersecurity_beats_technology() {
        assert_eq!(classify("Cybersecurity"), DomainCategory::Cybersecurity);
        assert_eq!(
            classify("Computer Security"),
            DomainCategory::Cybersecurity,
            "security keyword outranks computer"
        );
    }

    #[test]
    fn test_data_science_is_data() {
        assert_eq!(classify("Data Science"), DomainCategory::Data);
    }

    #[test]
    fn test_each_non_general_domain_reachable() {
        let samples = [
            ("Python", DomainCategory::Technology),
            ("SQL", DomainCategory::Data),
            ("Digital Marketing", DomainCategory::Business),
            ("Graphic Design", DomainCategory::Creative),
            ("Spanish", DomainCategory::Language),
            ("Guitar", DomainCategory::Arts),
            ("Baking Bread", DomainCategory::Culinary),
            ("Yoga", DomainCategory::Fitness),
            ("Calculus", DomainCategory::Academic),
            ("Ethical Hacking", DomainCategory::Cybersecurity),
        ];
        for (topic, expected) in samples {
            assert_eq!(classify(topic), expected, "topic {topic}");
        }
    }

    #[test]
    fn test_first_match_wins_on_overlap() {
        // "italian" (language) is checked before "cooking" (culinary)
        assert_eq!(classify("Italian Cooking"), DomainCategory::Language);
    }

    #[test]
    fn test_short_stems_must_be_whole_word() {
        // "technique" must not hit "tech", "martian" must not hit "art"
        assert_eq!(classify("Juggling Techniques"), DomainCategory::General);
        assert_eq!(classify("Martian"), DomainCategory::General);
        assert_eq!(classify("Reaction Times"), DomainCategory::General);
    }

    #[test]
    fn test_plural_and_derived_forms_match() {
        let samples = [
            ("Build Websites", DomainCategory::Technology),
            ("New Technologies", DomainCategory::Technology),
            ("Cookies", DomainCategory::Culinary),
            ("Hacker Skills", DomainCategory::Cybersecurity),
            ("Musician Skills", DomainCategory::Arts),
            ("Designer Toolkit", DomainCategory::Creative),
        ];
        for (topic, expected) in samples {
            assert_eq!(classify(topic), expected, "topic {topic}");
        }
    }

    #[test]
    fn test_keywords_are_unique_across_domains() {
        let mut seen: HashMap<&str, DomainCategory> = HashMap::new();
        for (domain, keywords) in DOMAIN_KEYWORDS {
            for kw in *keywords {
                if let Some(prev) = seen.insert(*kw, *domain) {
                    panic!("keyword '{kw}' in both {prev} and {domain}");
                }
            }
        }
    }

    #[test]
    fn test_every_keyword_classifies_to_its_domain() {
        for (domain, keywords) in DOMAIN_KEYWORDS {
            for kw in *keywords {
                // A keyword alone may still be claimed earlier by a shorter,
                // higher-priority keyword it contains as a word.
                let got = classify(kw);
                let earlier = DOMAIN_KEYWORDS
                    .iter()
                    .take_while(|(d, _)| d != domain)
                    .any(|(d, _)| *d == got);
                assert!(
                    got == *domain || earlier,
                    "keyword '{kw}' classified as {got}, expected {domain}"
                );
            }
        }
    }

    #[test]
    fn test_general_has_no_keywords() {
        assert!(DOMAIN_KEYWORDS
            .iter()
            .all(|(d, _)| *d != DomainCategory::General));
    }

    #[test]
    fn test_professional_subset() {
        let professional: Vec<_> = DomainCategory::ALL
            .iter()
            .filter(|d| d.is_professional())
            .collect();
        assert_eq!(professional.len(), 5);
        assert!(!DomainCategory::Culinary.is_professional());
        assert!(!DomainCategory::General.is_professional());
    }
}
