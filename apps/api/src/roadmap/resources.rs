//! Resource Resolver: the roadmap-level resource list.
//!
//! Domains with a hand-curated table use it; everything else gets search
//! links synthesized from the topic. Either way the list is ordered so the
//! learner's preferred format comes first. No network access happens here.

use reqwest::Url;

use crate::models::{Background, LearningStyle, Resource, ResourceKind};
use crate::roadmap::classifier::DomainCategory;

/// A curated resource and the learning styles it suits best.
#[derive(Debug, Clone, Copy)]
struct CuratedResource {
    kind: ResourceKind,
    title: &'static str,
    provider: &'static str,
    url: &'static str,
    duration: &'static str,
    free: bool,
    styles: &'static [LearningStyle],
}

impl CuratedResource {
    fn to_resource(self) -> Resource {
        Resource {
            kind: self.kind,
            title: self.title.to_string(),
            provider: self.provider.to_string(),
            url: self.url.to_string(),
            duration: self.duration.to_string(),
            free: self.free,
        }
    }
}

/// Resolves the resource list for a roadmap. Never empty.
pub fn resolve_resources(
    domain: DomainCategory,
    learning_style: LearningStyle,
    topic: &str,
    background: Background,
) -> Vec<Resource> {
    let tagged = match curated_for(domain) {
        Some(curated) => curated
            .iter()
            .map(|c| (c.to_resource(), c.styles))
            .collect(),
        None => synthesize(topic, learning_style, background),
    };
    rank_by_style(tagged, learning_style)
}

/// Stable-sorts resources suited to `style` to the front. Mixed keeps table order.
fn rank_by_style(
    mut tagged: Vec<(Resource, &'static [LearningStyle])>,
    style: LearningStyle,
) -> Vec<Resource> {
    if style != LearningStyle::Mixed {
        tagged.sort_by_key(|(_, styles)| !styles.contains(&style));
    }
    tagged.into_iter().map(|(resource, _)| resource).collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Synthesized search links
// ────────────────────────────────────────────────────────────────────────────

/// Builds a search URL, falling back to the bare base if it can't be parsed.
fn search_url(base: &str, param: &str, query: String) -> String {
    Url::parse_with_params(base, &[(param, query)])
        .map(String::from)
        .unwrap_or_else(|_| base.to_string())
}

/// Generic resources for any topic. Documentation and video are free; the
/// course is free only for beginners; the book is always paid.
fn synthesize(
    topic: &str,
    learning_style: LearningStyle,
    background: Background,
) -> Vec<(Resource, &'static [LearningStyle])> {
    let mut resources: Vec<(Resource, &'static [LearningStyle])> = vec![
        (
            Resource {
                kind: ResourceKind::Course,
                title: format!("Complete {topic} Course"),
                provider: "Coursera".to_string(),
                url: search_url(
                    "https://www.coursera.org/search",
                    "query",
                    topic.to_string(),
                ),
                duration: "8 hours".to_string(),
                free: background == Background::Beginner,
            },
            &[LearningStyle::Visual, LearningStyle::Practical],
        ),
        (
            Resource {
                kind: ResourceKind::Video,
                title: format!("{topic} Crash Course"),
                provider: "YouTube".to_string(),
                url: search_url(
                    "https://www.youtube.com/results",
                    "search_query",
                    format!("{topic} crash course"),
                ),
                duration: "2 hours".to_string(),
                free: true,
            },
            &[LearningStyle::Visual],
        ),
        (
            Resource {
                kind: ResourceKind::Documentation,
                title: format!("{topic} Reference"),
                provider: "Wikipedia".to_string(),
                url: search_url(
                    "https://en.wikipedia.org/w/index.php",
                    "search",
                    topic.to_string(),
                ),
                duration: "Self-paced".to_string(),
                free: true,
            },
            &[LearningStyle::Reading],
        ),
        (
            Resource {
                kind: ResourceKind::Book,
                title: format!("The {topic} Handbook"),
                provider: "Amazon".to_string(),
                url: search_url(
                    "https://www.amazon.com/s",
                    "k",
                    format!("{topic} book"),
                ),
                duration: "300 pages".to_string(),
                free: false,
            },
            &[LearningStyle::Reading],
        ),
    ];

    if learning_style == LearningStyle::Practical {
        resources.push((
            Resource {
                kind: ResourceKind::Exercises,
                title: format!("{topic} Practice Exercises"),
                provider: "GitHub".to_string(),
                url: search_url(
                    "https://github.com/search",
                    "q",
                    format!("{topic} exercises"),
                ),
                duration: "Self-paced".to_string(),
                free: true,
            },
            &[LearningStyle::Practical],
        ));
    }

    resources
}

// ────────────────────────────────────────────────────────────────────────────
// Curated tables
// ────────────────────────────────────────────────────────────────────────────

fn curated_for(domain: DomainCategory) -> Option<&'static [CuratedResource]> {
    match domain {
        DomainCategory::Technology => Some(TECHNOLOGY),
        DomainCategory::Data => Some(DATA),
        DomainCategory::Cybersecurity => Some(CYBERSECURITY),
        DomainCategory::Language => Some(LANGUAGE),
        DomainCategory::Culinary => Some(CULINARY),
        _ => None,
    }
}

const TECHNOLOGY: &[CuratedResource] = &[
    CuratedResource {
        kind: ResourceKind::Course,
        title: "CS50: Introduction to Computer Science",
        provider: "Harvard / edX",
        url: "https://cs50.harvard.edu/x/",
        duration: "12 weeks",
        free: true,
        styles: &[LearningStyle::Visual],
    },
    CuratedResource {
        kind: ResourceKind::Course,
        title: "The Odin Project",
        provider: "The Odin Project",
        url: "https://www.theodinproject.com/",
        duration: "Self-paced",
        free: true,
        styles: &[LearningStyle::Practical, LearningStyle::Reading],
    },
    CuratedResource {
        kind: ResourceKind::Video,
        title: "freeCodeCamp Full Courses",
        provider: "YouTube",
        url: "https://www.youtube.com/@freecodecamp",
        duration: "Varies",
        free: true,
        styles: &[LearningStyle::Visual],
    },
    CuratedResource {
        kind: ResourceKind::Documentation,
        title: "MDN Web Docs",
        provider: "Mozilla",
        url: "https://developer.mozilla.org/",
        duration: "Self-paced",
        free: true,
        styles: &[LearningStyle::Reading],
    },
    CuratedResource {
        kind: ResourceKind::Exercises,
        title: "Exercism Language Tracks",
        provider: "Exercism",
        url: "https://exercism.org/tracks",
        duration: "Self-paced",
        free: true,
        styles: &[LearningStyle::Practical],
    },
    CuratedResource {
        kind: ResourceKind::Book,
        title: "The Pragmatic Programmer",
        provider: "Pragmatic Bookshelf",
        url: "https://pragprog.com/titles/tpp20/the-pragmatic-programmer-20th-anniversary-edition/",
        duration: "352 pages",
        free: false,
        styles: &[LearningStyle::Reading],
    },
];

const DATA: &[CuratedResource] = &[
    CuratedResource {
        kind: ResourceKind::Course,
        title: "Kaggle Learn",
        provider: "Kaggle",
        url: "https://www.kaggle.com/learn",
        duration: "Self-paced",
        free: true,
        styles: &[LearningStyle::Practical, LearningStyle::Visual],
    },
    CuratedResource {
        kind: ResourceKind::Video,
        title: "StatQuest",
        provider: "YouTube",
        url: "https://www.youtube.com/@statquest",
        duration: "Varies",
        free: true,
        styles: &[LearningStyle::Visual],
    },
    CuratedResource {
        kind: ResourceKind::Documentation,
        title: "pandas User Guide",
        provider: "pandas",
        url: "https://pandas.pydata.org/docs/user_guide/",
        duration: "Self-paced",
        free: true,
        styles: &[LearningStyle::Reading],
    },
    CuratedResource {
        kind: ResourceKind::Exercises,
        title: "SQLBolt Interactive Lessons",
        provider: "SQLBolt",
        url: "https://sqlbolt.com/",
        duration: "4 hours",
        free: true,
        styles: &[LearningStyle::Practical],
    },
    CuratedResource {
        kind: ResourceKind::Book,
        title: "Python for Data Analysis",
        provider: "Wes McKinney",
        url: "https://wesmckinney.com/book/",
        duration: "550 pages",
        free: true,
        styles: &[LearningStyle::Reading],
    },
    CuratedResource {
        kind: ResourceKind::Course,
        title: "Google Data Analytics Certificate",
        provider: "Coursera",
        url: "https://www.coursera.org/professional-certificates/google-data-analytics",
        duration: "180 hours",
        free: false,
        styles: &[],
    },
];

const CYBERSECURITY: &[CuratedResource] = &[
    CuratedResource {
        kind: ResourceKind::Course,
        title: "Pre Security Learning Path",
        provider: "TryHackMe",
        url: "https://tryhackme.com/path/outline/presecurity",
        duration: "40 hours",
        free: true,
        styles: &[LearningStyle::Practical],
    },
    CuratedResource {
        kind: ResourceKind::Video,
        title: "Security+ Training Course",
        provider: "Professor Messer",
        url: "https://www.professormesser.com/",
        duration: "20 hours",
        free: true,
        styles: &[LearningStyle::Visual],
    },
    CuratedResource {
        kind: ResourceKind::Documentation,
        title: "OWASP Top 10",
        provider: "OWASP",
        url: "https://owasp.org/www-project-top-ten/",
        duration: "Self-paced",
        free: true,
        styles: &[LearningStyle::Reading],
    },
    CuratedResource {
        kind: ResourceKind::Exercises,
        title: "OverTheWire Wargames",
        provider: "OverTheWire",
        url: "https://overthewire.org/wargames/",
        duration: "Self-paced",
        free: true,
        styles: &[LearningStyle::Practical],
    },
    CuratedResource {
        kind: ResourceKind::Book,
        title: "Hacking: The Art of Exploitation",
        provider: "No Starch Press",
        url: "https://nostarch.com/hacking2.htm",
        duration: "488 pages",
        free: false,
        styles: &[LearningStyle::Reading],
    },
];

const LANGUAGE: &[CuratedResource] = &[
    CuratedResource {
        kind: ResourceKind::Course,
        title: "Duolingo",
        provider: "Duolingo",
        url: "https://www.duolingo.com/",
        duration: "10 minutes a day",
        free: true,
        styles: &[LearningStyle::Practical, LearningStyle::Visual],
    },
    CuratedResource {
        kind: ResourceKind::Video,
        title: "Easy Languages Street Interviews",
        provider: "YouTube",
        url: "https://www.youtube.com/@EasyLanguages",
        duration: "Varies",
        free: true,
        styles: &[LearningStyle::Visual],
    },
    CuratedResource {
        kind: ResourceKind::Exercises,
        title: "Anki Spaced Repetition",
        provider: "AnkiWeb",
        url: "https://apps.ankiweb.net/",
        duration: "Daily reviews",
        free: true,
        styles: &[LearningStyle::Practical],
    },
    CuratedResource {
        kind: ResourceKind::Documentation,
        title: "Wiktionary",
        provider: "Wikimedia",
        url: "https://www.wiktionary.org/",
        duration: "Self-paced",
        free: true,
        styles: &[LearningStyle::Reading],
    },
    CuratedResource {
        kind: ResourceKind::Course,
        title: "One-on-one Tutoring",
        provider: "italki",
        url: "https://www.italki.com/",
        duration: "Per lesson",
        free: false,
        styles: &[LearningStyle::Practical],
    },
];

const CULINARY: &[CuratedResource] = &[
    CuratedResource {
        kind: ResourceKind::Video,
        title: "Basics with Babish",
        provider: "YouTube",
        url: "https://www.youtube.com/@babishculinaryuniverse",
        duration: "Varies",
        free: true,
        styles: &[LearningStyle::Visual],
    },
    CuratedResource {
        kind: ResourceKind::Documentation,
        title: "Serious Eats Technique Guides",
        provider: "Serious Eats",
        url: "https://www.seriouseats.com/",
        duration: "Self-paced",
        free: true,
        styles: &[LearningStyle::Reading],
    },
    CuratedResource {
        kind: ResourceKind::Book,
        title: "Salt, Fat, Acid, Heat",
        provider: "Samin Nosrat",
        url: "https://www.saltfatacidheat.com/",
        duration: "480 pages",
        free: false,
        styles: &[LearningStyle::Reading],
    },
    CuratedResource {
        kind: ResourceKind::Course,
        title: "Online Culinary School",
        provider: "Rouxbe",
        url: "https://rouxbe.com/",
        duration: "Self-paced",
        free: false,
        styles: &[LearningStyle::Visual, LearningStyle::Practical],
    },
    CuratedResource {
        kind: ResourceKind::Exercises,
        title: "Budget Bytes Recipe Practice",
        provider: "Budget Bytes",
        url: "https://www.budgetbytes.com/",
        duration: "Per recipe",
        free: true,
        styles: &[LearningStyle::Practical],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_curated_domain_uses_table() {
        let resources = resolve_resources(
            DomainCategory::Technology,
            LearningStyle::Mixed,
            "Rust",
            Background::Beginner,
        );
        assert_eq!(resources.len(), TECHNOLOGY.len());
        assert_eq!(resources[0].title, TECHNOLOGY[0].title, "Mixed keeps table order");
    }

    #[test]
    fn test_style_ranks_matching_resources_first() {
        let resources = resolve_resources(
            DomainCategory::Technology,
            LearningStyle::Reading,
            "Rust",
            Background::Beginner,
        );
        assert_eq!(resources[0].title, "The Odin Project");
        assert_eq!(resources[1].kind, ResourceKind::Documentation);
        assert_eq!(resources[2].kind, ResourceKind::Book);
    }

    #[test]
    fn test_uncurated_domain_synthesizes_search_links() {
        let resources = resolve_resources(
            DomainCategory::General,
            LearningStyle::Mixed,
            "Asdf",
            Background::Advanced,
        );
        let kinds: Vec<ResourceKind> = resources.iter().map(|r| r.kind).collect();
        assert_eq!(
            kinds,
            vec![
                ResourceKind::Course,
                ResourceKind::Video,
                ResourceKind::Documentation,
                ResourceKind::Book
            ]
        );
        assert!(resources[1]
            .url
            .starts_with("https://www.youtube.com/results?search_query=Asdf"));
    }

    #[test]
    fn test_synthesized_urls_are_encoded() {
        let resources = resolve_resources(
            DomainCategory::General,
            LearningStyle::Mixed,
            "Juggling & Tricks",
            Background::Beginner,
        );
        for resource in &resources {
            assert!(!resource.url.contains(' '), "{}", resource.url);
            assert!(!resource.url.contains("& "), "{}", resource.url);
        }
    }

    #[test]
    fn test_documentation_always_free_book_never_free() {
        for background in Background::ALL {
            let resources = resolve_resources(
                DomainCategory::Arts,
                LearningStyle::Mixed,
                "Guitar",
                background,
            );
            for r in &resources {
                match r.kind {
                    ResourceKind::Documentation => assert!(r.free),
                    ResourceKind::Book => assert!(!r.free),
                    _ => {}
                }
            }
        }
    }

    #[test]
    fn test_beginner_gets_one_free_course() {
        let course_free = |background| {
            resolve_resources(DomainCategory::Arts, LearningStyle::Mixed, "Guitar", background)
                .into_iter()
                .filter(|r| r.kind == ResourceKind::Course && r.free)
                .count()
        };
        assert_eq!(course_free(Background::Beginner), 1);
        assert_eq!(course_free(Background::Intermediate), 0);
    }

    #[test]
    fn test_practical_adds_exercises_first() {
        let resources = resolve_resources(
            DomainCategory::Fitness,
            LearningStyle::Practical,
            "Yoga",
            Background::Beginner,
        );
        assert_eq!(resources.len(), 5);
        // Course suits Practical too and stays ahead by stable ordering
        assert_eq!(resources[0].kind, ResourceKind::Course);
        assert_eq!(resources[1].kind, ResourceKind::Exercises);
    }

    #[test]
    fn test_every_domain_resolves_some_resources() {
        for domain in DomainCategory::ALL {
            for style in LearningStyle::ALL {
                let resources = resolve_resources(domain, style, "Topic", Background::Beginner);
                assert!(!resources.is_empty(), "{domain} / {style:?}");
            }
        }
    }

    #[test]
    fn test_curated_urls_are_https() {
        for domain in DomainCategory::ALL {
            if let Some(curated) = curated_for(domain) {
                for c in curated {
                    assert!(c.url.starts_with("https://"), "{}", c.url);
                }
            }
        }
    }
}
