//! Template Library: canned module skeletons per domain.
//!
//! Skeletons are listed foundation → mastery. `{topic}` in any text field is
//! replaced with the learner's cleaned topic when the module is built.

use crate::models::Difficulty;
use crate::roadmap::classifier::DomainCategory;

/// Placeholder substituted with the cleaned topic.
pub const TOPIC_PLACEHOLDER: &str = "{topic}";

/// A template module before personalization.
#[derive(Debug, Clone, Copy)]
pub struct ModuleSkeleton {
    pub title: &'static str,
    pub description: &'static str,
    pub difficulty: Difficulty,
    /// Base duration, "N-M weeks" or "N weeks".
    pub duration: &'static str,
    pub topics: &'static [&'static str],
    pub projects: &'static [&'static str],
    pub resources: &'static [&'static str],
}

impl ModuleSkeleton {
    pub fn title_for(&self, topic: &str) -> String {
        interpolate(self.title, topic)
    }

    pub fn description_for(&self, topic: &str) -> String {
        interpolate(self.description, topic)
    }

    pub fn topics_for(&self, topic: &str) -> Vec<String> {
        self.topics.iter().map(|t| interpolate(t, topic)).collect()
    }

    pub fn projects_for(&self, topic: &str) -> Vec<String> {
        self.projects.iter().map(|p| interpolate(p, topic)).collect()
    }

    pub fn resources_for(&self, topic: &str) -> Vec<String> {
        self.resources.iter().map(|r| interpolate(r, topic)).collect()
    }
}

fn interpolate(template: &str, topic: &str) -> String {
    template.replace(TOPIC_PLACEHOLDER, topic)
}

/// Returns the skeletons for `domain`, falling back to the generic set.
pub fn skeletons_for(domain: DomainCategory) -> &'static [ModuleSkeleton] {
    let skeletons = match domain {
        DomainCategory::Technology => TECHNOLOGY,
        DomainCategory::Data => DATA,
        DomainCategory::Business => BUSINESS,
        DomainCategory::Creative => CREATIVE,
        DomainCategory::Language => LANGUAGE,
        DomainCategory::Arts => ARTS,
        DomainCategory::Culinary => CULINARY,
        DomainCategory::Fitness => FITNESS,
        DomainCategory::Academic => ACADEMIC,
        DomainCategory::Cybersecurity => CYBERSECURITY,
        DomainCategory::General => GENERAL,
    };
    if skeletons.is_empty() {
        GENERAL
    } else {
        skeletons
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Generic fallback
// ────────────────────────────────────────────────────────────────────────────

pub const GENERAL: &[ModuleSkeleton] = &[
    ModuleSkeleton {
        title: "{topic} Foundations",
        description: "Build core understanding of {topic} and its essential principles",
        difficulty: Difficulty::Beginner,
        duration: "2-3 weeks",
        topics: &[
            "Core concepts of {topic}",
            "Key terminology",
            "Essential tools and setup",
        ],
        projects: &["Simple {topic} project", "Practice exercises"],
        resources: &["YouTube crash courses", "Free online tutorials"],
    },
    ModuleSkeleton {
        title: "Building {topic} Skills",
        description: "Apply {topic} techniques to real situations",
        difficulty: Difficulty::Intermediate,
        duration: "3-4 weeks",
        topics: &[
            "Advanced {topic} techniques",
            "Real-world applications",
            "Problem solving methods",
        ],
        projects: &["Portfolio {topic} project", "Real application building"],
        resources: &["Online communities", "Practice websites"],
    },
    ModuleSkeleton {
        title: "{topic} Mastery",
        description: "Refine your {topic} skills toward expert level",
        difficulty: Difficulty::Advanced,
        duration: "3-5 weeks",
        topics: &[
            "Expert level concepts",
            "Best practices",
            "Continuous improvement",
        ],
        projects: &["Complex final project", "Teach {topic} to someone else"],
        resources: &["Advanced online courses", "Professional blogs"],
    },
];

// ────────────────────────────────────────────────────────────────────────────
// Domain catalogs
// ────────────────────────────────────────────────────────────────────────────

const TECHNOLOGY: &[ModuleSkeleton] = &[
    ModuleSkeleton {
        title: "{topic} Fundamentals",
        description: "Set up your environment and learn the building blocks of {topic}",
        difficulty: Difficulty::Beginner,
        duration: "2-3 weeks",
        topics: &[
            "{topic} core concepts",
            "Development environment setup",
            "Syntax and basic patterns",
            "Version control with Git",
        ],
        projects: &["Hello-world {topic} project", "Small command-line utility"],
        resources: &["freeCodeCamp tutorials", "Official documentation"],
    },
    ModuleSkeleton {
        title: "Applied {topic}",
        description: "Use {topic} to build complete, working applications",
        difficulty: Difficulty::Intermediate,
        duration: "3-4 weeks",
        topics: &[
            "Common libraries and frameworks",
            "Debugging and testing",
            "Data structures and algorithms",
            "Working with APIs",
        ],
        projects: &["Full {topic} application", "API integration project"],
        resources: &["Interactive coding platforms", "Open-source codebases"],
    },
    ModuleSkeleton {
        title: "Advanced {topic} Engineering",
        description: "Design, optimize and ship production-quality {topic} systems",
        difficulty: Difficulty::Advanced,
        duration: "4-6 weeks",
        topics: &[
            "Architecture and design patterns",
            "Performance optimization",
            "Deployment and operations",
            "Code review practices",
        ],
        projects: &["Production-ready capstone", "Open source contribution"],
        resources: &["Engineering blogs", "Conference talks"],
    },
];

const DATA: &[ModuleSkeleton] = &[
    ModuleSkeleton {
        title: "{topic} Foundations",
        description: "Learn how to collect, clean and describe data for {topic}",
        difficulty: Difficulty::Beginner,
        duration: "2-3 weeks",
        topics: &[
            "Descriptive statistics",
            "Spreadsheets and SQL basics",
            "Data cleaning",
        ],
        projects: &["Clean and summarize a public dataset"],
        resources: &["Kaggle Learn", "Khan Academy statistics"],
    },
    ModuleSkeleton {
        title: "{topic} Analysis and Visualization",
        description: "Turn raw data into insight with {topic} tools",
        difficulty: Difficulty::Intermediate,
        duration: "3-4 weeks",
        topics: &[
            "Exploratory data analysis",
            "Visualization principles",
            "Dashboards and reporting",
        ],
        projects: &["Interactive dashboard", "Exploratory analysis notebook"],
        resources: &["Tableau Public gallery", "Pandas documentation"],
    },
    ModuleSkeleton {
        title: "Advanced {topic} Modeling",
        description: "Build predictive models and data pipelines for {topic}",
        difficulty: Difficulty::Advanced,
        duration: "4-5 weeks",
        topics: &[
            "Predictive modeling",
            "Experiment design",
            "Data pipelines",
        ],
        projects: &["End-to-end prediction project", "Automated reporting pipeline"],
        resources: &["Kaggle competitions", "Research papers"],
    },
];

const BUSINESS: &[ModuleSkeleton] = &[
    ModuleSkeleton {
        title: "{topic} Fundamentals",
        description: "Understand the core frameworks and vocabulary of {topic}",
        difficulty: Difficulty::Beginner,
        duration: "2-3 weeks",
        topics: &[
            "Key {topic} frameworks",
            "Business terminology",
            "Customer and market basics",
        ],
        projects: &["Case study summary"],
        resources: &["HubSpot Academy", "Harvard Business Review articles"],
    },
    ModuleSkeleton {
        title: "{topic} Strategy and Execution",
        description: "Plan and run {topic} initiatives with measurable goals",
        difficulty: Difficulty::Intermediate,
        duration: "3-4 weeks",
        topics: &[
            "Goal setting and KPIs",
            "Planning and budgeting",
            "Stakeholder communication",
        ],
        projects: &["Strategy plan for a real organization", "KPI tracking sheet"],
        resources: &["Business podcasts", "Industry reports"],
    },
    ModuleSkeleton {
        title: "{topic} Leadership",
        description: "Lead teams and decisions in {topic} at scale",
        difficulty: Difficulty::Advanced,
        duration: "3-5 weeks",
        topics: &[
            "Decision making under uncertainty",
            "Scaling operations",
            "Negotiation",
        ],
        projects: &["Growth proposal pitch"],
        resources: &["Executive education courses", "Leadership books"],
    },
];

const CREATIVE: &[ModuleSkeleton] = &[
    ModuleSkeleton {
        title: "{topic} Foundations",
        description: "Learn the principles and tools behind good {topic}",
        difficulty: Difficulty::Beginner,
        duration: "2-3 weeks",
        topics: &[
            "Composition and visual principles",
            "Tools of the trade",
            "Studying great examples",
        ],
        projects: &["Recreate a piece you admire", "Daily sketch or draft habit"],
        resources: &["Skillshare classes", "YouTube tutorials"],
    },
    ModuleSkeleton {
        title: "Developing Your {topic} Style",
        description: "Experiment widely and find your own voice in {topic}",
        difficulty: Difficulty::Intermediate,
        duration: "3-4 weeks",
        topics: &[
            "Style exploration",
            "Feedback and critique",
            "Workflow and iteration",
        ],
        projects: &["Themed series of three pieces"],
        resources: &["Creative communities", "Critique groups"],
    },
    ModuleSkeleton {
        title: "Professional {topic}",
        description: "Produce polished {topic} work for real audiences",
        difficulty: Difficulty::Advanced,
        duration: "4-5 weeks",
        topics: &[
            "Client briefs",
            "Production quality",
            "Presenting your work",
        ],
        projects: &["Commission-style project", "Public showcase piece"],
        resources: &["Behance and Dribbble", "Industry masterclasses"],
    },
];

const LANGUAGE: &[ModuleSkeleton] = &[
    ModuleSkeleton {
        title: "{topic} Foundations",
        description: "Pronunciation, core vocabulary and everyday phrases in {topic}",
        difficulty: Difficulty::Beginner,
        duration: "3-4 weeks",
        topics: &[
            "Pronunciation and alphabet",
            "Top 500 words",
            "Greetings and everyday phrases",
        ],
        projects: &["Introduce yourself in {topic}"],
        resources: &["Duolingo", "Spaced-repetition flashcards"],
    },
    ModuleSkeleton {
        title: "Conversational {topic}",
        description: "Hold simple conversations and understand native speakers",
        difficulty: Difficulty::Intermediate,
        duration: "4-6 weeks",
        topics: &[
            "Core grammar",
            "Listening practice",
            "Speaking with partners",
        ],
        projects: &["Weekly conversation exchange", "Short diary in {topic}"],
        resources: &["Language exchange apps", "Podcasts for learners"],
    },
    ModuleSkeleton {
        title: "Fluent {topic}",
        description: "Read, write and discuss complex ideas in {topic}",
        difficulty: Difficulty::Advanced,
        duration: "6-8 weeks",
        topics: &[
            "Idioms and register",
            "Reading native media",
            "Writing longer texts",
        ],
        projects: &["Read a novel in {topic}", "Give a short talk"],
        resources: &["Native news sites", "Graded readers"],
    },
];

const ARTS: &[ModuleSkeleton] = &[
    ModuleSkeleton {
        title: "{topic} Fundamentals",
        description: "Learn basic technique and build a steady practice habit for {topic}",
        difficulty: Difficulty::Beginner,
        duration: "3-4 weeks",
        topics: &[
            "Basic technique and posture",
            "Essential theory",
            "Daily practice routine",
        ],
        projects: &["Learn a simple first piece"],
        resources: &["YouTube lessons", "Beginner method books"],
    },
    ModuleSkeleton {
        title: "Expanding Your {topic} Repertoire",
        description: "Broaden your technique and learn more demanding pieces",
        difficulty: Difficulty::Intermediate,
        duration: "4-5 weeks",
        topics: &[
            "Intermediate technique",
            "Learning by ear and by sight",
            "Expression and dynamics",
        ],
        projects: &["Record yourself performing", "Learn three new pieces"],
        resources: &["Online masterclasses", "Practice apps"],
    },
    ModuleSkeleton {
        title: "{topic} Performance and Creation",
        description: "Perform confidently and create original {topic} work",
        difficulty: Difficulty::Advanced,
        duration: "4-6 weeks",
        topics: &[
            "Improvisation",
            "Original composition",
            "Performance practice",
        ],
        projects: &["Original piece", "Live or recorded performance"],
        resources: &["Private lessons", "Local ensembles"],
    },
];

const CULINARY: &[ModuleSkeleton] = &[
    ModuleSkeleton {
        title: "Kitchen Fundamentals for {topic}",
        description: "Knife skills, kitchen safety and the basic methods behind {topic}",
        difficulty: Difficulty::Beginner,
        duration: "2-3 weeks",
        topics: &[
            "Knife skills",
            "Food safety",
            "Heat and cooking methods",
            "Stocking a pantry",
        ],
        projects: &["Cook three simple dishes"],
        resources: &["Serious Eats technique guides", "YouTube cooking channels"],
    },
    ModuleSkeleton {
        title: "Core {topic} Techniques",
        description: "Master the signature techniques and flavour building of {topic}",
        difficulty: Difficulty::Intermediate,
        duration: "3-4 weeks",
        topics: &[
            "Flavour balancing",
            "Sauces and seasoning",
            "Timing a full meal",
        ],
        projects: &["Cook a three-course meal", "Adapt a classic recipe"],
        resources: &["Classic cookbooks", "Cooking class videos"],
    },
    ModuleSkeleton {
        title: "Creative {topic}",
        description: "Develop your own dishes and cook confidently for others",
        difficulty: Difficulty::Advanced,
        duration: "3-5 weeks",
        topics: &[
            "Recipe development",
            "Plating and presentation",
            "Cooking for groups",
        ],
        projects: &["Host a dinner with original recipes"],
        resources: &["Chef memoirs", "Food science references"],
    },
];

const FITNESS: &[ModuleSkeleton] = &[
    ModuleSkeleton {
        title: "{topic} Foundations",
        description: "Safe form, consistent habits and a sustainable {topic} routine",
        difficulty: Difficulty::Beginner,
        duration: "3-4 weeks",
        topics: &[
            "Proper form and warm-ups",
            "Building a weekly routine",
            "Recovery and sleep",
        ],
        projects: &["Four-week consistency challenge"],
        resources: &["Beginner workout videos", "Fitness tracking apps"],
    },
    ModuleSkeleton {
        title: "Progressive {topic} Training",
        description: "Structured progression toward measurable {topic} goals",
        difficulty: Difficulty::Intermediate,
        duration: "4-6 weeks",
        topics: &[
            "Progressive overload",
            "Nutrition for performance",
            "Tracking progress",
        ],
        projects: &["Personal record attempt", "Eight-week training plan"],
        resources: &["Training program guides", "Coaching communities"],
    },
];

const ACADEMIC: &[ModuleSkeleton] = &[
    ModuleSkeleton {
        title: "{topic} Foundations",
        description: "Core definitions, methods and landmark ideas of {topic}",
        difficulty: Difficulty::Beginner,
        duration: "3-4 weeks",
        topics: &[
            "Core definitions",
            "Foundational methods",
            "Key historical ideas",
        ],
        projects: &["Concept map of {topic}", "Weekly problem sets"],
        resources: &["Khan Academy", "Introductory textbooks"],
    },
    ModuleSkeleton {
        title: "Advanced Study in {topic}",
        description: "Deepen understanding with rigorous problems and primary sources",
        difficulty: Difficulty::Advanced,
        duration: "4-6 weeks",
        topics: &[
            "Advanced theory",
            "Reading primary sources",
            "Structured argument and proof",
        ],
        projects: &["Research summary paper", "Teach a topic to a peer"],
        resources: &["MIT OpenCourseWare", "Academic journals"],
    },
];

const CYBERSECURITY: &[ModuleSkeleton] = &[
    ModuleSkeleton {
        title: "{topic} Fundamentals",
        description: "Networking, operating systems and the security mindset behind {topic}",
        difficulty: Difficulty::Beginner,
        duration: "3-4 weeks",
        topics: &[
            "Networking basics",
            "Linux command line",
            "Threats and vulnerabilities",
            "The CIA triad",
        ],
        projects: &["Home lab setup", "Network traffic capture"],
        resources: &["TryHackMe beginner paths", "Cisco networking basics"],
    },
    ModuleSkeleton {
        title: "Offensive and Defensive {topic}",
        description: "Practice attacks and defenses in safe lab environments",
        difficulty: Difficulty::Intermediate,
        duration: "4-5 weeks",
        topics: &[
            "Web application security",
            "Penetration testing methodology",
            "Incident detection",
        ],
        projects: &["Capture-the-flag challenges", "Vulnerability assessment report"],
        resources: &["Hack The Box", "OWASP Top 10"],
    },
    ModuleSkeleton {
        title: "Advanced {topic} Operations",
        description: "Threat hunting, incident response and security architecture",
        difficulty: Difficulty::Advanced,
        duration: "4-6 weeks",
        topics: &[
            "Threat hunting",
            "Incident response",
            "Security architecture",
        ],
        projects: &["Incident response playbook", "Hardened infrastructure design"],
        resources: &["SANS reading room", "MITRE ATT&CK"],
    },
];
