//! Seeded page content.
//!
//! Everything here is hard-coded demo material; pages build their initial
//! state from these constructors.

use crate::deck::Deck;
use crate::types::{Card, Difficulty};
use serde::Serialize;

/// Upload size cap shown on the about page, in bytes.
pub const MAX_UPLOAD_BYTES: u64 = 200 * 1024 * 1024;
pub const SUPPORTED_FORMATS: [&str; 4] = [".pdf", ".txt", ".docx", ".md"];

/// One navigable page.
#[derive(Debug, Clone, Serialize)]
pub struct PageRoute {
    pub path: &'static str,
    pub title: &'static str,
    pub purpose: &'static str,
}

pub fn routes() -> Vec<PageRoute> {
    vec![
        PageRoute {
            path: "/",
            title: "Home",
            purpose: "Landing page with upload placeholder",
        },
        PageRoute {
            path: "/flashcards",
            title: "Flashcards",
            purpose: "Browse and study flashcards",
        },
        PageRoute {
            path: "/audio",
            title: "Audio Study",
            purpose: "Audio playback demo",
        },
        PageRoute {
            path: "/summary",
            title: "Summary",
            purpose: "Document summary with flashcard viewer",
        },
        PageRoute {
            path: "/notes",
            title: "Study Notes",
            purpose: "Coming soon",
        },
        PageRoute {
            path: "/quiz",
            title: "Quiz Generator",
            purpose: "Coming soon",
        },
        PageRoute {
            path: "/about",
            title: "About",
            purpose: "About the project",
        },
    ]
}

/// Deck behind the flashcards page.
pub fn browse_deck() -> Deck {
    Deck::new(vec![
        Card::new(
            1,
            "What is photosynthesis?",
            "The process by which plants use sunlight to produce glucose from carbon dioxide and water.",
            "Biology",
            Some(Difficulty::Medium),
        ),
        Card::new(
            2,
            "What is the mitochondria?",
            "The powerhouse of the cell, responsible for producing ATP energy.",
            "Biology",
            Some(Difficulty::Easy),
        ),
        Card::new(
            3,
            "What is Newton's First Law?",
            "An object at rest stays at rest, and an object in motion stays in motion, unless acted upon by an external force.",
            "Physics",
            Some(Difficulty::Hard),
        ),
        Card::new(
            4,
            "What is DNA?",
            "Deoxyribonucleic acid, the hereditary material in humans and almost all other organisms.",
            "Biology",
            Some(Difficulty::Medium),
        ),
    ])
    .unwrap_or_default()
}

/// Deck behind the summary page mini-viewer.
pub fn summary_deck() -> Deck {
    Deck::new(vec![
        Card::new(
            1,
            "What is photosynthesis?",
            "Photosynthesis is the process by which plants use sunlight, water, and carbon dioxide to produce glucose and oxygen.",
            "Biology",
            None,
        ),
        Card::new(
            2,
            "What is the mitochondria?",
            "The mitochondria is the powerhouse of the cell, responsible for producing ATP through cellular respiration.",
            "Biology",
            None,
        ),
        Card::new(
            3,
            "What is Newton's First Law?",
            "Newton's First Law states that an object at rest stays at rest and an object in motion stays in motion unless acted upon by an external force.",
            "Physics",
            None,
        ),
    ])
    .unwrap_or_default()
}

/// Demo deck on the landing page.
pub fn landing_deck() -> Deck {
    let cards = browse_deck()
        .iter()
        .take(3)
        .map(|c| Card {
            difficulty: None,
            ..c.clone()
        })
        .collect();
    Deck::new(cards).unwrap_or_default()
}

/// Feature tile on the landing, notes and quiz pages.
#[derive(Debug, Clone, Serialize)]
pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
    pub available: bool,
}

pub fn landing_features() -> Vec<Feature> {
    vec![
        Feature {
            title: "AI Flashcards",
            description: "Generate smart flashcards from any text content using AI",
            available: true,
        },
        Feature {
            title: "Audio Study",
            description: "Convert notes to audio for hands-free learning",
            available: true,
        },
        Feature {
            title: "Quiz Generator",
            description: "Create custom quizzes to test your knowledge",
            available: false,
        },
        Feature {
            title: "Study Notes",
            description: "Organize and structure your study materials",
            available: false,
        },
    ]
}

#[derive(Debug, Clone, Serialize)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub fn landing_stats() -> Vec<Stat> {
    vec![
        Stat {
            value: "50K+",
            label: "Students Learning",
        },
        Stat {
            value: "1M+",
            label: "Flashcards Created",
        },
        Stat {
            value: "95%",
            label: "Improved Retention",
        },
    ]
}

/// Placeholder page: a blurb plus disabled actions.
#[derive(Debug, Clone, Serialize)]
pub struct PlaceholderPage {
    pub title: &'static str,
    pub message: &'static str,
    pub features: Vec<Feature>,
}

impl PlaceholderPage {
    pub fn feature(&self, slug: &str) -> Option<&Feature> {
        self.features
            .iter()
            .find(|f| f.title.to_lowercase().replace(' ', "-") == slug)
    }
}

pub fn notes_page() -> PlaceholderPage {
    PlaceholderPage {
        title: "Study Notes",
        message: "This feature is coming soon! Organize, structure, and manage all your study materials in one place.",
        features: vec![
            Feature {
                title: "Create Notes",
                description: "Write and organize your study notes",
                available: false,
            },
            Feature {
                title: "Search Notes",
                description: "Find information quickly",
                available: false,
            },
        ],
    }
}

pub fn quiz_page() -> PlaceholderPage {
    PlaceholderPage {
        title: "Quiz Generator",
        message: "This feature is coming soon! Create custom quizzes from your study materials with AI-powered question generation.",
        features: vec![
            Feature {
                title: "Create Quiz",
                description: "Generate quizzes from your notes",
                available: false,
            },
            Feature {
                title: "Take Quiz",
                description: "Test your knowledge",
                available: false,
            },
        ],
    }
}

/// Static summary shown next to the summary flashcards.
#[derive(Debug, Clone, Serialize)]
pub struct DocumentSummary {
    pub title: &'static str,
    pub key_points: Vec<&'static str>,
    pub main_concepts: Vec<&'static str>,
}

pub fn document_summary() -> DocumentSummary {
    DocumentSummary {
        title: "Biology Chapter 5: Photosynthesis",
        key_points: vec![
            "Photosynthesis is essential for plant survival and oxygen production",
            "The process involves chlorophyll, sunlight, water, and carbon dioxide",
            "Glucose is produced as the main energy source for plants",
            "This process also releases oxygen as a byproduct",
        ],
        main_concepts: vec![
            "Chloroplasts",
            "Light Reactions",
            "Dark Reactions",
            "Carbon Fixation",
        ],
    }
}

/// Transcript paragraphs shown under the audio player.
pub fn transcript() -> Vec<&'static str> {
    vec![
        "Photosynthesis is a vital biological process that occurs in plants, algae, and some bacteria. \
         During this process, organisms convert light energy, usually from the sun, into chemical energy \
         stored in glucose molecules. The process involves two main stages: the light-dependent reactions \
         and the light-independent reactions, also known as the Calvin cycle.",
        "The light-dependent reactions occur in the thylakoid membranes of chloroplasts, where chlorophyll \
         and other pigments capture light energy. This energy is used to split water molecules, releasing \
         oxygen as a byproduct and generating ATP and NADPH.",
    ]
}

#[derive(Debug, Clone, Serialize)]
pub struct About {
    pub product: &'static str,
    pub author: &'static str,
    pub bio: Vec<&'static str>,
    pub supported_formats: Vec<&'static str>,
    pub max_upload_bytes: u64,
    pub footer: &'static str,
}

pub fn about() -> About {
    About {
        product: "Edu Helper AI",
        author: "Shivang Kumar Dubey",
        bio: vec![
            "First year student at Scaler School of Technology and a developer building AI-powered \
             study tools to help students learn smarter. Passionate about NLP, education technology, \
             and clean user experiences.",
            "This project represents my commitment to leveraging artificial intelligence to democratize \
             education and make learning more efficient and engaging for students worldwide.",
        ],
        supported_formats: SUPPORTED_FORMATS.to_vec(),
        max_upload_bytes: MAX_UPLOAD_BYTES,
        footer: "© 2025 Edu Helper AI. Built with passion for education and technology.",
    }
}

/// Whether a file name has one of the supported upload extensions.
pub fn is_supported_upload(name: &str) -> bool {
    let lower = name.to_lowercase();
    SUPPORTED_FORMATS.iter().any(|ext| lower.ends_with(ext))
}
