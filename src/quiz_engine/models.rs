use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::quiz_engine::error::QuizError;

// ---------------------------------------------------------------------------
// Topics
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Topic {
    Cipher,
    Combinatorics,
    Graph,
    Relations,
}

impl Topic {
    /// All topics in menu order.
    pub const ALL: [Topic; 4] = [
        Topic::Cipher,
        Topic::Combinatorics,
        Topic::Graph,
        Topic::Relations,
    ];

    pub fn icon(self) -> &'static str {
        match self {
            Topic::Cipher        => "🔐",
            Topic::Combinatorics => "🎲",
            Topic::Graph         => "🗺️",
            Topic::Relations     => "🔗",
        }
    }

    /// One-line menu description.
    pub fn description(self) -> &'static str {
        match self {
            Topic::Cipher        => "Descifra mensajes usando aritmética modular",
            Topic::Combinatorics => "Resuelve permutaciones y combinaciones",
            Topic::Graph         => "Encuentra el camino más corto",
            Topic::Relations     => "Identifica propiedades de relaciones",
        }
    }

    /// Parse a topic name, falling back to [`Topic::Cipher`] when the name is
    /// not recognised.
    pub fn parse_lenient(name: &str) -> Topic {
        name.parse().unwrap_or_else(|_| {
            log::warn!("unknown topic {name:?}, falling back to cipher");
            Topic::Cipher
        })
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Topic::Cipher        => "Criptografía",
            Topic::Combinatorics => "Combinatoria",
            Topic::Graph         => "Teoría de Grafos",
            Topic::Relations     => "Relaciones",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Topic {
    type Err = QuizError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cipher" | "crypto"  => Ok(Topic::Cipher),
            "combinatorics"      => Ok(Topic::Combinatorics),
            "graph" | "graphs"   => Ok(Topic::Graph),
            "relations"          => Ok(Topic::Relations),
            _ => Err(QuizError::UnknownTopic(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Request / question types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionRequest {
    pub topic: Topic,
    pub rng_seed: Option<u64>,
}

impl QuestionRequest {
    /// Entropy-seeded request for `topic`.
    pub fn new(topic: Topic) -> Self {
        QuestionRequest { topic, rng_seed: None }
    }

    pub fn seeded(topic: Topic, seed: u64) -> Self {
        QuestionRequest { topic, rng_seed: Some(seed) }
    }
}

/// How the user answers: typing, or picking one of `options`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum QuestionKind {
    FreeText,
    SingleChoice { options: Vec<String> },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    pub question_id: String,
    pub topic: Topic,
    /// Logical branch within the topic, stable across seeds.
    /// Examples: "Caesar:HOLA", "Permutation", "Dijkstra:A-D"
    pub branch_key: String,
    pub title: String,
    pub prompt: String,
    pub answer: String,
    #[serde(flatten)]
    pub kind: QuestionKind,
    pub hint: Option<String>,
    pub explanation: String,
    /// Technique being drilled, e.g. "Aritmética Modular".
    pub technique: String,
}

impl Question {
    pub fn options(&self) -> Option<&[String]> {
        match &self.kind {
            QuestionKind::FreeText => None,
            QuestionKind::SingleChoice { options } => Some(options),
        }
    }

    pub fn is_single_choice(&self) -> bool {
        matches!(self.kind, QuestionKind::SingleChoice { .. })
    }
}
