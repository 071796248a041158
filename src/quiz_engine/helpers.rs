//! Shared builder functions used by every topic generator.
//!
//! Each generator draws its parameters, formats the prompt and explanation,
//! and hands everything to [`question`] to assemble the final record. Keeping
//! assembly here lets the topic files focus on the maths.

use rand::Rng;
use crate::quiz_engine::models::*;

/// Pick one entry of a fixed, non-empty table uniformly.
pub fn pick<'a, R: Rng, T>(rng: &mut R, items: &'a [T]) -> &'a T {
    &items[rng.gen_range(0..items.len())]
}

/// Display title: topic icon, topic name, and the sub-heading.
pub fn title(topic: Topic, subtitle: &str) -> String {
    format!("{} {} - {}", topic.icon(), topic, subtitle)
}

/// Single-choice kind built from a fixed option list.
pub fn single_choice(options: &[&str]) -> QuestionKind {
    QuestionKind::SingleChoice {
        options: options.iter().map(|o| o.to_string()).collect(),
    }
}

/// Assemble the final [`Question`].
///
/// This is the last call in every topic generator.
pub fn question(
    id: String, topic: Topic, branch_key: impl Into<String>,
    subtitle: &str, prompt: String, answer: impl Into<String>,
    kind: QuestionKind, hint: Option<String>, explanation: String,
    technique: &str,
) -> Question {
    Question {
        question_id: id,
        topic,
        branch_key: branch_key.into(),
        title: title(topic, subtitle),
        prompt,
        answer: answer.into(),
        kind,
        hint,
        explanation,
        technique: technique.to_string(),
    }
}
