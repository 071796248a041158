//! # discrete_math_drill
//!
//! Question generation and answer checking for a five-question discrete-math
//! quiz.
//!
//! Four topics are covered: a Caesar cipher (modular arithmetic),
//! permutations and combinations, shortest paths on small weighted digraphs,
//! and reflexive/symmetric/transitive classification of relations. Each
//! generated [`Question`] is self-contained: every random parameter is frozen
//! into its prompt, answer, and explanation.
//!
//! ## How it works
//!
//! 1. Call [`generate`] (entropy) or [`generate_question`] with a
//!    [`QuestionRequest`] (optional seed) — or pass your own RNG to
//!    [`generate_question_with_rng`].
//! 2. Show `prompt`, `hint`, and for single-choice questions the `options`.
//! 3. Judge the reply with [`is_correct`]: trimmed, case-insensitive, exact.
//!
//! [`Session`] wraps both calls in the menu → playing → complete flow and
//! keeps score; [`client_view`] renders each screen as JSON.
//!
//! ## Quick start
//!
//! ```rust
//! use discrete_math_drill::{generate_question, is_correct, QuestionRequest, Topic};
//!
//! let q = generate_question(QuestionRequest::seeded(Topic::Combinatorics, 42));
//! println!("{}\n{}", q.title, q.prompt);
//! assert!(is_correct(&q, &format!("  {} ", q.answer)));
//! ```

pub mod client_view;
pub mod quiz_engine;
pub mod session;

// Convenience re-exports so callers can use `discrete_math_drill::generate`
// directly without reaching into `quiz_engine::`.
pub use quiz_engine::{
    generate, generate_question, generate_question_with_rng, is_correct, Question,
    QuestionKind, QuestionRequest, QuizConfig, QuizError, Topic,
};
pub use session::{Feedback, Rating, Screen, Session, Summary};
