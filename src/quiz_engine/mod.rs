//! Question engine: generation and answer checking.
//!
//! ## Module overview
//!
//! | Module       | Purpose |
//! |--------------|---------|
//! | `models`     | Topics, requests, and the `Question` record |
//! | `arithmetic` | Factorial, permutation/combination counts, Caesar shift |
//! | `helpers`    | Shared builder functions used by every topic |
//! | `generator`  | Entry points `generate*()` — dispatch to topics |
//! | `checker`    | `is_correct()` — normalized answer comparison |
//! | `topics`     | One generator per topic (cipher, combinatorics, graph, relations) |
//! | `config`     | `QuizConfig` round settings |
//! | `error`      | `QuizError` for parsing, config, and session misuse |

pub mod arithmetic;
pub mod checker;
pub mod config;
pub mod error;
pub mod generator;
pub mod helpers;
pub mod models;
pub mod topics;

pub use checker::is_correct;
pub use config::QuizConfig;
pub use error::QuizError;
pub use generator::{generate, generate_question, generate_question_with_rng};
pub use models::{Question, QuestionKind, QuestionRequest, Topic};
