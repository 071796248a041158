use crate::quiz_engine::models::Question;

/// Trim surrounding whitespace and uppercase.
pub fn normalize(answer: &str) -> String {
    answer.trim().to_uppercase()
}

/// Judge `submitted` against the question's canonical answer.
///
/// Both sides are normalized with [`normalize`] and compared for exact
/// equality. No numeric coercion: `"06"` does not match `"6"`.
pub fn is_correct(question: &Question, submitted: &str) -> bool {
    normalize(submitted) == normalize(&question.answer)
}
