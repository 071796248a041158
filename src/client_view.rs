use serde_json::{json, Value};

use crate::quiz_engine::{Question, QuestionKind, Topic};
use crate::session::{Feedback, Session, Summary};

/// One menu card per topic, in menu order.
pub fn menu_view() -> Value {
    let modules: Vec<Value> = Topic::ALL
        .iter()
        .map(|t| {
            json!({
                "id": t,
                "icon": t.icon(),
                "title": t.to_string(),
                "description": t.description(),
            })
        })
        .collect();
    json!({ "screen": "menu", "modules": modules })
}

/// Question payload for the play screen. The canonical answer and the
/// explanation are withheld until the answer has been judged.
pub fn question_view(question: &Question) -> Value {
    let (kind, options) = match &question.kind {
        QuestionKind::FreeText => ("free-text", Value::Null),
        QuestionKind::SingleChoice { options } => ("single-choice", json!(options)),
    };
    json!({
        "question_id": question.question_id,
        "title":       question.title,
        "prompt":      question.prompt,
        "type":        kind,
        "options":     options,
        "hint":        question.hint,
        "technique":   question.technique,
    })
}

/// Play screen: progress header plus the current question.
pub fn play_view(session: &Session) -> Value {
    json!({
        "screen": "playing",
        "question_number": session.question_number(),
        "total_questions": session.total_questions(),
        "score": session.score(),
        "round_progress": session.round_progress(),
        "bridge_progress": session.bridge_progress(),
        "question": session.current_question().map(question_view),
    })
}

pub fn feedback_view(feedback: &Feedback) -> Value {
    json!({
        "is_correct":      feedback.is_correct,
        "correct_answer":  feedback.correct_answer,
        "explanation":     feedback.explanation,
        "score":           feedback.score,
        "bridge_progress": feedback.bridge_progress,
    })
}

pub fn complete_view(summary: &Summary) -> Value {
    json!({
        "screen":     "complete",
        "score":      summary.score,
        "total":      summary.total,
        "percentage": summary.percentage.round() as u32,
        "headline":   summary.rating.to_string(),
        "emoji":      summary.rating.emoji(),
    })
}
