//! Tour of all four quiz topics plus one scripted round.
//!
//! Run with: `RUST_LOG=debug cargo run --example demo`
//!
//! 1. **One question per topic** — fixed seeds, so the output is
//!    reproducible. Shows title, prompt, hint, options, and the answer.
//! 2. **A scripted session** — a five-question cipher round where every
//!    other answer is deliberately wrong, printing the feedback and the final
//!    summary as the client JSON the view layer would receive.

use discrete_math_drill::{
    client_view, generate_question, is_correct, QuestionRequest, QuizConfig, Session, Topic,
};

fn print_question(topic: Topic, seed: u64) {
    let q = generate_question(QuestionRequest::seeded(topic, seed));

    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("  {}  ID: {}  Branch: {}", q.title, q.question_id, q.branch_key);
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("  Q: {}", q.prompt);
    if let Some(hint) = &q.hint {
        println!("  💡 {hint}");
    }
    if let Some(options) = q.options() {
        for (i, opt) in options.iter().enumerate() {
            let marker = if is_correct(&q, opt) { "✓" } else { " " };
            println!("  [{}] {marker} {opt}", i + 1);
        }
    }
    println!("  A: {}", q.answer);
    println!("     {}", q.explanation);
    println!();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init();

    println!("{}", serde_json::to_string_pretty(&client_view::menu_view())?);
    println!();

    for (i, topic) in Topic::ALL.into_iter().enumerate() {
        print_question(topic, 100 + i as u64);
    }

    let mut session = Session::new(QuizConfig { rng_seed: Some(7), ..QuizConfig::default() })?;
    session.select_topic(Topic::Cipher);
    let mut round = 0;
    while session.current_question().is_some() {
        println!("{}", serde_json::to_string_pretty(&client_view::play_view(&session))?);
        let reply = match session.current_question() {
            Some(q) if round % 2 == 0 => q.answer.to_lowercase(),
            _ => "no lo sé".to_string(),
        };
        let feedback = session.submit(&reply)?;
        println!("{}", serde_json::to_string_pretty(&client_view::feedback_view(&feedback))?);
        session.advance()?;
        round += 1;
    }

    if let Some(summary) = session.summary() {
        println!("{}", serde_json::to_string_pretty(&client_view::complete_view(&summary))?);
    }
    Ok(())
}
