use rand::{rngs::StdRng, Rng, RngCore, SeedableRng};

use crate::quiz_engine::{
    models::{Question, QuestionRequest, Topic},
    topics,
};

/// Generate a question ID from the topic prefix and one RNG draw.
fn make_question_id<R: RngCore>(topic: Topic, rng: &mut R) -> String {
    let prefix = match topic {
        Topic::Cipher        => "CI",
        Topic::Combinatorics => "CO",
        Topic::Graph         => "GR",
        Topic::Relations     => "RE",
    };
    format!("{}-{:08X}", prefix, rng.next_u32())
}

/// Core dispatch with a caller-supplied random source.
pub fn generate_question_with_rng<R: Rng>(topic: Topic, rng: &mut R) -> Question {
    let question_id = make_question_id(topic, rng);

    let question = match topic {
        Topic::Cipher =>
            topics::cipher::generate(rng, question_id),

        Topic::Combinatorics =>
            topics::combinatorics::generate(rng, question_id),

        Topic::Graph =>
            topics::graph::generate(rng, question_id),

        Topic::Relations =>
            topics::relations::generate(rng, question_id),
    };

    log::debug!(
        "generated {} ({:?}, branch {})",
        question.question_id, topic, question.branch_key
    );
    question
}

/// Generate from a request: seeded when `rng_seed` is set, entropy otherwise.
pub fn generate_question(request: QuestionRequest) -> Question {
    let mut rng: StdRng = match request.rng_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None       => StdRng::from_entropy(),
    };
    generate_question_with_rng(request.topic, &mut rng)
}

/// Minimal entry point: a fresh, entropy-seeded question for `topic`.
pub fn generate(topic: Topic) -> Question {
    generate_question(QuestionRequest::new(topic))
}
