use rand::Rng;
use crate::quiz_engine::{
    arithmetic::caesar_encrypt,
    helpers::{pick, question},
    models::{Question, QuestionKind, Topic},
};

/// Plaintext pool. Uppercase A..Z only so the shift touches every letter.
pub const WORDS: [&str; 5] = ["HOLA", "MATE", "EXITO", "GRAFO", "LOGICA"];

pub fn generate<R: Rng>(rng: &mut R, question_id: String) -> Question {
    let shift: u8 = rng.gen_range(1..=25);
    let word = *pick(rng, &WORDS);
    build(word, shift, question_id)
}

/// Build the question for a fixed plaintext and shift.
pub fn build(plain: &str, shift: u8, question_id: String) -> Question {
    let encrypted = caesar_encrypt(plain, shift);

    let prompt = format!(
        "Descifra el mensaje \"{encrypted}\" que fue cifrado con un desplazamiento de {shift} posiciones."
    );
    let hint = format!("Usa aritmética modular: (letra - {shift}) mod 26");
    let explanation = format!(
        "El cifrado César usa aritmética modular. Con desplazamiento {shift}, cada letra se mueve \
         {shift} posiciones. Para descifrar, restamos {shift} módulo 26: P = (C - {shift}) mod 26. \
         La respuesta es \"{plain}\"."
    );

    question(
        question_id,
        Topic::Cipher,
        format!("Caesar:{plain}"),
        "Cifrado César",
        prompt,
        plain,
        QuestionKind::FreeText,
        Some(hint),
        explanation,
        "Aritmética Modular",
    )
}
