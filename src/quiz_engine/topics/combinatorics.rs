use rand::Rng;
use crate::quiz_engine::{
    arithmetic::{combination, permutation},
    helpers::question,
    models::{Question, QuestionKind, Topic},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Permutation,
    Combination,
}

pub fn generate<R: Rng>(rng: &mut R, question_id: String) -> Question {
    if rng.gen_bool(0.5) {
        let n = rng.gen_range(5..=8u64);
        let r = rng.gen_range(2..=4u64);
        build(Mode::Permutation, n, r, question_id)
    } else {
        let n = rng.gen_range(6..=9u64);
        let r = rng.gen_range(2..=4u64);
        build(Mode::Combination, n, r, question_id)
    }
}

/// Build the question for fixed `mode`, `n` and `r`.
pub fn build(mode: Mode, n: u64, r: u64, question_id: String) -> Question {
    match mode {
        Mode::Permutation => {
            let result = permutation(n, r);
            question(
                question_id,
                Topic::Combinatorics,
                "Permutation",
                "Permutaciones",
                format!(
                    "¿De cuántas formas diferentes se pueden ordenar {r} elementos de un \
                     conjunto de {n} elementos? (Orden importa)"
                ),
                result.to_string(),
                QuestionKind::FreeText,
                Some("Usa la fórmula P(n,r) = n!/(n-r)!".to_string()),
                format!(
                    "Permutación P({n},{r}) = {n}!/({n}-{r})! = {result}. El orden importa, por lo \
                     que cada arreglo diferente cuenta como una permutación distinta."
                ),
                "Permutaciones",
            )
        }
        Mode::Combination => {
            let result = combination(n, r);
            question(
                question_id,
                Topic::Combinatorics,
                "Combination",
                "Combinaciones",
                format!(
                    "¿De cuántas formas se pueden elegir {r} elementos de un conjunto de {n} \
                     elementos? (Orden NO importa)"
                ),
                result.to_string(),
                QuestionKind::FreeText,
                Some("Usa la fórmula C(n,r) = n!/(r!(n-r)!)".to_string()),
                format!(
                    "Combinación C({n},{r}) = {n}!/({r}!×{}!) = {result}. El orden no importa, solo \
                     importa qué elementos se seleccionan.",
                    n - r
                ),
                "Combinaciones",
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn fixed_instances() {
        let p = build(Mode::Permutation, 5, 2, "CO-1".into());
        assert_eq!(p.answer, "20");
        assert!(p.explanation.contains("P(5,2)"));

        let c = build(Mode::Combination, 6, 2, "CO-2".into());
        assert_eq!(c.answer, "15");
        assert!(c.explanation.contains("C(6,2)"));
        assert!(c.explanation.contains("2!×4!"));
    }

    #[test]
    fn both_modes_appear_and_answers_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(11);
        let (mut perms, mut combs) = (0, 0);
        for i in 0..200 {
            let q = generate(&mut rng, format!("CO-{i}"));
            let value: u64 = q.answer.parse().expect("numeric answer");
            match q.branch_key.as_str() {
                // P(5,2) .. P(8,4)
                "Permutation" => { perms += 1; assert!((20..=1680).contains(&value)); }
                // C(6,2) .. C(9,4)
                "Combination" => { combs += 1; assert!((15..=126).contains(&value)); }
                other => panic!("unexpected branch {other}"),
            }
        }
        assert!(perms > 0 && combs > 0, "perms={perms} combs={combs}");
    }
}
