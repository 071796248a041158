use rand::Rng;
use crate::quiz_engine::{
    helpers::{pick, question, single_choice},
    models::{Question, Topic},
};

/// Candidate answers shown for every relation, in display order.
pub const OPTIONS: [&str; 6] = [
    "Reflexiva",
    "Simétrica",
    "Transitiva",
    "Reflexiva y Simétrica",
    "Simétrica y Transitiva",
    "Ninguna",
];

/// A relation over {1,2,3} with its pre-authored classification.
#[derive(Debug, Clone, Copy)]
pub struct RelationInstance {
    pub pairs: &'static [(u8, u8)],
    /// Must be one of [`OPTIONS`].
    pub label: &'static str,
    /// Branch key suffix.
    pub branch: &'static str,
    pub explanation: &'static str,
}

impl RelationInstance {
    /// "R = {(1,1), (2,2)}"
    pub fn render(&self) -> String {
        let body = self
            .pairs
            .iter()
            .map(|(a, b)| format!("({a},{b})"))
            .collect::<Vec<_>>()
            .join(", ");
        format!("R = {{{body}}}")
    }
}

pub const RELATIONS: [RelationInstance; 3] = [
    RelationInstance {
        pairs: &[(1, 1), (2, 2), (3, 3), (1, 2), (2, 1)],
        label: "Reflexiva y Simétrica",
        branch: "ReflexiveSymmetric",
        explanation: "Es reflexiva porque cada elemento se relaciona consigo mismo: (1,1), (2,2) y \
                      (3,3) están en R. Es simétrica porque si (a,b) está en R, entonces (b,a) \
                      también está: (1,2) y (2,1) aparecen juntos.",
    },
    RelationInstance {
        pairs: &[(1, 1), (2, 2), (1, 2), (2, 3), (1, 3)],
        label: "Transitiva",
        branch: "Transitive",
        explanation: "Es transitiva porque (1,2) y (2,3) implican (1,3), que está en R. No es \
                      reflexiva porque falta (3,3). No es simétrica porque (1,2) está pero (2,1) no.",
    },
    RelationInstance {
        pairs: &[(1, 2), (2, 1), (2, 3), (3, 2)],
        label: "Simétrica",
        branch: "Symmetric",
        explanation: "Es simétrica porque para cada (a,b) en R, (b,a) también está en R. No es \
                      reflexiva porque ningún elemento se relaciona consigo mismo. No es transitiva \
                      porque (1,2) y (2,3) están en R pero (1,3) no.",
    },
];

pub fn generate<R: Rng>(rng: &mut R, question_id: String) -> Question {
    let relation = pick(rng, &RELATIONS);
    build(relation, question_id)
}

/// Build the question for one relation instance.
pub fn build(relation: &RelationInstance, question_id: String) -> Question {
    question(
        question_id,
        Topic::Relations,
        format!("Relation:{}", relation.branch),
        "Propiedades",
        format!(
            "Dada la relación {} sobre el conjunto {{1,2,3}}, ¿qué propiedad(es) cumple?",
            relation.render()
        ),
        relation.label,
        single_choice(&OPTIONS),
        Some(
            "Reflexiva: (a,a) para todo a. Simétrica: si (a,b) entonces (b,a). \
             Transitiva: si (a,b) y (b,c) entonces (a,c)"
                .to_string(),
        ),
        relation.explanation.to_string(),
        "Propiedades de Relaciones",
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn every_label_is_an_option() {
        for r in &RELATIONS {
            assert!(OPTIONS.contains(&r.label), "{} not among options", r.label);
        }
    }

    #[test]
    fn reflexive_symmetric_instance() {
        let q = build(&RELATIONS[0], "RE-1".into());
        assert!(q.prompt.contains("R = {(1,1), (2,2), (3,3), (1,2), (2,1)}"), "{}", q.prompt);
        assert_eq!(q.answer, "Reflexiva y Simétrica");
        let options = q.options().expect("single choice");
        assert_eq!(options.len(), 6);
        assert!(options.iter().any(|o| o == &q.answer));
    }

    #[test]
    fn options_do_not_depend_on_relation() {
        let mut rng = StdRng::seed_from_u64(21);
        let first = generate(&mut rng, "RE-0".into());
        for i in 1..40 {
            let q = generate(&mut rng, format!("RE-{i}"));
            assert_eq!(q.options(), first.options());
        }
    }
}
