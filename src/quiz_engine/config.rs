use serde::{Deserialize, Serialize};

use crate::quiz_engine::error::{QuizError, Result};

pub const DEFAULT_QUESTIONS_PER_ROUND: u32 = 5;

/// Round settings for a [`Session`](crate::session::Session).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuizConfig {
    pub questions_per_round: u32,
    /// Fixed seed for reproducible rounds; entropy when unset.
    pub rng_seed: Option<u64>,
}

impl Default for QuizConfig {
    fn default() -> Self {
        QuizConfig {
            questions_per_round: DEFAULT_QUESTIONS_PER_ROUND,
            rng_seed: None,
        }
    }
}

impl QuizConfig {
    /// Parse and validate a JSON config. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: QuizConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.questions_per_round == 0 {
            return Err(QuizError::InvalidConfig(
                "questions_per_round must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_gives_defaults() {
        let cfg = QuizConfig::from_json_str("{}").unwrap();
        assert_eq!(cfg, QuizConfig::default());
        assert_eq!(cfg.questions_per_round, 5);
    }

    #[test]
    fn fields_override_defaults() {
        let cfg = QuizConfig::from_json_str(r#"{"questions_per_round": 3, "rng_seed": 9}"#).unwrap();
        assert_eq!(cfg.questions_per_round, 3);
        assert_eq!(cfg.rng_seed, Some(9));
    }

    #[test]
    fn zero_questions_is_rejected() {
        let err = QuizConfig::from_json_str(r#"{"questions_per_round": 0}"#).unwrap_err();
        assert!(matches!(err, QuizError::InvalidConfig(_)), "{err}");
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = QuizConfig::from_json_str("{questions_per_round").unwrap_err();
        assert!(matches!(err, QuizError::Config(_)));
    }
}
