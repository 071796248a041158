//! Headless three-screen round driver: menu → playing → complete.
//!
//! A [`Session`] owns everything the engine deliberately does not: the
//! selected topic, the current question, the running score, and the bridge
//! progress shown while playing. It calls [`generate_question_with_rng`] once
//! per question and [`is_correct`] once per submitted answer.

use std::fmt;

use rand::{rngs::StdRng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::quiz_engine::{
    error::{QuizError, Result},
    generate_question_with_rng, is_correct, Question, QuizConfig, Topic,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Screen {
    Menu,
    Playing,
    Complete,
}

/// Result of judging one submitted answer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Feedback {
    pub is_correct: bool,
    pub correct_answer: String,
    pub explanation: String,
    pub score: u32,
    pub question_number: u32,
    /// Percentage of the bridge built so far (0..=100).
    pub bridge_progress: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rating {
    Perfect,
    Excellent,
    GoodJob,
    KeepPracticing,
}

impl Rating {
    pub fn from_score(score: u32, total: u32) -> Rating {
        let pct = percentage(score, total);
        if total > 0 && score >= total {
            Rating::Perfect
        } else if pct >= 70.0 {
            Rating::Excellent
        } else if pct >= 50.0 {
            Rating::GoodJob
        } else {
            Rating::KeepPracticing
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            Rating::Perfect        => "🏆",
            Rating::Excellent      => "🎉",
            Rating::GoodJob        => "👍",
            Rating::KeepPracticing => "💪",
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rating::Perfect        => write!(f, "¡Perfecto!"),
            Rating::Excellent      => write!(f, "¡Excelente!"),
            Rating::GoodJob        => write!(f, "¡Buen trabajo!"),
            Rating::KeepPracticing => write!(f, "¡Sigue practicando!"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub score: u32,
    pub total: u32,
    pub percentage: f32,
    pub rating: Rating,
}

impl Summary {
    pub fn new(score: u32, total: u32) -> Summary {
        Summary {
            score,
            total,
            percentage: percentage(score, total),
            rating: Rating::from_score(score, total),
        }
    }
}

fn percentage(part: u32, total: u32) -> f32 {
    if total == 0 {
        return 0.0;
    }
    part as f32 / total as f32 * 100.0
}

#[derive(Debug)]
pub struct Session {
    config: QuizConfig,
    rng: StdRng,
    screen: Screen,
    topic: Option<Topic>,
    question: Option<Question>,
    question_number: u32,
    score: u32,
    /// `Some(correct)` once the current question has been judged.
    judged: Option<bool>,
    bridge_progress: f32,
}

impl Session {
    /// New session on the menu screen. Seeds from `config.rng_seed` when set.
    pub fn new(config: QuizConfig) -> Result<Session> {
        config.validate()?;
        let rng = match config.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None       => StdRng::from_entropy(),
        };
        Ok(Session {
            config,
            rng,
            screen: Screen::Menu,
            topic: None,
            question: None,
            question_number: 0,
            score: 0,
            judged: None,
            bridge_progress: 0.0,
        })
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn topic(&self) -> Option<Topic> {
        self.topic
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.question.as_ref()
    }

    /// 1-based index of the current question; 0 on the menu.
    pub fn question_number(&self) -> u32 {
        self.question_number
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn total_questions(&self) -> u32 {
        self.config.questions_per_round
    }

    pub fn bridge_progress(&self) -> f32 {
        self.bridge_progress
    }

    /// Share of the round already answered, for the progress bar.
    pub fn round_progress(&self) -> f32 {
        percentage(self.question_number.saturating_sub(1), self.total_questions())
    }

    /// Start a fresh round on `topic`, from any screen.
    pub fn select_topic(&mut self, topic: Topic) -> &Question {
        log::info!("{:?} -> Playing ({:?})", self.screen, topic);
        self.screen = Screen::Playing;
        self.topic = Some(topic);
        self.score = 0;
        self.question_number = 1;
        self.judged = None;
        self.bridge_progress = 0.0;
        self.question.insert(generate_question_with_rng(topic, &mut self.rng))
    }

    /// Judge `answer` against the current question.
    pub fn submit(&mut self, answer: &str) -> Result<Feedback> {
        if self.screen != Screen::Playing {
            return Err(QuizError::NotPlaying);
        }
        if self.judged.is_some() {
            return Err(QuizError::AlreadyAnswered);
        }
        if answer.trim().is_empty() {
            return Err(QuizError::EmptyAnswer);
        }
        let question = self.question.as_ref().ok_or(QuizError::NotPlaying)?;

        let correct = is_correct(question, answer);
        if correct {
            self.score += 1;
            self.bridge_progress = percentage(self.question_number, self.total_questions());
        }
        self.judged = Some(correct);
        log::debug!(
            "question {}/{} {}: {}",
            self.question_number,
            self.total_questions(),
            question.question_id,
            if correct { "correct" } else { "incorrect" }
        );

        Ok(Feedback {
            is_correct: correct,
            correct_answer: question.answer.clone(),
            explanation: question.explanation.clone(),
            score: self.score,
            question_number: self.question_number,
            bridge_progress: self.bridge_progress,
        })
    }

    /// Move past the judged question: next question, or the complete screen
    /// after the last one.
    pub fn advance(&mut self) -> Result<Screen> {
        if self.screen != Screen::Playing {
            return Err(QuizError::NotPlaying);
        }
        if self.judged.is_none() {
            return Err(QuizError::AwaitingAnswer);
        }
        let topic = self.topic.ok_or(QuizError::NotPlaying)?;

        self.judged = None;
        if self.question_number >= self.total_questions() {
            log::info!("Playing -> Complete ({}/{})", self.score, self.total_questions());
            self.screen = Screen::Complete;
            self.question = None;
        } else {
            self.question_number += 1;
            self.question = Some(generate_question_with_rng(topic, &mut self.rng));
        }
        Ok(self.screen)
    }

    /// Final result; only available on the complete screen.
    pub fn summary(&self) -> Option<Summary> {
        match self.screen {
            Screen::Complete => Some(Summary::new(self.score, self.total_questions())),
            _ => None,
        }
    }

    pub fn back_to_menu(&mut self) {
        log::info!("{:?} -> Menu", self.screen);
        self.screen = Screen::Menu;
        self.topic = None;
        self.question = None;
        self.question_number = 0;
        self.judged = None;
        self.bridge_progress = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded(seed: u64) -> Session {
        Session::new(QuizConfig { rng_seed: Some(seed), ..QuizConfig::default() }).unwrap()
    }

    fn answer_current(session: &mut Session, right: bool) -> Feedback {
        let answer = session.current_question().unwrap().answer.clone();
        let submitted = if right { answer.to_lowercase() } else { format!("{answer}X") };
        session.submit(&submitted).unwrap()
    }

    #[test]
    fn starts_on_menu() {
        let s = seeded(1);
        assert_eq!(s.screen(), Screen::Menu);
        assert!(s.current_question().is_none());
        assert!(s.summary().is_none());
    }

    #[test]
    fn perfect_round_builds_the_whole_bridge() {
        let mut s = seeded(2);
        s.select_topic(Topic::Combinatorics);
        for n in 1..=5 {
            assert_eq!(s.question_number(), n);
            let fb = answer_current(&mut s, true);
            assert!(fb.is_correct);
            assert_eq!(fb.score, n);
            assert!((fb.bridge_progress - n as f32 * 20.0).abs() < 1e-3);
            s.advance().unwrap();
        }
        assert_eq!(s.screen(), Screen::Complete);
        let summary = s.summary().unwrap();
        assert_eq!((summary.score, summary.total), (5, 5));
        assert_eq!(summary.rating, Rating::Perfect);
    }

    #[test]
    fn wrong_answers_do_not_move_the_bridge() {
        let mut s = seeded(3);
        s.select_topic(Topic::Graph);
        let fb = answer_current(&mut s, false);
        assert!(!fb.is_correct);
        assert_eq!(fb.score, 0);
        assert_eq!(fb.bridge_progress, 0.0);
        assert!(!fb.explanation.is_empty());
    }

    #[test]
    fn empty_submission_is_refused_without_consuming_the_question() {
        let mut s = seeded(4);
        s.select_topic(Topic::Cipher);
        assert!(matches!(s.submit("   "), Err(QuizError::EmptyAnswer)));
        assert!(answer_current(&mut s, true).is_correct);
    }

    #[test]
    fn out_of_order_calls_are_errors() {
        let mut s = seeded(5);
        assert!(matches!(s.submit("x"), Err(QuizError::NotPlaying)));
        assert!(matches!(s.advance(), Err(QuizError::NotPlaying)));

        s.select_topic(Topic::Relations);
        assert!(matches!(s.advance(), Err(QuizError::AwaitingAnswer)));
        answer_current(&mut s, true);
        assert!(matches!(s.submit("Ninguna"), Err(QuizError::AlreadyAnswered)));
    }

    #[test]
    fn mixed_round_rates_by_percentage() {
        let mut s = seeded(6);
        s.select_topic(Topic::Cipher);
        for right in [true, true, true, false, false] {
            answer_current(&mut s, right);
            s.advance().unwrap();
        }
        let summary = s.summary().unwrap();
        assert_eq!(summary.score, 3);
        assert!((summary.percentage - 60.0).abs() < 1e-3);
        assert_eq!(summary.rating, Rating::GoodJob);
    }

    #[test]
    fn replaying_from_complete_starts_fresh() {
        let mut s = seeded(9);
        s.select_topic(Topic::Cipher);
        for _ in 0..5 {
            answer_current(&mut s, true);
            s.advance().unwrap();
        }
        assert_eq!(s.screen(), Screen::Complete);
        assert_eq!(s.bridge_progress(), 100.0);

        s.select_topic(Topic::Relations);
        assert_eq!(s.screen(), Screen::Playing);
        assert_eq!(s.topic(), Some(Topic::Relations));
        assert_eq!(s.score(), 0);
        assert_eq!(s.question_number(), 1);
        assert_eq!(s.bridge_progress(), 0.0);
        assert!(s.summary().is_none());
        assert_eq!(s.current_question().unwrap().topic, Topic::Relations);
    }

    #[test]
    fn session_debug_shows_screen() {
        let s = seeded(10);
        assert!(format!("{s:?}").contains("Menu"));
    }

    #[test]
    fn back_to_menu_clears_the_round() {
        let mut s = seeded(7);
        s.select_topic(Topic::Graph);
        answer_current(&mut s, true);
        s.back_to_menu();
        assert_eq!(s.screen(), Screen::Menu);
        assert!(s.topic().is_none());
        assert_eq!(s.bridge_progress(), 0.0);

        s.select_topic(Topic::Cipher);
        assert_eq!(s.score(), 0);
        assert_eq!(s.question_number(), 1);
    }

    #[test]
    fn round_length_follows_config() {
        let mut s = Session::new(QuizConfig { questions_per_round: 2, rng_seed: Some(8) }).unwrap();
        s.select_topic(Topic::Relations);
        answer_current(&mut s, true);
        assert_eq!(s.advance().unwrap(), Screen::Playing);
        answer_current(&mut s, true);
        assert_eq!(s.advance().unwrap(), Screen::Complete);
    }

    #[test]
    fn rating_thresholds() {
        assert_eq!(Rating::from_score(5, 5), Rating::Perfect);
        assert_eq!(Rating::from_score(4, 5), Rating::Excellent);
        assert_eq!(Rating::from_score(3, 5), Rating::GoodJob);
        assert_eq!(Rating::from_score(2, 5), Rating::KeepPracticing);
        assert_eq!(Rating::from_score(0, 5), Rating::KeepPracticing);
    }
}
