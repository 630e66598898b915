//! Mini quiz: answers are collected freely, scoring happens once.

use super::{Flag, Session};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub question: String,
    pub options: Vec<String>,
    /// Index into `options` of the correct answer.
    pub answer: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuizState {
    answers: Vec<Option<usize>>,
    score: Option<u8>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizOutcome {
    pub score: u8,
    pub total: u8,
}

impl QuizOutcome {
    pub fn is_perfect(&self) -> bool {
        self.score == self.total
    }
}

impl QuizState {
    pub fn answer(&self, question: usize) -> Option<usize> {
        self.answers.get(question).copied().flatten()
    }

    pub fn score(&self) -> Option<u8> {
        self.score
    }

    /// Record an answer. Out-of-range questions or options are ignored.
    pub fn select(&mut self, quiz: &[QuizQuestion], question: usize, option: usize) {
        let Some(q) = quiz.get(question) else { return };
        if option >= q.options.len() {
            return;
        }
        if self.answers.len() < quiz.len() {
            self.answers.resize(quiz.len(), None);
        }
        self.answers[question] = Some(option);
    }

    /// Move the selection of one question left (`-1`) or right (`+1`), wrapping.
    pub fn cycle(&mut self, quiz: &[QuizQuestion], question: usize, step: isize) {
        let Some(q) = quiz.get(question) else { return };
        let len = q.options.len() as isize;
        if len == 0 {
            return;
        }
        let next = match self.answer(question) {
            Some(current) => (current as isize + step).rem_euclid(len),
            None if step < 0 => len - 1,
            None => 0,
        };
        self.select(quiz, question, next as usize);
    }

    pub fn all_answered(&self, quiz: &[QuizQuestion]) -> bool {
        !quiz.is_empty() && (0..quiz.len()).all(|i| self.answer(i).is_some())
    }

    pub fn can_submit(&self, quiz: &[QuizQuestion]) -> bool {
        self.score.is_none() && self.all_answered(quiz)
    }
}

impl Session {
    /// Score the quiz once. A perfect score unlocks secret mode.
    pub fn submit_quiz(&mut self, quiz: &[QuizQuestion]) -> Option<QuizOutcome> {
        if self.flag(Flag::QuizDone) || !self.quiz.can_submit(quiz) {
            return None;
        }
        let score = quiz
            .iter()
            .enumerate()
            .filter(|(i, q)| self.quiz.answer(*i) == Some(q.answer))
            .count();
        let outcome = QuizOutcome {
            score: score.min(u8::MAX as usize) as u8,
            total: quiz.len().min(u8::MAX as usize) as u8,
        };
        self.quiz.score = Some(outcome.score);
        self.raise(Flag::QuizDone);
        if outcome.is_perfect() {
            self.raise(Flag::SecretUnlocked);
        }
        tracing::info!(score = outcome.score, total = outcome.total, "quiz submitted");
        Some(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quiz() -> Vec<QuizQuestion> {
        vec![
            QuizQuestion {
                question: "Best season for hot chocolate?".into(),
                options: vec!["Summer".into(), "Autumn".into(), "Winter".into()],
                answer: 2,
            },
            QuizQuestion {
                question: "What goes best with Christmas?".into(),
                options: vec!["Mulled wine".into(), "Sushi".into(), "Iced tea".into()],
                answer: 0,
            },
            QuizQuestion {
                question: "The most important gift?".into(),
                options: vec!["Stress".into(), "Time together".into(), "More to-dos".into()],
                answer: 1,
            },
        ]
    }

    #[test]
    fn test_submit_requires_all_answers() {
        let q = quiz();
        let mut s = Session::new();
        s.quiz.select(&q, 0, 2);
        s.quiz.select(&q, 1, 0);
        assert!(!s.quiz.can_submit(&q));
        assert_eq!(s.submit_quiz(&q), None);
        assert!(!s.flag(Flag::QuizDone));
    }

    #[test]
    fn test_perfect_score_unlocks_secret() {
        let q = quiz();
        let mut s = Session::new();
        s.quiz.select(&q, 0, 2);
        s.quiz.select(&q, 1, 0);
        s.quiz.select(&q, 2, 1);
        let outcome = s.submit_quiz(&q).unwrap();
        assert_eq!(outcome, QuizOutcome { score: 3, total: 3 });
        assert!(outcome.is_perfect());
        assert!(s.secret_unlocked());
        assert!(s.flag(Flag::QuizDone));
        assert_eq!(s.quiz.score(), Some(3));
    }

    #[test]
    fn test_scores_exactly_once() {
        let q = quiz();
        let mut s = Session::new();
        s.quiz.select(&q, 0, 0);
        s.quiz.select(&q, 1, 0);
        s.quiz.select(&q, 2, 1);
        assert_eq!(s.submit_quiz(&q).map(|o| o.score), Some(2));
        assert!(!s.secret_unlocked());

        // Fixing the wrong answer afterwards does not rescore.
        s.quiz.select(&q, 0, 2);
        assert_eq!(s.submit_quiz(&q), None);
        assert_eq!(s.quiz.score(), Some(2));
        assert!(!s.secret_unlocked());
    }

    #[test]
    fn test_select_ignores_out_of_range() {
        let q = quiz();
        let mut state = QuizState::default();
        state.select(&q, 7, 0);
        state.select(&q, 0, 9);
        assert_eq!(state.answer(0), None);
        assert_eq!(state.answer(7), None);
    }

    #[test]
    fn test_cycle_wraps() {
        let q = quiz();
        let mut state = QuizState::default();
        state.cycle(&q, 0, 1);
        assert_eq!(state.answer(0), Some(0));
        state.cycle(&q, 0, -1);
        assert_eq!(state.answer(0), Some(2));
        state.cycle(&q, 0, 1);
        assert_eq!(state.answer(0), Some(0));

        state.cycle(&q, 1, -1);
        assert_eq!(state.answer(1), Some(2));
    }

    #[test]
    fn test_empty_quiz_never_submits() {
        let mut s = Session::new();
        assert_eq!(s.submit_quiz(&[]), None);
    }
}
