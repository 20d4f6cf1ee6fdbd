use std::collections::BTreeMap;

use crate::engine::coach::CoachRoster;
use crate::engine::problem::{ProblemBank, ProblemId};
use crate::engine::scoring;
use crate::error::QuizError;

/// Result of the last submitted entry, resolved for display.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Feedback {
    Right { question: String, answer: i64 },
    Wrong { question: String, answer: i64, given: i64 },
    Invalid { input: String },
}

impl Feedback {
    pub fn message(&self) -> String {
        match self {
            Feedback::Right { question, answer } => format!("Great job! {question} = {answer}"),
            Feedback::Wrong {
                question, answer, ..
            } => format!("Nice try! The answer is {question} = {answer}"),
            Feedback::Invalid { .. } => "Please enter a number!".to_string(),
        }
    }

    pub fn is_right(&self) -> bool {
        matches!(self, Feedback::Right { .. })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Outcome {
    pub correct: bool,
    pub leveled_up: bool,
}

pub struct SessionState {
    pub current: Option<ProblemId>,
    pub total_right: u32,
    pub total_wrong: u32,
    pub right_by_question: BTreeMap<ProblemId, u32>,
    pub wrong_by_question: BTreeMap<ProblemId, u32>,
    pub level: u32,
    pub coaches: CoachRoster,
}

impl SessionState {
    pub fn new(coaches: CoachRoster) -> Self {
        Self {
            current: None,
            total_right: 0,
            total_wrong: 0,
            right_by_question: BTreeMap::new(),
            wrong_by_question: BTreeMap::new(),
            level: 1,
            coaches,
        }
    }

    /// Grade `given` against the current problem and write the outcome into
    /// both the bank and the session tallies.
    pub fn grade(&mut self, bank: &mut ProblemBank, given: i64) -> Result<(Outcome, Feedback), QuizError> {
        let id = self.current.ok_or(QuizError::EmptyBankSelection)?;
        let problem = bank.get_mut(id).ok_or(QuizError::EmptyBankSelection)?;
        let correct = given == problem.answer;
        problem.record(correct);

        let question = problem.question.clone();
        let answer = problem.answer;
        let feedback = if correct {
            self.total_right += 1;
            *self.right_by_question.entry(id).or_default() += 1;
            Feedback::Right { question, answer }
        } else {
            self.total_wrong += 1;
            *self.wrong_by_question.entry(id).or_default() += 1;
            Feedback::Wrong {
                question,
                answer,
                given,
            }
        };

        let level = scoring::level_from_right(self.total_right);
        let leveled_up = level > self.level;
        self.level = level;

        Ok((
            Outcome {
                correct,
                leveled_up,
            },
            feedback,
        ))
    }

    pub fn answered(&self) -> u32 {
        self.total_right + self.total_wrong
    }

    pub fn coach(&self) -> &str {
        self.coaches.current()
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    use super::*;
    use crate::engine::coach::DEFAULT_COACHES;

    fn state() -> SessionState {
        let mut rng = SmallRng::seed_from_u64(11);
        let names = DEFAULT_COACHES.iter().map(|s| s.to_string()).collect();
        SessionState::new(CoachRoster::new(names, &mut rng).unwrap())
    }

    #[test]
    fn grading_without_current_problem_fails() {
        let mut s = state();
        let mut bank = ProblemBank::multiplication(2);
        assert_eq!(s.grade(&mut bank, 4), Err(QuizError::EmptyBankSelection));
    }

    #[test]
    fn right_answer_updates_bank_and_tallies() {
        let mut s = state();
        let mut bank = ProblemBank::multiplication(2);
        s.current = Some(ProblemId(2));

        let (outcome, feedback) = s.grade(&mut bank, 6).unwrap();
        assert!(outcome.correct);
        assert!(!outcome.leveled_up);
        assert_eq!(
            feedback,
            Feedback::Right {
                question: "2 × 3".to_string(),
                answer: 6
            }
        );

        let p = bank.get(ProblemId(2)).unwrap();
        assert_eq!((p.seen, p.correct, p.wrong), (1, 1, 0));
        assert_eq!(s.total_right, 1);
        assert_eq!(s.right_by_question.get(&ProblemId(2)), Some(&1));
    }

    #[test]
    fn wrong_answer_leaves_correct_untouched() {
        let mut s = state();
        let mut bank = ProblemBank::multiplication(2);
        s.current = Some(ProblemId(0));

        let (outcome, feedback) = s.grade(&mut bank, 5).unwrap();
        assert!(!outcome.correct);
        assert_eq!(feedback.message(), "Nice try! The answer is 2 × 1 = 2");

        let p = bank.get(ProblemId(0)).unwrap();
        assert_eq!((p.seen, p.correct, p.wrong), (1, 0, 1));
        assert_eq!(s.total_wrong, 1);
        assert_eq!(s.wrong_by_question.get(&ProblemId(0)), Some(&1));
        assert_eq!(s.level, 1);
    }

    #[test]
    fn level_up_on_every_third_right_answer() {
        let mut s = state();
        let mut bank = ProblemBank::multiplication(1);
        let mut level_ups = Vec::new();
        for i in 0..9 {
            s.current = Some(ProblemId(i));
            let answer = bank.get(ProblemId(i)).unwrap().answer;
            let (outcome, _) = s.grade(&mut bank, answer).unwrap();
            if outcome.leveled_up {
                level_ups.push(s.total_right);
            }
            assert_eq!(s.level, scoring::level_from_right(s.total_right));
        }
        assert_eq!(level_ups, vec![3, 6, 9]);
        assert_eq!(s.level, 4);
    }

    #[test]
    fn invalid_feedback_message() {
        let fb = Feedback::Invalid {
            input: "abc".to_string(),
        };
        assert_eq!(fb.message(), "Please enter a number!");
        assert!(!fb.is_right());
    }
}
