use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::engine::problem::{Operation, ProblemBank};
use crate::engine::scoring;
use crate::session::setup::SessionSetup;
use crate::session::state::SessionState;

const MOST_MISSED_LIMIT: usize = 5;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SessionSummary {
    pub player: String,
    pub operation: Operation,
    pub param: u32,
    pub total_right: u32,
    pub total_wrong: u32,
    pub accuracy: f64,
    pub level: u32,
    pub elapsed_secs: f64,
    pub finished_at: DateTime<Utc>,
    #[serde(default)]
    pub most_missed: Vec<MissedQuestion>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissedQuestion {
    pub question: String,
    pub answer: i64,
    pub wrong: u32,
    pub right: u32,
}

impl SessionSummary {
    pub fn from_session(
        setup: &SessionSetup,
        state: &SessionState,
        bank: &ProblemBank,
        elapsed_secs: f64,
    ) -> Self {
        let mut most_missed: Vec<MissedQuestion> = state
            .wrong_by_question
            .iter()
            .filter_map(|(&id, &wrong)| {
                let problem = bank.get(id)?;
                Some(MissedQuestion {
                    question: problem.question.clone(),
                    answer: problem.answer,
                    wrong,
                    right: state.right_by_question.get(&id).copied().unwrap_or(0),
                })
            })
            .collect();
        // Ties keep bank order since the map is ordered by id.
        most_missed.sort_by(|a, b| b.wrong.cmp(&a.wrong));
        most_missed.truncate(MOST_MISSED_LIMIT);

        Self {
            player: setup.player.clone(),
            operation: setup.operation,
            param: setup.param,
            total_right: state.total_right,
            total_wrong: state.total_wrong,
            accuracy: scoring::accuracy(state.total_right, state.total_wrong),
            level: state.level,
            elapsed_secs,
            finished_at: Utc::now(),
            most_missed,
        }
    }
}

impl fmt::Display for SessionSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Thanks for playing, {}!", self.player)?;
        writeln!(
            f,
            "{}: {} right, {} wrong ({:.1}%), reached level {} in {:.0}s",
            self.operation,
            self.total_right,
            self.total_wrong,
            self.accuracy,
            self.level,
            self.elapsed_secs,
        )?;
        if !self.most_missed.is_empty() {
            writeln!(f, "Worth another look:")?;
            for m in &self.most_missed {
                writeln!(f, "  {} = {}  (missed {}x)", m.question, m.answer, m.wrong)?;
            }
        }
        Ok(())
    }
}
