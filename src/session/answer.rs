use crate::error::QuizError;

/// Words that end the session from the answer prompt.
pub const SENTINELS: &[&str] = &["done", "quit", "exit", "stop"];

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Answer {
    Empty,
    Quit,
    Number(i64),
}

pub fn parse_answer(raw: &str) -> Result<Answer, QuizError> {
    let value = raw.trim();
    if value.is_empty() {
        return Ok(Answer::Empty);
    }
    if SENTINELS.iter().any(|s| value.eq_ignore_ascii_case(s)) {
        return Ok(Answer::Quit);
    }
    value
        .parse::<i64>()
        .map(Answer::Number)
        .map_err(|_| QuizError::NonNumericAnswer(value.to_string()))
}
