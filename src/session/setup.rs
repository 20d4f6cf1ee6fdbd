use crate::engine::problem::{Operation, validate_param};
use crate::error::QuizError;

/// Validated player choices a session is built from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionSetup {
    pub player: String,
    pub operation: Operation,
    /// Digit count for add/subtract, table index (0 = all) for multiply/divide.
    pub param: u32,
}

impl SessionSetup {
    pub fn new(player: &str, operation: Operation, param: u32) -> Result<Self, QuizError> {
        let player = player.trim();
        if player.is_empty() {
            return Err(QuizError::InvalidConfig(
                "player name is required".to_string(),
            ));
        }
        validate_param(operation, param)?;
        Ok(Self {
            player: player.to_string(),
            operation,
            param,
        })
    }

    pub fn param_label(&self) -> String {
        match (self.operation.uses_tables(), self.param) {
            (true, 0) => "all tables".to_string(),
            (true, t) => format!("table {t}"),
            (false, 1) => "1 digit".to_string(),
            (false, d) => format!("{d} digits"),
        }
    }
}

/// Parse a table choice: `all` (any case) maps to 0.
pub fn parse_table(raw: &str) -> Result<u32, QuizError> {
    let raw = raw.trim();
    if raw.eq_ignore_ascii_case("all") {
        return Ok(0);
    }
    raw.parse()
        .map_err(|_| QuizError::InvalidConfig(format!("table must be a number or all, got {raw:?}")))
}

pub fn parse_operation(raw: &str) -> Result<Operation, QuizError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "add" | "addition" | "+" => Ok(Operation::Add),
        "sub" | "subtract" | "subtraction" | "-" => Ok(Operation::Sub),
        "mul" | "multiply" | "multiplication" | "x" | "*" => Ok(Operation::Mul),
        "div" | "divide" | "division" | "/" => Ok(Operation::Div),
        other => Err(QuizError::InvalidConfig(format!("unknown operation {other:?}"))),
    }
}
