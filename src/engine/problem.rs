use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::QuizError;

/// Highest factor in the multiplication and division tables.
pub const TABLE_END: u32 = 10;
pub const MAX_DIGITS: u32 = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operation {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operation {
    pub fn as_str(self) -> &'static str {
        match self {
            Operation::Add => "addition",
            Operation::Sub => "subtraction",
            Operation::Mul => "multiplication",
            Operation::Div => "division",
        }
    }

    /// Add and subtract take a digit count; multiply and divide take a table.
    pub fn uses_tables(self) -> bool {
        matches!(self, Operation::Mul | Operation::Div)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stable index of a problem inside its bank.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ProblemId(pub usize);

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Problem {
    pub question: String,
    pub answer: i64,
    pub seen: u32,
    pub correct: u32,
    pub wrong: u32,
}

impl Problem {
    pub fn new(question: String, answer: i64) -> Self {
        Self {
            question,
            answer,
            seen: 0,
            correct: 0,
            wrong: 0,
        }
    }

    pub fn record(&mut self, correct: bool) {
        self.seen += 1;
        if correct {
            self.correct += 1;
        } else {
            self.wrong += 1;
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct ProblemBank {
    problems: Vec<Problem>,
}

impl ProblemBank {
    pub fn from_problems(problems: Vec<Problem>) -> Self {
        Self { problems }
    }

    /// Build the bank for an operation. `param` is a digit count for
    /// add/subtract and a table index (0 = all) for multiply/divide.
    pub fn generate(op: Operation, param: u32) -> Result<Self, QuizError> {
        validate_param(op, param)?;
        Ok(match op {
            Operation::Add => Self::addition(param),
            Operation::Sub => Self::subtraction(param),
            Operation::Mul => Self::multiplication(param),
            Operation::Div => Self::division(param),
        })
    }

    pub fn addition(digits: u32) -> Self {
        let max = 10_i64.pow(digits);
        // a + b and b + a are both kept.
        let mut problems = Vec::with_capacity(((max - 1) * (max - 1)) as usize);
        for a in 1..max {
            for b in 1..max {
                problems.push(Problem::new(format!("{a} + {b}"), a + b));
            }
        }
        Self { problems }
    }

    pub fn subtraction(digits: u32) -> Self {
        let max = 10_i64.pow(digits);
        let problems = (1..max)
            .flat_map(|a| (1..max).map(move |b| (a, b)))
            .filter(|&(a, b)| b <= a)
            .map(|(a, b)| Problem::new(format!("{a} - {b}"), a - b))
            .collect();
        Self { problems }
    }

    pub fn multiplication(table: u32) -> Self {
        Self::per_table(table, |t| {
            (1..=TABLE_END as i64)
                .map(|y| Problem::new(format!("{t} × {y}"), t * y))
                .collect()
        })
    }

    pub fn division(table: u32) -> Self {
        Self::per_table(table, |t| {
            (1..=TABLE_END as i64)
                .map(|x| Problem::new(format!("{} / {t}", x * t), x))
                .collect()
        })
    }

    fn per_table(table: u32, build: impl Fn(i64) -> Vec<Problem>) -> Self {
        let problems = if table == 0 {
            (1..=TABLE_END as i64).flat_map(&build).collect()
        } else {
            build(table as i64)
        };
        Self { problems }
    }

    pub fn len(&self) -> usize {
        self.problems.len()
    }

    pub fn is_empty(&self) -> bool {
        self.problems.is_empty()
    }

    pub fn get(&self, id: ProblemId) -> Option<&Problem> {
        self.problems.get(id.0)
    }

    pub fn get_mut(&mut self, id: ProblemId) -> Option<&mut Problem> {
        self.problems.get_mut(id.0)
    }

    pub fn problems(&self) -> &[Problem] {
        &self.problems
    }

    pub fn iter(&self) -> impl Iterator<Item = (ProblemId, &Problem)> {
        self.problems
            .iter()
            .enumerate()
            .map(|(i, p)| (ProblemId(i), p))
    }
}

pub fn validate_param(op: Operation, param: u32) -> Result<(), QuizError> {
    if op.uses_tables() {
        if param > TABLE_END {
            return Err(QuizError::InvalidConfig(format!(
                "table must be 1 through {TABLE_END} or all, got {param}"
            )));
        }
    } else if !(1..=MAX_DIGITS).contains(&param) {
        return Err(QuizError::InvalidConfig(format!(
            "digits must be 1 through {MAX_DIGITS}, got {param}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn operands(question: &str, sep: &str) -> (i64, i64) {
        let (a, b) = question.split_once(sep).unwrap();
        (a.trim().parse().unwrap(), b.trim().parse().unwrap())
    }

    #[test]
    fn addition_sizes_and_answers() {
        for d in 1..=3 {
            let bank = ProblemBank::addition(d);
            let side = 10_usize.pow(d) - 1;
            assert_eq!(bank.len(), side * side);
            if d < 3 {
                for p in bank.problems() {
                    let (a, b) = operands(&p.question, "+");
                    assert_eq!(a + b, p.answer);
                }
            }
        }
    }

    #[test]
    fn addition_keeps_commutative_pairs_in_order() {
        let bank = ProblemBank::addition(1);
        let questions: Vec<&str> = bank.problems().iter().map(|p| p.question.as_str()).collect();
        assert_eq!(&questions[..3], &["1 + 1", "1 + 2", "1 + 3"]);
        assert!(questions.contains(&"2 + 7"));
        assert!(questions.contains(&"7 + 2"));
        assert_eq!(questions.last(), Some(&"9 + 9"));
    }

    #[test]
    fn subtraction_never_negative_and_counts_per_minuend() {
        for d in 1..=2 {
            let bank = ProblemBank::subtraction(d);
            let max = 10_i64.pow(d);
            for p in bank.problems() {
                assert!(p.answer >= 0, "{} = {}", p.question, p.answer);
            }
            for a in 1..max {
                let count = bank
                    .problems()
                    .iter()
                    .filter(|p| operands(&p.question, "-").0 == a)
                    .count();
                assert_eq!(count as i64, a.min(max - 1));
            }
        }
    }

    #[test]
    fn subtraction_generation_order() {
        let bank = ProblemBank::subtraction(1);
        let first: Vec<&str> = bank.problems()[..4].iter().map(|p| p.question.as_str()).collect();
        assert_eq!(first, vec!["1 - 1", "2 - 1", "2 - 2", "3 - 1"]);
        assert_eq!(bank.len(), 45);
    }

    #[test]
    fn multiplication_all_is_concatenation_of_tables() {
        let all = ProblemBank::multiplication(0);
        let concat: Vec<Problem> = (1..=TABLE_END)
            .flat_map(|t| ProblemBank::multiplication(t).problems().to_vec())
            .collect();
        assert_eq!(all.problems(), concat.as_slice());
        assert_eq!(all.len(), 100);
    }

    #[test]
    fn multiplication_single_table() {
        let bank = ProblemBank::multiplication(7);
        assert_eq!(bank.len(), 10);
        for (i, p) in bank.problems().iter().enumerate() {
            let y = i as i64 + 1;
            assert_eq!(p.question, format!("7 × {y}"));
            assert_eq!(p.answer, 7 * y);
        }
    }

    #[test]
    fn division_is_exact() {
        for t in 1..=TABLE_END {
            let bank = ProblemBank::division(t);
            assert_eq!(bank.len(), 10);
            for p in bank.problems() {
                let (dividend, divisor) = operands(&p.question, "/");
                assert_eq!(divisor, t as i64);
                assert_eq!(p.answer * divisor, dividend);
            }
        }
        assert_eq!(ProblemBank::division(0).len(), 100);
    }

    #[test]
    fn questions_are_unique_within_every_bank() {
        let banks = [
            ProblemBank::addition(2),
            ProblemBank::subtraction(2),
            ProblemBank::multiplication(0),
            ProblemBank::division(0),
        ];
        for bank in &banks {
            let unique: HashSet<&str> = bank.problems().iter().map(|p| p.question.as_str()).collect();
            assert_eq!(unique.len(), bank.len());
        }
    }

    #[test]
    fn counters_start_at_zero() {
        let bank = ProblemBank::division(3);
        assert!(bank.problems().iter().all(|p| p.seen == 0 && p.correct == 0 && p.wrong == 0));
    }

    #[test]
    fn generate_rejects_out_of_range_params() {
        assert!(ProblemBank::generate(Operation::Add, 0).is_err());
        assert!(ProblemBank::generate(Operation::Sub, 4).is_err());
        assert!(ProblemBank::generate(Operation::Mul, 11).is_err());
        assert!(matches!(
            ProblemBank::generate(Operation::Div, 12),
            Err(QuizError::InvalidConfig(_))
        ));
        assert_eq!(ProblemBank::generate(Operation::Mul, 0).unwrap().len(), 100);
        assert_eq!(ProblemBank::generate(Operation::Add, 1).unwrap().len(), 81);
    }

    #[test]
    fn record_keeps_seen_equal_to_outcomes() {
        let mut p = Problem::new("2 + 2".to_string(), 4);
        p.record(true);
        p.record(false);
        p.record(false);
        assert_eq!(p.seen, p.correct + p.wrong);
        assert_eq!((p.correct, p.wrong), (1, 2));
    }
}
