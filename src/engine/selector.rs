use rand::Rng;

use crate::engine::problem::{ProblemBank, ProblemId};
use crate::error::QuizError;

/// Indices of the items sharing the minimum count.
pub fn low_tier<T>(items: &[T], count: impl Fn(&T) -> u32) -> Vec<usize> {
    let Some(low) = items.iter().map(&count).min() else {
        return Vec::new();
    };
    items
        .iter()
        .enumerate()
        .filter(|&(_, item)| count(item) == low)
        .map(|(i, _)| i)
        .collect()
}

/// Uniform pick among candidates; a single candidate never touches the rng.
pub fn pick<R: Rng>(candidates: &[usize], rng: &mut R) -> Option<usize> {
    match candidates {
        [] => None,
        [only] => Some(*only),
        _ => Some(candidates[rng.gen_range(0..candidates.len())]),
    }
}

/// Pick the next problem from the least-correct tier of the bank.
///
/// Every problem is asked once before any problem is asked again, and a
/// problem that keeps getting missed stays in the low tier until it is
/// finally answered correctly.
pub fn select_next<R: Rng>(bank: &ProblemBank, rng: &mut R) -> Result<ProblemId, QuizError> {
    let candidates = low_tier(bank.problems(), |p| p.correct);
    pick(&candidates, rng)
        .map(ProblemId)
        .ok_or(QuizError::EmptyBankSelection)
}
