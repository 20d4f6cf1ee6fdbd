use rand::Rng;

use crate::engine::selector::{low_tier, pick};
use crate::error::QuizError;

pub const DEFAULT_COACHES: &[&str] = &[
    "fox",
    "alpaca",
    "dragon",
    "bud-frogs",
    "dragon-and-cow",
    "elephant",
    "hellokitty",
    "kitty",
    "llama",
    "koala",
    "meow",
    "moose",
    "sheep",
    "small",
    "default",
    "stegosaurus",
    "sus",
    "turkey",
    "turtle",
];

/// Fixed roster of coaches rotated least-used-first on every level-up.
#[derive(Clone, Debug)]
pub struct CoachRoster {
    names: Vec<String>,
    usage: Vec<u32>,
    current: usize,
}

impl CoachRoster {
    /// The opening coach is a plain uniform pick and does not count as usage.
    pub fn new<R: Rng>(names: Vec<String>, rng: &mut R) -> Result<Self, QuizError> {
        if names.is_empty() {
            return Err(QuizError::InvalidConfig(
                "coach roster must not be empty".to_string(),
            ));
        }
        let current = rng.gen_range(0..names.len());
        let usage = vec![0; names.len()];
        Ok(Self {
            names,
            usage,
            current,
        })
    }

    pub fn current(&self) -> &str {
        &self.names[self.current]
    }

    /// Hand over to the least-used coach, never the current one unless it is
    /// the only least-used candidate.
    pub fn rotate<R: Rng>(&mut self, rng: &mut R) -> &str {
        let mut candidates = low_tier(&self.usage, |u| *u);
        if candidates.len() > 1 {
            candidates.retain(|&i| i != self.current);
        }
        if let Some(next) = pick(&candidates, rng) {
            self.current = next;
            self.usage[next] += 1;
        }
        self.current()
    }

    pub fn usage(&self) -> impl Iterator<Item = (&str, u32)> {
        self.names
            .iter()
            .map(String::as_str)
            .zip(self.usage.iter().copied())
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
