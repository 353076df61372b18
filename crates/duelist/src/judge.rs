//! Automated judges
//!
//! Useful for:
//! - Simulating ladders from the command line
//! - Testing the runner without a human at the keyboard

use duel_core::{Candidate, TournamentState};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::runner::{Judge, Side};

/// A judge that flips a coin for every duel.
#[derive(Debug, Clone)]
pub struct RandomJudge {
    rng: StdRng,
}

impl RandomJudge {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Reproducible judge for tests and repeatable simulations.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomJudge {
    fn default() -> Self {
        Self::new()
    }
}

impl Judge for RandomJudge {
    fn choose(&mut self, _left: &Candidate, _right: &Candidate, _state: &TournamentState) -> Side {
        if self.rng.gen_bool(0.5) {
            Side::Left
        } else {
            Side::Right
        }
    }

    fn name(&self) -> &str {
        "random"
    }
}

/// A judge that always keeps the first candidate of the pair.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstJudge;

impl Judge for FirstJudge {
    fn choose(&mut self, _left: &Candidate, _right: &Candidate, _state: &TournamentState) -> Side {
        Side::Left
    }

    fn name(&self) -> &str {
        "first"
    }
}
