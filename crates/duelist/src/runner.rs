//! Duel runner for playing a whole ladder with an automated judge

use duel_core::{Candidate, TournamentState};
use tracing::info;

use crate::error::ArenaResult;
use crate::session::DuelSession;
use crate::store::SavedDecision;

/// Which member of the current pair a judge keeps
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

/// Anything that can settle a duel without a human.
///
/// Judges see the full state so they can take the graveyard into account,
/// but they only ever choose between the two candidates of the pair.
pub trait Judge {
    fn choose(&mut self, left: &Candidate, right: &Candidate, state: &TournamentState) -> Side;

    /// Returns the judge's name for logs and reports
    fn name(&self) -> &str;
}

/// Configuration for a run
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    /// Print each duel as it is decided
    pub verbose: bool,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self { verbose: true }
    }
}

/// Runs sessions to completion with a judge
pub struct DuelRunner {
    config: RunnerConfig,
}

impl DuelRunner {
    pub fn new(config: RunnerConfig) -> Self {
        Self { config }
    }

    /// Play every remaining duel of `session`.
    ///
    /// Returns the saved form of the finished decision.
    pub fn run(&self, session: &mut DuelSession, judge: &mut dyn Judge) -> ArenaResult<SavedDecision> {
        let total = session.remaining_duels();
        let mut duel_num = 0;

        while let Some((left, right)) = session.pair() {
            let side = judge.choose(left, right, session.state());
            let (winner, loser) = match side {
                Side::Left => (left.to_string(), right.to_string()),
                Side::Right => (right.to_string(), left.to_string()),
            };
            session.pick(&winner)?;
            duel_num += 1;

            if self.config.verbose {
                println!("Duel {}/{}: {} beats {}", duel_num, total, winner, loser);
            }
        }

        let saved = session.finish()?;
        info!(
            judge = judge.name(),
            winner = saved.record.winner.as_ref().map_or("", |w| w.as_str()),
            duels = duel_num,
            "ladder settled"
        );
        Ok(saved)
    }
}

/// Settle a session without printing progress
pub fn quick_duel(session: &mut DuelSession, judge: &mut dyn Judge) -> ArenaResult<SavedDecision> {
    DuelRunner::new(RunnerConfig { verbose: false }).run(session, judge)
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod runner_tests;
