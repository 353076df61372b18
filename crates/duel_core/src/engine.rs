//! The ladder engine: start, pick and revive.
//!
//! This is a sequential reigning-champion ladder, not a balanced bracket.
//! Each pick removes the first two active candidates, sends the loser to
//! the graveyard and queues the winner at the back, so N candidates always
//! finish after exactly N-1 picks. There are no byes and no rounds.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::candidate::Candidate;
use crate::error::{DuelError, DuelResult};
use crate::state::TournamentState;

/// Where a revived candidate rejoins the active pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RevivePlacement {
    /// Front of the pool, so it fights in the very next duel
    #[default]
    NextChallenger,
    /// Back of the pool, behind every other active candidate
    BackOfQueue,
}

/// Applies ladder transitions to a [`TournamentState`].
///
/// The engine holds no tournament data of its own. Every operation takes a
/// state by reference and returns a new one, so independent tournaments can
/// share one engine freely.
#[derive(Debug, Clone, Copy, Default)]
pub struct TournamentEngine {
    revive_placement: RevivePlacement,
}

impl TournamentEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine that revives candidates with the given placement.
    pub fn with_revive_placement(revive_placement: RevivePlacement) -> Self {
        Self { revive_placement }
    }

    pub fn revive_placement(&self) -> RevivePlacement {
        self.revive_placement
    }

    /// Start a ladder. Input order is preserved and decides the pairings.
    pub fn start<I, C>(&self, options: I) -> DuelResult<TournamentState>
    where
        I: IntoIterator<Item = C>,
        C: Into<Candidate>,
    {
        let options: Vec<Candidate> = options.into_iter().map(Into::into).collect();
        if options.len() < 2 {
            return Err(DuelError::InsufficientCandidates {
                found: options.len(),
            });
        }

        debug!(candidates = options.len(), "ladder started");
        Ok(TournamentState::new(options))
    }

    /// Resolve the current duel in favour of `winner`.
    ///
    /// The winner must be one of the two candidates in the current pair.
    pub fn pick(&self, state: &TournamentState, winner: &str) -> DuelResult<TournamentState> {
        let (left, right) = state
            .current_pair()
            .ok_or(DuelError::TournamentFinished)?;

        let (kept, lost) = if left == winner {
            (left, right)
        } else if right == winner {
            (right, left)
        } else {
            return Err(DuelError::InvalidSelection {
                label: winner.to_string(),
            });
        };

        let mut active = Vec::with_capacity(state.active.len() - 1);
        active.extend_from_slice(&state.active[2..]);
        active.push(kept.clone());

        let mut graveyard = Vec::with_capacity(state.graveyard.len() + 1);
        graveyard.push(lost.clone());
        graveyard.extend_from_slice(&state.graveyard);

        debug!(winner = %kept, loser = %lost, remaining = active.len(), "duel resolved");

        Ok(TournamentState {
            original: state.original.clone(),
            active,
            graveyard,
        })
    }

    /// Bring an eliminated candidate back into the active pool.
    ///
    /// Only the first graveyard entry with this label is removed; the
    /// remaining entries keep their order.
    pub fn revive(&self, state: &TournamentState, candidate: &str) -> DuelResult<TournamentState> {
        if state.is_complete() {
            return Err(DuelError::TournamentFinished);
        }

        let position = state
            .graveyard
            .iter()
            .position(|c| c == candidate)
            .ok_or_else(|| DuelError::CandidateNotInGraveyard {
                label: candidate.to_string(),
            })?;

        let mut graveyard = state.graveyard.clone();
        let revived = graveyard.remove(position);

        let mut active = state.active.clone();
        match self.revive_placement {
            RevivePlacement::NextChallenger => active.insert(0, revived),
            RevivePlacement::BackOfQueue => active.push(revived),
        }

        debug!(
            revived = candidate,
            placement = ?self.revive_placement,
            active = active.len(),
            "candidate revived"
        );

        Ok(TournamentState {
            original: state.original.clone(),
            active,
            graveyard,
        })
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod engine_tests;
