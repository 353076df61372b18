//! Tournament state: the active pool, the graveyard and the derived pair.

use chrono::{DateTime, Utc};

use crate::candidate::Candidate;
use crate::error::{DuelError, DuelResult};
use crate::record::{DecisionRecord, DecisionStatus};

/// Progress of one ladder.
///
/// Every original candidate is in exactly one of `active_pool` and
/// `graveyard`. The current pair is never stored; it is always the first
/// two entries of the active pool.
///
/// States come from [`TournamentEngine`](crate::TournamentEngine) or from
/// [`TournamentState::restore`], which checks the same conservation rule.
/// Each engine call returns a fresh state, so a failed call leaves the
/// caller's state untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TournamentState {
    pub(crate) original: Vec<Candidate>,
    pub(crate) active: Vec<Candidate>,
    pub(crate) graveyard: Vec<Candidate>,
}

impl TournamentState {
    pub(crate) fn new(options: Vec<Candidate>) -> Self {
        Self {
            original: options.clone(),
            active: options,
            graveyard: Vec::new(),
        }
    }

    /// Rebuild a ladder from stored pools.
    ///
    /// `active` and `graveyard` must hold exactly the candidates of
    /// `original` between them, and at least one candidate must still be
    /// active.
    pub fn restore(
        original: Vec<Candidate>,
        active: Vec<Candidate>,
        graveyard: Vec<Candidate>,
    ) -> DuelResult<Self> {
        if original.len() < 2 {
            return Err(DuelError::InsufficientCandidates {
                found: original.len(),
            });
        }
        if active.is_empty() {
            return Err(DuelError::InvalidSnapshot {
                reason: "no active candidates".to_string(),
            });
        }

        let conserved = {
            let mut held: Vec<&Candidate> = active.iter().chain(graveyard.iter()).collect();
            let mut expected: Vec<&Candidate> = original.iter().collect();
            held.sort();
            expected.sort();
            held == expected
        };
        if !conserved {
            return Err(DuelError::InvalidSnapshot {
                reason: "pools do not match the original options".to_string(),
            });
        }

        Ok(Self {
            original,
            active,
            graveyard,
        })
    }

    /// Rebuild the ladder a record was taken from.
    pub fn from_record(record: &DecisionRecord) -> DuelResult<Self> {
        let active = match record.status {
            DecisionStatus::Completed => {
                let winner = record.winner.clone().ok_or_else(|| DuelError::InvalidSnapshot {
                    reason: "completed record has no winner".to_string(),
                })?;
                vec![winner]
            }
            DecisionStatus::Pending => {
                if record.active_pool.len() < 2 {
                    return Err(DuelError::InvalidSnapshot {
                        reason: "pending record needs two active candidates".to_string(),
                    });
                }
                record.active_pool.clone()
            }
        };
        Self::restore(
            record.original_options.clone(),
            active,
            record.elimination_order.clone(),
        )
    }

    /// Candidates still in the running, in queue order.
    pub fn active_pool(&self) -> &[Candidate] {
        &self.active
    }

    /// Eliminated candidates, most recently eliminated first.
    pub fn graveyard(&self) -> &[Candidate] {
        &self.graveyard
    }

    /// The candidate list the ladder was started with.
    pub fn original_options(&self) -> &[Candidate] {
        &self.original
    }

    /// The two candidates facing each other next, if the ladder is still open.
    pub fn current_pair(&self) -> Option<(&Candidate, &Candidate)> {
        match self.active.as_slice() {
            [left, right, ..] => Some((left, right)),
            _ => None,
        }
    }

    pub fn status(&self) -> DecisionStatus {
        if self.active.len() > 1 {
            DecisionStatus::Pending
        } else {
            DecisionStatus::Completed
        }
    }

    #[inline]
    pub fn is_complete(&self) -> bool {
        self.status() == DecisionStatus::Completed
    }

    /// The sole survivor once the ladder is complete.
    pub fn winner(&self) -> Option<&Candidate> {
        match self.active.as_slice() {
            [winner] => Some(winner),
            _ => None,
        }
    }

    /// Picks still needed to finish, assuming no further revives.
    pub fn remaining_duels(&self) -> usize {
        self.active.len().saturating_sub(1)
    }

    pub fn is_eliminated(&self, label: &str) -> bool {
        self.graveyard.iter().any(|c| c == label)
    }

    /// Capture the ladder as a record, pending or not.
    pub fn snapshot(&self, id: impl Into<String>, created_at: DateTime<Utc>) -> DecisionRecord {
        let active_pool = if self.is_complete() {
            Vec::new()
        } else {
            self.active.clone()
        };
        DecisionRecord {
            id: id.into(),
            original_options: self.original.clone(),
            winner: self.winner().cloned(),
            elimination_order: self.graveyard.clone(),
            status: self.status(),
            active_pool,
            created_at,
        }
    }

    /// Build the decision record for a completed ladder.
    ///
    /// Returns `None` while the ladder is still pending.
    pub fn record(&self, id: impl Into<String>, created_at: DateTime<Utc>) -> Option<DecisionRecord> {
        if !self.is_complete() {
            return None;
        }
        Some(self.snapshot(id, created_at))
    }
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod state_tests;
