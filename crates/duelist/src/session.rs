//! A single decision being dueled out

use chrono::{DateTime, Utc};
use duel_core::{Candidate, DecisionRecord, TournamentEngine, TournamentState};
use tracing::info;
use uuid::Uuid;

use crate::error::{ArenaError, ArenaResult};
use crate::store::SavedDecision;

/// One ladder plus the metadata needed to save it.
///
/// The session owns its state and replaces it wholesale on every
/// successful pick or revive; a rejected call leaves it as it was.
#[derive(Debug, Clone)]
pub struct DuelSession {
    id: String,
    title: String,
    category: String,
    created_at: DateTime<Utc>,
    engine: TournamentEngine,
    state: TournamentState,
    /// Stored form this session was resumed from, if any
    resumed_from: Option<SavedDecision>,
}

impl DuelSession {
    /// Start a session with a fresh id and the current time.
    pub fn start(
        engine: TournamentEngine,
        title: &str,
        category: &str,
        options: Vec<Candidate>,
    ) -> ArenaResult<Self> {
        Self::start_with_id(engine, Uuid::new_v4().to_string(), Utc::now(), title, category, options)
    }

    /// Start a session with caller-assigned id and creation time.
    pub fn start_with_id(
        engine: TournamentEngine,
        id: String,
        created_at: DateTime<Utc>,
        title: &str,
        category: &str,
        options: Vec<Candidate>,
    ) -> ArenaResult<Self> {
        let state = engine.start(options)?;
        info!(id = %id, title, candidates = state.active_pool().len(), "duel session started");
        Ok(Self {
            id,
            title: title.to_string(),
            category: category.to_string(),
            created_at,
            engine,
            state,
            resumed_from: None,
        })
    }

    /// Pick a stored decision up where it was left.
    ///
    /// Tags, pin and reflection of the stored decision are carried over to
    /// everything this session saves.
    pub fn resume(engine: TournamentEngine, saved: &SavedDecision) -> ArenaResult<Self> {
        let state = TournamentState::from_record(&saved.record)?;
        info!(id = %saved.id(), remaining = state.remaining_duels(), "duel session resumed");
        Ok(Self {
            id: saved.id().to_string(),
            title: saved.title.clone(),
            category: saved.category.clone(),
            created_at: saved.record.created_at,
            engine,
            state,
            resumed_from: Some(saved.clone()),
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn state(&self) -> &TournamentState {
        &self.state
    }

    pub fn pair(&self) -> Option<(&Candidate, &Candidate)> {
        self.state.current_pair()
    }

    pub fn graveyard(&self) -> &[Candidate] {
        self.state.graveyard()
    }

    pub fn remaining_duels(&self) -> usize {
        self.state.remaining_duels()
    }

    pub fn is_complete(&self) -> bool {
        self.state.is_complete()
    }

    pub fn pick(&mut self, winner: &str) -> ArenaResult<()> {
        self.state = self.engine.pick(&self.state, winner)?;
        if let Some(winner) = self.state.winner() {
            info!(id = %self.id, winner = %winner, "duel session completed");
        }
        Ok(())
    }

    pub fn revive(&mut self, candidate: &str) -> ArenaResult<()> {
        self.state = self.engine.revive(&self.state, candidate)?;
        Ok(())
    }

    /// The saved form of the decision as it stands, pending or completed.
    pub fn snapshot(&self) -> SavedDecision {
        self.saved_form(self.state.snapshot(self.id.clone(), self.created_at))
    }

    /// The saved form of the decision, once the ladder is complete.
    pub fn finish(&self) -> ArenaResult<SavedDecision> {
        let record = self
            .state
            .record(self.id.clone(), self.created_at)
            .ok_or_else(|| ArenaError::Unfinished(self.id.clone()))?;
        Ok(self.saved_form(record))
    }

    fn saved_form(&self, record: DecisionRecord) -> SavedDecision {
        match &self.resumed_from {
            Some(stored) => {
                let mut decision = stored.clone();
                decision.record = record;
                decision.touch();
                decision
            }
            None => SavedDecision::new(record, &self.title, &self.category),
        }
    }
}
