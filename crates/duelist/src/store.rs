//! Decision storage: the persisted shape and two local stores

use chrono::{DateTime, Utc};
use duel_core::{DecisionRecord, DecisionStatus};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

use crate::error::{ArenaError, ArenaResult};
use crate::tags::enrich_tags;

/// A decision record plus the metadata the apps attach to it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedDecision {
    #[serde(flatten)]
    pub record: DecisionRecord,
    /// The dilemma as the user phrased it
    pub title: String,
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub pinned: bool,
    /// User-written post-mortem
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reflection: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl SavedDecision {
    /// Wrap a finished record, tagging it from its title and category.
    pub fn new(record: DecisionRecord, title: &str, category: &str) -> Self {
        Self {
            record,
            title: title.to_string(),
            category: category.to_string(),
            tags: enrich_tags(title, category, &[]),
            pinned: false,
            reflection: None,
            updated_at: None,
        }
    }

    pub fn id(&self) -> &str {
        &self.record.id
    }

    pub fn set_reflection(&mut self, reflection: &str) {
        self.reflection = Some(reflection.trim().to_string());
        self.touch();
    }

    pub fn toggle_pin(&mut self) {
        self.pinned = !self.pinned;
        self.touch();
    }

    pub fn touch(&mut self) {
        self.updated_at = Some(Utc::now());
    }

    pub fn is_pending(&self) -> bool {
        self.record.status == DecisionStatus::Pending
    }

    /// Case-insensitive match against the winner, category, options and tags.
    ///
    /// A blank query matches everything.
    pub fn matches(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }
        let hit = |text: &str| text.to_lowercase().contains(&query);

        self.record.winner.as_ref().is_some_and(|w| hit(w.as_str()))
            || hit(self.category.as_str())
            || self.record.original_options.iter().any(|o| hit(o.as_str()))
            || self.tags.iter().any(|t| hit(t.as_str()))
    }
}

/// Persistence collaborator for decisions, finished or paused.
///
/// Stores keep decisions newest first and must hand records back unchanged.
pub trait DecisionStore {
    /// Insert a decision at the front, replacing any with the same id.
    fn save(&mut self, decision: SavedDecision) -> ArenaResult<()>;

    /// Replace an existing decision in place.
    fn update(&mut self, decision: SavedDecision) -> ArenaResult<()>;

    fn get(&self, id: &str) -> ArenaResult<Option<SavedDecision>>;

    /// Up to `limit` decisions, newest first.
    fn list(&self, limit: usize) -> ArenaResult<Vec<SavedDecision>>;

    /// Up to `limit` decisions matching `query`, newest first.
    ///
    /// See [`SavedDecision::matches`] for what is searched.
    fn search(&self, query: &str, limit: usize) -> ArenaResult<Vec<SavedDecision>> {
        Ok(self
            .list(usize::MAX)?
            .into_iter()
            .filter(|d| d.matches(query))
            .take(limit)
            .collect())
    }
}

fn insert_front(decisions: &mut Vec<SavedDecision>, decision: SavedDecision) {
    decisions.retain(|d| d.id() != decision.id());
    decisions.insert(0, decision);
}

fn replace(decisions: &mut [SavedDecision], decision: SavedDecision) -> ArenaResult<()> {
    let slot = decisions
        .iter_mut()
        .find(|d| d.id() == decision.id())
        .ok_or_else(|| ArenaError::NotFound(decision.id().to_string()))?;
    *slot = decision;
    Ok(())
}

/// Store that lives only as long as the process
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    decisions: Vec<SavedDecision>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.decisions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decisions.is_empty()
    }
}

impl DecisionStore for MemoryStore {
    fn save(&mut self, decision: SavedDecision) -> ArenaResult<()> {
        insert_front(&mut self.decisions, decision);
        Ok(())
    }

    fn update(&mut self, decision: SavedDecision) -> ArenaResult<()> {
        replace(&mut self.decisions, decision)
    }

    fn get(&self, id: &str) -> ArenaResult<Option<SavedDecision>> {
        Ok(self.decisions.iter().find(|d| d.id() == id).cloned())
    }

    fn list(&self, limit: usize) -> ArenaResult<Vec<SavedDecision>> {
        Ok(self.decisions.iter().take(limit).cloned().collect())
    }
}

/// Store backed by a pretty-printed JSON array on disk.
///
/// The whole file is read and rewritten on every change. Writes go to a
/// sibling `.tmp` file that is then renamed over the history, so an
/// interrupted write never truncates it. A missing file is an empty history.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> ArenaResult<Vec<SavedDecision>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let contents = std::fs::read_to_string(&self.path)?;
        if contents.trim().is_empty() {
            return Ok(Vec::new());
        }
        Ok(serde_json::from_str(&contents)?)
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn write(&self, decisions: &[SavedDecision]) -> ArenaResult<()> {
        let json = serde_json::to_string_pretty(decisions)?;
        let tmp_path = self.tmp_path();
        std::fs::write(&tmp_path, json)?;
        std::fs::rename(&tmp_path, &self.path)?;
        Ok(())
    }
}

impl DecisionStore for JsonFileStore {
    fn save(&mut self, decision: SavedDecision) -> ArenaResult<()> {
        let mut decisions = self.load()?;
        let id = decision.id().to_string();
        insert_front(&mut decisions, decision);
        self.write(&decisions)?;
        info!(id = %id, path = %self.path.display(), "decision saved");
        Ok(())
    }

    fn update(&mut self, decision: SavedDecision) -> ArenaResult<()> {
        let mut decisions = self.load()?;
        let id = decision.id().to_string();
        replace(&mut decisions, decision)?;
        self.write(&decisions)?;
        info!(id = %id, "decision updated");
        Ok(())
    }

    fn get(&self, id: &str) -> ArenaResult<Option<SavedDecision>> {
        Ok(self.load()?.into_iter().find(|d| d.id() == id))
    }

    fn list(&self, limit: usize) -> ArenaResult<Vec<SavedDecision>> {
        let mut decisions = self.load()?;
        decisions.truncate(limit);
        Ok(decisions)
    }
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod store_tests;
