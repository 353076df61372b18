//! Decision records handed to persistence

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::candidate::Candidate;

/// Lifecycle of a decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DecisionStatus {
    /// More than one candidate is still active
    Pending,
    /// Exactly one candidate remains
    Completed,
}

impl fmt::Display for DecisionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecisionStatus::Pending => f.write_str("Pending"),
            DecisionStatus::Completed => f.write_str("Completed"),
        }
    }
}

/// A ladder as handed to persistence.
///
/// Completed records carry the winner. Pending records carry the active
/// pool instead, so an unfinished ladder can be picked up again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecisionRecord {
    /// Caller-assigned unique identifier
    pub id: String,
    /// Candidates at tournament start
    pub original_options: Vec<Candidate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub winner: Option<Candidate>,
    /// Graveyard, most recent defeat first
    pub elimination_order: Vec<Candidate>,
    pub status: DecisionStatus,
    /// Candidates still in the running, in queue order; empty once completed
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub active_pool: Vec<Candidate>,
    /// Caller-assigned creation time
    pub created_at: DateTime<Utc>,
}

impl DecisionRecord {
    /// Eliminations in the order they happened, first defeat first.
    pub fn defeats_chronological(&self) -> impl Iterator<Item = &Candidate> {
        self.elimination_order.iter().rev()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample() -> DecisionRecord {
        DecisionRecord {
            id: "d-1".to_string(),
            original_options: vec!["A".into(), "B".into(), "C".into()],
            winner: Some("A".into()),
            elimination_order: vec!["C".into(), "B".into()],
            status: DecisionStatus::Completed,
            active_pool: Vec::new(),
            created_at: Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_record_json_shape() {
        let value = serde_json::to_value(sample()).unwrap();

        assert_eq!(value["id"], "d-1");
        assert_eq!(value["originalOptions"], serde_json::json!(["A", "B", "C"]));
        assert_eq!(value["winner"], "A");
        assert_eq!(value["eliminationOrder"], serde_json::json!(["C", "B"]));
        assert_eq!(value["status"], "Completed");
        assert_eq!(value["createdAt"], "2024-05-01T12:00:00Z");
        assert!(value.get("activePool").is_none());
    }

    #[test]
    fn test_pending_record_json_shape() {
        let mut record = sample();
        record.winner = None;
        record.status = DecisionStatus::Pending;
        record.elimination_order = vec!["B".into()];
        record.active_pool = vec!["C".into(), "A".into()];

        let value = serde_json::to_value(&record).unwrap();
        assert!(value.get("winner").is_none());
        assert_eq!(value["status"], "Pending");
        assert_eq!(value["activePool"], serde_json::json!(["C", "A"]));

        let back: DecisionRecord = serde_json::from_value(value).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn test_record_survives_json() {
        let record = sample();
        let json = serde_json::to_string(&record).unwrap();
        let back: DecisionRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn test_pending_status_parses() {
        let status: DecisionStatus = serde_json::from_str("\"Pending\"").unwrap();
        assert_eq!(status, DecisionStatus::Pending);
    }

    #[test]
    fn test_defeats_chronological() {
        let record = sample();
        let order: Vec<&str> = record.defeats_chronological().map(|c| c.as_str()).collect();
        assert_eq!(order, vec!["B", "C"]);
    }
}
