//! Candidate labels

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single option in a decision.
///
/// Candidates carry no identity beyond their label. Two candidates with the
/// same label are interchangeable, and the engine never deduplicates them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Candidate(String);

impl Candidate {
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Candidate {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Candidate {
    fn from(label: &str) -> Self {
        Self(label.to_string())
    }
}

impl From<String> for Candidate {
    fn from(label: String) -> Self {
        Self(label)
    }
}

impl From<&String> for Candidate {
    fn from(label: &String) -> Self {
        Self(label.clone())
    }
}

impl PartialEq<str> for Candidate {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Candidate {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
