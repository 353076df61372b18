//! External capabilities the host consumes but does not implement
//!
//! Option suggestions and pairwise advice come from language-model services
//! in a real deployment. The host only sees these traits, and every failure
//! from them degrades to a local fallback instead of blocking a duel.

use duel_core::Candidate;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::warn;

use crate::error::ArenaResult;

/// Proposes candidate options for a free-text dilemma.
pub trait OptionSuggester {
    fn suggest(&self, theme: &str) -> ArenaResult<Vec<Candidate>>;
}

/// Advisory text shown next to a pending pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Advice {
    /// Short, witty take on the matchup
    pub critique: String,
    pub recommendation: String,
}

impl Advice {
    /// Advice used whenever the provider cannot answer.
    pub fn fallback() -> Self {
        Self {
            critique: "Both have merit in the void.".to_string(),
            recommendation: "Follow your intuition.".to_string(),
        }
    }
}

/// Compares two candidates. Purely informational; never touches ladder state.
pub trait AdviceProvider {
    fn compare(&self, a: &Candidate, b: &Candidate, context: &str) -> ArenaResult<Advice>;
}

/// Trim labels, drop empty ones and drop repeats (first occurrence wins).
pub fn normalize_options<I, S>(raw: I) -> Vec<Candidate>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = HashSet::new();
    raw.into_iter()
        .filter_map(|label| {
            let label = label.as_ref().trim();
            if label.is_empty() || !seen.insert(label.to_string()) {
                None
            } else {
                Some(Candidate::from(label))
            }
        })
        .collect()
}

/// Ask the suggester for options, falling back to `defaults` when it fails
/// or returns fewer than two usable options.
pub fn suggest_or_default(
    suggester: &dyn OptionSuggester,
    theme: &str,
    defaults: &[String],
) -> Vec<Candidate> {
    match suggester.suggest(theme) {
        Ok(options) => {
            let options = normalize_options(options.iter().map(|c| c.as_str()));
            if options.len() >= 2 {
                return options;
            }
            warn!(theme, usable = options.len(), "too few suggestions, using defaults");
        }
        Err(e) => {
            warn!(theme, error = %e, "option suggester failed, using defaults");
        }
    }
    normalize_options(defaults)
}

/// Ask for advice on a pair, substituting [`Advice::fallback`] on failure.
pub fn advice_or_fallback(
    provider: &dyn AdviceProvider,
    a: &Candidate,
    b: &Candidate,
    context: &str,
) -> Advice {
    provider.compare(a, b, context).unwrap_or_else(|e| {
        warn!(left = %a, right = %b, error = %e, "advice provider failed");
        Advice::fallback()
    })
}

/// Suggester that always proposes the same list.
#[derive(Debug, Clone, Default)]
pub struct FixedSuggester {
    options: Vec<String>,
}

impl FixedSuggester {
    pub fn new<I, S>(options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            options: options.into_iter().map(Into::into).collect(),
        }
    }
}

impl OptionSuggester for FixedSuggester {
    fn suggest(&self, _theme: &str) -> ArenaResult<Vec<Candidate>> {
        Ok(self.options.iter().map(Candidate::from).collect())
    }
}

/// Advisor with no model behind it; always answers with the fallback.
#[derive(Debug, Clone, Copy, Default)]
pub struct FallbackAdvisor;

impl AdviceProvider for FallbackAdvisor {
    fn compare(&self, _a: &Candidate, _b: &Candidate, _context: &str) -> ArenaResult<Advice> {
        Ok(Advice::fallback())
    }
}

#[cfg(test)]
#[path = "collaborators_tests.rs"]
mod collaborators_tests;
