//! Elimination ladder engine for Duelist
//!
//! A set of candidate options is reduced to a single winner through
//! sequential pairwise duels:
//! - The current pair is always the first two entries of the active pool
//! - The winner of a duel rejoins the pool at the back
//! - The loser goes to the front of the graveyard
//! - Eliminated candidates can be revived until the ladder completes
//!
//! # Usage
//!
//! ```
//! use duel_core::{DecisionStatus, TournamentEngine};
//!
//! let engine = TournamentEngine::default();
//! let state = engine.start(["Kyoto", "Lisbon", "Oslo"]).unwrap();
//! let state = engine.pick(&state, "Kyoto").unwrap();
//! let state = engine.pick(&state, "Kyoto").unwrap();
//!
//! assert_eq!(state.status(), DecisionStatus::Completed);
//! assert_eq!(state.winner().map(|c| c.as_str()), Some("Kyoto"));
//! ```

pub mod candidate;
pub mod engine;
pub mod error;
pub mod record;
pub mod state;

pub use candidate::*;
pub use engine::*;
pub use error::*;
pub use record::*;
pub use state::*;
