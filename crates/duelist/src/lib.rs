//! Decision duels for Duelist
//!
//! This crate wraps the ladder engine in everything a decision app needs:
//! - Sessions that carry a decision's title, category and id
//! - Suggestion and advice collaborators with local fallbacks
//! - Stores for finished and paused decisions (in memory or a JSON file)
//! - Resuming a paused duel and searching the history
//! - An automated runner and judges for simulations
//! - Text reports for a decision's journey and the history
//!
//! # Usage
//!
//! ```bash
//! # Duel it out interactively
//! cargo run -p duelist -- duel "Where to travel" Kyoto Lisbon Oslo
//!
//! # Pick up a duel paused with `q`
//! cargo run -p duelist -- resume <id>
//!
//! # Let a coin decide and print the journey
//! cargo run -p duelist -- simulate Tea Coffee Juice --seed 7
//! ```

mod collaborators;
mod config;
mod error;
mod judge;
mod report;
mod runner;
mod session;
mod store;
mod tags;

pub use collaborators::*;
pub use config::*;
pub use error::*;
pub use judge::*;
pub use report::*;
pub use runner::*;
pub use session::*;
pub use store::*;
pub use tags::*;
