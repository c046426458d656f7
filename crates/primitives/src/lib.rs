//! Shared data contract between the match authority and its clients.
//!
//! Everything in here is a plain value: snapshots are decoded from the
//! authority's JSON and never mutated or classified in place. Phase
//! derivation lives in `rps-client`.

pub mod api;
pub mod game;
pub mod identity;
pub mod leaderboard;
pub mod lobby;
mod utils;
