//! Synchronization configuration with named defaults.
//!
//! Lobby and match polling share a short period; the leaderboard runs on its
//! own, slower cadence and is never tied to the match lifecycle.

use std::time::Duration;

use rps_primitives::lobby::LobbyId;
use serde::{Deserialize, Serialize};

/// Default period of the match and lobby polls (1 second)
pub const DEFAULT_MATCH_POLL_INTERVAL_MS: u64 = 1_000;

/// Default period of the leaderboard poll (5 seconds)
pub const DEFAULT_LEADERBOARD_POLL_INTERVAL_MS: u64 = 5_000;

/// Lobby joined when none is configured
pub const DEFAULT_LOBBY_ID: &str = "lobby1";

/// Capacity of the outbound event channel
pub const DEFAULT_EVENT_CHANNEL_CAPACITY: usize = 64;

/// How the authority pairs players after a join request.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum JoinMode {
    /// The join reply already names the match; poll it straight away and wait
    /// for the opponent to show up in the match snapshot.
    #[default]
    Immediate,
    /// The match only exists once the lobby is full; poll the lobby until both
    /// seats are taken, then switch over to the match.
    LobbyPoll,
}

/// Synchronization configuration.
#[derive(Clone, Debug)]
pub struct SyncConfig {
    /// Lobby to join
    pub lobby_id: LobbyId,

    /// Pairing semantics of the authority
    pub join_mode: JoinMode,

    /// Period of the match poll
    pub match_poll_interval: Duration,

    /// Period of the lobby poll, only used with [`JoinMode::LobbyPoll`]
    pub lobby_poll_interval: Duration,

    /// Period of the leaderboard poll, `None` disables periodic refreshes
    /// (the refresh on match end still happens)
    pub leaderboard_poll_interval: Option<Duration>,

    /// Capacity of the event channel handed out by the session
    pub event_channel_capacity: usize,
}

impl SyncConfig {
    #[must_use]
    pub fn new(lobby_id: LobbyId) -> Self {
        Self {
            lobby_id,
            join_mode: JoinMode::default(),
            match_poll_interval: Duration::from_millis(DEFAULT_MATCH_POLL_INTERVAL_MS),
            lobby_poll_interval: Duration::from_millis(DEFAULT_MATCH_POLL_INTERVAL_MS),
            leaderboard_poll_interval: Some(Duration::from_millis(
                DEFAULT_LEADERBOARD_POLL_INTERVAL_MS,
            )),
            event_channel_capacity: DEFAULT_EVENT_CHANNEL_CAPACITY,
        }
    }

    #[must_use]
    pub const fn with_join_mode(mut self, join_mode: JoinMode) -> Self {
        self.join_mode = join_mode;
        self
    }

    /// Sets the match and lobby poll period; a zero period keeps the current
    /// one.
    #[must_use]
    pub const fn with_match_poll_interval(mut self, interval: Duration) -> Self {
        if !interval.is_zero() {
            self.match_poll_interval = interval;
            self.lobby_poll_interval = interval;
        }
        self
    }

    /// Sets the leaderboard poll period; `Some(Duration::ZERO)` disables
    /// periodic refreshes like `None` does.
    #[must_use]
    pub const fn with_leaderboard_poll_interval(mut self, interval: Option<Duration>) -> Self {
        self.leaderboard_poll_interval = match interval {
            Some(interval) if interval.is_zero() => None,
            interval => interval,
        };
        self
    }
}

impl Default for SyncConfig {
    fn default() -> Self {
        let lobby_id = DEFAULT_LOBBY_ID
            .parse()
            .unwrap_or_else(|_| unreachable!("default lobby id is non-empty"));

        Self::new(lobby_id)
    }
}
