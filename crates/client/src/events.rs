use rps_primitives::game::MatchId;
use rps_primitives::identity::{Player, PlayerId};
use rps_primitives::leaderboard::Leaderboard;
use rps_primitives::lobby::LobbyState;
use serde::Serialize;

use crate::deriver::DerivedView;
use crate::errors::DeriveError;

/// State changes published by a running session.
#[derive(Clone, Debug, Serialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum SessionEvent {
    Registered {
        player: Player,
    },
    Joined {
        lobby: LobbyState,
    },
    MatchStarted {
        match_id: MatchId,
        opponent_id: Option<PlayerId>,
    },
    /// Emitted only when the derived view differs from the previous one.
    ViewChanged {
        view: DerivedView,
    },
    RoundAdvanced {
        completed_rounds: u32,
    },
    MatchFinished {
        view: DerivedView,
    },
    LeaderboardUpdated {
        leaderboard: Leaderboard,
    },
    ViewRejected {
        #[serde(serialize_with = "serialize_display")]
        error: DeriveError,
    },
    Reset,
}

fn serialize_display<S: serde::Serializer>(
    error: &DeriveError,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_str(error)
}
