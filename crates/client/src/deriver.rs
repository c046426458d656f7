//! Turn derivation
//!
//! Turns one [`MatchSnapshot`] plus the local identity into everything a
//! front end needs to act on: the phase, whose move it is, which moves are
//! allowed and the per-role move history. This is the only place phase logic
//! lives; it performs no I/O and keeps no state between calls.

use rps_primitives::game::{MatchSnapshot, Move};
use rps_primitives::identity::PlayerId;
use serde::Serialize;

use crate::errors::DeriveError;

/// Where a match stands from the local player's point of view.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Phase {
    WaitingForOpponent,
    AwaitingLocalMove,
    AwaitingOpponentMove,
    Finished,
}

impl Phase {
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        matches!(*self, Self::Finished)
    }
}

/// The actionable projection of a snapshot for one player.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DerivedView {
    pub phase: Phase,
    pub is_local_player_first: bool,
    pub opponent_id: Option<PlayerId>,
    pub local_moves: Vec<Move>,
    pub opponent_moves: Vec<Move>,
    pub local_score: f64,
    pub opponent_score: f64,
    pub completed_rounds: u32,
    /// Only meaningful once `phase` is [`Phase::Finished`].
    pub local_won: bool,
    /// Moves the local player may submit right now.
    pub actionable_moves: Vec<Move>,
}

impl DerivedView {
    /// 1-based number of the round in progress.
    #[must_use]
    pub const fn round(&self) -> u32 {
        self.completed_rounds.saturating_add(1)
    }

    #[must_use]
    pub fn can_move(&self) -> bool {
        self.phase == Phase::AwaitingLocalMove
    }
}

/// Derives the local view of `snapshot` for `local`.
///
/// # Errors
///
/// [`DeriveError::IdentityMismatch`] if `local` occupies neither seat, and
/// [`DeriveError::InconsistentCounters`] if an ongoing match reports move
/// counters that cannot belong to `completed_rounds`.
pub fn derive(local: &PlayerId, snapshot: &MatchSnapshot) -> Result<DerivedView, DeriveError> {
    let second = snapshot
        .second_player_id
        .as_ref()
        .filter(|id| !id.as_str().is_empty());

    let is_local_player_first = if *local == snapshot.first_player_id {
        true
    } else if second == Some(local) {
        false
    } else {
        return Err(DeriveError::IdentityMismatch {
            player: local.clone(),
            first: snapshot.first_player_id.clone(),
            second: snapshot.second_player_id.clone(),
        });
    };

    let (local_moves, opponent_moves) = by_role(
        is_local_player_first,
        &snapshot.first_player_moves,
        &snapshot.second_player_moves,
    );
    let (local_score, opponent_score) = by_role(
        is_local_player_first,
        snapshot.first_player_score,
        snapshot.second_player_score,
    );
    let (local_move_count, opponent_move_count) = by_role(
        is_local_player_first,
        snapshot.first_player_move_count,
        snapshot.second_player_move_count,
    );

    let opponent_id = if is_local_player_first {
        second.cloned()
    } else {
        Some(snapshot.first_player_id.clone())
    };

    let phase = if snapshot.winner_id.is_some() {
        Phase::Finished
    } else if second.is_none() {
        Phase::WaitingForOpponent
    } else {
        check_counters(
            snapshot.completed_rounds,
            local_move_count,
            opponent_move_count,
        )?;

        let completed_moves = u64::from(snapshot.completed_rounds) * 2;
        let submitted = u64::from(local_move_count) + u64::from(opponent_move_count);

        let has_moved_this_round = local_move_count > snapshot.completed_rounds;
        let round_complete = completed_moves == submitted;

        if round_complete || !has_moved_this_round {
            Phase::AwaitingLocalMove
        } else {
            Phase::AwaitingOpponentMove
        }
    };

    let actionable_moves = if phase == Phase::AwaitingLocalMove {
        Move::ALL.to_vec()
    } else {
        Vec::new()
    };

    Ok(DerivedView {
        phase,
        is_local_player_first,
        opponent_id,
        local_moves: local_moves.clone(),
        opponent_moves: opponent_moves.clone(),
        local_score,
        opponent_score,
        completed_rounds: snapshot.completed_rounds,
        local_won: snapshot.winner_id.as_ref() == Some(local),
        actionable_moves,
    })
}

/// `completed_rounds * 2 <= total <= completed_rounds * 2 + 1`
fn check_counters(completed_rounds: u32, local: u32, opponent: u32) -> Result<(), DeriveError> {
    let floor = u64::from(completed_rounds) * 2;
    let total = u64::from(local) + u64::from(opponent);

    if total < floor || total > floor + 1 {
        return Err(DeriveError::InconsistentCounters {
            completed_rounds,
            total_moves: u32::try_from(total).unwrap_or(u32::MAX),
        });
    }

    Ok(())
}

const fn by_role<T: Copy>(local_first: bool, first: T, second: T) -> (T, T) {
    if local_first {
        (first, second)
    } else {
        (second, first)
    }
}

#[cfg(test)]
mod tests {
    use rps_primitives::game::{MatchSnapshot, Move};
    use rps_primitives::identity::PlayerId;

    use super::*;

    fn id(s: &str) -> PlayerId {
        s.parse().unwrap()
    }

    fn started(completed_rounds: u32, first_count: u32, second_count: u32) -> MatchSnapshot {
        MatchSnapshot {
            second_player_id: Some(id("bob")),
            completed_rounds,
            first_player_move_count: first_count,
            second_player_move_count: second_count,
            ..MatchSnapshot::new(id("alice"))
        }
    }

    #[test]
    fn test_scenario_a_fresh_match_awaits_local_move() {
        let view = derive(&id("alice"), &started(0, 0, 0)).unwrap();

        assert_eq!(view.phase, Phase::AwaitingLocalMove);
        assert_eq!(view.actionable_moves, Move::ALL.to_vec());
        assert_eq!(view.round(), 1);
    }

    #[test]
    fn test_scenario_b_local_moved_awaits_opponent() {
        let view = derive(&id("alice"), &started(0, 1, 0)).unwrap();

        assert_eq!(view.phase, Phase::AwaitingOpponentMove);
        assert!(view.actionable_moves.is_empty());
        assert!(!view.can_move());
    }

    #[test]
    fn test_scenario_c_opponent_ahead_awaits_local_move() {
        // second player is local: local count 1, opponent count 2
        let view = derive(&id("bob"), &started(1, 2, 1)).unwrap();

        assert!(!view.is_local_player_first);
        assert_eq!(view.phase, Phase::AwaitingLocalMove);
    }

    #[test]
    fn test_both_players_see_their_turn_in_fresh_match() {
        let snapshot = started(0, 0, 0);

        assert_eq!(
            derive(&id("alice"), &snapshot).unwrap().phase,
            Phase::AwaitingLocalMove
        );
        assert_eq!(
            derive(&id("bob"), &snapshot).unwrap().phase,
            Phase::AwaitingLocalMove
        );
    }

    #[test]
    fn test_winner_means_finished_regardless_of_counters() {
        for (completed, first, second) in [(0, 0, 0), (2, 2, 2), (1, 7, 0), (5, 0, 0)] {
            let snapshot = MatchSnapshot {
                winner_id: Some(id("bob")),
                ..started(completed, first, second)
            };

            let alice = derive(&id("alice"), &snapshot).unwrap();
            let bob = derive(&id("bob"), &snapshot).unwrap();

            assert_eq!(alice.phase, Phase::Finished);
            assert!(!alice.local_won);
            assert_eq!(bob.phase, Phase::Finished);
            assert!(bob.local_won);
            assert!(bob.actionable_moves.is_empty());
        }
    }

    #[test]
    fn test_missing_second_player_means_waiting() {
        for count in 0..3 {
            let snapshot = MatchSnapshot {
                first_player_move_count: count,
                ..MatchSnapshot::new(id("alice"))
            };

            let view = derive(&id("alice"), &snapshot).unwrap();

            assert_eq!(view.phase, Phase::WaitingForOpponent);
            assert!(view.opponent_id.is_none());
        }
    }

    #[test]
    fn test_unknown_local_player_is_identity_mismatch() {
        let result = derive(&id("mallory"), &started(0, 0, 0));

        assert!(matches!(
            result,
            Err(DeriveError::IdentityMismatch { ref player, .. }) if player.as_str() == "mallory"
        ));

        let waiting = MatchSnapshot::new(id("alice"));

        assert!(matches!(
            derive(&id("bob"), &waiting),
            Err(DeriveError::IdentityMismatch { second: None, .. })
        ));
    }

    #[test]
    fn test_counter_invariant_is_enforced() {
        for completed in 0..4_u32 {
            for first in 0..10_u32 {
                for second in 0..10_u32 {
                    let total = first + second;
                    let valid = completed * 2 <= total && total <= completed * 2 + 1;
                    let result = derive(&id("alice"), &started(completed, first, second));

                    if valid {
                        assert!(result.is_ok(), "{completed}/{first}/{second} should be accepted");
                    } else {
                        assert!(
                            matches!(result, Err(DeriveError::InconsistentCounters { .. })),
                            "{completed}/{first}/{second} should be rejected"
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_moves_and_scores_follow_role() {
        let snapshot = MatchSnapshot {
            first_player_moves: vec![Move::Rock, Move::Rock],
            second_player_moves: vec![Move::Paper, Move::Scissors],
            first_player_score: 1.0,
            second_player_score: 0.5,
            ..started(2, 2, 2)
        };

        let bob = derive(&id("bob"), &snapshot).unwrap();

        assert_eq!(bob.local_moves, vec![Move::Paper, Move::Scissors]);
        assert_eq!(bob.opponent_moves, vec![Move::Rock, Move::Rock]);
        assert!((bob.local_score - 0.5).abs() < f64::EPSILON);
        assert!((bob.opponent_score - 1.0).abs() < f64::EPSILON);
        assert_eq!(bob.opponent_id, Some(id("alice")));
        assert_eq!(bob.round(), 3);
    }

    #[test]
    fn test_derivation_is_idempotent() {
        let snapshot = MatchSnapshot {
            first_player_moves: vec![Move::Scissors],
            second_player_moves: vec![Move::Paper],
            first_player_score: 1.0,
            ..started(1, 2, 1)
        };

        let first = derive(&id("alice"), &snapshot).unwrap();
        let second = derive(&id("alice"), &snapshot).unwrap();

        assert_eq!(first, second);
        assert_eq!(
            first.local_score.to_bits(),
            second.local_score.to_bits()
        );
    }
}
