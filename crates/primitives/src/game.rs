#[cfg(test)]
#[path = "tests/game.rs"]
mod tests;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::identity::PlayerId;
use crate::utils::{empty_as_none, string_id};

string_id!(
    /// Identifier the authority assigns to a match when it is created.
    MatchId,
    InvalidMatchId,
    "match id"
);

/// A move symbol.
///
/// The vocabulary is closed; extending it means adding a variant here and an
/// entry in [`Move::ALL`]. Nothing downstream branches on individual symbols.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Move {
    Rock,
    Paper,
    Scissors,
}

impl Move {
    pub const ALL: &'static [Self] = &[Self::Rock, Self::Paper, Self::Scissors];

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match *self {
            Self::Rock => "ROCK",
            Self::Paper => "PAPER",
            Self::Scissors => "SCISSORS",
        }
    }

    /// Whether `self` takes a round against `other`.
    ///
    /// For labelling rounds on screen; round outcomes and scores always come
    /// from the authority.
    #[must_use]
    pub const fn beats(&self, other: &Self) -> bool {
        matches!(
            (*self, *other),
            (Self::Rock, Self::Scissors)
                | (Self::Paper, Self::Rock)
                | (Self::Scissors, Self::Paper)
        )
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

#[derive(Clone, Debug, Error, Eq, PartialEq)]
#[error("unknown move {0:?}, expected one of rock, paper, scissors")]
pub struct InvalidMove(String);

impl FromStr for Move {
    type Err = InvalidMove;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rock" | "r" => Ok(Self::Rock),
            "paper" | "p" => Ok(Self::Paper),
            "scissors" | "s" => Ok(Self::Scissors),
            _ => Err(InvalidMove(s.to_owned())),
        }
    }
}

/// One observation of a match as held by the authority.
///
/// Replaced wholesale on every poll. The move lists only cover completed
/// rounds; a move submitted for the round in progress shows up in the
/// counters first.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchSnapshot {
    pub first_player_id: PlayerId,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub second_player_id: Option<PlayerId>,
    #[serde(default)]
    pub first_player_moves: Vec<Move>,
    #[serde(default)]
    pub second_player_moves: Vec<Move>,
    #[serde(default)]
    pub first_player_move_count: u32,
    #[serde(default)]
    pub second_player_move_count: u32,
    #[serde(default)]
    pub completed_rounds: u32,
    #[serde(default)]
    pub first_player_score: f64,
    #[serde(default)]
    pub second_player_score: f64,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub winner_id: Option<PlayerId>,
}

impl MatchSnapshot {
    /// A freshly created match with only its first player seated.
    #[must_use]
    pub const fn new(first_player_id: PlayerId) -> Self {
        Self {
            first_player_id,
            second_player_id: None,
            first_player_moves: Vec::new(),
            second_player_moves: Vec::new(),
            first_player_move_count: 0,
            second_player_move_count: 0,
            completed_rounds: 0,
            first_player_score: 0.0,
            second_player_score: 0.0,
            winner_id: None,
        }
    }
}
