//! Match, MatchResult, Winner, and Round for Swiss rounds.

use crate::models::player::PlayerId;
use crate::models::tournament::TournamentError;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::str::FromStr;

/// Outcome of a match once reported.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Winner {
    /// One of the two participants won on games.
    Player(PlayerId),
    /// Equal game scores.
    Draw,
    /// Fixed outcome of a bye match.
    Bye,
}

/// Game score of a match, from player 1's perspective (e.g. 2-1).
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub player1_games: u32,
    pub player2_games: u32,
}

impl FromStr for MatchResult {
    type Err = TournamentError;

    /// Parse a score string like "2-1" or "1-1".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || TournamentError::InvalidScore(s.to_string());
        let (p1, p2) = s.trim().split_once('-').ok_or_else(invalid)?;
        Ok(Self {
            player1_games: p1.trim().parse().map_err(|_| invalid())?,
            player2_games: p2.trim().parse().map_err(|_| invalid())?,
        })
    }
}

/// A single pairing within a round.
///
/// `player2 == None` means player 1 has the bye; a bye match is constructed
/// already reported (fixed 2-0, `Winner::Bye`). For everything else `result`
/// and `winner` stay `None` until the result is recorded, and only ever get
/// set together through [`Match::record_result`].
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Match {
    /// Table number, 1-based, assigned once the whole round is paired.
    pub table: u32,
    pub player1: PlayerId,
    /// `None` is the bye sentinel.
    pub player2: Option<PlayerId>,
    pub result: Option<MatchResult>,
    pub winner: Option<Winner>,
}

impl Match {
    /// A regular pairing awaiting its result. Table is assigned later.
    pub fn pending(player1: PlayerId, player2: PlayerId) -> Self {
        Self {
            table: 0,
            player1,
            player2: Some(player2),
            result: None,
            winner: None,
        }
    }

    /// A bye match: fixed 2-0 result, no score entry required.
    pub fn bye(player: PlayerId) -> Self {
        Self {
            table: 0,
            player1: player,
            player2: None,
            result: Some(MatchResult {
                player1_games: 2,
                player2_games: 0,
            }),
            winner: Some(Winner::Bye),
        }
    }

    pub fn is_bye(&self) -> bool {
        self.player2.is_none()
    }

    pub fn is_pending(&self) -> bool {
        self.winner.is_none()
    }

    pub fn involves(&self, id: PlayerId) -> bool {
        self.player1 == id || self.player2 == Some(id)
    }

    /// Record a game score and derive the winner from it, atomically.
    /// Bye matches have a fixed result and reject score entry.
    pub fn record_result(&mut self, result: MatchResult) -> Result<(), TournamentError> {
        let Some(player2) = self.player2 else {
            return Err(TournamentError::ByeMatch);
        };
        let winner = match result.player1_games.cmp(&result.player2_games) {
            Ordering::Greater => Winner::Player(self.player1),
            Ordering::Less => Winner::Player(player2),
            Ordering::Equal => Winner::Draw,
        };
        self.result = Some(result);
        self.winner = Some(winner);
        Ok(())
    }
}

/// One round of the tournament: its 1-based number and its pairings.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Round {
    pub number: u32,
    pub pairings: Vec<Match>,
}

impl Round {
    pub fn new(number: u32, pairings: Vec<Match>) -> Self {
        Self { number, pairings }
    }

    /// True once every match (byes included) has a recorded winner.
    pub fn is_complete(&self) -> bool {
        self.pairings.iter().all(|m| !m.is_pending())
    }
}
