//! Player and Tiebreakers data structures.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a player (used in matches and lookups).
pub type PlayerId = Uuid;

/// Standings tiebreaker metrics, recomputed on every standings pass.
///
/// SOS and SOSOS are kept as integers (sums of points) so sort comparisons
/// are exact; only the match-win percentage is floating point, and it is
/// never used as a sort key.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Tiebreakers {
    /// Match-win percentage, floored at 0.33 once a round has been played.
    pub match_win_percentage: f64,
    /// Sum of each opponent's points, once per time they were played.
    pub strength_of_schedule: u32,
    /// Sum of each opponent's strength of schedule.
    pub sum_of_opponent_strength_of_schedule: u32,
}

/// A player in the tournament.
///
/// `points`, `games_played`, `byes`, `opponent_ids`, and `tiebreakers` are
/// derived from the round history and rebuilt wholesale by every standings
/// pass; they are never patched incrementally.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub points: u32,
    pub games_played: u32,
    /// Byes received so far (a bye scores like a win but is not a game).
    pub byes: u32,
    /// Opponents faced, in order; repeats allowed.
    pub opponent_ids: Vec<PlayerId>,
    pub tiebreakers: Tiebreakers,
}

impl Player {
    /// Create a new player with the given name. Derived fields start at zero/empty.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            points: 0,
            games_played: 0,
            byes: 0,
            opponent_ids: Vec::new(),
            tiebreakers: Tiebreakers::default(),
        }
    }

    /// Zero out everything derived from the round history.
    pub fn reset_record(&mut self) {
        self.points = 0;
        self.games_played = 0;
        self.byes = 0;
        self.opponent_ids.clear();
        self.tiebreakers = Tiebreakers::default();
    }

    /// Rounds this player has appeared in (as participant or bye recipient).
    pub fn rounds_played(&self) -> u32 {
        self.games_played + self.byes
    }
}
