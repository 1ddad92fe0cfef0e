//! Data structures for the Swiss tournament: players, rounds, tournament state.

mod player;
mod round;
mod tournament;

pub use player::{Player, PlayerId, Tiebreakers};
pub use round::{Match, MatchResult, Round, Winner};
pub use tournament::{
    Tournament, TournamentError, TournamentId, TournamentStatus, MIN_PLAYERS,
};
