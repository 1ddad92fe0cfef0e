//! Swiss-system tournament engine: standings with tiebreakers and round pairings.

pub mod logic;
pub mod models;

pub use logic::{
    calculate_standings, generate_next_round, generate_pairings, generate_pairings_with_rng,
    record_result, regenerate_current_round, DRAW_POINTS, MWP_FLOOR, WIN_POINTS,
};
pub use models::{
    Match, MatchResult, Player, PlayerId, Round, Tiebreakers, Tournament, TournamentError,
    TournamentId, TournamentStatus, Winner, MIN_PLAYERS,
};
