//! Tournament logic: standings, pairing generation, round lifecycle.

mod pairings;
mod rounds;
mod standings;

pub use pairings::{generate_pairings, generate_pairings_with_rng};
pub use rounds::{generate_next_round, record_result, regenerate_current_round};
pub use standings::{calculate_standings, DRAW_POINTS, MWP_FLOOR, WIN_POINTS};
