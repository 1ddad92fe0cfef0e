//! Standings: points, opponent history, and tiebreakers from the round history.

use crate::models::{Player, PlayerId, Round, Winner};
use std::collections::HashMap;

/// Points for a match win (a bye scores the same).
pub const WIN_POINTS: u32 = 3;
/// Points each for a drawn match.
pub const DRAW_POINTS: u32 = 1;
/// Lower bound on match-win percentage once a player has played a round, so
/// one very bad record cannot crater an opponent's strength of schedule.
pub const MWP_FLOOR: f64 = 0.33;

/// Compute standings from scratch over the full round history.
///
/// Pure: inputs are untouched and the returned players are fresh copies,
/// sorted best to worst. Safe to call at any tournament stage; derived fields
/// are reset and rebuilt rather than trusted.
///
/// Per match: a bye credits the recipient a win's points and a bye (no game,
/// no opponent); a regular match records each player as the other's opponent
/// and a game played for both, and awards points only once a winner has been
/// recorded (3 to the winner, 1 each on a draw). Matches referencing ids not
/// on the roster are skipped.
///
/// Tiebreakers, in sort order after points: strength of schedule (sum of
/// opponents' points, once per time played), then sum of opponents' SOS, then
/// ascending id for a strict total order. The match-win percentage is
/// display-only: `max(0.33, points / (rounds_played * 3))`, or 0 before the
/// first round.
pub fn calculate_standings(players: &[Player], rounds: &[Round]) -> Vec<Player> {
    let mut by_id: HashMap<PlayerId, Player> = players
        .iter()
        .map(|p| {
            let mut p = p.clone();
            p.reset_record();
            (p.id, p)
        })
        .collect();

    // Points, games played, byes, and opponent lists
    for round in rounds {
        for m in &round.pairings {
            let Some(player2_id) = m.player2 else {
                if let Some(p) = by_id.get_mut(&m.player1) {
                    p.points += WIN_POINTS;
                    p.byes += 1;
                }
                continue;
            };

            if !by_id.contains_key(&m.player1) || !by_id.contains_key(&player2_id) {
                continue;
            }
            if let Some(p1) = by_id.get_mut(&m.player1) {
                p1.opponent_ids.push(player2_id);
                p1.games_played += 1;
            }
            if let Some(p2) = by_id.get_mut(&player2_id) {
                p2.opponent_ids.push(m.player1);
                p2.games_played += 1;
            }

            match m.winner {
                Some(Winner::Player(w)) if w == m.player1 || w == player2_id => {
                    if let Some(p) = by_id.get_mut(&w) {
                        p.points += WIN_POINTS;
                    }
                }
                Some(Winner::Draw) => {
                    for id in [m.player1, player2_id] {
                        if let Some(p) = by_id.get_mut(&id) {
                            p.points += DRAW_POINTS;
                        }
                    }
                }
                // Pending, bye winner on a non-bye match, or a winner id that
                // is not a participant: no points awarded.
                _ => {}
            }
        }
    }

    // Match-win percentage
    for p in by_id.values_mut() {
        let rounds_played = p.rounds_played();
        p.tiebreakers.match_win_percentage = if rounds_played > 0 {
            (f64::from(p.points) / f64::from(rounds_played * WIN_POINTS)).max(MWP_FLOOR)
        } else {
            0.0
        };
    }

    // Strength of schedule: opponents' points, once per occurrence
    let points: HashMap<PlayerId, u32> = by_id.values().map(|p| (p.id, p.points)).collect();
    for p in by_id.values_mut() {
        p.tiebreakers.strength_of_schedule = p
            .opponent_ids
            .iter()
            .filter_map(|id| points.get(id))
            .sum();
    }

    // Sum of opponents' SOS; requires every SOS above to be final first
    let sos: HashMap<PlayerId, u32> = by_id
        .values()
        .map(|p| (p.id, p.tiebreakers.strength_of_schedule))
        .collect();
    for p in by_id.values_mut() {
        p.tiebreakers.sum_of_opponent_strength_of_schedule = p
            .opponent_ids
            .iter()
            .filter_map(|id| sos.get(id))
            .sum();
    }

    let mut standings: Vec<Player> = by_id.into_values().collect();
    standings.sort_by(|a, b| {
        b.points
            .cmp(&a.points)
            .then_with(|| {
                b.tiebreakers
                    .strength_of_schedule
                    .cmp(&a.tiebreakers.strength_of_schedule)
            })
            .then_with(|| {
                b.tiebreakers
                    .sum_of_opponent_strength_of_schedule
                    .cmp(&a.tiebreakers.sum_of_opponent_strength_of_schedule)
            })
            .then_with(|| a.id.cmp(&b.id))
    });
    standings
}
