//! Round lifecycle: generate, regenerate, and record results for the current round.

use crate::logic::pairings::generate_pairings;
use crate::logic::standings::calculate_standings;
use crate::models::{MatchResult, Round, Tournament, TournamentError, TournamentStatus};

/// Generate the next round's pairings and append the round.
///
/// Only valid while the tournament is in progress and the newest round (if
/// any) has every result recorded. The roster's derived fields are refreshed
/// from the new standings afterwards.
pub fn generate_next_round(tournament: &mut Tournament) -> Result<(), TournamentError> {
    if tournament.status != TournamentStatus::InProgress {
        return Err(TournamentError::InvalidState);
    }
    if let Some(round) = tournament.rounds.last() {
        if !round.is_complete() {
            return Err(TournamentError::IncompleteResults);
        }
    }

    let number = tournament.rounds.len() as u32 + 1;
    let pairings = generate_pairings(&tournament.players, &tournament.rounds);
    log::debug!("round {}: {} match(es)", number, pairings.len());
    tournament.rounds.push(Round::new(number, pairings));
    tournament.players = calculate_standings(&tournament.players, &tournament.rounds);
    Ok(())
}

/// Discard and re-pair the newest round, as if it had never been generated.
///
/// Only legal before any of the round's results are recorded; the fixed
/// result of a bye match does not count as recorded. The round keeps its
/// number.
pub fn regenerate_current_round(tournament: &mut Tournament) -> Result<(), TournamentError> {
    if tournament.status != TournamentStatus::InProgress {
        return Err(TournamentError::InvalidState);
    }
    let Some(round) = tournament.rounds.last() else {
        return Err(TournamentError::InvalidState);
    };
    if round.pairings.iter().any(|m| !m.is_bye() && !m.is_pending()) {
        return Err(TournamentError::ResultsAlreadyRecorded);
    }

    let number = round.number;
    let prior_rounds = &tournament.rounds[..tournament.rounds.len() - 1];
    let pairings = generate_pairings(&tournament.players, prior_rounds);
    log::debug!("round {} regenerated: {} match(es)", number, pairings.len());

    let last = tournament.rounds.len() - 1;
    tournament.rounds[last] = Round::new(number, pairings);
    tournament.players = calculate_standings(&tournament.players, &tournament.rounds);
    Ok(())
}

/// Record a result for the match at `table` in the newest round.
///
/// The score string is player 1's games first, e.g. "2-1"; the winner is
/// derived from the comparison (equal scores draw). Bye matches reject entry.
pub fn record_result(
    tournament: &mut Tournament,
    table: u32,
    score: &str,
) -> Result<(), TournamentError> {
    if tournament.status != TournamentStatus::InProgress {
        return Err(TournamentError::InvalidState);
    }
    let round = tournament
        .rounds
        .last_mut()
        .ok_or(TournamentError::InvalidState)?;
    let m = round
        .pairings
        .iter_mut()
        .find(|m| m.table == table)
        .ok_or(TournamentError::MatchNotFound { table })?;
    let result: MatchResult = score.parse()?;
    m.record_result(result)?;
    tournament.players = calculate_standings(&tournament.players, &tournament.rounds);
    Ok(())
}
