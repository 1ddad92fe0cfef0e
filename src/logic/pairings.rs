//! Pairing generation: bye assignment, score groups, greedy rematch avoidance.

use crate::logic::standings::calculate_standings;
use crate::models::{Match, Player, PlayerId, Round};
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashSet;

/// Unordered pair key, so A-vs-B and B-vs-A collide.
fn pair_key(a: PlayerId, b: PlayerId) -> (PlayerId, PlayerId) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

/// Generate one new round of pairings using a thread-local RNG for the
/// intra-score-group shuffle. See [`generate_pairings_with_rng`].
pub fn generate_pairings(players: &[Player], existing_rounds: &[Round]) -> Vec<Match> {
    generate_pairings_with_rng(players, existing_rounds, &mut rand::thread_rng())
}

/// Generate one new round of pairings.
///
/// Pure given the RNG; inputs are untouched and a fresh set of matches is
/// returned, table-numbered 1-based in the order they were produced.
///
/// 1. Rank everyone via [`calculate_standings`].
/// 2. Odd roster: the lowest-ranked player without a bye sits out with a bye
///    (fixed 2-0 win). If everyone has had one, the lowest-ranked player takes
///    a second.
/// 3. Split the pool into score groups, highest first. Each group absorbs the
///    player floated down from the group above, is shuffled, and floats one
///    player down itself when odd.
/// 4. Within a group, greedy first-fit: pair the first player with the first
///    remaining player they have not already faced, or with the next player
///    anyway when every candidate is a repeat. No backtracking; an early
///    greedy choice can force an avoidable rematch, which is accepted.
///
/// The shuffle is the only nondeterminism. It spreads pairings within equal
/// scores instead of replaying roster order every round; correctness never
/// depends on it, and callers needing reproducibility pass a seeded RNG.
pub fn generate_pairings_with_rng<R: Rng + ?Sized>(
    players: &[Player],
    existing_rounds: &[Round],
    rng: &mut R,
) -> Vec<Match> {
    let mut ranked = calculate_standings(players, existing_rounds);

    let mut bye_player: Option<Player> = None;
    if ranked.len() % 2 != 0 {
        // Lowest rank upward, first player still without a bye; everyone has
        // had one, so the lowest-ranked player takes it again.
        let idx = ranked
            .iter()
            .rposition(|p| p.byes == 0)
            .unwrap_or(ranked.len() - 1);
        let p = ranked.remove(idx);
        log::debug!("bye assigned to {} ({} prior byes)", p.name, p.byes);
        bye_player = Some(p);
    }

    let mut previous_pairings: HashSet<(PlayerId, PlayerId)> = HashSet::new();
    for round in existing_rounds {
        for m in &round.pairings {
            if let Some(player2) = m.player2 {
                previous_pairings.insert(pair_key(m.player1, player2));
            }
        }
    }

    // Score groups: runs of equal points in the ranked order
    let mut score_groups: Vec<Vec<Player>> = Vec::new();
    for p in ranked {
        match score_groups.last_mut() {
            Some(group) if group[0].points == p.points => group.push(p),
            _ => score_groups.push(vec![p]),
        }
    }

    let mut pairings: Vec<Match> = Vec::new();
    let mut floater: Option<Player> = None;

    for mut group in score_groups {
        if let Some(f) = floater.take() {
            group.push(f);
        }
        group.shuffle(rng);
        if group.len() % 2 != 0 {
            floater = group.pop();
        }

        while !group.is_empty() {
            let p1 = group.remove(0);
            let candidate = group
                .iter()
                .position(|p2| !previous_pairings.contains(&pair_key(p1.id, p2.id)));
            let p2 = match candidate {
                Some(i) => group.remove(i),
                None => {
                    // Every remaining group member is a repeat; take the next
                    // one rather than leave anyone unpaired.
                    let p2 = group.remove(0);
                    log::warn!("forced rematch: {} vs {}", p1.name, p2.name);
                    p2
                }
            };
            pairings.push(Match::pending(p1.id, p2.id));
        }
    }

    // The bye absorbed global oddness, so group floats cancel out by the
    // bottom group.
    debug_assert!(floater.is_none());

    if let Some(bye) = bye_player {
        pairings.push(Match::bye(bye.id));
    }

    for (i, m) in pairings.iter_mut().enumerate() {
        m.table = (i + 1) as u32;
    }
    pairings
}
