//! Integration tests for standings: points, opponent history, and tiebreakers.

use swiss_tournament::{calculate_standings, Match, MatchResult, Player, PlayerId, Round};

fn roster(n: usize) -> Vec<Player> {
    (0..n).map(|i| Player::new(format!("P{i}"))).collect()
}

fn reported(p1: PlayerId, p2: PlayerId, score: (u32, u32)) -> Match {
    let mut m = Match::pending(p1, p2);
    m.record_result(MatchResult {
        player1_games: score.0,
        player2_games: score.1,
    })
    .unwrap();
    m
}

fn find(standings: &[Player], id: PlayerId) -> &Player {
    standings.iter().find(|p| p.id == id).unwrap()
}

#[test]
fn win_draw_loss_points() {
    let players = roster(4);
    let (a, b, c, d) = (players[0].id, players[1].id, players[2].id, players[3].id);
    let rounds = vec![Round::new(
        1,
        vec![reported(a, b, (2, 0)), reported(c, d, (1, 1))],
    )];

    let standings = calculate_standings(&players, &rounds);

    assert_eq!(find(&standings, a).points, 3);
    assert_eq!(find(&standings, b).points, 0);
    assert_eq!(find(&standings, c).points, 1);
    assert_eq!(find(&standings, d).points, 1);
    for p in &standings {
        assert_eq!(p.games_played, 1);
        assert_eq!(p.byes, 0);
    }
    // Winner first, drawers in the middle, loser last
    assert_eq!(standings[0].id, a);
    assert_eq!(standings[3].id, b);
}

#[test]
fn bye_scores_a_win_without_a_game() {
    let players = roster(3);
    let (a, b, c) = (players[0].id, players[1].id, players[2].id);
    let rounds = vec![Round::new(1, vec![reported(a, b, (2, 1)), Match::bye(c)])];

    let standings = calculate_standings(&players, &rounds);

    let bye_recipient = find(&standings, c);
    assert_eq!(bye_recipient.points, 3);
    assert_eq!(bye_recipient.byes, 1);
    assert_eq!(bye_recipient.games_played, 0);
    assert!(bye_recipient.opponent_ids.is_empty());
}

#[test]
fn pending_match_counts_game_but_no_points() {
    let players = roster(2);
    let (a, b) = (players[0].id, players[1].id);
    let rounds = vec![Round::new(1, vec![Match::pending(a, b)])];

    let standings = calculate_standings(&players, &rounds);

    for p in &standings {
        assert_eq!(p.points, 0);
        assert_eq!(p.games_played, 1);
        assert_eq!(p.opponent_ids.len(), 1);
    }
    assert_eq!(find(&standings, a).opponent_ids, vec![b]);
    assert_eq!(find(&standings, b).opponent_ids, vec![a]);
}

#[test]
fn games_plus_byes_equals_rounds_appeared_in() {
    let players = roster(5);
    let ids: Vec<PlayerId> = players.iter().map(|p| p.id).collect();
    let rounds = vec![
        Round::new(
            1,
            vec![
                reported(ids[0], ids[1], (2, 0)),
                reported(ids[2], ids[3], (2, 1)),
                Match::bye(ids[4]),
            ],
        ),
        Round::new(
            2,
            vec![
                reported(ids[0], ids[2], (2, 0)),
                reported(ids[4], ids[1], (1, 1)),
                Match::bye(ids[3]),
            ],
        ),
    ];

    let standings = calculate_standings(&players, &rounds);

    for p in &standings {
        assert_eq!(p.rounds_played(), 2, "{} appeared in both rounds", p.name);
    }
}

#[test]
fn mwp_is_floored_and_zero_before_playing() {
    let players = roster(3);
    let (a, b) = (players[0].id, players[1].id);
    let rounds = vec![Round::new(1, vec![reported(a, b, (2, 0))])];

    let standings = calculate_standings(&players, &rounds);

    let winner_mwp = find(&standings, a).tiebreakers.match_win_percentage;
    let loser_mwp = find(&standings, b).tiebreakers.match_win_percentage;
    let idle_mwp = find(&standings, players[2].id).tiebreakers.match_win_percentage;
    assert!((winner_mwp - 1.0).abs() < 1e-9);
    assert!((loser_mwp - 0.33).abs() < 1e-9);
    assert_eq!(idle_mwp, 0.0);
}

#[test]
fn sos_sums_opponent_points_and_sosos_their_sos() {
    let players = roster(4);
    let (a, b, c, d) = (players[0].id, players[1].id, players[2].id, players[3].id);
    let rounds = vec![Round::new(
        1,
        vec![reported(a, b, (2, 0)), reported(c, d, (2, 0))],
    )];

    let standings = calculate_standings(&players, &rounds);

    // Winners' only opponents are the losers (0 points) and vice versa
    assert_eq!(find(&standings, a).tiebreakers.strength_of_schedule, 0);
    assert_eq!(find(&standings, b).tiebreakers.strength_of_schedule, 3);
    // SOSOS uses the opponents' finalized SOS values
    assert_eq!(
        find(&standings, a)
            .tiebreakers
            .sum_of_opponent_strength_of_schedule,
        3
    );
    assert_eq!(
        find(&standings, b)
            .tiebreakers
            .sum_of_opponent_strength_of_schedule,
        0
    );
}

#[test]
fn repeated_opponent_counts_once_per_meeting() {
    let players = roster(2);
    let (a, b) = (players[0].id, players[1].id);
    let rounds = vec![
        Round::new(1, vec![reported(a, b, (2, 0))]),
        Round::new(2, vec![reported(a, b, (0, 2))]),
    ];

    let standings = calculate_standings(&players, &rounds);

    // Each has 3 points; facing the other twice doubles their contribution
    assert_eq!(find(&standings, a).tiebreakers.strength_of_schedule, 6);
    assert_eq!(find(&standings, b).tiebreakers.strength_of_schedule, 6);
    assert_eq!(
        find(&standings, a)
            .tiebreakers
            .sum_of_opponent_strength_of_schedule,
        12
    );
}

#[test]
fn full_tie_resolved_by_ascending_id() {
    let players = roster(2);
    let standings = calculate_standings(&players, &[]);

    assert!(standings[0].id < standings[1].id);
}

#[test]
fn standings_are_a_permutation_of_the_roster() {
    let players = roster(5);
    let ids: Vec<PlayerId> = players.iter().map(|p| p.id).collect();
    let rounds = vec![Round::new(
        1,
        vec![
            reported(ids[0], ids[1], (2, 1)),
            reported(ids[2], ids[3], (1, 1)),
            Match::bye(ids[4]),
        ],
    )];

    let standings = calculate_standings(&players, &rounds);

    assert_eq!(standings.len(), players.len());
    let mut seen: Vec<PlayerId> = standings.iter().map(|p| p.id).collect();
    let mut expected = ids.clone();
    seen.sort();
    expected.sort();
    assert_eq!(seen, expected);
}

#[test]
fn match_with_unknown_player_is_ignored() {
    let players = roster(1);
    let a = players[0].id;
    let ghost = Player::new("ghost").id;
    let rounds = vec![Round::new(1, vec![reported(a, ghost, (2, 0))])];

    let standings = calculate_standings(&players, &rounds);

    assert_eq!(standings.len(), 1);
    assert_eq!(standings[0].points, 0);
    assert_eq!(standings[0].games_played, 0);
    assert!(standings[0].opponent_ids.is_empty());
}

#[test]
fn inputs_are_not_mutated() {
    let players = roster(2);
    let (a, b) = (players[0].id, players[1].id);
    let rounds = vec![Round::new(1, vec![reported(a, b, (2, 0))])];

    let before = players.clone();
    let _ = calculate_standings(&players, &rounds);

    assert_eq!(players, before);
}
