use darts501::scoring::GameState;
use darts501::stats::GameStats;
use rstest::rstest;

fn finished(darts_thrown: u32, turn_number: u32) -> GameState {
    GameState {
        score: 0,
        darts_thrown,
        turn_number,
        finished: true,
    }
}

#[test]
fn test_statistics_for_twelve_turn_leg() {
    let stats = GameStats::from_state(&finished(34, 12)).unwrap();
    assert_eq!(stats.finishing_turn_darts, 1);
    assert_eq!(stats.stat_darts, 34);
    assert!((stats.average_per_dart - 14.735).abs() < 0.01);
    assert!((stats.three_dart_average - 44.21).abs() < 0.01);
    assert!((stats.total_turns - 11.33).abs() < 0.01);
}

#[rstest]
#[case(1, 1)]
#[case(2, 2)]
#[case(3, 3)]
#[case(4, 1)]
#[case(33, 3)]
fn test_finishing_turn_darts(#[case] darts: u32, #[case] expected: u32) {
    let turn = (darts - 1) / 3 + 1;
    let stats = GameStats::from_state(&finished(darts, turn)).unwrap();
    assert_eq!(stats.finishing_turn_darts, expected);
}

#[test]
fn test_busted_turns_count_as_full_turns() {
    // Turn 2 busted on its first dart: 3 + 1 + 2 darts thrown over 3 turns.
    let stats = GameStats::from_state(&finished(6, 3)).unwrap();
    assert_eq!(stats.finishing_turn_darts, 3);
    assert_eq!(stats.stat_darts, 9);
}

#[test]
fn test_unfinished_state_has_no_statistics() {
    let state = GameState {
        score: 40,
        darts_thrown: 30,
        turn_number: 11,
        finished: false,
    };
    assert!(GameStats::from_state(&state).is_none());
}

#[test]
fn test_zero_turn_counter_has_no_statistics() {
    assert!(GameStats::from_state(&finished(1, 0)).is_none());
}
