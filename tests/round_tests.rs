use tui_wordsearch::core::{Board, RoundConfig, RoundState};
use tui_wordsearch::types::{DirectionLock, Position, RoundEvent, RoundPhase};

const IDLE_MS: u32 = 1000;

fn p(row: u8, col: u8) -> Position {
    Position::new(row, col)
}

/// 10x10 grid with FUEL across row 4 and OIL down column 8.
fn fixture() -> RoundState {
    let board = Board::from_rows(&[
        "QWERTYUIOP",
        "ASDFGHJKLZ",
        "XCVBNMQWOE",
        "RTYUPASDIF",
        "GHFUELJKLZ",
        "XCVBNMQWER",
        "TYUPASDFGH",
        "JKLZXCVBNM",
        "QWERTYUPAS",
        "DFGHJKLZXC",
    ])
    .unwrap();
    let mut round = RoundState::with_board(board, ["FUEL", "OIL"], IDLE_MS);
    round.start();
    round
}

fn press_all(round: &mut RoundState, cells: &[Position]) -> Vec<RoundEvent> {
    cells.iter().flat_map(|&pos| round.press(pos)).collect()
}

fn correct_cells(round: &RoundState) -> Vec<Position> {
    round
        .board()
        .positions()
        .filter(|&pos| round.board().get(pos).is_some_and(|c| c.correct))
        .collect()
}

#[test]
fn lock_violation_commits_three_cell_path() {
    let mut round = fixture();
    round.press(p(2, 3));
    round.press(p(2, 6));
    assert_eq!(round.lock(), DirectionLock::RowLocked);

    round.press(p(5, 6));
    assert_eq!(round.selection(), &[p(5, 6)]);
    assert_eq!(round.lock(), DirectionLock::Unset);
    assert!(correct_cells(&round).is_empty());
}

#[test]
fn repeated_press_is_a_no_op() {
    let mut round = fixture();
    round.press(p(4, 2));
    round.press(p(4, 3));
    let revision = round.revision();

    assert!(round.press(p(4, 3)).is_empty());
    assert_eq!(round.selection(), &[p(4, 2), p(4, 3)]);
    assert_eq!(round.lock(), DirectionLock::RowLocked);
    assert_eq!(round.revision(), revision);
}

#[test]
fn planted_word_is_found_once_on_idle_commit() {
    let mut round = fixture();
    let fuel = [p(4, 2), p(4, 3), p(4, 4), p(4, 5)];

    assert!(press_all(&mut round, &fuel).is_empty());
    assert!(round.tick(IDLE_MS - 1).is_empty());

    let events = round.tick(1);
    assert_eq!(events.as_slice(), &[RoundEvent::WordFound { word: "FUEL".into() }]);
    assert_eq!(correct_cells(&round), fuel.to_vec());
    assert!(round.bank().entries().iter().any(|e| e.word == "FUEL" && e.found));
    assert!(round.selection().is_empty());
    assert_eq!(round.idle_timer_ms(), None);

    // Selecting it again changes nothing and emits nothing.
    press_all(&mut round, &fuel);
    assert!(round.tick(IDLE_MS).is_empty());
    assert_eq!(round.found_count(), 1);
    assert_eq!(round.phase(), RoundPhase::Playing);
}

#[test]
fn non_matching_path_changes_nothing() {
    let mut round = fixture();
    press_all(&mut round, &[p(0, 0), p(0, 1), p(0, 2)]);
    assert!(round.tick(IDLE_MS).is_empty());
    assert!(correct_cells(&round).is_empty());
    assert_eq!(round.found_count(), 0);
}

#[test]
fn column_word_found_on_idle_commit() {
    let mut round = fixture();
    press_all(&mut round, &[p(2, 8), p(3, 8)]);
    assert_eq!(round.lock(), DirectionLock::ColLocked);
    let events = round.press(p(4, 8));
    assert!(events.is_empty());

    let events = round.tick(IDLE_MS);
    assert_eq!(events.as_slice(), &[RoundEvent::WordFound { word: "OIL".into() }]);
}

#[test]
fn violating_press_commits_and_starts_fresh() {
    // F-U-E along row 4, then a press in row 3 commits "FUEP": no match.
    let mut round = fixture();
    press_all(&mut round, &[p(4, 2), p(4, 3), p(4, 4)]);
    let events = round.press(p(3, 4));
    assert!(events.is_empty());
    assert!(correct_cells(&round).is_empty());

    // The violating press opens the next path and rearms the timer.
    assert_eq!(round.selection(), &[p(3, 4)]);
    assert_eq!(round.lock(), DirectionLock::Unset);
    assert!(round.board().get(p(3, 4)).is_some_and(|c| c.pressed));
    assert!(!round.board().get(p(4, 2)).is_some_and(|c| c.pressed));
    assert_eq!(round.idle_timer_ms(), Some(IDLE_MS));
}

#[test]
fn word_started_on_violating_press_is_found() {
    let mut round = fixture();
    round.press(p(4, 2));
    // Off-axis second pick closes "FO" and starts OIL on the O.
    assert!(round.press(p(2, 8)).is_empty());
    press_all(&mut round, &[p(3, 8), p(4, 8)]);
    assert_eq!(round.selection(), &[p(2, 8), p(3, 8), p(4, 8)]);

    let events = round.tick(IDLE_MS);
    assert_eq!(events.as_slice(), &[RoundEvent::WordFound { word: "OIL".into() }]);
    assert_eq!(correct_cells(&round), vec![p(2, 8), p(3, 8), p(4, 8)]);
}

#[test]
fn round_won_fires_exactly_once() {
    let mut round = fixture();
    let fuel = [p(4, 2), p(4, 3), p(4, 4), p(4, 5)];
    let oil = [p(2, 8), p(3, 8), p(4, 8)];

    press_all(&mut round, &fuel);
    let mut events: Vec<RoundEvent> = round.tick(IDLE_MS).into_iter().collect();
    press_all(&mut round, &oil);
    events.extend(round.tick(IDLE_MS));

    assert_eq!(
        events,
        vec![
            RoundEvent::WordFound { word: "FUEL".into() },
            RoundEvent::WordFound { word: "OIL".into() },
            RoundEvent::RoundWon,
        ]
    );
    assert_eq!(round.phase(), RoundPhase::Won);

    // Re-selecting after the win is ignored entirely.
    assert!(press_all(&mut round, &fuel).is_empty());
    assert!(round.tick(IDLE_MS).is_empty());
    assert!(round.selection().is_empty());
}

#[test]
fn end_cancels_pending_commit() {
    let mut round = fixture();
    press_all(&mut round, &[p(4, 2), p(4, 3), p(4, 4), p(4, 5)]);
    round.end();

    assert_eq!(round.phase(), RoundPhase::Ended);
    assert_eq!(round.idle_timer_ms(), None);
    assert!(round.tick(IDLE_MS).is_empty());
    assert_eq!(round.found_count(), 0);
    assert!(round.board().cells().iter().all(|c| !c.pressed && !c.highlighted));
}

#[test]
fn presses_before_start_are_ignored() {
    let board = Board::from_rows(&["OIL"]).unwrap();
    let mut round = RoundState::with_board(board, ["OIL"], IDLE_MS);
    assert!(round.press(p(0, 0)).is_empty());
    assert!(round.selection().is_empty());
    assert_eq!(round.revision(), 0);
}

#[test]
fn generated_round_can_be_solved() {
    let config = RoundConfig {
        seed: Some(2024),
        ..RoundConfig::default()
    };
    let mut round = RoundState::new(&config).unwrap();
    assert_eq!(round.seed(), 2024);
    round.start();

    let placements = round.placements().to_vec();
    let mut found = Vec::new();
    for placement in &placements {
        for pos in placement.cells() {
            round.press(pos);
        }
        found.extend(round.tick(config.idle_commit_ms));
    }

    let wins = found.iter().filter(|e| **e == RoundEvent::RoundWon).count();
    assert_eq!(wins, 1);
    assert_eq!(round.phase(), RoundPhase::Won);
    assert_eq!(round.found_count(), placements.len());
}

#[test]
fn snapshot_serializes_for_collaborators() {
    let mut round = fixture();
    round.press(p(4, 2));
    let snapshot = round.snapshot();

    assert!(snapshot.playable());
    assert_eq!(snapshot.selection, vec![p(4, 2)]);
    assert_eq!(snapshot.letter_rows()[4], "GHFUELJKLZ");

    let json = serde_json::to_value(&snapshot).unwrap();
    assert_eq!(json["phase"], "playing");
    assert_eq!(json["words"][0]["word"], "FUEL");

    let event = serde_json::to_value(RoundEvent::WordFound { word: "OIL".into() }).unwrap();
    assert_eq!(event["type"], "word_found");
}
