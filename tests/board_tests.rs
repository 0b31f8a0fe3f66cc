//! Board and selection-highlight behaviour through the public API

use tui_wordsearch::core::{Board, SelectionController};
use tui_wordsearch::types::{DirectionLock, Position};

fn p(row: u8, col: u8) -> Position {
    Position::new(row, col)
}

fn board() -> Board {
    Board::from_rows(&["ABCDE", "FGHIJ", "KLMNO", "PQRST"]).unwrap()
}

fn highlighted(board: &Board) -> Vec<Position> {
    board
        .positions()
        .filter(|&pos| board.get(pos).is_some_and(|c| c.highlighted))
        .collect()
}

#[test]
fn test_board_from_rows_rejects_ragged_input() {
    assert!(Board::from_rows(&["ABC", "DE"]).is_none());
    assert!(Board::from_rows(&[]).is_none());
    assert!(Board::from_rows(&[""]).is_none());
}

#[test]
fn test_board_lines_and_spelling() {
    let board = board();
    assert_eq!(board.rows(), 4);
    assert_eq!(board.cols(), 5);
    assert_eq!(board.row_letters(2), "KLMNO");
    assert_eq!(board.col_letters(4), "EJOT");
    assert_eq!(board.spell(&[p(3, 1), p(2, 1), p(1, 1)]), "QLG");
    assert_eq!(board.letter(p(4, 0)), None);
}

#[test]
fn test_single_press_highlights_cross() {
    let mut board = board();
    let mut selection = SelectionController::new(1000);
    selection.press(&mut board, p(1, 2));

    let lit = highlighted(&board);
    assert_eq!(lit.len(), 5 + 4 - 1);
    assert!(lit.iter().all(|pos| pos.row == 1 || pos.col == 2));
    assert!(board.get(p(1, 2)).unwrap().pressed);
}

#[test]
fn test_locked_press_highlights_only_the_line() {
    let mut board = board();
    let mut selection = SelectionController::new(1000);
    selection.press(&mut board, p(0, 1));
    selection.press(&mut board, p(2, 1));
    assert_eq!(selection.lock(), DirectionLock::ColLocked);

    let lit = highlighted(&board);
    assert_eq!(lit, vec![p(0, 1), p(1, 1), p(2, 1), p(3, 1)]);
}

#[test]
fn test_highlight_follows_latest_press_not_history() {
    let mut board = board();
    let mut selection = SelectionController::new(1000);
    selection.press(&mut board, p(0, 0));
    selection.press(&mut board, p(0, 3));
    // Off-row press commits and starts fresh: cross anchored on (3, 4)
    selection.press(&mut board, p(3, 4));

    let lit = highlighted(&board);
    assert!(lit.iter().all(|pos| pos.row == 3 || pos.col == 4));
    assert!(!board.get(p(0, 0)).unwrap().pressed);
    assert!(!board.get(p(0, 3)).unwrap().pressed);
}

#[test]
fn test_correct_survives_selection_clear() {
    let mut board = board();
    board.mark_correct(&[p(0, 0), p(0, 1)]);
    board.set_pressed(p(0, 0));
    board.apply_highlight(DirectionLock::Unset, p(0, 0));

    board.clear_selection();
    assert_eq!(board.correct_count(), 2);
    assert!(board.cells().iter().all(|c| !c.pressed && !c.highlighted));
}
