//! Tests for the position enum.

use rewind_tictactoe::{Board, Player, Position, Square};
use strum::IntoEnumIterator;

#[test]
fn test_position_to_index() {
    assert_eq!(Position::TopLeft.to_index(), 0);
    assert_eq!(Position::Center.to_index(), 4);
    assert_eq!(Position::BottomRight.to_index(), 8);
}

#[test]
fn test_position_from_index() {
    assert_eq!(Position::from_index(0), Some(Position::TopLeft));
    assert_eq!(Position::from_index(4), Some(Position::Center));
    assert_eq!(Position::from_index(8), Some(Position::BottomRight));
    assert_eq!(Position::from_index(9), None);
}

#[test]
fn test_index_round_trip() {
    for pos in Position::iter() {
        assert_eq!(Position::from_index(pos.to_index()), Some(pos));
        assert_eq!(
            Position::from_row_col(pos.row(), pos.col()),
            Some(pos),
            "row/col round trip for {}",
            pos
        );
    }
}

#[test]
fn test_row_col_out_of_range() {
    assert_eq!(Position::from_row_col(3, 0), None);
    assert_eq!(Position::from_row_col(0, 3), None);
}

#[test]
fn test_open_positions_empty_board() {
    let board = Board::new();
    assert_eq!(Position::open_positions(&board).len(), 9);
}

#[test]
fn test_open_positions_filters_occupied() {
    let mut board = Board::new();
    board.set(Position::TopLeft, Square::Occupied(Player::X));
    board.set(Position::Center, Square::Occupied(Player::O));

    let open = Position::open_positions(&board);
    assert_eq!(open.len(), 7);
    assert!(!open.contains(&Position::TopLeft));
    assert!(!open.contains(&Position::Center));
    assert!(open.contains(&Position::BottomRight));
}
