//! Tests for board evaluation order and outcome classification.

use rewind_tictactoe::rules::{evaluate, is_full, winning_line};
use rewind_tictactoe::{Board, Outcome, Player, Position, Square};

fn board_with(marks: &[(Position, Player)]) -> Board {
    let mut board = Board::new();
    for (pos, player) in marks {
        board.set(*pos, Square::Occupied(*player));
    }
    board
}

#[test]
fn test_earlier_row_wins_ties() {
    // Crafted board: top row and middle row both complete
    let board = board_with(&[
        (Position::TopLeft, Player::X),
        (Position::TopCenter, Player::X),
        (Position::TopRight, Player::X),
        (Position::MiddleLeft, Player::O),
        (Position::Center, Player::O),
        (Position::MiddleRight, Player::O),
    ]);

    assert_eq!(
        evaluate(&board),
        Outcome::Winner {
            player: Player::X,
            line: [Position::TopLeft, Position::TopCenter, Position::TopRight],
        }
    );
}

#[test]
fn test_column_wins_before_diagonal() {
    // Left column and the down-right diagonal share the top-left corner
    let board = board_with(&[
        (Position::TopLeft, Player::O),
        (Position::MiddleLeft, Player::O),
        (Position::BottomLeft, Player::O),
        (Position::Center, Player::O),
        (Position::BottomRight, Player::O),
    ]);

    let (player, line) = winning_line(&board).unwrap();
    assert_eq!(player, Player::O);
    assert_eq!(
        line,
        [
            Position::TopLeft,
            Position::MiddleLeft,
            Position::BottomLeft
        ]
    );
}

#[test]
fn test_anti_diagonal_detected() {
    let board = board_with(&[
        (Position::TopRight, Player::X),
        (Position::Center, Player::X),
        (Position::BottomLeft, Player::X),
    ]);

    assert_eq!(
        winning_line(&board),
        Some((
            Player::X,
            [Position::TopRight, Position::Center, Position::BottomLeft]
        ))
    );
}

#[test]
fn test_partial_board_in_progress() {
    let board = board_with(&[
        (Position::Center, Player::X),
        (Position::TopLeft, Player::O),
    ]);

    assert_eq!(evaluate(&board), Outcome::InProgress);
    assert!(!is_full(&board));
}

#[test]
fn test_winner_on_full_board_is_not_a_draw() {
    // X X X / O O X / O X O - full, but the top row decides it
    let board = board_with(&[
        (Position::TopLeft, Player::X),
        (Position::TopCenter, Player::X),
        (Position::TopRight, Player::X),
        (Position::MiddleLeft, Player::O),
        (Position::Center, Player::O),
        (Position::MiddleRight, Player::X),
        (Position::BottomLeft, Player::O),
        (Position::BottomCenter, Player::X),
        (Position::BottomRight, Player::O),
    ]);

    assert!(is_full(&board));
    assert_eq!(evaluate(&board).winner(), Some(Player::X));
    assert!(!evaluate(&board).is_draw());
}
