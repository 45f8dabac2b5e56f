use super::*;

#[test]
fn empty_board_is_not_over() {
    let board = Board::new();
    assert!(!is_winner(&board, Player::X));
    assert!(!is_winner(&board, Player::O));
    assert!(!is_game_over(&board));
    assert_eq!(outcome(&board), None);
}

#[test]
fn detects_every_line() {
    for line in LINES {
        for player in Player::ALL {
            let mut board = Board::new();
            for i in line {
                board.make_move(Move::from_index(i), player);
            }
            assert!(is_winner(&board, player), "line {:?} for {}", line, player);
            assert!(!is_winner(&board, player.other()));
            assert!(is_game_over(&board));
        }
    }
}

#[test]
fn two_in_a_row_is_not_a_win() {
    let board = Board::from_rows(["XX.", "OO.", "..."]);
    assert!(!is_winner(&board, Player::X));
    assert!(!is_winner(&board, Player::O));
    assert!(!is_game_over(&board));
}

#[test]
fn full_board_with_x_diagonal() {
    let board = Board::from_rows(["XOO", "OXX", "XOX"]);
    assert!(board.is_full());
    assert!(is_winner(&board, Player::X));
    assert!(is_game_over(&board));
    assert!(!is_winner(&board, Player::O));
    assert_eq!(outcome(&board), Some(Outcome::Win(Player::X)));
}

#[test]
fn full_board_without_line_is_draw() {
    let board = Board::from_rows(["XOX", "XOO", "OXX"]);
    assert!(is_game_over(&board));
    assert_eq!(outcome(&board), Some(Outcome::Draw));
}

#[test]
fn move_legality_tracks_occupancy() {
    let mut board = Board::new();
    assert!(is_move_legal(&board, 1, 1));
    board.apply_move(1, 1, Player::X);
    assert!(!is_move_legal(&board, 1, 1));
    assert!(is_move_legal(&board, 0, 0));
}
