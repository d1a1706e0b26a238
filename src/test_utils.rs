use std::collections::HashSet;
use std::fmt::Debug;
use std::hash::Hash;
use std::rc::Rc;

use crate::board::Board;
use crate::game_state::{GameState, Move};
use crate::game_state::Player::*;
use crate::point::Point;

/// Assert the move is legal, then apply it.
pub fn check_move(game: Rc<GameState>, mv: Move) -> Rc<GameState> {
    assert!(game.is_valid_move(mv), "expected {:?} to be legal, got {:?}",
        mv, game.validate_move(mv));
    game.apply_move(mv)
}

/// Play a sequence of (row, col) plays with the colors alternating from
/// whoever is to move, asserting legality at each step.
pub fn play_sequence(mut game: Rc<GameState>, moves: &[(usize, usize)]) -> Rc<GameState> {
    for &(row, col) in moves {
        game = check_move(game, Move::Play(Point::new(row, col)));
    }
    game
}

/// Build a board from rows of '.', 'x' (black) and 'o' (white). Stones are
/// placed in reading order through `place_stone`, so a diagram must not
/// depend on a stone that the scan would capture along the way.
pub fn board_from_diagram(rows: &[&str]) -> Board {
    let num_rows = rows.len();
    let num_cols = rows[0].len();
    let mut board = Board::new(num_rows, num_cols);
    for (i, row) in rows.iter().enumerate() {
        assert_eq!(row.len(), num_cols);
        for (j, cell) in row.chars().enumerate() {
            let point = Point::new(i + 1, j + 1);
            match cell {
                'x' => board.place_stone(Black, point),
                'o' => board.place_stone(White, point),
                '.' => {},
                _ => panic!("unknown diagram cell {:?}", cell),
            }
        }
    }
    board
}

pub fn draw_board(board: &Board) {
    for row in 1..=board.num_rows {
        let mut line = String::new();
        for col in 1..=board.num_cols {
            line.push(match board.get(Point::new(row, col)) {
                Some(Black) => 'x',
                Some(White) => 'o',
                None => '.',
            });
        }
        println!("{}", line);
    }
}

/// Check the central group bookkeeping invariant: every string's recorded
/// liberties are exactly the empty on-grid points orthogonally adjacent to
/// its stones.
pub fn assert_liberty_invariant(board: &Board) {
    for row in 1..=board.num_rows {
        for col in 1..=board.num_cols {
            let point = Point::new(row, col);
            let string = match board.get_go_string(point) {
                Some(string) => string,
                None => continue,
            };
            assert!(string.stones.contains(&point),
                "grid cell {:?} maps to a string that doesn't contain it", point);
            let mut expected = HashSet::new();
            for &stone in &string.stones {
                for neighbor in stone.neighbors() {
                    if board.is_on_grid(neighbor) && board.get(neighbor).is_none() {
                        expected.insert(neighbor);
                    }
                }
            }
            assert_eq!(string.liberties, expected,
                "liberty set out of sync for the string at {:?}", point);
        }
    }
}

pub fn assert_set_equality<T>(got: Vec<T>, expected: Vec<T>)
    where T: Clone + Eq + Hash + Debug {
    let got_hash: HashSet<T> = got.iter().cloned().collect();
    let expected_hash: HashSet<T> = expected.iter().cloned().collect();
    if got_hash != expected_hash {
        let unwanted: HashSet<&T> = got_hash.difference(&expected_hash).collect();
        let needed: HashSet<&T> = expected_hash.difference(&got_hash).collect();
        panic!("set inequality! expected len {}, got {}\nmissing {:?}\nunwanted {:?}",
            expected_hash.len(), got_hash.len(), needed, unwanted);
    }
}
