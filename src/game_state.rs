use std::rc::Rc;

use crate::board::Board;
use crate::point::Point;
use self::Player::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Player {
    Black,
    White,
}

impl Player {
    pub fn other(&self) -> Player {
        match self {
            Black => White,
            White => Black,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Move {
    Play(Point),
    Pass,
    Resign,
}

#[derive(Copy, Clone, PartialEq, Debug)]
pub enum GameStatus {
    InProgress,
    Over,
}

/// Why a proposed move is illegal. These are expected, user-facing signals;
/// only bypassing `validate_move` and hitting `Board::place_stone`'s
/// preconditions is treated as a caller bug.
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum MoveError {
    GameOver,
    OffGrid,
    Occupied,
    SelfCapture,
    Ko,
}

/// One node in the game history: a frozen board, the player to move, and a
/// backward link to the previous node.
///
/// The chain is append-only. `apply_move` mutates a private clone of the
/// board before wrapping it, so a board inside a node is never written again;
/// Pass and Resign share the previous node's board outright.
#[derive(Clone, Debug)]
pub struct GameState {
    pub board: Rc<Board>,
    pub next_player: Player,
    previous: Option<Rc<GameState>>,
    pub last_move: Option<Move>,
}

impl GameState {
    pub fn new_game(board_size: usize) -> Rc<GameState> {
        GameState::new_game_rect(board_size, board_size)
    }

    pub fn new_game_rect(num_rows: usize, num_cols: usize) -> Rc<GameState> {
        Rc::new(GameState {
            board: Rc::new(Board::new(num_rows, num_cols)),
            next_player: Black,
            previous: None,
            last_move: None,
        })
    }

    pub fn previous_state(&self) -> Option<&Rc<GameState>> {
        self.previous.as_ref()
    }

    /// Apply a move for the current player and return the new head of the
    /// chain. Plays go through `Board::place_stone` on a clone, so callers
    /// are expected to have checked `is_valid_move` first.
    pub fn apply_move(self: Rc<Self>, mv: Move) -> Rc<GameState> {
        let next_board = match mv {
            Move::Play(point) => {
                let mut board = (*self.board).clone();
                board.place_stone(self.next_player, point);
                Rc::new(board)
            },
            Move::Pass | Move::Resign => Rc::clone(&self.board),
        };
        let next_player = self.next_player.other();
        Rc::new(GameState {
            board: next_board,
            next_player,
            last_move: Some(mv),
            previous: Some(self),
        })
    }

    /// The game ends on a resignation or on two consecutive passes.
    pub fn is_over(&self) -> bool {
        let last_move = match self.last_move {
            Some(mv) => mv,
            None => return false,
        };
        if last_move == Move::Resign {
            return true;
        }
        match self.previous.as_ref().and_then(|prev| prev.last_move) {
            Some(second_last) => last_move == Move::Pass && second_last == Move::Pass,
            None => false,
        }
    }

    pub fn status(&self) -> GameStatus {
        if self.is_over() {
            GameStatus::Over
        } else {
            GameStatus::InProgress
        }
    }

    /// Would this play leave the played stone's own string with zero
    /// liberties? Simulated on a disposable clone; suicide is rejected
    /// outright, never resolved as a capture of one's own stones.
    pub fn is_move_self_capture(&self, player: Player, mv: Move) -> bool {
        let point = match mv {
            Move::Play(point) => point,
            Move::Pass | Move::Resign => return false,
        };
        let mut next_board = (*self.board).clone();
        next_board.place_stone(player, point);
        next_board.get_go_string(point)
            .map_or(false, |string| string.num_liberties() == 0)
    }

    /// The pair the superko rule protects: who moves next, on what board.
    pub fn situation(&self) -> (Player, &Board) {
        (self.next_player, &self.board)
    }

    /// Situational superko: a play is illegal if it recreates any earlier
    /// (player-to-move, board content) pair. The walk is O(history depth);
    /// each comparison short-circuits on the boards' running hashes and only
    /// confirms a match by exact content (`Board::eq`), so a hash collision
    /// can never outlaw a legal move.
    pub fn does_move_violate_ko(&self, player: Player, mv: Move) -> bool {
        let point = match mv {
            Move::Play(point) => point,
            Move::Pass | Move::Resign => return false,
        };
        let mut next_board = (*self.board).clone();
        next_board.place_stone(player, point);
        let next_situation = (player.other(), &next_board);
        let mut past_state = self.previous.as_ref();
        while let Some(state) = past_state {
            if state.situation() == next_situation {
                return true;
            }
            past_state = state.previous.as_ref();
        }
        false
    }

    /// Full legality check. Once the game is over every move is rejected,
    /// passes and resignations included.
    pub fn validate_move(&self, mv: Move) -> Result<(), MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }
        let point = match mv {
            Move::Play(point) => point,
            Move::Pass | Move::Resign => return Ok(()),
        };
        if !self.board.is_on_grid(point) {
            return Err(MoveError::OffGrid);
        }
        if self.board.get(point).is_some() {
            return Err(MoveError::Occupied);
        }
        if self.is_move_self_capture(self.next_player, mv) {
            return Err(MoveError::SelfCapture);
        }
        if self.does_move_violate_ko(self.next_player, mv) {
            return Err(MoveError::Ko);
        }
        Ok(())
    }

    pub fn is_valid_move(&self, mv: Move) -> bool {
        self.validate_move(mv).is_ok()
    }

    /// Every legal move for the current player: all legal plays plus Pass
    /// and Resign. Empty once the game is over.
    pub fn legal_moves(&self) -> Vec<Move> {
        if self.is_over() {
            return Vec::new();
        }
        let mut moves = Vec::new();
        for row in 1..=self.board.num_rows {
            for col in 1..=self.board.num_cols {
                let mv = Move::Play(Point::new(row, col));
                if self.is_valid_move(mv) {
                    moves.push(mv);
                }
            }
        }
        moves.push(Move::Pass);
        moves.push(Move::Resign);
        moves
    }
}
