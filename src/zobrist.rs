use lazy_static::lazy_static;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::game_state::Player;
use crate::point::Point;

/// Extent of the key table; boards can't be larger than this.
pub const MAX_BOARD_SIZE: usize = 19;

const KEY_SEED: u64 = 0x67e3779b97f4a7c1;

lazy_static! {
    static ref TABLE: ZobristTable = ZobristTable::new();
}

/// One independent pseudorandom key per (point, color) pair, plus a constant
/// key for the empty board. Generated once per process from a fixed seed;
/// only within-run self-consistency matters.
struct ZobristTable {
    keys: Vec<u64>,
    empty_board: u64,
}

impl ZobristTable {
    fn new() -> ZobristTable {
        let mut rng = StdRng::seed_from_u64(KEY_SEED);
        let keys = (0..MAX_BOARD_SIZE * MAX_BOARD_SIZE * 2)
            .map(|_| rng.gen())
            .collect();
        ZobristTable { keys, empty_board: rng.gen() }
    }

    fn key(&self, point: Point, color: Player) -> u64 {
        assert!(point.row >= 1 && point.row <= MAX_BOARD_SIZE);
        assert!(point.col >= 1 && point.col <= MAX_BOARD_SIZE);
        let color_offset = match color {
            Player::Black => 0,
            Player::White => 1,
        };
        self.keys[((point.row - 1) * MAX_BOARD_SIZE + (point.col - 1)) * 2 + color_offset]
    }
}

/// The key XOR-ed into a board's hash when a `color` stone sits on `point`,
/// and XOR-ed back out when it's removed.
pub fn key(point: Point, color: Player) -> u64 {
    TABLE.key(point, color)
}

pub fn empty_board() -> u64 {
    TABLE.empty_board
}
