#![allow(dead_code)]

pub mod point;
pub mod zobrist;
pub mod board;
pub mod game_state;
pub mod eye;
pub mod test_utils;
