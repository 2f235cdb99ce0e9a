//! # Chesscore
//!
//! A chess rules library: board state, legal move generation, algebraic
//! notation, FEN export and a replayable game session.
pub mod board;
pub mod core;
pub mod game;
pub mod notation;
pub mod utils;

pub use board::Board;
pub use core::*;
pub use game::{Game, GameState};
