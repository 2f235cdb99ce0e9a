// Core module exports

mod macros;

pub mod moves;
pub mod piece;
pub mod square;
pub mod types;

// Re-export common types for easier access
pub use moves::{Move, MoveKind};
pub use piece::{ParsePieceError, Piece, PieceKind};
pub use square::{
    File, InvalidCoordinate, ParseFileError, ParseRankError, ParseSquareError, Rank, Square,
};
pub use types::Colour;
