use thiserror::Error;

use crate::core::Colour;

/******************************************\
|==========================================|
|               Piece Kinds                |
|==========================================|
\******************************************/

/// # Piece kind representation
///
/// - Represents the different chess piece types

#[rustfmt::skip]
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PieceKind {
    Pawn, Knight, Bishop, Rook, Queen, King,
}

impl PieceKind {
    /// Number of elements in the PieceKind enum
    pub const NUM: usize = 6;
}

crate::impl_from_to_primitive!(PieceKind);
crate::impl_enum_iter!(PieceKind);

/// Lowercase FEN characters indexed by piece kind
const KIND_STR: &str = "pnbrqk";

impl PieceKind {
    /// Returns the uppercase letter used for this kind in algebraic notation.
    ///
    /// Pawns have no prefix letter in SAN but still map to 'P' for
    /// promotion suffixes and debugging output.
    pub fn notation_symbol(&self) -> char {
        KIND_STR
            .chars()
            .nth(self.index())
            .unwrap()
            .to_ascii_uppercase()
    }

    /// Parses an uppercase or lowercase notation letter into a piece kind
    ///
    /// ## Examples
    ///
    /// ```
    /// use chesscore::core::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_notation_symbol('N'), Some(PieceKind::Knight));
    /// assert_eq!(PieceKind::from_notation_symbol('q'), Some(PieceKind::Queen));
    /// assert_eq!(PieceKind::from_notation_symbol('x'), None);
    /// ```
    pub fn from_notation_symbol(symbol: char) -> Option<PieceKind> {
        let index = KIND_STR.chars().position(|c| c == symbol.to_ascii_lowercase())?;
        Some(unsafe { PieceKind::from_unchecked(index as u8) })
    }
}

impl std::fmt::Display for PieceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", KIND_STR.chars().nth(self.index()).unwrap())
    }
}

/******************************************\
|==========================================|
|                  Piece                   |
|==========================================|
\******************************************/

/// # Piece representation
///
/// A piece on the board: its kind, its colour, and whether it has moved
/// since the game started. The moved flag feeds castling rights and the
/// pawn double-push rule; only [`Board`](crate::board::Board) apply/undo
/// mutate it once the piece is placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    pub kind: PieceKind,
    pub colour: Colour,
    pub has_moved: bool,
}

impl Piece {
    /// Creates an unmoved piece
    pub const fn new(kind: PieceKind, colour: Colour) -> Self {
        Piece {
            kind,
            colour,
            has_moved: false,
        }
    }

    /// Returns the FEN character for this piece (uppercase for White)
    ///
    /// ## Examples
    ///
    /// ```
    /// use chesscore::core::{Colour, Piece, PieceKind};
    ///
    /// assert_eq!(Piece::new(PieceKind::King, Colour::White).fen_char(), 'K');
    /// assert_eq!(Piece::new(PieceKind::Pawn, Colour::Black).fen_char(), 'p');
    /// ```
    pub fn fen_char(&self) -> char {
        let base = KIND_STR.chars().nth(self.kind.index()).unwrap();
        match self.colour {
            Colour::White => base.to_ascii_uppercase(),
            Colour::Black => base,
        }
    }
}

impl std::fmt::Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.fen_char())
    }
}

/******************************************\
|==========================================|
|               Parse Piece                |
|==========================================|
\******************************************/

impl std::str::FromStr for Piece {
    type Err = ParsePieceError;

    /// Parses a single FEN character into a piece, with error checking
    ///
    /// ## Examples
    ///
    /// ```
    /// use chesscore::core::{Colour, ParsePieceError, Piece, PieceKind};
    ///
    /// assert_eq!("P".parse::<Piece>().unwrap(), Piece::new(PieceKind::Pawn, Colour::White));
    /// assert_eq!("k".parse::<Piece>().unwrap(), Piece::new(PieceKind::King, Colour::Black));
    /// assert!(matches!("X".parse::<Piece>(), Err(ParsePieceError::InvalidChar('X'))));
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 1 {
            return Err(ParsePieceError::InvalidLength(s.len()));
        }

        let piece_char = s.chars().next().ok_or(ParsePieceError::InvalidLength(0))?;
        let index = KIND_STR
            .chars()
            .position(|c| c == piece_char.to_ascii_lowercase())
            .ok_or(ParsePieceError::InvalidChar(piece_char))?;

        let kind = unsafe { PieceKind::from_unchecked(index as u8) };
        let colour = if piece_char.is_ascii_uppercase() {
            Colour::White
        } else {
            Colour::Black
        };

        Ok(Piece::new(kind, colour))
    }
}

/******************************************\
|==========================================|
|            Piece Parse Error             |
|==========================================|
\******************************************/

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParsePieceError {
    #[error("Invalid length for piece string: {0}, expected 1")]
    InvalidLength(usize),
    #[error("Invalid character for piece string: '{0}', expected one of 'pnbrqk'/'PNBRQK'")]
    InvalidChar(char),
}

/******************************************\
|==========================================|
|                Unit Tests                |
|==========================================|
\******************************************/
