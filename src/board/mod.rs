pub mod fen;
pub mod movegen;
pub mod movement;

use crate::core::*;

/******************************************\
|==========================================|
|                Constants                 |
|==========================================|
\******************************************/

/// Back-rank piece pattern from the a-file to the h-file
const BACK_ROW: [PieceKind; File::NUM] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/******************************************\
|==========================================|
|                Undo Log                  |
|==========================================|
\******************************************/

/// One entry of the board's undo log, recorded when a move is applied.
///
/// The entry captures everything reversal needs: the prior moved-flags of
/// the mover (and the castling rook, when relevant) and the piece actually
/// taken off the board. Undo is a pure function of this record; nothing is
/// re-derived from board state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct UndoEntry {
    pub(crate) mv: Move,
    pub(crate) piece_had_moved: bool,
    pub(crate) rook_had_moved: bool,
    pub(crate) displaced: Option<Piece>,
}

/******************************************\
|==========================================|
|                  Board                   |
|==========================================|
\******************************************/

/// # Board representation
///
/// An 8x8 grid of optional pieces plus the undo log of applied moves.
/// The log is strictly LIFO: moves are reversed through [`Board::undo`]
/// only, newest first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    grid: [Option<Piece>; Square::NUM],
    history: Vec<UndoEntry>,
}

/******************************************\
|==========================================|
|           Basic Implementation           |
|==========================================|
\******************************************/

impl Default for Board {
    /// The standard starting position
    fn default() -> Board {
        let mut board = Board::empty();
        board.reset();
        board
    }
}

impl Board {
    /// Creates a board with no pieces and no history
    pub fn empty() -> Board {
        Board {
            grid: [None; Square::NUM],
            history: Vec::new(),
        }
    }

    /// Clears the history and places the standard starting position
    pub fn reset(&mut self) {
        self.grid = [None; Square::NUM];
        self.history.clear();
        self.setup_side(Colour::Black);
        self.setup_side(Colour::White);
    }

    fn setup_side(&mut self, colour: Colour) {
        let back = unsafe { Rank::from_unchecked(colour.back_row() as u8) };
        let pawns = unsafe { Rank::from_unchecked(colour.pawn_row() as u8) };
        for file in File::iter() {
            self.grid[Square::from_parts(file, back).index()] =
                Some(Piece::new(BACK_ROW[file.index()], colour));
            self.grid[Square::from_parts(file, pawns).index()] =
                Some(Piece::new(PieceKind::Pawn, colour));
        }
    }

    /// Returns a copy of the piece on `square`, if any
    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.grid[square.index()]
    }

    /// Places (or clears) a board slot directly. Setup/test surface; does
    /// not touch the history
    #[inline]
    pub fn set_piece(&mut self, square: Square, piece: Option<Piece>) {
        self.grid[square.index()] = piece;
    }

    /// Returns the most recently applied move still on the undo log
    #[inline]
    pub fn last_move(&self) -> Option<&Move> {
        self.history.last().map(|entry| &entry.mv)
    }

    /// Number of moves currently applied and reversible
    #[inline]
    pub fn history_len(&self) -> usize {
        self.history.len()
    }
}

/******************************************\
|==========================================|
|                 Display                  |
|==========================================|
\******************************************/

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        const SEPARATOR: &str = "\n     +---+---+---+---+---+---+---+---+";

        writeln!(f, "{}", SEPARATOR)?;

        for rank in Rank::iter() {
            write!(f, " {}   |", rank)?;

            for file in File::iter() {
                let square = Square::from_parts(file, rank);
                let cell = match self.piece_at(square) {
                    Some(piece) => piece.to_string(),
                    None => " ".to_string(),
                };
                write!(f, " {} |", cell)?;
            }

            writeln!(f, "{}", SEPARATOR)?;
        }

        writeln!(f)?;
        writeln!(f, "       A   B   C   D   E   F   G   H")?;
        writeln!(f)?;
        writeln!(f, "Placement: {}", self.fen_placement())?;

        Ok(())
    }
}

/******************************************\
|==========================================|
|                Unit Tests                |
|==========================================|
\******************************************/
