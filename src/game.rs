//! Game session layer: turn order, the replayable move log, FEN export
//! and terminal-state detection on top of the raw board.

use crate::board::Board;
use crate::core::*;
use crate::notation::{self, NotationError};

/******************************************\
|==========================================|
|               Game State                 |
|==========================================|
\******************************************/

/// Verdict on the side to move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    InProgress,
    Checkmate,
    Stalemate,
}

/******************************************\
|==========================================|
|                  Game                    |
|==========================================|
\******************************************/

/// # Game session
///
/// Wraps a [`Board`] with turn alternation and a move log that supports
/// stepping backwards and forwards through the game. The log keeps the
/// forward tail after a rewind, so a rewound game can be replayed; making
/// a new move from the middle truncates that tail.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    turn: Colour,
    log: Vec<Move>,
    cursor: usize,
}

impl Default for Game {
    fn default() -> Game {
        Game::new()
    }
}

impl Game {
    /// A fresh game from the standard starting position, White to move
    pub fn new() -> Game {
        Game::from_position(Board::default(), Colour::White)
    }

    /// A game continuing from an arbitrary position
    pub fn from_position(board: Board, turn: Colour) -> Game {
        Game {
            board,
            turn,
            log: Vec::new(),
            cursor: 0,
        }
    }

    /// The underlying position
    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The side to move
    #[inline]
    pub fn turn(&self) -> Colour {
        self.turn
    }

    /// Moves played up to the current cursor position
    #[inline]
    pub fn history(&self) -> &[Move] {
        &self.log[..self.cursor]
    }

    /// Number of moves applied so far; 0 is the initial position
    #[inline]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Starts over: standard starting position, empty log, White to move
    pub fn reset(&mut self) {
        self.board.reset();
        self.turn = Colour::White;
        self.log.clear();
        self.cursor = 0;
    }

    /// All legal moves for the side to move
    pub fn legal_moves(&mut self) -> Vec<Move> {
        self.board.legal_moves(self.turn)
    }

    /// Legal moves for the side to move starting on `from`
    pub fn legal_moves_from(&mut self, from: Square) -> Vec<Move> {
        let mut moves = self.legal_moves();
        moves.retain(|mv| mv.from() == from);
        moves
    }

    /// Whether the side to move has its king attacked
    pub fn in_check(&self) -> bool {
        self.board.is_king_in_check(self.turn)
    }

    /// Checkmate, stalemate, or neither for the side to move
    pub fn game_state(&mut self) -> GameState {
        if !self.legal_moves().is_empty() {
            GameState::InProgress
        } else if self.in_check() {
            GameState::Checkmate
        } else {
            GameState::Stalemate
        }
    }
}

/******************************************\
|==========================================|
|              Making Moves                |
|==========================================|
\******************************************/

impl Game {
    /// # Play a move
    ///
    /// `candidate` is matched against the current legal moves by its
    /// source and destination squares only; the engine's own move record
    /// is what gets applied, so a caller-built candidate cannot smuggle
    /// in a bogus kind or capture. A promotion kind carried by the
    /// candidate is attached to the matched move when it actually applies
    /// (a pawn reaching the far edge, promoting to N/B/R/Q) and is
    /// ignored otherwise, like any other caller-set flag.
    ///
    /// Returns `false` (and leaves the game untouched) when no legal move
    /// matches; matching against the current turn's legal set is what
    /// enforces turn order.
    pub fn make_move(&mut self, candidate: &Move) -> bool {
        let Some(mut matched) = self
            .legal_moves()
            .into_iter()
            .find(|mv| mv.same_squares(candidate))
        else {
            return false;
        };
        if let Some(kind) = candidate.promotion() {
            if self.promotion_applies(&matched, kind) {
                matched = matched.with_promotion(kind);
            }
        }
        self.commit(matched);
        true
    }

    /// Whether attaching `kind` to `matched` describes a real promotion
    /// for the side to move
    fn promotion_applies(&self, matched: &Move, kind: PieceKind) -> bool {
        matches!(
            kind,
            PieceKind::Knight | PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen
        ) && matched.piece().kind == PieceKind::Pawn
            && matched.to().row() == (!self.turn).back_row()
    }

    /// Plays a move given in coordinate form, e.g. `e2e4` or `a7a8q`.
    /// The promotion letter is honoured only for a pawn reaching the far
    /// edge.
    pub fn make_move_uci(&mut self, text: &str) -> bool {
        let token = text.trim();
        if !(4..=5).contains(&token.len()) || !token.is_ascii() {
            return false;
        }
        let (Ok(from), Ok(to)) = (token[..2].parse::<Square>(), token[2..4].parse::<Square>())
        else {
            return false;
        };

        let Some(mut matched) = self
            .legal_moves()
            .into_iter()
            .find(|mv| mv.from() == from && mv.to() == to)
        else {
            return false;
        };

        if let Some(symbol) = token.chars().nth(4) {
            let Some(kind) = PieceKind::from_notation_symbol(symbol) else {
                return false;
            };
            if !self.promotion_applies(&matched, kind) {
                return false;
            }
            matched = matched.with_promotion(kind);
        }

        self.commit(matched);
        true
    }

    /// Plays one move given in algebraic notation
    pub fn make_move_san(&mut self, token: &str) -> Result<Move, NotationError> {
        let mv = notation::parse(token, &mut self.board, self.turn)?;
        self.commit(mv);
        Ok(mv)
    }

    /// Replays a whole line of algebraic notation, alternating colours.
    /// Stops at the first bad token, leaving the earlier moves played.
    pub fn replay_san(&mut self, tokens: &[&str]) -> Result<(), NotationError> {
        for token in tokens {
            self.make_move_san(token)?;
        }
        Ok(())
    }

    fn commit(&mut self, mv: Move) {
        self.log.truncate(self.cursor);
        self.board.apply(mv);
        self.log.push(mv);
        self.cursor += 1;
        self.turn = !self.turn;
    }
}

/******************************************\
|==========================================|
|               Navigation                 |
|==========================================|
\******************************************/

impl Game {
    /// Steps one move back. Returns `false` at the start of the game
    pub fn previous_move(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.board.undo();
        self.cursor -= 1;
        self.turn = !self.turn;
        true
    }

    /// Steps one move forward along the logged line. Returns `false` at
    /// the end
    pub fn next_move(&mut self) -> bool {
        let Some(&mv) = self.log.get(self.cursor) else {
            return false;
        };
        self.board.apply(mv);
        self.cursor += 1;
        self.turn = !self.turn;
        true
    }

    /// Rewinds to the position before any move was played
    pub fn go_to_first_move(&mut self) {
        while self.previous_move() {}
    }

    /// Fast-forwards to the end of the logged line
    pub fn go_to_last_move(&mut self) {
        while self.next_move() {}
    }
}

/******************************************\
|==========================================|
|               FEN Export                 |
|==========================================|
\******************************************/

impl Game {
    /// # FEN record of the current position
    ///
    /// All six fields. Castling rights are read off the board: a right
    /// stands while the king sits unmoved on its home square with the
    /// matching unmoved rook in its corner. The en passant target is set
    /// only when the move just played was a double pawn push. The
    /// halfmove clock counts plies since the last capture or pawn move
    /// within the current line.
    ///
    /// ## Examples
    /// ```
    /// use chesscore::game::Game;
    ///
    /// assert_eq!(
    ///     Game::new().fen(),
    ///     "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1"
    /// );
    /// ```
    pub fn fen(&self) -> String {
        format!(
            "{} {} {} {} {} {}",
            self.board.fen_placement(),
            self.turn.fen_char(),
            self.fen_castling(),
            self.fen_en_passant(),
            self.halfmove_clock(),
            self.cursor / 2 + 1,
        )
    }

    fn fen_castling(&self) -> String {
        let mut rights = String::new();
        for colour in [Colour::White, Colour::Black] {
            let back = unsafe { Rank::from_unchecked(colour.back_row() as u8) };
            let king_home = self
                .board
                .piece_at(Square::from_parts(File::FileE, back))
                .is_some_and(|piece| {
                    piece.kind == PieceKind::King && piece.colour == colour && !piece.has_moved
                });
            if !king_home {
                continue;
            }
            for (file, symbol) in [(File::FileH, 'K'), (File::FileA, 'Q')] {
                let rook_home = self
                    .board
                    .piece_at(Square::from_parts(file, back))
                    .is_some_and(|piece| {
                        piece.kind == PieceKind::Rook && piece.colour == colour && !piece.has_moved
                    });
                if rook_home {
                    rights.push(match colour {
                        Colour::White => symbol,
                        Colour::Black => symbol.to_ascii_lowercase(),
                    });
                }
            }
        }
        if rights.is_empty() {
            rights.push('-');
        }
        rights
    }

    fn fen_en_passant(&self) -> String {
        let Some(last) = self.history().last() else {
            return "-".to_string();
        };
        if !last.is_double_push() {
            return "-".to_string();
        }
        let skipped_row = (last.from().row() + last.to().row()) / 2;
        let rank = unsafe { Rank::from_unchecked(skipped_row as u8) };
        Square::from_parts(last.to().file(), rank).to_string()
    }

    fn halfmove_clock(&self) -> usize {
        self.history()
            .iter()
            .rev()
            .take_while(|mv| mv.piece().kind != PieceKind::Pawn && !mv.is_capture())
            .count()
    }
}

/******************************************\
|==========================================|
|                Unit Tests                |
|==========================================|
\******************************************/
