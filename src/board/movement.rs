use crate::board::Board;
use crate::board::UndoEntry;
use crate::core::*;

/******************************************\
|==========================================|
|              Move Execution              |
|==========================================|
\******************************************/

impl Board {
    /// Rook source and destination files for a castle on either wing
    pub(crate) const fn castle_rook_files(king_side: bool) -> (File, File) {
        if king_side {
            (File::FileH, File::FileF)
        } else {
            (File::FileA, File::FileD)
        }
    }

    /// The square of the pawn removed by an en passant capture: the
    /// destination file on the capturer's starting row.
    pub(crate) fn en_passant_victim(mv: &Move) -> Square {
        Square::from_parts(mv.to().file(), mv.from().rank())
    }

    /// # Apply a move
    ///
    /// Executes `mv` on the board and pushes an undo-log entry recording
    /// whatever the move destroyed: the prior moved-flags of the mover
    /// (and rook, for castling) and the captured piece, if any.
    ///
    /// The move is taken at face value. Legality is the caller's concern;
    /// an empty source square leaves the board unchanged apart from the
    /// log entry.
    ///
    /// ## Examples
    /// ```
    /// use chesscore::board::Board;
    /// use chesscore::core::{Move, Square};
    ///
    /// let mut board = Board::default();
    /// let pawn = board.piece_at(Square::E2).unwrap();
    /// board.apply(Move::new(Square::E2, Square::E4, pawn, None));
    ///
    /// assert!(board.piece_at(Square::E2).is_none());
    /// assert!(board.piece_at(Square::E4).is_some());
    /// ```
    pub fn apply(&mut self, mv: Move) {
        let mut piece = self.set_piece_take(mv.from());
        let piece_had_moved = piece.is_some_and(|p| p.has_moved);
        if let Some(piece) = piece.as_mut() {
            piece.has_moved = true;
        }

        let displaced = match mv.kind() {
            MoveKind::EnPassant => {
                self.set_piece(mv.to(), piece);
                self.set_piece_take(Board::en_passant_victim(&mv))
            }
            _ => {
                let displaced = self.set_piece_take(mv.to());
                self.set_piece(mv.to(), piece);
                displaced
            }
        };

        let mut rook_had_moved = false;
        if let MoveKind::Castle { king_side } = mv.kind() {
            let rank = mv.from().rank();
            let (rook_from, rook_to) = Board::castle_rook_files(king_side);
            if let Some(mut rook) = self.set_piece_take(Square::from_parts(rook_from, rank)) {
                rook_had_moved = rook.has_moved;
                rook.has_moved = true;
                self.set_piece(Square::from_parts(rook_to, rank), Some(rook));
            }
        }

        self.history.push(UndoEntry {
            mv,
            piece_had_moved,
            rook_had_moved,
            displaced,
        });
    }

    /// # Undo the last applied move
    ///
    /// Pops the newest undo-log entry and reverses it, restoring piece
    /// placement and moved-flags exactly as they were before the matching
    /// [`Board::apply`]. Returns the reversed move, or `None` on an empty
    /// log.
    pub fn undo(&mut self) -> Option<Move> {
        let entry = self.history.pop()?;
        let mv = entry.mv;

        let mut piece = self.set_piece_take(mv.to());
        if let Some(piece) = piece.as_mut() {
            piece.has_moved = entry.piece_had_moved;
        }
        self.set_piece(mv.from(), piece);

        match mv.kind() {
            MoveKind::EnPassant => {
                self.set_piece(Board::en_passant_victim(&mv), entry.displaced);
            }
            MoveKind::Castle { king_side } => {
                let rank = mv.from().rank();
                let (rook_from, rook_to) = Board::castle_rook_files(king_side);
                if let Some(mut rook) = self.set_piece_take(Square::from_parts(rook_to, rank)) {
                    rook.has_moved = entry.rook_had_moved;
                    self.set_piece(Square::from_parts(rook_from, rank), Some(rook));
                }
            }
            _ => {
                self.set_piece(mv.to(), entry.displaced);
            }
        }

        Some(mv)
    }

    /// Removes and returns the piece on `square`
    #[inline]
    fn set_piece_take(&mut self, square: Square) -> Option<Piece> {
        let piece = self.piece_at(square);
        self.set_piece(square, None);
        piece
    }
}

/******************************************\
|==========================================|
|                Unit Tests                |
|==========================================|
\******************************************/

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Square::*;

    fn piece_on(board: &Board, square: Square) -> Piece {
        board.piece_at(square).unwrap()
    }

    #[test]
    fn test_apply_quiet_move() {
        let mut board = Board::default();
        let pawn = piece_on(&board, E2);
        board.apply(Move::new(E2, E4, pawn, None));

        assert_eq!(board.piece_at(E2), None);
        let moved = piece_on(&board, E4);
        assert_eq!(moved.kind, PieceKind::Pawn);
        assert!(moved.has_moved);
        assert_eq!(board.last_move().unwrap().to(), E4);
    }

    #[test]
    fn test_apply_capture_and_undo() {
        let mut board = Board::empty();
        let rook = Piece::new(PieceKind::Rook, Colour::White);
        let knight = Piece::new(PieceKind::Knight, Colour::Black);
        board.set_piece(A1, Some(rook));
        board.set_piece(A8, Some(knight));

        board.apply(Move::new(A1, A8, rook, Some(knight)));
        assert_eq!(board.piece_at(A1), None);
        assert_eq!(piece_on(&board, A8).kind, PieceKind::Rook);

        let undone = board.undo().unwrap();
        assert_eq!(undone.from(), A1);
        assert_eq!(board.piece_at(A1), Some(rook));
        assert_eq!(board.piece_at(A8), Some(knight));
    }

    #[test]
    fn test_undo_restores_moved_flag() {
        let mut board = Board::default();
        let pawn = piece_on(&board, D2);
        board.apply(Move::new(D2, D4, pawn, None));
        assert!(piece_on(&board, D4).has_moved);

        board.undo();
        assert!(!piece_on(&board, D2).has_moved);
    }

    #[test]
    fn test_undo_is_lifo() {
        let mut board = Board::default();
        let white_pawn = piece_on(&board, E2);
        let black_pawn = piece_on(&board, E7);
        board.apply(Move::new(E2, E4, white_pawn, None));
        board.apply(Move::new(E7, E5, black_pawn, None));

        assert_eq!(board.undo().map(|mv| mv.from()), Some(E7));
        assert_eq!(board.undo().map(|mv| mv.from()), Some(E2));
        assert_eq!(board.undo(), None);
    }

    #[test]
    fn test_castle_kingside_moves_rook() {
        let mut board = Board::default();
        board.set_piece(F1, None);
        board.set_piece(G1, None);
        let king = piece_on(&board, E1);

        board.apply(Move::castle(E1, G1, king, true));

        assert_eq!(piece_on(&board, G1).kind, PieceKind::King);
        assert_eq!(piece_on(&board, F1).kind, PieceKind::Rook);
        assert_eq!(board.piece_at(H1), None);
        assert!(piece_on(&board, F1).has_moved);
    }

    #[test]
    fn test_castle_queenside_undo() {
        let mut board = Board::default();
        board.set_piece(B8, None);
        board.set_piece(C8, None);
        board.set_piece(D8, None);
        let king = piece_on(&board, E8);

        board.apply(Move::castle(E8, C8, king, false));
        assert_eq!(piece_on(&board, C8).kind, PieceKind::King);
        assert_eq!(piece_on(&board, D8).kind, PieceKind::Rook);

        board.undo();
        assert_eq!(piece_on(&board, E8).kind, PieceKind::King);
        assert_eq!(piece_on(&board, A8).kind, PieceKind::Rook);
        assert!(!piece_on(&board, E8).has_moved);
        assert!(!piece_on(&board, A8).has_moved);
        assert_eq!(board.piece_at(C8), None);
        assert_eq!(board.piece_at(D8), None);
    }

    #[test]
    fn test_en_passant_removes_bypassing_pawn() {
        let mut board = Board::empty();
        let mut white_pawn = Piece::new(PieceKind::Pawn, Colour::White);
        white_pawn.has_moved = true;
        let black_pawn = Piece::new(PieceKind::Pawn, Colour::Black);
        board.set_piece(E5, Some(white_pawn));
        board.set_piece(D5, Some(black_pawn));

        board.apply(Move::en_passant(E5, D6, white_pawn, black_pawn));

        assert_eq!(piece_on(&board, D6).kind, PieceKind::Pawn);
        assert_eq!(piece_on(&board, D6).colour, Colour::White);
        assert_eq!(board.piece_at(D5), None);
        assert_eq!(board.piece_at(E5), None);

        board.undo();
        assert_eq!(board.piece_at(D6), None);
        assert_eq!(piece_on(&board, E5).colour, Colour::White);
        assert_eq!(piece_on(&board, D5).colour, Colour::Black);
    }

    #[test]
    fn test_promotion_keeps_pawn_kind_on_board() {
        let mut board = Board::empty();
        let mut pawn = Piece::new(PieceKind::Pawn, Colour::White);
        pawn.has_moved = true;
        board.set_piece(A7, Some(pawn));

        let mv = Move::new(A7, A8, pawn, None).with_promotion(PieceKind::Queen);
        board.apply(mv);

        // The chosen kind travels on the move record; the board slot still
        // holds a pawn.
        assert_eq!(piece_on(&board, A8).kind, PieceKind::Pawn);
        assert_eq!(board.last_move().unwrap().promotion(), Some(PieceKind::Queen));
    }

    #[test]
    fn test_apply_empty_source_is_tolerated() {
        let mut board = Board::empty();
        let ghost = Piece::new(PieceKind::Bishop, Colour::White);
        board.apply(Move::new(C1, H6, ghost, None));

        assert_eq!(board.piece_at(C1), None);
        assert_eq!(board.piece_at(H6), None);
        assert!(board.undo().is_some());
    }
}
