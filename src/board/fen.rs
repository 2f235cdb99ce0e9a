use crate::board::Board;
use crate::core::*;

/******************************************\
|==========================================|
|             FEN Placement                |
|==========================================|
\******************************************/

/// Placement field of the standard starting position
pub const START_PLACEMENT: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

impl Board {
    /// # FEN placement field
    ///
    /// Renders the piece-placement field of a FEN record: ranks from 8 down
    /// to 1 joined by `/`, runs of empty squares collapsed into digits,
    /// White pieces uppercase.
    ///
    /// ## Examples
    /// ```
    /// use chesscore::board::Board;
    /// use chesscore::board::fen::START_PLACEMENT;
    ///
    /// assert_eq!(Board::default().fen_placement(), START_PLACEMENT);
    /// ```
    pub fn fen_placement(&self) -> String {
        let mut placement = String::new();

        for rank in Rank::iter() {
            if rank != Rank::Rank8 {
                placement.push('/');
            }

            let mut empty_run = 0u8;
            for file in File::iter() {
                match self.piece_at(Square::from_parts(file, rank)) {
                    Some(piece) => {
                        if empty_run > 0 {
                            placement.push((b'0' + empty_run) as char);
                            empty_run = 0;
                        }
                        placement.push(piece.fen_char());
                    }
                    None => empty_run += 1,
                }
            }
            if empty_run > 0 {
                placement.push((b'0' + empty_run) as char);
            }
        }

        placement
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

    #[test]
    fn test_start_placement() {
        assert_eq!(Board::default().fen_placement(), START_PLACEMENT);
    }

    #[test]
    fn test_empty_board_placement() {
        assert_eq!(Board::empty().fen_placement(), "8/8/8/8/8/8/8/8");
    }

    #[test]
    fn test_placement_after_open_game() {
        let mut board = Board::default();
        let white_pawn = board.piece_at(E2).unwrap();
        board.apply(Move::new(E2, E4, white_pawn, None));
        let black_pawn = board.piece_at(C7).unwrap();
        board.apply(Move::new(C7, C5, black_pawn, None));

        assert_eq!(
            board.fen_placement(),
            "rnbqkbnr/pp1ppppp/8/2p5/4P3/8/PPPP1PPP/RNBQKBNR"
        );
    }

    #[test]
    fn test_interior_empty_runs() {
        let mut board = Board::empty();
        board.set_piece(A1, Some(Piece::new(PieceKind::King, Colour::White)));
        board.set_piece(D1, Some(Piece::new(PieceKind::Rook, Colour::White)));
        board.set_piece(H1, Some(Piece::new(PieceKind::King, Colour::Black)));

        assert_eq!(board.fen_placement(), "8/8/8/8/8/8/8/K2R3k");
    }
}
