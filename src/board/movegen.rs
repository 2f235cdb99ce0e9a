use crate::board::Board;
use crate::core::*;

/******************************************\
|==========================================|
|            Direction Tables              |
|==========================================|
\******************************************/

/// (file, row) deltas. Rows grow towards rank 1.
const ORTHOGONALS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
const DIAGONALS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];
const KING_OFFSETS: [(i8, i8); 8] = [
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
];

/// Pseudo-legal generator for one piece kind, indexed by its tag.
/// Castling is generated separately so attack scans stay non-recursive.
type Generator = fn(&Board, Square, Piece, &mut Vec<Move>);

const GENERATORS: [Generator; PieceKind::NUM] = [
    pawn_moves,
    knight_moves,
    bishop_moves,
    rook_moves,
    queen_moves,
    king_moves,
];

/******************************************\
|==========================================|
|         Per-Kind Generation              |
|==========================================|
\******************************************/

fn pawn_moves(board: &Board, from: Square, piece: Piece, out: &mut Vec<Move>) {
    let forward = piece.colour.forward();

    // Single push
    if let Some(to) = from.offset(0, forward) {
        if board.piece_at(to).is_none() {
            out.push(Move::new(from, to, piece, None));

            // Double push from the starting row
            if from.row() == piece.colour.pawn_row() {
                if let Some(to) = from.offset(0, 2 * forward) {
                    if board.piece_at(to).is_none() {
                        out.push(Move::new(from, to, piece, None));
                    }
                }
            }
        }
    }

    // Diagonal captures
    for df in [-1, 1] {
        if let Some(to) = from.offset(df, forward) {
            if let Some(target) = board.piece_at(to) {
                if target.colour != piece.colour {
                    out.push(Move::new(from, to, piece, Some(target)));
                }
            }
        }
    }

    en_passant_moves(board, from, piece, out);
}

/// En passant: only from the capture row, only against an enemy pawn that
/// just double-pushed onto an adjacent file of that same row.
fn en_passant_moves(board: &Board, from: Square, piece: Piece, out: &mut Vec<Move>) {
    if from.row() != piece.colour.en_passant_row() {
        return;
    }
    let Some(last) = board.last_move() else {
        return;
    };
    if last.piece().kind != PieceKind::Pawn
        || last.piece().colour == piece.colour
        || !last.is_double_push()
    {
        return;
    }
    if last.to().row() != from.row() || Square::file_dist(last.to(), from) != 1 {
        return;
    }

    let Some(victim) = board.piece_at(last.to()) else {
        return;
    };
    let df = last.to().file() as i8 - from.file() as i8;
    if let Some(to) = from.offset(df, piece.colour.forward()) {
        out.push(Move::en_passant(from, to, piece, victim));
    }
}

fn knight_moves(board: &Board, from: Square, piece: Piece, out: &mut Vec<Move>) {
    step_moves(board, from, piece, &KNIGHT_OFFSETS, out);
}

fn bishop_moves(board: &Board, from: Square, piece: Piece, out: &mut Vec<Move>) {
    slide_moves(board, from, piece, &DIAGONALS, out);
}

fn rook_moves(board: &Board, from: Square, piece: Piece, out: &mut Vec<Move>) {
    slide_moves(board, from, piece, &ORTHOGONALS, out);
}

fn queen_moves(board: &Board, from: Square, piece: Piece, out: &mut Vec<Move>) {
    slide_moves(board, from, piece, &ORTHOGONALS, out);
    slide_moves(board, from, piece, &DIAGONALS, out);
}

fn king_moves(board: &Board, from: Square, piece: Piece, out: &mut Vec<Move>) {
    step_moves(board, from, piece, &KING_OFFSETS, out);
}

/// Fixed-offset movers (knight and king steps)
fn step_moves(
    board: &Board,
    from: Square,
    piece: Piece,
    offsets: &[(i8, i8)],
    out: &mut Vec<Move>,
) {
    for &(df, dr) in offsets {
        let Some(to) = from.offset(df, dr) else {
            continue;
        };
        match board.piece_at(to) {
            None => out.push(Move::new(from, to, piece, None)),
            Some(target) if target.colour != piece.colour => {
                out.push(Move::new(from, to, piece, Some(target)));
            }
            Some(_) => {}
        }
    }
}

/// Sliding movers: walk each ray until the edge or the first occupant
fn slide_moves(
    board: &Board,
    from: Square,
    piece: Piece,
    directions: &[(i8, i8)],
    out: &mut Vec<Move>,
) {
    for &(df, dr) in directions {
        let mut current = from;
        while let Some(to) = current.offset(df, dr) {
            match board.piece_at(to) {
                None => {
                    out.push(Move::new(from, to, piece, None));
                    current = to;
                }
                Some(target) => {
                    if target.colour != piece.colour {
                        out.push(Move::new(from, to, piece, Some(target)));
                    }
                    break;
                }
            }
        }
    }
}

/******************************************\
|==========================================|
|           Board-Level Queries            |
|==========================================|
\******************************************/

impl Board {
    /// Pseudo-legal moves for the piece on `from`. Never includes
    /// castling; check exposure is not filtered.
    pub(crate) fn pseudo_moves(&self, from: Square, piece: Piece, out: &mut Vec<Move>) {
        GENERATORS[piece.kind.index()](self, from, piece, out);
    }

    /// Castle moves currently available to the king on `from`
    pub(crate) fn castling_moves(&self, from: Square, piece: Piece, out: &mut Vec<Move>) {
        if piece.kind != PieceKind::King || piece.has_moved {
            return;
        }
        for king_side in [true, false] {
            if self.can_castle(from, piece, king_side) {
                let to_file = if king_side { File::FileG } else { File::FileC };
                let to = Square::from_parts(to_file, from.rank());
                out.push(Move::castle(from, to, piece, king_side));
            }
        }
    }

    fn can_castle(&self, from: Square, king: Piece, king_side: bool) -> bool {
        let rank = from.rank();
        let (rook_file, _) = Board::castle_rook_files(king_side);

        // An unmoved rook of the same colour must still sit in the corner
        let rook_square = Square::from_parts(rook_file, rank);
        let rook_ok = self.piece_at(rook_square).is_some_and(|rook| {
            rook.kind == PieceKind::Rook && rook.colour == king.colour && !rook.has_moved
        });
        if !rook_ok {
            return false;
        }

        // Every square strictly between king and rook must be empty
        let (low, high) = if king_side {
            (from.file().index() + 1, rook_file.index())
        } else {
            (rook_file.index() + 1, from.file().index())
        };
        for file_index in low..high {
            let file = unsafe { File::from_unchecked(file_index as u8) };
            if self.piece_at(Square::from_parts(file, rank)).is_some() {
                return false;
            }
        }

        // The king may not castle out of, through, or into attack
        let step: i8 = if king_side { 1 } else { -1 };
        let enemy = !king.colour;
        for leg in 0..=2 {
            let Some(square) = from.offset(step * leg, 0) else {
                return false;
            };
            if self.is_square_attacked(square, enemy) {
                return false;
            }
        }

        true
    }

    /// # Attack scan
    ///
    /// Whether any piece of colour `by` pseudo-legally attacks `square`.
    /// Castling never attacks anything, so the scan cannot recurse.
    pub fn is_square_attacked(&self, square: Square, by: Colour) -> bool {
        let mut scratch = Vec::new();
        for sq in Square::iter() {
            let Some(piece) = self.piece_at(sq) else {
                continue;
            };
            if piece.colour != by {
                continue;
            }
            scratch.clear();
            self.pseudo_moves(sq, piece, &mut scratch);
            if scratch.iter().any(|mv| mv.to() == square) {
                return true;
            }
        }
        false
    }

    /// Whether the king of `colour` is attacked. A board with no such
    /// king reports no check.
    pub fn is_king_in_check(&self, colour: Colour) -> bool {
        let Some(king_square) = self.king_square(colour) else {
            return false;
        };
        self.is_square_attacked(king_square, !colour)
    }

    /// Locates the king of `colour`, scanning file-major from the a-file
    pub fn king_square(&self, colour: Colour) -> Option<Square> {
        for file in File::iter() {
            for rank in Rank::iter() {
                let square = Square::from_parts(file, rank);
                if let Some(piece) = self.piece_at(square) {
                    if piece.kind == PieceKind::King && piece.colour == colour {
                        return Some(square);
                    }
                }
            }
        }
        None
    }

    /// # Legal move generation
    ///
    /// All legal moves for `colour`, in deterministic board-scan order:
    /// files a through h, each file scanned from rank 8 down to rank 1.
    /// Pseudo-legal candidates (plus castling) are filtered by applying
    /// each on the board, testing the mover's king for check, and undoing.
    ///
    /// ## Examples
    /// ```
    /// use chesscore::board::Board;
    /// use chesscore::core::Colour;
    ///
    /// let mut board = Board::default();
    /// assert_eq!(board.legal_moves(Colour::White).len(), 20);
    /// ```
    pub fn legal_moves(&mut self, colour: Colour) -> Vec<Move> {
        let mut candidates = Vec::new();

        for file in File::iter() {
            for rank in Rank::iter() {
                let from = Square::from_parts(file, rank);
                let Some(piece) = self.piece_at(from) else {
                    continue;
                };
                if piece.colour != colour {
                    continue;
                }
                self.pseudo_moves(from, piece, &mut candidates);
                self.castling_moves(from, piece, &mut candidates);
            }
        }

        let mut legal = Vec::with_capacity(candidates.len());
        for mv in candidates {
            self.apply(mv);
            let exposed = self.is_king_in_check(colour);
            self.undo();
            if !exposed {
                legal.push(mv);
            }
        }
        legal
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

    fn find_move(moves: &[Move], from: Square, to: Square) -> Option<Move> {
        moves.iter().copied().find(|mv| mv.from() == from && mv.to() == to)
    }

    #[test]
    fn test_twenty_opening_moves() {
        let mut board = Board::default();
        let moves = board.legal_moves(Colour::White);
        assert_eq!(moves.len(), 20);
        assert_eq!(board.legal_moves(Colour::Black).len(), 20);
    }

    #[test]
    fn test_pawn_double_push_blocked() {
        let mut board = Board::default();
        board.set_piece(E3, Some(Piece::new(PieceKind::Knight, Colour::Black)));
        let moves = board.legal_moves(Colour::White);
        assert!(find_move(&moves, E2, E3).is_none());
        assert!(find_move(&moves, E2, E4).is_none());
    }

    #[test]
    fn test_rook_rays_stop_at_blockers() {
        let mut board = Board::empty();
        board.set_piece(A1, Some(Piece::new(PieceKind::King, Colour::White)));
        board.set_piece(H8, Some(Piece::new(PieceKind::King, Colour::Black)));
        board.set_piece(D4, Some(Piece::new(PieceKind::Rook, Colour::White)));
        board.set_piece(D6, Some(Piece::new(PieceKind::Pawn, Colour::Black)));
        board.set_piece(F4, Some(Piece::new(PieceKind::Pawn, Colour::White)));

        let moves = board.legal_moves(Colour::White);
        let capture = find_move(&moves, D4, D6).unwrap();
        assert!(capture.is_capture());
        assert!(find_move(&moves, D4, D7).is_none());
        assert!(find_move(&moves, D4, E4).is_some());
        assert!(find_move(&moves, D4, F4).is_none());
    }

    #[test]
    fn test_knight_jumps_over_pieces() {
        let mut board = Board::default();
        let moves = board.legal_moves(Colour::White);
        assert!(find_move(&moves, G1, F3).is_some());
        assert!(find_move(&moves, G1, H3).is_some());
        assert!(find_move(&moves, G1, E2).is_none());
    }

    #[test]
    fn test_pinned_piece_cannot_move() {
        let mut board = Board::empty();
        board.set_piece(E1, Some(Piece::new(PieceKind::King, Colour::White)));
        board.set_piece(E4, Some(Piece::new(PieceKind::Knight, Colour::White)));
        board.set_piece(E8, Some(Piece::new(PieceKind::Rook, Colour::Black)));
        board.set_piece(A8, Some(Piece::new(PieceKind::King, Colour::Black)));

        let moves = board.legal_moves(Colour::White);
        assert!(moves.iter().all(|mv| mv.from() != E4));
    }

    #[test]
    fn test_check_must_be_resolved() {
        let mut board = Board::empty();
        board.set_piece(E1, Some(Piece::new(PieceKind::King, Colour::White)));
        board.set_piece(E8, Some(Piece::new(PieceKind::Rook, Colour::Black)));
        board.set_piece(A8, Some(Piece::new(PieceKind::King, Colour::Black)));
        board.set_piece(A3, Some(Piece::new(PieceKind::Rook, Colour::White)));

        assert!(board.is_king_in_check(Colour::White));
        let moves = board.legal_moves(Colour::White);
        // Step aside, block, or capture along the e-file only
        assert!(moves.iter().all(|mv| {
            mv.piece().kind == PieceKind::King && mv.to().file() != File::FileE
                || mv.to().file() == File::FileE
        }));
        assert!(find_move(&moves, A3, E3).is_some());
    }

    #[test]
    fn test_en_passant_offered_then_expired() {
        let mut board = Board::default();
        let moves = [
            (E2, E4),
            (A7, A6),
            (E4, E5),
            (D7, D5),
        ];
        for (from, to) in moves {
            let piece = board.piece_at(from).unwrap();
            let captured = board.piece_at(to);
            board.apply(Move::new(from, to, piece, captured));
        }

        let legal = board.legal_moves(Colour::White);
        let ep = find_move(&legal, E5, D6).unwrap();
        assert!(ep.is_en_passant());

        let mut taken = board.clone();
        taken.apply(ep);
        assert_eq!(taken.piece_at(D5), None);
        assert_eq!(taken.piece_at(D6).unwrap().colour, Colour::White);

        // One intervening move on each side and the right lapses
        let knight = board.piece_at(G1).unwrap();
        board.apply(Move::new(G1, F3, knight, None));
        let knight = board.piece_at(B8).unwrap();
        board.apply(Move::new(B8, C6, knight, None));
        let legal = board.legal_moves(Colour::White);
        assert!(find_move(&legal, E5, D6).is_none());
    }

    #[test]
    fn test_en_passant_capture_for_black() {
        let mut board = Board::default();
        let moves = [
            (E2, E4),
            (D7, D5),
            (E4, D5),
            (E7, E5),
            (G1, F3),
            (E5, E4),
            (D2, D4),
        ];
        for (from, to) in moves {
            let piece = board.piece_at(from).unwrap();
            let captured = board.piece_at(to);
            board.apply(Move::new(from, to, piece, captured));
        }

        let legal = board.legal_moves(Colour::Black);
        let ep = find_move(&legal, E4, D3).unwrap();
        assert!(ep.is_en_passant());

        board.apply(ep);
        assert_eq!(board.piece_at(D4), None);
        assert_eq!(board.piece_at(D3).unwrap().colour, Colour::Black);
    }

    #[test]
    fn test_castling_kingside_available() {
        let mut board = Board::default();
        board.set_piece(F1, None);
        board.set_piece(G1, None);

        let moves = board.legal_moves(Colour::White);
        let castle = find_move(&moves, E1, G1).unwrap();
        assert!(castle.is_castle());
    }

    #[test]
    fn test_castling_blocked_by_attack_on_transit() {
        let mut board = Board::default();
        board.set_piece(F1, None);
        board.set_piece(G1, None);
        // A rook eyeing f1 forbids the king from passing through it
        board.set_piece(F5, Some(Piece::new(PieceKind::Rook, Colour::Black)));
        board.set_piece(F2, None);

        let moves = board.legal_moves(Colour::White);
        assert!(find_move(&moves, E1, G1).is_none());
    }

    #[test]
    fn test_castling_denied_after_king_moved() {
        let mut board = Board::default();
        board.set_piece(F1, None);
        board.set_piece(G1, None);
        let mut king = board.piece_at(E1).unwrap();
        king.has_moved = true;
        board.set_piece(E1, Some(king));

        let moves = board.legal_moves(Colour::White);
        assert!(find_move(&moves, E1, G1).is_none());
    }

    #[test]
    fn test_castling_denied_after_rook_moved() {
        let mut board = Board::default();
        board.set_piece(F1, None);
        board.set_piece(G1, None);
        let rook = board.piece_at(H1).unwrap();
        board.apply(Move::new(H1, G1, rook, None));
        let rook = board.piece_at(G1).unwrap();
        board.apply(Move::new(G1, H1, rook, None));

        let moves = board.legal_moves(Colour::White);
        assert!(find_move(&moves, E1, G1).is_none());
    }

    #[test]
    fn test_castling_queenside_needs_b_file_clear() {
        let mut board = Board::default();
        board.set_piece(C1, None);
        board.set_piece(D1, None);

        // b1 still occupied by the knight
        let moves = board.legal_moves(Colour::White);
        assert!(find_move(&moves, E1, C1).is_none());

        board.set_piece(B1, None);
        let moves = board.legal_moves(Colour::White);
        let castle = find_move(&moves, E1, C1).unwrap();
        assert!(castle.is_castle());
    }

    #[test]
    fn test_check_detection() {
        let mut board = Board::empty();
        board.set_piece(E1, Some(Piece::new(PieceKind::King, Colour::White)));
        board.set_piece(A8, Some(Piece::new(PieceKind::King, Colour::Black)));
        assert!(!board.is_king_in_check(Colour::White));

        board.set_piece(B4, Some(Piece::new(PieceKind::Knight, Colour::Black)));
        assert!(!board.is_king_in_check(Colour::White));
        board.set_piece(D3, Some(Piece::new(PieceKind::Knight, Colour::Black)));
        assert!(board.is_king_in_check(Colour::White));
    }

    #[test]
    fn test_kingless_board_reports_no_check() {
        let board = Board::empty();
        assert!(!board.is_king_in_check(Colour::White));
        assert!(!board.is_king_in_check(Colour::Black));
    }
}
