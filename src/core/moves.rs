use crate::core::{Piece, PieceKind, Square};

/******************************************\
|==========================================|
|                Move Kind                 |
|==========================================|
\******************************************/

/// Classification of a board transition, fixed when the move is built.
///
/// Promotion is the one exception: a pawn push to the last row is generated
/// as `Normal`/`Capture` and the chosen piece kind is attached with
/// [`Move::with_promotion`] before the move is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveKind {
    Normal,
    Capture,
    EnPassant,
    Castle { king_side: bool },
    Promotion(PieceKind),
}

/******************************************\
|==========================================|
|                   Move                   |
|==========================================|
\******************************************/

/// # Move representation
///
/// An immutable descriptor of one transition: the squares involved, a copy
/// of the moved piece as it stood when the move was built, the captured
/// piece if any, and the move-kind classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    from: Square,
    to: Square,
    piece: Piece,
    captured: Option<Piece>,
    kind: MoveKind,
}

impl Move {
    /// Creates a plain move; the kind is `Capture` when a captured piece is
    /// given and `Normal` otherwise
    pub const fn new(from: Square, to: Square, piece: Piece, captured: Option<Piece>) -> Self {
        let kind = match captured {
            Some(_) => MoveKind::Capture,
            None => MoveKind::Normal,
        };
        Move {
            from,
            to,
            piece,
            captured,
            kind,
        }
    }

    /// Creates an en passant capture; `captured` is the pawn that just
    /// double-pushed, which does not sit on the destination square
    pub const fn en_passant(from: Square, to: Square, piece: Piece, captured: Piece) -> Self {
        Move {
            from,
            to,
            piece,
            captured: Some(captured),
            kind: MoveKind::EnPassant,
        }
    }

    /// Creates a castling move described by the king's two-square hop
    pub const fn castle(from: Square, to: Square, piece: Piece, king_side: bool) -> Self {
        Move {
            from,
            to,
            piece,
            captured: None,
            kind: MoveKind::Castle { king_side },
        }
    }

    /// Returns a copy of this move carrying a promotion choice.
    ///
    /// This is the only sanctioned change after construction and must happen
    /// before the move is applied.
    pub const fn with_promotion(self, kind: PieceKind) -> Self {
        Move {
            from: self.from,
            to: self.to,
            piece: self.piece,
            captured: self.captured,
            kind: MoveKind::Promotion(kind),
        }
    }

    #[inline]
    pub const fn from(&self) -> Square {
        self.from
    }

    #[inline]
    pub const fn to(&self) -> Square {
        self.to
    }

    #[inline]
    pub const fn piece(&self) -> Piece {
        self.piece
    }

    #[inline]
    pub const fn captured(&self) -> Option<Piece> {
        self.captured
    }

    #[inline]
    pub const fn kind(&self) -> MoveKind {
        self.kind
    }

    /// True when the move takes a piece off the board, including en passant
    #[inline]
    pub const fn is_capture(&self) -> bool {
        self.captured.is_some()
    }

    #[inline]
    pub const fn is_en_passant(&self) -> bool {
        matches!(self.kind, MoveKind::EnPassant)
    }

    #[inline]
    pub const fn is_castle(&self) -> bool {
        matches!(self.kind, MoveKind::Castle { .. })
    }

    /// Returns the promotion piece kind when one has been attached
    #[inline]
    pub const fn promotion(&self) -> Option<PieceKind> {
        match self.kind {
            MoveKind::Promotion(kind) => Some(kind),
            _ => None,
        }
    }

    /// True for a pawn move that advanced exactly two rows (feeds the
    /// en passant rule and the FEN target-square field)
    #[inline]
    pub const fn is_double_push(&self) -> bool {
        matches!(self.piece.kind, PieceKind::Pawn) && Square::row_dist(self.from, self.to) == 2
    }

    /// True when both moves describe the same square-to-square transition,
    /// ignoring the kind and any attached flags
    #[inline]
    pub const fn same_squares(&self, other: &Move) -> bool {
        self.from as u8 == other.from as u8 && self.to as u8 == other.to as u8
    }
}

impl std::fmt::Display for Move {
    /// Simple coordinate form for history display, independent of SAN
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
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
    use crate::core::{Colour, Square::*};

    fn pawn(colour: Colour) -> Piece {
        Piece::new(PieceKind::Pawn, colour)
    }

    #[test]
    fn test_plain_move_kind() {
        let quiet = Move::new(E2, E4, pawn(Colour::White), None);
        assert_eq!(quiet.kind(), MoveKind::Normal);
        assert!(!quiet.is_capture());

        let captured = Piece::new(PieceKind::Knight, Colour::Black);
        let capture = Move::new(E4, D5, pawn(Colour::White), Some(captured));
        assert_eq!(capture.kind(), MoveKind::Capture);
        assert!(capture.is_capture());
        assert_eq!(capture.captured(), Some(captured));
    }

    #[test]
    fn test_en_passant_move() {
        let target = pawn(Colour::Black);
        let mv = Move::en_passant(E4, D3, pawn(Colour::White), target);
        assert!(mv.is_en_passant());
        assert!(mv.is_capture());
        assert_eq!(mv.captured(), Some(target));
    }

    #[test]
    fn test_castle_move() {
        let king = Piece::new(PieceKind::King, Colour::White);
        let short = Move::castle(E1, G1, king, true);
        let long = Move::castle(E1, C1, king, false);
        assert!(short.is_castle());
        assert_eq!(short.kind(), MoveKind::Castle { king_side: true });
        assert_eq!(long.kind(), MoveKind::Castle { king_side: false });
        assert!(!short.is_capture());
    }

    #[test]
    fn test_promotion_attachment() {
        let push = Move::new(A7, A8, pawn(Colour::White), None);
        let promo = push.with_promotion(PieceKind::Queen);
        assert_eq!(promo.promotion(), Some(PieceKind::Queen));
        assert_eq!(push.promotion(), None);
        assert!(promo.same_squares(&push));
    }

    #[test]
    fn test_double_push_detection() {
        assert!(Move::new(E2, E4, pawn(Colour::White), None).is_double_push());
        assert!(Move::new(D7, D5, pawn(Colour::Black), None).is_double_push());
        assert!(!Move::new(E2, E3, pawn(Colour::White), None).is_double_push());

        let knight = Piece::new(PieceKind::Knight, Colour::White);
        assert!(!Move::new(G1, F3, knight, None).is_double_push());
    }

    #[test]
    fn test_display_is_coordinate_pair() {
        let mv = Move::new(E2, E4, pawn(Colour::White), None);
        assert_eq!(mv.to_string(), "e2 -> e4");
    }
}
