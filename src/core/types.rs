/******************************************\
|==========================================|
|                 Colours                  |
|==========================================|
\******************************************/

/// # Colour Representation
///
/// Represents the two colours in chess: White and Black.

#[rustfmt::skip]
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Colour {
    White,
    Black
}

impl Colour {
    /// Number of elements in the Colour enum
    pub const NUM: usize = 2;
}

crate::impl_from_to_primitive!(Colour);

/******************************************\
|==========================================|
|              Implementation              |
|==========================================|
\******************************************/

impl Colour {
    /// Returns the forward row delta for a colour.
    ///
    /// Rows count from the rank-8 edge, so White advances towards smaller
    /// row indices.
    pub const fn forward(&self) -> i8 {
        match self {
            Colour::White => -1,
            Colour::Black => 1,
        }
    }

    /// Returns the row where this colour's pawns start
    pub const fn pawn_row(&self) -> usize {
        match self {
            Colour::White => 6,
            Colour::Black => 1,
        }
    }

    /// Returns the row where this colour's back-rank pieces start
    pub const fn back_row(&self) -> usize {
        match self {
            Colour::White => 7,
            Colour::Black => 0,
        }
    }

    /// Returns the only row from which this colour's pawns may capture en passant
    pub const fn en_passant_row(&self) -> usize {
        match self {
            Colour::White => 3,
            Colour::Black => 4,
        }
    }

    /// Returns the FEN active-colour letter
    pub const fn fen_char(&self) -> char {
        match self {
            Colour::White => 'w',
            Colour::Black => 'b',
        }
    }
}

impl std::ops::Not for Colour {
    type Output = Self;

    /// Returns the opposite colour
    fn not(self) -> Self::Output {
        match self {
            Colour::White => Colour::Black,
            Colour::Black => Colour::White,
        }
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

    #[test]
    fn test_opposite_colour() {
        assert_eq!(!Colour::White, Colour::Black);
        assert_eq!(!Colour::Black, Colour::White);
    }

    #[test]
    fn test_colour_geometry() {
        assert_eq!(Colour::White.forward(), -1);
        assert_eq!(Colour::Black.forward(), 1);
        assert_eq!(Colour::White.pawn_row(), 6);
        assert_eq!(Colour::Black.pawn_row(), 1);
        assert_eq!(Colour::White.back_row(), 7);
        assert_eq!(Colour::Black.back_row(), 0);
        assert_eq!(Colour::White.en_passant_row(), 3);
        assert_eq!(Colour::Black.en_passant_row(), 4);
    }

    #[test]
    fn test_fen_char() {
        assert_eq!(Colour::White.fen_char(), 'w');
        assert_eq!(Colour::Black.fen_char(), 'b');
    }
}
