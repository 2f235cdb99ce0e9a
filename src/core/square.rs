use thiserror::Error;

/******************************************\
|==========================================|
|                 Squares                  |
|==========================================|
\******************************************/

/// # Square representation
///
/// - Represents the squares of a chess board
/// - Variants are declared row-major from the far edge, so the discriminant
///   is `row * 8 + file` with row 0 being the rank-8 edge

#[rustfmt::skip]
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Square {
    A8, B8, C8, D8, E8, F8, G8, H8,
    A7, B7, C7, D7, E7, F7, G7, H7,
    A6, B6, C6, D6, E6, F6, G6, H6,
    A5, B5, C5, D5, E5, F5, G5, H5,
    A4, B4, C4, D4, E4, F4, G4, H4,
    A3, B3, C3, D3, E3, F3, G3, H3,
    A2, B2, C2, D2, E2, F2, G2, H2,
    A1, B1, C1, D1, E1, F1, G1, H1,
}

impl Square {
    /// Number of elements in the Square enum
    pub const NUM: usize = 64;
}

crate::impl_from_to_primitive!(Square);
crate::impl_enum_iter!(Square);

/******************************************\
|==========================================|
|                  Ranks                   |
|==========================================|
\******************************************/

/// # Ranks representation
///
/// - Represents the ranks of a chess board
/// - Declared from rank 8 down so the discriminant is the row index
///   (row = 8 - rank digit)

#[rustfmt::skip]
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Eq, Ord)]
pub enum Rank {
    Rank8, Rank7, Rank6, Rank5, Rank4, Rank3, Rank2, Rank1,
}

impl Rank {
    /// Number of elements in the Rank enum
    pub const NUM: usize = 8;
}

crate::impl_from_to_primitive!(Rank);
crate::impl_enum_iter!(Rank);

/******************************************\
|==========================================|
|                  Files                   |
|==========================================|
\******************************************/

/// # Files representation
///
/// - Represents the files of a chess board

#[rustfmt::skip]
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Eq, Ord)]
pub enum File {
    FileA, FileB, FileC, FileD, FileE, FileF, FileG, FileH,
}

impl File {
    /// Number of elements in the File enum
    pub const NUM: usize = 8;
}

crate::impl_from_to_primitive!(File);
crate::impl_enum_iter!(File);

/******************************************\
|==========================================|
|              Implementation              |
|==========================================|
\******************************************/

impl Square {
    /// Returns the rank of a square
    ///
    /// ## Examples
    ///
    /// ```
    /// use chesscore::core::{Square, Rank};
    ///
    /// assert_eq!(Square::A1.rank(), Rank::Rank1);
    /// assert_eq!(Square::E4.rank(), Rank::Rank4);
    /// assert_eq!(Square::H8.rank(), Rank::Rank8);
    /// ```
    pub const fn rank(&self) -> Rank {
        let row = (*self as u8) >> 3;
        unsafe { Rank::from_unchecked(row) }
    }

    /// Returns the file of a square
    pub const fn file(&self) -> File {
        let file_index = (*self as u8) & 0b111;
        unsafe { File::from_unchecked(file_index) }
    }

    /// Returns the row index of a square (0 = the rank-8 edge, 7 = the rank-1 edge)
    pub const fn row(&self) -> usize {
        (*self as usize) >> 3
    }

    /// Combines a pair of file and rank to create a square
    ///
    /// ## Examples
    ///
    /// ```
    /// use chesscore::core::{Square, File, Rank};
    ///
    /// assert_eq!(Square::from_parts(File::FileA, Rank::Rank1), Square::A1);
    /// assert_eq!(Square::from_parts(File::FileE, Rank::Rank4), Square::E4);
    /// assert_eq!(Square::from_parts(File::FileH, Rank::Rank8), Square::H8);
    /// ```
    pub const fn from_parts(file: File, rank: Rank) -> Self {
        let index = ((rank as u8) << 3) + (file as u8);
        unsafe { Self::from_unchecked(index) }
    }

    /// Builds a square from raw grid coordinates, failing on out-of-range input
    ///
    /// ## Examples
    ///
    /// ```
    /// use chesscore::core::{Square, InvalidCoordinate};
    ///
    /// assert_eq!(Square::try_from_coords(0, 0), Ok(Square::A8));
    /// assert_eq!(Square::try_from_coords(4, 4), Ok(Square::E4));
    /// assert_eq!(Square::try_from_coords(8, 0), Err(InvalidCoordinate { file: 8, row: 0 }));
    /// ```
    pub const fn try_from_coords(file: i8, row: i8) -> Result<Self, InvalidCoordinate> {
        if file >= 0 && file < 8 && row >= 0 && row < 8 {
            Ok(unsafe { Self::from_unchecked((row as u8) << 3 | file as u8) })
        } else {
            Err(InvalidCoordinate { file, row })
        }
    }

    /// Shifts the square by a (file, row) delta, returning `None` when the
    /// result would fall off the board
    ///
    /// ## Examples
    ///
    /// ```
    /// use chesscore::core::Square;
    ///
    /// assert_eq!(Square::E4.offset(0, -1), Some(Square::E5));
    /// assert_eq!(Square::A1.offset(-1, 0), None);
    /// assert_eq!(Square::H8.offset(0, -1), None);
    /// ```
    pub const fn offset(self, df: i8, dr: i8) -> Option<Square> {
        match Self::try_from_coords(self.file() as i8 + df, self.row() as i8 + dr) {
            Ok(sq) => Some(sq),
            Err(_) => None,
        }
    }

    /// Returns the absolute distance in the rows of two squares
    pub const fn row_dist(sq1: Square, sq2: Square) -> u8 {
        (sq1.row() as u8).abs_diff(sq2.row() as u8)
    }

    /// Returns the absolute distance in the files of two squares
    pub const fn file_dist(sq1: Square, sq2: Square) -> u8 {
        (sq1.file() as u8).abs_diff(sq2.file() as u8)
    }
}

impl Rank {
    /// Returns the row index of the rank (0 = rank 8, 7 = rank 1)
    pub const fn row(&self) -> usize {
        *self as usize
    }

    /// Returns the rank digit as printed in algebraic notation (1-8)
    pub const fn digit(&self) -> u8 {
        8 - *self as u8
    }

    /// Builds a rank from a row index, failing on out-of-range input
    pub const fn try_from_row(row: i8) -> Result<Self, InvalidCoordinate> {
        if row >= 0 && row < 8 {
            Ok(unsafe { Self::from_unchecked(row as u8) })
        } else {
            Err(InvalidCoordinate { file: 0, row })
        }
    }
}

impl File {
    /// Returns the file letter as printed in algebraic notation (a-h)
    pub const fn letter(&self) -> char {
        (b'a' + *self as u8) as char
    }
}

/******************************************\
|==========================================|
|                 Display                  |
|==========================================|
\******************************************/

impl std::fmt::Display for File {
    /// Displays the file in the form of its chess board representation (FileA => 'a')
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.letter())
    }
}

impl std::fmt::Display for Rank {
    /// Displays the rank in the form of its chess board representation (Rank1 => '1')
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", (b'0' + self.digit()) as char)
    }
}

impl std::fmt::Display for Square {
    /// Displays the square in the form of its chess board representation (Square::A1 => 'a1')
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.file(), self.rank())
    }
}

/******************************************\
|==========================================|
|              Parsing Strings             |
|==========================================|
\******************************************/

impl std::str::FromStr for File {
    type Err = ParseFileError;

    /// Parses the file string into a file, with error checking
    ///
    /// ## Examples
    ///
    /// ```
    /// use chesscore::core::{File, ParseFileError};
    /// use std::str::FromStr;
    ///
    /// assert_eq!(File::from_str("a").unwrap(), File::FileA);
    /// assert_eq!("h".parse::<File>().unwrap(), File::FileH);
    /// assert!(matches!("x".parse::<File>(), Err(ParseFileError::InvalidChar('x'))));
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 1 {
            return Err(ParseFileError::InvalidLength(s.len()));
        }

        let file_char = s.chars().next().unwrap();
        match file_char {
            'a'..='h' => unsafe { Ok(File::from_unchecked(file_char as u8 - b'a')) },
            _ => Err(ParseFileError::InvalidChar(file_char)),
        }
    }
}

impl std::str::FromStr for Rank {
    type Err = ParseRankError;

    /// Parses the rank string into a rank, with error checking
    ///
    /// ## Examples
    ///
    /// ```
    /// use chesscore::core::{Rank, ParseRankError};
    /// use std::str::FromStr;
    ///
    /// assert_eq!(Rank::from_str("1").unwrap(), Rank::Rank1);
    /// assert_eq!("8".parse::<Rank>().unwrap(), Rank::Rank8);
    /// assert!(matches!("9".parse::<Rank>(), Err(ParseRankError::InvalidChar('9'))));
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 1 {
            return Err(ParseRankError::InvalidLength(s.len()));
        }

        let rank_char = s.chars().next().unwrap();
        match rank_char {
            // Rank digits map to rows from the far edge (8 => row 0)
            '1'..='8' => unsafe { Ok(Rank::from_unchecked(b'8' - rank_char as u8)) },
            _ => Err(ParseRankError::InvalidChar(rank_char)),
        }
    }
}

impl std::str::FromStr for Square {
    type Err = ParseSquareError;

    /// Parses the square string into a square, with error checking
    ///
    /// ## Examples
    ///
    /// ```
    /// use chesscore::core::{Square, ParseSquareError};
    /// use std::str::FromStr;
    ///
    /// assert_eq!(Square::from_str("a1").unwrap(), Square::A1);
    /// assert_eq!("h8".parse::<Square>().unwrap(), Square::H8);
    /// assert!(matches!("e9".parse::<Square>(), Err(ParseSquareError::InvalidRankChar('9'))));
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Counted in characters, so a two-byte character cannot sneak
        // past a byte-length check
        let mut chars = s.chars();
        let (Some(file_char), Some(rank_char), None) = (chars.next(), chars.next(), chars.next())
        else {
            return Err(ParseSquareError::InvalidLength(s.chars().count()));
        };

        let file = file_char
            .to_string()
            .parse::<File>()
            .map_err(|_| ParseSquareError::InvalidFileChar(file_char))?;
        let rank = rank_char
            .to_string()
            .parse::<Rank>()
            .map_err(|_| ParseSquareError::InvalidRankChar(rank_char))?;

        Ok(Square::from_parts(file, rank))
    }
}

/******************************************\
|==========================================|
|            Coordinate Errors             |
|==========================================|
\******************************************/

/// Raw grid coordinates outside the 8x8 board
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("Invalid square coordinates: ({file}, {row})")]
pub struct InvalidCoordinate {
    pub file: i8,
    pub row: i8,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseFileError {
    #[error("Invalid length for file string: {0}, expected 1")]
    InvalidLength(usize),
    #[error("Invalid character for file string: '{0}', expected 'a'-'h'")]
    InvalidChar(char),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseRankError {
    #[error("Invalid length for rank string: {0}, expected 1")]
    InvalidLength(usize),
    #[error("Invalid character for rank string: '{0}', expected '1'-'8'")]
    InvalidChar(char),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseSquareError {
    #[error("Invalid length for square string: {0}, expected 2")]
    InvalidLength(usize),
    #[error("Invalid character for file string: '{0}', expected 'a'-'h'")]
    InvalidFileChar(char),
    #[error("Invalid character for rank string: '{0}', expected '1'-'8'")]
    InvalidRankChar(char),
}

/******************************************\
|==========================================|
|                Unit Tests                |
|==========================================|
\******************************************/
