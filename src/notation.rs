//! Standard algebraic notation, parsed and rendered against live board
//! state rather than a position grammar: tokens resolve through the
//! current legal move set.

use thiserror::Error;

use crate::board::Board;
use crate::core::*;

/******************************************\
|==========================================|
|                 Errors                   |
|==========================================|
\******************************************/

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotationError {
    /// The token does not follow algebraic notation
    #[error("invalid algebraic notation: {0:?}")]
    InvalidToken(String),
    /// The token is well formed but matches no legal move
    #[error("no legal move matches: {0:?}")]
    NoMatchingMove(String),
}

/******************************************\
|==========================================|
|                 Parsing                  |
|==========================================|
\******************************************/

/// # Parse a SAN token
///
/// Resolves `text` against the legal moves of `colour` on `board`. Check
/// and annotation suffixes (`+`, `#`, `!`, `?`) are ignored. A promotion
/// suffix such as `=Q` is attached to the matched pawn move.
///
/// The board is borrowed mutably because legality probing applies and
/// undoes candidate moves; the position is unchanged on return.
///
/// ## Examples
/// ```
/// use chesscore::board::Board;
/// use chesscore::core::{Colour, Square};
/// use chesscore::notation;
///
/// let mut board = Board::default();
/// let mv = notation::parse("e4", &mut board, Colour::White).unwrap();
/// assert_eq!((mv.from(), mv.to()), (Square::E2, Square::E4));
/// ```
pub fn parse(text: &str, board: &mut Board, colour: Colour) -> Result<Move, NotationError> {
    let token = text.trim().trim_end_matches(['+', '#', '!', '?']);
    if token.is_empty() {
        return Err(NotationError::InvalidToken(text.to_string()));
    }

    let legal = board.legal_moves(colour);

    if let Some(king_side) = castle_token(token) {
        return legal
            .iter()
            .copied()
            .find(|mv| mv.kind() == MoveKind::Castle { king_side })
            .ok_or_else(|| NotationError::NoMatchingMove(token.to_string()));
    }

    let invalid = || NotationError::InvalidToken(text.to_string());

    // Promotion suffix comes last in the token
    let (body, promotion) = match token.split_once('=') {
        Some((body, suffix)) => {
            let kind = parse_promotion_suffix(suffix).ok_or_else(invalid)?;
            (body, Some(kind))
        }
        None => (token, None),
    };

    // The destination square is always the final two characters
    if body.len() < 2 || !body.is_ascii() {
        return Err(invalid());
    }
    let (head, dest) = body.split_at(body.len() - 2);
    let to: Square = dest.parse().map_err(|_| invalid())?;

    // Optional leading piece letter; pawns carry none. Only uppercase
    // counts, so a pawn-capture file such as the b in "bxc3" is never
    // mistaken for a bishop.
    let (kind, head) = match head.chars().next() {
        Some(symbol) if symbol.is_ascii_uppercase() => (
            PieceKind::from_notation_symbol(symbol).ok_or_else(invalid)?,
            &head[1..],
        ),
        _ => (PieceKind::Pawn, head),
    };

    let (disambiguator, capture) = match head.strip_suffix('x') {
        Some(rest) => (rest, true),
        None => (head, false),
    };
    let (src_file, src_rank) = parse_disambiguator(disambiguator).ok_or_else(invalid)?;

    // Promotions are only meaningful for a pawn reaching the far edge
    if promotion.is_some() && kind != PieceKind::Pawn {
        return Err(invalid());
    }

    // Under-disambiguated tokens resolve to the first match in board-scan
    // order. Accepted looseness, documented; callers wanting strictness
    // supply full disambiguation.
    let matched = legal
        .iter()
        .copied()
        .find(|mv| {
            mv.piece().kind == kind
                && mv.to() == to
                && (!capture || mv.is_capture())
                && src_file.is_none_or(|file| mv.from().file() == file)
                && src_rank.is_none_or(|rank| mv.from().rank() == rank)
        })
        .ok_or_else(|| NotationError::NoMatchingMove(token.to_string()))?;

    match promotion {
        Some(kind) if matched.to().row() == (!colour).back_row() => {
            Ok(matched.with_promotion(kind))
        }
        Some(_) => Err(invalid()),
        None => Ok(matched),
    }
}

fn castle_token(token: &str) -> Option<bool> {
    match token {
        "O-O" | "0-0" => Some(true),
        "O-O-O" | "0-0-0" => Some(false),
        _ => None,
    }
}

fn parse_promotion_suffix(suffix: &str) -> Option<PieceKind> {
    let mut chars = suffix.chars();
    let kind = PieceKind::from_notation_symbol(chars.next()?)?;
    if chars.next().is_some() {
        return None;
    }
    matches!(
        kind,
        PieceKind::Knight | PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen
    )
    .then_some(kind)
}

/// `""`, `"e"`, `"4"`, or `"e4"` ahead of the destination
fn parse_disambiguator(text: &str) -> Option<(Option<File>, Option<Rank>)> {
    let mut chars = text.chars();
    match (chars.next(), chars.next(), chars.next()) {
        (None, ..) => Some((None, None)),
        (Some(file @ 'a'..='h'), None, _) => Some((Some(file_of(file)), None)),
        (Some(rank @ '1'..='8'), None, _) => Some((None, Some(rank_of(rank)))),
        (Some(file @ 'a'..='h'), Some(rank @ '1'..='8'), None) => {
            Some((Some(file_of(file)), Some(rank_of(rank))))
        }
        _ => None,
    }
}

fn file_of(letter: char) -> File {
    // Caller has range-checked the character
    unsafe { File::from_unchecked(letter as u8 - b'a') }
}

fn rank_of(digit: char) -> Rank {
    unsafe { Rank::from_unchecked(b'8' - digit as u8) }
}

/******************************************\
|==========================================|
|                Rendering                 |
|==========================================|
\******************************************/

/// # Render a move in SAN
///
/// `mv` must be legal for `colour` on `board`. Disambiguation is minimal:
/// the source file alone when it settles the origin, otherwise the source
/// rank alone, otherwise both. No check or mate marker is appended; those
/// are annotations this codec accepts on input and never produces.
pub fn format(mv: &Move, board: &mut Board, colour: Colour) -> String {
    let mut san = String::new();

    match mv.kind() {
        MoveKind::Castle { king_side: true } => san.push_str("O-O"),
        MoveKind::Castle { king_side: false } => san.push_str("O-O-O"),
        _ => {
            let kind = mv.piece().kind;
            if kind == PieceKind::Pawn {
                if mv.is_capture() {
                    san.push(mv.from().file().letter());
                }
            } else {
                san.push(kind.notation_symbol());
                push_disambiguation(&mut san, mv, board, colour);
            }

            if mv.is_capture() {
                san.push('x');
            }
            san.push_str(&mv.to().to_string());

            if let Some(kind) = mv.promotion() {
                san.push('=');
                san.push(kind.notation_symbol());
            }
        }
    }

    san
}

fn push_disambiguation(san: &mut String, mv: &Move, board: &mut Board, colour: Colour) {
    let rivals: Vec<Square> = board
        .legal_moves(colour)
        .iter()
        .filter(|other| {
            other.piece().kind == mv.piece().kind
                && other.to() == mv.to()
                && other.from() != mv.from()
        })
        .map(|other| other.from())
        .collect();
    if rivals.is_empty() {
        return;
    }

    let file_settles = rivals.iter().all(|sq| sq.file() != mv.from().file());
    let rank_settles = rivals.iter().all(|sq| sq.rank() != mv.from().rank());

    if file_settles {
        san.push(mv.from().file().letter());
    } else if rank_settles {
        san.push((b'0' + mv.from().rank().digit()) as char);
    } else {
        san.push(mv.from().file().letter());
        san.push((b'0' + mv.from().rank().digit()) as char);
    }
}

/******************************************\
|==========================================|
|                Unit Tests                |
|==========================================|
\******************************************/
