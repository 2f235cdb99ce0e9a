use crate::board::Board;
use crate::core::Colour;

/******************************************\
|==========================================|
|                  Perft                   |
|==========================================|
\******************************************/

/// # Perft
///
/// Counts the leaf nodes of the legal move tree to `depth` plies,
/// alternating colours from `colour`. The standard cross-check for move
/// generation: any divergence from published node counts pins down a
/// generation or apply/undo bug.
///
/// ## Examples
/// ```
/// use chesscore::board::Board;
/// use chesscore::core::Colour;
/// use chesscore::utils::perft;
///
/// let mut board = Board::default();
/// assert_eq!(perft(&mut board, Colour::White, 2), 400);
/// ```
pub fn perft(board: &mut Board, colour: Colour, depth: usize) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = board.legal_moves(colour);
    if depth == 1 {
        return moves.len() as u64;
    }

    let mut nodes = 0;
    for mv in moves {
        board.apply(mv);
        nodes += perft(board, !colour, depth - 1);
        board.undo();
    }
    nodes
}

/******************************************\
|==========================================|
|                Unit Tests                |
|==========================================|
\******************************************/
