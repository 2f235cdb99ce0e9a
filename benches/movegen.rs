use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use chesscore::board::Board;
use chesscore::core::Colour;
use chesscore::utils::perft;

fn bench_legal_moves(c: &mut Criterion) {
    c.bench_function("legal_moves startpos", |b| {
        let mut board = Board::default();
        b.iter(|| black_box(board.legal_moves(Colour::White)));
    });
}

fn bench_perft(c: &mut Criterion) {
    c.bench_function("perft 3 startpos", |b| {
        let mut board = Board::default();
        b.iter(|| black_box(perft(&mut board, Colour::White, 3)));
    });
}

criterion_group!(benches, bench_legal_moves, bench_perft);
criterion_main!(benches);
